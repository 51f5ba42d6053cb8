use chrono::Datelike;
use web_sys::HtmlMediaElement;
use yew::prelude::*;

use crate::config;
use crate::content::{Card, SiteContent};

#[derive(Properties, PartialEq)]
pub struct CardGridProps {
    pub cards: Vec<Card>,
    #[prop_or_default]
    pub audit_link: bool,
}

#[function_component(CardGrid)]
pub fn card_grid(props: &CardGridProps) -> Html {
    html! {
        <div class="card-grid">
            { for props.cards.iter().map(|card| html! {
                <article key={card.title.clone()} class="card">
                    <h3>{card.title.clone()}</h3>
                    <p>{card.blurb.clone()}</p>
                    {
                        if props.audit_link {
                            html! { <a href="#contact" class="card-link">{"Start Your Strategic Audit →"}</a> }
                        } else {
                            html! {}
                        }
                    }
                </article>
            }) }
        </div>
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    let on_video_error = Callback::from(|e: Event| {
        let src = e
            .target_dyn_into::<HtmlMediaElement>()
            .map(|video| video.current_src())
            .unwrap_or_default();
        gloo_console::warn!("Hero video failed to load", src);
    });

    html! {
        <header id="home" class="hero">
            <div aria-hidden="true" class="hero-background">
                <video
                    class="hero-video"
                    autoplay=true
                    muted=true
                    loop=true
                    playsinline=true
                    preload="metadata"
                    poster={config::asset_url("hero-poster.jpg")}
                    onerror={on_video_error}
                >
                    <source src={config::asset_url("hero.webm")} type="video/webm" />
                    <source src={config::asset_url("hero.mp4")} type="video/mp4" />
                </video>
                <div class="hero-overlay"></div>
                <div class="hero-glow"></div>
            </div>
            <div class="hero-content">
                <p class="hero-tagline">{"Where Industry Leaders Turn for Scalable Growth"}</p>
                <h1>
                    {"Strategic Growth for "}
                    <span class="gold-text">{"Driven Businesses"}</span>
                </h1>
                <p class="hero-lead">
                    {"Stelliform analyzes, optimizes, and scales purpose-driven businesses — removing inefficiencies, aligning operations and marketing, and building credibility that compounds."}
                </p>
                <div class="cta-group">
                    <a href="#contact" class="cta-primary">{"Book a Consultation"}</a>
                    <a href="#contact" class="cta-secondary">{"Start Your Strategic Audit"}</a>
                </div>
            </div>
        </header>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let content = use_memo(|_| SiteContent::load(), ());
    let year = chrono::Local::now().year();

    html! {
        <div class="landing-page">
            <Hero />

            <section id="services" class="light-section">
                <div class="section-inner">
                    <div class="section-heading">
                        <h2>{"Built in Layers, Measured for Growth"}</h2>
                        <p>{"Strengthen foundation → launch targeted initiatives → sustain growth."}</p>
                    </div>
                    <CardGrid cards={content.services.clone()} audit_link=true />
                </div>
            </section>

            <section id="why" class="light-section muted">
                <div class="section-inner">
                    <h2 class="section-title">
                        {"Why Choose "}<span class="gold-strong">{"Us?"}</span>
                    </h2>
                    <CardGrid cards={content.reasons.clone()} />
                </div>
            </section>

            <section id="contact" class="contact-section">
                <div class="section-inner contact-grid">
                    <div class="form-frame">
                        <iframe
                            src={config::CONTACT_FORM_URL}
                            title="Stelliform Contact Us"
                        />
                    </div>
                    <div class="contact-copy">
                        <h3>
                            {"Ready to Build Your "}
                            <span class="gold-text">{"Legacy?"}</span>
                        </h3>
                        <p>{"Tailored strategies to accelerate growth and build enduring credibility."}</p>
                        <div class="cta-group">
                            <a href="#contact" class="cta-primary">{"Book a Consultation"}</a>
                            <a href="#contact" class="cta-secondary">{"Start Your Strategic Audit"}</a>
                        </div>
                        <ul class="promises">
                            { for content.promises.iter().map(|p| html! { <li>{p.clone()}</li> }) }
                        </ul>
                    </div>
                </div>
            </section>

            <footer class="site-footer">
                {format!("© {} Stelliform LLC — Illuminating Excellence", year)}
            </footer>

            <style>
                {r#"
                    .hero {
                        position: relative;
                        min-height: 70vh;
                        display: grid;
                        place-items: center;
                        padding: 0 1.5rem;
                        overflow: hidden;
                    }
                    .hero-background {
                        position: absolute;
                        inset: 0;
                        z-index: 0;
                    }
                    .hero-video {
                        position: absolute;
                        inset: 0;
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        filter: saturate(.85) brightness(.9) contrast(1.05);
                    }
                    .hero-overlay {
                        position: absolute;
                        inset: 0;
                        background: rgba(0, 0, 0, 0.55);
                    }
                    .hero-glow {
                        position: absolute;
                        inset: 0;
                        pointer-events: none;
                        background:
                            radial-gradient(60vmax 60vmax at 12% 85%, color-mix(in srgb, var(--brand-gold) 12%, transparent), transparent 60%),
                            radial-gradient(50vmax 50vmax at 82% 18%, color-mix(in srgb, var(--brand-gold-2) 10%, transparent), transparent 60%);
                    }
                    .hero-content {
                        position: relative;
                        z-index: 10;
                        text-align: center;
                        max-width: 56rem;
                    }
                    .hero-tagline {
                        display: inline-block;
                        padding: 0.5rem 1rem;
                        border-radius: 9999px;
                        background: rgba(255, 255, 255, 0.1);
                        border: 1px solid rgba(255, 255, 255, 0.2);
                        font-size: 0.75rem;
                        letter-spacing: 0.1em;
                    }
                    .hero h1 {
                        margin-top: 1.5rem;
                        font-size: clamp(3rem, 8vw, 4.5rem);
                        font-weight: 900;
                        line-height: 0.9;
                    }
                    .hero-lead {
                        margin: 1.5rem auto 0;
                        max-width: 48rem;
                        color: rgba(255, 255, 255, 0.9);
                    }
                    .gold-text {
                        background: linear-gradient(90deg, var(--brand-gold-strong), var(--brand-gold), var(--brand-gold-2));
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }
                    .gold-strong {
                        color: var(--brand-gold-strong);
                    }
                    .cta-group {
                        margin-top: 2rem;
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1rem;
                        justify-content: center;
                    }
                    .cta-primary {
                        padding: 1rem 2rem;
                        border-radius: 1rem;
                        font-weight: 600;
                        color: #000;
                        text-decoration: none;
                        background: linear-gradient(90deg, var(--brand-gold-strong), var(--brand-gold));
                        box-shadow: 0 18px 40px rgba(230, 183, 10, .45);
                    }
                    .cta-secondary {
                        padding: 1rem 2rem;
                        border-radius: 1rem;
                        border: 2px solid rgba(255, 255, 255, .25);
                        font-weight: 600;
                        color: #fff;
                        text-decoration: none;
                        background: rgba(255, 255, 255, 0.1);
                    }
                    .light-section {
                        scroll-margin-top: 6rem;
                        background: linear-gradient(135deg, #f8fafc, #fff, #f8fafc);
                        color: #0f172a;
                    }
                    .light-section.muted {
                        background: #f8fafc;
                    }
                    .section-inner {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 4rem 1.5rem;
                    }
                    .section-heading, .section-title {
                        text-align: center;
                        max-width: 48rem;
                        margin: 0 auto;
                    }
                    .section-heading h2, .section-title {
                        font-size: clamp(2.25rem, 5vw, 3rem);
                        font-weight: 800;
                    }
                    .section-heading p {
                        color: #475569;
                    }
                    .card-grid {
                        margin-top: 2.5rem;
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(20rem, 1fr));
                        gap: 1.5rem;
                    }
                    .card {
                        padding: 1.5rem;
                        border-radius: 1.5rem;
                        background: #fff;
                        box-shadow: 0 4px 6px rgba(15, 23, 42, 0.08);
                        border: 1px solid #e2e8f0;
                    }
                    .card p {
                        color: #475569;
                    }
                    .card-link {
                        display: inline-block;
                        margin-top: 0.75rem;
                        font-weight: 600;
                        color: var(--brand-gold-strong);
                    }
                    .contact-section {
                        scroll-margin-top: 6rem;
                        background: linear-gradient(180deg, var(--brand-ink), #0f172a, var(--brand-ink));
                        padding: 1rem 0;
                    }
                    .contact-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(22rem, 1fr));
                        gap: 2rem;
                        align-items: start;
                    }
                    .form-frame {
                        height: 1120px;
                        padding: 1rem;
                        border-radius: 1rem;
                        background: rgba(255, 255, 255, 0.1);
                        border: 1px solid rgba(255, 255, 255, 0.15);
                    }
                    .form-frame iframe {
                        width: 100%;
                        height: 100%;
                        border: none;
                        border-radius: 12px;
                    }
                    .contact-copy h3 {
                        font-size: clamp(2.25rem, 5vw, 3rem);
                        font-weight: 700;
                    }
                    .contact-copy p, .promises {
                        color: rgba(255, 255, 255, 0.85);
                    }
                    .site-footer {
                        border-top: 1px solid rgba(255, 255, 255, 0.1);
                        padding: 2.5rem 0;
                        text-align: center;
                        font-size: 0.875rem;
                        color: rgba(255, 255, 255, 0.6);
                    }
                "#}
            </style>
        </div>
    }
}
