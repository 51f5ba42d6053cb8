use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

const SCROLLED_AFTER: f64 = 24.0;

const LINKS: [(&str, &str); 4] = [
    ("#home", "Home"),
    ("#services", "Services"),
    ("#why", "Why Us"),
    ("#contact", "Contact"),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new({
                        let is_scrolled = is_scrolled.clone();
                        move || {
                            if let Some(win) = web_sys::window() {
                                if let Ok(scroll_y) = win.scroll_y() {
                                    is_scrolled.set(scroll_y > SCROLLED_AFTER);
                                }
                            }
                        }
                    });
                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        callback.as_ref().unchecked_ref(),
                    );
                    Box::new(move || {
                        if let Some(win) = web_sys::window() {
                            let _ = win.remove_event_listener_with_callback(
                                "scroll",
                                callback.as_ref().unchecked_ref(),
                            );
                        }
                    })
                } else {
                    Box::new(|| ())
                };
                move || {
                    destructor();
                }
            },
            (),
        );
    }

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <a href="#home" class="nav-logo">{"Stelliform"}</a>
                <div class="nav-links">
                    { for LINKS.iter().map(|(href, label)| html! {
                        <a href={*href} class="nav-link">{*label}</a>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                    .top-nav {
                        position: sticky;
                        top: 0;
                        z-index: 50;
                        backdrop-filter: blur(12px);
                        background: rgba(0, 0, 0, 0.5);
                        border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                        transition: background 0.3s ease;
                    }
                    .top-nav.scrolled {
                        background: rgba(0, 0, 0, 0.8);
                    }
                    .nav-content {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0.75rem 1.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .nav-logo {
                        font-weight: 800;
                        letter-spacing: 0.05em;
                        color: #fff;
                        text-decoration: none;
                    }
                    .nav-links {
                        display: flex;
                        gap: 0.5rem;
                    }
                    .nav-link {
                        border-radius: 9999px;
                        padding: 0.25rem 0.75rem;
                        font-size: 0.875rem;
                        color: rgba(255, 255, 255, 0.85);
                        text-decoration: none;
                    }
                    .nav-link:hover {
                        color: #fff;
                    }
                "#}
            </style>
        </nav>
    }
}
