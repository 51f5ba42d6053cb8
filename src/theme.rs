use stylist::css;
use stylist::yew::Global;
use yew::prelude::*;

/// Brand palette and the active-link treatment the scrollspy relies on.
#[function_component(Theme)]
pub fn theme() -> Html {
    html! {
        <Global css={css!(r#"
            :root {
                --brand-gold-strong: #e6b70a;
                --brand-gold: #f2c94c;
                --brand-gold-2: #f7dc8c;
                --brand-ink: #0b1020;
            }
            html {
                scroll-behavior: smooth;
            }
            body {
                margin: 0;
                font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                background: #020617;
                color: #fff;
            }
            nav a[data-active] {
                color: #000;
                background: var(--brand-gold);
            }
        "#)} />
    }
}
