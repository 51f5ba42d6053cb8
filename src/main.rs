use yew::prelude::*;
use log::{info, Level};

mod config;
mod content;
mod scrollspy;
mod theme;
mod pages {
    pub mod landing;
}
mod components {
    pub mod nav;
}

use components::nav::Nav;
use pages::landing::Landing;
use scrollspy::dom::use_scrollspy;
use theme::Theme;


#[function_component]
fn App() -> Html {
    // Runs after the first render, once the sections and nav links exist.
    use_scrollspy();

    html! {
        <>
            <Theme />
            <Nav />
            <Landing />
        </>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) { Level::Debug } else { Level::Info };
    console_log::init_with_level(level).expect("error initializing log");

    info!("Starting application, assets served from {}", config::asset_base());
    yew::Renderer::<App>::new().render();
}
