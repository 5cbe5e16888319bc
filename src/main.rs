use log::{info, Level};
use yew::prelude::*;

mod config;
mod content;
mod components {
    pub mod common;
    pub mod countdown;
    pub mod faq_item;
}
mod pages {
    pub mod landing;
}

use components::countdown::CountdownBanner;
use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    html! {
        <>
            <CountdownBanner />
            <Landing />
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
