use log::info;
use yew::prelude::*;

mod alerts;
mod config;
mod content;
mod dom;
mod error;
mod motion;
mod navigation;
mod charts {
    pub mod data;
    pub mod render;
}
mod controller {
    pub mod page;
    pub mod state;
    pub mod timeline;
}
mod components {
    pub mod alert_panel;
    pub mod chart_panel;
    pub mod nav;
    pub mod notification;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    html! {
        <Landing />
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
