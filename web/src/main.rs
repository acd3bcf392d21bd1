use dioxus::logger::tracing::{error, info, Level};
use dioxus::prelude::*;

use config::GalleryConfig;
use views::{ConfigErrorPanel, Gallery};

mod config;
mod views;

const MAIN_CSS: Asset = asset!("/assets/tailwind.css");

fn main() {
    dioxus::logger::init(Level::INFO).expect("failed to init logger");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(|| match GalleryConfig::load() {
        Ok(config) => {
            info!("Loaded gallery '{}' with {} tiles", config.title, config.tiles.len());
            Ok(config)
        }
        Err(e) => {
            error!("Failed to load gallery config: {e}");
            Err(e.to_string())
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }

        {match config {
            Ok(config) => rsx! {
                document::Title { "{config.title}" }
                Gallery { config }
            },
            Err(message) => rsx! {
                document::Title { "Gallery" }
                ConfigErrorPanel { message }
            },
        }}
    }
}
