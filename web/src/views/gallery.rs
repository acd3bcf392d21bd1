use dioxus::prelude::*;
use ui::CoverArt;

use crate::config::GalleryConfig;

#[component]
pub fn Gallery(config: GalleryConfig) -> Element {
    let mut loaded = use_signal(|| 0usize);
    let total = config.tiles.len();
    let columns = config.columns;

    rsx! {
        main { class: "max-w-6xl mx-auto px-4 sm:px-6 py-8",
            header { class: "flex items-baseline justify-between mb-6",
                h1 { class: "text-3xl font-bold text-white", "{config.title}" }
                p { class: "text-xs font-mono text-gray-500", "{loaded} of {total} loaded" }
            }

            div {
                class: "grid gap-5",
                style: "grid-template-columns: repeat({columns}, minmax(0, 1fr));",
                for (index, tile) in config.tiles.iter().enumerate() {
                    // Keyed by source so a changed source remounts the tile and gets a fresh load attempt.
                    div { key: "{index}-{tile.src}", class: "flex flex-col gap-2",
                        CoverArt {
                            src: tile.src.clone(),
                            alt: tile.alt_text().to_string(),
                            on_load: move |_| loaded += 1,
                        }
                        span { class: "text-sm text-gray-300 truncate", "{tile.title}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[component]
    fn TwoTiles() -> Element {
        let config = GalleryConfig::from_json(
            r#"{ "title": "Covers", "columns": 2, "tiles": [
                { "title": "Blue", "src": "/covers/blue.jpg" },
                { "title": "Red", "src": "https://example.com/red.png", "alt": "A red square" }
            ] }"#,
        )
        .unwrap();
        rsx! {
            Gallery { config }
        }
    }

    #[test]
    fn renders_every_tile() {
        let mut dom = VirtualDom::new(TwoTiles);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        assert!(html.contains("Covers"));
        assert!(html.contains("0 of 2 loaded"));
        assert!(html.contains("repeat(2, minmax(0, 1fr))"));
        assert!(html.contains(r#"src="/covers/blue.jpg""#));
        assert!(html.contains(r#"alt="A red square""#));
        assert_eq!(html.matches("<img").count(), 2);
    }
}
