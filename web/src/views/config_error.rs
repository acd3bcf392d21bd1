use dioxus::prelude::*;

#[component]
pub fn ConfigErrorPanel(message: String) -> Element {
    rsx! {
        main { class: "max-w-xl mx-auto px-4 py-16",
            div { class: "border border-red-400 rounded-lg p-4 text-red-300",
                h1 { class: "text-lg font-bold mb-2", "Gallery unavailable" }
                p { class: "font-mono text-sm", "{message}" }
            }
        }
    }
}
