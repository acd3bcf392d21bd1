use dioxus::prelude::*;

use crate::ImageWithError;

#[derive(Props, PartialEq, Clone)]
pub struct CoverArtProps {
    /// The source URL for the image.
    #[props(into)]
    pub src: String,
    /// The alt text for accessibility.
    #[props(into)]
    pub alt: String,
    /// Extra classes for the frame.
    #[props(optional, into)]
    pub class: String,
    /// Forwarded to the image once it has loaded.
    pub on_load: Option<EventHandler>,
}

/// Square thumbnail frame that shows a placeholder glyph when the image can't be loaded.
#[component]
pub fn CoverArt(props: CoverArtProps) -> Element {
    rsx! {
      div { class: "aspect-square w-full bg-zinc-900 border border-white/5 rounded-md flex items-center justify-center overflow-hidden {props.class}",
        ImageWithError {
          src: "{props.src}",
          alt: "{props.alt}",
          class: "w-full h-full object-cover",
          loading: "lazy",
          on_load: move |_| {
              if let Some(on_load) = props.on_load {
                  on_load.call(())
              }
          },
          fallback_err: rsx! {
            MissingImage {}
          },
        }
      }
    }
}

#[component]
fn MissingImage() -> Element {
    rsx! {
      svg {
        class: "w-8 h-8 text-white/20",
        xmlns: "http://www.w3.org/2000/svg",
        fill: "none",
        view_box: "0 0 24 24",
        stroke: "currentColor",
        path {
          stroke_linecap: "round",
          stroke_linejoin: "round",
          stroke_width: "1.5",
          d: "M2.25 15.75l5.159-5.159a2.25 2.25 0 013.182 0l5.159 5.159m-1.5-1.5l1.409-1.409a2.25 2.25 0 013.182 0l2.909 2.909M3.75 21h16.5A1.5 1.5 0 0021.75 19.5V4.5A1.5 1.5 0 0020.25 3H3.75A1.5 1.5 0 002.25 4.5v15A1.5 1.5 0 003.75 21z",
        }
      }
    }
}
