use dioxus::prelude::*;

use crate::state::use_image_load;

#[derive(Props, PartialEq, Clone)]
pub struct ImageWithErrorProps {
    // `alt`, `width` and `height` exist on both the global and the `img`
    // attribute sets, so they are declared here and set on the `img` directly.
    #[props(into)]
    pub alt: Option<String>,
    #[props(into)]
    pub width: Option<String>,
    #[props(into)]
    pub height: Option<String>,
    /// Remaining attributes, forwarded untouched to the underlying `img` element.
    #[props(extends = GlobalAttributes, extends = img)]
    pub attributes: Vec<Attribute>,
    /// Rendered in place of the image once it fails to load.
    pub fallback_err: Option<Element>,
    /// Called when the image finishes loading.
    pub on_load: Option<EventHandler>,
}

/// An `img` that swaps to `fallback_err` for good once the image fails to load.
///
/// The errored state is kept for the lifetime of the instance, even if `src`
/// changes afterwards. Remount the component (e.g. with a new `key`) to retry.
#[component]
pub fn ImageWithError(props: ImageWithErrorProps) -> Element {
    let mut load = use_image_load();
    let ImageWithErrorProps {
        alt,
        width,
        height,
        attributes,
        fallback_err,
        on_load,
    } = props;

    rsx! {
      if load.is_errored() {
        {fallback_err}
      } else {
        img {
          alt,
          width,
          height,
          onload: move |_| load.loaded(on_load),
          onerror: move |_| load.failed(),
          ..attributes,
        }
      }
    }
}
