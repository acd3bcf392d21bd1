//! Image components with a permanent fallback for images that fail to load.

mod state;
pub use state::*;

mod components;
pub use components::*;
