pub mod cover_art;
pub mod image_with_error;

pub use cover_art::*;
pub use image_with_error::*;
