mod config_error;
mod gallery;

pub use config_error::ConfigErrorPanel;
pub use gallery::Gallery;
