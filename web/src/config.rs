use serde::Deserialize;
use thiserror::Error;
use url::Url;

const GALLERY_JSON: &str = include_str!("../assets/gallery.json");

const DEFAULT_COLUMNS: u8 = 4;
const MAX_COLUMNS: u8 = 6;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid gallery config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("gallery has no tiles")]
    Empty,
    #[error("tile '{title}' has an invalid source '{source_url}'")]
    InvalidSource { title: String, source_url: String },
    #[error("columns must be between 1 and 6, got {0}")]
    InvalidColumns(u8),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TileConfig {
    pub title: String,
    pub src: String,
    #[serde(default)]
    pub alt: Option<String>,
}

impl TileConfig {
    pub fn alt_text(&self) -> &str {
        self.alt.as_deref().unwrap_or(&self.title)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        // Root-relative paths are served by the app itself.
        if self.src.starts_with('/') || Url::parse(&self.src).is_ok() {
            return Ok(());
        }
        Err(ConfigError::InvalidSource {
            title: self.title.clone(),
            source_url: self.src.clone(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GalleryConfig {
    pub title: String,
    #[serde(default = "default_columns")]
    pub columns: u8,
    pub tiles: Vec<TileConfig>,
}

fn default_columns() -> u8 {
    DEFAULT_COLUMNS
}

impl GalleryConfig {
    /// Loads the gallery bundled with the app.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_json(GALLERY_JSON)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GalleryConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.tiles.is_empty() {
            return Err(ConfigError::Empty);
        }
        if !(1..=MAX_COLUMNS).contains(&self.columns) {
            return Err(ConfigError::InvalidColumns(self.columns));
        }
        self.tiles.iter().try_for_each(TileConfig::validate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_gallery_is_valid() {
        let config = GalleryConfig::load().unwrap();
        assert!(!config.tiles.is_empty());
    }

    #[test]
    fn defaults_columns_and_alt() {
        let config = GalleryConfig::from_json(
            r#"{ "title": "Covers", "tiles": [{ "title": "Blue", "src": "/covers/blue.jpg" }] }"#,
        )
        .unwrap();

        assert_eq!(config.columns, DEFAULT_COLUMNS);
        assert_eq!(config.tiles[0].alt_text(), "Blue");
    }

    #[test]
    fn keeps_explicit_alt() {
        let config = GalleryConfig::from_json(
            r#"{ "title": "Covers", "columns": 2, "tiles": [
                { "title": "Red", "src": "https://example.com/red.png", "alt": "A red square" }
            ] }"#,
        )
        .unwrap();

        assert_eq!(config.columns, 2);
        assert_eq!(config.tiles[0].alt_text(), "A red square");
    }

    #[test]
    fn rejects_empty_gallery() {
        let err = GalleryConfig::from_json(r#"{ "title": "Covers", "tiles": [] }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Empty));
    }

    #[test]
    fn rejects_relative_source() {
        let err = GalleryConfig::from_json(
            r#"{ "title": "Covers", "tiles": [{ "title": "Bad", "src": "covers/bad.jpg" }] }"#,
        )
        .unwrap_err();

        match err {
            ConfigError::InvalidSource { title, source_url } => {
                assert_eq!(title, "Bad");
                assert_eq!(source_url, "covers/bad.jpg");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_out_of_range_columns() {
        let err = GalleryConfig::from_json(
            r#"{ "title": "Covers", "columns": 0, "tiles": [{ "title": "A", "src": "/a.jpg" }] }"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidColumns(0)));
    }

    #[test]
    fn reports_malformed_json() {
        let err = GalleryConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
