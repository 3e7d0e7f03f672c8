//! Application configuration structures.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Where product data comes from
    #[serde(default)]
    pub client: ClientConfig,

    /// Presentation settings
    #[serde(default)]
    pub view: ViewConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.client.products_file.is_none() {
            self.client.products_url()?;
        }
        if self.client.user_agent.trim().is_empty() {
            return Err(AppError::validation("client.user_agent is empty"));
        }
        if self.client.products_path.trim().is_empty() {
            return Err(AppError::validation("client.products_path is empty"));
        }
        if self.view.app_title.trim().is_empty() {
            return Err(AppError::validation("view.app_title is empty"));
        }
        if self.view.image_width == 0 {
            return Err(AppError::validation("view.image_width must be > 0"));
        }
        if !(self.view.star_max_width.is_finite() && self.view.star_max_width > 0.0) {
            return Err(AppError::validation(
                "view.star_max_width must be a positive number",
            ));
        }
        Ok(())
    }
}

/// Data access settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Origin hosting the static product resource
    #[serde(default = "defaults::base_url")]
    pub base_url: String,

    /// Path of the product resource relative to `base_url`
    #[serde(default = "defaults::products_path")]
    pub products_path: String,

    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Read products from this file instead of over HTTP
    #[serde(default)]
    pub products_file: Option<PathBuf>,
}

impl ClientConfig {
    /// Full URL of the product resource.
    pub fn products_url(&self) -> Result<Url> {
        let mut base = Url::parse(&self.base_url)?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(base.join(self.products_path.trim_start_matches('/'))?)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::base_url(),
            products_path: defaults::products_path(),
            user_agent: defaults::user_agent(),
            products_file: None,
        }
    }
}

/// Presentation settings shared by the views.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewConfig {
    /// Title shown by the application shell
    #[serde(default = "defaults::app_title")]
    pub app_title: String,

    /// Thumbnail width in the product list
    #[serde(default = "defaults::image_width")]
    pub image_width: u32,

    /// Thumbnail margin in the product list
    #[serde(default = "defaults::image_margin")]
    pub image_margin: u32,

    /// Width of a full five-star bar
    #[serde(default = "defaults::star_max_width")]
    pub star_max_width: f64,

    /// Filter applied when the list view opens
    #[serde(default)]
    pub initial_filter: String,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            app_title: defaults::app_title(),
            image_width: defaults::image_width(),
            image_margin: defaults::image_margin(),
            star_max_width: defaults::star_max_width(),
            initial_filter: String::new(),
        }
    }
}

mod defaults {
    // Client defaults
    pub fn base_url() -> String {
        "http://localhost:4200".into()
    }
    pub fn products_path() -> String {
        "api/products/products.json".into()
    }
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; acme-products/0.1)".into()
    }

    // View defaults
    pub fn app_title() -> String {
        "Acme Product Management".into()
    }
    pub fn image_width() -> u32 {
        50
    }
    pub fn image_margin() -> u32 {
        2
    }
    pub fn star_max_width() -> f64 {
        75.0
    }
}
