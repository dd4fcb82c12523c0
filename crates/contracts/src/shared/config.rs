use crate::shared::media::get_full_image_url_path;
use serde::Deserialize;

pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_IMAGE_PLACEHOLDER: &str = "https://placehold.co/100?text=Image&font=roboto";

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct UiConfig {
    #[serde(default = "default_image_placeholder")]
    pub image_placeholder: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            image_placeholder: default_image_placeholder(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BACKEND_URL.to_string()
}

fn default_image_placeholder() -> String {
    DEFAULT_IMAGE_PLACEHOLDER.to_string()
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = "http://127.0.0.1:5000"

[ui]
image_placeholder = "https://placehold.co/100?text=Image&font=roboto"
"#;

impl AppConfig {
    /// Parses a TOML document; missing keys fall back to the defaults.
    pub fn from_toml_str(contents: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(contents)?;
        Ok(config)
    }

    /// Load configuration
    ///
    /// Uses `overrides` when given, otherwise the embedded default config.
    pub fn load(overrides: Option<&str>) -> anyhow::Result<Self> {
        match overrides {
            Some(contents) => {
                log::info!("Loading config from override document");
                Self::from_toml_str(contents)
            }
            None => {
                log::info!("Using default embedded configuration");
                Self::from_toml_str(DEFAULT_CONFIG)
            }
        }
    }

    /// Absolute URL of a stored image.
    pub fn image_url(&self, uri: &str) -> String {
        get_full_image_url_path(self.api.base_url.trim_end_matches('/'), uri)
    }
}
