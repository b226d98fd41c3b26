//! Site configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::VitrineError;

/// Top-level site configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SiteConfig {
    /// Branding shown in the page shell.
    #[serde(default)]
    pub site: SiteInfo,

    /// Remote category source.
    #[serde(default)]
    pub loader: LoaderConfig,

    /// Messaging service used by the enquiry links.
    #[serde(default)]
    pub contact: ContactConfig,

    /// Card rendering options.
    #[serde(default)]
    pub cards: CardConfig,
}

impl SiteConfig {
    /// Load config from a file. `.json` files are parsed as JSON, anything else as TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, VitrineError> {
        let path = path.as_ref();
        let display = path.display().to_string();
        let content = std::fs::read_to_string(path).map_err(|source| VitrineError::Io {
            path: display.clone(),
            source,
        })?;

        let config: Self = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content).map_err(|e| VitrineError::Parse {
                path: display,
                message: e.to_string(),
            })?
        } else {
            toml::from_str(&content).map_err(|e| VitrineError::Parse {
                path: display,
                message: e.to_string(),
            })?
        };

        config.validate()?;
        Ok(config)
    }

    /// Defaults overridden by host variables `data_url` and `whatsapp_number`, validated.
    pub fn from_variables(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, VitrineError> {
        let mut config = Self::default();
        if let Some(url) = lookup("data_url") {
            config.loader.data_url = url;
        }
        if let Some(number) = lookup("whatsapp_number") {
            config.contact.whatsapp_number = number;
        }
        config.validate()?;
        Ok(config)
    }

    /// Serialize to TOML.
    pub fn to_toml(&self) -> Result<String, VitrineError> {
        toml::to_string_pretty(self).map_err(|e| VitrineError::Config(e.to_string()))
    }

    /// Check values that would make the loader or the links unusable.
    pub fn validate(&self) -> Result<(), VitrineError> {
        if self.loader.data_url.trim().is_empty() {
            return Err(VitrineError::Config("loader.data_url is empty".to_string()));
        }
        if self.loader.container_id.trim().is_empty() {
            return Err(VitrineError::Config(
                "loader.container_id is empty".to_string(),
            ));
        }
        if self.loader.cache_bust_param.trim().is_empty() {
            return Err(VitrineError::Config(
                "loader.cache_bust_param is empty".to_string(),
            ));
        }
        if self.contact.whatsapp_number.trim().is_empty() {
            return Err(VitrineError::Config(
                "contact.whatsapp_number is empty".to_string(),
            ));
        }
        if self.cards.tilt.divisor == 0.0 {
            return Err(VitrineError::Config(
                "cards.tilt.divisor must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Branding.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SiteInfo {
    #[serde(default = "default_site_name")]
    pub name: String,

    #[serde(default = "default_tagline")]
    pub tagline: String,
}

fn default_site_name() -> String {
    "Maghuva Fashions".to_string()
}

fn default_tagline() -> String {
    "Elegance in Every Thread".to_string()
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            name: default_site_name(),
            tagline: default_tagline(),
        }
    }
}

/// Where the category collection comes from and where it goes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoaderConfig {
    /// Remote JSON document holding the category array.
    #[serde(default = "default_data_url")]
    pub data_url: String,

    /// Container the rendered cards replace.
    #[serde(default = "default_container_id")]
    pub container_id: String,

    /// Query parameter carrying the cache-busting timestamp.
    #[serde(default = "default_cache_bust_param")]
    pub cache_bust_param: String,
}

/// Default remote category document.
pub const DEFAULT_DATA_URL: &str =
    "https://raw.githubusercontent.com/frontend-fuel/maghuvafashions/main/data.json";

/// Default id of the category container.
pub const DEFAULT_CONTAINER_ID: &str = "dynamic-categories";

fn default_data_url() -> String {
    DEFAULT_DATA_URL.to_string()
}

fn default_container_id() -> String {
    DEFAULT_CONTAINER_ID.to_string()
}

fn default_cache_bust_param() -> String {
    "t".to_string()
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            data_url: default_data_url(),
            container_id: default_container_id(),
            cache_bust_param: default_cache_bust_param(),
        }
    }
}

/// Messaging service for the outbound enquiry links.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContactConfig {
    /// Phone number in international format, digits only.
    #[serde(default = "default_whatsapp_number")]
    pub whatsapp_number: String,

    #[serde(default = "default_messaging_base_url")]
    pub messaging_base_url: String,
}

fn default_whatsapp_number() -> String {
    "918143113140".to_string()
}

fn default_messaging_base_url() -> String {
    "https://wa.me".to_string()
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            whatsapp_number: default_whatsapp_number(),
            messaging_base_url: default_messaging_base_url(),
        }
    }
}

/// Card rendering options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CardConfig {
    /// Icon class used when a record has none.
    #[serde(default = "default_icon")]
    pub default_icon: String,

    #[serde(default)]
    pub tilt: TiltSettings,
}

/// Default card icon class.
pub const DEFAULT_ICON: &str = "fas fa-star";

fn default_icon() -> String {
    DEFAULT_ICON.to_string()
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            default_icon: default_icon(),
            tilt: TiltSettings::default(),
        }
    }
}

/// Pointer tilt parameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TiltSettings {
    #[serde(default = "default_perspective")]
    pub perspective_px: f64,

    /// Pointer offset (px) per degree of rotation.
    #[serde(default = "default_divisor")]
    pub divisor: f64,

    #[serde(default = "default_lift")]
    pub lift_px: f64,
}

fn default_perspective() -> f64 {
    1000.0
}

fn default_divisor() -> f64 {
    20.0
}

fn default_lift() -> f64 {
    10.0
}

impl Default for TiltSettings {
    fn default() -> Self {
        Self {
            perspective_px: default_perspective(),
            divisor: default_divisor(),
            lift_px: default_lift(),
        }
    }
}

/// Generate a default `vitrine.toml`.
pub fn generate_default_config() -> String {
    format!(
        r#"# Vitrine site configuration

[site]
name = "{name}"
tagline = "{tagline}"

[loader]
data_url = "{data_url}"
container_id = "{container_id}"
cache_bust_param = "t"

[contact]
whatsapp_number = "{number}"
messaging_base_url = "https://wa.me"

[cards]
default_icon = "{icon}"

[cards.tilt]
perspective_px = 1000.0
divisor = 20.0
lift_px = 10.0
"#,
        name = default_site_name(),
        tagline = default_tagline(),
        data_url = DEFAULT_DATA_URL,
        container_id = DEFAULT_CONTAINER_ID,
        number = default_whatsapp_number(),
        icon = DEFAULT_ICON,
    )
}
