use crate::llm::gemini::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to config.toml - computed from home, not serialized
    #[serde(skip)]
    pub config_path: PathBuf,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default)]
    pub temperature: Option<f64>,

    #[serde(default = "default_locale")]
    pub locale: String,

    #[serde(default)]
    pub catalog: CatalogConfig,
}

fn default_model() -> String {
    DEFAULT_MODEL.into()
}

fn default_api_base_url() -> String {
    DEFAULT_BASE_URL.into()
}

fn default_locale() -> String {
    "zh".into()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_path: PathBuf::new(),
            api_key: None,
            model: default_model(),
            api_base_url: default_api_base_url(),
            temperature: None,
            locale: default_locale(),
            catalog: CatalogConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Replacement catalog file; the bundled catalog is used when unset.
    #[serde(default)]
    pub path: Option<String>,
    /// Directory that tarot image paths are resolved against.
    #[serde(default)]
    pub asset_root: Option<String>,
}

impl CatalogConfig {
    pub fn catalog_path(&self) -> Option<PathBuf> {
        self.path.as_deref().map(expand_path)
    }

    pub fn asset_root(&self) -> PathBuf {
        self.asset_root
            .as_deref()
            .map_or_else(|| PathBuf::from("public"), expand_path)
    }
}

fn expand_path(raw: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(raw).into_owned())
}
