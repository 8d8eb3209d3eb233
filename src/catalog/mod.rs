//! The Equilibrium bottle catalog: a fixed, ordered, read-only list loaded
//! once at startup.

mod bottle;
pub mod filter;
pub mod tarot;

pub use bottle::{BottleRecord, ColorPair, ExtendedProfile, Rgb, Swatch};
pub use tarot::{TarotImage, resolve_tarot_image};

use crate::config::Config;
use crate::error::CatalogError;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

const BUNDLED_CATALOG: &str = include_str!("../../assets/bottles.toml");

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    bottles: Vec<BottleRecord>,
}

#[derive(Debug, Clone)]
pub struct Catalog {
    bottles: Vec<BottleRecord>,
}

impl Catalog {
    /// The catalog shipped with the binary.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_toml_str(BUNDLED_CATALOG)
    }

    /// Load from `path` when given, otherwise the bundled catalog.
    pub fn load(path: Option<&Path>) -> Result<Self, CatalogError> {
        match path {
            Some(path) => Self::from_path(path),
            None => Self::bundled(),
        }
    }

    /// Validate `config`, then load `override_path` or the configured catalog.
    pub fn from_config(config: &Config, override_path: Option<&Path>) -> crate::Result<Self> {
        config.validate()?;
        let path = override_path
            .map(Path::to_path_buf)
            .or_else(|| config.catalog.catalog_path());
        Ok(Self::load(path.as_deref())?)
    }

    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let catalog = Self::from_toml_str(&contents)?;
        tracing::debug!(path = %path.display(), bottles = catalog.len(), "loaded catalog");
        Ok(catalog)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(contents)?;
        Self::new(file.bottles)
    }

    /// Validate and wrap a list of bottles.
    pub fn new(bottles: Vec<BottleRecord>) -> Result<Self, CatalogError> {
        if bottles.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut ids = HashSet::new();
        let mut numbers = HashSet::new();
        for bottle in &bottles {
            if !ids.insert(bottle.id.as_str()) {
                return Err(CatalogError::DuplicateId(bottle.id.clone()));
            }
            if !numbers.insert(bottle.number) {
                return Err(CatalogError::DuplicateNumber(bottle.number));
            }
            for swatch in [&bottle.colors.top, &bottle.colors.bottom] {
                if swatch.rgb().is_none() {
                    return Err(CatalogError::InvalidColor {
                        id: bottle.id.clone(),
                        value: swatch.hex.clone(),
                    });
                }
            }
        }

        Ok(Self { bottles })
    }

    pub fn bottles(&self) -> &[BottleRecord] {
        &self.bottles
    }

    pub fn len(&self) -> usize {
        self.bottles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bottles.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&BottleRecord> {
        self.bottles.iter().find(|b| b.id == id)
    }

    pub fn by_number(&self, number: u32) -> Option<&BottleRecord> {
        self.bottles.iter().find(|b| b.number == number)
    }

    /// Look a bottle up by the way users name it on the command line:
    /// `B5`, `5`, or its id.
    pub fn resolve(&self, token: &str) -> Result<&BottleRecord, CatalogError> {
        let token = token.trim();
        let digits = token.strip_prefix(['b', 'B']).unwrap_or(token);
        digits
            .parse::<u32>()
            .ok()
            .and_then(|number| self.by_number(number))
            .or_else(|| self.get(token))
            .ok_or_else(|| CatalogError::UnknownBottle(token.to_string()))
    }

    pub fn search(&self, query: &str) -> Vec<&BottleRecord> {
        filter::filter(&self.bottles, query)
    }
}
