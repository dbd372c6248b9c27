//! CLI configuration file.
//!
//! Serialized as TOML and looked up in the user's config directory unless a
//! path is given explicitly. A missing default file means defaults.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tlfb_model::SubstanceCatalog;
use tlfb_query::ParseOptions;
use tlfb_session::SessionSettings;
use tlfb_session::calendar::DEFAULT_HEIGHT_OFFSET;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub query: QueryConfig,
    pub calendar: CalendarConfig,
    pub catalog: CatalogConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    /// Alert on parameters outside the recognized set.
    pub strict: bool,
    /// Page address used when only a query string is given.
    pub base_url: String,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            strict: false,
            base_url: "http://localhost/tlfb/".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    /// Simulated inner window height in pixels.
    pub window_height: u32,
    pub height_offset: u32,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            window_height: 900,
            height_offset: DEFAULT_HEIGHT_OFFSET,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Substance catalog JSON replacing the built-in one.
    pub path: Option<PathBuf>,
}

impl Config {
    /// Load from `path`, or from the default location when `None`.
    ///
    /// # Errors
    ///
    /// Fails if an explicit path cannot be read, or if any config file is
    /// not valid TOML for this schema.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::load_from(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("parse config {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn default_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("org", "TimelineFollowback", "tlfb")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    pub fn session_settings(&self) -> SessionSettings {
        SessionSettings {
            parse: ParseOptions {
                strict: self.query.strict,
            },
            height_offset: self.calendar.height_offset,
        }
    }

    /// The configured catalog, or the built-in one.
    pub fn catalog(&self) -> Result<SubstanceCatalog> {
        match &self.catalog.path {
            Some(path) => SubstanceCatalog::load(path)
                .with_context(|| format!("load substance catalog {}", path.display())),
            None => SubstanceCatalog::builtin().context("load built-in substance catalog"),
        }
    }

    /// Absolute page URL for `target`, which may be a bare query string.
    pub fn resolve_url(&self, target: &str) -> String {
        if target.contains("://") {
            return target.to_string();
        }
        let query = target.strip_prefix('?').unwrap_or(target);
        if query.is_empty() {
            self.query.base_url.clone()
        } else {
            format!("{}?{query}", self.query.base_url)
        }
    }
}
