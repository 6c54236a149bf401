//! folio-rs: content collections and theme switching for a portfolio site
//!
//! The crate reads blog posts and projects from front-matter documents and
//! keeps track of the visitor's color theme. A CLI and a small HTTP server
//! expose both to the presentation layer.

pub mod commands;
pub mod config;
pub mod content;
pub mod server;
pub mod theme;

use anyhow::Result;
use std::path::Path;

use content::ContentRepository;
use theme::{FileStore, StyleSheet, ThemeResolver};

/// File the site configuration is read from
pub const CONFIG_FILE: &str = "folio.yml";

/// A portfolio site rooted at a directory
#[derive(Debug, Clone)]
pub struct Folio {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Content directory (holds one directory per collection)
    pub content_dir: std::path::PathBuf,
    /// Directory for persisted preferences
    pub state_dir: std::path::PathBuf,
}

impl Folio {
    /// Create a new Folio instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join(CONFIG_FILE);

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Create an instance with an already loaded configuration
    pub fn with_config<P: AsRef<Path>>(base_dir: P, config: config::SiteConfig) -> Self {
        let base_dir = base_dir.as_ref().to_path_buf();
        let content_dir = base_dir.join(&config.content_dir);
        let state_dir = base_dir.join(&config.state_dir);

        Self {
            config,
            base_dir,
            content_dir,
            state_dir,
        }
    }

    /// Content repository over this site's collections
    pub fn content(&self) -> ContentRepository {
        ContentRepository::new(self)
    }

    /// Preference store backing the theme selection
    pub fn preferences(&self) -> FileStore {
        FileStore::in_dir(&self.state_dir)
    }

    /// Theme resolver restored from this site's saved preferences
    pub fn theme_resolver(&self) -> ThemeResolver<FileStore, StyleSheet> {
        ThemeResolver::new(self.preferences(), StyleSheet::new())
    }

    /// Initialize a new site
    pub fn init(&self) -> Result<()> {
        commands::init::run(self)
    }

    /// Remove persisted state
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}
