//! Site configuration (folio.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    /// Author credited on posts that do not name one
    pub author: String,
    pub url: String,

    // Directory
    pub content_dir: String,
    pub blog_dir: String,
    pub projects_dir: String,
    /// Extension (without the dot) of content documents
    pub content_extension: String,
    /// Where client preferences (the active theme) are kept
    pub state_dir: String,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Portfolio".to_string(),
            description: String::new(),
            author: "Riebeeck van Niekerk".to_string(),
            url: "http://localhost:4000".to_string(),

            content_dir: "content".to_string(),
            blog_dir: "blog".to_string(),
            projects_dir: "projects".to_string(),
            content_extension: "mdx".to_string(),
            state_dir: ".folio".to_string(),

            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        // An empty file is a valid, all-defaults config
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Content extension with any leading dot removed
    pub fn extension(&self) -> &str {
        self.content_extension.trim_start_matches('.')
    }
}
