//! Shared behaviour of content documents

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::frontmatter::parse_date;
use super::FrontMatter;
use crate::config::SiteConfig;

/// The content collections a site has
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectionKind {
    Blog,
    Projects,
}

impl CollectionKind {
    /// Directory name of this collection under the content root
    pub fn dir_name(self, config: &SiteConfig) -> &str {
        match self {
            CollectionKind::Blog => &config.blog_dir,
            CollectionKind::Projects => &config.projects_dir,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CollectionKind::Blog => "blog",
            CollectionKind::Projects => "projects",
        }
    }
}

impl fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CollectionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "blog" | "post" | "posts" => Ok(CollectionKind::Blog),
            "project" | "projects" => Ok(CollectionKind::Projects),
            other => Err(format!(
                "Unknown collection: {}. Available: blog, projects",
                other
            )),
        }
    }
}

/// Site-wide fallbacks used while building documents
#[derive(Debug, Clone)]
pub struct DocumentDefaults {
    pub author: String,
}

impl DocumentDefaults {
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            author: config.author.clone(),
        }
    }
}

/// A typed record built from one content file
pub trait Document: Sized {
    /// Collection this document type is read from
    const KIND: CollectionKind;

    /// Map untyped front-matter onto the typed record, applying a default
    /// to every field the file leaves out.
    fn from_front_matter(
        slug: String,
        fm: &FrontMatter,
        body: &str,
        defaults: &DocumentDefaults,
    ) -> Self;

    fn slug(&self) -> &str;

    /// Publish date exactly as written in the file
    fn date(&self) -> &str;

    fn published_at(&self) -> Option<NaiveDateTime> {
        parse_date(self.date())
    }
}

/// Sort newest first. Stable, so equal dates keep their input order;
/// documents without a usable date go last.
pub fn sort_by_date_desc<D: Document>(docs: &mut [D]) {
    docs.sort_by_cached_key(|doc| std::cmp::Reverse(doc.published_at()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_kind_from_str() {
        assert_eq!("posts".parse::<CollectionKind>(), Ok(CollectionKind::Blog));
        assert_eq!(
            "project".parse::<CollectionKind>(),
            Ok(CollectionKind::Projects)
        );
        assert!("pages".parse::<CollectionKind>().is_err());
    }

    #[test]
    fn test_dir_name_follows_config() {
        let config = SiteConfig {
            blog_dir: "writing".to_string(),
            ..Default::default()
        };
        assert_eq!(CollectionKind::Blog.dir_name(&config), "writing");
        assert_eq!(CollectionKind::Projects.dir_name(&config), "projects");
    }
}
