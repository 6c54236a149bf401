//! Project showcase model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::document::{CollectionKind, Document, DocumentDefaults};
use super::FrontMatter;

/// Area a project belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectCategory {
    Ai,
    Ml,
    DataEngineering,
    Devops,
    Analytics,
}

impl ProjectCategory {
    /// Every category, in showcase tab order
    pub const ALL: [ProjectCategory; 5] = [
        ProjectCategory::Ai,
        ProjectCategory::Ml,
        ProjectCategory::DataEngineering,
        ProjectCategory::Devops,
        ProjectCategory::Analytics,
    ];

    pub fn id(self) -> &'static str {
        match self {
            ProjectCategory::Ai => "ai",
            ProjectCategory::Ml => "ml",
            ProjectCategory::DataEngineering => "data-engineering",
            ProjectCategory::Devops => "devops",
            ProjectCategory::Analytics => "analytics",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ProjectCategory::Ai => "AI",
            ProjectCategory::Ml => "Machine Learning",
            ProjectCategory::DataEngineering => "Data Engineering",
            ProjectCategory::Devops => "DevOps",
            ProjectCategory::Analytics => "Analytics",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            ProjectCategory::Ai => "🧠",
            ProjectCategory::Ml => "🤖",
            ProjectCategory::DataEngineering => "⚙️",
            ProjectCategory::Devops => "🚀",
            ProjectCategory::Analytics => "📊",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ProjectCategory::Ai => "Large language models, GenAI applications, and AI agents",
            ProjectCategory::Ml => "ML operations, model training, and inference pipelines",
            ProjectCategory::DataEngineering => "ETL pipelines, data orchestration, and streaming",
            ProjectCategory::Devops => "CI/CD, infrastructure automation, and deployment",
            ProjectCategory::Analytics => "BI dashboards, data visualization, and reporting",
        }
    }
}

impl fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ProjectCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProjectCategory::ALL
            .into_iter()
            .find(|c| c.id() == s.trim())
            .ok_or_else(|| format!("Unknown project category: {}", s))
    }
}

/// Delivery state of a project
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    #[default]
    Live,
    ComingSoon,
    InProgress,
}

impl ProjectStatus {
    pub fn label(self) -> &'static str {
        match self {
            ProjectStatus::Live => "live",
            ProjectStatus::ComingSoon => "coming-soon",
            ProjectStatus::InProgress => "in-progress",
        }
    }
}

impl FromStr for ProjectStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "live" => Ok(ProjectStatus::Live),
            "coming-soon" => Ok(ProjectStatus::ComingSoon),
            "in-progress" => Ok(ProjectStatus::InProgress),
            other => Err(format!("Unknown project status: {}", other)),
        }
    }
}

/// A showcased project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub slug: String,
    pub title: String,
    pub date: String,
    pub summary: String,

    /// Falls back to the summary when the file has no description
    pub description: String,

    /// Extended write-up for the project page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,

    pub technologies: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Emoji shown on the project card
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// Source repository URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,

    /// Live demo URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demo: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<ProjectCategory>,

    pub status: ProjectStatus,

    /// Note shown in place of links while the project is coming soon
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coming_soon_message: Option<String>,

    pub featured: bool,

    /// Raw body, handed to the renderer untouched
    pub content: String,
}

impl Document for Project {
    const KIND: CollectionKind = CollectionKind::Projects;

    fn from_front_matter(
        slug: String,
        fm: &FrontMatter,
        body: &str,
        _defaults: &DocumentDefaults,
    ) -> Self {
        let summary = fm.string("summary").unwrap_or_default();
        let description = fm
            .string("description")
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| summary.clone());

        Self {
            title: fm.string("title").unwrap_or_default(),
            date: fm.string("date").unwrap_or_default(),
            summary,
            description,
            long_description: non_empty(fm, &["longDescription", "long_description"]),
            technologies: fm.string_list("technologies"),
            image: fm.string("image").filter(|s| !s.is_empty()),
            icon: non_empty(fm, &["icon"]),
            github: fm.string("github").filter(|s| !s.is_empty()),
            demo: fm.string("demo").filter(|s| !s.is_empty()),
            category: parse_or_warn(fm, "category", &slug),
            status: parse_or_warn(fm, "status", &slug).unwrap_or_default(),
            coming_soon_message: non_empty(fm, &["comingSoonMessage", "coming_soon"]),
            featured: fm.flag("featured"),
            content: body.to_string(),
            slug,
        }
    }

    fn slug(&self) -> &str {
        &self.slug
    }

    fn date(&self) -> &str {
        &self.date
    }
}

/// First non-empty string among `keys`
fn non_empty(fm: &FrontMatter, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| fm.string(key))
        .find(|s| !s.is_empty())
}

fn parse_or_warn<T: FromStr<Err = String>>(fm: &FrontMatter, key: &str, slug: &str) -> Option<T> {
    let raw = fm.string(key)?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!("{} in project {:?}, ignoring", e, slug);
            None
        }
    }
}
