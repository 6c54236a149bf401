//! Blog post model

use serde::{Deserialize, Serialize};

use super::document::{CollectionKind, Document, DocumentDefaults};
use super::FrontMatter;

/// A blog post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    /// File name without extension
    pub slug: String,

    /// Post title
    pub title: String,

    /// Publication date as written in the front-matter
    pub date: String,

    /// Short teaser shown in listings
    pub summary: String,

    pub author: String,

    /// Post tags
    pub tags: Vec<String>,

    /// Cover image
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Raw body, handed to the renderer untouched
    pub content: String,
}

impl BlogPost {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

impl Document for BlogPost {
    const KIND: CollectionKind = CollectionKind::Blog;

    fn from_front_matter(
        slug: String,
        fm: &FrontMatter,
        body: &str,
        defaults: &DocumentDefaults,
    ) -> Self {
        Self {
            slug,
            title: fm.string("title").unwrap_or_default(),
            date: fm.string("date").unwrap_or_default(),
            summary: fm.string("summary").unwrap_or_default(),
            author: fm
                .string("author")
                .filter(|a| !a.is_empty())
                .unwrap_or_else(|| defaults.author.clone()),
            tags: fm.string_list("tags"),
            image: fm.string("image").filter(|i| !i.is_empty()),
            content: body.to_string(),
        }
    }

    fn slug(&self) -> &str {
        &self.slug
    }

    fn date(&self) -> &str {
        &self.date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> DocumentDefaults {
        DocumentDefaults {
            author: "Site Author".to_string(),
        }
    }

    fn post(slug: &str) -> BlogPost {
        let (fm, body) = FrontMatter::parse("").unwrap();
        BlogPost::from_front_matter(slug.to_string(), &fm, body, &defaults())
    }

    #[test]
    fn test_all_fields_default() {
        let post = post("empty");
        assert_eq!(post.slug, "empty");
        assert_eq!(post.title, "");
        assert_eq!(post.date, "");
        assert_eq!(post.summary, "");
        assert_eq!(post.author, "Site Author");
        assert!(post.tags.is_empty());
        assert_eq!(post.image, None);
        assert_eq!(post.content, "");
    }

    #[test]
    fn test_fields_from_front_matter() {
        let content = r#"---
title: Shipping Faster
date: 2024-05-02
summary: Notes on release trains
author: Jane
tags: [devops, process]
image: /images/train.png
---
Body"#;
        let (fm, body) = FrontMatter::parse(content).unwrap();
        let post = BlogPost::from_front_matter("shipping".to_string(), &fm, body, &defaults());

        assert_eq!(post.title, "Shipping Faster");
        assert_eq!(post.date, "2024-05-02");
        assert_eq!(post.summary, "Notes on release trains");
        assert_eq!(post.author, "Jane");
        assert_eq!(post.tags, vec!["devops", "process"]);
        assert_eq!(post.image.as_deref(), Some("/images/train.png"));
        assert_eq!(post.content, "Body");
        assert!(post.has_tag("devops"));
        assert!(!post.has_tag("design"));
    }

    #[test]
    fn test_empty_author_uses_default() {
        let (fm, body) = FrontMatter::parse("---\nauthor: ''\n---\n").unwrap();
        let post = BlogPost::from_front_matter("a".to_string(), &fm, body, &defaults());
        assert_eq!(post.author, "Site Author");
    }
}
