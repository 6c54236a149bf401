//! List site content

use anyhow::Result;

use crate::content::{BlogPost, ContentRepository, Project, ProjectCategory};
use crate::Folio;

/// Filters for `folio list`
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    pub limit: Option<usize>,
    pub tag: Option<String>,
    pub category: Option<String>,
    pub featured: bool,
}

/// Blog posts after applying the tag filter and limit
pub fn select_posts(repo: &ContentRepository, options: &ListOptions) -> Vec<BlogPost> {
    match (&options.tag, options.limit) {
        (None, Some(limit)) => repo.recent_posts(limit),
        (None, None) => repo.blog_posts(),
        (Some(tag), limit) => {
            let mut posts = repo.posts_by_tag(tag);
            if let Some(limit) = limit {
                posts.truncate(limit);
            }
            posts
        }
    }
}

/// Projects after applying the category/featured filters and limit
pub fn select_projects(repo: &ContentRepository, options: &ListOptions) -> Result<Vec<Project>> {
    let mut projects = match &options.category {
        Some(category) => {
            let category: ProjectCategory = category.parse().map_err(anyhow::Error::msg)?;
            repo.projects_by_category(category)
        }
        None => repo.projects(),
    };
    if options.featured {
        projects.retain(|p| p.featured);
    }
    if let Some(limit) = options.limit {
        projects.truncate(limit);
    }
    Ok(projects)
}

/// List site content by type
pub fn run(folio: &Folio, content_type: &str, options: &ListOptions) -> Result<()> {
    let repo = folio.content();

    match content_type {
        "blog" | "post" | "posts" => {
            let posts = select_posts(&repo, options);
            if posts.is_empty() {
                println!("No posts yet.");
                return Ok(());
            }
            println!("Posts ({}):", posts.len());
            for post in posts {
                println!("  {} - {} [{}]", display_date(&post.date), post.title, post.slug);
            }
        }
        "project" | "projects" => {
            let projects = select_projects(&repo, options)?;
            if projects.is_empty() {
                println!("No projects yet.");
                return Ok(());
            }
            println!("Projects ({}):", projects.len());
            for project in projects {
                let category = project
                    .category
                    .map(|c| format!(" {} {}", c.glyph(), c.name()))
                    .unwrap_or_default();
                println!(
                    "  {} - {} [{}] ({}){}{}",
                    display_date(&project.date),
                    project.title,
                    project.slug,
                    project.status.label(),
                    category,
                    if project.featured { " *" } else { "" }
                );
            }
        }
        "tag" | "tags" => {
            let tags = repo.tags();
            println!("Tags ({}):", tags.len());
            for tag in tags {
                println!("  {}", tag);
            }
        }
        "category" | "categories" => {
            println!("Categories ({}):", ProjectCategory::ALL.len());
            for category in ProjectCategory::ALL {
                println!(
                    "  {} {} ({}) - {}",
                    category.glyph(),
                    category.name(),
                    category.id(),
                    category.description()
                );
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: blog, projects, tags, categories",
                content_type
            );
        }
    }

    Ok(())
}

fn display_date(date: &str) -> &str {
    if date.is_empty() {
        "(undated)"
    } else {
        date
    }
}
