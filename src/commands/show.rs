//! Show a single blog post or project

use anyhow::Result;

use crate::content::{BlogPost, CollectionKind, Project, ProjectStatus};
use crate::Folio;

/// Print one document, either as text or as JSON
pub fn run(folio: &Folio, kind: &str, slug: &str, json: bool) -> Result<()> {
    let kind: CollectionKind = kind.parse().map_err(anyhow::Error::msg)?;
    let repo = folio.content();

    let output = match kind {
        CollectionKind::Blog => {
            let Some(post) = repo.blog_post(slug) else {
                anyhow::bail!("Post not found: {}", slug);
            };
            if json {
                serde_json::to_string_pretty(&post)?
            } else {
                render_post(&post)
            }
        }
        CollectionKind::Projects => {
            let Some(project) = repo.project(slug) else {
                anyhow::bail!("Project not found: {}", slug);
            };
            if json {
                serde_json::to_string_pretty(&project)?
            } else {
                render_project(&project)
            }
        }
    };

    println!("{}", output);
    Ok(())
}

fn render_post(post: &BlogPost) -> String {
    let mut out = format!("{}\n", post.title);
    out.push_str(&format!("  date:    {}\n", post.date));
    out.push_str(&format!("  author:  {}\n", post.author));
    if !post.tags.is_empty() {
        out.push_str(&format!("  tags:    {}\n", post.tags.join(", ")));
    }
    if let Some(image) = &post.image {
        out.push_str(&format!("  image:   {}\n", image));
    }
    if !post.summary.is_empty() {
        out.push_str(&format!("\n{}\n", post.summary));
    }
    if !post.content.trim().is_empty() {
        out.push_str(&format!("\n{}", post.content.trim()));
    }
    out
}

fn render_project(project: &Project) -> String {
    let mut out = match &project.icon {
        Some(icon) => format!("{} {}\n", icon, project.title),
        None => format!("{}\n", project.title),
    };
    out.push_str(&format!("  date:    {}\n", project.date));
    out.push_str(&format!("  status:  {}\n", project.status.label()));
    if project.status == ProjectStatus::ComingSoon {
        let message = project
            .coming_soon_message
            .as_deref()
            .unwrap_or("Coming soon. Check back later!");
        out.push_str(&format!("  note:    {}\n", message));
    }
    if let Some(category) = project.category {
        out.push_str(&format!("  category: {} {}\n", category.glyph(), category.name()));
    }
    if !project.technologies.is_empty() {
        out.push_str(&format!("  stack:   {}\n", project.technologies.join(", ")));
    }
    if let Some(github) = &project.github {
        out.push_str(&format!("  github:  {}\n", github));
    }
    if let Some(demo) = &project.demo {
        out.push_str(&format!("  demo:    {}\n", demo));
    }
    if project.featured {
        out.push_str("  featured\n");
    }
    if !project.description.is_empty() {
        out.push_str(&format!("\n{}\n", project.description));
    }
    if let Some(long) = &project.long_description {
        out.push_str(&format!("\n{}\n", long));
    }
    if !project.content.trim().is_empty() {
        out.push_str(&format!("\n{}", project.content.trim()));
    }
    out
}
