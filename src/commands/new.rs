//! Create a new blog post or project

use anyhow::Result;
use std::fs;
use std::path::PathBuf;

use super::init::{BLOG_SCAFFOLD, PROJECT_SCAFFOLD};
use crate::content::CollectionKind;
use crate::Folio;

/// Create a new content document from the collection's scaffold.
/// Returns the path of the created file.
pub fn create_document(
    folio: &Folio,
    kind: CollectionKind,
    title: &str,
    slug: Option<&str>,
) -> Result<PathBuf> {
    let slug = match slug {
        Some(s) => s.to_string(),
        None => slug::slugify(title),
    };
    if slug.is_empty() {
        anyhow::bail!("Cannot derive a file name from title {:?}", title);
    }

    let repo = folio.content();
    let file_path = repo.document_path(kind, &slug);

    // Check if file already exists
    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    // Load scaffold template
    let scaffold_name = match kind {
        CollectionKind::Blog => "blog",
        CollectionKind::Projects => "project",
    };
    let scaffold_path = folio
        .base_dir
        .join("scaffolds")
        .join(format!("{}.{}", scaffold_name, folio.config.extension()));
    let scaffold_content = if scaffold_path.exists() {
        fs::read_to_string(&scaffold_path)?
    } else {
        match kind {
            CollectionKind::Blog => BLOG_SCAFFOLD.to_string(),
            CollectionKind::Projects => PROJECT_SCAFFOLD.to_string(),
        }
    };

    // Replace template variables
    let now = chrono::Local::now();
    let content = scaffold_content
        .replace("{{ title }}", &yaml_string(title))
        .replace("{{ date }}", &now.format("%Y-%m-%d").to_string());

    fs::create_dir_all(repo.collection_dir(kind))?;
    fs::write(&file_path, content)?;

    tracing::info!("Created {} {:?}", kind, file_path);

    Ok(file_path)
}

/// Quote a title so YAML reads it back verbatim
fn yaml_string(s: &str) -> String {
    format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
}

/// Run the new command
pub fn run(folio: &Folio, kind: &str, title: &str, slug: Option<&str>) -> Result<()> {
    let kind: CollectionKind = kind.parse().map_err(anyhow::Error::msg)?;
    let path = create_document(folio, kind, title, slug)?;
    println!("Created: {:?}", path);
    Ok(())
}
