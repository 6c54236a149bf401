//! Content module - blog posts, projects, and the repository that loads them

mod document;
mod error;
mod frontmatter;
mod post;
mod project;
pub mod repository;

pub use document::{CollectionKind, Document, DocumentDefaults};
pub use error::ContentError;
pub use frontmatter::{parse_date, FrontMatter};
pub use post::BlogPost;
pub use project::{Project, ProjectCategory, ProjectStatus};
pub use repository::ContentRepository;
