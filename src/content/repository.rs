//! Content repository - reads blog posts and projects from the content directory
//!
//! Every call goes back to the file system; nothing is cached between calls.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

use super::document::{sort_by_date_desc, CollectionKind, Document, DocumentDefaults};
use super::{BlogPost, ContentError, FrontMatter, Project, ProjectCategory};
use crate::config::SiteConfig;
use crate::Folio;

/// Typed, date-sorted access to the site's content collections
#[derive(Debug, Clone)]
pub struct ContentRepository {
    blog_dir: PathBuf,
    projects_dir: PathBuf,
    extension: String,
    defaults: DocumentDefaults,
}

impl ContentRepository {
    /// Create a repository over a site's content directory
    pub fn new(folio: &Folio) -> Self {
        Self::with_config(&folio.content_dir, &folio.config)
    }

    /// Create a repository rooted at `content_dir`
    pub fn with_config<P: AsRef<Path>>(content_dir: P, config: &SiteConfig) -> Self {
        let content_dir = content_dir.as_ref();
        Self {
            blog_dir: content_dir.join(CollectionKind::Blog.dir_name(config)),
            projects_dir: content_dir.join(CollectionKind::Projects.dir_name(config)),
            extension: config.extension().to_string(),
            defaults: DocumentDefaults::from_config(config),
        }
    }

    /// Directory a collection is read from
    pub fn collection_dir(&self, kind: CollectionKind) -> &Path {
        match kind {
            CollectionKind::Blog => &self.blog_dir,
            CollectionKind::Projects => &self.projects_dir,
        }
    }

    /// Path of the file a slug would live in
    pub fn document_path(&self, kind: CollectionKind, slug: &str) -> PathBuf {
        self.collection_dir(kind)
            .join(format!("{}.{}", slug, self.extension))
    }

    /// Load every document of a collection, newest first.
    ///
    /// A missing directory is an empty collection. Files that cannot be
    /// read or whose front-matter is broken are skipped.
    pub fn list<D: Document>(&self) -> Vec<D> {
        let dir = self.collection_dir(D::KIND);
        if !dir.exists() {
            tracing::debug!("No {} directory at {:?}", D::KIND, dir);
            return Vec::new();
        }

        let mut docs = Vec::new();

        for entry in WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| match e {
                Ok(entry) => Some(entry),
                Err(e) => {
                    tracing::warn!("Failed to read {} entry: {}", D::KIND, e);
                    None
                }
            })
        {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let Some(slug) = self.slug_for(path) else {
                continue;
            };

            match self.read_document::<D>(slug, path) {
                Ok(doc) => docs.push(doc),
                Err(e) => {
                    tracing::warn!("Skipping {:?}: {}", path, e);
                }
            }
        }

        sort_by_date_desc(&mut docs);
        tracing::debug!("Loaded {} {} documents from {:?}", docs.len(), D::KIND, dir);

        docs
    }

    /// Look up one document by slug.
    ///
    /// Missing, unreadable and malformed files all come back as `None`;
    /// use [`ContentRepository::load`] to tell them apart.
    pub fn get<D: Document>(&self, slug: &str) -> Option<D> {
        match self.load(slug) {
            Ok(doc) => Some(doc),
            Err(e) if e.is_not_found() => {
                tracing::debug!("{} {:?} not found", D::KIND, slug);
                None
            }
            Err(e) => {
                tracing::warn!("{} {:?} treated as not found: {}", D::KIND, slug, e);
                None
            }
        }
    }

    /// Look up one document by slug, keeping the reason for a failure
    pub fn load<D: Document>(&self, slug: &str) -> Result<D, ContentError> {
        if !is_safe_slug(slug) {
            return Err(ContentError::InvalidSlug(slug.to_string()));
        }
        let path = self.document_path(D::KIND, slug);
        self.read_document(slug.to_string(), &path)
    }

    /// Slugs of a collection in listing order
    pub fn slugs<D: Document>(&self) -> Vec<String> {
        self.list::<D>()
            .iter()
            .map(|doc| doc.slug().to_string())
            .collect()
    }

    fn read_document<D: Document>(&self, slug: String, path: &Path) -> Result<D, ContentError> {
        let text = fs::read_to_string(path).map_err(|e| ContentError::io(path, e))?;
        let (fm, body) = FrontMatter::parse(&text)?;
        Ok(D::from_front_matter(slug, &fm, body, &self.defaults))
    }

    /// Slug of a content file, or `None` if the file is not content
    fn slug_for(&self, path: &Path) -> Option<String> {
        let ext = path.extension().and_then(|e| e.to_str())?;
        if ext != self.extension {
            return None;
        }
        path.file_stem()
            .and_then(|s| s.to_str())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    }

    /// All blog posts, newest first
    pub fn blog_posts(&self) -> Vec<BlogPost> {
        self.list()
    }

    pub fn blog_post(&self, slug: &str) -> Option<BlogPost> {
        self.get(slug)
    }

    /// All projects, newest first
    pub fn projects(&self) -> Vec<Project> {
        self.list()
    }

    pub fn project(&self, slug: &str) -> Option<Project> {
        self.get(slug)
    }

    /// Every tag used by any blog post, sorted and without duplicates
    pub fn tags(&self) -> Vec<String> {
        let tags: BTreeSet<String> = self
            .blog_posts()
            .into_iter()
            .flat_map(|post| post.tags)
            .collect();
        tags.into_iter().collect()
    }

    /// The `n` most recent blog posts
    pub fn recent_posts(&self, n: usize) -> Vec<BlogPost> {
        let mut posts = self.blog_posts();
        posts.truncate(n);
        posts
    }

    /// Blog posts carrying `tag`, newest first
    pub fn posts_by_tag(&self, tag: &str) -> Vec<BlogPost> {
        self.blog_posts()
            .into_iter()
            .filter(|post| post.has_tag(tag))
            .collect()
    }

    /// Projects in `category`, newest first
    pub fn projects_by_category(&self, category: ProjectCategory) -> Vec<Project> {
        self.projects()
            .into_iter()
            .filter(|project| project.category == Some(category))
            .collect()
    }

    /// Projects marked `featured`, newest first
    pub fn featured_projects(&self) -> Vec<Project> {
        self.projects()
            .into_iter()
            .filter(|project| project.featured)
            .collect()
    }
}

/// A slug must name a single file inside its collection directory
fn is_safe_slug(slug: &str) -> bool {
    if slug.is_empty() || slug.contains(['/', '\\', '\0']) {
        return false;
    }
    let mut components = Path::new(slug).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup() -> (TempDir, ContentRepository) {
        let dir = TempDir::new().unwrap();
        let repo = ContentRepository::with_config(dir.path(), &SiteConfig::default());
        (dir, repo)
    }

    fn write(repo: &ContentRepository, kind: CollectionKind, file: &str, content: &str) {
        let dir = repo.collection_dir(kind);
        fs::create_dir_all(dir).unwrap();
        fs::write(dir.join(file), content).unwrap();
    }

    fn post_file(title: &str, date: &str, tags: &str) -> String {
        format!("---\ntitle: {}\ndate: {}\ntags: {}\n---\nBody of {}\n", title, date, tags, title)
    }

    #[test]
    fn test_missing_directory_is_empty() {
        let (_dir, repo) = setup();
        assert!(repo.blog_posts().is_empty());
        assert!(repo.projects().is_empty());
        assert!(repo.tags().is_empty());
    }

    #[test]
    fn test_missing_document_is_not_found() {
        let (_dir, repo) = setup();
        assert!(repo.blog_post("nope").is_none());

        write(&repo, CollectionKind::Blog, "other.mdx", "---\ntitle: Other\n---\n");
        assert!(repo.blog_post("nope").is_none());
        assert!(repo.load::<BlogPost>("nope").unwrap_err().is_not_found());
    }

    #[test]
    fn test_posts_sorted_newest_first() {
        let (_dir, repo) = setup();
        write(&repo, CollectionKind::Blog, "a.mdx", &post_file("A", "2023-06-01", "[]"));
        write(&repo, CollectionKind::Blog, "b.mdx", &post_file("B", "2024-02-10", "[]"));
        write(&repo, CollectionKind::Blog, "c.mdx", &post_file("C", "2024-01-01", "[]"));

        let posts = repo.blog_posts();
        let slugs: Vec<_> = posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["b", "c", "a"]);
        for pair in posts.windows(2) {
            assert!(pair[0].date >= pair[1].date);
        }
    }

    #[test]
    fn test_equal_dates_keep_file_order() {
        let (_dir, repo) = setup();
        write(&repo, CollectionKind::Blog, "beta.mdx", &post_file("Beta", "2024-01-01", "[]"));
        write(&repo, CollectionKind::Blog, "alpha.mdx", &post_file("Alpha", "2024-01-01", "[]"));
        write(&repo, CollectionKind::Blog, "gamma.mdx", &post_file("Gamma", "2024-01-01", "[]"));

        assert_eq!(
            repo.slugs::<BlogPost>(),
            vec!["alpha".to_string(), "beta".to_string(), "gamma".to_string()]
        );
    }

    #[test]
    fn test_undated_posts_sort_last() {
        let (_dir, repo) = setup();
        write(&repo, CollectionKind::Blog, "draft.mdx", "---\ntitle: Draft\n---\n");
        write(&repo, CollectionKind::Blog, "old.mdx", &post_file("Old", "2020-01-01", "[]"));

        assert_eq!(
            repo.slugs::<BlogPost>(),
            vec!["old".to_string(), "draft".to_string()]
        );
    }

    #[test]
    fn test_only_content_files_are_listed() {
        let (_dir, repo) = setup();
        write(&repo, CollectionKind::Blog, "post.mdx", &post_file("Post", "2024-01-01", "[]"));
        write(&repo, CollectionKind::Blog, "notes.txt", "not content");
        write(&repo, CollectionKind::Blog, "readme.md", "# not content either");
        fs::create_dir_all(repo.collection_dir(CollectionKind::Blog).join("nested")).unwrap();
        write(
            &repo,
            CollectionKind::Blog,
            "nested/deep.mdx",
            &post_file("Deep", "2024-01-01", "[]"),
        );

        assert_eq!(repo.slugs::<BlogPost>(), vec!["post".to_string()]);
    }

    #[test]
    fn test_tags_sorted_and_unique() {
        let (_dir, repo) = setup();
        write(&repo, CollectionKind::Blog, "one.mdx", &post_file("One", "2024-01-01", "[go, web]"));
        write(&repo, CollectionKind::Blog, "two.mdx", &post_file("Two", "2024-02-01", "[web, design]"));
        write(&repo, CollectionKind::Blog, "three.mdx", "---\ntitle: Untagged\n---\n");

        assert_eq!(repo.tags(), vec!["design", "go", "web"]);
    }

    #[test]
    fn test_round_trip_single_post() {
        let (_dir, repo) = setup();
        write(
            &repo,
            CollectionKind::Blog,
            "hello-world.mdx",
            &post_file("Hello World", "2024-01-01", "[intro]"),
        );

        let post = repo.blog_post("hello-world").unwrap();
        assert_eq!(
            post,
            BlogPost {
                slug: "hello-world".to_string(),
                title: "Hello World".to_string(),
                date: "2024-01-01".to_string(),
                summary: String::new(),
                author: "Riebeeck van Niekerk".to_string(),
                tags: vec!["intro".to_string()],
                image: None,
                content: "Body of Hello World\n".to_string(),
            }
        );
        // The listing builds the same record
        assert_eq!(repo.blog_posts(), vec![post]);
    }

    #[test]
    fn test_missing_fields_default() {
        let (_dir, repo) = setup();
        write(&repo, CollectionKind::Blog, "bare.mdx", "No front-matter at all.");
        write(&repo, CollectionKind::Projects, "bare.mdx", "---\ntitle: Bare\n---\n");

        let post = repo.blog_post("bare").unwrap();
        assert_eq!(post.title, "");
        assert!(post.tags.is_empty());
        assert_eq!(post.author, "Riebeeck van Niekerk");
        assert_eq!(post.content, "No front-matter at all.");

        let project = repo.project("bare").unwrap();
        assert_eq!(project.title, "Bare");
        assert!(project.technologies.is_empty());
        assert_eq!(project.description, "");
    }

    #[test]
    fn test_malformed_front_matter() {
        let (_dir, repo) = setup();
        write(&repo, CollectionKind::Blog, "good.mdx", &post_file("Good", "2024-01-01", "[]"));
        write(&repo, CollectionKind::Blog, "broken.mdx", "---\ntitle: [oops\n---\nBody");

        assert!(repo.blog_post("broken").is_none());
        assert!(matches!(
            repo.load::<BlogPost>("broken"),
            Err(ContentError::Frontmatter { .. })
        ));
        // The listing keeps going without it
        assert_eq!(repo.slugs::<BlogPost>(), vec!["good".to_string()]);
    }

    #[test]
    fn test_wrongly_typed_fields_default() {
        let (_dir, repo) = setup();
        write(
            &repo,
            CollectionKind::Blog,
            "odd.mdx",
            "---\ntitle:\n  en: Hello\ntags: {a: b}\ndate: 2024-01-01\n---\n",
        );

        let post = repo.blog_post("odd").unwrap();
        assert_eq!(post.title, "");
        assert!(post.tags.is_empty());
        assert_eq!(post.date, "2024-01-01");
    }

    #[test]
    fn test_undecodable_file_is_not_found() {
        let (_dir, repo) = setup();
        let dir = repo.collection_dir(CollectionKind::Blog);
        fs::create_dir_all(dir).unwrap();
        fs::write(dir.join("binary.mdx"), [0xff, 0xfe, 0x00, 0x80]).unwrap();

        assert!(repo.blog_post("binary").is_none());
        assert!(matches!(
            repo.load::<BlogPost>("binary"),
            Err(ContentError::Decode(_))
        ));
        assert!(repo.blog_posts().is_empty());
    }

    #[test]
    fn test_unsafe_slugs_are_rejected() {
        let (dir, repo) = setup();
        fs::write(dir.path().join("secret.mdx"), "---\ntitle: Secret\n---\n").unwrap();
        write(&repo, CollectionKind::Blog, "ok.mdx", "---\ntitle: Ok\n---\n");

        assert!(repo.blog_post("../secret").is_none());
        assert!(repo.blog_post("").is_none());
        assert!(repo.blog_post("..").is_none());
        assert!(matches!(
            repo.load::<BlogPost>("../secret"),
            Err(ContentError::InvalidSlug(_))
        ));
        assert!(repo.blog_post("ok").is_some());
    }

    #[test]
    fn test_recent_posts_and_tag_filter() {
        let (_dir, repo) = setup();
        write(&repo, CollectionKind::Blog, "a.mdx", &post_file("A", "2024-01-01", "[rust]"));
        write(&repo, CollectionKind::Blog, "b.mdx", &post_file("B", "2024-02-01", "[go]"));
        write(&repo, CollectionKind::Blog, "c.mdx", &post_file("C", "2024-03-01", "[rust, web]"));
        write(&repo, CollectionKind::Blog, "d.mdx", &post_file("D", "2024-04-01", "[]"));

        let recent: Vec<_> = repo.recent_posts(3).into_iter().map(|p| p.slug).collect();
        assert_eq!(recent, vec!["d", "c", "b"]);
        assert_eq!(repo.recent_posts(10).len(), 4);

        let rust: Vec<_> = repo.posts_by_tag("rust").into_iter().map(|p| p.slug).collect();
        assert_eq!(rust, vec!["c", "a"]);
    }

    #[test]
    fn test_project_queries() {
        let (_dir, repo) = setup();
        write(
            &repo,
            CollectionKind::Projects,
            "chat.mdx",
            "---\ntitle: Chat\ndate: 2024-05-01\ncategory: ai\nfeatured: true\n---\n",
        );
        write(
            &repo,
            CollectionKind::Projects,
            "lake.mdx",
            "---\ntitle: Lake\ndate: 2024-03-01\ncategory: data-engineering\n---\n",
        );
        write(
            &repo,
            CollectionKind::Projects,
            "agent.mdx",
            "---\ntitle: Agent\ndate: 2024-04-01\ncategory: ai\n---\n",
        );

        let ai: Vec<_> = repo
            .projects_by_category(ProjectCategory::Ai)
            .into_iter()
            .map(|p| p.slug)
            .collect();
        assert_eq!(ai, vec!["chat", "agent"]);
        assert!(repo.projects_by_category(ProjectCategory::Devops).is_empty());

        let featured: Vec<_> = repo.featured_projects().into_iter().map(|p| p.slug).collect();
        assert_eq!(featured, vec!["chat"]);
    }

    #[test]
    fn test_body_only_mdx_and_bom_files_are_listed() {
        let (_dir, repo) = setup();
        write(
            &repo,
            CollectionKind::Blog,
            "jsx.mdx",
            "{/* draft note */}\n\n# Hello\n",
        );
        write(
            &repo,
            CollectionKind::Blog,
            "bom.mdx",
            "\u{feff}---\ntitle: Bom\ndate: 2024-05-01\ntags: [utf8]\n---\nBody\n",
        );

        assert_eq!(
            repo.slugs::<BlogPost>(),
            vec!["bom".to_string(), "jsx".to_string()]
        );

        let jsx = repo.blog_post("jsx").unwrap();
        assert_eq!(jsx.title, "");
        assert_eq!(jsx.content, "{/* draft note */}\n\n# Hello\n");

        let bom = repo.blog_post("bom").unwrap();
        assert_eq!(bom.title, "Bom");
        assert_eq!(bom.tags, vec!["utf8"]);
        assert_eq!(bom.content, "Body\n");
    }

    #[test]
    fn test_custom_extension() {
        let dir = TempDir::new().unwrap();
        let config = SiteConfig {
            content_extension: "md".to_string(),
            ..Default::default()
        };
        let repo = ContentRepository::with_config(dir.path(), &config);
        write(&repo, CollectionKind::Blog, "kept.md", "---\ntitle: Kept\n---\n");
        write(&repo, CollectionKind::Blog, "ignored.mdx", "---\ntitle: Ignored\n---\n");

        assert_eq!(repo.slugs::<BlogPost>(), vec!["kept".to_string()]);
        assert!(repo.blog_post("ignored").is_none());
    }
}
