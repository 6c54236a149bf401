//! Initialize a new portfolio site

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::{Folio, CONFIG_FILE};

const CONFIG_TEMPLATE: &str = r#"# Site
title: Portfolio
description: ''
author: Riebeeck van Niekerk
url: http://localhost:4000

# Directory
content_dir: content
blog_dir: blog
projects_dir: projects
content_extension: mdx
state_dir: .folio
"#;

pub(crate) const BLOG_SCAFFOLD: &str = r#"---
title: {{ title }}
date: {{ date }}
summary: ''
tags: []
---
"#;

pub(crate) const PROJECT_SCAFFOLD: &str = r#"---
title: {{ title }}
date: {{ date }}
summary: ''
description: ''
technologies: []
status: in-progress
featured: false
---
"#;

/// Initialize a new site in the given directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    // Create directory structure
    fs::create_dir_all(target_dir.join("content/blog"))?;
    fs::create_dir_all(target_dir.join("content/projects"))?;
    fs::create_dir_all(target_dir.join("scaffolds"))?;

    write_if_missing(&target_dir.join(CONFIG_FILE), CONFIG_TEMPLATE)?;
    write_if_missing(&target_dir.join("scaffolds/blog.mdx"), BLOG_SCAFFOLD)?;
    write_if_missing(&target_dir.join("scaffolds/project.mdx"), PROJECT_SCAFFOLD)?;

    let today = chrono::Local::now().format("%Y-%m-%d");

    let sample_post = format!(
        r#"---
title: Hello World
date: {}
summary: A first post to show how content files are laid out.
tags:
  - intro
---

Welcome! Every file in `content/blog` is a post. The block between the
`---` lines holds its metadata; everything after it is the body.

Create another one with:

```bash
$ folio new "My New Post"
```
"#,
        today
    );
    write_if_missing(&target_dir.join("content/blog/hello-world.mdx"), &sample_post)?;

    let sample_project = format!(
        r#"---
title: Sample Project
date: {}
summary: A placeholder for the project showcase.
technologies:
  - Rust
category: devops
status: live
featured: true
---

Describe what the project does, how it was built, and what came out of it.
"#,
        today
    );
    write_if_missing(
        &target_dir.join("content/projects/sample-project.mdx"),
        &sample_project,
    )?;

    Ok(())
}

fn write_if_missing(path: &Path, content: &str) -> Result<()> {
    if path.exists() {
        tracing::info!("Keeping existing {:?}", path);
        return Ok(());
    }
    fs::write(path, content)?;
    tracing::debug!("Created {:?}", path);
    Ok(())
}

/// Run the init command with an existing Folio instance
pub fn run(folio: &Folio) -> Result<()> {
    init_site(&folio.base_dir)
}
