//! CLI entry point for folio-rs

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio_rs::commands::list::ListOptions;
use folio_rs::commands::theme::ThemeAction;

#[derive(Parser)]
#[command(name = "folio")]
#[command(author = "Riebeeck van Niekerk")]
#[command(version = "0.1.0")]
#[command(about = "Blog posts, projects and color themes for a portfolio site", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new site
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Create a new blog post or project
    New {
        /// Collection to add to (blog, project)
        #[arg(short, long, default_value = "blog")]
        kind: String,

        /// Title of the new document
        title: String,

        /// Slug (file name) to use instead of one derived from the title
        #[arg(short, long)]
        slug: Option<String>,
    },

    /// List site content
    List {
        /// Type of content to list (blog, projects, tags, categories)
        #[arg(default_value = "blog")]
        r#type: String,

        /// Show at most this many entries
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Only posts with this tag
        #[arg(short, long)]
        tag: Option<String>,

        /// Only projects in this category
        #[arg(long)]
        category: Option<String>,

        /// Only featured projects
        #[arg(short, long)]
        featured: bool,
    },

    /// Show a single blog post or project
    Show {
        /// Collection to read from (blog, project)
        kind: String,

        /// Slug of the document
        slug: String,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Inspect or switch the color theme
    Theme {
        #[command(subcommand)]
        action: Option<ThemeCommand>,
    },

    /// Remove saved preferences
    Clean,

    /// Start the content API server
    #[command(alias = "s")]
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,
    },

    /// Display version information
    Version,
}

#[derive(Subcommand)]
enum ThemeCommand {
    /// Print the active theme
    Current,
    /// List every theme
    List,
    /// Switch to a theme by name
    Set {
        /// coastal, terracotta or lavender
        name: String,
    },
    /// Switch to the next theme
    Cycle,
    /// Print the active theme as CSS
    Css {
        /// Print rules for every theme instead
        #[arg(long)]
        all: bool,
    },
}

impl From<ThemeCommand> for ThemeAction {
    fn from(cmd: ThemeCommand) -> Self {
        match cmd {
            ThemeCommand::Current => ThemeAction::Current,
            ThemeCommand::List => ThemeAction::List,
            ThemeCommand::Set { name } => ThemeAction::Set(name),
            ThemeCommand::Cycle => ThemeAction::Cycle,
            ThemeCommand::Css { all } => ThemeAction::Css { all },
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "folio_rs=debug,info"
    } else {
        "folio_rs=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing site in {:?}", target_dir);
            folio_rs::commands::init::init_site(&target_dir)?;
            println!("Initialized site in {:?}", target_dir);
        }

        Commands::New { kind, title, slug } => {
            let folio = folio_rs::Folio::new(&base_dir)?;
            tracing::info!("Creating new {} with title: {}", kind, title);
            folio_rs::commands::new::run(&folio, &kind, &title, slug.as_deref())?;
        }

        Commands::List {
            r#type,
            limit,
            tag,
            category,
            featured,
        } => {
            let folio = folio_rs::Folio::new(&base_dir)?;
            let options = ListOptions {
                limit,
                tag,
                category,
                featured,
            };
            folio_rs::commands::list::run(&folio, &r#type, &options)?;
        }

        Commands::Show { kind, slug, json } => {
            let folio = folio_rs::Folio::new(&base_dir)?;
            folio_rs::commands::show::run(&folio, &kind, &slug, json)?;
        }

        Commands::Theme { action } => {
            let folio = folio_rs::Folio::new(&base_dir)?;
            let action = action.map(ThemeAction::from).unwrap_or(ThemeAction::Current);
            folio_rs::commands::theme::run(&folio, &action)?;
        }

        Commands::Clean => {
            let folio = folio_rs::Folio::new(&base_dir)?;
            tracing::info!("Removing saved preferences...");
            folio.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::Serve { port, ip } => {
            let folio = folio_rs::Folio::new(&base_dir)?;
            tracing::info!("Starting server at http://{}:{}", ip, port);
            folio_rs::server::start(&folio, &ip, port).await?;
        }

        Commands::Version => {
            println!("folio-rs version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
