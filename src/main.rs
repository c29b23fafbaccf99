//! CLI entry point for synchro-blog

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "synchro-blog")]
#[command(version)]
#[command(about = "Blog content pipeline: list, filter and render markdown posts", long_about = None)]
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
    /// List posts, newest first
    #[command(alias = "ls")]
    List {
        /// Only show posts with this tag ("all" shows every post)
        #[arg(short, long)]
        tag: Option<String>,

        /// Only show featured posts
        #[arg(short, long)]
        featured: bool,
    },

    /// List every tag in use
    Tags,

    /// Render a single post to HTML
    Show {
        /// Slug of the post
        slug: String,

        /// Wrap the body in the full page template
        #[arg(long)]
        page: bool,
    },

    /// Start a local preview server
    #[command(alias = "s")]
    Server {
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// IP address to bind to
        #[arg(short, long)]
        ip: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "synchro_blog=debug,info"
    } else {
        "synchro_blog=info"
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
    let blog = synchro_blog::Blog::new(&base_dir)?;

    match cli.command {
        Commands::List { tag, featured } => {
            synchro_blog::commands::list::run(&blog, tag.as_deref(), featured)?;
        }

        Commands::Tags => {
            synchro_blog::commands::tags::run(&blog)?;
        }

        Commands::Show { slug, page } => {
            synchro_blog::commands::show::run(&blog, &slug, page)?;
        }

        Commands::Server { port, ip } => {
            let ip = ip.unwrap_or_else(|| blog.config.server.ip.clone());
            let port = port.unwrap_or(blog.config.server.port);
            tracing::info!("Starting server at http://{}:{}", ip, port);
            synchro_blog::server::start(blog, &ip, port).await?;
        }
    }

    Ok(())
}
