use std::path::PathBuf;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio::config::FolioConfig;
use folio::content::ContentStore;
use folio::{api, generate};

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Single-page academic homepage generator")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args)]
struct ContentArgs {
    /// Content file (.toml or .json)
    #[arg(short, long)]
    content: Option<PathBuf>,

    /// Directory of static assets (images, favicon)
    #[arg(long)]
    public: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render index.html and copy assets into the output directory
    Build {
        #[command(flatten)]
        content: ContentArgs,

        /// Output directory
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Serve a live-rendered preview
    Serve {
        #[command(flatten)]
        content: ContentArgs,

        /// Port for the preview server
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Validate the content file and print a summary
    Check {
        /// Content file (.toml or .json)
        #[arg(short, long)]
        content: Option<PathBuf>,
    },
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "folio=debug,tower_http=debug".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let env = FolioConfig::from_env();

    match cli.command {
        Some(Commands::Build { content, out }) => {
            let config = env.with_overrides(content.content, content.public, out, None);
            build(&config)?;
        }
        Some(Commands::Serve { content, port }) => {
            let config = env.with_overrides(content.content, content.public, None, port);
            serve(&config).await?;
        }
        Some(Commands::Check { content }) => {
            let config = env.with_overrides(content, None, None, None);
            let store = ContentStore::load(&config.content)?;
            println!(
                "{}: {} publications, {} filters (default {:?}), {} news items",
                config.content.display(),
                store.publications().len(),
                store.filters().len(),
                store.default_filter().id,
                store.news().len()
            );
        }
        None => build(&env)?,
    }

    Ok(())
}

fn build(config: &FolioConfig) -> anyhow::Result<()> {
    let store = ContentStore::load(&config.content)?;
    let report = generate::build_site(&store, &config.public_dir, &config.out_dir)?;
    println!("Built {}", report.index.display());
    Ok(())
}

async fn serve(config: &FolioConfig) -> anyhow::Result<()> {
    let store = Arc::new(ContentStore::load(&config.content)?);
    let public_dir = config.public_dir.is_dir().then(|| config.public_dir.clone());
    let app = api::create_router(store, public_dir);

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", config.port)).await?;
    tracing::info!("Preview server listening on http://127.0.0.1:{}", config.port);

    axum::serve(listener, app).await?;
    Ok(())
}
