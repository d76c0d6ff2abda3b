use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use coursebook::{api, catalog::Catalog, outline};

#[derive(Parser)]
#[command(name = "coursebook")]
#[command(about = "Read-only HTTP API over hierarchical course catalogs")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the Coursebook server
    Serve {
        /// Port for HTTP API
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Path to the catalog JSON document
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },
    /// Load and validate a catalog document
    Check {
        /// Path to the catalog JSON document
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },
    /// Print the catalog as an ASCII outline
    Tree {
        /// Path to the catalog JSON document
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "coursebook=debug,tower_http=debug".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Default catalog location under the platform data directory.
fn default_catalog_path() -> anyhow::Result<PathBuf> {
    let dirs = directories::ProjectDirs::from("", "", "coursebook")
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    Ok(dirs.data_dir().join("catalog.json"))
}

fn open_catalog(path: Option<PathBuf>) -> anyhow::Result<Catalog> {
    let path = match path {
        Some(path) => path,
        None => default_catalog_path()?,
    };
    Ok(Catalog::load(&path)?)
}

async fn serve(port: u16, catalog: Option<PathBuf>) -> anyhow::Result<()> {
    let catalog = open_catalog(catalog)?;
    let counts = catalog.counts();
    tracing::info!(
        "Loaded catalog: {} courses, {} labs, {} tasks, {} steps",
        counts.courses,
        counts.labs,
        counts.tasks,
        counts.steps
    );

    let app = api::create_router(catalog);

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port)).await?;
    tracing::info!("Coursebook server listening on http://127.0.0.1:{}", port);

    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    match cli.command {
        Some(Commands::Serve { port, catalog }) => {
            tracing::info!("Starting Coursebook server on port {}", port);
            serve(port, catalog).await?;
        }
        Some(Commands::Check { catalog }) => {
            let catalog = open_catalog(catalog)?;
            let counts = catalog.counts();
            println!(
                "Catalog OK: {} courses, {} labs, {} tasks, {} steps",
                counts.courses, counts.labs, counts.tasks, counts.steps
            );
        }
        Some(Commands::Tree { catalog }) => {
            let catalog = open_catalog(catalog)?;
            print!("{}", outline::render_outline(catalog.courses()));
        }
        None => {
            // Default: start server
            tracing::info!("Starting Coursebook server on port 3000");
            serve(3000, None).await?;
        }
    }

    Ok(())
}
