use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use skimmer_core::ExtractConfig;
use skimmer_extract::ExtractPipeline;
use skimmer_web::{create_app, AppState};

#[derive(Parser, Debug)]
#[command(author, version, about = "Extract structured article records from news pages", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the extraction HTTP service
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "127.0.0.1:3000")]
        addr: String,
    },
    /// Extract articles from one page and print them as JSON
    Extract {
        /// Page URL to extract from
        url: String,
        /// Pretty-print the JSON payload
        #[arg(long)]
        pretty: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();
    let pipeline = ExtractPipeline::with_http(ExtractConfig::default())
        .context("failed to build extraction pipeline")?;

    match cli.command {
        Commands::Serve { addr } => {
            let app = create_app(AppState { pipeline });
            let listener = tokio::net::TcpListener::bind(&addr)
                .await
                .with_context(|| format!("failed to bind {}", addr))?;
            info!("🗞️  skimmer listening on http://{}", addr);
            axum::serve(listener, app).await.context("server error")?;
        }
        Commands::Extract { url, pretty } => {
            let response = pipeline.extract(&url).await?;
            let payload = if pretty {
                serde_json::to_string_pretty(&response)?
            } else {
                serde_json::to_string(&response)?
            };
            println!("{}", payload);
        }
    }

    Ok(())
}
