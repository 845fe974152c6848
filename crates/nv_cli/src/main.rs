use clap::{Parser, Subcommand};
use nv_cli::pipeline;
use nv_core::{Config, Result};
use nv_feed::BingNewsSource;
use nv_speech::{GoogleTranslateTts, SpeechSynthesizer};
use nv_web::AppState;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, Level};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory holding the pipeline's documents and audio artifacts
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,
    /// Comma-separated override of the tracked companies
    #[arg(long, value_delimiter = ',')]
    companies: Option<Vec<String>>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Fetch recent news for every tracked company and persist the corpus
    Fetch,
    /// Classify the persisted corpus and persist the analysis document
    Analyze,
    /// Render every company's analysis summary to speech
    Narrate {
        /// Request a reduced speaking rate
        #[arg(long)]
        slow: bool,
    },
    /// Run fetch, analyze and narrate in sequence
    Run {
        #[arg(long)]
        slow: bool,
    },
    /// Serve the persisted artifacts over HTTP
    Serve {
        #[arg(long, default_value = "0.0.0.0:8001")]
        addr: SocketAddr,
    },
}

fn synthesizer() -> Result<Arc<dyn SpeechSynthesizer>> {
    Ok(Arc::new(GoogleTranslateTts::new()?))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let cli = Cli::parse();
    let mut config = Config::default().with_data_dir(cli.data_dir);
    if let Some(companies) = cli.companies {
        config.companies = companies;
    }

    match cli.command {
        Commands::Fetch => {
            let source = BingNewsSource::new()?;
            pipeline::fetch_stage(&config, &source).await
        }
        Commands::Analyze => pipeline::analyze_stage(&config).await,
        Commands::Narrate { slow } => {
            config.slow_speech = slow;
            pipeline::narrate_stage(&config, synthesizer()?).await
        }
        Commands::Run { slow } => {
            config.slow_speech = slow;
            let source = BingNewsSource::new()?;
            pipeline::run_all(&config, &source, synthesizer()?).await
        }
        Commands::Serve { addr } => {
            let app = nv_web::create_app(AppState::new(config));
            let listener = tokio::net::TcpListener::bind(addr).await?;
            info!("🌐 Serving artifacts on {}", addr);
            axum::serve(listener, app).await?;
            Ok(())
        }
    }
}
