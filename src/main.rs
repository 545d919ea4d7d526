//! Newsbrief main entry point
//!
//! Prepares language data, then serves the web front end.

use clap::Parser;
use newsbrief::config::{
    build_config, PartialConfig, PartialFetchConfig, PartialNlpConfig, PartialServerConfig,
    DEFAULT_SECRET_KEY,
};
use newsbrief::web::run;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Newsbrief: summarize a news article from its link
///
/// Serves a one-page web app that fetches an article, extracts its text and
/// metadata, and shows a short summary with a sentiment label.
#[derive(Parser, Debug)]
#[command(name = "newsbrief")]
#[command(version = "1.0.0")]
#[command(about = "Summarize a news article from its link", long_about = None)]
struct Cli {
    /// Path to an optional TOML configuration file
    #[arg(long, value_name = "FILE", env = "NEWSBRIEF_CONFIG")]
    config: Option<PathBuf>,

    /// Address to bind
    #[arg(long, env = "NEWSBRIEF_HOST")]
    host: Option<String>,

    /// Port to listen on
    #[arg(long, env = "PORT")]
    port: Option<u16>,

    /// Secret used to sign flash-message cookies
    #[arg(long, env = "SECRET_KEY", hide_env_values = true)]
    secret_key: Option<String>,

    /// Directory for cached language data
    #[arg(long, value_name = "DIR", env = "NLP_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Where to download the sentiment lexicon from when it is missing
    #[arg(long, value_name = "URL", env = "LEXICON_URL")]
    lexicon_url: Option<String>,

    /// Timeout for outbound requests, in seconds
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Cli {
    fn overrides(&self) -> PartialConfig {
        PartialConfig {
            server: PartialServerConfig {
                host: self.host.clone(),
                port: self.port,
                secret_key: self.secret_key.clone(),
            },
            nlp: PartialNlpConfig {
                data_dir: self.data_dir.clone(),
                lexicon_url: self.lexicon_url.clone(),
            },
            fetch: PartialFetchConfig {
                timeout_secs: self.timeout,
                user_agent: None,
            },
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let config = match build_config(cli.config.as_deref(), cli.overrides()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    if config.server.secret_key == DEFAULT_SECRET_KEY {
        tracing::warn!("SECRET_KEY not set; using the development default");
    }

    match run(config).await {
        Ok(()) => Ok(()),
        Err(e) => {
            tracing::error!("Newsbrief stopped: {}", e);
            Err(e.into())
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("newsbrief=info,tower_http=info,warn"),
            1 => EnvFilter::new("newsbrief=debug,tower_http=debug,info"),
            2 => EnvFilter::new("newsbrief=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
