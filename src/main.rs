use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info, warn};

use nntp_daemon::{Config, NntpServer, create_default_config, load_config, logging};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Port to listen on (overrides the config file)
    #[arg(short, long)]
    port: Option<u16>,

    /// Number of worker threads (overrides the config file, 0 = CPU cores)
    #[arg(short, long)]
    threads: Option<usize>,
}

fn main() -> Result<()> {
    logging::init_dual_logging();

    let args = Args::parse();
    let config = load_or_create_config(&args)?;

    let configured_threads = args.threads.unwrap_or(config.server.threads);
    let worker_threads = if configured_threads == 0 {
        std::thread::available_parallelism()
            .map(|p| p.get())
            .unwrap_or(1)
    } else {
        configured_threads
    };

    // Use different runtime based on thread count
    if worker_threads == 1 {
        info!("Starting NNTP daemon with single-threaded runtime");
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        rt.block_on(run_daemon(config))
    } else {
        info!("Starting NNTP daemon with {} worker threads", worker_threads);
        let rt = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(worker_threads)
            .enable_all()
            .build()?;
        rt.block_on(run_daemon(config))
    }
}

/// Load the config file, or create a default one on first run
fn load_or_create_config(args: &Args) -> Result<Config> {
    let mut config = if std::path::Path::new(&args.config).exists() {
        match load_config(&args.config) {
            Ok(config) => config,
            Err(e) => {
                error!(
                    "Failed to load existing config file '{}': {}",
                    args.config, e
                );
                error!("Please check your config file syntax and try again");
                return Err(e);
            }
        }
    } else {
        warn!(
            "Config file '{}' not found, creating default config",
            args.config
        );
        let default_config = create_default_config();
        let config_toml = toml::to_string_pretty(&default_config)?;
        std::fs::write(&args.config, &config_toml)?;
        info!("Created default config file: {}", args.config);
        default_config
    };

    // Command-line flags win over the config file
    if let Some(port) = args.port {
        config.server.port = port;
    }

    Ok(config)
}

async fn run_daemon(config: Config) -> Result<()> {
    std::fs::create_dir_all(&config.spool.path)?;
    info!("Article spool at {}", config.spool.path);

    if config.auth.is_enabled() {
        info!(
            "Client authentication enabled ({} user(s), posting requires login)",
            config.auth.users.len()
        );
    } else {
        info!("Client authentication disabled, posting open to all clients");
    }

    let server = Arc::new(NntpServer::new(config)?);
    let listener = server.bind().await?;

    // Set up graceful shutdown
    tokio::spawn(async move {
        shutdown_signal().await;
        info!("Shutdown signal received, closing listener");
        std::process::exit(0);
    });

    server.run(listener).await;
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
