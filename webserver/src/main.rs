//! WebServer entry point
//!
//! Wires the performer store, lifecycle service, user services and the
//! optional performance scheduler, then serves the REST API until Ctrl+C or
//! SIGTERM.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use engine::core::identity::DEFAULT_AVATAR_BASE_URL;
use engine::{
    AvatarStyle, JsonFileStore, Lifecycle, MemoryStore, PerformanceScheduler, PerformerStore,
    RandomIdentity, UniformEarnings,
};
use shared::{ProcessId, logging, process_info};
use tokio::signal;

use webserver::{
    AppState, BcryptHasher, InMemoryUserStore, WebServer, WebServerError, WebServerResult,
    services::DEFAULT_BCRYPT_COST,
};

/// Command line arguments, with environment fallbacks
#[derive(Parser, Debug)]
#[command(name = "webserver")]
#[command(about = "REST API for the performer arena")]
struct Args {
    /// Interface to bind
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    host: String,

    /// Port for HTTP server
    #[arg(long, env = "PORT", default_value = "5000")]
    port: u16,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Performer snapshot file (in-memory store when omitted)
    #[arg(long, env = "DATA_FILE")]
    data_file: Option<PathBuf>,

    /// Performers to create at startup when the store is empty
    #[arg(long, default_value = "10")]
    seed_performers: usize,

    /// Run a batch performance every N seconds (disabled when omitted)
    #[arg(long, env = "PERFORM_INTERVAL_SECS")]
    perform_interval_secs: Option<u64>,

    /// bcrypt cost factor for password hashes
    #[arg(long, default_value_t = DEFAULT_BCRYPT_COST)]
    bcrypt_cost: u32,

    /// Avatar URL prefix; the performer id is appended
    #[arg(long, env = "AVATAR_BASE_URL", default_value = DEFAULT_AVATAR_BASE_URL)]
    avatar_base_url: String,
}

#[tokio::main]
async fn main() -> WebServerResult<()> {
    let _ = dotenv::dotenv();
    let args = Args::parse();

    ProcessId::init_webserver();
    logging::init_tracing(Some(&args.log_level));
    logging::log_startup(ProcessId::current(), &format!("webserver on port {}", args.port));

    let bind_address: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .map_err(|e| WebServerError::config(format!("Invalid bind address: {e}")))?;

    let store: Arc<dyn PerformerStore> = match &args.data_file {
        Some(path) => {
            process_info!(ProcessId::current(), "💾 Using performer snapshot {}", path.display());
            Arc::new(JsonFileStore::open(path).await?)
        }
        None => {
            process_info!(ProcessId::current(), "🧠 Using in-memory performer store");
            Arc::new(MemoryStore::new())
        }
    };

    let lifecycle = Lifecycle::new(store.clone(), Arc::new(UniformEarnings::default()), Arc::new(RandomIdentity))
        .with_avatars(AvatarStyle::new(args.avatar_base_url.clone()));

    if args.seed_performers > 0 && store.count().await? == 0 {
        let created = lifecycle.seed(args.seed_performers).await?;
        logging::log_progress(ProcessId::current(), "Seeded", &format!("{} performers", created.len()));
    }

    let scheduler = args.perform_interval_secs.filter(|secs| *secs > 0).map(|secs| {
        PerformanceScheduler::new(lifecycle.clone(), Duration::from_secs(secs)).spawn()
    });

    let state = AppState::new(
        lifecycle,
        Arc::new(InMemoryUserStore::new()),
        Arc::new(BcryptHasher::new(args.bcrypt_cost)),
    );

    let result = WebServer::new(bind_address, state).run(shutdown_signal()).await;

    if let Some(scheduler) = scheduler {
        let batches = scheduler.stop().await;
        logging::log_progress(ProcessId::current(), "Scheduler", &format!("ran {batches} batches"));
    }

    match &result {
        Ok(()) => logging::log_success(ProcessId::current(), "WebServer stopped gracefully"),
        Err(e) => logging::log_error(ProcessId::current(), "WebServer", e),
    }
    result
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => logging::log_shutdown(ProcessId::current(), "Received Ctrl+C signal"),
            Err(e) => {
                logging::log_error(ProcessId::current(), "Ctrl+C handler", &e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                logging::log_shutdown(ProcessId::current(), "Received terminate signal");
            }
            Err(e) => {
                logging::log_error(ProcessId::current(), "SIGTERM handler", &e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
