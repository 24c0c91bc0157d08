//! MindFuel server entry point.
//!
//! # Responsibility
//! - Resolve configuration from flags and environment.
//! - Initialize logging before any store or network work.
//! - Run the HTTP service until a shutdown signal arrives.

use std::{net::SocketAddr, path::PathBuf, process::ExitCode};

use clap::Parser;
use log::error;
use mindfuel_api::{
    config::{DEFAULT_BIND, DEFAULT_DB_PATH},
    serve, ServerConfig,
};

#[derive(Debug, Parser)]
#[command(name = "mindfuel", version)]
#[command(about = "Habit and mood tracking HTTP service")]
struct Args {
    /// SQLite database file; created with its tables when missing.
    #[arg(long, env = "MINDFUEL_DB_PATH", default_value = DEFAULT_DB_PATH)]
    db: PathBuf,

    /// Address the HTTP listener binds to.
    #[arg(long, env = "MINDFUEL_BIND", default_value = DEFAULT_BIND)]
    bind: SocketAddr,

    /// trace|debug|info|warn|error; defaults to debug in debug builds.
    #[arg(long, env = "MINDFUEL_LOG_LEVEL")]
    log_level: Option<String>,

    /// Absolute directory for rolling log files, in addition to stderr.
    #[arg(long, env = "MINDFUEL_LOG_DIR")]
    log_dir: Option<String>,
}

impl Args {
    fn server_config(&self) -> ServerConfig {
        ServerConfig {
            db_path: self.db.clone(),
            bind: self.bind,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let level = args
        .log_level
        .as_deref()
        .unwrap_or_else(|| mindfuel_core::default_log_level());
    if let Err(err) = mindfuel_core::init_logging(level, args.log_dir.as_deref()) {
        eprintln!("mindfuel: {err}");
        return ExitCode::FAILURE;
    }

    match serve(args.server_config()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=server_exit module=cli status=error error={err}");
            ExitCode::FAILURE
        }
    }
}
