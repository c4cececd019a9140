//! Task list web server
//!
//! Serves server-rendered pages to create, view, edit and delete tasks
//! stored in a single SQLite table.

use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tasklist_web::cli::Cli;
use tasklist_web::config::Config;
use tasklist_web::db::Database;
use tasklist_web::logging::{self, LogTarget};
use tasklist_web::web;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(&LogTarget::parse(&cli.log), cli.verbose)?;

    let mut config = Config::resolve(cli.config.as_deref())?;
    cli.apply(&mut config);

    config.ensure_db_dir()?;
    let db = Database::open(&config.server.db_path)?;
    info!("Using database {}", db.path().display());

    let handle = web::start_server(Arc::new(db), config.server.addr()).await?;

    tokio::signal::ctrl_c().await?;
    info!("Received Ctrl-C");

    handle.shutdown().await;
    Ok(())
}
