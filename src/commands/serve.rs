//! Run the HTTP server

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use colored::Colorize;
use log::{info, warn};

use responder::adapters::JsonFileStore;
use responder::config::Config;
use responder::core::QuestionRepository;
use responder::server;

/// Start serving the configured document
pub fn serve(
    config: Option<&Path>,
    host: Option<String>,
    port: Option<u16>,
    data: Option<PathBuf>,
    init: bool,
) -> anyhow::Result<()> {
    let config = Config::load(config)?.with_overrides(host, port, data);
    let store = JsonFileStore::new(&config.storage.path);

    if init && store.init(false)? {
        info!("Created {}", store.path().display());
    }
    if !store.path().exists() {
        warn!(
            "{} does not exist yet; run 'responder init' or pass --init",
            store.path().display()
        );
    }

    let addr = config.addr();
    println!("{}", "Starting responder...".bold());
    println!("Listening on http://{}", addr.cyan());
    println!("Document: {}", store.path().display());
    println!();
    println!("Press Ctrl+C to stop");

    let repo = QuestionRepository::new(store);
    server::serve(&addr, &repo).with_context(|| format!("Server on {addr} stopped"))
}
