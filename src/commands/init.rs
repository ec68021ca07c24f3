//! Create an empty question document

use std::path::{Path, PathBuf};

use colored::Colorize;

use responder::adapters::JsonFileStore;
use responder::config::Config;

/// Write `[]` to the configured document path
pub fn init(config: Option<&Path>, data: Option<PathBuf>, force: bool) -> anyhow::Result<()> {
    let config = Config::load(config)?.with_overrides(None, None, data);
    let store = JsonFileStore::new(&config.storage.path);

    if store.init(force)? {
        println!("{} {}", "Created".green().bold(), store.path().display());
    } else {
        println!("Already initialized ({} exists).", store.path().display());
        println!("Use --force to reinitialize.");
    }

    Ok(())
}
