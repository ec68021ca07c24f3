//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands;

/// responder - Questions and answers over HTTP, stored in one JSON file
#[derive(Parser, Debug)]
#[command(
    name = "responder",
    version,
    about = "Questions and answers over HTTP, stored in one JSON file",
    long_about = "Serve CRUD-style endpoints for questions and their answers.\n\n\
                  Everything is persisted as a single JSON document that is\n\
                  re-read on every request and rewritten on every change."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Interface to bind (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind (overrides config)
        #[arg(short, long)]
        port: Option<u16>,

        /// Path of the JSON document (overrides config)
        #[arg(short, long)]
        data: Option<PathBuf>,

        /// Config file (defaults to ./responder.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Create an empty document first if none exists
        #[arg(long)]
        init: bool,
    },

    /// Create an empty question document
    Init {
        /// Path of the JSON document (overrides config)
        #[arg(short, long)]
        data: Option<PathBuf>,

        /// Config file (defaults to ./responder.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Overwrite an existing document
        #[arg(short, long)]
        force: bool,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    match cli.command {
        Some(Command::Serve {
            host,
            port,
            data,
            config,
            init,
        }) => commands::serve(config.as_deref(), host, port, data, init),
        Some(Command::Init {
            data,
            config,
            force,
        }) => commands::init(config.as_deref(), data, force),
        Some(Command::Version) => {
            println!("responder v{}", responder::VERSION);
            Ok(())
        },
        None => {
            println!("responder v{}", responder::VERSION);
            println!("\nRun 'responder --help' for usage");
            println!("Run 'responder serve' to start the server");
            Ok(())
        },
    }
}
