//! getset CLI
//!
//! Loads a request body (JSON or form data) and queries it by dotted key.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use getset::{Config, InputSource, InputStreamCollection, Result, Value};
use serde::Serialize;
use tracing_subscriber::{fmt, EnvFilter};

/// getset CLI
#[derive(Parser, Debug)]
#[command(name = "getset-cli")]
#[command(about = "Query a request body by dotted key")]
#[command(version)]
struct Args {
    /// Body file to read ("-" for stdin)
    #[arg(short, long, default_value = "-")]
    input: String,

    /// Body size limit in KB
    #[arg(short = 'm', long, default_value = "8192")]
    max_input_kb: usize,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the whole decoded body
    Dump,

    /// Get a value by dotted key
    Get {
        /// The key to get
        key: String,

        /// JSON value printed when the key is absent
        #[arg(short, long)]
        default: Option<String>,
    },

    /// Check whether a key exists
    Has {
        /// The key to check
        key: String,
    },

    /// Count entries at the top level or under a key
    Count {
        /// The key to count under
        key: Option<String>,
    },
}

#[derive(Serialize)]
struct CountReport<'a> {
    key: Option<&'a str>,
    count: usize,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,getset=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if let Err(e) = run(&args) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let source = match args.input.as_str() {
        "-" => InputSource::Stdin,
        path => InputSource::File(PathBuf::from(path)),
    };
    let config = Config::builder()
        .input_source(source)
        .max_input_bytes(args.max_input_kb.saturating_mul(1024))
        .build();

    tracing::debug!("reading body from {}", config.input_source);
    let body = InputStreamCollection::from_config(&config)?;

    let output = match &args.command {
        Commands::Dump => serde_json::to_string_pretty(&body.get_all()?)?,
        Commands::Get { key, default } => {
            let default = match default {
                Some(raw) => serde_json::from_str(raw)?,
                None => Value::Null,
            };
            serde_json::to_string_pretty(&body.get_or(key, default)?)?
        }
        Commands::Has { key } => body.has(key)?.to_string(),
        Commands::Count { key } => {
            let report = CountReport {
                key: key.as_deref(),
                count: body.count(key.as_deref())?,
            };
            serde_json::to_string(&report)?
        }
    };

    println!("{}", output);
    Ok(())
}
