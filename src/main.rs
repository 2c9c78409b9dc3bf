//! Postman collection generator - command-line entry point.
//!
//! # Usage
//!
//! ```bash
//! postman-from-source [PROJECT_PATH]
//! ```
//!
//! # Examples
//!
//! Generate the collection for the current project:
//! ```bash
//! postman-from-source
//! ```
//!
//! Generate for another project with a custom output file:
//! ```bash
//! postman-from-source ./my-api-project -o docs/postman_collection.json
//! ```
//!
//! Enable verbose logging:
//! ```bash
//! postman-from-source -v
//! ```

mod cli;
mod collection;
mod config;
mod discovery;
mod error;
mod introspect;
mod parser;
mod resolver;
mod scanner;
mod serializer;

use anyhow::Result;
use clap::Parser;
use log::info;

fn main() -> Result<()> {
    let args = cli::CliArgs::parse();

    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .init();

    let args = cli::parse_args_from_parsed(args)?;

    cli::run(args)?;

    info!("Collection generation completed successfully");

    Ok(())
}
