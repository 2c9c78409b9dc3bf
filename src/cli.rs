use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};
use std::path::PathBuf;

/// Default output file name, resolved against the project root.
pub const OUTPUT_FILE_NAME: &str = "postman_collection.json";

/// Postman collection generator - build an API client collection from your routes
#[derive(Parser, Debug)]
#[command(name = "postman-from-source")]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Path to the project directory
    #[arg(value_name = "PROJECT_PATH", default_value = ".")]
    pub project_path: PathBuf,

    /// Output file path (default: postman_collection.json in the project root)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output_path: Option<PathBuf>,

    /// Configuration file path (default: postman-from-source.yaml in the project root)
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config_path: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

/// Validate and log already-parsed arguments
pub fn parse_args_from_parsed(args: CliArgs) -> Result<CliArgs> {
    debug!("Parsed arguments: {:?}", args);

    if !args.project_path.exists() {
        anyhow::bail!(
            "Project path does not exist: {}",
            args.project_path.display()
        );
    }

    if !args.project_path.is_dir() {
        anyhow::bail!(
            "Project path is not a directory: {}",
            args.project_path.display()
        );
    }

    info!("Project path: {}", args.project_path.display());

    Ok(args)
}

/// Run the main workflow
pub fn run(args: CliArgs) -> Result<()> {
    use crate::collection::CollectionBuilder;
    use crate::config::GeneratorConfig;
    use crate::discovery::discover_routes;
    use crate::introspect::SourceIntrospector;
    use crate::parser::AstParser;
    use crate::scanner::SourceScanner;
    use crate::serializer::{serialize_collection, write_to_file};

    info!("Starting collection generation...");

    // Step 1: Load configuration
    let config = GeneratorConfig::load(&args.project_path, args.config_path.as_deref())
        .context("Discovery stage failed: could not load configuration")?;
    debug!("Using prefix {:?}", config.prefix);

    // Step 2: Discover routes from the configured manifests
    let routes = discover_routes(&args.project_path, &config)
        .context("Discovery stage failed: could not load route manifests")?;
    info!("Discovered {} routes", routes.len());

    if routes.is_empty() {
        log::warn!(
            "No routes found under prefix {:?}; the collection will be empty",
            config.prefix
        );
    }

    // Step 3: Pre-scan the source tree for handler metadata
    info!("Scanning project sources...");
    let scanner = SourceScanner::new(args.project_path.clone());
    let rust_files = scanner
        .scan()
        .context("Discovery stage failed: could not scan project sources")?;
    info!("Found {} Rust files", rust_files.len());

    let parsed_files = AstParser::parse_files(&rust_files);
    let introspector = SourceIntrospector::scan(&parsed_files);
    debug!(
        "Indexed {} rules providers",
        introspector.registry().len()
    );

    // Step 4: Build the collection
    info!("Building collection items...");
    let mut builder = CollectionBuilder::new(
        &config.display_name(&args.project_path),
        &introspector,
    );
    for route in &routes {
        builder
            .add_route(route)
            .context("Build stage failed: could not build collection item")?;
    }
    info!("Built {} items", builder.item_count());
    let collection = builder.build();

    // Step 5: Serialize and write
    let content = serialize_collection(&collection)
        .context("Build stage failed: could not serialize collection")?;

    let output_path = args
        .output_path
        .unwrap_or_else(|| args.project_path.join(OUTPUT_FILE_NAME));
    write_to_file(&content, &output_path)
        .context("Write stage failed: could not write collection file")?;

    println!(
        "Postman collection generated at: {}",
        output_path.display()
    );

    Ok(())
}
