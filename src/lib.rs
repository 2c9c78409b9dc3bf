//! Postman collection generator - static API-client collections from route
//! manifests and Rust handler metadata.
//!
//! This library inspects a web application's registered routes (exported as
//! JSON route manifests) together with handler metadata found by statically
//! analyzing the project's Rust sources, and produces a Postman-style
//! collection document describing each route's method, headers, URL, query
//! parameters, and an example request body.
//!
//! # Architecture
//!
//! The pipeline is organized into modules that run in order:
//!
//! 1. [`config`] - loads the generator configuration (route files, prefix)
//! 2. [`scanner`] - recursively scans the project for Rust source files
//! 3. [`parser`] - parses sources into Abstract Syntax Trees (AST)
//! 4. [`discovery`] - loads route manifests into route descriptors
//! 5. [`introspect`] - indexes handler doc comments and rules providers
//! 6. [`resolver`] - derives headers, query parameters, and example bodies
//! 7. [`collection`] - builds items and assembles the document
//! 8. [`serializer`] - serializes the document to JSON and writes it
//!
//! # Example Usage
//!
//! ```no_run
//! use postman_from_source::{
//!     collection::CollectionBuilder,
//!     config::GeneratorConfig,
//!     discovery::discover_routes,
//!     introspect::SourceIntrospector,
//!     parser::AstParser,
//!     scanner::SourceScanner,
//!     serializer::{serialize_collection, write_to_file},
//! };
//! use std::path::{Path, PathBuf};
//!
//! let root = PathBuf::from("./my-project");
//!
//! // Configuration and route discovery
//! let config = GeneratorConfig::load(&root, None).unwrap();
//! let routes = discover_routes(&root, &config).unwrap();
//!
//! // Handler metadata pre-scan
//! let files = SourceScanner::new(root.clone()).scan().unwrap();
//! let parsed = AstParser::parse_files(&files);
//! let introspector = SourceIntrospector::scan(&parsed);
//!
//! // Build and write the collection
//! let mut builder = CollectionBuilder::new(&config.display_name(&root), &introspector);
//! for route in &routes {
//!     builder.add_route(route).unwrap();
//! }
//! let json = serialize_collection(&builder.build()).unwrap();
//! write_to_file(&json, Path::new("postman_collection.json")).unwrap();
//! ```
//!
//! # Command-Line Interface
//!
//! For command-line usage, see the [`cli`] module which provides the complete
//! CLI application.

pub mod cli;
pub mod collection;
pub mod config;
pub mod discovery;
pub mod error;
pub mod introspect;
pub mod parser;
pub mod resolver;
pub mod scanner;
pub mod serializer;
