//! Route discovery from JSON route-manifest files.
//!
//! The host application exports its registered routes as one or more JSON
//! manifest files (typically `routes/api.json`), each an array of entries:
//!
//! ```json
//! [
//!   {
//!     "path": "api/users",
//!     "methods": ["GET", "POST"],
//!     "middleware": ["auth:api"],
//!     "handler": "users::store"
//!   }
//! ]
//! ```
//!
//! Discovery loads the files listed in the configuration in order, keeps
//! entry order within each file, normalizes paths, and applies the configured
//! prefix filter once. A configured file that does not exist is silently
//! skipped.

use crate::config::GeneratorConfig;
use crate::error::{Error, Result};
use log::{debug, warn};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// HTTP methods recognized in route manifests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Options,
    Head,
}

impl HttpMethod {
    /// The uppercase wire token for this method.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Options => "OPTIONS",
            HttpMethod::Head => "HEAD",
        }
    }

    /// Parses a manifest method token, case-insensitively.
    pub fn parse(token: &str) -> Option<Self> {
        match token.to_ascii_uppercase().as_str() {
            "GET" => Some(HttpMethod::Get),
            "POST" => Some(HttpMethod::Post),
            "PUT" => Some(HttpMethod::Put),
            "DELETE" => Some(HttpMethod::Delete),
            "PATCH" => Some(HttpMethod::Patch),
            "OPTIONS" => Some(HttpMethod::Options),
            "HEAD" => Some(HttpMethod::Head),
            _ => None,
        }
    }

    /// Whether this method carries a JSON request body in generated items.
    pub fn has_body(&self) -> bool {
        matches!(self, HttpMethod::Post | HttpMethod::Put | HttpMethod::Patch)
    }
}

/// A registered route as supplied by the host application.
#[derive(Debug, Clone)]
pub struct RouteDescriptor {
    /// Normalized URI without a leading slash, e.g. `api/users/{id}`
    pub path: String,
    /// Methods in manifest order. HEAD entries are carried here and filtered
    /// when items are built.
    pub methods: Vec<HttpMethod>,
    /// Middleware names attached to the route, in order
    pub middleware: Vec<String>,
    /// Handler reference (`module::function` or a bare function name);
    /// absent for closure handlers
    pub handler: Option<String>,
}

/// Raw manifest entry shape.
#[derive(Debug, Deserialize)]
struct ManifestEntry {
    path: String,
    methods: Vec<String>,
    #[serde(default)]
    middleware: Vec<String>,
    #[serde(default)]
    handler: Option<String>,
}

/// Loads all configured route manifests and returns the filtered,
/// discovery-ordered route list.
///
/// # Errors
///
/// Returns an error when a manifest file exists but is not valid JSON.
/// Missing files are skipped.
pub fn discover_routes(project_root: &Path, config: &GeneratorConfig) -> Result<Vec<RouteDescriptor>> {
    let mut routes = Vec::new();

    for file_name in &config.route_files {
        let path = project_root.join(file_name);
        if !path.exists() {
            debug!("Route file {} not found, skipping", path.display());
            continue;
        }

        let content = fs::read_to_string(&path)?;
        let entries: Vec<ManifestEntry> =
            serde_json::from_str(&content).map_err(|e| Error::RouteFileError {
                file: path.clone(),
                message: e.to_string(),
            })?;

        debug!("Loaded {} entries from {}", entries.len(), path.display());

        for entry in entries {
            routes.push(descriptor_from_entry(entry));
        }
    }

    let prefix = format!("{}/", config.prefix);
    let total = routes.len();
    routes.retain(|r| r.path.starts_with(&prefix));
    debug!(
        "Kept {} of {} routes under prefix {:?}",
        routes.len(),
        total,
        config.prefix
    );

    Ok(routes)
}

fn descriptor_from_entry(entry: ManifestEntry) -> RouteDescriptor {
    let methods = entry
        .methods
        .iter()
        .filter_map(|token| {
            let method = HttpMethod::parse(token);
            if method.is_none() {
                warn!("Unknown HTTP method {:?} on route {}", token, entry.path);
            }
            method
        })
        .collect();

    RouteDescriptor {
        path: entry.path.trim_start_matches('/').to_string(),
        methods,
        middleware: entry.middleware,
        handler: entry.handler,
    }
}
