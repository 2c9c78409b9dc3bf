//! Postman collection document model and builder.
//!
//! The document follows the Postman collection v2.1.0 shape the original
//! tooling ecosystem expects: an `info` block naming the collection and a
//! flat `item` list with one request template per (route, method) pair.

use crate::discovery::{HttpMethod, RouteDescriptor};
use crate::error::Result;
use crate::introspect::HandlerIntrospector;
use crate::resolver::body::resolve_body;
use crate::resolver::doc_tags::summary;
use crate::resolver::headers::resolve_headers;
use crate::resolver::query::resolve_query_params;
use log::debug;
use serde::{Deserialize, Serialize};

/// Postman collection schema identifier.
pub const SCHEMA_URL: &str =
    "https://schema.getpostman.com/json/collection/v2.1.0/collection.json";

/// The complete collection document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collection {
    pub info: Info,
    pub item: Vec<Item>,
}

/// Collection `info` block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Info {
    pub name: String,
    pub schema: String,
}

/// One request template. Item names repeat when a path serves several
/// methods; that is expected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub request: Request,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Request {
    pub method: String,
    pub header: Vec<Header>,
    pub url: Url,
    pub description: String,
    /// Serialized as an explicit `null` for methods without a body
    pub body: Option<RequestBody>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Header {
    pub key: String,
    pub value: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Url {
    pub raw: String,
    pub host: Vec<String>,
    pub path: Vec<String>,
    pub query: Vec<QueryParam>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryParam {
    pub key: String,
    pub value: String,
}

/// Raw-mode example body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestBody {
    pub mode: String,
    pub raw: String,
}

/// Builds collection items from route descriptors and assembles the final
/// document.
///
/// Items keep route-discovery order, then method order within a route; the
/// builder imposes no sorting of its own.
pub struct CollectionBuilder<'a> {
    name: String,
    introspector: &'a dyn HandlerIntrospector,
    items: Vec<Item>,
}

impl<'a> CollectionBuilder<'a> {
    /// Creates a builder; `app_name` becomes `info.name` with an ` API`
    /// suffix.
    pub fn new(app_name: &str, introspector: &'a dyn HandlerIntrospector) -> Self {
        Self {
            name: format!("{} API", app_name),
            introspector,
            items: Vec::new(),
        }
    }

    /// Expands a route into one item per non-HEAD method.
    ///
    /// # Errors
    ///
    /// Fails only when the example body cannot be serialized; handler
    /// introspection failures degrade to empty metadata.
    pub fn add_route(&mut self, route: &RouteDescriptor) -> Result<()> {
        for &method in route.methods.iter().filter(|&&m| m != HttpMethod::Head) {
            debug!("Building item: {} {}", method.as_str(), route.path);

            let handler = route.handler.as_deref();
            let doc = handler.and_then(|h| self.introspector.doc_comment(h));

            self.items.push(Item {
                name: route.path.clone(),
                request: Request {
                    method: method.as_str().to_string(),
                    header: resolve_headers(&route.middleware, method),
                    url: Url {
                        raw: format!("{{{{base_url}}}}/{}", route.path),
                        host: vec!["{{base_url}}".to_string()],
                        path: route.path.split('/').map(str::to_string).collect(),
                        query: resolve_query_params(doc.as_deref(), method),
                    },
                    description: doc.as_deref().map(summary).unwrap_or_default(),
                    body: resolve_body(handler, method, self.introspector)?,
                },
            });
        }

        Ok(())
    }

    /// The number of items built so far.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Wraps the ordered item list into the final document.
    pub fn build(self) -> Collection {
        Collection {
            info: Info {
                name: self.name,
                schema: SCHEMA_URL.to_string(),
            },
            item: self.items,
        }
    }
}
