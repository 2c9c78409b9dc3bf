//! The route-to-item resolution core.
//!
//! Each submodule answers one question about a (route, method) pair:
//!
//! - [`headers`] - which headers does the request template carry
//! - [`query`] - which query parameters (GET/DELETE only)
//! - [`body`] - which example request body (POST/PUT/PATCH only)
//! - [`doc_tags`] - parsing of `@queryParam`/`@bodyParam` doc-comment tags
//! - [`example`] - example-value synthesis from validation-rule expressions
//!
//! All resolvers are pure functions over the route descriptor, the HTTP
//! method, and the handler metadata supplied by the introspection layer.

pub mod body;
pub mod doc_tags;
pub mod example;
pub mod headers;
pub mod query;
