//! Header derivation from middleware tags and the HTTP method.

use crate::collection::Header;
use crate::discovery::HttpMethod;

/// Derives the header list for one (route, method) pair.
///
/// Routes guarded by the `auth:api` or `auth` middleware (exact token
/// match) get a placeholder bearer-token Authorization header. Methods that
/// carry a JSON body get a Content-Type header. The auth header, when
/// present, always comes first.
pub fn resolve_headers(middleware: &[String], method: HttpMethod) -> Vec<Header> {
    let mut headers = Vec::new();

    if middleware.iter().any(|m| m == "auth:api" || m == "auth") {
        headers.push(Header {
            key: "Authorization".to_string(),
            value: "Bearer {{token}}".to_string(),
            kind: "text".to_string(),
        });
    }

    if method.has_body() {
        headers.push(Header {
            key: "Content-Type".to_string(),
            value: "application/json".to_string(),
            kind: "text".to_string(),
        });
    }

    headers
}
