//! Query-string parameter derivation from doc-comment tags.

use crate::collection::QueryParam;
use crate::discovery::HttpMethod;
use crate::resolver::doc_tags::extract_tag_params;

/// Default example value for query parameters without an explicit example.
const DEFAULT_QUERY_EXAMPLE: &str = "sample";

/// Derives the query parameter list for one (route, method) pair.
///
/// Query parameters only apply to GET and DELETE; for any other method the
/// list is empty even when the doc comment carries `@queryParam` tags. Tag
/// order is preserved and duplicate names are not deduplicated.
pub fn resolve_query_params(doc: Option<&str>, method: HttpMethod) -> Vec<QueryParam> {
    if !matches!(method, HttpMethod::Get | HttpMethod::Delete) {
        return Vec::new();
    }

    let Some(doc) = doc else {
        return Vec::new();
    };

    extract_tag_params(doc, "queryParam")
        .into_iter()
        .map(|param| QueryParam {
            key: param.name,
            value: param
                .example
                .unwrap_or_else(|| DEFAULT_QUERY_EXAMPLE.to_string()),
        })
        .collect()
}
