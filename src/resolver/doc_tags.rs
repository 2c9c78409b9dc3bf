//! Doc-comment tag parsing.
//!
//! Handler doc comments may annotate parameters with one tag per line:
//!
//! ```text
//! @queryParam page integer The page to fetch. Example: 1
//! @bodyParam name string required Example: John Doe
//! ```
//!
//! Grammar per line: the tag keyword (case-insensitive), a name token, a
//! type token (consumed and discarded), free-text description, and an
//! optional trailing `Example: <value>` running to the end of the line.
//! Only the name and the example value are kept.

/// One parsed parameter tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagParam {
    pub name: String,
    /// Explicit example value, if the tag carried an `Example:` marker
    pub example: Option<String>,
}

/// Extracts all `@<tag>` parameters from a doc comment, in source order.
///
/// Lines that carry the keyword but are missing the name or type token are
/// skipped. Duplicate names are kept as separate entries.
pub fn extract_tag_params(doc: &str, tag: &str) -> Vec<TagParam> {
    let keyword = format!("@{}", tag);
    let mut params = Vec::new();

    for line in doc.lines() {
        // Tolerate docblock framing such as leading asterisks
        let line = line.trim().trim_start_matches('*').trim_start();

        let mut tokens = line.split_whitespace();
        match tokens.next() {
            Some(first) if first.eq_ignore_ascii_case(&keyword) => {}
            _ => continue,
        }

        let Some(name) = tokens.next() else { continue };
        let Some(_type_token) = tokens.next() else { continue };

        let rest: Vec<&str> = tokens.collect();
        let example = rest
            .iter()
            .position(|token| token.eq_ignore_ascii_case("Example:"))
            .map(|idx| rest[idx + 1..].join(" "))
            .filter(|value| !value.is_empty());

        params.push(TagParam {
            name: name.to_string(),
            example,
        });
    }

    params
}

/// The leading summary paragraph of a doc comment.
///
/// Lines are collected until the first blank line or the first tag line and
/// joined with spaces. An empty or tag-only doc comment yields an empty
/// string.
pub fn summary(doc: &str) -> String {
    let mut lines: Vec<&str> = Vec::new();

    for line in doc.lines() {
        let line = line.trim().trim_start_matches('*').trim_start();

        if line.starts_with('@') {
            break;
        }
        if line.is_empty() {
            if lines.is_empty() {
                continue;
            }
            break;
        }

        lines.push(line);
    }

    lines.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_query_params_in_order() {
        let doc = "List users.\n\n\
                   @queryParam q string required Example: test\n\
                   @queryParam page integer Example: 1";

        let params = extract_tag_params(doc, "queryParam");

        assert_eq!(
            params,
            vec![
                TagParam {
                    name: "q".to_string(),
                    example: Some("test".to_string()),
                },
                TagParam {
                    name: "page".to_string(),
                    example: Some("1".to_string()),
                },
            ]
        );
    }

    #[test]
    fn test_tag_without_example_marker() {
        let doc = "@queryParam sort string The sort column.";
        let params = extract_tag_params(doc, "queryParam");

        assert_eq!(params.len(), 1);
        assert_eq!(params[0].name, "sort");
        assert_eq!(params[0].example, None);
    }

    #[test]
    fn test_keyword_is_case_insensitive() {
        let doc = "@QUERYPARAM q string Example: test\n@queryparam page integer Example: 2";
        let params = extract_tag_params(doc, "queryParam");

        assert_eq!(params.len(), 2);
        assert_eq!(params[0].example.as_deref(), Some("test"));
        assert_eq!(params[1].example.as_deref(), Some("2"));
    }

    #[test]
    fn test_multi_word_example_value() {
        let doc = "@bodyParam name string required Example: John Doe";
        let params = extract_tag_params(doc, "bodyParam");

        assert_eq!(params[0].example.as_deref(), Some("John Doe"));
    }

    #[test]
    fn test_type_token_and_description_are_discarded() {
        let doc = "@bodyParam age integer The age in years. Example: 30";
        let params = extract_tag_params(doc, "bodyParam");

        assert_eq!(params.len(), 1);
        assert_eq!(params[0].name, "age");
        assert_eq!(params[0].example.as_deref(), Some("30"));
    }

    #[test]
    fn test_tag_missing_type_token_is_skipped() {
        let doc = "@queryParam q";
        assert!(extract_tag_params(doc, "queryParam").is_empty());
    }

    #[test]
    fn test_duplicate_names_are_kept() {
        let doc = "@queryParam id integer Example: 1\n@queryParam id integer Example: 2";
        let params = extract_tag_params(doc, "queryParam");

        assert_eq!(params.len(), 2);
        assert_eq!(params[0].example.as_deref(), Some("1"));
        assert_eq!(params[1].example.as_deref(), Some("2"));
    }

    #[test]
    fn test_other_tags_are_ignored() {
        let doc = "@bodyParam name string Example: x\n@queryParam q string Example: y";
        let params = extract_tag_params(doc, "queryParam");

        assert_eq!(params.len(), 1);
        assert_eq!(params[0].name, "q");
    }

    #[test]
    fn test_docblock_framing_is_tolerated() {
        let doc = " * @queryParam page integer Example: 3";
        let params = extract_tag_params(doc, "queryParam");

        assert_eq!(params.len(), 1);
        assert_eq!(params[0].example.as_deref(), Some("3"));
    }

    #[test]
    fn test_summary_takes_first_paragraph() {
        let doc = "Store a new user\nin the database.\n\nLonger details here.";
        assert_eq!(summary(doc), "Store a new user in the database.");
    }

    #[test]
    fn test_summary_stops_at_tag_line() {
        let doc = "List users.\n@queryParam page integer Example: 1";
        assert_eq!(summary(doc), "List users.");
    }

    #[test]
    fn test_summary_of_tag_only_doc_is_empty() {
        let doc = "@bodyParam name string Example: x";
        assert_eq!(summary(doc), "");
    }

    #[test]
    fn test_summary_skips_leading_blank_lines() {
        let doc = "\n\nDelete a user.";
        assert_eq!(summary(doc), "Delete a user.");
    }
}
