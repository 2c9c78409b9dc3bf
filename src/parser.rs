use anyhow::{Context, Result};
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// AST parser for the Rust sources feeding the handler pre-scan.
///
/// Uses the `syn` crate to parse source files into syntax trees, which the
/// introspection layer then walks to index handler doc comments and
/// validation-rules providers.
///
/// # Example
///
/// ```no_run
/// use postman_from_source::parser::AstParser;
/// use std::path::Path;
///
/// let parsed = AstParser::parse_file(Path::new("src/main.rs")).unwrap();
/// println!("Parsed {} items", parsed.syntax_tree.items.len());
/// ```
pub struct AstParser;

/// A successfully parsed Rust file with its abstract syntax tree.
#[derive(Debug)]
pub struct ParsedFile {
    /// Path to the source file
    pub path: PathBuf,
    /// The parsed abstract syntax tree
    pub syntax_tree: syn::File,
}

impl AstParser {
    /// Parses a single Rust source file into an AST.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or contains invalid Rust
    /// syntax.
    pub fn parse_file(path: &Path) -> Result<ParsedFile> {
        debug!("Parsing file: {}", path.display());

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        let syntax_tree = syn::parse_file(&content)
            .with_context(|| format!("Failed to parse Rust syntax in file: {}", path.display()))?;

        Ok(ParsedFile {
            path: path.to_path_buf(),
            syntax_tree,
        })
    }

    /// Parses multiple files, skipping the ones that fail.
    ///
    /// Files that cannot be parsed are logged as warnings and dropped so one
    /// broken source file degrades that file's handler metadata rather than
    /// aborting the whole run.
    pub fn parse_files(paths: &[PathBuf]) -> Vec<ParsedFile> {
        debug!("Parsing {} files", paths.len());

        let parsed: Vec<ParsedFile> = paths
            .iter()
            .filter_map(|path| match Self::parse_file(path) {
                Ok(parsed) => Some(parsed),
                Err(e) => {
                    warn!("Skipping {}: {}", path.display(), e);
                    None
                }
            })
            .collect();

        debug!(
            "Parsing complete: {} succeeded, {} skipped",
            parsed.len(),
            paths.len() - parsed.len()
        );

        parsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_temp_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let file_path = dir.path().join(name);
        fs::write(&file_path, content).unwrap();
        file_path
    }

    #[test]
    fn test_parse_valid_rust_file() {
        let temp_dir = TempDir::new().unwrap();
        let code = r#"
            /// List all users.
            pub fn index() {}

            pub struct StoreUserRequest;
        "#;

        let file_path = create_temp_file(&temp_dir, "valid.rs", code);
        let result = AstParser::parse_file(&file_path);

        assert!(result.is_ok());
        let parsed = result.unwrap();
        assert_eq!(parsed.path, file_path);
        assert_eq!(parsed.syntax_tree.items.len(), 2);
    }

    #[test]
    fn test_parse_invalid_rust_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = create_temp_file(&temp_dir, "invalid.rs", "pub fn broken( {");

        let result = AstParser::parse_file(&file_path);

        assert!(result.is_err());
        let err_msg = result.unwrap_err().to_string();
        assert!(err_msg.contains("Failed to parse Rust syntax"));
    }

    #[test]
    fn test_parse_nonexistent_file() {
        let result = AstParser::parse_file(Path::new("/nonexistent/file.rs"));

        assert!(result.is_err());
        let err_msg = result.unwrap_err().to_string();
        assert!(err_msg.contains("Failed to read file"));
    }

    #[test]
    fn test_parse_files_skips_broken_files() {
        let temp_dir = TempDir::new().unwrap();
        let file1 = create_temp_file(&temp_dir, "a.rs", "pub fn index() {}");
        let file2 = create_temp_file(&temp_dir, "b.rs", "pub fn broken( {");
        let file3 = create_temp_file(&temp_dir, "c.rs", "pub struct User;");

        let parsed = AstParser::parse_files(&[file1.clone(), file2, file3.clone()]);

        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].path, file1);
        assert_eq!(parsed[1].path, file3);
    }

    #[test]
    fn test_parse_files_empty_list() {
        let parsed = AstParser::parse_files(&[]);
        assert!(parsed.is_empty());
    }
}
