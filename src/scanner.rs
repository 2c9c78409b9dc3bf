use anyhow::Result;
use log::warn;
use std::path::PathBuf;
use walkdir::WalkDir;

/// Recursive scanner collecting the Rust sources used for the handler pre-scan.
///
/// Handler doc comments and validation-rules providers are discovered by
/// statically analyzing the project's own source tree, so the scanner walks
/// the project root and collects every `.rs` file, skipping `target` and
/// hidden directories.
///
/// # Example
///
/// ```no_run
/// use postman_from_source::scanner::SourceScanner;
/// use std::path::PathBuf;
///
/// let scanner = SourceScanner::new(PathBuf::from("./my-project"));
/// let files = scanner.scan().unwrap();
/// println!("Found {} Rust files", files.len());
/// ```
pub struct SourceScanner {
    root_path: PathBuf,
}

impl SourceScanner {
    /// Creates a scanner rooted at the given project directory.
    pub fn new(root_path: PathBuf) -> Self {
        Self { root_path }
    }

    /// Walks the directory tree and collects all `.rs` files.
    ///
    /// `target` and hidden directories are skipped. Inaccessible entries are
    /// logged as warnings and skipped; scanning continues.
    ///
    /// # Errors
    ///
    /// Never fails for individual entries; errors would only come from the
    /// root directory itself being unreadable, which `walkdir` reports as a
    /// per-entry error as well, so this returns `Ok` with an empty list in
    /// that case and a logged warning.
    pub fn scan(&self) -> Result<Vec<PathBuf>> {
        let mut rust_files = Vec::new();

        for entry in WalkDir::new(&self.root_path)
            .into_iter()
            .filter_entry(|e| {
                if e.path() == self.root_path {
                    return true;
                }

                let file_name = e.file_name().to_string_lossy();
                let is_hidden = file_name.starts_with('.');
                let is_target = file_name == "target";

                !is_hidden && !is_target
            })
        {
            match entry {
                Ok(entry) => {
                    let path = entry.path();
                    if path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("rs") {
                        rust_files.push(path.to_path_buf());
                    }
                }
                Err(e) => {
                    warn!("Failed to access path: {}", e);
                }
            }
        }

        Ok(rust_files)
    }
}
