//! Serialization of the collection document and the whole-file write.

use crate::collection::Collection;
use crate::error::Result;
use log::debug;
use std::fs;
use std::path::Path;

/// Serializes a collection to pretty-printed JSON.
///
/// `serde_json` never escapes forward slashes, so URLs and the schema
/// identifier come out readable.
///
/// # Errors
///
/// Returns an error if the document cannot be encoded; this indicates a
/// contract violation upstream and aborts the run.
pub fn serialize_collection(collection: &Collection) -> Result<String> {
    debug!("Serializing collection with {} items", collection.item.len());
    Ok(serde_json::to_string_pretty(collection)?)
}

/// Writes the serialized document, replacing any previous file.
///
/// Parent directories are created when the destination path needs them.
pub fn write_to_file(content: &str, path: &Path) -> Result<()> {
    debug!("Writing collection to {}", path.display());

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(path, content)?;

    debug!("Wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}
