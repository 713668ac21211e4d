//! Collection declarations loaded from a TOML file.
//!
//! Collections can be defined programmatically through
//! [`CollectionSet`](crate::CollectionSet), or declared in a small TOML
//! file so a catalog run does not need recompiling to change them:
//!
//! ```toml
//! [[collection]]
//! titles = [
//!     "Spring Snow",
//!     "Runaway Horses",
//!     "The Temple of Dawn",
//!     "The Decay of the Angel",
//! ]
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ShelfError, ShelfResult};

/// Top-level configuration: zero or more collection declarations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Declared collections, in file order — the order they are applied in.
    #[serde(default, rename = "collection")]
    pub collections: Vec<CollectionSpec>,
}

/// One declared collection: an ordered list of exact titles.
///
/// Validation (length ≥ 2, titles present in the catalog) happens when the
/// declaration is registered against a catalog, not at load time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionSpec {
    /// Titles in the order the collection must appear.
    pub titles: Vec<String>,
}

impl Config {
    /// Loads configuration from a TOML file at `path`.
    ///
    /// # Errors
    ///
    /// - [`ShelfError::NotFound`] if the file does not exist.
    /// - [`ShelfError::PermissionDenied`] if the file is not readable.
    /// - [`ShelfError::ConfigParse`] if the TOML is malformed.
    pub fn load(path: &Path) -> ShelfResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ShelfError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => ShelfError::PermissionDenied(path.to_path_buf()),
            _ => ShelfError::Io(e),
        })?;
        toml::from_str(&content).map_err(|e| ShelfError::ConfigParse(e.to_string()))
    }
}
