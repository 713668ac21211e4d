//! Error types for `shelf-core`.
//!
//! All fallible operations in the core library return [`ShelfResult<T>`],
//! which is an alias for `Result<T, ShelfError>`. Every detected
//! inconsistency is fatal for the run: there are no warning-only paths.

use std::path::PathBuf;

use crate::catalog::record::Field;

/// Unified error type for all core operations.
///
/// Each variant captures just enough context for the caller to display
/// a meaningful message and pick a distinct process exit status.
#[derive(Debug, thiserror::Error)]
pub enum ShelfError {
    /// The input's header line does not match the expected literal.
    #[error("header mismatch: expected {expected:?}, found {found:?}")]
    HeaderMismatch {
        /// The exact header the ingester requires.
        expected: String,
        /// The header actually read from the input.
        found: String,
    },

    /// A record line did not split into exactly seven fields.
    #[error("malformed record at line {line}: expected 7 fields, found {fields}")]
    MalformedRecord {
        /// 1-based line number in the input, counting the header.
        line: usize,
        /// Number of fields actually found.
        fields: usize,
    },

    /// A collection was defined with fewer than two titles.
    #[error("collection needs at least 2 titles, got {0}")]
    CollectionTooSmall(usize),

    /// A collection names a title that is not in the catalog.
    #[error("title not in catalog: {0:?}")]
    UnknownTitle(String),

    /// An author's span could not be resolved in the sorted catalog.
    #[error("author span not found for {0:?}")]
    SpanNotFound(String),

    /// A collection title resolved outside its author's span.
    #[error("collection title {title:?} is not shelved under {author:?}")]
    ForeignTitle {
        /// The offending collection member.
        title: String,
        /// The author owning the span being spliced.
        author: String,
    },

    /// A lookup that an internal reordering step depends on came up empty.
    ///
    /// This is the defined failure mode for the unchecked-precondition
    /// paths inside sort and splice: it means the catalog no longer holds
    /// a record the step already observed, i.e. the span invariant broke.
    #[error("lookup failed for {field} {value:?}")]
    LookupFailed {
        /// Field the lookup ran against.
        field: Field,
        /// Query value that failed to resolve.
        value: String,
    },

    /// The target path does not exist.
    #[error("path not found: {0}")]
    NotFound(PathBuf),

    /// The process lacks permission to access the path.
    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// Failed to parse a TOML configuration file.
    #[error("config parse error: {0}")]
    ConfigParse(String),

    /// An I/O error that doesn't fit a more specific variant.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout `shelf-core`.
pub type ShelfResult<T> = Result<T, ShelfError>;
