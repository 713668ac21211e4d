//! Collections: caller-ordered sub-sequences of one author's titles.
//!
//! A [`Collection`] names ≥ 2 titles that must end up contiguous, in the
//! given order, inside their author's span. It does not own any records —
//! titles are resolved against the catalog by lookup every time the
//! collection is used, so a collection must be re-validated if catalog
//! *content* (not just order) changes. [`CollectionSet`] accumulates
//! validated collections in definition order.

use crate::catalog::record::Field;
use crate::catalog::Catalog;
use crate::error::{ShelfError, ShelfResult};

/// A validated, ordered list of titles belonging to one author.
///
/// Construction is the only validation point for length and title
/// existence; single-authorship is assumed here and only checked when the
/// collection is applied (see
/// [`apply_collection`](crate::order::apply_collection)).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collection {
    titles: Vec<String>,
}

impl Collection {
    /// Builds a collection from an ordered title sequence, validated
    /// against the current catalog.
    ///
    /// # Errors
    ///
    /// - [`ShelfError::CollectionTooSmall`] if fewer than two titles are given.
    /// - [`ShelfError::UnknownTitle`] if any title does not resolve in the
    ///   catalog.
    pub fn new(titles: Vec<String>, catalog: &Catalog) -> ShelfResult<Self> {
        if titles.len() < 2 {
            return Err(ShelfError::CollectionTooSmall(titles.len()));
        }
        for title in &titles {
            if catalog.find_first(Field::Title, title).is_none() {
                return Err(ShelfError::UnknownTitle(title.clone()));
            }
        }
        Ok(Self { titles })
    }

    /// The titles in caller-specified order.
    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    /// Number of titles in the collection. Always ≥ 2.
    pub fn len(&self) -> usize {
        self.titles.len()
    }

    /// Always `false`: an empty collection cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }
}

/// Registry of defined collections, kept in definition order.
///
/// Each registered collection is meant to be applied exactly once per run;
/// re-applying is not idempotent because splicing changes the very order
/// the next application would read.
#[derive(Debug, Clone, Default)]
pub struct CollectionSet {
    collections: Vec<Collection>,
}

impl CollectionSet {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates `titles` against `catalog` and registers the collection.
    ///
    /// # Errors
    ///
    /// Propagates the fatal validation errors of [`Collection::new`]; a
    /// failed registration leaves the registry unchanged.
    pub fn define(&mut self, titles: Vec<String>, catalog: &Catalog) -> ShelfResult<()> {
        let collection = Collection::new(titles, catalog)?;
        self.collections.push(collection);
        Ok(())
    }

    /// Iterates registered collections in definition order.
    pub fn iter(&self) -> impl Iterator<Item = &Collection> {
        self.collections.iter()
    }

    /// Number of registered collections.
    pub fn len(&self) -> usize {
        self.collections.len()
    }

    /// Returns `true` if nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }
}
