//! The two-level (author, then title) catalog sort.

use std::cmp::Ordering;

use crate::catalog::key::compare;
use crate::catalog::Catalog;
use crate::error::{ShelfError, ShelfResult};

/// Sorts the whole catalog by author, then each multi-book author's span
/// by title.
///
/// Both levels are stable under the normalized comparator, so records
/// whose author *and* title compare equal keep their relative input
/// order. After a successful return the catalog satisfies the author-span
/// invariant: records sharing a normalized author form one contiguous
/// index range, ordered by normalized title within it.
///
/// # Errors
///
/// [`ShelfError::SpanNotFound`] if an author observed during the adjacency
/// scan can no longer be located — that means the catalog changed under us
/// and the span invariant cannot be established.
pub fn sort_by_author(catalog: &mut Catalog) -> ShelfResult<()> {
    catalog
        .records_mut()
        .sort_by(|a, b| compare(a.author(), b.author()));

    // Authors with more than one book, found by adjacency. Only sound
    // because the sort above grouped equal authors contiguously.
    let mut repeated: Vec<String> = Vec::new();
    for i in 1..catalog.len() {
        let prev = catalog.records()[i - 1].author();
        let next = catalog.records()[i].author();
        if compare(prev, next) == Ordering::Equal
            && !repeated.iter().any(|a| compare(a, prev) == Ordering::Equal)
        {
            repeated.push(prev.to_string());
        }
    }

    tracing::debug!(spans = repeated.len(), "resorting multi-book author spans");

    for author in &repeated {
        let (start, len) = catalog
            .author_span(author)
            .ok_or_else(|| ShelfError::SpanNotFound(author.clone()))?;
        catalog.records_mut()[start..start + len]
            .sort_by(|a, b| compare(a.title(), b.title()));
    }

    Ok(())
}
