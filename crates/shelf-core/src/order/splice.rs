//! Collection splicing: rewriting one author's span so a collection
//! occupies a contiguous, caller-ordered block.

use std::cmp::Ordering;

use crate::catalog::key::compare;
use crate::catalog::record::{Field, Record};
use crate::catalog::Catalog;
use crate::collection::{Collection, CollectionSet};
use crate::error::{ShelfError, ShelfResult};

/// Splices `collection` into its author's span.
///
/// The catalog must already be sorted (see
/// [`sort_by_author`](crate::order::sort_by_author)); the span is located
/// through the collection's first title. Afterwards the collection's
/// titles occupy one contiguous block in exactly the caller-given order,
/// the author's remaining titles stay alphabetically ordered around the
/// block, and the author-span invariant still holds for this author.
///
/// The commit is two-phase: every record of the final span order is
/// resolved and cloned first, and only then is the span overwritten.
/// Collapsing this into incremental in-place swaps corrupts the result —
/// later lookups would hit already-overwritten slots.
///
/// # Errors
///
/// - [`ShelfError::UnknownTitle`] if the first title no longer resolves.
/// - [`ShelfError::SpanNotFound`] if the first title's author span cannot
///   be located.
/// - [`ShelfError::ForeignTitle`] if a collection title resolves outside
///   the span — collections are single-author by contract.
/// - [`ShelfError::LookupFailed`] if a record observed in the span cannot
///   be re-resolved while staging the final order.
pub fn apply_collection(catalog: &mut Catalog, collection: &Collection) -> ShelfResult<()> {
    let titles = collection.titles();
    let first = titles[0].as_str();

    let first_idx = catalog
        .find_first(Field::Title, first)
        .ok_or_else(|| ShelfError::UnknownTitle(first.to_string()))?;
    let author = catalog.records()[first_idx].author().to_string();
    let (start, span) = catalog
        .author_span(&author)
        .ok_or_else(|| ShelfError::SpanNotFound(author.clone()))?;

    // Single-author precondition, checked instead of assumed: every
    // remaining member must live inside this span.
    for title in &titles[1..] {
        let idx = catalog
            .find_first(Field::Title, title)
            .ok_or_else(|| ShelfError::UnknownTitle(title.clone()))?;
        if idx < start || idx >= start + span {
            return Err(ShelfError::ForeignTitle {
                title: title.clone(),
                author: author.clone(),
            });
        }
    }

    // Partition the span into "loose" titles: everything not named by
    // titles[1..]. The first collection title deliberately counts as loose
    // here — its sorted position decides where the block lands.
    let mut loose: Vec<String> = Vec::with_capacity(span);
    for record in &catalog.records()[start..start + span] {
        let collected = titles[1..]
            .iter()
            .any(|t| compare(t, record.title()) == Ordering::Equal);
        if !collected {
            loose.push(record.title().to_string());
        }
    }
    loose.sort_by(|a, b| compare(a, b));

    // Where the first title sits among the sorted loose titles is how many
    // loose titles precede the block.
    let num_before = loose
        .iter()
        .position(|t| compare(t, first) == Ordering::Equal)
        .ok_or_else(|| ShelfError::LookupFailed {
            field: Field::Title,
            value: first.to_string(),
        })?;

    // Final span order: loose head, the collection verbatim, loose tail.
    // The tail starts at num_before + 1: that slot held the first
    // collection title within the loose partition and is not a real
    // remaining loose title.
    let mut final_order: Vec<&str> = Vec::with_capacity(span);
    final_order.extend(loose[..num_before].iter().map(String::as_str));
    final_order.extend(titles.iter().map(String::as_str));
    final_order.extend(loose[num_before + 1..].iter().map(String::as_str));
    debug_assert_eq!(final_order.len(), span);

    // Phase one: snapshot every record in final order.
    let mut staged: Vec<Record> = Vec::with_capacity(span);
    for title in &final_order {
        let idx = catalog
            .find_first(Field::Title, title)
            .ok_or_else(|| ShelfError::LookupFailed {
                field: Field::Title,
                value: (*title).to_string(),
            })?;
        staged.push(catalog.records()[idx].clone());
    }

    // Phase two: overwrite the span only now that every source is read.
    for (offset, record) in staged.into_iter().enumerate() {
        catalog.set(start + offset, record);
    }

    tracing::debug!(author = %author, block = titles.len(), span = span, "spliced collection");

    Ok(())
}

/// Applies every registered collection once, in definition order.
///
/// # Errors
///
/// Stops at and returns the first splice failure; earlier collections
/// remain applied (the run is aborted anyway — no error here is
/// recoverable).
pub fn apply_collections(catalog: &mut Catalog, set: &CollectionSet) -> ShelfResult<()> {
    for collection in set.iter() {
        apply_collection(catalog, collection)?;
    }
    Ok(())
}
