//! The catalog: an owned, ordered sequence of records.
//!
//! [`Catalog`] is the single mutable resource every operation works on.
//! It is passed explicitly by `&mut` — there is no process-wide state.
//! After [`sort_by_author`](crate::order::sort_by_author) it satisfies the
//! author-span invariant: records sharing a normalized author form one
//! maximal contiguous index range, ordered by normalized title within it.

pub mod key;
pub mod record;

use crate::catalog::key::compare;
use crate::catalog::record::{Field, Record};

/// An ordered, exclusively owned sequence of [`Record`]s.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    records: Vec<Record>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record at the end, preserving ingestion order.
    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Returns the number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the catalog holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the record at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    /// Returns all records in current order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Returns all records mutably. Reordering through this slice is what
    /// the sort and splice operations do; anything else risks breaking the
    /// author-span invariant they rely on.
    pub fn records_mut(&mut self) -> &mut [Record] {
        &mut self.records
    }

    /// Overwrites the record at `index` with `record`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds; callers stage indices from
    /// spans they already resolved.
    pub fn set(&mut self, index: usize, record: Record) {
        self.records[index] = record;
    }

    /// Finds the first record whose `field` matches `value`, scanning in
    /// current order.
    ///
    /// Matching is case-insensitive over ASCII and **prefix-tolerant**: the
    /// candidate field only has to *start with* the query bytes. This is
    /// intentional fuzziness inherited from the catalog's lookup contract,
    /// not an equality check — a query of `"Ann"` will happily return a
    /// record whose author is `"Anne Carson"` if it scans first. Callers
    /// use it with near-exact queries (full titles, full author names)
    /// where collisions are unlikely but not impossible.
    pub fn find_first(&self, field: Field, value: &str) -> Option<usize> {
        let needle = value.to_ascii_lowercase();
        self.records.iter().position(|record| {
            record
                .field(field)
                .to_ascii_lowercase()
                .as_bytes()
                .starts_with(needle.as_bytes())
        })
    }

    /// Resolves the author span containing every record whose normalized
    /// author matches `author`.
    ///
    /// Returns `(start, len)`. The span start is the first match of
    /// `author` (prefix lookup), and the length extends while the
    /// following records still compare equal under the normalized
    /// comparator, bounded by the catalog length. Only meaningful once the
    /// catalog is sorted by author — before that, equal authors are not
    /// grouped and the "span" is just the first run.
    pub fn author_span(&self, author: &str) -> Option<(usize, usize)> {
        let start = self.find_first(Field::Author, author)?;
        let mut len = 1;
        while start + len < self.records.len()
            && compare(self.records[start + len].author(), author) == std::cmp::Ordering::Equal
        {
            len += 1;
        }
        Some((start, len))
    }
}

impl From<Vec<Record>> for Catalog {
    fn from(records: Vec<Record>) -> Self {
        Self { records }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, author: &str) -> Record {
        Record::new(
            title.to_string(),
            author.to_string(),
            String::new(),
            String::new(),
            String::new(),
            String::new(),
            String::new(),
        )
    }

    fn sample_catalog() -> Catalog {
        Catalog::from(vec![
            record("Runaway Horses", "Yukio Mishima"),
            record("Spring Snow", "Yukio Mishima"),
            record("Nausea", "Jean-Paul Sartre"),
        ])
    }

    #[test]
    fn push_and_len() {
        let mut catalog = Catalog::new();
        assert!(catalog.is_empty());
        catalog.push(record("Nausea", "Jean-Paul Sartre"));
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(0).unwrap().title(), "Nausea");
    }

    #[test]
    fn find_first_exact_title() {
        let catalog = sample_catalog();
        assert_eq!(catalog.find_first(Field::Title, "Spring Snow"), Some(1));
    }

    #[test]
    fn find_first_is_case_insensitive() {
        let catalog = sample_catalog();
        assert_eq!(catalog.find_first(Field::Title, "spring snow"), Some(1));
        assert_eq!(catalog.find_first(Field::Author, "yukio mishima"), Some(0));
    }

    #[test]
    fn find_first_matches_prefixes() {
        let catalog = sample_catalog();
        // Deliberate fuzziness: a prefix of the stored value matches.
        assert_eq!(catalog.find_first(Field::Title, "Spring"), Some(1));
        assert_eq!(catalog.find_first(Field::Author, "Jean"), Some(2));
    }

    #[test]
    fn find_first_short_query_can_hit_the_wrong_record() {
        let catalog = Catalog::from(vec![
            record("Alpha", "Ann"),
            record("Beta", "Anne Carson"),
        ]);
        // "Ann" resolves to the first record that merely starts with it.
        assert_eq!(catalog.find_first(Field::Author, "Ann"), Some(0));
        // And "Anne" scans past "Ann" (no prefix match: "ann" != "anne"[..4]).
        assert_eq!(catalog.find_first(Field::Author, "Anne"), Some(1));
    }

    #[test]
    fn find_first_returns_first_match_in_scan_order() {
        let catalog = sample_catalog();
        assert_eq!(catalog.find_first(Field::Author, "Yukio Mishima"), Some(0));
    }

    #[test]
    fn find_first_miss_returns_none() {
        let catalog = sample_catalog();
        assert_eq!(catalog.find_first(Field::Title, "The Magic Mountain"), None);
    }

    #[test]
    fn find_first_on_other_fields() {
        let mut catalog = Catalog::new();
        catalog.push(Record::new(
            "Spring Snow".to_string(),
            "Yukio Mishima".to_string(),
            "trans. Michael Gallagher".to_string(),
            "Fiction".to_string(),
            "Read".to_string(),
            "2023 May".to_string(),
            "9780394442396".to_string(),
        ));
        assert_eq!(catalog.find_first(Field::Isbn, "9780394442396"), Some(0));
        assert_eq!(catalog.find_first(Field::Subject, "fiction"), Some(0));
        assert_eq!(catalog.find_first(Field::Status, "read"), Some(0));
    }

    #[test]
    fn author_span_of_grouped_records() {
        let catalog = sample_catalog();
        assert_eq!(catalog.author_span("Yukio Mishima"), Some((0, 2)));
        assert_eq!(catalog.author_span("Jean-Paul Sartre"), Some((2, 1)));
    }

    #[test]
    fn author_span_at_catalog_end_stays_in_bounds() {
        let catalog = Catalog::from(vec![
            record("Nausea", "Jean-Paul Sartre"),
            record("Runaway Horses", "Yukio Mishima"),
            record("Spring Snow", "Yukio Mishima"),
        ]);
        assert_eq!(catalog.author_span("Yukio Mishima"), Some((1, 2)));
    }

    #[test]
    fn author_span_unknown_author_is_none() {
        let catalog = sample_catalog();
        assert_eq!(catalog.author_span("Albert Camus"), None);
    }

    #[test]
    fn set_overwrites_in_place() {
        let mut catalog = sample_catalog();
        let replacement = record("The Temple of Dawn", "Yukio Mishima");
        catalog.set(2, replacement.clone());
        assert_eq!(catalog.get(2), Some(&replacement));
        assert_eq!(catalog.len(), 3);
    }
}
