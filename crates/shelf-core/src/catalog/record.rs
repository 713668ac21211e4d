//! Catalog record representation.

use std::fmt;

/// Selector for one of the seven record fields.
///
/// Used by [`Catalog::find_first`](crate::Catalog::find_first) to pick
/// which field a lookup runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// The title of the work.
    Title,
    /// The author(s).
    Author,
    /// Anyone else involved — translators, editors, and so on.
    Contributor,
    /// General grouping, e.g. "Philosophy; Metaphysics".
    Subject,
    /// Reading status.
    Status,
    /// Roughly when the book was acquired.
    Date,
    /// ISBN kept in string form.
    Isbn,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Title => "title",
            Field::Author => "author",
            Field::Contributor => "contributor",
            Field::Subject => "subject",
            Field::Status => "status",
            Field::Date => "date",
            Field::Isbn => "isbn",
        };
        f.write_str(name)
    }
}

/// A single catalog entry: one book, seven free-text fields.
///
/// Only title and author are meaningfully non-empty; the rest may be blank.
/// A `Record` is exclusively owned by its [`Catalog`](crate::Catalog) once
/// ingested and is never aliased — reordering operations move or clone
/// whole records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    title: String,
    author: String,
    contributor: String,
    subject: String,
    status: String,
    date: String,
    isbn: String,
}

impl Record {
    /// Creates a record from its seven fields, in header order.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        title: String,
        author: String,
        contributor: String,
        subject: String,
        status: String,
        date: String,
        isbn: String,
    ) -> Self {
        Self {
            title,
            author,
            contributor,
            subject,
            status,
            date,
            isbn,
        }
    }

    /// Returns the field selected by `field`.
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Title => &self.title,
            Field::Author => &self.author,
            Field::Contributor => &self.contributor,
            Field::Subject => &self.subject,
            Field::Status => &self.status,
            Field::Date => &self.date,
            Field::Isbn => &self.isbn,
        }
    }

    /// Returns the title of the work.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the author(s).
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Returns the contributor field.
    pub fn contributor(&self) -> &str {
        &self.contributor
    }

    /// Returns the subject grouping.
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Returns the reading status.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Returns the acquisition date text.
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Returns the ISBN string.
    pub fn isbn(&self) -> &str {
        &self.isbn
    }
}
