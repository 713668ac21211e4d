//! Catalog rendering: plain-text columns and an HTML table.

use std::path::Path;

use shelf_core::Catalog;

/// How the sorted catalog is written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// `index: padded-title  author` lines.
    Text,
    /// An HTML table with a minimal dark-theme stylesheet.
    Html,
}

impl OutputFormat {
    /// Selects the format from an output path: `.html` means HTML,
    /// anything else (including no extension) means text.
    pub fn for_path(path: &Path) -> Self {
        if path.extension().is_some_and(|ext| ext == "html") {
            OutputFormat::Html
        } else {
            OutputFormat::Text
        }
    }
}

/// Renders the catalog as text, one line per record.
///
/// Each line is `%3d: %-*s %s` — a 1-based ordinal, the title left-padded
/// to the longest title's width, then the author.
pub fn render_text(catalog: &Catalog) -> String {
    let width = catalog
        .records()
        .iter()
        .map(|r| r.title().chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for (index, record) in catalog.records().iter().enumerate() {
        out.push_str(&format!(
            "{:3}: {:<width$} {}\n",
            index + 1,
            record.title(),
            record.author(),
        ));
    }
    out
}

const HTML_PREAMBLE: &str = "<style>\n\tbody {\n\t\tcolor: white;\n\t\tbackground-color: #222;\n\t}\n</style>\n\n<table style=\"width: 100%;\">\n\t<tr>\n\t\t<th>NUMBER</th>\n\t\t<th>TITLE</th>\n\t\t<th>AUTHOR</th>\n\t</tr>\n";

/// Renders the catalog as an HTML table: ordinal, title, author per row.
pub fn render_html(catalog: &Catalog) -> String {
    let mut out = String::from(HTML_PREAMBLE);
    for (index, record) in catalog.records().iter().enumerate() {
        out.push_str(&format!(
            "\t<tr>\n\t\t<td>{}</td>\n\t\t<td>{}</td>\n\t\t<td>{}</td>\n\t</tr>\n",
            index + 1,
            escape_html(record.title()),
            escape_html(record.author()),
        ));
    }
    out.push_str("</table>\n");
    out
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
