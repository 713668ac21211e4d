//! Shelf — command-line book catalog sorter.
//!
//! Reads a tab-separated library export, sorts it by author and title
//! under the catalog's fuzzy normalization, splices any declared
//! collections into place, and renders the result as text or HTML.
//!
//! Every detected inconsistency is fatal: the process terminates with a
//! distinct exit status per error class so scripts can tell a header
//! mismatch from a bad collection without parsing stderr.

mod render;

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;
use std::process;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use shelf_core::{
    apply_collections, parse_catalog, sort_by_author, CollectionSet, Config, ShelfError,
};

use crate::render::{render_html, render_text, OutputFormat};

const USAGE: &str =
    "USAGE:\nshelf-cli <input file> [output file] [collections toml]\n\nAn output file ending in .html selects the HTML table; any other output\nfile gets the plain-text listing; no output file prints text to stdout.\n";

/// Parsed positional arguments.
struct Args {
    input: PathBuf,
    output: Option<PathBuf>,
    collections: Option<PathBuf>,
}

fn parse_args() -> Option<Args> {
    let mut args = std::env::args().skip(1);
    let input = PathBuf::from(args.next()?);
    let output = args.next().map(PathBuf::from);
    let collections = args.next().map(PathBuf::from);
    Some(Args {
        input,
        output,
        collections,
    })
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let Some(args) = parse_args() else {
        eprint!("{USAGE}");
        process::exit(1);
    };

    if let Err(err) = run(&args) {
        eprintln!("Error: {err:#}");
        let code = err.downcast_ref::<ShelfError>().map_or(1, exit_code);
        process::exit(code);
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let input = File::open(&args.input)
        .map_err(ShelfError::from)
        .with_context(|| format!("cannot open input {}", args.input.display()))?;
    let mut catalog = parse_catalog(BufReader::new(input))?;

    sort_by_author(&mut catalog)?;

    let mut set = CollectionSet::new();
    if let Some(path) = &args.collections {
        let config = Config::load(path)?;
        for spec in config.collections {
            set.define(spec.titles, &catalog)?;
        }
    }
    apply_collections(&mut catalog, &set)?;

    tracing::info!(
        records = catalog.len(),
        collections = set.len(),
        "catalog ready"
    );

    match &args.output {
        None => {
            io::stdout()
                .write_all(render_text(&catalog).as_bytes())
                .map_err(ShelfError::from)?;
        }
        Some(path) => {
            let rendered = match OutputFormat::for_path(path) {
                OutputFormat::Html => render_html(&catalog),
                OutputFormat::Text => render_text(&catalog),
            };
            std::fs::write(path, rendered)
                .map_err(ShelfError::from)
                .with_context(|| format!("cannot write output {}", path.display()))?;
        }
    }

    Ok(())
}

/// Maps every fatal condition to its distinct, deliberately non-standard
/// exit status. Usage errors exit 1 before this table is consulted.
fn exit_code(err: &ShelfError) -> i32 {
    match err {
        ShelfError::HeaderMismatch { .. } => 2,
        ShelfError::CollectionTooSmall(_) => 43,
        ShelfError::MalformedRecord { .. } => 65,
        ShelfError::NotFound(_) | ShelfError::PermissionDenied(_) => 66,
        ShelfError::UnknownTitle(_) => 67,
        ShelfError::SpanNotFound(_) => 68,
        ShelfError::ForeignTitle { .. } => 69,
        ShelfError::LookupFailed { .. } => 70,
        ShelfError::Io(_) => 74,
        ShelfError::ConfigParse(_) => 78,
    }
}
