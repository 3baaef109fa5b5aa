//! Input/Output operations module.
//!
//! Handles reading the tab-delimited alignment table and writing the
//! three best-hit result tables (all/good/bad).

use crate::record::{AlignmentRecord, FIELD_COUNT, FIELD_NAMES};
use anyhow::{Context, Result};
use log::info;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure while loading the input table.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to read input table: {0}")]
    Csv(#[from] csv::Error),

    #[error(
        "line {line}: expected {expected} tab-separated fields, found {found}",
        expected = FIELD_COUNT
    )]
    Schema { line: u64, found: usize },

    #[error("line {line}: {source}")]
    Parse {
        line: u64,
        #[source]
        source: csv::Error,
    },
}

/// Reads the full alignment table from `path`.
///
/// The file must be tab-delimited with no header row and exactly
/// [`FIELD_COUNT`] columns per line; blank lines are skipped. The first
/// malformed row aborts the whole load, there is no best-effort partial
/// result.
pub fn load_alignments(path: &Path) -> Result<Vec<AlignmentRecord>, LoadError> {
    let file = File::open(path)?;
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let line = row.position().map_or(0, |p| p.line());
        if row.len() != FIELD_COUNT {
            return Err(LoadError::Schema {
                line,
                found: row.len(),
            });
        }
        let record: AlignmentRecord = row
            .deserialize(None)
            .map_err(|source| LoadError::Parse { line, source })?;
        records.push(record);
    }

    info!(
        "loaded {} alignment rows from {}",
        records.len(),
        path.display()
    );
    Ok(records)
}

/// The three table paths derived from one output base name.
#[derive(Debug, Clone)]
pub struct OutputPaths {
    pub all: PathBuf,
    pub good: PathBuf,
    pub bad: PathBuf,
}

/// Builds the `all_`/`good_`/`bad_` table paths from the user-supplied
/// base name.
///
/// The prefix applies to the file-name portion, so a base like
/// `runs/jan` yields `runs/all_jan.tsv`; a base already ending in `.tsv`
/// keeps a single extension.
pub fn output_paths(base: &str) -> OutputPaths {
    let base_path = Path::new(base);
    let name = base_path
        .file_name()
        .map_or_else(|| base.to_string(), |n| n.to_string_lossy().into_owned());
    let stem = name.strip_suffix(".tsv").unwrap_or(&name).to_string();
    let parent = base_path.parent().unwrap_or_else(|| Path::new(""));

    let with_prefix = |prefix: &str| parent.join(format!("{}_{}.tsv", prefix, stem));
    OutputPaths {
        all: with_prefix("all"),
        good: with_prefix("good"),
        bad: with_prefix("bad"),
    }
}

/// Writes the three best-hit tables. Each file carries the header row
/// even when its table is empty.
pub fn write_best_hit_tables(
    paths: &OutputPaths,
    all: &[AlignmentRecord],
    good: &[AlignmentRecord],
    bad: &[AlignmentRecord],
) -> Result<()> {
    write_table(&paths.all, all)?;
    write_table(&paths.good, good)?;
    write_table(&paths.bad, bad)?;
    Ok(())
}

/// Writes one table: a header row of the 14 field names, then one row
/// per record. An existing file at `path` is overwritten.
fn write_table(path: &Path, records: &[AlignmentRecord]) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create output file '{}'", path.display()))?;
    // Header written explicitly so an empty table still gets one; the
    // writer's serde-derived header would only appear with data rows.
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .from_writer(BufWriter::new(file));

    writer
        .write_record(&FIELD_NAMES)
        .with_context(|| format!("failed to write output file '{}'", path.display()))?;
    for record in records {
        writer
            .serialize(record)
            .with_context(|| format!("failed to write output file '{}'", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("failed to write output file '{}'", path.display()))?;

    Ok(())
}
