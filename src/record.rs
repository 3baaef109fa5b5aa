//! Row model for BLAST tabular (outfmt 6) search results.
//!
//! The input format is positional: 14 tab-separated columns with no
//! header row, in the order produced by
//! `-outfmt "6 qseqid sscinames sacc stitle qstart qend qlen length
//! pident mismatch gaps evalue bitscore staxids"`.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Number of columns in the fixed schema.
pub const FIELD_COUNT: usize = 14;

/// Column names in schema order, written as the header row of every
/// output table.
pub const FIELD_NAMES: [&str; FIELD_COUNT] = [
    "qseqid",
    "sscinames",
    "sacc",
    "stitle",
    "qstart",
    "qend",
    "qlen",
    "length",
    "pident",
    "mismatch",
    "gaps",
    "evalue",
    "bitscore",
    "staxids",
];

/// One alignment row. Field declaration order is the column order; the
/// csv crate (de)serializes records positionally, so this struct is the
/// schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlignmentRecord {
    /// Query sequence identifier (not unique across rows).
    pub qseqid: String,
    /// Subject scientific name.
    pub sscinames: String,
    /// Subject accession.
    pub sacc: String,
    /// Subject title.
    pub stitle: String,
    /// Query start coordinate.
    pub qstart: u64,
    /// Query end coordinate.
    pub qend: u64,
    /// Query sequence length.
    pub qlen: u64,
    /// Alignment length.
    pub length: u64,
    /// Percent identity, 0-100.
    pub pident: f64,
    /// Mismatch count.
    pub mismatch: u64,
    /// Gap count.
    pub gaps: u64,
    /// Expectation value; lower is stronger evidence.
    pub evalue: f64,
    /// Bit score; higher is better.
    pub bitscore: f64,
    /// Subject taxonomy id(s), possibly semicolon-delimited; opaque here.
    pub staxids: String,
}

impl AlignmentRecord {
    /// Ranking order used to pick the best hit within a query group:
    /// bitscore descending, then evalue ascending, then pident
    /// descending. Returns `Ordering::Greater` when `self` outranks
    /// `other`. NaN in a key compares as equal, so a NaN row can never
    /// strictly outrank another row.
    pub fn cmp_rank(&self, other: &Self) -> Ordering {
        self.bitscore
            .partial_cmp(&other.bitscore)
            .unwrap_or(Ordering::Equal)
            .then(
                other
                    .evalue
                    .partial_cmp(&self.evalue)
                    .unwrap_or(Ordering::Equal),
            )
            .then(
                self.pident
                    .partial_cmp(&other.pident)
                    .unwrap_or(Ordering::Equal),
            )
    }
}
