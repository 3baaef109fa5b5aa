//! Best-hit selection and good/bad classification.
//!
//! Both stages are pure transformations: they take a table in and hand a
//! new table back, so the ranking/tie-break contract lives in explicit
//! comparisons instead of the sort stability of a library call.

use crate::record::AlignmentRecord;
use indexmap::IndexMap;
use std::cmp::Ordering;

/// Good/bad split of the best-hit table.
#[derive(Debug)]
pub struct BestHitPartition {
    /// Best hits with `pident >= threshold`.
    pub good: Vec<AlignmentRecord>,
    /// Best hits with `pident < threshold`.
    pub bad: Vec<AlignmentRecord>,
}

impl BestHitPartition {
    /// Total number of classified queries.
    pub fn total(&self) -> usize {
        self.good.len() + self.bad.len()
    }
}

/// Reduces the full alignment table to one row per distinct `qseqid`.
///
/// Rows are grouped by query and each group is reduced with
/// [`AlignmentRecord::cmp_rank`] (bitscore descending, evalue ascending,
/// pident descending). A challenger replaces the group's incumbent only
/// when it compares strictly better, so rows that tie on all three keys
/// resolve to the earliest input row. The result is sorted by ascending
/// `qseqid`.
pub fn best_hits(records: Vec<AlignmentRecord>) -> Vec<AlignmentRecord> {
    let mut best: IndexMap<String, AlignmentRecord> = IndexMap::new();

    for record in records {
        match best.get_mut(&record.qseqid) {
            Some(incumbent) => {
                if record.cmp_rank(incumbent) == Ordering::Greater {
                    *incumbent = record;
                }
            }
            None => {
                best.insert(record.qseqid.clone(), record);
            }
        }
    }

    let mut hits: Vec<AlignmentRecord> = best.into_values().collect();
    hits.sort_by(|a, b| a.qseqid.cmp(&b.qseqid));
    hits
}

/// Splits the best-hit table into good (`pident >= threshold`, inclusive
/// bound) and bad hits, preserving order. Every row lands on exactly one
/// side, so the two parts always add back up to the input.
pub fn classify(best: &[AlignmentRecord], threshold: f64) -> BestHitPartition {
    let mut good = Vec::new();
    let mut bad = Vec::new();

    for record in best {
        if record.pident >= threshold {
            good.push(record.clone());
        } else {
            bad.push(record.clone());
        }
    }

    BestHitPartition { good, bad }
}
