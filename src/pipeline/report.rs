//! Console reporting for a classification run.

use crate::pipeline::best_hit::BestHitPartition;
use crate::record::AlignmentRecord;
use itertools::Itertools;
use std::cmp::Ordering;
use std::time::Duration;

/// Number of best hits shown in the verbose top-identity listing.
const TOP_HITS_SHOWN: usize = 5;

/// Run counters surfaced by the verbose diagnostics.
#[derive(Debug)]
pub struct RunStats {
    /// Alignment rows read from the input table.
    pub rows_loaded: usize,
    /// Distinct query sequences among those rows.
    pub distinct_queries: usize,
    /// Wall-clock time for the run so far.
    pub elapsed: Duration,
}

/// Generate the fixed summary block printed on every run.
pub fn summary(partition: &BestHitPartition, threshold: f64) -> String {
    let mut report = String::new();

    report.push_str("Best-hit classification\n");
    report.push_str("=======================\n");
    report.push_str(&format!(
        "Good hits (pident >= {}): {}\n",
        threshold,
        partition.good.len()
    ));
    report.push_str(&format!(
        "Bad hits (pident < {}): {}\n",
        threshold,
        partition.bad.len()
    ));
    report.push_str(&format!("Total hits: {}\n", partition.total()));

    report
}

/// Generate the extended diagnostics for `--verbose`: the top best hits
/// by percent identity, load statistics, and elapsed time.
pub fn verbose_details(best: &[AlignmentRecord], stats: &RunStats) -> String {
    let mut report = String::new();

    report.push_str("\nTop hits by percent identity:\n");
    let top = best
        .iter()
        .sorted_by(|a, b| b.pident.partial_cmp(&a.pident).unwrap_or(Ordering::Equal))
        .take(TOP_HITS_SHOWN);
    for record in top {
        report.push_str(&format!(
            "  {}: {} ({:.2}%, {:e})\n",
            record.qseqid, record.sscinames, record.pident, record.evalue
        ));
    }

    report.push_str(&format!(
        "Loaded {} rows covering {} distinct queries\n",
        stats.rows_loaded, stats.distinct_queries
    ));
    report.push_str(&format!(
        "Elapsed: {:.2} s\n",
        stats.elapsed.as_secs_f64()
    ));

    report
}
