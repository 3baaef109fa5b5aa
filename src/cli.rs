//! Command-line surface and run orchestration.

use crate::io;
use crate::pipeline::report::{self, RunStats};
use crate::pipeline::{best_hits, classify};
use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::path::PathBuf;
use std::time::Instant;

/// Classify BLAST tabular results: keep the best-scoring alignment per
/// query sequence and split the winners into good and bad hits by
/// percent identity.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// BLAST results file (tabular outfmt 6, no header row)
    #[arg(short, long)]
    pub input: PathBuf,

    /// Base name for the output tables (all_/good_/bad_ prefixes added)
    #[arg(short, long)]
    pub output: String,

    /// Percent-identity cutoff separating good hits from bad ones
    #[arg(short, long, default_value_t = 97.0)]
    pub threshold: f64,

    /// Print extended diagnostics (top hits, load statistics, timing)
    #[arg(short, long)]
    pub verbose: bool,
}

/// Run the whole pipeline: load, rank, classify, report, persist.
pub fn run_cli(cli: Cli) -> Result<()> {
    let started = Instant::now();

    let records = io::load_alignments(&cli.input)
        .with_context(|| format!("failed to read input file '{}'", cli.input.display()))?;
    let rows_loaded = records.len();

    let best = best_hits(records);
    info!(
        "selected {} best hits from {} alignment rows",
        best.len(),
        rows_loaded
    );

    let partition = classify(&best, cli.threshold);

    print!("{}", report::summary(&partition, cli.threshold));
    if cli.verbose {
        let stats = RunStats {
            rows_loaded,
            distinct_queries: best.len(),
            elapsed: started.elapsed(),
        };
        print!("{}", report::verbose_details(&best, &stats));
    }

    let paths = io::output_paths(&cli.output);
    io::write_best_hit_tables(&paths, &best, &partition.good, &partition.bad)?;
    println!("Wrote {}", paths.all.display());
    println!("Wrote {}", paths.good.display());
    println!("Wrote {}", paths.bad.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    fn input_row(qseqid: &str, pident: &str, evalue: &str, bitscore: &str) -> String {
        format!(
            "{}\tEscherichia coli\tNC_000913\tEscherichia coli str. K-12\t1\t100\t100\t100\t{}\t0\t0\t{}\t{}\t562",
            qseqid, pident, evalue, bitscore
        )
    }

    fn cli_for(input: &Path, output: &Path) -> Cli {
        Cli {
            input: input.to_path_buf(),
            output: output.to_string_lossy().into_owned(),
            threshold: 97.0,
            verbose: false,
        }
    }

    fn line_count(path: &Path) -> usize {
        fs::read_to_string(path).unwrap().lines().count()
    }

    #[test]
    fn classifies_good_and_bad_queries() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("hits.tsv");
        fs::write(
            &input,
            format!(
                "{}\n{}\n",
                input_row("Q1", "98.0", "1e-10", "80.0"),
                input_row("Q2", "50.0", "0.001", "60.0")
            ),
        )
        .unwrap();

        run_cli(cli_for(&input, &dir.path().join("run"))).unwrap();

        let good = fs::read_to_string(dir.path().join("good_run.tsv")).unwrap();
        let bad = fs::read_to_string(dir.path().join("bad_run.tsv")).unwrap();
        let all = fs::read_to_string(dir.path().join("all_run.tsv")).unwrap();
        assert_eq!(good.lines().count(), 2); // header + Q1
        assert!(good.lines().nth(1).unwrap().starts_with("Q1\t"));
        assert_eq!(bad.lines().count(), 2); // header + Q2
        assert!(bad.lines().nth(1).unwrap().starts_with("Q2\t"));
        assert_eq!(all.lines().count(), 3);
    }

    #[test]
    fn empty_input_writes_header_only_tables() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("empty.tsv");
        fs::write(&input, "").unwrap();

        run_cli(cli_for(&input, &dir.path().join("run"))).unwrap();

        for name in ["all_run.tsv", "good_run.tsv", "bad_run.tsv"] {
            let content = fs::read_to_string(dir.path().join(name)).unwrap();
            assert_eq!(content.lines().count(), 1, "{} should be header-only", name);
            assert!(content.starts_with("qseqid\t"));
        }
    }

    #[test]
    fn malformed_row_aborts_before_writing() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("broken.tsv");
        fs::write(
            &input,
            format!(
                "{}\nQ2\ttoo\tfew\tfields\n",
                input_row("Q1", "98.0", "1e-10", "80.0")
            ),
        )
        .unwrap();

        let result = run_cli(cli_for(&input, &dir.path().join("run")));

        assert!(result.is_err());
        assert!(!dir.path().join("all_run.tsv").exists());
        assert!(!dir.path().join("good_run.tsv").exists());
        assert!(!dir.path().join("bad_run.tsv").exists());
    }

    #[test]
    fn missing_input_reports_path() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("no_such_file.tsv");

        let err = run_cli(cli_for(&input, &dir.path().join("run"))).unwrap_err();

        assert!(format!("{}", err).contains("no_such_file.tsv"));
    }

    #[test]
    fn reruns_produce_identical_tables() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("hits.tsv");
        fs::write(
            &input,
            format!(
                "{}\n{}\n{}\n",
                input_row("Q1", "98.0", "1e-10", "80.0"),
                input_row("Q1", "95.0", "1e-10", "80.0"),
                input_row("Q2", "50.0", "0.001", "60.0")
            ),
        )
        .unwrap();
        let cli = || cli_for(&input, &dir.path().join("run"));

        run_cli(cli()).unwrap();
        let first: Vec<String> = ["all_run.tsv", "good_run.tsv", "bad_run.tsv"]
            .iter()
            .map(|n| fs::read_to_string(dir.path().join(n)).unwrap())
            .collect();

        run_cli(cli()).unwrap();
        let second: Vec<String> = ["all_run.tsv", "good_run.tsv", "bad_run.tsv"]
            .iter()
            .map(|n| fs::read_to_string(dir.path().join(n)).unwrap())
            .collect();

        assert_eq!(first, second);
        // Ties on bitscore and evalue resolve to the higher-pident row.
        assert_eq!(line_count(&dir.path().join("all_run.tsv")), 3);
        assert!(first[0].contains("\t98\t") || first[0].contains("\t98.0\t"));
    }
}
