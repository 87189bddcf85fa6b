//! Command line interface of the `cooccur` binary.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use tracing::info;

use crate::{
    config::{MinerConfig, DEFAULT_MAX_COMBO_SIZE, DEFAULT_MIN_SET_SIZE, DEFAULT_MIN_SUPPORT},
    itemsets::Miner,
    reader::load_transactions,
    writer::write_file,
};

/// Find frequently co-purchased items in supermarket checkout data.
#[derive(Parser, Debug, Clone)]
#[command(name = "cooccur", author, version, about, long_about = None)]
pub struct Args {
    /// A file with one purchase per line, each a space-separated list of PLU values
    #[arg(value_name = "INPUT_FILE")]
    pub input: PathBuf,

    /// The minimum number of times a set of items must co-occur
    #[arg(long, default_value_t = DEFAULT_MIN_SUPPORT)]
    pub sigma: usize,

    /// The size of the smallest sets to write to the output file
    #[arg(long, default_value_t = DEFAULT_MIN_SET_SIZE)]
    pub min_set_size: usize,

    /// Largest subset size (exclusive) verified before a candidate is stored.
    /// Tunes time against memory only; 2 disables verification
    #[arg(long, default_value_t = DEFAULT_MAX_COMBO_SIZE)]
    pub max_combo_size: usize,

    /// The output file (defaults to <input>_sigma<sigma>_setsize<min_set_size>.csv)
    #[arg(short, long, value_name = "OUTPUT_FILE")]
    pub output: Option<PathBuf>,

    /// Number of threads (default: auto-detect)
    #[arg(short = 't', long = "threads", value_name = "N")]
    pub threads: Option<usize>,
}

impl Args {
    pub fn config(&self) -> MinerConfig {
        MinerConfig::default()
            .with_min_support(self.sigma)
            .with_min_set_size(self.min_set_size)
            .with_max_combo_size(self.max_combo_size)
    }

    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| default_output_path(&self.input, self.sigma, self.min_set_size))
    }
}

/// `<dir>/<stem>_sigma<sigma>_setsize<min_set_size>.csv`
pub fn default_output_path(input: &Path, sigma: usize, min_set_size: usize) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("{}_sigma{}_setsize{}.csv", stem, sigma, min_set_size))
}

/// Loads, mines and writes. Returns the number of rows written.
pub fn run(args: &Args) -> anyhow::Result<usize> {
    let config = args.config();
    let miner = Miner::new(config).context("invalid configuration")?;

    if let Some(threads) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("failed to configure the thread pool")?;
    }

    let transactions = load_transactions(&args.input)
        .with_context(|| format!("failed to load {}", args.input.display()))?;
    info!(
        transactions = transactions.len(),
        input = %args.input.display(),
        "loaded transactions"
    );

    let result = miner.mine_transactions(transactions);
    let rows = result.rows(config.min_set_size);

    let output = args.output_path();
    write_file(&output, &rows).with_context(|| format!("failed to write {}", output.display()))?;
    info!(rows = rows.len(), output = %output.display(), "wrote frequent itemsets");

    Ok(rows.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{ffi::OsString, io::Write};

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["cooccur", "retail.dat"]).unwrap();

        assert_eq!(args.config(), MinerConfig::default());
        assert_eq!(args.output_path(), PathBuf::from("retail_sigma4_setsize3.csv"));
        assert!(args.threads.is_none());
    }

    #[test]
    fn flags_map_to_config() {
        let args = Args::try_parse_from([
            "cooccur",
            "data/retail.dat",
            "--sigma",
            "10",
            "--min-set-size",
            "2",
            "--max-combo-size",
            "5",
        ])
        .unwrap();

        assert_eq!(
            args.config(),
            MinerConfig {
                min_support: 10,
                max_combo_size: 5,
                min_set_size: 2,
            }
        );
        assert_eq!(
            args.output_path(),
            PathBuf::from("data/retail_sigma10_setsize2.csv")
        );
    }

    #[test]
    fn explicit_output() {
        let args = Args::try_parse_from(["cooccur", "in.dat", "-o", "out.csv"]).unwrap();
        assert_eq!(args.output_path(), PathBuf::from("out.csv"));
    }

    #[test]
    fn default_output_without_extension() {
        assert_eq!(
            default_output_path(Path::new("baskets"), 4, 3),
            PathBuf::from("baskets_sigma4_setsize3.csv")
        );
    }

    #[test]
    fn run_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("baskets.dat");
        let mut file = std::fs::File::create(&input).unwrap();
        for _ in 0..4 {
            writeln!(file, "1 2 3 9").unwrap();
        }
        writeln!(file, "1 2").unwrap();
        drop(file);

        let args = Args::try_parse_from([
            OsString::from("cooccur"),
            input.clone().into_os_string(),
            OsString::from("--sigma"),
            OsString::from("4"),
        ])
        .unwrap();

        let written = run(&args).unwrap();
        let output = std::fs::read_to_string(dir.path().join("baskets_sigma4_setsize3.csv")).unwrap();

        assert_eq!(written, 4);
        assert_eq!(
            output,
            "3,4,1,2,3\n3,4,1,2,9\n3,4,1,3,9\n3,4,2,3,9\n"
        );
    }

    #[test]
    fn run_rejects_invalid_config() {
        let args = Args::try_parse_from(["cooccur", "missing.dat", "--sigma", "0"]).unwrap();
        assert!(run(&args).is_err());
    }
}
