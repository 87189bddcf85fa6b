//! Error types for the miner and its input loader.

use std::{io, path::PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum MinerError {
    #[error("min_support must be at least 1, got {0}")]
    InvalidMinSupport(usize),

    #[error(
        "max_combo_size must be at least 2, got {0} (use 2 to disable subset verification)"
    )]
    InvalidMaxComboSize(usize),

    #[error("min_set_size must be at least 1, got {0}")]
    InvalidMinSetSize(usize),
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("cannot open {path}: {source}")]
    Io { path: PathBuf, source: io::Error },

    #[error("failed reading transactions: {0}")]
    Read(#[from] io::Error),

    #[error("line {line}: invalid item '{token}'")]
    InvalidItem { line: usize, token: String },
}
