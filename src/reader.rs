//! Space-delimited transaction files, one purchase per line.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::{
    error::LoadError,
    types::{Item, RawTransaction},
};

/// Parses one line into a sorted transaction without duplicates.
/// `line_no` is 1-based and only used for error reporting.
pub fn parse_transaction(line: &str, line_no: usize) -> Result<RawTransaction, LoadError> {
    let mut items = line
        .split_whitespace()
        .map(|token| {
            token.parse::<Item>().map_err(|_| LoadError::InvalidItem {
                line: line_no,
                token: token.to_owned(),
            })
        })
        .collect::<Result<RawTransaction, _>>()?;

    items.sort_unstable();
    items.dedup();
    Ok(items)
}

pub fn read_transactions<R: BufRead>(reader: R) -> Result<Vec<RawTransaction>, LoadError> {
    reader
        .lines()
        .enumerate()
        .map(|(idx, line)| parse_transaction(&line?, idx + 1))
        .collect()
}

pub fn load_transactions(path: impl AsRef<Path>) -> Result<Vec<RawTransaction>, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_transactions(BufReader::new(file))
}
