//! Frequent itemset mining over purchase transactions.
//!
//! Itemsets are grown one size at a time: frequent itemsets of size `k - 1`
//! are extended with frequent single items from the transactions they occur
//! in, candidates with an infrequent subset are rejected early, and every
//! level is pruned to the minimum support before the next one is built.

pub mod cli;
pub mod combi;
pub mod config;
pub mod error;
pub mod itemsets;
pub mod reader;
pub mod transactions;
pub mod types;
#[cfg(feature = "python")]
pub mod wrapper;
pub mod writer;

pub use config::MinerConfig;
pub use error::{LoadError, MinerError};
pub use itemsets::{
    count::{extend_level, seed_base_level},
    prune::{prune, prune_top_level},
    ItemsetRow, Miner, MiningResult,
};
pub use transactions::TransactionDb;

#[cfg(feature = "python")]
use pyo3::prelude::*;
#[cfg(feature = "python")]
use pyo3::wrap_pyfunction;

#[cfg(feature = "python")]
#[pymodule]
fn cooccur(_: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(wrapper::frequent_itemsets, m)?)?;
    Ok(())
}
