use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::{IntoPyDict, PyDict, PyFrozenSet};

use crate::{
    config::{MinerConfig, DEFAULT_MAX_COMBO_SIZE, DEFAULT_MIN_SUPPORT},
    itemsets::{Miner, MiningResult},
    types::{Item, RawTransaction},
};

/// Mines frequent itemsets and returns `{size: {frozenset(items): count}}`.
#[pyfunction]
#[pyo3(text_signature = "(transactions, /, min_support=4, max_combo_size=3)")]
pub fn frequent_itemsets(
    transactions: Vec<RawTransaction>,
    min_support: Option<usize>,
    max_combo_size: Option<usize>,
) -> PyResult<Py<PyDict>> {
    let config = MinerConfig::default()
        .with_min_support(min_support.unwrap_or(DEFAULT_MIN_SUPPORT))
        .with_max_combo_size(max_combo_size.unwrap_or(DEFAULT_MAX_COMBO_SIZE));
    let miner = Miner::new(config).map_err(|e| PyValueError::new_err(e.to_string()))?;

    let result = miner.mine_transactions(transactions);
    Python::with_gil(|py| convert_result(py, &result))
}

fn convert_result(py: Python, result: &MiningResult) -> PyResult<Py<PyDict>> {
    let levels = result
        .levels()
        .iter()
        .map(|(&size, level)| {
            let counts = level
                .iter()
                .map(|(itemset, members)| {
                    let items: Vec<Item> = result.db().decode(itemset);
                    let set: Py<PyFrozenSet> = PyFrozenSet::new(py, &items)?.into();
                    Ok((set, members.len()))
                })
                .collect::<PyResult<Vec<(Py<PyFrozenSet>, usize)>>>()?;
            let counts: Py<PyDict> = counts.into_py_dict(py).into();
            Ok((size, counts))
        })
        .collect::<PyResult<Vec<(usize, Py<PyDict>)>>>()?;

    Ok(levels.into_py_dict(py).into())
}
