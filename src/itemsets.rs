//! Level-wise frequent itemset search.

pub mod count;
pub mod prune;

use tracing::{debug, info};

use crate::{
    config::MinerConfig,
    error::MinerError,
    itemsets::{
        count::{extend_level, seed_base_level},
        prune::prune_top_level,
    },
    transactions::TransactionDb,
    types::{FrequentItemsets, Item, ItemsetLength, RawTransaction},
};

/// One output record: an itemset with its size and frequency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemsetRow {
    pub size: ItemsetLength,
    pub frequency: usize,
    /// Ascending.
    pub items: Vec<Item>,
}

#[derive(Debug, Clone)]
pub struct Miner {
    config: MinerConfig,
}

impl Miner {
    pub fn new(config: MinerConfig) -> Result<Self, MinerError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &MinerConfig {
        &self.config
    }

    /// Runs the search and returns every pruned level.
    ///
    /// Level 1 is always present, possibly empty. Levels are built for sizes
    /// `2..max_transaction_len` and the search stops at the first level left
    /// empty by pruning; that level is not stored.
    pub fn mine(&self, db: &TransactionDb) -> FrequentItemsets {
        let min_support = self.config.min_support;
        let mut table = FrequentItemsets::new();

        table.insert(1, seed_base_level(db));
        prune_top_level(&mut table, min_support);
        info!("starting with {} sets of size 1", table[&1].len());

        let max_len = db.max_transaction_len();
        for size in 2..max_len {
            let level = extend_level(db, size, &table, self.config.max_combo_size);
            let candidates = level.len();

            table.insert(size, level);
            prune_top_level(&mut table, min_support);

            let frequent = table[&size].len();
            info!(size, candidates, frequent, "checked subsets of size {}", size);

            if frequent == 0 {
                table.remove(&size);
                debug!(size, "no frequent itemsets left, stopping");
                break;
            }
        }

        table
    }

    /// Interns `transactions`, mines them and keeps both for lookups.
    pub fn mine_transactions(&self, transactions: Vec<RawTransaction>) -> MiningResult {
        let db = TransactionDb::from_raw(transactions);
        let levels = self.mine(&db);
        MiningResult { levels, db }
    }
}

/// Pruned levels of a finished run together with the data they index.
#[derive(Debug, Clone)]
pub struct MiningResult {
    levels: FrequentItemsets,
    db: TransactionDb,
}

impl MiningResult {
    pub fn levels(&self) -> &FrequentItemsets {
        &self.levels
    }

    pub fn db(&self) -> &TransactionDb {
        &self.db
    }

    pub fn max_size(&self) -> ItemsetLength {
        self.levels
            .iter()
            .rev()
            .find(|(_, level)| !level.is_empty())
            .map_or(0, |(&size, _)| size)
    }

    /// Frequency of a frequent itemset, `None` if it was pruned or never built.
    pub fn support(&self, items: &[Item]) -> Option<usize> {
        let itemset = self.db.encode(items)?;
        self.levels
            .get(&itemset.len())?
            .get(&itemset)
            .map(Vec::len)
    }

    /// Records for every itemset of at least `min_set_size` items, ordered by
    /// size and then by item list.
    pub fn rows(&self, min_set_size: ItemsetLength) -> Vec<ItemsetRow> {
        self.levels
            .range(min_set_size..)
            .flat_map(|(&size, level)| {
                let mut rows: Vec<ItemsetRow> = level
                    .iter()
                    .map(|(itemset, members)| ItemsetRow {
                        size,
                        frequency: members.len(),
                        items: self.db.decode(itemset),
                    })
                    .collect();
                rows.sort_unstable_by(|a, b| a.items.cmp(&b.items));
                rows
            })
            .collect()
    }
}
