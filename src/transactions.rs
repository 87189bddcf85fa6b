use std::collections::HashMap;

use crate::types::{
    Inventory, Item, ItemId, Itemset, RawTransaction, ReverseLookup, Transaction, TransactionId,
};

/// Transactions with items interned into dense ids.
///
/// Ids are handed out in ascending order of the raw items, so a sorted
/// [`Itemset`] decodes into a sorted list of raw items.
#[derive(Debug, Clone, Default)]
pub struct TransactionDb {
    transactions: Vec<Transaction>,
    inventory: Inventory,
    reverse_lookup: ReverseLookup,
}

impl TransactionDb {
    /// Builds the database, collapsing duplicate items inside each transaction.
    pub fn from_raw(raw_transactions: Vec<RawTransaction>) -> Self {
        let mut inventory: Inventory = raw_transactions.iter().flatten().copied().collect();
        inventory.sort_unstable();
        inventory.dedup();

        let reverse_lookup: ReverseLookup = inventory
            .iter()
            .enumerate()
            .map(|(id, &item)| (item, id))
            .collect();

        let transactions = raw_transactions
            .into_iter()
            .map(|raw_transaction| {
                let mut items: Transaction = raw_transaction
                    .iter()
                    .map(|item| reverse_lookup[item])
                    .collect();
                items.sort_unstable();
                items.dedup();
                items
            })
            .collect();

        Self {
            transactions,
            inventory,
            reverse_lookup,
        }
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Number of distinct items.
    pub fn item_count(&self) -> usize {
        self.inventory.len()
    }

    pub fn max_transaction_len(&self) -> usize {
        self.transactions.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn get(&self, tid: TransactionId) -> Option<&Transaction> {
        self.transactions.get(tid)
    }

    pub fn item(&self, id: ItemId) -> Option<Item> {
        self.inventory.get(id).copied()
    }

    pub fn id_of(&self, item: Item) -> Option<ItemId> {
        self.reverse_lookup.get(&item).copied()
    }

    pub fn decode(&self, itemset: &[ItemId]) -> Vec<Item> {
        itemset.iter().map(|&id| self.inventory[id]).collect()
    }

    /// `None` if any item never occurs in the database.
    pub fn encode(&self, items: &[Item]) -> Option<Itemset> {
        let mut itemset = items
            .iter()
            .map(|&item| self.id_of(item))
            .collect::<Option<Itemset>>()?;
        itemset.sort_unstable();
        itemset.dedup();
        Some(itemset)
    }

    /// Item frequencies keyed by raw item, before any pruning.
    pub fn item_counts(&self) -> HashMap<Item, usize> {
        let mut counts = HashMap::with_capacity(self.inventory.len());
        for transaction in &self.transactions {
            for &id in transaction {
                *counts.entry(self.inventory[id]).or_insert(0) += 1;
            }
        }
        counts
    }
}
