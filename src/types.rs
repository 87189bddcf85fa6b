use std::collections::{BTreeMap, HashMap};

use bitvec::vec::BitVec;

/// Raw item identifier as it appears in the input (a PLU code).
pub type Item = u64;
pub type RawTransaction = Vec<Item>;

/// Dense identifier assigned by [`crate::TransactionDb`].
pub type ItemId = usize;
pub type TransactionId = usize;

pub type Inventory = Vec<Item>;
pub type ReverseLookup = HashMap<Item, ItemId>;

/// Sorted, duplicate-free.
pub type Transaction = Vec<ItemId>;
/// Sorted, duplicate-free. Sorting makes equality and hashing order-independent.
pub type Itemset = Vec<ItemId>;

pub type ItemsetLength = usize;
pub type SupportIndex = HashMap<Itemset, Vec<TransactionId>>;
pub type FrequentItemsets = BTreeMap<ItemsetLength, SupportIndex>;

/// Bit per dense item id, set when the singleton is frequent.
pub type ItemMask = BitVec;
