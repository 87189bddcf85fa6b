use std::collections::HashSet;

use bitvec::prelude::*;
use rayon::prelude::*;
use tracing::debug;

use crate::{
    combi::{all_subsets_frequent, extend_itemset, verified_subset_sizes},
    transactions::TransactionDb,
    types::{FrequentItemsets, ItemMask, Itemset, ItemsetLength, SupportIndex},
};

const APPROX_NUM_UNIQUE_ITEMS: usize = 1024; // arbitrary

/// Size-1 support index: every item mapped to the transactions it occurs in.
/// Nothing is pruned here.
pub fn seed_base_level(db: &TransactionDb) -> SupportIndex {
    let mut index = SupportIndex::with_capacity(db.item_count().min(APPROX_NUM_UNIQUE_ITEMS));

    for (tid, transaction) in db.transactions().iter().enumerate() {
        for &item in transaction {
            index.entry(vec![item]).or_default().push(tid);
        }
    }

    index
}

/// Marks the items whose singleton survived pruning.
pub fn frequent_item_mask(singletons: &SupportIndex, item_count: usize) -> ItemMask {
    let mut mask = bitvec![0; item_count];
    for itemset in singletons.keys() {
        if let Some(&item) = itemset.first() {
            if item < item_count {
                mask.set(item, true);
            }
        }
    }
    mask
}

/// Builds the size-`k` support index from the pruned levels `k - 1` and 1.
///
/// Each frequent `(k-1)`-itemset is extended by every frequent item of every
/// transaction it occurs in. A candidate seen for the first time is only
/// admitted if [`all_subsets_frequent`] accepts it for the sizes given by
/// [`verified_subset_sizes`]. The verdict only depends on the candidate, so
/// an admitted candidate collects every transaction that reaches it.
///
/// Work is split across source itemsets; every worker accumulates its own
/// index and the partial indexes are merged. Membership lists come out sorted
/// and without duplicates.
pub fn extend_level(
    db: &TransactionDb,
    k: ItemsetLength,
    table: &FrequentItemsets,
    max_combo_size: usize,
) -> SupportIndex {
    if k < 2 {
        return SupportIndex::new();
    }
    let (prev, singletons) = match (table.get(&(k - 1)), table.get(&1)) {
        (Some(prev), Some(singletons)) => (prev, singletons),
        _ => return SupportIndex::new(),
    };

    let frequent = frequent_item_mask(singletons, db.item_count());
    let sizes = verified_subset_sizes(k, max_combo_size);
    let transactions = db.transactions();

    let (mut index, rejected) = prev
        .par_iter()
        .fold(
            || (SupportIndex::new(), HashSet::<Itemset>::new()),
            |(mut admitted, mut rejected), (itemset, tids)| {
                for &tid in tids {
                    for &item in &transactions[tid] {
                        if !frequent[item] || itemset.binary_search(&item).is_ok() {
                            continue;
                        }

                        let candidate = extend_itemset(itemset, item);

                        if let Some(members) = admitted.get_mut(&candidate) {
                            members.push(tid);
                            continue;
                        }
                        if rejected.contains(&candidate) {
                            continue;
                        }

                        if all_subsets_frequent(&candidate, sizes.clone(), table) {
                            admitted.insert(candidate, vec![tid]);
                        } else {
                            rejected.insert(candidate);
                        }
                    }
                }
                (admitted, rejected)
            },
        )
        .map(|(admitted, rejected)| (admitted, rejected.len()))
        .reduce(
            || (SupportIndex::new(), 0),
            |(a, rejected_a), (b, rejected_b)| (merge(a, b), rejected_a + rejected_b),
        );

    index.par_iter_mut().for_each(|(_, members)| {
        members.sort_unstable();
        members.dedup();
    });

    debug!(
        size = k,
        admitted = index.len(),
        rejected,
        "candidates verified"
    );

    index
}

fn merge(mut a: SupportIndex, mut b: SupportIndex) -> SupportIndex {
    if a.len() < b.len() {
        std::mem::swap(&mut a, &mut b);
    }
    for (itemset, members) in b {
        a.entry(itemset).or_default().extend(members);
    }
    a
}
