use std::ops::Range;

use itertools::Itertools;

use crate::types::{FrequentItemsets, ItemId, Itemset, ItemsetLength};

/// Inserts `item` into a sorted itemset, keeping it sorted.
pub fn extend_itemset(itemset: &[ItemId], item: ItemId) -> Itemset {
    let at = itemset.partition_point(|&x| x < item);
    let mut superset: Itemset = Vec::with_capacity(itemset.len() + 1);
    superset.extend_from_slice(&itemset[..at]);
    superset.push(item);
    superset.extend_from_slice(&itemset[at..]);
    superset
}

/// Subset sizes checked for a new candidate of size `k`.
///
/// Size 1 is skipped since the extending item was already taken from the
/// frequent singletons. The upper bound is exclusive.
pub fn verified_subset_sizes(k: ItemsetLength, max_combo_size: usize) -> Range<usize> {
    2..max_combo_size.min(k)
}

/// Bounded subset verification.
///
/// True if every subset of `candidate` with a size in `sizes` is present in
/// the pruned level of that size. Returns on the first missing subset.
pub fn all_subsets_frequent(
    candidate: &[ItemId],
    sizes: Range<usize>,
    table: &FrequentItemsets,
) -> bool {
    sizes.into_iter().all(|size| match table.get(&size) {
        Some(level) => candidate
            .iter()
            .copied()
            .combinations(size)
            .all(|subset| level.contains_key(&subset)),
        None => false,
    })
}
