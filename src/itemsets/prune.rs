use crate::types::{FrequentItemsets, SupportIndex};

/// Drops every itemset seen in fewer than `min_support` transactions.
/// Returns how many itemsets were removed.
pub fn prune(index: &mut SupportIndex, min_support: usize) -> usize {
    let before = index.len();
    index.retain(|_, members| members.len() >= min_support);
    before - index.len()
}

/// Prunes the largest level of the table, leaving the others untouched.
pub fn prune_top_level(table: &mut FrequentItemsets, min_support: usize) -> usize {
    match table.values_mut().next_back() {
        Some(index) => prune(index, min_support),
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maplit::{btreemap, hashmap};

    #[test]
    fn keeps_itemsets_at_exactly_min_support() {
        let mut index = hashmap! {
            vec![1] => vec![0, 1, 2],
            vec![2] => vec![0, 1],
            vec![3] => vec![4],
        };

        let removed = prune(&mut index, 2);

        assert_eq!(removed, 1);
        assert_eq!(
            index,
            hashmap! { vec![1] => vec![0, 1, 2], vec![2] => vec![0, 1] }
        );
    }

    #[test]
    fn prune_everything() {
        let mut index = hashmap! { vec![1, 2] => vec![0] };
        assert_eq!(prune(&mut index, 2), 1);
        assert!(index.is_empty());
    }

    #[test]
    fn only_the_top_level_is_pruned() {
        let mut table = btreemap! {
            1 => hashmap! { vec![1] => vec![0] },
            2 => hashmap! { vec![1, 2] => vec![0], vec![1, 3] => vec![0, 1] },
        };

        assert_eq!(prune_top_level(&mut table, 2), 1);
        assert_eq!(
            table,
            btreemap! {
                1 => hashmap! { vec![1] => vec![0] },
                2 => hashmap! { vec![1, 3] => vec![0, 1] },
            }
        );
    }

    #[test]
    fn prune_empty_table() {
        let mut table = FrequentItemsets::new();
        assert_eq!(prune_top_level(&mut table, 3), 0);
    }
}
