use crate::entry::EntryId;
use std::cmp::Ordering;
use std::fmt;

struct PriceNode {
    price: i64,
    entries: Vec<EntryId>,
    left: Option<Box<PriceNode>>,
    right: Option<Box<PriceNode>>,
}

impl PriceNode {
    fn new(price: i64, id: EntryId) -> Self {
        PriceNode {
            price,
            entries: vec![id],
            left: None,
            right: None,
        }
    }
}

impl fmt::Debug for PriceNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriceNode")
            .field("price", &self.price)
            .field("entries", &self.entries)
            .finish()
    }
}

/// Unbalanced binary search tree keyed on price. Entries sharing a price
/// accumulate in one node, in insertion order. Tree shape follows insertion
/// order; there is no rebalancing, so sorted input degrades to a list.
pub struct PriceIndex {
    root: Option<Box<PriceNode>>,
    len: usize,
}

impl PriceIndex {
    pub fn new() -> Self {
        PriceIndex { root: None, len: 0 }
    }

    /// Number of entries indexed, not the number of distinct prices.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn insert(&mut self, price: i64, id: EntryId) {
        self.len += 1;

        let mut cursor = &mut self.root;
        while let Some(node) = cursor {
            match price.cmp(&node.price) {
                Ordering::Less => cursor = &mut node.left,
                Ordering::Greater => cursor = &mut node.right,
                Ordering::Equal => {
                    node.entries.push(id);
                    return;
                }
            }
        }
        *cursor = Some(Box::new(PriceNode::new(price, id)));
    }

    /// Ids of all entries priced exactly `price`, in insertion order.
    /// Empty on a miss, including on an empty tree.
    pub fn search_exact(&self, price: i64) -> &[EntryId] {
        let mut cursor = self.root.as_deref();
        while let Some(node) = cursor {
            match price.cmp(&node.price) {
                Ordering::Less => cursor = node.left.as_deref(),
                Ordering::Greater => cursor = node.right.as_deref(),
                Ordering::Equal => return &node.entries,
            }
        }
        &[]
    }

    /// Ids of all entries with `min <= price <= max`, ascending by price,
    /// ties in insertion order. Subtrees that cannot contribute are pruned.
    pub fn search_range(&self, min: i64, max: i64) -> Vec<EntryId> {
        let mut out = Vec::new();
        Self::collect_range(self.root.as_deref(), min, max, &mut out);
        out
    }

    fn collect_range(node: Option<&PriceNode>, min: i64, max: i64, out: &mut Vec<EntryId>) {
        let Some(node) = node else {
            return;
        };
        if min < node.price {
            Self::collect_range(node.left.as_deref(), min, max, out);
        }
        if min <= node.price && node.price <= max {
            out.extend_from_slice(&node.entries);
        }
        if node.price < max {
            Self::collect_range(node.right.as_deref(), min, max, out);
        }
    }

    /// All ids ascending by price, ties in insertion order.
    pub fn in_order(&self) -> Vec<EntryId> {
        let mut out = Vec::with_capacity(self.len);
        Self::collect_in_order(self.root.as_deref(), &mut out);
        out
    }

    fn collect_in_order(node: Option<&PriceNode>, out: &mut Vec<EntryId>) {
        let Some(node) = node else {
            return;
        };
        Self::collect_in_order(node.left.as_deref(), out);
        out.extend_from_slice(&node.entries);
        Self::collect_in_order(node.right.as_deref(), out);
    }
}

impl Default for PriceIndex {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let index = PriceIndex::new();
        assert_eq!(index.len(), 0);
        assert!(index.is_empty());
        assert_eq!(index.search_exact(100), &[] as &[EntryId]);
        assert!(index.in_order().is_empty());
    }

    #[test]
    fn test_insert_and_search_exact() {
        let mut index = PriceIndex::new();
        index.insert(50, 1);
        index.insert(30, 2);
        index.insert(70, 3);

        assert_eq!(index.len(), 3);
        assert_eq!(index.search_exact(50), &[1]);
        assert_eq!(index.search_exact(30), &[2]);
        assert_eq!(index.search_exact(70), &[3]);
        assert_eq!(index.search_exact(60), &[] as &[EntryId]);
    }

    #[test]
    fn test_equal_prices_share_a_node() {
        let mut index = PriceIndex::new();
        index.insert(40, 1);
        index.insert(40, 2);
        index.insert(40, 3);

        assert_eq!(index.len(), 3);
        assert_eq!(index.search_exact(40), &[1, 2, 3]);
        assert_eq!(index.in_order(), vec![1, 2, 3]);
    }

    #[test]
    fn test_in_order_is_price_ascending() {
        let mut index = PriceIndex::new();
        index.insert(50, 1);
        index.insert(20, 2);
        index.insert(80, 3);
        index.insert(50, 4);
        index.insert(10, 5);

        assert_eq!(index.in_order(), vec![5, 2, 1, 4, 3]);
    }

    #[test]
    fn test_range_ascending_with_ties() {
        let mut index = PriceIndex::new();
        index.insert(155, 1);
        index.insert(115, 2);
        index.insert(230, 3);
        index.insert(155, 4);

        assert_eq!(index.search_range(100, 200), vec![2, 1, 4]);
        assert_eq!(index.search_range(0, 1000), vec![2, 1, 4, 3]);
        assert_eq!(index.search_range(231, 500), Vec::<EntryId>::new());
    }

    #[test]
    fn test_range_bounds_are_inclusive() {
        let mut index = PriceIndex::new();
        index.insert(10, 1);
        index.insert(20, 2);
        index.insert(30, 3);

        assert_eq!(index.search_range(10, 30), vec![1, 2, 3]);
        assert_eq!(index.search_range(11, 29), vec![2]);
        assert_eq!(index.search_range(20, 20), vec![2]);
    }

    #[test]
    fn test_sorted_insertion_still_answers_queries() {
        // Degenerate shape (each node only has a right child); results must
        // be unaffected.
        let mut index = PriceIndex::new();
        for i in 1..=100 {
            index.insert(i, i as EntryId);
        }

        assert_eq!(index.len(), 100);
        assert_eq!(index.search_exact(73), &[73]);
        let ids: Vec<EntryId> = (25..=75).collect();
        assert_eq!(index.search_range(25, 75), ids);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;
        use std::collections::BTreeMap;

        proptest! {
            #[test]
            fn prop_in_order_matches_btreemap(prices in prop::collection::vec(0i64..500, 0..200)) {
                let mut index = PriceIndex::new();
                let mut expected: BTreeMap<i64, Vec<EntryId>> = BTreeMap::new();

                for (i, price) in prices.iter().enumerate() {
                    let id = i as EntryId;
                    index.insert(*price, id);
                    expected.entry(*price).or_default().push(id);
                }

                let flat: Vec<EntryId> = expected.values().flatten().copied().collect();
                prop_assert_eq!(index.in_order(), flat);
            }

            #[test]
            fn prop_search_exact_matches_btreemap(prices in prop::collection::vec(0i64..100, 0..200), probe in 0i64..100) {
                let mut index = PriceIndex::new();
                let mut expected: BTreeMap<i64, Vec<EntryId>> = BTreeMap::new();

                for (i, price) in prices.iter().enumerate() {
                    let id = i as EntryId;
                    index.insert(*price, id);
                    expected.entry(*price).or_default().push(id);
                }

                let want = expected.get(&probe).cloned().unwrap_or_default();
                prop_assert_eq!(index.search_exact(probe), want.as_slice());
            }

            #[test]
            fn prop_range_is_filtered_in_order(prices in prop::collection::vec(0i64..500, 0..200), lo in 0i64..500, span in 0i64..500) {
                let mut index = PriceIndex::new();
                let mut by_price: BTreeMap<i64, Vec<EntryId>> = BTreeMap::new();

                for (i, price) in prices.iter().enumerate() {
                    let id = i as EntryId;
                    index.insert(*price, id);
                    by_price.entry(*price).or_default().push(id);
                }

                let hi = lo.saturating_add(span);
                let want: Vec<EntryId> = by_price
                    .range(lo..=hi)
                    .flat_map(|(_, ids)| ids.iter().copied())
                    .collect();
                prop_assert_eq!(index.search_range(lo, hi), want);
            }
        }
    }
}
