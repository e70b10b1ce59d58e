//! Shared test support: tree strategies and builders.

use proptest::prelude::*;

use crate::bintree::BinTree;

pub(crate) fn arb_tree() -> impl Strategy<Value = BinTree<i32>> {
    let base = prop_oneof![
        Just(BinTree::Empty),
        any::<i32>().prop_map(BinTree::leaf),
    ];
    base.prop_recursive(6, 48, 2, |inner| {
        (any::<i32>(), inner.clone(), inner)
            .prop_map(|(value, left, right)| BinTree::node(value, left, right))
    })
}

// Collect node values depth-first (stable order for comparing multisets).
pub(crate) fn collect_values<T: Copy>(t: &BinTree<T>, out: &mut Vec<T>) {
    match t {
        BinTree::Empty => {}
        BinTree::Node { value, left, right } => {
            out.push(*value);
            collect_values(left, out);
            collect_values(right, out);
        }
    }
}

// Largest value at the root, remainder split across the children; input
// must be strictly descending for the result to be a valid max-heap.
pub(crate) fn heap_from_desc(values: &[i32]) -> BinTree<i32> {
    match values.split_first() {
        None => BinTree::Empty,
        Some((&root, rest)) => {
            let mid = rest.len() / 2;
            BinTree::node(root, heap_from_desc(&rest[..mid]), heap_from_desc(&rest[mid..]))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator;

    #[test]
    fn heap_from_desc_builds_a_heap() {
        let t = heap_from_desc(&[9, 7, 5, 3, 1]);
        assert_eq!(t.size(), 5);
        assert!(validator::is_max_heap(&t));
    }

    #[test]
    fn heap_from_desc_of_nothing_is_empty() {
        assert!(heap_from_desc(&[]).is_empty());
    }
}
