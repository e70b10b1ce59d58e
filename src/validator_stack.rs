//! Explicit-stack renditions of the max-heap validation predicates.
//!
//! The recursive [`MaxHeapValidator`](crate::validator::MaxHeapValidator)
//! spends one call frame per tree level, so a list-shaped tree of n nodes
//! costs n frames. Every traversal here, node counting included, runs a
//! heap-allocated worklist instead and is insensitive to tree height.

use tracing::instrument;

use crate::bintree::BinTree;
use crate::validator::BinTreeValidator;

/// Same verdicts as [`MaxHeapValidator`](crate::validator::MaxHeapValidator)
/// on every input, computed without call-stack recursion.
pub struct IterativeMaxHeapValidator;

impl<T: Ord> BinTreeValidator<T> for IterativeMaxHeapValidator {
    #[instrument(level = "debug", skip_all)]
    fn valid_add(&self, old: &BinTree<T>, new_item: &T, updated: &BinTree<T>) -> bool {
        contains(updated, new_item)
            && all_in(old, updated)
            && count(updated) == count(old) + 1
            && is_max_heap(updated)
    }

    #[instrument(level = "debug", skip_all)]
    fn valid_remove(&self, old: &BinTree<T>, removed_item: &T, updated: &BinTree<T>) -> bool {
        !contains(updated, removed_item)
            && all_in(updated, old)
            && count(updated) + 1 == count(old)
            && is_max_heap(updated)
    }
}

// `BinTree::size` recurses; the validator counts with its own worklist.
fn count<T>(tree: &BinTree<T>) -> usize {
    let mut n = 0;
    let mut stack = vec![tree];
    while let Some(node) = stack.pop() {
        if let BinTree::Node { left, right, .. } = node {
            n += 1;
            stack.push(left);
            stack.push(right);
        }
    }
    n
}

fn contains<T: Ord>(tree: &BinTree<T>, item: &T) -> bool {
    let mut stack = vec![tree];
    while let Some(node) = stack.pop() {
        if let BinTree::Node { value, left, right } = node {
            if value == item {
                return true;
            }
            stack.push(left);
            stack.push(right);
        }
    }
    false
}

fn bigger_than_all<T: Ord>(element: &T, tree: &BinTree<T>) -> bool {
    let mut stack = vec![tree];
    while let Some(node) = stack.pop() {
        if let BinTree::Node { value, left, right } = node {
            if element <= value {
                return false;
            }
            stack.push(left);
            stack.push(right);
        }
    }
    true
}

fn is_max_heap<T: Ord>(tree: &BinTree<T>) -> bool {
    let mut stack = vec![tree];
    while let Some(node) = stack.pop() {
        if let BinTree::Node { value, left, right } = node {
            if !bigger_than_all(value, left) || !bigger_than_all(value, right) {
                return false;
            }
            stack.push(left);
            stack.push(right);
        }
    }
    true
}

fn all_in<T: Ord>(elements: &BinTree<T>, container: &BinTree<T>) -> bool {
    let mut stack = vec![elements];
    while let Some(node) = stack.pop() {
        if let BinTree::Node { value, left, right } = node {
            if !contains(container, value) {
                return false;
            }
            stack.push(left);
            stack.push(right);
        }
    }
    true
}
