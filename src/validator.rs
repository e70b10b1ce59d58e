use tracing::instrument;

use crate::bintree::BinTree;

/// Accept or reject a proposed single-element mutation of a binary tree.
///
/// Implementations are pure predicates: they never mutate the trees, keep
/// no state between calls, and a rejection carries no diagnostic detail.
pub trait BinTreeValidator<T> {
    /// Is `updated` a legal result of adding exactly `new_item` to `old`?
    ///
    /// `old` is trusted to already satisfy the invariant; `updated` is not.
    fn valid_add(&self, old: &BinTree<T>, new_item: &T, updated: &BinTree<T>) -> bool;

    /// Is `updated` a legal result of removing exactly `removed_item` from
    /// `old`?
    fn valid_remove(&self, old: &BinTree<T>, removed_item: &T, updated: &BinTree<T>) -> bool;
}

/// Validates mutations against the strict max-heap invariant: every node's
/// value is strictly greater than every value in both of its subtrees.
///
/// Traversal is plain structural recursion, so call depth grows with tree
/// height; a list-shaped tree of n nodes costs n stack frames. Where such
/// shapes are expected, use
/// [`IterativeMaxHeapValidator`](crate::validator_stack::IterativeMaxHeapValidator)
/// instead.
pub struct MaxHeapValidator;

impl<T: Ord> BinTreeValidator<T> for MaxHeapValidator {
    #[instrument(
        level = "debug",
        skip_all,
        fields(old_size = old.size(), updated_size = updated.size())
    )]
    fn valid_add(&self, old: &BinTree<T>, new_item: &T, updated: &BinTree<T>) -> bool {
        contains(updated, new_item)
            && all_in(old, updated)
            && updated.size() == old.size() + 1
            && is_max_heap(updated)
    }

    #[instrument(
        level = "debug",
        skip_all,
        fields(old_size = old.size(), updated_size = updated.size())
    )]
    fn valid_remove(&self, old: &BinTree<T>, removed_item: &T, updated: &BinTree<T>) -> bool {
        !contains(updated, removed_item)
            && all_in(updated, old)
            && updated.size() + 1 == old.size()
            && is_max_heap(updated)
    }
}

pub(crate) fn contains<T: Ord>(tree: &BinTree<T>, item: &T) -> bool {
    match tree {
        BinTree::Empty => false,
        BinTree::Node { value, left, right } => {
            value == item || contains(left, item) || contains(right, item)
        }
    }
}

/// Is `element` strictly greater than every value in `tree`?
/// Vacuously true on the empty tree.
pub(crate) fn bigger_than_all<T: Ord>(element: &T, tree: &BinTree<T>) -> bool {
    match tree {
        BinTree::Empty => true,
        BinTree::Node { value, left, right } => {
            element > value && bigger_than_all(element, left) && bigger_than_all(element, right)
        }
    }
}

pub(crate) fn is_max_heap<T: Ord>(tree: &BinTree<T>) -> bool {
    match tree {
        BinTree::Empty => true,
        BinTree::Node { value, left, right } => {
            bigger_than_all(value, left)
                && bigger_than_all(value, right)
                && is_max_heap(left)
                && is_max_heap(right)
        }
    }
}

/// Does every value of `elements` occur somewhere in `container`?
/// Presence only: duplicates in `elements` need no duplicates in
/// `container`.
pub(crate) fn all_in<T: Ord>(elements: &BinTree<T>, container: &BinTree<T>) -> bool {
    match elements {
        BinTree::Empty => true,
        BinTree::Node { value, left, right } => {
            contains(container, value) && all_in(left, container) && all_in(right, container)
        }
    }
}
