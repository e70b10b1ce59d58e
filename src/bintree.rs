#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BinTree<T> {
    Empty,
    Node {
        value: T,
        left: Box<BinTree<T>>,
        right: Box<BinTree<T>>,
    },
}

impl<T> BinTree<T> {
    pub fn empty() -> Self {
        Self::Empty
    }

    pub fn leaf(value: T) -> Self {
        Self::node(value, Self::Empty, Self::Empty)
    }

    pub fn node(value: T, left: Self, right: Self) -> Self {
        Self::Node {
            value,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// `None` exactly on the empty tree.
    pub fn root(&self) -> Option<&T> {
        match self {
            Self::Empty => None,
            Self::Node { value, .. } => Some(value),
        }
    }

    /// The left subtree; the empty tree is its own child.
    pub fn left(&self) -> &Self {
        match self {
            Self::Empty => self,
            Self::Node { left, .. } => left,
        }
    }

    /// The right subtree; the empty tree is its own child.
    pub fn right(&self) -> &Self {
        match self {
            Self::Empty => self,
            Self::Node { right, .. } => right,
        }
    }

    pub fn size(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Node { left, right, .. } => 1 + left.size() + right.size(),
        }
    }

    pub fn height(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Node { left, right, .. } => 1 + left.height().max(right.height()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{arb_tree, collect_values};
    use proptest::prelude::*;

    // -------------------------
    // Unit tests
    // -------------------------

    #[test]
    fn empty_tree_has_nothing() {
        let t: BinTree<u32> = BinTree::empty();
        assert!(t.is_empty());
        assert_eq!(t.root(), None);
        assert_eq!(t.size(), 0);
        assert_eq!(t.height(), 0);
    }

    #[test]
    fn children_of_empty_are_empty() {
        let t: BinTree<u32> = BinTree::empty();
        assert!(t.left().is_empty());
        assert!(t.right().is_empty());
    }

    #[test]
    fn leaf_is_a_node_with_empty_children() {
        let t = BinTree::leaf(42u32);
        assert!(!t.is_empty());
        assert_eq!(t.root(), Some(&42));
        assert!(t.left().is_empty());
        assert!(t.right().is_empty());
        assert_eq!(t.size(), 1);
        assert_eq!(t.height(), 1);
    }

    #[test]
    fn node_wires_children_in_order() {
        let t = BinTree::node(10, BinTree::leaf(7), BinTree::leaf(3));
        assert_eq!(t.root(), Some(&10));
        assert_eq!(t.left().root(), Some(&7));
        assert_eq!(t.right().root(), Some(&3));
        assert_eq!(t.size(), 3);
        assert_eq!(t.height(), 2);
    }

    #[test]
    fn height_follows_the_taller_side() {
        let t = BinTree::node(
            9,
            BinTree::node(8, BinTree::leaf(7), BinTree::Empty),
            BinTree::Empty,
        );
        assert_eq!(t.height(), 3);
        assert_eq!(t.size(), 3);
    }

    // -------------------------
    // Property-based tests
    // -------------------------

    proptest! {
        // Property 1: size equals the number of stored values.
        #[test]
        fn prop_size_counts_values(t in arb_tree()) {
            let mut values = Vec::new();
            collect_values(&t, &mut values);
            prop_assert_eq!(t.size(), values.len());
        }

        // Property 2: height bounds are sane: 0 iff empty, otherwise
        // 1 <= height <= size.
        #[test]
        fn prop_height_in_bounds(t in arb_tree()) {
            let h = t.height();
            if t.is_empty() {
                prop_assert_eq!(h, 0);
            } else {
                prop_assert!(h >= 1);
                prop_assert!(h <= t.size());
            }
        }

        // Property 3: root is present exactly on non-empty trees.
        #[test]
        fn prop_root_iff_nonempty(t in arb_tree()) {
            prop_assert_eq!(t.root().is_some(), !t.is_empty());
        }
    }
}
