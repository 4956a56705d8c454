//! Lazy tree traversals over a [`TreeArena`].
//!
//! Both walkers keep a pending deque of node indices. They differ only in where
//! a visited node's children go: the front for depth-first, the back for
//! breadth-first.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use generational_arena::Index;
use tracing::instrument;

use crate::domain::arena::{TreeArena, TreeNode};

/// Pre-order depth-first walk.
///
/// A node is yielded before its descendants, and its children are visited in
/// left-to-right order before any sibling of the node.
pub struct DepthFirstIter<'a, T> {
    arena: &'a TreeArena<T>,
    pending: VecDeque<Index>,
}

impl<'a, T> DepthFirstIter<'a, T> {
    #[instrument(level = "trace", skip(arena))]
    pub(crate) fn new(arena: &'a TreeArena<T>, root: Option<Index>) -> Self {
        Self {
            arena,
            pending: root.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for DepthFirstIter<'a, T> {
    type Item = (Index, &'a TreeNode<T>);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current_idx) = self.pending.pop_front() {
            if let Some(node) = self.arena.get_node(current_idx) {
                // Prepend in reverse so the first child ends up at the front
                for &child in node.children.iter().rev() {
                    self.pending.push_front(child);
                }
                return Some((current_idx, node));
            }
        }
        None
    }
}

impl<T> FusedIterator for DepthFirstIter<'_, T> {}

/// Level-order breadth-first walk.
///
/// Yields the root, then every depth-1 node left to right, then depth 2, etc.
pub struct BreadthFirstIter<'a, T> {
    arena: &'a TreeArena<T>,
    pending: VecDeque<Index>,
}

impl<'a, T> BreadthFirstIter<'a, T> {
    #[instrument(level = "trace", skip(arena))]
    pub(crate) fn new(arena: &'a TreeArena<T>, root: Option<Index>) -> Self {
        Self {
            arena,
            pending: root.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for BreadthFirstIter<'a, T> {
    type Item = (Index, &'a TreeNode<T>);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current_idx) = self.pending.pop_front() {
            if let Some(node) = self.arena.get_node(current_idx) {
                self.pending.extend(node.children.iter().copied());
                return Some((current_idx, node));
            }
        }
        None
    }
}

impl<T> FusedIterator for BreadthFirstIter<'_, T> {}

/// Walks the subtree under `root` depth-first (pre-order).
///
/// An index that is not in the arena yields an empty sequence.
pub fn depth_first<T>(arena: &TreeArena<T>, root: Index) -> DepthFirstIter<'_, T> {
    DepthFirstIter::new(arena, Some(root))
}

/// Walks the subtree under `root` breadth-first (level order).
///
/// An index that is not in the arena yields an empty sequence.
pub fn breadth_first<T>(arena: &TreeArena<T>, root: Index) -> BreadthFirstIter<'_, T> {
    BreadthFirstIter::new(arena, Some(root))
}
