use std::fmt;

use generational_arena::{Arena, Index};
use termtree::Tree;
use tracing::instrument;

use crate::domain::traversal::{BreadthFirstIter, DepthFirstIter};

/// Tree node in the arena-based hierarchy structure.
#[derive(Debug, Clone)]
pub struct TreeNode<T> {
    /// Payload identifying this node
    pub data: T,
    /// Index of parent node in the arena, None for the root
    pub parent: Option<Index>,
    /// Indices of child nodes in the arena, in left-to-right order
    pub children: Vec<Index>,
}

impl<T> TreeNode<T> {
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Arena-based rooted tree.
///
/// Nodes only ever point down to their children by `Index`; the parent link is
/// bookkeeping and is not needed by the traversals. A node can only be attached
/// to a parent that already exists, so a tree built through `insert_node` is
/// acyclic.
#[derive(Debug)]
pub struct TreeArena<T> {
    arena: Arena<TreeNode<T>>,
    root: Option<Index>,
}

impl<T> Default for TreeArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TreeArena<T> {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    /// Inserts a node below `parent`, or as the new root when `parent` is None.
    ///
    /// A missing parent index leaves the node detached: it is stored but not
    /// reachable from the root.
    #[instrument(level = "trace", skip(self, data))]
    pub fn insert_node(&mut self, data: T, parent: Option<Index>) -> Index {
        let node = TreeNode {
            data,
            parent,
            children: Vec::new(),
        };
        let node_idx = self.arena.insert(node);

        if let Some(parent_idx) = parent {
            if let Some(parent) = self.arena.get_mut(parent_idx) {
                parent.children.push(node_idx);
            }
        } else {
            self.root = Some(node_idx);
        }

        node_idx
    }

    pub fn get_node(&self, idx: Index) -> Option<&TreeNode<T>> {
        self.arena.get(idx)
    }

    pub fn get_node_mut(&mut self, idx: Index) -> Option<&mut TreeNode<T>> {
        self.arena.get_mut(idx)
    }

    pub fn root(&self) -> Option<Index> {
        self.root
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Pre-order depth-first walk from the root.
    pub fn iter_depth_first(&self) -> DepthFirstIter<'_, T> {
        DepthFirstIter::new(self, self.root)
    }

    /// Level-order breadth-first walk from the root.
    pub fn iter_breadth_first(&self) -> BreadthFirstIter<'_, T> {
        BreadthFirstIter::new(self, self.root)
    }
}

impl<T: fmt::Display> TreeArena<T> {
    /// Renders the tree for display, e.g. in debug logs.
    ///
    /// Building and printing the result recurse once per level, so keep it to
    /// shallow trees.
    pub fn to_tree_string(&self) -> Tree<String> {
        fn build_tree<T: fmt::Display>(
            arena: &TreeArena<T>,
            node_idx: Index,
            parent_tree: &mut Tree<String>,
        ) {
            if let Some(node) = arena.get_node(node_idx) {
                for &child_idx in &node.children {
                    if let Some(child) = arena.get_node(child_idx) {
                        let mut child_tree = Tree::new(child.data.to_string());
                        build_tree(arena, child_idx, &mut child_tree);
                        parent_tree.push(child_tree);
                    }
                }
            }
        }

        match self.root.and_then(|idx| self.get_node(idx).map(|node| (idx, node))) {
            Some((root_idx, root)) => {
                let mut tree = Tree::new(root.data.to_string());
                build_tree(self, root_idx, &mut tree);
                tree
            }
            None => Tree::new("Empty tree".to_string()),
        }
    }
}
