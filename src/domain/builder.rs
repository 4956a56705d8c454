//! Tree builder for the adjacency notation `{1:[2,6,7], 2:[3,4], 4:[5], 7:[8]}`.

use std::collections::{HashMap, HashSet, VecDeque};

use regex::Regex;
use tracing::{debug, instrument, trace};

use crate::domain::arena::TreeArena;
use crate::domain::error::{DomainError, DomainResult};

const ENTRY_PATTERN: &str = r"(\d+)\s*:\s*\[([^\]]*)\]";

/// Larger trees are logged by node count only; rendering recurses per level.
const MAX_RENDERED_NODES: usize = 64;

/// Constructs a [`TreeArena`] from adjacency notation.
///
/// Each entry names a node and its children in order. Nodes that only appear
/// as children are leaves. The single node that is nobody's child is the root.
pub struct TreeBuilder {
    entry_regex: Regex,
    children: HashMap<u64, Vec<u64>>,
    parents: HashMap<u64, u64>,
    /// Nodes in first-seen order, for deterministic errors
    seen: Vec<u64>,
    seen_set: HashSet<u64>,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self {
            entry_regex: Regex::new(ENTRY_PATTERN).expect("entry pattern is a valid regex"),
            children: HashMap::new(),
            parents: HashMap::new(),
            seen: Vec::new(),
            seen_set: HashSet::new(),
        }
    }

    /// Parses `notation` with a fresh builder.
    pub fn parse(notation: &str) -> DomainResult<TreeArena<u64>> {
        Self::new().build(notation)
    }

    /// Build a tree from adjacency notation.
    #[instrument(level = "debug", skip(self))]
    pub fn build(&mut self, notation: &str) -> DomainResult<TreeArena<u64>> {
        // Reset state for fresh parse
        self.children.clear();
        self.parents.clear();
        self.seen.clear();
        self.seen_set.clear();

        let body = strip_braces(notation.trim()).trim();
        if body.is_empty() {
            return Err(DomainError::EmptyTree);
        }

        self.scan_entries(body)?;

        let root = self.find_root()?;
        let tree = self.build_tree(root)?;
        debug!("built tree with {} nodes", tree.len());
        if tree.len() <= MAX_RENDERED_NODES {
            trace!("tree:\n{}", tree.to_tree_string());
        }
        Ok(tree)
    }

    fn scan_entries(&mut self, body: &str) -> DomainResult<()> {
        let mut cursor = 0;
        let mut entries = Vec::new();

        for caps in self.entry_regex.captures_iter(body) {
            let whole = caps.get(0).map_or(0..0, |m| m.range());
            check_separator(&body[cursor..whole.start], !entries.is_empty())?;
            cursor = whole.end;

            let parent = parse_id(&caps[1])?;
            let children = caps[2]
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(parse_id)
                .collect::<DomainResult<Vec<_>>>()?;
            entries.push((parent, children));
        }

        if entries.is_empty() {
            // A lone identifier is a single-node tree
            let id = parse_id(body.trim())?;
            self.note(id);
            self.children.insert(id, Vec::new());
            return Ok(());
        }
        check_separator(&body[cursor..], false)?;

        for (parent, children) in entries {
            self.note(parent);
            if self.children.contains_key(&parent) {
                return Err(DomainError::DuplicateEntry(parent));
            }
            for &child in &children {
                self.note(child);
                if let Some(&first) = self.parents.get(&child) {
                    return Err(DomainError::MultipleParents {
                        node: child,
                        first,
                        second: parent,
                    });
                }
                self.parents.insert(child, parent);
            }
            self.children.insert(parent, children);
        }
        Ok(())
    }

    fn note(&mut self, id: u64) {
        if self.seen_set.insert(id) {
            self.seen.push(id);
        }
    }

    fn find_root(&self) -> DomainResult<u64> {
        let roots: Vec<u64> = self
            .seen
            .iter()
            .copied()
            .filter(|id| !self.parents.contains_key(id))
            .collect();

        match roots.as_slice() {
            [root] => Ok(*root),
            // Every node has a parent, so the parent links must loop
            [] => Err(DomainError::CycleDetected(self.seen[0])),
            _ => Err(DomainError::MultipleRoots(roots)),
        }
    }

    fn build_tree(&self, root: u64) -> DomainResult<TreeArena<u64>> {
        let mut tree = TreeArena::new();
        let mut visited = HashSet::new();
        let mut queue = VecDeque::new();

        let root_idx = tree.insert_node(root, None);
        visited.insert(root);
        queue.push_back((root, root_idx));

        while let Some((id, idx)) = queue.pop_front() {
            for &child in self.children.get(&id).into_iter().flatten() {
                if !visited.insert(child) {
                    return Err(DomainError::CycleDetected(child));
                }
                let child_idx = tree.insert_node(child, Some(idx));
                queue.push_back((child, child_idx));
            }
        }

        // Nodes left over sit on a parent loop detached from the root
        if let Some(&orphan) = self.seen.iter().find(|id| !visited.contains(id)) {
            return Err(DomainError::CycleDetected(orphan));
        }

        Ok(tree)
    }
}

fn strip_braces(s: &str) -> &str {
    s.strip_prefix('{')
        .and_then(|inner| inner.strip_suffix('}'))
        .unwrap_or(s)
}

/// Text between entries may only hold separators; between two entries it must hold one.
fn check_separator(gap: &str, required: bool) -> DomainResult<()> {
    if !gap.chars().all(|c| c == ',' || c == ';' || c.is_whitespace()) {
        return Err(DomainError::InvalidNotation {
            fragment: gap.trim().to_string(),
            reason: "expected 'id:[children]' entry".to_string(),
        });
    }
    if required && gap.is_empty() {
        return Err(DomainError::InvalidNotation {
            fragment: gap.to_string(),
            reason: "entries must be separated by ',', ';' or whitespace".to_string(),
        });
    }
    Ok(())
}

fn parse_id(s: &str) -> DomainResult<u64> {
    s.parse().map_err(|_| DomainError::InvalidNotation {
        fragment: s.to_string(),
        reason: "node id must be an unsigned integer".to_string(),
    })
}
