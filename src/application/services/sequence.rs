//! Sequence service
//!
//! Materializes the lazy generators into bounded lists and text, using the
//! `take` and `separator` settings.

use itertools::Itertools;
use tracing::{debug, instrument};

use crate::application::ApplicationResult;
use crate::config::{Settings, MAX_TAKE};
use crate::domain::{bottles_song, fibonacci, SortedMerge, TreeBuilder, TreeNode};

/// One of the five sequences, with its inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequenceKind {
    Bottles,
    Fibonacci,
    /// Depth-first walk of a tree in adjacency notation
    DepthFirst(String),
    /// Breadth-first walk of a tree in adjacency notation
    BreadthFirst(String),
    Merge(Vec<i64>, Vec<i64>),
}

/// Service for rendering sequences according to [`Settings`].
pub struct SequenceService {
    settings: Settings,
}

impl SequenceService {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The whole song. It is finite, so `take` does not apply.
    pub fn bottles(&self) -> Vec<String> {
        bottles_song().collect()
    }

    /// `take`, capped at `MAX_TAKE` for settings built without `Settings::load`.
    fn take(&self) -> usize {
        self.settings.take.min(MAX_TAKE)
    }

    /// The first `take` Fibonacci numbers.
    pub fn fibonacci(&self) -> Vec<u128> {
        fibonacci().take(self.take()).collect()
    }

    #[instrument(level = "debug", skip(self))]
    pub fn depth_first(&self, notation: &str) -> ApplicationResult<Vec<u64>> {
        let tree = TreeBuilder::parse(notation)?;
        Ok(labels(tree.iter_depth_first().map(|(_, node)| node)))
    }

    #[instrument(level = "debug", skip(self))]
    pub fn breadth_first(&self, notation: &str) -> ApplicationResult<Vec<u64>> {
        let tree = TreeBuilder::parse(notation)?;
        Ok(labels(tree.iter_breadth_first().map(|(_, node)| node)))
    }

    /// At most `take` values of the merge of `first` and `second`.
    pub fn merge(&self, first: &[i64], second: &[i64]) -> Vec<i64> {
        SortedMerge::new(first.iter().copied(), second.iter().copied())
            .take(self.take())
            .collect()
    }

    /// Renders a sequence as text, items joined by the configured separator.
    #[instrument(level = "debug", skip(self))]
    pub fn render(&self, kind: &SequenceKind) -> ApplicationResult<String> {
        let sep = self.settings.separator.as_str();
        let text = match kind {
            SequenceKind::Bottles => self.bottles().iter().join(sep),
            SequenceKind::Fibonacci => self.fibonacci().iter().join(sep),
            SequenceKind::DepthFirst(notation) => self.depth_first(notation)?.iter().join(sep),
            SequenceKind::BreadthFirst(notation) => {
                self.breadth_first(notation)?.iter().join(sep)
            }
            SequenceKind::Merge(first, second) => self.merge(first, second).iter().join(sep),
        };
        debug!("render: {} bytes", text.len());
        Ok(text)
    }
}

fn labels<'a>(nodes: impl Iterator<Item = &'a TreeNode<u64>>) -> Vec<u64> {
    nodes.map(|node| node.data).collect()
}
