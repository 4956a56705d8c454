//! Lazy, pull-based sequence generators.
//!
//! Every generator is an explicit [`Iterator`] holding its progression state in
//! fields, so values are produced only when the caller asks for the next one.
//!
//! - [`bottles_song`]: the lines of "99 Bottles of Beer"
//! - [`fibonacci`]: the unbounded Fibonacci sequence
//! - [`depth_first`] / [`breadth_first`]: tree traversals over a [`TreeArena`]
//! - [`merge_sorted_sequences`]: lazy merge of two sorted sequences

pub mod application;
pub mod config;
pub mod domain;
pub mod util;

pub use domain::{
    breadth_first, bottles_song, depth_first, fibonacci, merge_sorted_sequences, BottlesSong,
    BreadthFirstIter, DepthFirstIter, DomainError, Fibonacci, SortedMerge, TreeArena,
    TreeBuilder, TreeNode,
};
