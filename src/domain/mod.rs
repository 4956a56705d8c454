//! Domain layer: the sequence generators and the tree model they walk
//!
//! This layer is independent of external concerns (no I/O, no config loading).

pub mod arena;
pub mod bottles;
pub mod builder;
pub mod error;
pub mod fibonacci;
pub mod merge;
pub mod traversal;

pub use arena::{TreeArena, TreeNode};
pub use bottles::{bottles_song, BottlesSong};
pub use builder::TreeBuilder;
pub use error::{DomainError, DomainResult};
pub use fibonacci::{fibonacci, Fibonacci};
pub use merge::{merge_sorted_sequences, SortedMerge};
pub use traversal::{breadth_first, depth_first, BreadthFirstIter, DepthFirstIter};
