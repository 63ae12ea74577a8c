//! State logic for the Nebula component library.
//!
//! This crate has no UI framework dependency. Components own signals and
//! call into these reducers from their event handlers:
//!
//! - [`tree`] - TreeView node model, key index, check cascade, selection,
//!   expansion, search and keyboard navigation
//! - [`transfer`] - Transfer list partitioning, moves and selection
//! - [`error`] - Error types

pub mod error;
pub mod transfer;
pub mod tree;

pub use error::TreeError;
pub use transfer::{CheckAll, Direction, ListSide, MoveOutcome, TransferItem, TransferState};
pub use tree::{
    CheckMode, KeySet, NavKey, NavOutcome, SearchResult, SelectionMode, TreeIndex, TreeNode,
    TreeRow, key_set,
};
