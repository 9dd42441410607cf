//! In-memory filesystem tree with a current-directory cursor.
//!
//! Directories own their children, every node points back at its parent,
//! and all navigation and mutation happens relative to the cursor.

mod clock;
mod node;
mod tree;

pub use clock::{Clock, SystemClock};
pub use node::{Entry, Node, NodeKind};
pub use tree::{Tree, TreeError};

#[cfg(test)]
pub(crate) use clock::testing::ManualClock;
