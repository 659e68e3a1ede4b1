//! Ordered set of `u16` values backed by a [van Emde Boas tree](https://en.wikipedia.org/wiki/Van_Emde_Boas_tree).
//!
//! ## Key features
//!
//! - **Sublogarithmic ordered navigation**: membership, insertion,
//!   removal, and successor/predecessor queries all run in O(log log U)
//!   for the fixed universe U = 2^16, which is at most three tree levels,
//!   each doing constant work.
//!
//! - **Universe-halving recursion, resolved statically**: every level of
//!   the 16 → 8 → 4 bit chain is a marker type, so the leaf/internal
//!   split compiles down to direct calls with no dynamic dispatch. 4-bit
//!   sub-universes bottom out in a single-word bit array instead of
//!   further pointer chasing.
//!
//! - **Cursors and iterators**: bidirectional [`Cursor`]s step through
//!   the set in sorted order, [`CursorMut`] removes while walking, and
//!   [`VebSet::iter`] is a double-ended exact-size iterator.
//!
//! ## Example
//!
//! ```rust
//! use veb_rs::VebSet;
//!
//! let mut set = VebSet::new();
//! set.insert(137);
//! set.insert(42);
//! set.insert(40_000);
//!
//! assert_eq!(set.successor(137), Some(40_000));
//! assert_eq!(set.predecessor(137), Some(42));
//! assert_eq!(set.iter().collect::<Vec<_>>(), [42, 137, 40_000]);
//! ```

mod cursor;
mod leaf;
mod level;
mod never;
mod node;
mod set;
mod traits;

#[cfg(test)]
mod testutil;

pub use cursor::{Cursor, CursorMut, Iter};
pub use set::VebSet;
