//! # Sortedblocks
//!
//! `sortedblocks` provides two in-memory ordered containers, [`BlockList`] and
//! [`BlockSet`], built on a shared two-level "sorted block" structure: an
//! ordered directory of fixed-capacity sorted buffers.
//!
//! Compared to a balanced tree, the flat two-level layout keeps elements in
//! contiguous runs, so a lookup is two binary searches over dense memory and an
//! insertion shifts at most one block's tail. With a block capacity near the
//! square root of the element count, insertion cost stays in the O(√N) range
//! while enumeration is a straight walk over the blocks.
//!
//! ## Key Features
//!
//! - **Injected ordering**: the total order is a value supplied at construction
//!   through the [`Compare`] trait, not a compile-time `Ord` bound, so the same
//!   element type can live in differently ordered containers.
//! - **Coarse probe queries**: range and match scans accept a second, weaker
//!   comparator per query (for example a prefix comparator over strings),
//!   letting one container answer interval and prefix queries without extra
//!   indexes.
//! - **Lazy scans**: [`iter`](BlockList::iter), [`matching`](BlockList::matching)
//!   and [`between`](BlockList::between) are forward-only lazy iterators that
//!   stop as soon as the scan leaves the requested interval.
//! - **Set shortcut**: [`BlockSet`] keeps a cache-aligned membership filter that
//!   short-circuits negative lookups; its answers are identical to the plain
//!   list's.
//!
//! ## Usage
//!
//! ### Basic Usage
//!
//! With the [`Natural`] comparator the containers order by `Ord`:
//!
//! ```rust
//! use sortedblocks::BlockList;
//!
//! let mut list = BlockList::default();
//! assert!(list.try_add(3));
//! assert!(list.try_add(1));
//! assert!(list.try_add(2));
//! assert!(!list.try_add(3)); // duplicate
//!
//! assert_eq!(list.len(), 3);
//! let ordered: Vec<i32> = list.iter().copied().collect();
//! assert_eq!(ordered, vec![1, 2, 3]);
//! ```
//!
//! ### Probe comparators
//!
//! A per-query comparator may merge values the ordering comparator keeps apart,
//! as long as it never contradicts it. Prefix matching over strings is the
//! typical case:
//!
//! ```rust
//! use sortedblocks::{BlockSet, CmpFn, Natural};
//!
//! let mut set = BlockSet::new(Natural, 64);
//! for word in ["apple", "apricot", "banana", "cherry"] {
//!     set.try_add(word.to_string());
//! }
//!
//! let prefix = CmpFn(|stored: &String, probe: &String| {
//!     let stored = stored.as_bytes();
//!     let probe = probe.as_bytes();
//!     stored[..stored.len().min(probe.len())].cmp(probe)
//! });
//!
//! let probe = "ap".to_string();
//! let hits: Vec<&str> = set
//!     .matching(&probe, prefix)
//!     .map(|s| s.as_str())
//!     .collect();
//! assert_eq!(hits, ["apple", "apricot"]);
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Insertion**: one directory binary search, one in-block binary search,
//!   one tail shift bounded by the block capacity; a full block splits at its
//!   midpoint, or sprouts a fresh block when the insertion point is a block
//!   boundary, which keeps monotone loads dense.
//! - **Lookup**: O(log #blocks + log block capacity), all over contiguous
//!   buffers.
//! - **Memory**: each block buffer is allocated once at its fixed capacity; the
//!   directory grows geometrically like a `Vec`.
//!
//! The containers are single-threaded and perform no I/O; mutating a container
//! while a scan borrows it is rejected by the borrow checker.

pub mod compare;
pub mod list;
pub mod scan;
pub mod set;

mod block;

pub use compare::{CmpFn, Compare, Natural};
pub use list::{BlockList, DEFAULT_BLOCK_CAPACITY};
pub use scan::{Between, Iter, Matching};
pub use set::BlockSet;

pub mod prelude {
    pub use crate::compare::{CmpFn, Compare, Natural};
    pub use crate::list::BlockList;
    pub use crate::set::BlockSet;
}
