//! A bounded, level-structured skip list with deterministic promotion draws.
//!
//! A skip list gives expected O(log n) search and insertion by stacking
//! probabilistically thinning linked levels over a sorted key sequence. The
//! bottom level holds every key; each level above holds roughly half the
//! keys of the level below. Queries descend from the top, moving right
//! while possible and dropping down when blocked.
//!
//! ```text
//! L2:  -inf ──────────────► 5 ───────────────► +inf
//!        │                  │                    │
//! L1:  -inf ──────► 3 ────► 5 ───────────────► +inf
//!        │          │       │                    │
//! L0:  -inf ──► 2 ─► 3 ───► 5 ──► 8 ──► 9 ───► +inf
//! ```
//!
//! # Design
//!
//! No raw pointers anywhere. Each [`Level`] owns its nodes in a level-local,
//! append-only array; every structural link — lateral `next`/`prev`,
//! vertical `up`/`down` — is a sentinel-based [`Index`] into such an array.
//! Levels live in a `Vec` inside the [`SkipList`], bottom first, so a level
//! can be torn down without ever dereferencing another level's memory.
//!
//! Every level is bounded by two permanent sentinel nodes holding the
//! construction-time `min` and `max` values, for any ordered key type.
//! Searches therefore always terminate on a well-defined node, and keys
//! outside the stored range are never an error.
//!
//! Promotion draws come from a per-instance random-bit source with a fixed
//! default seed: the same operation sequence reproduces the same tower
//! shape on every run, and independent lists never perturb each other.
//!
//! # Quick start
//!
//! ```
//! use skiptower::SkipList;
//!
//! let mut list = SkipList::new(i32::MIN, i32::MAX)?;
//!
//! list.insert(5)?;
//! list.insert(3)?;
//! list.insert(8)?;
//!
//! assert_eq!(*list.search(&3).key(), 3);   // exact match
//! assert_eq!(*list.search(&4).key(), 3);   // immediate predecessor
//! assert!(list.insert(3).is_err());        // duplicates are rejected
//!
//! let keys: Vec<_> = list.iter().copied().collect();
//! assert_eq!(keys, vec![3, 5, 8]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # What this is not
//!
//! Deletion is not supported and the height never shrinks. There is no
//! internal synchronization: a list shared across threads must be behind an
//! exclusive lock, because a multi-level insertion is not atomic across
//! levels. Nothing is persisted.

#![warn(missing_docs)]

pub mod error;
pub mod index;
pub mod level;
pub mod node;
pub mod skiplist;

pub use error::{InsertError, InvalidBounds};
pub use index::Index;
pub use level::Level;
pub use node::Node;
pub use skiplist::{NodeRef, SkipList, DEFAULT_SEED};
