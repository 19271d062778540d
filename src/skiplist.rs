//! The tower: a vertically linked stack of levels.
//!
//! The bottom level holds every key; each level above holds a random subset
//! of the level below. A query descends from the top, moving right while the
//! successor key does not overshoot and dropping down when blocked, until
//! the bottom level yields the answer. An insertion locates its predecessor
//! the same way, draws a promotion height by repeated fair coin flips, grows
//! the tower if the draw exceeds the current height, and then splices the
//! key into every level from the bottom up to the drawn height.
//!
//! ```text
//! L2:  -inf ──────────────► 5 ───────────────► +inf
//!        │                  │                    │
//! L1:  -inf ──────► 3 ────► 5 ───────────────► +inf
//!        │          │       │                    │
//! L0:  -inf ──► 2 ─► 3 ───► 5 ──► 8 ──► 9 ───► +inf
//! ```
//!
//! # Determinism
//!
//! Every list owns its own random-bit source; nothing process-global is
//! seeded or consumed. The default constructor uses a fixed seed, so a fixed
//! operation sequence reproduces an identical tower shape on every run —
//! regression tests can assert exact per-level membership.
//!
//! # Single-threaded contract
//!
//! The structure performs no internal locking. A multi-level insertion is
//! not atomic across levels, so concurrent mutation could observe a torn
//! tower (a key linked above but not yet below). Callers that share a list
//! across threads must serialize every operation externally, e.g. behind one
//! exclusive lock.

use core::fmt;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use rand_core::RngCore;

use crate::error::{InsertError, InvalidBounds};
use crate::index::Index;
use crate::level::Level;

/// Seed used by [`SkipList::new`].
///
/// Fixed so that repeated runs of the same operation sequence produce an
/// identical tower shape.
pub const DEFAULT_SEED: u64 = 330;

/// A skip list bounded by two sentinel values.
///
/// Levels live in a `Vec`, bottom first; vertical adjacency is positional,
/// so no level can outlive or dangle into its neighbors. Each level owns
/// its own nodes and the tower only ever stores indices, never references,
/// across levels.
///
/// The key type needs a total order, and `Clone` so the construction-time
/// bounds can be propagated into every level the tower grows.
///
/// # Example
///
/// ```
/// use skiptower::SkipList;
///
/// let mut list = SkipList::new(i32::MIN, i32::MAX)?;
/// list.insert(5)?;
/// list.insert(3)?;
/// assert!(list.contains(&3));
/// assert_eq!(*list.search(&4).key(), 3); // predecessor
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct SkipList<T, R = SmallRng> {
    /// Bottom level at slot 0, top level last. Never empty.
    levels: Vec<Level<T>>,
    min: T,
    max: T,
    rng: R,
    len: usize,
}

impl<T: Ord + Clone> SkipList<T> {
    /// Creates a list bounded by `min` and `max` with the default seed.
    ///
    /// Rejects `min >= max`. The list starts with a single level, which is
    /// both bottom and top.
    pub fn new(min: T, max: T) -> Result<Self, InvalidBounds<T>> {
        Self::with_seed(min, max, DEFAULT_SEED)
    }

    /// Creates a list whose promotion draws come from the given seed.
    ///
    /// Two lists built with the same seed and fed the same operation
    /// sequence end up with identical per-level membership.
    pub fn with_seed(min: T, max: T, seed: u64) -> Result<Self, InvalidBounds<T>> {
        Self::with_rng(min, max, SmallRng::seed_from_u64(seed))
    }
}

impl<T: Ord + Clone, R: RngCore> SkipList<T, R> {
    /// Creates a list drawing promotion flips from a caller-supplied source.
    pub fn with_rng(min: T, max: T, rng: R) -> Result<Self, InvalidBounds<T>> {
        if min >= max {
            return Err(InvalidBounds { min, max });
        }
        let bottom = Level::new_unchecked(min.clone(), max.clone());
        Ok(Self {
            levels: vec![bottom],
            min,
            max,
            rng,
            len: 0,
        })
    }

    /// Returns the node holding `key` if present, else its immediate
    /// predecessor in the bottom level.
    ///
    /// Starting at the top level's −∞ sentinel: advance right while the
    /// successor key is `<= key`; at the bottom stop, otherwise drop one
    /// level through the vertical link and repeat. On an empty list (or any
    /// key below every stored key) this is the −∞ sentinel; never an error,
    /// even for keys outside the bounds.
    pub fn search(&self, key: &T) -> NodeRef<'_, T> {
        let mut lvl = self.levels.len() - 1;
        let mut at = self.levels[lvl].head();
        loop {
            at = self.levels[lvl].search(at, key);
            if lvl == 0 {
                break;
            }
            // tower contiguity: every node above the bottom, sentinels
            // included, carries a down link
            at = self.levels[lvl]
                .node(at)
                .expect("level search returns a valid index")
                .down();
            lvl -= 1;
        }
        NodeRef {
            levels: &self.levels,
            index: at,
        }
    }

    /// Inserts `key`, returning a reference to its new bottom-level node.
    ///
    /// Fails with [`InsertError::Duplicate`] if the key is already present
    /// and [`InsertError::OutOfBounds`] if it does not fall strictly inside
    /// the sentinel bounds; either way the key is handed back and no level
    /// is mutated.
    ///
    /// The promotion height is drawn by repeated fair coin flips — the
    /// count starts at 1 and every "continue" flip increments it, giving
    /// P(height = h) = 2⁻ʰ. A draw exceeding the current height creates new
    /// top levels bounded by the original construction-time sentinels.
    pub fn insert(&mut self, key: T) -> Result<NodeRef<'_, T>, InsertError<T>> {
        if key <= self.min || key >= self.max {
            return Err(InsertError::OutOfBounds(key));
        }
        if *self.search(&key).key() == key {
            return Err(InsertError::Duplicate(key));
        }

        let height = self.draw_height();
        let mut below = u32::NONE;
        let mut bottom = u32::NONE;
        for target in 1..=height {
            if target > self.levels.len() {
                self.grow();
            }
            let lvl = target - 1;
            let idx = {
                let level = &mut self.levels[lvl];
                let pred = level.search(level.head(), &key);
                level
                    .insert(pred, key.clone())
                    .expect("predecessor from level search admits insertion")
            };
            if lvl == 0 {
                bottom = idx;
            } else {
                let (lower, upper) = self.levels.split_at_mut(lvl);
                upper[0]
                    .node_mut(idx)
                    .expect("node just inserted")
                    .down = below;
                lower[lvl - 1]
                    .node_mut(below)
                    .expect("node inserted one level below")
                    .up = idx;
            }
            below = idx;
        }

        self.len += 1;
        Ok(NodeRef {
            levels: &self.levels,
            index: bottom,
        })
    }

    /// Flips fair coins until one says stop; the count of flips taken is
    /// the promotion height. No structural cap is enforced.
    fn draw_height(&mut self) -> usize {
        let mut height = 1;
        while self.rng.next_u32() & 1 == 1 {
            height += 1;
        }
        height
    }

    /// Stacks a fresh level, bounded by the original sentinels, on top.
    fn grow(&mut self) {
        let mut level = Level::new_unchecked(self.min.clone(), self.max.clone());
        let top = self.levels.len() - 1;
        let head = level.head();
        let tail = level.tail();
        // sentinels occupy the same slots in every level; link them so
        // descent can pass through them
        level.node_mut(head).expect("head sentinel").down = head;
        level.node_mut(tail).expect("tail sentinel").down = tail;
        let old_top = &mut self.levels[top];
        old_top.node_mut(head).expect("head sentinel").up = head;
        old_top.node_mut(tail).expect("tail sentinel").up = tail;
        self.levels.push(level);
    }

    /// Returns `true` if `key` is stored in the list.
    pub fn contains(&self, key: &T) -> bool {
        self.get(key).is_some()
    }

    /// Returns the stored key equal to `key`, or `None`.
    pub fn get(&self, key: &T) -> Option<&T> {
        let found = self.search(key);
        if found.is_sentinel() || found.key() != key {
            return None;
        }
        Some(found.key())
    }
}

impl<T, R> SkipList<T, R> {
    /// Number of levels, bottom and top inclusive. Only ever grows.
    #[inline]
    pub fn height(&self) -> usize {
        self.levels.len()
    }

    /// Number of stored keys.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no keys are stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The construction-time sentinel bounds, `(min, max)`.
    pub fn bounds(&self) -> (&T, &T) {
        (&self.min, &self.max)
    }

    /// Returns level `n` (0 = bottom), if the tower is that tall.
    pub fn level(&self, n: usize) -> Option<&Level<T>> {
        self.levels.get(n)
    }

    /// The smallest stored key, or `None` if empty.
    pub fn first(&self) -> Option<&T> {
        let bottom = &self.levels[0];
        let idx = bottom.node(bottom.head()).expect("head sentinel").next();
        if idx == bottom.tail() {
            return None;
        }
        bottom.key(idx)
    }

    /// The largest stored key, or `None` if empty.
    pub fn last(&self) -> Option<&T> {
        let bottom = &self.levels[0];
        let idx = bottom.node(bottom.tail()).expect("tail sentinel").prev();
        if idx == bottom.head() {
            return None;
        }
        bottom.key(idx)
    }

    /// Iterates the stored keys in ascending order.
    pub fn iter(&self) -> crate::level::Keys<'_, T> {
        self.levels[0].keys()
    }
}

impl<T: fmt::Display, R> fmt::Display for SkipList<T, R> {
    /// Renders each level's keys on its own line, top level first.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for level in self.levels.iter().rev() {
            writeln!(f, "{level}")?;
        }
        Ok(())
    }
}

impl<T: fmt::Debug, R> fmt::Debug for SkipList<T, R> {
    /// Renders each level with slot and link identities, top level first.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (n, level) in self.levels.iter().enumerate().rev() {
            writeln!(f, "L{n} {level:?}")?;
        }
        Ok(())
    }
}

/// A position in the bottom level of a [`SkipList`].
///
/// Returned by [`SkipList::search`] and [`SkipList::insert`]. May point at
/// a stored key or at one of the sentinels.
#[derive(Clone, Copy)]
pub struct NodeRef<'a, T> {
    levels: &'a [Level<T>],
    index: u32,
}

impl<'a, T> NodeRef<'a, T> {
    /// The key at this position. For the sentinels this is the `min` or
    /// `max` bound itself.
    pub fn key(&self) -> &'a T {
        self.levels[0]
            .key(self.index)
            .expect("node ref points at a live node")
    }

    /// Returns `true` if this is the −∞ sentinel.
    pub fn is_min_sentinel(&self) -> bool {
        self.index == self.levels[0].head()
    }

    /// Returns `true` if this is the +∞ sentinel.
    pub fn is_max_sentinel(&self) -> bool {
        self.index == self.levels[0].tail()
    }

    /// Returns `true` if this is either sentinel.
    pub fn is_sentinel(&self) -> bool {
        self.is_min_sentinel() || self.is_max_sentinel()
    }

    /// The next position in key order, or `None` past the +∞ sentinel.
    pub fn next(&self) -> Option<NodeRef<'a, T>> {
        let next = self.levels[0].node(self.index)?.next();
        if next.is_none() {
            return None;
        }
        Some(NodeRef {
            levels: self.levels,
            index: next,
        })
    }

    /// The previous position in key order, or `None` before the −∞ sentinel.
    pub fn prev(&self) -> Option<NodeRef<'a, T>> {
        let prev = self.levels[0].node(self.index)?.prev();
        if prev.is_none() {
            return None;
        }
        Some(NodeRef {
            levels: self.levels,
            index: prev,
        })
    }

    /// Number of levels this key participates in (its promotion height).
    pub fn height(&self) -> usize {
        let mut height = 1;
        let mut lvl = 0;
        let mut up = self.levels[0]
            .node(self.index)
            .expect("node ref points at a live node")
            .up();
        while up.is_some() {
            height += 1;
            lvl += 1;
            up = self.levels[lvl]
                .node(up)
                .expect("vertical link is valid")
                .up();
        }
        height
    }
}

impl<T: fmt::Debug> fmt::Debug for NodeRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("index", &self.index)
            .field("key", self.levels[0].key(self.index).expect("live node"))
            .finish()
    }
}
