//! One tier of the skip list: a bounded, ordered, doubly linked chain.
//!
//! A level owns its nodes in a level-local `Vec`; all lateral links are
//! indices into that array. Slot [`Level::head`] always holds the −∞
//! sentinel (the `min` bound) and slot [`Level::tail`] the +∞ sentinel
//! (the `max` bound). Both exist for the lifetime of the level and are
//! never removed, so every search terminates on a well-defined node.
//!
//! The array is append-only (the list supports no deletion), which keeps
//! every index stable for the lifetime of the level. Teardown is simply
//! dropping the `Vec`: a level frees only the nodes it owns and never
//! follows vertical links, which point into arrays owned by other levels.

use core::fmt;

use crate::error::InvalidBounds;
use crate::index::Index;
use crate::node::Node;

/// Slot of the −∞ sentinel in every level.
const HEAD: usize = 0;
/// Slot of the +∞ sentinel in every level.
const TAIL: usize = 1;

/// An ordered chain of nodes bounded by two permanent sentinels.
///
/// Within a level, keys strictly increase from the head sentinel to the
/// tail sentinel; no two nodes hold equal keys. The guarded [`insert`] is
/// the sole enforcement of this invariant.
///
/// [`insert`]: Level::insert
pub struct Level<T, Idx: Index = u32> {
    nodes: Vec<Node<T, Idx>>,
}

impl<T: Ord, Idx: Index> Level<T, Idx> {
    /// Creates a level holding only its two sentinels.
    ///
    /// Rejects `min >= max`: with inverted or equal bounds the chain could
    /// never satisfy strict ordering between the sentinels.
    pub fn new(min: T, max: T) -> Result<Self, InvalidBounds<T>> {
        if min >= max {
            return Err(InvalidBounds { min, max });
        }
        Ok(Self::new_unchecked(min, max))
    }

    /// Builds the two-sentinel chain without validating the bounds.
    ///
    /// Used by the tower when it grows: the bounds were validated once at
    /// tower construction and are propagated verbatim into every new level.
    pub(crate) fn new_unchecked(min: T, max: T) -> Self {
        let mut head = Node::new(min);
        let mut tail = Node::new(max);
        head.next = Idx::from_usize(TAIL);
        tail.prev = Idx::from_usize(HEAD);
        Self {
            nodes: vec![head, tail],
        }
    }

    /// Returns the rightmost node reachable forward from `start` whose key
    /// is `<= key`.
    ///
    /// Callers must start from a node already known not to overshoot
    /// (`start`'s key `<= key`): descent begins at a level's head sentinel
    /// or at the predecessor found one level up. If `start` overshoots, the
    /// walk goes nowhere and `start` is returned; an invalid index is
    /// likewise returned unchanged.
    pub fn search(&self, start: Idx, key: &T) -> Idx {
        let mut at = start;
        while let Some(node) = self.node(at) {
            match self.node(node.next) {
                Some(succ) if succ.data <= *key => at = node.next,
                _ => break,
            }
        }
        at
    }

    /// Splices `key` directly after `after`, returning the new node's index.
    ///
    /// The position is accepted only if `after` is valid, has a successor,
    /// `after`'s key is `< key`, and the successor's key is `>= key`.
    /// Otherwise nothing is mutated and `None` is returned: the position
    /// was invalid, or the key is already present there. Through the
    /// tower's `insert` the guard never fires — the tower always computes a
    /// valid predecessor first — but it remains the level's own defense of
    /// strict ordering.
    ///
    /// Also refuses, with `None` and no mutation, once the level's index
    /// space is exhausted: the next slot number would collide with the
    /// `NONE` link sentinel and the new node could never be reached.
    pub fn insert(&mut self, after: Idx, key: T) -> Option<Idx> {
        let succ = {
            let after_node = self.node(after)?;
            let succ_node = self.node(after_node.next)?;
            if !(after_node.data < key && succ_node.data >= key) {
                return None;
            }
            after_node.next
        };

        if self.nodes.len() == Idx::NONE.as_usize() {
            return None;
        }
        let idx = Idx::from_usize(self.nodes.len());
        let mut node = Node::new(key);
        node.prev = after;
        node.next = succ;
        self.nodes.push(node);

        self.nodes[after.as_usize()].next = idx;
        self.nodes[succ.as_usize()].prev = idx;
        Some(idx)
    }
}

impl<T, Idx: Index> Level<T, Idx> {
    /// Index of the −∞ sentinel.
    #[inline]
    pub fn head(&self) -> Idx {
        Idx::from_usize(HEAD)
    }

    /// Index of the +∞ sentinel.
    #[inline]
    pub fn tail(&self) -> Idx {
        Idx::from_usize(TAIL)
    }

    /// Number of keys stored in this level, sentinels excluded.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len() - 2
    }

    /// Returns `true` if the level holds only its sentinels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The sentinel bounds of this level, `(min, max)`.
    pub fn bounds(&self) -> (&T, &T) {
        (&self.nodes[HEAD].data, &self.nodes[TAIL].data)
    }

    /// Returns the node at `idx`, if the index is valid.
    pub fn node(&self, idx: Idx) -> Option<&Node<T, Idx>> {
        if idx.is_none() {
            return None;
        }
        self.nodes.get(idx.as_usize())
    }

    pub(crate) fn node_mut(&mut self, idx: Idx) -> Option<&mut Node<T, Idx>> {
        if idx.is_none() {
            return None;
        }
        self.nodes.get_mut(idx.as_usize())
    }

    /// Returns the key at `idx`, if the index is valid.
    pub fn key(&self, idx: Idx) -> Option<&T> {
        self.node(idx).map(Node::data)
    }

    /// Iterates the stored keys in order, sentinels excluded.
    pub fn keys(&self) -> Keys<'_, T, Idx> {
        Keys {
            level: self,
            at: self.nodes[HEAD].next,
        }
    }
}

/// Iterator over a level's stored keys, head to tail, sentinels excluded.
pub struct Keys<'a, T, Idx: Index = u32> {
    level: &'a Level<T, Idx>,
    at: Idx,
}

impl<'a, T, Idx: Index> Iterator for Keys<'a, T, Idx> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.at == self.level.tail() {
            return None;
        }
        let node = self.level.node(self.at)?;
        self.at = node.next;
        Some(&node.data)
    }
}

impl<T: fmt::Display, Idx: Index> fmt::Display for Level<T, Idx> {
    /// Renders the chain's keys left to right, sentinels included.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut at = self.head();
        let mut first = true;
        while let Some(node) = self.node(at) {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{}", node.data)?;
            first = false;
            at = node.next;
        }
        Ok(())
    }
}

impl<T: fmt::Debug, Idx: Index> fmt::Debug for Level<T, Idx> {
    /// Renders every node with its slot and link identities.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Level {")?;
        let mut at = self.head();
        while let Some(node) = self.node(at) {
            write!(f, " #{} {:?}", at.as_usize(), node)?;
            at = node.next;
        }
        f.write_str(" }")
    }
}
