//! Skip list node: one key and four structural links.

use core::fmt;

use crate::index::Index;

/// A node holding one key and its four links.
///
/// `next`/`prev` are lateral links within the owning [`Level`]'s node array.
/// `up`/`down` are vertical links into the node array of the level directly
/// above/below, connecting the representations of the same key. All links
/// start out absent ([`Index::NONE`]) and are wired by the owning level and
/// the tower.
///
/// Nodes are created by a level's insertion and owned exclusively by that
/// level; they are only released when the level itself is torn down.
///
/// [`Level`]: crate::Level
#[derive(Clone)]
pub struct Node<T, Idx: Index = u32> {
    pub(crate) data: T,
    pub(crate) next: Idx,
    pub(crate) prev: Idx,
    pub(crate) up: Idx,
    pub(crate) down: Idx,
}

impl<T, Idx: Index> Node<T, Idx> {
    pub(crate) fn new(data: T) -> Self {
        Self {
            data,
            next: Idx::NONE,
            prev: Idx::NONE,
            up: Idx::NONE,
            down: Idx::NONE,
        }
    }

    /// Returns the key held by this node.
    #[inline]
    pub fn data(&self) -> &T {
        &self.data
    }

    /// Lateral successor link within the owning level.
    #[inline]
    pub fn next(&self) -> Idx {
        self.next
    }

    /// Lateral predecessor link within the owning level.
    #[inline]
    pub fn prev(&self) -> Idx {
        self.prev
    }

    /// Vertical link to the same key one level above.
    #[inline]
    pub fn up(&self) -> Idx {
        self.up
    }

    /// Vertical link to the same key one level below.
    #[inline]
    pub fn down(&self) -> Idx {
        self.down
    }
}

fn fmt_link<Idx: Index>(f: &mut fmt::Formatter<'_>, link: Idx) -> fmt::Result {
    if link.is_none() {
        f.write_str("-")
    } else {
        write!(f, "{}", link.as_usize())
    }
}

impl<T: fmt::Debug, Idx: Index> fmt::Debug for Node<T, Idx> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} [next: ", self.data)?;
        fmt_link(f, self.next)?;
        f.write_str(" prev: ")?;
        fmt_link(f, self.prev)?;
        f.write_str(" up: ")?;
        fmt_link(f, self.up)?;
        f.write_str(" down: ")?;
        fmt_link(f, self.down)?;
        f.write_str("]")
    }
}
