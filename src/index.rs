//! Sentinel-based index trait for zero-cost optional links.
//!
//! Every structural link in the skip list (lateral `next`/`prev`, vertical
//! `up`/`down`) is an index into a level-local node array rather than a
//! pointer. An absent link is represented by a reserved sentinel value
//! (e.g. `u32::MAX`) instead of `Option<Idx>`, so a link costs exactly one
//! machine word or less.

/// A copyable index type with a reserved "no link" sentinel.
///
/// # Example
///
/// ```
/// use skiptower::Index;
///
/// let link: u32 = 5;
/// assert!(link.is_some());
/// assert!(u32::NONE.is_none());
/// ```
pub trait Index: Copy + Eq {
    /// Sentinel value representing an absent link.
    ///
    /// For the unsigned integer impls this is `MAX`, which can never be a
    /// valid slot in a level's node array.
    const NONE: Self;

    /// Returns `true` if this is the sentinel value.
    #[inline]
    fn is_none(self) -> bool {
        self == Self::NONE
    }

    /// Returns `true` if this is not the sentinel value.
    #[inline]
    fn is_some(self) -> bool {
        !self.is_none()
    }

    /// Returns the index as a `usize` for slot access.
    fn as_usize(self) -> usize;

    /// Creates an index from a slot number.
    fn from_usize(val: usize) -> Self;
}

macro_rules! impl_index {
    ($($ty:ty),*) => {
        $(
            impl Index for $ty {
                const NONE: Self = <$ty>::MAX;

                #[inline]
                fn as_usize(self) -> usize {
                    self as usize
                }

                #[inline]
                fn from_usize(val: usize) -> Self {
                    val as Self
                }
            }
        )*
    };
}

impl_index!(u8, u16, u32, u64, usize);
