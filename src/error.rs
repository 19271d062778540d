//! Error types for construction and insertion.

use core::fmt;

/// Construction was given bounds with `min >= max`.
///
/// The rejected bounds are returned to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidBounds<T> {
    /// The lower sentinel bound that was supplied.
    pub min: T,
    /// The upper sentinel bound that was supplied.
    pub max: T,
}

impl<T: fmt::Display> fmt::Display for InvalidBounds<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "lower bound {} is not less than upper bound {}",
            self.min, self.max
        )
    }
}

impl<T: fmt::Debug + fmt::Display> std::error::Error for InvalidBounds<T> {}

/// Insertion was rejected; the key is returned untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertError<T> {
    /// The key is already present. No level was mutated.
    Duplicate(T),
    /// The key falls on or outside the sentinel bounds `(min, max)`.
    OutOfBounds(T),
}

impl<T> InsertError<T> {
    /// Returns the key that could not be inserted.
    pub fn into_inner(self) -> T {
        match self {
            InsertError::Duplicate(key) => key,
            InsertError::OutOfBounds(key) => key,
        }
    }
}

impl<T: fmt::Display> fmt::Display for InsertError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InsertError::Duplicate(key) => write!(f, "key {key} is already present"),
            InsertError::OutOfBounds(key) => {
                write!(f, "key {key} falls outside the sentinel bounds")
            }
        }
    }
}

impl<T: fmt::Debug + fmt::Display> std::error::Error for InsertError<T> {}
