//! # Handles
//!
//! A handle is a lightweight, copyable reference to a pooled element:
//! - An index into the pool's mark table
//! - A snapshot of that mark's generation at creation time
//!
//! Handles never own memory. They stay meaningful across growth and
//! compaction because they address marks, not slots.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use super::pool::HandlePool;
use crate::error::PoolResult;

/// Typed reference to an element of a [`HandlePool<T>`].
///
/// The ID is packed into a `u64`:
/// - Lower 32 bits: Index into the mark table
/// - Upper 32 bits: Generation snapshot for detecting stale references
///
/// A handle is valid iff the mark's current generation equals the snapshot.
#[repr(transparent)]
pub struct Handle<T> {
    bits: u64,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Handle<T> {
    /// Null/invalid handle. Never alive in any pool.
    pub const NULL: Self = Self::from_bits(u64::MAX);

    /// Creates a handle from a mark index and a generation.
    #[inline]
    #[must_use]
    pub const fn new(index: u32, generation: u32) -> Self {
        Self::from_bits(((generation as u64) << 32) | (index as u64))
    }

    /// Rebuilds a handle from its packed representation.
    #[inline]
    #[must_use]
    pub const fn from_bits(bits: u64) -> Self {
        Self {
            bits,
            _marker: PhantomData,
        }
    }

    /// Returns the packed representation.
    #[inline]
    #[must_use]
    pub const fn to_bits(self) -> u64 {
        self.bits
    }

    /// Returns the mark index portion of the handle.
    #[inline]
    #[must_use]
    pub const fn index(self) -> u32 {
        self.bits as u32
    }

    /// Returns the generation portion of the handle.
    #[inline]
    #[must_use]
    pub const fn generation(self) -> u32 {
        (self.bits >> 32) as u32
    }

    /// Checks if this is the null handle.
    #[inline]
    #[must_use]
    pub const fn is_null(self) -> bool {
        self.bits == u64::MAX
    }

    /// Shorthand for [`HandlePool::is_alive`].
    #[inline]
    #[must_use]
    pub fn is_alive(self, pool: &HandlePool<T>) -> bool {
        pool.is_alive(self)
    }

    /// Shorthand for [`HandlePool::get`].
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidHandle`](crate::PoolError::InvalidHandle)
    /// if the handle is not alive.
    #[inline]
    pub fn get(self, pool: &HandlePool<T>) -> PoolResult<&T> {
        pool.get(self)
    }

    /// Shorthand for [`HandlePool::get_mut`].
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidHandle`](crate::PoolError::InvalidHandle)
    /// if the handle is not alive.
    #[inline]
    pub fn get_mut(self, pool: &mut HandlePool<T>) -> PoolResult<&mut T> {
        pool.get_mut(self)
    }

    /// Shorthand for [`HandlePool::destroy`].
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::StaleHandle`](crate::PoolError::StaleHandle)
    /// if the handle's generation no longer matches.
    #[inline]
    pub fn destroy(self, pool: &mut HandlePool<T>) -> PoolResult<()> {
        pool.destroy(self)
    }
}

// Manual impls: deriving would put bounds on `T`.

impl<T> Clone for Handle<T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Handle<T> {}

impl<T> PartialEq for Handle<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits
    }
}

impl<T> Eq for Handle<T> {}

impl<T> Hash for Handle<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bits.hash(state);
    }
}

impl<T> Default for Handle<T> {
    fn default() -> Self {
        Self::NULL
    }
}

impl<T> fmt::Debug for Handle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            return f.write_str("Handle(NULL)");
        }
        f.debug_struct("Handle")
            .field("index", &self.index())
            .field("generation", &self.generation())
            .finish()
    }
}
