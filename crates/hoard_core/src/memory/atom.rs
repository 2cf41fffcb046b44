//! # Atoms and Marks
//!
//! The two parallel tables behind a [`HandlePool`](super::HandlePool):
//!
//! ```text
//!   marks:  [ m0 ][ m1 ][ m2 ][ m3 ]      (stable, addressed by handles)
//!              │     │     │     │
//!              ▼     ▼     ▼     ▼        mark.atom  -> slot index
//!   atoms:  [ a? ][ a? ][ a? ][ a? ]      (dense, relocated by refresh)
//!              │     │     │     │
//!              └─────┴─────┴─────┴──►     atom.mark  -> mark index
//! ```
//!
//! Both back-references are plain indices; neither table owns the other.

/// Indirection entry mapping a stable identity to its current slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Mark {
    /// Physical slot currently (or most recently) holding this identity.
    pub(crate) atom: usize,
    /// Bumped on every creation and every reclamation.
    pub(crate) generation: u32,
}

impl Mark {
    /// Identity mark for slot `index`.
    #[inline]
    pub(crate) const fn identity(index: usize) -> Self {
        Self {
            atom: index,
            generation: 0,
        }
    }
}

/// Storage cell for one pooled element.
///
/// An atom holds its element from creation until the compaction pass after
/// it was marked dead. Setting an atom dead does not drop the element.
#[derive(Debug)]
pub struct Atom<T> {
    /// The element, `None` while the slot is unused.
    value: Option<T>,
    /// Index of the mark describing this slot.
    pub(crate) mark: usize,
    /// Whether the element is still alive.
    pub(crate) alive: bool,
}

impl<T> Atom<T> {
    /// Empty atom paired with mark `mark`.
    #[inline]
    pub(crate) const fn vacant(mark: usize) -> Self {
        Self {
            value: None,
            mark,
            alive: false,
        }
    }

    /// Stores `value` and marks the atom alive.
    #[inline]
    pub(crate) fn init(&mut self, value: T) {
        debug_assert!(!self.alive, "initializing a live atom");
        self.value = Some(value);
        self.alive = true;
    }

    /// Drops the stored element. The atom must already be dead.
    #[inline]
    pub(crate) fn deinit(&mut self) {
        debug_assert!(!self.alive, "finalizing a live atom");
        self.value = None;
    }

    /// Returns whether the element is alive.
    #[inline]
    #[must_use]
    pub const fn is_alive(&self) -> bool {
        self.alive
    }

    /// Returns the mark index of this atom.
    #[inline]
    #[must_use]
    pub const fn mark_index(&self) -> usize {
        self.mark
    }

    /// Returns the element if it is alive.
    #[inline]
    #[must_use]
    pub fn get(&self) -> Option<&T> {
        if self.alive {
            self.value.as_ref()
        } else {
            None
        }
    }

    /// Returns the element mutably if it is alive.
    #[inline]
    pub fn get_mut(&mut self) -> Option<&mut T> {
        if self.alive {
            self.value.as_mut()
        } else {
            None
        }
    }

    /// Marks the element dead.
    ///
    /// The element stays resident until the next
    /// [`refresh`](super::HandlePool::refresh).
    #[inline]
    pub fn set_dead(&mut self) {
        self.alive = false;
    }
}
