//! # Handle Pool
//!
//! Dense object pool with generational handles and deferred compaction.
//!
//! ## Layout
//!
//! ```text
//!   index:    0     1     2     3     4     5     6     7
//!          ┌─────┬─────┬─────┬─────┬─────┬─────┬─────┬─────┐
//!   atoms  │ A   │ A   │ A   │ D   │ A   │ D   │     │     │
//!          └─────┴─────┴─────┴─────┴─────┴─────┴─────┴─────┘
//!          ◄──── size ─────►◄── fresh ──►      ◄─ unused ──►
//!          ◄──────────── size_next ─────►
//! ```
//!
//! - `[0, size)`: compacted range. Alive right after `refresh`; visited by
//!   `for_each`.
//! - `[size, size_next)`: created since the last `refresh`, possibly
//!   already destroyed. Not visited by `for_each`.
//! - `[size_next, capacity)`: vacant.
//!
//! ## Lifecycle
//!
//! 1. `create` stores the element at `size_next` and bumps its mark's
//!    generation.
//! 2. `destroy` only flips the alive flag. The element stays resident.
//! 3. `refresh` packs alive atoms into `[0, size)`, drops the dead ones and
//!    bumps their generation so every outstanding handle goes stale.

use super::atom::{Atom, Mark};
use super::handle::Handle;
use crate::config::{GrowthPolicy, PoolConfig};
use crate::error::{PoolError, PoolResult};

/// Largest number of slots a pool can hold. Mark indices must fit a handle.
pub const MAX_CAPACITY: usize = u32::MAX as usize;

/// Generational handle pool.
///
/// Elements live in a contiguous array and can be relocated by
/// [`refresh`](Self::refresh); callers keep [`Handle`]s, which go through
/// an indirection table and stay valid until the element is destroyed.
///
/// # Thread Safety
///
/// This pool is NOT thread-safe. Use one pool per thread or wrap it in a
/// [`SharedPool`](crate::SharedPool).
///
/// # Example
///
/// ```
/// use hoard_core::HandlePool;
///
/// let mut pool = HandlePool::new();
/// let a = pool.create(String::from("a"));
/// let b = pool.create(String::from("b"));
/// pool.refresh();
///
/// b.destroy(&mut pool).unwrap();
/// pool.refresh();
///
/// assert_eq!(pool.get(a).unwrap(), "a");
/// assert!(!b.is_alive(&pool));
/// assert_eq!(pool.size(), 1);
/// ```
#[derive(Debug)]
pub struct HandlePool<T> {
    /// Dense slot storage.
    atoms: Vec<Atom<T>>,
    /// Indirection table, same length as `atoms`.
    marks: Vec<Mark>,
    /// Length of the compacted range.
    size: usize,
    /// Length of the compacted range plus pending creations.
    size_next: usize,
    /// Policy used when `create` runs out of slots.
    growth: GrowthPolicy,
}

impl<T> HandlePool<T> {
    /// Creates an empty pool with the default growth policy.
    ///
    /// No memory is allocated until the first `create` or `reserve`.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_growth(GrowthPolicy::DEFAULT)
    }

    /// Creates an empty pool with a custom growth policy.
    ///
    /// # Panics
    ///
    /// Panics if `growth.amount` or `growth.multiplier` is zero.
    #[must_use]
    pub const fn with_growth(growth: GrowthPolicy) -> Self {
        assert!(
            growth.amount > 0 && growth.multiplier > 0,
            "Growth policy must strictly grow"
        );
        Self {
            atoms: Vec::new(),
            marks: Vec::new(),
            size: 0,
            size_next: 0,
            growth,
        }
    }

    /// Creates an empty pool with at least `capacity` slots pre-allocated.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let mut pool = Self::new();
        pool.reserve(capacity);
        pool
    }

    /// Creates a pool from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidConfig`] if the configuration does not
    /// validate.
    pub fn with_config(config: &PoolConfig) -> PoolResult<Self> {
        config.validate()?;
        let mut pool = Self::with_growth(config.growth);
        pool.reserve(config.initial_capacity);
        Ok(pool)
    }

    /// Returns the number of allocated slots.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.atoms.len()
    }

    /// Returns the length of the compacted range visited by iteration.
    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Returns the compacted range plus elements created since the last
    /// [`refresh`](Self::refresh).
    #[inline]
    #[must_use]
    pub const fn size_next(&self) -> usize {
        self.size_next
    }

    /// Returns `true` if no slot is in use, compacted or pending.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.size_next == 0
    }

    /// Returns the growth policy.
    #[inline]
    #[must_use]
    pub const fn growth(&self) -> GrowthPolicy {
        self.growth
    }

    /// Grows capacity to at least `capacity` without creating elements.
    ///
    /// Existing handles are unaffected. New slots start paired with the mark
    /// of the same index.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` exceeds [`MAX_CAPACITY`].
    pub fn reserve(&mut self, capacity: usize) {
        if self.capacity() < capacity {
            self.grow_to(capacity);
        }
    }

    /// Stores `value` and returns a handle to it.
    ///
    /// The element is not visited by [`for_each`](Self::for_each) until the
    /// next [`refresh`](Self::refresh). Grows the pool if it is full.
    ///
    /// # Panics
    ///
    /// Panics if the pool already holds [`MAX_CAPACITY`] slots.
    pub fn create(&mut self, value: T) -> Handle<T> {
        self.grow_if_needed();

        let index = self.size_next;
        let atom = &mut self.atoms[index];
        atom.init(value);

        let mark_index = atom.mark;
        let mark = &mut self.marks[mark_index];
        mark.atom = index;
        mark.generation = mark.generation.wrapping_add(1);

        self.size_next += 1;
        Self::make_handle(mark_index, mark.generation)
    }

    /// Checks if the element behind `handle` is alive.
    ///
    /// This is stricter than a generation comparison: the generation only
    /// moves when `refresh` reclaims the slot, but `is_alive` also reads the
    /// slot's alive flag, so it turns false as soon as the element is
    /// destroyed and stays false once it is reclaimed.
    #[inline]
    #[must_use]
    pub fn is_alive(&self, handle: Handle<T>) -> bool {
        self.live_atom(handle).is_some()
    }

    /// Gets the element behind `handle`.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidHandle`] if the element is not alive.
    #[inline]
    pub fn get(&self, handle: Handle<T>) -> PoolResult<&T> {
        self.live_atom(handle)
            .and_then(|index| self.atoms[index].get())
            .ok_or_else(|| Self::invalid(handle))
    }

    /// Gets the element behind `handle` mutably.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidHandle`] if the element is not alive.
    #[inline]
    pub fn get_mut(&mut self, handle: Handle<T>) -> PoolResult<&mut T> {
        match self.live_atom(handle) {
            Some(index) => self.atoms[index]
                .get_mut()
                .ok_or_else(|| Self::invalid(handle)),
            None => Err(Self::invalid(handle)),
        }
    }

    /// Marks the element behind `handle` dead.
    ///
    /// This is an **O(1)** operation. The element is dropped by the next
    /// [`refresh`](Self::refresh). Destroying an element that is already
    /// dead but not yet reclaimed does nothing.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::StaleHandle`] if the handle's generation no
    /// longer matches its mark. Whatever now occupies the slot is left alone.
    pub fn destroy(&mut self, handle: Handle<T>) -> PoolResult<()> {
        let current = self
            .marks
            .get(handle.index() as usize)
            .copied()
            .filter(|mark| mark.generation == handle.generation());

        let Some(mark) = current else {
            let current = self
                .marks
                .get(handle.index() as usize)
                .map_or(0, |mark| mark.generation);
            tracing::debug!(
                index = handle.index(),
                generation = handle.generation(),
                current,
                "rejected destroy through stale handle"
            );
            return Err(PoolError::StaleHandle {
                index: handle.index(),
                generation: handle.generation(),
                current,
            });
        };

        self.atoms[mark.atom].set_dead();
        Ok(())
    }

    /// Compacts the pool in a single linear pass.
    ///
    /// Alive atoms in `[0, size_next)` are packed into `[0, size)` by
    /// swapping them into dead slots; dead elements are dropped and their
    /// marks' generations bumped. Relative order of survivors is not kept.
    /// Afterwards `size == size_next` and every atom in `[0, size)` is alive.
    ///
    /// Returns the number of elements reclaimed.
    pub fn refresh(&mut self) -> usize {
        let size_next = self.size_next;
        let (alive_end, visited) = self.compact();

        for index in alive_end..size_next {
            let atom = &mut self.atoms[index];
            atom.deinit();
            let mark = &mut self.marks[atom.mark];
            mark.generation = mark.generation.wrapping_add(1);
        }

        let reclaimed = size_next - alive_end;
        self.size = alive_end;
        self.size_next = alive_end;

        tracing::trace!(reclaimed, visited, size = alive_end, "refreshed pool");
        reclaimed
    }

    /// Drops every element and resets the pool to empty.
    ///
    /// Capacity is kept. Every handle issued before the call goes stale.
    pub fn clear(&mut self) {
        for index in 0..self.size_next {
            let atom = &mut self.atoms[index];
            atom.set_dead();
            atom.deinit();
            let mark = &mut self.marks[atom.mark];
            mark.generation = mark.generation.wrapping_add(1);
        }

        tracing::debug!(
            cleared = self.size_next,
            capacity = self.capacity(),
            "cleared pool"
        );
        self.size = 0;
        self.size_next = 0;
    }

    /// Calls `f` on every alive element of the compacted range.
    ///
    /// Elements created since the last `refresh` are not visited, and
    /// neither are elements destroyed since then.
    pub fn for_each(&mut self, mut f: impl FnMut(&mut T)) {
        for atom in &mut self.atoms[..self.size] {
            if let Some(value) = atom.get_mut() {
                f(value);
            }
        }
    }

    /// Calls `f` on every atom of the compacted range, dead or alive.
    ///
    /// Useful to mark elements dead in bulk with [`Atom::set_dead`].
    pub fn for_each_atom(&mut self, mut f: impl FnMut(&mut Atom<T>)) {
        for atom in &mut self.atoms[..self.size] {
            f(atom);
        }
    }

    /// Iterates over alive elements of the compacted range.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.atoms[..self.size].iter().filter_map(Atom::get)
    }

    /// Iterates mutably over alive elements of the compacted range.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.atoms[..self.size].iter_mut().filter_map(Atom::get_mut)
    }

    /// Returns the current handle for the element stored in `atom`.
    ///
    /// The handle is alive only while the atom is.
    #[must_use]
    pub fn handle_of(&self, atom: &Atom<T>) -> Handle<T> {
        Self::make_handle(atom.mark, self.marks[atom.mark].generation)
    }

    /// Returns the atom at physical slot `index`.
    ///
    /// Slot positions change on every `refresh`; this is a debugging aid,
    /// not a substitute for handles.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below [`capacity`](Self::capacity).
    #[must_use]
    pub fn atom_at(&self, index: usize) -> &Atom<T> {
        assert!(
            index < self.capacity(),
            "atom index {index} out of range (capacity {})",
            self.capacity()
        );
        &self.atoms[index]
    }

    /// Returns the atom at physical slot `index` mutably.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below [`capacity`](Self::capacity).
    pub fn atom_at_mut(&mut self, index: usize) -> &mut Atom<T> {
        assert!(
            index < self.capacity(),
            "atom index {index} out of range (capacity {})",
            self.capacity()
        );
        &mut self.atoms[index]
    }

    /// Returns the element at physical slot `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range or the atom there is not alive.
    #[must_use]
    pub fn data_at(&self, index: usize) -> &T {
        match self.atom_at(index).get() {
            Some(value) => value,
            None => panic!("atom {index} is not alive"),
        }
    }

    /// Returns the element at physical slot `index` mutably.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range or the atom there is not alive.
    pub fn data_at_mut(&mut self, index: usize) -> &mut T {
        match self.atom_at_mut(index).get_mut() {
            Some(value) => value,
            None => panic!("atom {index} is not alive"),
        }
    }

    /// Packs alive atoms of `[0, size_next)` to the front.
    ///
    /// Returns one past the last alive atom and the number of slot checks.
    /// Both cursors only move forward, so checks stay below `2 * size_next`.
    fn compact(&mut self) -> (usize, usize) {
        let size_next = self.size_next;
        let mut visited = 0;

        // Skip the leading run of alive atoms.
        let mut first_dead = 0;
        while first_dead < size_next && self.atoms[first_dead].alive {
            first_dead += 1;
            visited += 1;
        }

        // One past the rightmost alive atom.
        let mut alive_end = first_dead;
        let mut i = first_dead;
        // Once `i` is dead, everything in `[i, j)` is dead too.
        let mut j = first_dead;

        'scan: while i < size_next {
            visited += 1;
            if self.atoms[i].alive {
                alive_end = i + 1;
                i += 1;
                continue;
            }

            // `i` is dead: pull the next alive atom into it.
            j = j.max(i + 1);
            loop {
                if j == size_next {
                    alive_end = i;
                    break 'scan;
                }
                visited += 1;
                if self.atoms[j].alive {
                    break;
                }
                j += 1;
            }

            self.atoms.swap(i, j);
            self.marks[self.atoms[i].mark].atom = i;
            self.marks[self.atoms[j].mark].atom = j;
            alive_end = i + 1;
            i += 1;
            j += 1;
        }

        (alive_end, visited)
    }

    /// Slot index of the live element behind `handle`, if any.
    #[inline]
    fn live_atom(&self, handle: Handle<T>) -> Option<usize> {
        let mark = self.marks.get(handle.index() as usize)?;
        (mark.generation == handle.generation() && self.atoms[mark.atom].alive)
            .then_some(mark.atom)
    }

    #[inline]
    fn invalid(handle: Handle<T>) -> PoolError {
        PoolError::InvalidHandle {
            index: handle.index(),
            generation: handle.generation(),
        }
    }

    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    fn make_handle(mark_index: usize, generation: u32) -> Handle<T> {
        // Capacity never exceeds MAX_CAPACITY, so mark indices fit in u32.
        Handle::new(mark_index as u32, generation)
    }

    fn grow_if_needed(&mut self) {
        if self.capacity() <= self.size_next {
            let target = self
                .growth
                .next_capacity(self.capacity())
                .min(MAX_CAPACITY);
            self.grow_to(target);
        }
    }

    fn grow_to(&mut self, capacity: usize) {
        let old = self.capacity();
        assert!(
            capacity <= MAX_CAPACITY && capacity > old,
            "Pool cannot grow from {old} to {capacity} slots (max {MAX_CAPACITY})"
        );

        self.atoms.reserve_exact(capacity - old);
        self.marks.reserve_exact(capacity - old);
        self.atoms.extend((old..capacity).map(Atom::vacant));
        self.marks.extend((old..capacity).map(Mark::identity));

        tracing::debug!(from = old, to = capacity, "grew pool");
    }
}

impl<T> Default for HandlePool<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_create_destroy() {
        let mut pool: HandlePool<u32> = HandlePool::new();

        let h1 = pool.create(42);
        assert_eq!(*pool.get(h1).unwrap(), 42);
        assert_eq!(pool.size(), 0);
        assert_eq!(pool.size_next(), 1);

        pool.destroy(h1).unwrap();
        assert!(!pool.is_alive(h1));
        assert_eq!(
            pool.get(h1),
            Err(PoolError::InvalidHandle {
                index: h1.index(),
                generation: h1.generation(),
            })
        );
        // Counters only move on refresh.
        assert_eq!(pool.size_next(), 1);

        assert_eq!(pool.refresh(), 1);
        assert_eq!(pool.size_next(), 0);
        assert!(pool.is_empty());
    }

    #[test]
    fn test_pool_grows_geometrically() {
        let mut pool: HandlePool<u8> = HandlePool::new();
        assert_eq!(pool.capacity(), 0);

        pool.create(1);
        assert_eq!(pool.capacity(), 10);

        for i in 0..9 {
            pool.create(i);
        }
        assert_eq!(pool.capacity(), 10);

        pool.create(10);
        assert_eq!(pool.capacity(), 30);
    }

    #[test]
    fn test_pool_reuse_bumps_generation() {
        let mut pool: HandlePool<u32> = HandlePool::with_capacity(1);

        let h1 = pool.create(1);
        pool.refresh();
        pool.destroy(h1).unwrap();
        pool.refresh();

        let h2 = pool.create(2);
        assert_eq!(h1.index(), h2.index()); // Same mark reused
        assert!(h2.generation() > h1.generation());
        assert!(!pool.is_alive(h1));
        assert_eq!(*pool.get(h2).unwrap(), 2);
        assert_eq!(pool.capacity(), 1);
    }

    #[test]
    fn test_stale_destroy_leaves_new_occupant() {
        let mut pool: HandlePool<&str> = HandlePool::new();

        let old = pool.create("old");
        pool.destroy(old).unwrap();
        pool.refresh();

        let new = pool.create("new");
        assert_eq!(old.index(), new.index());

        let err = pool.destroy(old).unwrap_err();
        assert_eq!(
            err,
            PoolError::StaleHandle {
                index: old.index(),
                generation: old.generation(),
                current: new.generation(),
            }
        );
        assert_eq!(*pool.get(new).unwrap(), "new");
    }

    #[test]
    fn test_double_destroy_is_noop() {
        let mut pool = HandlePool::new();
        let h = pool.create(5_i32);
        pool.refresh();

        pool.destroy(h).unwrap();
        pool.destroy(h).unwrap();
        assert_eq!(pool.refresh(), 1);
        assert!(pool.destroy(h).is_err());
    }

    #[test]
    fn test_null_and_foreign_handles() {
        let mut pool: HandlePool<u8> = HandlePool::with_capacity(4);
        assert!(!pool.is_alive(Handle::NULL));
        assert!(pool.get(Handle::NULL).is_err());
        assert!(matches!(
            pool.destroy(Handle::NULL),
            Err(PoolError::StaleHandle { current: 0, .. })
        ));

        // Generation 0 is never handed out.
        assert!(!pool.is_alive(Handle::new(0, 0)));
    }

    #[test]
    fn test_get_mut() {
        let mut pool = HandlePool::new();
        let h = pool.create(vec![1, 2]);
        h.get_mut(&mut pool).unwrap().push(3);
        assert_eq!(h.get(&pool).unwrap(), &[1, 2, 3]);

        h.destroy(&mut pool).unwrap();
        assert!(h.get_mut(&mut pool).is_err());
    }

    #[test]
    fn test_refresh_no_dead() {
        let mut pool = HandlePool::new();
        let handles: Vec<_> = (0..5).map(|i| pool.create(i)).collect();

        assert_eq!(pool.refresh(), 0);
        assert_eq!(pool.size(), 5);
        for (i, h) in handles.iter().enumerate() {
            assert_eq!(pool.data_at(i), pool.get(*h).unwrap());
        }
    }

    #[test]
    fn test_refresh_all_dead() {
        let mut pool = HandlePool::new();
        let handles: Vec<_> = (0..6).map(|i| pool.create(i)).collect();
        for h in &handles {
            pool.destroy(*h).unwrap();
        }

        assert_eq!(pool.refresh(), 6);
        assert_eq!(pool.size(), 0);
        assert_eq!(pool.size_next(), 0);
        assert!(handles.iter().all(|h| !pool.is_alive(*h)));
    }

    #[test]
    fn test_refresh_keeps_marks_consistent() {
        let mut pool = HandlePool::new();
        let handles: Vec<_> = (0..12).map(|i| pool.create(i)).collect();
        pool.refresh();

        for h in handles.iter().step_by(3) {
            pool.destroy(*h).unwrap();
        }
        pool.refresh();
        assert_eq!(pool.size(), 8);

        for index in 0..pool.capacity() {
            let atom = pool.atom_at(index);
            assert_eq!(pool.marks[atom.mark].atom, index);
        }
        for (i, h) in handles.iter().enumerate() {
            if i % 3 == 0 {
                assert!(!pool.is_alive(*h));
            } else {
                assert_eq!(*pool.get(*h).unwrap(), i);
            }
        }
    }

    #[test]
    fn test_destroy_clears_liveness_before_generation_moves() {
        let mut pool = HandlePool::new();
        let h = pool.create('x');
        pool.refresh();

        pool.destroy(h).unwrap();
        assert_eq!(pool.marks[h.index() as usize].generation, h.generation());
        assert!(!pool.is_alive(h));

        pool.refresh();
        assert_ne!(pool.marks[h.index() as usize].generation, h.generation());
        assert!(!pool.is_alive(h));
    }

    #[test]
    fn test_compaction_is_linear() {
        const N: usize = 10_000;

        // Dead block first, then alternating.
        for dead_first in [true, false] {
            let mut pool = HandlePool::with_capacity(2 * N);
            let handles: Vec<_> = (0..2 * N).map(|i| pool.create(i)).collect();
            pool.refresh();

            let doomed = |i: usize| if dead_first { i < N } else { i % 2 == 0 };
            for (i, h) in handles.iter().enumerate() {
                if doomed(i) {
                    pool.destroy(*h).unwrap();
                }
            }

            let (alive_end, visited) = pool.compact();
            assert_eq!(alive_end, N);
            assert!(visited <= 4 * N, "visited {visited} slots for {} atoms", 2 * N);

            assert_eq!(pool.refresh(), N);
            for (i, h) in handles.iter().enumerate() {
                if doomed(i) {
                    assert!(!pool.is_alive(*h));
                } else {
                    assert_eq!(*pool.get(*h).unwrap(), i);
                }
            }
        }
    }

    #[test]
    fn test_iteration_window() {
        let mut pool = HandlePool::new();
        pool.create(1);
        pool.create(2);
        assert_eq!(pool.iter().count(), 0);

        pool.refresh();
        let late = pool.create(3);
        assert_eq!(pool.iter().copied().sum::<i32>(), 3);

        pool.for_each(|v| *v *= 10);
        assert_eq!(*pool.get(late).unwrap(), 3);
        assert_eq!(pool.iter().copied().sum::<i32>(), 30);
    }

    #[test]
    fn test_for_each_skips_destroyed() {
        let mut pool = HandlePool::new();
        let a = pool.create(1);
        pool.create(2);
        pool.refresh();

        pool.destroy(a).unwrap();
        let mut seen = Vec::new();
        pool.for_each(|v| seen.push(*v));
        assert_eq!(seen, vec![2]);
    }

    #[test]
    fn test_for_each_atom_bulk_kill() {
        let mut pool = HandlePool::new();
        let handles: Vec<_> = (0..4).map(|i| pool.create(i)).collect();
        pool.refresh();

        pool.for_each_atom(|atom| {
            if atom.get().is_some_and(|v| v % 2 == 0) {
                atom.set_dead();
            }
        });
        assert_eq!(pool.refresh(), 2);
        assert!(!pool.is_alive(handles[0]));
        assert!(pool.is_alive(handles[1]));
    }

    #[test]
    fn test_handle_of_atom() {
        let mut pool = HandlePool::new();
        let h = pool.create('x');
        pool.refresh();

        let rebuilt = pool.handle_of(pool.atom_at(0));
        assert_eq!(rebuilt, h);
    }

    #[test]
    fn test_clear_keeps_capacity() {
        let mut pool = HandlePool::with_capacity(16);
        let a = pool.create(1);
        pool.refresh();
        let b = pool.create(2);

        pool.clear();
        assert_eq!(pool.capacity(), 16);
        assert_eq!(pool.size(), 0);
        assert_eq!(pool.size_next(), 0);
        assert!(!pool.is_alive(a));
        assert!(!pool.is_alive(b));

        let c = pool.create(3);
        pool.refresh();
        assert_eq!(pool.iter().copied().collect::<Vec<_>>(), vec![3]);
        assert!(pool.is_alive(c));
    }

    #[test]
    fn test_reserve_preserves_handles() {
        let mut pool = HandlePool::new();
        let a = pool.create("a");
        pool.refresh();

        pool.reserve(1000);
        assert_eq!(pool.capacity(), 1000);
        assert_eq!(*pool.get(a).unwrap(), "a");

        // Smaller requests are ignored.
        pool.reserve(10);
        assert_eq!(pool.capacity(), 1000);
    }

    #[test]
    fn test_with_config() {
        let config = PoolConfig {
            initial_capacity: 3,
            growth: GrowthPolicy {
                amount: 1,
                multiplier: 1,
            },
        };
        let mut pool = HandlePool::with_config(&config).unwrap();
        assert_eq!(pool.capacity(), 3);

        for i in 0..4 {
            pool.create(i);
        }
        assert_eq!(pool.capacity(), 4);

        let bad = PoolConfig {
            growth: GrowthPolicy {
                amount: 0,
                multiplier: 2,
            },
            ..PoolConfig::default()
        };
        assert!(HandlePool::<u8>::with_config(&bad).is_err());
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_atom_at_out_of_range() {
        let pool: HandlePool<u8> = HandlePool::with_capacity(2);
        let _ = pool.atom_at(2);
    }

    #[test]
    #[should_panic(expected = "not alive")]
    fn test_data_at_dead() {
        let pool: HandlePool<u8> = HandlePool::with_capacity(2);
        let _ = pool.data_at(0);
    }
}
