//! # Shared Pool
//!
//! Mutex-guarded [`HandlePool`] with closure-based access.

use parking_lot::{Mutex, MutexGuard};

use crate::error::PoolResult;
use crate::memory::{Handle, HandlePool};

/// Thread-safe wrapper serializing every call on a [`HandlePool`].
///
/// Element access goes through closures so no reference into the pool can
/// outlive the lock and be invalidated by a concurrent `refresh`.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use hoard_core::SharedPool;
///
/// let pool = Arc::new(SharedPool::new());
/// let handle = pool.create(1_u32);
///
/// let worker = {
///     let pool = Arc::clone(&pool);
///     std::thread::spawn(move || pool.with_mut(handle, |v| *v += 1))
/// };
/// worker.join().unwrap().unwrap();
///
/// assert_eq!(pool.with(handle, |v| *v).unwrap(), 2);
/// ```
#[derive(Debug)]
pub struct SharedPool<T> {
    inner: Mutex<HandlePool<T>>,
}

impl<T> SharedPool<T> {
    /// Creates an empty shared pool.
    #[must_use]
    pub fn new() -> Self {
        Self::from_pool(HandlePool::new())
    }

    /// Wraps an existing pool.
    #[must_use]
    pub fn from_pool(pool: HandlePool<T>) -> Self {
        Self {
            inner: Mutex::new(pool),
        }
    }

    /// Unwraps the inner pool.
    #[must_use]
    pub fn into_inner(self) -> HandlePool<T> {
        self.inner.into_inner()
    }

    /// Locks the pool for a batch of calls.
    ///
    /// Hold the guard for as short as possible; every other caller blocks.
    pub fn lock(&self) -> MutexGuard<'_, HandlePool<T>> {
        self.inner.lock()
    }

    /// See [`HandlePool::create`].
    pub fn create(&self, value: T) -> Handle<T> {
        self.inner.lock().create(value)
    }

    /// See [`HandlePool::destroy`].
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::StaleHandle`](crate::PoolError::StaleHandle) if
    /// the handle no longer matches its mark.
    pub fn destroy(&self, handle: Handle<T>) -> PoolResult<()> {
        self.inner.lock().destroy(handle)
    }

    /// See [`HandlePool::is_alive`].
    #[must_use]
    pub fn is_alive(&self, handle: Handle<T>) -> bool {
        self.inner.lock().is_alive(handle)
    }

    /// Runs `f` on the element behind `handle` while holding the lock.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidHandle`](crate::PoolError::InvalidHandle)
    /// if the element is not alive.
    pub fn with<R>(&self, handle: Handle<T>, f: impl FnOnce(&T) -> R) -> PoolResult<R> {
        let pool = self.inner.lock();
        pool.get(handle).map(f)
    }

    /// Runs `f` on the element behind `handle` mutably while holding the lock.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidHandle`](crate::PoolError::InvalidHandle)
    /// if the element is not alive.
    pub fn with_mut<R>(&self, handle: Handle<T>, f: impl FnOnce(&mut T) -> R) -> PoolResult<R> {
        let mut pool = self.inner.lock();
        pool.get_mut(handle).map(f)
    }

    /// See [`HandlePool::refresh`].
    pub fn refresh(&self) -> usize {
        self.inner.lock().refresh()
    }

    /// See [`HandlePool::for_each`].
    pub fn for_each(&self, f: impl FnMut(&mut T)) {
        self.inner.lock().for_each(f);
    }

    /// See [`HandlePool::size`].
    #[must_use]
    pub fn size(&self) -> usize {
        self.inner.lock().size()
    }

    /// See [`HandlePool::size_next`].
    #[must_use]
    pub fn size_next(&self) -> usize {
        self.inner.lock().size_next()
    }
}

impl<T> Default for SharedPool<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<HandlePool<T>> for SharedPool<T> {
    fn from(pool: HandlePool<T>) -> Self {
        Self::from_pool(pool)
    }
}
