//! # Shared Access
//!
//! A [`HandlePool`](crate::HandlePool) relocates elements on `refresh` and
//! reallocates on growth, so any reference into it is invalidated by those
//! calls. Sharing one across threads therefore needs every call, reads
//! included, behind a single lock:
//!
//! ```text
//! Thread 1:  create / destroy ──┐
//!                               ├──► Mutex<HandlePool<T>>
//! Thread 2:  with(handle, ..) ──┤
//!                               │
//! Frame end: refresh ───────────┘
//! ```
//!
//! Handles are plain values and move between threads freely.

mod shared;

pub use shared::SharedPool;
