//! # Kind Registry
//!
//! Small dense ids for element types, used by whoever composes several pools
//! (one pool per kind, a bitmask of kinds per owner, ...).
//!
//! Two ways to get an id, neither of them global mutable state:
//! - [`Kind`]: the id is a compile-time constant on the type.
//! - [`KindRegistry`]: the composing system owns a table and registers types
//!   at startup, in an order it controls.

use std::any::{type_name, TypeId};
use std::collections::HashMap;

use crate::error::{PoolError, PoolResult};

/// Dense identifier for an element kind (0-63).
pub type KindId = u8;

/// Maximum number of kinds, so a set of kinds fits a `u64` bitmask.
pub const MAX_KINDS: usize = 64;

/// Marker trait for element types with a fixed kind id.
///
/// # Example
///
/// ```
/// use hoard_core::Kind;
///
/// struct Particle;
///
/// impl Kind for Particle {
///     const ID: u8 = 0;
/// }
///
/// assert_eq!(Particle::ID, 0);
/// assert_eq!(Particle::MASK, 1);
/// ```
pub trait Kind: 'static {
    /// Unique identifier for this kind (0-63).
    const ID: KindId;

    /// Single-bit mask for this kind.
    const MASK: u64 = 1 << Self::ID;
}

/// Explicit registration table handing out kind ids in registration order.
#[derive(Debug, Default)]
pub struct KindRegistry {
    ids: HashMap<TypeId, KindId>,
    names: Vec<&'static str>,
}

impl KindRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `T`, returning its id.
    ///
    /// Registering the same type twice returns the id it already has.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::RegistryFull`] once [`MAX_KINDS`] types are
    /// registered.
    pub fn register<T: 'static>(&mut self) -> PoolResult<KindId> {
        if let Some(&id) = self.ids.get(&TypeId::of::<T>()) {
            return Ok(id);
        }

        let id = KindId::try_from(self.names.len())
            .ok()
            .filter(|&id| usize::from(id) < MAX_KINDS)
            .ok_or(PoolError::RegistryFull {
                capacity: MAX_KINDS,
            })?;

        self.ids.insert(TypeId::of::<T>(), id);
        self.names.push(type_name::<T>());
        tracing::debug!(id, kind = type_name::<T>(), "registered kind");
        Ok(id)
    }

    /// Returns the id of `T`, if registered.
    #[must_use]
    pub fn get<T: 'static>(&self) -> Option<KindId> {
        self.ids.get(&TypeId::of::<T>()).copied()
    }

    /// Returns the type name registered under `id`.
    #[must_use]
    pub fn name(&self, id: KindId) -> Option<&'static str> {
        self.names.get(usize::from(id)).copied()
    }

    /// Returns the number of registered kinds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns `true` if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
