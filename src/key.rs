//! Service key types for the container registry.

use std::any::TypeId;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Identity of a capability in the registry.
///
/// A key is derived from the *capability* type a consumer asks for (usually a
/// trait object such as `dyn DataStore`), never from the implementation that
/// satisfies it. Equality, ordering and hashing use the `TypeId` only; the
/// type name is carried along for diagnostics and error messages.
///
/// # Examples
///
/// ```rust
/// use ioc_container::{key_of, ServiceKey};
///
/// trait Clock: Send + Sync {}
///
/// let a = key_of::<dyn Clock>();
/// let b = ServiceKey::of::<dyn Clock>();
/// assert_eq!(a, b);
/// assert_ne!(a, key_of::<String>());
/// assert!(a.display_name().contains("Clock"));
/// ```
#[derive(Clone, Copy)]
pub struct ServiceKey {
    id: TypeId,
    name: &'static str,
}

impl ServiceKey {
    /// Key for the capability `C`.
    #[inline(always)]
    pub fn of<C: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<C>(),
            name: std::any::type_name::<C>(),
        }
    }

    /// The `TypeId` backing this key.
    pub fn type_id(&self) -> TypeId {
        self.id
    }

    /// Human-readable capability name (the `std::any::type_name` result).
    pub fn display_name(&self) -> &'static str {
        self.name
    }
}

// TypeId-only comparison; the name is diagnostic.
impl PartialEq for ServiceKey {
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ServiceKey {}

impl PartialOrd for ServiceKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ServiceKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl Hash for ServiceKey {
    #[inline(always)]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for ServiceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ServiceKey").field(&self.name).finish()
    }
}

impl fmt::Display for ServiceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Shorthand for [`ServiceKey::of`].
#[inline(always)]
pub fn key_of<C: ?Sized + 'static>() -> ServiceKey {
    ServiceKey::of::<C>()
}
