//! Service lifetime definitions.

use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Lifetime policy controlling whether resolved instances are shared.
///
/// # Examples
///
/// ```rust
/// use ioc_container::{implements, Lifetime, Resolver, ServiceRegistry};
/// use std::sync::Arc;
///
/// trait Counter: Send + Sync {}
///
/// #[derive(Default)]
/// struct Tally;
/// impl Counter for Tally {}
/// implements!(Tally => dyn Counter);
///
/// let mut registry = ServiceRegistry::new();
/// registry.register::<dyn Counter, Tally>(Lifetime::Singleton);
/// let a = registry.resolve::<dyn Counter>().unwrap();
/// let b = registry.resolve::<dyn Counter>().unwrap();
/// assert!(Arc::ptr_eq(&a, &b));
///
/// registry.register::<dyn Counter, Tally>(Lifetime::Transient);
/// let c = registry.resolve::<dyn Counter>().unwrap();
/// assert!(!Arc::ptr_eq(&a, &c));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Lifetime {
    /// One instance per registry, cached in the descriptor and handed out to
    /// every caller until the registry is cleared or the key re-registered.
    Singleton,
    /// A fresh, independently owned instance on every resolve. Never cached.
    #[default]
    Transient,
}

impl fmt::Display for Lifetime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lifetime::Singleton => f.write_str("Singleton"),
            Lifetime::Transient => f.write_str("Transient"),
        }
    }
}
