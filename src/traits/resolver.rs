//! Resolver traits for capability resolution.

use std::any::Any;
use std::sync::Arc;

use crate::error::{DiError, DiResult};
use crate::key::ServiceKey;

/// Object-safe resolution core.
///
/// Implemented by the registry and by the [`ResolverContext`](crate::ResolverContext)
/// handed to factories. Most callers use the generic [`Resolver`] methods
/// built on top of it.
pub trait ResolverCore: Send + Sync {
    /// Resolves `key` to its type-erased instance.
    ///
    /// The returned value wraps an `Arc<C>` for the capability `C` the key was
    /// derived from.
    ///
    /// # Errors
    ///
    /// * `NotRegistered` - no descriptor is bound to `key`
    /// * `ConstructionFailed` - the bound factory failed
    /// * `UnsatisfiableDependency` / `NullDependency` - the construction rule
    ///   could not supply the implementation's dependency
    fn resolve_any(&self, key: &ServiceKey) -> DiResult<Arc<dyn Any + Send + Sync>>;

    /// The capability the construction rule may inject, if one is designated.
    fn infrastructure(&self) -> Option<ServiceKey>;

    /// Whether a descriptor is bound to `key`.
    fn contains(&self, key: &ServiceKey) -> bool;
}

/// Typed resolution API.
///
/// # Examples
///
/// ```
/// use ioc_container::{implements, Lifetime, Resolver, ServiceRegistry};
///
/// trait Clock: Send + Sync {
///     fn now(&self) -> u64;
/// }
///
/// #[derive(Default)]
/// struct FixedClock;
/// impl Clock for FixedClock {
///     fn now(&self) -> u64 { 42 }
/// }
/// implements!(FixedClock => dyn Clock);
///
/// let mut registry = ServiceRegistry::new();
/// registry.register::<dyn Clock, FixedClock>(Lifetime::Singleton);
///
/// let clock = registry.resolve::<dyn Clock>().unwrap();
/// assert_eq!(clock.now(), 42);
/// ```
pub trait Resolver: ResolverCore {
    /// Resolves the capability `C`.
    ///
    /// Singletons come back as the same shared instance on every call;
    /// transients are freshly built and owned by the caller alone.
    fn resolve<C: ?Sized + Send + Sync + 'static>(&self) -> DiResult<Arc<C>> {
        let key = ServiceKey::of::<C>();
        let any = self.resolve_any(&key)?;
        downcast::<C>(any)
    }

    /// Resolves `C`, mapping `NotRegistered` for `C` itself to `None`.
    ///
    /// Any other failure, including a missing nested dependency, is still an error.
    fn try_resolve<C: ?Sized + Send + Sync + 'static>(&self) -> DiResult<Option<Arc<C>>> {
        if !self.contains(&ServiceKey::of::<C>()) {
            return Ok(None);
        }
        self.resolve::<C>().map(Some)
    }

    /// Whether `C` has a descriptor.
    fn is_registered<C: ?Sized + 'static>(&self) -> bool {
        self.contains(&ServiceKey::of::<C>())
    }
}

impl<T: ResolverCore + ?Sized> Resolver for T {}

/// Casts a type-erased instance back to `Arc<C>`.
pub(crate) fn downcast<C: ?Sized + Send + Sync + 'static>(
    any: Arc<dyn Any + Send + Sync>,
) -> DiResult<Arc<C>> {
    any.downcast::<Arc<C>>()
        .map(|boxed| (*boxed).clone())
        .map_err(|_| DiError::TypeMismatch(std::any::type_name::<C>()))
}
