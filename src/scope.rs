//! Scoped registration with guaranteed cleanup.

use std::any::type_name;
use std::ops::Deref;

use tracing::debug;

use crate::module::ServiceModule;
use crate::registry::ServiceRegistry;

/// Guard that registers a module on entry and clears the registry on exit.
///
/// The registry is cleared exactly once, when the guard is dropped, whether
/// the enclosing block finishes normally, returns early or unwinds. The guard
/// holds the registry's unique borrow, so nothing can register or clear behind
/// its back while it is alive; resolution goes through `Deref`.
///
/// # Example
///
/// ```rust
/// use ioc_container::fixtures::car::{CarManager, CarModule};
/// use ioc_container::{ContainerScope, Resolver, ServiceRegistry};
///
/// let mut registry = ServiceRegistry::new();
/// {
///     let scope = ContainerScope::enter(&mut registry, CarModule);
///     let manager = scope.resolve::<dyn CarManager>().unwrap();
///     manager.show();
/// }
/// assert!(registry.is_empty());
/// ```
pub struct ContainerScope<'r> {
    registry: &'r mut ServiceRegistry,
}

impl<'r> ContainerScope<'r> {
    /// Runs `module` against `registry` and returns the guard.
    ///
    /// The guard exists before the module runs, so a module that panics
    /// halfway through still leaves the registry empty.
    pub fn enter<M: ServiceModule>(registry: &'r mut ServiceRegistry, module: M) -> Self {
        let mut scope = Self { registry };
        module.register_services(&mut *scope.registry);
        debug!(
            module = type_name::<M>(),
            services = scope.registry.len(),
            "entered container scope"
        );
        scope
    }
}

impl Deref for ContainerScope<'_> {
    type Target = ServiceRegistry;

    fn deref(&self) -> &ServiceRegistry {
        self.registry
    }
}

impl Drop for ContainerScope<'_> {
    fn drop(&mut self) {
        self.registry.clear();
        debug!("left container scope");
    }
}
