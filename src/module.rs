//! Reusable registration bundles.

use crate::registry::ServiceRegistry;

/// A fixed sequence of registrations packaged as a value.
///
/// Modules are consumed when applied, either through
/// [`ServiceCollection::add_module`](crate::ServiceCollection::add_module) or
/// when entering a [`ContainerScope`](crate::ContainerScope).
///
/// # Example
///
/// ```rust
/// use ioc_container::{implements, Lifetime, Resolver, ServiceCollection, ServiceModule, ServiceRegistry};
///
/// trait Clock: Send + Sync {}
///
/// #[derive(Default)]
/// struct SystemClock;
/// impl Clock for SystemClock {}
/// implements!(SystemClock => dyn Clock);
///
/// struct ClockModule;
///
/// impl ServiceModule for ClockModule {
///     fn register_services(self, registry: &mut ServiceRegistry) {
///         registry.register::<dyn Clock, SystemClock>(Lifetime::Singleton);
///     }
/// }
///
/// let registry = ServiceCollection::new().add_module(ClockModule).build();
/// assert!(registry.is_registered::<dyn Clock>());
/// ```
pub trait ServiceModule {
    /// Applies this module's registrations to `registry`.
    fn register_services(self, registry: &mut ServiceRegistry);
}
