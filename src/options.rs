//! Registry configuration.

use crate::key::ServiceKey;

/// Settings that shape how a [`ServiceRegistry`](crate::ServiceRegistry) behaves.
///
/// Options outlive `clear()`: clearing releases bindings, not configuration.
///
/// # Examples
///
/// ```
/// use ioc_container::{key_of, RegistryOptions, ServiceRegistry};
///
/// trait Store: Send + Sync {}
///
/// let options = RegistryOptions::new()
///     .infrastructure::<dyn Store>()
///     .log_registrations(false);
/// let registry = ServiceRegistry::with_options(options);
///
/// assert_eq!(registry.options().infrastructure, Some(key_of::<dyn Store>()));
/// assert!(!registry.options().log_registrations);
/// ```
#[derive(Debug, Clone)]
pub struct RegistryOptions {
    /// The single capability the construction rule is allowed to inject.
    pub infrastructure: Option<ServiceKey>,
    /// Emit a `debug` event for every registration.
    pub log_registrations: bool,
}

impl RegistryOptions {
    pub fn new() -> Self {
        Self {
            infrastructure: None,
            log_registrations: true,
        }
    }

    /// Designates `C` as the injectable infrastructure capability.
    pub fn infrastructure<C: ?Sized + 'static>(mut self) -> Self {
        self.infrastructure = Some(ServiceKey::of::<C>());
        self
    }

    pub fn log_registrations(mut self, enabled: bool) -> Self {
        self.log_registrations = enabled;
        self
    }
}

impl Default for RegistryOptions {
    fn default() -> Self {
        Self::new()
    }
}
