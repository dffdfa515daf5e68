//! Fluent registration builder.

use std::sync::Arc;

use crate::binding::Implements;
use crate::injectable::Injectable;
use crate::lifetime::Lifetime;
use crate::module::ServiceModule;
use crate::options::RegistryOptions;
use crate::registry::ServiceRegistry;
use crate::resolver::ResolverContext;

/// Chained registration that ends in a ready [`ServiceRegistry`].
///
/// Each `add_*` call maps to one `register*` call on the registry under
/// construction; `build` hands that registry over.
///
/// # Example
///
/// ```rust
/// use ioc_container::fixtures::car::{CarManager, CarRepository, CarManagerImpl, CarRepositoryImpl};
/// use ioc_container::fixtures::store::{DataStore, Database};
/// use ioc_container::{Resolver, ServiceCollection};
///
/// let registry = ServiceCollection::new()
///     .infrastructure::<dyn DataStore>()
///     .add_singleton::<dyn DataStore, Database>()
///     .add_transient_with_dependencies::<dyn CarRepository, CarRepositoryImpl>()
///     .add_transient_with_dependencies::<dyn CarManager, CarManagerImpl>()
///     .build();
///
/// assert_eq!(registry.len(), 3);
/// registry.resolve::<dyn CarManager>().unwrap().show();
/// ```
#[derive(Debug, Default)]
pub struct ServiceCollection {
    registry: ServiceRegistry,
}

impl ServiceCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: RegistryOptions) -> Self {
        Self {
            registry: ServiceRegistry::with_options(options),
        }
    }

    /// Designates `C` as the infrastructure capability.
    pub fn infrastructure<C: ?Sized + 'static>(mut self) -> Self {
        self.registry.designate_infrastructure::<C>();
        self
    }

    /// Eager singleton built from `I::default()`.
    pub fn add_singleton<C, I>(mut self) -> Self
    where
        C: ?Sized + Send + Sync + 'static,
        I: Default + Implements<C>,
    {
        self.registry.register::<C, I>(Lifetime::Singleton);
        self
    }

    pub fn add_transient<C, I>(mut self) -> Self
    where
        C: ?Sized + Send + Sync + 'static,
        I: Default + Implements<C>,
    {
        self.registry.register::<C, I>(Lifetime::Transient);
        self
    }

    pub fn add_transient_with_dependencies<C, I>(mut self) -> Self
    where
        C: ?Sized + Send + Sync + 'static,
        I: Injectable + Implements<C>,
    {
        self.registry.register_with_dependencies::<C, I>();
        self
    }

    /// Singleton built by the construction rule on first resolve.
    pub fn add_lazy_singleton<C, I>(mut self) -> Self
    where
        C: ?Sized + Send + Sync + 'static,
        I: Injectable + Implements<C>,
    {
        self.registry.register_lazy::<C, I>();
        self
    }

    pub fn add_singleton_factory<C, F>(mut self, factory: F) -> Self
    where
        C: ?Sized + Send + Sync + 'static,
        F: Fn(&ResolverContext<'_>) -> anyhow::Result<Arc<C>> + Send + Sync + 'static,
    {
        self.registry.register_factory::<C, F>(Lifetime::Singleton, factory);
        self
    }

    pub fn add_transient_factory<C, F>(mut self, factory: F) -> Self
    where
        C: ?Sized + Send + Sync + 'static,
        F: Fn(&ResolverContext<'_>) -> anyhow::Result<Arc<C>> + Send + Sync + 'static,
    {
        self.registry.register_factory::<C, F>(Lifetime::Transient, factory);
        self
    }

    pub fn add_instance<C>(mut self, instance: Arc<C>) -> Self
    where
        C: ?Sized + Send + Sync + 'static,
    {
        self.registry.register_instance(instance);
        self
    }

    /// Applies every registration of `module`.
    pub fn add_module<M: ServiceModule>(mut self, module: M) -> Self {
        module.register_services(&mut self.registry);
        self
    }

    /// Number of bindings registered so far.
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    pub fn build(self) -> ServiceRegistry {
        self.registry
    }
}
