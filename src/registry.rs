//! The registration table mapping capabilities to descriptors.

use std::any::type_name;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::binding::Implements;
use crate::descriptor::{AnyArc, Factory, ServiceDescriptor, ServiceInfo};
use crate::error::DiError;
use crate::injectable::Injectable;
use crate::key::ServiceKey;
use crate::lifetime::Lifetime;
use crate::options::RegistryOptions;
use crate::resolver::{construct_injected, ResolverContext};

/// Registry of capability bindings.
///
/// Created empty, filled by the `register*` calls, emptied by [`clear`](Self::clear)
/// (directly or when a [`ContainerScope`](crate::ContainerScope) ends). Every
/// state, including the cleared one, is valid; an empty registry simply
/// resolves nothing.
///
/// Registration needs `&mut self` and resolution `&self`, so a registry is
/// configured first and then shared for resolving, across threads if needed.
///
/// # Examples
///
/// ```
/// use ioc_container::{implements, Lifetime, Resolver, ServiceRegistry};
/// use std::sync::Arc;
///
/// trait Greeter: Send + Sync {
///     fn greet(&self) -> &'static str;
/// }
///
/// #[derive(Default)]
/// struct Polite;
/// impl Greeter for Polite {
///     fn greet(&self) -> &'static str { "good day" }
/// }
/// implements!(Polite => dyn Greeter);
///
/// let mut registry = ServiceRegistry::new();
/// registry.register::<dyn Greeter, Polite>(Lifetime::Transient);
/// assert!(registry.is_registered::<dyn Greeter>());
///
/// let greeter = registry.resolve::<dyn Greeter>().unwrap();
/// assert_eq!(greeter.greet(), "good day");
///
/// registry.clear();
/// assert!(!registry.is_registered::<dyn Greeter>());
/// ```
pub struct ServiceRegistry {
    descriptors: HashMap<ServiceKey, ServiceDescriptor>,
    options: RegistryOptions,
}

impl ServiceRegistry {
    /// Creates an empty registry with default options.
    pub fn new() -> Self {
        Self::with_options(RegistryOptions::default())
    }

    pub fn with_options(options: RegistryOptions) -> Self {
        Self {
            descriptors: HashMap::new(),
            options,
        }
    }

    pub fn options(&self) -> &RegistryOptions {
        &self.options
    }

    /// Designates `C` as the one capability the construction rule may inject.
    pub fn designate_infrastructure<C: ?Sized + 'static>(&mut self) -> &mut Self {
        self.options.infrastructure = Some(ServiceKey::of::<C>());
        self
    }

    // ----- Registration -----

    /// Binds `C` to a default-constructed `I`.
    ///
    /// A `Singleton` is built right away and cached; a `Transient` builds a new
    /// `I` on every resolve.
    pub fn register<C, I>(&mut self, lifetime: Lifetime) -> &mut Self
    where
        C: ?Sized + Send + Sync + 'static,
        I: Default + Implements<C>,
    {
        let key = ServiceKey::of::<C>();
        let descriptor = match lifetime {
            Lifetime::Singleton => {
                let instance = erase::<C, I>(I::default());
                let shared = instance.clone();
                let factory: Factory = Box::new(move |_: &ResolverContext<'_>| Ok(shared.clone()));
                ServiceDescriptor::new(key, type_name::<I>(), lifetime, factory).with_instance(instance)
            }
            Lifetime::Transient => {
                let factory: Factory = Box::new(|_: &ResolverContext<'_>| Ok(erase::<C, I>(I::default())));
                ServiceDescriptor::new(key, type_name::<I>(), lifetime, factory)
            }
        };
        self.insert(descriptor)
    }

    /// Binds `C` to a caller-supplied factory.
    ///
    /// Singleton factories run on first resolve. An error returned by the
    /// factory surfaces as `ConstructionFailed`, unless it already is a
    /// container error (from a nested resolve), which passes through as is.
    pub fn register_factory<C, F>(&mut self, lifetime: Lifetime, factory: F) -> &mut Self
    where
        C: ?Sized + Send + Sync + 'static,
        F: Fn(&ResolverContext<'_>) -> anyhow::Result<Arc<C>> + Send + Sync + 'static,
    {
        let key = ServiceKey::of::<C>();
        let factory: Factory = Box::new(move |ctx: &ResolverContext<'_>| {
            let instance = factory(ctx).map_err(|err| DiError::from_factory(type_name::<C>(), err))?;
            let erased: AnyArc = Arc::new(instance);
            Ok(erased)
        });
        self.insert(ServiceDescriptor::new(key, type_name::<F>(), lifetime, factory))
    }

    /// Binds `C` to `I`, built per resolve by the construction rule.
    pub fn register_with_dependencies<C, I>(&mut self) -> &mut Self
    where
        C: ?Sized + Send + Sync + 'static,
        I: Injectable + Implements<C>,
    {
        self.insert_injected::<C, I>(Lifetime::Transient)
    }

    /// Binds `C` to `I`, built by the construction rule on first resolve and cached.
    pub fn register_lazy<C, I>(&mut self) -> &mut Self
    where
        C: ?Sized + Send + Sync + 'static,
        I: Injectable + Implements<C>,
    {
        self.insert_injected::<C, I>(Lifetime::Singleton)
    }

    /// Binds `C` to an instance that already exists, as a singleton.
    pub fn register_instance<C>(&mut self, instance: Arc<C>) -> &mut Self
    where
        C: ?Sized + Send + Sync + 'static,
    {
        let key = ServiceKey::of::<C>();
        let erased: AnyArc = Arc::new(instance);
        let shared = erased.clone();
        let factory: Factory = Box::new(move |_: &ResolverContext<'_>| Ok(shared.clone()));
        let descriptor = ServiceDescriptor::new(key, type_name::<C>(), Lifetime::Singleton, factory)
            .with_instance(erased);
        self.insert(descriptor)
    }

    fn insert_injected<C, I>(&mut self, lifetime: Lifetime) -> &mut Self
    where
        C: ?Sized + Send + Sync + 'static,
        I: Injectable + Implements<C>,
    {
        let key = ServiceKey::of::<C>();
        let factory: Factory = Box::new(|ctx: &ResolverContext<'_>| construct_injected::<C, I>(ctx));
        let descriptor = ServiceDescriptor::new(key, type_name::<I>(), lifetime, factory)
            .with_dependencies(I::dependencies());
        self.insert(descriptor)
    }

    fn insert(&mut self, descriptor: ServiceDescriptor) -> &mut Self {
        if self.options.log_registrations {
            debug!(
                capability = %descriptor.key(),
                implementation = descriptor.implementation(),
                lifetime = %descriptor.lifetime(),
                "registered service"
            );
        }

        let previous = self.descriptors.insert(descriptor.key(), descriptor);
        if let Some(previous) = previous.filter(|_| self.options.log_registrations) {
            debug!(
                capability = %previous.key(),
                implementation = previous.implementation(),
                "replaced previous registration"
            );
        }
        self
    }

    // ----- Lookup -----

    pub(crate) fn descriptor_for(&self, key: &ServiceKey) -> Option<&ServiceDescriptor> {
        self.descriptors.get(key)
    }

    /// The descriptor bound to `C`, if any.
    pub fn descriptor<C: ?Sized + 'static>(&self) -> Option<&ServiceDescriptor> {
        self.descriptor_for(&ServiceKey::of::<C>())
    }

    pub fn descriptors(&self) -> impl Iterator<Item = &ServiceDescriptor> {
        self.descriptors.values()
    }

    /// Snapshots of every binding, sorted by capability name.
    pub fn services(&self) -> Vec<ServiceInfo> {
        let mut services: Vec<_> = self.descriptors().map(ServiceDescriptor::info).collect();
        services.sort_by(|a, b| a.capability.cmp(&b.capability));
        services
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    // ----- Lifecycle -----

    /// Removes every binding and releases the registry's cached instances.
    ///
    /// Handles already given out stay valid. Safe to call on an empty registry.
    pub fn clear(&mut self) {
        let released = self.descriptors.len();
        self.descriptors.clear();
        debug!(released, "registry cleared");
    }
}

impl Default for ServiceRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ServiceRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceRegistry")
            .field("descriptors", &self.descriptors.len())
            .field("options", &self.options)
            .finish()
    }
}

fn erase<C, I>(instance: I) -> AnyArc
where
    C: ?Sized + Send + Sync + 'static,
    I: Implements<C>,
{
    let service = <I as Implements<C>>::into_service(Arc::new(instance));
    Arc::new(service)
}
