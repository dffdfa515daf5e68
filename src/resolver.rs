//! Dependency resolution: descriptor lookup, lifetime policy and the
//! automatic construction rule.

use std::any::type_name;
use std::cell::Cell;
use std::sync::Arc;

use tracing::{trace, warn};

use crate::binding::Implements;
use crate::descriptor::AnyArc;
use crate::error::{DiError, DiResult};
use crate::injectable::{Dependencies, Injectable};
use crate::key::ServiceKey;
use crate::registry::ServiceRegistry;
use crate::traits::ResolverCore;

thread_local! {
    // Nesting depth of resolve calls on this thread; 0 means top level.
    static DEPTH: Cell<usize> = const { Cell::new(0) };
}

/// Tracks resolve nesting so only the outermost failure is logged.
struct DepthGuard {
    depth: usize,
}

impl DepthGuard {
    fn enter() -> Self {
        let depth = DEPTH.with(|d| {
            let depth = d.get();
            d.set(depth + 1);
            depth
        });
        Self { depth }
    }

    fn is_top_level(&self) -> bool {
        self.depth == 0
    }
}

impl Drop for DepthGuard {
    fn drop(&mut self) {
        DEPTH.with(|d| d.set(self.depth));
    }
}

/// Context passed to factories so they can resolve their own dependencies.
///
/// Factories receive a context instead of closing over the registry, so the
/// registry never ends up owning a reference to itself.
///
/// # Examples
///
/// ```
/// use ioc_container::{Lifetime, Resolver, ServiceRegistry};
/// use std::sync::Arc;
///
/// struct Config { url: String }
/// struct Client { config: Arc<Config> }
///
/// let mut registry = ServiceRegistry::new();
/// registry.register_instance(Arc::new(Config { url: "mem://".into() }));
/// registry.register_factory::<Client, _>(Lifetime::Transient, |ctx| {
///     Ok(Arc::new(Client { config: ctx.resolve::<Config>()? }))
/// });
///
/// let client = registry.resolve::<Client>().unwrap();
/// assert_eq!(client.config.url, "mem://");
/// ```
pub struct ResolverContext<'a> {
    resolver: &'a dyn ResolverCore,
}

impl<'a> ResolverContext<'a> {
    pub(crate) fn new<T>(resolver: &'a T) -> Self
    where
        T: ResolverCore,
    {
        Self { resolver }
    }
}

impl<'a> ResolverCore for ResolverContext<'a> {
    fn resolve_any(&self, key: &ServiceKey) -> DiResult<AnyArc> {
        self.resolver.resolve_any(key)
    }

    fn infrastructure(&self) -> Option<ServiceKey> {
        self.resolver.infrastructure()
    }

    fn contains(&self, key: &ServiceKey) -> bool {
        self.resolver.contains(key)
    }
}

impl ResolverCore for ServiceRegistry {
    fn resolve_any(&self, key: &ServiceKey) -> DiResult<AnyArc> {
        let guard = DepthGuard::enter();
        let result = self.resolve_descriptor(key);

        if let Err(err) = &result {
            if guard.is_top_level() {
                warn!(capability = %key, error = %err, "failed to resolve service");
            }
        }
        result
    }

    fn infrastructure(&self) -> Option<ServiceKey> {
        self.options().infrastructure
    }

    fn contains(&self, key: &ServiceKey) -> bool {
        self.descriptor_for(key).is_some()
    }
}

impl ServiceRegistry {
    fn resolve_descriptor(&self, key: &ServiceKey) -> DiResult<AnyArc> {
        let Some(descriptor) = self.descriptor_for(key) else {
            return Err(DiError::NotRegistered(key.display_name()));
        };

        trace!(
            capability = %key,
            implementation = descriptor.implementation(),
            lifetime = %descriptor.lifetime(),
            "resolving service"
        );

        let ctx = ResolverContext::new(self);
        descriptor.instantiate(&ctx)
    }
}

/// Builds `I` by the construction rule and erases it as capability `C`.
pub(crate) fn construct_injected<C, I>(ctx: &ResolverContext<'_>) -> DiResult<AnyArc>
where
    C: ?Sized + Send + Sync + 'static,
    I: Injectable + Implements<C>,
{
    let resolved = resolve_dependencies::<I>(ctx)?;
    let mut deps = Dependencies::new::<I>(resolved);
    let instance = I::construct(&mut deps)
        .map_err(|err| DiError::from_factory(type_name::<C>(), err))?;
    let service = <I as Implements<C>>::into_service(Arc::new(instance));
    let erased: AnyArc = Arc::new(service);
    Ok(erased)
}

/// Applies the dependency rule for `I`: none, or exactly the infrastructure capability.
fn resolve_dependencies<I: Injectable>(ctx: &ResolverContext<'_>) -> DiResult<Vec<(ServiceKey, AnyArc)>> {
    match I::dependencies().as_slice() {
        [] => Ok(Vec::new()),
        [only] if ctx.infrastructure() == Some(*only) => {
            let instance = ctx.resolve_any(only)?;
            Ok(vec![(*only, instance)])
        }
        _ => Err(DiError::UnsatisfiableDependency(type_name::<I>())),
    }
}
