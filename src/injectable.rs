//! Declarative constructor injection.

use std::any::type_name;
use std::sync::Arc;

use crate::descriptor::AnyArc;
use crate::error::{DiError, DiResult};
use crate::key::ServiceKey;
use crate::traits::resolver::downcast;

/// An implementation the container may build on its own.
///
/// Opting in is explicit: a type is never injected just because it happens to
/// have a compatible constructor. The declared list drives the construction
/// rule:
///
/// * no dependencies - `construct` is called directly;
/// * exactly the registry's infrastructure capability - it is resolved first
///   and handed to `construct`;
/// * anything else - resolution fails with `UnsatisfiableDependency`.
///
/// # Examples
///
/// ```
/// use ioc_container::{implements, key_of, Dependencies, Injectable, Lifetime, Resolver, ServiceKey, ServiceRegistry};
/// use std::sync::Arc;
///
/// trait Store: Send + Sync {
///     fn name(&self) -> &str;
/// }
///
/// #[derive(Default)]
/// struct MemoryStore;
/// impl Store for MemoryStore {
///     fn name(&self) -> &str { "memory" }
/// }
/// implements!(MemoryStore => dyn Store);
///
/// struct Report {
///     store: Arc<dyn Store>,
/// }
///
/// impl Injectable for Report {
///     fn dependencies() -> Vec<ServiceKey> {
///         vec![key_of::<dyn Store>()]
///     }
///
///     fn construct(deps: &mut Dependencies) -> anyhow::Result<Self> {
///         Ok(Report { store: deps.take::<dyn Store>()? })
///     }
/// }
///
/// let mut registry = ServiceRegistry::new();
/// registry
///     .designate_infrastructure::<dyn Store>()
///     .register::<dyn Store, MemoryStore>(Lifetime::Singleton)
///     .register_with_dependencies::<Report, Report>();
///
/// let report = registry.resolve::<Report>().unwrap();
/// assert_eq!(report.store.name(), "memory");
/// ```
pub trait Injectable: Sized + Send + Sync + 'static {
    /// Capabilities this type needs at construction, in declaration order.
    fn dependencies() -> Vec<ServiceKey> {
        Vec::new()
    }

    /// Builds the instance from its resolved dependencies.
    ///
    /// Container errors raised here (for instance by `?` on
    /// [`Dependencies::take`]) reach the caller of `resolve` unchanged; any
    /// other error is reported as `ConstructionFailed`.
    fn construct(deps: &mut Dependencies) -> anyhow::Result<Self>;
}

/// Dependencies resolved for one construction.
pub struct Dependencies {
    owner: &'static str,
    resolved: Vec<(ServiceKey, AnyArc)>,
}

impl Dependencies {
    pub(crate) fn new<I: 'static>(resolved: Vec<(ServiceKey, AnyArc)>) -> Self {
        Self {
            owner: type_name::<I>(),
            resolved,
        }
    }

    /// Takes the resolved instance of capability `C`.
    ///
    /// # Errors
    ///
    /// `NullDependency` when `C` was not declared (or was already taken), and
    /// `TypeMismatch` if the stored instance is not an `Arc<C>`.
    pub fn take<C: ?Sized + Send + Sync + 'static>(&mut self) -> DiResult<Arc<C>> {
        let key = ServiceKey::of::<C>();
        let Some(pos) = self.resolved.iter().position(|(k, _)| *k == key) else {
            return Err(DiError::NullDependency {
                service: self.owner,
                dependency: key.display_name(),
            });
        };
        let (_, instance) = self.resolved.swap_remove(pos);
        downcast::<C>(instance)
    }

    /// Number of resolved dependencies not yet taken.
    pub fn len(&self) -> usize {
        self.resolved.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resolved.is_empty()
    }
}
