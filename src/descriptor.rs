//! Service descriptors: the registry's record of how to build and cache a capability.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
#[cfg(feature = "serde")]
use serde::Serialize;

use crate::error::DiResult;
use crate::key::ServiceKey;
use crate::lifetime::Lifetime;
use crate::resolver::ResolverContext;

// Type-erased handle; always holds an `Arc<C>` for the descriptor's capability `C`.
pub(crate) type AnyArc = Arc<dyn Any + Send + Sync>;

pub(crate) type Factory = Box<dyn for<'a> Fn(&ResolverContext<'a>) -> DiResult<AnyArc> + Send + Sync>;

/// Lifecycle state of a descriptor.
///
/// Transient descriptors never leave `Registered`. A descriptor removed by
/// `clear()` or replaced by a new registration is dropped; there is no way back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum DescriptorState {
    /// Bound, no cached instance.
    Registered,
    /// Singleton constructed and cached.
    Instantiated,
}

/// Registration record for one capability.
///
/// Holds the factory, the lifetime policy and, for singletons, the slot the
/// constructed instance is cached in. The registry owns descriptors; callers
/// only get to inspect them.
pub struct ServiceDescriptor {
    key: ServiceKey,
    implementation: &'static str,
    lifetime: Lifetime,
    dependencies: Option<Vec<ServiceKey>>,
    factory: Factory,
    cached: Option<Mutex<Option<AnyArc>>>,
}

impl ServiceDescriptor {
    pub(crate) fn new(
        key: ServiceKey,
        implementation: &'static str,
        lifetime: Lifetime,
        factory: Factory,
    ) -> Self {
        let cached = match lifetime {
            Lifetime::Singleton => Some(Mutex::new(None)),
            Lifetime::Transient => None,
        };

        Self {
            key,
            implementation,
            lifetime,
            dependencies: None,
            factory,
            cached,
        }
    }

    /// Marks the descriptor as built by the automatic construction rule.
    pub(crate) fn with_dependencies(mut self, dependencies: Vec<ServiceKey>) -> Self {
        self.dependencies = Some(dependencies);
        self
    }

    /// Seeds the singleton slot with an already-built instance.
    pub(crate) fn with_instance(self, instance: AnyArc) -> Self {
        if let Some(slot) = &self.cached {
            *slot.lock() = Some(instance);
        }
        self
    }

    /// The capability this descriptor is bound to.
    pub fn key(&self) -> ServiceKey {
        self.key
    }

    /// Type name of the implementation behind the capability.
    pub fn implementation(&self) -> &'static str {
        self.implementation
    }

    pub fn lifetime(&self) -> Lifetime {
        self.lifetime
    }

    /// Dependencies declared by the implementation.
    ///
    /// Empty for caller-supplied factories, whose dependencies are opaque.
    pub fn dependencies(&self) -> &[ServiceKey] {
        self.dependencies.as_deref().unwrap_or(&[])
    }

    /// True when the factory was synthesized from the construction rule.
    pub fn is_injected(&self) -> bool {
        self.dependencies.is_some()
    }

    pub fn state(&self) -> DescriptorState {
        match &self.cached {
            Some(slot) if slot.lock().is_some() => DescriptorState::Instantiated,
            _ => DescriptorState::Registered,
        }
    }

    /// Returns the cached singleton, or runs the factory.
    ///
    /// The slot lock is never held while the factory runs: the factory may
    /// resolve other capabilities. A failed factory leaves the slot untouched.
    pub(crate) fn instantiate(&self, ctx: &ResolverContext<'_>) -> DiResult<AnyArc> {
        let Some(slot) = &self.cached else {
            return (self.factory)(ctx);
        };

        if let Some(instance) = slot.lock().as_ref() {
            return Ok(instance.clone());
        }

        let instance = (self.factory)(ctx)?;

        // Another caller may have filled the slot meanwhile; first writer wins.
        let mut guard = slot.lock();
        Ok(guard.get_or_insert(instance).clone())
    }

    /// Serialisable snapshot for diagnostics.
    pub fn info(&self) -> ServiceInfo {
        ServiceInfo {
            capability: self.key.display_name(),
            implementation: self.implementation,
            lifetime: self.lifetime,
            state: self.state(),
            dependencies: self.dependencies().iter().map(ServiceKey::display_name).collect(),
        }
    }
}

impl fmt::Debug for ServiceDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceDescriptor")
            .field("key", &self.key)
            .field("implementation", &self.implementation)
            .field("lifetime", &self.lifetime)
            .field("dependencies", &self.dependencies)
            .field("state", &self.state())
            .finish()
    }
}

/// Point-in-time view of a descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ServiceInfo {
    pub capability: &'static str,
    pub implementation: &'static str,
    pub lifetime: Lifetime,
    pub state: DescriptorState,
    pub dependencies: Vec<&'static str>,
}
