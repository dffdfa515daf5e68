//! # ioc-container
//!
//! A small inversion-of-control container: capabilities (usually trait
//! objects) are bound to implementations, and consumers resolve capabilities
//! without naming the concrete types behind them.
//!
//! ## Features
//!
//! - **Two lifetimes**: `Singleton` (one shared instance) and `Transient`
//!   (a fresh instance per resolve)
//! - **Compile-time binding checks**: an implementation must implement
//!   [`Implements<C>`] to be registered for capability `C`
//! - **Declarative constructor injection** through [`Injectable`]
//! - **Scoped cleanup**: [`ContainerScope`] clears the registry on drop, even
//!   on early return or panic
//! - **Thread-safe resolution** once configuration is finished
//!
//! ## Quick Start
//!
//! ```rust
//! use ioc_container::fixtures::store::{DataStore, Database};
//! use ioc_container::{Lifetime, Resolver, ServiceRegistry};
//! use std::sync::Arc;
//!
//! let mut registry = ServiceRegistry::new();
//! registry.register::<dyn DataStore, Database>(Lifetime::Singleton);
//!
//! let a = registry.resolve::<dyn DataStore>().unwrap();
//! let b = registry.resolve::<dyn DataStore>().unwrap();
//! assert!(Arc::ptr_eq(&a, &b));
//!
//! a.connect();
//! assert_eq!(b.connection_count(), 1);
//! ```
//!
//! ## Constructor injection
//!
//! Implementations that need a collaborator declare it. The container injects
//! exactly one well-known capability, designated per registry:
//!
//! ```rust
//! use ioc_container::fixtures::car::{CarManager, CarModule};
//! use ioc_container::fixtures::store::DataStore;
//! use ioc_container::{Resolver, ServiceCollection};
//!
//! let registry = ServiceCollection::new().add_module(CarModule).build();
//!
//! registry.resolve::<dyn CarManager>().unwrap().show();
//! registry.resolve::<dyn CarManager>().unwrap().show();
//! assert_eq!(registry.resolve::<dyn DataStore>().unwrap().connection_count(), 2);
//! ```
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events (registration, resolution, failures,
//! scope boundaries) and never installs a subscriber itself.

mod binding;
mod collection;
mod descriptor;
mod error;
mod injectable;
mod key;
mod lifetime;
mod module;
mod options;
mod registry;
mod resolver;
mod scope;
mod traits;
mod validation;

pub mod fixtures;

pub use binding::Implements;
pub use collection::ServiceCollection;
pub use descriptor::{DescriptorState, ServiceDescriptor, ServiceInfo};
pub use error::{DiError, DiResult};
pub use injectable::{Dependencies, Injectable};
pub use key::{key_of, ServiceKey};
pub use lifetime::Lifetime;
pub use module::ServiceModule;
pub use options::RegistryOptions;
pub use registry::ServiceRegistry;
pub use resolver::ResolverContext;
pub use scope::ContainerScope;
pub use traits::{Resolver, ResolverCore};
pub use validation::{ValidationIssue, ValidationReport};
