//! Error types for the container.

use std::sync::Arc;
use thiserror::Error;

/// Container errors.
///
/// Every variant names the capability (or implementation) involved so callers
/// can tell a missing binding from a failed construction without parsing
/// strings.
///
/// # Examples
///
/// ```rust
/// use ioc_container::{DiError, Resolver, ServiceRegistry};
///
/// let registry = ServiceRegistry::new();
/// match registry.resolve::<String>() {
///     Err(DiError::NotRegistered(name)) => assert_eq!(name, "alloc::string::String"),
///     _ => unreachable!(),
/// }
/// ```
#[derive(Error, Debug, Clone)]
pub enum DiError {
    /// No descriptor is bound to the requested capability.
    #[error("service not registered: {0}")]
    NotRegistered(&'static str),
    /// The bound factory returned an error while building an instance.
    #[error("failed to construct {service}: {cause}")]
    ConstructionFailed {
        service: &'static str,
        cause: Arc<anyhow::Error>,
    },
    /// The implementation declares dependencies the construction rule cannot supply.
    #[error("cannot satisfy dependencies of {0}")]
    UnsatisfiableDependency(&'static str),
    /// A constructor asked for a dependency that was not supplied to it.
    #[error("{service} received no instance for dependency {dependency}")]
    NullDependency {
        service: &'static str,
        dependency: &'static str,
    },
    /// A stored instance could not be cast back to the requested capability.
    #[error("type mismatch for: {0}")]
    TypeMismatch(&'static str),
}

impl DiError {
    /// The underlying factory error, for `ConstructionFailed`.
    pub fn cause(&self) -> Option<&anyhow::Error> {
        match self {
            DiError::ConstructionFailed { cause, .. } => Some(&**cause),
            _ => None,
        }
    }

    /// Wraps a factory error for `service`.
    ///
    /// Container errors raised inside the factory (a nested resolve that failed,
    /// a missing dependency) pass through unchanged.
    pub(crate) fn from_factory(service: &'static str, err: anyhow::Error) -> Self {
        match err.downcast::<DiError>() {
            Ok(err) => err,
            Err(err) => DiError::ConstructionFailed {
                service,
                cause: Arc::new(err),
            },
        }
    }
}

/// Result type for container operations.
pub type DiResult<T> = Result<T, DiError>;
