//! Configuration checks and singleton warm-up.
//!
//! Validation inspects declared dependencies only, so it never runs a factory.
//! Warm-up is the opposite: it constructs every singleton up front so that
//! construction failures surface at startup instead of at first use.

use std::fmt;

use tracing::debug;

use crate::error::DiResult;
use crate::key::ServiceKey;
use crate::lifetime::Lifetime;
use crate::registry::ServiceRegistry;
use crate::traits::ResolverCore;

/// A configuration problem found by [`ServiceRegistry::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    /// The declared infrastructure dependency has no binding.
    MissingDependency {
        service: &'static str,
        dependency: &'static str,
    },
    /// The declared dependency list can never satisfy the construction rule.
    UnsatisfiableDependency { service: &'static str },
}

impl ValidationIssue {
    /// Capability whose binding has the problem.
    pub fn service(&self) -> &'static str {
        match self {
            Self::MissingDependency { service, .. } => service,
            Self::UnsatisfiableDependency { service } => service,
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingDependency { service, dependency } => {
                write!(f, "{service} depends on unregistered {dependency}")
            }
            Self::UnsatisfiableDependency { service } => {
                write!(f, "dependencies of {service} cannot be satisfied")
            }
        }
    }
}

/// Outcome of [`ServiceRegistry::validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    pub fn into_issues(self) -> Vec<ValidationIssue> {
        self.issues
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            return f.write_str("no issues");
        }
        for (i, issue) in self.issues.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{issue}")?;
        }
        Ok(())
    }
}

impl ServiceRegistry {
    /// Checks every binding built by the construction rule against the
    /// current registrations.
    ///
    /// Caller-supplied factories are opaque and always pass. Issues are
    /// ordered by capability name.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ioc_container::fixtures::car::{CarRepository, CarRepositoryImpl};
    /// use ioc_container::fixtures::store::DataStore;
    /// use ioc_container::{ServiceRegistry, ValidationIssue};
    ///
    /// let mut registry = ServiceRegistry::new();
    /// registry
    ///     .designate_infrastructure::<dyn DataStore>()
    ///     .register_with_dependencies::<dyn CarRepository, CarRepositoryImpl>();
    ///
    /// let report = registry.validate();
    /// assert!(!report.is_valid());
    /// assert!(matches!(report.issues()[0], ValidationIssue::MissingDependency { .. }));
    /// ```
    pub fn validate(&self) -> ValidationReport {
        let infrastructure = self.options().infrastructure;
        let mut issues = Vec::new();

        for descriptor in self.descriptors().filter(|d| d.is_injected()) {
            let service = descriptor.key().display_name();
            match descriptor.dependencies() {
                [] => {}
                [only] if infrastructure == Some(*only) => {
                    if !self.contains(only) {
                        issues.push(ValidationIssue::MissingDependency {
                            service,
                            dependency: only.display_name(),
                        });
                    }
                }
                _ => issues.push(ValidationIssue::UnsatisfiableDependency { service }),
            }
        }

        issues.sort_by(|a, b| a.service().cmp(b.service()));
        ValidationReport { issues }
    }

    /// Constructs and caches every singleton binding.
    ///
    /// Returns how many singletons are now instantiated. Stops at the first
    /// failure; singletons built before it stay cached.
    pub fn warm_up(&self) -> DiResult<usize> {
        let mut keys: Vec<ServiceKey> = self
            .descriptors()
            .filter(|d| d.lifetime() == Lifetime::Singleton)
            .map(|d| d.key())
            .collect();
        keys.sort_by(|a, b| a.display_name().cmp(b.display_name()));

        for key in &keys {
            self.resolve_any(key)?;
        }

        debug!(singletons = keys.len(), "warmed up singletons");
        Ok(keys.len())
    }
}
