//! Core traits for resolving capabilities.

pub(crate) mod resolver;

pub use resolver::{Resolver, ResolverCore};
