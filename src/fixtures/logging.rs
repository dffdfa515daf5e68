//! Message log services.

use std::sync::Arc;

use tracing::info;

use crate::fixtures::store::{DataStore, Database};
use crate::{implements, key_of, Dependencies, Injectable, Lifetime, ServiceKey, ServiceModule, ServiceRegistry};

pub trait Logger: Send + Sync {
    fn log(&self, message: &str);
}

pub trait LogManager: Send + Sync {
    fn log_message(&self, message: &str);
}

/// Writes every message through to the store.
pub struct LoggerImpl {
    store: Arc<dyn DataStore>,
}

impl Logger for LoggerImpl {
    fn log(&self, message: &str) {
        info!(message, "logging message");
        self.store.connect();
    }
}

impl Injectable for LoggerImpl {
    fn dependencies() -> Vec<ServiceKey> {
        vec![key_of::<dyn DataStore>()]
    }

    fn construct(deps: &mut Dependencies) -> anyhow::Result<Self> {
        Ok(Self {
            store: deps.take::<dyn DataStore>()?,
        })
    }
}

implements!(LoggerImpl => dyn Logger);

pub struct LogManagerImpl {
    store: Arc<dyn DataStore>,
}

impl LogManager for LogManagerImpl {
    fn log_message(&self, message: &str) {
        info!(message, "log manager processing message");
        self.store.connect();
    }
}

impl Injectable for LogManagerImpl {
    fn dependencies() -> Vec<ServiceKey> {
        vec![key_of::<dyn DataStore>()]
    }

    fn construct(deps: &mut Dependencies) -> anyhow::Result<Self> {
        Ok(Self {
            store: deps.take::<dyn DataStore>()?,
        })
    }
}

implements!(LogManagerImpl => dyn LogManager);

/// Singleton [`Database`] plus transient logger and log manager.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingModule;

impl ServiceModule for LoggingModule {
    fn register_services(self, registry: &mut ServiceRegistry) {
        registry
            .designate_infrastructure::<dyn DataStore>()
            .register::<dyn DataStore, Database>(Lifetime::Singleton)
            .register_with_dependencies::<dyn Logger, LoggerImpl>()
            .register_with_dependencies::<dyn LogManager, LogManagerImpl>();
    }
}
