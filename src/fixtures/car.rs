//! Car inventory services.

use std::sync::Arc;

use tracing::info;

use crate::fixtures::store::{DataStore, Database};
use crate::{implements, key_of, Dependencies, Injectable, Lifetime, ServiceKey, ServiceModule, ServiceRegistry};

pub trait CarRepository: Send + Sync {
    fn show(&self);
}

pub trait CarManager: Send + Sync {
    fn show(&self);
}

pub struct CarRepositoryImpl {
    store: Arc<dyn DataStore>,
}

impl CarRepository for CarRepositoryImpl {
    fn show(&self) {
        info!("car repository ready");
        self.store.connect();
    }
}

impl Injectable for CarRepositoryImpl {
    fn dependencies() -> Vec<ServiceKey> {
        vec![key_of::<dyn DataStore>()]
    }

    fn construct(deps: &mut Dependencies) -> anyhow::Result<Self> {
        Ok(Self {
            store: deps.take::<dyn DataStore>()?,
        })
    }
}

implements!(CarRepositoryImpl => dyn CarRepository);

pub struct CarManagerImpl {
    store: Arc<dyn DataStore>,
}

impl CarManager for CarManagerImpl {
    fn show(&self) {
        info!("car manager ready");
        self.store.connect();
    }
}

impl Injectable for CarManagerImpl {
    fn dependencies() -> Vec<ServiceKey> {
        vec![key_of::<dyn DataStore>()]
    }

    fn construct(deps: &mut Dependencies) -> anyhow::Result<Self> {
        Ok(Self {
            store: deps.take::<dyn DataStore>()?,
        })
    }
}

implements!(CarManagerImpl => dyn CarManager);

/// Singleton [`Database`] plus transient repository and manager.
#[derive(Debug, Default, Clone, Copy)]
pub struct CarModule;

impl ServiceModule for CarModule {
    fn register_services(self, registry: &mut ServiceRegistry) {
        registry
            .designate_infrastructure::<dyn DataStore>()
            .register::<dyn DataStore, Database>(Lifetime::Singleton)
            .register_with_dependencies::<dyn CarRepository, CarRepositoryImpl>()
            .register_with_dependencies::<dyn CarManager, CarManagerImpl>();
    }
}
