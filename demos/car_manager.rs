//! Wires the car inventory inside a container scope and shows both services.
//!
//! Run with `RUST_LOG=debug cargo run --example car_manager` to see the
//! container's own events.

use ioc_container::fixtures::car::{CarManager, CarModule, CarRepository};
use ioc_container::fixtures::store::DataStore;
use ioc_container::{ContainerScope, DiResult, Resolver, ServiceRegistry};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> DiResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut registry = ServiceRegistry::new();
    {
        let scope = ContainerScope::enter(&mut registry, CarModule);

        let repository = scope.resolve::<dyn CarRepository>()?;
        repository.show();

        let manager = scope.resolve::<dyn CarManager>()?;
        manager.show();

        let store = scope.resolve::<dyn DataStore>()?;
        info!(connections = store.connection_count(), "car demo finished");
    }

    info!(services = registry.len(), "scope closed");
    Ok(())
}
