//! Builds the logging services with the fluent collection and logs a few messages.

use ioc_container::fixtures::logging::{LogManager, Logger, LoggingModule};
use ioc_container::fixtures::store::DataStore;
use ioc_container::{DiResult, Resolver, ServiceCollection};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> DiResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut registry = ServiceCollection::new().add_module(LoggingModule).build();

    let report = registry.validate();
    info!(%report, "validated configuration");
    registry.warm_up()?;

    let logger = registry.resolve::<dyn Logger>()?;
    logger.log("Hello, world!");

    let manager = registry.resolve::<dyn LogManager>()?;
    manager.log_message("Processing log message");

    let store = registry.resolve::<dyn DataStore>()?;
    info!(connections = store.connection_count(), "log demo finished");

    registry.clear();
    Ok(())
}
