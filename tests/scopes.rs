/// Container scope tests
///
/// A scope registers a module on entry and must leave the registry empty on
/// every exit path.

use ioc_container::fixtures::car::{CarManager, CarModule, CarRepository};
use ioc_container::fixtures::logging::{LogManager, Logger, LoggingModule};
use ioc_container::fixtures::store::{DataStore, Database};
use ioc_container::{ContainerScope, DiResult, Lifetime, Resolver, ServiceModule, ServiceRegistry};
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

#[test]
fn test_scope_registers_module_and_clears_on_exit() {
    let mut registry = ServiceRegistry::new();
    {
        let scope = ContainerScope::enter(&mut registry, CarModule);
        assert_eq!(scope.len(), 3);
        assert!(scope.is_registered::<dyn CarRepository>());

        scope.resolve::<dyn CarManager>().unwrap().show();
        scope.resolve::<dyn CarRepository>().unwrap().show();
        assert_eq!(scope.resolve::<dyn DataStore>().unwrap().connection_count(), 2);
    }
    assert!(registry.is_empty());
    assert!(!registry.is_registered::<dyn CarManager>());
}

#[test]
fn test_scope_clears_on_early_return() {
    fn run(registry: &mut ServiceRegistry) -> DiResult<()> {
        let scope = ContainerScope::enter(registry, CarModule);
        scope.resolve::<dyn CarManager>()?.show();
        // Not part of CarModule; fails and returns early.
        scope.resolve::<dyn Logger>()?;
        Ok(())
    }

    let mut registry = ServiceRegistry::new();
    assert!(run(&mut registry).is_err());
    assert!(registry.is_empty());
}

#[test]
fn test_scope_clears_on_panic() {
    let mut registry = ServiceRegistry::new();

    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        let scope = ContainerScope::enter(&mut registry, LoggingModule);
        scope.resolve::<dyn Logger>().unwrap().log("before the panic");
        panic!("boom");
    }));

    assert!(result.is_err());
    assert!(registry.is_empty());
}

#[test]
fn test_handles_survive_scope_exit() {
    let mut registry = ServiceRegistry::new();
    let store = {
        let scope = ContainerScope::enter(&mut registry, CarModule);
        let manager = scope.resolve::<dyn CarManager>().unwrap();
        manager.show();
        scope.resolve::<dyn DataStore>().unwrap()
    };

    assert!(registry.is_empty());
    assert_eq!(Arc::strong_count(&store), 1);
    assert_eq!(store.connection_count(), 1);
}

#[test]
fn test_scopes_are_reusable_in_sequence() {
    let mut registry = ServiceRegistry::new();

    let first = {
        let scope = ContainerScope::enter(&mut registry, LoggingModule);
        scope.resolve::<dyn LogManager>().unwrap().log_message("first");
        scope.resolve::<dyn DataStore>().unwrap()
    };
    let second = {
        let scope = ContainerScope::enter(&mut registry, LoggingModule);
        scope.resolve::<dyn DataStore>().unwrap()
    };

    assert!(!Arc::ptr_eq(&first, &second));
    assert_eq!(first.connection_count(), 1);
    assert_eq!(second.connection_count(), 0);
    assert!(registry.is_empty());
}

#[test]
fn test_scope_keeps_registry_options() {
    let mut registry = ServiceRegistry::new();
    {
        let _scope = ContainerScope::enter(&mut registry, CarModule);
    }
    assert!(registry.options().infrastructure.is_some());
}

#[test]
fn test_scope_clears_when_module_panics_during_entry() {
    #[derive(Debug)]
    struct Exploding;

    impl Default for Exploding {
        fn default() -> Self {
            panic!("cannot build Exploding");
        }
    }

    struct HalfBuiltModule;

    impl ServiceModule for HalfBuiltModule {
        fn register_services(self, registry: &mut ServiceRegistry) {
            registry
                .register::<dyn DataStore, Database>(Lifetime::Singleton)
                .register::<Exploding, Exploding>(Lifetime::Singleton);
        }
    }

    let mut registry = ServiceRegistry::new();
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        let _scope = ContainerScope::enter(&mut registry, HalfBuiltModule);
    }));

    assert!(result.is_err());
    assert!(registry.is_empty());
    assert!(!registry.is_registered::<dyn DataStore>());
}
