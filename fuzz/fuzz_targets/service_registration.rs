#![no_main]

use ioc_container::fixtures::car::{CarManager, CarManagerImpl};
use ioc_container::fixtures::store::{DataStore, Database};
use ioc_container::{Lifetime, Resolver, ServiceRegistry};
use libfuzzer_sys::fuzz_target;
use std::sync::Arc;

// Each byte is one registry operation; the registry must stay consistent
// whatever the sequence.
fuzz_target!(|data: &[u8]| {
    let mut registry = ServiceRegistry::new();

    for &op in data.iter().take(256) {
        match op % 7 {
            0 => {
                registry.register::<dyn DataStore, Database>(Lifetime::Singleton);
            }
            1 => {
                registry.register::<dyn DataStore, Database>(Lifetime::Transient);
            }
            2 => {
                registry.designate_infrastructure::<dyn DataStore>();
            }
            3 => {
                registry.register_with_dependencies::<dyn CarManager, CarManagerImpl>();
            }
            4 => {
                registry.register_instance(Arc::new(u64::from(op)));
            }
            5 => {
                registry.clear();
                assert!(registry.is_empty());
            }
            _ => {
                let _ = registry.resolve::<dyn CarManager>();
            }
        }
        assert_eq!(registry.len(), registry.services().len());
    }
});
