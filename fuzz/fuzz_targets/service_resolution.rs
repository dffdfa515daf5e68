#![no_main]

use ioc_container::fixtures::store::{DataStore, Database};
use ioc_container::{DiError, Lifetime, Resolver, ServiceRegistry};
use libfuzzer_sys::fuzz_target;
use std::sync::Arc;

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    let lifetime = if data[0] % 2 == 0 {
        Lifetime::Singleton
    } else {
        Lifetime::Transient
    };
    let fail = data[1] % 3 == 0;

    let mut registry = ServiceRegistry::new();
    registry.register_factory::<dyn DataStore, _>(lifetime, move |_| {
        if fail {
            anyhow::bail!("factory refused");
        }
        Ok(Arc::new(Database::default()))
    });

    let mut first: Option<Arc<dyn DataStore>> = None;
    for _ in &data[2..] {
        match registry.resolve::<dyn DataStore>() {
            Ok(store) => {
                assert!(!fail);
                if let Some(prev) = &first {
                    assert_eq!(Arc::ptr_eq(prev, &store), lifetime == Lifetime::Singleton);
                } else {
                    first = Some(store);
                }
            }
            Err(DiError::ConstructionFailed { .. }) => assert!(fail),
            Err(other) => panic!("unexpected error: {other}"),
        }
    }
});
