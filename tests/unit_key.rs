/// Unit tests for ServiceKey

use ioc_container::{key_of, ServiceKey};
use std::collections::{BTreeSet, HashSet};

trait Store: Send + Sync {}
trait Clock: Send + Sync {}

#[test]
fn test_key_identity_follows_type() {
    assert_eq!(key_of::<dyn Store>(), ServiceKey::of::<dyn Store>());
    assert_ne!(key_of::<dyn Store>(), key_of::<dyn Clock>());
    assert_ne!(key_of::<String>(), key_of::<&'static str>());
}

#[test]
fn test_key_display_uses_type_name() {
    let key = key_of::<dyn Store>();
    assert_eq!(key.display_name(), std::any::type_name::<dyn Store>());
    assert_eq!(key.to_string(), key.display_name());
    assert!(format!("{key:?}").starts_with("ServiceKey("));
}

#[test]
fn test_key_type_id() {
    assert_eq!(
        key_of::<String>().type_id(),
        std::any::TypeId::of::<String>()
    );
}

#[test]
fn test_keys_hash_and_order_consistently() {
    let hashed: HashSet<_> = [key_of::<dyn Store>(), key_of::<dyn Store>(), key_of::<dyn Clock>()]
        .into_iter()
        .collect();
    assert_eq!(hashed.len(), 2);

    let ordered: BTreeSet<_> = [key_of::<dyn Store>(), key_of::<dyn Clock>(), key_of::<dyn Store>()]
        .into_iter()
        .collect();
    assert_eq!(ordered.len(), 2);
}
