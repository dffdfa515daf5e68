/// Unit tests for DiError and DiResult types

use ioc_container::{DiError, DiResult};
use std::error::Error;
use std::sync::Arc;

#[test]
fn test_error_display_not_registered() {
    let error = DiError::NotRegistered("dyn app::Store");
    assert_eq!(error.to_string(), "service not registered: dyn app::Store");
}

#[test]
fn test_error_display_construction_failed() {
    let error = DiError::ConstructionFailed {
        service: "dyn app::Store",
        cause: Arc::new(anyhow::anyhow!("connection refused")),
    };
    assert_eq!(
        error.to_string(),
        "failed to construct dyn app::Store: connection refused"
    );
    assert_eq!(error.cause().unwrap().to_string(), "connection refused");
}

#[test]
fn test_error_display_unsatisfiable() {
    let error = DiError::UnsatisfiableDependency("app::Report");
    assert_eq!(error.to_string(), "cannot satisfy dependencies of app::Report");
    assert!(error.cause().is_none());
}

#[test]
fn test_error_display_null_dependency() {
    let error = DiError::NullDependency {
        service: "app::Report",
        dependency: "dyn app::Store",
    };
    assert_eq!(
        error.to_string(),
        "app::Report received no instance for dependency dyn app::Store"
    );
}

#[test]
fn test_error_display_type_mismatch() {
    let error = DiError::TypeMismatch("alloc::string::String");
    assert_eq!(error.to_string(), "type mismatch for: alloc::string::String");
}

#[test]
fn test_error_is_std_error_without_source() {
    let error = DiError::NotRegistered("Svc");
    let dyn_error: &dyn Error = &error;
    assert!(dyn_error.source().is_none());
}

#[test]
fn test_error_clone_shares_cause() {
    let error = DiError::ConstructionFailed {
        service: "Svc",
        cause: Arc::new(anyhow::anyhow!("nope")),
    };
    let cloned = error.clone();
    match (&error, &cloned) {
        (
            DiError::ConstructionFailed { cause: a, .. },
            DiError::ConstructionFailed { cause: b, .. },
        ) => assert!(Arc::ptr_eq(a, b)),
        _ => unreachable!(),
    }
}

#[test]
fn test_error_round_trips_through_anyhow() {
    fn inner() -> DiResult<()> {
        Err(DiError::NotRegistered("Svc"))
    }
    fn outer() -> anyhow::Result<()> {
        inner()?;
        Ok(())
    }

    let err = outer().unwrap_err();
    assert!(matches!(
        err.downcast_ref::<DiError>(),
        Some(DiError::NotRegistered("Svc"))
    ));
}
