/// Registration logging tests
///
/// Captures formatted `tracing` output and checks what the
/// `log_registrations` option lets through.

use ioc_container::fixtures::store::{DataStore, Database};
use ioc_container::{Lifetime, RegistryOptions, ServiceRegistry};
use std::io;
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
struct CapturedLog(Arc<Mutex<Vec<u8>>>);

impl CapturedLog {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for CapturedLog {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

// Registers the store twice so both the registration and the replacement
// events would fire.
fn register_twice(options: RegistryOptions) -> String {
    let log = CapturedLog::default();
    let writer = log.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let mut registry = ServiceRegistry::with_options(options);
        registry
            .register::<dyn DataStore, Database>(Lifetime::Singleton)
            .register::<dyn DataStore, Database>(Lifetime::Transient);
        registry.clear();
    });
    log.contents()
}

#[test]
fn test_registrations_are_logged_by_default() {
    let output = register_twice(RegistryOptions::new());

    assert!(output.contains("registered service"));
    assert!(output.contains("replaced previous registration"));
    assert!(output.contains("registry cleared"));
}

#[test]
fn test_disabled_registration_logging_suppresses_both_events() {
    let output = register_twice(RegistryOptions::new().log_registrations(false));

    assert!(!output.contains("registered service"));
    assert!(!output.contains("replaced previous registration"));
    // Lifecycle events are not registration events.
    assert!(output.contains("registry cleared"));
}
