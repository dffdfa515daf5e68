//! Sample services used by the demos, doc examples and tests.
//!
//! Two small applications share one piece of infrastructure, a
//! [`DataStore`](store::DataStore): a car inventory and a message log. Every
//! service that needs the store declares it through
//! [`Injectable`](crate::Injectable), and each application ships a
//! [`ServiceModule`](crate::ServiceModule) wiring it up.

pub mod car;
pub mod logging;
pub mod store;
