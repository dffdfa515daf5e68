//! Capability bindings between implementations and the capabilities they satisfy.

use std::sync::Arc;

/// Declares that `Self` can stand in for the capability `C`.
///
/// This is the compile-time half of a registration: `register::<C, I>` only
/// accepts an implementation `I` that implements `Implements<C>`, so a binding
/// between unrelated types is rejected before anything runs. Every concrete type
/// implements it for itself; trait-object capabilities are bound with the
/// [`implements!`](crate::implements) macro.
pub trait Implements<C: ?Sized>: Send + Sync + 'static {
    /// Converts a shared implementation into a shared capability handle.
    fn into_service(self: Arc<Self>) -> Arc<C>;
}

impl<T: Send + Sync + 'static> Implements<T> for T {
    #[inline(always)]
    fn into_service(self: Arc<Self>) -> Arc<T> {
        self
    }
}

/// Binds an implementation type to one or more trait-object capabilities.
///
/// # Examples
///
/// ```rust
/// use ioc_container::{implements, Implements};
/// use std::sync::Arc;
///
/// trait Greeter: Send + Sync {
///     fn greet(&self) -> String;
/// }
///
/// struct English;
/// impl Greeter for English {
///     fn greet(&self) -> String { "hello".into() }
/// }
///
/// implements!(English => dyn Greeter);
///
/// let greeter = Implements::<dyn Greeter>::into_service(Arc::new(English));
/// assert_eq!(greeter.greet(), "hello");
/// ```
#[macro_export]
macro_rules! implements {
    ($implementation:ty => $($capability:ty),+ $(,)?) => {
        $(
            impl $crate::Implements<$capability> for $implementation {
                #[inline(always)]
                fn into_service(self: ::std::sync::Arc<Self>) -> ::std::sync::Arc<$capability> {
                    self
                }
            }
        )+
    };
}
