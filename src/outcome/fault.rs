//! Faults captured as data.
//!
//! A [`Fault`] is what remains of a failed computation once it has been
//! caught at the [`try_catch`](super::try_catch) boundary: a human-readable
//! message, the name of the type that produced it, and an optional cause
//! chain. Faults are cheap to clone and are never raised again by this crate.

use std::any::Any;
use std::error::Error;
use std::fmt;
use std::sync::Arc;

/// A captured error or panic, carried as a value.
///
/// # Examples
///
/// ```rust
/// use outcomes::outcome::Fault;
///
/// let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing file");
/// let fault = Fault::from_error(io_error);
/// assert_eq!(fault.message(), "missing file");
///
/// let wrapped = fault.wrap("loading configuration");
/// assert_eq!(wrapped.root_cause().message(), "missing file");
/// ```
#[derive(Clone)]
pub struct Fault {
    message: String,
    type_name: &'static str,
    cause: Option<Arc<dyn Error + Send + Sync + 'static>>,
}

impl Fault {
    /// Creates a fault from a message alone.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            type_name: "Fault",
            cause: None,
        }
    }

    /// Captures an error value.
    ///
    /// The fault's message is the error's `Display` output and the error is
    /// kept as the cause. Passing a `Fault` returns it unchanged rather than
    /// nesting it.
    #[must_use]
    pub fn from_error<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        let boxed: Box<dyn Error + Send + Sync + 'static> = Box::new(error);
        match boxed.downcast::<Self>() {
            Ok(fault) => *fault,
            Err(boxed) => Self {
                message: boxed.to_string(),
                type_name: std::any::type_name::<E>(),
                cause: Some(Arc::from(boxed)),
            },
        }
    }

    /// Captures a panic payload as returned by `std::panic::catch_unwind`.
    ///
    /// A `Fault` raised with `std::panic::panic_any` is returned as is.
    #[must_use]
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let payload = match payload.downcast::<Self>() {
            Ok(fault) => return *fault,
            Err(payload) => payload,
        };
        let message = if let Some(message) = payload.downcast_ref::<&str>() {
            (*message).to_string()
        } else if let Some(message) = payload.downcast_ref::<String>() {
            message.clone()
        } else {
            "Unknown panic".to_string()
        };
        Self {
            message,
            type_name: "panic",
            cause: None,
        }
    }

    /// Wraps this fault in an outer fault with its own message.
    ///
    /// The original fault becomes the cause of the returned one.
    #[must_use]
    pub fn wrap(self, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            type_name: "Fault",
            cause: Some(Arc::new(self)),
        }
    }

    /// Returns the human-readable description of the fault.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the name of the type that originally produced the fault.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Returns the direct cause, if any.
    #[must_use]
    pub fn cause(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    /// Unwraps wrapper faults down to the innermost one.
    ///
    /// Walks both `Fault` wrappers and the `source()` chain of foreign
    /// errors. A fault without a cause is its own root.
    #[must_use]
    pub fn root_cause(&self) -> Self {
        let Some(cause) = self.cause.as_deref() else {
            return self.clone();
        };
        if let Some(inner) = cause.downcast_ref::<Self>() {
            return inner.root_cause();
        }

        let mut innermost: &(dyn Error + 'static) = cause;
        let mut depth = 0_usize;
        while let Some(next) = innermost.source() {
            innermost = next;
            depth += 1;
        }

        if depth == 0 {
            return self.clone();
        }
        innermost.downcast_ref::<Self>().map_or_else(
            || Self {
                message: innermost.to_string(),
                type_name: "source",
                cause: None,
            },
            Self::root_cause,
        )
    }
}

impl fmt::Debug for Fault {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Fault")
            .field("message", &self.message)
            .field("type_name", &self.type_name)
            .field("has_cause", &self.cause.is_some())
            .finish()
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.message)
    }
}

impl Error for Fault {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause.as_deref().map(|cause| cause as &(dyn Error + 'static))
    }
}

/// Faults compare by message and originating type; causes are ignored.
impl PartialEq for Fault {
    fn eq(&self, other: &Self) -> bool {
        self.message == other.message && self.type_name == other.type_name
    }
}

impl Eq for Fault {}

impl From<&str> for Fault {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for Fault {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Outer {
        inner: std::io::Error,
    }

    impl fmt::Display for Outer {
        fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "outer failure")
        }
    }

    impl Error for Outer {
        fn source(&self) -> Option<&(dyn Error + 'static)> {
            Some(&self.inner)
        }
    }

    #[test]
    fn test_from_error_keeps_message_and_type() {
        let fault = Fault::from_error(std::io::Error::other("socket closed"));
        assert_eq!(fault.message(), "socket closed");
        assert!(fault.type_name().ends_with("Error"));
        assert!(fault.cause().is_some());
    }

    #[test]
    fn test_from_error_does_not_nest_faults() {
        let fault = Fault::from_error(Fault::new("plain"));
        assert_eq!(fault.message(), "plain");
        assert!(fault.cause().is_none());
    }

    #[test]
    fn test_from_panic_with_str_and_string() {
        let fault = Fault::from_panic(Box::new("boom"));
        assert_eq!(fault.message(), "boom");
        let fault = Fault::from_panic(Box::new(String::from("owned boom")));
        assert_eq!(fault.message(), "owned boom");
        let fault = Fault::from_panic(Box::new(42_u8));
        assert_eq!(fault.message(), "Unknown panic");
    }

    #[test]
    fn test_root_cause_unwraps_fault_wrappers() {
        let fault = Fault::new("inner").wrap("middle").wrap("outer");
        assert_eq!(fault.message(), "outer");
        assert_eq!(fault.root_cause().message(), "inner");
    }

    #[test]
    fn test_root_cause_walks_foreign_sources() {
        let outer = Outer {
            inner: std::io::Error::other("disk gone"),
        };
        let fault = Fault::from_error(outer);
        assert_eq!(fault.message(), "outer failure");
        assert_eq!(fault.root_cause().message(), "disk gone");
    }

    #[test]
    fn test_root_cause_of_leaf_is_itself() {
        let fault = Fault::new("leaf");
        assert_eq!(fault.root_cause(), fault);
    }

    #[test]
    fn test_source_exposes_cause() {
        let fault = Fault::new("inner").wrap("outer");
        let source = fault.source().map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("inner"));
    }
}
