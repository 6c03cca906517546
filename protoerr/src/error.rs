use crate::error_code::ErrorCode;
use crate::joined::JoinedError;
use alloc::boxed::Box;
use alloc::string::String;
use core::fmt::{Display, Formatter};

/// A boxed, thread-safe error, as returned by construction functions.
pub type BoxError = Box<dyn core::error::Error + Send + Sync + 'static>;

/// An error carrying a status, a code and a message, built by [`new_error`].
#[derive(Debug)]
pub struct Error {
    status: i32,
    code: i32,
    message: String,
    cause: Option<BoxError>,
}
impl Error {
    /// Creates a new error without a cause.
    pub fn new(status: i32, code: i32, message: impl Into<String>) -> Self {
        Error { status, code, message: message.into(), cause: None }
    }

    /// Attaches the error this one was caused by.
    pub fn with_cause(mut self, cause: BoxError) -> Self {
        self.cause = Some(cause);
        self
    }

    pub fn status(&self) -> i32 {
        self.status
    }

    pub fn code(&self) -> i32 {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn cause(&self) -> Option<&(dyn core::error::Error + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    /// Returns whether this error was caused by a given error code.
    pub fn is_code<T: ErrorCode>(&self, value: T) -> bool {
        self.find_code::<T>() == Some(value)
    }

    /// Returns the first error code of type `T` found among the causes of this error.
    ///
    /// Joined errors are searched in order.
    pub fn find_code<T: ErrorCode>(&self) -> Option<T> {
        let cause: &(dyn core::error::Error + 'static) = self.cause.as_deref()?;
        find_code_in(cause)
    }
}
impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        if self.message.is_empty() {
            write!(f, "error (status {}, code {})", self.status, self.code)
        } else {
            f.write_str(&self.message)
        }
    }
}
impl core::error::Error for Error {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match &self.cause {
            Some(cause) => Some(&**cause as &(dyn core::error::Error + 'static)),
            None => None,
        }
    }
}

fn find_code_in<T: ErrorCode>(error: &(dyn core::error::Error + 'static)) -> Option<T> {
    if let Some(code) = error.downcast_ref::<T>() {
        return Some(*code);
    }
    if let Some(joined) = error.downcast_ref::<JoinedError>() {
        return joined.iter().find_map(|e| find_code_in::<T>(e));
    }
    error.source().and_then(find_code_in::<T>)
}

/// The default construction function referenced by generated code.
///
/// Has the shape every construction function must have:
/// `fn(status: i32, code: i32, message: &str, cause: BoxError) -> BoxError`.
pub fn new_error(status: i32, code: i32, message: &str, cause: BoxError) -> BoxError {
    Box::new(Error::new(status, code, message).with_cause(cause))
}
