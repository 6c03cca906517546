//! Combining an error code with other errors.

use crate::error::BoxError;
use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt::{Display, Formatter};

/// Where the receiving error code is placed relative to the errors it is joined with.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum JoinOrder {
    /// The error code comes first.
    #[default]
    Prepend,
    /// The error code comes after every supplied error.
    Append,
}
impl JoinOrder {
    /// Returns the name used for this order in generator parameters.
    pub fn name(self) -> &'static str {
        match self {
            JoinOrder::Prepend => "prepend",
            JoinOrder::Append => "append",
        }
    }

    /// Parses a name returned by [`JoinOrder::name`].
    pub fn from_name(name: &str) -> Option<JoinOrder> {
        match name {
            "prepend" => Some(JoinOrder::Prepend),
            "append" => Some(JoinOrder::Append),
            _ => None,
        }
    }
}

/// Several errors combined into one.
///
/// Displays each contained error on its own line, in order.
#[derive(Debug)]
pub struct JoinedError {
    errors: Vec<BoxError>,
}
impl JoinedError {
    /// Returns the number of contained errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns `true` if no errors are contained.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Iterates the contained errors in order.
    pub fn iter(&self) -> impl Iterator<Item = &(dyn core::error::Error + Send + Sync + 'static)> {
        self.errors.iter().map(|e| &**e)
    }

    /// Returns the contained errors.
    pub fn into_errors(self) -> Vec<BoxError> {
        self.errors
    }
}
impl Display for JoinedError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            if i != 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}", error)?;
        }
        Ok(())
    }
}
impl core::error::Error for JoinedError {}

/// Combines `head` with `errors` into a single [`JoinedError`], placing `head` according to
/// `order`.
pub fn join<E, I>(order: JoinOrder, head: E, errors: I) -> BoxError
where
    E: core::error::Error + Send + Sync + 'static,
    I: IntoIterator<Item = BoxError>,
{
    let head: BoxError = Box::new(head);
    let mut combined: Vec<BoxError> = Vec::new();
    match order {
        JoinOrder::Prepend => {
            combined.push(head);
            combined.extend(errors);
        }
        JoinOrder::Append => {
            combined.extend(errors);
            combined.push(head);
        }
    }
    Box::new(JoinedError { errors: combined })
}
