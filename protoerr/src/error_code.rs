//! Contains the trait implemented by generated error code enums.

use core::fmt::{Debug, Display};

/// The status used when neither a value nor its enum declares one.
pub const DEFAULT_STATUS: i32 = 500;

/// Appended to an enum's name to describe values the schema does not declare.
pub const UNKNOWN_ERROR_SUFFIX: &str = ":UNKNOWN_ERROR";

/// A type that can be used as an error code for this crate.
///
/// Generated enums carry one variant per declared value plus an `Unrecognized(i32)` carrier for
/// integers converted from outside the declared set. Every accessor is total over both.
pub trait ErrorCode:
    'static + Copy + Eq + Debug + Display + core::error::Error + Send + Sync + From<i32>
{
    /// Returns the numeric code of this value, or `0` if the value is not declared.
    fn code(self) -> i32;

    /// Returns the HTTP-style status of this value.
    ///
    /// This is the value's own status if it declares one, and the enum's default status
    /// otherwise.
    fn status(self) -> i32;

    /// Returns the human readable message of this value, or an empty string.
    fn message(self) -> &'static str;

    /// Returns the textual representation used by the `Display` implementation.
    ///
    /// This is the configured reason, or `<Enum>_<VALUE>` for declared values without one, or
    /// `<Enum>:UNKNOWN_ERROR` for undeclared values.
    fn as_str(self) -> &'static str;

    /// Returns [`message`](Self::message) if it is non-empty, and [`as_str`](Self::as_str)
    /// otherwise.
    fn display_message(self) -> &'static str {
        let message = self.message();
        if message.is_empty() { self.as_str() } else { message }
    }
}
