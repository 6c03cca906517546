//! Runtime support for error code enums generated by `protoc-gen-protoerr`.
//!
//! Generated enums implement [`ErrorCode`], and combine themselves with other errors through
//! [`join`] before handing the result to a construction function such as [`new_error`].

#![no_std]
extern crate alloc;

// Lets generated code used in tests name this crate as `::protoerr`.
#[cfg(test)]
extern crate self as protoerr;

mod error;
mod error_code;
mod joined;

pub use error::{BoxError, Error, new_error};
pub use error_code::{DEFAULT_STATUS, ErrorCode, UNKNOWN_ERROR_SUFFIX};
pub use joined::{JoinOrder, JoinedError, join};
