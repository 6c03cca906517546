//! Generates `protoerr` error code enums from protobuf enums annotated with the options in
//! `protoerr/options.proto`.
//!
//! Each enum becomes a Rust enum with one variant per declared value plus an `Unrecognized`
//! carrier, implementing [`protoerr::ErrorCode`] along with `join` and `join_with_message`
//! helpers that call a configurable construction function.
//!
//! The pipeline is [`extract`] → [`naming`] → [`emit`], driven per file by [`walker`]. The
//! [`plugin`] module speaks the protoc plugin protocol around it.

pub mod config;
pub mod descriptor;
pub mod emit;
mod error;
pub mod extract;
pub mod naming;
pub mod plugin;
pub mod walker;

pub use config::GeneratorConfig;
pub use error::{Error, Result};
pub use walker::{GeneratedFile, generate};
