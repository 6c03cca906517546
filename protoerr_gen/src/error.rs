use crate::config::ConfigError;
use crate::naming::NamingError;

/// Errors that abort a generation run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Naming(#[from] NamingError),

    #[error("failed to decode code generator request: {0}")]
    Decode(#[from] prost::DecodeError),

    #[error("file '{name}' is marked for generation but was not supplied")]
    MissingFile { name: String },

    #[error("enums '{first}' and '{second}' in '{file}' both map to type '{ident}'")]
    DuplicateEnum { file: String, first: String, second: String, ident: String },

    #[error("code generated for '{file}' is not a valid Rust file: {source}")]
    Render { file: String, source: syn::Error },
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    const _: () = {
        const fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    };

    #[test]
    fn wraps_component_errors() {
        let err: Error = NamingError::MalformedConstructor { value: "protoerr".to_string() }.into();
        assert_eq!(err.to_string(), "invalid error constructor 'protoerr', expected '<path>;<ident>'");

        let err: Error = ConfigError::UnknownParameter { key: "paths".to_string() }.into();
        assert_eq!(err.to_string(), "unknown parameter 'paths'");
    }
}
