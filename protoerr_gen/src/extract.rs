//! Reads the `protoerr` options attached to an enum into an [`EnumModel`].

use crate::descriptor::{EnumDescriptorProto, EnumValueDescriptorProto};
use protoerr::{DEFAULT_STATUS, UNKNOWN_ERROR_SUFFIX};

/// The normalized options of one enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumModel {
    /// The enum's own name.
    pub name: String,

    /// The enclosing message names followed by the enum name, joined with `_`.
    pub display_name: String,

    /// The names of the messages enclosing this enum, outermost first.
    pub parents: Vec<String>,

    /// The declared values, in declaration order.
    pub values: Vec<EnumValueModel>,

    /// The status of values that do not declare one.
    pub default_status: i32,
}
impl EnumModel {
    /// The text of values this enum does not declare.
    pub fn unknown_text(&self) -> String {
        format!("{}{}", self.display_name, UNKNOWN_ERROR_SUFFIX)
    }
}

/// The options of a single declared value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumValueModel {
    pub name: String,
    pub code: i32,
    pub status: Option<i32>,
    pub reason: Option<String>,
    pub message: Option<String>,
}
impl EnumValueModel {
    pub fn resolved_status(&self, default_status: i32) -> i32 {
        self.status.unwrap_or(default_status)
    }

    pub fn resolved_message(&self) -> &str {
        self.message.as_deref().unwrap_or("")
    }

    /// The configured reason, or `<display_name>_<VALUE>` if it is absent or empty.
    pub fn text(&self, display_name: &str) -> String {
        match self.reason.as_deref().filter(|reason| !reason.is_empty()) {
            Some(reason) => reason.to_string(),
            None => format!("{}_{}", display_name, self.name),
        }
    }
}

/// Builds the model of an enum nested in the messages named by `parents`.
pub fn extract(parents: &[String], descriptor: &EnumDescriptorProto) -> EnumModel {
    let name = descriptor.name.clone().unwrap_or_default();
    let mut display_name = String::new();
    for parent in parents {
        display_name.push_str(parent);
        display_name.push('_');
    }
    display_name.push_str(&name);

    let default_status = descriptor
        .options
        .as_ref()
        .and_then(|options| options.default_status)
        .unwrap_or(DEFAULT_STATUS);

    EnumModel {
        name,
        display_name,
        parents: parents.to_vec(),
        values: descriptor.value.iter().map(extract_value).collect(),
        default_status,
    }
}

fn extract_value(descriptor: &EnumValueDescriptorProto) -> EnumValueModel {
    let options = descriptor.options.as_ref().and_then(|options| options.options.as_ref());
    EnumValueModel {
        name: descriptor.name.clone().unwrap_or_default(),
        code: descriptor.number.unwrap_or_default(),
        status: options.and_then(|o| o.status),
        reason: options.and_then(|o| o.reason.clone()),
        message: options.and_then(|o| o.message.clone()),
    }
}
