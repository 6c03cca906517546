//! Rust names for generated enums, their variants, and the configured construction function.

use crate::config::GeneratorConfig;
use crate::extract::EnumModel;
use proc_macro2::{Ident, Span, TokenStream};
use protoerr::JoinOrder;
use quote::quote;
use std::collections::HashMap;

/// The variant carrying values an enum does not declare.
pub const UNRECOGNIZED_VARIANT: &str = "Unrecognized";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NamingError {
    #[error("invalid error constructor '{value}', expected '<path>;<ident>'")]
    MalformedConstructor { value: String },

    #[error("error constructor path '{path}' is not a Rust path")]
    InvalidConstructorPath { path: String },

    #[error("error constructor name '{ident}' is not a Rust identifier")]
    InvalidConstructorIdent { ident: String },

    #[error("'{name}' does not map to a valid Rust identifier")]
    InvalidIdent { name: String },

    #[error("values '{first}' and '{second}' of enum '{enum_name}' both map to variant '{variant}'")]
    DuplicateVariant { enum_name: String, first: String, second: String, variant: String },

    #[error("value '{value}' of enum '{enum_name}' maps to the reserved variant 'Unrecognized'")]
    ReservedVariant { enum_name: String, value: String },
}

/// The construction function generated code calls.
#[derive(Debug, Clone)]
pub struct Constructor {
    pub locator: String,
    pub ident: String,
    /// `<locator>::<ident>`, ready for emission.
    pub path: TokenStream,
}
impl Constructor {
    /// Parses a `<locator>;<ident>` descriptor.
    pub fn parse(descriptor: &str) -> Result<Constructor, NamingError> {
        let parts: Vec<&str> = descriptor.split(';').map(str::trim).collect();
        let &[locator, ident] = parts.as_slice() else {
            return Err(NamingError::MalformedConstructor { value: descriptor.to_string() });
        };
        if locator.is_empty() || ident.is_empty() {
            return Err(NamingError::MalformedConstructor { value: descriptor.to_string() });
        }
        if !is_path(locator) {
            return Err(NamingError::InvalidConstructorPath { path: locator.to_string() });
        }
        if !is_ident(ident) || is_keyword(ident) {
            return Err(NamingError::InvalidConstructorIdent { ident: ident.to_string() });
        }

        let locator_tokens: TokenStream = locator
            .parse()
            .map_err(|_| NamingError::InvalidConstructorPath { path: locator.to_string() })?;
        let ident_tokens = Ident::new(ident, Span::call_site());
        Ok(Constructor {
            locator: locator.to_string(),
            ident: ident.to_string(),
            path: quote!(#locator_tokens::#ident_tokens),
        })
    }
}

/// An enum model together with the Rust names it is emitted under.
#[derive(Debug)]
pub struct ResolvedEnum<'a> {
    pub model: &'a EnumModel,
    pub ident: Ident,
    /// One variant per declared value, in declaration order.
    pub variants: Vec<Ident>,
    pub constructor: &'a Constructor,
    pub join_order: JoinOrder,
}

/// Resolves names against a fixed configuration.
#[derive(Debug, Clone)]
pub struct Resolver {
    constructor: Constructor,
    join_order: JoinOrder,
}
impl Resolver {
    /// Fails if the configured construction function is malformed.
    pub fn new(config: &GeneratorConfig) -> Result<Resolver, NamingError> {
        Ok(Resolver {
            constructor: Constructor::parse(&config.error_constructor)?,
            join_order: config.join_order,
        })
    }

    pub fn constructor(&self) -> &Constructor {
        &self.constructor
    }

    pub fn resolve<'a>(&'a self, model: &'a EnumModel) -> Result<ResolvedEnum<'a>, NamingError> {
        let type_name: String = model
            .parents
            .iter()
            .chain(Some(&model.name))
            .map(|name| to_upper_camel(name))
            .collect();
        let ident = type_ident(&type_name, &model.display_name)?;

        let mut seen: HashMap<String, &str> = HashMap::new();
        let mut variants = Vec::with_capacity(model.values.len());
        for value in &model.values {
            let variant = to_upper_camel(&value.name);
            if variant == UNRECOGNIZED_VARIANT {
                return Err(NamingError::ReservedVariant {
                    enum_name: model.display_name.clone(),
                    value: value.name.clone(),
                });
            }
            let variant_ident = type_ident(&variant, &value.name)?;
            if let Some(first) = seen.insert(variant.clone(), &value.name) {
                return Err(NamingError::DuplicateVariant {
                    enum_name: model.display_name.clone(),
                    first: first.to_string(),
                    second: value.name.clone(),
                    variant,
                });
            }
            variants.push(variant_ident);
        }

        Ok(ResolvedEnum {
            model,
            ident,
            variants,
            constructor: &self.constructor,
            join_order: self.join_order,
        })
    }
}

fn type_ident(candidate: &str, source_name: &str) -> Result<Ident, NamingError> {
    if is_ident(candidate) && candidate != "Self" {
        Ok(Ident::new(candidate, Span::call_site()))
    } else {
        Err(NamingError::InvalidIdent { name: source_name.to_string() })
    }
}

/// Converts `SCREAMING_SNAKE`, `snake` or `CamelCase` names to `UpperCamelCase`.
///
/// Segments without lowercase letters are lowercased after their first character, other
/// segments are kept as written.
pub fn to_upper_camel(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for segment in name.split('_').filter(|s| !s.is_empty()) {
        let shouting = !segment.chars().any(|c| c.is_ascii_lowercase());
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            out.push(first.to_ascii_uppercase());
            if shouting {
                out.extend(chars.map(|c| c.to_ascii_lowercase()));
            } else {
                out.extend(chars);
            }
        }
    }
    out
}

fn is_ident(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    s != "_" && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// `crate` and `self` may only open a relative path, `super` may follow them or repeat.
fn is_path(s: &str) -> bool {
    let (global, s) = match s.strip_prefix("::") {
        Some(rest) => (true, rest),
        None => (false, s),
    };
    let segments: Vec<&str> = s.split("::").collect();
    segments.iter().enumerate().all(|(i, segment)| match *segment {
        "crate" | "self" => !global && i == 0,
        "super" => !global && segments[..i].iter().all(|s| matches!(*s, "self" | "super")),
        other => is_ident(other) && !is_keyword(other),
    })
}

fn is_keyword(s: &str) -> bool {
    matches!(
        s,
        "as" | "async" | "await" | "break" | "const" | "continue" | "crate" | "dyn" | "else"
            | "enum" | "extern" | "false" | "fn" | "for" | "gen" | "if" | "impl" | "in" | "let"
            | "loop" | "match" | "mod" | "move" | "mut" | "pub" | "ref" | "return" | "self"
            | "Self" | "static" | "struct" | "super" | "trait" | "true" | "type" | "unsafe"
            | "use" | "where" | "while" | "abstract" | "become" | "box" | "do" | "final"
            | "macro" | "override" | "priv" | "typeof" | "unsized" | "virtual" | "yield"
            | "try"
    )
}
