//! Renders a [`ResolvedEnum`] into the Rust items implementing its error code.
//!
//! Every `match` lists the declared values in declaration order and ends in a single `_` arm,
//! since arbitrary integers can be converted into the generated type.

use crate::naming::{ResolvedEnum, UNRECOGNIZED_VARIANT};
use proc_macro2::{Ident, Literal, Span, TokenStream};
use protoerr::JoinOrder;
use quote::quote;
use std::collections::HashSet;

/// Emits all items of one enum.
pub fn emit(resolved: &ResolvedEnum<'_>) -> TokenStream {
    let items = emit_items(resolved);
    quote!(#(#items)*)
}

/// Emits the items of one enum separately: the declaration, the integer conversions, the
/// `ErrorCode` implementation, the `Display` and `Error` implementations, and the inherent
/// `join` methods.
pub fn emit_items(resolved: &ResolvedEnum<'_>) -> Vec<TokenStream> {
    vec![
        emit_declaration(resolved),
        emit_conversions(resolved),
        emit_error_code(resolved),
        emit_display(resolved),
        emit_composition(resolved),
    ]
}

fn unrecognized() -> Ident {
    Ident::new(UNRECOGNIZED_VARIANT, Span::call_site())
}

fn emit_declaration(resolved: &ResolvedEnum<'_>) -> TokenStream {
    let ident = &resolved.ident;
    let unrecognized = unrecognized();
    let doc = format!(" Error codes of `{}`.", resolved.model.display_name);
    let variants = resolved.variants.iter().zip(&resolved.model.values).map(|(variant, value)| {
        let doc = format!(" `{} = {}`", value.name, value.code);
        quote! {
            #[doc = #doc]
            #variant,
        }
    });

    quote! {
        #[doc = #doc]
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum #ident {
            #(#variants)*
            #[doc = " A value not declared in the schema."]
            #unrecognized(i32),
        }
    }
}

fn emit_conversions(resolved: &ResolvedEnum<'_>) -> TokenStream {
    let ident = &resolved.ident;
    let unrecognized = unrecognized();

    // Aliased codes convert to the first value declaring them.
    let mut seen = HashSet::new();
    let from_arms = resolved
        .variants
        .iter()
        .zip(&resolved.model.values)
        .filter(|(_, value)| seen.insert(value.code))
        .map(|(variant, value)| {
            let code = Literal::i32_unsuffixed(value.code);
            quote!(#code => #ident::#variant,)
        });
    let into_arms = resolved.variants.iter().zip(&resolved.model.values).map(|(variant, value)| {
        let code = Literal::i32_unsuffixed(value.code);
        quote!(#ident::#variant => #code,)
    });

    quote! {
        impl ::core::convert::From<i32> for #ident {
            fn from(value: i32) -> Self {
                match value {
                    #(#from_arms)*
                    other => #ident::#unrecognized(other),
                }
            }
        }
        impl ::core::convert::From<#ident> for i32 {
            fn from(value: #ident) -> i32 {
                match value {
                    #(#into_arms)*
                    #ident::#unrecognized(other) => other,
                }
            }
        }
    }
}

/// Emits one accessor: a `match` over the declared variants followed by `_ => #default`.
fn accessor<I>(
    resolved: &ResolvedEnum<'_>,
    name: &str,
    ret: TokenStream,
    arms: I,
    default: TokenStream,
) -> TokenStream
where
    I: IntoIterator<Item = TokenStream>,
{
    let ident = &resolved.ident;
    let name = Ident::new(name, Span::call_site());
    let variants = &resolved.variants;
    let arms = arms.into_iter();
    quote! {
        fn #name(self) -> #ret {
            match self {
                #(#ident::#variants => #arms,)*
                _ => #default,
            }
        }
    }
}

fn emit_error_code(resolved: &ResolvedEnum<'_>) -> TokenStream {
    let ident = &resolved.ident;
    let model = resolved.model;
    let values = &model.values;

    let code = accessor(
        resolved,
        "code",
        quote!(i32),
        values.iter().map(|v| {
            let code = Literal::i32_unsuffixed(v.code);
            quote!(#code)
        }),
        quote!(0),
    );
    let default_status = Literal::i32_unsuffixed(model.default_status);
    let status = accessor(
        resolved,
        "status",
        quote!(i32),
        values.iter().map(|v| {
            let status = Literal::i32_unsuffixed(v.resolved_status(model.default_status));
            quote!(#status)
        }),
        quote!(#default_status),
    );
    let message = accessor(
        resolved,
        "message",
        quote!(&'static str),
        values.iter().map(|v| {
            let message = v.resolved_message();
            quote!(#message)
        }),
        quote!(""),
    );
    let unknown = model.unknown_text();
    let as_str = accessor(
        resolved,
        "as_str",
        quote!(&'static str),
        values.iter().map(|v| {
            let text = v.text(&model.display_name);
            quote!(#text)
        }),
        quote!(#unknown),
    );

    quote! {
        impl ::protoerr::ErrorCode for #ident {
            #code
            #status
            #message
            #as_str
        }
    }
}

fn emit_display(resolved: &ResolvedEnum<'_>) -> TokenStream {
    let ident = &resolved.ident;
    quote! {
        impl ::core::fmt::Display for #ident {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(::protoerr::ErrorCode::as_str(*self))
            }
        }
        impl ::core::error::Error for #ident {}
    }
}

fn emit_composition(resolved: &ResolvedEnum<'_>) -> TokenStream {
    let ident = &resolved.ident;
    let default_status = Literal::i32_unsuffixed(resolved.model.default_status);
    let constructor = &resolved.constructor.path;
    let order = Ident::new(
        match resolved.join_order {
            JoinOrder::Prepend => "Prepend",
            JoinOrder::Append => "Append",
        },
        Span::call_site(),
    );
    let join_doc = format!(
        " Joins this value with `errors` and builds an error with `{}::{}`.",
        resolved.constructor.locator, resolved.constructor.ident,
    );
    let join_with_message_doc = format!(
        " Joins this value with `errors` and builds an error with `{}::{}`, using `message` as is.",
        resolved.constructor.locator, resolved.constructor.ident,
    );

    quote! {
        impl #ident {
            #[doc = " The status of values that do not declare one."]
            pub const DEFAULT_STATUS: i32 = #default_status;

            #[doc = #join_doc]
            #[doc = ""]
            #[doc = " The message is this value's message, or its text if the message is empty."]
            pub fn join<I>(self, errors: I) -> ::protoerr::BoxError
            where
                I: ::core::iter::IntoIterator<Item = ::protoerr::BoxError>,
            {
                self.join_with_message(::protoerr::ErrorCode::display_message(self), errors)
            }

            #[doc = #join_with_message_doc]
            pub fn join_with_message<I>(self, message: &str, errors: I) -> ::protoerr::BoxError
            where
                I: ::core::iter::IntoIterator<Item = ::protoerr::BoxError>,
            {
                let cause = ::protoerr::join(::protoerr::JoinOrder::#order, self, errors);
                #constructor(
                    ::protoerr::ErrorCode::status(self),
                    ::protoerr::ErrorCode::code(self),
                    message,
                    cause,
                )
            }
        }
    }
}
