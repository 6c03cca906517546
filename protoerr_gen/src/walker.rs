//! Walks the files of a request and generates one output unit per file declaring enums.

use crate::config::GeneratorConfig;
use crate::descriptor::{CodeGeneratorRequest, DescriptorProto, FileDescriptorProto};
use crate::emit::emit_items;
use crate::error::{Error, Result};
use crate::extract::{EnumModel, extract};
use crate::naming::Resolver;
use log::{debug, info};
use proc_macro2::TokenStream;
use std::collections::HashMap;

/// The generated source for one `.proto` file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// The output path, relative to the plugin's output directory.
    pub name: String,
    pub content: String,
}

/// Generates every file of `request` marked for generation.
///
/// The construction function is resolved before any file is visited, so a malformed
/// configuration produces no output at all.
pub fn generate(
    request: &CodeGeneratorRequest,
    config: &GeneratorConfig,
) -> Result<Vec<GeneratedFile>> {
    let resolver = Resolver::new(config)?;

    let mut generated = Vec::new();
    for name in &request.file_to_generate {
        let file = request
            .proto_file
            .iter()
            .find(|file| file.name.as_deref() == Some(name.as_str()))
            .ok_or_else(|| Error::MissingFile { name: name.clone() })?;
        if let Some(output) = generate_file(&resolver, file)? {
            generated.push(output);
        }
    }
    Ok(generated)
}

/// Generates a single file, or returns `None` if it declares no enums.
pub fn generate_file(
    resolver: &Resolver,
    file: &FileDescriptorProto,
) -> Result<Option<GeneratedFile>> {
    let source = file.name.as_deref().unwrap_or_default();
    let models = collect_enums(file);
    if models.is_empty() {
        debug!("{}: no enums, skipping", source);
        return Ok(None);
    }

    let mut idents: HashMap<String, &str> = HashMap::new();
    let mut items = TokenStream::new();
    for model in &models {
        let resolved = resolver.resolve(model)?;
        let ident = resolved.ident.to_string();
        if let Some(first) = idents.insert(ident.clone(), &model.display_name) {
            return Err(Error::DuplicateEnum {
                file: source.to_string(),
                first: first.to_string(),
                second: model.display_name.clone(),
                ident,
            });
        }

        debug!("{}: generating {} with {} values", source, ident, model.values.len());
        items.extend(emit_items(&resolved));
    }

    let content = render(source, items)?;
    let name = output_name(source);
    info!("{}: generated {} enums into {}", source, models.len(), name);
    Ok(Some(GeneratedFile { name, content }))
}

/// Top-level enums first, then enums nested in messages, depth first.
fn collect_enums(file: &FileDescriptorProto) -> Vec<EnumModel> {
    let mut models: Vec<EnumModel> = file.enum_type.iter().map(|e| extract(&[], e)).collect();
    let mut parents = Vec::new();
    for message in &file.message_type {
        collect_nested(&mut parents, message, &mut models);
    }
    models
}

fn collect_nested(parents: &mut Vec<String>, message: &DescriptorProto, out: &mut Vec<EnumModel>) {
    parents.push(message.name.clone().unwrap_or_default());
    out.extend(message.enum_type.iter().map(|e| extract(parents, e)));
    for nested in &message.nested_type {
        collect_nested(parents, nested, out);
    }
    parents.pop();
}

/// Formats the items of one file below the generated-code header, one `match` arm per line.
fn render(source: &str, items: TokenStream) -> Result<String> {
    let file: syn::File = syn::parse2(items)
        .map_err(|source_error| Error::Render { file: source.to_string(), source: source_error })?;
    Ok(format!("{}\n{}", header(source), prettyplease::unparse(&file)))
}

fn output_name(source: &str) -> String {
    format!("{}.errors.rs", source.strip_suffix(".proto").unwrap_or(source))
}

fn header(source: &str) -> String {
    format!(
        "// Code generated by protoc-gen-protoerr. DO NOT EDIT.\n\
         // versions: protoc-gen-protoerr v{}\n\
         // source: {}\n",
        env!("CARGO_PKG_VERSION"),
        source,
    )
}
