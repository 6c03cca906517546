//! The protoc plugin protocol: a `CodeGeneratorRequest` in, a `CodeGeneratorResponse` out.

use crate::config::GeneratorConfig;
use crate::descriptor::CodeGeneratorRequest;
use crate::error::Result;
use crate::walker;
use prost::Message;
use prost_types::compiler::CodeGeneratorResponse;
use prost_types::compiler::code_generator_response::{Feature, File};

/// Decodes a request and answers it.
///
/// Only a request that cannot be decoded is returned as an error. Generation failures are
/// reported through the response, which then contains no files.
pub fn run(request: &[u8]) -> Result<CodeGeneratorResponse> {
    let request = CodeGeneratorRequest::decode(request)?;
    Ok(respond(&request))
}

pub fn respond(request: &CodeGeneratorRequest) -> CodeGeneratorResponse {
    let mut response = CodeGeneratorResponse {
        supported_features: Some(Feature::Proto3Optional as u64),
        ..Default::default()
    };
    match configure(request).and_then(|config| walker::generate(request, &config)) {
        Ok(files) => {
            response.file = files
                .into_iter()
                .map(|file| File {
                    name: Some(file.name),
                    content: Some(file.content),
                    ..Default::default()
                })
                .collect();
        }
        Err(e) => {
            log::error!("generation failed: {}", e);
            response.error = Some(e.to_string());
        }
    }
    response
}

fn configure(request: &CodeGeneratorRequest) -> Result<GeneratorConfig> {
    Ok(GeneratorConfig::from_parameter(request.parameter.as_deref().unwrap_or_default())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::walker::fixture::{request, test_file};

    #[test]
    fn answers_with_generated_files() {
        let request = request(vec![test_file()], &["errors/test.proto"]);
        let response = run(&request.encode_to_vec()).unwrap();
        assert_eq!(response.error, None);
        assert_eq!(response.supported_features, Some(Feature::Proto3Optional as u64));
        assert_eq!(response.file.len(), 1);
        assert_eq!(response.file[0].name.as_deref(), Some("errors/test.errors.rs"));
    }

    #[test]
    fn reports_failures_without_files() {
        let mut request = request(vec![test_file()], &["errors/test.proto"]);
        request.parameter = Some("error_constructor=protoerr".to_string());
        let response = respond(&request);
        assert!(response.file.is_empty());
        assert_eq!(
            response.error.as_deref(),
            Some("invalid error constructor 'protoerr', expected '<path>;<ident>'")
        );
    }

    #[test]
    fn bad_parameters_are_reported() {
        let mut request = request(vec![test_file()], &["errors/test.proto"]);
        request.parameter = Some("join_order=sideways".to_string());
        let response = respond(&request);
        assert!(response.file.is_empty());
        assert!(response.error.is_some());
    }

    #[test]
    fn undecodable_requests_fail() {
        assert!(run(&[0xff, 0xff, 0xff]).is_err());
    }
}
