//! The subset of `google/protobuf/descriptor.proto` and `google/protobuf/compiler/plugin.proto`
//! the generator reads.
//!
//! `prost` drops fields it does not know about while decoding, so extensions declared in
//! `protoerr/options.proto` are spelled out here as ordinary fields at their extension numbers.

/// Field number of the `default_status` extension of `google.protobuf.EnumOptions`.
pub const DEFAULT_STATUS_EXTENSION: u32 = 51000;

/// Field number of the `options` extension of `google.protobuf.EnumValueOptions`.
pub const VALUE_OPTIONS_EXTENSION: u32 = 51001;

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CodeGeneratorRequest {
    #[prost(string, repeated, tag = "1")]
    pub file_to_generate: Vec<String>,
    #[prost(string, optional, tag = "2")]
    pub parameter: Option<String>,
    #[prost(message, repeated, tag = "15")]
    pub proto_file: Vec<FileDescriptorProto>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FileDescriptorProto {
    #[prost(string, optional, tag = "1")]
    pub name: Option<String>,
    #[prost(string, optional, tag = "2")]
    pub package: Option<String>,
    #[prost(message, repeated, tag = "4")]
    pub message_type: Vec<DescriptorProto>,
    #[prost(message, repeated, tag = "5")]
    pub enum_type: Vec<EnumDescriptorProto>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DescriptorProto {
    #[prost(string, optional, tag = "1")]
    pub name: Option<String>,
    #[prost(message, repeated, tag = "3")]
    pub nested_type: Vec<DescriptorProto>,
    #[prost(message, repeated, tag = "4")]
    pub enum_type: Vec<EnumDescriptorProto>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct EnumDescriptorProto {
    #[prost(string, optional, tag = "1")]
    pub name: Option<String>,
    #[prost(message, repeated, tag = "2")]
    pub value: Vec<EnumValueDescriptorProto>,
    #[prost(message, optional, tag = "3")]
    pub options: Option<EnumOptions>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct EnumValueDescriptorProto {
    #[prost(string, optional, tag = "1")]
    pub name: Option<String>,
    #[prost(int32, optional, tag = "2")]
    pub number: Option<i32>,
    #[prost(message, optional, tag = "3")]
    pub options: Option<EnumValueOptions>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct EnumOptions {
    /// `(protoerr.default_status)`
    #[prost(int32, optional, tag = "51000")]
    pub default_status: Option<i32>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct EnumValueOptions {
    /// `(protoerr.options)`
    #[prost(message, optional, tag = "51001")]
    pub options: Option<ErrorOptions>,
}

/// `protoerr.ErrorOptions`
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ErrorOptions {
    #[prost(int32, optional, tag = "1")]
    pub status: Option<i32>,
    #[prost(string, optional, tag = "2")]
    pub reason: Option<String>,
    #[prost(string, optional, tag = "3")]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use prost::Message;
    use prost::encoding::{WireType, encode_key, encode_varint};

    #[test]
    fn extension_survives_decoding() {
        // EnumOptions { deprecated = true, (protoerr.default_status) = 404 }
        let mut buf = Vec::new();
        encode_key(3, WireType::Varint, &mut buf);
        encode_varint(1, &mut buf);
        encode_key(DEFAULT_STATUS_EXTENSION, WireType::Varint, &mut buf);
        encode_varint(404, &mut buf);

        let options = EnumOptions::decode(buf.as_slice()).unwrap();
        assert_eq!(options.default_status, Some(404));
    }

    #[test]
    fn value_options_survive_decoding() {
        let inner = ErrorOptions {
            status: Some(400),
            reason: None,
            message: Some("bad".to_string()),
        }
        .encode_to_vec();
        let mut buf = Vec::new();
        encode_key(VALUE_OPTIONS_EXTENSION, WireType::LengthDelimited, &mut buf);
        encode_varint(inner.len() as u64, &mut buf);
        buf.extend_from_slice(&inner);

        let options = EnumValueOptions::decode(buf.as_slice()).unwrap();
        let options = options.options.unwrap();
        assert_eq!(options.status, Some(400));
        assert_eq!(options.reason, None);
        assert_eq!(options.message.as_deref(), Some("bad"));
    }

    #[test]
    fn wrong_wire_type_is_rejected() {
        let mut buf = Vec::new();
        encode_key(DEFAULT_STATUS_EXTENSION, WireType::LengthDelimited, &mut buf);
        encode_varint(1, &mut buf);
        buf.push(b'x');
        assert!(EnumOptions::decode(buf.as_slice()).is_err());
    }
}
