use clap::Parser;
use prost::Message;
use std::io::{Read, Write};

/// Generates `protoerr` error code enums from annotated protobuf enums.
///
/// Invoked by protoc through `--protoerr_out`: reads a code generator request from stdin and
/// writes the response to stdout. Parameters are passed with `--protoerr_opt`, for example
/// `--protoerr_opt=error_constructor=crate::errors;make_error,join_order=append`.
#[derive(Parser)]
#[command(version, about)]
struct Cli {}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _cli = Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut request = Vec::new();
    std::io::stdin().read_to_end(&mut request)?;
    let response = protoerr_gen::plugin::run(&request)?;
    std::io::stdout().write_all(&response.encode_to_vec())?;
    Ok(())
}
