use std::fs;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use rayon::prelude::*;

use sum256_core::{Error, InputMode, Result};
use sum256_hash::{hex, sha256};

#[derive(Parser, Debug)]
#[command(
    name = "sum256",
    about = "From-scratch SHA-256 digest of text arguments or files"
)]
struct Args {
    /// Input mode: "text" hashes each operand's UTF-8 bytes,
    /// "binary" reads each operand as a file path
    #[arg(short = 'm', long = "mode", default_value = "binary")]
    mode: String,

    /// Operands to hash (text strings or file paths, per --mode)
    #[arg(required = true)]
    inputs: Vec<String>,
}

/// Hash one operand according to the selected mode.
///
/// Input acquisition happens here, outside the digest core: binary mode
/// reads the whole file into memory first, and a failed read surfaces the
/// attempted path instead of ever reaching the hasher.
fn digest_operand(mode: InputMode, operand: &str) -> Result<String> {
    let bytes = match mode {
        InputMode::Text => operand.as_bytes().to_vec(),
        InputMode::Binary => {
            let path = PathBuf::from(operand);
            fs::read(&path).map_err(|source| Error::SourceUnavailable { path, source })?
        }
    };

    let words = sha256::digest_words(&bytes)?;
    Ok(hex::encode(&words))
}

/// Format one output line. Text operands are quoted so the hashed string
/// is unambiguous; file paths print bare, sha256sum style.
fn format_line(mode: InputMode, digest_hex: &str, operand: &str) -> String {
    match mode {
        InputMode::Text => format!("{}  \"{}\"", digest_hex, operand),
        InputMode::Binary => format!("{}  {}", digest_hex, operand),
    }
}

fn main() {
    let args = Args::parse();

    let mode = match args.mode.parse::<InputMode>() {
        Ok(mode) => mode,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(2);
        }
    };

    // Each digest computation owns its state, so independent operands
    // hash in parallel; lines still print in operand order.
    let results: Vec<Result<String>> = args
        .inputs
        .par_iter()
        .map(|operand| digest_operand(mode, operand))
        .collect();

    let mut failed = false;
    for (operand, result) in args.inputs.iter().zip(results) {
        match result {
            Ok(digest_hex) => println!("{}", format_line(mode, &digest_hex, operand)),
            Err(e) => {
                failed = true;
                eprintln!("Error: {}", e);
            }
        }
    }

    if failed {
        process::exit(1);
    }
}
