//! rhx - Reversed-group hex formatter
//!
//! Reads one line from stdin, resolves backslash escapes, encodes the result
//! as ASCII and prints the hex digits in reversed groups of four bytes.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;

use rhx::encoding::encode_ascii;
use rhx::escape::unescape;
use rhx::format::{hex_tokens, reversed_group_lines};

/// Reversed-group hex formatter
#[derive(Parser, Debug)]
#[command(name = "rhx")]
#[command(author, version, about, long_about = None)]
struct Args {}

fn main() -> Result<()> {
    let _args = Args::parse();

    print!("Enter string: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read input")?;
    let raw = line.trim_end_matches(['\r', '\n']);

    // Any decode or encode failure aborts before the header is printed
    let decoded = unescape(raw)?;
    let bytes = encode_ascii(&decoded)?;
    let tokens = hex_tokens(&bytes);

    println!("In groups of reversed 8s:");
    for group in reversed_group_lines(&tokens) {
        println!("{}", group);
    }

    Ok(())
}
