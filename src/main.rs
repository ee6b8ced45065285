use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::info;

use huffman_tree_coding::{
    build_code_table, build_frequency_table, build_huffman_tree, decode, encode,
};

#[derive(Parser, Debug)]
#[command(about = "Round-trip a file through Huffman coding and report sizes", long_about = None)]
struct Args {
    /// The file to encode.
    path: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    let input = fs::read(&args.path)
        .with_context(|| format!("could not read {}", args.path.display()))?;

    let frequencies = build_frequency_table(&input);
    info!(
        "{} bytes, {} distinct byte values",
        input.len(),
        frequencies.len()
    );

    let tree = build_huffman_tree(&frequencies)?;
    let table = build_code_table(&tree);

    let encoded = encode(&input, &table)?;
    let decoded = decode(&encoded, &tree)?;
    if decoded != input {
        bail!("round-trip mismatch for {}", args.path.display());
    }

    let packed = encoded.as_bytes().len();
    println!(
        "original: {} bytes\nencoded: {} bits ({} bytes packed)\nratio: {:.1}%",
        input.len(),
        encoded.len(),
        packed,
        packed as f64 / input.len() as f64 * 100.0,
    );

    Ok(())
}
