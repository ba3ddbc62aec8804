//! Build script to generate the embedded word bank
//!
//! Reads `data/word_bank.txt` and generates a Rust const array.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_word_bank("data/word_bank.txt", &Path::new(&out_dir).join("word_bank.rs"));

    println!("cargo:rerun-if-changed=data/word_bank.txt");
}

fn generate_word_bank(input_path: &str, output_path: &Path) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let words: Vec<&str> = content.split_whitespace().collect();
    let count = words.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word bank").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Five-letter words bundled with the solver").unwrap();
    writeln!(output, "pub const WORD_BANK: &[&str] = &[").unwrap();

    for word in words {
        writeln!(output, "    \"{word}\",").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in `WORD_BANK`").unwrap();
    writeln!(output, "pub const WORD_BANK_COUNT: usize = {count};").unwrap();
}
