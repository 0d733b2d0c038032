use std::path::PathBuf;

use clap::Parser;
use wordbook_core::dictionary::{DictionaryId, MAX_DICTIONARY, MIN_DICTIONARY};

/// Interactive dictionary (word-list) manager
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory holding dictionary1.txt ... dictionary7.txt; written files land here too
    #[arg(long, default_value = ".")]
    pub dict_dir: PathBuf,

    /// Dictionary opened at startup
    #[arg(long, default_value = "1", value_parser = parse_dictionary)]
    pub dictionary: DictionaryId,

    /// File name used when answering `d` at the output file prompt
    #[arg(long, default_value = "dict-updated.txt")]
    pub output: String,

    /// Log load diagnostics (file size, reserve estimate, capacity) to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

fn parse_dictionary(s: &str) -> Result<DictionaryId, String> {
    s.parse::<i64>()
        .ok()
        .and_then(DictionaryId::new)
        .ok_or_else(|| format!("expected a number from {MIN_DICTIONARY} to {MAX_DICTIONARY}"))
}
