//! Name-list input: newline-delimited UTF-8 files of company names or
//! investor permalinks.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::Context;

/// Reads a newline-delimited file and returns its entries de-duplicated
/// and lexicographically sorted.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read; this is fatal
/// for the run (there is nothing to process without it).
pub fn read_names_from_file(path: &Path) -> anyhow::Result<Vec<String>> {
    let file =
        File::open(path).with_context(|| format!("cannot open name list {}", path.display()))?;
    parse_names(BufReader::new(file))
        .with_context(|| format!("cannot read name list {}", path.display()))
}

/// Parses names from any buffered reader: trims whitespace, drops blank
/// lines, de-duplicates, and sorts.
fn parse_names<R: BufRead>(reader: R) -> std::io::Result<Vec<String>> {
    let mut names = BTreeSet::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            names.insert(trimmed.to_string());
        }
    }
    Ok(names.into_iter().collect())
}
