use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::error::{HuffmanError, Result};

/// Read everything from `reader` and split it into characters.
///
/// Empty input is a valid, empty symbol sequence.
pub fn read_symbols<R: Read>(reader: &mut R, source_name: &str) -> Result<Vec<char>> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;

    let text = String::from_utf8(data).map_err(|e| HuffmanError::InvalidInput {
        source_name: source_name.to_string(),
        message: e.to_string(),
    })?;
    debug!(source = source_name, bytes = text.len(), "read input");

    Ok(text.chars().collect())
}

pub fn read_symbols_from_path(path: &Path) -> Result<Vec<char>> {
    let mut file = File::open(path).map_err(|e| HuffmanError::InvalidInput {
        source_name: path.display().to_string(),
        message: e.to_string(),
    })?;
    read_symbols(&mut file, &path.display().to_string())
}
