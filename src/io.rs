//! Reading and writing dictionary documents on disk.

use std::fs;
use std::io::Write;
use std::path::Path;

use serde_json::Value;
use tempfile::NamedTempFile;

use crate::compressed::CompressedDictionary;
use crate::decoder::decode;
use crate::error::{Error, Result};
use crate::flat::FlatDictionary;

pub fn read_compressed(path: impl AsRef<Path>) -> Result<CompressedDictionary> {
    let path = path.as_ref();
    log::info!("Reading compressed dictionary from {}", path.display());
    let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let value: Value = serde_json::from_str(&content).map_err(|e| Error::parse(path, e))?;
    Ok(CompressedDictionary::from_value(value)?)
}

pub fn read_flat(path: impl AsRef<Path>) -> Result<FlatDictionary> {
    let path = path.as_ref();
    log::info!("Reading flat dictionary from {}", path.display());
    let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    serde_json::from_str(&content).map_err(|e| Error::parse(path, e))
}

/// Write the document to a temporary file next to `path`, then rename it
/// into place. An existing file at `path` is either fully replaced or left
/// as it was.
pub fn write_flat(path: impl AsRef<Path>, dictionary: &FlatDictionary, pretty: bool) -> Result<()> {
    let path = path.as_ref();
    let json = dictionary.to_json_string(pretty)?;

    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let mut temp_file = NamedTempFile::new_in(dir).map_err(|e| Error::io(dir, e))?;
    temp_file
        .write_all(json.as_bytes())
        .map_err(|e| Error::io(dir, e))?;
    temp_file
        .as_file()
        .sync_all()
        .map_err(|e| Error::io(dir, e))?;
    temp_file.persist(path).map_err(|e| Error::io(path, e.error))?;

    log::info!("Wrote {} words to {}", dictionary.len(), path.display());
    Ok(())
}

/// Read, decode and write in one step. The output file is left untouched
/// when reading or decoding fails.
pub fn decode_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    pretty: bool,
) -> Result<FlatDictionary> {
    let compressed = read_compressed(input)?;
    let flat = decode(&compressed)?;
    write_flat(output, &flat, pretty)?;
    Ok(flat)
}
