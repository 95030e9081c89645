use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// One exported row of the `cities` table. Extra JSON fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CityRecord {
    pub name: String,
    pub country: String,
}

impl CityRecord {
    #[cfg(test)]
    pub fn new(name: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            country: country.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum DataFormatError {
    #[error("input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed input in {}: {source}", .path.display())]
    MalformedInput {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("malformed record #{index} in {}: {source}", .path.display())]
    MalformedRecord {
        path: PathBuf,
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Read a JSON array of city objects from `path`, preserving order.
pub fn load_records(path: &Path) -> Result<Vec<CityRecord>, DataFormatError> {
    let raw = fs::read(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => DataFormatError::InputNotFound(path.to_path_buf()),
        _ => DataFormatError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;
    let records = parse_records(&raw, path)?;
    tracing::info!("loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Parse already-read input. `origin` is only used in error messages.
///
/// Invalid UTF-8 is a JSON syntax error, not an I/O failure.
pub fn parse_records(
    raw: impl AsRef<[u8]>,
    origin: &Path,
) -> Result<Vec<CityRecord>, DataFormatError> {
    let raw = raw.as_ref();
    // Database exports written on Windows often start with a BOM.
    let raw = raw.strip_prefix(UTF8_BOM).unwrap_or(raw);

    let values: Vec<Value> =
        serde_json::from_slice(raw).map_err(|source| DataFormatError::MalformedInput {
            path: origin.to_path_buf(),
            source,
        })?;

    values
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            serde_json::from_value(value).map_err(|source| DataFormatError::MalformedRecord {
                path: origin.to_path_buf(),
                index,
                source,
            })
        })
        .collect()
}
