//! Vars files — external data merged into every template render.
//!
//! A vars file is a structured-data blob a template can reach under a name
//! derived from its filename: `-i site.json` makes the parsed mapping
//! available as `site` in the data object. Format is determined strictly by
//! extension — `.json` or `.toml`, nothing else, no content sniffing — and
//! the top-level value must be a mapping.
//!
//! Any failure (unknown extension, unreadable file, parse error, non-mapping
//! top level) is fatal to the whole invocation. When two paths strip to the
//! same key, the later one wins; callers should not rely on first-wins.

use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VarsError {
    #[error("vars file {0} has no recognized extension (expected .json or .toml)")]
    UnknownFormat(PathBuf),
    #[error("failed to read vars file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("vars file {path} is not valid JSON: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("vars file {path} is not valid TOML: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("vars file {0} must contain a mapping at top level")]
    NotAMapping(PathBuf),
}

/// Parse one vars file into a mapping, format chosen by extension.
pub fn load(path: &Path) -> Result<Map<String, Value>, VarsError> {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    let content = match ext.as_str() {
        "json" | "toml" => fs::read_to_string(path).map_err(|source| VarsError::Io {
            path: path.to_path_buf(),
            source,
        })?,
        _ => return Err(VarsError::UnknownFormat(path.to_path_buf())),
    };

    let value: Value = match ext.as_str() {
        "json" => serde_json::from_str(&content).map_err(|source| VarsError::Json {
            path: path.to_path_buf(),
            source,
        })?,
        "toml" => {
            let table: toml::Table = toml::from_str(&content).map_err(|source| VarsError::Toml {
                path: path.to_path_buf(),
                source,
            })?;
            // toml::Table serializes to a JSON object; this cannot fail for
            // values toml itself accepted
            serde_json::to_value(table).map_err(|source| VarsError::Json {
                path: path.to_path_buf(),
                source,
            })?
        }
        _ => unreachable!("extension filtered above"),
    };

    match value {
        Value::Object(map) => Ok(map),
        _ => Err(VarsError::NotAMapping(path.to_path_buf())),
    }
}

/// Load every path and merge into one mapping, keyed by base filename with
/// the recognized extension stripped.
///
/// Processed in argument order — a later file whose stem collides with an
/// earlier one replaces it.
pub fn merge(paths: &[PathBuf]) -> Result<Map<String, Value>, VarsError> {
    let mut merged = Map::new();
    for path in paths {
        let vars = load(path)?;
        let key = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        merged.insert(key, Value::Object(vars));
    }
    Ok(merged)
}
