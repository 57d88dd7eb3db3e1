//! Content-file extraction.
//!
//! A content file is a markdown document with a front-matter metadata
//! header. Extraction delegates both halves to the front-matter tool: one
//! call for the header (expected to decode as a JSON object), one for the
//! body with the header stripped. Both calls read the same immutable file,
//! so no stronger consistency is needed between them.
//!
//! Two fields are synthesized into the metadata after decoding, so they win
//! over same-named header keys:
//!
//! - `filename` — base name of the input path
//! - `filepath` — the path exactly as given on input, not canonicalized

use crate::tools::{FrontMatter, ToolError};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PageError {
    #[error("content file not found: {0}")]
    NotFound(PathBuf),
    #[error("invalid front matter in {path}: {detail}")]
    Metadata { path: PathBuf, detail: String },
    #[error(transparent)]
    Tool(#[from] ToolError),
}

/// One extracted content file: decoded metadata plus the raw body text.
///
/// Produced fresh per file, never cached. The body is consumed exactly once
/// downstream — rendered whole in single mode, summarized in list mode.
#[derive(Debug, Clone)]
pub struct Page {
    pub metadata: Map<String, Value>,
    pub body: String,
}

/// Extract `(metadata, body)` from one content file.
///
/// Fails with [`PageError::NotFound`] before any collaborator call when the
/// path is not an existing regular file. A front-matter tool failure or a
/// header that does not decode to a JSON object is [`PageError::Metadata`].
pub fn extract(front_matter: &dyn FrontMatter, path: &Path) -> Result<Page, PageError> {
    if !path.is_file() {
        return Err(PageError::NotFound(path.to_path_buf()));
    }

    let metadata_err = |detail: String| PageError::Metadata {
        path: path.to_path_buf(),
        detail,
    };

    let raw = front_matter
        .metadata(path)
        .map_err(|e| metadata_err(e.to_string()))?;
    let decoded: Value =
        serde_json::from_str(&raw).map_err(|e| metadata_err(format!("not valid JSON: {e}")))?;
    let mut metadata = match decoded {
        Value::Object(map) => map,
        other => {
            return Err(metadata_err(format!(
                "metadata must be a JSON object, got {}",
                json_kind(&other)
            )));
        }
    };

    let filename = path
        .file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    metadata.insert("filename".to_string(), Value::String(filename));
    metadata.insert(
        "filepath".to_string(),
        Value::String(path.display().to_string()),
    );

    let body = front_matter.body(path)?;

    Ok(Page { metadata, body })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
