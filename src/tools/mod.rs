//! External tool traits and shared error type.
//!
//! The pipeline delegates three concerns to external executables, each
//! behind its own trait so the rest of the codebase never touches
//! `std::process` directly:
//!
//! - [`Markdown`] — markdown string → HTML fragment
//! - [`FrontMatter`] — metadata header and body text of a content file
//! - [`Template`] — drives the template renderer and reports its exit status
//!
//! The production implementations live in [`process`] and spawn the
//! configured commands. Tests use recording fakes instead (see
//! `test_helpers`).

pub mod process;

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ToolError {
    #[error("required tool `{0}` not found on PATH")]
    Missing(String),
    #[error("failed to run `{name}`: {source}")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },
    #[error("`{name}` failed: {detail}")]
    Failed { name: String, detail: String },
}

/// Markdown-to-HTML conversion.
///
/// Input is GitHub-flavored markdown; output is an HTML fragment (no
/// document wrapper). A converter failure is fatal to the whole invocation.
pub trait Markdown {
    fn to_html(&self, markdown: &str) -> Result<String, ToolError>;
}

/// Front-matter access for a content file.
///
/// The two operations read the same immutable file, so no consistency
/// guarantee beyond that is required. `metadata` returns the raw extractor
/// output — expected to be a JSON object, but decoding (and the
/// corresponding error) is the caller's concern.
pub trait FrontMatter {
    /// The metadata header, serialized as the extractor emits it.
    fn metadata(&self, path: &Path) -> Result<String, ToolError>;

    /// The document body with the metadata header stripped.
    fn body(&self, path: &Path) -> Result<String, ToolError>;
}

/// Template rendering.
///
/// `data` is the already-serialized JSON text of the data object. Each
/// partial becomes one include-flag pair, in the order given. Output goes
/// to `output` when set, otherwise to this process's stdout. The renderer's
/// own exit status is returned unchanged — it is the caller's exit code,
/// never translated into [`ToolError`].
pub trait Template {
    fn render(
        &self,
        template: &Path,
        partials: &[PathBuf],
        data: &str,
        output: Option<&Path>,
    ) -> Result<i32, ToolError>;
}

/// The three collaborators a render needs, bundled for passing down the
/// pipeline as one argument.
pub struct Toolchain<'a> {
    pub markdown: &'a dyn Markdown,
    pub front_matter: &'a dyn FrontMatter,
    pub template: &'a dyn Template,
}
