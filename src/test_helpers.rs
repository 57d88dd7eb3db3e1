//! Shared test utilities — fake external tools.
//!
//! [`FakeTools`] implements all three collaborator traits, records every
//! operation, and returns canned results, so pipeline tests run without
//! spawning a single process:
//!
//! - markdown: wraps input in `<p>…</p>` (or fails when configured), so the
//!   exact text handed to the converter is recoverable from the HTML
//! - front matter: serves (metadata JSON, body) registered per path with
//!   [`FakeTools::with_page`]; an unregistered path is a tool failure
//! - template: records the full invocation and returns the configured exit
//!   code
//!
//! ```rust
//! let tools = FakeTools::new()
//!     .with_page(&path, r#"{"title": "Hi"}"#, "Hello world")
//!     .with_exit_code(0);
//! render_single(&tools.toolchain(), &includes, &template, &[], &path, None)?;
//! let data = tools.last_render_data();
//! ```

use crate::tools::{FrontMatter, Markdown, Template, ToolError, Toolchain};
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// One recorded collaborator call, in invocation order.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedOp {
    ToHtml(String),
    Metadata(PathBuf),
    Body(PathBuf),
    Render {
        template: PathBuf,
        partials: Vec<PathBuf>,
        data: String,
        output: Option<PathBuf>,
    },
}

/// Fake implementation of all three tool traits.
///
/// Single-threaded by design (the pipeline is strictly sequential), so
/// plain `RefCell` suffices for the recording.
#[derive(Default)]
pub struct FakeTools {
    ops: RefCell<Vec<RecordedOp>>,
    pages: HashMap<PathBuf, (String, String)>,
    markdown_fails: bool,
    exit_code: i32,
}

impl FakeTools {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register canned (metadata JSON, body) for a content path.
    pub fn with_page(mut self, path: &Path, metadata: &str, body: &str) -> Self {
        self.pages.insert(
            path.to_path_buf(),
            (metadata.to_string(), body.to_string()),
        );
        self
    }

    /// Make every markdown conversion fail.
    pub fn with_failing_markdown(mut self) -> Self {
        self.markdown_fails = true;
        self
    }

    /// Exit code the fake template renderer reports.
    pub fn with_exit_code(mut self, code: i32) -> Self {
        self.exit_code = code;
        self
    }

    /// Borrow self as all three collaborators.
    pub fn toolchain(&self) -> Toolchain<'_> {
        Toolchain {
            markdown: self,
            front_matter: self,
            template: self,
        }
    }

    /// All recorded operations, in order.
    pub fn ops(&self) -> Vec<RecordedOp> {
        self.ops.borrow().clone()
    }

    /// Number of template invocations recorded.
    pub fn render_count(&self) -> usize {
        self.ops
            .borrow()
            .iter()
            .filter(|op| matches!(op, RecordedOp::Render { .. }))
            .count()
    }

    /// The data object from the last template invocation, parsed back from
    /// its JSON text. Panics when no render happened.
    pub fn last_render_data(&self) -> serde_json::Value {
        let ops = self.ops.borrow();
        let data = ops
            .iter()
            .rev()
            .find_map(|op| match op {
                RecordedOp::Render { data, .. } => Some(data.clone()),
                _ => None,
            })
            .expect("no template render was recorded");
        serde_json::from_str(&data).expect("recorded render data is not valid JSON")
    }

    fn record(&self, op: RecordedOp) {
        self.ops.borrow_mut().push(op);
    }
}

impl Markdown for FakeTools {
    fn to_html(&self, markdown: &str) -> Result<String, ToolError> {
        self.record(RecordedOp::ToHtml(markdown.to_string()));
        if self.markdown_fails {
            return Err(ToolError::Failed {
                name: "fake-markdown".to_string(),
                detail: "configured to fail".to_string(),
            });
        }
        Ok(format!("<p>{markdown}</p>"))
    }
}

impl FrontMatter for FakeTools {
    fn metadata(&self, path: &Path) -> Result<String, ToolError> {
        self.record(RecordedOp::Metadata(path.to_path_buf()));
        self.canned(path).map(|(metadata, _)| metadata)
    }

    fn body(&self, path: &Path) -> Result<String, ToolError> {
        self.record(RecordedOp::Body(path.to_path_buf()));
        self.canned(path).map(|(_, body)| body)
    }
}

impl FakeTools {
    fn canned(&self, path: &Path) -> Result<(String, String), ToolError> {
        self.pages.get(path).cloned().ok_or_else(|| ToolError::Failed {
            name: "fake-frontmatter".to_string(),
            detail: format!("no canned page for {}", path.display()),
        })
    }
}

impl Template for FakeTools {
    fn render(
        &self,
        template: &Path,
        partials: &[PathBuf],
        data: &str,
        output: Option<&Path>,
    ) -> Result<i32, ToolError> {
        self.record(RecordedOp::Render {
            template: template.to_path_buf(),
            partials: partials.to_vec(),
            data: data.to_string(),
            output: output.map(Path::to_path_buf),
        });
        Ok(self.exit_code)
    }
}
