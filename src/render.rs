//! Pipeline orchestration — one render per invocation.
//!
//! Both modes follow the same shape: verify the template exists, process
//! the content file(s) strictly sequentially, assemble the data object,
//! serialize it to JSON text, and hand it to the template renderer exactly
//! once. The renderer's own exit status is the return value — `mdpage`
//! mirrors it as its process exit code and never rewraps it.
//!
//! Everything before that single invocation is fail-fast: the first error
//! aborts the build, the template renderer is never started, and no output
//! file is created. In list mode that means a failure on file N discards
//! the work done for files 1..N.

use crate::page::{self, PageError};
use crate::tools::{Template, ToolError, Toolchain};
use crate::vars::VarsError;
use crate::{assemble, summary};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("template not found: {0}")]
    TemplateNotFound(PathBuf),
    #[error(transparent)]
    Vars(#[from] VarsError),
    #[error(transparent)]
    Page(#[from] PageError),
    #[error(transparent)]
    Tool(#[from] ToolError),
    #[error("failed to serialize render data: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Render one content file through the template.
///
/// The data object flattens the page metadata at top level next to the
/// include vars, plus `content` — the HTML of the full body (headings
/// included, unlike summaries).
pub fn render_single(
    tools: &Toolchain,
    includes: &Map<String, Value>,
    template: &Path,
    partials: &[PathBuf],
    input: &Path,
    output: Option<&Path>,
) -> Result<i32, RenderError> {
    check_template(template)?;

    let page = page::extract(tools.front_matter, input)?;
    let content = tools.markdown.to_html(&page.body)?;
    let data = assemble::single_data(includes, &page.metadata, &content);

    invoke(tools.template, template, partials, &data, output)
}

/// Render a listing page over many content files.
///
/// Files are processed to completion one at a time, in the order given —
/// the `pages` array preserves that order exactly. The word budget applies
/// per file.
pub fn render_list(
    tools: &Toolchain,
    includes: &Map<String, Value>,
    template: &Path,
    partials: &[PathBuf],
    inputs: &[PathBuf],
    max_words: usize,
    output: Option<&Path>,
) -> Result<i32, RenderError> {
    check_template(template)?;

    let mut pages = Vec::with_capacity(inputs.len());
    for input in inputs {
        let page = page::extract(tools.front_matter, input)?;
        let summary = summary::summarize(tools.markdown, &page.body, max_words)?;
        pages.push(assemble::page_entry(&page.metadata, &summary));
    }
    let data = assemble::list_data(includes, pages);

    invoke(tools.template, template, partials, &data, output)
}

fn check_template(template: &Path) -> Result<(), RenderError> {
    if template.is_file() {
        Ok(())
    } else {
        Err(RenderError::TemplateNotFound(template.to_path_buf()))
    }
}

/// Serialize the data object and drive the template renderer once.
fn invoke(
    template_tool: &dyn Template,
    template: &Path,
    partials: &[PathBuf],
    data: &Value,
    output: Option<&Path>,
) -> Result<i32, RenderError> {
    let json = serde_json::to_string(data)?;
    Ok(template_tool.render(template, partials, &json, output)?)
}
