//! Process-backed implementations of the tool traits.
//!
//! Each trait call spawns one child process and waits for it to exit, so
//! resource lifetime is scoped to the call: stdin handles are dropped to
//! signal EOF, stdout is fully drained, and the child is always reaped —
//! on error paths too.
//!
//! ## Command contracts
//!
//! - **markdown** (`cmark-gfm`): markdown on stdin, HTML fragment on stdout.
//! - **front matter** (`frontmatter`): invoked twice per content file —
//!   `--json FILE` prints the metadata header as JSON, `--body FILE` prints
//!   the body with the header stripped.
//! - **template** (`mustache`): `-p PARTIAL` per auxiliary template, then
//!   `-` (read data from stdin, mustache(1) convention), then the template
//!   path. The data object is piped as JSON text; output redirection is
//!   handled here, not by the renderer.

use super::{FrontMatter, Markdown, Template, ToolError};
use crate::config::ToolsConfig;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Tool implementations spawning the commands named in [`ToolsConfig`].
pub struct ProcessTools {
    config: ToolsConfig,
}

impl ProcessTools {
    pub fn new(config: ToolsConfig) -> Self {
        Self { config }
    }

    /// Resolve all three executables on `PATH`.
    ///
    /// Called once before any file is touched, so a missing tool fails the
    /// invocation up front rather than halfway through a list build.
    pub fn check(&self) -> Result<(), ToolError> {
        for name in [
            &self.config.markdown,
            &self.config.front_matter,
            &self.config.template,
        ] {
            which::which(name).map_err(|_| ToolError::Missing(name.clone()))?;
        }
        Ok(())
    }
}

/// Run a command, feed `input` to its stdin, and return its stdout.
///
/// Non-zero exit is [`ToolError::Failed`] with the child's stderr as detail.
fn run_filter(name: &str, args: &[&str], input: &str) -> Result<String, ToolError> {
    let io_err = |source| ToolError::Io {
        name: name.to_string(),
        source,
    };

    let mut child = Command::new(name)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(io_err)?;

    // Dropping stdin after the write signals EOF to the child.
    if let Some(mut stdin) = child.stdin.take()
        && let Err(source) = stdin.write_all(input.as_bytes())
    {
        // A child that exits without reading all its input surfaces as a
        // broken pipe; its exit status below is the authoritative signal.
        if source.kind() != std::io::ErrorKind::BrokenPipe {
            let _ = child.kill();
            let _ = child.wait();
            return Err(io_err(source));
        }
    }

    let output = child.wait_with_output().map_err(io_err)?;
    if !output.status.success() {
        return Err(ToolError::Failed {
            name: name.to_string(),
            detail: failure_detail(&output.status, &output.stderr),
        });
    }

    String::from_utf8(output.stdout).map_err(|e| ToolError::Failed {
        name: name.to_string(),
        detail: format!("produced non-UTF-8 output: {e}"),
    })
}

/// Run a command with no stdin and return its stdout.
fn run_capture(name: &str, args: &[&str]) -> Result<String, ToolError> {
    let output = Command::new(name)
        .args(args)
        .stdin(Stdio::null())
        .output()
        .map_err(|source| ToolError::Io {
            name: name.to_string(),
            source,
        })?;

    if !output.status.success() {
        return Err(ToolError::Failed {
            name: name.to_string(),
            detail: failure_detail(&output.status, &output.stderr),
        });
    }

    String::from_utf8(output.stdout).map_err(|e| ToolError::Failed {
        name: name.to_string(),
        detail: format!("produced non-UTF-8 output: {e}"),
    })
}

fn failure_detail(status: &std::process::ExitStatus, stderr: &[u8]) -> String {
    let stderr = String::from_utf8_lossy(stderr);
    let stderr = stderr.trim();
    if stderr.is_empty() {
        format!("exited with {status}")
    } else {
        format!("exited with {status}: {stderr}")
    }
}

impl Markdown for ProcessTools {
    fn to_html(&self, markdown: &str) -> Result<String, ToolError> {
        run_filter(&self.config.markdown, &[], markdown)
    }
}

impl FrontMatter for ProcessTools {
    fn metadata(&self, path: &Path) -> Result<String, ToolError> {
        run_capture(
            &self.config.front_matter,
            &["--json", &path.to_string_lossy()],
        )
    }

    fn body(&self, path: &Path) -> Result<String, ToolError> {
        run_capture(
            &self.config.front_matter,
            &["--body", &path.to_string_lossy()],
        )
    }
}

impl Template for ProcessTools {
    fn render(
        &self,
        template: &Path,
        partials: &[PathBuf],
        data: &str,
        output: Option<&Path>,
    ) -> Result<i32, ToolError> {
        let name = &self.config.template;
        let io_err = |source| ToolError::Io {
            name: name.clone(),
            source,
        };

        let mut command = Command::new(name);
        for partial in partials {
            command.arg("-p").arg(partial);
        }
        command.arg("-").arg(template);
        command.stdin(Stdio::piped());

        // The renderer writes the page itself; send it to the output file
        // when one was given, otherwise let it share our stdout.
        match output {
            Some(path) => {
                let file = File::create(path).map_err(io_err)?;
                command.stdout(Stdio::from(file));
            }
            None => {
                command.stdout(Stdio::inherit());
            }
        }

        let mut child = command.spawn().map_err(io_err)?;
        if let Some(mut stdin) = child.stdin.take()
            && let Err(source) = stdin.write_all(data.as_bytes())
        {
            // Renderer died before reading the data; its mirrored exit
            // status below is the answer, not the pipe error.
            if source.kind() != std::io::ErrorKind::BrokenPipe {
                let _ = child.kill();
                let _ = child.wait();
                return Err(io_err(source));
            }
        }

        let status = child.wait().map_err(io_err)?;
        // Mirror the renderer's own exit status; a signal death has no
        // code and maps to plain failure.
        Ok(status.code().unwrap_or(1))
    }
}
