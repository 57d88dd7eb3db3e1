//! Runtime configuration.
//!
//! `mdpage` works out of the box with its stock tool commands; an optional
//! `mdpage.toml` in the working directory overrides them. Config files are
//! sparse — set only the values you want:
//!
//! ```toml
//! # All options are optional — defaults shown below
//!
//! [tools]
//! markdown = "cmark-gfm"      # markdown on stdin → HTML on stdout
//! front_matter = "frontmatter" # --json FILE / --body FILE
//! template = "mustache"       # -p PARTIAL... - TEMPLATE, data on stdin
//!
//! [summary]
//! length = 50                 # default word budget for list summaries
//! ```
//!
//! Unknown keys are rejected to catch typos early. The loaded [`Config`] is
//! passed explicitly into the pipeline — there is no process-wide state.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Name of the optional config file looked up in the working directory.
pub const CONFIG_FILE: &str = "mdpage.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Configuration loaded from `mdpage.toml`.
///
/// All fields have working defaults; user config files need only specify
/// overrides. Unknown keys are rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// External tool command names.
    pub tools: ToolsConfig,
    /// Summary generation settings.
    pub summary: SummaryConfig,
}

/// Command names for the three external tools, resolved on `PATH`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolsConfig {
    /// Markdown converter: markdown on stdin, HTML fragment on stdout.
    pub markdown: String,
    /// Front-matter extractor: `--json FILE` and `--body FILE`.
    pub front_matter: String,
    /// Template renderer: partials via `-p`, data object on stdin.
    pub template: String,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            markdown: "cmark-gfm".to_string(),
            front_matter: "frontmatter".to_string(),
            template: "mustache".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SummaryConfig {
    /// Word budget for list-mode summaries when `-s` is not given.
    pub length: usize,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self { length: 50 }
    }
}

impl Config {
    /// Reject values that would make the pipeline unrunnable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("tools.markdown", &self.tools.markdown),
            ("tools.front_matter", &self.tools.front_matter),
            ("tools.template", &self.tools.template),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::Validation(format!("{field} must not be empty")));
            }
        }
        if self.summary.length == 0 {
            return Err(ConfigError::Validation(
                "summary.length must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Load `mdpage.toml` from `dir`, falling back to stock defaults when the
/// file does not exist. A present-but-invalid file is an error, not a
/// silent fallback.
pub fn load_config(dir: &Path) -> Result<Config, ConfigError> {
    let path = dir.join(CONFIG_FILE);
    let config = if path.exists() {
        let content = fs::read_to_string(&path)?;
        toml::from_str(&content)?
    } else {
        Config::default()
    };
    config.validate()?;
    Ok(config)
}
