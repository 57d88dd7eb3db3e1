//! # mdpage
//!
//! A minimal page renderer. Content files are markdown with a front-matter
//! metadata header; `mdpage` extracts the metadata, converts the body to
//! HTML, and hands one JSON data object to an external template renderer —
//! either for a single page or for a generated listing page with
//! auto-derived summaries.
//!
//! # Architecture: One Pipeline, Two Modes
//!
//! ```text
//! single:  extract ──→ body ──→ to_html ──┐
//!             │                           ▼
//!             └── metadata ──────────→ assemble ──→ template renderer
//!
//! list:    extract ──→ body ──→ summarize ──→ to_html ──┐
//!             │                                         ▼
//!             └── metadata ─────────────────→ pages[] entry (per file)
//!                                                  │
//!                                 assemble ←───────┘──→ template renderer
//! ```
//!
//! Vars files given with `-i` are merged into every data object up front,
//! each under a key derived from its filename. The template render step
//! happens exactly once per invocation, after all per-file data has been
//! collected — a build either fully succeeds or produces no output.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`vars`] | Vars-file loading (JSON/TOML by extension) and include merging |
//! | [`page`] | Front-matter extraction — (metadata, body) for one content file |
//! | [`summary`] | Word-bounded summary derivation for listing pages |
//! | [`assemble`] | Ordered merge of includes, metadata, and content into the data object |
//! | [`render`] | Pipeline orchestration and template invocation |
//! | [`tools`] | External collaborator traits and their process-backed implementations |
//! | [`config`] | Optional `mdpage.toml` — tool commands and summary defaults |
//!
//! # Design Decisions
//!
//! ## External Tools Over In-Process Libraries
//!
//! Markdown conversion, front-matter extraction, and template rendering are
//! delegated to executables on `PATH` (by default `cmark-gfm`,
//! `frontmatter`, and `mustache`). This keeps `mdpage` a thin orchestrator:
//! the site owner picks the dialect and template language by swapping
//! binaries, not by rebuilding. The cost is a hard startup requirement —
//! all three tools are resolved before any work begins, and a missing one
//! fails the whole invocation.
//!
//! Inside the crate each tool sits behind a trait ([`tools::Markdown`],
//! [`tools::FrontMatter`], [`tools::Template`]), so the pipeline logic is
//! testable against fakes without spawning anything.
//!
//! ## Deterministic Data-Object Merging
//!
//! The data object handed to the template renderer is built by an explicit
//! ordered merge — includes, then `kind`, then page metadata, then content —
//! with later writes winning. Collisions are legal and resolved by that
//! order alone, so a template author can reason about exactly which value a
//! key holds. See [`assemble`] for the full rules.
//!
//! ## Fail-Fast, No Partial Output
//!
//! Every error is fatal: a vars file that fails to parse, a content file
//! that is missing, a converter that exits non-zero — each aborts the
//! invocation before the template renderer is ever started. In `list` mode
//! this means a failure on the third of five files discards the first two;
//! no partial `pages` array is ever rendered.

pub mod assemble;
pub mod config;
pub mod page;
pub mod render;
pub mod summary;
pub mod tools;
pub mod vars;

#[cfg(test)]
pub(crate) mod test_helpers;
