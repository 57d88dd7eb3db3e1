use clap::{Parser, Subcommand};
use mdpage::tools::Toolchain;
use mdpage::tools::process::ProcessTools;
use mdpage::{config, render, vars};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "mdpage")]
#[command(about = "Render markdown content files through external Unix tools")]
#[command(long_about = "\
Render markdown content files through external Unix tools

Content files are markdown with a front-matter metadata header. mdpage
extracts the metadata, converts the body to HTML, and pipes one JSON data
object into an external template renderer — for a single page, or for a
listing page with auto-derived summaries over many files.

Data object shape:

  single:  { kind: \"single\", <vars files>, <metadata fields>, content }
  list:    { kind: \"list\",   <vars files>, pages: [ {<metadata fields>,
             summary, summary_is_content}, ... ] }   # argument order

Each -i vars file (.json or .toml, mapping at top level) appears under its
filename-derived key: '-i site.json' is reachable as 'site'. Each -t
template is forwarded to the renderer as a partial, in order.

Required tools on PATH (override in mdpage.toml):

  cmark-gfm     markdown on stdin → HTML fragment on stdout
  frontmatter   --json FILE / --body FILE
  mustache      -p PARTIAL... - TEMPLATE, data object on stdin

The exit code mirrors the template renderer's own exit code; any internal
failure (missing tool, missing file, parse error) exits 1.")]
#[command(version)]
struct Cli {
    /// Vars file merged into the template data object (repeatable)
    #[arg(short = 'i', long = "include", value_name = "PATH", global = true)]
    include: Vec<PathBuf>,

    /// Auxiliary template forwarded to the renderer as a partial (repeatable)
    #[arg(
        short = 't',
        long = "include-template",
        value_name = "PATH",
        global = true
    )]
    include_template: Vec<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render one content file
    Single {
        /// Write the rendered page here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Template handed to the renderer
        template: PathBuf,
        /// Content file (front matter + markdown body)
        input: PathBuf,
    },
    /// Render a listing page over many content files
    List {
        /// Summary word budget per file (default from mdpage.toml, stock 50)
        #[arg(short = 's', long = "summary-length", value_name = "WORDS")]
        summary_length: Option<usize>,
        /// Write the rendered page here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Template handed to the renderer
        template: PathBuf,
        /// Content files, in the order pages should appear
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();
    match run(&cli) {
        // Success path: mirror the template renderer's own exit code
        Ok(status) => std::process::exit(status),
        Err(err) => {
            eprintln!("mdpage: {err}");
            std::process::exit(1);
        }
    }
}

/// The whole pipeline behind one error boundary — `main` makes the sole
/// exit-code decision.
fn run(cli: &Cli) -> Result<i32, Box<dyn std::error::Error>> {
    let config = config::load_config(Path::new("."))?;

    // Resolve all three tools before touching any file
    let tools = ProcessTools::new(config.tools.clone());
    tools.check()?;
    let toolchain = Toolchain {
        markdown: &tools,
        front_matter: &tools,
        template: &tools,
    };

    let includes = vars::merge(&cli.include)?;

    let status = match &cli.command {
        Command::Single {
            output,
            template,
            input,
        } => render::render_single(
            &toolchain,
            &includes,
            template,
            &cli.include_template,
            input,
            output.as_deref(),
        )?,
        Command::List {
            summary_length,
            output,
            template,
            files,
        } => {
            let max_words = summary_length.unwrap_or(config.summary.length);
            render::render_list(
                &toolchain,
                &includes,
                template,
                &cli.include_template,
                files,
                max_words,
                output.as_deref(),
            )?
        }
    };

    Ok(status)
}
