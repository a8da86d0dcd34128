//! CLI binary for pdf2md-plumber.
//!
//! A thin shim over the library crate that maps CLI flags
//! to `ConvertOptions` and prints results.

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use pdf2md_plumber::{
    convert, inspect, write_result, ConvertOptions, ConvertProgressCallback, OutputMode,
    PageSeparator, ProgressCallback, TableStrategy,
};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

// ── ANSI colour helpers (no extra deps) ──────────────────────────────────────

fn green(s: &str) -> String {
    format!("\x1b[32m{s}\x1b[0m")
}
fn dim(s: &str) -> String {
    format!("\x1b[2m{s}\x1b[0m")
}
fn bold(s: &str) -> String {
    format!("\x1b[1m{s}\x1b[0m")
}
fn cyan(s: &str) -> String {
    format!("\x1b[36m{s}\x1b[0m")
}

// ── CLI progress callback using indicatif ────────────────────────────────────

/// Terminal progress callback: renders a live progress bar and per-page log
/// lines using [indicatif]. Pages are extracted sequentially, so events
/// always arrive in document order.
struct CliProgressCallback {
    bar: ProgressBar,
}

impl CliProgressCallback {
    /// Create a callback whose progress-bar length is set dynamically
    /// by `on_convert_start` (called once the PDF has been opened).
    fn new_dynamic() -> Arc<Self> {
        let bar = ProgressBar::new(0); // length set in on_convert_start

        let spinner_style = ProgressStyle::with_template("{spinner:.cyan} {prefix:.bold}  {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "⠿"]);

        bar.set_style(spinner_style);
        bar.set_prefix("Preparing");
        bar.set_message("Opening PDF…");
        bar.enable_steady_tick(Duration::from_millis(80));

        Arc::new(Self { bar })
    }
}

impl ConvertProgressCallback for CliProgressCallback {
    fn on_convert_start(&self, total_pages: usize) {
        let progress_style = ProgressStyle::with_template(
            "{spinner:.cyan} {prefix:.bold}  \
             [{bar:42.green/238}] {pos:>3}/{len} pages  ⏱ {elapsed_precise}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏  ")
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "⠿"]);

        self.bar.set_length(total_pages as u64);
        self.bar.set_style(progress_style);
        self.bar.set_prefix("Extracting");
        self.bar.println(format!(
            "{} {}",
            cyan("◆"),
            bold(&format!("Extracting {total_pages} pages…"))
        ));
    }

    fn on_page_extracted(&self, page_num: usize, total_pages: usize, table_count: usize) {
        self.bar.println(format!(
            "  {} Page {:>3}/{:<3}  {}",
            green("✓"),
            page_num,
            total_pages,
            dim(&format!("{table_count} tables")),
        ));
        self.bar.inc(1);
    }

    fn on_convert_complete(&self, total_pages: usize, total_tables: usize) {
        self.bar.finish_and_clear();
        eprintln!(
            "{} {} pages extracted  ({} tables)",
            green("✔"),
            bold(&total_pages.to_string()),
            total_tables,
        );
    }
}

const AFTER_HELP: &str = r#"EXAMPLES:
  # One Markdown file per page (default), written to ./output/
  pdf2md document.pdf

  # Write to a specific directory
  pdf2md document.pdf -o notes/

  # All pages in a single file
  pdf2md document.pdf -o notes/ --single

  # Name the output file merged.md
  pdf2md document.pdf --single --name merged

  # Bordered tables: detect cells from ruled lines
  pdf2md report.pdf --strategy lines

  # Structured JSON on stdout instead of files
  pdf2md document.pdf --json > document.json

  # Page and table counts only, no conversion
  pdf2md --inspect-only document.pdf

TABLE STRATEGIES:
  text   (default)  infer cell boundaries from text alignment;
                    catches borderless tables
  lines             detect cell boundaries from ruled lines;
                    best on fully bordered tables and forms

ENVIRONMENT VARIABLES:
  PDF2MD_OUTPUT       Output directory
  PDF2MD_NAME         Output file-name prefix
  PDF2MD_STRATEGY     Table strategy (lines, text)
  PDF2MD_SEPARATOR    Page separator for --single (hr, none, comment, custom)
  PDF2MD_NO_PROGRESS  Disable the progress bar
"#;

/// Convert PDF files to Markdown via text and table extraction.
#[derive(Parser, Debug)]
#[command(
    name = "pdf2md",
    version,
    about = "Convert PDF files to Markdown via text and table extraction",
    long_about = "Convert PDF documents to Markdown, one file per page or a single combined \
file. Text and tables are extracted per page; tables render as GitHub-flavoured Markdown \
pipe tables.",
    arg_required_else_help = true,
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Local PDF file path.
    input: PathBuf,

    /// Output directory (created if absent).
    #[arg(short, long, env = "PDF2MD_OUTPUT", default_value = "./output")]
    output: PathBuf,

    /// Write all pages to a single Markdown file instead of one per page.
    #[arg(short, long, env = "PDF2MD_SINGLE")]
    single: bool,

    /// Output file-name prefix (default: the input file's base name).
    #[arg(short, long, env = "PDF2MD_NAME")]
    name: Option<String>,

    /// Table-detection strategy.
    #[arg(long, env = "PDF2MD_STRATEGY", value_enum, default_value = "text")]
    strategy: StrategyArg,

    /// Page separator for --single: hr, none, comment, or a custom string.
    #[arg(long, env = "PDF2MD_SEPARATOR", default_value = "hr")]
    separator: String,

    /// Output structured JSON (ConvertResult) on stdout instead of writing files.
    #[arg(long, env = "PDF2MD_JSON")]
    json: bool,

    /// Print page and table counts only, no conversion.
    #[arg(long)]
    inspect_only: bool,

    /// Disable the progress bar.
    #[arg(long, env = "PDF2MD_NO_PROGRESS")]
    no_progress: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "PDF2MD_VERBOSE")]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long, env = "PDF2MD_QUIET")]
    quiet: bool,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum StrategyArg {
    Lines,
    Text,
}

impl From<StrategyArg> for TableStrategy {
    fn from(v: StrategyArg) -> Self {
        match v {
            StrategyArg::Lines => TableStrategy::Lines,
            StrategyArg::Text => TableStrategy::Text,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    // Suppress INFO-level library logs when the progress bar is active;
    // the bar provides all the feedback that matters to the user.
    let show_progress = !cli.quiet && !cli.no_progress && !cli.json && !cli.inspect_only;
    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet || show_progress {
        "error"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    // ── Build options ────────────────────────────────────────────────────
    let progress_cb: Option<ProgressCallback> = if show_progress {
        Some(CliProgressCallback::new_dynamic() as Arc<dyn ConvertProgressCallback>)
    } else {
        None
    };

    let options = build_options(&cli, progress_cb)?;

    // ── Inspect-only mode ────────────────────────────────────────────────
    if cli.inspect_only {
        let summary = inspect(&cli.input, &options).context("Failed to inspect PDF")?;

        if cli.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&summary).context("Failed to serialise summary")?
            );
        } else {
            println!("File:    {}", cli.input.display());
            println!("Pages:   {}", summary.page_count);
            println!("Tables:  {}", summary.total_tables());
            for (i, count) in summary.tables_per_page.iter().enumerate() {
                if *count > 0 {
                    println!("  page {:>3}: {} table(s)", i + 1, count);
                }
            }
        }
        return Ok(());
    }

    // ── Run conversion ───────────────────────────────────────────────────
    let result = convert(&cli.input, &options).context("Conversion failed")?;

    if cli.json {
        let json = serde_json::to_string_pretty(&result).context("Failed to serialise output")?;
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        handle
            .write_all(json.as_bytes())
            .and_then(|_| handle.write_all(b"\n"))
            .context("Failed to write to stdout")?;
        return Ok(());
    }

    let files = write_result(&result, &options).context("Failed to write output")?;

    if !cli.quiet {
        eprintln!(
            "{}  {} pages  {} tables  {}ms  →  {} file{} in {}",
            green("✔"),
            result.stats.total_pages,
            result.stats.total_tables,
            result.stats.duration_ms,
            bold(&files.len().to_string()),
            if files.len() == 1 { "" } else { "s" },
            bold(&options.output_dir.display().to_string()),
        );
    }

    Ok(())
}

/// Map CLI args to `ConvertOptions`.
fn build_options(cli: &Cli, progress: Option<ProgressCallback>) -> Result<ConvertOptions> {
    let mut builder = ConvertOptions::builder()
        .output_dir(&cli.output)
        .output_mode(if cli.single {
            OutputMode::Single
        } else {
            OutputMode::PerPage
        })
        .strategy(cli.strategy.into())
        .page_separator(parse_separator(&cli.separator));

    if let Some(ref name) = cli.name {
        builder = builder.file_prefix(name.as_str());
    }
    if let Some(cb) = progress {
        builder = builder.progress_callback(cb);
    }

    builder.build().context("Invalid configuration")
}

/// Parse `--separator` string into `PageSeparator`.
fn parse_separator(s: &str) -> PageSeparator {
    match s.to_lowercase().as_str() {
        "hr" | "---" => PageSeparator::HorizontalRule,
        "none" => PageSeparator::None,
        "comment" => PageSeparator::Comment,
        custom => PageSeparator::Custom(custom.to_string()),
    }
}
