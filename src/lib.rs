//! # pdf2md-plumber
//!
//! Convert PDF documents to Markdown via text and table extraction.
//!
//! ## Why this crate?
//!
//! Plain text dumps of a PDF lose its tables: cell contents run together
//! into unreadable lines. This crate keeps them — each page's text is
//! extracted alongside its detected tables, and the tables are rendered as
//! GitHub-flavoured Markdown pipe tables. The heavy lifting (character
//! positioning, table detection) is done by the `pdfplumber` crate; this
//! crate orchestrates it per page, formats the results, and writes either
//! one Markdown file per page or a single combined document.
//!
//! ## Pipeline Overview
//!
//! ```text
//! PDF
//!  │
//!  ├─ 1. Input    validate path and %PDF magic bytes
//!  ├─ 2. Extract  per-page text + table grids via pdfplumber
//!  ├─ 3. Format   tables → pipe tables, pages → Markdown blocks
//!  ├─ 4. Assemble per-page documents or one combined document
//!  └─ 5. Write    {prefix}_page_{N}.md per page, or {prefix}.md
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pdf2md_plumber::{convert, ConvertOptions, OutputMode};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let options = ConvertOptions::builder()
//!         .output_mode(OutputMode::Single)
//!         .build()?;
//!     let result = convert("document.pdf", &options)?;
//!     println!("{}", result.to_single_markdown(&options.page_separator));
//!     eprintln!("{} pages, {} tables",
//!         result.stats.total_pages,
//!         result.stats.total_tables);
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `pdf2md` binary (clap + anyhow + tracing-subscriber + indicatif) |
//!
//! Disable `cli` when using only the library to avoid pulling in CLI-only deps:
//! ```toml
//! pdf2md-plumber = { version = "0.1", default-features = false }
//! ```
//!
//! ## Choosing a Table Strategy
//!
//! | Strategy | Detects cells from | Best for |
//! |----------|--------------------|----------|
//! | `text` (default) | text alignment | borderless tables, mixed documents |
//! | `lines` | ruled lines | fully bordered tables, forms |
//!
//! Table detection fidelity is bounded by the underlying library; the
//! strategy name is passed straight through to it.

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod convert;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod progress;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{
    ConvertOptions, ConvertOptionsBuilder, OutputMode, PageSeparator, TableStrategy,
};
pub use convert::{convert, convert_to_files, inspect};
pub use error::Pdf2MdError;
pub use output::{ConvertResult, ConvertStats, DocumentSummary, PageContent, TableGrid};
pub use pipeline::write::write_result;
pub use progress::{ConvertProgressCallback, NoopProgressCallback, ProgressCallback};
