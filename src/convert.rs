//! Conversion entry points.
//!
//! [`convert`] extracts the whole document into a [`ConvertResult`];
//! [`convert_to_files`] additionally writes it to disk per the options.
//! Both are synchronous: the pipeline is a sequence of straight-line
//! transformations (extract page → format text → format tables → join →
//! write) with nothing to suspend on.

use crate::config::ConvertOptions;
use crate::error::Pdf2MdError;
use crate::output::{ConvertResult, ConvertStats, DocumentSummary};
use crate::pipeline::{extract, input, write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;

/// Convert a PDF file to Markdown, held in memory.
///
/// # Arguments
/// * `input`   — path to a local PDF file
/// * `options` — conversion options
///
/// # Errors
/// Any failure is fatal: file not found / unreadable / not a PDF, a parse
/// failure on any page. There is no partial result.
pub fn convert(
    input: impl AsRef<Path>,
    options: &ConvertOptions,
) -> Result<ConvertResult, Pdf2MdError> {
    let start = Instant::now();
    let path = input::resolve_input(input.as_ref())?;
    info!("Starting conversion: {}", path.display());

    let pages = extract::extract_document(&path, options)?;
    let stats = ConvertStats {
        total_pages: pages.len(),
        total_tables: pages.iter().map(|p| p.tables.len()).sum(),
        duration_ms: start.elapsed().as_millis() as u64,
    };

    info!(
        "Conversion complete: {} pages, {} tables, {}ms",
        stats.total_pages, stats.total_tables, stats.duration_ms
    );

    Ok(ConvertResult {
        source_name: input::source_stem(&path),
        pages,
        stats,
    })
}

/// Convert a PDF file and write the Markdown output to disk.
///
/// Returns the created file paths in page order.
pub fn convert_to_files(
    input: impl AsRef<Path>,
    options: &ConvertOptions,
) -> Result<Vec<PathBuf>, Pdf2MdError> {
    let result = convert(input, options)?;
    write::write_result(&result, options)
}

/// Report page and table counts without converting content.
pub fn inspect(
    input: impl AsRef<Path>,
    options: &ConvertOptions,
) -> Result<DocumentSummary, Pdf2MdError> {
    let path = input::resolve_input(input.as_ref())?;
    let tables_per_page = extract::count_tables(&path, options.strategy)?;

    Ok(DocumentSummary {
        source_name: input::source_stem(&path),
        page_count: tables_per_page.len(),
        tables_per_page,
    })
}
