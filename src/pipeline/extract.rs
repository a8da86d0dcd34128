//! Extraction: per-page text and table grids via pdfplumber.
//!
//! This is the only stage that touches the extraction library. Per page:
//!
//! 1. Drop duplicate overlapping characters. Some PDFs paint the same glyph
//!    several times at the same position for shadow or outline effects;
//!    position-based deduplication removes the copies without touching
//!    legitimate repeated characters.
//! 2. Detect tables with the configured strategy.
//! 3. Extract the page text from the characters *outside* every table's
//!    bounding box, so table content is never emitted twice.
//! 4. Order tables by their top coordinate (document order).
//!
//! Any page-level failure aborts the whole conversion; there is no partial
//! recovery.

use crate::config::{ConvertOptions, TableStrategy};
use crate::error::Pdf2MdError;
use crate::output::{PageContent, TableGrid};
use pdfplumber::{
    BBox, DedupeOptions, PageObject, Pdf, Strategy, Table, TableSettings, TextOptions,
};
use std::path::Path;
use tracing::{debug, info};

/// Extract every page of the document at `path` into [`PageContent`]s.
pub fn extract_document(
    path: &Path,
    options: &ConvertOptions,
) -> Result<Vec<PageContent>, Pdf2MdError> {
    let pdf = Pdf::open_file(path, None).map_err(|e| Pdf2MdError::ParseFailed {
        path: path.to_path_buf(),
        detail: e.to_string(),
    })?;

    let total_pages = pdf.page_count();
    info!("PDF loaded: {} pages", total_pages);

    if let Some(ref cb) = options.progress_callback {
        cb.on_convert_start(total_pages);
    }

    let settings = table_settings(options.strategy);
    let mut pages = Vec::with_capacity(total_pages);
    let mut total_tables = 0usize;

    for (idx, page_result) in pdf.pages_iter().enumerate() {
        let page_num = idx + 1;
        let page = page_result.map_err(|e| Pdf2MdError::PageFailed {
            page: page_num,
            detail: e.to_string(),
        })?;

        let content = extract_page(&page, page_num, &settings);
        debug!(
            "Extracted page {}: {} chars of text, {} tables",
            page_num,
            content.text.len(),
            content.tables.len()
        );

        total_tables += content.tables.len();
        if let Some(ref cb) = options.progress_callback {
            cb.on_page_extracted(page_num, total_pages, content.tables.len());
        }
        pages.push(content);
    }

    if let Some(ref cb) = options.progress_callback {
        cb.on_convert_complete(total_pages, total_tables);
    }

    Ok(pages)
}

/// Count tables per page without assembling any Markdown.
pub fn count_tables(path: &Path, strategy: TableStrategy) -> Result<Vec<usize>, Pdf2MdError> {
    let pdf = Pdf::open_file(path, None).map_err(|e| Pdf2MdError::ParseFailed {
        path: path.to_path_buf(),
        detail: e.to_string(),
    })?;

    let settings = table_settings(strategy);
    let mut counts = Vec::with_capacity(pdf.page_count());

    for (idx, page_result) in pdf.pages_iter().enumerate() {
        let page = page_result.map_err(|e| Pdf2MdError::PageFailed {
            page: idx + 1,
            detail: e.to_string(),
        })?;
        let deduped = page.dedupe_chars(&DedupeOptions::default());
        counts.push(deduped.find_tables(&settings).len());
    }

    Ok(counts)
}

/// Extract one page: deduplicated text outside tables, plus table grids in
/// document order.
fn extract_page(page: &pdfplumber::Page, page_num: usize, settings: &TableSettings) -> PageContent {
    let deduped = page.dedupe_chars(&DedupeOptions::default());

    let mut tables = deduped.find_tables(settings);
    tables.sort_by(|a, b| {
        (a.bbox.top, a.bbox.x0)
            .partial_cmp(&(b.bbox.top, b.bbox.x0))
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let table_boxes: Vec<BBox> = tables.iter().map(|t| t.bbox).collect();
    let text = if table_boxes.is_empty() {
        deduped.extract_text(&TextOptions::default())
    } else {
        deduped
            .filter(|obj| match obj {
                PageObject::Char(c) => {
                    !table_boxes.iter().any(|b| contains_center(b, &c.bbox))
                }
                _ => true,
            })
            .extract_text(&TextOptions::default())
    };

    PageContent {
        page_number: page_num,
        text: text.trim().to_string(),
        tables: tables.into_iter().map(table_grid).collect(),
    }
}

/// Map the CLI strategy name onto the library's table-detection strategy.
fn table_settings(strategy: TableStrategy) -> TableSettings {
    let strategy = match strategy {
        TableStrategy::Lines => Strategy::Lattice,
        TableStrategy::Text => Strategy::Stream,
    };
    TableSettings {
        strategy,
        ..TableSettings::default()
    }
}

/// Flatten a detected table into a grid of optional cell strings.
fn table_grid(table: Table) -> TableGrid {
    table
        .rows
        .into_iter()
        .map(|row| row.into_iter().map(|cell| cell.text).collect())
        .collect()
}

/// True when `inner`'s centre point falls inside `outer`.
fn contains_center(outer: &BBox, inner: &BBox) -> bool {
    let cx = (inner.x0 + inner.x1) / 2.0;
    let cy = (inner.top + inner.bottom) / 2.0;
    cx >= outer.x0 && cx <= outer.x1 && cy >= outer.top && cy <= outer.bottom
}
