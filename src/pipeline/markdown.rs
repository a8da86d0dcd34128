//! Markdown rendering: table grids and page bodies as Markdown text.
//!
//! Tables render as GFM pipe tables: the first row is the header, the
//! second a `| --- |` separator repeated per column, the rest data rows.
//! Cell text is sanitised so it cannot break table syntax: whitespace runs
//! collapse to a single space and `|` is escaped as `\|`.

use crate::output::{PageContent, TableGrid};

/// Sanitise one cell for inclusion in a pipe table.
///
/// A missing cell renders as the empty string.
pub fn sanitize_cell(cell: Option<&str>) -> String {
    match cell {
        None => String::new(),
        Some(text) => text
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .replace('|', "\\|"),
    }
}

/// Render a table grid as a Markdown pipe table.
///
/// Returns `None` for a grid with zero rows.
pub fn table_to_markdown(grid: &TableGrid) -> Option<String> {
    let first_row = grid.first()?;
    let columns = first_row.len().max(1);

    let mut lines = Vec::with_capacity(grid.len() + 1);
    for (i, row) in grid.iter().enumerate() {
        let cells: Vec<String> = row
            .iter()
            .map(|cell| sanitize_cell(cell.as_deref()))
            .collect();
        lines.push(format!("| {} |", cells.join(" | ")));
        if i == 0 {
            lines.push(separator_row(columns));
        }
    }

    Some(lines.join("\n"))
}

/// The `| --- |` separator row for a table with `columns` columns.
fn separator_row(columns: usize) -> String {
    let mut row = String::from("|");
    for _ in 0..columns {
        row.push_str(" --- |");
    }
    row
}

/// Render a page body: text first, then each table, joined with blank lines.
pub fn page_body(page: &PageContent) -> String {
    let mut parts: Vec<String> = Vec::with_capacity(1 + page.tables.len());

    if !page.text.is_empty() {
        parts.push(page.text.clone());
    }
    for table in &page.tables {
        if let Some(md) = table_to_markdown(table) {
            parts.push(md);
        }
    }

    parts.join("\n\n")
}

/// Prepend `heading` to `body` and guarantee exactly one trailing newline.
pub fn with_heading(heading: &str, body: &str) -> String {
    if body.is_empty() {
        format!("{heading}\n")
    } else {
        format!("{heading}\n\n{}", ensure_final_newline(body))
    }
}

/// Guarantee the document ends with exactly one newline.
pub fn ensure_final_newline(input: &str) -> String {
    let trimmed = input.trim_end();
    if trimmed.is_empty() {
        String::from("\n")
    } else {
        format!("{}\n", trimmed)
    }
}
