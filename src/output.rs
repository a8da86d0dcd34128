//! Output types: per-page content, the assembled result, and run statistics.
//!
//! [`ConvertResult`] offers two derived renderings — a per-page sequence and
//! a single concatenated document. Both are computed on demand from the
//! stored [`PageContent`]s rather than cached; rendering is string
//! concatenation over already-extracted data, so recomputation is irrelevant.

use crate::config::PageSeparator;
use crate::pipeline::markdown;
use serde::{Deserialize, Serialize};

/// A rectangular grid of extracted table cells.
///
/// Outer `Vec` is rows, inner `Vec` is cells; `None` marks a cell the
/// extraction library found no text for.
pub type TableGrid = Vec<Vec<Option<String>>>;

/// Extracted content of a single page. Produced once during extraction,
/// read-only afterward.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageContent {
    /// 1-based page number.
    pub page_number: usize,
    /// Extracted page text, excluding text inside detected tables.
    /// Possibly empty.
    pub text: String,
    /// Tables detected on the page, in document order (top to bottom).
    pub tables: Vec<TableGrid>,
}

impl PageContent {
    /// True when the page has neither text nor tables.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.tables.is_empty()
    }

    /// The page body: text first, then each table as a Markdown pipe table,
    /// joined with blank lines. Empty tables are skipped.
    pub fn markdown_body(&self) -> String {
        markdown::page_body(self)
    }

    /// Render this page as a standalone Markdown document with a
    /// `# Page N` heading, ending in exactly one newline.
    pub fn to_markdown(&self) -> String {
        let heading = format!("# Page {}", self.page_number);
        markdown::with_heading(&heading, &self.markdown_body())
    }
}

/// Statistics about a completed conversion, for the CLI summary line and
/// `--json` consumers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertStats {
    /// Pages in the document.
    pub total_pages: usize,
    /// Tables detected across all pages.
    pub total_tables: usize,
    /// Wall-clock duration of extraction.
    pub duration_ms: u64,
}

/// The full result of converting one PDF document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertResult {
    /// The input file's stem (base name without extension); the default
    /// output file prefix.
    pub source_name: String,
    /// Per-page content in document order.
    pub pages: Vec<PageContent>,
    /// Run statistics.
    pub stats: ConvertStats,
}

impl ConvertResult {
    /// Combine all pages into one Markdown document.
    ///
    /// Each page is rendered under a `## Page N` heading; `separator` is
    /// inserted between consecutive pages, never after the last. The result
    /// ends in exactly one newline.
    pub fn to_single_markdown(&self, separator: &PageSeparator) -> String {
        let mut doc = String::new();
        for (i, page) in self.pages.iter().enumerate() {
            if i > 0 {
                doc.push_str(&separator.render(page.page_number));
            }
            doc.push_str(&format!("## Page {}", page.page_number));
            let body = page.markdown_body();
            if !body.is_empty() {
                doc.push_str("\n\n");
                doc.push_str(&body);
            }
        }
        markdown::ensure_final_newline(&doc)
    }

    /// Per-page Markdown documents, each with its `# Page N` heading.
    pub fn page_markdowns(&self) -> impl Iterator<Item = String> + '_ {
        self.pages.iter().map(PageContent::to_markdown)
    }
}

/// Page and table counts for a document, without converting it.
/// Returned by [`crate::convert::inspect`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentSummary {
    /// The input file's stem.
    pub source_name: String,
    /// Pages in the document.
    pub page_count: usize,
    /// Number of tables detected on each page, in document order.
    pub tables_per_page: Vec<usize>,
}

impl DocumentSummary {
    /// Tables detected across all pages.
    pub fn total_tables(&self) -> usize {
        self.tables_per_page.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(n: usize, text: &str, tables: Vec<TableGrid>) -> PageContent {
        PageContent {
            page_number: n,
            text: text.to_string(),
            tables,
        }
    }

    fn result(pages: Vec<PageContent>) -> ConvertResult {
        let total_tables = pages.iter().map(|p| p.tables.len()).sum();
        ConvertResult {
            source_name: "doc".into(),
            stats: ConvertStats {
                total_pages: pages.len(),
                total_tables,
                duration_ms: 0,
            },
            pages,
        }
    }

    #[test]
    fn page_markdown_has_heading_and_body() {
        let p = page(3, "Hello world.", vec![]);
        assert_eq!(p.to_markdown(), "# Page 3\n\nHello world.\n");
    }

    #[test]
    fn empty_page_keeps_heading() {
        let p = page(2, "", vec![]);
        assert!(p.is_empty());
        assert_eq!(p.to_markdown(), "# Page 2\n");
    }

    #[test]
    fn single_markdown_uses_level_two_headings() {
        let r = result(vec![page(1, "one", vec![]), page(2, "two", vec![])]);
        let md = r.to_single_markdown(&PageSeparator::HorizontalRule);
        assert!(md.starts_with("## Page 1\n\none"));
        assert!(md.contains("## Page 2\n\ntwo"));
        assert!(md.ends_with('\n'));
    }

    #[test]
    fn single_markdown_separator_count() {
        let r = result(vec![
            page(1, "a", vec![]),
            page(2, "b", vec![]),
            page(3, "c", vec![]),
        ]);
        let md = r.to_single_markdown(&PageSeparator::HorizontalRule);
        let rules = md.lines().filter(|l| *l == "---").count();
        assert_eq!(rules, 2);
    }

    #[test]
    fn single_markdown_no_separator_after_last() {
        let r = result(vec![page(1, "a", vec![]), page(2, "b", vec![])]);
        let md = r.to_single_markdown(&PageSeparator::HorizontalRule);
        assert!(!md.trim_end().ends_with("---"));
    }

    #[test]
    fn page_markdowns_yields_one_per_page() {
        let r = result(vec![page(1, "a", vec![]), page(2, "", vec![])]);
        let docs: Vec<String> = r.page_markdowns().collect();
        assert_eq!(docs.len(), 2);
        assert!(docs[0].starts_with("# Page 1"));
        assert!(docs[1].starts_with("# Page 2"));
    }

    #[test]
    fn summary_total_tables() {
        let s = DocumentSummary {
            source_name: "doc".into(),
            page_count: 3,
            tables_per_page: vec![0, 2, 1],
        };
        assert_eq!(s.total_tables(), 3);
    }
}
