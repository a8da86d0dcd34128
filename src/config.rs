//! Configuration types for PDF-to-Markdown conversion.
//!
//! All conversion behaviour is controlled through [`ConvertOptions`], built
//! via its [`ConvertOptionsBuilder`]. Keeping every knob in one struct makes
//! it trivial to pass the whole configuration through the pipeline by
//! reference and to diff two runs to understand why their outputs differ.
//! Options are immutable once built.

use crate::error::Pdf2MdError;
use crate::progress::ProgressCallback;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Configuration for a PDF-to-Markdown conversion.
///
/// Built via [`ConvertOptions::builder()`] or using
/// [`ConvertOptions::default()`].
///
/// # Example
/// ```rust
/// use pdf2md_plumber::{ConvertOptions, OutputMode, TableStrategy};
///
/// let options = ConvertOptions::builder()
///     .output_dir("out")
///     .output_mode(OutputMode::Single)
///     .strategy(TableStrategy::Lines)
///     .file_prefix("merged")
///     .build()
///     .unwrap();
/// ```
#[derive(Clone)]
pub struct ConvertOptions {
    /// Directory that output files are written to. Created if absent.
    /// Default: `./output`.
    pub output_dir: PathBuf,

    /// One Markdown file per page, or a single combined file.
    /// Default: [`OutputMode::PerPage`].
    pub output_mode: OutputMode,

    /// File-name prefix for output files. When `None`, the input file's stem
    /// (base name without extension) is used.
    pub file_prefix: Option<String>,

    /// Table-detection strategy passed through to the extraction library.
    /// Default: [`TableStrategy::Text`].
    ///
    /// `Lines` detects cell boundaries from ruled lines and works best on
    /// bordered tables; `Text` infers boundaries from text alignment and
    /// catches borderless tables at the cost of occasional false positives.
    pub strategy: TableStrategy,

    /// Separator inserted between pages in single-file output.
    /// Default: [`PageSeparator::HorizontalRule`].
    pub page_separator: PageSeparator,

    /// Per-page progress events. Default: none.
    pub progress_callback: Option<ProgressCallback>,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("./output"),
            output_mode: OutputMode::default(),
            file_prefix: None,
            strategy: TableStrategy::default(),
            page_separator: PageSeparator::default(),
            progress_callback: None,
        }
    }
}

impl fmt::Debug for ConvertOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConvertOptions")
            .field("output_dir", &self.output_dir)
            .field("output_mode", &self.output_mode)
            .field("file_prefix", &self.file_prefix)
            .field("strategy", &self.strategy)
            .field("page_separator", &self.page_separator)
            .field(
                "progress_callback",
                &self.progress_callback.as_ref().map(|_| "<dyn callback>"),
            )
            .finish()
    }
}

impl ConvertOptions {
    /// Create a new builder for `ConvertOptions`.
    pub fn builder() -> ConvertOptionsBuilder {
        ConvertOptionsBuilder {
            options: Self::default(),
        }
    }
}

/// Builder for [`ConvertOptions`].
#[derive(Debug)]
pub struct ConvertOptionsBuilder {
    options: ConvertOptions,
}

impl ConvertOptionsBuilder {
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.options.output_dir = dir.into();
        self
    }

    pub fn output_mode(mut self, mode: OutputMode) -> Self {
        self.options.output_mode = mode;
        self
    }

    pub fn file_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.options.file_prefix = Some(prefix.into());
        self
    }

    pub fn strategy(mut self, strategy: TableStrategy) -> Self {
        self.options.strategy = strategy;
        self
    }

    pub fn page_separator(mut self, sep: PageSeparator) -> Self {
        self.options.page_separator = sep;
        self
    }

    pub fn progress_callback(mut self, cb: ProgressCallback) -> Self {
        self.options.progress_callback = Some(cb);
        self
    }

    /// Build the options, validating constraints.
    ///
    /// The prefix becomes part of output file names, so it must not be empty
    /// and must not contain path separators.
    pub fn build(self) -> Result<ConvertOptions, Pdf2MdError> {
        if let Some(ref prefix) = self.options.file_prefix {
            if prefix.is_empty() {
                return Err(Pdf2MdError::InvalidConfig(
                    "File prefix must not be empty".into(),
                ));
            }
            if prefix.contains('/') || prefix.contains('\\') {
                return Err(Pdf2MdError::InvalidConfig(format!(
                    "File prefix must not contain path separators, got '{prefix}'"
                )));
            }
        }
        Ok(self.options)
    }
}

// ── Enums ────────────────────────────────────────────────────────────────

/// Whether output is one Markdown file per page or a single combined file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputMode {
    /// One `{prefix}_page_{N}.md` file per page. (default)
    #[default]
    PerPage,
    /// All pages concatenated into one `{prefix}.md` file.
    Single,
}

/// Named heuristic controlling how the extraction library detects table
/// cell boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TableStrategy {
    /// Detect cells from ruled lines (bordered tables).
    Lines,
    /// Infer cells from text alignment (borderless tables). (default)
    #[default]
    Text,
}

impl TableStrategy {
    /// The CLI-facing name of the strategy.
    pub fn as_str(&self) -> &'static str {
        match self {
            TableStrategy::Lines => "lines",
            TableStrategy::Text => "text",
        }
    }
}

impl fmt::Display for TableStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How to separate pages in single-file Markdown output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageSeparator {
    /// Horizontal rule between pages, none after the last. (default)
    #[default]
    HorizontalRule,
    /// No separator; pages joined with a blank line.
    None,
    /// HTML comment with the page number of the following page.
    Comment,
    /// Custom string inserted between pages.
    Custom(String),
}

impl PageSeparator {
    /// Render the separator string preceding the given page (1-indexed).
    pub fn render(&self, page_num: usize) -> String {
        match self {
            PageSeparator::HorizontalRule => "\n\n---\n\n".to_string(),
            PageSeparator::None => "\n\n".to_string(),
            PageSeparator::Comment => format!("\n\n<!-- page {} -->\n\n", page_num),
            PageSeparator::Custom(s) => format!("\n\n{}\n\n", s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let opts = ConvertOptions::default();
        assert_eq!(opts.output_dir, PathBuf::from("./output"));
        assert_eq!(opts.output_mode, OutputMode::PerPage);
        assert_eq!(opts.strategy, TableStrategy::Text);
        assert_eq!(opts.page_separator, PageSeparator::HorizontalRule);
        assert!(opts.file_prefix.is_none());
    }

    #[test]
    fn builder_sets_all_fields() {
        let opts = ConvertOptions::builder()
            .output_dir("/tmp/md")
            .output_mode(OutputMode::Single)
            .file_prefix("merged")
            .strategy(TableStrategy::Lines)
            .page_separator(PageSeparator::None)
            .build()
            .unwrap();
        assert_eq!(opts.output_dir, PathBuf::from("/tmp/md"));
        assert_eq!(opts.output_mode, OutputMode::Single);
        assert_eq!(opts.file_prefix.as_deref(), Some("merged"));
        assert_eq!(opts.strategy, TableStrategy::Lines);
    }

    #[test]
    fn builder_rejects_empty_prefix() {
        let err = ConvertOptions::builder().file_prefix("").build();
        assert!(matches!(err, Err(Pdf2MdError::InvalidConfig(_))));
    }

    #[test]
    fn builder_rejects_prefix_with_separator() {
        let err = ConvertOptions::builder().file_prefix("a/b").build();
        assert!(matches!(err, Err(Pdf2MdError::InvalidConfig(_))));
    }

    #[test]
    fn separator_render() {
        assert_eq!(PageSeparator::HorizontalRule.render(2), "\n\n---\n\n");
        assert_eq!(PageSeparator::None.render(2), "\n\n");
        assert_eq!(PageSeparator::Comment.render(3), "\n\n<!-- page 3 -->\n\n");
        assert_eq!(
            PageSeparator::Custom("* * *".into()).render(2),
            "\n\n* * *\n\n"
        );
    }

    #[test]
    fn strategy_display() {
        assert_eq!(TableStrategy::Lines.to_string(), "lines");
        assert_eq!(TableStrategy::Text.to_string(), "text");
    }
}
