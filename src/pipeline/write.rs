//! Writing: persist the assembled Markdown to the output directory.
//!
//! Per-page mode writes `{prefix}_page_{N}.md`, single mode `{prefix}.md`.
//! The prefix defaults to the input file's stem. Output is deterministic:
//! re-running with the same input and options produces byte-identical files.

use crate::config::{ConvertOptions, OutputMode};
use crate::error::Pdf2MdError;
use crate::output::ConvertResult;
use std::path::{Path, PathBuf};
use tracing::info;

/// Write `result` to `options.output_dir`, creating it if absent.
///
/// Returns the created file paths in page order.
pub fn write_result(
    result: &ConvertResult,
    options: &ConvertOptions,
) -> Result<Vec<PathBuf>, Pdf2MdError> {
    std::fs::create_dir_all(&options.output_dir).map_err(|e| Pdf2MdError::CreateDirFailed {
        path: options.output_dir.clone(),
        source: e,
    })?;

    let prefix = options
        .file_prefix
        .as_deref()
        .unwrap_or(&result.source_name);

    let mut created = Vec::new();
    match options.output_mode {
        OutputMode::Single => {
            let path = options.output_dir.join(format!("{prefix}.md"));
            let content = result.to_single_markdown(&options.page_separator);
            write_file(&path, &content)?;
            created.push(path);
        }
        OutputMode::PerPage => {
            for page in &result.pages {
                let path = options
                    .output_dir
                    .join(format!("{prefix}_page_{}.md", page.page_number));
                write_file(&path, &page.to_markdown())?;
                created.push(path);
            }
        }
    }

    Ok(created)
}

fn write_file(path: &Path, content: &str) -> Result<(), Pdf2MdError> {
    std::fs::write(path, content).map_err(|e| Pdf2MdError::OutputWriteFailed {
        path: path.to_path_buf(),
        source: e,
    })?;
    info!("Created: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::{ConvertStats, PageContent};

    fn sample_result(pages: usize) -> ConvertResult {
        ConvertResult {
            source_name: "report".into(),
            pages: (1..=pages)
                .map(|n| PageContent {
                    page_number: n,
                    text: format!("Body of page {n}."),
                    tables: vec![],
                })
                .collect(),
            stats: ConvertStats {
                total_pages: pages,
                total_tables: 0,
                duration_ms: 0,
            },
        }
    }

    #[test]
    fn per_page_mode_writes_one_file_per_page() {
        let dir = tempfile::tempdir().unwrap();
        let options = ConvertOptions::builder()
            .output_dir(dir.path())
            .build()
            .unwrap();

        let files = write_result(&sample_result(3), &options).unwrap();
        assert_eq!(files.len(), 3);
        assert!(dir.path().join("report_page_1.md").exists());
        assert!(dir.path().join("report_page_3.md").exists());
    }

    #[test]
    fn single_mode_writes_one_file() {
        let dir = tempfile::tempdir().unwrap();
        let options = ConvertOptions::builder()
            .output_dir(dir.path())
            .output_mode(OutputMode::Single)
            .build()
            .unwrap();

        let files = write_result(&sample_result(3), &options).unwrap();
        assert_eq!(files, vec![dir.path().join("report.md")]);
    }

    #[test]
    fn explicit_prefix_overrides_source_name() {
        let dir = tempfile::tempdir().unwrap();
        let options = ConvertOptions::builder()
            .output_dir(dir.path())
            .output_mode(OutputMode::Single)
            .file_prefix("merged")
            .build()
            .unwrap();

        let files = write_result(&sample_result(2), &options).unwrap();
        assert_eq!(files, vec![dir.path().join("merged.md")]);
    }

    #[test]
    fn output_dir_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a/b/c");
        let options = ConvertOptions::builder()
            .output_dir(&nested)
            .build()
            .unwrap();

        write_result(&sample_result(1), &options).unwrap();
        assert!(nested.join("report_page_1.md").exists());
    }

    #[test]
    fn rewrite_is_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let options = ConvertOptions::builder()
            .output_dir(dir.path())
            .output_mode(OutputMode::Single)
            .build()
            .unwrap();

        let result = sample_result(2);
        let first = write_result(&result, &options).unwrap();
        let bytes_a = std::fs::read(&first[0]).unwrap();
        let second = write_result(&result, &options).unwrap();
        let bytes_b = std::fs::read(&second[0]).unwrap();
        assert_eq!(bytes_a, bytes_b);
    }
}
