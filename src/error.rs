//! Error types for the pdf2md-plumber library.
//!
//! Everything here is fatal: the conversion pipeline has no retry or
//! partial-recovery path. An unreadable file, a parse failure on any page,
//! or an unwritable output directory terminates the run, and the CLI maps
//! the error to a non-zero exit status with the message on stderr.

use std::path::PathBuf;
use thiserror::Error;

/// All errors returned by the pdf2md-plumber library.
#[derive(Debug, Error)]
pub enum Pdf2MdError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// Input file was not found at the given path.
    #[error("PDF file not found: '{path}'\nCheck the path exists and is readable.")]
    FileNotFound { path: PathBuf },

    /// Process does not have read permission on the file.
    #[error("Permission denied reading '{path}'\nTry: chmod +r {path:?}")]
    PermissionDenied { path: PathBuf },

    /// The file exists and was read, but is not a PDF.
    #[error("File is not a valid PDF: '{path}'\nFirst bytes: {magic:?}")]
    NotAPdf { path: PathBuf, magic: [u8; 4] },

    // ── Extraction errors ─────────────────────────────────────────────────
    /// The underlying library could not open or parse the document.
    #[error("Failed to parse PDF '{path}': {detail}")]
    ParseFailed { path: PathBuf, detail: String },

    /// Extraction failed on a specific page. Aborts the whole conversion.
    #[error("Extraction failed on page {page}: {detail}")]
    PageFailed { page: usize, detail: String },

    // ── I/O errors ────────────────────────────────────────────────────────
    /// Could not create the output directory.
    #[error("Failed to create output directory '{path}': {source}")]
    CreateDirFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Could not write an output Markdown file.
    #[error("Failed to write output file '{path}': {source}")]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_failed_display() {
        let e = Pdf2MdError::PageFailed {
            page: 7,
            detail: "bad content stream".into(),
        };
        let msg = e.to_string();
        assert!(msg.contains("page 7"), "got: {msg}");
        assert!(msg.contains("bad content stream"));
    }

    #[test]
    fn not_a_pdf_display_includes_path() {
        let e = Pdf2MdError::NotAPdf {
            path: PathBuf::from("notes.txt"),
            magic: *b"PK\x03\x04",
        };
        assert!(e.to_string().contains("notes.txt"));
    }

    #[test]
    fn write_failed_carries_source() {
        use std::error::Error;
        let e = Pdf2MdError::OutputWriteFailed {
            path: PathBuf::from("/nope/out.md"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(e.source().is_some());
    }
}
