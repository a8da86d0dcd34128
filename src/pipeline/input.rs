//! Input resolution: validate the user-supplied path before parsing.
//!
//! We check existence, read permission, and the `%PDF` magic bytes up front
//! so callers get a precise error ("this is a ZIP archive") rather than a
//! generic parse failure from deep inside the extraction library.

use crate::error::Pdf2MdError;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Validate that `path` names a readable PDF file and return it.
pub fn resolve_input(path: &Path) -> Result<PathBuf, Pdf2MdError> {
    let path = path.to_path_buf();

    if !path.exists() {
        return Err(Pdf2MdError::FileNotFound { path });
    }

    match std::fs::File::open(&path) {
        Ok(mut f) => {
            let mut magic = [0u8; 4];
            if f.read_exact(&mut magic).is_ok() && &magic != b"%PDF" {
                return Err(Pdf2MdError::NotAPdf { path, magic });
            }
        }
        Err(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
            return Err(Pdf2MdError::PermissionDenied { path });
        }
        Err(_) => {
            return Err(Pdf2MdError::FileNotFound { path });
        }
    }

    debug!("Resolved input PDF: {}", path.display());
    Ok(path)
}

/// The input file's stem (base name without extension), used as the default
/// output file prefix.
pub fn source_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_is_rejected() {
        let err = resolve_input(Path::new("/no/such/file.pdf"));
        assert!(matches!(err, Err(Pdf2MdError::FileNotFound { .. })));
    }

    #[test]
    fn non_pdf_magic_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("archive.pdf");
        std::fs::File::create(&path)
            .unwrap()
            .write_all(b"PK\x03\x04 not a pdf")
            .unwrap();

        let err = resolve_input(&path);
        assert!(matches!(err, Err(Pdf2MdError::NotAPdf { .. })));
    }

    #[test]
    fn pdf_magic_is_accepted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.pdf");
        std::fs::File::create(&path)
            .unwrap()
            .write_all(b"%PDF-1.7\n")
            .unwrap();

        let resolved = resolve_input(&path).unwrap();
        assert_eq!(resolved, path);
    }

    #[test]
    fn stem_strips_extension() {
        assert_eq!(source_stem(Path::new("/tmp/report.pdf")), "report");
        assert_eq!(source_stem(Path::new("notes.v2.pdf")), "notes.v2");
    }
}
