//! Pipeline stages for PDF-to-Markdown conversion.
//!
//! Each submodule implements exactly one transformation step.
//! Keeping stages separate makes each independently testable and lets us
//! swap implementations (e.g. switch the extraction backend) without
//! touching other stages.
//!
//! ## Data Flow
//!
//! ```text
//! input ──▶ extract ──▶ markdown ──▶ write
//! (path)  (pdfplumber)  (pipe tables) (files)
//! ```
//!
//! 1. [`input`]    — validate the user-supplied path and PDF magic bytes
//! 2. [`extract`]  — per-page text and table grids via pdfplumber
//! 3. [`markdown`] — render table grids and page bodies as Markdown text
//! 4. [`write`]    — per-page or single-file output in the target directory

pub mod extract;
pub mod input;
pub mod markdown;
pub mod write;
