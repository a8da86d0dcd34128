//! Progress-callback trait for per-page extraction events.
//!
//! Inject an [`Arc<dyn ConvertProgressCallback>`] via
//! [`crate::config::ConvertOptionsBuilder::progress_callback`] to receive
//! events as the pipeline extracts each page. The callback approach is the
//! least-invasive integration point: callers can forward events to a
//! terminal progress bar, a log file, or a database record without the
//! library knowing anything about how the host application communicates.
//!
//! Pages are extracted strictly in document order on the calling thread, so
//! events arrive in order; the trait is still `Send + Sync` so the same
//! callback can be shared with other threads the host may own.

use std::sync::Arc;

/// Called by the conversion pipeline as it extracts each page.
///
/// All methods have default no-op implementations so callers only override
/// what they care about.
pub trait ConvertProgressCallback: Send + Sync {
    /// Called once after the document is opened, before any page is read.
    ///
    /// # Arguments
    /// * `total_pages` — number of pages in the document
    fn on_convert_start(&self, total_pages: usize) {
        let _ = total_pages;
    }

    /// Called when a page's text and tables have been extracted.
    ///
    /// # Arguments
    /// * `page_num`    — 1-indexed page number
    /// * `total_pages` — total pages in the document
    /// * `table_count` — number of tables detected on this page
    fn on_page_extracted(&self, page_num: usize, total_pages: usize, table_count: usize) {
        let _ = (page_num, total_pages, table_count);
    }

    /// Called once after the last page has been extracted.
    ///
    /// # Arguments
    /// * `total_pages`  — total pages in the document
    /// * `total_tables` — tables detected across all pages
    fn on_convert_complete(&self, total_pages: usize, total_tables: usize) {
        let _ = (total_pages, total_tables);
    }
}

/// A no-op implementation for callers that don't need progress events.
pub struct NoopProgressCallback;

impl ConvertProgressCallback for NoopProgressCallback {}

/// Convenience alias matching the type stored in [`crate::config::ConvertOptions`].
pub type ProgressCallback = Arc<dyn ConvertProgressCallback>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct TrackingCallback {
        pages: AtomicUsize,
        started_total: AtomicUsize,
        completed_tables: AtomicUsize,
    }

    impl ConvertProgressCallback for TrackingCallback {
        fn on_convert_start(&self, total_pages: usize) {
            self.started_total.store(total_pages, Ordering::SeqCst);
        }

        fn on_page_extracted(&self, _page_num: usize, _total_pages: usize, _table_count: usize) {
            self.pages.fetch_add(1, Ordering::SeqCst);
        }

        fn on_convert_complete(&self, _total_pages: usize, total_tables: usize) {
            self.completed_tables.store(total_tables, Ordering::SeqCst);
        }
    }

    #[test]
    fn noop_callback_does_not_panic() {
        let cb = NoopProgressCallback;
        cb.on_convert_start(3);
        cb.on_page_extracted(1, 3, 0);
        cb.on_convert_complete(3, 2);
    }

    #[test]
    fn tracking_callback_receives_events() {
        let tracker = TrackingCallback {
            pages: AtomicUsize::new(0),
            started_total: AtomicUsize::new(0),
            completed_tables: AtomicUsize::new(0),
        };

        tracker.on_convert_start(2);
        tracker.on_page_extracted(1, 2, 1);
        tracker.on_page_extracted(2, 2, 2);
        tracker.on_convert_complete(2, 3);

        assert_eq!(tracker.started_total.load(Ordering::SeqCst), 2);
        assert_eq!(tracker.pages.load(Ordering::SeqCst), 2);
        assert_eq!(tracker.completed_tables.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn arc_dyn_callback_works() {
        let cb: Arc<dyn ConvertProgressCallback> = Arc::new(NoopProgressCallback);
        cb.on_convert_start(10);
        cb.on_page_extracted(1, 10, 0);
    }
}
