//! Page-by-page text recovery for paged documents

use crate::error::Result;
use log::{debug, warn};

/// A document whose text can be pulled one page at a time.
///
/// Pages are addressed by zero-based index in reading order.
pub trait PageSource {
    fn page_count(&self) -> usize;
    fn page_text(&self, index: usize) -> Result<String>;
}

/// Outcome of extracting a single page
#[derive(Debug, Clone, PartialEq)]
pub enum PageOutcome {
    Recovered(String),
    Failed,
}

impl PageOutcome {
    pub fn from_result(index: usize, result: Result<String>) -> Self {
        match result {
            Ok(text) => PageOutcome::Recovered(text),
            Err(e) => {
                warn!("Skipping page {}: {}", index + 1, e);
                PageOutcome::Failed
            }
        }
    }
}

/// Extract up to `max_pages` pages and join the recovered text with newlines.
///
/// A failing page contributes nothing; later pages are still read.
pub fn collect_pages<S: PageSource + ?Sized>(source: &S, max_pages: usize) -> String {
    let limit = source.page_count().min(max_pages);
    debug!("Reading {} of {} pages", limit, source.page_count());

    let recovered: Vec<String> = (0..limit)
        .map(|index| PageOutcome::from_result(index, source.page_text(index)))
        .filter_map(|outcome| match outcome {
            PageOutcome::Recovered(text) => Some(text),
            PageOutcome::Failed => None,
        })
        .collect();

    recovered.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WellnessError;
    use std::cell::Cell;

    struct FakePages {
        pages: Vec<Option<&'static str>>,
        reads: Cell<usize>,
    }

    impl FakePages {
        fn new(pages: Vec<Option<&'static str>>) -> Self {
            Self { pages, reads: Cell::new(0) }
        }
    }

    impl PageSource for FakePages {
        fn page_count(&self) -> usize {
            self.pages.len()
        }

        fn page_text(&self, index: usize) -> Result<String> {
            self.reads.set(self.reads.get() + 1);
            self.pages[index]
                .map(str::to_string)
                .ok_or_else(|| WellnessError::PdfExtraction(format!("bad content stream on page {}", index + 1)))
        }
    }

    #[test]
    fn test_failed_page_is_skipped() {
        let source = FakePages::new(vec![Some("one"), Some("two"), None, Some("four"), Some("five")]);
        assert_eq!(collect_pages(&source, 5), "one\ntwo\nfour\nfive");
    }

    #[test]
    fn test_page_cap_bounds_reads() {
        let source = FakePages::new(vec![Some("p"); 8]);
        let text = collect_pages(&source, 5);
        assert_eq!(text.lines().count(), 5);
        assert_eq!(source.reads.get(), 5);
    }

    #[test]
    fn test_empty_recovered_pages_keep_their_slot() {
        let source = FakePages::new(vec![Some("first"), Some(""), Some("third")]);
        assert_eq!(collect_pages(&source, 5), "first\n\nthird");
    }

    #[test]
    fn test_all_pages_failing_yields_empty_text() {
        let source = FakePages::new(vec![None, None]);
        assert_eq!(collect_pages(&source, 5), "");
    }
}
