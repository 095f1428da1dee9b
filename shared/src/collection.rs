//! Query state and fetched page of the devotional list.
//!
//! The controller never performs I/O. Every state change that needs data
//! returns a [`FetchRequest`]; the caller runs it and reports back through
//! [`CollectionController::complete`]. Requests carry a sequence number and
//! only the most recently issued one is allowed to land.

use std::ops::RangeInclusive;

use crate::{
    error::{ApiError, ValidationError},
    model::{Category, CategoryTab, Devotional, PageSlice},
    notice::Notice,
    pagination::{page_window, DEFAULT_WINDOW},
};

/// Page size used when the caller does not pick one.
pub const DEFAULT_PAGE_SIZE: usize = 10;

const LOAD_FAILED: &str = "Failed to load devotionals";

/// Filter, search, and page currently asked of the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionQuery {
    /// Active category tab.
    pub tab: CategoryTab,
    /// Free-text search, empty when unfiltered.
    pub search: String,
    /// 1-based page number.
    pub page: usize,
}

impl Default for CollectionQuery {
    fn default() -> Self {
        Self {
            tab: CategoryTab::All,
            search: String::new(),
            page: 1,
        }
    }
}

/// One list call the caller should run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    /// Sequence number to hand back to [`CollectionController::complete`].
    pub seq: u64,
    /// Category filter, `None` when unfiltered.
    pub category: Option<Category>,
    /// 1-based page.
    pub page: usize,
    /// Items per page.
    pub page_size: usize,
    /// Trimmed search text, `None` when blank.
    pub search: Option<String>,
}

impl FetchRequest {
    /// Category whose endpoint serves this request. Unfiltered lists are
    /// served by the baseline category.
    pub fn endpoint_category(&self) -> Category {
        self.category.unwrap_or_default()
    }
}

/// What happened to a completed fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// The slice was replaced.
    Applied,
    /// The slice was replaced but the current page no longer exists; the page
    /// was clamped and this follow-up request must be run.
    Reissue(FetchRequest),
    /// A newer request is outstanding; the response was dropped.
    Stale,
    /// The fetch failed; the displayed slice is untouched.
    Failed(Notice),
}

/// Owns the list view state of one dashboard instance.
#[derive(Debug, Clone)]
pub struct CollectionController {
    query: CollectionQuery,
    slice: Option<PageSlice>,
    page_size: usize,
    window: usize,
    issued: u64,
    loading: bool,
}

impl Default for CollectionController {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE, DEFAULT_WINDOW)
    }
}

impl CollectionController {
    /// Controller with nothing loaded yet.
    pub fn new(page_size: usize, window: usize) -> Self {
        Self {
            query: CollectionQuery::default(),
            slice: None,
            page_size: page_size.max(1),
            window: window.max(1),
            issued: 0,
            loading: false,
        }
    }

    /// Current query.
    pub fn query(&self) -> &CollectionQuery {
        &self.query
    }

    /// Last successfully fetched page, if any.
    pub fn slice(&self) -> Option<&PageSlice> {
        self.slice.as_ref()
    }

    /// Records to display; empty before the first successful fetch.
    pub fn records(&self) -> &[Devotional] {
        self.slice
            .as_ref()
            .map(|slice| slice.records.as_slice())
            .unwrap_or_default()
    }

    /// Total pages as last reported, 1 until known.
    pub fn total_pages(&self) -> usize {
        self.slice.as_ref().map_or(1, |slice| slice.total_pages)
    }

    /// Total items as last reported, 0 until known.
    pub fn total_items(&self) -> usize {
        self.slice.as_ref().map_or(0, |slice| slice.total_items)
    }

    /// True while the latest issued request has not completed.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Items per page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Pager buttons to show.
    pub fn page_window(&self) -> RangeInclusive<usize> {
        page_window(self.query.page, self.total_pages(), self.window)
    }

    /// Switches the category tab and goes back to page 1.
    pub fn set_category(&mut self, tab: CategoryTab) -> FetchRequest {
        tracing::debug!(?tab, "category tab changed");
        self.query.tab = tab;
        self.query.page = 1;
        self.issue()
    }

    /// Replaces the search text. The current page is kept.
    pub fn set_search(&mut self, text: &str) -> FetchRequest {
        self.query.search = text.to_string();
        self.issue()
    }

    /// Navigates to `page` if it exists. Out-of-range pages leave the state
    /// untouched.
    pub fn go_to_page(&mut self, page: i64) -> Result<FetchRequest, ValidationError> {
        let total_pages = self.total_pages();
        let target = usize::try_from(page)
            .ok()
            .filter(|target| (1..=total_pages).contains(target))
            .ok_or(ValidationError::PageOutOfRange {
                requested: page,
                total_pages,
            })?;
        self.query.page = target;
        Ok(self.issue())
    }

    /// Parses a "go to page" entry and navigates to it.
    pub fn jump_to_page(&mut self, input: &str) -> Result<FetchRequest, ValidationError> {
        let page = input
            .trim()
            .parse::<i64>()
            .map_err(|_| ValidationError::InvalidPageNumber {
                input: input.to_string(),
                total_pages: self.total_pages(),
            })?;
        self.go_to_page(page)
    }

    /// Re-issues the current query.
    pub fn refresh(&mut self) -> FetchRequest {
        self.issue()
    }

    /// Applies the result of the request tagged `seq`.
    pub fn complete(&mut self, seq: u64, result: Result<PageSlice, ApiError>) -> FetchOutcome {
        if seq != self.issued {
            tracing::debug!(seq, latest = self.issued, "dropping stale list response");
            return FetchOutcome::Stale;
        }
        self.loading = false;

        match result {
            Ok(mut slice) => {
                slice.total_pages = slice.total_pages.max(1);
                let total_pages = slice.total_pages;
                self.slice = Some(slice);
                if self.query.page > total_pages {
                    tracing::debug!(
                        page = self.query.page,
                        total_pages,
                        "current page vanished, clamping"
                    );
                    self.query.page = total_pages;
                    return FetchOutcome::Reissue(self.issue());
                }
                FetchOutcome::Applied
            },
            Err(err) => {
                tracing::warn!(seq, error = %err, "failed to load devotionals");
                FetchOutcome::Failed(Notice::error(LOAD_FAILED))
            },
        }
    }

    fn issue(&mut self) -> FetchRequest {
        self.issued += 1;
        self.loading = true;
        let search = self.query.search.trim();
        let request = FetchRequest {
            seq: self.issued,
            category: self.query.tab.filter(),
            page: self.query.page,
            page_size: self.page_size,
            search: (!search.is_empty()).then(|| search.to_string()),
        };
        tracing::debug!(?request, "issuing list request");
        request
    }
}
