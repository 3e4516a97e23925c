use crate::catalog::PageRequest;
use movieflix_model::Movie;

/// Which full-list reload is showing the loading indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadingKind {
    Initial,
    Refresh,
    Search,
}

/// Coarse view of what the list is doing, derived from the state flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowsePhase {
    Idle,
    InitialLoading,
    Loaded,
    LoadingMore,
    Refreshing,
    SearchDebouncing,
    SearchLoading,
    Error,
}

/// Everything the list view renders from.
#[derive(Debug, Clone, PartialEq)]
pub struct BrowseState {
    /// Pages in fetch order.
    pub items: Vec<Movie>,
    /// Last page requested. Starts at 1.
    pub current_page: u32,
    /// Set once a page comes back empty.
    pub is_last_page: bool,
    /// A load-next-page request is in flight.
    pub is_fetching: bool,
    pub search_query: String,
    pub loading: Option<LoadingKind>,
    /// A keystroke is waiting out the debounce window.
    pub search_pending: bool,
    /// Message of the most recent failure, cleared by the next success.
    pub last_error: Option<String>,
    pub has_loaded: bool,
}

impl Default for BrowseState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            current_page: 1,
            is_last_page: false,
            is_fetching: false,
            search_query: String::new(),
            loading: None,
            search_pending: false,
            last_error: None,
            has_loaded: false,
        }
    }
}

impl BrowseState {
    pub fn phase(&self) -> BrowsePhase {
        if self.search_pending {
            return BrowsePhase::SearchDebouncing;
        }
        match self.loading {
            Some(LoadingKind::Initial) => return BrowsePhase::InitialLoading,
            Some(LoadingKind::Refresh) => return BrowsePhase::Refreshing,
            Some(LoadingKind::Search) => return BrowsePhase::SearchLoading,
            None => {}
        }
        if self.is_fetching {
            BrowsePhase::LoadingMore
        } else if self.last_error.is_some() {
            BrowsePhase::Error
        } else if self.has_loaded {
            BrowsePhase::Loaded
        } else {
            BrowsePhase::Idle
        }
    }

    /// Claim the load-more slot when `visible_index` is the last row, nothing
    /// is in flight and the end has not been reached.
    ///
    /// The page counter advances here, before the outcome is known.
    pub fn begin_next_page(
        &mut self,
        visible_index: usize,
    ) -> Option<PageRequest> {
        let last_index = self.items.len().checked_sub(1)?;
        if visible_index != last_index || self.is_fetching || self.is_last_page
        {
            return None;
        }

        self.is_fetching = true;
        self.current_page += 1;
        Some(PageRequest::new(self.current_page, self.search_query.clone()))
    }

    /// Returns `true` when rows were appended.
    pub fn finish_next_page(&mut self, results: Vec<Movie>) -> bool {
        self.is_fetching = false;
        self.last_error = None;
        if results.is_empty() {
            self.is_last_page = true;
            return false;
        }
        self.items.extend(results);
        true
    }

    pub fn fail_next_page(&mut self, message: String) {
        self.is_fetching = false;
        self.last_error = Some(message);
    }

    /// Reset paging for a page-1 reload. The initial load always lists
    /// popular movies, the others reuse the current query.
    pub fn begin_reload(&mut self, kind: LoadingKind) -> PageRequest {
        self.current_page = 1;
        self.is_last_page = false;
        self.loading = Some(kind);
        let query = match kind {
            LoadingKind::Initial => String::new(),
            LoadingKind::Refresh | LoadingKind::Search => {
                self.search_query.clone()
            }
        };
        PageRequest::new(1, query)
    }

    pub fn apply_reload(&mut self, results: Vec<Movie>) {
        self.items = results;
        self.current_page = 1;
        self.last_error = None;
        self.has_loaded = true;
    }

    pub fn fail(&mut self, message: String) {
        self.last_error = Some(message);
    }

    pub fn end_loading(&mut self) {
        self.loading = None;
    }

    /// A new query starts over from page 1.
    pub fn set_query(&mut self, text: String) {
        self.search_query = text;
        self.current_page = 1;
        self.is_last_page = false;
    }
}
