use super::debounce::Debouncer;
use super::state::{BrowsePhase, BrowseState, LoadingKind};
use crate::catalog::MovieCatalog;
use crate::config::{BrowseConfig, ImageConfig};
use crate::error::FetchError;
use crate::presentation::{MovieCard, MovieDetail};
use movieflix_contracts::ui::{
    BrowseObserver, NoopBrowseObserver, UiErrorReporter,
};
use movieflix_model::Movie;
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::runtime::Handle;
use tracing::{debug, info, warn};

/// Drives the movie list: first load, pull-to-refresh, infinite scroll and
/// debounced search.
///
/// Cheap to clone; clones share the same state. Async operations must run
/// inside a tokio runtime. [`on_search_text_changed`] may be called from any
/// thread and spawns onto the runtime captured when the controller was built.
///
/// [`on_search_text_changed`]: BrowseController::on_search_text_changed
#[derive(Clone)]
pub struct BrowseController {
    inner: Arc<Inner>,
}

struct Inner {
    catalog: Arc<dyn MovieCatalog>,
    reporter: Arc<dyn UiErrorReporter>,
    observer: Arc<dyn BrowseObserver>,
    config: BrowseConfig,
    images: ImageConfig,
    state: Mutex<BrowseState>,
    started: AtomicBool,
    debouncer: Debouncer,
}

pub struct BrowseControllerBuilder {
    catalog: Arc<dyn MovieCatalog>,
    reporter: Arc<dyn UiErrorReporter>,
    observer: Arc<dyn BrowseObserver>,
    config: BrowseConfig,
    images: ImageConfig,
    runtime: Option<Handle>,
}

impl BrowseControllerBuilder {
    pub fn observer(mut self, observer: Arc<dyn BrowseObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn config(mut self, config: BrowseConfig) -> Self {
        self.config = config;
        self
    }

    pub fn images(mut self, images: ImageConfig) -> Self {
        self.images = images;
        self
    }

    /// Runtime that debounced searches are spawned on. Defaults to the
    /// runtime `build` is called from, if any.
    pub fn runtime(mut self, runtime: Handle) -> Self {
        self.runtime = Some(runtime);
        self
    }

    pub fn build(self) -> BrowseController {
        let delay = self.config.search_debounce();
        let runtime = self.runtime.or_else(|| Handle::try_current().ok());
        let debouncer = match runtime {
            Some(runtime) => Debouncer::with_runtime(delay, runtime),
            None => Debouncer::new(delay),
        };

        BrowseController {
            inner: Arc::new(Inner {
                catalog: self.catalog,
                reporter: self.reporter,
                observer: self.observer,
                debouncer,
                config: self.config,
                images: self.images,
                state: Mutex::new(BrowseState::default()),
                started: AtomicBool::new(false),
            }),
        }
    }
}

impl fmt::Debug for BrowseControllerBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BrowseControllerBuilder")
            .field("catalog", &self.catalog)
            .field("config", &self.config)
            .field("images", &self.images)
            .finish_non_exhaustive()
    }
}

impl BrowseController {
    pub fn builder(
        catalog: Arc<dyn MovieCatalog>,
        reporter: Arc<dyn UiErrorReporter>,
    ) -> BrowseControllerBuilder {
        BrowseControllerBuilder {
            catalog,
            reporter,
            observer: Arc::new(NoopBrowseObserver),
            config: BrowseConfig::default(),
            images: ImageConfig::default(),
            runtime: None,
        }
    }

    pub fn new(
        catalog: Arc<dyn MovieCatalog>,
        reporter: Arc<dyn UiErrorReporter>,
    ) -> Self {
        Self::builder(catalog, reporter).build()
    }

    /// Load the popular listing's first page. Only the first call does
    /// anything.
    pub async fn load_initial(&self) {
        if self.inner.started.swap(true, Ordering::SeqCst) {
            debug!("initial load already performed");
            return;
        }
        self.reload(LoadingKind::Initial).await;
    }

    /// Replace the list with page 1 of the current query.
    pub async fn refresh(&self) {
        self.reload(LoadingKind::Refresh).await;
    }

    /// Fetch and append the next page when `visible_index` is the last row.
    ///
    /// Calls for any other row, while a page is in flight, or after the end
    /// was reached are ignored.
    pub async fn load_next_page_if_needed(&self, visible_index: usize) {
        let request = self.inner.state.lock().begin_next_page(visible_index);
        let Some(request) = request else {
            return;
        };

        debug!(
            page = request.page,
            query = %request.query,
            "loading next page"
        );
        let result = self
            .inner
            .catalog
            .fetch_page(request.page, &request.query)
            .await;

        match result {
            Ok(list) => {
                let appended = {
                    let mut state = self.inner.state.lock();
                    state
                        .finish_next_page(list.results)
                        .then(|| state.items.clone())
                };
                match appended {
                    Some(items) => self.inner.observer.items_changed(&items),
                    None => info!(page = request.page, "reached the last page"),
                }
            }
            Err(err) => {
                self.inner.state.lock().fail_next_page(err.to_string());
                self.report(&err);
            }
        }
    }

    /// Record new search text and schedule a page-1 reload after the
    /// debounce window. Each call supersedes the previous pending one.
    ///
    /// Empty text goes back to the popular listing.
    pub fn on_search_text_changed(&self, text: impl Into<String>) {
        let text = text.into();
        {
            let mut state = self.inner.state.lock();
            state.set_query(text);
            state.search_pending = true;
        }
        self.inner.observer.loading_changed(true);

        let controller = self.clone();
        let scheduled = self.inner.debouncer.schedule(async move {
            controller.run_pending_search().await;
        });
        if !scheduled {
            self.inner.state.lock().search_pending = false;
            self.inner.observer.loading_changed(false);
        }
    }

    /// Search immediately, dropping any pending debounced search.
    pub async fn submit_search(&self, text: impl Into<String>) {
        self.inner.debouncer.cancel();
        let kind = {
            let mut state = self.inner.state.lock();
            state.set_query(text.into());
            state.search_pending = false;
            search_kind(&state.search_query)
        };
        self.reload(kind).await;
    }

    /// Hand `movie` to the detail view.
    pub fn select_movie(&self, movie: Movie) {
        debug!(id = ?movie.id, "movie selected");
        self.inner.observer.present_detail(movie);
    }

    /// Select by list position. Returns `false` when `index` is out of range.
    pub fn select_index(&self, index: usize) -> bool {
        let movie = self.inner.state.lock().items.get(index).cloned();
        match movie {
            Some(movie) => {
                self.select_movie(movie);
                true
            }
            None => false,
        }
    }

    pub fn snapshot(&self) -> BrowseState {
        self.inner.state.lock().clone()
    }

    pub fn items(&self) -> Vec<Movie> {
        self.inner.state.lock().items.clone()
    }

    pub fn phase(&self) -> BrowsePhase {
        self.inner.state.lock().phase()
    }

    pub fn search_query(&self) -> String {
        self.inner.state.lock().search_query.clone()
    }

    pub fn config(&self) -> &BrowseConfig {
        &self.inner.config
    }

    pub fn cards(&self) -> Vec<MovieCard> {
        self.inner
            .state
            .lock()
            .items
            .iter()
            .map(|movie| MovieCard::new(movie, &self.inner.images))
            .collect()
    }

    pub fn detail(&self, movie: Movie) -> MovieDetail {
        MovieDetail::new(movie, &self.inner.images)
    }

    async fn run_pending_search(&self) {
        let kind = {
            let mut state = self.inner.state.lock();
            state.search_pending = false;
            search_kind(&state.search_query)
        };
        self.reload(kind).await;
    }

    async fn reload(&self, kind: LoadingKind) {
        let request = self.inner.state.lock().begin_reload(kind);
        self.inner.observer.loading_changed(true);
        info!(?kind, query = %request.query, "loading first page");

        match self
            .inner
            .catalog
            .fetch_page(request.page, &request.query)
            .await
        {
            Ok(list) => {
                let items = {
                    let mut state = self.inner.state.lock();
                    state.apply_reload(list.results);
                    state.items.clone()
                };
                debug!(
                    count = items.len(),
                    total_pages = list.total_pages,
                    "first page loaded"
                );
                self.inner.observer.items_changed(&items);
            }
            Err(err) => {
                self.inner.state.lock().fail(err.to_string());
                self.report(&err);
            }
        }

        let settle = self.inner.config.loading_settle();
        if !settle.is_zero() {
            tokio::time::sleep(settle).await;
        }
        self.inner.state.lock().end_loading();
        self.inner.observer.loading_changed(false);
    }

    fn report(&self, err: &FetchError) {
        if err.is_offline() {
            warn!("catalog unreachable: {err}");
        } else {
            warn!(error = %err, "catalog fetch failed");
        }
        self.inner.reporter.report(err.title(), &err.to_string());
    }
}

fn search_kind(query: &str) -> LoadingKind {
    if query.is_empty() {
        LoadingKind::Refresh
    } else {
        LoadingKind::Search
    }
}

impl fmt::Debug for BrowseController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.state.lock();
        f.debug_struct("BrowseController")
            .field("catalog", &self.inner.catalog)
            .field("items", &state.items.len())
            .field("current_page", &state.current_page)
            .field("phase", &state.phase())
            .field("debouncer", &self.inner.debouncer)
            .finish_non_exhaustive()
    }
}
