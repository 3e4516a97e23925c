#![allow(dead_code)]

use async_trait::async_trait;
use movieflix_contracts::http::TransportError;
use movieflix_contracts::ui::{BrowseObserver, UiErrorReporter};
use movieflix_core::config::BrowseConfig;
use movieflix_core::{BrowseController, FetchError, MovieCatalog};
use movieflix_model::{Movie, MovieList};
use parking_lot::Mutex;
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug)]
pub enum Reply {
    Movies(Vec<i64>),
    Offline,
    Timeout,
    NoData,
}

/// Catalog double answering from a per-`(page, query)` script. Unscripted
/// requests get an empty page.
#[derive(Debug, Default)]
pub struct FakeCatalog {
    scripted: Mutex<HashMap<(u32, String), VecDeque<Reply>>>,
    latency: Mutex<HashMap<String, Duration>>,
    calls: Mutex<Vec<(u32, String)>>,
}

impl FakeCatalog {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn reply(&self, page: u32, query: &str, reply: Reply) -> &Self {
        self.scripted
            .lock()
            .entry((page, query.to_string()))
            .or_default()
            .push_back(reply);
        self
    }

    pub fn latency(&self, query: &str, delay: Duration) -> &Self {
        self.latency.lock().insert(query.to_string(), delay);
        self
    }

    pub fn calls(&self) -> Vec<(u32, String)> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl MovieCatalog for FakeCatalog {
    async fn fetch_page(
        &self,
        page: u32,
        query: &str,
    ) -> Result<MovieList, FetchError> {
        self.calls.lock().push((page, query.to_string()));

        let delay = self.latency.lock().get(query).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let reply = self
            .scripted
            .lock()
            .get_mut(&(page, query.to_string()))
            .and_then(VecDeque::pop_front);

        match reply {
            None => Ok(page_of(page, &[])),
            Some(Reply::Movies(ids)) => Ok(page_of(page, &ids)),
            Some(Reply::Offline) => Err(FetchError::Offline),
            Some(Reply::Timeout) => {
                Err(FetchError::Transport(TransportError::Timeout))
            }
            Some(Reply::NoData) => Err(FetchError::NoData),
        }
    }
}

pub fn movie(id: i64) -> Movie {
    Movie {
        id: Some(id),
        title: Some(format!("Movie {id}")),
        original_title: Some(format!("Original {id}")),
        vote_average: Some(7.0),
        ..Movie::default()
    }
}

pub fn page_of(page: u32, ids: &[i64]) -> MovieList {
    MovieList {
        page,
        results: ids.iter().copied().map(movie).collect(),
        total_pages: 5,
        total_results: 100,
    }
}

pub fn ids(items: &[Movie]) -> Vec<i64> {
    items.iter().filter_map(|movie| movie.id).collect()
}

#[derive(Debug, Default)]
pub struct RecordingReporter {
    reports: Mutex<Vec<(String, String)>>,
}

impl RecordingReporter {
    pub fn reports(&self) -> Vec<(String, String)> {
        self.reports.lock().clone()
    }
}

impl UiErrorReporter for RecordingReporter {
    fn report(&self, title: &str, message: &str) {
        self.reports
            .lock()
            .push((title.to_string(), message.to_string()));
    }
}

#[derive(Debug, Default)]
pub struct RecordingObserver {
    pub loading: Mutex<Vec<bool>>,
    pub item_counts: Mutex<Vec<usize>>,
    pub presented: Mutex<Vec<Movie>>,
}

impl BrowseObserver for RecordingObserver {
    fn loading_changed(&self, loading: bool) {
        self.loading.lock().push(loading);
    }

    fn items_changed(&self, items: &[Movie]) {
        self.item_counts.lock().push(items.len());
    }

    fn present_detail(&self, movie: Movie) {
        self.presented.lock().push(movie);
    }
}

pub struct Harness {
    pub controller: BrowseController,
    pub catalog: Arc<FakeCatalog>,
    pub reporter: Arc<RecordingReporter>,
    pub observer: Arc<RecordingObserver>,
}

impl Harness {
    pub fn new(catalog: Arc<FakeCatalog>) -> Self {
        Self::with_config(catalog, BrowseConfig::default())
    }

    pub fn with_config(
        catalog: Arc<FakeCatalog>,
        config: BrowseConfig,
    ) -> Self {
        let reporter = Arc::new(RecordingReporter::default());
        let observer = Arc::new(RecordingObserver::default());
        let controller =
            BrowseController::builder(catalog.clone(), reporter.clone())
                .observer(observer.clone())
                .config(config)
                .build();

        Self {
            controller,
            catalog,
            reporter,
            observer,
        }
    }

    pub fn item_ids(&self) -> Vec<i64> {
        ids(&self.controller.items())
    }
}
