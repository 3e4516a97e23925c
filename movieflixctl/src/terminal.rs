//! Terminal renderings of the browse callbacks.

use movieflix_contracts::ui::{BrowseObserver, UiErrorReporter};
use movieflix_core::config::ImageConfig;
use movieflix_core::presentation::{MovieCard, MovieDetail, star_glyphs};
use movieflix_model::Movie;
use parking_lot::Mutex;
use tracing::debug;

/// Prints reported failures to stderr and remembers them for the exit code.
#[derive(Debug, Default)]
pub struct TerminalReporter {
    failures: Mutex<Vec<String>>,
}

impl TerminalReporter {
    pub fn failure_count(&self) -> usize {
        self.failures.lock().len()
    }
}

impl UiErrorReporter for TerminalReporter {
    fn report(&self, title: &str, message: &str) {
        eprintln!("{title}: {message}");
        self.failures.lock().push(message.to_string());
    }
}

#[derive(Debug)]
pub struct TerminalObserver {
    images: ImageConfig,
}

impl TerminalObserver {
    pub fn new(images: ImageConfig) -> Self {
        Self { images }
    }
}

impl BrowseObserver for TerminalObserver {
    fn loading_changed(&self, loading: bool) {
        debug!(loading, "loading indicator");
    }

    fn items_changed(&self, items: &[Movie]) {
        debug!(count = items.len(), "list updated");
    }

    fn present_detail(&self, movie: Movie) {
        print!("{}", render_detail(&MovieDetail::new(movie, &self.images)));
    }
}

pub fn render_row(index: usize, card: &MovieCard) -> String {
    let title = card.title.as_deref().unwrap_or("-");
    let mut line = format!("{index:>4}  {title}");
    if let Some(date) = &card.release_date {
        line.push_str(&format!("  ({date})"));
    }
    if let Some(stars) = card.rating_glyphs() {
        line.push_str("  ");
        line.push_str(&stars);
    }
    line
}

pub fn render_detail(detail: &MovieDetail) -> String {
    let mut lines = vec![detail.heading.clone()];
    lines.extend(detail.rating.as_ref().map(star_glyphs));
    lines.extend(
        detail
            .release_date
            .as_ref()
            .map(|date| format!("Released: {date}")),
    );
    if !detail.genres.is_empty() {
        lines.push(format!("Genres: {}", detail.genres));
    }
    lines.extend(
        detail
            .poster_url
            .as_ref()
            .map(|url| format!("Poster: {url}")),
    );
    lines.push(String::new());
    lines.push(detail.overview.clone());

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
