use super::dates::format_release_date;
use super::images::detail_poster_url;
use crate::config::ImageConfig;
use movieflix_contracts::images::ImageLoader;
use movieflix_model::{Movie, StarRating};
use tracing::debug;

pub const TITLE_PLACEHOLDER: &str = "Movie Title";
pub const OVERVIEW_PLACEHOLDER: &str = "Add an overview for this movie...";

/// Detail screen contents for a selected movie.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieDetail {
    movie: Movie,
    pub heading: String,
    /// Genre ids joined with `", "`. Names are not resolved.
    pub genres: String,
    pub release_date: Option<String>,
    pub overview: String,
    pub poster_url: Option<String>,
    pub rating: Option<StarRating>,
}

impl MovieDetail {
    pub fn new(movie: Movie, images: &ImageConfig) -> Self {
        let heading = movie
            .title
            .as_deref()
            .filter(|title| !title.trim().is_empty())
            .unwrap_or(TITLE_PLACEHOLDER)
            .to_string();
        let genres = movie
            .genre_ids
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(i64::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        let overview = movie
            .overview
            .clone()
            .filter(|text| !text.trim().is_empty())
            .unwrap_or_else(|| OVERVIEW_PLACEHOLDER.to_string());

        Self {
            heading,
            genres,
            release_date: movie
                .release_date
                .as_deref()
                .map(format_release_date),
            overview,
            poster_url: detail_poster_url(&movie, images),
            rating: movie.rating(),
            movie,
        }
    }

    pub fn movie(&self) -> &Movie {
        &self.movie
    }

    pub fn into_movie(self) -> Movie {
        self.movie
    }

    pub fn is_favorite(&self) -> bool {
        self.movie.favorite
    }

    /// Favorites are not persisted; the button has no effect.
    pub fn toggle_favorite(&mut self) {
        debug!(id = ?self.movie.id, "favorite toggle ignored");
    }

    /// Returns `false` and leaves the surface alone when there is no poster.
    pub fn bind_poster<L: ImageLoader>(
        &self,
        loader: &L,
        surface: &mut L::Surface,
    ) -> bool {
        match &self.poster_url {
            Some(url) => {
                loader.load(url, surface);
                true
            }
            None => false,
        }
    }
}
