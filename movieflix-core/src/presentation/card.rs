use super::dates::format_release_date;
use super::images::poster_url;
use crate::config::ImageConfig;
use movieflix_contracts::images::ImageLoader;
use movieflix_model::{Movie, Star, StarRating};

/// One row of the movie list.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieCard {
    pub id: Option<i64>,
    /// Original-language title; rows leave the label untouched when absent.
    pub title: Option<String>,
    pub release_date: Option<String>,
    pub poster_url: String,
    pub rating: Option<StarRating>,
    pub favorite: bool,
}

impl MovieCard {
    pub fn new(movie: &Movie, images: &ImageConfig) -> Self {
        Self {
            id: movie.id,
            title: movie.original_title.clone(),
            release_date: movie
                .release_date
                .as_deref()
                .map(format_release_date),
            poster_url: poster_url(movie, images),
            rating: movie.rating(),
            favorite: movie.favorite,
        }
    }

    pub fn bind_poster<L: ImageLoader>(
        &self,
        loader: &L,
        surface: &mut L::Surface,
    ) {
        loader.load(&self.poster_url, surface);
    }

    pub fn rating_glyphs(&self) -> Option<String> {
        self.rating.as_ref().map(star_glyphs)
    }
}

/// Five-glyph rendering of a rating, e.g. `★★★⯪☆`.
pub fn star_glyphs(rating: &StarRating) -> String {
    rating
        .stars()
        .iter()
        .map(|star| match star {
            Star::Full => '★',
            Star::Half => '⯪',
            Star::Empty => '☆',
        })
        .collect()
}
