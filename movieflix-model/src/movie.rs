use crate::rating::StarRating;

/// A movie entry as returned by the catalog listing endpoints.
///
/// Every catalog field is optional: the API omits fields freely and the UI
/// renders placeholders instead of failing.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Movie {
    pub id: Option<i64>,
    pub title: Option<String>,
    pub original_title: Option<String>,
    pub overview: Option<String>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    /// `YYYY-MM-DD`
    pub release_date: Option<String>,
    /// 0.0 to 10.0
    pub vote_average: Option<f64>,
    pub vote_count: Option<i64>,
    pub popularity: Option<f64>,
    pub genre_ids: Option<Vec<i64>>,
    pub adult: Option<bool>,
    pub video: Option<bool>,
    pub original_language: Option<String>,
    /// Client-only flag. Never read from or written to the wire.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub favorite: bool,
}

impl Movie {
    pub fn rating(&self) -> Option<StarRating> {
        self.vote_average.map(StarRating::from_vote_average)
    }
}

/// One page of a catalog listing.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MovieList {
    pub page: u32,
    pub results: Vec<Movie>,
    pub total_pages: u32,
    pub total_results: u32,
}
