//! View models derived from catalog records: list cards, the detail view,
//! poster URLs and release-date text.

pub mod card;
pub mod dates;
pub mod detail;
pub mod images;

pub use card::{MovieCard, star_glyphs};
pub use dates::format_release_date;
pub use detail::{MovieDetail, OVERVIEW_PLACEHOLDER, TITLE_PLACEHOLDER};
pub use images::{detail_poster_url, poster_url, poster_url_for_path};
