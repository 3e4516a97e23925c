//! Core data model definitions shared across MovieFlix crates.
#![allow(missing_docs)]

pub mod image;
pub mod movie;
pub mod rating;

pub use image::PosterSize;
pub use movie::{Movie, MovieList};
pub use rating::{Star, StarRating};
