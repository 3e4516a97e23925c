//! Trait surfaces the browse core expects its host to provide.
//!
//! Everything here is a seam: transport, connectivity, image display and the
//! UI callbacks are implemented by the embedding application (or by
//! `movieflix-core` for the transport and connectivity defaults) and passed
//! in at construction time.

pub mod connectivity;
pub mod http;
pub mod images;
pub mod ui;
