//! Paginated browse and search-as-you-type.
//!
//! [`BrowseController`] owns the list the UI renders. Pages are appended as the
//! user scrolls to the last row, replaced on pull-to-refresh and on a new
//! search, and search keystrokes are debounced so only the last query in a
//! burst reaches the catalog.

pub mod controller;
pub mod debounce;
pub mod state;

pub use controller::{BrowseController, BrowseControllerBuilder};
pub use debounce::Debouncer;
pub use state::{BrowsePhase, BrowseState, LoadingKind};
