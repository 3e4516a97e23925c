use movieflix_model::Movie;
use std::fmt;

/// Presents a dismissible error message to the user.
pub trait UiErrorReporter: Send + Sync {
    fn report(&self, title: &str, message: &str);
}

/// Rendering hooks fired by the browse controller after state changes.
///
/// Hooks run after the controller has released its state lock, so
/// implementations may read the controller back.
pub trait BrowseObserver: Send + Sync {
    /// Loading indicator (skeleton/spinner) should be shown or hidden.
    fn loading_changed(&self, _loading: bool) {}

    /// The list contents changed; `items` is the full current list.
    fn items_changed(&self, _items: &[Movie]) {}

    /// Entry point of the detail view. Receives the selected movie by value;
    /// nothing else holds on to the selection.
    fn present_detail(&self, _movie: Movie) {}
}

/// Observer used when the host does not care about rendering callbacks.
pub struct NoopBrowseObserver;

impl BrowseObserver for NoopBrowseObserver {}

impl fmt::Debug for NoopBrowseObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("NoopBrowseObserver")
    }
}
