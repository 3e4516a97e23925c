/// Fetches an image by URL and displays it into a host surface.
///
/// Caching, retries and decoding are the loader's business; the core only
/// decides which URL to show.
pub trait ImageLoader: Send + Sync {
    /// Whatever the host draws into (an image view, a texture slot, a
    /// terminal cell).
    type Surface;

    fn load(&self, url: &str, surface: &mut Self::Surface);
}
