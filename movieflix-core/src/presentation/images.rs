use crate::config::ImageConfig;
use movieflix_model::Movie;

/// `{base}/{size}/{path}` with slashes normalized at both joins.
pub fn poster_url_for_path(path: &str, config: &ImageConfig) -> String {
    format!(
        "{}/{}/{}",
        config.base_url.trim_end_matches('/'),
        config.poster_size,
        path.trim_start_matches('/')
    )
}

/// Poster for a list cell. Falls back to the placeholder image.
pub fn poster_url(movie: &Movie, config: &ImageConfig) -> String {
    detail_poster_url(movie, config)
        .unwrap_or_else(|| config.placeholder_poster_url.clone())
}

/// Poster for the detail view, which leaves the image empty instead.
pub fn detail_poster_url(
    movie: &Movie,
    config: &ImageConfig,
) -> Option<String> {
    movie
        .poster_path
        .as_deref()
        .filter(|path| !path.trim().is_empty())
        .map(|path| poster_url_for_path(path, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use movieflix_model::PosterSize;

    fn with_poster(path: Option<&str>) -> Movie {
        Movie {
            poster_path: path.map(str::to_string),
            ..Movie::default()
        }
    }

    #[test]
    fn joins_base_size_and_path() {
        let config = ImageConfig::default();
        assert_eq!(
            poster_url(&with_poster(Some("/abc.jpg")), &config),
            "https://image.tmdb.org/t/p/original/abc.jpg"
        );
    }

    #[test]
    fn honors_configured_size_and_trailing_slash() {
        let config = ImageConfig {
            base_url: "https://images.example.test/t/p/".into(),
            poster_size: PosterSize::W342,
            ..ImageConfig::default()
        };
        assert_eq!(
            poster_url_for_path("abc.jpg", &config),
            "https://images.example.test/t/p/w342/abc.jpg"
        );
    }

    #[test]
    fn missing_poster_uses_placeholder_in_lists_only() {
        let config = ImageConfig::default();
        for movie in [with_poster(None), with_poster(Some("  "))] {
            assert_eq!(
                poster_url(&movie, &config),
                "https://picsum.photos/144/288"
            );
            assert_eq!(detail_poster_url(&movie, &config), None);
        }
    }
}
