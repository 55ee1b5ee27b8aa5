use url::Url;
use worker::{Error, Result};

/// Returns `true` for segments a URL parser would drop or resolve away.
///
/// Percent-encoding does not help here: `%2E%2E` is still a dot segment.
pub fn is_unsafe_segment(segment: &str) -> bool {
    matches!(segment, "" | "." | "..")
}

/// Parses `base` and appends each segment as a percent-encoded path segment.
///
/// `/`, `?`, `#` and other reserved characters inside a segment are encoded,
/// and empty or dot segments are rejected, so an opaque id can never change
/// the shape of the resulting URL.
pub fn append_segments(base: &str, segments: &[&str]) -> Result<Url> {
    if let Some(bad) = segments.iter().find(|s| is_unsafe_segment(s)) {
        return Err(Error::RustError(format!("invalid path segment {bad:?}")));
    }
    let mut url =
        Url::parse(base).map_err(|e| Error::RustError(format!("invalid url {base}: {e}")))?;
    let trailing_slash = url.path().ends_with('/');
    {
        let mut path = url
            .path_segments_mut()
            .map_err(|_| Error::RustError(format!("url cannot be a base: {base}")))?;
        if trailing_slash {
            path.pop_if_empty();
        }
        path.extend(segments);
    }
    Ok(url)
}

/// Builds a root-relative path from encoded segments (e.g. `/v/abc/data`).
pub fn relative_path(segments: &[&str]) -> Result<String> {
    append_segments("http://localhost/", segments).map(|url| url.path().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_to_origin() {
        let url = append_segments("https://weibao.africa", &["v", "abc123"]).unwrap();
        assert_eq!(url.as_str(), "https://weibao.africa/v/abc123");
    }

    #[test]
    fn drops_trailing_empty_segment() {
        let url = append_segments("https://api.weibao.africa/api/v1/videos/", &["abc"]).unwrap();
        assert_eq!(url.as_str(), "https://api.weibao.africa/api/v1/videos/abc");
    }

    #[test]
    fn appends_to_custom_scheme_without_path() {
        let url = append_segments("weibao://video", &["abc123"]).unwrap();
        assert_eq!(url.as_str(), "weibao://video/abc123");
    }

    #[test]
    fn encodes_reserved_characters() {
        let url = append_segments("weibao://video", &["a/b c"]).unwrap();
        assert_eq!(url.as_str(), "weibao://video/a%2Fb%20c");
    }

    #[test]
    fn relative_paths() {
        assert_eq!(relative_path(&["v", "abc", "data"]).unwrap(), "/v/abc/data");
        assert_eq!(relative_path(&["v", "a b", "data"]).unwrap(), "/v/a%20b/data");
    }

    #[test]
    fn rejects_dot_and_empty_segments() {
        assert!(append_segments("https://api.weibao.africa/api/v1/videos", &[".."]).is_err());
        assert!(append_segments("weibao://video", &["."]).is_err());
        assert!(append_segments("https://weibao.africa", &["v", ""]).is_err());
        assert!(relative_path(&["v", "..", "data"]).is_err());
    }

    #[test]
    fn dots_inside_a_segment_are_kept() {
        let url = append_segments("weibao://video", &["..."]).unwrap();
        assert_eq!(url.as_str(), "weibao://video/...");
        let url = append_segments("https://weibao.africa", &["v", "a..b"]).unwrap();
        assert_eq!(url.as_str(), "https://weibao.africa/v/a..b");
    }

    #[test]
    fn rejects_unparseable_base() {
        assert!(append_segments("weibao app", &["x"]).is_err());
    }
}
