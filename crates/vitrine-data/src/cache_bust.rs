//! Cache-busting query parameters.

/// Append `param=millis` to `url` so intermediaries cannot serve a cached copy.
///
/// Uses `&` when the URL already has a query and keeps any `#fragment` last.
pub fn cache_busted(url: &str, param: &str, millis: i64) -> String {
    let (base, fragment) = match url.split_once('#') {
        Some((base, fragment)) => (base, Some(fragment)),
        None => (url, None),
    };

    let separator = if !base.contains('?') {
        "?"
    } else if base.ends_with('?') || base.ends_with('&') {
        ""
    } else {
        "&"
    };

    let mut busted = format!("{}{}{}={}", base, separator, param, millis);
    if let Some(fragment) = fragment {
        busted.push('#');
        busted.push_str(fragment);
    }
    busted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_url() {
        assert_eq!(
            cache_busted("https://example.com/data.json", "t", 1700000000000),
            "https://example.com/data.json?t=1700000000000"
        );
    }

    #[test]
    fn test_existing_query() {
        assert_eq!(
            cache_busted("https://example.com/data.json?v=2", "t", 5),
            "https://example.com/data.json?v=2&t=5"
        );
        assert_eq!(
            cache_busted("https://example.com/data.json?", "t", 5),
            "https://example.com/data.json?t=5"
        );
    }

    #[test]
    fn test_fragment_kept_last() {
        assert_eq!(
            cache_busted("https://example.com/data.json#top", "t", 5),
            "https://example.com/data.json?t=5#top"
        );
    }
}
