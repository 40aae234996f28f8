//! URL utility functions for reading query parameters

use web_sys::window;

/// Get a query parameter from the current URL
/// This is a fallback method that reads directly from window.location.search
/// Use this when the router's query map might not be initialized yet
pub fn get_query_param(key: &str) -> Option<String> {
    let window = window()?;
    let location = window.location();
    let search = location.search().ok()?;

    if search.is_empty() {
        return None;
    }

    let query_string = search.strip_prefix('?').unwrap_or(&search);
    parse_query_param(query_string, key)
}

/// Find `key` in a raw query string (no leading '?') and URL-decode its value.
pub fn parse_query_param(query_string: &str, key: &str) -> Option<String> {
    for pair in query_string.split('&') {
        if let Some(equal_pos) = pair.find('=') {
            let param_key = &pair[..equal_pos];
            let param_value = &pair[equal_pos + 1..];
            if param_key == key {
                return Some(
                    urlencoding::decode(param_value)
                        .unwrap_or_else(|_| param_value.into())
                        .into_owned(),
                );
            }
        } else if pair == key {
            // Parameter present with no value
            return Some(String::new());
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_query_param() {
        assert_eq!(
            parse_query_param("theme=bedtime&page=2", "theme"),
            Some("bedtime".to_string())
        );
        assert_eq!(
            parse_query_param("theme=fairy%2Dtales", "theme"),
            Some("fairy-tales".to_string())
        );
        assert_eq!(parse_query_param("theme=bedtime", "page"), None);
        assert_eq!(parse_query_param("flag", "flag"), Some(String::new()));
    }
}
