//! Bulk endpoint detection

use once_cell::sync::Lazy;
use regex::Regex;

/// Content type for ordinary JSON bodies
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Content type for bulk bodies
pub const NDJSON_CONTENT_TYPE: &str = "application/x-ndjson";

/// `_bulk` as the final, word-delimited segment
static BULK_SUFFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b_bulk$").unwrap());

/// Drop everything from the first `?`
pub fn strip_query(path: &str) -> &str {
    path.split_once('?').map_or(path, |(path, _)| path)
}

/// Returns true if the path targets a bulk-ingest endpoint
pub fn is_bulk_path(path: &str) -> bool {
    BULK_SUFFIX.is_match(strip_query(path))
}

/// Content type to send for a body on this path
pub fn content_type_for(path: &str) -> &'static str {
    if is_bulk_path(path) {
        NDJSON_CONTENT_TYPE
    } else {
        JSON_CONTENT_TYPE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_query() {
        assert_eq!(strip_query("/idx/_bulk?pretty=true"), "/idx/_bulk");
        assert_eq!(strip_query("/idx/_search?q=a?b"), "/idx/_search");
        assert_eq!(strip_query("/idx/_doc/1"), "/idx/_doc/1");
        assert_eq!(strip_query("?only=query"), "");
    }

    #[test]
    fn test_is_bulk_path() {
        assert!(is_bulk_path("/idx/_bulk"));
        assert!(is_bulk_path("/idx/_bulk?pretty=true"));
        assert!(is_bulk_path("/_bulk"));
        assert!(is_bulk_path("_bulk"));
        assert!(!is_bulk_path("/idx/_search"));
        assert!(!is_bulk_path("/idx/_bulk_extra"));
        assert!(!is_bulk_path("/idx_bulk"));
        assert!(!is_bulk_path("/idx/_bulk/"));
        assert!(!is_bulk_path("/idx/_search?route=_bulk"));
    }

    #[test]
    fn test_query_string_never_affects_detection() {
        let paths = [
            "/idx/_bulk",
            "/idx/_bulk?refresh=wait_for",
            "/_bulk?x=_bulk",
            "/idx/_search?path=/_bulk",
            "/idx/_msearch",
            "?_bulk",
            "",
        ];
        for path in paths {
            assert_eq!(is_bulk_path(path), is_bulk_path(strip_query(path)), "{}", path);
        }
    }

    #[test]
    fn test_content_type_for() {
        assert_eq!(content_type_for("/logs/_bulk"), NDJSON_CONTENT_TYPE);
        assert_eq!(content_type_for("/logs/_search"), JSON_CONTENT_TYPE);
    }
}
