//! Query string parsing module
//!
//! Decodes the request's query string once into a flat parameter map.
//! Handlers look arguments up by name; a missing argument reads as the
//! empty string, matching the upstream API client's expectations.

use std::collections::HashMap;

/// Decoded query parameters of a single request
#[derive(Debug, Default, Clone)]
pub struct QueryParams {
    params: HashMap<String, String>,
}

impl QueryParams {
    /// Parse the raw query string (percent-decoded, `&`-separated pairs).
    ///
    /// Duplicate keys keep the last value, like Tornado's `get_argument`.
    pub fn parse(query: Option<&str>) -> Self {
        let params = query
            .map(|q| form_urlencoded::parse(q.as_bytes()).into_owned().collect())
            .unwrap_or_default();
        Self { params }
    }

    /// Argument value, defaulting to `""` when absent
    pub fn get(&self, name: &str) -> &str {
        self.params.get(name).map_or("", String::as_str)
    }

    /// Argument value only if the parameter was supplied
    pub fn get_opt(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let params = QueryParams::parse(Some("part=snippet&type=video&q=banana"));
        assert_eq!(params.get("part"), "snippet");
        assert_eq!(params.get("type"), "video");
        assert_eq!(params.get("q"), "banana");
    }

    #[test]
    fn test_missing_defaults_to_empty() {
        let params = QueryParams::parse(Some("part=snippet"));
        assert_eq!(params.get("q"), "");
        assert_eq!(params.get_opt("q"), None);
    }

    #[test]
    fn test_no_query_string() {
        let params = QueryParams::parse(None);
        assert_eq!(params.get("part"), "");
    }

    #[test]
    fn test_percent_decoding() {
        let params = QueryParams::parse(Some("part=snippet%2Cstatistics&q=two+words"));
        assert_eq!(params.get("part"), "snippet,statistics");
        assert_eq!(params.get("q"), "two words");
    }

    #[test]
    fn test_duplicate_key_keeps_last() {
        let params = QueryParams::parse(Some("q=first&q=second"));
        assert_eq!(params.get("q"), "second");
    }

    #[test]
    fn test_empty_value_still_present() {
        let params = QueryParams::parse(Some("q="));
        assert_eq!(params.get_opt("q"), Some(""));
    }
}
