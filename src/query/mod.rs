//! Query string assembly for admin requests.
//!
//! Every operation builds its query through [`QueryPairs`], so parameter
//! rendering is uniform: unset options are omitted, booleans render
//! lowercase, and values are percent-encoded. Output order follows
//! insertion order, so identical inputs produce byte-identical strings.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters that are NOT percent-encoded in query parameter values.
const VALUE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'/');

/// Percent-encode a query parameter value.
pub fn escape_value(value: &str) -> String {
    utf8_percent_encode(value, VALUE_SET).to_string()
}

/// Ordered query string builder.
#[derive(Debug, Clone, Default)]
pub struct QueryPairs {
    parts: Vec<String>,
}

impl QueryPairs {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a bare marker with no value, e.g. the `quota` qualifier in
    /// `/admin/user?quota&format=json`.
    pub fn flag(mut self, name: &str) -> Self {
        self.parts.push(name.to_string());
        self
    }

    /// Append `key=value` with the value percent-encoded.
    pub fn pair(mut self, key: &str, value: &str) -> Self {
        self.parts.push(format!("{}={}", key, escape_value(value)));
        self
    }

    /// Append `key=value` when the value is set; omit the pair otherwise.
    pub fn pair_opt(self, key: &str, value: Option<&str>) -> Self {
        match value {
            Some(value) => self.pair(key, value),
            None => self,
        }
    }

    /// Append a boolean rendered lowercase (`true`/`false`).
    pub fn pair_bool(self, key: &str, value: bool) -> Self {
        self.pair(key, if value { "true" } else { "false" })
    }

    /// Append a lowercase boolean when set; omit the pair otherwise.
    pub fn pair_opt_bool(self, key: &str, value: Option<bool>) -> Self {
        match value {
            Some(value) => self.pair_bool(key, value),
            None => self,
        }
    }

    /// Append an integer value.
    pub fn pair_int(self, key: &str, value: i64) -> Self {
        self.pair(key, &value.to_string())
    }

    /// Append an integer when set; omit the pair otherwise.
    pub fn pair_opt_int(self, key: &str, value: Option<i64>) -> Self {
        match value {
            Some(value) => self.pair_int(key, value),
            None => self,
        }
    }

    /// True when nothing has been appended.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Render the query string, without a leading `?`.
    pub fn encode(&self) -> String {
        self.parts.join("&")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_in_insertion_order() {
        let query = QueryPairs::new()
            .flag("quota")
            .pair("format", "json")
            .pair("uid", "liza");
        assert_eq!(query.encode(), "quota&format=json&uid=liza");
    }

    #[test]
    fn omits_unset_options() {
        let query = QueryPairs::new()
            .pair("uid", "liza")
            .pair_opt("email", None)
            .pair_opt_bool("suspended", None)
            .pair_opt_int("max-buckets", None);
        assert_eq!(query.encode(), "uid=liza");
    }

    #[test]
    fn booleans_render_lowercase() {
        let query = QueryPairs::new()
            .pair_bool("stats", true)
            .pair_bool("sync", false);
        assert_eq!(query.encode(), "stats=true&sync=false");
    }

    #[test]
    fn values_are_percent_encoded() {
        assert_eq!(escape_value("default.345 -5"), "default.345%20-5");
        let query = QueryPairs::new().pair("key", "default.345 -5");
        assert_eq!(query.encode(), "key=default.345%20-5");
    }

    #[test]
    fn identical_inputs_encode_identically() {
        let build = || {
            QueryPairs::new()
                .pair("format", "json")
                .pair("uid", "liza")
                .pair_bool("stats", false)
                .encode()
        };
        assert_eq!(build(), build());
    }
}
