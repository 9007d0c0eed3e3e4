use url::form_urlencoded;

/// Decoded query-string parameters of a page URL, in order of appearance.
///
/// Parsing never fails: malformed escapes are kept literally and invalid
/// UTF-8 is replaced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Parse the query part of `url`. Accepts a full URL, a path with a query
    /// string, or a bare `a=b&c=d` string.
    pub fn parse(url: &str) -> Self {
        let query = match url.split_once('?') {
            Some((_, rest)) => rest,
            None if url.contains('=') => url,
            None => "",
        };
        let query = query.split_once('#').map_or(query, |(q, _)| q);

        let pairs = form_urlencoded::parse(query.as_bytes())
            .into_owned()
            .collect();

        Self { pairs }
    }

    /// First value for `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// First non-blank value for `key`
    pub fn get_non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|v| !v.trim().is_empty())
    }

    pub fn get_all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.pairs
            .iter()
            .filter(move |(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
