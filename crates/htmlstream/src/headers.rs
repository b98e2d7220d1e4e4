//! Ordered response headers with a default content type.

/// Default content type for HTML responses.
pub const CONTENT_TYPE_HTML: &str = "text/html; charset=utf-8";

/// Header name for the content type field.
pub const CONTENT_TYPE: &str = "content-type";

/// An ordered collection of header name/value pairs, unique by name.
///
/// Names compare case-insensitively. Inserting an existing name replaces the
/// value in place, keeping the original position; new names append. The
/// default set contains a single `content-type: text/html; charset=utf-8`
/// entry.
#[derive(Debug, Clone)]
pub struct ResponseHeaders {
    entries: Vec<(String, String)>,
}

impl ResponseHeaders {
    /// Create an empty header set with no default entries.
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Insert a header, replacing any existing value for the same name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.position(&name) {
            Some(i) => self.entries[i].1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Get a header value by case-insensitive name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.position(name).map(|i| self.entries[i].1.as_str())
    }

    /// Check whether a header is present.
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Merge another set into this one; `other`'s values win on name clashes.
    pub fn merge(&mut self, other: ResponseHeaders) {
        for (name, value) in other.entries {
            self.insert(name, value);
        }
    }

    /// Iterate over headers in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Number of headers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|(n, _)| n.eq_ignore_ascii_case(name))
    }
}

impl Default for ResponseHeaders {
    fn default() -> Self {
        Self {
            entries: vec![(CONTENT_TYPE.to_string(), CONTENT_TYPE_HTML.to_string())],
        }
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for ResponseHeaders {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut headers = Self::empty();
        for (name, value) in iter {
            headers.insert(name, value);
        }
        headers
    }
}
