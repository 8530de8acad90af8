//! Query parameter building.

use std::fmt;

/// Accumulates query parameters for an operation.
///
/// Absent optional parameters are never pushed, so they do not appear in the
/// outgoing request at all. Array-valued parameters are comma-joined, per
/// the API's convention.
#[derive(Debug, Clone, Default)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Build an empty parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter.
    pub fn push(&mut self, key: &str, value: impl fmt::Display) {
        self.pairs.push((key.to_string(), value.to_string()));
    }

    /// Append a parameter when a value is present.
    pub fn push_opt(&mut self, key: &str, value: Option<impl fmt::Display>) {
        if let Some(value) = value {
            self.push(key, value);
        }
    }

    /// Append an array-valued parameter as one comma-joined pair. Empty
    /// collections are skipped entirely.
    pub fn push_csv<I, T>(&mut self, key: &str, values: I)
    where
        I: IntoIterator<Item = T>,
        T: fmt::Display,
    {
        let joined = values
            .into_iter()
            .map(|value| value.to_string())
            .collect::<Vec<_>>()
            .join(",");
        if !joined.is_empty() {
            self.pairs.push((key.to_string(), joined));
        }
    }

    /// Whether any parameter was pushed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// The accumulated key-value pairs.
    #[must_use]
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Attach the parameters to a URL.
    pub(crate) fn apply(&self, url: &mut reqwest::Url) {
        if self.is_empty() {
            return;
        }
        url.query_pairs_mut().extend_pairs(
            self.pairs
                .iter()
                .map(|(key, value)| (key.as_str(), value.as_str())),
        );
    }
}
