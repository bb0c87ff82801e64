use super::record::FieldValue;

/// Free-text search plus field-equality constraints.
///
/// An empty query matches every record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    pub search: Option<String>,
    pub constraints: Vec<(String, FieldValue)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: &str) -> Self {
        self.search = Some(term.to_string());
        self
    }

    pub fn constraint(mut self, field: &str, value: impl Into<FieldValue>) -> Self {
        self.constraints.push((field.to_string(), value.into()));
        self
    }

    /// The lowercased search term, or `None` when searching is inactive.
    /// Only the empty string is inactive; whitespace is matched literally.
    pub fn active_search(&self) -> Option<String> {
        self.search
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase)
    }

    /// Constraints that actually restrict; blank values are wildcards.
    pub fn active_constraints(&self) -> impl Iterator<Item = &(String, FieldValue)> {
        self.constraints.iter().filter(|(_, v)| !v.is_blank())
    }

    pub fn is_empty(&self) -> bool {
        self.active_search().is_none() && self.active_constraints().next().is_none()
    }
}
