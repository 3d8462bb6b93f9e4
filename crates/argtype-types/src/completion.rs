//! Shell completion results

use futures::future::BoxFuture;
use std::fmt;
use std::future::Future;

/// Values displayed in help text
pub type TypeValues = Vec<String>;

/// A completion candidate with an optional description
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Completion {
    pub value: String,
    pub description: Option<String>,
}

impl Completion {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// An ordered list of completion candidates.
///
/// A list is either all plain strings or all described entries. Combining a
/// plain list with a described one lifts the plain entries to described
/// entries without a description; order is preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completions {
    Plain(Vec<String>),
    Described(Vec<Completion>),
}

impl Completions {
    /// No candidates
    pub fn empty() -> Self {
        Self::Plain(Vec::new())
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Plain(values) => values.len(),
            Self::Described(entries) => entries.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Candidate values without descriptions
    pub fn values(&self) -> Vec<String> {
        match self {
            Self::Plain(values) => values.clone(),
            Self::Described(entries) => entries.iter().map(|e| e.value.clone()).collect(),
        }
    }

    /// Lift into described entries
    pub fn into_described(self) -> Vec<Completion> {
        match self {
            Self::Plain(values) => values.into_iter().map(Completion::new).collect(),
            Self::Described(entries) => entries,
        }
    }

    /// Append another list, keeping this list's entries first
    pub fn extend(self, other: Completions) -> Completions {
        match (self, other) {
            (Self::Plain(mut a), Self::Plain(b)) => {
                a.extend(b);
                Self::Plain(a)
            }
            (a, b) => {
                let mut entries = a.into_described();
                entries.extend(b.into_described());
                Self::Described(entries)
            }
        }
    }

    /// Keep only candidates starting with `prefix`
    pub fn filter_prefix(self, prefix: &str) -> Completions {
        match self {
            Self::Plain(values) => {
                Self::Plain(values.into_iter().filter(|v| v.starts_with(prefix)).collect())
            }
            Self::Described(entries) => Self::Described(
                entries
                    .into_iter()
                    .filter(|e| e.value.starts_with(prefix))
                    .collect(),
            ),
        }
    }
}

impl Default for Completions {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Vec<String>> for Completions {
    fn from(values: Vec<String>) -> Self {
        Self::Plain(values)
    }
}

impl From<Vec<&str>> for Completions {
    fn from(values: Vec<&str>) -> Self {
        Self::Plain(values.into_iter().map(String::from).collect())
    }
}

impl From<Vec<Completion>> for Completions {
    fn from(entries: Vec<Completion>) -> Self {
        Self::Described(entries)
    }
}

/// What `Type::complete` hands back: candidates now, or a computation that
/// produces them later (e.g. a filesystem or network lookup).
pub enum CompleteHandlerResult {
    Ready(Completions),
    Pending(BoxFuture<'static, Completions>),
}

impl CompleteHandlerResult {
    /// Defer candidate computation to a future
    pub fn pending<F>(future: F) -> Self
    where
        F: Future<Output = Completions> + Send + 'static,
    {
        Self::Pending(Box::pin(future))
    }

    /// Wait for the candidates
    pub async fn resolve(self) -> Completions {
        match self {
            Self::Ready(completions) => completions,
            Self::Pending(future) => future.await,
        }
    }
}

impl From<Completions> for CompleteHandlerResult {
    fn from(completions: Completions) -> Self {
        Self::Ready(completions)
    }
}

impl From<Vec<String>> for CompleteHandlerResult {
    fn from(values: Vec<String>) -> Self {
        Self::Ready(values.into())
    }
}

impl From<Vec<&str>> for CompleteHandlerResult {
    fn from(values: Vec<&str>) -> Self {
        Self::Ready(values.into())
    }
}

impl From<Vec<Completion>> for CompleteHandlerResult {
    fn from(entries: Vec<Completion>) -> Self {
        Self::Ready(entries.into())
    }
}

impl fmt::Debug for CompleteHandlerResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ready(completions) => f.debug_tuple("Ready").field(completions).finish(),
            Self::Pending(_) => f.write_str("Pending(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_extend_plain() {
        let merged = Completions::from(vec!["a", "b"]).extend(vec!["c"].into());
        assert_eq!(merged, Completions::from(vec!["a", "b", "c"]));
    }

    #[test]
    fn test_extend_mixed_lifts_plain_entries() {
        let described = Completions::from(vec![Completion::new("red").with_description("warm")]);
        let merged = Completions::from(vec!["blue"]).extend(described);
        assert_eq!(
            merged,
            Completions::Described(vec![
                Completion::new("blue"),
                Completion::new("red").with_description("warm"),
            ])
        );
        assert_eq!(merged.values(), vec!["blue".to_string(), "red".to_string()]);
    }

    #[test]
    fn test_filter_prefix() {
        let filtered = Completions::from(vec!["red", "rose", "blue"]).filter_prefix("r");
        assert_eq!(filtered.values(), vec!["red".to_string(), "rose".to_string()]);
    }

    #[test]
    fn test_empty() {
        assert!(Completions::empty().is_empty());
        assert_eq!(Completions::default().len(), 0);
    }

    #[tokio::test]
    async fn test_resolve_pending() {
        let result = CompleteHandlerResult::pending(async { Completions::from(vec!["x", "y"]) });
        assert!(matches!(result, CompleteHandlerResult::Pending(_)));
        assert_eq!(result.resolve().await.len(), 2);
    }

    #[tokio::test]
    async fn test_resolve_ready() {
        let result = CompleteHandlerResult::from(vec!["only".to_string()]);
        assert_eq!(result.resolve().await.values(), vec!["only".to_string()]);
    }
}
