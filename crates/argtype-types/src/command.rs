//! Minimal command descriptor handed to `values` and `complete`

/// The command that owns a flag or argument.
///
/// Only what a type needs to tailor help values or completions: the command
/// name, its description and the names of its ancestors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Command {
    name: String,
    description: Option<String>,
    ancestors: Vec<String>,
}

impl Command {
    /// Create a top-level command
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            ancestors: Vec::new(),
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Nest this command under `parent`
    pub fn with_parent(mut self, parent: &Command) -> Self {
        let mut ancestors = parent.ancestors.clone();
        ancestors.push(parent.name.clone());
        self.ancestors = ancestors;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Names of the enclosing commands, outermost first
    pub fn ancestors(&self) -> &[String] {
        &self.ancestors
    }

    /// Full command path, e.g. "git remote add"
    pub fn path(&self) -> String {
        let mut parts: Vec<&str> = self.ancestors.iter().map(String::as_str).collect();
        parts.push(&self.name);
        parts.join(" ")
    }
}
