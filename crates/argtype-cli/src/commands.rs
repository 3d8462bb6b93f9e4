//! Subcommand implementations
//!
//! Each command builds a registry from the built-ins plus an optional ad-hoc
//! enum type, runs through the resolver, and returns the text to print.

use crate::output;
use anyhow::{Context, Result};
use argtype::{Command, Declaration, EnumType, Resolver, TypeRegistry};
use log::debug;

/// Which type to use, and optional choices that define it as an enum
#[derive(Debug, Clone, Default)]
pub struct TypeSelection {
    pub type_name: Option<String>,
    pub choices: Vec<String>,
}

impl TypeSelection {
    fn resolver(&self) -> Result<Resolver> {
        let mut registry = TypeRegistry::with_builtins();
        if !self.choices.is_empty() {
            let name = self
                .type_name
                .as_deref()
                .context("--choices requires --type to name the enum")?;
            debug!("registering enum type \"{}\" with {:?}", name, self.choices);
            registry.register_override(name, EnumType::<String>::new(self.choices.clone()))?;
        }
        Ok(Resolver::new(registry))
    }

    fn declaration(&self, label: &str, name: &str) -> Declaration {
        let decl = Declaration::new(label, name);
        match &self.type_name {
            Some(type_name) => decl.with_type(type_name.clone()),
            None => decl,
        }
    }
}

/// Configuration for `argtype parse`
#[derive(Debug, Clone)]
pub struct ParseConfig {
    pub selection: TypeSelection,
    pub label: String,
    pub name: String,
    pub values: Vec<String>,
    pub json: bool,
}

/// Parse one or more raw values
pub fn parse(config: ParseConfig) -> Result<String> {
    let resolver = config.selection.resolver()?;
    let decl = config.selection.declaration(&config.label, &config.name);
    let parsed = resolver.parse_all(config.values.iter().map(|raw| (&decl, raw.as_str())))?;

    if config.json {
        let json: Vec<serde_json::Value> = parsed
            .iter()
            .map(|value| serde_json::json!({ "kind": value.kind(), "value": value }))
            .collect();
        return serde_json::to_string(&json).context("Failed to serialize JSON");
    }
    Ok(parsed.iter().map(ToString::to_string).collect::<Vec<_>>().join("\n"))
}

/// Configuration for `argtype values` and `argtype complete`
#[derive(Debug, Clone)]
pub struct CandidatesConfig {
    pub selection: TypeSelection,
    pub command: String,
    pub parent: Option<String>,
    pub prefix: Option<String>,
    pub json: bool,
}

impl CandidatesConfig {
    fn commands(&self) -> (Command, Option<Command>) {
        let parent = self.parent.as_ref().map(Command::new);
        let cmd = match &parent {
            Some(parent) => Command::new(&self.command).with_parent(parent),
            None => Command::new(&self.command),
        };
        (cmd, parent)
    }
}

/// Help values of a type
pub fn values(config: CandidatesConfig) -> Result<String> {
    let resolver = config.selection.resolver()?;
    let decl = config.selection.declaration("Option", "--value");
    let (cmd, parent) = config.commands();

    match resolver.values(&decl, &cmd, parent.as_ref())? {
        Some(values) if config.json => {
            serde_json::to_string(&values).context("Failed to serialize JSON")
        }
        Some(values) => Ok(output::format_lines(&values)),
        None if config.json => Ok("null".to_string()),
        None => Ok("(none)".to_string()),
    }
}

/// Completion candidates of a type
pub async fn complete(config: CandidatesConfig) -> Result<String> {
    let resolver = config.selection.resolver()?;
    let decl = config.selection.declaration("Option", "--value");
    let (cmd, parent) = config.commands();

    let mut completions = resolver.complete(&decl, &cmd, parent.as_ref()).await?;
    if let Some(prefix) = &config.prefix {
        completions = completions.filter_prefix(prefix);
    }

    if config.json {
        let json: Vec<serde_json::Value> = completions
            .into_described()
            .into_iter()
            .map(|c| serde_json::json!({ "value": c.value, "description": c.description }))
            .collect();
        return serde_json::to_string(&json).context("Failed to serialize JSON");
    }
    Ok(completions
        .into_described()
        .into_iter()
        .map(|c| match c.description {
            Some(description) => format!("{}\t{}", c.value, description),
            None => c.value,
        })
        .collect::<Vec<_>>()
        .join("\n"))
}

/// Registered type names
pub fn types() -> String {
    TypeRegistry::with_builtins()
        .names()
        .collect::<Vec<_>>()
        .join("\n")
}
