//! End-to-end resolver tests
//!
//! Covers:
//! - Declaration -> type -> parse for built-in and custom types
//! - Error aggregation across several declarations
//! - Completion fallback from help values
//! - Pending (async) completions and concurrent use of one registry

use argtype_diagnostics::{ArgTypeError, ConfigurationError};
use argtype_registry::*;
use argtype_types::*;
use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};
use std::sync::Arc;
use std::time::Duration;

struct ColorType;

impl Type for ColorType {
    type Output = String;

    fn parse(&self, info: &TypeInfo) -> Result<String, ValidationError> {
        match info.value() {
            "red" | "blue" => Ok(info.value().to_string()),
            _ => Err(info.invalid().with_guidance("Valid colors are: red, blue")),
        }
    }

    fn values(&self, _cmd: &Command, _parent: Option<&Command>) -> Option<TypeValues> {
        Some(vec!["red".to_string(), "blue".to_string()])
    }
}

/// Completes from a slow lookup keyed by the owning command
struct BranchType;

impl Type for BranchType {
    type Output = String;

    fn parse(&self, info: &TypeInfo) -> Result<String, ValidationError> {
        Ok(info.value().to_string())
    }

    fn values(&self, _cmd: &Command, _parent: Option<&Command>) -> Option<TypeValues> {
        Some(vec!["ignored".to_string()])
    }

    fn complete(&self, cmd: &Command, parent: Option<&Command>) -> Option<CompleteHandlerResult> {
        let scope = parent.map(|p| p.name().to_string()).unwrap_or_default();
        let owner = cmd.name().to_string();
        Some(CompleteHandlerResult::pending(async move {
            tokio::time::sleep(Duration::from_millis(5)).await;
            Completions::Described(vec![
                Completion::new("main").with_description(format!("{} {}", scope, owner)),
                Completion::new("dev"),
            ])
        }))
    }
}

/// Provides `complete` that yields nothing, next to non-empty values
struct SilentType;

impl Type for SilentType {
    type Output = String;

    fn parse(&self, info: &TypeInfo) -> Result<String, ValidationError> {
        Ok(info.value().to_string())
    }

    fn values(&self, _cmd: &Command, _parent: Option<&Command>) -> Option<TypeValues> {
        Some(vec!["a".to_string()])
    }

    fn complete(&self, _cmd: &Command, _parent: Option<&Command>) -> Option<CompleteHandlerResult> {
        Some(Completions::empty().into())
    }
}

fn build_resolver() -> Resolver {
    let mut registry = TypeRegistry::with_builtins();
    registry
        .register("color", ColorType)
        .and_then(|r| r.register("branch", BranchType))
        .and_then(|r| r.register("silent", SilentType))
        .unwrap();
    Resolver::new(registry)
}

#[fixture]
fn resolver() -> Resolver {
    build_resolver()
}

fn port() -> Declaration {
    Declaration::option("--port").with_type("number")
}

fn color() -> Declaration {
    Declaration::option("--color").with_type("color")
}

// === Parsing ===

#[rstest]
fn test_port_parses(resolver: Resolver) {
    assert_eq!(resolver.parse(&port(), "8080").unwrap(), Value::Number(8080.0));
}

#[rstest]
fn test_port_rejects_word(resolver: Resolver) {
    let err = resolver.parse(&port(), "abc").unwrap_err();
    assert!(err.is_validation());
    assert!(err
        .to_string()
        .contains("Option \"--port\" must be of type \"number\", but got \"abc\"."));
}

#[rstest]
fn test_custom_color(resolver: Resolver) {
    let err = resolver.parse(&color(), "green").unwrap_err().to_string();
    assert!(err.contains("must be of type \"color\""));
    assert!(err.contains("Valid colors are: red, blue"));

    assert_eq!(resolver.parse(&color(), "red").unwrap(), Value::from("red"));
}

#[rstest]
#[case("integer", "42", Value::Integer(42))]
#[case("boolean", "1", Value::Boolean(true))]
#[case("string", "", Value::String(String::new()))]
#[case("number", "-0.5", Value::Number(-0.5))]
fn test_builtin_resolution(
    resolver: Resolver,
    #[case] type_name: &str,
    #[case] raw: &str,
    #[case] expected: Value,
) {
    let decl = Declaration::argument("value").with_type(type_name);
    assert_eq!(resolver.parse(&decl, raw).unwrap(), expected);
}

#[rstest]
fn test_parse_is_repeatable(resolver: Resolver) {
    assert_eq!(resolver.parse(&port(), "12"), resolver.parse(&port(), "12"));
    assert_eq!(resolver.parse(&port(), "x"), resolver.parse(&port(), "x"));
}

#[rstest]
fn test_parse_all_collects_one_error_per_declaration(resolver: Resolver) {
    let port = port();
    let color = color();
    let name = Declaration::argument("name");
    let err = resolver
        .parse_all([(&port, "abc"), (&name, "ok"), (&color, "green")])
        .unwrap_err();

    match err {
        ArgTypeError::Multiple(errors) => {
            assert_eq!(errors.len(), 2);
            assert!(errors[0].to_string().contains("\"--port\""));
            assert!(errors[1].to_string().contains("\"--color\""));
        }
        other => panic!("expected multiple errors, got {:?}", other),
    }
}

#[rstest]
fn test_parse_all_single_failure_is_not_wrapped(resolver: Resolver) {
    let port = port();
    let err = resolver.parse_all([(&port, "abc")]).unwrap_err();
    assert!(matches!(err, ArgTypeError::Validation(_)));
}

#[rstest]
fn test_parse_all_success(resolver: Resolver) {
    let port = port();
    let color = color();
    let values = resolver.parse_all([(&port, "80"), (&color, "blue")]).unwrap();
    assert_eq!(values, vec![Value::Number(80.0), Value::from("blue")]);
}

#[rstest]
fn test_unknown_type(resolver: Resolver) {
    let decl = Declaration::option("--size").with_type("size");
    let err = resolver.parse(&decl, "xl").unwrap_err();
    assert!(!err.is_validation());
    assert!(matches!(
        err,
        ArgTypeError::Configuration(ConfigurationError::UnknownType { ref name, .. })
            if name == "size"
    ));
}

// === Completion ===

#[rstest]
#[tokio::test]
async fn test_completion_falls_back_to_values(resolver: Resolver) {
    let cmd = Command::new("paint");
    let completions = resolver.complete(&color(), &cmd, None).await.unwrap();
    assert_eq!(completions, Completions::from(vec!["red", "blue"]));
}

#[rstest]
#[tokio::test]
async fn test_completion_empty_without_values_or_complete(resolver: Resolver) {
    let cmd = Command::new("serve");
    let completions = resolver.complete(&port(), &cmd, None).await.unwrap();
    assert!(completions.is_empty());
}

#[rstest]
#[tokio::test]
async fn test_complete_takes_precedence_even_when_empty(resolver: Resolver) {
    let cmd = Command::new("run");
    let decl = Declaration::option("--mode").with_type("silent");
    assert!(resolver.complete(&decl, &cmd, None).await.unwrap().is_empty());
    assert_eq!(
        resolver.values(&decl, &cmd, None).unwrap(),
        Some(vec!["a".to_string()])
    );
}

#[rstest]
#[tokio::test]
async fn test_pending_completion(resolver: Resolver) {
    let git = Command::new("git");
    let checkout = Command::new("checkout").with_parent(&git);
    let decl = Declaration::argument("branch").with_type("branch");

    let completions = resolver.complete(&decl, &checkout, Some(&git)).await.unwrap();
    assert_eq!(
        completions,
        Completions::Described(vec![
            Completion::new("main").with_description("git checkout"),
            Completion::new("dev"),
        ])
    );
}

#[rstest]
#[tokio::test]
async fn test_builtin_boolean_completion(resolver: Resolver) {
    let cmd = Command::new("build");
    let decl = Declaration::option("--release").with_type("boolean");
    let completions = resolver.complete(&decl, &cmd, None).await.unwrap();
    assert_eq!(completions.values(), vec!["true".to_string(), "false".to_string()]);
}

#[rstest]
#[tokio::test]
async fn test_completion_unknown_type(resolver: Resolver) {
    let cmd = Command::new("build");
    let decl = Declaration::option("--target").with_type("triple");
    assert!(resolver.complete(&decl, &cmd, None).await.is_err());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_concurrent_completion_requests() {
    let shared = build_resolver();
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let resolver = shared.clone();
            tokio::spawn(async move {
                let cmd = Command::new(format!("cmd{}", i));
                let decl = if i % 2 == 0 {
                    Declaration::argument("branch").with_type("branch")
                } else {
                    Declaration::option("--color").with_type("color")
                };
                resolver.complete(&decl, &cmd, None).await.unwrap().len()
            })
        })
        .collect();

    let lengths: Vec<usize> = futures::future::join_all(handles)
        .await
        .into_iter()
        .map(|r| r.unwrap())
        .collect();
    assert_eq!(lengths, vec![2; 8]);
}

#[tokio::test]
async fn test_dropped_pending_completion_has_no_effect() {
    let shared = Arc::new(build_resolver());
    let cmd = Command::new("checkout");
    let decl = Declaration::argument("branch").with_type("branch");

    let pending = shared.complete(&decl, &cmd, None);
    let timed_out = tokio::time::timeout(Duration::from_nanos(1), pending).await;
    assert!(timed_out.is_err());

    let completions = shared.complete(&decl, &cmd, None).await.unwrap();
    assert_eq!(completions.len(), 2);
}
