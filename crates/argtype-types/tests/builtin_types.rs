//! Built-in type behavior tests
//!
//! Covers:
//! - Number parsing of valid and invalid tokens
//! - String identity for arbitrary tokens
//! - Purity of parse for equal inputs
//! - A user-defined restricted type

use argtype_types::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn port(value: &str) -> TypeInfo {
    TypeInfo::new("Option", "--port", "number", value)
}

// === Number ===

#[test]
fn test_number_port_option() {
    assert_eq!(NumberType.parse(&port("8080")).unwrap(), 8080.0);
}

#[test]
fn test_number_rejects_word() {
    let err = NumberType.parse(&port("abc")).unwrap_err();
    assert!(err
        .to_string()
        .contains("Option \"--port\" must be of type \"number\", but got \"abc\"."));
}

proptest! {
    #[test]
    fn prop_number_parses_integers(n in any::<i32>()) {
        let parsed = NumberType.parse(&port(&n.to_string())).unwrap();
        prop_assert_eq!(parsed, n as f64);
    }

    #[test]
    fn prop_number_parses_finite_floats(x in -1.0e12f64..1.0e12) {
        let parsed = NumberType.parse(&port(&x.to_string())).unwrap();
        prop_assert_eq!(parsed, x);
    }

    #[test]
    fn prop_number_rejects_alphabetic(token in "[a-df-zA-DF-Z][a-zA-Z]{0,8}") {
        let err = NumberType.parse(&port(&token)).unwrap_err();
        let message = err.to_string();
        let quoted = format!("\"{}\"", token);
        prop_assert!(message.contains(&quoted));
        prop_assert!(message.contains("\"--port\""));
        prop_assert!(message.contains("\"number\""));
    }

    #[test]
    fn prop_number_is_pure(token in "\\PC{0,12}") {
        let a = port(&token);
        let b = port(&token);
        prop_assert_eq!(NumberType.parse(&a), NumberType.parse(&b));
    }
}

// === String ===

#[test]
fn test_string_empty_and_special() {
    for raw in ["", " ", "--", "\"quoted\"", "tab\there", "ünïcödé", "$(rm -rf /)"] {
        let info = TypeInfo::new("Argument", "path", "string", raw);
        assert_eq!(StringType.parse(&info).unwrap(), raw);
    }
}

proptest! {
    #[test]
    fn prop_string_identity(token in any::<String>()) {
        let info = TypeInfo::new("Argument", "text", "string", token.clone());
        prop_assert_eq!(StringType.parse(&info).unwrap(), token);
    }
}

// === Custom types ===

struct ColorType;

impl Type for ColorType {
    type Output = String;

    fn parse(&self, info: &TypeInfo) -> Result<String, ValidationError> {
        match info.value() {
            "red" | "blue" => Ok(info.value().to_string()),
            _ => Err(info.invalid().with_guidance("Valid colors are: red, blue")),
        }
    }
}

#[test]
fn test_custom_color_rejects_green() {
    let info = TypeInfo::new("Option", "--color", "color", "green");
    let message = ColorType.parse(&info).unwrap_err().to_string();
    assert!(message.contains("must be of type \"color\""));
    assert!(message.contains("Valid colors are: red, blue"));
}

#[test]
fn test_custom_color_accepts_red() {
    let info = TypeInfo::new("Option", "--color", "color", "red");
    assert_eq!(ColorType.parse(&info).unwrap(), "red");
}

#[derive(Debug, Clone, PartialEq)]
struct Size {
    width: u32,
    height: u32,
}

impl From<Size> for Value {
    fn from(size: Size) -> Self {
        Value::custom(size)
    }
}

struct SizeType;

impl Type for SizeType {
    type Output = Size;

    fn parse(&self, info: &TypeInfo) -> Result<Size, ValidationError> {
        let (w, h) = info
            .value()
            .split_once('x')
            .ok_or_else(|| info.invalid().with_guidance("Use WIDTHxHEIGHT"))?;
        match (w.parse(), h.parse()) {
            (Ok(width), Ok(height)) => Ok(Size { width, height }),
            _ => Err(info.invalid().with_guidance("Use WIDTHxHEIGHT")),
        }
    }
}

#[test]
fn test_custom_output_through_erased_view() {
    let erased: &dyn ErasedType = &SizeType;
    let info = TypeInfo::new("Option", "--size", "size", "800x600");
    let value = erased.parse_value(&info).unwrap();
    assert_eq!(
        value.downcast_ref::<Size>(),
        Some(&Size {
            width: 800,
            height: 600
        })
    );

    let err = erased.parse_value(&info.with_value("800")).unwrap_err();
    assert_eq!(err.guidance(), Some("Use WIDTHxHEIGHT"));
}
