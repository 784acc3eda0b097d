//! inputs::descriptor
//!
//! Static metadata for named command arguments.
//!
//! # Design
//!
//! A descriptor is built once when a command defines its schema and never
//! changes afterwards. Its parser is selected by [`ArgKind`] and is pure:
//! the same raw string always yields the same value or the same error.

use std::fmt;

use reqwest::Url;
use serde::{Deserialize, Serialize};

use super::error::InputError;

/// A parsed argument value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArgValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl ArgValue {
    /// Whether the value counts as supplied.
    ///
    /// Empty strings, zero, NaN and `false` do not.
    pub fn is_truthy(&self) -> bool {
        match self {
            ArgValue::Str(s) => !s.is_empty(),
            ArgValue::Int(i) => *i != 0,
            ArgValue::Float(f) => *f != 0.0 && !f.is_nan(),
            ArgValue::Bool(b) => *b,
        }
    }

    /// Short type name, for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            ArgValue::Str(_) => "string",
            ArgValue::Int(_) => "integer",
            ArgValue::Float(_) => "number",
            ArgValue::Bool(_) => "boolean",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ArgValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ArgValue::Int(i) => Some(*i),
            _ => None,
        }
    }
}

impl fmt::Display for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgValue::Str(s) => f.write_str(s),
            ArgValue::Int(i) => write!(f, "{}", i),
            ArgValue::Float(x) => write!(f, "{}", x),
            ArgValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for ArgValue {
    fn from(s: &str) -> Self {
        ArgValue::Str(s.to_string())
    }
}

impl From<String> for ArgValue {
    fn from(s: String) -> Self {
        ArgValue::Str(s)
    }
}

impl From<i64> for ArgValue {
    fn from(i: i64) -> Self {
        ArgValue::Int(i)
    }
}

impl From<bool> for ArgValue {
    fn from(b: bool) -> Self {
        ArgValue::Bool(b)
    }
}

/// The parser an argument uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgKind {
    /// Taken verbatim.
    String,
    /// Signed 64-bit integer.
    Integer,
    /// Floating point number.
    Float,
    /// `true/false`, `yes/no`, `on/off`, `1/0`.
    Boolean,
    /// Absolute http(s) URL, stored without a trailing slash.
    Url,
}

impl ArgKind {
    fn expected(self) -> &'static str {
        match self {
            ArgKind::String => "a string",
            ArgKind::Integer => "an integer",
            ArgKind::Float => "a number",
            ArgKind::Boolean => "true or false",
            ArgKind::Url => "an http(s) URL",
        }
    }

    fn parse(self, raw: &str) -> Option<ArgValue> {
        match self {
            ArgKind::String => Some(ArgValue::Str(raw.to_string())),
            ArgKind::Integer => raw.trim().parse().ok().map(ArgValue::Int),
            ArgKind::Float => raw.trim().parse().ok().map(ArgValue::Float),
            ArgKind::Boolean => match raw.trim().to_ascii_lowercase().as_str() {
                "true" | "yes" | "on" | "1" => Some(ArgValue::Bool(true)),
                "false" | "no" | "off" | "0" => Some(ArgValue::Bool(false)),
                _ => None,
            },
            ArgKind::Url => {
                let trimmed = raw.trim();
                let url = Url::parse(trimmed).ok()?;
                if !matches!(url.scheme(), "http" | "https") {
                    return None;
                }
                Some(ArgValue::Str(trimmed.trim_end_matches('/').to_string()))
            }
        }
    }
}

/// A descriptor's fallback value.
#[derive(Debug, Clone, PartialEq)]
pub enum DefaultValue {
    /// Parsed through the descriptor's parser when used.
    Raw(String),
    /// Used as-is.
    Typed(ArgValue),
}

/// Static metadata for one named argument.
#[derive(Debug, Clone, PartialEq)]
pub struct ArgDescriptor {
    name: String,
    label: String,
    kind: ArgKind,
    default: Option<DefaultValue>,
    masked: bool,
}

impl ArgDescriptor {
    /// Create a descriptor with no default and echoed input.
    pub fn new(name: impl Into<String>, label: impl Into<String>, kind: ArgKind) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind,
            default: None,
            masked: false,
        }
    }

    /// Set a raw default, parsed on use.
    pub fn with_default(mut self, raw: impl Into<String>) -> Self {
        self.default = Some(DefaultValue::Raw(raw.into()));
        self
    }

    /// Set an already-typed default.
    pub fn with_typed_default(mut self, value: ArgValue) -> Self {
        self.default = Some(DefaultValue::Typed(value));
        self
    }

    /// Suppress echo when prompting for this argument.
    pub fn masked(mut self) -> Self {
        self.masked = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// User-facing label, e.g. `Work Item ID`.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn kind(&self) -> ArgKind {
        self.kind
    }

    pub fn is_masked(&self) -> bool {
        self.masked
    }

    pub fn default_value(&self) -> Option<&DefaultValue> {
        self.default.as_ref()
    }

    /// Convert a raw string into this argument's type.
    pub fn parse(&self, raw: &str) -> Result<ArgValue, InputError> {
        self.kind.parse(raw).ok_or_else(|| InputError::Parse {
            name: self.name.clone(),
            raw: raw.to_string(),
            expected: self.kind.expected(),
        })
    }

    /// The default, parsed if it was given raw.
    pub fn resolve_default(&self) -> Result<Option<ArgValue>, InputError> {
        match &self.default {
            None => Ok(None),
            Some(DefaultValue::Typed(v)) => Ok(Some(v.clone())),
            Some(DefaultValue::Raw(raw)) => self.parse(raw).map(Some),
        }
    }

    /// Text of the default as shown in prompts, if it is worth showing.
    pub fn default_hint(&self) -> Option<String> {
        match &self.default {
            Some(DefaultValue::Raw(raw)) if !raw.is_empty() => Some(raw.clone()),
            Some(DefaultValue::Typed(v)) if v.is_truthy() => Some(v.to_string()),
            _ => None,
        }
    }
}

/// The arguments a command accepts.
///
/// Required descriptors are matched against positional tokens by index;
/// optional descriptors only by name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArgSchema {
    pub required: Vec<ArgDescriptor>,
    pub optional: Vec<ArgDescriptor>,
}

impl ArgSchema {
    pub fn new(required: Vec<ArgDescriptor>, optional: Vec<ArgDescriptor>) -> Self {
        Self { required, optional }
    }

    /// Required then optional, in declaration order.
    pub fn all(&self) -> impl Iterator<Item = &ArgDescriptor> {
        self.required.iter().chain(self.optional.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_parses_trimmed() {
        let d = ArgDescriptor::new("workItemId", "Work Item ID", ArgKind::Integer);
        assert_eq!(d.parse(" 1234 ").unwrap(), ArgValue::Int(1234));
    }

    #[test]
    fn integer_rejects_text() {
        let d = ArgDescriptor::new("workItemId", "Work Item ID", ArgKind::Integer);
        let err = d.parse("abc").unwrap_err();
        match err {
            InputError::Parse { name, raw, expected } => {
                assert_eq!(name, "workItemId");
                assert_eq!(raw, "abc");
                assert_eq!(expected, "an integer");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn string_is_verbatim() {
        let d = ArgDescriptor::new("project", "Project", ArgKind::String);
        assert_eq!(d.parse("  My Project ").unwrap(), ArgValue::from("  My Project "));
    }

    #[test]
    fn boolean_spellings() {
        let d = ArgDescriptor::new("save", "Save", ArgKind::Boolean);
        for raw in ["true", "YES", "on", "1"] {
            assert_eq!(d.parse(raw).unwrap(), ArgValue::Bool(true), "{raw}");
        }
        for raw in ["false", "No", "off", "0"] {
            assert_eq!(d.parse(raw).unwrap(), ArgValue::Bool(false), "{raw}");
        }
        assert!(d.parse("maybe").is_err());
    }

    #[test]
    fn url_requires_http_scheme_and_drops_trailing_slash() {
        let d = ArgDescriptor::new("service-url", "Service URL", ArgKind::Url);
        assert_eq!(
            d.parse("https://dev.example.test/org/").unwrap(),
            ArgValue::from("https://dev.example.test/org")
        );
        assert!(d.parse("ftp://example.test").is_err());
        assert!(d.parse("not a url").is_err());
    }

    #[test]
    fn raw_default_is_parsed() {
        let d = ArgDescriptor::new("top", "Top", ArgKind::Integer).with_default("10");
        assert_eq!(d.resolve_default().unwrap(), Some(ArgValue::Int(10)));
    }

    #[test]
    fn typed_default_is_used_as_is() {
        let d = ArgDescriptor::new("top", "Top", ArgKind::Integer)
            .with_typed_default(ArgValue::Int(5));
        assert_eq!(d.resolve_default().unwrap(), Some(ArgValue::Int(5)));
    }

    #[test]
    fn bad_raw_default_is_parse_error() {
        let d = ArgDescriptor::new("top", "Top", ArgKind::Integer).with_default("ten");
        assert!(matches!(d.resolve_default(), Err(InputError::Parse { .. })));
    }

    #[test]
    fn truthiness() {
        assert!(!ArgValue::from("").is_truthy());
        assert!(!ArgValue::Int(0).is_truthy());
        assert!(!ArgValue::Float(f64::NAN).is_truthy());
        assert!(!ArgValue::Bool(false).is_truthy());
        assert!(ArgValue::from("x").is_truthy());
        assert!(ArgValue::Int(-1).is_truthy());
    }

    #[test]
    fn default_hint_skips_falsy_typed() {
        let d = ArgDescriptor::new("n", "N", ArgKind::Integer).with_typed_default(ArgValue::Int(0));
        assert_eq!(d.default_hint(), None);
        let d = ArgDescriptor::new("n", "N", ArgKind::Integer).with_default("3");
        assert_eq!(d.default_hint(), Some("3".into()));
    }
}
