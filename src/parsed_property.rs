use std::{fmt::Display, ops::Deref, path::PathBuf};

/// A configuration property that tracks its source and original value
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum ParsedProperty<T> {
    /// Value from command line arguments (parsed_value, original_string)
    Cli(T, String),
    /// Value from environment variable (parsed_value, env_var_value)
    Env(T, String),
    /// Value from the global configuration document (parsed_value, file_path, json_value_string)
    File(T, PathBuf, String),
    /// Default value when no other source provided
    Default(T),
}

impl<T> ParsedProperty<T> {
    /// Get the parsed value
    pub fn value(&self) -> &T {
        match self {
            ParsedProperty::Cli(value, _) => value,
            ParsedProperty::Env(value, _) => value,
            ParsedProperty::File(value, _, _) => value,
            ParsedProperty::Default(value) => value,
        }
    }

    /// Get the source name as a string
    pub fn source_name(&self) -> &'static str {
        match self {
            ParsedProperty::Cli(_, _) => "cli",
            ParsedProperty::Env(_, _) => "env",
            ParsedProperty::File(_, _, _) => "file",
            ParsedProperty::Default(_) => "default",
        }
    }

    /// Get the original string value if available
    pub fn original(&self) -> Option<&str> {
        match self {
            ParsedProperty::Cli(_, original) => Some(original),
            ParsedProperty::Env(_, original) => Some(original),
            ParsedProperty::File(_, _, original) => Some(original),
            ParsedProperty::Default(_) => None,
        }
    }

    /// Check if this property came from a specific source
    pub fn is_from_source(&self, source: &str) -> bool {
        self.source_name() == source
    }
}

impl<T> Deref for ParsedProperty<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        self.value()
    }
}

impl<T: Display> Display for ParsedProperty<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.value().fmt(f)
    }
}

impl<T: AsRef<str>> AsRef<str> for ParsedProperty<T> {
    fn as_ref(&self) -> &str {
        self.value().as_ref()
    }
}

impl<T> From<T> for ParsedProperty<T> {
    fn from(value: T) -> Self {
        ParsedProperty::Default(value)
    }
}
