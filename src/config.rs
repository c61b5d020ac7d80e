//! Configuration management for docpost.
//!
//! The global configuration is one JSON document (organization, project,
//! PAT, documentation base path, theme) that is loaded at startup and
//! overwritten wholesale on save. On top of that document, values can be
//! layered from environment variables and CLI arguments:
//!
//! - CLI arguments (highest precedence)
//! - `DOCPOST_*` environment variables
//! - the JSON configuration document
//! - defaults
//!
//! ## Example
//!
//! ```rust,no_run
//! use docpost::Config;
//!
//! let file = Config::load_from_file().unwrap();
//! let env = Config::load_from_env();
//! let merged = file.merge(env);
//! let settings = merged.resolve().unwrap();
//! println!("Publishing as {}", settings.organization);
//! ```

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::models::{AppSettings, SharedArgs};
use crate::parsed_property::ParsedProperty;

/// File name of the global configuration document.
pub const GLOBAL_CONFIG_FILE: &str = "config.json";

/// TUI color theme preference, stored in the global document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum Theme {
    /// Follow the terminal's own colors.
    #[default]
    System,
    Light,
    Dark,
}

impl Theme {
    /// Parse a theme name, case-insensitively.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "system" => Some(Self::System),
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// Canonical lowercase name, as written to the document.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::System => "system",
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The next theme in the settings-form cycle.
    #[must_use]
    pub fn cycle(self) -> Self {
        match self {
            Self::System => Self::Light,
            Self::Light => Self::Dark,
            Self::Dark => Self::System,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Theme> for String {
    fn from(theme: Theme) -> Self {
        theme.as_str().to_string()
    }
}

impl From<String> for Theme {
    // The document has no schema version; unknown names fall back to the
    // default so old files keep loading.
    fn from(s: String) -> Self {
        Theme::parse(&s).unwrap_or_default()
    }
}

/// The global configuration document.
///
/// Persisted as one JSON object, loaded at startup, overwritten wholesale
/// on save. Missing keys read as empty so a partial or absent document is
/// never an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Azure DevOps organization name.
    #[serde(default)]
    pub organization: String,
    /// Azure DevOps project name.
    #[serde(default)]
    pub project: String,
    /// Personal access token. Lives in the document in the clear, as the
    /// document itself is the credential store.
    #[serde(default)]
    pub pat: String,
    /// Base directory holding the documentation folders.
    #[serde(default)]
    pub base_path: String,
    /// TUI color theme.
    #[serde(default)]
    pub theme: Theme,
}

impl GlobalConfig {
    /// Loads the document from the config location; a missing file loads
    /// as the empty default.
    pub fn load() -> Result<Self, ConfigError> {
        let path = config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|e| ConfigError::FileReadError {
            path: path.clone(),
            message: e.to_string(),
        })?;

        serde_json::from_str(&content).map_err(|e| ConfigError::ParseError {
            path,
            message: e.to_string(),
        })
    }

    /// Overwrites the document wholesale.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = config_path()?;
        let content = serde_json::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: path.clone(),
            message: e.to_string(),
        })?;

        fs::write(&path, content).map_err(|e| ConfigError::FileReadError {
            path,
            message: e.to_string(),
        })
    }
}

/// Layered application configuration with per-field source tracking.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Azure DevOps organization name.
    pub organization: Option<ParsedProperty<String>>,
    /// Azure DevOps project name.
    pub project: Option<ParsedProperty<String>>,
    /// Personal access token for the Azure DevOps REST API.
    pub pat: Option<ParsedProperty<String>>,
    /// Base directory holding the documentation folders.
    pub base_path: Option<ParsedProperty<String>>,
    /// TUI color theme.
    pub theme: Option<ParsedProperty<Theme>>,
}

impl Config {
    /// Load the layer backed by the global JSON document.
    ///
    /// Empty strings in the document count as unset, so they never shadow
    /// a value from a lower-precedence layer being merged in on top.
    #[must_use = "this returns the loaded configuration which should be used"]
    pub fn load_from_file() -> Result<Self, ConfigError> {
        let path = config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let document = GlobalConfig::load()?;
        let from_file =
            |v: String| -> Option<ParsedProperty<String>> {
                (!v.is_empty()).then(|| ParsedProperty::File(v.clone(), path.clone(), v))
            };

        Ok(Self {
            organization: from_file(document.organization),
            project: from_file(document.project),
            pat: from_file(document.pat),
            base_path: from_file(document.base_path),
            theme: Some(ParsedProperty::File(
                document.theme,
                path.clone(),
                document.theme.as_str().to_string(),
            )),
        })
    }

    /// Load the environment-variable layer.
    #[must_use]
    pub fn load_from_env() -> Self {
        Self {
            organization: std::env::var("DOCPOST_ORGANIZATION")
                .ok()
                .map(|v| ParsedProperty::Env(v.clone(), v)),
            project: std::env::var("DOCPOST_PROJECT")
                .ok()
                .map(|v| ParsedProperty::Env(v.clone(), v)),
            pat: std::env::var("DOCPOST_PAT")
                .ok()
                .map(|v| ParsedProperty::Env(v.clone(), v)),
            base_path: std::env::var("DOCPOST_BASE_PATH")
                .ok()
                .map(|v| ParsedProperty::Env(v.clone(), v)),
            theme: std::env::var("DOCPOST_THEME")
                .ok()
                .and_then(|s| Theme::parse(&s).map(|v| ParsedProperty::Env(v, s))),
        }
    }

    /// Build the CLI layer from shared clap arguments.
    #[must_use]
    pub fn from_shared_args(shared: &SharedArgs) -> Self {
        Self {
            organization: shared
                .organization
                .as_ref()
                .map(|v| ParsedProperty::Cli(v.clone(), v.clone())),
            project: shared
                .project
                .as_ref()
                .map(|v| ParsedProperty::Cli(v.clone(), v.clone())),
            pat: shared
                .pat
                .as_ref()
                .map(|v| ParsedProperty::Cli(v.clone(), v.clone())),
            base_path: shared
                .base_path
                .as_ref()
                .map(|v| ParsedProperty::Cli(v.clone(), v.clone())),
            theme: shared
                .theme
                .as_ref()
                .and_then(|s| Theme::parse(s).map(|v| ParsedProperty::Cli(v, s.clone()))),
        }
    }

    /// Merge this config with another, preferring values from other when they exist.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            organization: other.organization.or(self.organization),
            project: other.project.or(self.project),
            pat: other.pat.or(self.pat),
            base_path: other.base_path.or(self.base_path),
            theme: other.theme.or(self.theme),
        }
    }

    /// Resolve into runtime settings, requiring the connection fields.
    ///
    /// Used by the non-interactive commands, which cannot fall back to a
    /// settings screen.
    pub fn resolve(&self) -> Result<AppSettings, ConfigError> {
        let require = |field: &str,
                       env_var: &str,
                       value: &Option<ParsedProperty<String>>|
         -> Result<String, ConfigError> {
            value
                .as_ref()
                .map(|p| p.value().clone())
                .ok_or_else(|| ConfigError::MissingRequired {
                    field: field.to_string(),
                    env_var: env_var.to_string(),
                })
        };

        let organization = require("organization", "DOCPOST_ORGANIZATION", &self.organization)?;
        let project = require("project", "DOCPOST_PROJECT", &self.project)?;
        let pat = require("pat", "DOCPOST_PAT", &self.pat)?;

        Ok(AppSettings::new(
            organization,
            project,
            pat,
            self.base_path_or_default(),
            self.theme_or_default(),
        ))
    }

    /// Resolve into runtime settings, leaving missing connection fields
    /// empty.
    ///
    /// The TUI starts with whatever is configured and routes the user to
    /// the settings screen when the PAT is absent.
    #[must_use]
    pub fn resolve_lenient(&self) -> AppSettings {
        let value_or_empty = |value: &Option<ParsedProperty<String>>| -> String {
            value.as_ref().map(|p| p.value().clone()).unwrap_or_default()
        };

        AppSettings::new(
            value_or_empty(&self.organization),
            value_or_empty(&self.project),
            value_or_empty(&self.pat),
            self.base_path_or_default(),
            self.theme_or_default(),
        )
    }

    fn base_path_or_default(&self) -> PathBuf {
        self.base_path
            .as_ref()
            .map(|p| PathBuf::from(p.value()))
            .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
    }

    fn theme_or_default(&self) -> Theme {
        self.theme.as_ref().map(|p| *p.value()).unwrap_or_default()
    }
}

/// Path of the global configuration document, creating its directory.
///
/// Follows the XDG Base Directory layout: `$XDG_CONFIG_HOME/docpost/` or
/// `~/.config/docpost/`.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    let config_dir = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .ok()
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
        .ok_or_else(|| ConfigError::DirectoryCreationError {
            path: PathBuf::from("~/.config"),
            message: "could not determine home directory".to_string(),
        })?;

    let app_dir = config_dir.join("docpost");
    if !app_dir.exists() {
        fs::create_dir_all(&app_dir).map_err(|e| ConfigError::DirectoryCreationError {
            path: app_dir.clone(),
            message: e.to_string(),
        })?;
    }

    Ok(app_dir.join(GLOBAL_CONFIG_FILE))
}

/// Create an empty global configuration document for user reference.
///
/// Never overwrites an existing document.
#[must_use = "this operation can fail and the result should be checked"]
pub fn create_sample_config() -> Result<(), ConfigError> {
    let path = config_path()?;

    if path.exists() {
        return Ok(());
    }

    let sample = GlobalConfig {
        base_path: dirs::home_dir()
            .map(|home| home.join("docpost-docs").display().to_string())
            .unwrap_or_default(),
        ..GlobalConfig::default()
    };
    sample.save()?;

    println!("Sample config created at: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::file_serial;
    use std::env;
    use tempfile::TempDir;

    fn clear_docpost_env() {
        unsafe {
            env::remove_var("DOCPOST_ORGANIZATION");
            env::remove_var("DOCPOST_PROJECT");
            env::remove_var("DOCPOST_PAT");
            env::remove_var("DOCPOST_BASE_PATH");
            env::remove_var("DOCPOST_THEME");
        }
    }

    /// # Theme Parsing
    ///
    /// Tests parsing of theme names from strings.
    ///
    /// ## Test Scenario
    /// - Parses the three canonical names in mixed case
    /// - Parses an unknown name
    ///
    /// ## Expected Outcome
    /// - Canonical names parse case-insensitively
    /// - Unknown names return None from parse, but fall back to System
    ///   when coming through the lenient document conversion
    #[test]
    fn test_theme_parsing() {
        assert_eq!(Theme::parse("system"), Some(Theme::System));
        assert_eq!(Theme::parse("Light"), Some(Theme::Light));
        assert_eq!(Theme::parse("DARK"), Some(Theme::Dark));
        assert_eq!(Theme::parse("solarized"), None);
        assert_eq!(Theme::parse(""), None);

        assert_eq!(Theme::from("solarized".to_string()), Theme::System);
        assert_eq!(Theme::from("dark".to_string()), Theme::Dark);
    }

    /// # Theme Cycle
    ///
    /// Tests the settings-form theme cycle.
    ///
    /// ## Test Scenario
    /// - Cycles through all themes starting from System
    ///
    /// ## Expected Outcome
    /// - system -> light -> dark -> system
    #[test]
    fn test_theme_cycle() {
        assert_eq!(Theme::System.cycle(), Theme::Light);
        assert_eq!(Theme::Light.cycle(), Theme::Dark);
        assert_eq!(Theme::Dark.cycle(), Theme::System);
    }

    /// # Global Document Round-Trip
    ///
    /// Tests wholesale save and load of the global document.
    ///
    /// ## Test Scenario
    /// - Points XDG_CONFIG_HOME at a temp directory
    /// - Saves a full document and loads it back
    ///
    /// ## Expected Outcome
    /// - The loaded document equals the saved one
    /// - The document on disk is a pretty-printed JSON object
    #[test]
    #[file_serial(env_tests)]
    fn test_global_config_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let original_xdg = env::var("XDG_CONFIG_HOME").ok();
        unsafe {
            env::set_var("XDG_CONFIG_HOME", temp_dir.path());
        }

        let document = GlobalConfig {
            organization: "my_org".to_string(),
            project: "my_project".to_string(),
            pat: "secret".to_string(),
            base_path: "/home/user/docs".to_string(),
            theme: Theme::Dark,
        };
        document.save().unwrap();
        let loaded = GlobalConfig::load().unwrap();

        match original_xdg {
            Some(val) => unsafe { env::set_var("XDG_CONFIG_HOME", val) },
            None => unsafe { env::remove_var("XDG_CONFIG_HOME") },
        }

        assert_eq!(loaded, document);

        let raw = std::fs::read_to_string(
            temp_dir.path().join("docpost").join(GLOBAL_CONFIG_FILE),
        )
        .unwrap();
        assert!(raw.contains("\"theme\": \"dark\""));
    }

    /// # Global Document Missing File
    ///
    /// Tests loading when no document exists yet.
    ///
    /// ## Test Scenario
    /// - Points XDG_CONFIG_HOME at an empty temp directory
    /// - Loads the global document
    ///
    /// ## Expected Outcome
    /// - The empty default comes back, no error
    #[test]
    #[file_serial(env_tests)]
    fn test_global_config_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let original_xdg = env::var("XDG_CONFIG_HOME").ok();
        unsafe {
            env::set_var("XDG_CONFIG_HOME", temp_dir.path());
        }

        let loaded = GlobalConfig::load();

        match original_xdg {
            Some(val) => unsafe { env::set_var("XDG_CONFIG_HOME", val) },
            None => unsafe { env::remove_var("XDG_CONFIG_HOME") },
        }

        assert_eq!(loaded.unwrap(), GlobalConfig::default());
    }

    /// # Load Config from Environment Variables
    ///
    /// Tests loading configuration when environment variables are present.
    ///
    /// ## Test Scenario
    /// - Sets all DOCPOST_* environment variables
    /// - Loads configuration from environment
    ///
    /// ## Expected Outcome
    /// - All values are correctly parsed with env provenance
    #[test]
    #[file_serial(env_tests)]
    fn test_load_from_env_all_variables() {
        unsafe {
            env::set_var("DOCPOST_ORGANIZATION", "env-org");
            env::set_var("DOCPOST_PROJECT", "env-project");
            env::set_var("DOCPOST_PAT", "env-pat");
            env::set_var("DOCPOST_BASE_PATH", "/tmp/docs");
            env::set_var("DOCPOST_THEME", "dark");
        }

        let config = Config::load_from_env();
        clear_docpost_env();

        assert_eq!(
            config.organization,
            Some(ParsedProperty::Env(
                "env-org".to_string(),
                "env-org".to_string()
            ))
        );
        assert_eq!(
            config.project,
            Some(ParsedProperty::Env(
                "env-project".to_string(),
                "env-project".to_string()
            ))
        );
        assert_eq!(
            config.pat,
            Some(ParsedProperty::Env(
                "env-pat".to_string(),
                "env-pat".to_string()
            ))
        );
        assert_eq!(
            config.base_path,
            Some(ParsedProperty::Env(
                "/tmp/docs".to_string(),
                "/tmp/docs".to_string()
            ))
        );
        assert_eq!(
            config.theme,
            Some(ParsedProperty::Env(Theme::Dark, "dark".to_string()))
        );
    }

    /// # Load Config from Environment (None Set)
    ///
    /// Tests loading configuration when no environment variables are set.
    ///
    /// ## Test Scenario
    /// - Clears all DOCPOST_* variables
    /// - Loads configuration from environment
    ///
    /// ## Expected Outcome
    /// - Every field is None
    #[test]
    #[file_serial(env_tests)]
    fn test_load_from_env_no_variables() {
        clear_docpost_env();

        let config = Config::load_from_env();
        assert!(config.organization.is_none());
        assert!(config.project.is_none());
        assert!(config.pat.is_none());
        assert!(config.base_path.is_none());
        assert!(config.theme.is_none());
    }

    /// # Load Config from Environment (Invalid Theme)
    ///
    /// Tests handling of an unparseable theme value.
    ///
    /// ## Test Scenario
    /// - Sets DOCPOST_THEME to an unknown name
    ///
    /// ## Expected Outcome
    /// - The theme layer stays unset rather than guessing
    #[test]
    #[file_serial(env_tests)]
    fn test_load_from_env_invalid_theme() {
        clear_docpost_env();
        unsafe {
            env::set_var("DOCPOST_THEME", "chartreuse");
        }

        let config = Config::load_from_env();
        clear_docpost_env();

        assert!(config.theme.is_none());
    }

    /// # Config Merge Precedence
    ///
    /// Tests configuration merging where the other config takes precedence.
    ///
    /// ## Test Scenario
    /// - Merges a file-backed base layer with an env override layer
    ///
    /// ## Expected Outcome
    /// - Override values win; base values survive where the override is
    ///   unset
    #[test]
    fn test_config_merge_other_takes_precedence() {
        let base = Config {
            organization: Some(ParsedProperty::Default("base-org".to_string())),
            project: Some(ParsedProperty::Default("base-project".to_string())),
            pat: Some(ParsedProperty::Default("base-pat".to_string())),
            base_path: None,
            theme: Some(ParsedProperty::Default(Theme::Light)),
        };
        let other = Config {
            organization: Some(ParsedProperty::Env(
                "other-org".to_string(),
                "other-org".to_string(),
            )),
            project: None,
            pat: None,
            base_path: Some(ParsedProperty::Env(
                "/other/docs".to_string(),
                "/other/docs".to_string(),
            )),
            theme: None,
        };

        let merged = base.merge(other);

        assert_eq!(merged.organization.as_ref().unwrap().value(), "other-org");
        assert_eq!(merged.organization.as_ref().unwrap().source_name(), "env");
        assert_eq!(merged.project.as_ref().unwrap().value(), "base-project");
        assert_eq!(merged.pat.as_ref().unwrap().value(), "base-pat");
        assert_eq!(merged.base_path.as_ref().unwrap().value(), "/other/docs");
        assert_eq!(*merged.theme.as_ref().unwrap().value(), Theme::Light);
    }

    /// # File Layer Skips Empty Values
    ///
    /// Tests that empty strings in the document never shadow other layers.
    ///
    /// ## Test Scenario
    /// - Writes a document with an empty organization and a real project
    /// - Loads the file layer
    ///
    /// ## Expected Outcome
    /// - organization is unset, project carries file provenance
    #[test]
    #[file_serial(env_tests)]
    fn test_load_from_file_skips_empty() {
        let temp_dir = TempDir::new().unwrap();
        let original_xdg = env::var("XDG_CONFIG_HOME").ok();
        unsafe {
            env::set_var("XDG_CONFIG_HOME", temp_dir.path());
        }

        let document = GlobalConfig {
            organization: String::new(),
            project: "my_project".to_string(),
            ..GlobalConfig::default()
        };
        document.save().unwrap();
        let config = Config::load_from_file().unwrap();

        match original_xdg {
            Some(val) => unsafe { env::set_var("XDG_CONFIG_HOME", val) },
            None => unsafe { env::remove_var("XDG_CONFIG_HOME") },
        }

        assert!(config.organization.is_none());
        let project = config.project.unwrap();
        assert_eq!(project.value(), "my_project");
        assert_eq!(project.source_name(), "file");
    }

    /// # Load from File (Invalid JSON)
    ///
    /// Tests handling of a malformed global document.
    ///
    /// ## Test Scenario
    /// - Writes invalid JSON to the config location and loads it
    ///
    /// ## Expected Outcome
    /// - A ParseError is returned
    #[test]
    #[file_serial(env_tests)]
    fn test_load_from_file_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let app_dir = temp_dir.path().join("docpost");
        std::fs::create_dir_all(&app_dir).unwrap();
        std::fs::write(app_dir.join(GLOBAL_CONFIG_FILE), "{not json").unwrap();

        let original_xdg = env::var("XDG_CONFIG_HOME").ok();
        unsafe {
            env::set_var("XDG_CONFIG_HOME", temp_dir.path());
        }

        let result = Config::load_from_file();

        match original_xdg {
            Some(val) => unsafe { env::set_var("XDG_CONFIG_HOME", val) },
            None => unsafe { env::remove_var("XDG_CONFIG_HOME") },
        }

        assert!(matches!(result, Err(ConfigError::ParseError { .. })));
    }

    /// # Resolve Requires Connection Fields
    ///
    /// Tests strict resolution for the non-interactive commands.
    ///
    /// ## Test Scenario
    /// - Resolves an empty config
    /// - Resolves a config with all connection fields
    ///
    /// ## Expected Outcome
    /// - The empty config fails naming the first missing field and its
    ///   env var
    /// - The full config resolves with defaults for the rest
    #[test]
    fn test_resolve() {
        let err = Config::default().resolve().unwrap_err();
        match err {
            ConfigError::MissingRequired { field, env_var } => {
                assert_eq!(field, "organization");
                assert_eq!(env_var, "DOCPOST_ORGANIZATION");
            }
            other => panic!("expected MissingRequired, got {other}"),
        }

        let config = Config {
            organization: Some(ParsedProperty::Default("my_org".to_string())),
            project: Some(ParsedProperty::Default("my_project".to_string())),
            pat: Some(ParsedProperty::Default("token".to_string())),
            base_path: Some(ParsedProperty::Default("/docs".to_string())),
            theme: None,
        };
        let settings = config.resolve().unwrap();
        assert_eq!(settings.organization, "my_org");
        assert_eq!(settings.project, "my_project");
        assert_eq!(settings.base_path, PathBuf::from("/docs"));
        assert_eq!(settings.theme, Theme::System);
    }

    /// # Lenient Resolution
    ///
    /// Tests the TUI-side resolution that tolerates missing fields.
    ///
    /// ## Test Scenario
    /// - Resolves an empty config leniently
    ///
    /// ## Expected Outcome
    /// - Connection fields come back empty, base path falls back to the
    ///   current directory
    #[test]
    fn test_resolve_lenient() {
        let settings = Config::default().resolve_lenient();
        assert_eq!(settings.organization, "");
        assert_eq!(settings.project, "");
        assert!(!settings.has_pat());
        assert!(!settings.base_path.as_os_str().is_empty());
    }

    /// # Sample Config Creation
    ///
    /// Tests creation of the sample document and its no-overwrite rule.
    ///
    /// ## Test Scenario
    /// - Creates a sample config in a fresh XDG directory
    /// - Writes custom content and calls create again
    ///
    /// ## Expected Outcome
    /// - The first call creates a JSON document
    /// - The second call leaves existing content alone
    #[test]
    #[file_serial(env_tests)]
    fn test_create_sample_config() {
        let temp_dir = TempDir::new().unwrap();
        let original_xdg = env::var("XDG_CONFIG_HOME").ok();
        unsafe {
            env::set_var("XDG_CONFIG_HOME", temp_dir.path());
        }

        let first = create_sample_config();
        let config_file = temp_dir.path().join("docpost").join(GLOBAL_CONFIG_FILE);
        let created = config_file.exists();

        std::fs::write(&config_file, "{\"organization\": \"mine\"}").unwrap();
        let second = create_sample_config();
        let content = std::fs::read_to_string(&config_file).unwrap();

        match original_xdg {
            Some(val) => unsafe { env::set_var("XDG_CONFIG_HOME", val) },
            None => unsafe { env::remove_var("XDG_CONFIG_HOME") },
        }

        assert!(first.is_ok());
        assert!(created);
        assert!(second.is_ok());
        assert_eq!(content, "{\"organization\": \"mine\"}");
    }
}
