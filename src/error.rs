//! Unified error handling for the docpost library.
//!
//! This module provides an error hierarchy using `thiserror` for better
//! programmatic error handling and more informative error messages.
//!
//! ## Error Categories
//!
//! - [`ApiError`]: Errors from Azure DevOps API interactions
//! - [`StoreError`]: Errors from the folder-backed local store
//! - [`ConfigError`]: Errors from configuration loading and validation
//! - [`UiError`]: Errors from terminal UI operations
//!
//! ## Example
//!
//! ```rust,no_run
//! use docpost::error::{DocpostError, ApiError};
//!
//! fn example() -> Result<(), DocpostError> {
//!     // Errors are automatically converted via From trait
//!     Err(ApiError::MissingDocField { field: "work_item_id" })?;
//!     Ok(())
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for the docpost library.
///
/// This enum encompasses all possible errors that can occur during
/// publishing, local storage operations, configuration handling, and
/// UI interactions.
#[derive(Error, Debug)]
pub enum DocpostError {
    /// An error occurred while talking to the Azure DevOps REST API.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// An error occurred in the folder-backed local store.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// An error occurred while loading or validating configuration.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// An error occurred in the terminal UI.
    #[error("UI error: {0}")]
    Ui(#[from] UiError),

    /// A generic error for cases not covered by specific error types.
    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

/// Errors that can occur when talking to the Azure DevOps REST API.
///
/// Non-2xx responses are deliberately NOT errors: publishing surfaces the
/// two HTTP status codes independently, so a rejected request travels back
/// as a normal [`crate::api::ApiResponse`]. Only transport-level failures
/// and local validation problems end up here.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request never produced an HTTP response (timeout, DNS, TLS, ...).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A computed endpoint was not a valid URL.
    #[error("Invalid request URL '{url}': {message}")]
    InvalidUrl {
        /// The offending URL string.
        url: String,
        /// Parse error message.
        message: String,
    },

    /// A documentation folder is missing a field required for publishing.
    #[error("Folder configuration is missing '{field}'")]
    MissingDocField {
        /// Name of the empty field.
        field: &'static str,
    },
}

/// Errors that can occur in the folder-backed local store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The target documentation folder already exists.
    ///
    /// This is a recoverable condition: the user picked a title that
    /// normalizes to an existing directory name.
    #[error("The folder '{name}' already exists at that path")]
    FolderExists {
        /// Normalized folder name that collided.
        name: String,
    },

    /// The title normalized to an empty folder name.
    #[error("A folder name is required")]
    EmptyTitle,

    /// Reading or writing a file failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path involved in the failed operation.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A JSON document on disk could not be parsed.
    #[error("Failed to parse JSON document at {path}: {message}")]
    InvalidJson {
        /// Path to the malformed document.
        path: PathBuf,
        /// Parse error message.
        message: String,
    },
}

/// Errors that can occur during configuration loading and validation.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required configuration field is missing.
    #[error("{field} is required (use --{field}, {env_var} env var, or the settings screen)")]
    MissingRequired {
        /// Name of the missing field.
        field: String,
        /// Environment variable name for this field.
        env_var: String,
    },

    /// Failed to read the configuration file.
    #[error("Failed to read config file at {path}: {message}")]
    FileReadError {
        /// Path to the config file.
        path: PathBuf,
        /// Error message.
        message: String,
    },

    /// Failed to parse the configuration file.
    #[error("Failed to parse config file at {path}: {message}")]
    ParseError {
        /// Path to the config file.
        path: PathBuf,
        /// Parse error message.
        message: String,
    },

    /// An invalid value was provided for a configuration field.
    #[error("Invalid value for {field}: {message}")]
    InvalidValue {
        /// Name of the field with invalid value.
        field: String,
        /// Description of why the value is invalid.
        message: String,
    },

    /// Failed to create the config directory.
    #[error("Failed to create config directory at {path}: {message}")]
    DirectoryCreationError {
        /// Path where directory creation failed.
        path: PathBuf,
        /// Error message.
        message: String,
    },
}

/// Errors that can occur in the terminal UI.
#[derive(Error, Debug)]
pub enum UiError {
    /// Failed to initialize the terminal.
    #[error("Failed to initialize terminal: {0}")]
    TerminalInitError(String),

    /// Failed to launch the external editor.
    #[error("Editor failed: {0}")]
    EditorFailed(String),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Type alias for Results using DocpostError.
///
/// Note: This is not re-exported from the crate root to avoid shadowing `anyhow::Result`.
/// Use explicitly as `error::Result<T>` when needed.
pub type DocpostResult<T> = std::result::Result<T, DocpostError>;
