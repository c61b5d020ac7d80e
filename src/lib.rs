//! # docpost
//!
//! A terminal tool for drafting markdown documentation notes in local
//! per-topic folders and publishing each note to Azure DevOps as a pull
//! request comment plus a work item history entry. This library provides:
//!
//! - An Azure DevOps REST client (connectivity check, PR comment threads,
//!   work item history patches)
//! - A folder-backed local store for drafts and their configuration
//! - Layered configuration with a JSON document, env vars and CLI flags
//! - A ratatui TUI and non-interactive subcommands on top of both
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use docpost::{AzureDevOpsClient, DocConfig};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = AzureDevOpsClient::new(
//!     "my-org".to_string(),
//!     "my-project".to_string(),
//!     "my-pat".to_string(),
//! )?;
//!
//! let doc = DocConfig {
//!     repository_id: "docs-repo".to_string(),
//!     pull_request_id: "99".to_string(),
//!     work_item_id: "1234".to_string(),
//! };
//!
//! let response = client.post_pr_comment(&doc, "Ready for review.").await?;
//! println!("PR comment: HTTP {}", response.status_code());
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod commands;
pub mod config;
pub mod editor;
pub mod error;
pub mod logging;
pub mod markdown;
pub mod models;
pub mod parsed_property;
pub mod publish;
pub mod store;
pub mod ui;
pub mod utils;

// Re-export commonly used types for convenience
pub use api::AzureDevOpsClient;
pub use config::{Config, GlobalConfig, Theme};
pub use models::{AppSettings, Args, Command};
pub use store::{DocConfig, DocStore};

/// Core result type used throughout the library
pub type Result<T> = anyhow::Result<T>;

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
