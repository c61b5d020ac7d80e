//! CLI surface and resolved runtime settings.

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use secrecy::{ExposeSecret, SecretString};

use crate::api::AzureDevOpsClient;
use crate::config::{Config, Theme};
use crate::error::{ApiError, ConfigError};

/// Shared arguments accepted by every command
#[derive(ClapArgs, Clone, Default, Debug)]
pub struct SharedArgs {
    // Azure DevOps Connection
    /// Azure DevOps organization name
    #[arg(short, long, global = true, help_heading = "Azure DevOps Connection")]
    pub organization: Option<String>,

    /// Azure DevOps project name
    #[arg(short, long, global = true, help_heading = "Azure DevOps Connection")]
    pub project: Option<String>,

    /// Personal Access Token for Azure DevOps API authentication
    #[arg(short = 't', long, global = true, help_heading = "Azure DevOps Connection")]
    pub pat: Option<String>,

    // Local Store
    /// Base directory holding the documentation folders
    #[arg(short, long, global = true, help_heading = "Local Store")]
    pub base_path: Option<String>,

    // Appearance
    /// TUI color theme: system, light or dark
    #[arg(long, global = true, help_heading = "Appearance")]
    pub theme: Option<String>,
}

/// Top-level command line arguments.
#[derive(Parser, Debug)]
#[command(
    name = "docpost",
    about = "Draft markdown notes in local folders and publish them to Azure DevOps pull requests and work items",
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")")
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub shared: SharedArgs,

    /// Create an empty global config document and exit
    #[arg(long, help_heading = "Setup")]
    pub create_config: bool,

    // Logging (also read before clap runs, so early tracing setup works)
    /// Log level: trace, debug, info, warn, error
    #[arg(long, help_heading = "Logging")]
    pub log_level: Option<String>,

    /// Log to this file instead of stderr
    #[arg(long, help_heading = "Logging")]
    pub log_file: Option<PathBuf>,

    /// Log format: text or json
    #[arg(long, help_heading = "Logging")]
    pub log_format: Option<String>,
}

/// Non-interactive subcommands; without one, the TUI runs.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List documentation folders under the base path
    List,

    /// Create a documentation folder
    New {
        /// Folder title; whitespace collapses to underscores
        title: String,

        /// Repository name or ID for the pull request
        #[arg(long, help_heading = "Publish Targets")]
        repository: Option<String>,

        /// Pull request ID that receives the comment
        #[arg(long, help_heading = "Publish Targets")]
        pull_request: Option<String>,

        /// Work item ID whose history receives the note
        #[arg(long, help_heading = "Publish Targets")]
        work_item: Option<String>,
    },

    /// Publish a folder's draft as PR comment and work item history
    Publish {
        /// Name of the documentation folder
        folder: String,
    },

    /// Check that organization, project and PAT can reach Azure DevOps
    Verify,
}

impl Args {
    /// Resolve layered configuration: CLI over environment over the
    /// global document.
    pub fn resolve_config(&self) -> Result<Config, ConfigError> {
        let file = Config::load_from_file()?;
        let env = Config::load_from_env();
        let cli = Config::from_shared_args(&self.shared);
        Ok(file.merge(env).merge(cli))
    }
}

/// Resolved runtime settings handed to each component at construction.
///
/// The PAT is wrapped on entry and only exposed when a client is built.
#[derive(Clone)]
pub struct AppSettings {
    /// Azure DevOps organization name.
    pub organization: String,
    /// Azure DevOps project name.
    pub project: String,
    pat: SecretString,
    /// Base directory holding the documentation folders.
    pub base_path: PathBuf,
    /// TUI color theme.
    pub theme: Theme,
}

impl AppSettings {
    /// Wraps resolved values, sealing the PAT into a SecretString.
    #[must_use]
    pub fn new(
        organization: String,
        project: String,
        pat: String,
        base_path: PathBuf,
        theme: Theme,
    ) -> Self {
        Self {
            organization,
            project,
            pat: SecretString::from(pat),
            base_path,
            theme,
        }
    }

    /// True when a non-empty PAT is configured.
    #[must_use]
    pub fn has_pat(&self) -> bool {
        !self.pat.expose_secret().is_empty()
    }

    /// True when every connection field needed for publishing is present.
    #[must_use]
    pub fn is_connectable(&self) -> bool {
        !self.organization.is_empty() && !self.project.is_empty() && self.has_pat()
    }

    /// Builds an API client for these settings.
    pub fn client(&self) -> Result<AzureDevOpsClient, ApiError> {
        AzureDevOpsClient::new_with_secret(
            self.organization.clone(),
            self.project.clone(),
            self.pat.clone(),
        )
    }
}

impl std::fmt::Debug for AppSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppSettings")
            .field("organization", &self.organization)
            .field("project", &self.project)
            .field("pat", &"[REDACTED]")
            .field("base_path", &self.base_path)
            .field("theme", &self.theme)
            .finish()
    }
}
