//! Non-interactive command handlers.
//!
//! Each subcommand resolves configuration the same way the TUI does and
//! prints plain output suitable for scripts. `publish` exits nonzero
//! when Azure DevOps rejected either call.

use std::process::ExitCode;

use anyhow::Result;
use tracing::info;

use crate::config::Config;
use crate::models::Command;
use crate::publish;
use crate::store::{DocConfig, DocStore};

/// Dispatches one subcommand.
pub async fn run(command: &Command, config: &Config) -> Result<ExitCode> {
    match command {
        Command::List => list(config),
        Command::New {
            title,
            repository,
            pull_request,
            work_item,
        } => new(
            config,
            title,
            repository.clone().unwrap_or_default(),
            pull_request.clone().unwrap_or_default(),
            work_item.clone().unwrap_or_default(),
        ),
        Command::Publish { folder } => publish_folder(config, folder).await,
        Command::Verify => verify(config).await,
    }
}

fn list(config: &Config) -> Result<ExitCode> {
    let settings = config.resolve_lenient();
    let store = DocStore::new();
    for name in store.list_doc_folders(&settings.base_path) {
        println!("{name}");
    }
    Ok(ExitCode::SUCCESS)
}

fn new(
    config: &Config,
    title: &str,
    repository: String,
    pull_request: String,
    work_item: String,
) -> Result<ExitCode> {
    let settings = config.resolve_lenient();
    let store = DocStore::new();
    let doc = DocConfig {
        repository_id: repository,
        pull_request_id: pull_request,
        work_item_id: work_item,
    };

    let folder = store.create_doc_folder(&settings.base_path, title, &doc)?;
    println!("Created {}", folder.display());
    Ok(ExitCode::SUCCESS)
}

async fn publish_folder(config: &Config, folder: &str) -> Result<ExitCode> {
    let settings = config.resolve()?;
    let store = DocStore::new();
    let client = settings.client()?;
    let path = settings.base_path.join(folder);

    let report = publish::publish_folder(&client, &store, &path).await?;
    info!(folder, "publish finished");

    println!("PR comment: HTTP {}", report.pr.status_code());
    println!("Work item history: HTTP {}", report.work_item.status_code());
    println!("{}", report.summary());

    Ok(if report.all_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

async fn verify(config: &Config) -> Result<ExitCode> {
    let settings = config.resolve()?;
    let client = settings.client()?;

    if client.verify_connection().await {
        println!(
            "Connection OK: {}/{} is reachable",
            settings.organization, settings.project
        );
        Ok(ExitCode::SUCCESS)
    } else {
        eprintln!("Could not reach Azure DevOps with these settings");
        Ok(ExitCode::FAILURE)
    }
}
