//! Publish orchestration: one note, two REST calls.
//!
//! Publishing a folder issues the pull request comment POST and then the
//! work item history PATCH. The two HTTP statuses travel back
//! independently; a success on one side never rolls back or blocks the
//! other. Transport failures abort the pair and surface as one error,
//! matching the single catch around the whole operation.

use std::path::Path;

use tokio::sync::oneshot;
use tracing::{info, warn};

use crate::api::{ApiResponse, PublishApi};
use crate::error::{ApiError, DocpostError};
use crate::store::{DocConfig, DocStore};

/// Both publish responses, carried independently.
#[derive(Debug, Clone)]
pub struct PublishReport {
    /// Response of the pull request comment POST.
    pub pr: ApiResponse,
    /// Response of the work item history PATCH.
    pub work_item: ApiResponse,
}

impl PublishReport {
    /// True when both calls returned 2xx.
    #[must_use]
    pub fn all_ok(&self) -> bool {
        self.pr.is_success() && self.work_item.is_success()
    }

    /// One-line summary for the status line and the CLI output.
    #[must_use]
    pub fn summary(&self) -> String {
        if self.all_ok() {
            "Published to pull request and work item".to_string()
        } else {
            format!(
                "Azure rejected the publish. PR: {}, work item: {}",
                self.pr.status_code(),
                self.work_item.status_code()
            )
        }
    }
}

/// Publishes one markdown note to the folder's pull request and work item.
///
/// Fails before any request when the folder configuration is missing a
/// target identifier. Each call's status is reported independently; the
/// work item PATCH runs even when the PR POST was rejected.
pub async fn publish_note(
    client: &dyn PublishApi,
    doc: &DocConfig,
    markdown: &str,
) -> Result<PublishReport, ApiError> {
    if let Some(field) = doc.missing_field() {
        return Err(ApiError::MissingDocField { field });
    }

    let pr = client.post_pr_comment(doc, markdown).await?;
    let work_item = client.post_work_item_history(doc, markdown).await?;

    let report = PublishReport { pr, work_item };
    if report.all_ok() {
        info!(
            pr = %doc.pull_request_id,
            work_item = %doc.work_item_id,
            "note published"
        );
    } else {
        warn!(
            pr_status = report.pr.status_code(),
            work_item_status = report.work_item.status_code(),
            pr_body = report.pr.body_snippet(),
            work_item_body = report.work_item.body_snippet(),
            "publish rejected"
        );
    }
    Ok(report)
}

/// Loads a folder's config and draft from the store and publishes them.
pub async fn publish_folder(
    client: &dyn PublishApi,
    store: &DocStore,
    folder: &Path,
) -> Result<PublishReport, DocpostError> {
    let doc = store.load_doc_config(folder)?;
    let markdown = store.read_markdown(folder)?;
    Ok(publish_note(client, &doc, &markdown).await?)
}

/// Runs a publish on its own task, delivering the result exactly once.
///
/// The UI loop polls the returned receiver; network I/O never runs on the
/// event loop itself and there is no cancellation, only completion.
pub fn spawn_publish<C>(
    client: C,
    doc: DocConfig,
    markdown: String,
) -> oneshot::Receiver<Result<PublishReport, ApiError>>
where
    C: PublishApi + 'static,
{
    let (tx, rx) = oneshot::channel();
    tokio::spawn(async move {
        let result = publish_note(&client, &doc, &markdown).await;
        // A dropped receiver just discards the result
        let _ = tx.send(result);
    });
    rx
}

/// Runs a connectivity check on its own task.
pub fn spawn_verify<C>(client: C) -> oneshot::Receiver<bool>
where
    C: PublishApi + 'static,
{
    let (tx, rx) = oneshot::channel();
    tokio::spawn(async move {
        let ok = client.verify_connection().await;
        let _ = tx.send(ok);
    });
    rx
}
