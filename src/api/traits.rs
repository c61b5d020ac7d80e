//! Traits for the publish-side API operations.
//!
//! The trait abstracts the three network operations so the UI and the
//! publish orchestration can be exercised against a mock:
//! - Mocking for unit tests
//! - Alternative implementations
//! - Easier testing of async code

use async_trait::async_trait;

use super::client::{ApiResponse, AzureDevOpsClient};
use crate::error::ApiError;
use crate::store::DocConfig;

/// Operations required to verify credentials and publish one note.
#[async_trait]
pub trait PublishApi: Send + Sync {
    /// Read-only connectivity check; true only on HTTP 2xx.
    async fn verify_connection(&self) -> bool;

    /// Posts the note as a new comment thread on the pull request.
    async fn post_pr_comment(
        &self,
        doc: &DocConfig,
        markdown: &str,
    ) -> Result<ApiResponse, ApiError>;

    /// Appends the note (rendered to HTML) to the work item history.
    async fn post_work_item_history(
        &self,
        doc: &DocConfig,
        markdown: &str,
    ) -> Result<ApiResponse, ApiError>;
}

#[async_trait]
impl PublishApi for AzureDevOpsClient {
    async fn verify_connection(&self) -> bool {
        AzureDevOpsClient::verify_connection(self).await
    }

    async fn post_pr_comment(
        &self,
        doc: &DocConfig,
        markdown: &str,
    ) -> Result<ApiResponse, ApiError> {
        AzureDevOpsClient::post_pr_comment(self, doc, markdown).await
    }

    async fn post_work_item_history(
        &self,
        doc: &DocConfig,
        markdown: &str,
    ) -> Result<ApiResponse, ApiError> {
        AzureDevOpsClient::post_work_item_history(self, doc, markdown).await
    }
}
