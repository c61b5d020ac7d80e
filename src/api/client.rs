//! Azure DevOps REST client for publishing documentation notes.
//!
//! The endpoints, headers and request bodies used here are part of this
//! tool's contract, so requests are built directly against the REST API
//! instead of going through a generated SDK surface.

use std::time::Duration;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use secrecy::SecretString;
use tracing::{debug, error, info, instrument};
use url::Url;

use super::auth::PatCredential;
use super::payloads::{CommentThread, history_patch};
use crate::error::ApiError;
use crate::markdown;
use crate::store::DocConfig;
use crate::utils::truncate_str;

/// Base URL of the Azure DevOps REST API.
pub const AZURE_DEVOPS_BASE: &str = "https://dev.azure.com";

/// Per-request timeout applied to every call this client makes.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

const PROJECTS_API_VERSION: &str = "7.0";
const THREADS_API_VERSION: &str = "7.1-preview.1";
const WORK_ITEMS_API_VERSION: &str = "7.1-preview.3";

/// Outcome of a publish request that produced an HTTP response.
///
/// Non-2xx statuses are data, not errors: the caller inspects the status
/// and reports it. Only transport failures become [`ApiError`].
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// HTTP status returned by Azure DevOps.
    pub status: reqwest::StatusCode,
    /// Raw response body, kept for diagnostics.
    pub body: String,
}

impl ApiResponse {
    async fn read(response: reqwest::Response) -> Self {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Self { status, body }
    }

    /// True for any 2xx status.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Numeric status code, for display.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        self.status.as_u16()
    }

    /// A short, char-boundary-safe prefix of the body for log lines and
    /// status messages.
    #[must_use]
    pub fn body_snippet(&self) -> &str {
        truncate_str(&self.body, 100)
    }
}

/// Azure DevOps API client scoped to one organization and project.
#[derive(Debug, Clone)]
pub struct AzureDevOpsClient {
    organization: String,
    project: String,
    credential: PatCredential,
    http: reqwest::Client,
}

impl AzureDevOpsClient {
    /// Creates a new client.
    ///
    /// # Arguments
    ///
    /// * `organization` - Azure DevOps organization name
    /// * `project` - Azure DevOps project name
    /// * `pat` - Personal Access Token for authentication
    pub fn new(organization: String, project: String, pat: String) -> Result<Self, ApiError> {
        Self::new_with_secret(organization, project, SecretString::from(pat))
    }

    /// Creates a new client with a SecretString PAT.
    ///
    /// Preferred when the PAT is already wrapped, so it never passes
    /// through a plain `String` again.
    pub fn new_with_secret(
        organization: String,
        project: String,
        pat: SecretString,
    ) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            organization,
            project,
            credential: PatCredential::new(pat),
            http,
        })
    }

    /// Returns the organization name.
    pub fn organization(&self) -> &str {
        &self.organization
    }

    /// Returns the project name.
    pub fn project(&self) -> &str {
        &self.project
    }

    /// URL of the project metadata endpoint used by the connectivity check.
    #[must_use]
    pub fn project_url(&self) -> String {
        format!(
            "{AZURE_DEVOPS_BASE}/{}/_apis/projects/{}?api-version={PROJECTS_API_VERSION}",
            self.organization, self.project
        )
    }

    /// URL of the pull request comment threads endpoint for a folder config.
    #[must_use]
    pub fn pr_threads_url(&self, doc: &DocConfig) -> String {
        format!(
            "{AZURE_DEVOPS_BASE}/{}/{}/_apis/git/repositories/{}/pullRequests/{}/threads?api-version={THREADS_API_VERSION}",
            self.organization, self.project, doc.repository_id, doc.pull_request_id
        )
    }

    /// URL of the work item update endpoint for a folder config.
    #[must_use]
    pub fn work_item_url(&self, doc: &DocConfig) -> String {
        format!(
            "{AZURE_DEVOPS_BASE}/{}/{}/_apis/wit/workitems/{}?api-version={WORK_ITEMS_API_VERSION}",
            self.organization, self.project, doc.work_item_id
        )
    }

    fn endpoint(&self, url: String) -> Result<Url, ApiError> {
        Url::parse(&url).map_err(|e| ApiError::InvalidUrl {
            url,
            message: e.to_string(),
        })
    }

    /// Checks that the organization, project and PAT can reach the API.
    ///
    /// One read-only GET against the project metadata endpoint. True only
    /// for a 2xx response; any non-2xx status or transport failure is
    /// false, with no finer distinction surfaced.
    #[instrument(skip(self))]
    pub async fn verify_connection(&self) -> bool {
        let url = self.project_url();
        info!(%url, "verifying Azure DevOps connectivity");

        let parsed = match Url::parse(&url) {
            Ok(parsed) => parsed,
            Err(e) => {
                error!(error = %e, "connectivity check URL is invalid");
                return false;
            }
        };

        match self
            .http
            .get(parsed)
            .header(AUTHORIZATION, self.credential.header_value())
            .send()
            .await
        {
            Ok(response) => {
                let ok = response.status().is_success();
                info!(status = response.status().as_u16(), ok, "connectivity check finished");
                ok
            }
            Err(e) => {
                error!(error = %e, "connectivity check failed");
                false
            }
        }
    }

    /// Posts the markdown note as a new active comment thread on the
    /// folder's pull request.
    #[instrument(skip(self, markdown), fields(pr = %doc.pull_request_id))]
    pub async fn post_pr_comment(
        &self,
        doc: &DocConfig,
        markdown: &str,
    ) -> Result<ApiResponse, ApiError> {
        let url = self.endpoint(self.pr_threads_url(doc))?;
        let body = CommentThread::single_comment(markdown);

        debug!(url = %url, "posting pull request comment thread");
        let response = self
            .http
            .post(url)
            .header(AUTHORIZATION, self.credential.header_value())
            .json(&body)
            .send()
            .await?;

        Ok(ApiResponse::read(response).await)
    }

    /// Appends the note to the folder's work item history.
    ///
    /// The markdown is rendered to HTML first; the `System.History` field
    /// does not render markdown.
    #[instrument(skip(self, markdown), fields(work_item = %doc.work_item_id))]
    pub async fn post_work_item_history(
        &self,
        doc: &DocConfig,
        markdown: &str,
    ) -> Result<ApiResponse, ApiError> {
        let url = self.endpoint(self.work_item_url(doc))?;
        let patch = history_patch(markdown::to_html(markdown));

        debug!(url = %url, "patching work item history");
        let response = self
            .http
            .patch(url)
            .header(AUTHORIZATION, self.credential.header_value())
            .header(CONTENT_TYPE, "application/json-patch+json")
            .json(&patch)
            .send()
            .await?;

        Ok(ApiResponse::read(response).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> AzureDevOpsClient {
        AzureDevOpsClient::new(
            "my_org".to_string(),
            "my_project".to_string(),
            "test_pat".to_string(),
        )
        .unwrap()
    }

    fn test_doc() -> DocConfig {
        DocConfig {
            repository_id: "repo_123".to_string(),
            pull_request_id: "99".to_string(),
            work_item_id: "1234".to_string(),
        }
    }

    /// # Client Creation and Accessors
    ///
    /// Tests that the client can be created and accessor methods work.
    ///
    /// ## Test Scenario
    /// - Creates a client with test values
    /// - Verifies accessor methods return correct values
    ///
    /// ## Expected Outcome
    /// - Accessors return the values passed to the constructor
    #[test]
    fn test_client_creation_and_accessors() {
        let client = test_client();
        assert_eq!(client.organization(), "my_org");
        assert_eq!(client.project(), "my_project");
    }

    /// # Client Debug Redaction
    ///
    /// Tests that the PAT never leaks through Debug formatting.
    ///
    /// ## Test Scenario
    /// - Formats the client with {:?}
    ///
    /// ## Expected Outcome
    /// - The token value is absent, the redaction marker is present
    #[test]
    fn test_client_debug_redacted() {
        let debug = format!("{:?}", test_client());
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("test_pat"));
    }

    /// # Connectivity Check URL
    ///
    /// Tests the project metadata endpoint URL.
    ///
    /// ## Test Scenario
    /// - Builds the URL for org my_org and project my_project
    ///
    /// ## Expected Outcome
    /// - The URL targets the projects endpoint under the organization,
    ///   pinned to api-version 7.0
    #[test]
    fn test_project_url() {
        let url = test_client().project_url();
        assert_eq!(
            url,
            "https://dev.azure.com/my_org/_apis/projects/my_project?api-version=7.0"
        );
        assert!(Url::parse(&url).is_ok());
    }

    /// # Pull Request Threads URL
    ///
    /// Tests the comment threads endpoint URL for a folder config.
    ///
    /// ## Test Scenario
    /// - Builds the URL for repository repo_123 and pull request 99
    ///
    /// ## Expected Outcome
    /// - The URL contains the organization/project prefix and the
    ///   repository/pullRequests path
    #[test]
    fn test_pr_threads_url() {
        let url = test_client().pr_threads_url(&test_doc());
        assert!(url.contains("dev.azure.com/my_org/my_project"));
        assert!(url.contains("repositories/repo_123/pullRequests/99"));
        assert!(url.ends_with("/threads?api-version=7.1-preview.1"));
        assert!(Url::parse(&url).is_ok());
    }

    /// # Work Item URL
    ///
    /// Tests the work item update endpoint URL for a folder config.
    ///
    /// ## Test Scenario
    /// - Builds the URL for work item 1234
    ///
    /// ## Expected Outcome
    /// - The URL targets the wit/workitems endpoint with the preview
    ///   api-version the history field requires
    #[test]
    fn test_work_item_url() {
        let url = test_client().work_item_url(&test_doc());
        assert_eq!(
            url,
            "https://dev.azure.com/my_org/my_project/_apis/wit/workitems/1234?api-version=7.1-preview.3"
        );
    }

    /// # ApiResponse Success Classification
    ///
    /// Tests the 2xx classification and snippet helpers.
    ///
    /// ## Test Scenario
    /// - Builds responses with 200, 403 and a long body
    ///
    /// ## Expected Outcome
    /// - Only the 2xx response counts as success
    /// - The snippet is capped at 100 bytes
    #[test]
    fn test_api_response_helpers() {
        let ok = ApiResponse {
            status: reqwest::StatusCode::OK,
            body: String::new(),
        };
        assert!(ok.is_success());
        assert_eq!(ok.status_code(), 200);

        let forbidden = ApiResponse {
            status: reqwest::StatusCode::FORBIDDEN,
            body: "x".repeat(500),
        };
        assert!(!forbidden.is_success());
        assert_eq!(forbidden.status_code(), 403);
        assert_eq!(forbidden.body_snippet().len(), 100);
    }
}
