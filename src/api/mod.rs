//! Azure DevOps API client module.
//!
//! This module provides the client used to publish documentation notes:
//! a connectivity check against the project metadata endpoint, a POST
//! creating a pull request comment thread, and a JSON-patch PATCH
//! appending to a work item's history.
//!
//! ## Example
//!
//! ```rust,no_run
//! use docpost::api::AzureDevOpsClient;
//! use docpost::store::DocConfig;
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

mod auth;
mod client;
mod payloads;
mod traits;

pub use auth::{PatCredential, build_auth_header};
pub use client::{AZURE_DEVOPS_BASE, ApiResponse, AzureDevOpsClient, REQUEST_TIMEOUT};
pub use payloads::{CommentThread, JsonPatchOperation, PatchOp, history_patch};
pub use traits::PublishApi;
