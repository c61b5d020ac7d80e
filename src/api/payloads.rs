//! Wire payloads for the two publish endpoints.
//!
//! Kept as typed structs so the request bodies are asserted in tests
//! rather than assembled ad hoc at the call sites.

use serde::{Deserialize, Serialize};

/// A pull request comment thread with a single comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentThread {
    /// The comments opening the thread.
    pub comments: Vec<ThreadComment>,
    /// Thread status; new documentation threads start active.
    pub status: ThreadStatus,
}

impl CommentThread {
    /// A new active thread containing one text comment.
    #[must_use]
    pub fn single_comment(content: impl Into<String>) -> Self {
        Self {
            comments: vec![ThreadComment {
                content: content.into(),
                comment_type: CommentType::Text,
            }],
            status: ThreadStatus::Active,
        }
    }
}

/// One comment inside a thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreadComment {
    /// Raw markdown body; Azure DevOps renders markdown in PR comments.
    pub content: String,
    /// Comment kind.
    pub comment_type: CommentType,
}

/// Comment kind accepted by the threads endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentType {
    Text,
}

/// Thread status accepted by the threads endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThreadStatus {
    Active,
}

/// A single JSON-patch operation for the work item update endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonPatchOperation {
    /// Patch verb.
    pub op: PatchOp,
    /// Field path, e.g. `/fields/System.History`.
    pub path: String,
    /// New value for the field.
    pub value: serde_json::Value,
}

/// JSON-patch verbs used by this client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatchOp {
    Add,
}

/// The patch document appending one HTML entry to a work item's history.
#[must_use]
pub fn history_patch(html: impl Into<String>) -> Vec<JsonPatchOperation> {
    vec![JsonPatchOperation {
        op: PatchOp::Add,
        path: "/fields/System.History".to_string(),
        value: serde_json::Value::String(html.into()),
    }]
}
