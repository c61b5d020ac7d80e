//! Folder-backed local store for documentation drafts.
//!
//! Each documentation folder is a directory under the user-chosen base path
//! holding exactly two files: a JSON configuration document tying the folder
//! to a pull request and a work item, and the markdown draft itself. The
//! store reads and writes those files and enumerates the folders, nothing
//! else owns that layout.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use chrono::{DateTime, Local};
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::StoreError;

/// File name of the per-folder configuration document.
pub const DOC_CONFIG_FILE: &str = "config.json";

/// File name of the per-folder markdown draft.
pub const MARKDOWN_FILE: &str = "content.md";

/// Folder names that are never treated as documentation folders.
pub const DEFAULT_IGNORE_FOLDERS: [&str; 6] = [
    "venv",
    "__pycache__",
    ".git",
    ".pytest_cache",
    "icon",
    "tests",
];

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// A loosely-typed JSON object, the unit of document persistence.
pub type JsonMap = serde_json::Map<String, serde_json::Value>;

/// Per-folder configuration tying a draft to its publish targets.
///
/// All three identifiers are kept as strings: they are spliced into URL
/// paths and the repository may be referenced by name rather than ID.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocConfig {
    /// Repository name or ID the pull request lives in.
    #[serde(default)]
    pub repository_id: String,
    /// Pull request that receives the comment thread.
    #[serde(default)]
    pub pull_request_id: String,
    /// Work item whose history receives the note.
    #[serde(default)]
    pub work_item_id: String,
}

impl DocConfig {
    /// Returns the first empty field required for publishing, if any.
    pub fn missing_field(&self) -> Option<&'static str> {
        if self.repository_id.trim().is_empty() {
            Some("repository_id")
        } else if self.pull_request_id.trim().is_empty() {
            Some("pull_request_id")
        } else if self.work_item_id.trim().is_empty() {
            Some("work_item_id")
        } else {
            None
        }
    }
}

/// Load a JSON document from disk.
///
/// A missing file is empty state, not an error: the caller gets an empty
/// mapping back. Anything else on disk must parse as a JSON object.
pub fn load_document(path: &Path) -> Result<JsonMap, StoreError> {
    if !path.exists() {
        return Ok(JsonMap::new());
    }

    let content = fs::read_to_string(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let value: serde_json::Value =
        serde_json::from_str(&content).map_err(|e| StoreError::InvalidJson {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    match value {
        serde_json::Value::Object(map) => Ok(map),
        other => Err(StoreError::InvalidJson {
            path: path.to_path_buf(),
            message: format!("expected a JSON object, found {}", json_type_name(&other)),
        }),
    }
}

/// Save a JSON document to disk, overwriting unconditionally.
///
/// Documents are pretty-printed so hand-inspection and diffs stay readable.
pub fn save_document(path: &Path, document: &JsonMap) -> Result<(), StoreError> {
    let content = serde_json::to_string_pretty(document).map_err(|e| StoreError::InvalidJson {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    fs::write(path, content).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Normalize a user-entered title into a folder name.
///
/// Leading and trailing whitespace is dropped and internal whitespace runs
/// collapse to a single underscore, so `" Doc  Name "` becomes `Doc_Name`.
#[must_use]
pub fn normalize_title(title: &str) -> String {
    WHITESPACE_RUN.replace_all(title.trim(), "_").into_owned()
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

/// The folder-backed store itself.
///
/// Carries the ignore-set so folder listing rules are explicit and
/// injectable in tests rather than read from a global.
#[derive(Debug, Clone)]
pub struct DocStore {
    ignore_folders: HashSet<String>,
}

impl Default for DocStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DocStore {
    /// Creates a store with the default ignore-set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            ignore_folders: DEFAULT_IGNORE_FOLDERS
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
        }
    }

    /// Creates a store with a custom ignore-set.
    #[must_use]
    pub fn with_ignore_folders<I, S>(ignore: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ignore_folders: ignore.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates a new documentation folder under `base_path`.
    ///
    /// The title is normalized first; creation fails with
    /// [`StoreError::FolderExists`] when the target directory is already
    /// present, leaving the filesystem untouched. On success the folder
    /// contains the configuration document and an empty markdown draft.
    pub fn create_doc_folder(
        &self,
        base_path: &Path,
        title: &str,
        config: &DocConfig,
    ) -> Result<PathBuf, StoreError> {
        let name = normalize_title(title);
        if name.is_empty() {
            return Err(StoreError::EmptyTitle);
        }

        let folder = base_path.join(&name);
        if folder.exists() {
            return Err(StoreError::FolderExists { name });
        }

        fs::create_dir_all(&folder).map_err(|source| StoreError::Io {
            path: folder.clone(),
            source,
        })?;

        self.save_doc_config(&folder, config)?;
        self.write_markdown(&folder, "")?;

        info!(folder = %folder.display(), "created documentation folder");
        Ok(folder)
    }

    /// Lists documentation folder names under `base_path`.
    ///
    /// Only immediate subdirectories count; the ignore-set and any name
    /// starting with a dot are skipped. Names come back sorted. An empty
    /// or nonexistent base path yields an empty list.
    #[must_use]
    pub fn list_doc_folders(&self, base_path: &Path) -> Vec<String> {
        if base_path.as_os_str().is_empty() || !base_path.exists() {
            return Vec::new();
        }

        let Ok(entries) = fs::read_dir(base_path) else {
            return Vec::new();
        };

        let mut names: Vec<String> = entries
            .filter_map(Result::ok)
            .filter(|entry| entry.path().is_dir())
            .filter_map(|entry| entry.file_name().into_string().ok())
            .filter(|name| !name.starts_with('.') && !self.ignore_folders.contains(name))
            .collect();

        names.sort();
        debug!(base = %base_path.display(), count = names.len(), "listed documentation folders");
        names
    }

    /// Loads the configuration document of a folder.
    ///
    /// A missing document reads as the default (all fields empty).
    pub fn load_doc_config(&self, folder: &Path) -> Result<DocConfig, StoreError> {
        let path = folder.join(DOC_CONFIG_FILE);
        let map = load_document(&path)?;
        serde_json::from_value(serde_json::Value::Object(map)).map_err(|e| {
            StoreError::InvalidJson {
                path,
                message: e.to_string(),
            }
        })
    }

    /// Saves the configuration document of a folder, overwriting it.
    pub fn save_doc_config(&self, folder: &Path, config: &DocConfig) -> Result<(), StoreError> {
        let path = folder.join(DOC_CONFIG_FILE);
        let value = serde_json::to_value(config).map_err(|e| StoreError::InvalidJson {
            path: path.clone(),
            message: e.to_string(),
        })?;
        match value {
            serde_json::Value::Object(map) => save_document(&path, &map),
            _ => unreachable!("DocConfig serializes to an object"),
        }
    }

    /// Reads the markdown draft of a folder; a missing draft reads as empty.
    pub fn read_markdown(&self, folder: &Path) -> Result<String, StoreError> {
        let path = folder.join(MARKDOWN_FILE);
        if !path.exists() {
            return Ok(String::new());
        }
        fs::read_to_string(&path).map_err(|source| StoreError::Io { path, source })
    }

    /// Writes the markdown draft of a folder, overwriting it.
    pub fn write_markdown(&self, folder: &Path, content: &str) -> Result<(), StoreError> {
        let path = folder.join(MARKDOWN_FILE);
        fs::write(&path, content).map_err(|source| StoreError::Io { path, source })
    }

    /// Last modification time of a folder's markdown draft, for display.
    #[must_use]
    pub fn folder_modified_at(&self, folder: &Path) -> Option<DateTime<Local>> {
        let path = folder.join(MARKDOWN_FILE);
        let modified = fs::metadata(path).ok()?.modified().ok()?;
        Some(DateTime::<Local>::from(modified))
    }
}
