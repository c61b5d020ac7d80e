//! External editor integration for the markdown draft.
//!
//! Drafts are edited in the user's own editor rather than a homegrown
//! text widget. The TUI suspends the terminal around the child process.

use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::error::UiError;

/// The editor command to launch, from `$VISUAL`, then `$EDITOR`, then `vi`.
#[must_use]
pub fn editor_command() -> String {
    std::env::var("VISUAL")
        .or_else(|_| std::env::var("EDITOR"))
        .unwrap_or_else(|_| "vi".to_string())
}

/// Opens a file in the user's configured editor and waits for it to exit.
///
/// The editor command may carry arguments (e.g. `code --wait`).
pub fn open(path: &Path) -> Result<(), UiError> {
    let editor = editor_command();

    let mut parts = editor.split_whitespace();
    let Some(program) = parts.next() else {
        return Err(UiError::EditorFailed("empty editor command".to_string()));
    };
    let args: Vec<&str> = parts.collect();

    debug!(%editor, path = %path.display(), "launching editor");
    let status = Command::new(program)
        .args(&args)
        .arg(path)
        .status()
        .map_err(|e| UiError::EditorFailed(format!("failed to launch '{editor}': {e}")))?;

    if !status.success() {
        return Err(UiError::EditorFailed(format!(
            "'{editor}' exited with {status}"
        )));
    }

    Ok(())
}
