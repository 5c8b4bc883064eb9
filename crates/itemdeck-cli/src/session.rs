//! Records persisted between CLI invocations.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use anyhow::{Context, Result};
use itemdeck_model::Record;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Session {
    pub items: Vec<Record>,
}

impl Session {
    /// Read the session at `path`; `None` when no session has been saved yet.
    pub fn load(path: &Path) -> Result<Option<Self>> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(error) if error.kind() == ErrorKind::NotFound => return Ok(None),
            Err(error) => {
                return Err(error)
                    .with_context(|| format!("failed to read session {}", path.display()));
            }
        };
        let session = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse session {}", path.display()))?;
        Ok(Some(session))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let content = serde_json::to_string_pretty(self).context("failed to encode session")?;
        fs::write(path, content)
            .with_context(|| format!("failed to write session {}", path.display()))?;
        tracing::info!(path = %path.display(), items = self.items.len(), "saved session");
        Ok(())
    }
}
