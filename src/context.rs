//! Session context delivered by Claude Code on stdin.
//!
//! The payload is a JSON document with more fields than we care about; we
//! declare a schema for just the ones we read, all optional. Malformed or
//! empty input decodes to an all-empty context — a bad payload must never
//! fail a render.

use std::io::Read;

use serde::Deserialize;

#[derive(Debug, Default, Clone, Deserialize)]
pub struct SessionContext {
    #[serde(default)]
    model: Option<ModelInfo>,
    #[serde(default)]
    workspace: Option<WorkspaceInfo>,
}

#[derive(Debug, Default, Clone, Deserialize)]
struct ModelInfo {
    #[serde(default)]
    display_name: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize)]
struct WorkspaceInfo {
    #[serde(default)]
    current_dir: Option<String>,
}

impl SessionContext {
    /// Decode a session context from raw bytes. Anything unparseable is an
    /// empty context.
    pub fn from_slice(bytes: &[u8]) -> Self {
        serde_json::from_slice(bytes).unwrap_or_default()
    }

    /// Read all of `input` and decode it. Read errors count as empty input.
    pub fn from_reader(input: &mut impl Read) -> Self {
        let mut bytes = Vec::new();
        if input.read_to_end(&mut bytes).is_err() {
            return Self::default();
        }
        Self::from_slice(&bytes)
    }

    /// The active model's display name, or `""` when absent.
    pub fn model_display_name(&self) -> &str {
        self.model
            .as_ref()
            .and_then(|m| m.display_name.as_deref())
            .unwrap_or("")
    }

    /// The session's current workspace directory, or `""` when absent.
    pub fn workspace_dir(&self) -> &str {
        self.workspace
            .as_ref()
            .and_then(|w| w.current_dir.as_deref())
            .unwrap_or("")
    }
}
