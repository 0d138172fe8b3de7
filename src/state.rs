//! On-disk statusline state: the last submitted prompt and the git status
//! cache, both living in a fixed state directory.
//!
//! Every invocation is a short-lived process, so all access is whole-document
//! read/overwrite. Concurrent invocations may race on the cache file; a lost
//! update self-heals within one TTL window, so no locking.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

const PROMPT_FILE: &str = "prompt.txt";
const CACHE_FILE: &str = "git_cache.json";

/// One cached git status lookup for a workspace path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry {
    pub status: String,
    /// Milliseconds since the Unix epoch at the time of the lookup.
    pub time: u64,
}

/// Milliseconds since the Unix epoch.
pub fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
        .unwrap_or(0)
}

/// Handle to the statusline state directory.
///
/// Injected into the snippet reader and the status cache so tests can point
/// it at a tempdir. Reads tolerate absent or corrupt files; writes are
/// best-effort — a failed write must never fail a render.
#[derive(Debug, Clone)]
pub struct StateStore {
    dir: PathBuf,
}

impl StateStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The production location: `~/.claude/statusline-state/`.
    ///
    /// Falls back to the temp dir if no home directory can be determined, so
    /// the renderer still produces a line (just without persisted state).
    pub fn from_home() -> Self {
        let base = dirs::home_dir().unwrap_or_else(std::env::temp_dir);
        Self::new(base.join(".claude").join("statusline-state"))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn prompt_path(&self) -> PathBuf {
        self.dir.join(PROMPT_FILE)
    }

    fn cache_path(&self) -> PathBuf {
        self.dir.join(CACHE_FILE)
    }

    /// Read the stored prompt, if any.
    pub fn read_prompt(&self) -> Option<String> {
        fs::read_to_string(self.prompt_path()).ok()
    }

    /// Overwrite the stored prompt. Failures are swallowed.
    pub fn write_prompt(&self, text: &str) {
        if fs::create_dir_all(&self.dir).is_err() {
            return;
        }
        let _ = fs::write(self.prompt_path(), text);
    }

    /// Look up the cached status for a workspace path.
    ///
    /// Staleness is the caller's concern — entries are returned regardless
    /// of age.
    pub fn cache_entry(&self, workspace: &str) -> Option<CacheEntry> {
        let mut cache = self.read_cache();
        cache.remove(workspace)
    }

    /// Record a fresh status for a workspace path (read-modify-write of the
    /// whole cache document). Failures are swallowed — the caller already
    /// has the fresh status in hand.
    pub fn record_status(&self, workspace: &str, status: &str, time: u64) {
        let mut cache = self.read_cache();
        cache.insert(
            workspace.to_string(),
            CacheEntry {
                status: status.to_string(),
                time,
            },
        );
        if fs::create_dir_all(&self.dir).is_err() {
            return;
        }
        if let Ok(json) = serde_json::to_string_pretty(&cache) {
            let _ = fs::write(self.cache_path(), json);
        }
    }

    fn read_cache(&self) -> HashMap<String, CacheEntry> {
        fs::read_to_string(self.cache_path())
            .ok()
            .and_then(|contents| serde_json::from_str(&contents).ok())
            .unwrap_or_default()
    }

    /// Delete both state files. Missing files are not an error.
    pub fn clear(&self) {
        let _ = fs::remove_file(self.prompt_path());
        let _ = fs::remove_file(self.cache_path());
    }
}
