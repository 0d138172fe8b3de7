//! Git status for the statusline, with a short-TTL per-workspace cache.
//!
//! The renderer runs before every prompt redraw, so the expensive part —
//! shelling out to git — is cached per workspace path for [`CACHE_TTL_MS`].
//! Rapid successive redraws hit the cache; at most one set of git calls runs
//! per workspace per TTL window.
//!
//! Every git sub-query degrades independently: an unreadable branch falls
//! back to a short commit id and then to `"detached"`, a failed status query
//! counts as zero changed files, and a missing repo (or missing git) yields
//! an empty status. Nothing in this module returns an error to the caller.

use std::io::Read as _;
use std::path::Path;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

use crate::state::{StateStore, now_ms};

/// How long a cached status stays fresh.
pub const CACHE_TTL_MS: u64 = 2000;

/// Upper bound on any single git invocation. A hung git (e.g. a stuck
/// credential helper on a network mount) must not block the prompt redraw.
const GIT_TIMEOUT: Duration = Duration::from_millis(1500);

const DETACHED_PLACEHOLDER: &str = "detached";

/// The git queries the status cache needs, behind a trait so tests can count
/// invocations and simulate failures without a real repository.
pub trait GitClient {
    /// Whether `dir` is inside a git working tree.
    fn is_work_tree(&self, dir: &Path) -> bool;
    /// Current branch name. `None` when detached or unreadable.
    fn current_branch(&self, dir: &Path) -> Option<String>;
    /// Short commit id of HEAD. `None` when unreadable.
    fn short_head(&self, dir: &Path) -> Option<String>;
    /// Number of changed/untracked files. Failures count as zero.
    fn changed_count(&self, dir: &Path) -> usize;
}

/// Production [`GitClient`] that shells out to `git -C <dir> …`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemGit;

impl GitClient for SystemGit {
    fn is_work_tree(&self, dir: &Path) -> bool {
        run_git(dir, &["rev-parse", "--is-inside-work-tree"])
            .is_some_and(|out| out.trim() == "true")
    }

    fn current_branch(&self, dir: &Path) -> Option<String> {
        // Exits 0 with empty output on a detached HEAD
        let branch = run_git(dir, &["branch", "--show-current"])?;
        let branch = branch.trim();
        if branch.is_empty() {
            None
        } else {
            Some(branch.to_string())
        }
    }

    fn short_head(&self, dir: &Path) -> Option<String> {
        let head = run_git(dir, &["rev-parse", "--short", "HEAD"])?;
        let head = head.trim();
        if head.is_empty() {
            None
        } else {
            Some(head.to_string())
        }
    }

    fn changed_count(&self, dir: &Path) -> usize {
        run_git(dir, &["status", "--porcelain"])
            .map(|out| out.lines().filter(|line| !line.trim().is_empty()).count())
            .unwrap_or(0)
    }
}

/// Run a git command and return its stdout, or `None` on any failure —
/// spawn error, non-zero exit, or exceeding [`GIT_TIMEOUT`].
fn run_git(dir: &Path, args: &[&str]) -> Option<String> {
    let mut child = Command::new("git")
        .arg("-C")
        .arg(dir)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .ok()?;

    // Drain stdout on a separate thread so a chatty command can't deadlock
    // against a full pipe while we poll for exit.
    let mut stdout = child.stdout.take()?;
    let reader = std::thread::spawn(move || {
        let mut buf = String::new();
        let _ = stdout.read_to_string(&mut buf);
        buf
    });

    let deadline = Instant::now() + GIT_TIMEOUT;
    loop {
        match child.try_wait() {
            Ok(Some(status)) => {
                let output = reader.join().unwrap_or_default();
                return status.success().then_some(output);
            }
            Ok(None) => {
                if Instant::now() >= deadline {
                    let _ = child.kill();
                    let _ = child.wait();
                    // Do NOT join the drain thread: a descendant of the
                    // killed git (a credential helper, say) may have
                    // inherited the pipe's write end and keep it open, so
                    // read_to_string can stay blocked long after the kill.
                    // Leave the thread detached; it dies with the process.
                    drop(reader);
                    return None;
                }
                std::thread::sleep(Duration::from_millis(10));
            }
            Err(_) => {
                let _ = child.kill();
                drop(reader);
                return None;
            }
        }
    }
}

/// Git status for `workspace`, served from the cache when fresh.
///
/// Returns `""` when there is nothing to show — empty path, nonexistent
/// path, or not a working tree. The non-empty form is `" <branch>"` or
/// `" <branch> ±<count>"`; the leading space is consumed by the composer's
/// separator. Only successful lookups are cached: a path that isn't a repo
/// is re-checked on every miss so a fresh `git init` shows up promptly.
pub fn status_summary(git: &impl GitClient, store: &StateStore, workspace: &str) -> String {
    if workspace.is_empty() || !Path::new(workspace).exists() {
        return String::new();
    }

    if let Some(entry) = store.cache_entry(workspace)
        && now_ms().saturating_sub(entry.time) < CACHE_TTL_MS
    {
        return entry.status;
    }

    let dir = Path::new(workspace);
    if !git.is_work_tree(dir) {
        return String::new();
    }

    let branch = git
        .current_branch(dir)
        .or_else(|| git.short_head(dir))
        .unwrap_or_else(|| DETACHED_PLACEHOLDER.to_string());

    let changed = git.changed_count(dir);
    let status = if changed > 0 {
        format!(" {branch} ±{changed}")
    } else {
        format!(" {branch}")
    };

    store.record_status(workspace, &status, now_ms());
    status
}
