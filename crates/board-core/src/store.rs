// Rust guideline compliant 2026-10-19

//! Issue store abstraction and its implementations.
//!
//! [`IssueStore`] is the boundary between the board logic and wherever
//! issues live. Two implementations ship with the crate:
//!
//! - [`JsonlIssueStore`]: one JSON document per line in a local file, with
//!   append-only creation and file locking around writes
//! - [`InMemoryIssueStore`]: a vector behind a mutex, for tests and
//!   short-lived sessions

use crate::identity::generate_id;
use crate::{Error, Issue, IssueId, IssueInput, Result, Status};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Storage boundary for issues.
///
/// Every call is a single request/response operation. Implementations do
/// not retry and do not coordinate overlapping updates.
pub trait IssueStore {
    /// Lists issues newest first.
    ///
    /// Issues are ordered by `created_at` descending; issues created in the
    /// same second keep reverse insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn list_recent(&self, limit: Option<usize>) -> Result<Vec<Issue>>;

    /// Loads a single issue by full ID.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no issue has this ID, or an error if the store
    /// cannot be read.
    fn get(&self, id: &str) -> Result<Issue>;

    /// Lists every stored ID in insertion order.
    ///
    /// Includes records whose status or other fields no longer form a valid
    /// [`Issue`], so they can still be addressed.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn ids(&self) -> Result<Vec<IssueId>>;

    /// Reads the raw status of an issue.
    ///
    /// Returns `Ok(None)` when the stored status label is not a known
    /// status.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no issue has this ID.
    fn stored_status(&self, id: &str) -> Result<Option<Status>>;

    /// Creates an issue and returns its new ID.
    ///
    /// The issue always starts `Open`; the store assigns `id` and
    /// `created_at`.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is invalid or the store cannot be
    /// written.
    fn create(&self, input: IssueInput) -> Result<IssueId>;

    /// Overwrites the status of an issue.
    ///
    /// No transition check happens here; callers validate first.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no issue has this ID, or an error if the store
    /// cannot be written.
    fn update_status(&self, id: &str, next: Status) -> Result<()>;
}

/// Returns the current Unix timestamp in seconds.
pub(crate) fn unix_now() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_else(|_| std::time::Duration::from_secs(0))
        .as_secs() as i64
}

/// Generates an ID that does not collide with any in `taken`.
fn unique_id(input: &IssueInput, created_at: i64, taken: &HashSet<String>) -> IssueId {
    let mut nonce = 0u32;
    loop {
        let id = generate_id(&input.title, &input.created_by, created_at, nonce);
        if !taken.contains(&id) {
            return id;
        }
        nonce = nonce.saturating_add(1);
    }
}

/// Runs `f` while holding an exclusive fs2 lock on `lock_path`.
///
/// The lock is not waited for; a held lock fails with `WouldBlock`.
pub(crate) fn with_file_lock<F, T>(lock_path: &Path, f: F) -> Result<T>
where
    F: FnOnce() -> Result<T>,
{
    use fs2::FileExt;
    use std::fs::OpenOptions;

    let lock_file = OpenOptions::new()
        .create(true)
        .truncate(false)
        .write(true)
        .open(lock_path)?;

    lock_file.try_lock_exclusive().map_err(|e| {
        Error::Io(std::io::Error::new(
            std::io::ErrorKind::WouldBlock,
            format!("Failed to acquire lock: {}", e),
        ))
    })?;

    let result = f();
    let _ = lock_file.unlock();
    result
}

/// Orders issues in file/insertion order into newest-first order.
fn newest_first(mut issues: Vec<Issue>, limit: Option<usize>) -> Vec<Issue> {
    issues.reverse();
    issues.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    if let Some(limit) = limit {
        issues.truncate(limit);
    }
    issues
}

/// Minimal view of a stored line, readable even when the rest of the
/// document is not a valid [`Issue`].
#[derive(Debug, Deserialize)]
struct StatusProbe {
    id: String,
    #[serde(default)]
    status: Option<String>,
}

/// JSONL-backed issue store.
///
/// Each line of the file holds one issue document. Creation appends a line;
/// status updates rewrite the file through a temp file and an atomic rename.
/// Both take an exclusive lock on a sibling `.lock` file.
#[derive(Debug, Clone)]
pub struct JsonlIssueStore {
    /// Path to the JSONL file.
    path: PathBuf,
}

impl JsonlIssueStore {
    /// Creates a store over the given JSONL file.
    ///
    /// The file does not need to exist yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is empty.
    pub fn new(path: PathBuf) -> Result<Self> {
        if path.as_os_str().is_empty() {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Path cannot be empty",
            )));
        }
        Ok(Self { path })
    }

    /// Returns the JSONL file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads every readable issue in file order.
    ///
    /// Lines that do not deserialize into a valid issue are skipped with a
    /// warning.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read.
    pub fn load_all(&self) -> Result<Vec<Issue>> {
        let mut issues = Vec::new();
        for line in self.read_lines()? {
            match serde_json::from_str::<Issue>(&line) {
                Ok(issue) => match issue.validate() {
                    Ok(()) => issues.push(issue),
                    Err(e) => tracing::warn!(error = %e, "skipping invalid issue record"),
                },
                Err(e) => tracing::warn!(error = %e, "skipping malformed JSON line"),
            }
        }
        Ok(issues)
    }

    fn read_lines(&self) -> Result<Vec<String>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = std::fs::read_to_string(&self.path)?;
        Ok(content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(str::to_string)
            .collect())
    }

    fn probe(&self, id: &str) -> Result<Option<StatusProbe>> {
        for line in self.read_lines()? {
            if let Ok(probe) = serde_json::from_str::<StatusProbe>(&line) {
                if probe.id == id {
                    return Ok(Some(probe));
                }
            }
        }
        Ok(None)
    }

    fn probed_ids(&self) -> Result<Vec<IssueId>> {
        Ok(self
            .read_lines()?
            .iter()
            .filter_map(|line| serde_json::from_str::<StatusProbe>(line).ok())
            .map(|probe| probe.id)
            .collect())
    }

    /// Executes a closure with an exclusive lock on the store file.
    ///
    /// # Errors
    ///
    /// Returns an error if the lock is held by another process or the
    /// closure fails.
    pub fn with_lock<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce() -> Result<T>,
    {
        with_file_lock(&self.path.with_extension("lock"), f)
    }

    fn write_lines_atomic(&self, lines: &[String]) -> Result<()> {
        use std::fs::File;
        use std::io::Write;

        let temp_path = self.path.with_extension("jsonl.tmp");
        {
            let mut file = File::create(&temp_path)?;
            for line in lines {
                file.write_all(line.as_bytes())?;
                file.write_all(b"\n")?;
            }
            file.sync_all()?;
        }
        std::fs::rename(&temp_path, &self.path)?;
        Ok(())
    }
}

impl IssueStore for JsonlIssueStore {
    fn list_recent(&self, limit: Option<usize>) -> Result<Vec<Issue>> {
        Ok(newest_first(self.load_all()?, limit))
    }

    fn get(&self, id: &str) -> Result<Issue> {
        self.load_all()?
            .into_iter()
            .find(|issue| issue.id == id)
            .ok_or_else(|| Error::NotFound(id.to_string()))
    }

    fn ids(&self) -> Result<Vec<IssueId>> {
        self.probed_ids()
    }

    fn stored_status(&self, id: &str) -> Result<Option<Status>> {
        let probe = self
            .probe(id)?
            .ok_or_else(|| Error::NotFound(id.to_string()))?;
        Ok(probe.status.as_deref().and_then(Status::from_label))
    }

    fn create(&self, input: IssueInput) -> Result<IssueId> {
        use std::fs::OpenOptions;
        use std::io::Write;

        let input = input.normalized();
        input.validate()?;

        self.with_lock(|| {
            let created_at = unix_now();
            let taken: HashSet<String> = self.probed_ids()?.into_iter().collect();
            let id = unique_id(&input, created_at, &taken);
            let issue = Issue::from_input(id.clone(), input, created_at);
            let json = serde_json::to_string(&issue)?;

            let mut file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.path)?;
            file.write_all(json.as_bytes())?;
            file.write_all(b"\n")?;
            file.sync_all()?;

            tracing::info!(id = %id, "created issue");
            Ok(id)
        })
    }

    fn update_status(&self, id: &str, next: Status) -> Result<()> {
        self.with_lock(|| {
            let mut lines = self.read_lines()?;
            let mut found = false;

            for line in lines.iter_mut() {
                let Ok(mut document) = serde_json::from_str::<serde_json::Value>(line) else {
                    continue;
                };
                if document.get("id").and_then(serde_json::Value::as_str) != Some(id) {
                    continue;
                }
                document["status"] = serde_json::Value::String(next.label().to_string());
                *line = serde_json::to_string(&document)?;
                found = true;
                break;
            }

            if !found {
                return Err(Error::NotFound(id.to_string()));
            }

            self.write_lines_atomic(&lines)?;
            tracing::info!(id = %id, status = %next, "updated issue status");
            Ok(())
        })
    }
}

/// In-memory issue store.
///
/// Issues are kept in insertion order behind a mutex.
#[derive(Debug, Default)]
pub struct InMemoryIssueStore {
    issues: Mutex<Vec<Issue>>,
}

impl InMemoryIssueStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with issues, oldest first.
    pub fn with_issues(issues: Vec<Issue>) -> Self {
        Self {
            issues: Mutex::new(issues),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Vec<Issue>>> {
        self.issues.lock().map_err(|_| {
            Error::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                "issue store lock poisoned",
            ))
        })
    }
}

impl IssueStore for InMemoryIssueStore {
    fn list_recent(&self, limit: Option<usize>) -> Result<Vec<Issue>> {
        Ok(newest_first(self.lock()?.clone(), limit))
    }

    fn get(&self, id: &str) -> Result<Issue> {
        self.lock()?
            .iter()
            .find(|issue| issue.id == id)
            .cloned()
            .ok_or_else(|| Error::NotFound(id.to_string()))
    }

    fn ids(&self) -> Result<Vec<IssueId>> {
        Ok(self.lock()?.iter().map(|issue| issue.id.clone()).collect())
    }

    fn stored_status(&self, id: &str) -> Result<Option<Status>> {
        Ok(Some(self.get(id)?.status))
    }

    fn create(&self, input: IssueInput) -> Result<IssueId> {
        let input = input.normalized();
        input.validate()?;

        let mut issues = self.lock()?;
        let created_at = unix_now();
        let taken: HashSet<String> = issues.iter().map(|issue| issue.id.clone()).collect();
        let id = unique_id(&input, created_at, &taken);
        issues.push(Issue::from_input(id.clone(), input, created_at));
        Ok(id)
    }

    fn update_status(&self, id: &str, next: Status) -> Result<()> {
        let mut issues = self.lock()?;
        let issue = issues
            .iter_mut()
            .find(|issue| issue.id == id)
            .ok_or_else(|| Error::NotFound(id.to_string()))?;
        issue.status = next;
        Ok(())
    }
}
