// Rust guideline compliant 2026-10-19

//! Board directory discovery and path management utilities.

use crate::board::IssueBoard;
use crate::error::{AppError, Result};
use board_core::{Config, JsonlIssueStore, LocalUserStore};
use std::path::{Path, PathBuf};

/// Name of the directory holding board data.
pub const BOARD_DIR: &str = ".board";

/// Path metadata for an issue board workspace.
#[derive(Debug, Clone)]
pub struct RepoContext {
    root: PathBuf,
    board_dir: PathBuf,
    issues_path: PathBuf,
    config_path: PathBuf,
}

impl RepoContext {
    fn at(root: PathBuf) -> Self {
        let board_dir = root.join(BOARD_DIR);
        Self {
            root,
            issues_path: board_dir.join("issues.jsonl"),
            config_path: board_dir.join("config.toml"),
            board_dir,
        }
    }

    /// Discovers a board starting from an optional root.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The root cannot be resolved
    /// - The `.board` directory is missing
    pub fn discover(repo_root: Option<&Path>) -> Result<Self> {
        let root = match repo_root {
            Some(root) => root.to_path_buf(),
            None => std::env::current_dir()?,
        };
        let context = Self::at(root);
        if !context.board_dir.exists() {
            return Err(AppError::RepoNotInitialized {
                path: context.board_dir,
            });
        }
        Ok(context)
    }

    /// Creates the `.board` directory, an empty issues file and a default
    /// config, keeping whatever already exists.
    ///
    /// # Returns
    ///
    /// The context and whether anything new was written.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or files cannot be created.
    pub fn init(repo_root: Option<&Path>) -> Result<(Self, bool)> {
        let root = match repo_root {
            Some(root) => root.to_path_buf(),
            None => std::env::current_dir()?,
        };
        let context = Self::at(root);
        let mut created = false;

        if !context.board_dir.exists() {
            std::fs::create_dir_all(&context.board_dir)?;
            created = true;
        }

        if !context.issues_path.exists() {
            std::fs::File::create(&context.issues_path)?;
            created = true;
        }

        if !context.config_path.exists() {
            Config::default().save(&context.board_dir)?;
            created = true;
        }

        Ok((context, created))
    }

    /// Returns the workspace root path.
    #[must_use]
    pub fn root(&self) -> &Path {
        self.root.as_path()
    }

    /// Returns the `.board` directory path.
    #[must_use]
    pub fn board_dir(&self) -> &Path {
        self.board_dir.as_path()
    }

    /// Returns the issues JSONL path.
    #[must_use]
    pub fn issues_path(&self) -> &Path {
        self.issues_path.as_path()
    }

    /// Returns the config TOML path.
    #[must_use]
    pub fn config_path(&self) -> &Path {
        self.config_path.as_path()
    }

    /// Opens the issue store.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be initialized.
    pub fn open_issue_store(&self) -> Result<JsonlIssueStore> {
        Ok(JsonlIssueStore::new(self.issues_path.clone())?)
    }

    /// Opens the user store.
    #[must_use]
    pub fn open_user_store(&self) -> LocalUserStore {
        LocalUserStore::new(&self.board_dir)
    }

    /// Loads board configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded.
    pub fn load_config(&self) -> Result<Config> {
        Ok(Config::load(self.board_dir())?)
    }

    /// Opens the board service using the configured duplicate window.
    ///
    /// # Errors
    ///
    /// Returns an error if the config or store cannot be loaded.
    pub fn open_board(&self) -> Result<IssueBoard<JsonlIssueStore>> {
        let config = self.load_config()?;
        Ok(IssueBoard::with_window(
            self.open_issue_store()?,
            config.duplicate_window,
        ))
    }
}
