// Rust guideline compliant 2026-10-19

//! User accounts and the current session.
//!
//! [`UserStore`] stands in for an external identity provider. The bundled
//! [`LocalUserStore`] keeps accounts in a JSONL file with salted SHA-256
//! password digests and remembers the signed-in user in a session file.

use crate::store::with_file_lock;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};

/// Minimum accepted password length.
pub const MIN_PASSWORD_LEN: usize = 6;

/// A signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Account email, lower-cased.
    pub email: String,
}

/// Account and session management.
pub trait UserStore {
    /// Creates an account and signs it in.
    ///
    /// # Errors
    ///
    /// Returns a validation error for malformed credentials and an auth
    /// error if the account already exists.
    fn sign_up(&self, email: &str, password: &str) -> Result<User>;

    /// Signs in an existing account.
    ///
    /// # Errors
    ///
    /// Returns a validation error for malformed credentials and an auth
    /// error for unknown accounts or wrong passwords.
    fn sign_in(&self, email: &str, password: &str) -> Result<User>;

    /// Ends the current session. Signing out twice is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be cleared.
    fn sign_out(&self) -> Result<()>;

    /// Returns the signed-in user, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be read.
    fn current_user(&self) -> Result<Option<User>>;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Account {
    email: String,
    salt: String,
    password_digest: String,
    created_at: i64,
}

/// Normalizes and checks credentials before any store access.
///
/// # Errors
///
/// Returns a validation error if the email is missing or malformed, or the
/// password is shorter than [`MIN_PASSWORD_LEN`].
pub fn validate_credentials(email: &str, password: &str) -> Result<String> {
    let email = email.trim().to_lowercase();
    if email.is_empty() || password.is_empty() {
        return Err(Error::Validation(
            "Email and password are required".to_string(),
        ));
    }

    let well_formed = email
        .split_once('@')
        .map(|(local, domain)| !local.is_empty() && !domain.is_empty() && !domain.contains('@'))
        .unwrap_or(false);
    if !well_formed {
        return Err(Error::Validation(format!("Invalid email address: {}", email)));
    }

    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(Error::Validation(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LEN
        )));
    }

    Ok(email)
}

fn digest(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(b":");
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}

fn new_salt(email: &str) -> String {
    use std::time::{SystemTime, UNIX_EPOCH};

    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    let mut hasher = Sha256::new();
    hasher.update(email.as_bytes());
    hasher.update(nanos.to_le_bytes());
    hasher.update(std::process::id().to_le_bytes());
    let hex = format!("{:x}", hasher.finalize());
    hex[..16].to_string()
}

/// File-backed user store.
///
/// Accounts live in `users.jsonl`, the session in `session.json`, both in
/// the given directory.
#[derive(Debug, Clone)]
pub struct LocalUserStore {
    accounts_path: PathBuf,
    lock_path: PathBuf,
    session_path: PathBuf,
}

impl LocalUserStore {
    /// Creates a user store rooted at `dir`.
    pub fn new(dir: &Path) -> Self {
        Self {
            accounts_path: dir.join("users.jsonl"),
            lock_path: dir.join("users.lock"),
            session_path: dir.join("session.json"),
        }
    }

    fn load_accounts(&self) -> Result<Vec<Account>> {
        if !self.accounts_path.exists() {
            return Ok(Vec::new());
        }
        let content = std::fs::read_to_string(&self.accounts_path)?;
        let mut accounts = Vec::new();
        for line in content.lines().filter(|line| !line.trim().is_empty()) {
            match serde_json::from_str::<Account>(line) {
                Ok(account) => accounts.push(account),
                Err(e) => tracing::warn!(error = %e, "skipping malformed account record"),
            }
        }
        Ok(accounts)
    }

    fn append_account(&self, account: &Account) -> Result<()> {
        use std::fs::OpenOptions;
        use std::io::Write;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.accounts_path)?;
        file.write_all(serde_json::to_string(account)?.as_bytes())?;
        file.write_all(b"\n")?;
        Ok(())
    }

    fn start_session(&self, email: &str) -> Result<User> {
        let user = User {
            email: email.to_string(),
        };
        std::fs::write(&self.session_path, serde_json::to_string_pretty(&user)?)?;
        tracing::info!(email = %user.email, "session started");
        Ok(user)
    }
}

impl UserStore for LocalUserStore {
    fn sign_up(&self, email: &str, password: &str) -> Result<User> {
        let email = validate_credentials(email, password)?;

        // Check and append under one lock so concurrent sign-ups cannot both
        // create the same account.
        with_file_lock(&self.lock_path, || {
            if self
                .load_accounts()?
                .iter()
                .any(|account| account.email == email)
            {
                return Err(Error::Auth(format!("Account already exists: {}", email)));
            }

            let salt = new_salt(&email);
            let account = Account {
                password_digest: digest(&salt, password),
                salt,
                email: email.clone(),
                created_at: crate::store::unix_now(),
            };
            self.append_account(&account)
        })?;
        self.start_session(&email)
    }

    fn sign_in(&self, email: &str, password: &str) -> Result<User> {
        let email = validate_credentials(email, password)?;

        let account = self
            .load_accounts()?
            .into_iter()
            .find(|account| account.email == email)
            .ok_or_else(|| Error::Auth("Invalid email or password".to_string()))?;

        if digest(&account.salt, password) != account.password_digest {
            return Err(Error::Auth("Invalid email or password".to_string()));
        }

        self.start_session(&email)
    }

    fn sign_out(&self) -> Result<()> {
        match std::fs::remove_file(&self.session_path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn current_user(&self) -> Result<Option<User>> {
        if !self.session_path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&self.session_path)?;
        Ok(Some(serde_json::from_str(&content)?))
    }
}
