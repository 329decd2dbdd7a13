//! Session manager
//!
//! The only client state that survives a reload: the bearer token and
//! the logged-in user, stored as one JSON file. Orders and drafts stay
//! in memory.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use thiserror::Error;

use shared::client::{LoginResponse, UserInfo};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Persisted session
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Session {
    pub token: String,
    pub user: UserInfo,
    pub logged_in_at: u64,
    /// Unix seconds from the JWT `exp` claim, when parsable
    pub expires_at: Option<u64>,
}

impl Session {
    /// Extract the expiry from a JWT without verifying it; the backend
    /// remains the authority, this only drives local cleanup.
    pub fn parse_jwt_exp(token: &str) -> Option<u64> {
        let parts: Vec<&str> = token.split('.').collect();
        if parts.len() != 3 {
            return None;
        }

        use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
        let payload_bytes = URL_SAFE_NO_PAD.decode(parts[1]).ok()?;
        let payload: serde_json::Value = serde_json::from_slice(&payload_bytes).ok()?;
        payload.get("exp")?.as_u64()
    }

    fn is_expired(&self, now: u64) -> bool {
        self.expires_at.is_some_and(|exp| now > exp)
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Owns the current session and its file on disk
pub struct SessionManager {
    file_path: PathBuf,
    current: Option<Session>,
}

impl SessionManager {
    /// Create a manager over `{dir}/session.json` without touching disk
    pub fn new(dir: &Path) -> Self {
        Self {
            file_path: dir.join("session.json"),
            current: None,
        }
    }

    /// Load the persisted session if present. An expired session is
    /// discarded and its file removed.
    pub fn load(dir: &Path) -> Result<Self, SessionError> {
        let mut manager = Self::new(dir);
        if !manager.file_path.exists() {
            return Ok(manager);
        }

        let content = std::fs::read_to_string(&manager.file_path)?;
        let session: Session = serde_json::from_str(&content)?;

        if session.is_expired(unix_now()) {
            let _ = std::fs::remove_file(&manager.file_path);
            tracing::info!(username = %session.user.username, "session expirée, supprimée");
            return Ok(manager);
        }

        tracing::info!(username = %session.user.username, "session restaurée");
        manager.current = Some(session);
        Ok(manager)
    }

    /// Install a fresh session after a successful login and persist it
    pub fn open(&mut self, login: LoginResponse) -> Result<&Session, SessionError> {
        let session = Session {
            expires_at: Session::parse_jwt_exp(&login.token),
            token: login.token,
            user: login.user,
            logged_in_at: unix_now(),
        };
        self.persist(&session)?;
        Ok(self.current.insert(session))
    }

    fn persist(&self, session: &Session) -> Result<(), SessionError> {
        if let Some(parent) = self.file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(session)?;
        std::fs::write(&self.file_path, content)?;
        Ok(())
    }

    /// Drop the session and its file
    pub fn clear(&mut self) -> Result<(), SessionError> {
        self.current = None;
        if self.file_path.exists() {
            std::fs::remove_file(&self.file_path)?;
        }
        Ok(())
    }

    pub fn current(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.current.as_ref().map(|s| s.token.as_str())
    }

    pub fn user(&self) -> Option<&UserInfo> {
        self.current.as_ref().map(|s| &s.user)
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }
}
