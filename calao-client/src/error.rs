//! Client error types

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Authentication required
    #[error("Authentication required")]
    Unauthorized,

    /// Permission denied
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// State conflict (e.g. order already paid)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// User-facing message: the backend message when one was extracted,
    /// otherwise a localized fallback.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Unauthorized => {
                "Session expirée, veuillez vous reconnecter".to_string()
            }
            ClientError::Http(_) => "Erreur réseau, vérifiez la connexion".to_string(),
            ClientError::Forbidden(m)
            | ClientError::NotFound(m)
            | ClientError::Validation(m)
            | ClientError::Conflict(m)
            | ClientError::Internal(m) => {
                if m.is_empty() {
                    "Une erreur est survenue".to_string()
                } else {
                    m.clone()
                }
            }
            ClientError::InvalidResponse(_) | ClientError::Serialization(_) => {
                "Une erreur est survenue".to_string()
            }
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
