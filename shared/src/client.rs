//! Auth DTOs shared between the REST client and the dashboards

use serde::{Deserialize, Serialize};

/// Staff roles
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Serveur,
    Caissier,
    Cuisinier,
}

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login response data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserInfo,
}

/// Logged-in user information
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    /// Backend id; older records use `_id`
    #[serde(default, alias = "_id")]
    pub id: String,
    pub username: String,
    /// Display name shown on dashboards and receipts
    #[serde(default)]
    pub name: String,
    pub role: Role,
}
