//! Account Models
//!
//! Public views of customer and admin accounts plus auth payloads.
//! Password hashes never leave the persistence layer.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Customer account (public view)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: Option<String>,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub created_at: Option<String>,
}

/// Admin account (public view)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminProfile {
    pub id: Option<String>,
    pub username: String,
    pub created_at: Option<String>,
}

/// Customer registration payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CustomerRegisterRequest {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(email(message = "invalid email address"))]
    pub email: String,
    #[validate(length(min = 8, message = "password must be at least 8 characters"))]
    pub password: String,
    pub phone: Option<String>,
}

/// Customer login payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerLoginRequest {
    pub email: String,
    pub password: String,
}

/// Customer profile update payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerUpdateRequest {
    pub name: Option<String>,
    pub phone: Option<String>,
}

/// Admin registration payload (first admin only)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AdminRegisterRequest {
    #[validate(length(min = 3, message = "username must be at least 3 characters"))]
    pub username: String,
    #[validate(length(min = 8, message = "password must be at least 8 characters"))]
    pub password: String,
}

/// Admin login payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminLoginRequest {
    pub username: String,
    pub password: String,
}

/// Issued token plus the authenticated principal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub role: String,
    pub name: String,
}
