//! Contact Message Model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Contact form message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactMessage {
    pub id: Option<String>,
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
    pub read: bool,
    pub created_at: Option<String>,
}

/// Submit contact message payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ContactMessageCreate {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(email(message = "invalid email address"))]
    pub email: String,
    pub subject: Option<String>,
    #[validate(length(min = 1, message = "message must not be empty"))]
    pub message: String,
}
