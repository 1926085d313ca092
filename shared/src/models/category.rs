//! Category Model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Product category entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: Option<String>,
    pub name_pt: String,
    pub name_en: String,
    pub description_pt: Option<String>,
    pub description_en: Option<String>,
    pub image_url: Option<String>,
    pub created_at: Option<String>,
}

/// Create category payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CategoryCreate {
    #[validate(length(min = 1, message = "name_pt must not be empty"))]
    pub name_pt: String,
    #[validate(length(min = 1, message = "name_en must not be empty"))]
    pub name_en: String,
    pub description_pt: Option<String>,
    pub description_en: Option<String>,
    pub image_url: Option<String>,
}

/// Update category payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryUpdate {
    pub name_pt: Option<String>,
    pub name_en: Option<String>,
    pub description_pt: Option<String>,
    pub description_en: Option<String>,
    pub image_url: Option<String>,
}
