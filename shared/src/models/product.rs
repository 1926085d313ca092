//! Product Model
//!
//! Products are bilingual (Portuguese/English) and carry their full pricing
//! surface inline: base price, size adjustments, and per-option surcharges.
//! Products are never hard-deleted; `active = false` retires them while
//! historical orders keep referencing them.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Available color choice for a product
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ColorOption {
    pub name: String,
    pub hex_code: String,
    pub image_url: Option<String>,
}

/// Available size choice with its price adjustment
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SizeOption {
    pub name: String,
    /// Added to the base price when this size is selected
    pub price_adjustment: f64,
    pub image_url: Option<String>,
}

/// Input type of a customization option
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CustomizationType {
    Text,
    Number,
}

/// Per-product customization field (e.g. engraved name)
///
/// A non-blank submitted value adds `price_modifier` to the unit price.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CustomizationOption {
    pub name_pt: String,
    pub name_en: String,
    #[serde(rename = "type")]
    pub kind: CustomizationType,
    pub required: bool,
    pub price_modifier: f64,
    pub max_length: Option<u32>,
}

/// Product entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: Option<String>,
    pub name_pt: String,
    pub name_en: String,
    pub description_pt: Option<String>,
    pub description_en: Option<String>,
    pub base_price: f64,
    /// Category reference (`"category:id"` string)
    pub category_id: Option<String>,
    pub colors: Vec<ColorOption>,
    pub sizes: Vec<SizeOption>,
    pub customization_options: Vec<CustomizationOption>,
    pub images: Vec<String>,
    pub featured: bool,
    pub active: bool,
    pub created_at: Option<String>,
}

/// Create product payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ProductCreate {
    #[validate(length(min = 1, message = "name_pt must not be empty"))]
    pub name_pt: String,
    #[validate(length(min = 1, message = "name_en must not be empty"))]
    pub name_en: String,
    pub description_pt: Option<String>,
    pub description_en: Option<String>,
    #[validate(range(min = 0.0, message = "base_price must not be negative"))]
    pub base_price: f64,
    pub category_id: Option<String>,
    #[serde(default)]
    pub colors: Vec<ColorOption>,
    #[serde(default)]
    pub sizes: Vec<SizeOption>,
    #[serde(default)]
    pub customization_options: Vec<CustomizationOption>,
    #[serde(default)]
    pub images: Vec<String>,
    pub featured: Option<bool>,
}

/// Update product payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub name_pt: Option<String>,
    pub name_en: Option<String>,
    pub description_pt: Option<String>,
    pub description_en: Option<String>,
    pub base_price: Option<f64>,
    pub category_id: Option<String>,
    pub colors: Option<Vec<ColorOption>>,
    pub sizes: Option<Vec<SizeOption>>,
    pub customization_options: Option<Vec<CustomizationOption>>,
    pub images: Option<Vec<String>>,
    pub featured: Option<bool>,
    pub active: Option<bool>,
}
