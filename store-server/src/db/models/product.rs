//! Product persistence model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use super::serde_helpers;
use shared::models::{ColorOption, CustomizationOption, Product, SizeOption};

/// Product row as stored in SurrealDB
///
/// Option lists (colors, sizes, customizations) are embedded documents, same
/// shape as the wire model. The category link is kept as a plain "table:id"
/// string since products survive category edits independently.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRecord {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    pub name_pt: String,
    pub name_en: String,
    pub description_pt: Option<String>,
    pub description_en: Option<String>,
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
    #[serde(default, deserialize_with = "serde_helpers::bool_false")]
    pub featured: bool,
    #[serde(default = "default_true", deserialize_with = "serde_helpers::bool_true")]
    pub active: bool,
    pub created_at: Option<String>,
}

fn default_true() -> bool {
    true
}

impl From<ProductRecord> for Product {
    fn from(record: ProductRecord) -> Self {
        Self {
            id: record.id.map(|id| id.to_string()),
            name_pt: record.name_pt,
            name_en: record.name_en,
            description_pt: record.description_pt,
            description_en: record.description_en,
            base_price: record.base_price,
            category_id: record.category_id,
            colors: record.colors,
            sizes: record.sizes,
            customization_options: record.customization_options,
            images: record.images,
            featured: record.featured,
            active: record.active,
            created_at: record.created_at,
        }
    }
}
