//! Price calculation
//!
//! Pure functions over a product's pricing surface. The unit price is the
//! base price plus the selected size adjustment plus the modifier of every
//! customization with a non-blank submitted value; blank values price as if
//! the field was left empty.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::db::models::ProductRecord;
use crate::pricing::money;
use shared::error::{AppError, ErrorCode};
use shared::models::{CustomizationOption, OrderItemRequest};

/// Pricing failure for a single line item
#[derive(Debug, Error, PartialEq)]
pub enum PricingError {
    #[error("quantity must be at least 1, got {quantity}")]
    InvalidQuantity { quantity: i64 },

    #[error("size '{size}' is not offered for this product")]
    InvalidSize { size: String },

    #[error("color '{color}' is not offered for this product")]
    InvalidColor { color: String },

    #[error("unknown customization field '{field}'")]
    UnknownCustomization { field: String },

    #[error("customization '{field}' exceeds the maximum length of {max_length}")]
    ValueTooLong { field: String, max_length: u32 },

    #[error("customization '{field}' is required")]
    RequiredOptionMissing { field: String },
}

impl PricingError {
    /// Attach the offending product so API clients can point at the line
    pub fn into_app_error(self, product_id: &str) -> AppError {
        let code = match &self {
            Self::InvalidQuantity { .. } => ErrorCode::InvalidQuantity,
            Self::InvalidSize { .. } => ErrorCode::InvalidSize,
            Self::InvalidColor { .. } => ErrorCode::InvalidColor,
            Self::UnknownCustomization { .. } => ErrorCode::UnknownCustomization,
            Self::ValueTooLong { .. } => ErrorCode::ValidationFailed,
            Self::RequiredOptionMissing { .. } => ErrorCode::RequiredOptionMissing,
        };
        AppError::with_message(code, self.to_string()).with_detail("product_id", product_id)
    }
}

/// Server-side price of one line item
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricedItem {
    pub unit_price: f64,
    pub total_price: f64,
}

/// Compute the unit and line price for an item request against its product
pub fn price_item(
    product: &ProductRecord,
    request: &OrderItemRequest,
) -> Result<PricedItem, PricingError> {
    if request.quantity < 1 {
        return Err(PricingError::InvalidQuantity {
            quantity: request.quantity,
        });
    }

    validate_selections(product, request)?;

    let mut unit = money::to_decimal(product.base_price);

    if let Some(size_name) = &request.selected_size {
        let size = product
            .sizes
            .iter()
            .find(|s| &s.name == size_name)
            .ok_or_else(|| PricingError::InvalidSize {
                size: size_name.clone(),
            })?;
        unit += money::to_decimal(size.price_adjustment);
    }

    unit += customization_surcharge(&product.customization_options, &request.customizations)?;

    let unit = money::round(unit);
    let total = money::round(unit * Decimal::from(request.quantity));

    Ok(PricedItem {
        unit_price: money::to_f64(unit),
        total_price: money::to_f64(total),
    })
}

/// Check color choice and customization constraints that carry no price
fn validate_selections(
    product: &ProductRecord,
    request: &OrderItemRequest,
) -> Result<(), PricingError> {
    if let Some(color_name) = &request.selected_color {
        let known = product.colors.iter().any(|c| &c.name == color_name);
        if !known {
            return Err(PricingError::InvalidColor {
                color: color_name.clone(),
            });
        }
    }

    for option in &product.customization_options {
        let value = submitted_value(&request.customizations, option);
        if option.required && value.is_none_or(|v| v.trim().is_empty()) {
            return Err(PricingError::RequiredOptionMissing {
                field: option.name_en.clone(),
            });
        }
        if let (Some(value), Some(max_length)) = (value, option.max_length) {
            if value.chars().count() as u32 > max_length {
                return Err(PricingError::ValueTooLong {
                    field: option.name_en.clone(),
                    max_length,
                });
            }
        }
    }

    Ok(())
}

/// Sum the modifiers of customizations with a non-blank submitted value
fn customization_surcharge(
    options: &[CustomizationOption],
    submitted: &BTreeMap<String, String>,
) -> Result<Decimal, PricingError> {
    let mut surcharge = Decimal::ZERO;

    for (field, value) in submitted {
        let option = options
            .iter()
            .find(|o| &o.name_en == field || &o.name_pt == field)
            .ok_or_else(|| PricingError::UnknownCustomization {
                field: field.clone(),
            })?;

        if !value.trim().is_empty() {
            surcharge += money::to_decimal(option.price_modifier);
        }
    }

    Ok(surcharge)
}

/// Submitted value for an option, accepted under either language name
fn submitted_value<'a>(
    submitted: &'a BTreeMap<String, String>,
    option: &CustomizationOption,
) -> Option<&'a String> {
    submitted
        .get(&option.name_en)
        .or_else(|| submitted.get(&option.name_pt))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{ColorOption, CustomizationType, SizeOption};

    fn vase() -> ProductRecord {
        ProductRecord {
            id: None,
            name_pt: "Vaso".to_string(),
            name_en: "Vase".to_string(),
            description_pt: None,
            description_en: None,
            base_price: 25.99,
            category_id: None,
            colors: vec![ColorOption {
                name: "white".to_string(),
                hex_code: "#FFFFFF".to_string(),
                image_url: None,
            }],
            sizes: vec![SizeOption {
                name: "large".to_string(),
                price_adjustment: 10.0,
                image_url: None,
            }],
            customization_options: vec![CustomizationOption {
                name_pt: "gravura".to_string(),
                name_en: "engraving".to_string(),
                kind: CustomizationType::Text,
                required: false,
                price_modifier: 5.0,
                max_length: Some(20),
            }],
            images: vec![],
            featured: false,
            active: true,
            created_at: None,
        }
    }

    fn request(quantity: i64) -> OrderItemRequest {
        OrderItemRequest {
            product_id: "product:vase".to_string(),
            quantity,
            selected_color: None,
            selected_size: None,
            customizations: BTreeMap::new(),
        }
    }

    #[test]
    fn test_base_price_with_size_adjustment() {
        let mut req = request(2);
        req.selected_size = Some("large".to_string());

        let priced = price_item(&vase(), &req).unwrap();
        assert_eq!(priced.unit_price, 35.99);
        assert_eq!(priced.total_price, 71.98);
    }

    #[test]
    fn test_customization_modifier_applies_on_non_blank_value() {
        let mut req = request(1);
        req.customizations
            .insert("engraving".to_string(), "Ana".to_string());

        let priced = price_item(&vase(), &req).unwrap();
        assert_eq!(priced.unit_price, 30.99);
    }

    #[test]
    fn test_blank_customization_value_costs_nothing() {
        let mut req = request(1);
        req.customizations
            .insert("engraving".to_string(), "   ".to_string());

        let priced = price_item(&vase(), &req).unwrap();
        assert_eq!(priced.unit_price, 25.99);
    }

    #[test]
    fn test_portuguese_field_name_is_accepted() {
        let mut req = request(1);
        req.customizations
            .insert("gravura".to_string(), "Ana".to_string());

        let priced = price_item(&vase(), &req).unwrap();
        assert_eq!(priced.unit_price, 30.99);
    }

    #[test]
    fn test_zero_quantity_rejected() {
        let err = price_item(&vase(), &request(0)).unwrap_err();
        assert_eq!(err, PricingError::InvalidQuantity { quantity: 0 });
    }

    #[test]
    fn test_unknown_size_rejected() {
        let mut req = request(1);
        req.selected_size = Some("giant".to_string());

        let err = price_item(&vase(), &req).unwrap_err();
        assert!(matches!(err, PricingError::InvalidSize { .. }));
    }

    #[test]
    fn test_unknown_color_rejected() {
        let mut req = request(1);
        req.selected_color = Some("chartreuse".to_string());

        let err = price_item(&vase(), &req).unwrap_err();
        assert!(matches!(err, PricingError::InvalidColor { .. }));
    }

    #[test]
    fn test_unknown_customization_field_rejected() {
        let mut req = request(1);
        req.customizations
            .insert("giftwrap".to_string(), "yes".to_string());

        let err = price_item(&vase(), &req).unwrap_err();
        assert!(matches!(err, PricingError::UnknownCustomization { .. }));
    }

    #[test]
    fn test_required_option_must_be_non_blank() {
        let mut product = vase();
        product.customization_options[0].required = true;

        let err = price_item(&product, &request(1)).unwrap_err();
        assert!(matches!(err, PricingError::RequiredOptionMissing { .. }));

        let mut req = request(1);
        req.customizations
            .insert("engraving".to_string(), " ".to_string());
        let err = price_item(&product, &req).unwrap_err();
        assert!(matches!(err, PricingError::RequiredOptionMissing { .. }));
    }

    #[test]
    fn test_over_long_value_rejected() {
        let mut req = request(1);
        req.customizations
            .insert("engraving".to_string(), "x".repeat(21));

        let err = price_item(&vase(), &req).unwrap_err();
        assert!(matches!(err, PricingError::ValueTooLong { .. }));
    }

    #[test]
    fn test_pricing_error_maps_to_app_error_with_product_detail() {
        let err = PricingError::InvalidQuantity { quantity: 0 }.into_app_error("product:vase");
        assert_eq!(err.code, ErrorCode::InvalidQuantity);
        assert_eq!(
            err.details.unwrap().get("product_id").unwrap(),
            "product:vase"
        );
    }
}
