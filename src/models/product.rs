use chrono::{DateTime, Utc};
use rust_decimal::{prelude::ToPrimitive, Decimal};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::table::{HasStatus, Searchable};

/// Enum representing whether a product is listed in the catalog.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ProductStatus {
    #[default]
    Active,
    Inactive,
}

impl ProductStatus {
    pub fn toggled(self) -> Self {
        match self {
            ProductStatus::Active => ProductStatus::Inactive,
            ProductStatus::Inactive => ProductStatus::Active,
        }
    }

    /// Translation key of the status badge label
    pub fn translation_key(self) -> &'static str {
        match self {
            ProductStatus::Active => "active",
            ProductStatus::Inactive => "inactive",
        }
    }

    /// Translation key of the action that flips this status
    pub fn toggle_action_key(self) -> &'static str {
        match self {
            ProductStatus::Active => "deactivate",
            ProductStatus::Inactive => "activate",
        }
    }
}

/// A catalog entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    /// Stock-keeping unit. Assumed unique, never enforced.
    pub sku: String,
    pub name: String,
    pub category: String,
    pub price: Decimal,
    pub inventory: u32,
    pub status: ProductStatus,
    pub last_updated: DateTime<Utc>,
}

impl Searchable for Product {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.sku.as_str()]
    }
}

impl HasStatus for Product {
    type Status = ProductStatus;

    fn status(&self) -> ProductStatus {
        self.status
    }
}

/// Partial product used by create and update commands.
///
/// `None` leaves the field untouched on update and falls back to the
/// catalog default on create.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub sku: Option<String>,
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<Decimal>,
    pub inventory: Option<u32>,
    pub status: Option<ProductStatus>,
}

impl ProductDraft {
    /// Applies the provided fields on top of `product`.
    pub fn merge_into(&self, product: &Product) -> Product {
        Product {
            sku: self.sku.clone().unwrap_or_else(|| product.sku.clone()),
            name: self.name.clone().unwrap_or_else(|| product.name.clone()),
            category: self
                .category
                .clone()
                .unwrap_or_else(|| product.category.clone()),
            price: self.price.unwrap_or(product.price),
            inventory: self.inventory.unwrap_or(product.inventory),
            status: self.status.unwrap_or(product.status),
            ..product.clone()
        }
    }
}

/// Raw values of the add/edit product form.
///
/// Every field is required. Numeric inputs that do not parse coerce to zero
/// instead of being rejected.
#[derive(Clone, Debug, Default, Deserialize, Validate)]
pub struct ProductForm {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "sku is required"))]
    pub sku: String,
    #[validate(length(min = 1, message = "category is required"))]
    pub category: String,
    #[validate(length(min = 1, message = "price is required"))]
    pub price: String,
    #[validate(length(min = 1, message = "inventory is required"))]
    pub inventory: String,
    #[serde(default)]
    pub status: ProductStatus,
}

impl ProductForm {
    /// Validates required fields and converts the form into a draft.
    pub fn into_draft(self) -> Result<ProductDraft, crate::errors::ServiceError> {
        self.validate()?;

        Ok(ProductDraft {
            price: Some(coerce_price(&self.price)),
            inventory: Some(coerce_inventory(&self.inventory)),
            sku: Some(self.sku),
            name: Some(self.name),
            category: Some(self.category),
            status: Some(self.status),
        })
    }
}

/// Reads the leading decimal number of `raw`, ignoring whatever trails it,
/// so `"12abc"` reads as 12.
fn leading_decimal(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim_start();
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_point = false;

    for (idx, ch) in trimmed.char_indices() {
        match ch {
            '+' | '-' if idx == 0 => {}
            '0'..='9' => seen_digit = true,
            '.' if !seen_point => seen_point = true,
            _ => break,
        }
        end = idx + ch.len_utf8();
    }

    if !seen_digit {
        return None;
    }

    let number = trimmed[..end].trim_start_matches('+').trim_end_matches('.');
    match number.strip_prefix('.') {
        Some(fraction) => format!("0.{fraction}").parse::<Decimal>().ok(),
        None => number.parse::<Decimal>().ok(),
    }
}

/// Parses a price input from its leading number; no number or a negative
/// one becomes zero.
pub fn coerce_price(raw: &str) -> Decimal {
    leading_decimal(raw)
        .filter(|price| !price.is_sign_negative())
        .unwrap_or(Decimal::ZERO)
}

/// Parses an inventory input from its leading number; fractions are
/// truncated, no number or a negative one becomes zero.
pub fn coerce_inventory(raw: &str) -> u32 {
    leading_decimal(raw)
        .filter(|count| !count.is_sign_negative())
        .and_then(|count| count.trunc().to_u32())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use rust_decimal_macros::dec;

    use crate::errors::ServiceError;

    fn form() -> ProductForm {
        ProductForm {
            name: "Desk Lamp".into(),
            sku: "P00999".into(),
            category: "Home".into(),
            price: "39.90".into(),
            inventory: "14".into(),
            status: ProductStatus::Inactive,
        }
    }

    #[test]
    fn status_parses_case_insensitively() {
        assert_eq!("Active".parse::<ProductStatus>(), Ok(ProductStatus::Active));
        assert_eq!(ProductStatus::Inactive.to_string(), "inactive");
        assert_eq!(ProductStatus::Active.toggled(), ProductStatus::Inactive);
    }

    #[test]
    fn form_converts_to_full_draft() {
        let draft = form().into_draft().unwrap();
        assert_eq!(draft.price, Some(dec!(39.90)));
        assert_eq!(draft.inventory, Some(14));
        assert_eq!(draft.status, Some(ProductStatus::Inactive));
    }

    #[test]
    fn form_rejects_missing_required_fields() {
        let mut missing = form();
        missing.category.clear();
        assert_matches!(
            missing.into_draft(),
            Err(ServiceError::ValidationError(msg)) if msg.contains("category")
        );
    }

    #[test]
    fn invalid_numbers_coerce_to_zero() {
        let mut sloppy = form();
        sloppy.price = "twelve".into();
        sloppy.inventory = "-3".into();
        let draft = sloppy.into_draft().unwrap();
        assert_eq!(draft.price, Some(Decimal::ZERO));
        assert_eq!(draft.inventory, Some(0));
    }

    #[test]
    fn fractional_inventory_is_truncated() {
        assert_eq!(coerce_inventory("12.7"), 12);
        assert_eq!(coerce_inventory(" 8 "), 8);
    }

    #[test]
    fn trailing_garbage_keeps_the_leading_number() {
        assert_eq!(coerce_price("12abc"), dec!(12));
        assert_eq!(coerce_price("19.99 USD"), dec!(19.99));
        assert_eq!(coerce_price(".5"), dec!(0.5));
        assert_eq!(coerce_price("abc12"), Decimal::ZERO);
        assert_eq!(coerce_price("-4x"), Decimal::ZERO);
        assert_eq!(coerce_inventory("7 units"), 7);
        assert_eq!(coerce_inventory("+3"), 3);
    }
}
