use std::str::FromStr;

use serde::Serialize;

use super::{HasStatus, Searchable};
use crate::errors::ServiceError;
use crate::models::{Order, OrderStatus, Product, ProductStatus};

/// Inventory at or below this count is "low stock" (unless it is zero).
pub const DEFAULT_LOW_STOCK_THRESHOLD: u32 = 10;

const ALL: &str = "all";

/// A predicate over one record type.
pub trait RecordFilter<R> {
    fn matches(&self, record: &R) -> bool;

    /// Returns the matching records, preserving their relative order.
    fn apply<'a>(&self, records: &'a [R]) -> Vec<&'a R> {
        records.iter().filter(|record| self.matches(record)).collect()
    }
}

/// Status dropdown value: either `all` or one concrete status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum StatusFilter<S> {
    #[default]
    All,
    Only(S),
}

impl<S: PartialEq> StatusFilter<S> {
    pub fn matches(&self, status: &S) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => wanted == status,
        }
    }
}

impl<S> FromStr for StatusFilter<S>
where
    S: FromStr,
{
    type Err = ServiceError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        if raw.eq_ignore_ascii_case(ALL) {
            return Ok(StatusFilter::All);
        }
        raw.parse::<S>()
            .map(StatusFilter::Only)
            .map_err(|_| ServiceError::InvalidInput(format!("Unknown status filter: {}", raw)))
    }
}

/// Stock dropdown value for the product table.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum StockLevel {
    #[default]
    All,
    /// `0 < inventory <= threshold`. Out-of-stock items are not low.
    Low,
    /// `inventory == 0`
    Out,
}

impl StockLevel {
    /// Classifies an inventory count. Never returns `All`.
    pub fn classify(inventory: u32, low_threshold: u32) -> Option<StockLevel> {
        match inventory {
            0 => Some(StockLevel::Out),
            n if n <= low_threshold => Some(StockLevel::Low),
            _ => None,
        }
    }

    pub fn matches(self, inventory: u32, low_threshold: u32) -> bool {
        match self {
            StockLevel::All => true,
            level => StockLevel::classify(inventory, low_threshold) == Some(level),
        }
    }
}

/// Case-insensitive substring search over a record's search fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchTerm {
    needle: String,
}

impl SearchTerm {
    pub fn new(term: impl AsRef<str>) -> Self {
        Self {
            needle: term.as_ref().to_lowercase(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.needle
    }

    pub fn matches<R: Searchable>(&self, record: &R) -> bool {
        self.is_empty()
            || record
                .search_fields()
                .into_iter()
                .any(|field| field.to_lowercase().contains(&self.needle))
    }
}

/// Filters of the product table. All predicates are ANDed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductFilter {
    pub status: StatusFilter<ProductStatus>,
    pub stock: StockLevel,
    pub search: SearchTerm,
    pub low_stock_threshold: u32,
}

impl Default for ProductFilter {
    fn default() -> Self {
        Self {
            status: StatusFilter::All,
            stock: StockLevel::All,
            search: SearchTerm::default(),
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
        }
    }
}

impl ProductFilter {
    pub fn with_status(mut self, status: StatusFilter<ProductStatus>) -> Self {
        self.status = status;
        self
    }

    pub fn with_stock(mut self, stock: StockLevel) -> Self {
        self.stock = stock;
        self
    }

    pub fn with_search(mut self, term: impl AsRef<str>) -> Self {
        self.search = SearchTerm::new(term);
        self
    }

    pub fn with_low_stock_threshold(mut self, threshold: u32) -> Self {
        self.low_stock_threshold = threshold;
        self
    }
}

impl RecordFilter<Product> for ProductFilter {
    fn matches(&self, product: &Product) -> bool {
        self.status.matches(&product.status())
            && self.stock.matches(product.inventory, self.low_stock_threshold)
            && self.search.matches(product)
    }
}

/// Filters of the order table. All predicates are ANDed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderFilter {
    pub status: StatusFilter<OrderStatus>,
    pub search: SearchTerm,
}

impl OrderFilter {
    pub fn with_status(mut self, status: StatusFilter<OrderStatus>) -> Self {
        self.status = status;
        self
    }

    pub fn with_search(mut self, term: impl AsRef<str>) -> Self {
        self.search = SearchTerm::new(term);
        self
    }
}

impl RecordFilter<Order> for OrderFilter {
    fn matches(&self, order: &Order) -> bool {
        self.status.matches(&order.status()) && self.search.matches(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use chrono::Utc;
    use rstest::rstest;
    use rust_decimal::Decimal;

    fn product(sku: &str, name: &str, inventory: u32, status: ProductStatus) -> Product {
        Product {
            id: sku.to_lowercase(),
            sku: sku.into(),
            name: name.into(),
            category: "Electronics".into(),
            price: Decimal::ONE,
            inventory,
            status,
            last_updated: Utc::now(),
        }
    }

    #[rstest]
    #[case(0, Some(StockLevel::Out))]
    #[case(1, Some(StockLevel::Low))]
    #[case(10, Some(StockLevel::Low))]
    #[case(11, None)]
    fn stock_classification(#[case] inventory: u32, #[case] expected: Option<StockLevel>) {
        assert_eq!(StockLevel::classify(inventory, 10), expected);
    }

    #[test]
    fn zero_inventory_is_out_but_not_low() {
        assert!(StockLevel::Out.matches(0, 10));
        assert!(!StockLevel::Low.matches(0, 10));
    }

    #[test]
    fn status_filter_parses_all_and_concrete_values() {
        assert_eq!(
            "all".parse::<StatusFilter<ProductStatus>>().unwrap(),
            StatusFilter::All
        );
        assert_eq!(
            "inactive".parse::<StatusFilter<ProductStatus>>().unwrap(),
            StatusFilter::Only(ProductStatus::Inactive)
        );
        assert_matches!(
            "archived".parse::<StatusFilter<OrderStatus>>(),
            Err(ServiceError::InvalidInput(_))
        );
    }

    #[test]
    fn search_is_case_insensitive_over_name_and_sku() {
        let speaker = product("P00321", "Bluetooth Speaker", 5, ProductStatus::Active);
        assert!(SearchTerm::new("SPEAK").matches(&speaker));
        assert!(SearchTerm::new("p003").matches(&speaker));
        assert!(!SearchTerm::new("Electronics").matches(&speaker));
        assert!(SearchTerm::new("").matches(&speaker));
    }

    #[test]
    fn predicates_are_combined_with_and() {
        let products = vec![
            product("A1", "Wireless Mouse", 4, ProductStatus::Active),
            product("A2", "Wireless Charger", 4, ProductStatus::Inactive),
            product("A3", "Wireless Hub", 40, ProductStatus::Active),
            product("A4", "Phone Case", 3, ProductStatus::Active),
        ];

        let filter = ProductFilter::default()
            .with_status(StatusFilter::Only(ProductStatus::Active))
            .with_stock(StockLevel::Low)
            .with_search("wireless");

        let skus: Vec<_> = filter.apply(&products).iter().map(|p| p.sku.as_str()).collect();
        assert_eq!(skus, vec!["A1"]);
    }

    #[test]
    fn threshold_is_configurable() {
        let filter = ProductFilter::default()
            .with_stock(StockLevel::Low)
            .with_low_stock_threshold(5);
        assert!(filter.matches(&product("A", "a", 5, ProductStatus::Active)));
        assert!(!filter.matches(&product("B", "b", 6, ProductStatus::Active)));
    }
}
