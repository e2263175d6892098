use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::models::{Order, Product};

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// A column a table can be ordered by.
pub trait SortKey<R> {
    fn compare(&self, a: &R, b: &R) -> Ordering;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sort<F> {
    pub field: F,
    pub direction: SortDirection,
}

impl<F> Sort<F> {
    pub fn asc(field: F) -> Self {
        Self {
            field,
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(field: F) -> Self {
        Self {
            field,
            direction: SortDirection::Desc,
        }
    }
}

/// Stable sort: records that compare equal keep their filtered order.
pub fn sort_records<R, F: SortKey<R>>(records: &mut [&R], sort: &Sort<F>) {
    records.sort_by(|a, b| {
        let ordering = sort.field.compare(a, b);
        match sort.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ProductSortField {
    Name,
    Sku,
    Category,
    Price,
    Inventory,
    LastUpdated,
}

impl SortKey<Product> for ProductSortField {
    fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            ProductSortField::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            ProductSortField::Sku => a.sku.cmp(&b.sku),
            ProductSortField::Category => a.category.cmp(&b.category),
            ProductSortField::Price => a.price.cmp(&b.price),
            ProductSortField::Inventory => a.inventory.cmp(&b.inventory),
            ProductSortField::LastUpdated => a.last_updated.cmp(&b.last_updated),
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum OrderSortField {
    OrderNumber,
    Customer,
    Total,
    Items,
    Date,
}

impl SortKey<Order> for OrderSortField {
    fn compare(&self, a: &Order, b: &Order) -> Ordering {
        match self {
            OrderSortField::OrderNumber => a.order_number.cmp(&b.order_number),
            OrderSortField::Customer => a
                .customer
                .name
                .to_lowercase()
                .cmp(&b.customer.name.to_lowercase()),
            OrderSortField::Total => a.total.cmp(&b.total),
            OrderSortField::Items => a.items.cmp(&b.items),
            OrderSortField::Date => a.date.cmp(&b.date),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;

    use crate::models::ProductStatus;

    fn product(sku: &str, price: i64, inventory: u32) -> Product {
        Product {
            id: sku.into(),
            sku: sku.into(),
            name: format!("Item {}", sku),
            category: "Accessories".into(),
            price: Decimal::new(price, 2),
            inventory,
            status: ProductStatus::Active,
            last_updated: Utc.with_ymd_and_hms(2025, 4, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn sorts_by_price_descending() {
        let products = [product("a", 500, 1), product("b", 1500, 1), product("c", 900, 1)];
        let mut refs: Vec<&Product> = products.iter().collect();
        sort_records(&mut refs, &Sort::desc(ProductSortField::Price));
        let skus: Vec<_> = refs.iter().map(|p| p.sku.as_str()).collect();
        assert_eq!(skus, vec!["b", "c", "a"]);
    }

    #[test]
    fn equal_keys_keep_their_order() {
        let products = [product("x", 100, 3), product("y", 100, 3), product("z", 100, 1)];
        let mut refs: Vec<&Product> = products.iter().collect();
        sort_records(&mut refs, &Sort::desc(ProductSortField::Inventory));
        let skus: Vec<_> = refs.iter().map(|p| p.sku.as_str()).collect();
        assert_eq!(skus, vec!["x", "y", "z"]);
    }

    #[test]
    fn sort_field_parses_from_cli_form() {
        assert_eq!(
            "last_updated".parse::<ProductSortField>(),
            Ok(ProductSortField::LastUpdated)
        );
        assert_eq!("DESC".parse::<SortDirection>(), Ok(SortDirection::Desc));
    }
}
