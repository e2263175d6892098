//! Seed data for the dashboard.
//!
//! Controllers never read fixtures directly; they are built from a
//! [`DataSource`], so tests and alternative seeds can inject their own.

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::{Customer, DailySales, Order, OrderStatus, Product, ProductStatus};

/// Provides the initial collections loaded at startup.
pub trait DataSource {
    fn products(&self) -> Vec<Product>;
    fn orders(&self) -> Vec<Order>;
    fn daily_sales(&self) -> Vec<DailySales>;
}

/// The built-in demo catalog: 8 products, 6 orders and a week of sales.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockDataSource;

fn at(day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 4, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn product(
    id: &str,
    sku: &str,
    name: &str,
    price: Decimal,
    inventory: u32,
    status: ProductStatus,
    category: &str,
    last_updated: DateTime<Utc>,
) -> Product {
    Product {
        id: id.to_string(),
        sku: sku.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        price,
        inventory,
        status,
        last_updated,
    }
}

fn order(
    id: &str,
    (name, email): (&str, &str),
    status: OrderStatus,
    total: Decimal,
    items: u32,
    date: DateTime<Utc>,
    tracking_id: Option<&str>,
) -> Order {
    Order {
        id: id.to_string(),
        order_number: format!("ORD-2025-{:04}", id.parse::<u32>().unwrap_or_default()),
        customer: Customer {
            name: name.to_string(),
            email: email.to_string(),
        },
        status,
        total,
        items,
        date,
        tracking_id: tracking_id.map(str::to_string),
    }
}

impl DataSource for MockDataSource {
    #[rustfmt::skip]
    fn products(&self) -> Vec<Product> {
        use ProductStatus::{Active, Inactive};

        vec![
            product("1", "P00123", "Wireless Headphones", dec!(99.99), 45, Active, "Electronics", at(1, 10, 30)),
            product("2", "P00456", "Smart Watch", dec!(149.99), 12, Active, "Electronics", at(3, 9, 15)),
            product("3", "P00789", "Laptop Stand", dec!(29.99), 78, Active, "Accessories", at(5, 14, 20)),
            product("4", "P00321", "Bluetooth Speaker", dec!(79.99), 5, Active, "Electronics", at(6, 11, 45)),
            product("5", "P00654", "Wireless Mouse", dec!(24.99), 32, Active, "Accessories", at(8, 16, 30)),
            product("6", "P00987", "USB-C Hub", dec!(49.99), 18, Inactive, "Accessories", at(9, 13, 10)),
            product("7", "P00135", "Phone Case", dec!(19.99), 0, Active, "Accessories", at(10, 15, 40)),
            product("8", "P00246", "Wireless Charger", dec!(34.99), 23, Active, "Electronics", at(11, 12, 20)),
        ]
    }

    #[rustfmt::skip]
    fn orders(&self) -> Vec<Order> {
        use OrderStatus::*;

        vec![
            order("1", ("Jane Smith", "jane.smith@example.com"), Delivered, dec!(149.99), 1, at(1, 10, 30), Some("TRK123456789")),
            order("2", ("John Doe", "john.doe@example.com"), Shipped, dec!(99.99), 1, at(5, 14, 20), Some("TRK987654321")),
            order("3", ("Alice Johnson", "alice.j@example.com"), Processing, dec!(129.98), 2, at(8, 16, 30), None),
            order("4", ("Bob Williams", "bob.w@example.com"), Pending, dec!(49.99), 1, at(10, 15, 40), None),
            order("5", ("Sarah Davis", "sarah.d@example.com"), Pending, dec!(224.97), 3, at(11, 12, 20), None),
            order("6", ("Mike Brown", "mike.b@example.com"), Cancelled, dec!(79.99), 1, at(9, 13, 10), None),
        ]
    }

    fn daily_sales(&self) -> Vec<DailySales> {
        [
            ("Apr 05", dec!(99.99)),
            ("Apr 06", dec!(149.99)),
            ("Apr 07", dec!(0)),
            ("Apr 08", dec!(129.98)),
            ("Apr 09", dec!(79.99)),
            ("Apr 10", dec!(49.99)),
            ("Apr 11", dec!(224.97)),
        ]
        .into_iter()
        .map(|(date, amount)| DailySales {
            date: date.to_string(),
            amount,
        })
        .collect()
    }
}
