// View controllers
pub mod orders;
pub mod products;

// Overview figures derived from the controllers
pub mod dashboard;

// Copy-on-write state shared by the controllers
pub mod versioned;

use std::sync::Arc;

use crate::{config::AppConfig, fixtures::DataSource, models::DailySales};

use self::{orders::OrderBook, products::ProductCatalog};

/// Container holding every controller of the back office
#[derive(Debug, Clone)]
pub struct Backoffice {
    pub products: ProductCatalog,
    pub orders: OrderBook,
    daily_sales: Arc<Vec<DailySales>>,
}

impl Backoffice {
    /// Loads every collection from `source` with default settings
    pub fn from_source(source: &impl DataSource) -> Self {
        Self {
            products: ProductCatalog::from_source(source),
            orders: OrderBook::from_source(source),
            daily_sales: Arc::new(source.daily_sales()),
        }
    }

    /// Loads every collection from `source`, applying configured thresholds
    pub fn from_config(source: &impl DataSource, config: &AppConfig) -> Self {
        let mut backoffice = Self::from_source(source);
        backoffice.products = backoffice
            .products
            .with_low_stock_threshold(config.low_stock_threshold);
        backoffice
    }

    pub fn daily_sales(&self) -> &[DailySales] {
        &self.daily_sales
    }
}
