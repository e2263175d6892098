use std::sync::Arc;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::{
    errors::ServiceError,
    fixtures::DataSource,
    i18n::Preferences,
    models::{Product, ProductDraft, ProductStatus},
    services::versioned::Versioned,
    table::{
        self, Page, PageRequest, ProductFilter, ProductSortField, Sort, StockLevel, TableView,
        DEFAULT_LOW_STOCK_THRESHOLD,
    },
};

/// Inventory at or below this is highlighted in the table.
pub const LOW_STOCK_WARNING: u32 = 5;

const DEFAULT_NAME: &str = "New Product";
const DEFAULT_CATEGORY: &str = "Uncategorized";

/// Everything the product table needs for one render.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductQuery {
    pub filter: ProductFilter,
    pub sort: Option<Sort<ProductSortField>>,
    pub page: PageRequest,
}

/// A product formatted for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRow {
    pub id: String,
    pub sku: String,
    pub name: String,
    pub category: String,
    pub price: String,
    pub inventory: u32,
    pub low_stock_warning: bool,
    pub status: ProductStatus,
    pub status_label: String,
    /// Label of the activate/deactivate action
    pub toggle_label: String,
    pub last_updated: String,
}

impl ProductRow {
    fn render(product: &Product, prefs: &Preferences, now: DateTime<Utc>) -> Self {
        Self {
            id: product.id.clone(),
            sku: product.sku.clone(),
            name: product.name.clone(),
            category: product.category.clone(),
            price: prefs.currency(product.price),
            inventory: product.inventory,
            low_stock_warning: product.inventory <= LOW_STOCK_WARNING,
            status: product.status,
            status_label: prefs.t(product.status.translation_key()),
            toggle_label: prefs.t(product.status.toggle_action_key()),
            last_updated: prefs.relative(product.last_updated, now),
        }
    }
}

/// Controller of the product table: owns the catalog and runs its commands.
#[derive(Debug, Clone)]
pub struct ProductCatalog {
    products: Versioned<Product>,
    low_stock_threshold: u32,
}

impl ProductCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products: Versioned::new(products),
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
        }
    }

    pub fn from_source(source: &impl DataSource) -> Self {
        Self::new(source.products())
    }

    pub fn with_low_stock_threshold(mut self, threshold: u32) -> Self {
        self.low_stock_threshold = threshold;
        self
    }

    pub fn low_stock_threshold(&self) -> u32 {
        self.low_stock_threshold
    }

    pub fn version(&self) -> u64 {
        self.products.version()
    }

    pub fn products(&self) -> &[Product] {
        self.products.items()
    }

    pub fn snapshot(&self) -> Arc<Vec<Product>> {
        self.products.snapshot()
    }

    pub fn get(&self, id: &str) -> Result<&Product, ServiceError> {
        self.products
            .items()
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| ServiceError::product_not_found(id))
    }

    /// Products whose stock is low or out, using the catalog threshold.
    pub fn stock_alerts(&self) -> usize {
        self.products
            .items()
            .iter()
            .filter(|p| StockLevel::classify(p.inventory, self.low_stock_threshold).is_some())
            .count()
    }

    /// Filters, sorts and paginates the catalog. The catalog's low-stock
    /// threshold overrides the one carried by the query's filter.
    pub fn query(&self, query: &ProductQuery) -> Page<&Product> {
        let filter = query
            .filter
            .clone()
            .with_low_stock_threshold(self.low_stock_threshold);

        table::select(
            self.products.items(),
            &filter,
            query.sort.as_ref(),
            query.page,
        )
    }

    /// Renders the current page as display rows.
    pub fn view(
        &self,
        query: &ProductQuery,
        prefs: &Preferences,
        now: DateTime<Utc>,
    ) -> TableView<ProductRow> {
        let page = self
            .query(query)
            .map(|product| ProductRow::render(product, prefs, now));

        TableView::from_page(page, Some(prefs.t("noProductsFound")), self.version())
    }

    /// Adds a product built from `draft`; missing fields get catalog defaults.
    #[instrument(skip(self, draft))]
    pub fn create(&mut self, draft: ProductDraft) -> Product {
        let now = Utc::now();
        let sku = draft
            .sku
            .filter(|sku| !sku.trim().is_empty())
            .unwrap_or_else(|| format!("SKU-{}", now.timestamp_millis()));

        let product = Product {
            id: Uuid::new_v4().to_string(),
            sku,
            name: draft
                .name
                .filter(|name| !name.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_NAME.to_string()),
            category: draft
                .category
                .filter(|category| !category.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            price: draft.price.unwrap_or(Decimal::ZERO),
            inventory: draft.inventory.unwrap_or(0),
            status: draft.status.unwrap_or_default(),
            last_updated: now,
        };

        let version = self.products.push(product.clone());
        info!(product_id = %product.id, sku = %product.sku, version, "Product created");
        product
    }

    #[instrument(skip(self, draft))]
    pub fn update(&mut self, id: &str, draft: ProductDraft) -> Result<Product, ServiceError> {
        let now = Utc::now();
        let updated = self
            .products
            .update_where(
                |p| p.id == id,
                |p| Product {
                    last_updated: now,
                    ..draft.merge_into(p)
                },
            )
            .ok_or_else(|| ServiceError::product_not_found(id))?;

        info!(product_id = %id, version = self.version(), "Product updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub fn delete(&mut self, id: &str) -> Result<Product, ServiceError> {
        let removed = self
            .products
            .remove_where(|p| p.id == id)
            .ok_or_else(|| ServiceError::product_not_found(id))?;

        info!(product_id = %id, version = self.version(), "Product deleted");
        Ok(removed)
    }

    #[instrument(skip(self))]
    pub fn set_status(&mut self, id: &str, status: ProductStatus) -> Result<Product, ServiceError> {
        let now = Utc::now();
        let updated = self
            .products
            .update_where(
                |p| p.id == id,
                |p| Product {
                    status,
                    last_updated: now,
                    ..p.clone()
                },
            )
            .ok_or_else(|| ServiceError::product_not_found(id))?;

        info!(product_id = %id, %status, version = self.version(), "Product status changed");
        Ok(updated)
    }

    /// Flips active ⇄ inactive.
    pub fn toggle_status(&mut self, id: &str) -> Result<Product, ServiceError> {
        let next = self.get(id)?.status.toggled();
        self.set_status(id, next)
    }
}
