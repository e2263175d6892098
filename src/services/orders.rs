use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::{
    errors::ServiceError,
    fixtures::DataSource,
    i18n::Preferences,
    models::{Order, OrderStatus},
    services::versioned::Versioned,
    table::{self, OrderFilter, OrderSortField, Page, PageRequest, Sort, TableView},
};

/// Everything the order table needs for one render.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderQuery {
    pub filter: OrderFilter,
    pub sort: Option<Sort<OrderSortField>>,
    pub page: PageRequest,
}

/// An order formatted for display, with the actions it currently offers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRow {
    pub id: String,
    pub order_number: String,
    pub customer_name: String,
    pub customer_email: String,
    pub status: OrderStatus,
    pub status_label: String,
    pub total: String,
    pub items: u32,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_id: Option<String>,
    pub can_ship: bool,
    pub can_deliver: bool,
}

impl OrderRow {
    pub(crate) fn render(order: &Order, prefs: &Preferences, now: DateTime<Utc>) -> Self {
        Self {
            id: order.id.clone(),
            order_number: order.order_number.clone(),
            customer_name: order.customer.name.clone(),
            customer_email: order.customer.email.clone(),
            status: order.status,
            status_label: prefs.t(order.status.translation_key()),
            total: prefs.currency(order.total),
            items: order.items,
            date: prefs.relative(order.date, now),
            tracking_id: order.tracking_id.clone(),
            can_ship: order.status.can_ship(),
            can_deliver: order.status.can_deliver(),
        }
    }
}

/// Controller of the order table.
#[derive(Debug, Clone)]
pub struct OrderBook {
    orders: Versioned<Order>,
}

impl OrderBook {
    pub fn new(orders: Vec<Order>) -> Self {
        Self {
            orders: Versioned::new(orders),
        }
    }

    pub fn from_source(source: &impl DataSource) -> Self {
        Self::new(source.orders())
    }

    pub fn version(&self) -> u64 {
        self.orders.version()
    }

    pub fn orders(&self) -> &[Order] {
        self.orders.items()
    }

    pub fn snapshot(&self) -> Arc<Vec<Order>> {
        self.orders.snapshot()
    }

    pub fn get(&self, id: &str) -> Result<&Order, ServiceError> {
        self.orders
            .items()
            .iter()
            .find(|o| o.id == id)
            .ok_or_else(|| ServiceError::order_not_found(id))
    }

    pub fn count_with_status(&self, status: OrderStatus) -> usize {
        table::count_with_status(self.orders.items(), status)
    }

    /// The `n` most recent orders, newest first.
    pub fn recent(&self, n: usize) -> Vec<&Order> {
        let mut orders: Vec<&Order> = self.orders.items().iter().collect();
        orders.sort_by(|a, b| b.date.cmp(&a.date));
        orders.truncate(n);
        orders
    }

    pub fn query(&self, query: &OrderQuery) -> Page<&Order> {
        table::select(
            self.orders.items(),
            &query.filter,
            query.sort.as_ref(),
            query.page,
        )
    }

    pub fn view(
        &self,
        query: &OrderQuery,
        prefs: &Preferences,
        now: DateTime<Utc>,
    ) -> TableView<OrderRow> {
        let page = self
            .query(query)
            .map(|order| OrderRow::render(order, prefs, now));

        TableView::from_page(page, Some(prefs.t("noOrdersFound")), self.version())
    }

    /// Ships a pending or processing order under `tracking_id`.
    #[instrument(skip(self))]
    pub fn mark_shipped(&mut self, id: &str, tracking_id: &str) -> Result<Order, ServiceError> {
        let current = self.get(id)?.status;

        let tracking_id = tracking_id.trim();
        if tracking_id.is_empty() {
            warn!(order_id = %id, "Refusing to ship without a tracking id");
            return Err(ServiceError::TrackingIdRequired);
        }

        if !current.can_ship() {
            return Err(ServiceError::InvalidTransition {
                from: current,
                to: OrderStatus::Shipped,
            });
        }

        self.set_status(id, OrderStatus::Shipped, Some(tracking_id))
    }

    #[instrument(skip(self))]
    pub fn mark_delivered(&mut self, id: &str) -> Result<Order, ServiceError> {
        let current = self.get(id)?.status;
        if !current.can_deliver() {
            return Err(ServiceError::InvalidTransition {
                from: current,
                to: OrderStatus::Delivered,
            });
        }

        self.set_status(id, OrderStatus::Delivered, None)
    }

    /// Overwrites the status without checking the progression rules that
    /// [`mark_shipped`](Self::mark_shipped) and
    /// [`mark_delivered`](Self::mark_delivered) enforce. A `tracking_id`
    /// replaces the stored one; `None` keeps it.
    #[instrument(skip(self))]
    pub fn set_status(
        &mut self,
        id: &str,
        status: OrderStatus,
        tracking_id: Option<&str>,
    ) -> Result<Order, ServiceError> {
        let updated = self
            .orders
            .update_where(
                |o| o.id == id,
                |o| Order {
                    status,
                    tracking_id: tracking_id
                        .map(str::to_string)
                        .or_else(|| o.tracking_id.clone()),
                    ..o.clone()
                },
            )
            .ok_or_else(|| ServiceError::order_not_found(id))?;

        info!(
            order_id = %id,
            order_number = %updated.order_number,
            %status,
            version = self.version(),
            "Order status updated"
        );
        Ok(updated)
    }
}
