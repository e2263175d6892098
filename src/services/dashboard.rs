use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::{
    i18n::Preferences,
    models::{DailySales, OrderStatus},
    services::{orders::OrderRow, Backoffice},
};

/// Number of orders shown in the "recent orders" card
pub const RECENT_ORDERS: usize = 5;

/// Headline figures of the overview page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_sales: Decimal,
    pub pending_orders: usize,
    pub low_stock_alerts: usize,
    pub total_orders: usize,
}

impl DashboardSummary {
    pub fn compute(backoffice: &Backoffice) -> Self {
        Self {
            total_sales: backoffice.daily_sales().iter().map(|day| day.amount).sum(),
            pending_orders: backoffice.orders.count_with_status(OrderStatus::Pending),
            low_stock_alerts: backoffice.products.stock_alerts(),
            total_orders: backoffice.orders.orders().len(),
        }
    }
}

/// A labelled, formatted figure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stat {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesPoint {
    pub date: String,
    pub amount: String,
}

/// The overview page rendered for one set of preferences.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardOverview {
    pub summary: DashboardSummary,
    pub stats: Vec<Stat>,
    pub daily_sales: Vec<SalesPoint>,
    pub recent_orders: Vec<OrderRow>,
}

impl DashboardOverview {
    pub fn render(backoffice: &Backoffice, prefs: &Preferences, now: DateTime<Utc>) -> Self {
        let summary = DashboardSummary::compute(backoffice);

        let stats = vec![
            Stat {
                label: prefs.t("totalSales"),
                value: prefs.currency(summary.total_sales),
            },
            Stat {
                label: prefs.t("pendingOrders"),
                value: summary.pending_orders.to_string(),
            },
            Stat {
                label: prefs.t("lowStockAlerts"),
                value: summary.low_stock_alerts.to_string(),
            },
            Stat {
                label: prefs.t("totalOrders"),
                value: summary.total_orders.to_string(),
            },
        ];

        let daily_sales = backoffice
            .daily_sales()
            .iter()
            .map(|DailySales { date, amount }| SalesPoint {
                date: date.clone(),
                amount: prefs.currency(*amount),
            })
            .collect();

        let recent_orders = backoffice
            .orders
            .recent(RECENT_ORDERS)
            .into_iter()
            .map(|order| OrderRow::render(order, prefs, now))
            .collect();

        Self {
            summary,
            stats,
            daily_sales,
            recent_orders,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    use crate::{fixtures::MockDataSource, i18n::Locale};

    #[test]
    fn summary_over_seed() {
        let backoffice = Backoffice::from_source(&MockDataSource);
        assert_eq!(
            DashboardSummary::compute(&backoffice),
            DashboardSummary {
                total_sales: dec!(734.91),
                pending_orders: 2,
                low_stock_alerts: 2,
                total_orders: 6,
            }
        );
    }

    #[test]
    fn summary_follows_mutations() {
        let mut backoffice = Backoffice::from_source(&MockDataSource);
        backoffice.orders.mark_shipped("4", "TRK42").unwrap();
        backoffice.products.delete("7").unwrap();

        let summary = DashboardSummary::compute(&backoffice);
        assert_eq!(summary.pending_orders, 1);
        assert_eq!(summary.low_stock_alerts, 1);
    }

    #[test]
    fn overview_is_localized() {
        let backoffice = Backoffice::from_source(&MockDataSource);
        let overview = DashboardOverview::render(
            &backoffice,
            &Preferences::new(Locale::De),
            Utc::now(),
        );

        assert_eq!(overview.stats[0].label, "Gesamtumsatz");
        assert_eq!(overview.stats[0].value, "734,91 €");
        assert_eq!(overview.daily_sales.len(), 7);
        assert_eq!(overview.daily_sales[2].amount, "0,00 €");
        assert_eq!(overview.recent_orders.len(), RECENT_ORDERS);
        assert_eq!(overview.recent_orders[0].order_number, "ORD-2025-0005");
    }
}
