use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One bar of the daily sales chart. Display-only.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DailySales {
    /// Chart label, e.g. `Apr 05`
    pub date: String,
    pub amount: Decimal,
}
