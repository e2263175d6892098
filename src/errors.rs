use serde::Serialize;

use crate::models::order::OrderStatus;

#[derive(Debug, Clone, PartialEq, thiserror::Error, Serialize)]
pub enum ServiceError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Cannot transition order from '{from}' to '{to}'")]
    InvalidTransition { from: OrderStatus, to: OrderStatus },

    #[error("A tracking id is required to mark an order as shipped")]
    TrackingIdRequired,
}

impl From<validator::ValidationErrors> for ServiceError {
    fn from(err: validator::ValidationErrors) -> Self {
        ServiceError::ValidationError(err.to_string())
    }
}

impl ServiceError {
    pub fn product_not_found(id: &str) -> Self {
        ServiceError::NotFound(format!("Product {} not found", id))
    }

    pub fn order_not_found(id: &str) -> Self {
        ServiceError::NotFound(format!("Order {} not found", id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transition_error_names_both_statuses() {
        let err = ServiceError::InvalidTransition {
            from: OrderStatus::Delivered,
            to: OrderStatus::Shipped,
        };
        assert_eq!(
            err.to_string(),
            "Cannot transition order from 'delivered' to 'shipped'"
        );
    }

    #[test]
    fn not_found_names_the_record() {
        assert_eq!(
            ServiceError::product_not_found("42").to_string(),
            "Not found: Product 42 not found"
        );
        assert_eq!(
            ServiceError::order_not_found("7"),
            ServiceError::NotFound("Order 7 not found".to_string())
        );
    }
}
