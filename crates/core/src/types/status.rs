//! Status enums for orders and payments.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a recorded order.
///
/// Status is freely settable; there is no transition validation (an order
/// may go straight from `Delivered` back to `Processing` if an operator
/// says so).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    #[default]
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Processing => write!(f, "Processing"),
            Self::Shipped => write!(f, "Shipped"),
            Self::Delivered => write!(f, "Delivered"),
            Self::Cancelled => write!(f, "Cancelled"),
        }
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "processing" => Ok(Self::Processing),
            "shipped" => Ok(Self::Shipped),
            "delivered" => Ok(Self::Delivered),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(format!("invalid order status: {s}")),
        }
    }
}

/// Payment method captured at checkout.
///
/// Purely a snapshot tag; no payment processing happens anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Credit or debit card.
    #[default]
    Card,
    /// PayPal redirect.
    Paypal,
}

impl PaymentMethod {
    /// Human-readable label for order summaries.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Card => "Credit Card",
            Self::Paypal => "PayPal",
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_order_status_display_fromstr_roundtrip() {
        for status in [
            OrderStatus::Processing,
            OrderStatus::Shipped,
            OrderStatus::Delivered,
            OrderStatus::Cancelled,
        ] {
            let parsed = OrderStatus::from_str(&status.to_string()).unwrap();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn test_order_status_fromstr_case_insensitive() {
        assert_eq!(
            OrderStatus::from_str("SHIPPED").unwrap(),
            OrderStatus::Shipped
        );
        assert!(OrderStatus::from_str("returned").is_err());
    }

    #[test]
    fn test_payment_method_labels() {
        assert_eq!(PaymentMethod::Card.label(), "Credit Card");
        assert_eq!(PaymentMethod::Paypal.label(), "PayPal");
    }
}
