//! Order history view models.

use eliteshop_core::{OrderId, OrderStatus, PaymentMethod};

use crate::orders::{Order, OrderHistory};

/// Compact item preview on an order card (first three items).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderItemPreview {
    pub name: String,
    pub image: String,
    pub quantity: u32,
}

/// One order card in the history list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderCardView {
    pub id: OrderId,
    /// "Placed on Jan 15, 2024"
    pub placed_on: String,
    pub status: OrderStatus,
    pub preview: Vec<OrderItemPreview>,
    /// "+N more items" beyond the preview.
    pub more_count: usize,
    pub total_items: u32,
    pub total: String,
}

/// Full order details for the modal view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDetailView {
    pub id: OrderId,
    pub placed_on: String,
    pub status: OrderStatus,
    pub recipient: String,
    pub address_lines: Vec<String>,
    pub email: String,
    /// "Credit Card ending in 3456" or "PayPal".
    pub payment_label: String,
    pub items: Vec<OrderLineView>,
    pub total: String,
}

/// One line of the order detail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLineView {
    pub name: String,
    pub image: String,
    pub quantity: u32,
    pub unit_price: String,
    pub line_total: String,
}

fn format_date(order: &Order) -> String {
    order.placed_at.format("%b %-d, %Y").to_string()
}

fn payment_label(order: &Order) -> String {
    match (order.payment.method, order.payment.card_last4.as_deref()) {
        (PaymentMethod::Card, Some(last4)) => format!("Credit Card ending in {last4}"),
        (PaymentMethod::Card, None) => "Credit Card".to_owned(),
        (PaymentMethod::Paypal, _) => "PayPal".to_owned(),
    }
}

impl From<&Order> for OrderCardView {
    fn from(order: &Order) -> Self {
        const PREVIEW_LIMIT: usize = 3;

        Self {
            id: order.id.clone(),
            placed_on: format_date(order),
            status: order.status,
            preview: order
                .items
                .iter()
                .take(PREVIEW_LIMIT)
                .map(|line| OrderItemPreview {
                    name: line.name.clone(),
                    image: line.image.clone(),
                    quantity: line.quantity,
                })
                .collect(),
            more_count: order.items.len().saturating_sub(PREVIEW_LIMIT),
            total_items: order.total_items(),
            total: order.total.display(),
        }
    }
}

impl From<&Order> for OrderDetailView {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id.clone(),
            placed_on: format_date(order),
            status: order.status,
            recipient: order.shipping.full_name(),
            address_lines: vec![
                order.shipping.address.clone(),
                format!(
                    "{}, {} {}",
                    order.shipping.city, order.shipping.state, order.shipping.zip_code
                ),
                order.shipping.country.clone(),
            ],
            email: order.shipping.email.to_string(),
            payment_label: payment_label(order),
            items: order
                .items
                .iter()
                .map(|line| OrderLineView {
                    name: line.name.clone(),
                    image: line.image.clone(),
                    quantity: line.quantity,
                    unit_price: line.price.display(),
                    line_total: line.line_total().display(),
                })
                .collect(),
            total: order.total.display(),
        }
    }
}

/// Order cards for the history page, newest first.
#[must_use]
pub fn order_cards(history: &OrderHistory) -> Vec<OrderCardView> {
    history.all().iter().map(OrderCardView::from).collect()
}

/// Detail view for one order.
#[must_use]
pub fn order_detail(history: &OrderHistory, id: &OrderId) -> Option<OrderDetailView> {
    history.get(id).map(OrderDetailView::from)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use chrono::{TimeZone, Utc};

    use eliteshop_core::{CurrencyCode, Email, Price, ProductId};

    use crate::orders::{PaymentSnapshot, ShippingAddress};
    use crate::storage::MemoryBackend;
    use crate::store::CartLine;

    fn line(id: i32, name: &str, cents: i64, quantity: u32) -> CartLine {
        CartLine {
            product_id: ProductId::new(id),
            name: name.to_owned(),
            price: Price::from_cents(cents, CurrencyCode::USD),
            image: String::new(),
            quantity,
        }
    }

    fn order_with_items(items: Vec<CartLine>) -> Order {
        Order {
            id: OrderId::new("ORD-1-AAAAA"),
            placed_at: Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap(),
            status: OrderStatus::Processing,
            shipping: ShippingAddress {
                first_name: "Jane".to_owned(),
                last_name: "Doe".to_owned(),
                email: Email::parse("jane@example.com").unwrap(),
                phone: None,
                address: "1 Main St".to_owned(),
                city: "Springfield".to_owned(),
                state: "IL".to_owned(),
                zip_code: "62701".to_owned(),
                country: "US".to_owned(),
            },
            payment: PaymentSnapshot {
                method: PaymentMethod::Card,
                card_last4: Some("3456".to_owned()),
            },
            items,
            total: Price::from_cents(100_00, CurrencyCode::USD),
        }
    }

    #[test]
    fn test_card_previews_first_three_items() {
        let order = order_with_items(vec![
            line(1, "A", 10_00, 1),
            line(2, "B", 10_00, 2),
            line(3, "C", 10_00, 1),
            line(4, "D", 10_00, 1),
        ]);
        let card = OrderCardView::from(&order);

        assert_eq!(card.preview.len(), 3);
        assert_eq!(card.more_count, 1);
        assert_eq!(card.total_items, 5);
        assert_eq!(card.placed_on, "Jan 15, 2024");
        assert_eq!(card.total, "$100.00");
    }

    #[test]
    fn test_detail_view_formats_address_and_payment() {
        let order = order_with_items(vec![line(1, "A", 25_00, 2)]);
        let detail = OrderDetailView::from(&order);

        assert_eq!(detail.recipient, "Jane Doe");
        assert_eq!(detail.address_lines[1], "Springfield, IL 62701");
        assert_eq!(detail.payment_label, "Credit Card ending in 3456");
        assert_eq!(detail.items[0].line_total, "$50.00");
    }

    #[test]
    fn test_order_cards_from_history() {
        let mut history = OrderHistory::open(Arc::new(MemoryBackend::new())).unwrap();
        history.record(order_with_items(vec![line(1, "A", 10_00, 1)])).unwrap();

        let cards = order_cards(&history);
        assert_eq!(cards.len(), 1);

        assert!(order_detail(&history, &OrderId::new("ORD-1-AAAAA")).is_some());
        assert!(order_detail(&history, &OrderId::new("ORD-9-ZZZZZ")).is_none());
    }
}
