//! Declarative UI action dispatch.
//!
//! Every user gesture in the shop maps to one [`UiAction`] variant, and
//! [`dispatch`] is the single table routing actions into the store. This
//! decouples the store's mutation API from whatever event system a UI
//! layer uses: wiring a button means constructing an action, nothing more.

use eliteshop_core::{Email, OrderId, ProductId};

use crate::error::StorefrontError;
use crate::notify::Severity;
use crate::state::Shop;
use crate::views::cart::{PromoError, apply_promo_code};

/// A contact form submission.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    fn is_complete(&self) -> bool {
        ![
            &self.first_name,
            &self.last_name,
            &self.email,
            &self.subject,
            &self.message,
        ]
        .iter()
        .any(|field| field.trim().is_empty())
            && Email::parse(self.email.trim()).is_ok()
    }
}

/// User gestures, keyed by action type.
#[derive(Debug, Clone)]
pub enum UiAction {
    /// "Add to Cart" buttons (product cards, detail page, wishlist).
    AddToCart { product_id: ProductId, quantity: u32 },
    /// Stepper "+" button.
    IncrementQuantity { product_id: ProductId },
    /// Stepper "−" button.
    DecrementQuantity { product_id: ProductId },
    /// Direct quantity input.
    SetQuantity { product_id: ProductId, quantity: i32 },
    /// "Remove" button on a cart row.
    RemoveFromCart { product_id: ProductId },
    /// "Move to Wishlist" button on a cart row.
    MoveToWishlist { product_id: ProductId },
    /// Heart buttons everywhere.
    ToggleWishlist { product_id: ProductId },
    /// "Clear Cart" button.
    ClearCart,
    /// "Reorder" button on an order card.
    Reorder { order_id: OrderId },
    /// Promo-code "Apply" button.
    ApplyPromoCode { code: String },
    /// Footer newsletter form.
    SubscribeNewsletter { email: String },
    /// Contact page form.
    SubmitContact(ContactForm),
}

/// Route an action into the shop.
///
/// Invalid promo codes, newsletter emails, and contact forms degrade to
/// user-visible toasts rather than errors; everything else propagates.
///
/// # Errors
///
/// Returns [`StorefrontError`] when the underlying operation fails (unknown
/// product id, storage failure).
pub fn dispatch(shop: &mut Shop, action: UiAction) -> Result<(), StorefrontError> {
    match action {
        UiAction::AddToCart {
            product_id,
            quantity,
        } => shop.store_mut().add_to_cart(product_id, quantity)?,

        UiAction::IncrementQuantity { product_id } => step_quantity(shop, product_id, 1)?,
        UiAction::DecrementQuantity { product_id } => step_quantity(shop, product_id, -1)?,

        UiAction::SetQuantity {
            product_id,
            quantity,
        } => shop.store_mut().update_quantity(product_id, quantity)?,

        UiAction::RemoveFromCart { product_id } => {
            shop.store_mut().remove_from_cart(product_id)?;
        }

        UiAction::MoveToWishlist { product_id } => {
            shop.store_mut().move_to_wishlist(product_id)?;
        }

        UiAction::ToggleWishlist { product_id } => {
            shop.store_mut().toggle_wishlist(product_id)?;
        }

        UiAction::ClearCart => shop.store_mut().clear_cart()?,

        UiAction::Reorder { order_id } => shop.reorder(&order_id)?,

        UiAction::ApplyPromoCode { code } => match apply_promo_code(&code) {
            Ok(percent) => {
                let normalized = code.trim().to_uppercase();
                shop.notifier().notify(
                    &format!("{normalized} applied! {percent}% off"),
                    Severity::Success,
                );
            }
            Err(PromoError::Empty) => {
                shop.notifier()
                    .notify("Please enter a promo code", Severity::Warning);
            }
            Err(PromoError::Invalid) => {
                shop.notifier().notify("Invalid promo code", Severity::Error);
            }
        },

        UiAction::SubscribeNewsletter { email } => {
            if Email::parse(email.trim()).is_ok() {
                tracing::info!(email = email.trim(), "Newsletter subscription");
                shop.notifier()
                    .notify("Thank you for subscribing!", Severity::Success);
            } else {
                shop.notifier()
                    .notify("Please enter a valid email address", Severity::Error);
            }
        }

        UiAction::SubmitContact(form) => {
            if form.is_complete() {
                tracing::info!(subject = form.subject.as_str(), "Contact form submitted");
                shop.notifier().notify(
                    "Thank you for your message! We'll get back to you soon.",
                    Severity::Success,
                );
            } else {
                shop.notifier()
                    .notify("Please fill in all required fields", Severity::Error);
            }
        }
    }

    Ok(())
}

/// Apply a stepper delta to a line's quantity. Absent lines are a no-op,
/// matching buttons that only render next to existing rows.
fn step_quantity(shop: &mut Shop, product_id: ProductId, delta: i32) -> Result<(), StorefrontError> {
    let Some(current) = shop.store().line(product_id).map(|l| l.quantity) else {
        return Ok(());
    };
    #[allow(clippy::cast_possible_wrap)]
    let next = current as i32 + delta;
    shop.store_mut().update_quantity(product_id, next.max(1))?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::config::StoreConfig;
    use crate::notify::RecordingNotifier;
    use crate::storage::MemoryBackend;
    use crate::store::StoreError;

    fn shop() -> (Shop, Arc<RecordingNotifier>) {
        let notifier = Arc::new(RecordingNotifier::new());
        let shop = Shop::open(
            StoreConfig::default(),
            Arc::new(MemoryBackend::new()),
            notifier.clone(),
        )
        .unwrap();
        (shop, notifier)
    }

    #[test]
    fn test_add_and_steppers() {
        let (mut shop, _) = shop();
        let id = ProductId::new(1);

        dispatch(&mut shop, UiAction::AddToCart { product_id: id, quantity: 1 }).unwrap();
        dispatch(&mut shop, UiAction::IncrementQuantity { product_id: id }).unwrap();
        assert_eq!(shop.store().line(id).unwrap().quantity, 2);

        dispatch(&mut shop, UiAction::DecrementQuantity { product_id: id }).unwrap();
        assert_eq!(shop.store().line(id).unwrap().quantity, 1);

        // Stepper never drops below 1; the remove button handles removal
        dispatch(&mut shop, UiAction::DecrementQuantity { product_id: id }).unwrap();
        assert_eq!(shop.store().line(id).unwrap().quantity, 1);
    }

    #[test]
    fn test_stepper_on_absent_line_is_noop() {
        let (mut shop, _) = shop();
        dispatch(
            &mut shop,
            UiAction::IncrementQuantity { product_id: ProductId::new(3) },
        )
        .unwrap();
        assert!(shop.store().cart().is_empty());
    }

    #[test]
    fn test_unknown_product_propagates() {
        let (mut shop, _) = shop();
        let err = dispatch(
            &mut shop,
            UiAction::AddToCart { product_id: ProductId::new(999), quantity: 1 },
        )
        .unwrap_err();
        assert!(matches!(
            err,
            StorefrontError::Store(StoreError::ProductNotFound(_))
        ));
    }

    #[test]
    fn test_set_quantity_and_clear() {
        let (mut shop, _) = shop();
        let id = ProductId::new(4);

        dispatch(&mut shop, UiAction::AddToCart { product_id: id, quantity: 1 }).unwrap();
        dispatch(&mut shop, UiAction::SetQuantity { product_id: id, quantity: 7 }).unwrap();
        assert_eq!(shop.store().line(id).unwrap().quantity, 7);

        dispatch(&mut shop, UiAction::ClearCart).unwrap();
        assert!(shop.store().cart().is_empty());
    }

    #[test]
    fn test_promo_code_toasts() {
        let (mut shop, notifier) = shop();

        dispatch(&mut shop, UiAction::ApplyPromoCode { code: "save10".to_owned() }).unwrap();
        assert_eq!(notifier.last().unwrap().message, "SAVE10 applied! 10% off");

        dispatch(&mut shop, UiAction::ApplyPromoCode { code: String::new() }).unwrap();
        assert_eq!(notifier.last().unwrap().severity, Severity::Warning);

        dispatch(&mut shop, UiAction::ApplyPromoCode { code: "NOPE".to_owned() }).unwrap();
        assert_eq!(notifier.last().unwrap().severity, Severity::Error);
    }

    #[test]
    fn test_newsletter_validation_degrades_to_toast() {
        let (mut shop, notifier) = shop();

        dispatch(
            &mut shop,
            UiAction::SubscribeNewsletter { email: "reader@example.com".to_owned() },
        )
        .unwrap();
        assert_eq!(notifier.last().unwrap().message, "Thank you for subscribing!");

        dispatch(
            &mut shop,
            UiAction::SubscribeNewsletter { email: "nope".to_owned() },
        )
        .unwrap();
        assert_eq!(notifier.last().unwrap().severity, Severity::Error);
    }

    #[test]
    fn test_contact_form() {
        let (mut shop, notifier) = shop();

        let complete = ContactForm {
            first_name: "Jane".to_owned(),
            last_name: "Doe".to_owned(),
            email: "jane@example.com".to_owned(),
            subject: "Hello".to_owned(),
            message: "Love the shop.".to_owned(),
        };
        dispatch(&mut shop, UiAction::SubmitContact(complete)).unwrap();
        assert_eq!(notifier.last().unwrap().severity, Severity::Success);

        dispatch(&mut shop, UiAction::SubmitContact(ContactForm::default())).unwrap();
        assert_eq!(notifier.last().unwrap().severity, Severity::Error);
    }

    #[test]
    fn test_move_to_wishlist_roundtrip() {
        let (mut shop, _) = shop();
        let id = ProductId::new(6);

        dispatch(&mut shop, UiAction::AddToCart { product_id: id, quantity: 2 }).unwrap();
        dispatch(&mut shop, UiAction::MoveToWishlist { product_id: id }).unwrap();

        assert!(shop.store().cart().is_empty());
        assert!(shop.store().is_in_wishlist(id));

        dispatch(&mut shop, UiAction::ToggleWishlist { product_id: id }).unwrap();
        assert!(!shop.store().is_in_wishlist(id));
    }
}
