//! Order message composition.
//!
//! Turns a submitted list of cart lines into the pre-filled WhatsApp
//! message the store receives, and wraps it in a `wa.me` deep link.
//! Composing an order reads nothing and writes nothing: the cart store is
//! untouched.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::types::CartLine;

/// Order composition errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OrderError {
    /// The submitted order contained no lines.
    #[error("order has no items")]
    Empty,
}

/// Build the human-readable order message.
///
/// One line per item as `- {name} | R$ {price} x {qty} = R$ {subtotal}`,
/// framed by a greeting and a bold total line. Prices display with two
/// decimal places; the total sums unrounded subtotals and rounds once at
/// the end, so line rounding never compounds.
///
/// # Errors
///
/// Returns [`OrderError::Empty`] if `items` is empty.
pub fn compose_message(items: &[CartLine]) -> Result<String, OrderError> {
    if items.is_empty() {
        return Err(OrderError::Empty);
    }

    let mut lines = vec!["Olá! Quero fazer um pedido:\n".to_string()];
    let mut total = Decimal::ZERO;

    for item in items {
        let subtotal = item.price * Decimal::from(item.qty);
        total += subtotal;
        lines.push(format!(
            "- {} | R$ {:.2} x {} = R$ {:.2}",
            item.name, item.price, item.qty, subtotal
        ));
    }

    lines.push(String::new());
    lines.push(format!("*Total do pedido: R$ {:.2}*", total.round_dp(2)));

    Ok(lines.join("\n"))
}

/// Build the `wa.me` deep link carrying the percent-encoded message.
///
/// `phone` is a configured constant, never user input.
#[must_use]
pub fn whatsapp_url(phone: &str, message: &str) -> String {
    format!("https://wa.me/{phone}?text={}", urlencoding::encode(message))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::ItemId;
    use rust_decimal_macros::dec;

    fn line(name: &str, price: Decimal, qty: u32) -> CartLine {
        CartLine {
            id: ItemId::from("1"),
            name: name.to_string(),
            price,
            qty,
            image: String::new(),
        }
    }

    #[test]
    fn test_empty_order_is_rejected() {
        assert_eq!(compose_message(&[]), Err(OrderError::Empty));
    }

    #[test]
    fn test_total_sums_unrounded_subtotals() {
        let items = [
            line("QUEIJO PALITO", dec!(31.90), 2),
            line("QUEIJO COALHO", dec!(10.00), 1),
        ];

        let message = compose_message(&items).unwrap();
        assert!(message.contains("R$ 73.80"));
        assert!(message.contains("*Total do pedido: R$ 73.80*"));
    }

    #[test]
    fn test_message_layout() {
        let items = [line("QUEIJO TRANÇA", dec!(31.90), 1)];
        let message = compose_message(&items).unwrap();

        let expected = "Olá! Quero fazer um pedido:\n\
                        \n\
                        - QUEIJO TRANÇA | R$ 31.90 x 1 = R$ 31.90\n\
                        \n\
                        *Total do pedido: R$ 31.90*";
        assert_eq!(message, expected);
    }

    #[test]
    fn test_prices_display_with_two_decimal_places() {
        let items = [line("KIT QUATRO QUEIJOS", dec!(40), 1)];
        let message = compose_message(&items).unwrap();
        assert!(message.contains("R$ 40.00 x 1 = R$ 40.00"));
    }

    #[test]
    fn test_whatsapp_url_encodes_message() {
        let url = whatsapp_url("5537991243408", "Olá! Quero fazer um pedido:");
        assert!(url.starts_with("https://wa.me/5537991243408?text="));
        // Spaces and non-ASCII are percent-encoded
        assert!(url.contains("Ol%C3%A1"));
        assert!(url.contains("%20"));
        assert!(!url.contains(' '));
    }

    #[test]
    fn test_whatsapp_url_encodes_newlines_and_asterisks() {
        let url = whatsapp_url("5537991243408", "a\n*b*");
        assert!(url.ends_with("text=a%0A%2Ab%2A"));
    }
}
