//! Catalog item type.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ItemId;

/// A purchasable item in the static catalog.
///
/// Immutable after load; the catalog fixture is read once at startup.
/// Prices serialize as plain JSON numbers (the frontend expects `31.9`,
/// not `"31.90"`), but are carried internally as [`Decimal`] to keep
/// money arithmetic exact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: ItemId,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub details: String,
    /// Relative path to the product image served by the frontend.
    pub image: String,
    pub category: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_catalog_item_deserializes_from_fixture_shape() {
        let json = r#"{
            "id": "0",
            "name": "QUEIJO PALITO",
            "price": 31.90,
            "details": "450g - queijo em palito artesanal",
            "image": "assets/imagens/tradicionais/foto1.png",
            "category": "Queijos Tradicionais"
        }"#;

        let item: CatalogItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, ItemId::from("0"));
        assert_eq!(item.name, "QUEIJO PALITO");
        assert_eq!(item.price, dec!(31.90));
        assert_eq!(item.category, "Queijos Tradicionais");
    }

    #[test]
    fn test_catalog_item_price_serializes_as_number() {
        let item = CatalogItem {
            id: ItemId::from("1"),
            name: "QUEIJO TRANÇA".to_string(),
            price: dec!(31.90),
            details: "450g".to_string(),
            image: "assets/foto.png".to_string(),
            category: "Queijos Tradicionais".to_string(),
        };

        let value = serde_json::to_value(&item).unwrap();
        assert!(value["price"].is_number());
        assert_eq!(value["name"], "QUEIJO TRANÇA");
    }
}
