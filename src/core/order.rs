//! Order record and its fixed value domain

use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::fmt;
use std::ops::RangeInclusive;

/// Range the order identifier is drawn from
pub const ORDER_ID_RANGE: RangeInclusive<u32> = 1..=10_000;

/// Range the quantity is drawn from
pub const QUANTITY_RANGE: RangeInclusive<u32> = 1..=5;

/// Lower price bound, in cents
pub const MIN_PRICE_CENTS: i64 = 1_000;

/// Upper price bound, in cents
pub const MAX_PRICE_CENTS: i64 = 50_000;

/// Fractional digits kept on a price
pub const PRICE_SCALE: u32 = 2;

/// Name of the key attribute in the table
pub const KEY_ATTRIBUTE: &str = "orderId";

/// Products an order can be placed for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Product {
    Laptop,
    Phone,
    Tablet,
    Headphones,
    Charger,
}

impl Product {
    /// Every product, in declaration order
    pub const ALL: [Product; 5] = [
        Product::Laptop,
        Product::Phone,
        Product::Tablet,
        Product::Headphones,
        Product::Charger,
    ];

    /// Name stored in the `product_name` attribute
    pub fn as_str(&self) -> &'static str {
        match self {
            Product::Laptop => "Laptop",
            Product::Phone => "Phone",
            Product::Tablet => "Tablet",
            Product::Headphones => "Headphones",
            Product::Charger => "Charger",
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single attribute value as it is written to the table
///
/// Numbers keep their decimal string form so that prices never pass
/// through binary floating point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attribute {
    S(String),
    N(String),
}

impl Attribute {
    pub fn as_s(&self) -> Option<&str> {
        match self {
            Attribute::S(s) => Some(s.as_str()),
            Attribute::N(_) => None,
        }
    }

    pub fn as_n(&self) -> Option<&str> {
        match self {
            Attribute::N(n) => Some(n.as_str()),
            Attribute::S(_) => None,
        }
    }
}

/// Attribute map of one table item, keyed by attribute name
pub type OrderItem = BTreeMap<String, Attribute>;

/// A synthetic gadget order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRecord {
    pub order_id: String,
    pub product_name: Product,
    pub quantity: u32,
    pub price: Decimal,
}

impl OrderRecord {
    pub fn new(order_id: impl Into<String>, product_name: Product, quantity: u32, price: Decimal) -> Self {
        Self {
            order_id: order_id.into(),
            product_name,
            quantity,
            price,
        }
    }

    /// Project the record onto exactly the four attributes of a table item
    pub fn attributes(&self) -> OrderItem {
        OrderItem::from([
            (KEY_ATTRIBUTE.to_string(), Attribute::S(self.order_id.clone())),
            (
                "product_name".to_string(),
                Attribute::S(self.product_name.as_str().to_string()),
            ),
            ("quantity".to_string(), Attribute::N(self.quantity.to_string())),
            ("price".to_string(), Attribute::N(self.price.to_string())),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_attributes_has_exactly_four_fields() {
        let record = OrderRecord::new("42", Product::Phone, 3, Decimal::from_str("199.99").unwrap());
        let item = record.attributes();

        assert_eq!(item.len(), 4);
        assert_eq!(item["orderId"], Attribute::S("42".to_string()));
        assert_eq!(item["product_name"], Attribute::S("Phone".to_string()));
        assert_eq!(item["quantity"], Attribute::N("3".to_string()));
        assert_eq!(item["price"], Attribute::N("199.99".to_string()));
    }

    #[test]
    fn test_price_keeps_exact_decimal_text() {
        // 0.1 + 0.2 style artifacts must never reach the table
        let price = Decimal::from_str("0.10").unwrap() + Decimal::from_str("0.20").unwrap();
        let record = OrderRecord::new("1", Product::Charger, 1, price);

        assert_eq!(record.attributes()["price"].as_n(), Some("0.30"));
    }

    #[test]
    fn test_product_names() {
        let names: Vec<&str> = Product::ALL.iter().map(Product::as_str).collect();
        assert_eq!(names, ["Laptop", "Phone", "Tablet", "Headphones", "Charger"]);
        assert_eq!(Product::Headphones.to_string(), "Headphones");
    }
}
