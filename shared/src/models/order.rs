//! Order Model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Order status progression
///
/// Serialized with the French labels the storefront and the admin console
/// exchange on the wire. Any status may be set to any other; the API does
/// not force forward-only transitions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum OrderStatus {
    #[default]
    #[serde(rename = "En attente")]
    Pending,
    #[serde(rename = "Confirmée")]
    Confirmed,
    #[serde(rename = "En préparation")]
    Preparing,
    #[serde(rename = "Expédiée")]
    Shipped,
    #[serde(rename = "Livrée")]
    Delivered,
}

impl OrderStatus {
    /// All statuses in progression order
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Confirmed,
        OrderStatus::Preparing,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
    ];

    /// The wire label for this status
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "En attente",
            OrderStatus::Confirmed => "Confirmée",
            OrderStatus::Preparing => "En préparation",
            OrderStatus::Shipped => "Expédiée",
            OrderStatus::Delivered => "Livrée",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Order line item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: String,
    pub name: String,
    /// Unit price in currency unit, a JSON number on the wire
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub quantity: i32,
}

/// Purchase record
///
/// The order store is the sole authority for these records; API handlers
/// and pages never mutate a local copy as the source of truth.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Unique order identifier
    pub id: String,
    pub status: OrderStatus,
    /// Total amount in currency unit (non-negative), a JSON number on the wire
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub items: Vec<OrderItem>,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_to_french_labels() {
        for status in OrderStatus::ALL {
            let json = serde_json::to_string(&status).expect("serialize status");
            assert_eq!(json, format!("\"{}\"", status.label()));
        }
    }

    #[test]
    fn unknown_status_label_is_rejected() {
        let result: Result<OrderStatus, _> = serde_json::from_str("\"Annulée\"");
        assert!(result.is_err());
    }

    #[test]
    fn order_uses_camel_case_wire_fields() {
        let order = Order {
            id: "CMD-1001".to_string(),
            status: OrderStatus::Shipped,
            total: Decimal::new(12999, 2),
            email: Some("client@example.fr".to_string()),
            items: vec![OrderItem {
                id: "SKU-1".to_string(),
                name: "Casque audio".to_string(),
                price: Decimal::new(12999, 2),
                quantity: 1,
            }],
            created_at: Utc::now(),
            tracking_number: Some("COLIS-889".to_string()),
        };

        let value = serde_json::to_value(&order).expect("serialize order");
        assert_eq!(value["status"], "Expédiée");
        assert!(value.get("createdAt").is_some());
        assert!(value.get("trackingNumber").is_some());
        assert!(value.get("created_at").is_none());
        // Monetary amounts are plain JSON numbers, not strings
        assert_eq!(value["total"].as_f64(), Some(129.99));
        assert_eq!(value["items"][0]["price"].as_f64(), Some(129.99));
    }

    #[test]
    fn money_survives_a_wire_round_trip() {
        let order = Order {
            id: "CMD-1003".to_string(),
            status: OrderStatus::Confirmed,
            total: Decimal::new(8447, 2),
            email: None,
            items: vec![],
            created_at: Utc::now(),
            tracking_number: None,
        };

        let json = serde_json::to_string(&order).expect("serialize order");
        let back: Order = serde_json::from_str(&json).expect("deserialize order");
        assert_eq!(back.total, order.total);
        assert_eq!(back.created_at, order.created_at);
    }

    #[test]
    fn optional_fields_are_omitted_when_absent() {
        let order = Order {
            id: "CMD-1002".to_string(),
            status: OrderStatus::Pending,
            total: Decimal::ZERO,
            email: None,
            items: vec![],
            created_at: Utc::now(),
            tracking_number: None,
        };

        let value = serde_json::to_value(&order).expect("serialize order");
        assert!(value.get("email").is_none());
        assert!(value.get("trackingNumber").is_none());
    }
}
