//! First-run demo data
//!
//! The storefront is not wired up in this repository, so a fresh store is
//! seeded with the demo orders the admin console ships with.

use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use shared::models::order::{Order, OrderItem, OrderStatus};

use super::{OrderStore, StoreResult};

/// Seed the store with demo orders when it is empty
///
/// Returns the number of orders inserted (0 when the store already holds
/// data).
pub fn seed_if_empty(store: &OrderStore) -> StoreResult<usize> {
    if !store.is_empty()? {
        return Ok(0);
    }

    let orders = demo_orders();
    for order in &orders {
        store.insert(order)?;
    }
    tracing::info!(count = orders.len(), "Seeded order store with demo data");
    Ok(orders.len())
}

/// The demo orders shown on a fresh console
pub fn demo_orders() -> Vec<Order> {
    let now = Utc::now();
    vec![
        Order {
            id: "CMD-1042".to_string(),
            status: OrderStatus::Pending,
            total: Decimal::new(12999, 2),
            email: Some("camille.fournier@orange.fr".to_string()),
            items: vec![OrderItem {
                id: "SKU-701".to_string(),
                name: "Casque sans fil ANC".to_string(),
                price: Decimal::new(12999, 2),
                quantity: 1,
            }],
            created_at: now - Duration::hours(3),
            tracking_number: None,
        },
        Order {
            id: "CMD-1041".to_string(),
            status: OrderStatus::Confirmed,
            total: Decimal::new(8447, 2),
            email: Some("mehdi.bouaziz@gmail.com".to_string()),
            items: vec![
                OrderItem {
                    id: "SKU-224".to_string(),
                    name: "Clavier mécanique 65%".to_string(),
                    price: Decimal::new(6950, 2),
                    quantity: 1,
                },
                OrderItem {
                    id: "SKU-310".to_string(),
                    name: "Tapis de souris XL".to_string(),
                    price: Decimal::new(1497, 2),
                    quantity: 1,
                },
            ],
            created_at: now - Duration::hours(28),
            tracking_number: None,
        },
        Order {
            id: "CMD-1039".to_string(),
            status: OrderStatus::Preparing,
            total: Decimal::new(24900, 2),
            email: None,
            items: vec![OrderItem {
                id: "SKU-118".to_string(),
                name: "Montre connectée Sport".to_string(),
                price: Decimal::new(24900, 2),
                quantity: 1,
            }],
            created_at: now - Duration::days(2),
            tracking_number: None,
        },
        Order {
            id: "CMD-1036".to_string(),
            status: OrderStatus::Shipped,
            total: Decimal::new(5980, 2),
            email: Some("a.lemoine@laposte.net".to_string()),
            items: vec![OrderItem {
                id: "SKU-402".to_string(),
                name: "Chargeur USB-C 65W".to_string(),
                price: Decimal::new(2990, 2),
                quantity: 2,
            }],
            created_at: now - Duration::days(4),
            tracking_number: Some("6A12345678901".to_string()),
        },
        Order {
            id: "CMD-1031".to_string(),
            status: OrderStatus::Delivered,
            total: Decimal::new(38950, 2),
            email: Some("sophie.marechal@free.fr".to_string()),
            items: vec![
                OrderItem {
                    id: "SKU-009".to_string(),
                    name: "Liseuse 7 pouces".to_string(),
                    price: Decimal::new(18990, 2),
                    quantity: 1,
                },
                OrderItem {
                    id: "SKU-087".to_string(),
                    name: "Enceinte nomade".to_string(),
                    price: Decimal::new(9980, 2),
                    quantity: 2,
                },
            ],
            created_at: now - Duration::days(9),
            tracking_number: Some("6A98765432109".to_string()),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeding_is_one_shot() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let store = OrderStore::open(dir.path().join("orders.redb")).expect("open store");

        let first = seed_if_empty(&store).unwrap();
        assert_eq!(first, demo_orders().len());

        let second = seed_if_empty(&store).unwrap();
        assert_eq!(second, 0);
        assert_eq!(store.read_all().unwrap().len(), first);
    }

    #[test]
    fn demo_orders_have_non_negative_totals() {
        for order in demo_orders() {
            assert!(order.total >= rust_decimal::Decimal::ZERO, "{}", order.id);
        }
    }
}
