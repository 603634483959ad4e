//! redb-based order store
//!
//! # Tables
//!
//! | Table | Key | Value | Purpose |
//! |-------|-----|-------|---------|
//! | `orders` | sequence (u64) | JSON-serialized `Order` | Records in insertion order |
//! | `order_index` | order id | sequence | Lookup by identifier |
//! | `sequence_counter` | `"seq"` | u64 | Next insertion sequence |
//!
//! Records are keyed by a monotonic sequence so `read_all` returns them in
//! the order they entered the store. A status update runs in a single write
//! transaction: the record is read, mutated and written back before commit,
//! so a reader never observes a partial write. Two racing updates to the
//! same identifier serialize at the storage layer in arbitrary order; the
//! later commit wins and no lost-update detection is performed.

use redb::{Database, ReadableDatabase, ReadableTable, ReadableTableMetadata, TableDefinition};
use rust_decimal::Decimal;
use shared::models::order::{Order, OrderStatus};
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// Table for order records: key = insertion sequence, value = JSON-serialized Order
const ORDERS_TABLE: TableDefinition<u64, &[u8]> = TableDefinition::new("orders");

/// Table for identifier lookup: key = order id, value = insertion sequence
const ORDER_INDEX_TABLE: TableDefinition<&str, u64> = TableDefinition::new("order_index");

/// Table for the sequence counter: key = "seq", value = u64
const SEQUENCE_TABLE: TableDefinition<&str, u64> = TableDefinition::new("sequence_counter");

const SEQUENCE_KEY: &str = "seq";

/// Store errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid order: {0}")]
    InvalidOrder(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Order store backed by redb
#[derive(Clone)]
pub struct OrderStore {
    db: Arc<Database>,
}

impl OrderStore {
    /// Open (or create) the store at the given path
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let db = Database::create(path)?;
        let store = Self { db: Arc::new(db) };
        store.ensure_tables()?;
        Ok(store)
    }

    /// Create all tables so later read transactions never miss them
    fn ensure_tables(&self) -> StoreResult<()> {
        let txn = self.db.begin_write()?;
        {
            txn.open_table(ORDERS_TABLE)?;
            txn.open_table(ORDER_INDEX_TABLE)?;
            txn.open_table(SEQUENCE_TABLE)?;
        }
        txn.commit()?;
        Ok(())
    }

    /// Whether the store holds no orders
    pub fn is_empty(&self) -> StoreResult<bool> {
        let txn = self.db.begin_read()?;
        let table = txn.open_table(ORDERS_TABLE)?;
        Ok(table.is_empty()?)
    }

    /// Insert a new order at the end of the sequence
    ///
    /// Rejects duplicate identifiers and negative totals.
    pub fn insert(&self, order: &Order) -> StoreResult<()> {
        if order.total < Decimal::ZERO {
            return Err(StoreError::InvalidOrder(format!(
                "order {} has a negative total",
                order.id
            )));
        }

        let txn = self.db.begin_write()?;
        {
            let mut index = txn.open_table(ORDER_INDEX_TABLE)?;
            if index.get(order.id.as_str())?.is_some() {
                return Err(StoreError::InvalidOrder(format!(
                    "duplicate order id {}",
                    order.id
                )));
            }

            let mut sequences = txn.open_table(SEQUENCE_TABLE)?;
            let seq = sequences
                .get(SEQUENCE_KEY)?
                .map(|v| v.value())
                .unwrap_or(0)
                + 1;
            sequences.insert(SEQUENCE_KEY, seq)?;
            index.insert(order.id.as_str(), seq)?;

            let mut orders = txn.open_table(ORDERS_TABLE)?;
            let bytes = serde_json::to_vec(order)?;
            orders.insert(seq, bytes.as_slice())?;
        }
        txn.commit()?;
        Ok(())
    }

    /// Snapshot of all orders, in insertion order
    pub fn read_all(&self) -> StoreResult<Vec<Order>> {
        let txn = self.db.begin_read()?;
        let table = txn.open_table(ORDERS_TABLE)?;

        let mut orders = Vec::with_capacity(table.len()? as usize);
        for entry in table.iter()? {
            let (_, value) = entry?;
            orders.push(serde_json::from_slice(value.value())?);
        }
        Ok(orders)
    }

    /// Look up a single order by identifier
    pub fn find_by_id(&self, id: &str) -> StoreResult<Option<Order>> {
        let txn = self.db.begin_read()?;
        let index = txn.open_table(ORDER_INDEX_TABLE)?;

        let Some(seq) = index.get(id)?.map(|v| v.value()) else {
            return Ok(None);
        };

        let orders = txn.open_table(ORDERS_TABLE)?;
        let Some(guard) = orders.get(seq)? else {
            return Ok(None);
        };
        Ok(Some(serde_json::from_slice(guard.value())?))
    }

    /// Set the status of the order with the given identifier
    ///
    /// Returns the updated record, or `None` when no order matches. The
    /// read-mutate-write cycle happens inside one write transaction, so the
    /// update is atomic; last writer wins between racing callers.
    pub fn update_status(&self, id: &str, status: OrderStatus) -> StoreResult<Option<Order>> {
        let txn = self.db.begin_write()?;
        let updated = {
            let index = txn.open_table(ORDER_INDEX_TABLE)?;
            let seq = match index.get(id)? {
                Some(guard) => guard.value(),
                None => {
                    // Dropping the transaction aborts it; nothing was written.
                    return Ok(None);
                }
            };

            let mut orders = txn.open_table(ORDERS_TABLE)?;
            let mut order: Order = {
                let guard = orders.get(seq)?.ok_or_else(|| {
                    StoreError::InvalidOrder(format!("index entry without record for {id}"))
                })?;
                serde_json::from_slice(guard.value())?
            };

            order.status = status;
            let bytes = serde_json::to_vec(&order)?;
            orders.insert(seq, bytes.as_slice())?;
            order
        };
        txn.commit()?;
        Ok(Some(updated))
    }
}
