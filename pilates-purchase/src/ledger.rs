use pilates_store::codec;
use pilates_store::{KeyValueStore, StoreError};
use tracing::debug;

use crate::models::PurchaseRecord;

fn purchases_key(login: &str) -> String {
    format!("pilates-core:purchases:{}", login)
}

/// Append-only purchase history, one JSON array per member login.
///
/// Clones share the underlying store, so every component holding a handle
/// sees the same history.
#[derive(Clone)]
pub struct PurchaseLedger<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> PurchaseLedger<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// All purchases recorded for `login`, newest first. A missing or
    /// corrupt payload reads as an empty history; malformed records are
    /// dropped individually.
    pub fn list_purchases(&self, login: &str) -> Vec<PurchaseRecord> {
        match self.store.get(&purchases_key(login)) {
            Some(raw) => codec::decode_array(&raw, "purchase ledger"),
            None => Vec::new(),
        }
    }

    /// Records a plan purchase for `login` and returns the stored record.
    /// Storage write failures propagate; there is no dedup and no size
    /// bound.
    pub fn add_purchase(&self, login: &str, plan_id: &str) -> Result<PurchaseRecord, PurchaseError> {
        let record = PurchaseRecord::now(plan_id);

        let mut purchases = self.list_purchases(login);
        purchases.insert(0, record.clone());

        let encoded = serde_json::to_string(&purchases)?;
        self.store.set(&purchases_key(login), &encoded)?;
        debug!("Recorded purchase of {} for {}", plan_id, login);
        Ok(record)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PurchaseError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("failed to encode purchase history: {0}")]
    Encode(#[from] serde_json::Error),
}
