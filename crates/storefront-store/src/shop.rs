//! The shop store: catalog plus ban list over one persisted document.

use std::sync::Arc;

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{error, info, warn};

use storefront_core::error::AppError;
use storefront_core::result::AppResult;
use storefront_core::types::ItemId;
use storefront_entity::stock::{FulfilledLine, OrderLine, OrderOutcome, StockItem, UnfulfilledLine};
use storefront_entity::user::normalize_email;

use crate::backend::StoreBackend;

/// Shape of the persisted JSON document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct StoreDocument {
    /// The catalog, in insertion order.
    #[serde(default)]
    items: Vec<StockItem>,
    /// Normalized banned addresses.
    #[serde(rename = "bannedEmails", default)]
    banned_emails: Vec<String>,
}

/// The process-wide stock store and ban list.
///
/// Holds the catalog in memory and rewrites the backing document wholesale
/// after every mutation. A mutation whose persist fails is rolled back so
/// the in-memory state never drifts ahead of the document silently.
pub struct ShopStore {
    backend: Arc<dyn StoreBackend>,
    state: RwLock<StoreDocument>,
}

impl ShopStore {
    /// Open the store: load the persisted document, seeding the default
    /// catalog on first run.
    ///
    /// A document that exists but cannot be parsed is logged and replaced
    /// with an empty catalog in memory; the store never refuses to start.
    pub async fn open(backend: Arc<dyn StoreBackend>) -> AppResult<Self> {
        let document = match backend.read().await? {
            None => {
                let seeded = StoreDocument {
                    items: default_catalog(),
                    banned_emails: Vec::new(),
                };
                let data = serialize_document(&seeded)?;
                backend.write(data).await?;
                info!(items = seeded.items.len(), "Seeded default catalog");
                seeded
            }
            Some(raw) => match serde_json::from_slice::<StoreDocument>(&raw) {
                Ok(doc) => doc,
                Err(e) => {
                    error!(error = %e, "Stock document is corrupt, starting with empty catalog");
                    StoreDocument::default()
                }
            },
        };

        Ok(Self {
            backend,
            state: RwLock::new(document),
        })
    }

    /// Ordered snapshot of the catalog.
    pub async fn items(&self) -> Vec<StockItem> {
        self.state.read().await.items.clone()
    }

    /// Apply an order: decrement each line that fits, reject the rest.
    ///
    /// The catalog is persisted before success is reported. If the persist
    /// fails, the decrements are rolled back and the error propagates, so a
    /// fulfilled line is never lost to a write failure.
    pub async fn apply_order(&self, lines: &[OrderLine]) -> AppResult<OrderOutcome> {
        let mut state = self.state.write().await;
        let snapshot = state.items.clone();

        let mut fulfilled = Vec::new();
        let mut unfulfilled = Vec::new();
        let mut total_price = 0.0;

        for line in lines {
            match state.items.iter_mut().find(|item| item.id == line.id) {
                None => unfulfilled.push(UnfulfilledLine::ItemUnknown { id: line.id }),
                Some(item) => {
                    if item.stock >= line.quantity {
                        item.stock -= line.quantity;
                        let subtotal = item.price * f64::from(line.quantity);
                        total_price += subtotal;
                        fulfilled.push(FulfilledLine {
                            id: item.id,
                            name: item.name.clone(),
                            quantity: line.quantity,
                            unit_price: item.price,
                            subtotal,
                        });
                    } else {
                        unfulfilled.push(UnfulfilledLine::InsufficientStock {
                            name: item.name.clone(),
                            requested: line.quantity,
                            available: item.stock,
                        });
                    }
                }
            }
        }

        if !fulfilled.is_empty() {
            if let Err(e) = self.persist(&state).await {
                state.items = snapshot;
                return Err(e);
            }
        }

        Ok(OrderOutcome {
            fulfilled,
            unfulfilled,
            total_price,
        })
    }

    /// Insert or update a catalog entry.
    ///
    /// With no id, the next id (`max + 1`, or 1 for an empty catalog) is
    /// allocated and the item appended. With an id, the existing entry is
    /// replaced in place; an unknown id fails with NotFound.
    pub async fn upsert(
        &self,
        id: Option<ItemId>,
        name: &str,
        price: f64,
        stock: u32,
    ) -> AppResult<StockItem> {
        validate_fields(name, price)?;

        let mut state = self.state.write().await;
        let snapshot = state.items.clone();

        let item = match id {
            None => {
                let next = state
                    .items
                    .iter()
                    .map(|item| item.id)
                    .max()
                    .map_or(ItemId::FIRST, ItemId::next);
                let item = StockItem {
                    id: next,
                    name: name.trim().to_string(),
                    price,
                    stock,
                };
                state.items.push(item.clone());
                item
            }
            Some(id) => {
                let slot = state
                    .items
                    .iter_mut()
                    .find(|item| item.id == id)
                    .ok_or_else(|| AppError::not_found(format!("Item {id} not found")))?;
                slot.name = name.trim().to_string();
                slot.price = price;
                slot.stock = stock;
                slot.clone()
            }
        };

        if let Err(e) = self.persist(&state).await {
            state.items = snapshot;
            return Err(e);
        }

        Ok(item)
    }

    /// Delete a catalog entry by id.
    pub async fn remove(&self, id: ItemId) -> AppResult<()> {
        let mut state = self.state.write().await;

        let position = state
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or_else(|| AppError::not_found(format!("Item {id} not found")))?;

        let removed = state.items.remove(position);
        if let Err(e) = self.persist(&state).await {
            state.items.insert(position, removed);
            return Err(e);
        }

        Ok(())
    }

    /// Case-insensitive ban membership test.
    pub async fn is_banned(&self, email: &str) -> bool {
        let normalized = normalize_email(email);
        self.state
            .read()
            .await
            .banned_emails
            .iter()
            .any(|banned| banned == &normalized)
    }

    /// Add an address to the ban list. Returns `true` when newly added.
    ///
    /// Banning an already banned address is a no-op (nothing is rewritten).
    pub async fn ban(&self, email: &str) -> AppResult<bool> {
        let normalized = normalize_email(email);
        let mut state = self.state.write().await;

        if state.banned_emails.iter().any(|b| b == &normalized) {
            return Ok(false);
        }

        state.banned_emails.push(normalized.clone());
        if let Err(e) = self.persist(&state).await {
            state.banned_emails.pop();
            return Err(e);
        }

        warn!(email = %normalized, "Banned identifier");
        Ok(true)
    }

    /// Current ban list snapshot.
    pub async fn banned_emails(&self) -> Vec<String> {
        self.state.read().await.banned_emails.clone()
    }

    /// Rewrite the whole document.
    async fn persist(&self, state: &StoreDocument) -> AppResult<()> {
        let data = serialize_document(state)?;
        self.backend.write(data).await
    }
}

fn serialize_document(document: &StoreDocument) -> AppResult<Bytes> {
    let data = serde_json::to_vec_pretty(document)?;
    Ok(Bytes::from(data))
}

/// Field validation applied before any catalog mutation.
fn validate_fields(name: &str, price: f64) -> AppResult<()> {
    if name.trim().is_empty() {
        return Err(AppError::validation("Item name must not be empty"));
    }
    if !price.is_finite() || price < 0.0 {
        return Err(AppError::validation("Item price must be a non-negative number"));
    }
    Ok(())
}

/// The catalog a brand-new store starts with.
fn default_catalog() -> Vec<StockItem> {
    vec![
        StockItem {
            id: ItemId(1),
            name: "Band-Aid".to_string(),
            price: 4.99,
            stock: 20,
        },
        StockItem {
            id: ItemId(2),
            name: "Heating Pad".to_string(),
            price: 35.0,
            stock: 3,
        },
        StockItem {
            id: ItemId(3),
            name: "Digital Thermometer".to_string(),
            price: 12.5,
            stock: 10,
        },
        StockItem {
            id: ItemId(4),
            name: "Ibuprofen 200mg".to_string(),
            price: 8.25,
            stock: 15,
        },
    ]
}
