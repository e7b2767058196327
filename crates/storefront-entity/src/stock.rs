//! Catalog item and order models.

use std::fmt;

use serde::{Deserialize, Serialize};

use storefront_core::types::ItemId;

/// A catalog entry.
///
/// Items live in the JSON stock document and are mutated in place by admin
/// updates and order fulfilment. Ids are unique and stock never goes
/// negative: a line is only fulfilled when the requested quantity fits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockItem {
    /// Unique item identifier.
    pub id: ItemId,
    /// Display name. Never empty.
    pub name: String,
    /// Unit price in dollars. Never negative.
    pub price: f64,
    /// Units currently available.
    pub stock: u32,
}

/// One requested line of an order: an item reference and a quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    /// The item being ordered.
    pub id: ItemId,
    /// Units requested. Always ≥ 1.
    pub quantity: u32,
}

/// A successfully fulfilled order line with its price snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FulfilledLine {
    /// The item that was decremented.
    pub id: ItemId,
    /// Item name at fulfilment time.
    pub name: String,
    /// Units taken from stock.
    pub quantity: u32,
    /// Unit price at fulfilment time.
    pub unit_price: f64,
    /// `quantity * unit_price`.
    pub subtotal: f64,
}

impl FulfilledLine {
    /// Receipt line as it appears in confirmation mail.
    pub fn describe(&self) -> String {
        format!(
            "{} x {} at ${} each",
            self.name, self.quantity, self.unit_price
        )
    }
}

/// A line that could not be fulfilled, with the reason.
///
/// The two cases produce distinct diagnostics so a shopper can tell an
/// unknown item apart from one that ran out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum UnfulfilledLine {
    /// No catalog entry with the requested id.
    ItemUnknown {
        /// The id that matched nothing.
        id: ItemId,
    },
    /// The catalog entry exists but holds fewer units than requested.
    InsufficientStock {
        /// Item name.
        name: String,
        /// Units requested.
        requested: u32,
        /// Units actually available.
        available: u32,
    },
}

impl fmt::Display for UnfulfilledLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ItemUnknown { id } => write!(f, "Item {id} not found"),
            Self::InsufficientStock {
                name,
                requested,
                available,
            } => write!(f, "{name} (requested {requested}, available {available})"),
        }
    }
}

/// The result of applying an order against the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderOutcome {
    /// Lines that were decremented.
    pub fulfilled: Vec<FulfilledLine>,
    /// Lines that were rejected, in request order.
    pub unfulfilled: Vec<UnfulfilledLine>,
    /// Sum of fulfilled subtotals.
    pub total_price: f64,
}

impl OrderOutcome {
    /// Diagnostics for the rejected lines, in request order.
    pub fn not_in_stock(&self) -> Vec<String> {
        self.unfulfilled.iter().map(ToString::to_string).collect()
    }
}
