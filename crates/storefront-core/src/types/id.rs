//! Newtype wrapper for catalog item identifiers.
//!
//! Item ids are small positive integers allocated sequentially by the stock
//! store (`max(existing) + 1`). Using a distinct type prevents accidentally
//! passing a quantity where an id is expected.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifier of a catalog item. Always ≥ 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u32);

impl ItemId {
    /// The first id handed out by an empty catalog.
    pub const FIRST: ItemId = ItemId(1);

    /// Return the id that follows this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }

    /// Return the inner integer value.
    pub fn as_u32(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ItemId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u32>().map(Self)
    }
}

impl From<u32> for ItemId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl From<ItemId> for u32 {
    fn from(id: ItemId) -> u32 {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_increments() {
        assert_eq!(ItemId::FIRST.next(), ItemId(2));
    }

    #[test]
    fn test_serde_transparent() {
        let id: ItemId = serde_json::from_str("7").unwrap();
        assert_eq!(id, ItemId(7));
        assert_eq!(serde_json::to_string(&id).unwrap(), "7");
    }
}
