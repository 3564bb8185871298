use rand::random;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Handle of a collection. Random unique ID, immutable for the life of
/// the collection.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CollectionId([u8; 32]);

impl CollectionId {
    pub fn bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Debug for CollectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hex: String = self.0.iter().take(4).map(|b| format!("{b:02x}")).collect();
        write!(f, "Collection({hex}..)")
    }
}

impl fmt::Display for CollectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Generate a fresh collection handle.
pub fn generate_collection_id() -> CollectionId {
    CollectionId(random::<[u8; 32]>())
}

/// A bounded-edition series. `total_supply` is fixed at creation; `minted`
/// only ever moves toward it, one step per successful mint.
///
/// A `total_supply` of zero is accepted as-is: the collection is exhausted
/// from birth and can never mint (display-only series).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    pub id: CollectionId,
    pub name: String,
    pub description: String,
    pub media_url: String,
    /// Maximum number of items this collection may ever issue.
    pub total_supply: u64,
    /// Items issued so far. Invariant: `minted <= total_supply`.
    pub minted: u64,
    /// Listed price, metadata only — no settlement happens in the core.
    pub price: u64,
}

impl Collection {
    /// Copies still available to mint: `total_supply - minted`.
    pub fn remaining_supply(&self) -> u64 {
        self.total_supply - self.minted
    }

    /// Whether the edition is fully issued. Exhaustion is terminal;
    /// there is no restock operation.
    pub fn is_exhausted(&self) -> bool {
        self.minted >= self.total_supply
    }
}
