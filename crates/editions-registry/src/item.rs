use rand::random;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::admin::AccountId;

/// Handle of an issued item. A distinct type from `CollectionId`, so an
/// item handle can never be passed where a collection handle is expected.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId([u8; 32]);

impl ItemId {
    pub fn bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Debug for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hex: String = self.0.iter().take(4).map(|b| format!("{b:02x}")).collect();
        write!(f, "Item({hex}..)")
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Generate a fresh item handle.
pub fn generate_item_id() -> ItemId {
    ItemId(random::<[u8; 32]>())
}

/// One issued copy of a collection's edition.
///
/// Metadata is copied verbatim from the parent collection at mint time and
/// never changes afterwards. The item does not record its collection handle;
/// that link lives only in the `IssuanceRecord` emitted at mint. There is no
/// burn: once issued, an item outlives even its collection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub owner: AccountId,
    pub name: String,
    pub description: String,
    pub media_url: String,
}

impl Item {
    /// Name, description, and media URL, exactly as minted.
    pub fn metadata(&self) -> (&str, &str, &str) {
        (&self.name, &self.description, &self.media_url)
    }

    /// Reassign ownership unconditionally. No recipient validation, no
    /// approval step, no event — ownership moves exactly once per call.
    pub fn transfer(&mut self, recipient: AccountId) {
        self.owner = recipient;
    }
}
