use std::collections::HashMap;
use tracing::debug;

use crate::admin::{AccountId, AdminPolicy};
use crate::collection::{Collection, CollectionId, generate_collection_id};
use crate::error::RegistryError;
use crate::event::{IssuanceRecord, IssuanceSink};
use crate::item::{Item, generate_item_id};

type Result<T> = std::result::Result<T, RegistryError>;

/// Registry of live collection handles plus the issuance path.
///
/// Generic over the notification sink. The registry holds no lock: the
/// host environment must serialize mutating calls against one instance,
/// which `&mut self` on every mutation makes structural in-process.
/// Each operation is a single synchronous step with no suspension points;
/// failures return immediately with no partial state commit.
pub struct EditionRegistry<S: IssuanceSink> {
    policy: AdminPolicy,
    collections: HashMap<CollectionId, Collection>,
    sink: S,
}

impl<S: IssuanceSink> EditionRegistry<S> {
    /// Create a registry for one deployment: a fixed administrator
    /// identity and an injected issuance sink.
    pub fn new(admin: AccountId, sink: S) -> Self {
        Self {
            policy: AdminPolicy::new(admin),
            collections: HashMap::new(),
            sink,
        }
    }

    pub fn policy(&self) -> &AdminPolicy {
        &self.policy
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    // -----------------------------------------------------------------------
    // Collection management (admin-gated)
    // -----------------------------------------------------------------------

    /// Create a bounded-edition collection and return its fresh handle.
    ///
    /// Admin only. `total_supply` is accepted as given, zero included —
    /// a zero-supply collection simply can never mint.
    pub fn create_collection(
        &mut self,
        name: String,
        description: String,
        media_url: String,
        total_supply: u64,
        price: u64,
        caller: AccountId,
    ) -> Result<CollectionId> {
        if !self.policy.is_admin(&caller) {
            return Err(RegistryError::NotAdmin);
        }
        let id = generate_collection_id();
        self.collections.insert(
            id,
            Collection {
                id,
                name,
                description,
                media_url,
                total_supply,
                minted: 0,
                price,
            },
        );
        debug!(collection = %id, total_supply, price, "collection created");
        Ok(id)
    }

    /// Retire a collection handle and hand its final value back to the
    /// caller. Admin only.
    ///
    /// Deletion is allowed at any `minted` count: issued items never
    /// reference the collection by ownership, so they stay valid after it
    /// is gone. The handle itself can never be revived.
    pub fn delete_collection(
        &mut self,
        id: &CollectionId,
        caller: AccountId,
    ) -> Result<Collection> {
        if !self.policy.is_admin(&caller) {
            return Err(RegistryError::NotAdmin);
        }
        let collection = self
            .collections
            .remove(id)
            .ok_or(RegistryError::UnknownCollection)?;
        debug!(collection = %id, minted = collection.minted, "collection deleted");
        Ok(collection)
    }

    /// Overwrite the listed price. Admin only, no bounds check — price is
    /// metadata and zero is as valid as any other value.
    pub fn update_price(
        &mut self,
        id: &CollectionId,
        new_price: u64,
        caller: AccountId,
    ) -> Result<()> {
        if !self.policy.is_admin(&caller) {
            return Err(RegistryError::NotAdmin);
        }
        let collection = self
            .collections
            .get_mut(id)
            .ok_or(RegistryError::UnknownCollection)?;
        collection.price = new_price;
        debug!(collection = %id, new_price, "price updated");
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Reads (no access control)
    // -----------------------------------------------------------------------

    pub fn collection(&self, id: &CollectionId) -> Option<&Collection> {
        self.collections.get(id)
    }

    /// Copies still available to mint.
    pub fn remaining_supply(&self, id: &CollectionId) -> Result<u64> {
        let collection = self
            .collections
            .get(id)
            .ok_or(RegistryError::UnknownCollection)?;
        Ok(collection.remaining_supply())
    }

    /// Listed price.
    pub fn price(&self, id: &CollectionId) -> Result<u64> {
        let collection = self
            .collections
            .get(id)
            .ok_or(RegistryError::UnknownCollection)?;
        Ok(collection.price)
    }

    // -----------------------------------------------------------------------
    // Issuance (open to any caller)
    // -----------------------------------------------------------------------

    /// Mint one item against the collection's supply cap.
    ///
    /// No access control — any caller may mint while supply remains; the
    /// administrator has no special minting privilege. On success the
    /// counter moves by exactly 1, one `IssuanceRecord` goes to the sink,
    /// and the item (owner = caller, metadata copied verbatim from the
    /// collection) is returned for the caller to hold or pass on.
    ///
    /// The supply check runs before any mutation: an exhausted collection
    /// yields `SupplyExhausted` with `minted` untouched, however many
    /// times it is retried.
    pub fn mint_item(&mut self, id: &CollectionId, caller: AccountId) -> Result<Item> {
        let collection = self
            .collections
            .get_mut(id)
            .ok_or(RegistryError::UnknownCollection)?;
        if collection.is_exhausted() {
            return Err(RegistryError::SupplyExhausted);
        }
        collection.minted += 1;
        let item = Item {
            id: generate_item_id(),
            owner: caller,
            name: collection.name.clone(),
            description: collection.description.clone(),
            media_url: collection.media_url.clone(),
        };
        debug!(
            collection = %id,
            item = %item.id,
            minted = collection.minted,
            "item minted"
        );
        // Emission happens strictly after the counter commit; the sink
        // cannot roll it back.
        self.sink.notify(IssuanceRecord {
            item: item.id,
            collection: *id,
            minter: caller,
        });
        Ok(item)
    }

    /// Mint and hand the item straight to `recipient`. Same semantics as
    /// `mint_item` plus one ownership reassignment; the record still names
    /// `caller` as the minter.
    pub fn mint_item_to(
        &mut self,
        id: &CollectionId,
        caller: AccountId,
        recipient: AccountId,
    ) -> Result<Item> {
        let mut item = self.mint_item(id, caller)?;
        item.transfer(recipient);
        Ok(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::RecordingSink;

    const ADMIN: AccountId = [1u8; 32];
    const MINTER: AccountId = [2u8; 32];

    fn registry() -> EditionRegistry<RecordingSink> {
        EditionRegistry::new(ADMIN, RecordingSink::new())
    }

    fn create(registry: &mut EditionRegistry<RecordingSink>, supply: u64) -> CollectionId {
        registry
            .create_collection(
                "Lunar Series".to_string(),
                "Numbered lunar prints".to_string(),
                "ipfs://lunar".to_string(),
                supply,
                50,
                ADMIN,
            )
            .unwrap()
    }

    #[test]
    fn test_create_collection_starts_unminted() {
        let mut registry = registry();
        let id = create(&mut registry, 10);
        let collection = registry.collection(&id).unwrap();
        assert_eq!(collection.minted, 0);
        assert_eq!(collection.total_supply, 10);
        assert_eq!(registry.remaining_supply(&id).unwrap(), 10);
    }

    #[test]
    fn test_create_collection_rejects_non_admin() {
        let mut registry = registry();
        let result = registry.create_collection(
            "x".to_string(),
            "y".to_string(),
            "z".to_string(),
            10,
            1,
            MINTER,
        );
        assert!(matches!(result, Err(RegistryError::NotAdmin)));
    }

    #[test]
    fn test_mint_increments_exactly_once() {
        let mut registry = registry();
        let id = create(&mut registry, 10);
        let item = registry.mint_item(&id, MINTER).unwrap();
        assert_eq!(registry.collection(&id).unwrap().minted, 1);
        assert_eq!(registry.remaining_supply(&id).unwrap(), 9);
        let records = registry.sink().records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].item, item.id);
        assert_eq!(records[0].collection, id);
        assert_eq!(records[0].minter, MINTER);
    }

    #[test]
    fn test_mint_copies_metadata_from_collection() {
        let mut registry = registry();
        let id = create(&mut registry, 10);
        let item = registry.mint_item(&id, MINTER).unwrap();
        assert_eq!(
            item.metadata(),
            ("Lunar Series", "Numbered lunar prints", "ipfs://lunar")
        );
        assert_eq!(item.owner, MINTER);
    }

    #[test]
    fn test_mint_requires_no_privilege() {
        let mut registry = registry();
        let id = create(&mut registry, 2);
        assert!(registry.mint_item(&id, MINTER).is_ok());
        assert!(registry.mint_item(&id, ADMIN).is_ok());
    }

    #[test]
    fn test_mint_item_to_hands_off_ownership() {
        let mut registry = registry();
        let id = create(&mut registry, 1);
        let recipient: AccountId = [3u8; 32];
        let item = registry.mint_item_to(&id, MINTER, recipient).unwrap();
        assert_eq!(item.owner, recipient);
        // The record still names the minter, not the recipient.
        assert_eq!(registry.sink().records()[0].minter, MINTER);
    }

    #[test]
    fn test_update_price_overwrites() {
        let mut registry = registry();
        let id = create(&mut registry, 10);
        registry.update_price(&id, 0, ADMIN).unwrap();
        assert_eq!(registry.price(&id).unwrap(), 0);
    }

    #[test]
    fn test_delete_retires_handle() {
        let mut registry = registry();
        let id = create(&mut registry, 10);
        let collection = registry.delete_collection(&id, ADMIN).unwrap();
        assert_eq!(collection.id, id);
        assert!(registry.collection(&id).is_none());
        assert!(matches!(
            registry.mint_item(&id, MINTER),
            Err(RegistryError::UnknownCollection)
        ));
    }

    #[test]
    fn test_unknown_handle_on_reads() {
        let registry = registry();
        let ghost = generate_collection_id();
        assert!(matches!(
            registry.remaining_supply(&ghost),
            Err(RegistryError::UnknownCollection)
        ));
        assert!(matches!(
            registry.price(&ghost),
            Err(RegistryError::UnknownCollection)
        ));
    }
}
