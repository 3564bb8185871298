use serde::{Deserialize, Serialize};

use crate::admin::AccountId;
use crate::collection::CollectionId;
use crate::item::ItemId;

/// Event payload produced exactly once per successful mint. This is the
/// only place the item-to-collection link is recorded; the core never
/// stores it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuanceRecord {
    pub item: ItemId,
    pub collection: CollectionId,
    pub minter: AccountId,
}

/// Receives one record per successful mint, fire-and-forget: the registry
/// never waits on, retries, or validates delivery, and a misbehaving sink
/// cannot roll back a mint that already committed.
pub trait IssuanceSink {
    fn notify(&mut self, record: IssuanceRecord);
}

/// Sink that keeps every record in order. Used by tests and by hosts that
/// index issuance locally.
#[derive(Default)]
pub struct RecordingSink {
    records: Vec<IssuanceRecord>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[IssuanceRecord] {
        &self.records
    }

    pub fn drain(&mut self) -> Vec<IssuanceRecord> {
        std::mem::take(&mut self.records)
    }
}

impl IssuanceSink for RecordingSink {
    fn notify(&mut self, record: IssuanceRecord) {
        self.records.push(record);
    }
}

/// Sink that drops every record.
#[derive(Default)]
pub struct NullSink;

impl IssuanceSink for NullSink {
    fn notify(&mut self, _record: IssuanceRecord) {}
}
