//! # Editions Registry
//!
//! Two-tier digital-collectible registry. A **Collection** is an
//! administrator-controlled, bounded-edition series; an **Item** is one
//! numbered copy issued against the collection's supply cap.
//!
//! The crate covers the issuance core only:
//!
//! - **AdminPolicy**: pure predicate gating collection management
//! - **Collection**: supply cap, mint counter, mutable price
//! - **Item**: issued copy with free ownership reassignment
//! - **EditionRegistry**: live-handle registry, supply-bounded minting
//! - **IssuanceSink**: fire-and-forget notification of each mint
//!
//! Network submission, signature verification, persistence, and payment
//! settlement are collaborators of the surrounding host, not this crate.
//! The host must serialize mutating calls against one registry instance;
//! every operation here is a single synchronous step.

pub mod admin;
pub mod collection;
pub mod error;
pub mod event;
pub mod item;
pub mod registry;

pub use admin::{AccountId, AdminPolicy};
pub use collection::{Collection, CollectionId, generate_collection_id};
pub use error::RegistryError;
pub use event::{IssuanceRecord, IssuanceSink, NullSink, RecordingSink};
pub use item::{Item, ItemId, generate_item_id};
pub use registry::EditionRegistry;
