use serde::{Deserialize, Serialize};

/// 32-byte caller identity, opaque and comparable. The host's signature
/// layer is expected to have authenticated it before it reaches the core.
pub type AccountId = [u8; 32];

/// The single administrator identity, injected at registry construction
/// rather than baked into logic, so each deployment (and each test) can
/// carry its own.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminPolicy {
    admin: AccountId,
}

impl AdminPolicy {
    pub fn new(admin: AccountId) -> Self {
        Self { admin }
    }

    pub fn admin(&self) -> &AccountId {
        &self.admin
    }

    /// Whether `caller` is the administrator. Pure, no side effects;
    /// every admin-gated operation calls this first and fails closed.
    pub fn is_admin(&self, caller: &AccountId) -> bool {
        caller == &self.admin
    }
}
