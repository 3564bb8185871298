use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    /// Admin-gated operation called by a non-administrator. Retrying with
    /// the same identity can never succeed.
    #[error("caller is not the administrator")]
    NotAdmin,
    /// Mint attempted against a collection whose edition is fully issued.
    /// Terminal for this collection; other collections may still mint.
    #[error("collection supply exhausted")]
    SupplyExhausted,
    /// Handle does not name a live collection — never created here, or
    /// already deleted.
    #[error("unknown or retired collection handle")]
    UnknownCollection,
}
