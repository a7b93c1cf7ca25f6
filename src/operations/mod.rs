// NFT Supply Ledger - Operations Module
// This module contains the core business logic for ledger operations.
//
// The operations are designed to be host-agnostic:
// - Records and capabilities are passed in by the caller, never looked up
// - Event delivery is abstracted via the EventSink trait
// - The transaction actor is passed as context
//
// Every operation either applies completely or leaves all state untouched.

mod burn;
mod collection;
mod metadata;
mod mint;

pub use burn::*;
pub use collection::*;
pub use metadata::*;
pub use mint::*;

use crate::error::{LedgerError, LedgerResult};
use crate::types::{ActorId, CollectionId};

// ========================================
// Transaction Context
// ========================================

/// Transaction context naming the acting account
pub struct TxContext {
    /// Current actor (transaction sender)
    pub actor: ActorId,
}

impl TxContext {
    /// Create a new transaction context
    pub fn new(actor: ActorId) -> Self {
        Self { actor }
    }
}

// ========================================
// Cross-Wiring Checks
// ========================================

/// Check that a capability and a record name the same collection
///
/// The type system already rules out mixing collections of different
/// types; this catches values from independent ledger instances.
pub(crate) fn ensure_same_collection(cap: CollectionId, record: CollectionId) -> LedgerResult<()> {
    if cap != record {
        return Err(LedgerError::CollectionMismatch);
    }
    Ok(())
}
