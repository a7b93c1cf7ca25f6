// NFT Supply Ledger - Mint Operations
// Counting tokens into the supply, plus the one-way finalize that fixes
// the cap of an unlimited collection at its minted count.

use log::debug;
use thiserror::Error;

use crate::caps::MintCap;
use crate::error::{LedgerError, LedgerResult};
use crate::events::{EventSink, LedgerEvent};
use crate::identity::TokenIdentity;
use crate::ledger::CollectionLedger;

use super::{ensure_same_collection, TxContext};

// ========================================
// Mint Operations
// ========================================

/// Count one freshly minted token into the supply
///
/// Writes the collection tag onto the identity; the token is part of the
/// collection from here until burned.
///
/// # Returns
/// - `Err(LedgerError::CollectionMismatch)`: capability from another ledger
/// - `Err(LedgerError::CollectionPaused)`: minting is paused
/// - `Err(LedgerError::MaxSupplyExceeded)`: cap would be passed
/// - `Err(LedgerError::DuplicateRegistration)`: identity already tagged
pub fn track_mint<T, E: EventSink + ?Sized>(
    events: &mut E,
    ctx: &TxContext,
    cap: &MintCap<T>,
    ledger: &mut CollectionLedger<T>,
    token: &mut TokenIdentity,
) -> LedgerResult<()> {
    // Step 1: Cross-wiring check
    ensure_same_collection(cap.collection_id(), ledger.collection_id())?;

    // Step 2: Mint rules against the current state
    ledger.ensure_can_mint(1)?;

    // Step 3: Tag the identity; a failure here leaves the counter alone
    token.attach(ledger.collection_id())?;

    // Step 4: Count it; cannot fail after the Step 2 gate
    ledger.record_mint(1)?;

    events.emit(LedgerEvent::TokenMinted {
        collection_id: ledger.collection_id(),
        token_id: token.id(),
        actor: ctx.actor,
    });
    Ok(())
}

/// Count a batch of freshly minted tokens into the supply
///
/// All-or-nothing: the whole batch is checked against the pause gate, the
/// cap and the tag states before anything is written. An empty batch is a
/// no-op and emits nothing; a non-empty batch emits exactly one event.
pub fn track_batch_mint<T, E: EventSink + ?Sized>(
    events: &mut E,
    ctx: &TxContext,
    cap: &MintCap<T>,
    ledger: &mut CollectionLedger<T>,
    tokens: &mut [TokenIdentity],
) -> LedgerResult<()> {
    // Empty batch is a no-op
    if tokens.is_empty() {
        return Ok(());
    }

    // Step 1: Cross-wiring check
    ensure_same_collection(cap.collection_id(), ledger.collection_id())?;

    // Step 2: Whole-batch mint rules
    let count = tokens.len() as u64;
    ledger.ensure_can_mint(count)?;

    // Step 3: Every identity must be untagged before the first write
    if tokens.iter().any(TokenIdentity::has_collection_tag) {
        return Err(LedgerError::DuplicateRegistration);
    }

    // Step 4: Apply
    for token in tokens.iter_mut() {
        token.attach(ledger.collection_id())?;
    }
    ledger.record_mint(count)?;

    // Step 5: One event for the whole batch
    events.emit(LedgerEvent::TokensMinted {
        collection_id: ledger.collection_id(),
        token_ids: tokens.iter().map(TokenIdentity::id).collect(),
        count,
        actor: ctx.actor,
    });
    Ok(())
}

// ========================================
// Supply Finalization
// ========================================

/// A refused [`finalize_supply`], giving the capability back
///
/// No state changed; `cap` is as valid as before the call.
#[derive(Error)]
#[error("{reason}")]
pub struct FinalizeRejected<T> {
    /// The untouched capability
    pub cap: MintCap<T>,
    /// Why the finalize was refused
    pub reason: LedgerError,
}

impl<T> std::fmt::Debug for FinalizeRejected<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FinalizeRejected")
            .field("cap", &self.cap)
            .field("reason", &self.reason)
            .finish()
    }
}

/// Fix the cap at the current minted count, permanently
///
/// Consumes the mint capability: a finalized collection can never mint
/// again, so `minted` is its supply forever. Refused on collections that
/// already have a cap and on collections that never minted; both refusals
/// return the capability inside the error.
pub fn finalize_supply<T, E: EventSink + ?Sized>(
    events: &mut E,
    ctx: &TxContext,
    cap: MintCap<T>,
    ledger: &mut CollectionLedger<T>,
) -> Result<(), FinalizeRejected<T>> {
    if let Err(reason) = ensure_same_collection(cap.collection_id(), ledger.collection_id()) {
        return Err(FinalizeRejected { cap, reason });
    }

    match ledger.fix_supply() {
        Ok(max_supply) => {
            debug!(
                "Finalized supply of collection {} at {}",
                ledger.collection_id(),
                max_supply
            );
            events.emit(LedgerEvent::SupplyFinalized {
                collection_id: ledger.collection_id(),
                max_supply,
                actor: ctx.actor,
            });
            Ok(())
        }
        Err(reason) => Err(FinalizeRejected { cap, reason }),
    }
}
