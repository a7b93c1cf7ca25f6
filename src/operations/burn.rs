// NFT Supply Ledger - Burn Operations
// Counting tokens out of the supply. Two authorization paths share one
// core: holders of the BurnCap, and token owners where the collection
// allows it. Burning never frees cap room; `minted` only goes up.

use log::debug;
use thiserror::Error;

use crate::caps::BurnCap;
use crate::error::LedgerError;
use crate::events::{EventSink, LedgerEvent};
use crate::identity::TokenIdentity;
use crate::ledger::CollectionLedger;

use super::{ensure_same_collection, TxContext};

/// A refused burn, giving the token identity back
///
/// No state changed; the identity still carries whatever tag it had.
#[derive(Debug, Error)]
#[error("{reason}")]
pub struct BurnRejected {
    /// The untouched identity
    pub token: TokenIdentity,
    /// Why the burn was refused
    pub reason: LedgerError,
}

/// Burn with the collection's burn capability
///
/// # Returns
/// - `Err(reason = LedgerError::CollectionMismatch)`: capability or tag
///   from another collection
/// - `Err(reason = LedgerError::TagNotFound)`: identity was never minted
pub fn track_burn<T, E: EventSink + ?Sized>(
    events: &mut E,
    ctx: &TxContext,
    cap: &BurnCap<T>,
    ledger: &mut CollectionLedger<T>,
    token: TokenIdentity,
) -> Result<(), BurnRejected> {
    if let Err(reason) = ensure_same_collection(cap.collection_id(), ledger.collection_id()) {
        return Err(BurnRejected { token, reason });
    }

    burn_core(events, ctx, ledger, token, false)
}

/// Burn as the token owner
///
/// Possession of the identity value is the ownership proxy. Fails with
/// `OwnerBurnDisabled` on collections that centralize burns.
pub fn track_burn_by_owner<T, E: EventSink + ?Sized>(
    events: &mut E,
    ctx: &TxContext,
    ledger: &mut CollectionLedger<T>,
    token: TokenIdentity,
) -> Result<(), BurnRejected> {
    if !ledger.owner_burn_allowed() {
        return Err(BurnRejected {
            token,
            reason: LedgerError::OwnerBurnDisabled,
        });
    }

    burn_core(events, ctx, ledger, token, true)
}

/// Shared burn path: verify the tag, count, destroy the identity
fn burn_core<T, E: EventSink + ?Sized>(
    events: &mut E,
    ctx: &TxContext,
    ledger: &mut CollectionLedger<T>,
    mut token: TokenIdentity,
    owner_initiated: bool,
) -> Result<(), BurnRejected> {
    let collection_id = ledger.collection_id();

    // Step 1: The tag must name this collection
    match token.try_collection_tag() {
        None => {
            return Err(BurnRejected {
                token,
                reason: LedgerError::TagNotFound,
            })
        }
        Some(tag) if tag != collection_id => {
            return Err(BurnRejected {
                token,
                reason: LedgerError::CollectionMismatch,
            })
        }
        Some(_) => {}
    }

    // Step 2: Count it out
    if let Err(reason) = ledger.record_burn() {
        return Err(BurnRejected { token, reason });
    }

    // Step 3: Remove the tag; the identity dies with this scope
    let token_id = token.id();
    token.clear_tag();

    debug!("Burned token {} of collection {}", token_id, collection_id);

    events.emit(LedgerEvent::TokenBurned {
        collection_id,
        token_id,
        owner_initiated,
        actor: ctx.actor,
    });
    Ok(())
}
