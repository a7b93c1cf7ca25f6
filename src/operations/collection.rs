// NFT Supply Ledger - Collection Operations
// Collection creation and pause control.

use log::debug;

use crate::caps::{BurnCap, MetadataAdminCap, MintCap, TypeAuthority};
use crate::error::{LedgerError, LedgerResult};
use crate::events::{EventSink, LedgerEvent};
use crate::ledger::{CollectionConfig, CollectionLedger, CollectionMetadata};
use crate::registry::CollectionRegistry;
use crate::types::TypeKey;

use super::{ensure_same_collection, TxContext};

// ========================================
// Create Collection Operation
// ========================================

/// Everything produced by a successful collection creation
///
/// The capability set is minted exactly once, here. `burn_cap` is present
/// only when the config centralizes burns.
pub struct CreatedCollection<T> {
    pub ledger: CollectionLedger<T>,
    pub metadata: CollectionMetadata<T>,
    pub mint_cap: MintCap<T>,
    pub burn_cap: Option<BurnCap<T>>,
    pub admin_cap: MetadataAdminCap<T>,
}

/// Create and register the collection for `T`
///
/// # Returns
/// - `Ok(CreatedCollection)`: the two records plus the capability set
/// - `Err(LedgerError::AlreadyRegistered)`: `T` already has a collection
/// - `Err(LedgerError::EmptyImageUrl)`: invalid config
/// - `Err(LedgerError::EmptyExternalUrl)`: invalid config
pub fn create_collection<T: 'static, E: EventSink + ?Sized>(
    events: &mut E,
    ctx: &TxContext,
    _authority: &TypeAuthority<T>,
    registry: &mut CollectionRegistry,
    config: CollectionConfig,
) -> LedgerResult<CreatedCollection<T>> {
    // Step 1: Validate config before anything is allocated
    config.validate()?;

    // Step 2: Register the type, allocating both record ids
    let locator = registry.register::<T>()?;

    // Step 3: Build the two records
    let max_supply = config.max_supply;
    let pausable = config.pausable;
    let centralize_burn = config.centralize_burn;
    let name = config.name.clone();

    let ledger = CollectionLedger::new(
        locator.collection_id,
        locator.metadata_id,
        max_supply,
        !centralize_burn,
    );
    let metadata =
        CollectionMetadata::from_config(locator.metadata_id, locator.collection_id, config);

    // Step 4: Mint the capability set
    let mint_cap = MintCap::new(locator.collection_id);
    let admin_cap = MetadataAdminCap::new(locator.collection_id);
    let burn_cap = centralize_burn.then(|| BurnCap::new(locator.collection_id));

    debug!(
        "Registered collection {} for type {}",
        locator.collection_id,
        TypeKey::of::<T>()
    );

    // Step 5: Emit, capabilities first
    events.emit(LedgerEvent::CapabilitiesIssued {
        collection_id: locator.collection_id,
        burn_cap_issued: burn_cap.is_some(),
        actor: ctx.actor,
    });
    events.emit(LedgerEvent::CollectionRegistered {
        type_name: TypeKey::of::<T>().name().to_string(),
        collection_id: locator.collection_id,
        metadata_id: locator.metadata_id,
        name,
        max_supply,
        pausable,
        actor: ctx.actor,
    });

    Ok(CreatedCollection {
        ledger,
        metadata,
        mint_cap,
        burn_cap,
        admin_cap,
    })
}

/// Create a collection with no supply cap
///
/// Same as [`create_collection`] with any configured cap cleared; the cap
/// can later be fixed by `finalize_supply`.
pub fn create_unlimited_collection<T: 'static, E: EventSink + ?Sized>(
    events: &mut E,
    ctx: &TxContext,
    authority: &TypeAuthority<T>,
    registry: &mut CollectionRegistry,
    mut config: CollectionConfig,
) -> LedgerResult<CreatedCollection<T>> {
    config.max_supply = None;
    create_collection(events, ctx, authority, registry, config)
}

// ========================================
// Pause Control
// ========================================

/// Pause minting
///
/// Only the two mint operations are gated; burns, metadata updates and
/// queries proceed while paused. Pausing an already paused collection is
/// a no-op and emits no event.
pub fn pause<T, E: EventSink + ?Sized>(
    events: &mut E,
    ctx: &TxContext,
    cap: &MetadataAdminCap<T>,
    metadata: &CollectionMetadata<T>,
    ledger: &mut CollectionLedger<T>,
) -> LedgerResult<()> {
    ensure_same_collection(cap.collection_id(), ledger.collection_id())?;
    ensure_same_collection(metadata.collection_id(), ledger.collection_id())?;

    if !metadata.is_pausable() {
        return Err(LedgerError::CollectionNotPausable);
    }

    // Already paused is a no-op
    if ledger.is_paused() {
        return Ok(());
    }

    ledger.set_paused(true);
    debug!("Paused minting for collection {}", ledger.collection_id());

    events.emit(LedgerEvent::MintingPaused {
        collection_id: ledger.collection_id(),
        actor: ctx.actor,
    });
    Ok(())
}

/// Resume minting
///
/// Resuming a collection that is not paused is a no-op and emits no
/// event.
pub fn resume<T, E: EventSink + ?Sized>(
    events: &mut E,
    ctx: &TxContext,
    cap: &MetadataAdminCap<T>,
    metadata: &CollectionMetadata<T>,
    ledger: &mut CollectionLedger<T>,
) -> LedgerResult<()> {
    ensure_same_collection(cap.collection_id(), ledger.collection_id())?;
    ensure_same_collection(metadata.collection_id(), ledger.collection_id())?;

    if !metadata.is_pausable() {
        return Err(LedgerError::CollectionNotPausable);
    }

    // Not paused is a no-op
    if !ledger.is_paused() {
        return Ok(());
    }

    ledger.set_paused(false);
    debug!("Resumed minting for collection {}", ledger.collection_id());

    events.emit(LedgerEvent::MintingResumed {
        collection_id: ledger.collection_id(),
        actor: ctx.actor,
    });
    Ok(())
}
