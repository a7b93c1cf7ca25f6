// NFT Supply Ledger - Collection Records
// The two per-collection records: the supply ledger (enforced counters)
// and the metadata record (display fields). Both are phantom-typed to the
// collection's nominal type so capabilities cannot cross collections.

use std::fmt;
use std::marker::PhantomData;

use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, LedgerResult};
use crate::types::{CollectionId, MetadataId, METADATA_VERSION};

// ========================================
// Creation Config
// ========================================

/// Creation-time configuration for a collection
#[derive(Debug, Clone)]
pub struct CollectionConfig {
    /// Collection display name
    pub name: String,
    /// Collection description
    pub description: String,
    /// Image URL, must be non-empty
    pub image_url: String,
    /// Optional project URL, non-empty when present
    pub external_url: Option<String>,
    /// Display decimals hint
    pub decimals: u8,
    /// Hard mint cap, `None` for unlimited
    pub max_supply: Option<u64>,
    /// Whether minting can ever be paused
    pub pausable: bool,
    /// Issue a `BurnCap` and disable owner-initiated burns
    pub centralize_burn: bool,
}

impl CollectionConfig {
    /// Create a config with the mandatory display fields
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            image_url: image_url.into(),
            external_url: None,
            decimals: 0,
            max_supply: None,
            pausable: false,
            centralize_burn: false,
        }
    }

    /// Set the project URL
    pub fn with_external_url(mut self, url: impl Into<String>) -> Self {
        self.external_url = Some(url.into());
        self
    }

    /// Set the display decimals hint
    pub fn with_decimals(mut self, decimals: u8) -> Self {
        self.decimals = decimals;
        self
    }

    /// Set a hard mint cap
    pub fn with_max_supply(mut self, max_supply: u64) -> Self {
        self.max_supply = Some(max_supply);
        self
    }

    /// Allow pausing and resuming mints
    pub fn with_pausable(mut self) -> Self {
        self.pausable = true;
        self
    }

    /// Centralize burns behind a `BurnCap`
    pub fn with_centralized_burn(mut self) -> Self {
        self.centralize_burn = true;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> LedgerResult<()> {
        if self.image_url.is_empty() {
            return Err(LedgerError::EmptyImageUrl);
        }

        // External URL is either absent or non-empty, never present-and-empty
        if let Some(url) = &self.external_url {
            if url.is_empty() {
                return Err(LedgerError::EmptyExternalUrl);
            }
        }

        Ok(())
    }
}

// ========================================
// Supply Ledger
// ========================================

/// Supply accounting record for the collection of `T`
///
/// Counters only move through the mint and burn operations; the fields are
/// private so no caller can bypass the cap or the pause gate.
pub struct CollectionLedger<T> {
    collection_id: CollectionId,
    metadata_id: MetadataId,
    max_supply: Option<u64>,
    minted: u64,
    burned: u64,
    paused: bool,
    owner_burn_allowed: bool,
    _marker: PhantomData<fn() -> T>,
}

impl<T> CollectionLedger<T> {
    pub(crate) fn new(
        collection_id: CollectionId,
        metadata_id: MetadataId,
        max_supply: Option<u64>,
        owner_burn_allowed: bool,
    ) -> Self {
        Self {
            collection_id,
            metadata_id,
            max_supply,
            minted: 0,
            burned: 0,
            paused: false,
            owner_burn_allowed,
            _marker: PhantomData,
        }
    }

    /// Id of this ledger record
    pub const fn collection_id(&self) -> CollectionId {
        self.collection_id
    }

    /// Id of the linked metadata record
    pub const fn metadata_id(&self) -> MetadataId {
        self.metadata_id
    }

    /// Hard mint cap, `None` while unlimited
    pub const fn max_supply(&self) -> Option<u64> {
        self.max_supply
    }

    /// Lifetime mint count
    pub const fn minted(&self) -> u64 {
        self.minted
    }

    /// Lifetime burn count
    pub const fn burned(&self) -> u64 {
        self.burned
    }

    /// Tokens currently alive
    pub const fn circulating(&self) -> u64 {
        self.minted.saturating_sub(self.burned)
    }

    /// Whether minting is currently paused
    pub const fn is_paused(&self) -> bool {
        self.paused
    }

    /// Whether token owners may burn without a `BurnCap`
    pub const fn owner_burn_allowed(&self) -> bool {
        self.owner_burn_allowed
    }

    /// Snapshot of the supply counters
    pub const fn supply(&self) -> SupplyInfo {
        SupplyInfo {
            minted: self.minted,
            burned: self.burned,
            max_supply: self.max_supply,
        }
    }

    /// Mints left under the cap, `None` while unlimited
    pub fn remaining_supply(&self) -> Option<u64> {
        self.max_supply.map(|max| max.saturating_sub(self.minted))
    }

    /// Check whether `amount` tokens could be minted right now
    ///
    /// Returns an error naming the first violated rule. `amount` of zero
    /// is rejected as input error, not treated as a trivial success.
    pub fn ensure_can_mint(&self, amount: u64) -> LedgerResult<()> {
        if amount == 0 {
            return Err(LedgerError::ZeroAmount);
        }

        if self.paused {
            return Err(LedgerError::CollectionPaused);
        }

        // Overflow is checked for unlimited collections too, so a mint
        // that passes this gate can always be counted
        let new_minted = self
            .minted
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;
        if let Some(max) = self.max_supply {
            if new_minted > max {
                return Err(LedgerError::MaxSupplyExceeded);
            }
        }

        Ok(())
    }

    /// Boolean form of [`ensure_can_mint`](Self::ensure_can_mint)
    pub fn can_mint(&self, amount: u64) -> bool {
        self.ensure_can_mint(amount).is_ok()
    }

    /// Record `amount` freshly minted tokens
    ///
    /// Re-checks the mint rules so the counter can never pass the cap even
    /// if a caller skipped the precheck.
    pub(crate) fn record_mint(&mut self, amount: u64) -> LedgerResult<()> {
        self.ensure_can_mint(amount)?;
        self.minted = self
            .minted
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;
        Ok(())
    }

    /// Record one burned token
    pub(crate) fn record_burn(&mut self) -> LedgerResult<()> {
        self.burned = self.burned.checked_add(1).ok_or(LedgerError::Overflow)?;
        Ok(())
    }

    pub(crate) fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// Fix the cap at the current mint count, one-way
    pub(crate) fn fix_supply(&mut self) -> LedgerResult<u64> {
        if self.max_supply.is_some() {
            return Err(LedgerError::AlreadyFixedSupply);
        }
        if self.minted == 0 {
            return Err(LedgerError::CannotFinalizeZeroSupply);
        }

        self.max_supply = Some(self.minted);
        Ok(self.minted)
    }
}

impl<T> fmt::Debug for CollectionLedger<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CollectionLedger")
            .field("collection_id", &self.collection_id)
            .field("max_supply", &self.max_supply)
            .field("minted", &self.minted)
            .field("burned", &self.burned)
            .field("paused", &self.paused)
            .field("owner_burn_allowed", &self.owner_burn_allowed)
            .finish()
    }
}

/// Point-in-time view of a collection's supply counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplyInfo {
    pub minted: u64,
    pub burned: u64,
    pub max_supply: Option<u64>,
}

impl SupplyInfo {
    /// Tokens currently alive
    pub const fn circulating(&self) -> u64 {
        self.minted.saturating_sub(self.burned)
    }
}

// ========================================
// Metadata Record
// ========================================

/// Display metadata record for the collection of `T`
///
/// Mutable through `MetadataAdminCap` operations until frozen, then
/// immutable forever.
pub struct CollectionMetadata<T> {
    id: MetadataId,
    collection_id: CollectionId,
    version: u8,
    name: String,
    description: String,
    image_url: String,
    external_url: Option<String>,
    decimals: u8,
    max_supply_hint: Option<u64>,
    pausable: bool,
    frozen: bool,
    _marker: PhantomData<fn() -> T>,
}

impl<T> CollectionMetadata<T> {
    /// Build the record from a validated config
    ///
    /// The supply fields of the config are ignored here; they belong to
    /// the ledger record.
    pub(crate) fn from_config(
        id: MetadataId,
        collection_id: CollectionId,
        config: CollectionConfig,
    ) -> Self {
        Self {
            id,
            collection_id,
            version: METADATA_VERSION,
            name: config.name,
            description: config.description,
            image_url: config.image_url,
            external_url: config.external_url,
            decimals: config.decimals,
            max_supply_hint: None,
            pausable: config.pausable,
            frozen: false,
            _marker: PhantomData,
        }
    }

    /// Id of this metadata record
    pub const fn id(&self) -> MetadataId {
        self.id
    }

    /// Id of the linked ledger record
    pub const fn collection_id(&self) -> CollectionId {
        self.collection_id
    }

    /// Metadata schema version
    pub const fn version(&self) -> u8 {
        self.version
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    pub fn external_url(&self) -> Option<&str> {
        self.external_url.as_deref()
    }

    /// Display decimals hint
    pub const fn decimals(&self) -> u8 {
        self.decimals
    }

    /// Advisory cap hint, never enforced against the ledger
    pub const fn max_supply_hint(&self) -> Option<u64> {
        self.max_supply_hint
    }

    /// Whether the linked ledger accepts pause and resume
    pub const fn is_pausable(&self) -> bool {
        self.pausable
    }

    /// Whether the record is permanently immutable
    pub const fn is_frozen(&self) -> bool {
        self.frozen
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }

    pub(crate) fn set_description(&mut self, description: String) {
        self.description = description;
    }

    pub(crate) fn set_image_url(&mut self, image_url: String) {
        self.image_url = image_url;
    }

    pub(crate) fn set_external_url(&mut self, external_url: Option<String>) {
        self.external_url = external_url;
    }

    pub(crate) fn set_decimals(&mut self, decimals: u8) {
        self.decimals = decimals;
    }

    pub(crate) fn set_max_supply_hint(&mut self, hint: Option<u64>) {
        self.max_supply_hint = hint;
    }

    pub(crate) fn freeze(&mut self) {
        self.frozen = true;
    }
}

impl<T> fmt::Debug for CollectionMetadata<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CollectionMetadata")
            .field("id", &self.id)
            .field("collection_id", &self.collection_id)
            .field("name", &self.name)
            .field("pausable", &self.pausable)
            .field("frozen", &self.frozen)
            .finish()
    }
}
