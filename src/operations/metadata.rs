// NFT Supply Ledger - Metadata Operations
// Field-wise metadata updates and the one-way freeze.

use log::debug;

use crate::caps::MetadataAdminCap;
use crate::error::{LedgerError, LedgerResult};
use crate::events::{metadata_fields, EventSink, LedgerEvent};
use crate::ledger::CollectionMetadata;

use super::{ensure_same_collection, TxContext};

// ========================================
// Update Parameters
// ========================================

/// Field-wise metadata update
///
/// Absent fields are left unchanged. The two clearable fields use a
/// nested option: `with_external_url` / `clear_external_url` and
/// `with_max_supply_hint` / `clear_max_supply_hint` distinguish setting,
/// clearing and leaving alone.
#[derive(Debug, Clone, Default)]
pub struct MetadataUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub external_url: Option<Option<String>>,
    pub decimals: Option<u8>,
    pub max_supply_hint: Option<Option<u64>>,
}

impl MetadataUpdate {
    /// An update that changes nothing
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    pub fn with_external_url(mut self, url: impl Into<String>) -> Self {
        self.external_url = Some(Some(url.into()));
        self
    }

    /// Remove the external URL
    pub fn clear_external_url(mut self) -> Self {
        self.external_url = Some(None);
        self
    }

    pub fn with_decimals(mut self, decimals: u8) -> Self {
        self.decimals = Some(decimals);
        self
    }

    /// Set the advisory supply hint; never validated against the ledger
    pub fn with_max_supply_hint(mut self, hint: u64) -> Self {
        self.max_supply_hint = Some(Some(hint));
        self
    }

    /// Remove the advisory supply hint
    pub fn clear_max_supply_hint(mut self) -> Self {
        self.max_supply_hint = Some(None);
        self
    }

    /// Validate the requested values
    pub fn validate(&self) -> LedgerResult<()> {
        if matches!(&self.image_url, Some(url) if url.is_empty()) {
            return Err(LedgerError::EmptyImageUrl);
        }
        if matches!(&self.external_url, Some(Some(url)) if url.is_empty()) {
            return Err(LedgerError::EmptyExternalUrl);
        }
        Ok(())
    }

    /// Whether the update touches any field
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.image_url.is_none()
            && self.external_url.is_none()
            && self.decimals.is_none()
            && self.max_supply_hint.is_none()
    }
}

// ========================================
// Update Operation
// ========================================

/// Apply a metadata update
///
/// All requested values are validated before the first field is written.
/// Emits one event carrying the changed-field mask and the new values; an
/// update that requests nothing is a no-op and emits no event.
///
/// # Returns
/// - `Err(LedgerError::MetadataFrozen)`: record is frozen
/// - `Err(LedgerError::CollectionMismatch)`: capability from another ledger
/// - `Err(LedgerError::EmptyImageUrl)`: invalid value
/// - `Err(LedgerError::EmptyExternalUrl)`: invalid value
pub fn update_metadata<T, E: EventSink + ?Sized>(
    events: &mut E,
    ctx: &TxContext,
    cap: &MetadataAdminCap<T>,
    metadata: &mut CollectionMetadata<T>,
    update: MetadataUpdate,
) -> LedgerResult<()> {
    // Step 1: Cross-wiring check
    ensure_same_collection(cap.collection_id(), metadata.collection_id())?;

    // Step 2: Frozen gate
    if metadata.is_frozen() {
        return Err(LedgerError::MetadataFrozen);
    }

    // Step 3: Validate every requested value before any write
    update.validate()?;

    // Nothing requested, nothing to do
    if update.is_empty() {
        return Ok(());
    }

    // Step 4: Apply, tracking the change mask
    let MetadataUpdate {
        name,
        description,
        image_url,
        external_url,
        decimals,
        max_supply_hint,
    } = update;

    let mut fields = 0u8;
    if let Some(value) = &name {
        metadata.set_name(value.clone());
        fields |= metadata_fields::NAME;
    }
    if let Some(value) = &description {
        metadata.set_description(value.clone());
        fields |= metadata_fields::DESCRIPTION;
    }
    if let Some(value) = &image_url {
        metadata.set_image_url(value.clone());
        fields |= metadata_fields::IMAGE_URL;
    }
    if let Some(value) = &external_url {
        metadata.set_external_url(value.clone());
        fields |= metadata_fields::EXTERNAL_URL;
    }
    if let Some(value) = decimals {
        metadata.set_decimals(value);
        fields |= metadata_fields::DECIMALS;
    }
    if let Some(value) = max_supply_hint {
        metadata.set_max_supply_hint(value);
        fields |= metadata_fields::MAX_SUPPLY_HINT;
    }

    events.emit(LedgerEvent::MetadataUpdated {
        metadata_id: metadata.id(),
        collection_id: metadata.collection_id(),
        fields,
        name,
        description,
        image_url,
        external_url: external_url.flatten(),
        decimals,
        max_supply_hint: max_supply_hint.flatten(),
        actor: ctx.actor,
    });
    Ok(())
}

// ========================================
// Freeze Operation
// ========================================

/// Permanently freeze the metadata record
///
/// Consumes the admin capability; with it gone and `frozen` set, no
/// metadata field can ever change again. One-way and infallible.
pub fn freeze_metadata<T, E: EventSink + ?Sized>(
    events: &mut E,
    ctx: &TxContext,
    cap: MetadataAdminCap<T>,
    metadata: &mut CollectionMetadata<T>,
) {
    metadata.freeze();
    debug!("Froze metadata {}", metadata.id());

    events.emit(LedgerEvent::MetadataFrozen {
        metadata_id: metadata.id(),
        collection_id: metadata.collection_id(),
        actor: ctx.actor,
    });

    // The only capability that can reach this record dies here
    drop(cap);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::caps::TypeAuthority;
    use crate::events::MemoryEventLog;
    use crate::ledger::CollectionConfig;
    use crate::operations::{create_collection, CreatedCollection};
    use crate::registry::CollectionRegistry;
    use crate::types::ActorId;

    struct Art;

    fn test_ctx() -> TxContext {
        TxContext::new(ActorId::new([9; 32]))
    }

    fn new_collection(config: CollectionConfig) -> (MemoryEventLog, CreatedCollection<Art>) {
        let mut events = MemoryEventLog::new();
        let mut registry = CollectionRegistry::new();
        let created = create_collection(
            &mut events,
            &test_ctx(),
            &TypeAuthority::<Art>::claim(),
            &mut registry,
            config,
        )
        .unwrap();
        events.drain();
        (events, created)
    }

    fn base_config() -> CollectionConfig {
        CollectionConfig::new("Art", "Generative art", "https://img.example/art.png")
    }

    #[test]
    fn test_update_single_field() {
        let (mut events, mut created) = new_collection(base_config());
        let ctx = test_ctx();

        update_metadata(
            &mut events,
            &ctx,
            &created.admin_cap,
            &mut created.metadata,
            MetadataUpdate::new().with_description("Season two"),
        )
        .unwrap();

        assert_eq!(created.metadata.description(), "Season two");
        assert_eq!(created.metadata.name(), "Art");
        assert!(matches!(
            events.last(),
            Some(LedgerEvent::MetadataUpdated {
                fields,
                description: Some(d),
                name: None,
                ..
            }) if *fields == metadata_fields::DESCRIPTION && d == "Season two"
        ));
    }

    #[test]
    fn test_update_external_url_lifecycle() {
        let (mut events, mut created) = new_collection(base_config());
        let ctx = test_ctx();
        assert_eq!(created.metadata.external_url(), None);

        // Set
        update_metadata(
            &mut events,
            &ctx,
            &created.admin_cap,
            &mut created.metadata,
            MetadataUpdate::new().with_external_url("https://art.example"),
        )
        .unwrap();
        assert_eq!(created.metadata.external_url(), Some("https://art.example"));

        // Clear
        update_metadata(
            &mut events,
            &ctx,
            &created.admin_cap,
            &mut created.metadata,
            MetadataUpdate::new().clear_external_url(),
        )
        .unwrap();
        assert_eq!(created.metadata.external_url(), None);

        let recorded = events.drain();
        assert_eq!(recorded.len(), 2);
        assert!(matches!(
            &recorded[1],
            LedgerEvent::MetadataUpdated {
                fields,
                external_url: None,
                ..
            } if *fields == metadata_fields::EXTERNAL_URL
        ));
    }

    #[test]
    fn test_update_rejects_empty_values() {
        let (mut events, mut created) = new_collection(base_config());
        let ctx = test_ctx();

        let result = update_metadata(
            &mut events,
            &ctx,
            &created.admin_cap,
            &mut created.metadata,
            MetadataUpdate::new().with_image_url(""),
        );
        assert_eq!(result, Err(LedgerError::EmptyImageUrl));

        let result = update_metadata(
            &mut events,
            &ctx,
            &created.admin_cap,
            &mut created.metadata,
            MetadataUpdate::new().with_external_url(""),
        );
        assert_eq!(result, Err(LedgerError::EmptyExternalUrl));

        assert_eq!(created.metadata.image_url(), "https://img.example/art.png");
        assert!(events.is_empty());
    }

    #[test]
    fn test_update_validates_before_writing_any_field() {
        let (mut events, mut created) = new_collection(base_config());
        let ctx = test_ctx();

        // Valid name plus invalid image URL: nothing may change
        let result = update_metadata(
            &mut events,
            &ctx,
            &created.admin_cap,
            &mut created.metadata,
            MetadataUpdate::new().with_name("Renamed").with_image_url(""),
        );
        assert_eq!(result, Err(LedgerError::EmptyImageUrl));
        assert_eq!(created.metadata.name(), "Art");
        assert!(events.is_empty());
    }

    #[test]
    fn test_empty_update_is_noop() {
        let (mut events, mut created) = new_collection(base_config());
        let ctx = test_ctx();

        update_metadata(
            &mut events,
            &ctx,
            &created.admin_cap,
            &mut created.metadata,
            MetadataUpdate::new(),
        )
        .unwrap();
        assert!(events.is_empty());
    }

    #[test]
    fn test_hint_free_to_exceed_enforced_cap() {
        let (mut events, mut created) = new_collection(base_config().with_max_supply(10));
        let ctx = test_ctx();

        update_metadata(
            &mut events,
            &ctx,
            &created.admin_cap,
            &mut created.metadata,
            MetadataUpdate::new().with_max_supply_hint(1_000_000),
        )
        .unwrap();
        assert_eq!(created.metadata.max_supply_hint(), Some(1_000_000));

        update_metadata(
            &mut events,
            &ctx,
            &created.admin_cap,
            &mut created.metadata,
            MetadataUpdate::new().clear_max_supply_hint(),
        )
        .unwrap();
        assert_eq!(created.metadata.max_supply_hint(), None);
    }

    #[test]
    fn test_freeze_blocks_all_updates() {
        let (mut events, mut created) = new_collection(base_config());
        let ctx = test_ctx();

        freeze_metadata(&mut events, &ctx, created.admin_cap, &mut created.metadata);
        assert!(created.metadata.is_frozen());
        assert!(matches!(
            events.last(),
            Some(LedgerEvent::MetadataFrozen { .. })
        ));

        // A capability from a twin ledger instance cannot thaw or touch it
        let mut registry = CollectionRegistry::new();
        let twin = create_collection::<Art, _>(
            &mut events,
            &ctx,
            &TypeAuthority::claim(),
            &mut registry,
            base_config(),
        )
        .unwrap();
        let result = update_metadata(
            &mut events,
            &ctx,
            &twin.admin_cap,
            &mut created.metadata,
            MetadataUpdate::new().with_name("Thawed"),
        );
        assert_eq!(result, Err(LedgerError::CollectionMismatch));
        assert_eq!(created.metadata.name(), "Art");
    }

    #[test]
    fn test_multi_field_update_mask() {
        let (mut events, mut created) = new_collection(base_config());
        let ctx = test_ctx();

        update_metadata(
            &mut events,
            &ctx,
            &created.admin_cap,
            &mut created.metadata,
            MetadataUpdate::new()
                .with_name("Art v2")
                .with_decimals(3)
                .with_external_url("https://art.example"),
        )
        .unwrap();

        let expected = metadata_fields::NAME
            | metadata_fields::DECIMALS
            | metadata_fields::EXTERNAL_URL;
        assert!(matches!(
            events.last(),
            Some(LedgerEvent::MetadataUpdated { fields, .. }) if *fields == expected
        ));
        assert_eq!(created.metadata.name(), "Art v2");
        assert_eq!(created.metadata.decimals(), 3);
    }
}
