// NFT Supply Ledger - Events
// One event per mutating call (creation emits two). The ledger never
// interprets its own events; they exist for external indexers, delivered
// through whatever sink the embedder plugs in.

use serde::{Deserialize, Serialize};

use crate::types::{ActorId, CollectionId, MetadataId, ObjectId};

/// Bit flags naming the metadata fields touched by an update
///
/// The assignment is stable and part of the event schema.
pub mod metadata_fields {
    /// Collection name changed
    pub const NAME: u8 = 1 << 0;
    /// Description changed
    pub const DESCRIPTION: u8 = 1 << 1;
    /// Image URL changed
    pub const IMAGE_URL: u8 = 1 << 2;
    /// External URL set or cleared
    pub const EXTERNAL_URL: u8 = 1 << 3;
    /// Decimals hint changed
    pub const DECIMALS: u8 = 1 << 4;
    /// Advisory supply hint changed
    pub const MAX_SUPPLY_HINT: u8 = 1 << 5;
}

/// Ledger event stream entry
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LedgerEvent {
    // When a collection is registered for a type
    // Emitted by creation, right after CapabilitiesIssued
    CollectionRegistered {
        type_name: String,
        collection_id: CollectionId,
        metadata_id: MetadataId,
        name: String,
        max_supply: Option<u64>,
        pausable: bool,
        actor: ActorId,
    },
    // When the capability set of a new collection is minted
    // burn_cap_issued mirrors the centralize_burn config flag
    CapabilitiesIssued {
        collection_id: CollectionId,
        burn_cap_issued: bool,
        actor: ActorId,
    },
    // When a single token is counted into the supply
    TokenMinted {
        collection_id: CollectionId,
        token_id: ObjectId,
        actor: ActorId,
    },
    // When a batch is counted into the supply
    // One event per batch call, never one per element
    TokensMinted {
        collection_id: CollectionId,
        token_ids: Vec<ObjectId>,
        count: u64,
        actor: ActorId,
    },
    // When a token is counted out of the supply
    // owner_initiated is false for BurnCap burns
    TokenBurned {
        collection_id: CollectionId,
        token_id: ObjectId,
        owner_initiated: bool,
        actor: ActorId,
    },
    // When minting is paused
    // Not emitted when the collection was already paused
    MintingPaused {
        collection_id: CollectionId,
        actor: ActorId,
    },
    // When minting is resumed
    // Not emitted when the collection was not paused
    MintingResumed {
        collection_id: CollectionId,
        actor: ActorId,
    },
    // When metadata fields change
    // `fields` is the metadata_fields bitmask; each payload field carries
    // the new value and is only meaningful when its bit is set
    MetadataUpdated {
        metadata_id: MetadataId,
        collection_id: CollectionId,
        fields: u8,
        name: Option<String>,
        description: Option<String>,
        image_url: Option<String>,
        external_url: Option<String>,
        decimals: Option<u8>,
        max_supply_hint: Option<u64>,
        actor: ActorId,
    },
    // When the metadata record becomes permanently immutable
    MetadataFrozen {
        metadata_id: MetadataId,
        collection_id: CollectionId,
        actor: ActorId,
    },
    // When an unlimited collection fixes its cap at the minted count
    SupplyFinalized {
        collection_id: CollectionId,
        max_supply: u64,
        actor: ActorId,
    },
}

/// Destination for emitted events
///
/// Implemented by the embedder's indexing plumbing; [`MemoryEventLog`] is
/// the in-process implementation used by tests and simple hosts.
pub trait EventSink {
    fn emit(&mut self, event: LedgerEvent);
}

/// Append-only in-memory event log
#[derive(Debug, Default)]
pub struct MemoryEventLog {
    events: Vec<LedgerEvent>,
}

impl MemoryEventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LedgerEvent> {
        self.events.iter()
    }

    pub fn last(&self) -> Option<&LedgerEvent> {
        self.events.last()
    }

    /// Take all recorded events, leaving the log empty
    pub fn drain(&mut self) -> Vec<LedgerEvent> {
        std::mem::take(&mut self.events)
    }
}

impl EventSink for MemoryEventLog {
    fn emit(&mut self, event: LedgerEvent) {
        self.events.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serializes_snake_case() {
        let event = LedgerEvent::TokenMinted {
            collection_id: crate::types::CollectionId::new(ObjectId::from_bytes([1; 32])),
            token_id: ObjectId::from_bytes([2; 32]),
            actor: ActorId::new([3; 32]),
        };

        let json = serde_json::to_value(&event).unwrap();
        let payload = json.get("token_minted").expect("snake_case variant key");
        assert_eq!(
            payload.get("token_id").and_then(|v| v.as_str()),
            Some("02".repeat(32).as_str())
        );

        let back: LedgerEvent = serde_json::from_value(json).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn test_field_mask_bits_distinct() {
        let bits = [
            metadata_fields::NAME,
            metadata_fields::DESCRIPTION,
            metadata_fields::IMAGE_URL,
            metadata_fields::EXTERNAL_URL,
            metadata_fields::DECIMALS,
            metadata_fields::MAX_SUPPLY_HINT,
        ];
        let mut combined = 0u8;
        for bit in bits {
            assert_eq!(combined & bit, 0, "overlapping mask bit {bit}");
            combined |= bit;
        }
        assert_eq!(combined, 0b0011_1111);
    }

    #[test]
    fn test_memory_log_records_in_order() {
        let mut log = MemoryEventLog::new();
        assert!(log.is_empty());

        log.emit(LedgerEvent::MintingPaused {
            collection_id: crate::types::CollectionId::new(ObjectId::from_bytes([1; 32])),
            actor: ActorId::new([0; 32]),
        });
        log.emit(LedgerEvent::MintingResumed {
            collection_id: crate::types::CollectionId::new(ObjectId::from_bytes([1; 32])),
            actor: ActorId::new([0; 32]),
        });

        assert_eq!(log.len(), 2);
        assert!(matches!(
            log.last(),
            Some(LedgerEvent::MintingResumed { .. })
        ));

        let drained = log.drain();
        assert_eq!(drained.len(), 2);
        assert!(log.is_empty());
    }
}
