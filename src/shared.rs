// NFT Supply Ledger - Shared Collection Access
// Multi-party hosts share one collection between threads; the record pair
// lives behind a single writer lock so every transition runs alone and
// readers never observe a half-applied operation.

use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::ledger::{CollectionLedger, CollectionMetadata};

/// The ledger and metadata of one collection, locked together
///
/// Keeping both records under one lock means pause checks, supply counts
/// and metadata reads are always mutually consistent.
pub struct CollectionRecords<T> {
    pub ledger: CollectionLedger<T>,
    pub metadata: CollectionMetadata<T>,
}

/// Shared handle to a collection's record pair
pub struct SharedCollection<T> {
    inner: Arc<RwLock<CollectionRecords<T>>>,
}

impl<T> SharedCollection<T> {
    /// Put a collection's records behind a shared lock
    pub fn new(ledger: CollectionLedger<T>, metadata: CollectionMetadata<T>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(CollectionRecords { ledger, metadata })),
        }
    }

    /// Lock for reading; many readers may hold this at once
    pub fn read(&self) -> RwLockReadGuard<'_, CollectionRecords<T>> {
        self.inner.read()
    }

    /// Lock for a mutating operation; exclusive
    pub fn write(&self) -> RwLockWriteGuard<'_, CollectionRecords<T>> {
        self.inner.write()
    }
}

impl<T> Clone for SharedCollection<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::caps::TypeAuthority;
    use crate::events::MemoryEventLog;
    use crate::identity::TokenIdentity;
    use crate::ledger::CollectionConfig;
    use crate::operations::{create_collection, track_mint, TxContext};
    use crate::registry::CollectionRegistry;
    use crate::types::ActorId;

    struct Art;

    #[test]
    fn test_concurrent_mints_respect_cap() {
        let mut events = MemoryEventLog::new();
        let mut registry = CollectionRegistry::new();
        let created = create_collection(
            &mut events,
            &TxContext::new(ActorId::new([9; 32])),
            &TypeAuthority::<Art>::claim(),
            &mut registry,
            CollectionConfig::new("Art", "Generative art", "https://img.example/art.png")
                .with_max_supply(100),
        )
        .unwrap();

        let shared = SharedCollection::new(created.ledger, created.metadata);
        let mint_cap = created.mint_cap;

        std::thread::scope(|scope| {
            for worker in 0..4u8 {
                let shared = shared.clone();
                let cap = &mint_cap;
                scope.spawn(move || {
                    let ctx = TxContext::new(ActorId::new([worker; 32]));
                    let mut log = MemoryEventLog::new();
                    for _ in 0..25 {
                        let mut token = TokenIdentity::fresh();
                        let mut records = shared.write();
                        track_mint(&mut log, &ctx, cap, &mut records.ledger, &mut token)
                            .unwrap();
                    }
                    assert_eq!(log.len(), 25);
                });
            }
        });

        let records = shared.read();
        assert_eq!(records.ledger.minted(), 100);
        assert_eq!(records.ledger.remaining_supply(), Some(0));
    }

    #[test]
    fn test_readers_see_consistent_pair() {
        let mut events = MemoryEventLog::new();
        let mut registry = CollectionRegistry::new();
        let created = create_collection(
            &mut events,
            &TxContext::new(ActorId::new([9; 32])),
            &TypeAuthority::<Art>::claim(),
            &mut registry,
            CollectionConfig::new("Art", "Generative art", "https://img.example/art.png"),
        )
        .unwrap();

        let shared = SharedCollection::new(created.ledger, created.metadata);
        let records = shared.read();
        assert_eq!(records.metadata.id(), records.ledger.metadata_id());
        assert_eq!(
            records.metadata.collection_id(),
            records.ledger.collection_id()
        );
    }
}
