// NFT Supply Ledger - Collection Registry
// Global per-type map of registered collections. Insertion-only: a type
// registered once stays registered for the lifetime of the registry, which
// is what makes "at most one collection per type" enforceable.

use indexmap::IndexMap;

use crate::error::{LedgerError, LedgerResult};
use crate::types::{
    CollectionId, CollectionLocator, MetadataId, ObjectId, TypeKey, COLLECTION_ID_DOMAIN,
    METADATA_ID_DOMAIN,
};

/// Registry of all collections, keyed by nominal type
///
/// Created once by the embedder at system initialization and threaded
/// through collection creation by mutable reference. Also owns the id
/// allocator for collection and metadata records.
#[derive(Debug)]
pub struct CollectionRegistry {
    collections: IndexMap<TypeKey, CollectionLocator>,
    /// Instance salt mixed into every derived id
    salt: [u8; 32],
    /// Allocation nonce, incremented per registration
    nonce: u64,
}

impl CollectionRegistry {
    /// Create an empty registry with a fresh id-allocation salt
    pub fn new() -> Self {
        use rand::Rng;
        Self {
            collections: IndexMap::new(),
            salt: rand::thread_rng().gen(),
            nonce: 0,
        }
    }

    /// Register a collection for `T`, allocating its record ids
    ///
    /// Fails with [`LedgerError::AlreadyRegistered`] if `T` already has a
    /// collection; nothing is allocated in that case.
    pub(crate) fn register<T: 'static>(&mut self) -> LedgerResult<CollectionLocator> {
        let key = TypeKey::of::<T>();
        if self.collections.contains_key(&key) {
            return Err(LedgerError::AlreadyRegistered);
        }

        let nonce = self.next_nonce()?;
        let locator = CollectionLocator {
            collection_id: CollectionId::new(ObjectId::derive(
                COLLECTION_ID_DOMAIN,
                &self.salt,
                key.name(),
                nonce,
            )),
            metadata_id: MetadataId::new(ObjectId::derive(
                METADATA_ID_DOMAIN,
                &self.salt,
                key.name(),
                nonce,
            )),
        };

        self.collections.insert(key, locator);
        Ok(locator)
    }

    /// Locator of the collection registered for `T`
    pub fn lookup<T: 'static>(&self) -> LedgerResult<CollectionLocator> {
        self.collections
            .get(&TypeKey::of::<T>())
            .copied()
            .ok_or(LedgerError::NotRegistered)
    }

    /// Whether `T` has a registered collection
    pub fn exists<T: 'static>(&self) -> bool {
        self.collections.contains_key(&TypeKey::of::<T>())
    }

    /// Registered collections in registration order
    pub fn iter(&self) -> impl Iterator<Item = (&TypeKey, &CollectionLocator)> {
        self.collections.iter()
    }

    /// Number of registered collections
    pub fn len(&self) -> usize {
        self.collections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }

    /// Get the next allocation nonce and increment
    fn next_nonce(&mut self) -> LedgerResult<u64> {
        let nonce = self.nonce;
        self.nonce = self.nonce.checked_add(1).ok_or(LedgerError::Overflow)?;
        Ok(nonce)
    }
}

impl Default for CollectionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
