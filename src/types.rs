// NFT Supply Ledger - Core Types
// Identifiers, registry keys and protocol constants shared across the ledger.

use std::any::TypeId;
use std::fmt;

use serde::{Deserialize, Serialize};

// ========================================
// Protocol Constants
// ========================================

/// Metadata schema version stamped on every collection
pub const METADATA_VERSION: u8 = 1;

/// Domain separation prefix for collection record ids
pub(crate) const COLLECTION_ID_DOMAIN: &[u8] = b"NFT_LEDGER_COLLECTION:";

/// Domain separation prefix for metadata record ids
pub(crate) const METADATA_ID_DOMAIN: &[u8] = b"NFT_LEDGER_METADATA:";

// ========================================
// Object Identifiers
// ========================================

/// Unique 32-byte object identifier, rendered as hex
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ObjectId(#[serde(with = "hex::serde")] [u8; 32]);

impl ObjectId {
    /// Construct from raw bytes
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Derive an id from a domain prefix, an allocator salt, a type name
    /// and an allocation nonce
    ///
    /// The salt keeps independent registries from allocating the same id
    /// for the same type name; the nonce separates allocations within one
    /// registry.
    pub(crate) fn derive(domain: &[u8], salt: &[u8; 32], type_name: &str, nonce: u64) -> Self {
        let mut hasher = blake3::Hasher::new();
        hasher.update(domain);
        hasher.update(salt);
        hasher.update(type_name.as_bytes());
        hasher.update(&nonce.to_le_bytes());
        Self(hasher.finalize().into())
    }

    /// Generate a fresh random id
    pub fn random() -> Self {
        use rand::Rng;
        Self(rand::thread_rng().gen())
    }

    /// Raw bytes of the id
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl fmt::Debug for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectId({})", self)
    }
}

/// Identifier of a collection ledger record
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CollectionId(ObjectId);

impl CollectionId {
    pub(crate) const fn new(id: ObjectId) -> Self {
        Self(id)
    }

    /// Underlying object id
    pub const fn object_id(&self) -> ObjectId {
        self.0
    }
}

impl fmt::Display for CollectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl fmt::Debug for CollectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CollectionId({})", self.0)
    }
}

/// Identifier of a collection metadata record
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetadataId(ObjectId);

impl MetadataId {
    pub(crate) const fn new(id: ObjectId) -> Self {
        Self(id)
    }

    /// Underlying object id
    pub const fn object_id(&self) -> ObjectId {
        self.0
    }
}

impl fmt::Display for MetadataId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl fmt::Debug for MetadataId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MetadataId({})", self.0)
    }
}

// ========================================
// Actors
// ========================================

/// 32-byte account identifier of the transaction sender
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActorId(#[serde(with = "hex::serde")] [u8; 32]);

impl ActorId {
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl From<[u8; 32]> for ActorId {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl fmt::Debug for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ActorId({})", self)
    }
}

// ========================================
// Registry Keys
// ========================================

/// Registry key for a nominal Rust type
///
/// Wraps the `TypeId` for identity and keeps the type name for display
/// and event payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeKey {
    id: TypeId,
    name: &'static str,
}

impl TypeKey {
    /// Key for the type `T`
    pub fn of<T: 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// Fully qualified name of the keyed type
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Locator of the two records backing a registered collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionLocator {
    pub collection_id: CollectionId,
    pub metadata_id: MetadataId,
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Art;
    struct Pass;

    #[test]
    fn test_object_id_hex_display() {
        let id = ObjectId::from_bytes([0xab; 32]);
        let display = id.to_string();
        assert_eq!(display.len(), 64);
        assert!(display.starts_with("abab"));
    }

    #[test]
    fn test_random_ids_distinct() {
        let a = ObjectId::random();
        let b = ObjectId::random();
        assert_ne!(a, b);
    }

    const SALT: [u8; 32] = [0x55; 32];

    #[test]
    fn test_derive_is_deterministic() {
        let a = ObjectId::derive(COLLECTION_ID_DOMAIN, &SALT, "demo::Art", 7);
        let b = ObjectId::derive(COLLECTION_ID_DOMAIN, &SALT, "demo::Art", 7);
        assert_eq!(a, b);
    }

    #[test]
    fn test_derive_domain_separation() {
        // Same salt, name and nonce under different domains must not collide
        let a = ObjectId::derive(COLLECTION_ID_DOMAIN, &SALT, "demo::Art", 0);
        let b = ObjectId::derive(METADATA_ID_DOMAIN, &SALT, "demo::Art", 0);
        assert_ne!(a, b);
    }

    #[test]
    fn test_derive_nonce_separation() {
        let a = ObjectId::derive(COLLECTION_ID_DOMAIN, &SALT, "demo::Art", 0);
        let b = ObjectId::derive(COLLECTION_ID_DOMAIN, &SALT, "demo::Art", 1);
        assert_ne!(a, b);
    }

    #[test]
    fn test_derive_salt_separation() {
        let a = ObjectId::derive(COLLECTION_ID_DOMAIN, &SALT, "demo::Art", 0);
        let b = ObjectId::derive(COLLECTION_ID_DOMAIN, &[0x66; 32], "demo::Art", 0);
        assert_ne!(a, b);
    }

    #[test]
    fn test_type_key_identity() {
        assert_eq!(TypeKey::of::<Art>(), TypeKey::of::<Art>());
        assert_ne!(TypeKey::of::<Art>(), TypeKey::of::<Pass>());
        assert!(TypeKey::of::<Art>().name().contains("Art"));
    }

    #[test]
    fn test_id_serde_hex_shape() {
        let id = ObjectId::from_bytes([0x01; 32]);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", "01".repeat(32)));

        let back: ObjectId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_actor_id_serde_hex_shape() {
        let actor = ActorId::new([0xcd; 32]);
        let json = serde_json::to_string(&actor).unwrap();
        assert_eq!(json, format!("\"{}\"", "cd".repeat(32)));
    }
}
