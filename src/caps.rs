// NFT Supply Ledger - Capability Tokens
// Unforgeable authority values minted once per collection. Possession is
// the entire permission model: no signer lists, no role lookups.

use std::fmt;
use std::marker::PhantomData;

use crate::types::CollectionId;

/// Authority to mint into the collection of `T`
///
/// Issued exactly once by collection creation. Not cloneable; transferring
/// it is a plain move. Consumed by `finalize_supply`, which permanently
/// fixes the collection cap.
pub struct MintCap<T> {
    collection_id: CollectionId,
    _marker: PhantomData<fn() -> T>,
}

impl<T> MintCap<T> {
    pub(crate) const fn new(collection_id: CollectionId) -> Self {
        Self {
            collection_id,
            _marker: PhantomData,
        }
    }

    /// Collection this capability was minted for
    pub const fn collection_id(&self) -> CollectionId {
        self.collection_id
    }
}

impl<T> fmt::Debug for MintCap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MintCap")
            .field("collection_id", &self.collection_id)
            .finish()
    }
}

/// Authority to burn out of the collection of `T`
///
/// Issued only when the collection centralizes burns; collections that
/// allow owner-initiated burns never mint one.
pub struct BurnCap<T> {
    collection_id: CollectionId,
    _marker: PhantomData<fn() -> T>,
}

impl<T> BurnCap<T> {
    pub(crate) const fn new(collection_id: CollectionId) -> Self {
        Self {
            collection_id,
            _marker: PhantomData,
        }
    }

    /// Collection this capability was minted for
    pub const fn collection_id(&self) -> CollectionId {
        self.collection_id
    }
}

impl<T> fmt::Debug for BurnCap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BurnCap")
            .field("collection_id", &self.collection_id)
            .finish()
    }
}

/// Authority over the mutable metadata of the collection of `T`
///
/// Consumed by `freeze_metadata`, after which no metadata field can ever
/// change again.
pub struct MetadataAdminCap<T> {
    collection_id: CollectionId,
    _marker: PhantomData<fn() -> T>,
}

impl<T> MetadataAdminCap<T> {
    pub(crate) const fn new(collection_id: CollectionId) -> Self {
        Self {
            collection_id,
            _marker: PhantomData,
        }
    }

    /// Collection this capability was minted for
    pub const fn collection_id(&self) -> CollectionId {
        self.collection_id
    }
}

impl<T> fmt::Debug for MetadataAdminCap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MetadataAdminCap")
            .field("collection_id", &self.collection_id)
            .finish()
    }
}

/// Proof of authority over the nominal type `T` itself
///
/// Collection creation demands one so that only the module defining `T`
/// can open a collection for it. Producing this value honestly is the
/// embedder's contract obligation: the defining module claims it once and
/// never hands it out. The ledger checks possession, nothing more.
pub struct TypeAuthority<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> TypeAuthority<T> {
    /// Claim authority over `T`
    ///
    /// Call this only from the module that defines `T`.
    pub const fn claim() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> fmt::Debug for TypeAuthority<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeAuthority<{}>", std::any::type_name::<T>())
    }
}
