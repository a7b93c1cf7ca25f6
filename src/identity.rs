// NFT Supply Ledger - Token Identity
// The bare identity value a foreign NFT struct embeds. Carries the unique
// object id and the collection tag that links the token to its ledger.
// Tag lifecycle: written once at mint, read freely, removed once at burn.

use crate::error::{LedgerError, LedgerResult};
use crate::types::{CollectionId, ObjectId};

/// Identity of one token
///
/// Not cloneable: one value per live token. The embedder stores it inside
/// the NFT struct and hands it to the mint and burn operations.
#[derive(Debug)]
pub struct TokenIdentity {
    id: ObjectId,
    collection: Option<CollectionId>,
}

impl TokenIdentity {
    /// Create a fresh, untagged identity
    pub fn fresh() -> Self {
        Self {
            id: ObjectId::random(),
            collection: None,
        }
    }

    /// Unique id of this token
    pub const fn id(&self) -> ObjectId {
        self.id
    }

    /// Collection tag, failing if the token was never minted
    pub fn collection_tag(&self) -> LedgerResult<CollectionId> {
        self.collection.ok_or(LedgerError::TagNotFound)
    }

    /// Collection tag if present
    pub const fn try_collection_tag(&self) -> Option<CollectionId> {
        self.collection
    }

    /// Collection tag, or `default` if the token carries none
    pub fn collection_tag_or(&self, default: CollectionId) -> CollectionId {
        self.collection.unwrap_or(default)
    }

    /// Whether the token carries a collection tag
    pub const fn has_collection_tag(&self) -> bool {
        self.collection.is_some()
    }

    /// Write the tag, exactly once
    pub(crate) fn attach(&mut self, collection: CollectionId) -> LedgerResult<()> {
        if self.collection.is_some() {
            return Err(LedgerError::DuplicateRegistration);
        }
        self.collection = Some(collection);
        Ok(())
    }

    /// Remove the tag
    ///
    /// Callers verify the tag names the expected collection first; burn
    /// does so before touching any counter.
    pub(crate) fn clear_tag(&mut self) {
        self.collection = None;
    }
}

/// Collection tags of a batch of tokens
///
/// Fails with [`LedgerError::TagNotFound`] if any element carries no tag.
pub fn collection_tags(tokens: &[TokenIdentity]) -> LedgerResult<Vec<CollectionId>> {
    tokens.iter().map(TokenIdentity::collection_tag).collect()
}
