// NFT Supply Ledger - Error Codes
// This module defines all error codes for ledger operations.
//
// Error Code Ranges:
// - 0: Success
// - 1-99: Registry and collection errors
// - 100-199: Identity tag errors
// - 200-299: Lifecycle state errors
// - 300-399: Input validation errors
// - 900-999: System errors

use thiserror::Error;

/// Ledger operation result type
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Ledger error type with numeric code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[repr(u64)]
pub enum LedgerError {
    // ========================================
    // Registry and collection errors (1-99)
    // ========================================
    #[error("Collection already registered for this type")]
    AlreadyRegistered = 1,

    #[error("No collection registered for this type")]
    NotRegistered = 2,

    #[error("Max supply exceeded")]
    MaxSupplyExceeded = 3,

    #[error("Collection is paused")]
    CollectionPaused = 4,

    #[error("Collection is not pausable")]
    CollectionNotPausable = 5,

    #[error("Collection id mismatch")]
    CollectionMismatch = 6,

    // ========================================
    // Identity tag errors (100-199)
    // ========================================
    #[error("Identity already carries a collection tag")]
    DuplicateRegistration = 100,

    #[error("Identity carries no collection tag")]
    TagNotFound = 101,

    // ========================================
    // Lifecycle state errors (200-299)
    // ========================================
    #[error("Owner-initiated burn is disabled")]
    OwnerBurnDisabled = 200,

    #[error("Metadata is frozen")]
    MetadataFrozen = 201,

    #[error("Supply is already fixed")]
    AlreadyFixedSupply = 202,

    #[error("Cannot finalize zero supply")]
    CannotFinalizeZeroSupply = 203,

    // ========================================
    // Input validation errors (300-399)
    // ========================================
    #[error("Image URL is empty")]
    EmptyImageUrl = 300,

    #[error("External URL is empty")]
    EmptyExternalUrl = 301,

    #[error("Amount must be non-zero")]
    ZeroAmount = 302,

    // ========================================
    // System errors (900-999)
    // ========================================
    #[error("Arithmetic overflow")]
    Overflow = 900,
}

impl LedgerError {
    /// Get the numeric error code
    #[inline]
    pub fn code(&self) -> u64 {
        *self as u64
    }

    /// Create error from numeric code
    pub fn from_code(code: u64) -> Option<Self> {
        match code {
            1 => Some(Self::AlreadyRegistered),
            2 => Some(Self::NotRegistered),
            3 => Some(Self::MaxSupplyExceeded),
            4 => Some(Self::CollectionPaused),
            5 => Some(Self::CollectionNotPausable),
            6 => Some(Self::CollectionMismatch),
            100 => Some(Self::DuplicateRegistration),
            101 => Some(Self::TagNotFound),
            200 => Some(Self::OwnerBurnDisabled),
            201 => Some(Self::MetadataFrozen),
            202 => Some(Self::AlreadyFixedSupply),
            203 => Some(Self::CannotFinalizeZeroSupply),
            300 => Some(Self::EmptyImageUrl),
            301 => Some(Self::EmptyExternalUrl),
            302 => Some(Self::ZeroAmount),
            900 => Some(Self::Overflow),
            _ => None,
        }
    }
}
