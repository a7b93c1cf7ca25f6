// NFT Supply Ledger
// Capability-gated supply accounting for NFT collections.
//
// Features:
// - One collection per nominal type, tracked in a global registry
// - Mint/burn counting with optional hard cap enforcement
// - Pause control for pausable collections
// - One-way metadata freeze and one-way supply finalization
// - Dual burn authorization: BurnCap holders, or token owners where allowed
// - Append-only event stream for external indexers
//
// Module Structure:
// - error: Error codes and types
// - types: Identifiers and registry keys
// - caps: Capability tokens (MintCap, BurnCap, MetadataAdminCap)
// - ledger: Collection records, config and supply queries
// - identity: Token identity and the collection tag
// - registry: Per-type collection registry
// - events: Event stream types and sinks
// - shared: Lock-guarded shared collection access
// - operations: Core operation logic (create, mint, burn, metadata)

mod caps;
mod error;
mod events;
mod identity;
mod ledger;
pub mod operations;
mod registry;
mod shared;
mod types;

pub use caps::*;
pub use error::*;
pub use events::*;
pub use identity::*;
pub use ledger::*;
pub use operations::*;
pub use registry::*;
pub use shared::*;
pub use types::*;
