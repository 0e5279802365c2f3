//! Value types for veOLAS nominee voting.
//!
//! This crate defines the types shared across the workspace: nominee
//! addresses, chain identifiers, base-unit weights, recorded on-chain votes,
//! the user's desired allocations and the ordered vote instructions produced
//! from them.

pub mod address;
pub mod amount;
pub mod chain;
pub mod error;
pub mod nominee;
pub mod time;
pub mod vote;

pub use address::NomineeAddress;
pub use amount::BaseUnits;
pub use chain::ChainId;
pub use error::TypesError;
pub use nominee::{Allocation, NomineeMetadata, ReorderedVote, StakingContract};
pub use time::Timestamp;
pub use vote::{total_power, UserVote, UserVotes, VotePoint};
