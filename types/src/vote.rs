//! Votes already recorded on chain for a user.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::address::NomineeAddress;
use crate::amount::BaseUnits;
use crate::chain::ChainId;
use crate::time::Timestamp;

/// One point of a user's vote slope for a nominee.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VotePoint {
    /// Weight the user assigned to the nominee, in base units.
    pub power: BaseUnits,
    /// When the user's lock backing this vote ends.
    #[serde(default)]
    pub end: Timestamp,
    /// veOLAS slope contributed to the nominee.
    #[serde(default)]
    pub slope: u128,
}

impl VotePoint {
    pub fn with_power(power: BaseUnits) -> Self {
        Self {
            power,
            ..Self::default()
        }
    }
}

/// A user's recorded vote for one nominee: the point in effect now and the
/// one scheduled for the next epoch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserVote {
    pub chain_id: ChainId,
    pub current: VotePoint,
    #[serde(default)]
    pub next: VotePoint,
}

impl UserVote {
    /// A vote with the same power now and next epoch.
    pub fn new(chain_id: ChainId, power: BaseUnits) -> Self {
        Self {
            chain_id,
            current: VotePoint::with_power(power),
            next: VotePoint::with_power(power),
        }
    }

    pub fn power(&self) -> BaseUnits {
        self.current.power
    }
}

/// All of a user's recorded votes, keyed by nominee address.
///
/// Keys compare case-insensitively, so iteration order is deterministic and
/// an address cannot appear twice under different casings.
pub type UserVotes = BTreeMap<NomineeAddress, UserVote>;

/// Sum of the current power over all recorded votes.
pub fn total_power(votes: &UserVotes) -> BaseUnits {
    votes
        .values()
        .fold(BaseUnits::ZERO, |acc, vote| acc.saturating_add(vote.power()))
}
