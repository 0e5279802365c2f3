//! Nominees, the user's desired allocation over them, and the vote
//! instructions sent to the voting contract.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::address::NomineeAddress;
use crate::amount::{self, BaseUnits};
use crate::chain::ChainId;

/// Display metadata for a nominee, resolved off chain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NomineeMetadata {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Directory entry for a nominee the user may vote for.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StakingContract {
    pub address: NomineeAddress,
    pub chain_id: ChainId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<NomineeMetadata>,
}

/// The weight a user wants a nominee to have after submission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Allocation {
    pub address: NomineeAddress,
    pub chain_id: ChainId,
    /// Percentage of voting power, 0 to 100 with two fractional digits.
    pub weight: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<NomineeMetadata>,
}

impl Allocation {
    pub fn new(address: impl Into<NomineeAddress>, chain_id: ChainId, weight: Decimal) -> Self {
        Self {
            address: address.into(),
            chain_id,
            weight,
            metadata: None,
        }
    }

    pub fn with_metadata(mut self, metadata: NomineeMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// The desired weight in base units, truncated.
    pub fn base_units(&self) -> BaseUnits {
        BaseUnits::from_percent(self.weight)
    }
}

/// One vote instruction: the new absolute weight for a nominee.
///
/// A list of these is only meaningful in the order it was produced.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderedVote {
    pub address: NomineeAddress,
    pub chain_id: ChainId,
    #[serde(with = "amount::as_string")]
    pub weight: BaseUnits,
}

impl ReorderedVote {
    pub fn new(address: NomineeAddress, chain_id: ChainId, weight: BaseUnits) -> Self {
        Self {
            address,
            chain_id,
            weight,
        }
    }

    /// Instruction clearing a nominee's weight to zero.
    pub fn reset(address: NomineeAddress, chain_id: ChainId) -> Self {
        Self::new(address, chain_id, BaseUnits::ZERO)
    }

    /// Instruction setting a nominee to its allocated weight.
    pub fn from_allocation(allocation: &Allocation) -> Self {
        Self::new(
            allocation.address.clone(),
            allocation.chain_id,
            allocation.base_units(),
        )
    }
}

impl From<&StakingContract> for ReorderedVote {
    fn from(contract: &StakingContract) -> Self {
        Self::reset(contract.address.clone(), contract.chain_id)
    }
}
