use std::path::PathBuf;

use thiserror::Error;
use veolas_types::{BaseUnits, NomineeAddress};

/// Rejections raised while checking a user's allocation before planning.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AllocationError {
    #[error("weight for {address} is negative: {weight}%")]
    NegativeWeight { address: NomineeAddress, weight: String },

    #[error("weight for {address} exceeds 100%: {weight}%")]
    WeightTooLarge { address: NomineeAddress, weight: String },

    #[error("weight for {address} has more than two decimal places: {weight}%")]
    TooPrecise { address: NomineeAddress, weight: String },

    #[error("nominee {0} is allocated more than once")]
    DuplicateNominee(NomineeAddress),

    #[error("total allocation {total} exceeds budget {budget} base units")]
    OverBudget { total: BaseUnits, budget: BaseUnits },

    #[error("recorded votes total {total} exceeds budget {budget} base units")]
    PriorVotesOverBudget { total: BaseUnits, budget: BaseUnits },
}

/// A vote instruction that would make the contract revert.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BudgetError {
    #[error(
        "instruction {index} for {address} raises total power to {total}, over budget {budget}"
    )]
    Exceeded {
        index: usize,
        address: NomineeAddress,
        total: u128,
        budget: BaseUnits,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("max_weight must be positive")]
    ZeroBudget,
}

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("allocation rejected: {0}")]
    Allocation(#[from] AllocationError),

    #[error("vote order rejected: {0}")]
    Budget(#[from] BudgetError),
}
