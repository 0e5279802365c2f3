//! End-to-end vote planning: validate, reorder, verify, batch.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use veolas_types::{Allocation, BaseUnits, ReorderedVote, StakingContract, UserVotes};

use crate::batch::VoteBatch;
use crate::config::PlannerConfig;
use crate::directory::{NomineeDirectory, StakingDirectory};
use crate::error::PlanError;
use crate::reorder::reorder_with_directory;
use crate::simulate::simulate;
use crate::validation::{validate_allocations, validate_user_votes};

/// Everything needed to plan a vote submission, as fetched for one user.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteSnapshot {
    #[serde(default)]
    pub allocations: Vec<Allocation>,
    #[serde(default)]
    pub user_votes: UserVotes,
    #[serde(default)]
    pub staking_contracts: Vec<StakingContract>,
}

/// One planned instruction with the nominee's display name, if known.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanEntry {
    #[serde(flatten)]
    pub vote: ReorderedVote,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// The result of planning: instructions in submission order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VotePlan {
    pub entries: Vec<PlanEntry>,
    pub batch: VoteBatch,
    /// Weight assigned by the allocation.
    pub allocated: BaseUnits,
    /// Weight left for the retainer.
    pub unallocated: BaseUnits,
}

impl VotePlan {
    pub fn votes(&self) -> impl Iterator<Item = &ReorderedVote> {
        self.entries.iter().map(|e| &e.vote)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub struct VotePlanner {
    config: PlannerConfig,
}

impl VotePlanner {
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Check the snapshot's magnitudes and return the allocated total.
    pub fn validate(&self, snapshot: &VoteSnapshot) -> Result<BaseUnits, PlanError> {
        let budget = self.config.budget();
        let allocated = validate_allocations(&snapshot.allocations, budget).inspect_err(|e| {
            tracing::warn!(error = %e, "allocation rejected");
        })?;
        validate_user_votes(&snapshot.user_votes, budget).inspect_err(|e| {
            tracing::warn!(error = %e, "recorded votes rejected");
        })?;
        Ok(allocated)
    }

    /// Plan the ordered vote instructions for a snapshot.
    pub fn plan(&self, snapshot: &VoteSnapshot) -> Result<VotePlan, PlanError> {
        let budget = self.config.budget();
        let allocated = self.validate(snapshot)?;

        let directory = StakingDirectory::new(&snapshot.staking_contracts);
        let votes = reorder_with_directory(&snapshot.allocations, &snapshot.user_votes, &directory);

        if self.config.verify_budget {
            let total = simulate(&snapshot.user_votes, &votes, budget)?;
            tracing::debug!(%total, %budget, "planned order stays within budget");
        }

        let names: HashMap<String, &str> = snapshot
            .allocations
            .iter()
            .filter_map(|a| a.metadata.as_ref().map(|m| (a.address.key(), m.name.as_str())))
            .collect();
        let entries: Vec<PlanEntry> = votes
            .iter()
            .map(|vote| {
                let name = names
                    .get(&vote.address.key())
                    .copied()
                    .or_else(|| directory.metadata(&vote.address).map(|m| m.name.as_str()))
                    .map(str::to_string);
                PlanEntry {
                    vote: vote.clone(),
                    name,
                }
            })
            .collect();

        let plan = VotePlan {
            batch: VoteBatch::from_votes(&votes),
            entries,
            allocated,
            unallocated: allocated.remaining_of(budget),
        };

        tracing::info!(
            instructions = plan.entries.len(),
            allocated = %plan.allocated,
            unallocated = %plan.unallocated,
            "vote plan ready"
        );
        Ok(plan)
    }
}

impl Default for VotePlanner {
    fn default() -> Self {
        Self::new(PlannerConfig::default())
    }
}
