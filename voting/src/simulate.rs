//! Replay of vote instructions against the per-user power budget.

use std::collections::HashMap;

use veolas_types::{BaseUnits, ReorderedVote, UserVotes};

use crate::error::BudgetError;

/// Apply `instructions` in order on top of `user_votes` the way the voting
/// contract would, failing at the first call that leaves the user's total
/// power above `budget`. Returns the final total.
pub fn simulate(
    user_votes: &UserVotes,
    instructions: &[ReorderedVote],
    budget: BaseUnits,
) -> Result<BaseUnits, BudgetError> {
    let mut powers: HashMap<String, u128> = user_votes
        .iter()
        .map(|(address, vote)| (address.key(), u128::from(vote.power().get())))
        .collect();
    let mut total: u128 = powers.values().sum();

    for (index, instruction) in instructions.iter().enumerate() {
        let new = u128::from(instruction.weight.get());
        let old = powers.insert(instruction.address.key(), new).unwrap_or(0);
        total = total - old + new;

        if total > u128::from(budget.get()) {
            tracing::trace!(index, address = %instruction.address, total, "vote would revert");
            return Err(BudgetError::Exceeded {
                index,
                address: instruction.address.clone(),
                total,
                budget,
            });
        }
    }

    Ok(BaseUnits::new(u64::try_from(total).unwrap_or(u64::MAX)))
}
