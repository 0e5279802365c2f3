//! Magnitude checks on an allocation before it is planned.
//!
//! The reorderer accepts any input; these checks are what the voting form
//! enforces before letting a user submit.

use std::collections::HashSet;

use rust_decimal::Decimal;
use veolas_types::{total_power, Allocation, BaseUnits, UserVotes};

use crate::error::AllocationError;

/// Most fractional digits a percentage may carry (0.01% = 1 base unit).
const MAX_WEIGHT_SCALE: u32 = 2;

/// Check an allocation and return its total in base units.
pub fn validate_allocations(
    allocations: &[Allocation],
    budget: BaseUnits,
) -> Result<BaseUnits, AllocationError> {
    let mut seen = HashSet::with_capacity(allocations.len());
    let mut total = BaseUnits::ZERO;

    for allocation in allocations {
        let weight = allocation.weight;
        if weight.is_sign_negative() && !weight.is_zero() {
            return Err(AllocationError::NegativeWeight {
                address: allocation.address.clone(),
                weight: weight.to_string(),
            });
        }
        if weight > Decimal::ONE_HUNDRED {
            return Err(AllocationError::WeightTooLarge {
                address: allocation.address.clone(),
                weight: weight.to_string(),
            });
        }
        if weight.normalize().scale() > MAX_WEIGHT_SCALE {
            return Err(AllocationError::TooPrecise {
                address: allocation.address.clone(),
                weight: weight.to_string(),
            });
        }
        if !seen.insert(allocation.address.key()) {
            return Err(AllocationError::DuplicateNominee(allocation.address.clone()));
        }
        total = total.saturating_add(allocation.base_units());
    }

    if total > budget {
        return Err(AllocationError::OverBudget { total, budget });
    }
    Ok(total)
}

/// Check that the recorded votes themselves fit the budget.
pub fn validate_user_votes(
    user_votes: &UserVotes,
    budget: BaseUnits,
) -> Result<BaseUnits, AllocationError> {
    let total = total_power(user_votes);
    if total > budget {
        return Err(AllocationError::PriorVotesOverBudget { total, budget });
    }
    Ok(total)
}
