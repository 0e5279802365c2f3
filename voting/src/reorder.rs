//! Budget-safe ordering of nominee vote changes.
//!
//! The voting contract rejects any single call after which the user's total
//! power exceeds the budget. Sending the new weights in arbitrary order can
//! therefore revert halfway even when the final allocation is within budget.
//! Instructions are emitted in four groups:
//!
//! 1. resets of nominees dropped from the allocation
//! 2. decreases of nominees already voted for
//! 3. increases of nominees already voted for, smallest first
//! 4. nominees voted for the first time, smallest first
//!
//! After groups 1 and 2 every nominee sits at `min(old, new)`, so each later
//! increase keeps the running total at or below the final total.
//! Nominees whose weight does not change produce no instruction.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use veolas_types::{Allocation, BaseUnits, ReorderedVote, StakingContract, UserVotes};

use crate::directory::{NomineeDirectory, StakingDirectory};

/// Order the changes from `user_votes` to `allocations` so that applying
/// them one by one never exceeds the voting budget.
///
/// `staking_contracts` only supplies the address record for resets. A
/// removed nominee missing from it is still reset using its recorded vote.
/// A removed nominee whose recorded power is already zero gets no reset, so
/// the output can be shorter than `user_votes` even when `allocations` is
/// empty.
///
/// Magnitudes are not checked: allocations summing past the budget are
/// reordered all the same. See [`crate::validate_allocations`].
pub fn reorder_votes(
    allocations: &[Allocation],
    user_votes: &UserVotes,
    staking_contracts: &[StakingContract],
) -> Vec<ReorderedVote> {
    let directory = StakingDirectory::new(staking_contracts);
    reorder_with_directory(allocations, user_votes, &directory)
}

/// [`reorder_votes`] against any [`NomineeDirectory`].
pub fn reorder_with_directory<D>(
    allocations: &[Allocation],
    user_votes: &UserVotes,
    directory: &D,
) -> Vec<ReorderedVote>
where
    D: NomineeDirectory + ?Sized,
{
    let allocations = dedup_allocations(allocations);
    let by_address: HashMap<String, &Allocation> = allocations
        .iter()
        .map(|a| (a.address.key(), *a))
        .collect();

    // Largest recorded votes release the most budget, so they go first.
    // The sort is stable and `UserVotes` iterates in address order.
    let mut old_votes: Vec<_> = user_votes.iter().collect();
    old_votes.sort_by(|(_, a), (_, b)| b.power().cmp(&a.power()));

    let mut processed: HashSet<String> = HashSet::new();
    let mut resets = Vec::new();
    let mut decreases = Vec::new();
    let mut deferred: Vec<(&Allocation, BaseUnits)> = Vec::new();

    for (address, vote) in old_votes {
        let key = address.key();
        let old = vote.power();

        let Some(&allocation) = by_address.get(&key) else {
            if !old.is_zero() {
                let reset = match directory.lookup(address) {
                    Some(contract) => ReorderedVote::from(contract),
                    None => ReorderedVote::reset(address.clone(), vote.chain_id),
                };
                resets.push(reset);
            }
            processed.insert(key);
            continue;
        };

        match allocation.base_units().cmp(&old) {
            Ordering::Less => {
                decreases.push(ReorderedVote::from_allocation(allocation));
                processed.insert(key);
            }
            Ordering::Equal => {
                processed.insert(key);
            }
            Ordering::Greater => deferred.push((allocation, old)),
        }
    }

    deferred.sort_by_key(|(allocation, _)| allocation.base_units());
    let mut increases = Vec::with_capacity(deferred.len());
    for (allocation, old) in deferred {
        let new = allocation.base_units();
        if new == old || !processed.insert(allocation.address.key()) {
            continue;
        }
        increases.push(ReorderedVote::from_allocation(allocation));
    }

    let mut fresh: Vec<&Allocation> = allocations
        .iter()
        .copied()
        .filter(|a| !user_votes.contains_key(&a.address))
        .collect();
    fresh.sort_by_key(|a| a.base_units());
    let additions: Vec<ReorderedVote> = fresh
        .into_iter()
        .filter(|a| !a.base_units().is_zero() && processed.insert(a.address.key()))
        .map(ReorderedVote::from_allocation)
        .collect();

    tracing::debug!(
        resets = resets.len(),
        decreases = decreases.len(),
        increases = increases.len(),
        additions = additions.len(),
        "reordered nominee votes"
    );

    let mut ordered = resets;
    ordered.extend(decreases);
    ordered.extend(increases);
    ordered.extend(additions);
    ordered
}

/// Collapse allocations naming the same nominee: the last entry's values are
/// kept at the position of the first.
fn dedup_allocations(allocations: &[Allocation]) -> Vec<&Allocation> {
    let mut position: HashMap<String, usize> = HashMap::new();
    let mut unique: Vec<&Allocation> = Vec::with_capacity(allocations.len());
    for allocation in allocations {
        match position.get(&allocation.address.key()) {
            Some(&index) => unique[index] = allocation,
            None => {
                position.insert(allocation.address.key(), unique.len());
                unique.push(allocation);
            }
        }
    }
    unique
}
