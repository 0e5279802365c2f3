//! Parallel-array form of an ordered instruction list.
//!
//! The voting contract's batch call takes nominees, chain ids and weights as
//! three arrays that must line up index for index.

use serde::{Deserialize, Serialize};
use veolas_types::ReorderedVote;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteBatch {
    pub nominees: Vec<String>,
    pub chain_ids: Vec<u64>,
    pub weights: Vec<String>,
}

impl VoteBatch {
    pub fn from_votes(votes: &[ReorderedVote]) -> Self {
        let mut batch = Self {
            nominees: Vec::with_capacity(votes.len()),
            chain_ids: Vec::with_capacity(votes.len()),
            weights: Vec::with_capacity(votes.len()),
        };
        for vote in votes {
            batch.nominees.push(vote.address.to_string());
            batch.chain_ids.push(vote.chain_id.get());
            batch.weights.push(vote.weight.to_string());
        }
        batch
    }

    pub fn len(&self) -> usize {
        self.nominees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nominees.is_empty()
    }

    /// Iterate the batch as `(nominee, chain_id, weight)` rows.
    pub fn rows(&self) -> impl Iterator<Item = (&str, u64, &str)> + '_ {
        self.nominees
            .iter()
            .zip(&self.chain_ids)
            .zip(&self.weights)
            .map(|((nominee, chain_id), weight)| (nominee.as_str(), *chain_id, weight.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use veolas_types::{BaseUnits, ChainId};

    #[test]
    fn preserves_instruction_order() {
        let votes = vec![
            ReorderedVote::reset("0x3".into(), ChainId::BASE),
            ReorderedVote::new("0x2".into(), ChainId::GNOSIS, BaseUnits::new(1000)),
            ReorderedVote::new("0x5".into(), ChainId::MODE, BaseUnits::new(6000)),
        ];
        let batch = VoteBatch::from_votes(&votes);
        assert_eq!(batch.len(), 3);
        assert_eq!(batch.nominees, vec!["0x3", "0x2", "0x5"]);
        assert_eq!(batch.chain_ids, vec![8453, 100, 34443]);
        assert_eq!(batch.weights, vec!["0", "1000", "6000"]);
        assert_eq!(
            batch.rows().collect::<Vec<_>>(),
            vec![("0x3", 8453, "0"), ("0x2", 100, "1000"), ("0x5", 34443, "6000")]
        );
    }

    #[test]
    fn empty_batch() {
        let batch = VoteBatch::from_votes(&[]);
        assert!(batch.is_empty());
        assert_eq!(
            serde_json::to_value(&batch).unwrap(),
            serde_json::json!({ "nominees": [], "chainIds": [], "weights": [] })
        );
    }
}
