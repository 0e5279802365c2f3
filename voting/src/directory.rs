//! Lookup of known nominees by address.

use std::collections::HashMap;

use veolas_types::{NomineeAddress, NomineeMetadata, StakingContract};

/// Read-only source of nominee records and display metadata.
pub trait NomineeDirectory {
    /// Find the directory entry for `address`, ignoring case.
    fn lookup(&self, address: &NomineeAddress) -> Option<&StakingContract>;

    /// Display metadata for `address`, if the directory has any.
    fn metadata(&self, address: &NomineeAddress) -> Option<&NomineeMetadata> {
        self.lookup(address).and_then(|c| c.metadata.as_ref())
    }
}

/// Index over a list of staking contracts, keyed by lower-cased address.
///
/// When the same address is listed twice the later entry wins.
pub struct StakingDirectory<'a> {
    by_address: HashMap<String, &'a StakingContract>,
}

impl<'a> StakingDirectory<'a> {
    pub fn new(contracts: &'a [StakingContract]) -> Self {
        let by_address = contracts.iter().map(|c| (c.address.key(), c)).collect();
        Self { by_address }
    }

    pub fn len(&self) -> usize {
        self.by_address.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_address.is_empty()
    }
}

impl NomineeDirectory for StakingDirectory<'_> {
    fn lookup(&self, address: &NomineeAddress) -> Option<&StakingContract> {
        self.by_address.get(&address.key()).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use veolas_types::ChainId;

    fn contract(address: &str, name: Option<&str>) -> StakingContract {
        StakingContract {
            address: address.into(),
            chain_id: ChainId::GNOSIS,
            metadata: name.map(|n| NomineeMetadata {
                name: n.to_string(),
                description: None,
            }),
        }
    }

    #[test]
    fn lookup_ignores_case() {
        let contracts = vec![contract("0xAbC", Some("Alpha"))];
        let directory = StakingDirectory::new(&contracts);
        let found = directory.lookup(&"0xabc".into()).unwrap();
        assert_eq!(found.address.as_str(), "0xAbC");
        assert_eq!(directory.metadata(&"0xABC".into()).unwrap().name, "Alpha");
    }

    #[test]
    fn missing_entries_and_metadata() {
        let contracts = vec![contract("0x1", None)];
        let directory = StakingDirectory::new(&contracts);
        assert!(directory.lookup(&"0x2".into()).is_none());
        assert!(directory.lookup(&"0x1".into()).is_some());
        assert!(directory.metadata(&"0x1".into()).is_none());
    }

    #[test]
    fn later_duplicate_wins() {
        let contracts = vec![contract("0x1", Some("old")), contract("0X1", Some("new"))];
        let directory = StakingDirectory::new(&contracts);
        assert_eq!(directory.len(), 1);
        assert_eq!(directory.metadata(&"0x1".into()).unwrap().name, "new");
    }

    #[test]
    fn empty_directory() {
        let directory = StakingDirectory::new(&[]);
        assert!(directory.is_empty());
        assert!(directory.lookup(&"0x1".into()).is_none());
    }
}
