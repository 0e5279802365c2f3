//! Chain identifier.

use serde::{Deserialize, Serialize};
use std::fmt;

/// EVM-style chain id of the network a nominee lives on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChainId(u64);

impl ChainId {
    pub const ETHEREUM: Self = Self(1);
    pub const GNOSIS: Self = Self(100);
    pub const POLYGON: Self = Self(137);
    pub const BASE: Self = Self(8453);
    pub const ARBITRUM: Self = Self(42161);
    pub const OPTIMISM: Self = Self(10);
    pub const MODE: Self = Self(34443);
    pub const CELO: Self = Self(42220);

    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub const fn get(&self) -> u64 {
        self.0
    }

    /// Human-readable network name, if known.
    pub fn name(&self) -> Option<&'static str> {
        match self.0 {
            1 => Some("ethereum"),
            10 => Some("optimism"),
            100 => Some("gnosis"),
            137 => Some("polygon"),
            8453 => Some("base"),
            34443 => Some("mode"),
            42161 => Some("arbitrum"),
            42220 => Some("celo"),
            _ => None,
        }
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{name}"),
            None => write!(f, "chain-{}", self.0),
        }
    }
}

impl From<u64> for ChainId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}
