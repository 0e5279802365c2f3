//! Nominee vote planning for veOLAS voting weight.
//!
//! The voting contract checks a user's total power against a fixed budget of
//! 10 000 base units on every individual vote call. Moving weight between
//! nominees therefore has to release weight before it is reassigned:
//! resets first, then decreases, then increases ordered smallest first.
//!
//! - [`reorder_votes`] computes that order (pure, total, deterministic)
//! - [`validate_allocations`] performs the magnitude checks the reorderer
//!   leaves to its caller
//! - [`simulate`] replays instructions against the budget
//! - [`VoteBatch`] splits instructions into the contract's parallel arrays
//! - [`VotePlanner`] ties the above together behind a [`PlannerConfig`]

pub mod batch;
pub mod config;
pub mod directory;
pub mod error;
pub mod planner;
pub mod reorder;
pub mod simulate;
pub mod validation;

pub use batch::VoteBatch;
pub use config::PlannerConfig;
pub use directory::{NomineeDirectory, StakingDirectory};
pub use error::{AllocationError, BudgetError, ConfigError, PlanError};
pub use planner::{PlanEntry, VotePlan, VotePlanner, VoteSnapshot};
pub use reorder::{reorder_votes, reorder_with_directory};
pub use simulate::simulate;
pub use validation::{validate_allocations, validate_user_votes};
