//! Error codes returned by the voting contract.

use soroban_sdk::contracterror;

/// Every rejected call maps to exactly one of these codes. A rejected call
/// leaves contract storage untouched.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum VotingError {
    /// Caller is not the administrator, or not a registered voter
    Unauthorized = 1,

    /// Operation attempted outside the workflow phase it belongs to
    InvalidPhase = 2,

    /// Voter address is already whitelisted
    AlreadyRegistered = 3,

    /// Voter has already cast their vote
    AlreadyVoted = 4,

    /// Empty proposal description or unknown proposal index
    InvalidArgument = 5,
}

impl VotingError {
    /// Get a human-readable description of the error
    pub fn message(&self) -> &str {
        match self {
            VotingError::Unauthorized => "Caller is not authorized",
            VotingError::InvalidPhase => "Operation not allowed in the current workflow status",
            VotingError::AlreadyRegistered => "Already registered",
            VotingError::AlreadyVoted => "You have already voted",
            VotingError::InvalidArgument => "Invalid argument",
        }
    }
}
