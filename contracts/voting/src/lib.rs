#![no_std]
//! # Voting Contract
//!
//! An administrator walks a whitelist of voters through a fixed sequence of
//! phases: voter registration, proposal registration, a voting session and
//! a final tally. Each phase unlocks exactly one kind of participant action.
//!
//! ```text
//! RegisteringVoters -> ProposalsRegistrationStarted -> ProposalsRegistrationEnded
//!   -> VotingSessionStarted -> VotingSessionEnded -> VotesTallied
//! ```
//!
//! Every state-changing call takes the acting address explicitly and requires
//! its authorization before any other check runs.

use soroban_sdk::{contract, contractimpl, Address, Env, String};

mod contract;
mod errors;
mod events;
mod storage;
mod tally;
mod types;

use contract::VotingEngine;

pub use errors::VotingError;
pub use events::{ProposalRegistered, Voted, VoterRegistered, WorkflowStatusChange};
pub use types::{Proposal, Voter, VotingConfig, WorkflowStatus};

#[contract]
pub struct VotingContract;

#[contractimpl]
impl VotingContract {
    /// Binds the administrator for the lifetime of the contract.
    pub fn __constructor(env: Env, admin: Address) {
        VotingEngine::init(&env, admin)
    }

    // ── Administrator ────────────────────────────────────────────────────────

    pub fn register_voter(
        env: Env,
        caller: Address,
        voter: Address,
    ) -> Result<(), VotingError> {
        VotingEngine::register_voter(&env, caller, voter)
    }

    pub fn start_proposals_registering(env: Env, caller: Address) -> Result<(), VotingError> {
        VotingEngine::advance(&env, caller, WorkflowStatus::RegisteringVoters)
    }

    pub fn end_proposals_registering(env: Env, caller: Address) -> Result<(), VotingError> {
        VotingEngine::advance(&env, caller, WorkflowStatus::ProposalsRegistrationStarted)
    }

    pub fn start_voting_session(env: Env, caller: Address) -> Result<(), VotingError> {
        VotingEngine::advance(&env, caller, WorkflowStatus::ProposalsRegistrationEnded)
    }

    pub fn end_voting_session(env: Env, caller: Address) -> Result<(), VotingError> {
        VotingEngine::advance(&env, caller, WorkflowStatus::VotingSessionStarted)
    }

    /// Fixes the winner and closes the workflow. Returns the winning index.
    pub fn tally_votes(env: Env, caller: Address) -> Result<u32, VotingError> {
        VotingEngine::tally_votes(&env, caller)
    }

    // ── Voters ───────────────────────────────────────────────────────────────

    /// Registers a proposal and returns its index.
    pub fn submit_proposal(
        env: Env,
        voter: Address,
        description: String,
    ) -> Result<u32, VotingError> {
        VotingEngine::submit_proposal(&env, voter, description)
    }

    pub fn cast_vote(env: Env, voter: Address, proposal_id: u32) -> Result<(), VotingError> {
        VotingEngine::cast_vote(&env, voter, proposal_id)
    }

    // ── Queries ──────────────────────────────────────────────────────────────

    pub fn get_voter(env: Env, voter: Address) -> Voter {
        VotingEngine::get_voter(&env, voter)
    }

    pub fn get_proposal(env: Env, proposal_id: u32) -> Result<Proposal, VotingError> {
        VotingEngine::get_proposal(&env, proposal_id)
    }

    pub fn get_workflow_status(env: Env) -> WorkflowStatus {
        VotingEngine::get_workflow_status(&env)
    }

    pub fn proposal_count(env: Env) -> u32 {
        VotingEngine::proposal_count(&env)
    }

    /// Zero until votes are tallied.
    pub fn winning_proposal_id(env: Env) -> u32 {
        VotingEngine::winning_proposal_id(&env)
    }

    pub fn get_winner(env: Env) -> Result<Proposal, VotingError> {
        VotingEngine::get_winner(&env)
    }

    pub fn get_admin(env: Env) -> Option<Address> {
        VotingEngine::get_admin(&env)
    }
}
