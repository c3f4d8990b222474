use soroban_sdk::{log, Address, Env, String};

use crate::errors::VotingError;
use crate::events;
use crate::storage;
use crate::tally;
use crate::types::{Proposal, Voter, VotingConfig, WorkflowStatus};

pub struct VotingEngine;

impl VotingEngine {
    // -------------------------------
    // Construction
    // -------------------------------
    pub fn init(env: &Env, admin: Address) {
        storage::set_config(env, &VotingConfig { admin });
        storage::set_status(env, WorkflowStatus::RegisteringVoters);
        storage::set_proposal_count(env, 0);
        storage::set_winning_proposal_id(env, 0);
        storage::extend_instance(env);
    }

    // -------------------------------
    // Voter Registration
    // -------------------------------
    pub fn register_voter(env: &Env, caller: Address, voter: Address) -> Result<(), VotingError> {
        Self::require_admin(env, &caller)?;
        Self::require_status(env, WorkflowStatus::RegisteringVoters)?;

        if storage::get_voter(env, &voter).is_registered {
            return Err(VotingError::AlreadyRegistered);
        }

        storage::save_voter(
            env,
            &voter,
            &Voter {
                is_registered: true,
                has_voted: false,
                voted_proposal_id: 0,
            },
        );
        storage::extend_instance(env);

        log!(env, "voter registered", voter);
        events::voter_registered(env, &voter);
        Ok(())
    }

    // -------------------------------
    // Proposal Registration
    // -------------------------------
    pub fn submit_proposal(
        env: &Env,
        voter: Address,
        description: String,
    ) -> Result<u32, VotingError> {
        Self::require_voter(env, &voter)?;
        Self::require_status(env, WorkflowStatus::ProposalsRegistrationStarted)?;

        if description.len() == 0 {
            return Err(VotingError::InvalidArgument);
        }

        let proposal_id = storage::get_proposal_count(env);
        storage::save_proposal(
            env,
            proposal_id,
            &Proposal {
                description,
                vote_count: 0,
            },
        );
        storage::set_proposal_count(env, proposal_id + 1);
        storage::extend_instance(env);

        log!(env, "proposal registered", voter, proposal_id);
        events::proposal_registered(env, proposal_id);
        Ok(proposal_id)
    }

    // -------------------------------
    // Voting
    // -------------------------------
    pub fn cast_vote(env: &Env, voter: Address, proposal_id: u32) -> Result<(), VotingError> {
        let mut record = Self::require_voter(env, &voter)?;
        Self::require_status(env, WorkflowStatus::VotingSessionStarted)?;

        if record.has_voted {
            return Err(VotingError::AlreadyVoted);
        }

        let mut proposal =
            storage::get_proposal(env, proposal_id).ok_or(VotingError::InvalidArgument)?;

        record.has_voted = true;
        record.voted_proposal_id = proposal_id;
        proposal.vote_count += 1;

        storage::save_voter(env, &voter, &record);
        storage::save_proposal(env, proposal_id, &proposal);
        storage::extend_instance(env);

        log!(env, "vote cast", voter, proposal_id);
        events::voted(env, &voter, proposal_id);
        Ok(())
    }

    // -------------------------------
    // Workflow Transitions
    // -------------------------------

    /// Moves the workflow one step forward, provided it currently sits at
    /// `from`.
    pub fn advance(env: &Env, caller: Address, from: WorkflowStatus) -> Result<(), VotingError> {
        Self::require_admin(env, &caller)?;
        Self::require_status(env, from)?;

        let to = from.next().ok_or(VotingError::InvalidPhase)?;
        Self::enter(env, from, to);
        Ok(())
    }

    pub fn tally_votes(env: &Env, caller: Address) -> Result<u32, VotingError> {
        Self::require_admin(env, &caller)?;
        Self::require_status(env, WorkflowStatus::VotingSessionEnded)?;

        let count = storage::get_proposal_count(env);
        let winner = tally::select_winner(
            (0..count).map(|id| storage::get_proposal(env, id).map_or(0, |p| p.vote_count)),
        );

        storage::set_winning_proposal_id(env, winner);
        log!(env, "votes tallied", winner, count);
        Self::enter(env, WorkflowStatus::VotingSessionEnded, WorkflowStatus::VotesTallied);
        Ok(winner)
    }

    // -------------------------------
    // Read-only Queries
    // -------------------------------
    pub fn get_voter(env: &Env, voter: Address) -> Voter {
        storage::get_voter(env, &voter)
    }

    pub fn get_proposal(env: &Env, proposal_id: u32) -> Result<Proposal, VotingError> {
        storage::get_proposal(env, proposal_id).ok_or(VotingError::InvalidArgument)
    }

    pub fn get_workflow_status(env: &Env) -> WorkflowStatus {
        storage::get_status(env)
    }

    pub fn proposal_count(env: &Env) -> u32 {
        storage::get_proposal_count(env)
    }

    pub fn winning_proposal_id(env: &Env) -> u32 {
        storage::get_winning_proposal_id(env)
    }

    pub fn get_winner(env: &Env) -> Result<Proposal, VotingError> {
        Self::require_status(env, WorkflowStatus::VotesTallied)?;
        Self::get_proposal(env, storage::get_winning_proposal_id(env))
    }

    pub fn get_admin(env: &Env) -> Option<Address> {
        storage::get_admin(env)
    }

    // -------------------------------
    // Guards
    // -------------------------------
    fn require_admin(env: &Env, caller: &Address) -> Result<(), VotingError> {
        caller.require_auth();
        match storage::get_admin(env) {
            Some(admin) if admin == *caller => Ok(()),
            _ => Err(VotingError::Unauthorized),
        }
    }

    fn require_voter(env: &Env, caller: &Address) -> Result<Voter, VotingError> {
        caller.require_auth();
        let voter = storage::get_voter(env, caller);
        if !voter.is_registered {
            return Err(VotingError::Unauthorized);
        }
        Ok(voter)
    }

    fn require_status(env: &Env, expected: WorkflowStatus) -> Result<(), VotingError> {
        if storage::get_status(env) != expected {
            return Err(VotingError::InvalidPhase);
        }
        Ok(())
    }

    fn enter(env: &Env, from: WorkflowStatus, to: WorkflowStatus) {
        storage::set_status(env, to);
        storage::extend_instance(env);

        log!(env, "workflow status changed", from as u32, to as u32);
        events::workflow_status_change(env, from, to);
    }
}
