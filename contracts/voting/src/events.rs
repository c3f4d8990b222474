//! Notifications published to the host event log.
//!
//! Every accepted mutation publishes exactly one of these. The topic names the
//! notification and the data is the matching payload struct, so indexers can
//! decode it without knowing the call that raised it.

use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

use crate::types::WorkflowStatus;

pub const VOTER_REGISTERED: Symbol = symbol_short!("voter_reg");
pub const WORKFLOW_STATUS_CHANGE: Symbol = symbol_short!("wf_status");
pub const PROPOSAL_REGISTERED: Symbol = symbol_short!("prop_reg");
pub const VOTED: Symbol = symbol_short!("voted");

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VoterRegistered {
    pub voter_address: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WorkflowStatusChange {
    pub previous_status: WorkflowStatus,
    pub new_status: WorkflowStatus,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProposalRegistered {
    pub proposal_id: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Voted {
    pub voter: Address,
    pub proposal_id: u32,
}

pub fn voter_registered(env: &Env, voter_address: &Address) {
    env.events().publish(
        (VOTER_REGISTERED,),
        VoterRegistered {
            voter_address: voter_address.clone(),
        },
    );
}

pub fn workflow_status_change(
    env: &Env,
    previous_status: WorkflowStatus,
    new_status: WorkflowStatus,
) {
    env.events().publish(
        (WORKFLOW_STATUS_CHANGE,),
        WorkflowStatusChange {
            previous_status,
            new_status,
        },
    );
}

pub fn proposal_registered(env: &Env, proposal_id: u32) {
    env.events()
        .publish((PROPOSAL_REGISTERED,), ProposalRegistered { proposal_id });
}

pub fn voted(env: &Env, voter: &Address, proposal_id: u32) {
    env.events().publish(
        (VOTED,),
        Voted {
            voter: voter.clone(),
            proposal_id,
        },
    );
}
