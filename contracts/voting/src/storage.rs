use soroban_sdk::{contracttype, Address, Env};

use crate::types::{Proposal, Voter, VotingConfig, WorkflowStatus};

// ── Ledger TTL constants ─────────────────────────────────────────────────────
// ~5s per ledger: 17,280 ledgers per day.
const DAY_IN_LEDGERS: u32 = 17_280;
const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;
pub(crate) const RECORD_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const RECORD_LIFETIME_THRESHOLD: u32 = RECORD_BUMP_AMOUNT - DAY_IN_LEDGERS;

/// Storage keys
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    // Instance storage
    Config,
    Status,
    ProposalCount,
    WinningProposal,
    // Persistent storage
    Voter(Address),
    Proposal(u32),
}

pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn bump_record(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, RECORD_LIFETIME_THRESHOLD, RECORD_BUMP_AMOUNT);
}

// ── Config ───────────────────────────────────────────────────────────────────

pub fn set_config(env: &Env, config: &VotingConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn get_admin(env: &Env) -> Option<Address> {
    env.storage()
        .instance()
        .get::<DataKey, VotingConfig>(&DataKey::Config)
        .map(|config| config.admin)
}

// ── Workflow ─────────────────────────────────────────────────────────────────

pub fn get_status(env: &Env) -> WorkflowStatus {
    env.storage()
        .instance()
        .get(&DataKey::Status)
        .unwrap_or(WorkflowStatus::RegisteringVoters)
}

pub fn set_status(env: &Env, status: WorkflowStatus) {
    env.storage().instance().set(&DataKey::Status, &status);
}

pub fn get_winning_proposal_id(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::WinningProposal)
        .unwrap_or(0u32)
}

pub fn set_winning_proposal_id(env: &Env, proposal_id: u32) {
    env.storage()
        .instance()
        .set(&DataKey::WinningProposal, &proposal_id);
}

// ── Voters ───────────────────────────────────────────────────────────────────

/// Unknown addresses read as the default, unregistered record. Reading a
/// known record extends its TTL, as writing does.
pub fn get_voter(env: &Env, address: &Address) -> Voter {
    let key = DataKey::Voter(address.clone());
    match env.storage().persistent().get::<DataKey, Voter>(&key) {
        Some(voter) => {
            bump_record(env, &key);
            voter
        }
        None => Voter::default(),
    }
}

pub fn save_voter(env: &Env, address: &Address, voter: &Voter) {
    let key = DataKey::Voter(address.clone());
    env.storage().persistent().set(&key, voter);
    bump_record(env, &key);
}

// ── Proposals ────────────────────────────────────────────────────────────────

pub fn get_proposal_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::ProposalCount)
        .unwrap_or(0u32)
}

pub fn set_proposal_count(env: &Env, count: u32) {
    env.storage().instance().set(&DataKey::ProposalCount, &count);
}

pub fn get_proposal(env: &Env, proposal_id: u32) -> Option<Proposal> {
    let key = DataKey::Proposal(proposal_id);
    let proposal = env.storage().persistent().get::<DataKey, Proposal>(&key)?;
    bump_record(env, &key);
    Some(proposal)
}

pub fn save_proposal(env: &Env, proposal_id: u32, proposal: &Proposal) {
    let key = DataKey::Proposal(proposal_id);
    env.storage().persistent().set(&key, proposal);
    bump_record(env, &key);
}
