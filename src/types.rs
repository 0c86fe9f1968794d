multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Election Phase: derived from the block timestamp on each call
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum ElectionPhase {
    /// Before start time. Token holders can register.
    Registration,
    /// Between start and end time, both inclusive. Registered voters can vote.
    Voting,
    /// Past end time, waiting for the owner to finalize.
    Ended,
    /// Results sealed. Voter lists readable, rewards can be distributed.
    Finalized,
}

// ============================================================
// Election: per-id lifecycle record
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct Election {
    pub start_time: u64,
    pub end_time: u64,
    pub is_finalized: bool,
    pub total_votes: u64,
    pub total_registered: u64,
    /// Set once winner rewards have been handed to the vesting ledger
    pub rewards_distributed: bool,
}

impl Election {
    pub fn new(start_time: u64, end_time: u64) -> Self {
        Election {
            start_time,
            end_time,
            is_finalized: false,
            total_votes: 0,
            total_registered: 0,
            rewards_distributed: false,
        }
    }

    pub fn phase(&self, now: u64) -> ElectionPhase {
        if self.is_finalized {
            ElectionPhase::Finalized
        } else if now < self.start_time {
            ElectionPhase::Registration
        } else if now <= self.end_time {
            ElectionPhase::Voting
        } else {
            ElectionPhase::Ended
        }
    }
}

// ============================================================
// Candidate: fixed at election creation, addressed by index
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct Candidate<M: ManagedTypeApi> {
    pub name: ManagedBuffer<M>,
    pub address: ManagedAddress<M>,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct CandidateInfo<M: ManagedTypeApi> {
    pub index: usize,
    pub name: ManagedBuffer<M>,
    pub address: ManagedAddress<M>,
    pub vote_count: usize,
}

// ============================================================
// Election Info: read model returned by the views
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct ElectionInfo {
    pub id: u64,
    pub start_time: u64,
    pub end_time: u64,
    pub phase: ElectionPhase,
    pub candidate_count: usize,
    pub total_votes: u64,
    pub total_registered: u64,
    pub rewards_distributed: bool,
}
