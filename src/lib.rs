#![no_std]

multiversx_sc::imports!();

pub mod balance_oracle_proxy;
pub mod token_election_proxy;
pub mod types;
pub mod vesting_ledger_proxy;

use types::{Candidate, CandidateInfo, Election, ElectionInfo, ElectionPhase};

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait TokenElection {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(
        &self,
        governance_token: TokenIdentifier,
        required_token_balance: BigUint,
        balance_oracle_address: ManagedAddress,
        vesting_address: ManagedAddress,
    ) {
        require!(
            governance_token.is_valid_esdt_identifier(),
            "Invalid token identifier"
        );
        require!(!balance_oracle_address.is_zero(), "Address cannot be zero");
        require!(!vesting_address.is_zero(), "Address cannot be zero");

        self.governance_token().set(&governance_token);
        self.required_token_balance().set(&required_token_balance);
        self.balance_oracle_address().set(&balance_oracle_address);
        self.vesting_address().set(&vesting_address);
        self.election_count().set(0u64);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: createElection
    // All-or-nothing: every rule is checked before anything is stored.
    // ========================================================

    #[endpoint(createElection)]
    fn create_election(
        &self,
        names: ManagedVec<ManagedBuffer>,
        addresses: ManagedVec<ManagedAddress>,
        start_time: u64,
        end_time: u64,
    ) -> u64 {
        self.require_owner();

        let now = self.blockchain().get_block_timestamp();
        require!(start_time > now, "Start time must be in the future");
        require!(end_time > start_time, "End time must be after start time");
        require!(!addresses.is_empty(), "No candidates provided");
        require!(
            names.len() == addresses.len(),
            "Names and addresses length mismatch"
        );

        for address in addresses.iter() {
            require!(!address.is_zero(), "Candidate address cannot be zero");
        }
        for (i, address) in addresses.iter().enumerate() {
            for other in addresses.iter().skip(i + 1) {
                require!(*address != *other, "Duplicate candidate address");
            }
        }
        for name in names.iter() {
            require!(!name.is_empty(), "Candidate name cannot be empty");
        }

        let election_id = self.election_count().get() + 1u64;

        for (name, address) in names.iter().zip(addresses.iter()) {
            self.candidates(election_id).push(&Candidate {
                name: name.clone_value(),
                address: address.clone_value(),
            });
        }
        self.elections(election_id)
            .set(Election::new(start_time, end_time));
        self.election_count().set(election_id);

        self.election_created_event(election_id, start_time, end_time);

        election_id
    }

    // ========================================================
    // ENDPOINT: registerVoter
    // Token-gated, closes as soon as voting starts.
    // ========================================================

    #[endpoint(registerVoter)]
    fn register_voter(&self, election_id: u64) {
        let caller = self.blockchain().get_caller();
        let mut election = self.require_election(election_id);

        require!(
            !self.is_registered(election_id, &caller).get(),
            "Already registered"
        );

        let now = self.blockchain().get_block_timestamp();
        require!(now < election.start_time, "Registration has closed");
        require!(!election.is_finalized, "Election is finalized");

        // Point-in-time eligibility; later balance changes don't deregister
        let oracle_addr = self.balance_oracle_address().get();
        let balance: BigUint = self
            .tx()
            .to(&oracle_addr)
            .typed(balance_oracle_proxy::BalanceOracleProxy)
            .balance_of(caller.clone())
            .returns(ReturnsResult)
            .sync_call_readonly();
        require!(
            balance >= self.required_token_balance().get(),
            "Insufficient token balance"
        );

        self.is_registered(election_id, &caller).set(true);
        election.total_registered += 1;
        self.elections(election_id).set(&election);

        self.voter_registered_event(election_id, &caller);
    }

    // ========================================================
    // ENDPOINT: castVote
    // One vote per registered address, window inclusive on both ends.
    // ========================================================

    #[endpoint(castVote)]
    fn cast_vote(&self, election_id: u64, candidate_index: usize) {
        let caller = self.blockchain().get_caller();
        let mut election = self.require_election(election_id);

        require!(
            self.is_registered(election_id, &caller).get(),
            "Not registered for this election"
        );

        let now = self.blockchain().get_block_timestamp();
        require!(now >= election.start_time, "Voting has not started");
        require!(now <= election.end_time, "Voting has ended");
        require!(!election.is_finalized, "Election is finalized");
        require!(
            !self.has_voted(election_id, &caller).get(),
            "Already voted"
        );
        require!(
            candidate_index < self.candidates(election_id).len(),
            "Invalid candidate index"
        );

        self.has_voted(election_id, &caller).set(true);
        self.candidate_voters(election_id, candidate_index)
            .push(&caller);
        election.total_votes += 1;
        self.elections(election_id).set(&election);

        self.vote_cast_event(election_id, &caller, candidate_index);
    }

    // ========================================================
    // ENDPOINT: finalizeElection
    // One-way transition, only after the voting window closed.
    // ========================================================

    #[endpoint(finalizeElection)]
    fn finalize_election(&self, election_id: u64) {
        self.require_owner();
        let mut election = self.require_election(election_id);

        let now = self.blockchain().get_block_timestamp();
        require!(now > election.end_time, "Election has not ended");
        require!(!election.is_finalized, "Election already finalized");

        election.is_finalized = true;
        self.elections(election_id).set(&election);

        let (winning_index, _, _) = self.leading_candidate(election_id);
        self.election_finalized_event(election_id, winning_index);
    }

    // ========================================================
    // ENDPOINT: createVestingSchedule
    // Splits the reward equally among all candidates tied for the
    // most votes and hands it to the vesting ledger. A failing
    // sub-call reverts the whole distribution.
    // ========================================================

    #[endpoint(createVestingSchedule)]
    fn create_vesting_schedule(&self, election_id: u64, total_reward: BigUint) {
        self.require_owner();
        let mut election = self.require_election(election_id);

        require!(election.is_finalized, "Election is not finalized");
        require!(total_reward > 0u64, "Reward must be positive");
        require!(
            !election.rewards_distributed,
            "Rewards already distributed"
        );

        let (_, _, winner_votes) = self.leading_candidate(election_id);
        require!(winner_votes > 0, "No winner");

        let token = self.governance_token().get();
        let custody = self
            .blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::esdt(token.clone()), 0);
        require!(custody >= total_reward, "Insufficient reward funds");

        let winners = self.winner_addresses(election_id, winner_votes);
        let winner_count = winners.len();
        // Remainder of the integer split is not allocated to anyone
        let share = total_reward.clone() / (winner_count as u64);
        require!(share > 0u64, "Reward too small to split");

        let vesting_address = self.vesting_address().get();
        for winner in winners.iter() {
            self.tx()
                .to(&vesting_address)
                .typed(vesting_ledger_proxy::VestingLedgerProxy)
                .create_vesting_schedule(winner.clone_value(), &share)
                .sync_call();
        }

        self.tx()
            .to(&vesting_address)
            .typed(vesting_ledger_proxy::VestingLedgerProxy)
            .deposit_reward_funds()
            .payment(EsdtTokenPayment::new(token, 0, total_reward))
            .sync_call();

        election.rewards_distributed = true;
        self.elections(election_id).set(&election);

        self.rewards_distributed_event(election_id, winner_count, &share);
    }

    // ========================================================
    // ENDPOINT: fundRewards
    // Owner tops up the reward custody held by the engine.
    // ========================================================

    #[endpoint(fundRewards)]
    #[payable("*")]
    fn fund_rewards(&self) {
        self.require_owner();
        let payment = self.call_value().single_esdt();
        require!(
            payment.token_identifier == self.governance_token().get(),
            "Invalid payment token"
        );
        require!(payment.amount > 0u64, "Amount must be positive");

        let caller = self.blockchain().get_caller();
        self.rewards_funded_event(&caller, &payment.amount);
    }

    // ========================================================
    // INTERNAL: capability checks
    // ========================================================

    fn require_owner(&self) {
        let caller = self.blockchain().get_caller();
        require!(
            caller == self.blockchain().get_owner_address(),
            "Caller is not the owner"
        );
    }

    fn require_election(&self, election_id: u64) -> Election {
        require!(
            !self.elections(election_id).is_empty(),
            "Election does not exist"
        );
        self.elections(election_id).get()
    }

    // ========================================================
    // INTERNAL: tallying
    // ========================================================

    fn vote_count(&self, election_id: u64, candidate_index: usize) -> usize {
        self.candidate_voters(election_id, candidate_index).len()
    }

    /// First candidate (lowest index) holding the maximum vote count.
    fn leading_candidate(&self, election_id: u64) -> (usize, ManagedAddress, usize) {
        let candidate_count = self.candidates(election_id).len();
        require!(candidate_count > 0, "No candidates");

        let mut leader_index = 0usize;
        let mut leader_votes = self.vote_count(election_id, 0);
        for index in 1..candidate_count {
            let votes = self.vote_count(election_id, index);
            if votes > leader_votes {
                leader_index = index;
                leader_votes = votes;
            }
        }

        let leader = self.candidates(election_id).get(leader_index + 1);
        (leader_index, leader.address, leader_votes)
    }

    /// Every candidate whose vote count equals `winner_votes`, in index order.
    fn winner_addresses(&self, election_id: u64, winner_votes: usize) -> ManagedVec<ManagedAddress> {
        let mut winners = ManagedVec::new();
        for (i, candidate) in self.candidates(election_id).iter().enumerate() {
            if self.vote_count(election_id, i) == winner_votes {
                winners.push(candidate.address);
            }
        }
        winners
    }

    // ========================================================
    // VIEWS: read-only queries
    // ========================================================

    #[view(getLeadingCandidate)]
    fn get_leading_candidate(&self, election_id: u64) -> MultiValue3<usize, ManagedAddress, usize> {
        self.require_election(election_id);
        self.leading_candidate(election_id).into()
    }

    #[view(getCandidateVoters)]
    fn get_candidate_voters(
        &self,
        election_id: u64,
        candidate_index: usize,
    ) -> MultiValueEncoded<ManagedAddress> {
        let election = self.require_election(election_id);
        require!(election.is_finalized, "Election is not finalized");
        require!(
            candidate_index < self.candidates(election_id).len(),
            "Invalid candidate index"
        );

        let mut result = MultiValueEncoded::new();
        for voter in self.candidate_voters(election_id, candidate_index).iter() {
            result.push(voter);
        }
        result
    }

    #[view(getWinners)]
    fn get_winners(&self, election_id: u64) -> MultiValueEncoded<ManagedAddress> {
        let election = self.require_election(election_id);
        require!(election.is_finalized, "Election is not finalized");

        let mut result = MultiValueEncoded::new();
        let (_, _, winner_votes) = self.leading_candidate(election_id);
        if winner_votes == 0 {
            return result;
        }
        for winner in self.winner_addresses(election_id, winner_votes).iter() {
            result.push(winner.clone_value());
        }
        result
    }

    #[view(getElection)]
    fn get_election(&self, election_id: u64) -> ElectionInfo {
        let election = self.require_election(election_id);
        self.election_info(election_id, &election)
    }

    #[view(getElections)]
    fn get_elections(&self, from: u64, count: u64) -> MultiValueEncoded<ElectionInfo> {
        let mut result = MultiValueEncoded::new();
        if count == 0 {
            return result;
        }
        let total = self.election_count().get();
        if total == 0 {
            return result;
        }
        let start = if from == 0 { 1u64 } else { from };
        if start > total {
            return result;
        }
        let end = core::cmp::min(start.saturating_add(count - 1), total);

        for id in start..=end {
            let election = self.elections(id).get();
            result.push(self.election_info(id, &election));
        }
        result
    }

    #[view(getElectionPhase)]
    fn get_election_phase(&self, election_id: u64) -> ElectionPhase {
        let election = self.require_election(election_id);
        election.phase(self.blockchain().get_block_timestamp())
    }

    #[view(getCandidates)]
    fn get_candidates(&self, election_id: u64) -> MultiValueEncoded<CandidateInfo<Self::Api>> {
        self.require_election(election_id);

        let mut result = MultiValueEncoded::new();
        for (index, candidate) in self.candidates(election_id).iter().enumerate() {
            result.push(CandidateInfo {
                index,
                name: candidate.name,
                address: candidate.address,
                vote_count: self.vote_count(election_id, index),
            });
        }
        result
    }

    #[view(isVoterRegistered)]
    fn is_voter_registered(&self, election_id: u64, voter: &ManagedAddress) -> bool {
        self.is_registered(election_id, voter).get()
    }

    #[view(hasVoterVoted)]
    fn has_voter_voted(&self, election_id: u64, voter: &ManagedAddress) -> bool {
        self.has_voted(election_id, voter).get()
    }

    #[view(getContractConfig)]
    fn get_contract_config(
        &self,
    ) -> MultiValue5<TokenIdentifier, BigUint, ManagedAddress, ManagedAddress, u64> {
        (
            self.governance_token().get(),
            self.required_token_balance().get(),
            self.balance_oracle_address().get(),
            self.vesting_address().get(),
            self.election_count().get(),
        )
            .into()
    }

    fn election_info(&self, election_id: u64, election: &Election) -> ElectionInfo {
        ElectionInfo {
            id: election_id,
            start_time: election.start_time,
            end_time: election.end_time,
            phase: election.phase(self.blockchain().get_block_timestamp()),
            candidate_count: self.candidates(election_id).len(),
            total_votes: election.total_votes,
            total_registered: election.total_registered,
            rewards_distributed: election.rewards_distributed,
        }
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("electionCreated")]
    fn election_created_event(
        &self,
        #[indexed] election_id: u64,
        #[indexed] start_time: u64,
        #[indexed] end_time: u64,
    );

    #[event("voterRegistered")]
    fn voter_registered_event(
        &self,
        #[indexed] election_id: u64,
        #[indexed] voter: &ManagedAddress,
    );

    #[event("voteCast")]
    fn vote_cast_event(
        &self,
        #[indexed] election_id: u64,
        #[indexed] voter: &ManagedAddress,
        #[indexed] candidate_index: usize,
    );

    #[event("electionFinalized")]
    fn election_finalized_event(
        &self,
        #[indexed] election_id: u64,
        #[indexed] winning_index: usize,
    );

    #[event("rewardsDistributed")]
    fn rewards_distributed_event(
        &self,
        #[indexed] election_id: u64,
        #[indexed] winner_count: usize,
        share: &BigUint,
    );

    #[event("rewardsFunded")]
    fn rewards_funded_event(&self, #[indexed] from: &ManagedAddress, amount: &BigUint);

    // ========================================================
    // STORAGE
    // ========================================================

    // ── Configuration ──

    #[storage_mapper("governanceToken")]
    fn governance_token(&self) -> SingleValueMapper<TokenIdentifier>;

    #[storage_mapper("requiredTokenBalance")]
    fn required_token_balance(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("balanceOracleAddress")]
    fn balance_oracle_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("vestingAddress")]
    fn vesting_address(&self) -> SingleValueMapper<ManagedAddress>;

    // ── Elections ──

    #[storage_mapper("electionCount")]
    fn election_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("elections")]
    fn elections(&self, election_id: u64) -> SingleValueMapper<Election>;

    #[storage_mapper("candidates")]
    fn candidates(&self, election_id: u64) -> VecMapper<Candidate<Self::Api>>;

    #[storage_mapper("candidateVoters")]
    fn candidate_voters(
        &self,
        election_id: u64,
        candidate_index: usize,
    ) -> VecMapper<ManagedAddress>;

    // ── Voter membership ──

    #[storage_mapper("isRegistered")]
    fn is_registered(&self, election_id: u64, voter: &ManagedAddress) -> SingleValueMapper<bool>;

    #[storage_mapper("hasVoted")]
    fn has_voted(&self, election_id: u64, voter: &ManagedAddress) -> SingleValueMapper<bool>;
}
