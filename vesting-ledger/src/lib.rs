#![no_std]

multiversx_sc::imports!();

pub mod types;
pub mod vesting_ledger_proxy;

use types::{VestingSchedule, TOTAL_UNLOCK_PERIODS, UNLOCK_PERIOD};

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait VestingLedger {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(&self, governance_token: TokenIdentifier) {
        require!(
            governance_token.is_valid_esdt_identifier(),
            "Invalid token identifier"
        );
        self.governance_token().set(&governance_token);
        self.total_allocated().set(BigUint::zero());
        self.total_claimed().set(BigUint::zero());
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: setAuthorizedCaller
    // Owner hands schedule creation over to the election contract.
    // ========================================================

    #[endpoint(setAuthorizedCaller)]
    fn set_authorized_caller(&self, caller_address: ManagedAddress) {
        let caller = self.blockchain().get_caller();
        require!(
            caller == self.blockchain().get_owner_address(),
            "Caller is not the owner"
        );
        require!(!caller_address.is_zero(), "Address cannot be zero");

        self.authorized_caller().set(&caller_address);
        self.authorized_caller_set_event(&caller_address);
    }

    // ========================================================
    // ENDPOINT: createVestingSchedule
    // At most one schedule per beneficiary, ever.
    // ========================================================

    #[endpoint(createVestingSchedule)]
    fn create_vesting_schedule(&self, beneficiary: ManagedAddress, total_amount: BigUint) {
        self.require_authorized_caller();
        require!(!beneficiary.is_zero(), "Beneficiary cannot be zero");
        require!(
            self.schedules(&beneficiary).is_empty(),
            "Vesting schedule already exists"
        );
        require!(total_amount > 0u64, "Amount must be positive");

        let now = self.blockchain().get_block_timestamp();
        self.schedules(&beneficiary)
            .set(VestingSchedule::new(total_amount.clone(), now));
        self.total_allocated().update(|total| *total += &total_amount);

        self.vesting_schedule_created_event(&beneficiary, &total_amount, now);
    }

    // ========================================================
    // ENDPOINT: depositRewardFunds
    // Custody transfer from the election contract.
    // ========================================================

    #[endpoint(depositRewardFunds)]
    #[payable("*")]
    fn deposit_reward_funds(&self) {
        self.require_authorized_caller();
        let payment = self.call_value().single_esdt();
        require!(
            payment.token_identifier == self.governance_token().get(),
            "Invalid payment token"
        );
        require!(payment.amount > 0u64, "Amount must be positive");

        let caller = self.blockchain().get_caller();
        self.reward_funds_deposited_event(&caller, &payment.amount);
    }

    // ========================================================
    // ENDPOINT: claimReward
    // Ledger is updated before the transfer; the lock rejects
    // any nested entry while a claim is in flight.
    // ========================================================

    #[endpoint(claimReward)]
    fn claim_reward(&self, amount: BigUint) {
        require!(!self.claim_lock().get(), "Reentrant call");
        self.claim_lock().set(true);

        let caller = self.blockchain().get_caller();
        require!(
            !self.schedules(&caller).is_empty(),
            "No vesting schedule"
        );
        require!(amount > 0u64, "Amount must be positive");

        let mut schedule = self.schedules(&caller).get();
        let now = self.blockchain().get_block_timestamp();
        require!(
            amount <= schedule.claimable_amount(now),
            "Amount exceeds claimable"
        );

        let token = self.governance_token().get();
        let balance = self
            .blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::esdt(token.clone()), 0);
        require!(balance >= amount, "Insufficient vesting funds");

        schedule.claimed_amount += &amount;
        self.schedules(&caller).set(&schedule);
        self.total_claimed().update(|total| *total += &amount);

        self.send().direct_esdt(&caller, &token, 0, &amount);
        self.vesting_schedule_claimed_event(&caller, &amount);

        self.claim_lock().clear();
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn require_authorized_caller(&self) {
        require!(
            !self.authorized_caller().is_empty(),
            "Authorized caller not set"
        );
        let caller = self.blockchain().get_caller();
        require!(
            caller == self.authorized_caller().get(),
            "Caller is not the authorized caller"
        );
    }

    // ========================================================
    // VIEWS: scoped to the calling beneficiary
    // ========================================================

    #[view(getVestingScheduleData)]
    fn get_vesting_schedule_data(&self) -> MultiValue4<BigUint, u64, BigUint, BigUint> {
        let caller = self.blockchain().get_caller();
        require!(
            !self.schedules(&caller).is_empty(),
            "No vesting schedule"
        );

        let schedule = self.schedules(&caller).get();
        let now = self.blockchain().get_block_timestamp();
        let unlocked = schedule.unlocked_amount(now);
        (
            schedule.total_amount,
            schedule.start_time,
            unlocked,
            schedule.claimed_amount,
        )
            .into()
    }

    #[view(getClaimableAmount)]
    fn get_claimable_amount(&self) -> BigUint {
        let caller = self.blockchain().get_caller();
        if self.schedules(&caller).is_empty() {
            return BigUint::zero();
        }
        let now = self.blockchain().get_block_timestamp();
        self.schedules(&caller).get().claimable_amount(now)
    }

    #[view(getLedgerStats)]
    fn get_ledger_stats(&self) -> MultiValue3<BigUint, BigUint, BigUint> {
        let token = self.governance_token().get();
        let balance = self
            .blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::esdt(token), 0);
        (self.total_allocated().get(), self.total_claimed().get(), balance).into()
    }

    #[view(getVestingConfig)]
    fn get_vesting_config(&self) -> MultiValue4<TokenIdentifier, ManagedAddress, u64, u64> {
        let authorized = if self.authorized_caller().is_empty() {
            ManagedAddress::zero()
        } else {
            self.authorized_caller().get()
        };
        (
            self.governance_token().get(),
            authorized,
            UNLOCK_PERIOD,
            TOTAL_UNLOCK_PERIODS,
        )
            .into()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("vestingScheduleCreated")]
    fn vesting_schedule_created_event(
        &self,
        #[indexed] beneficiary: &ManagedAddress,
        #[indexed] amount: &BigUint,
        start_time: u64,
    );

    #[event("vestingScheduleClaimed")]
    fn vesting_schedule_claimed_event(
        &self,
        #[indexed] beneficiary: &ManagedAddress,
        amount: &BigUint,
    );

    #[event("authorizedCallerSet")]
    fn authorized_caller_set_event(&self, #[indexed] caller: &ManagedAddress);

    #[event("rewardFundsDeposited")]
    fn reward_funds_deposited_event(
        &self,
        #[indexed] from: &ManagedAddress,
        amount: &BigUint,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    // ── Configuration ──

    #[storage_mapper("governanceToken")]
    fn governance_token(&self) -> SingleValueMapper<TokenIdentifier>;

    #[storage_mapper("authorizedCaller")]
    fn authorized_caller(&self) -> SingleValueMapper<ManagedAddress>;

    // ── Schedules ──

    #[storage_mapper("schedules")]
    fn schedules(&self, beneficiary: &ManagedAddress) -> SingleValueMapper<VestingSchedule<Self::Api>>;

    #[storage_mapper("totalAllocated")]
    fn total_allocated(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("totalClaimed")]
    fn total_claimed(&self) -> SingleValueMapper<BigUint>;

    // ── Reentrancy lock ──

    #[storage_mapper("claimLock")]
    fn claim_lock(&self) -> SingleValueMapper<bool>;
}
