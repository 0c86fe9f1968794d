multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// Length of one unlock period: 30 days in seconds
pub const UNLOCK_PERIOD: u64 = 30 * 86_400;

/// Number of periods after which a schedule is fully unlocked (10% each)
pub const TOTAL_UNLOCK_PERIODS: u64 = 10;

// ============================================================
// Vesting Schedule: one per beneficiary, never deleted
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct VestingSchedule<M: ManagedTypeApi> {
    pub total_amount: BigUint<M>,
    /// Block timestamp at creation, origin of the unlock clock
    pub start_time: u64,
    pub claimed_amount: BigUint<M>,
}

impl<M: ManagedTypeApi> VestingSchedule<M> {
    pub fn new(total_amount: BigUint<M>, start_time: u64) -> Self {
        VestingSchedule {
            total_amount,
            start_time,
            claimed_amount: BigUint::zero(),
        }
    }

    /// Whole periods elapsed since start, capped at full unlock.
    pub fn elapsed_periods(&self, now: u64) -> u64 {
        let elapsed = now.saturating_sub(self.start_time) / UNLOCK_PERIOD;
        core::cmp::min(elapsed, TOTAL_UNLOCK_PERIODS)
    }

    pub fn unlocked_amount(&self, now: u64) -> BigUint<M> {
        (&self.total_amount * self.elapsed_periods(now)) / TOTAL_UNLOCK_PERIODS
    }

    pub fn claimable_amount(&self, now: u64) -> BigUint<M> {
        let unlocked = self.unlocked_amount(now);
        if unlocked > self.claimed_amount {
            &unlocked - &self.claimed_amount
        } else {
            BigUint::zero()
        }
    }
}
