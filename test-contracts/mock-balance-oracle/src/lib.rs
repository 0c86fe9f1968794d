#![no_std]

multiversx_sc::imports!();

pub mod mock_balance_oracle_proxy;

/// Stand-in for the governance token ledger in scenario tests.
/// Balances are whatever the test last set, zero otherwise.
#[multiversx_sc::contract]
pub trait MockBalanceOracle {
    #[init]
    fn init(&self) {}

    #[upgrade]
    fn upgrade(&self) {}

    #[endpoint(setBalance)]
    fn set_balance(&self, account: ManagedAddress, amount: BigUint) {
        self.balances(&account).set(&amount);
    }

    #[view(balanceOf)]
    fn balance_of(&self, account: ManagedAddress) -> BigUint {
        self.balances(&account).get()
    }

    #[storage_mapper("balances")]
    fn balances(&self, account: &ManagedAddress) -> SingleValueMapper<BigUint>;
}
