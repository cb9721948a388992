#![no_std]

multiversx_sc::imports!();

pub mod share_ledger_mock_proxy;

// ============================================================
// Share ledger test double
// ============================================================
//
// Minimal fungible balance store exposing exactly the interface the
// vault and the buyout registry consume: authorized debit, supply and
// balance queries, and an authority-gated burn reserved for the
// designated vault. Plain transfer/approve semantics, no events.

#[multiversx_sc::contract]
pub trait ShareLedgerMock {
    #[init]
    fn init(&self) {
        self.administrator().set(&self.blockchain().get_caller());
    }

    #[upgrade]
    fn upgrade(&self) {}

    /// The single vault allowed to call burnWithAuthority.
    #[endpoint(setVault)]
    fn set_vault(&self, vault: ManagedAddress) {
        require!(
            self.blockchain().get_caller() == self.administrator().get(),
            "Only administrator"
        );
        self.vault().set(&vault);
    }

    #[endpoint(mint)]
    fn mint(&self, to: ManagedAddress, amount: BigUint) {
        require!(
            self.blockchain().get_caller() == self.administrator().get(),
            "Only administrator"
        );
        self.balances(&to).update(|b| *b += &amount);
        self.total_supply().update(|s| *s += &amount);
    }

    #[endpoint(approve)]
    fn approve(&self, spender: ManagedAddress, amount: BigUint) {
        let caller = self.blockchain().get_caller();
        self.allowances(&caller, &spender).set(&amount);
    }

    #[endpoint(transfer)]
    fn transfer(&self, to: ManagedAddress, amount: BigUint) {
        let caller = self.blockchain().get_caller();
        let balance = self.balances(&caller).get();
        require!(balance >= amount, "Insufficient balance");

        self.balances(&caller).set(&balance - &amount);
        self.balances(&to).update(|b| *b += &amount);
    }

    #[endpoint(debitWithAuthorization)]
    fn debit_with_authorization(
        &self,
        from: ManagedAddress,
        to: ManagedAddress,
        amount: BigUint,
    ) {
        let caller = self.blockchain().get_caller();
        let allowance = self.allowances(&from, &caller).get();
        require!(allowance >= amount, "Insufficient authorized balance");

        let balance = self.balances(&from).get();
        require!(balance >= amount, "Insufficient balance");

        self.allowances(&from, &caller).set(&allowance - &amount);
        self.balances(&from).set(&balance - &amount);
        self.balances(&to).update(|b| *b += &amount);
    }

    #[endpoint(burnWithAuthority)]
    fn burn_with_authority(&self, holder: ManagedAddress, amount: BigUint) {
        let caller = self.blockchain().get_caller();
        require!(caller == self.vault().get(), "Only the designated vault");

        let allowance = self.allowances(&holder, &caller).get();
        require!(allowance >= amount, "Insufficient authorized balance");

        let balance = self.balances(&holder).get();
        require!(balance >= amount, "Insufficient balance");

        self.allowances(&holder, &caller).set(&allowance - &amount);
        self.balances(&holder).set(&balance - &amount);
        self.total_supply().update(|s| *s -= &amount);
    }

    #[view(totalSupply)]
    fn get_total_supply(&self) -> BigUint {
        self.total_supply().get()
    }

    #[view(balanceOf)]
    fn balance_of(&self, holder: &ManagedAddress) -> BigUint {
        self.balances(holder).get()
    }

    #[view(allowanceOf)]
    fn allowance_of(&self, owner: &ManagedAddress, spender: &ManagedAddress) -> BigUint {
        self.allowances(owner, spender).get()
    }

    #[storage_mapper("administrator")]
    fn administrator(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("vault")]
    fn vault(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("totalSupply")]
    fn total_supply(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("balances")]
    fn balances(&self, holder: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[storage_mapper("allowances")]
    fn allowances(
        &self,
        owner: &ManagedAddress,
        spender: &ManagedAddress,
    ) -> SingleValueMapper<BigUint>;
}
