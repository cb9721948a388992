#![no_std]

multiversx_sc::imports!();

pub mod asset_registry_proxy;
pub mod share_ledger_proxy;
pub mod types;
pub mod vault_proxy;

use types::VaultState;

// ============================================================
// Contract
// ============================================================
//
// Custody vault for one indivisible asset. Lifecycle:
// Empty → Held (deposit, once) → Sold (sale, once). The record is
// never destroyed so late claims stay payable indefinitely.

#[multiversx_sc::contract]
pub trait FractionalVault {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(
        &self,
        asset_registry: ManagedAddress,
        asset_id: u64,
        share_ledger: ManagedAddress,
        administrator: ManagedAddress,
    ) {
        require!(
            !asset_registry.is_zero() && !share_ledger.is_zero() && !administrator.is_zero(),
            "Zero address"
        );
        self.asset_registry().set(&asset_registry);
        self.asset_id().set(asset_id);
        self.share_ledger().set(&share_ledger);
        self.administrator().set(&administrator);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: deposit
    // Moves the asset into custody. Caller must be the asset's
    // current owner or an approved operator for it.
    // ========================================================

    #[endpoint(deposit)]
    fn deposit(&self) {
        require!(!self.deposited().get(), "Already deposited");

        let caller = self.blockchain().get_caller();
        let registry = self.asset_registry().get();
        let asset_id = self.asset_id().get();

        let owner: ManagedAddress = self
            .tx()
            .to(&registry)
            .typed(asset_registry_proxy::AssetRegistryProxy)
            .owner_of(asset_id)
            .returns(ReturnsResult)
            .sync_call();

        if caller != owner {
            let approved: bool = self
                .tx()
                .to(&registry)
                .typed(asset_registry_proxy::AssetRegistryProxy)
                .is_approved(caller.clone(), asset_id)
                .returns(ReturnsResult)
                .sync_call();
            require!(approved, "Not authorized");
        }

        // Flag first, pull second: a reentrant deposit during the
        // transfer call hits the Already-deposited check.
        self.deposited().set(true);

        let own_address = self.blockchain().get_sc_address();
        self.tx()
            .to(&registry)
            .typed(asset_registry_proxy::AssetRegistryProxy)
            .transfer_asset(owner, own_address.clone(), asset_id)
            .sync_call();

        // Post-transfer verification: custody must actually hold it now.
        let new_owner: ManagedAddress = self
            .tx()
            .to(&registry)
            .typed(asset_registry_proxy::AssetRegistryProxy)
            .owner_of(asset_id)
            .returns(ReturnsResult)
            .sync_call();
        require!(new_owner == own_address, "Asset transfer not completed");

        self.deposited_event(&caller, asset_id);
    }

    // ========================================================
    // ENDPOINT: setPrice
    // Administrator-only, any time before the sale. A zero price
    // disables the sale.
    // ========================================================

    #[endpoint(setPrice)]
    fn set_price(&self, amount: BigUint) {
        let caller = self.blockchain().get_caller();
        require!(
            caller == self.administrator().get(),
            "Only administrator can set the price"
        );
        require!(!self.sold().get(), "Already sold");

        self.price().set(&amount);
        self.price_set_event(&amount);
    }

    // ========================================================
    // ENDPOINT: sale
    // Capability-gated, not identity-gated: anyone paying exactly
    // the current price buys the asset for `recipient`. In practice
    // the buyout registry drives this with escrowed funds.
    // ========================================================

    #[endpoint(sale)]
    #[payable("EGLD")]
    fn sale(&self, recipient: ManagedAddress) {
        self.reentrancy_enter();

        require!(self.deposited().get(), "Asset not deposited");
        require!(!self.sold().get(), "Already sold");
        require!(!recipient.is_zero(), "Zero address");

        let price = self.price().get();
        require!(price > 0u64, "Price not set");

        let paid = self.call_value().egld_value().clone_value();
        require!(paid == price, "Payment must equal the sale price");

        let registry = self.asset_registry().get();
        let asset_id = self.asset_id().get();

        self.tx()
            .to(&registry)
            .typed(asset_registry_proxy::AssetRegistryProxy)
            .transfer_asset(self.blockchain().get_sc_address(), recipient.clone(), asset_id)
            .sync_call();

        let new_owner: ManagedAddress = self
            .tx()
            .to(&registry)
            .typed(asset_registry_proxy::AssetRegistryProxy)
            .owner_of(asset_id)
            .returns(ReturnsResult)
            .sync_call();
        require!(new_owner == recipient, "Asset transfer not completed");

        // Only after the asset verifiably changed hands: mark sold and
        // freeze the claim denominator.
        let supply: BigUint = self
            .tx()
            .to(&self.share_ledger().get())
            .typed(share_ledger_proxy::ShareLedgerProxy)
            .total_supply()
            .returns(ReturnsResult)
            .sync_call();
        require!(supply > 0u64, "Zero share supply");

        self.sold().set(true);
        self.proceeds().set(&paid);
        self.snapshot_supply().set(&supply);

        self.sold_event(&recipient, &paid, &supply);
        self.reentrancy_exit();
    }

    // ========================================================
    // ENDPOINT: claim
    // Burn shares, receive floor(proceeds * amount / snapshot).
    // The burn strictly precedes the payout transfer, so a reentrant
    // claim can never see un-reduced supply.
    // ========================================================

    #[endpoint(claim)]
    fn claim(&self, amount: BigUint) {
        self.reentrancy_enter();

        require!(self.sold().get(), "Vault not sold yet");
        require!(amount > 0u64, "Amount must be positive");

        let snapshot = self.snapshot_supply().get();
        require!(snapshot > 0u64, "Zero share supply");

        let caller = self.blockchain().get_caller();
        self.tx()
            .to(&self.share_ledger().get())
            .typed(share_ledger_proxy::ShareLedgerProxy)
            .burn_with_authority(caller.clone(), amount.clone())
            .sync_call();

        // Multiply-then-divide, floored. Never reorder: dividing first
        // loses precision differently.
        let payout = &self.proceeds().get() * &amount / snapshot;
        require!(payout > 0u64, "Zero payout");

        self.send().direct_egld(&caller, &payout);
        self.claimed_event(&caller, &amount, &payout);
        self.reentrancy_exit();
    }

    // ========================================================
    // INTERNAL: non-reentrant guard for value-moving endpoints
    // ========================================================

    fn reentrancy_enter(&self) {
        require!(!self.entry_guard().get(), "Reentrant call");
        self.entry_guard().set(true);
    }

    fn reentrancy_exit(&self) {
        self.entry_guard().clear();
    }

    // ========================================================
    // VIEWS — read-only queries
    // ========================================================

    #[view(getVaultState)]
    fn get_vault_state(&self) -> VaultState<Self::Api> {
        VaultState {
            asset_registry: self.asset_registry().get(),
            asset_id: self.asset_id().get(),
            share_ledger: self.share_ledger().get(),
            administrator: self.administrator().get(),
            deposited: self.deposited().get(),
            price: self.price().get(),
            sold: self.sold().get(),
            proceeds: self.proceeds().get(),
            snapshot_supply: self.snapshot_supply().get(),
        }
    }

    #[view(getSaleInfo)]
    fn get_sale_info(&self) -> MultiValue3<BigUint, bool, ManagedAddress> {
        (
            self.price().get(),
            self.sold().get(),
            self.share_ledger().get(),
        )
            .into()
    }

    #[view(getProceedsBalance)]
    fn get_proceeds_balance(&self) -> BigUint {
        self.blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::egld(), 0)
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("deposited")]
    fn deposited_event(&self, #[indexed] depositor: &ManagedAddress, #[indexed] asset_id: u64);

    #[event("priceSet")]
    fn price_set_event(&self, #[indexed] amount: &BigUint);

    #[event("sold")]
    fn sold_event(
        &self,
        #[indexed] recipient: &ManagedAddress,
        #[indexed] proceeds: &BigUint,
        snapshot_supply: &BigUint,
    );

    #[event("claimed")]
    fn claimed_event(
        &self,
        #[indexed] claimant: &ManagedAddress,
        #[indexed] amount: &BigUint,
        payout: &BigUint,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    // ── Asset reference ──

    #[storage_mapper("assetRegistry")]
    fn asset_registry(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("assetId")]
    fn asset_id(&self) -> SingleValueMapper<u64>;

    // ── Configuration ──

    #[storage_mapper("shareLedger")]
    fn share_ledger(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("administrator")]
    fn administrator(&self) -> SingleValueMapper<ManagedAddress>;

    // ── Custody record ──

    #[storage_mapper("deposited")]
    fn deposited(&self) -> SingleValueMapper<bool>;

    #[storage_mapper("price")]
    fn price(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("sold")]
    fn sold(&self) -> SingleValueMapper<bool>;

    #[storage_mapper("proceeds")]
    fn proceeds(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("snapshotSupply")]
    fn snapshot_supply(&self) -> SingleValueMapper<BigUint>;

    // ── Reentrancy guard ──

    #[storage_mapper("entryGuard")]
    fn entry_guard(&self) -> SingleValueMapper<bool>;
}
