#![no_std]

multiversx_sc::imports!();

pub mod asset_registry_mock_proxy;

// ============================================================
// Asset registry test double
// ============================================================
//
// Ownership directory for indivisible assets: mint, approve, query,
// and an owner/operator-gated transfer. Just enough identity CRUD for
// the vault's deposit and sale flows.

#[multiversx_sc::contract]
pub trait AssetRegistryMock {
    #[init]
    fn init(&self) {
        self.administrator().set(&self.blockchain().get_caller());
    }

    #[upgrade]
    fn upgrade(&self) {}

    #[endpoint(mint)]
    fn mint(&self, asset_id: u64, owner: ManagedAddress) {
        require!(
            self.blockchain().get_caller() == self.administrator().get(),
            "Only administrator"
        );
        require!(self.owners(asset_id).is_empty(), "Asset already exists");
        self.owners(asset_id).set(&owner);
    }

    /// Grants `operator` the right to move `asset_id`. Only the current
    /// owner may grant it; approvals coexist and are all cleared on
    /// transfer.
    #[endpoint(approve)]
    fn approve(&self, operator: ManagedAddress, asset_id: u64) {
        let caller = self.blockchain().get_caller();
        require!(!self.owners(asset_id).is_empty(), "Unknown asset");
        require!(caller == self.owners(asset_id).get(), "Only owner");
        self.approvals(asset_id).insert(operator);
    }

    #[endpoint(transferAsset)]
    fn transfer_asset(&self, from: ManagedAddress, to: ManagedAddress, asset_id: u64) {
        require!(!self.owners(asset_id).is_empty(), "Unknown asset");
        let owner = self.owners(asset_id).get();
        require!(from == owner, "Not the owner");

        let caller = self.blockchain().get_caller();
        require!(
            caller == owner || self.approvals(asset_id).contains(&caller),
            "Not authorized"
        );

        self.approvals(asset_id).clear();
        self.owners(asset_id).set(&to);
    }

    #[view(ownerOf)]
    fn owner_of(&self, asset_id: u64) -> ManagedAddress {
        require!(!self.owners(asset_id).is_empty(), "Unknown asset");
        self.owners(asset_id).get()
    }

    #[view(isApproved)]
    fn is_approved(&self, operator: &ManagedAddress, asset_id: u64) -> bool {
        self.approvals(asset_id).contains(operator)
    }

    #[storage_mapper("administrator")]
    fn administrator(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("owners")]
    fn owners(&self, asset_id: u64) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("approvals")]
    fn approvals(&self, asset_id: u64) -> UnorderedSetMapper<ManagedAddress>;
}
