multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Vault State — full custody record snapshot for observers
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct VaultState<M: ManagedTypeApi> {
    pub asset_registry: ManagedAddress<M>,
    pub asset_id: u64,
    pub share_ledger: ManagedAddress<M>,
    pub administrator: ManagedAddress<M>,
    pub deposited: bool,
    /// Sale price in EGLD. Zero means the sale is disabled.
    pub price: BigUint<M>,
    pub sold: bool,
    /// Funds received at sale time. Fixed forever once `sold`.
    pub proceeds: BigUint<M>,
    /// Total share supply captured at the instant of sale. The
    /// denominator for every claim payout, immutable once set.
    pub snapshot_supply: BigUint<M>,
}
