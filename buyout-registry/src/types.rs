multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Proposal Status — lifecycle states
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum ProposalStatus {
    /// Open for locking and execution (until the deadline passes).
    Active,
    /// The vault sale went through with the escrowed funds. Terminal.
    Executed,
    /// Proposer cancelled and recovered the escrow. Terminal.
    Canceled,
}

// ============================================================
// Proposal — one buyout attempt against a vault
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct Proposal<M: ManagedTypeApi> {
    pub id: u64,
    pub vault: ManagedAddress<M>,
    pub proposer: ManagedAddress<M>,
    /// Share ledger address, copied from the vault at creation time.
    pub share_ledger: ManagedAddress<M>,
    /// The vault price captured at creation; exactly this amount sits
    /// in escrow until execution or cancellation.
    pub escrowed_amount: BigUint<M>,
    /// Absolute timestamp. Past it, lock and execute are blocked;
    /// unlock and cancel stay open.
    pub deadline: u64,
    pub status: ProposalStatus,
    /// Sum of every voter's locked stake. Locked weight IS the vote;
    /// there is no separate ballot.
    pub total_locked: BigUint<M>,
}
