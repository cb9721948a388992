#![no_std]

multiversx_sc::imports!();

pub mod buyout_registry_proxy;
pub mod share_ledger_proxy;
pub mod types;
pub mod vault_proxy;

use types::{Proposal, ProposalStatus};

// ============================================================
// Constants
// ============================================================

/// Basis points denominator for the quorum fraction
const BPS_DENOMINATOR: u64 = 10_000;

/// Shortest duration a proposal may be open for: 1 minute
const MIN_PROPOSAL_DURATION: u64 = 60;

/// Hard ceiling on the configurable maximum duration: 30 days
const MAX_DURATION_CEILING: u64 = 2_592_000;

// ============================================================
// Contract
// ============================================================
//
// Buyout consensus engine. A proposal escrows the vault's price at
// creation; shareholders lock share balance into it as voting weight;
// once locked weight crosses the quorum fraction of live supply,
// anyone may execute, which buys the vault's asset for the proposer
// with the escrowed funds. Escrow leaves exactly once: consumed by
// execution or refunded by cancellation. Locked stake is never
// stranded — unlock stays open in every state forever.

#[multiversx_sc::contract]
pub trait BuyoutRegistry {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(&self, quorum_basis_points: u64, max_proposal_duration: u64) {
        self.require_valid_quorum(quorum_basis_points);
        self.require_valid_max_duration(max_proposal_duration);

        self.administrator().set(&self.blockchain().get_caller());
        self.quorum_basis_points().set(quorum_basis_points);
        self.max_proposal_duration().set(max_proposal_duration);
        self.proposal_count().set(0u64);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: propose
    // Opens a buyout attempt. The attached EGLD is the escrow and
    // must equal the vault's current price exactly; price and share
    // ledger are frozen into the proposal.
    // ========================================================

    #[endpoint(propose)]
    #[payable("EGLD")]
    fn propose(&self, vault: ManagedAddress, duration_seconds: u64) -> u64 {
        require!(!vault.is_zero(), "Zero address");
        require!(
            duration_seconds >= MIN_PROPOSAL_DURATION
                && duration_seconds <= self.max_proposal_duration().get(),
            "Duration out of bounds"
        );

        let (price, sold, share_ledger) = self.read_sale_info(&vault);
        require!(!sold, "Already sold");
        require!(price > 0u64, "Price not set");

        let escrow = self.call_value().egld_value().clone_value();
        require!(escrow == price, "Escrow must equal the vault price");

        let caller = self.blockchain().get_caller();
        let proposal_id = self.proposal_count().get() + 1u64;
        let deadline = self.blockchain().get_block_timestamp() + duration_seconds;

        let proposal = Proposal {
            id: proposal_id,
            vault: vault.clone(),
            proposer: caller.clone(),
            share_ledger,
            escrowed_amount: escrow,
            deadline,
            status: ProposalStatus::Active,
            total_locked: BigUint::zero(),
        };

        self.proposals(proposal_id).set(&proposal);
        self.proposal_count().set(proposal_id);

        self.proposed_event(proposal_id, &vault, &caller, deadline);

        proposal_id
    }

    // ========================================================
    // ENDPOINT: lock
    // Locked weight is the vote. Requires the caller's prior
    // authorization on the share ledger towards this registry.
    // ========================================================

    #[endpoint(lock)]
    fn lock(&self, proposal_id: u64, amount: BigUint) {
        require!(amount > 0u64, "Amount must be positive");

        let mut proposal = self.existing_proposal(proposal_id);
        require!(
            proposal.status == ProposalStatus::Active,
            "Proposal is not active"
        );
        require!(
            self.blockchain().get_block_timestamp() <= proposal.deadline,
            "Proposal expired"
        );

        let caller = self.blockchain().get_caller();

        // Commit the weight before the external debit so a reentrant
        // lock observes the updated tally.
        self.locked_stake(proposal_id, &caller)
            .update(|s| *s += &amount);
        proposal.total_locked += &amount;
        self.proposals(proposal_id).set(&proposal);

        self.tx()
            .to(&proposal.share_ledger)
            .typed(share_ledger_proxy::ShareLedgerProxy)
            .debit_with_authorization(
                caller.clone(),
                self.blockchain().get_sc_address(),
                amount.clone(),
            )
            .sync_call();

        self.locked_event(proposal_id, &caller, &amount);
    }

    // ========================================================
    // ENDPOINT: unlock
    // Deliberately unrestricted by status or deadline: stake can
    // always leave, before, during and after finalization.
    // ========================================================

    #[endpoint(unlock)]
    fn unlock(&self, proposal_id: u64, amount: BigUint) {
        require!(amount > 0u64, "Amount must be positive");

        let mut proposal = self.existing_proposal(proposal_id);
        let caller = self.blockchain().get_caller();

        let locked = self.locked_stake(proposal_id, &caller).get();
        require!(locked >= amount, "Unlock exceeds locked balance");

        self.locked_stake(proposal_id, &caller).set(&locked - &amount);
        // Floor at zero: should not underflow under correct accounting.
        if proposal.total_locked >= amount {
            proposal.total_locked -= &amount;
        } else {
            proposal.total_locked = BigUint::zero();
        }
        self.proposals(proposal_id).set(&proposal);

        self.tx()
            .to(&proposal.share_ledger)
            .typed(share_ledger_proxy::ShareLedgerProxy)
            .transfer(caller.clone(), amount.clone())
            .sync_call();

        self.unlocked_event(proposal_id, &caller, &amount);
    }

    // ========================================================
    // ENDPOINT: execute
    // Anyone may trigger. Quorum is measured against the ledger's
    // LIVE total supply, not a snapshot, so supply changes shift the
    // effective bar. The vault's live price must still equal the
    // frozen escrow; a moved price blocks execution until cancel.
    // ========================================================

    #[endpoint(execute)]
    fn execute(&self, proposal_id: u64) {
        self.reentrancy_enter();

        let mut proposal = self.existing_proposal(proposal_id);
        require!(
            proposal.status == ProposalStatus::Active,
            "Proposal is not active"
        );
        require!(
            self.blockchain().get_block_timestamp() <= proposal.deadline,
            "Proposal expired"
        );

        let (price, sold, _ledger) = self.read_sale_info(&proposal.vault);
        require!(!sold, "Already sold");
        require!(
            price == proposal.escrowed_amount,
            "Vault price changed since proposal"
        );

        let supply: BigUint = self
            .tx()
            .to(&proposal.share_ledger)
            .typed(share_ledger_proxy::ShareLedgerProxy)
            .total_supply()
            .returns(ReturnsResult)
            .sync_call();
        require!(
            &proposal.total_locked * BPS_DENOMINATOR
                >= &supply * self.quorum_basis_points().get(),
            "Quorum not reached"
        );

        // Finalize before the sale call; a failing sale aborts the
        // whole transaction, so Executed cannot outlive a failed sale.
        proposal.status = ProposalStatus::Executed;
        self.proposals(proposal_id).set(&proposal);

        self.tx()
            .to(&proposal.vault)
            .typed(vault_proxy::FractionalVaultProxy)
            .sale(proposal.proposer.clone())
            .egld(&proposal.escrowed_amount)
            .sync_call();

        self.executed_event(proposal_id, &proposal.vault, &proposal.escrowed_amount);
        self.reentrancy_exit();
    }

    // ========================================================
    // ENDPOINT: cancel
    // Proposer-only, allowed regardless of expiry. The only path
    // that recovers escrow once quorum cannot or will not be met.
    // ========================================================

    #[endpoint(cancel)]
    fn cancel(&self, proposal_id: u64) {
        self.reentrancy_enter();

        let mut proposal = self.existing_proposal(proposal_id);
        let caller = self.blockchain().get_caller();
        require!(proposal.proposer == caller, "Only proposer can cancel");
        require!(
            proposal.status == ProposalStatus::Active,
            "Proposal is not active"
        );

        proposal.status = ProposalStatus::Canceled;
        self.proposals(proposal_id).set(&proposal);

        self.send().direct_egld(&caller, &proposal.escrowed_amount);

        self.canceled_event(proposal_id, &caller, &proposal.escrowed_amount);
        self.reentrancy_exit();
    }

    // ========================================================
    // ENDPOINTS: administration
    // Effective immediately for future propose/execute; never touch
    // already-escrowed proposals' frozen amounts.
    // ========================================================

    #[endpoint(setQuorum)]
    fn set_quorum(&self, basis_points: u64) {
        self.require_administrator();
        self.require_valid_quorum(basis_points);
        self.quorum_basis_points().set(basis_points);
        self.quorum_changed_event(basis_points);
    }

    #[endpoint(setMaxProposalDuration)]
    fn set_max_proposal_duration(&self, seconds: u64) {
        self.require_administrator();
        self.require_valid_max_duration(seconds);
        self.max_proposal_duration().set(seconds);
        self.max_duration_changed_event(seconds);
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn existing_proposal(&self, proposal_id: u64) -> Proposal<Self::Api> {
        require!(
            !self.proposals(proposal_id).is_empty(),
            "Proposal does not exist"
        );
        self.proposals(proposal_id).get()
    }

    fn read_sale_info(&self, vault: &ManagedAddress) -> (BigUint, bool, ManagedAddress) {
        let info: MultiValue3<BigUint, bool, ManagedAddress> = self
            .tx()
            .to(vault)
            .typed(vault_proxy::FractionalVaultProxy)
            .get_sale_info()
            .returns(ReturnsResult)
            .sync_call();
        info.into_tuple()
    }

    fn require_administrator(&self) {
        require!(
            self.blockchain().get_caller() == self.administrator().get(),
            "Only administrator can configure"
        );
    }

    fn require_valid_quorum(&self, basis_points: u64) {
        require!(
            basis_points > 0 && basis_points <= BPS_DENOMINATOR,
            "Quorum out of bounds"
        );
    }

    fn require_valid_max_duration(&self, seconds: u64) {
        require!(
            seconds >= MIN_PROPOSAL_DURATION && seconds <= MAX_DURATION_CEILING,
            "Duration out of bounds"
        );
    }

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

    #[view(getProposal)]
    fn get_proposal(&self, proposal_id: u64) -> Proposal<Self::Api> {
        self.existing_proposal(proposal_id)
    }

    #[view(getProposalCount)]
    fn get_proposal_count(&self) -> u64 {
        self.proposal_count().get()
    }

    #[view(getLockedStake)]
    fn get_locked_stake(&self, proposal_id: u64, voter: &ManagedAddress) -> BigUint {
        self.locked_stake(proposal_id, voter).get()
    }

    #[view(getConfig)]
    fn get_config(&self) -> MultiValue2<u64, u64> {
        (
            self.quorum_basis_points().get(),
            self.max_proposal_duration().get(),
        )
            .into()
    }

    #[view(getActiveProposals)]
    fn get_active_proposals(&self) -> MultiValueEncoded<Proposal<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        let total = self.proposal_count().get();
        let now = self.blockchain().get_block_timestamp();

        for id in 1..=total {
            let proposal = self.proposals(id).get();
            if proposal.status == ProposalStatus::Active && now <= proposal.deadline {
                result.push(proposal);
            }
        }
        result
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("proposed")]
    fn proposed_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] vault: &ManagedAddress,
        #[indexed] proposer: &ManagedAddress,
        deadline: u64,
    );

    #[event("locked")]
    fn locked_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] voter: &ManagedAddress,
        amount: &BigUint,
    );

    #[event("unlocked")]
    fn unlocked_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] voter: &ManagedAddress,
        amount: &BigUint,
    );

    #[event("executed")]
    fn executed_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] vault: &ManagedAddress,
        paid: &BigUint,
    );

    #[event("canceled")]
    fn canceled_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] proposer: &ManagedAddress,
        refunded: &BigUint,
    );

    #[event("quorumChanged")]
    fn quorum_changed_event(&self, #[indexed] basis_points: u64);

    #[event("maxDurationChanged")]
    fn max_duration_changed_event(&self, #[indexed] seconds: u64);

    // ========================================================
    // STORAGE
    // ========================================================

    // ── Configuration ──

    #[storage_mapper("administrator")]
    fn administrator(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("quorumBasisPoints")]
    fn quorum_basis_points(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("maxProposalDuration")]
    fn max_proposal_duration(&self) -> SingleValueMapper<u64>;

    // ── Proposals ──

    #[storage_mapper("proposalCount")]
    fn proposal_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("proposals")]
    fn proposals(&self, id: u64) -> SingleValueMapper<Proposal<Self::Api>>;

    /// Nested map: proposal id → voter → locked amount. Each proposal
    /// owns its entries; ids are never reused.
    #[storage_mapper("lockedStake")]
    fn locked_stake(
        &self,
        proposal_id: u64,
        voter: &ManagedAddress,
    ) -> SingleValueMapper<BigUint>;

    // ── Reentrancy guard ──

    #[storage_mapper("entryGuard")]
    fn entry_guard(&self) -> SingleValueMapper<bool>;
}
