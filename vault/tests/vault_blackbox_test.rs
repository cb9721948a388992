// Blackbox tests for the custody vault, driving the deployed contract
// together with the share-ledger and asset-registry test doubles so the
// cross-contract deposit, sale and claim flows run for real.

use multiversx_sc_scenario::imports::*;

use asset_registry_mock::asset_registry_mock_proxy;
use fractional_vault::vault_proxy;
use share_ledger_mock::share_ledger_mock_proxy;

const ADMIN: TestAddress = TestAddress::new("admin");
const SELLER: TestAddress = TestAddress::new("seller");
const BUYER: TestAddress = TestAddress::new("buyer");
const HOLDER_A: TestAddress = TestAddress::new("holder-a");
const HOLDER_B: TestAddress = TestAddress::new("holder-b");

const VAULT: TestSCAddress = TestSCAddress::new("vault");
const LEDGER: TestSCAddress = TestSCAddress::new("ledger");
const ASSET_REGISTRY: TestSCAddress = TestSCAddress::new("asset-registry");

const VAULT_CODE: MxscPath = MxscPath::new("output/fractional-vault.mxsc.json");
const LEDGER_CODE: MxscPath =
    MxscPath::new("../mocks/share-ledger-mock/output/share-ledger-mock.mxsc.json");
const ASSET_REGISTRY_CODE: MxscPath =
    MxscPath::new("../mocks/asset-registry-mock/output/asset-registry-mock.mxsc.json");

const ASSET_ID: u64 = 7;
const PRICE: u64 = 1_000;

// Share distribution: 300 + 200 = 500 total supply.
const SHARES_A: u64 = 300;
const SHARES_B: u64 = 200;

fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();
    blockchain.register_contract(VAULT_CODE, fractional_vault::ContractBuilder);
    blockchain.register_contract(LEDGER_CODE, share_ledger_mock::ContractBuilder);
    blockchain.register_contract(ASSET_REGISTRY_CODE, asset_registry_mock::ContractBuilder);
    blockchain
}

/// Deploys the collaborators and the vault, mints the asset to SELLER
/// and the share supply to the holders. The asset is not yet deposited.
fn setup() -> ScenarioWorld {
    let mut world = world();

    world.account(ADMIN).nonce(1);
    world.account(SELLER).nonce(1);
    world.account(BUYER).nonce(1).balance(10_000);
    world.account(HOLDER_A).nonce(1);
    world.account(HOLDER_B).nonce(1);

    world
        .tx()
        .from(ADMIN)
        .typed(asset_registry_mock_proxy::AssetRegistryMockProxy)
        .init()
        .code(ASSET_REGISTRY_CODE)
        .new_address(ASSET_REGISTRY)
        .run();

    world
        .tx()
        .from(ADMIN)
        .typed(share_ledger_mock_proxy::ShareLedgerMockProxy)
        .init()
        .code(LEDGER_CODE)
        .new_address(LEDGER)
        .run();

    world
        .tx()
        .from(ADMIN)
        .typed(vault_proxy::FractionalVaultProxy)
        .init(ASSET_REGISTRY, ASSET_ID, LEDGER, ADMIN)
        .code(VAULT_CODE)
        .new_address(VAULT)
        .run();

    world
        .tx()
        .from(ADMIN)
        .to(LEDGER)
        .typed(share_ledger_mock_proxy::ShareLedgerMockProxy)
        .set_vault(VAULT)
        .run();

    world
        .tx()
        .from(ADMIN)
        .to(ASSET_REGISTRY)
        .typed(asset_registry_mock_proxy::AssetRegistryMockProxy)
        .mint(ASSET_ID, SELLER)
        .run();

    world
        .tx()
        .from(ADMIN)
        .to(LEDGER)
        .typed(share_ledger_mock_proxy::ShareLedgerMockProxy)
        .mint(HOLDER_A, SHARES_A)
        .run();

    world
        .tx()
        .from(ADMIN)
        .to(LEDGER)
        .typed(share_ledger_mock_proxy::ShareLedgerMockProxy)
        .mint(HOLDER_B, SHARES_B)
        .run();

    world
}

fn deposit_asset(world: &mut ScenarioWorld) {
    world
        .tx()
        .from(SELLER)
        .to(ASSET_REGISTRY)
        .typed(asset_registry_mock_proxy::AssetRegistryMockProxy)
        .approve(VAULT, ASSET_ID)
        .run();

    world
        .tx()
        .from(SELLER)
        .to(VAULT)
        .typed(vault_proxy::FractionalVaultProxy)
        .deposit()
        .run();
}

fn set_price(world: &mut ScenarioWorld, amount: u64) {
    world
        .tx()
        .from(ADMIN)
        .to(VAULT)
        .typed(vault_proxy::FractionalVaultProxy)
        .set_price(amount)
        .run();
}

fn sell_to_buyer(world: &mut ScenarioWorld, amount: u64) {
    world
        .tx()
        .from(BUYER)
        .to(VAULT)
        .typed(vault_proxy::FractionalVaultProxy)
        .sale(BUYER)
        .egld(amount)
        .run();
}

// ============================================================
// deposit
// ============================================================

#[test]
fn deposit_requires_owner_or_approval() {
    let mut world = setup();

    // A stranger cannot pull the asset into custody.
    world
        .tx()
        .from(BUYER)
        .to(VAULT)
        .typed(vault_proxy::FractionalVaultProxy)
        .deposit()
        .returns(ExpectError(4, "Not authorized"))
        .run();

    deposit_asset(&mut world);

    let state = world
        .query()
        .to(VAULT)
        .typed(vault_proxy::FractionalVaultProxy)
        .get_vault_state()
        .returns(ReturnsResult)
        .run();
    assert!(state.deposited);
    assert!(!state.sold);

    // Custody actually moved.
    let owner = world
        .query()
        .to(ASSET_REGISTRY)
        .typed(asset_registry_mock_proxy::AssetRegistryMockProxy)
        .owner_of(ASSET_ID)
        .returns(ReturnsResult)
        .run();
    assert_eq!(owner, VAULT.to_managed_address());
}

#[test]
fn deposit_is_once_only() {
    let mut world = setup();
    deposit_asset(&mut world);

    world
        .tx()
        .from(SELLER)
        .to(VAULT)
        .typed(vault_proxy::FractionalVaultProxy)
        .deposit()
        .returns(ExpectError(4, "Already deposited"))
        .run();
}

#[test]
fn approved_operator_can_deposit() {
    let mut world = setup();

    // The owner grants the vault the transfer capability and BUYER the
    // right to trigger the deposit; both approvals coexist.
    world
        .tx()
        .from(SELLER)
        .to(ASSET_REGISTRY)
        .typed(asset_registry_mock_proxy::AssetRegistryMockProxy)
        .approve(VAULT, ASSET_ID)
        .run();
    world
        .tx()
        .from(SELLER)
        .to(ASSET_REGISTRY)
        .typed(asset_registry_mock_proxy::AssetRegistryMockProxy)
        .approve(BUYER, ASSET_ID)
        .run();

    // An unapproved caller still cannot trigger it.
    world
        .tx()
        .from(HOLDER_A)
        .to(VAULT)
        .typed(vault_proxy::FractionalVaultProxy)
        .deposit()
        .returns(ExpectError(4, "Not authorized"))
        .run();

    // The approved operator, not the owner, pulls the asset in.
    world
        .tx()
        .from(BUYER)
        .to(VAULT)
        .typed(vault_proxy::FractionalVaultProxy)
        .deposit()
        .run();

    let owner = world
        .query()
        .to(ASSET_REGISTRY)
        .typed(asset_registry_mock_proxy::AssetRegistryMockProxy)
        .owner_of(ASSET_ID)
        .returns(ReturnsResult)
        .run();
    assert_eq!(owner, VAULT.to_managed_address());
}

// ============================================================
// setPrice
// ============================================================

#[test]
fn set_price_is_administrator_only() {
    let mut world = setup();

    world
        .tx()
        .from(SELLER)
        .to(VAULT)
        .typed(vault_proxy::FractionalVaultProxy)
        .set_price(PRICE)
        .returns(ExpectError(4, "Only administrator can set the price"))
        .run();

    set_price(&mut world, PRICE);

    let state = world
        .query()
        .to(VAULT)
        .typed(vault_proxy::FractionalVaultProxy)
        .get_vault_state()
        .returns(ReturnsResult)
        .run();
    assert_eq!(state.price, PRICE);
}

#[test]
fn set_price_rejected_after_sale() {
    let mut world = setup();
    deposit_asset(&mut world);
    set_price(&mut world, PRICE);
    sell_to_buyer(&mut world, PRICE);

    world
        .tx()
        .from(ADMIN)
        .to(VAULT)
        .typed(vault_proxy::FractionalVaultProxy)
        .set_price(2_000u64)
        .returns(ExpectError(4, "Already sold"))
        .run();
}

// ============================================================
// sale
// ============================================================

#[test]
fn sale_requires_exact_payment() {
    let mut world = setup();
    deposit_asset(&mut world);
    set_price(&mut world, PRICE);

    world
        .tx()
        .from(BUYER)
        .to(VAULT)
        .typed(vault_proxy::FractionalVaultProxy)
        .sale(BUYER)
        .egld(PRICE - 1)
        .returns(ExpectError(4, "Payment must equal the sale price"))
        .run();

    world
        .tx()
        .from(BUYER)
        .to(VAULT)
        .typed(vault_proxy::FractionalVaultProxy)
        .sale(BUYER)
        .egld(PRICE + 1)
        .returns(ExpectError(4, "Payment must equal the sale price"))
        .run();
}

#[test]
fn sale_transfers_asset_and_snapshots_supply() {
    let mut world = setup();
    deposit_asset(&mut world);
    set_price(&mut world, PRICE);
    sell_to_buyer(&mut world, PRICE);

    let owner = world
        .query()
        .to(ASSET_REGISTRY)
        .typed(asset_registry_mock_proxy::AssetRegistryMockProxy)
        .owner_of(ASSET_ID)
        .returns(ReturnsResult)
        .run();
    assert_eq!(owner, BUYER.to_managed_address());

    let state = world
        .query()
        .to(VAULT)
        .typed(vault_proxy::FractionalVaultProxy)
        .get_vault_state()
        .returns(ReturnsResult)
        .run();
    assert!(state.sold);
    assert_eq!(state.proceeds, PRICE);
    assert_eq!(state.snapshot_supply, SHARES_A + SHARES_B);

    let proceeds_balance = world
        .query()
        .to(VAULT)
        .typed(vault_proxy::FractionalVaultProxy)
        .get_proceeds_balance()
        .returns(ReturnsResultUnmanaged)
        .run();
    assert_eq!(proceeds_balance, RustBigUint::from(PRICE));
}

#[test]
fn sale_happens_at_most_once() {
    let mut world = setup();
    deposit_asset(&mut world);
    set_price(&mut world, PRICE);
    sell_to_buyer(&mut world, PRICE);

    world
        .tx()
        .from(BUYER)
        .to(VAULT)
        .typed(vault_proxy::FractionalVaultProxy)
        .sale(BUYER)
        .egld(PRICE)
        .returns(ExpectError(4, "Already sold"))
        .run();
}

#[test]
fn sale_requires_deposit_and_price() {
    let mut world = setup();

    // Nothing in custody yet.
    set_price(&mut world, PRICE);
    world
        .tx()
        .from(BUYER)
        .to(VAULT)
        .typed(vault_proxy::FractionalVaultProxy)
        .sale(BUYER)
        .egld(PRICE)
        .returns(ExpectError(4, "Asset not deposited"))
        .run();

    // Deposited but price reset to zero: sale disabled.
    deposit_asset(&mut world);
    set_price(&mut world, 0u64);
    world
        .tx()
        .from(BUYER)
        .to(VAULT)
        .typed(vault_proxy::FractionalVaultProxy)
        .sale(BUYER)
        .egld(PRICE)
        .returns(ExpectError(4, "Price not set"))
        .run();
}

// ============================================================
// claim
// ============================================================

#[test]
fn claim_pays_truncated_proportional_share() {
    let mut world = setup();
    deposit_asset(&mut world);
    set_price(&mut world, PRICE);
    sell_to_buyer(&mut world, PRICE);

    // proceeds = 1000, snapshot = 500.
    world
        .tx()
        .from(HOLDER_A)
        .to(LEDGER)
        .typed(share_ledger_mock_proxy::ShareLedgerMockProxy)
        .approve(VAULT, 51u64)
        .run();

    // floor(1000 * 50 / 500) = 100
    world
        .tx()
        .from(HOLDER_A)
        .to(VAULT)
        .typed(vault_proxy::FractionalVaultProxy)
        .claim(50u64)
        .run();
    world.check_account(HOLDER_A).balance(100);

    // floor(1000 * 1 / 500) = 2
    world
        .tx()
        .from(HOLDER_A)
        .to(VAULT)
        .typed(vault_proxy::FractionalVaultProxy)
        .claim(1u64)
        .run();
    world.check_account(HOLDER_A).balance(102);

    // Burning reduced live supply; the snapshot denominator is fixed.
    let supply = world
        .query()
        .to(LEDGER)
        .typed(share_ledger_mock_proxy::ShareLedgerMockProxy)
        .total_supply()
        .returns(ReturnsResultUnmanaged)
        .run();
    assert_eq!(supply, RustBigUint::from(SHARES_A + SHARES_B - 51));

    let state = world
        .query()
        .to(VAULT)
        .typed(vault_proxy::FractionalVaultProxy)
        .get_vault_state()
        .returns(ReturnsResult)
        .run();
    assert_eq!(state.snapshot_supply, SHARES_A + SHARES_B);
}

#[test]
fn claim_rejects_dust_that_pays_nothing() {
    let mut world = setup();
    deposit_asset(&mut world);
    // Price 10 against snapshot 500: any claim under 50 shares
    // truncates to a zero payout.
    set_price(&mut world, 10u64);
    sell_to_buyer(&mut world, 10u64);

    world
        .tx()
        .from(HOLDER_B)
        .to(LEDGER)
        .typed(share_ledger_mock_proxy::ShareLedgerMockProxy)
        .approve(VAULT, 40u64)
        .run();

    world
        .tx()
        .from(HOLDER_B)
        .to(VAULT)
        .typed(vault_proxy::FractionalVaultProxy)
        .claim(40u64)
        .returns(ExpectError(4, "Zero payout"))
        .run();
}

// ============================================================
// views
// ============================================================

#[test]
fn view_reads_are_idempotent() {
    let mut world = setup();
    deposit_asset(&mut world);
    set_price(&mut world, PRICE);
    sell_to_buyer(&mut world, PRICE);

    // Repeated reads with no state change in between return the same
    // snapshot, bit for bit.
    let first = world
        .query()
        .to(VAULT)
        .typed(vault_proxy::FractionalVaultProxy)
        .get_vault_state()
        .returns(ReturnsResult)
        .run();
    let second = world
        .query()
        .to(VAULT)
        .typed(vault_proxy::FractionalVaultProxy)
        .get_vault_state()
        .returns(ReturnsResult)
        .run();
    assert_eq!(first, second);

    let balance_first = world
        .query()
        .to(VAULT)
        .typed(vault_proxy::FractionalVaultProxy)
        .get_proceeds_balance()
        .returns(ReturnsResultUnmanaged)
        .run();
    let balance_second = world
        .query()
        .to(VAULT)
        .typed(vault_proxy::FractionalVaultProxy)
        .get_proceeds_balance()
        .returns(ReturnsResultUnmanaged)
        .run();
    assert_eq!(balance_first, balance_second);
}

#[test]
fn claim_requires_sale_and_authorization() {
    let mut world = setup();
    deposit_asset(&mut world);
    set_price(&mut world, PRICE);

    world
        .tx()
        .from(HOLDER_A)
        .to(VAULT)
        .typed(vault_proxy::FractionalVaultProxy)
        .claim(50u64)
        .returns(ExpectError(4, "Vault not sold yet"))
        .run();

    sell_to_buyer(&mut world, PRICE);

    // No allowance granted to the vault: the ledger refuses the burn
    // and the whole claim aborts.
    world
        .tx()
        .from(HOLDER_A)
        .to(VAULT)
        .typed(vault_proxy::FractionalVaultProxy)
        .claim(50u64)
        .returns(ExpectError(4, "Insufficient authorized balance"))
        .run();

    world
        .tx()
        .from(HOLDER_A)
        .to(VAULT)
        .typed(vault_proxy::FractionalVaultProxy)
        .claim(0u64)
        .returns(ExpectError(4, "Amount must be positive"))
        .run();
}
