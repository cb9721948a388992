// Endpoint-level behavior is covered by the blackbox scenario suite
// (vault_blackbox_test.rs). This test only verifies the contract
// object instantiates with DebugApi, i.e. the ABI is sound.

use multiversx_sc_scenario::api::DebugApi;

type VaultContract = fractional_vault::ContractObj<DebugApi>;

#[test]
fn test_contract_builds() {
    let _: fn() -> VaultContract = fractional_vault::contract_obj;
}
