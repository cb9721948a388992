use multiversx_sc::proxy_imports::*;

use crate::types::VaultState;

pub struct FractionalVaultProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for FractionalVaultProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = FractionalVaultProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        FractionalVaultProxyMethods { wrapped_tx: tx }
    }
}

pub struct FractionalVaultProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, Gas> FractionalVaultProxyMethods<Env, From, (), Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    Gas: TxGas<Env>,
{
    pub fn init<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<u64>,
        Arg2: ProxyArg<ManagedAddress<Env::Api>>,
        Arg3: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        asset_registry: Arg0,
        asset_id: Arg1,
        share_ledger: Arg2,
        administrator: Arg3,
    ) -> TxTypedDeploy<Env, From, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_deploy()
            .argument(&asset_registry)
            .argument(&asset_id)
            .argument(&share_ledger)
            .argument(&administrator)
            .original_result()
    }
}

impl<Env, From, To, Gas> FractionalVaultProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn deposit(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("deposit")
            .original_result()
    }

    pub fn set_price<Arg0: ProxyArg<BigUint<Env::Api>>>(
        self,
        amount: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setPrice")
            .argument(&amount)
            .original_result()
    }

    /// Payable: the attached EGLD must equal the current price.
    pub fn sale<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        recipient: Arg0,
    ) -> TxTypedCall<Env, From, To, (), Gas, ()> {
        self.wrapped_tx
            .raw_call("sale")
            .argument(&recipient)
            .original_result()
    }

    pub fn claim<Arg0: ProxyArg<BigUint<Env::Api>>>(
        self,
        amount: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("claim")
            .argument(&amount)
            .original_result()
    }

    pub fn get_vault_state(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, VaultState<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getVaultState")
            .original_result()
    }

    /// The (price, sold, share ledger) tuple the buyout registry reads at
    /// proposal creation and re-checks at execution.
    pub fn get_sale_info(
        self,
    ) -> TxTypedCall<
        Env,
        From,
        To,
        NotPayable,
        Gas,
        MultiValue3<BigUint<Env::Api>, bool, ManagedAddress<Env::Api>>,
    > {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getSaleInfo")
            .original_result()
    }

    pub fn get_proceeds_balance(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getProceedsBalance")
            .original_result()
    }
}
