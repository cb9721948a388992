use multiversx_sc::proxy_imports::*;

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

impl<Env, From, To, Gas> FractionalVaultProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    /// (price, sold, share ledger) — read at proposal creation and
    /// re-checked at execution.
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

    /// Payable: the attached EGLD must equal the vault's current price.
    pub fn sale<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        recipient: Arg0,
    ) -> TxTypedCall<Env, From, To, (), Gas, ()> {
        self.wrapped_tx
            .raw_call("sale")
            .argument(&recipient)
            .original_result()
    }
}
