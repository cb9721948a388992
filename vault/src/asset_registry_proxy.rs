use multiversx_sc::proxy_imports::*;

pub struct AssetRegistryProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for AssetRegistryProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = AssetRegistryProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        AssetRegistryProxyMethods { wrapped_tx: tx }
    }
}

pub struct AssetRegistryProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, To, Gas> AssetRegistryProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn owner_of<Arg0: ProxyArg<u64>>(
        self,
        asset_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("ownerOf")
            .argument(&asset_id)
            .original_result()
    }

    pub fn is_approved<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<u64>,
    >(
        self,
        operator: Arg0,
        asset_id: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isApproved")
            .argument(&operator)
            .argument(&asset_id)
            .original_result()
    }

    /// Moves the asset between owners. The registry checks that its
    /// caller is the current owner or an approved operator.
    pub fn transfer_asset<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
        Arg2: ProxyArg<u64>,
    >(
        self,
        from: Arg0,
        to: Arg1,
        asset_id: Arg2,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("transferAsset")
            .argument(&from)
            .argument(&to)
            .argument(&asset_id)
            .original_result()
    }
}
