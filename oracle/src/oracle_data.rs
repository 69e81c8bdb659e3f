elrond_wasm::imports!();
elrond_wasm::derive_imports!();

#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, TypeAbi)]
pub struct Commitment<M: ManagedTypeApi> {
    pub requester: ManagedAddress<M>,
    pub callback_address: ManagedAddress<M>,
    pub callback_method: ManagedBuffer<M>,
    pub payment: BigUint<M>,
    pub expiration: u64,
}
