elrond_wasm::imports!();
elrond_wasm::derive_imports!();

/// Everything an off-chain node needs to serve a request.
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, TypeAbi)]
pub struct OracleRequest<M: ManagedTypeApi> {
    pub request_id: ManagedByteArray<M, 32>,
    pub payment: BigUint<M>,
    pub callback_address: ManagedAddress<M>,
    pub callback_method: ManagedBuffer<M>,
    pub expiration: u64,
    pub data_version: u64,
    pub data: ManagedBuffer<M>,
}
