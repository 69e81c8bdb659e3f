#![no_std]

elrond_wasm::imports!();

/// Test responder that calls the requester back from inside `oracleRequest`,
/// before the requester's transfer returns.
#[elrond_wasm::contract]
pub trait InstantOracle {
    #[init]
    fn init(&self, answer: ManagedBuffer) {
        self.answer().set(&answer);
    }

    #[payable("*")]
    #[endpoint(oracleRequest)]
    fn oracle_request(
        &self,
        _sender: ManagedAddress,
        _amount: BigUint,
        _spec_id: ManagedByteArray<Self::Api, 32>,
        callback_address: ManagedAddress,
        callback_method: ManagedBuffer,
        nonce: u64,
        _data_version: u64,
        _data: ManagedBuffer,
    ) {
        let mut seed = self.blockchain().get_caller().as_managed_buffer().clone();
        seed.append_bytes(&nonce.to_be_bytes()[..]);
        let request_id = self.crypto().keccak256(&seed);

        let mut args = ManagedArgBuffer::new();
        args.push_arg(&request_id);
        args.push_arg(&self.answer().get());
        let _: () = ContractCall::<Self::Api, ()>::new(callback_address, callback_method)
            .with_arguments_raw(args)
            .execute_on_dest_context();
    }

    #[storage_mapper("answer")]
    fn answer(&self) -> SingleValueMapper<ManagedBuffer>;
}
