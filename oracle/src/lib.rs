#![no_std]

elrond_wasm::imports!();

pub mod oracle_data;
pub mod oracle_request;

use oracle_data::Commitment;
use oracle_request::OracleRequest;

pub use chainlink_client::dispatch::ORACLE_ARGS_VERSION;

pub const EXPIRY_TIME: u64 = 5 * 60;

#[elrond_wasm::contract]
pub trait Oracle {
    #[init]
    fn init(&self, payment_token: TokenIdentifier) {
        self.payment_token().set(&payment_token);
    }

    /// Entry point reached through an ESDT transfer. The sender and amount
    /// arguments are supplied by the requester and therefore ignored: the
    /// caller and the payment are taken from the call context.
    #[payable("*")]
    #[endpoint(oracleRequest)]
    fn oracle_request(
        &self,
        _sender: ManagedAddress,
        _amount: BigUint,
        spec_id: ManagedByteArray<Self::Api, 32>,
        callback_address: ManagedAddress,
        callback_method: ManagedBuffer,
        nonce: u64,
        data_version: u64,
        data: ManagedBuffer,
    ) {
        let payment = self.call_value().single_esdt();
        require!(
            payment.token_identifier == self.payment_token().get(),
            "Wrong payment token"
        );
        require!(
            data_version == ORACLE_ARGS_VERSION,
            "Unsupported data version"
        );

        let requester = self.blockchain().get_caller();
        let request_id = self.request_id(&requester, nonce);
        let commitment = self.commitments(&request_id);
        require!(commitment.is_empty(), "Must use a unique ID");

        let expiration = self.blockchain().get_block_timestamp() + EXPIRY_TIME;
        commitment.set(&Commitment {
            requester: requester.clone(),
            callback_address: callback_address.clone(),
            callback_method: callback_method.clone(),
            payment: payment.amount.clone(),
            expiration,
        });

        self.oracle_request_event(
            &spec_id,
            &requester,
            &OracleRequest {
                request_id,
                payment: payment.amount,
                callback_address,
                callback_method,
                expiration,
                data_version,
                data,
            },
        );
    }

    #[endpoint(fulfillOracleRequest)]
    fn fulfill_oracle_request(&self, request_id: ManagedByteArray<Self::Api, 32>, data: ManagedBuffer) {
        self.only_authorized_node();

        let commitment_mapper = self.commitments(&request_id);
        require!(
            !commitment_mapper.is_empty(),
            "Must have a valid requestId"
        );
        let commitment = commitment_mapper.get();
        commitment_mapper.clear();

        self.withdrawable()
            .update(|withdrawable| *withdrawable += &commitment.payment);

        let mut args = ManagedArgBuffer::new();
        args.push_arg(&request_id);
        args.push_arg(&data);
        let _: () = ContractCall::<Self::Api, ()>::new(
            commitment.callback_address,
            commitment.callback_method,
        )
        .with_arguments_raw(args)
        .execute_on_dest_context();
    }

    /// Refunds an expired request to whoever paid for it.
    #[endpoint(cancelOracleRequest)]
    fn cancel_oracle_request(
        &self,
        request_id: ManagedByteArray<Self::Api, 32>,
        payment: BigUint,
        callback_method: ManagedBuffer,
        expiration: u64,
    ) {
        let commitment_mapper = self.commitments(&request_id);
        require!(
            !commitment_mapper.is_empty(),
            "Must have a valid requestId"
        );
        let commitment = commitment_mapper.get();

        let caller = self.blockchain().get_caller();
        require!(
            commitment.requester == caller,
            "Only the requester may cancel"
        );
        require!(
            commitment.payment == payment
                && commitment.callback_method == callback_method
                && commitment.expiration == expiration,
            "Params do not match request ID"
        );
        require!(
            expiration <= self.blockchain().get_block_timestamp(),
            "Request is not expired"
        );

        commitment_mapper.clear();
        self.cancel_oracle_request_event(&request_id);

        self.send()
            .direct_esdt(&caller, &self.payment_token().get(), 0, &payment);
    }

    #[only_owner]
    #[endpoint]
    fn withdraw(&self, recipient: ManagedAddress, amount: BigUint) {
        self.withdrawable().update(|withdrawable| {
            require!(
                *withdrawable >= amount,
                "Amount requested is greater than withdrawable balance"
            );
            *withdrawable -= &amount;
        });

        self.send()
            .direct_esdt(&recipient, &self.payment_token().get(), 0, &amount);
    }

    #[only_owner]
    #[endpoint(addAuthorization)]
    fn add_authorization(&self, node: ManagedAddress) {
        require!(self.authorized_nodes().insert(node), "Already authorized");
    }

    #[only_owner]
    #[endpoint(removeAuthorization)]
    fn remove_authorization(&self, node: ManagedAddress) {
        require!(
            self.authorized_nodes().remove(&node),
            "Authorization not found"
        );
    }

    fn only_authorized_node(&self) {
        require!(
            self.authorized_nodes()
                .contains(&self.blockchain().get_caller()),
            "Not an authorized node to fulfill requests."
        );
    }

    fn request_id(&self, requester: &ManagedAddress, nonce: u64) -> ManagedByteArray<Self::Api, 32> {
        let mut seed = requester.as_managed_buffer().clone();
        seed.append_bytes(&nonce.to_be_bytes()[..]);

        self.crypto().keccak256(&seed)
    }

    #[event("oracleRequest")]
    fn oracle_request_event(
        &self,
        #[indexed] spec_id: &ManagedByteArray<Self::Api, 32>,
        #[indexed] requester: &ManagedAddress,
        request: &OracleRequest<Self::Api>,
    );

    #[event("cancelOracleRequest")]
    fn cancel_oracle_request_event(&self, #[indexed] request_id: &ManagedByteArray<Self::Api, 32>);

    #[storage_mapper("payment_token")]
    fn payment_token(&self) -> SingleValueMapper<TokenIdentifier>;

    #[storage_mapper("commitments")]
    fn commitments(
        &self,
        request_id: &ManagedByteArray<Self::Api, 32>,
    ) -> SingleValueMapper<Commitment<Self::Api>>;

    #[view]
    #[storage_mapper("withdrawable")]
    fn withdrawable(&self) -> SingleValueMapper<BigUint>;

    #[view(authorizedNodes)]
    #[storage_mapper("authorized_nodes")]
    fn authorized_nodes(&self) -> SetMapper<ManagedAddress>;
}
