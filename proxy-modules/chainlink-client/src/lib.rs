#![no_std]

elrond_wasm::imports!();

pub mod dispatch;
pub mod endpoint_resolver;
pub mod errors;
pub mod request;

use dispatch::OracleDispatch;
use errors::{
    ERR_ALREADY_PENDING, ERR_REQUEST_NOT_PENDING, ERR_TRANSFER_REJECTED,
    ERR_UNAUTHORIZED_FULFILLMENT, ERR_UNCONFIGURED,
};
pub use request::Request;

const INITIAL_REQUEST_COUNT: u64 = 1;

pub mod oracle_proxy {
    elrond_wasm::imports!();

    #[elrond_wasm::proxy]
    pub trait ChainlinkOracle {
        #[endpoint(cancelOracleRequest)]
        fn cancel_oracle_request(
            &self,
            request_id: ManagedByteArray<Self::Api, 32>,
            payment: BigUint,
            callback_method: ManagedBuffer,
            expiration: u64,
        );
    }
}

/// Request bookkeeping for a contract that consumes oracle responses.
///
/// Every request id is bound to the oracle it was sent to. The callback
/// endpoint of the hosting contract must start with
/// `validate_chainlink_callback`, which only lets that oracle through, once.
#[elrond_wasm::module]
pub trait ChainlinkClientModule: endpoint_resolver::EndpointResolverModule {
    fn build_chainlink_request(
        &self,
        spec_id: ManagedByteArray<Self::Api, 32>,
        callback_address: ManagedAddress,
        callback_method: ManagedBuffer,
    ) -> Request<Self::Api> {
        Request::new(spec_id, callback_address, callback_method)
    }

    fn send_chainlink_request(
        &self,
        request: Request<Self::Api>,
        payment: BigUint,
    ) -> ManagedByteArray<Self::Api, 32> {
        require!(!self.chainlink_oracle().is_empty(), ERR_UNCONFIGURED);

        let oracle = self.chainlink_oracle().get();
        self.send_chainlink_request_to(oracle, request, payment)
    }

    fn send_chainlink_request_to(
        &self,
        oracle: ManagedAddress,
        request: Request<Self::Api>,
        payment: BigUint,
    ) -> ManagedByteArray<Self::Api, 32> {
        require!(
            !oracle.is_zero() && !self.chainlink_token().is_empty(),
            ERR_UNCONFIGURED
        );
        let token = self.chainlink_token().get();

        let nonce = self.next_request_nonce();
        let request_id = self.derive_request_id(nonce);
        let mut request = request;
        request.nonce = nonce;

        // Both writes must land before the transfer below: a callback made
        // while it runs has to find its oracle, and a nested send has to get
        // a fresh nonce. A failed transfer reverts them.
        self.pending_requests(&request_id).set(&oracle);
        self.request_count().set(nonce + 1);
        self.chainlink_requested_event(&request_id);

        let sc_address = self.blockchain().get_sc_address();
        let balance = self.blockchain().get_esdt_balance(&sc_address, &token, 0);
        require!(balance >= payment, ERR_TRANSFER_REJECTED);

        let OracleDispatch {
            endpoint_name,
            args,
        } = dispatch::encode_request(&request);
        let _: () = ContractCall::<Self::Api, ()>::new(oracle, endpoint_name)
            .add_esdt_token_transfer(token, 0, payment)
            .with_arguments_raw(args)
            .execute_on_dest_context();

        request_id
    }

    fn cancel_chainlink_request(
        &self,
        request_id: ManagedByteArray<Self::Api, 32>,
        payment: BigUint,
        callback_method: ManagedBuffer,
        expiration: u64,
    ) {
        let pending = self.pending_requests(&request_id);
        require!(!pending.is_empty(), ERR_REQUEST_NOT_PENDING);

        let oracle = pending.get();
        pending.clear();
        self.chainlink_cancelled_event(&request_id);

        let _: () = self
            .chainlink_oracle_proxy(oracle)
            .cancel_oracle_request(request_id, payment, callback_method, expiration)
            .execute_on_dest_context();
    }

    /// Tracks a request that was sent from somewhere else but will be
    /// fulfilled through this contract.
    fn add_chainlink_external_request(
        &self,
        oracle: ManagedAddress,
        request_id: ManagedByteArray<Self::Api, 32>,
    ) {
        let pending = self.pending_requests(&request_id);
        require!(pending.is_empty(), ERR_ALREADY_PENDING);

        pending.set(&oracle);
    }

    fn validate_chainlink_callback(&self, request_id: &ManagedByteArray<Self::Api, 32>) {
        let pending = self.pending_requests(request_id);
        let caller = self.blockchain().get_caller();
        require!(
            !pending.is_empty() && pending.get() == caller,
            ERR_UNAUTHORIZED_FULFILLMENT
        );

        pending.clear();
        self.chainlink_fulfilled_event(request_id);
    }

    fn is_pending_request(&self, request_id: &ManagedByteArray<Self::Api, 32>) -> bool {
        !self.pending_requests(request_id).is_empty()
    }

    /// keccak256(sc_address ++ nonce), nonce as 8 big endian bytes.
    fn derive_request_id(&self, nonce: u64) -> ManagedByteArray<Self::Api, 32> {
        let mut seed = self
            .blockchain()
            .get_sc_address()
            .as_managed_buffer()
            .clone();
        seed.append_bytes(&nonce.to_be_bytes()[..]);

        self.crypto().keccak256(&seed)
    }

    fn next_request_nonce(&self) -> u64 {
        let count = self.request_count();
        if count.is_empty() {
            INITIAL_REQUEST_COUNT
        } else {
            count.get()
        }
    }

    #[proxy]
    fn chainlink_oracle_proxy(&self, to: ManagedAddress) -> oracle_proxy::Proxy<Self::Api>;

    #[event("chainlinkRequested")]
    fn chainlink_requested_event(&self, #[indexed] request_id: &ManagedByteArray<Self::Api, 32>);

    #[event("chainlinkFulfilled")]
    fn chainlink_fulfilled_event(&self, #[indexed] request_id: &ManagedByteArray<Self::Api, 32>);

    #[event("chainlinkCancelled")]
    fn chainlink_cancelled_event(&self, #[indexed] request_id: &ManagedByteArray<Self::Api, 32>);

    #[storage_mapper("pendingRequests")]
    fn pending_requests(
        &self,
        request_id: &ManagedByteArray<Self::Api, 32>,
    ) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("chainlinkRequestCount")]
    fn request_count(&self) -> SingleValueMapper<u64>;
}
