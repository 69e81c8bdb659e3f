#![no_std]

elrond_wasm::imports!();

pub mod client_data;
use client_data::ClientData;

use chainlink_client::endpoint_resolver;

pub const FULFILL_ENDPOINT: &[u8] = b"fulfill";

#[elrond_wasm::contract]
pub trait Client:
    chainlink_client::ChainlinkClientModule + endpoint_resolver::EndpointResolverModule
{
    #[init]
    fn init(&self) {}

    #[only_owner]
    #[endpoint(setChainlinkToken)]
    fn set_chainlink_token_endpoint(&self, token: TokenIdentifier) {
        self.set_chainlink_token(token);
    }

    #[only_owner]
    #[endpoint(setChainlinkOracle)]
    fn set_chainlink_oracle_endpoint(&self, oracle: ManagedAddress) {
        self.set_chainlink_oracle(oracle);
    }

    #[only_owner]
    #[endpoint(useNameService)]
    fn use_name_service(&self, name_service: ManagedAddress, node: ManagedByteArray<Self::Api, 32>) {
        self.use_chainlink_with_name_service(name_service, node);
    }

    #[only_owner]
    #[endpoint(updateOracleWithNameService)]
    fn update_oracle_with_name_service(&self) {
        self.update_chainlink_oracle_with_name_service();
    }

    #[only_owner]
    #[endpoint(requestData)]
    fn request_data(
        &self,
        spec_id: ManagedByteArray<Self::Api, 32>,
        payment: BigUint,
        url: ManagedBuffer,
        path: ManagedBuffer,
    ) -> ManagedByteArray<Self::Api, 32> {
        let request = self.build_data_request(spec_id, url, path);
        self.send_chainlink_request(request, payment)
    }

    #[only_owner]
    #[endpoint(requestDataFrom)]
    fn request_data_from(
        &self,
        oracle: ManagedAddress,
        spec_id: ManagedByteArray<Self::Api, 32>,
        payment: BigUint,
        url: ManagedBuffer,
        path: ManagedBuffer,
    ) -> ManagedByteArray<Self::Api, 32> {
        let request = self.build_data_request(spec_id, url, path);
        self.send_chainlink_request_to(oracle, request, payment)
    }

    #[only_owner]
    #[endpoint(cancelRequest)]
    fn cancel_request(
        &self,
        request_id: ManagedByteArray<Self::Api, 32>,
        payment: BigUint,
        expiration: u64,
    ) {
        self.cancel_chainlink_request(
            request_id,
            payment,
            ManagedBuffer::new_from_bytes(FULFILL_ENDPOINT),
            expiration,
        );
    }

    #[only_owner]
    #[endpoint(addExternalRequest)]
    fn add_external_request(&self, oracle: ManagedAddress, request_id: ManagedByteArray<Self::Api, 32>) {
        self.add_chainlink_external_request(oracle, request_id);
    }

    #[endpoint]
    fn fulfill(&self, request_id: ManagedByteArray<Self::Api, 32>, answer: ManagedBuffer) {
        self.validate_chainlink_callback(&request_id);

        self.answers(request_id.clone()).set(&answer);
        self.last_fulfillment()
            .set(&ClientData { request_id, answer });
    }

    fn build_data_request(
        &self,
        spec_id: ManagedByteArray<Self::Api, 32>,
        url: ManagedBuffer,
        path: ManagedBuffer,
    ) -> chainlink_client::Request<Self::Api> {
        let mut request = self.build_chainlink_request(
            spec_id,
            self.blockchain().get_sc_address(),
            ManagedBuffer::new_from_bytes(FULFILL_ENDPOINT),
        );
        request.add_bytes(b"get", &url);
        request.add_bytes(b"path", &path);
        request
    }

    #[view(getAnswer)]
    #[storage_mapper("answers")]
    fn answers(&self, request_id: ManagedByteArray<Self::Api, 32>) -> SingleValueMapper<ManagedBuffer>;

    #[view(getLastFulfillment)]
    #[storage_mapper("lastFulfillment")]
    fn last_fulfillment(&self) -> SingleValueMapper<ClientData<Self::Api>>;
}
