elrond_wasm::imports!();

use crate::errors::{ERR_NAME_NOT_RESOLVED, ERR_NAME_SERVICE_UNSET};

pub const TOKEN_SUBNAME: &[u8] = b"link";
pub const ORACLE_SUBNAME: &[u8] = b"oracle";

pub mod name_service_proxy {
    elrond_wasm::imports!();

    #[elrond_wasm::proxy]
    pub trait NameService {
        #[view(resolver)]
        fn resolver(&self, node: ManagedByteArray<Self::Api, 32>) -> ManagedAddress;

        #[view(addr)]
        fn addr(&self, node: ManagedByteArray<Self::Api, 32>) -> ManagedAddress;

        #[view(tokenId)]
        fn token_id(&self, node: ManagedByteArray<Self::Api, 32>) -> OptionalValue<TokenIdentifier>;
    }
}

/// Where the payment token and the oracle come from: either set directly, or
/// looked up under a name-service node.
#[elrond_wasm::module]
pub trait EndpointResolverModule {
    fn use_chainlink_with_name_service(
        &self,
        name_service: ManagedAddress,
        node: ManagedByteArray<Self::Api, 32>,
    ) {
        self.chainlink_name_service().set(&name_service);
        self.chainlink_name_service_node().set(&node);

        let token_subnode = self.name_service_subnode(&node, TOKEN_SUBNAME);
        let token_resolver = self.resolver_of(&name_service, &token_subnode);
        let token_id: OptionalValue<TokenIdentifier> = self
            .name_service_proxy(token_resolver)
            .token_id(token_subnode)
            .execute_on_dest_context();
        match token_id.into_option() {
            Some(token_id) => self.set_chainlink_token(token_id),
            None => sc_panic!(ERR_NAME_NOT_RESOLVED),
        }

        self.update_chainlink_oracle_with_name_service();
    }

    /// Re-resolves the oracle only. The token and the root node are kept.
    fn update_chainlink_oracle_with_name_service(&self) {
        require!(
            !self.chainlink_name_service().is_empty(),
            ERR_NAME_SERVICE_UNSET
        );
        let name_service = self.chainlink_name_service().get();
        let node = self.chainlink_name_service_node().get();

        let oracle_subnode = self.name_service_subnode(&node, ORACLE_SUBNAME);
        let oracle_resolver = self.resolver_of(&name_service, &oracle_subnode);
        let oracle: ManagedAddress = self
            .name_service_proxy(oracle_resolver)
            .addr(oracle_subnode)
            .execute_on_dest_context();
        require!(!oracle.is_zero(), ERR_NAME_NOT_RESOLVED);

        self.set_chainlink_oracle(oracle);
    }

    // Every subname may live on its own resolver.
    fn resolver_of(
        &self,
        name_service: &ManagedAddress,
        subnode: &ManagedByteArray<Self::Api, 32>,
    ) -> ManagedAddress {
        let resolver: ManagedAddress = self
            .name_service_proxy(name_service.clone())
            .resolver(subnode.clone())
            .execute_on_dest_context();
        require!(!resolver.is_zero(), ERR_NAME_NOT_RESOLVED);

        resolver
    }

    /// keccak256(node ++ keccak256(label))
    fn name_service_subnode(
        &self,
        node: &ManagedByteArray<Self::Api, 32>,
        label: &[u8],
    ) -> ManagedByteArray<Self::Api, 32> {
        let label_hash = self.crypto().keccak256(&ManagedBuffer::new_from_bytes(label));

        let mut preimage = ManagedBuffer::new();
        preimage.append(node.as_managed_buffer());
        preimage.append(label_hash.as_managed_buffer());

        self.crypto().keccak256(&preimage)
    }

    fn set_chainlink_token(&self, token: TokenIdentifier) {
        self.chainlink_token().set(&token);
    }

    fn set_chainlink_oracle(&self, oracle: ManagedAddress) {
        self.chainlink_oracle().set(&oracle);
    }

    #[proxy]
    fn name_service_proxy(&self, to: ManagedAddress) -> name_service_proxy::Proxy<Self::Api>;

    #[view(getChainlinkToken)]
    #[storage_mapper("chainlinkToken")]
    fn chainlink_token(&self) -> SingleValueMapper<TokenIdentifier>;

    #[view(getChainlinkOracle)]
    #[storage_mapper("chainlinkOracle")]
    fn chainlink_oracle(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("chainlinkNameService")]
    fn chainlink_name_service(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("chainlinkNameServiceNode")]
    fn chainlink_name_service_node(&self) -> SingleValueMapper<ManagedByteArray<Self::Api, 32>>;
}
