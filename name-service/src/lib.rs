#![no_std]

elrond_wasm::imports!();

/// Minimal name registry. A node points to the resolver responsible for it,
/// and a resolver holds the records of the nodes it serves. One deployment can
/// act as registry, resolver, or both.
#[elrond_wasm::contract]
pub trait NameService {
    #[init]
    fn init(&self) {}

    #[only_owner]
    #[endpoint(setResolver)]
    fn set_resolver(&self, node: ManagedByteArray<Self::Api, 32>, resolver: ManagedAddress) {
        self.resolvers(&node).set(&resolver);
    }

    #[only_owner]
    #[endpoint(setAddr)]
    fn set_addr(&self, node: ManagedByteArray<Self::Api, 32>, address: ManagedAddress) {
        self.addresses(&node).set(&address);
    }

    #[only_owner]
    #[endpoint(setTokenId)]
    fn set_token_id(&self, node: ManagedByteArray<Self::Api, 32>, token_id: TokenIdentifier) {
        self.token_ids(&node).set(&token_id);
    }

    #[view(resolver)]
    fn resolver(&self, node: ManagedByteArray<Self::Api, 32>) -> ManagedAddress {
        let mapper = self.resolvers(&node);
        if mapper.is_empty() {
            ManagedAddress::zero()
        } else {
            mapper.get()
        }
    }

    #[view(addr)]
    fn addr(&self, node: ManagedByteArray<Self::Api, 32>) -> ManagedAddress {
        let mapper = self.addresses(&node);
        if mapper.is_empty() {
            ManagedAddress::zero()
        } else {
            mapper.get()
        }
    }

    #[view(tokenId)]
    fn token_id(&self, node: ManagedByteArray<Self::Api, 32>) -> OptionalValue<TokenIdentifier> {
        let mapper = self.token_ids(&node);
        if mapper.is_empty() {
            OptionalValue::None
        } else {
            OptionalValue::Some(mapper.get())
        }
    }

    #[storage_mapper("resolvers")]
    fn resolvers(&self, node: &ManagedByteArray<Self::Api, 32>) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("addresses")]
    fn addresses(&self, node: &ManagedByteArray<Self::Api, 32>) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("token_ids")]
    fn token_ids(&self, node: &ManagedByteArray<Self::Api, 32>) -> SingleValueMapper<TokenIdentifier>;
}
