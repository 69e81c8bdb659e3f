use chainlink_client::{
    endpoint_resolver::{EndpointResolverModule, ORACLE_SUBNAME, TOKEN_SUBNAME},
    errors::{ERR_NAME_NOT_RESOLVED, ERR_NAME_SERVICE_UNSET},
};
use client::Client;
use elrond_wasm::types::{Address, ManagedByteArray};
use elrond_wasm_debug::{
    managed_address, managed_token_id, rust_biguint,
    testing_framework::{BlockchainStateWrapper, ContractObjWrapper},
    DebugApi,
};
use name_service::NameService;

const TOKEN_ID: &[u8] = b"LINK-123456";
// namehash("eth")
const ROOT_NODE_HEX: &str = "93cdeb708b7545dc668eb9280176169d1c33cfd8ed6f04690a0bcc88a93fc4ae";

struct NameServiceSetup<ClientObjBuilder, NameServiceObjBuilder>
where
    ClientObjBuilder: 'static + Copy + Fn() -> client::ContractObj<DebugApi>,
    NameServiceObjBuilder: 'static + Copy + Fn() -> name_service::ContractObj<DebugApi>,
{
    b_mock: BlockchainStateWrapper,
    owner: Address,
    oracle: Address,
    root_node: [u8; 32],
    token_subnode: [u8; 32],
    oracle_subnode: [u8; 32],
    client_wrapper: ContractObjWrapper<client::ContractObj<DebugApi>, ClientObjBuilder>,
    registry_wrapper: ContractObjWrapper<name_service::ContractObj<DebugApi>, NameServiceObjBuilder>,
    oracle_resolver_wrapper:
        ContractObjWrapper<name_service::ContractObj<DebugApi>, NameServiceObjBuilder>,
}

fn root_node() -> [u8; 32] {
    let mut node = [0u8; 32];
    hex::decode_to_slice(ROOT_NODE_HEX, &mut node).unwrap();
    node
}

fn setup_name_service<ClientObjBuilder, NameServiceObjBuilder>(
    client_builder: ClientObjBuilder,
    name_service_builder: NameServiceObjBuilder,
) -> NameServiceSetup<ClientObjBuilder, NameServiceObjBuilder>
where
    ClientObjBuilder: 'static + Copy + Fn() -> client::ContractObj<DebugApi>,
    NameServiceObjBuilder: 'static + Copy + Fn() -> name_service::ContractObj<DebugApi>,
{
    let rust_zero = rust_biguint!(0);
    let mut b_mock = BlockchainStateWrapper::new();
    let owner = b_mock.create_user_account(&rust_zero);
    let oracle = b_mock.create_user_account(&rust_zero);

    let client_wrapper =
        b_mock.create_sc_account(&rust_zero, Some(&owner), client_builder, "client.wasm");
    let registry_wrapper = b_mock.create_sc_account(
        &rust_zero,
        Some(&owner),
        name_service_builder,
        "registry.wasm",
    );
    let token_resolver_wrapper = b_mock.create_sc_account(
        &rust_zero,
        Some(&owner),
        name_service_builder,
        "token-resolver.wasm",
    );
    let oracle_resolver_wrapper = b_mock.create_sc_account(
        &rust_zero,
        Some(&owner),
        name_service_builder,
        "oracle-resolver.wasm",
    );

    let root_node = root_node();
    let mut token_subnode = [0u8; 32];
    let mut oracle_subnode = [0u8; 32];
    b_mock
        .execute_tx(&owner, &client_wrapper, &rust_zero, |sc| {
            sc.init();

            let root = ManagedByteArray::new_from_bytes(&root_node);
            token_subnode = sc.name_service_subnode(&root, TOKEN_SUBNAME).to_byte_array();
            oracle_subnode = sc.name_service_subnode(&root, ORACLE_SUBNAME).to_byte_array();
        })
        .assert_ok();

    let token_resolver_address = token_resolver_wrapper.address_ref().clone();
    let oracle_resolver_address = oracle_resolver_wrapper.address_ref().clone();
    b_mock
        .execute_tx(&owner, &registry_wrapper, &rust_zero, |sc| {
            sc.init();
            sc.set_resolver(
                ManagedByteArray::new_from_bytes(&token_subnode),
                managed_address!(&token_resolver_address),
            );
            sc.set_resolver(
                ManagedByteArray::new_from_bytes(&oracle_subnode),
                managed_address!(&oracle_resolver_address),
            );
        })
        .assert_ok();

    b_mock
        .execute_tx(&owner, &token_resolver_wrapper, &rust_zero, |sc| {
            sc.init();
            sc.set_token_id(
                ManagedByteArray::new_from_bytes(&token_subnode),
                managed_token_id!(TOKEN_ID),
            );
        })
        .assert_ok();

    b_mock
        .execute_tx(&owner, &oracle_resolver_wrapper, &rust_zero, |sc| {
            sc.init();
            sc.set_addr(
                ManagedByteArray::new_from_bytes(&oracle_subnode),
                managed_address!(&oracle),
            );
        })
        .assert_ok();

    NameServiceSetup {
        b_mock,
        owner,
        oracle,
        root_node,
        token_subnode,
        oracle_subnode,
        client_wrapper,
        registry_wrapper,
        oracle_resolver_wrapper,
    }
}

#[test]
fn subnames_are_distinct_test() {
    let setup = setup_name_service(client::contract_obj, name_service::contract_obj);

    assert_ne!(setup.token_subnode, setup.oracle_subnode);
    assert_ne!(setup.token_subnode, setup.root_node);
    assert_ne!(setup.oracle_subnode, setup.root_node);
}

#[test]
fn use_name_service_test() {
    let mut setup = setup_name_service(client::contract_obj, name_service::contract_obj);
    let rust_zero = rust_biguint!(0);
    let registry_address = setup.registry_wrapper.address_ref().clone();
    let root_node = setup.root_node;
    let oracle = setup.oracle.clone();

    setup
        .b_mock
        .execute_tx(&setup.owner, &setup.client_wrapper, &rust_zero, |sc| {
            sc.use_name_service(
                managed_address!(&registry_address),
                ManagedByteArray::new_from_bytes(&root_node),
            );
        })
        .assert_ok();

    setup
        .b_mock
        .execute_query(&setup.client_wrapper, |sc| {
            assert_eq!(sc.chainlink_token().get(), managed_token_id!(TOKEN_ID));
            assert_eq!(sc.chainlink_oracle().get(), managed_address!(&oracle));
            assert_eq!(
                sc.chainlink_name_service().get(),
                managed_address!(&registry_address)
            );
            assert_eq!(
                sc.chainlink_name_service_node().get().to_byte_array(),
                root_node
            );
        })
        .assert_ok();
}

#[test]
fn update_oracle_with_name_service_test() {
    let mut setup = setup_name_service(client::contract_obj, name_service::contract_obj);
    let rust_zero = rust_biguint!(0);
    let registry_address = setup.registry_wrapper.address_ref().clone();
    let root_node = setup.root_node;
    let oracle_subnode = setup.oracle_subnode;
    let new_oracle = setup.b_mock.create_user_account(&rust_zero);

    setup
        .b_mock
        .execute_tx(&setup.owner, &setup.client_wrapper, &rust_zero, |sc| {
            sc.use_name_service(
                managed_address!(&registry_address),
                ManagedByteArray::new_from_bytes(&root_node),
            );
        })
        .assert_ok();

    setup
        .b_mock
        .execute_tx(&setup.owner, &setup.oracle_resolver_wrapper, &rust_zero, |sc| {
            sc.set_addr(
                ManagedByteArray::new_from_bytes(&oracle_subnode),
                managed_address!(&new_oracle),
            );
        })
        .assert_ok();

    setup
        .b_mock
        .execute_tx(&setup.owner, &setup.client_wrapper, &rust_zero, |sc| {
            sc.update_oracle_with_name_service();
        })
        .assert_ok();

    setup
        .b_mock
        .execute_query(&setup.client_wrapper, |sc| {
            assert_eq!(sc.chainlink_oracle().get(), managed_address!(&new_oracle));
            assert_eq!(sc.chainlink_token().get(), managed_token_id!(TOKEN_ID));
        })
        .assert_ok();
}

#[test]
fn update_without_name_service_test() {
    let mut setup = setup_name_service(client::contract_obj, name_service::contract_obj);

    setup
        .b_mock
        .execute_tx(&setup.owner, &setup.client_wrapper, &rust_biguint!(0), |sc| {
            sc.update_oracle_with_name_service();
        })
        .assert_user_error(ERR_NAME_SERVICE_UNSET);
}

#[test]
fn unknown_node_test() {
    let mut setup = setup_name_service(client::contract_obj, name_service::contract_obj);
    let registry_address = setup.registry_wrapper.address_ref().clone();

    // nothing is registered under this node
    setup
        .b_mock
        .execute_tx(&setup.owner, &setup.client_wrapper, &rust_biguint!(0), |sc| {
            sc.use_name_service(
                managed_address!(&registry_address),
                ManagedByteArray::new_from_bytes(&[0x13; 32]),
            );
        })
        .assert_user_error(ERR_NAME_NOT_RESOLVED);

    setup
        .b_mock
        .execute_query(&setup.client_wrapper, |sc| {
            assert!(sc.chainlink_name_service().is_empty());
            assert!(sc.chainlink_token().is_empty());
            assert!(sc.chainlink_oracle().is_empty());
        })
        .assert_ok();
}

#[test]
fn manual_setters_test() {
    let mut setup = setup_name_service(client::contract_obj, name_service::contract_obj);
    let rust_zero = rust_biguint!(0);
    let oracle = setup.oracle.clone();
    let stranger = setup.b_mock.create_user_account(&rust_zero);

    setup
        .b_mock
        .execute_tx(&setup.owner, &setup.client_wrapper, &rust_zero, |sc| {
            sc.set_chainlink_token_endpoint(managed_token_id!(TOKEN_ID));
            sc.set_chainlink_oracle_endpoint(managed_address!(&oracle));
        })
        .assert_ok();

    setup
        .b_mock
        .execute_query(&setup.client_wrapper, |sc| {
            assert_eq!(sc.chainlink_token().get(), managed_token_id!(TOKEN_ID));
            assert_eq!(sc.chainlink_oracle().get(), managed_address!(&oracle));
        })
        .assert_ok();

    setup
        .b_mock
        .execute_tx(&stranger, &setup.client_wrapper, &rust_zero, |sc| {
            sc.set_chainlink_oracle_endpoint(managed_address!(&stranger));
        })
        .assert_user_error("Endpoint can only be called by owner");
}

#[test]
fn missing_token_record_test() {
    let mut setup = setup_name_service(client::contract_obj, name_service::contract_obj);
    let rust_zero = rust_biguint!(0);
    let registry_address = setup.registry_wrapper.address_ref().clone();
    let oracle_resolver_address = setup.oracle_resolver_wrapper.address_ref().clone();
    let root_node = setup.root_node;
    let token_subnode = setup.token_subnode;

    // the oracle resolver has a resolver entry for the token but no token record
    setup
        .b_mock
        .execute_tx(&setup.owner, &setup.registry_wrapper, &rust_zero, |sc| {
            sc.set_resolver(
                ManagedByteArray::new_from_bytes(&token_subnode),
                managed_address!(&oracle_resolver_address),
            );
        })
        .assert_ok();

    setup
        .b_mock
        .execute_tx(&setup.owner, &setup.client_wrapper, &rust_zero, |sc| {
            sc.use_name_service(
                managed_address!(&registry_address),
                ManagedByteArray::new_from_bytes(&root_node),
            );
        })
        .assert_user_error(ERR_NAME_NOT_RESOLVED);

    setup
        .b_mock
        .execute_query(&setup.client_wrapper, |sc| {
            assert!(sc.chainlink_name_service().is_empty());
            assert!(sc.chainlink_token().is_empty());
        })
        .assert_ok();
}

#[test]
fn missing_oracle_record_test() {
    let mut setup = setup_name_service(client::contract_obj, name_service::contract_obj);
    let rust_zero = rust_biguint!(0);
    let registry_address = setup.registry_wrapper.address_ref().clone();
    let root_node = setup.root_node;
    let oracle_subnode = setup.oracle_subnode;

    // the registry serves the oracle subname itself, without an addr record
    setup
        .b_mock
        .execute_tx(&setup.owner, &setup.registry_wrapper, &rust_zero, |sc| {
            sc.set_resolver(
                ManagedByteArray::new_from_bytes(&oracle_subnode),
                managed_address!(&registry_address),
            );
        })
        .assert_ok();

    setup
        .b_mock
        .execute_tx(&setup.owner, &setup.client_wrapper, &rust_zero, |sc| {
            sc.use_name_service(
                managed_address!(&registry_address),
                ManagedByteArray::new_from_bytes(&root_node),
            );
        })
        .assert_user_error(ERR_NAME_NOT_RESOLVED);

    setup
        .b_mock
        .execute_query(&setup.client_wrapper, |sc| {
            assert!(sc.chainlink_token().is_empty());
            assert!(sc.chainlink_oracle().is_empty());
        })
        .assert_ok();
}
