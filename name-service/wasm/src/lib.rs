////////////////////////////////////////////////////
////////////////// AUTO-GENERATED //////////////////
////////////////////////////////////////////////////

#![no_std]

elrond_wasm_node::wasm_endpoints! {
    name_service
    (
        addr
        resolver
        setAddr
        setResolver
        setTokenId
        tokenId
    )
}

elrond_wasm_node::wasm_empty_callback! {}
