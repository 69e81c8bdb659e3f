////////////////////////////////////////////////////
////////////////// AUTO-GENERATED //////////////////
////////////////////////////////////////////////////

#![no_std]

elrond_wasm_node::wasm_endpoints! {
    oracle
    (
        addAuthorization
        authorizedNodes
        cancelOracleRequest
        fulfillOracleRequest
        oracleRequest
        removeAuthorization
        withdraw
        withdrawable
    )
}

elrond_wasm_node::wasm_empty_callback! {}
