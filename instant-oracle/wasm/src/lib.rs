////////////////////////////////////////////////////
////////////////// AUTO-GENERATED //////////////////
////////////////////////////////////////////////////

#![no_std]

elrond_wasm_node::wasm_endpoints! {
    instant_oracle
    (
        oracleRequest
    )
}

elrond_wasm_node::wasm_empty_callback! {}
