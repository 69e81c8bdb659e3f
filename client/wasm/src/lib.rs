////////////////////////////////////////////////////
////////////////// AUTO-GENERATED //////////////////
////////////////////////////////////////////////////

#![no_std]

elrond_wasm_node::wasm_endpoints! {
    client
    (
        addExternalRequest
        cancelRequest
        fulfill
        getAnswer
        getChainlinkOracle
        getChainlinkToken
        getLastFulfillment
        requestData
        requestDataFrom
        setChainlinkOracle
        setChainlinkToken
        updateOracleWithNameService
        useNameService
    )
}

elrond_wasm_node::wasm_empty_callback! {}
