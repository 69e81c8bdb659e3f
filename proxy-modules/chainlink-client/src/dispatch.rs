use elrond_wasm::{
    api::ManagedTypeApi,
    types::{BigUint, ManagedAddress, ManagedArgBuffer, ManagedBuffer},
};

use crate::request::Request;

pub const ORACLE_REQUEST_ENDPOINT: &[u8] = b"oracleRequest";
pub const ORACLE_ARGS_VERSION: u64 = 1;

/// Endpoint and arguments executed on the oracle along with the fee transfer.
pub struct OracleDispatch<M: ManagedTypeApi> {
    pub endpoint_name: ManagedBuffer<M>,
    pub args: ManagedArgBuffer<M>,
}

/// Lays out the `oracleRequest` arguments.
///
/// The first two arguments are placeholders for the sender and the amount.
/// The oracle must take both from the call context instead, which the protocol
/// fills with the real caller and ESDT payment. Argument order is part of the
/// oracle interface.
pub fn encode_request<M: ManagedTypeApi>(request: &Request<M>) -> OracleDispatch<M> {
    let mut args = ManagedArgBuffer::new();
    args.push_arg(&ManagedAddress::<M>::zero());
    args.push_arg(&BigUint::<M>::zero());
    args.push_arg(&request.spec_id);
    args.push_arg(&request.callback_address);
    args.push_arg(&request.callback_method);
    args.push_arg(request.nonce);
    args.push_arg(ORACLE_ARGS_VERSION);
    args.push_arg(&request.payload);

    OracleDispatch {
        endpoint_name: ManagedBuffer::new_from_bytes(ORACLE_REQUEST_ENDPOINT),
        args,
    }
}
