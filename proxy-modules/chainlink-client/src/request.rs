use elrond_wasm::{
    api::ManagedTypeApi,
    types::{ManagedAddress, ManagedBuffer, ManagedByteArray},
};

const TAG_STRING: u8 = 0x01;
const TAG_BYTES: u8 = 0x02;
const TAG_UINT: u8 = 0x03;
const TAG_INT: u8 = 0x04;
const TAG_STRING_ARRAY: u8 = 0x05;

/// A request under construction.
///
/// The payload is append-only and can only be changed while the request is
/// still owned by the caller. Sending consumes the request.
pub struct Request<M: ManagedTypeApi> {
    pub spec_id: ManagedByteArray<M, 32>,
    pub callback_address: ManagedAddress<M>,
    pub callback_method: ManagedBuffer<M>,
    pub nonce: u64,
    pub payload: ManagedBuffer<M>,
}

impl<M: ManagedTypeApi> Request<M> {
    pub fn new(
        spec_id: ManagedByteArray<M, 32>,
        callback_address: ManagedAddress<M>,
        callback_method: ManagedBuffer<M>,
    ) -> Self {
        Request {
            spec_id,
            callback_address,
            callback_method,
            nonce: 0,
            payload: ManagedBuffer::new(),
        }
    }

    /// Appends an already encoded chunk as is, without key or tag.
    pub fn append_buffer(&mut self, data: &ManagedBuffer<M>) {
        self.payload.append(data);
    }

    pub fn add(&mut self, key: &[u8], value: &[u8]) {
        self.push_key(key, TAG_STRING);
        self.push_item(value);
    }

    pub fn add_bytes(&mut self, key: &[u8], value: &ManagedBuffer<M>) {
        self.push_key(key, TAG_BYTES);
        self.payload
            .append_bytes(&(value.len() as u32).to_be_bytes()[..]);
        self.payload.append(value);
    }

    pub fn add_uint(&mut self, key: &[u8], value: u64) {
        self.push_key(key, TAG_UINT);
        self.payload.append_bytes(&value.to_be_bytes()[..]);
    }

    pub fn add_int(&mut self, key: &[u8], value: i64) {
        self.push_key(key, TAG_INT);
        self.payload.append_bytes(&value.to_be_bytes()[..]);
    }

    pub fn add_string_array(&mut self, key: &[u8], values: &[&[u8]]) {
        self.push_key(key, TAG_STRING_ARRAY);
        self.payload
            .append_bytes(&(values.len() as u32).to_be_bytes()[..]);
        for value in values {
            self.push_item(value);
        }
    }

    fn push_key(&mut self, key: &[u8], tag: u8) {
        self.push_item(key);
        self.payload.append_bytes(&[tag]);
    }

    fn push_item(&mut self, item: &[u8]) {
        self.payload
            .append_bytes(&(item.len() as u32).to_be_bytes()[..]);
        self.payload.append_bytes(item);
    }
}
