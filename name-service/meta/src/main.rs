fn main() {
    elrond_wasm_debug::meta::perform::<name_service::AbiProvider>();
}
