fn main() {
    multiversx_sc_meta_lib::cli_main::<buyout_registry::AbiProvider>();
}
