fn main() {
    multiversx_sc_meta_lib::cli_main::<vesting_ledger::AbiProvider>();
}
