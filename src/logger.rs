use std::sync::Once;

use env_logger::Builder;
use log::LevelFilter;

static INIT: Once = Once::new();

/// Sets up env_logger once for the whole test binary. RUST_LOG still wins.
pub(crate) fn initialize_logger() {
    INIT.call_once_force(|_| {
        let mut builder = Builder::new();

        builder
            .filter_level(LevelFilter::Info)
            .filter_module("hash_traverse", LevelFilter::Debug)
            .is_test(true)
            .parse_default_env();

        // another harness may have beaten us to it
        let _ = builder.try_init();
    });
}
