pub mod config;
pub mod generate;
pub mod template;

pub use config::{GeneratorConfig, Variant};
pub use generate::{Report, generate_file, write_source};
pub use template::{FanOut, LineVolume, UnitTemplate};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber for debug output.
///
/// Does nothing unless `RUST_LOG` is set (e.g. `RUST_LOG=cstress=debug`).
/// Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{EnvFilter, fmt, prelude::*};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}
