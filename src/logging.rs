//! Diagnostic tracing for both binaries.
//!
//! Demonstration output goes to stdout; tracing goes to stderr so the two
//! never mix.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset: dependencies stay at `warn`, this
/// crate reports at `info`. Nothing in the crate logs above `debug` on a
/// normal run, so stderr stays empty.
pub const DEFAULT_DIRECTIVES: &str = "warn,lazy_unpacking=info";

fn default_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES))
}

/// Installs the global subscriber.
///
/// ```bash
/// RUST_LOG=lazy_unpacking=trace cargo run --bin random_numbers
/// ```
pub fn init() {
    tracing_subscriber::registry()
        .with(default_filter())
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .without_time()
                .with_target(false)
                .compact(),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives_parse() {
        let filter = EnvFilter::try_new(DEFAULT_DIRECTIVES).unwrap();
        let rendered = filter.to_string();
        assert!(rendered.contains("lazy_unpacking=info"));
        assert!(rendered.contains("warn"));
    }
}
