#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Test setup for the htmlgen crates.
//!
//! Call [`setup`] at the start of a test, or annotate it with
//! `#[htmlgen_testhelpers::test]`, to see the library's `tracing` output.
//! Filter it with `HTMLGEN_LOG`, using `tracing_subscriber` target syntax
//! such as `HTMLGEN_LOG=htmlgen=debug`.

pub use htmlgen_testhelpers_macros::test;

use std::sync::LazyLock;
use std::time::Instant;
use tracing_subscriber::filter::Targets;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "HTMLGEN_LOG";

static START_TIME: LazyLock<Instant> = LazyLock::new(Instant::now);

/// Prints the time since the first [`setup`] call instead of wall-clock time.
struct Uptime;

impl FormatTime for Uptime {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        let elapsed = START_TIME.elapsed();
        write!(w, "{:4}.{:03}s", elapsed.as_secs(), elapsed.subsec_millis())
    }
}

/// Parses [`LOG_ENV`], falling back to everything at `TRACE` when it is
/// unset or malformed.
fn log_filter() -> Targets {
    std::env::var(LOG_ENV)
        .ok()
        .and_then(|s| s.parse::<Targets>().ok())
        .unwrap_or_else(|| Targets::new().with_default(tracing::Level::TRACE))
}

/// The global subscriber, installed on first access.
///
/// Tests in one process share it, so only the first [`setup`] call does any
/// work. If another subscriber is already installed, that one stays.
static SUBSCRIBER_INIT: LazyLock<()> = LazyLock::new(|| {
    // start the uptime clock
    let _ = *START_TIME;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_test_writer()
                .with_timer(Uptime)
                .with_target(false)
                .with_level(true)
                .with_file(true)
                .with_line_number(true)
                .compact(),
        )
        .with(log_filter())
        .try_init()
        .ok();
});

/// Installs the test tracing subscriber.
///
/// Safe to call from every test: the subscriber is set up once per process
/// and later calls return immediately. Output goes through the test writer,
/// so `cargo test` captures it for passing tests and shows it for failing
/// ones. Use `--nocapture` to see it always.
///
/// ```
/// htmlgen_testhelpers::setup();
/// htmlgen_testhelpers::setup();
/// ```
///
/// Tests usually get this through `#[htmlgen_testhelpers::test]` rather than
/// calling it by hand.
pub fn setup() {
    #[allow(clippy::let_unit_value)]
    let _ = *SUBSCRIBER_INIT;
}
