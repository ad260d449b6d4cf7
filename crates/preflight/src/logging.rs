//! Logging configuration for preflight.
//!
//! The library only emits `tracing` events: a `debug` line per briefing and
//! per normalized record, a `trace` line per rule stage, and warnings for
//! provider data that had to be discarded. Installing a subscriber is left
//! to the binary, which writes to stderr so briefings on stdout stay clean
//! for piping.

use tracing_subscriber::EnvFilter;

/// Crates whose events are shown by default.
pub const LOG_TARGETS: [&str; 2] = ["preflight", "wxbrief"];

/// How much diagnostic output `wxbrief` produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Verbosity {
    /// Errors only.
    Quiet,
    /// Warnings about discarded provider data, plus errors.
    #[default]
    Normal,
    /// One line per normalized record and per briefing.
    Verbose,
    /// Every rule stage with its running hazard count and latches.
    Trace,
}

impl Verbosity {
    /// Map the `-q` and repeated `-v` flags to a verbosity. `-q` wins.
    #[must_use]
    pub fn from_flags(verbose: u8, quiet: bool) -> Self {
        match (quiet, verbose) {
            (true, _) => Self::Quiet,
            (false, 0) => Self::Normal,
            (false, 1) => Self::Verbose,
            (false, _) => Self::Trace,
        }
    }

    /// Level name as used in filter directives.
    #[must_use]
    pub fn level_name(self) -> &'static str {
        match self {
            Self::Quiet => "error",
            Self::Normal => "warn",
            Self::Verbose => "debug",
            Self::Trace => "trace",
        }
    }

    /// Filter directives covering every crate in [`LOG_TARGETS`].
    #[must_use]
    pub fn directives(self) -> String {
        let level = self.level_name();
        LOG_TARGETS
            .iter()
            .map(|target| format!("{target}={level}"))
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Pick the filter directives: a valid, non-empty `RUST_LOG` wins over the
/// verbosity flags.
fn filter_directives(verbosity: Verbosity, rust_log: Option<&str>) -> String {
    match rust_log.map(str::trim) {
        Some(directives) if !directives.is_empty() && EnvFilter::try_new(directives).is_ok() => {
            directives.to_string()
        }
        _ => verbosity.directives(),
    }
}

/// Install the global subscriber.
///
/// Call once at startup. A second call is a no-op.
///
/// # Examples
///
/// ```no_run
/// use preflight::{init_logging, logging::Verbosity};
///
/// // Show each briefing's outcome
/// init_logging(Verbosity::Verbose);
/// ```
pub fn init_logging(verbosity: Verbosity) {
    let rust_log = std::env::var("RUST_LOG").ok();
    let filter = EnvFilter::new(filter_directives(verbosity, rust_log.as_deref()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbosity >= Verbosity::Verbose)
        .try_init();
}
