//! Diagnostics for the `insphist` binary.
//!
//! Command results are written to stdout. Everything emitted through
//! `tracing` goes to stderr, filtered to this crate at the level picked by the
//! `-q`/`-v` flags unless `RUST_LOG` says otherwise.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// How much diagnostic output to emit, ordered from least to most.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Verbosity {
    /// Errors only.
    Quiet,
    /// Warnings and errors.
    #[default]
    Normal,
    /// Dataset loading and query steps.
    Verbose,
    /// Per-record detail.
    Trace,
}

impl Verbosity {
    /// Resolve the `-q` and repeated `-v` flags. `quiet` wins over `verbose`.
    #[must_use]
    pub fn from_flags(quiet: bool, verbose: u8) -> Self {
        match (quiet, verbose) {
            (true, _) => Self::Quiet,
            (false, 0) => Self::Normal,
            (false, 1) => Self::Verbose,
            (false, _) => Self::Trace,
        }
    }

    /// The most detailed level let through.
    #[must_use]
    pub fn level(self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::WARN,
            Self::Verbose => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }

    /// Filter directive scoping `level` to this crate.
    #[must_use]
    pub fn directive(self) -> String {
        format!(
            "{}={}",
            env!("CARGO_CRATE_NAME"),
            self.level().as_str().to_ascii_lowercase()
        )
    }
}

/// Install the global subscriber.
///
/// Does nothing if a subscriber is already installed, so tests may call it
/// repeatedly.
///
/// ```no_run
/// use inspection_history::{init_logging, logging::Verbosity};
///
/// init_logging(Verbosity::from_flags(false, 1));
/// ```
pub fn init_logging(verbosity: Verbosity) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(verbosity.directive()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .without_time()
        .with_target(verbosity >= Verbosity::Verbose)
        .try_init();
}
