//! Obstruction search configuration, validation, and error types.

use std::error::Error;
use std::fmt;
use std::str::FromStr;

// ── CandidateScope ─────────────────────────────────────────────────

/// Which cells the obstruction search tries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CandidateScope {
    /// Every open cell except the guard's start.
    #[default]
    AllOpen,
    /// Only open cells on the guard's unobstructed path.
    ///
    /// An obstruction the guard never reaches cannot change its walk, so
    /// this yields the same count with fewer simulations. Falls back to
    /// `AllOpen` when the unobstructed guard never leaves.
    TracedPath,
}

impl CandidateScope {
    /// Name used on the command line and in config files.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AllOpen => "all-open",
            Self::TracedPath => "traced-path",
        }
    }
}

impl fmt::Display for CandidateScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CandidateScope {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all-open" => Ok(Self::AllOpen),
            "traced-path" => Ok(Self::TracedPath),
            other => Err(ConfigError::UnknownScope {
                value: other.to_string(),
            }),
        }
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`SearchConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `chunk_size` is zero.
    ZeroChunkSize,
    /// `worker_count` is `Some(0)`.
    ZeroWorkers,
    /// A scope name did not match any [`CandidateScope`].
    UnknownScope {
        /// The unrecognized name.
        value: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroChunkSize => write!(f, "chunk_size must be at least 1"),
            Self::ZeroWorkers => write!(f, "worker_count must be at least 1"),
            Self::UnknownScope { value } => write!(
                f,
                "unknown candidate scope '{value}' (expected 'all-open' or 'traced-path')"
            ),
        }
    }
}

impl Error for ConfigError {}

// ── SearchConfig ───────────────────────────────────────────────────

/// Configuration for [`ObstructionSearch`](crate::search::ObstructionSearch).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// Number of worker threads. `None` = auto-detect
    /// (`available_parallelism`, clamped to `[1, 64]`). `Some(1)` runs
    /// on the calling thread.
    pub worker_count: Option<usize>,
    /// Candidates handed to a worker per task. Default: 64.
    pub chunk_size: usize,
    /// Which cells to try. Default: [`CandidateScope::AllOpen`].
    pub scope: CandidateScope,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            worker_count: None,
            chunk_size: 64,
            scope: CandidateScope::AllOpen,
        }
    }
}

impl SearchConfig {
    /// Upper bound on worker threads.
    pub const MAX_WORKERS: usize = 64;

    /// A configuration that runs every candidate on the calling thread.
    pub fn sequential() -> Self {
        Self {
            worker_count: Some(1),
            ..Self::default()
        }
    }

    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.chunk_size == 0 {
            return Err(ConfigError::ZeroChunkSize);
        }
        if self.worker_count == Some(0) {
            return Err(ConfigError::ZeroWorkers);
        }
        Ok(())
    }

    /// Resolve the actual worker count, applying auto-detection if `None`.
    ///
    /// Explicit values are clamped to `[1, MAX_WORKERS]`.
    pub fn resolved_worker_count(&self) -> usize {
        match self.worker_count {
            Some(n) => n.clamp(1, Self::MAX_WORKERS),
            None => std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(4)
                .clamp(1, Self::MAX_WORKERS),
        }
    }
}
