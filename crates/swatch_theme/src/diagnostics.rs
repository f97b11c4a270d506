//! Structured record of token lookups that could not be resolved
//!
//! Every miss is logged through `tracing` and also appended here, so callers
//! (and tests) can count failed resolutions instead of scraping log output.
//!
//! The log keeps the most recent [`MAX_DIAGNOSTICS`] misses. Per-path counts are
//! kept separately, so [`Diagnostics::count_for`] stays exact after older
//! entries have been dropped.

use std::collections::VecDeque;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use indexmap::IndexMap;

/// Maximum number of misses retained in a log
pub const MAX_DIAGNOSTICS: usize = 256;

/// Why a path did not resolve to a value
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MissReason {
    /// A path segment does not exist on the node it was looked up in
    MissingSegment { segment: String },
    /// The path ends on a group, which has no string form
    NotALeaf,
    /// A palette lookup landed on a single value instead of a group of shades
    NotAGroup,
}

impl fmt::Display for MissReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissReason::MissingSegment { segment } => write!(f, "no entry named `{segment}`"),
            MissReason::NotALeaf => f.write_str("path ends on a token group"),
            MissReason::NotAGroup => f.write_str("expected a group of shades"),
        }
    }
}

/// One unresolved token lookup
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenDiagnostic {
    pub path: String,
    pub reason: MissReason,
}

impl fmt::Display for TokenDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "token not found: {} ({})", self.path, self.reason)
    }
}

#[derive(Debug, Default)]
struct Log {
    /// Most recent misses, oldest first
    recent: VecDeque<TokenDiagnostic>,
    /// Misses per path since the last drain
    counts: IndexMap<String, usize>,
    total: usize,
}

/// Shared, bounded log of missed token lookups
///
/// Cloning yields another handle to the same log.
#[derive(Clone, Debug, Default)]
pub struct Diagnostics {
    log: Arc<Mutex<Log>>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Log> {
        self.log.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Record a miss and emit it as a warning
    ///
    /// Once [`MAX_DIAGNOSTICS`] misses are retained the oldest one is dropped.
    pub fn record(&self, diagnostic: TokenDiagnostic) {
        tracing::warn!(
            path = %diagnostic.path,
            reason = %diagnostic.reason,
            "token not found"
        );

        let mut log = self.lock();
        *log.counts.entry(diagnostic.path.clone()).or_insert(0) += 1;
        log.total += 1;
        if log.recent.len() >= MAX_DIAGNOSTICS {
            log.recent.pop_front();
        }
        log.recent.push_back(diagnostic);
    }

    /// Number of retained misses, at most [`MAX_DIAGNOSTICS`]
    pub fn len(&self) -> usize {
        self.lock().recent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().recent.is_empty()
    }

    /// Every miss recorded since the last drain, including dropped ones
    pub fn total(&self) -> usize {
        self.lock().total
    }

    /// Snapshot of the retained misses, oldest first
    pub fn entries(&self) -> Vec<TokenDiagnostic> {
        self.lock().recent.iter().cloned().collect()
    }

    /// Number of misses recorded for one path
    pub fn count_for(&self, path: &str) -> usize {
        self.lock().counts.get(path).copied().unwrap_or(0)
    }

    /// Drain the log
    pub fn take(&self) -> Vec<TokenDiagnostic> {
        let mut log = self.lock();
        let entries = std::mem::take(&mut log.recent);
        log.counts.clear();
        log.total = 0;
        entries.into()
    }

    pub fn clear(&self) {
        self.take();
    }

    /// Whether two handles share one log
    pub fn same_log(&self, other: &Diagnostics) -> bool {
        Arc::ptr_eq(&self.log, &other.log)
    }
}
