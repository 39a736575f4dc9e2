//! Simulated request latency for store operations.
//!
//! The stores emulate a remote backend: every operation waits a randomized
//! 200-500ms before acting. Tests and the CLI run with `Latency::none()`.

use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

const SIMULATED_MIN_MS: u64 = 200;
const SIMULATED_MAX_MS: u64 = 500;

/// Per-operation delay policy, injected into stores at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Latency {
    /// No artificial delay.
    None,
    /// Sleep a pseudo-random duration in `[min_ms, max_ms)` per operation.
    Simulated { min_ms: u64, max_ms: u64 },
}

impl Latency {
    /// Default simulated backend latency of 200-500ms.
    pub fn simulated() -> Self {
        Self::Simulated {
            min_ms: SIMULATED_MIN_MS,
            max_ms: SIMULATED_MAX_MS,
        }
    }

    /// Zero delay, for tests and local tooling.
    pub fn none() -> Self {
        Self::None
    }

    /// Blocks the calling thread for one sampled delay.
    pub fn wait(&self) {
        match *self {
            Self::None => {}
            Self::Simulated { min_ms, max_ms } => {
                let span = max_ms.saturating_sub(min_ms).max(1);
                let delay = min_ms + sample_jitter(clock_entropy(), span - 1);
                thread::sleep(Duration::from_millis(delay));
            }
        }
    }
}

/// Maps a raw entropy value into `[0, cap]` (pure function).
fn sample_jitter(entropy: u64, cap: u64) -> u64 {
    if cap == 0 {
        0
    } else if cap == u64::MAX {
        entropy
    } else {
        entropy % (cap + 1)
    }
}

fn clock_entropy() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.subsec_nanos() as u64)
        .unwrap_or(0)
}
