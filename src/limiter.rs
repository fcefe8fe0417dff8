//! Sliding-window rate limiter — per-client admission gate in front of
//! the prediction pipeline.
//!
//! Each identity owns an ordered list of admission timestamps, purged
//! lazily on its own checks. The whole limiter sits behind one mutex at
//! the API layer, which makes the read-purge-append step atomic per
//! identity. Idle identities are evicted opportunistically once the map
//! grows past a threshold, so memory stays bounded without a background
//! sweep.

use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Evict identities with no live window entries once the map holds more
/// than this many identities.
const EVICTION_THRESHOLD: usize = 1024;

/// Per-identity sliding-window rate limiter.
pub struct RateLimiter {
    windows: HashMap<String, Vec<Instant>>,
    quota: u32,
    window: Duration,
}

impl RateLimiter {
    pub fn new(quota: u32, window: Duration) -> Self {
        Self {
            windows: HashMap::new(),
            quota,
            window,
        }
    }

    /// Default production limits: 100 requests per 60 seconds.
    pub fn default_limits() -> Self {
        Self::new(100, Duration::from_secs(60))
    }

    /// Admission check for one identity. Purges that identity's expired
    /// entries, rejects with the retry hint (window length in seconds) if
    /// the quota is reached, otherwise records the request and admits.
    pub fn check(&mut self, identity: &str) -> Result<(), u64> {
        self.check_at(identity, Instant::now())
    }

    /// Same as [`check`](Self::check) with an explicit clock reading, so
    /// tests can advance virtual time.
    pub fn check_at(&mut self, identity: &str, now: Instant) -> Result<(), u64> {
        if self.windows.len() > EVICTION_THRESHOLD {
            self.evict_stale(now);
        }

        let entries = self.windows.entry(identity.to_string()).or_default();
        entries.retain(|ts| now.duration_since(*ts) < self.window);

        if entries.len() as u32 >= self.quota {
            return Err(self.window.as_secs());
        }

        entries.push(now);
        Ok(())
    }

    /// Number of identities currently tracked.
    pub fn tracked_identities(&self) -> usize {
        self.windows.len()
    }

    fn evict_stale(&mut self, now: Instant) {
        let window = self.window;
        self.windows
            .retain(|_, entries| entries.iter().any(|ts| now.duration_since(*ts) < window));
    }
}
