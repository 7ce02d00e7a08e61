//! Fixed-window rate limiting.
//!
//! Counts requests per caller-supplied key (typically `"<route>:<client-ip>"`)
//! inside fixed windows. The algorithm deliberately permits up to `limit`
//! requests at the end of one window and another `limit` right after rollover,
//! so the worst-case burst across a boundary is `2 x limit`. That is a
//! documented property of fixed windows, not a bug.

use std::time::{Duration, Instant};

use dashmap::DashMap;

/// Outcome of a rate-limit check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateDecision {
    pub allowed: bool,
    /// How long the caller should wait before retrying. Always at least one
    /// second when the request was denied, never set when it was allowed.
    pub retry_after: Option<Duration>,
}

impl RateDecision {
    const ALLOWED: Self = Self {
        allowed: true,
        retry_after: None,
    };
}

#[derive(Debug, Clone, Copy)]
struct WindowEntry {
    count: u32,
    window_start: Instant,
}

/// Per-key fixed-window counter store.
///
/// An owned object rather than process-global state: the host constructs one,
/// shares it behind an `Arc`, and injects substitutes in tests. Entries are
/// reset lazily on the first hit after their window elapses; [`sweep`] exists
/// so long-idle keys do not accumulate forever.
///
/// [`sweep`]: RateLimiter::sweep
pub struct RateLimiter {
    entries: DashMap<String, WindowEntry>,
    limit: u32,
    window: Duration,
}

impl RateLimiter {
    #[must_use]
    pub fn new(limit: u32, window: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            limit,
            window,
        }
    }

    /// Records a hit for `key` and decides whether it is within quota.
    #[must_use]
    pub fn check(&self, key: &str) -> RateDecision {
        self.check_at(key, Instant::now())
    }

    /// [`check`](Self::check) with an explicit clock, for tests.
    ///
    /// The read-modify-write happens under the map entry's lock, so two
    /// concurrent hits on one key cannot both observe the pre-increment count.
    #[must_use]
    pub fn check_at(&self, key: &str, now: Instant) -> RateDecision {
        let mut entry = self
            .entries
            .entry(key.to_string())
            .or_insert(WindowEntry {
                count: 0,
                window_start: now,
            });

        let elapsed = now.saturating_duration_since(entry.window_start);
        if elapsed > self.window {
            entry.count = 1;
            entry.window_start = now;
            return RateDecision::ALLOWED;
        }

        entry.count = entry.count.saturating_add(1);
        if entry.count > self.limit {
            let remaining = self.window.saturating_sub(elapsed);
            let retry_after = round_up_to_secs(remaining).max(Duration::from_secs(1));
            tracing::debug!("Rate limit exceeded for key: {key}");
            return RateDecision {
                allowed: false,
                retry_after: Some(retry_after),
            };
        }
        RateDecision::ALLOWED
    }

    /// Drops entries whose window elapsed more than one full window ago.
    pub fn sweep(&self) {
        self.sweep_at(Instant::now());
    }

    /// [`sweep`](Self::sweep) with an explicit clock, for tests.
    pub fn sweep_at(&self, now: Instant) {
        let stale_after = self.window.saturating_mul(2);
        self.entries
            .retain(|_, e| now.saturating_duration_since(e.window_start) <= stale_after);
    }

    /// Number of keys currently tracked.
    #[must_use]
    pub fn tracked_keys(&self) -> usize {
        self.entries.len()
    }
}

fn round_up_to_secs(d: Duration) -> Duration {
    if d.subsec_nanos() == 0 {
        d
    } else {
        Duration::from_secs(d.as_secs() + 1)
    }
}
