//! Fixed-window request limiter keyed by client.

use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use lru::LruCache;

use crate::services::clock::Clock;

/// Outcome of a rate limit check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateDecision {
    Allowed { remaining: u32 },
    Limited { retry_after: Duration },
}

#[derive(Debug, Clone, Copy)]
struct Window {
    started_at: DateTime<Utc>,
    count: u32,
}

/// Counts requests per client in fixed windows.
///
/// At most `max_clients` windows are tracked; a new client past that evicts
/// the least recently seen one.
pub struct RateLimiter {
    clock: Arc<dyn Clock>,
    max_requests: u32,
    window: TimeDelta,
    windows: Mutex<LruCache<String, Window>>,
}

impl RateLimiter {
    pub fn new(
        clock: Arc<dyn Clock>,
        max_requests: u32,
        window: Duration,
        max_clients: usize,
    ) -> Self {
        let capacity = NonZeroUsize::new(max_clients).unwrap_or(NonZeroUsize::MIN);
        Self {
            clock,
            max_requests,
            window: TimeDelta::from_std(window).unwrap_or(TimeDelta::MAX),
            windows: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// Record a request from `client` and decide whether it may proceed.
    pub fn check(&self, client: &str) -> RateDecision {
        let now = self.clock.now();
        let mut windows = self.windows.lock().unwrap_or_else(|e| e.into_inner());

        if let Some(window) = windows.get_mut(client) {
            if now - window.started_at >= self.window {
                window.started_at = now;
                window.count = 0;
            }

            if window.count >= self.max_requests {
                let retry_after = window
                    .started_at
                    .checked_add_signed(self.window)
                    .map_or(TimeDelta::MAX, |ends_at| ends_at - now);
                tracing::warn!(client, "Rate limit exceeded");
                return RateDecision::Limited {
                    retry_after: retry_after.to_std().unwrap_or(Duration::ZERO),
                };
            }

            window.count += 1;
            return RateDecision::Allowed {
                remaining: self.max_requests - window.count,
            };
        }

        let evicted = windows.push(
            client.to_string(),
            Window {
                started_at: now,
                count: 1,
            },
        );
        if let Some((evicted, _)) = evicted {
            tracing::debug!(client = %evicted, "Evicted rate limit window");
        }

        RateDecision::Allowed {
            remaining: self.max_requests.saturating_sub(1),
        }
    }
}

/// Whole seconds to advertise in a `Retry-After` header (at least one).
pub fn retry_after_secs(retry_after: Duration) -> u64 {
    let secs = retry_after.as_secs() + u64::from(retry_after.subsec_nanos() > 0);
    secs.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::clock::ManualClock;

    fn limiter(max_requests: u32, max_clients: usize) -> (Arc<ManualClock>, RateLimiter) {
        let clock = Arc::new(ManualClock::new(Utc::now()));
        let limiter = RateLimiter::new(
            clock.clone(),
            max_requests,
            Duration::from_secs(60),
            max_clients,
        );
        (clock, limiter)
    }

    #[test]
    fn test_allows_up_to_limit() {
        let (_, limiter) = limiter(3, 10);
        assert_eq!(limiter.check("a"), RateDecision::Allowed { remaining: 2 });
        assert_eq!(limiter.check("a"), RateDecision::Allowed { remaining: 1 });
        assert_eq!(limiter.check("a"), RateDecision::Allowed { remaining: 0 });
        assert_eq!(
            limiter.check("a"),
            RateDecision::Limited {
                retry_after: Duration::from_secs(60)
            }
        );
    }

    #[test]
    fn test_clients_are_independent() {
        let (_, limiter) = limiter(1, 10);
        assert!(matches!(limiter.check("a"), RateDecision::Allowed { .. }));
        assert!(matches!(limiter.check("b"), RateDecision::Allowed { .. }));
        assert!(matches!(limiter.check("a"), RateDecision::Limited { .. }));
    }

    #[test]
    fn test_window_resets() {
        let (clock, limiter) = limiter(1, 10);
        limiter.check("a");
        clock.advance(TimeDelta::seconds(45));
        assert_eq!(
            limiter.check("a"),
            RateDecision::Limited {
                retry_after: Duration::from_secs(15)
            }
        );

        clock.advance(TimeDelta::seconds(15));
        assert_eq!(limiter.check("a"), RateDecision::Allowed { remaining: 0 });
    }

    #[test]
    fn test_evicts_least_recently_seen() {
        let (clock, limiter) = limiter(5, 2);
        limiter.check("old");
        clock.advance(TimeDelta::seconds(61));
        limiter.check("fresh");
        limiter.check("new");

        // "old" was dropped, so "fresh" keeps its count
        assert_eq!(limiter.check("fresh"), RateDecision::Allowed { remaining: 3 });
        assert_eq!(limiter.check("new"), RateDecision::Allowed { remaining: 3 });
    }

    #[test]
    fn test_evicts_oldest_when_full() {
        let (clock, limiter) = limiter(1, 2);
        limiter.check("first");
        clock.advance(TimeDelta::seconds(1));
        limiter.check("second");
        clock.advance(TimeDelta::seconds(1));
        limiter.check("third");

        // "first" was dropped, so it starts a new window
        assert_eq!(limiter.check("first"), RateDecision::Allowed { remaining: 0 });
        assert!(matches!(limiter.check("third"), RateDecision::Limited { .. }));
    }

    #[test]
    fn test_zero_clients_tracks_one() {
        let clock = Arc::new(ManualClock::new(Utc::now()));
        let limiter = RateLimiter::new(clock, 1, Duration::from_secs(60), 0);
        limiter.check("a");
        assert!(matches!(limiter.check("a"), RateDecision::Limited { .. }));
    }

    #[test]
    fn test_huge_window_does_not_overflow() {
        let clock = Arc::new(ManualClock::new(Utc::now()));
        let limiter = RateLimiter::new(clock, 1, Duration::from_secs(10_000_000_000_000), 10);
        limiter.check("a");
        match limiter.check("a") {
            RateDecision::Limited { retry_after } => assert!(retry_after > Duration::from_secs(60)),
            other => panic!("expected limited, got {other:?}"),
        }
    }

    #[test]
    fn test_retry_after_secs() {
        assert_eq!(retry_after_secs(Duration::ZERO), 1);
        assert_eq!(retry_after_secs(Duration::from_millis(1500)), 2);
        assert_eq!(retry_after_secs(Duration::from_secs(15)), 15);
    }
}
