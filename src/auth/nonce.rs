//! Nonce generation for Coinbase API authentication.
//!
//! Coinbase derives the nonce from wall-clock time in whole seconds. The
//! nonce must never go backwards, otherwise the server rejects the request
//! as a stale timestamp, so the clock reading is clamped to the last value
//! handed out.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Trait for providing nonces for authenticated requests.
///
/// Returned values must be monotonically non-decreasing. Two requests
/// signed within the same clock second share a nonce.
pub trait NonceProvider: Send + Sync {
    /// Generate the nonce for the next request.
    fn next_nonce(&self) -> u64;
}

/// A nonce provider backed by the system clock, in UTC seconds since epoch.
///
/// If the clock steps backwards, the previous nonce is reused rather than
/// emitting a smaller one.
pub struct ClockNonce {
    last_nonce: AtomicU64,
}

impl ClockNonce {
    /// Create a new clock-backed nonce provider.
    pub fn new() -> Self {
        Self {
            last_nonce: AtomicU64::new(0),
        }
    }

    /// Current time in whole seconds since UNIX epoch.
    fn current_time_secs() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    }
}

impl Default for ClockNonce {
    fn default() -> Self {
        Self::new()
    }
}

impl NonceProvider for ClockNonce {
    fn next_nonce(&self) -> u64 {
        let time_nonce = Self::current_time_secs();

        // Clamp to the last handed-out value so the sequence never decreases.
        loop {
            let last = self.last_nonce.load(Ordering::SeqCst);
            let next = time_nonce.max(last);

            if self
                .last_nonce
                .compare_exchange(last, next, Ordering::SeqCst, Ordering::SeqCst)
                .is_ok()
            {
                return next;
            }
            // CAS failed, another thread updated the value. Retry.
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_nonce_tracks_wall_clock() {
        let provider = ClockNonce::new();
        let before = ClockNonce::current_time_secs();
        let nonce = provider.next_nonce();
        let after = ClockNonce::current_time_secs();
        assert!(nonce >= before);
        assert!(nonce <= after);
    }

    #[test]
    fn test_nonce_never_decreases() {
        let provider = ClockNonce::new();

        let mut last = 0u64;
        for _ in 0..1000 {
            let nonce = provider.next_nonce();
            assert!(nonce >= last, "Nonce must be non-decreasing");
            last = nonce;
        }
    }

    #[test]
    fn test_nonce_non_decreasing_across_threads() {
        let provider = std::sync::Arc::new(ClockNonce::new());
        let mut handles = vec![];

        for _ in 0..4 {
            let p = provider.clone();
            handles.push(thread::spawn(move || {
                let mut nonces = Vec::new();
                for _ in 0..1000 {
                    nonces.push(p.next_nonce());
                }
                nonces
            }));
        }

        for handle in handles {
            let nonces = handle.join().unwrap();
            for pair in nonces.windows(2) {
                assert!(pair[1] >= pair[0], "Nonce must not go backwards");
            }
        }
    }
}
