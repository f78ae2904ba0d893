//! Network collaborators: schedule fetching and reverse geocoding.
//!
//! This module is gated behind the `async` feature.

pub mod api;
pub mod geo;

use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic request-sequence guard.
///
/// Issue a token before starting a fetch; when the response lands, apply it
/// only if the token is still current. A newer fetch invalidates every
/// earlier token, so stale in-flight responses are discarded rather than
/// clobbering fresher state. Last writer wins; nothing is queued or locked.
#[derive(Debug, Default)]
pub struct RequestSequence {
    counter: AtomicU64,
}

/// Token tied to one issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new request generation, invalidating all earlier tokens.
    pub fn begin(&self) -> RequestToken {
        RequestToken(self.counter.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// True while `token` belongs to the most recently begun request.
    pub fn is_current(&self, token: RequestToken) -> bool {
        self.counter.load(Ordering::SeqCst) == token.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_token_wins() {
        let seq = RequestSequence::new();

        let first = seq.begin();
        assert!(seq.is_current(first));

        let second = seq.begin();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }
}
