//! services/api/src/adapters/latency.rs
//!
//! Fixed artificial delays that mimic a round trip to a real backend.

use astrology_core::ports::{LatencyKind, LatencyPolicy};
use async_trait::async_trait;
use std::time::Duration;

#[derive(Clone, Copy, Debug)]
pub struct FixedLatency {
    pub auth: Duration,
    pub reading: Duration,
}

impl FixedLatency {
    pub fn new(auth: Duration, reading: Duration) -> Self {
        Self { auth, reading }
    }
}

#[async_trait]
impl LatencyPolicy for FixedLatency {
    async fn pause(&self, kind: LatencyKind) {
        let delay = match kind {
            LatencyKind::Auth => self.auth,
            LatencyKind::Reading => self.reading,
        };
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}
