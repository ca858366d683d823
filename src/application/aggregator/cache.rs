//! Short-lived cache of the last successful transfer report.

use std::time::Duration;

use parking_lot::RwLock;
use tokio::time::Instant;

use crate::domain::transfer::TransferReport;

/// Holds one report for a fixed time-to-live.
///
/// A zero TTL disables caching entirely.
#[derive(Debug)]
pub(super) struct ReportCache {
    ttl: Duration,
    slot: RwLock<Option<(Instant, TransferReport)>>,
}

impl ReportCache {
    pub(super) fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            slot: RwLock::new(None),
        }
    }

    /// The cached report, if it is still fresh.
    pub(super) fn get(&self) -> Option<TransferReport> {
        if self.ttl.is_zero() {
            return None;
        }
        let slot = self.slot.read();
        slot.as_ref()
            .filter(|(stored_at, _)| stored_at.elapsed() < self.ttl)
            .map(|(_, report)| report.clone())
    }

    pub(super) fn store(&self, report: TransferReport) {
        if self.ttl.is_zero() {
            return;
        }
        *self.slot.write() = Some((Instant::now(), report));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::transfer::UnavailableReason;

    fn report() -> TransferReport {
        TransferReport::unavailable(UnavailableReason::NoData, 5)
    }

    #[tokio::test(start_paused = true)]
    async fn entry_expires_after_ttl() {
        let cache = ReportCache::new(Duration::from_secs(30));
        cache.store(report());
        assert!(cache.get().is_some());

        tokio::time::advance(Duration::from_secs(31)).await;
        assert!(cache.get().is_none());
    }

    #[tokio::test]
    async fn zero_ttl_never_caches() {
        let cache = ReportCache::new(Duration::ZERO);
        cache.store(report());
        assert!(cache.get().is_none());
    }
}
