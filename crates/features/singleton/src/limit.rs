use crate::error::SingletonError;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::trace;

/// Caps how many guarded instances may be alive at once.
///
/// Lives in a `static`; every [`InstanceGuard`] it hands out gives its slot back on drop.
#[derive(Debug)]
pub struct InstanceLimit {
    max: usize,
    live: AtomicUsize,
}

impl InstanceLimit {
    #[must_use]
    pub const fn new(max: usize) -> Self {
        Self { max, live: AtomicUsize::new(0) }
    }

    #[must_use]
    pub const fn max(&self) -> usize {
        self.max
    }

    /// Instances currently holding a slot.
    #[must_use]
    pub fn live(&self) -> usize {
        self.live.load(Ordering::Acquire)
    }

    /// Claims a slot, or reports the limit without touching the count.
    ///
    /// # Errors
    /// [`SingletonError::LimitExceeded`] when all `max` slots are taken.
    pub fn acquire(&'static self) -> Result<InstanceGuard, SingletonError> {
        let previous = self
            .live
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |live| {
                (live < self.max).then_some(live + 1)
            })
            .map_err(|_| SingletonError::LimitExceeded { limit: self.max, context: None })?;

        trace!(live = previous + 1, max = self.max, "Instance slot acquired");
        Ok(InstanceGuard { limit: self })
    }
}

/// A held slot of an [`InstanceLimit`].
#[derive(Debug)]
pub struct InstanceGuard {
    limit: &'static InstanceLimit,
}

impl Drop for InstanceGuard {
    fn drop(&mut self) {
        let previous = self.limit.live.fetch_sub(1, Ordering::AcqRel);
        trace!(live = previous - 1, max = self.limit.max, "Instance slot released");
    }
}
