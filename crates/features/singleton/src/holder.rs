use crate::error::{SingletonError, SingletonErrorExt};
use crate::limit::{InstanceGuard, InstanceLimit};
use tracing::debug;

/// Process-wide cap for [`Singleton::new`].
pub static GLOBAL_LIMIT: InstanceLimit = InstanceLimit::new(1);

/// A state holder with two integer slots, of which only a limited number may exist.
///
/// Construction claims a slot of an [`InstanceLimit`]; dropping the holder releases it.
#[derive(Debug)]
pub struct Singleton {
    first: i32,
    second: i32,
    _slot: InstanceGuard,
}

impl Singleton {
    /// Creates the process-wide instance.
    ///
    /// # Errors
    /// [`SingletonError::LimitExceeded`] while another instance is alive.
    pub fn new() -> Result<Self, SingletonError> {
        Self::with_limit(&GLOBAL_LIMIT)
    }

    /// Creates an instance counted against `limit` instead of [`GLOBAL_LIMIT`].
    ///
    /// # Errors
    /// [`SingletonError::LimitExceeded`] when `limit` has no free slot.
    pub fn with_limit(limit: &'static InstanceLimit) -> Result<Self, SingletonError> {
        let slot = limit.acquire().context("creating singleton")?;
        debug!(live = limit.live(), max = limit.max(), "Singleton created");

        Ok(Self { first: 0, second: 0, _slot: slot })
    }

    #[must_use]
    pub const fn first(&self) -> i32 {
        self.first
    }

    #[must_use]
    pub const fn second(&self) -> i32 {
        self.second
    }

    pub const fn set_first(&mut self, value: i32) {
        self.first = value;
    }

    pub const fn set_second(&mut self, value: i32) {
        self.second = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_start_at_zero() {
        static LIMIT: InstanceLimit = InstanceLimit::new(1);

        let mut holder = Singleton::with_limit(&LIMIT).unwrap();
        assert_eq!((holder.first(), holder.second()), (0, 0));

        holder.set_first(7);
        holder.set_second(-3);
        assert_eq!((holder.first(), holder.second()), (7, -3));
    }

    #[test]
    fn refusal_names_the_operation() {
        static LIMIT: InstanceLimit = InstanceLimit::new(1);

        let _held = Singleton::with_limit(&LIMIT).unwrap();
        let err = Singleton::with_limit(&LIMIT).unwrap_err();

        assert_eq!(err.to_string(), "Instance limit of 1 reached (creating singleton)");
    }
}
