//! The record stored for every key.

use crate::error::{CacheError, Result};
use std::time::{Duration, Instant};

/// A stored value together with its absolute deadline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item<V> {
    /// When this item becomes stale
    pub deadline: Instant,
    /// The actual value stored
    pub value: V,
}

impl<V> Item<V> {
    /// Creates an item that expires at `deadline`.
    pub fn new(value: V, deadline: Instant) -> Self {
        Self { deadline, value }
    }

    /// Creates an item that expires `ttl` from now.
    ///
    /// Fails if `ttl` is zero or the deadline can't be represented.
    pub fn with_ttl(value: V, ttl: Duration) -> Result<Self> {
        if ttl.is_zero() {
            return Err(CacheError::invalid("ttl must be greater than zero"));
        }
        let deadline = Instant::now()
            .checked_add(ttl)
            .ok_or_else(|| CacheError::invalid(format!("ttl {ttl:?} overflows the clock")))?;
        Ok(Self::new(value, deadline))
    }

    /// Returns true if the deadline passed strictly before `now`.
    #[inline]
    pub fn is_expired_at(&self, now: Instant) -> bool {
        self.deadline < now
    }

    /// Time left until the deadline, zero once it has passed.
    pub fn remaining(&self) -> Duration {
        self.deadline.saturating_duration_since(Instant::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_ttl() {
        let before = Instant::now();
        let item = Item::with_ttl("a", Duration::from_secs(60)).unwrap();
        assert!(item.deadline >= before + Duration::from_secs(60));
        assert!(item.remaining() <= Duration::from_secs(60));
        assert!(item.remaining() > Duration::from_secs(59));
    }

    #[test]
    fn test_expiry_is_strict() {
        let deadline = Instant::now();
        let item = Item::new(1u32, deadline);

        assert!(!item.is_expired_at(deadline));
        assert!(item.is_expired_at(deadline + Duration::from_nanos(1)));
        assert!(!item.is_expired_at(deadline - Duration::from_nanos(1)));
    }

    #[test]
    fn test_invalid_ttl() {
        assert!(matches!(
            Item::with_ttl((), Duration::ZERO),
            Err(CacheError::InvalidArgument(_))
        ));
        assert!(matches!(
            Item::with_ttl((), Duration::MAX),
            Err(CacheError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_remaining_after_deadline() {
        let item = Item::new((), Instant::now() - Duration::from_millis(5));
        assert_eq!(item.remaining(), Duration::ZERO);
    }
}
