use std::time::Duration;

use chrono::{DateTime, Utc};

/// Returns true when a value stored at `stored_at` is still within `ttl` at `now`.
///
/// The boundary is exclusive: an entry whose age equals the TTL is stale.
/// A timestamp in the future counts as stale, so a clock stepping backwards
/// cannot stretch an entry past its TTL.
pub fn is_fresh(stored_at: DateTime<Utc>, now: DateTime<Utc>, ttl: Duration) -> bool {
    let age = now.signed_duration_since(stored_at);
    match age.to_std() {
        Ok(age) => age < ttl,
        Err(_) => false,
    }
}

/// Returns the instant at which a value stored at `stored_at` expires.
///
/// Saturates to `None` when the TTL does not fit in a chrono duration.
pub fn expires_at(stored_at: DateTime<Utc>, ttl: Duration) -> Option<DateTime<Utc>> {
    let ttl = chrono::Duration::from_std(ttl).ok()?;
    stored_at.checked_add_signed(ttl)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    const FIVE_MINUTES: Duration = Duration::from_secs(300);

    #[test]
    fn test_fresh_within_ttl() {
        let now = t0() + chrono::Duration::minutes(2);
        assert!(is_fresh(t0(), now, FIVE_MINUTES));
    }

    #[test]
    fn test_stale_at_exact_ttl() {
        let now = t0() + chrono::Duration::minutes(5);
        assert!(!is_fresh(t0(), now, FIVE_MINUTES));
    }

    #[test]
    fn test_stale_after_ttl() {
        let now = t0() + chrono::Duration::minutes(6);
        assert!(!is_fresh(t0(), now, FIVE_MINUTES));
    }

    #[test]
    fn test_future_timestamp_is_stale() {
        let now = t0() - chrono::Duration::seconds(1);
        assert!(!is_fresh(t0(), now, FIVE_MINUTES));

        // A backwards step of an hour must not keep the entry alive for an hour
        let now = t0() - chrono::Duration::hours(1);
        assert!(!is_fresh(t0(), now, FIVE_MINUTES));
    }

    #[test]
    fn test_zero_ttl_is_never_fresh() {
        assert!(!is_fresh(t0(), t0(), Duration::ZERO));
    }

    #[test]
    fn test_expires_at() {
        assert_eq!(
            expires_at(t0(), FIVE_MINUTES),
            Some(t0() + chrono::Duration::minutes(5))
        );
    }
}
