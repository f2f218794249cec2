//! Query parameters sent with the stats request.

use chrono::{DateTime, TimeZone, Utc};

use crate::error::{Result, StatsError};

/// Midnight UTC of the UTC calendar day `now` falls on, as
/// `YYYY-MM-DDT00:00:00Z`.
///
/// The caller's offset only affects which instant `now` denotes, never the
/// output zone.
pub fn start_of_day<Tz: TimeZone>(now: &DateTime<Tz>) -> String {
    now.with_timezone(&Utc)
        .format("%Y-%m-%dT00:00:00Z")
        .to_string()
}

// ---------------------------------------------------------------------------
// StatsQuery
// ---------------------------------------------------------------------------

/// Parameters of a single stats request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsQuery {
    pub from: String,
    /// Only sent to the listing endpoint.
    pub limit: Option<u32>,
}

impl StatsQuery {
    pub fn summary<Tz: TimeZone>(now: &DateTime<Tz>) -> Self {
        Self {
            from: start_of_day(now),
            limit: None,
        }
    }

    pub fn listing<Tz: TimeZone>(now: &DateTime<Tz>, limit: u32) -> Result<Self> {
        if limit == 0 {
            return Err(StatsError::InvalidArgument(
                "listing limit must be greater than zero".into(),
            ));
        }
        Ok(Self {
            from: start_of_day(now),
            limit: Some(limit),
        })
    }

    /// Key/value pairs in request order: `limit` (if any), then `from`.
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(2);
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        pairs.push(("from", self.from.clone()));
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn start_of_day_truncates_utc_time() {
        let now = Utc.with_ymd_and_hms(2024, 3, 9, 23, 59, 59).unwrap();
        assert_eq!(start_of_day(&now), "2024-03-09T00:00:00Z");
    }

    #[test]
    fn start_of_day_ignores_local_offset() {
        // 01:30 on the 10th at +05:00 is still the 9th in UTC
        let east = FixedOffset::east_opt(5 * 3600).unwrap();
        let now = east.with_ymd_and_hms(2024, 3, 10, 1, 30, 0).unwrap();
        assert_eq!(start_of_day(&now), "2024-03-09T00:00:00Z");

        // 20:00 on the 9th at -08:00 is already the 10th in UTC
        let west = FixedOffset::west_opt(8 * 3600).unwrap();
        let now = west.with_ymd_and_hms(2024, 3, 9, 20, 0, 0).unwrap();
        assert_eq!(start_of_day(&now), "2024-03-10T00:00:00Z");
    }

    #[test]
    fn summary_query_has_no_limit() {
        let now = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let q = StatsQuery::summary(&now);
        assert_eq!(q.pairs(), vec![("from", "2024-01-02T00:00:00Z".to_string())]);
    }

    #[test]
    fn listing_query_sends_limit_first() {
        let now = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let q = StatsQuery::listing(&now, 10_000).unwrap();
        assert_eq!(
            q.pairs(),
            vec![
                ("limit", "10000".to_string()),
                ("from", "2024-01-02T00:00:00Z".to_string())
            ]
        );
    }

    #[test]
    fn listing_rejects_zero_limit() {
        let now = Utc::now();
        assert!(matches!(
            StatsQuery::listing(&now, 0),
            Err(StatsError::InvalidArgument(_))
        ));
    }
}
