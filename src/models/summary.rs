use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// GroupCount — `{ "total": n }` sub-object of the summary
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupCount {
    pub total: u64,
}

// ---------------------------------------------------------------------------
// StatsSummary — Pre-aggregated counts from the summary endpoint
// ---------------------------------------------------------------------------

/// Aggregate counts as returned by `GET /api/video-games/summary`.
///
/// Also produced client-side by [`crate::aggregate::summarize`] when the
/// listing endpoint is used, so both sources render the same way.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsSummary {
    pub total: u64,
    pub unrecognized: GroupCount,
    pub profitable: GroupCount,
}

impl StatsSummary {
    pub fn new(total: u64, unrecognized: u64, profitable: u64) -> Self {
        Self {
            total,
            unrecognized: GroupCount {
                total: unrecognized,
            },
            profitable: GroupCount { total: profitable },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_server_payload() {
        let summary: StatsSummary = serde_json::from_value(json!({
            "total": 3,
            "unrecognized": {"total": 1},
            "profitable": {"total": 1}
        }))
        .unwrap();
        assert_eq!(summary, StatsSummary::new(3, 1, 1));
    }

    #[test]
    fn rejects_negative_counts() {
        let result: Result<StatsSummary, _> = serde_json::from_value(json!({
            "total": -1,
            "unrecognized": {"total": 0},
            "profitable": {"total": 0}
        }));
        assert!(result.is_err());
    }
}
