//! Client-side tally of listing records into a [`StatsSummary`].

use crate::models::{GameRecord, StatsSummary};

/// Count records the way the summary endpoint does.
///
/// `unrecognized` and `profitable` are disjoint but not complementary: a game
/// listed at or above its resale value counts toward neither.
pub fn summarize(games: &[GameRecord]) -> StatsSummary {
    let unrecognized = games.iter().filter(|g| !g.has_resell_price()).count();
    let profitable = games.iter().filter(|g| g.is_profitable()).count();
    StatsSummary::new(games.len() as u64, unrecognized as u64, profitable as u64)
}
