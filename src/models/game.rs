use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// ResellPrice — Estimated buy-back value for a game
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResellPrice {
    pub cash: f64,
}

// ---------------------------------------------------------------------------
// ListingDetails — Current listing of a tracked game
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingDetails {
    pub price: f64,
}

// ---------------------------------------------------------------------------
// GameRecord — One entry of the listing endpoint
// ---------------------------------------------------------------------------

/// A tracked video game as returned by `GET /api/video-games`.
///
/// Only the fields needed for the badge counts are modelled; anything else in
/// the payload is ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRecord {
    #[serde(default)]
    pub resell_price: Option<ResellPrice>,
    #[serde(default)]
    pub listing_details: Option<ListingDetails>,
}

impl GameRecord {
    pub fn has_resell_price(&self) -> bool {
        self.resell_price.is_some()
    }

    /// True when a resale price is known and the game is listed strictly
    /// below it. Equal prices do not count.
    pub fn is_profitable(&self) -> bool {
        match (&self.resell_price, &self.listing_details) {
            (Some(resell), Some(listing)) => listing.price < resell.cash,
            _ => false,
        }
    }
}
