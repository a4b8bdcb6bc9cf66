//! # Catalog Data Transfer Objects
//!
//! Games, game categories, and offer listings as served by the catalog group.

use serde::{Deserialize, Serialize};

/// Category within a game (accounts, currency, boosting, ...)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameCategory {
    pub id: i64,
    pub name: String,
}

/// Game listing with its categories
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Game {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub regions: Vec<String>,
    #[serde(default)]
    pub categories: Vec<GameCategory>,
}

/// Envelope for `action=games`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GamesResponse {
    #[serde(default)]
    pub games: Vec<Game>,
}

/// Public offer listing as shown in the storefront
///
/// `rating`, `reviews` and `online` are a snapshot of the seller at listing
/// time. `price` is a positive integer in minor currency units. Offers are
/// immutable once listed; there is no edit operation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Offer {
    pub id: i64,
    pub game: String,
    pub category: String,
    pub seller: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: i64,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub reviews: i64,
    #[serde(default)]
    pub online: bool,
}

/// Envelope for `action=offers`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OffersResponse {
    #[serde(default)]
    pub offers: Vec<Offer>,
}

/// One of the requesting seller's own offers (`action=my-offers`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MyOffer {
    pub id: i64,
    pub game: String,
    pub category: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: i64,
    pub status: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Envelope for `action=my-offers`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MyOffersResponse {
    #[serde(default)]
    pub offers: Vec<MyOffer>,
}

/// Request body for `action=create-offer`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateOfferRequest {
    pub game_id: i64,
    pub category_id: i64,
    pub title: String,
    pub description: String,
    pub price: i64,
}

/// Response for `action=create-offer`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateOfferResponse {
    pub id: i64,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offers_envelope_defaults_to_empty() {
        // The service may answer `{}` on an empty catalog; callers must see [].
        let parsed: OffersResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.offers.is_empty());
    }

    #[test]
    fn offer_parses_full_listing() {
        let json = r#"{
            "id": 3,
            "game": "Dota 2",
            "category": "Аккаунты",
            "seller": "bob",
            "title": "Immortal account",
            "description": "5k MMR",
            "price": 1000,
            "rating": 4.9,
            "reviews": 31,
            "online": true
        }"#;
        let offer: Offer = serde_json::from_str(json).unwrap();
        assert_eq!(offer.price, 1000);
        assert!(offer.online);
    }

    #[test]
    fn game_tolerates_missing_optional_fields() {
        let game: Game = serde_json::from_str(r#"{"id":1,"name":"CS2"}"#).unwrap();
        assert!(game.image.is_none());
        assert!(game.categories.is_empty());
    }
}
