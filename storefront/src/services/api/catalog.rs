//! # Catalog Endpoints
//!
//! Games, public offer listings, and the authenticated seller's own offers.

use shared::dto::catalog::{
    CreateOfferRequest, CreateOfferResponse, Game, GamesResponse, MyOffer, MyOffersResponse,
    Offer, OffersResponse,
};

use super::client::{read_json, ApiClient};
use crate::core::error::Result;
use crate::utils::validation::validate_offer;

/// List all games with their categories.
pub async fn get_games(client: &ApiClient) -> Result<Vec<Game>> {
    let url = format!("{}?action=games", client.config().catalog_url);

    let response = client.http.get(&url).send().await?;
    read_json::<GamesResponse>(response, "Failed to load games")
        .await
        .map(|r| r.games)
}

/// List active offers, optionally filtered by game.
#[tracing::instrument(skip(client))]
pub async fn get_offers(client: &ApiClient, game_id: Option<i64>) -> Result<Vec<Offer>> {
    let url = match game_id {
        Some(id) => format!(
            "{}?action=offers&game_id={}",
            client.config().catalog_url,
            id
        ),
        None => format!("{}?action=offers", client.config().catalog_url),
    };

    tracing::debug!("Fetching offers");
    let response = client.http.get(&url).send().await?;
    let offers = read_json::<OffersResponse>(response, "Failed to load offers")
        .await
        .map(|r| r.offers)?;

    tracing::debug!(offer_count = offers.len(), "Offers fetched");
    Ok(offers)
}

/// List the authenticated seller's own offers, newest first.
pub async fn get_my_offers(client: &ApiClient) -> Result<Vec<MyOffer>> {
    let url = format!("{}?action=my-offers", client.config().catalog_url);

    let response = client.with_identity(client.http.get(&url)).send().await?;
    read_json::<MyOffersResponse>(response, "Failed to load your offers")
        .await
        .map(|r| r.offers)
}

/// List a new offer for sale.
///
/// Obvious rejects (empty title, non-positive price) fail client-side before
/// the round trip; everything else is the service's call.
#[tracing::instrument(skip(client, request), fields(game_id = request.game_id, price = request.price))]
pub async fn create_offer(
    client: &ApiClient,
    request: CreateOfferRequest,
) -> Result<CreateOfferResponse> {
    validate_offer(&request.title, request.price).into_result()?;

    let url = format!("{}?action=create-offer", client.config().catalog_url);

    let response = client
        .with_identity(client.http.post(&url))
        .json(&request)
        .send()
        .await?;

    let created = read_json::<CreateOfferResponse>(response, "Failed to create offer").await?;
    tracing::info!(offer_id = created.id, "Offer created");
    Ok(created)
}
