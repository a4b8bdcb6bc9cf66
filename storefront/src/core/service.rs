//! # Service Traits
//!
//! Traits for dependency injection, enabling better testability and modularity.

use crate::core::error::Result;
use async_trait::async_trait;
use shared::dto::auth::AuthResponse;
use shared::dto::catalog::{
    CreateOfferRequest, CreateOfferResponse, Game, MyOffer, Offer,
};
use shared::dto::deals::{
    CreateDealResponse, Deal, DealActionResponse, DealMessage, SendMessageResponse,
};

/// Trait covering every remote marketplace capability.
///
/// One method per remote operation, matching the three service groups (auth,
/// catalog, deals). Implemented by [`ApiClient`]; consumers that want mocks
/// hold an `Arc<dyn MarketplaceApi>` instead of the concrete client.
///
/// [`ApiClient`]: crate::services::api::ApiClient
#[async_trait]
pub trait MarketplaceApi: Send + Sync {
    /// Register a new account; persists the returned session on success.
    async fn register(&self, username: &str, email: &str, password: &str)
        -> Result<AuthResponse>;

    /// Log in; persists the returned session on success.
    async fn login(&self, email: &str, password: &str) -> Result<AuthResponse>;

    /// Clear the stored session.
    fn logout(&self) -> Result<()>;

    /// List games with their categories.
    async fn get_games(&self) -> Result<Vec<Game>>;

    /// List active offers, optionally filtered by game.
    async fn get_offers(&self, game_id: Option<i64>) -> Result<Vec<Offer>>;

    /// List the authenticated seller's own offers.
    async fn get_my_offers(&self) -> Result<Vec<MyOffer>>;

    /// List a new offer for sale.
    async fn create_offer(&self, request: CreateOfferRequest) -> Result<CreateOfferResponse>;

    /// List deals where the authenticated user is buyer or seller.
    async fn get_my_deals(&self) -> Result<Vec<Deal>>;

    /// Open a deal on an offer (resulting state: `pending`).
    async fn create_deal(&self, offer_id: i64) -> Result<CreateDealResponse>;

    /// Pay a pending deal (buyer only; resulting state: `paid`).
    async fn pay_deal(&self, deal_id: i64) -> Result<DealActionResponse>;

    /// Confirm a paid deal (buyer only; resulting state: `completed`).
    async fn complete_deal(&self, deal_id: i64) -> Result<DealActionResponse>;

    /// List chat messages for a deal, in creation order.
    async fn get_messages(&self, deal_id: i64) -> Result<Vec<DealMessage>>;

    /// Send a chat message within a deal.
    async fn send_message(&self, deal_id: i64, message: &str) -> Result<SendMessageResponse>;
}
