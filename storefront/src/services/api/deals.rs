//! # Deals Endpoints
//!
//! The escrow lifecycle (`pending` → `paid` → `completed`) and per-deal chat.
//!
//! The service alone decides transition legality: pay before create, complete
//! before pay, or either by a non-buyer all come back as application errors.
//! Callers re-fetch [`get_my_deals`] after every successful mutation instead
//! of advancing status locally, so displayed state always reflects the last
//! successful server read.

use shared::dto::deals::{
    CreateDealRequest, CreateDealResponse, Deal, DealActionRequest, DealActionResponse,
    DealMessage, DealsResponse, MessagesResponse, SendMessageRequest, SendMessageResponse,
};

use super::client::{read_json, ApiClient};
use crate::core::error::Result;
use crate::utils::validation::validate_message;

/// List deals where the stored user is buyer or seller, newest first.
pub async fn get_my_deals(client: &ApiClient) -> Result<Vec<Deal>> {
    let url = format!("{}?action=my-deals", client.config().deals_url);

    let response = client.with_identity(client.http.get(&url)).send().await?;
    read_json::<DealsResponse>(response, "Failed to load deals")
        .await
        .map(|r| r.deals)
}

/// Open a deal on an offer. The service snapshots seller, title, and amount
/// (price plus platform fee) and creates the deal in `pending`.
#[tracing::instrument(skip(client))]
pub async fn create_deal(client: &ApiClient, offer_id: i64) -> Result<CreateDealResponse> {
    let url = format!("{}?action=create", client.config().deals_url);
    let request = CreateDealRequest { offer_id };

    let response = client
        .with_identity(client.http.post(&url))
        .json(&request)
        .send()
        .await?;

    let created = read_json::<CreateDealResponse>(response, "Failed to create deal").await?;
    tracing::info!(deal_id = created.deal_id, amount = created.amount, "Deal created");
    Ok(created)
}

/// Pay a pending deal. Buyer only; funds move into escrow.
#[tracing::instrument(skip(client))]
pub async fn pay_deal(client: &ApiClient, deal_id: i64) -> Result<DealActionResponse> {
    let url = format!("{}?action=pay", client.config().deals_url);
    let request = DealActionRequest { deal_id };

    let response = client
        .with_identity(client.http.post(&url))
        .json(&request)
        .send()
        .await?;

    let result = read_json::<DealActionResponse>(response, "Payment failed").await?;
    tracing::info!(status = ?result.status, "Deal paid");
    Ok(result)
}

/// Confirm a paid deal. Buyer only; escrow is released to the seller and the
/// deal becomes terminal.
#[tracing::instrument(skip(client))]
pub async fn complete_deal(client: &ApiClient, deal_id: i64) -> Result<DealActionResponse> {
    let url = format!("{}?action=complete", client.config().deals_url);
    let request = DealActionRequest { deal_id };

    let response = client
        .with_identity(client.http.post(&url))
        .json(&request)
        .send()
        .await?;

    let result = read_json::<DealActionResponse>(response, "Failed to complete deal").await?;
    tracing::info!(status = ?result.status, "Deal completed");
    Ok(result)
}

/// List chat messages for a deal, in creation order.
pub async fn get_messages(client: &ApiClient, deal_id: i64) -> Result<Vec<DealMessage>> {
    let url = format!(
        "{}?action=messages&deal_id={}",
        client.config().deals_url,
        deal_id
    );

    let response = client.with_identity(client.http.get(&url)).send().await?;
    read_json::<MessagesResponse>(response, "Failed to load messages")
        .await
        .map(|r| r.messages)
}

/// Send a chat message within a deal. Either participant may write while the
/// deal exists; messages cannot be edited or deleted.
pub async fn send_message(
    client: &ApiClient,
    deal_id: i64,
    message: &str,
) -> Result<SendMessageResponse> {
    validate_message(message).into_result()?;

    let url = format!("{}?action=send-message", client.config().deals_url);
    let request = SendMessageRequest {
        deal_id,
        message: message.trim().to_string(),
    };

    let response = client
        .with_identity(client.http.post(&url))
        .json(&request)
        .send()
        .await?;

    read_json::<SendMessageResponse>(response, "Failed to send message").await
}
