//! # API Client
//!
//! Main HTTP client for the remote marketplace service groups.

use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::sync::Arc;

use crate::config::ApiConfig;
use crate::core::error::{ClientError, Result};
use crate::core::service::MarketplaceApi;
use crate::session::SessionStore;
use shared::dto::auth::{AuthResponse, ErrorResponse};
use shared::dto::catalog::{CreateOfferRequest, CreateOfferResponse, Game, MyOffer, Offer};
use shared::dto::deals::{
    CreateDealResponse, Deal, DealActionResponse, DealMessage, SendMessageResponse,
};

/// Header carrying the numeric id of the stored user.
///
/// This is the trust model the service actually implements: an unsigned
/// numeric identity. A verifiable bearer credential would be stronger, but
/// the wire contract is the service's to change.
pub(crate) const USER_ID_HEADER: &str = "X-User-Id";

/// HTTP client for the marketplace service groups.
///
/// Holds a pooled `reqwest::Client`, the three base URLs, and the injected
/// session store. Cheap to clone; clones share the pool and the session.
#[derive(Clone)]
pub struct ApiClient {
    pub(crate) http: Client,
    config: ApiConfig,
    session: Arc<SessionStore>,
}

impl ApiClient {
    /// Create a client with the given endpoints and session.
    ///
    /// The underlying HTTP client carries the configured timeout so a dead
    /// service cannot hang a caller indefinitely.
    pub fn new(config: ApiConfig, session: Arc<SessionStore>) -> Self {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            http,
            config,
            session,
        }
    }

    /// The injected session store.
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub(crate) fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Attach the identity header when a user is stored; unauthenticated
    /// requests go out without it.
    pub(crate) fn with_identity(&self, request: RequestBuilder) -> RequestBuilder {
        match self.session.user_id() {
            Some(id) => request.header(USER_ID_HEADER, id.to_string()),
            None => request,
        }
    }
}

/// Validate status and decode the body.
///
/// Every operation funnels through here, reads included: a non-2xx status
/// becomes [`ClientError::Api`] carrying the service's `error` text verbatim
/// when the body has one, otherwise `fallback`.
pub(crate) async fn read_json<T: DeserializeOwned>(
    response: Response,
    fallback: &str,
) -> Result<T> {
    let status = response.status();
    if status.is_success() {
        Ok(response.json::<T>().await?)
    } else {
        let message = match response.json::<ErrorResponse>().await {
            Ok(body) => body.error,
            Err(_) => fallback.to_string(),
        };
        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait::async_trait]
impl MarketplaceApi for ApiClient {
    async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthResponse> {
        super::auth::register(self, username, email, password).await
    }

    async fn login(&self, email: &str, password: &str) -> Result<AuthResponse> {
        super::auth::login(self, email, password).await
    }

    fn logout(&self) -> Result<()> {
        super::auth::logout(self)
    }

    async fn get_games(&self) -> Result<Vec<Game>> {
        super::catalog::get_games(self).await
    }

    async fn get_offers(&self, game_id: Option<i64>) -> Result<Vec<Offer>> {
        super::catalog::get_offers(self, game_id).await
    }

    async fn get_my_offers(&self) -> Result<Vec<MyOffer>> {
        super::catalog::get_my_offers(self).await
    }

    async fn create_offer(&self, request: CreateOfferRequest) -> Result<CreateOfferResponse> {
        super::catalog::create_offer(self, request).await
    }

    async fn get_my_deals(&self) -> Result<Vec<Deal>> {
        super::deals::get_my_deals(self).await
    }

    async fn create_deal(&self, offer_id: i64) -> Result<CreateDealResponse> {
        super::deals::create_deal(self, offer_id).await
    }

    async fn pay_deal(&self, deal_id: i64) -> Result<DealActionResponse> {
        super::deals::pay_deal(self, deal_id).await
    }

    async fn complete_deal(&self, deal_id: i64) -> Result<DealActionResponse> {
        super::deals::complete_deal(self, deal_id).await
    }

    async fn get_messages(&self, deal_id: i64) -> Result<Vec<DealMessage>> {
        super::deals::get_messages(self, deal_id).await
    }

    async fn send_message(&self, deal_id: i64, message: &str) -> Result<SendMessageResponse> {
        super::deals::send_message(self, deal_id, message).await
    }
}
