//! # Storefront Client SDK
//!
//! Typed client for the GameTrade gaming-goods marketplace. The marketplace
//! itself (pricing, escrow transitions, authentication, persistence) lives
//! behind three remote HTTP service groups; this crate is the client-side
//! contract: a session store, one async operation per remote capability, and
//! the deal lifecycle as the client observes it.
//!
//! ## Module Structure
//!
//! ```text
//! storefront/
//! ├── config.rs    - Service group base URLs and timeout
//! ├── core/        - Error model and the MarketplaceApi service trait
//! ├── session.rs   - Injected session store (token + user profile)
//! ├── services/    - HTTP operations against the remote service groups
//! └── utils/       - Client-side form validation
//! ```
//!
//! ## Design Notes
//!
//! - The session is an explicit [`SessionStore`] injected into
//!   [`ApiClient::new`], not ambient global state; every outgoing request
//!   reads the stored user id from it to attach the identity header.
//! - Every response is status-validated. Non-2xx responses normalize to
//!   [`ClientError::Api`] carrying the service's `error` text verbatim, or a
//!   fixed per-operation fallback.
//! - The client never advances a deal's status locally. Mutations are
//!   followed by a re-fetch; a failed call leaves observed state untouched.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use storefront::{ApiClient, ApiConfig, SessionStore};
//! use storefront::services::api;
//!
//! # async fn run() -> storefront::Result<()> {
//! let session = Arc::new(SessionStore::open("session.json"));
//! let client = ApiClient::new(ApiConfig::default(), session);
//!
//! api::auth::login(&client, "alice@example.com", "secret123").await?;
//! let offers = api::catalog::get_offers(&client, None).await?;
//! let deal = api::deals::create_deal(&client, offers[0].id).await?;
//! api::deals::pay_deal(&client, deal.deal_id).await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod core;
pub mod services;
pub mod session;
pub mod utils;

pub use config::ApiConfig;
pub use self::core::error::{ClientError, Result};
pub use self::core::service::MarketplaceApi;
pub use services::api::ApiClient;
pub use session::SessionStore;
