//! # Core Abstractions
//!
//! Error types and service traits for the storefront SDK.
//!
//! ## Modules
//!
//! - **[`error`]**: Client error types (`ClientError`, `Result<T>`)
//! - **[`service`]**: Service trait for dependency injection (`MarketplaceApi`)
//!
//! ## Error Handling
//!
//! All SDK errors use the centralized [`ClientError`] type:
//!
//! ```rust
//! use storefront::core::error::{ClientError, Result};
//!
//! fn validate_input(input: &str) -> Result<String> {
//!     if input.is_empty() {
//!         return Err(ClientError::Validation("Input cannot be empty".to_string()));
//!     }
//!     Ok(input.to_string())
//! }
//! ```
//!
//! ## Dependency Injection
//!
//! The [`MarketplaceApi`] trait lets consumers swap the real [`ApiClient`]
//! for a mock in tests:
//!
//! ```text
//! // In production: Arc<dyn MarketplaceApi> = Arc::new(ApiClient::new(config, session));
//! // In tests:      Arc<dyn MarketplaceApi> = Arc::new(MockMarketplace::default());
//! ```
//!
//! [`ApiClient`]: crate::services::api::ApiClient

pub mod error;
pub mod service;

pub use error::{ClientError, Result};
pub use service::MarketplaceApi;
