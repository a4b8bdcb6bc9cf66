//! # Data Transfer Objects (DTOs)
//!
//! This module contains all data structures exchanged with the three remote
//! service groups over the JSON API.
//!
//! ## Module Organization
//!
//! - [`auth`] - Registration, login, and user profile DTOs
//! - [`catalog`] - Games, categories, and offer listing DTOs
//! - [`deals`] - Escrow deal lifecycle and deal chat DTOs
//!
//! ## Serialization Format
//!
//! All DTOs use `serde_json` for JSON serialization:
//!
//! - **Field naming**: snake_case (default serde behavior)
//! - **List envelopes**: `#[serde(default)]` so an omitted collection decodes as empty
//! - **Enums**: Serialize to lowercase strings using `#[serde(rename_all = "lowercase")]`
//! - **All types**: Implement both `Serialize` and `Deserialize`
//!
//! ## Example JSON Communication
//!
//! ### Request/Response Pair
//!
//! ```text
//! POST /?action=login
//! Content-Type: application/json
//!
//! {
//!   "email": "alice@example.com",
//!   "password": "MyPassword123"
//! }
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "token": "wR3k9 ... opaque",
//!   "user": {
//!     "id": 1,
//!     "username": "alice",
//!     "email": "alice@example.com",
//!     "balance": 1000,
//!     "rating": 0.0,
//!     "reviews_count": 0
//!   },
//!   "message": "Вход выполнен успешно"
//! }
//! ```

pub mod auth;
pub mod catalog;
pub mod deals;

pub use auth::*;
pub use catalog::*;
pub use deals::*;
