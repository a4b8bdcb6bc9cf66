//! # Shared Data Transfer Objects Library
//!
//! This library defines the wire contract between marketplace clients and the
//! remote service groups (auth, catalog, deals). All DTOs use JSON
//! serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::auth`]**: Registration, login, and user profile DTOs
//!   - **[`dto::catalog`]**: Games, categories, and offer DTOs
//!   - **[`dto::deals`]**: Escrow deal lifecycle and deal chat DTOs
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::buyer_total`]**: Display total with the platform fee applied
//!   - **[`utils::format_price`]**: Format minor-unit amounts for display
//!
//! ## Wire Format
//!
//! All DTOs serialize to JSON using the default `serde` behavior:
//! - Field names use **snake_case** in Rust, which maps to **snake_case** in JSON by default
//! - Collection envelopes use `#[serde(default)]` so an omitted list decodes as empty
//! - Enums with a wire representation use `#[serde(rename_all = "lowercase")]`
//!
//! ## Usage in a Client
//!
//! ```rust
//! use shared::dto::auth::LoginRequest;
//!
//! let request = LoginRequest {
//!     email: "alice@example.com".to_string(),
//!     password: "secret".to_string(),
//! };
//!
//! let body = serde_json::to_string(&request).unwrap();
//! assert!(body.contains("alice@example.com"));
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
// Note: Wildcard re-exports are used here since shared is a DTO library
// where all exports are meant to be public API
pub use dto::*;
pub use utils::*;
