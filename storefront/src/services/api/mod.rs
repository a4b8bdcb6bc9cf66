//! # Marketplace API Client Module
//!
//! HTTP client for the three remote service groups. Endpoints are dispatched
//! by an `action` query parameter on each group's base URL, with JSON bodies
//! both ways.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs      - Module exports
//! ├── client.rs   - ApiClient struct, identity header, response validation
//! ├── auth.rs     - Auth group (register, login, logout)
//! ├── catalog.rs  - Catalog group (games, offers, my-offers, create-offer)
//! └── deals.rs    - Deals group (my-deals, create, pay, complete, chat)
//! ```

pub mod auth;
pub mod catalog;
pub mod client;
pub mod deals;

pub use client::ApiClient;
