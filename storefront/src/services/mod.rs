//! # Services Module
//!
//! Remote service integrations for the marketplace client.
//!
//! ```text
//! services/
//! └── api/    - HTTP client for the three remote service groups
//!              (auth, catalog/offers, deals/chat)
//! ```
//!
//! ## Control Flow
//!
//! ```text
//! caller ──> ApiClient ──HTTP/JSON──> remote service group ──> JSON ──> caller
//! ```
//!
//! One round trip per call. No retry, no in-flight deduplication, no
//! cancellation once issued; concurrent mutations are the service's problem
//! to serialize (it is the sole authority over deal transitions).

pub mod api;
