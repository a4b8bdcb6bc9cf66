//! # Utility Functions
//!
//! ## Modules
//!
//! - **[`validation`]**: Client-side form validation (credentials, offer
//!   drafts, chat messages)
//!
//! ## Related Modules
//!
//! - [`shared::utils`]: Cross-crate utilities (fee math, display formatting)
//! - [`crate::core`]: Core abstractions and error types

pub mod validation;
