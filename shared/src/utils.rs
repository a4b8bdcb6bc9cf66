//! # Shared Utility Functions
//!
//! Marketplace helpers used by every client surface.
//!
//! ## Platform Fee
//!
//! The marketplace charges the buyer a fixed 5% fee on top of the offer
//! price:
//! - [`buyer_total`] - Display total, rounded to the nearest minor unit
//! - [`seller_payout`] - Amount released to the seller on completion
//!
//! The *stored* deal amount is computed server-side with truncation
//! (`trunc(price * 1.05)`), so for some prices it differs from the rounded
//! display figure by one minor unit. The server value is authoritative.
//!
//! ## Formatting
//!
//! - [`format_price`] - Minor-unit amount → `"1050 ₽"`
//! - [`format_timestamp`] - Service ISO-8601 timestamp → `"30.08.2026 10:15"`
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::{buyer_total, format_price};
//!
//! assert_eq!(buyer_total(1000), 1050);
//! assert_eq!(format_price(1050), "1050 ₽");
//! ```

use chrono::NaiveDateTime;

/// Platform fee charged to the buyer, as a percentage of the offer price.
pub const PLATFORM_FEE_PERCENT: f64 = 5.0;

/// Total shown to the buyer for an offer: price plus the platform fee,
/// rounded to the nearest minor unit.
pub fn buyer_total(price: i64) -> i64 {
    (price as f64 * (1.0 + PLATFORM_FEE_PERCENT / 100.0)).round() as i64
}

/// Amount released to the seller when a deal completes.
///
/// The service truncates, matching its payout arithmetic.
pub fn seller_payout(amount: i64) -> i64 {
    (amount as f64 * (1.0 - PLATFORM_FEE_PERCENT / 100.0)).trunc() as i64
}

/// Format a minor-unit amount for display.
pub fn format_price(amount: i64) -> String {
    format!("{} ₽", amount)
}

/// Format a service timestamp (`2026-08-30T10:15:00`, optional fractional
/// seconds) as `30.08.2026 10:15`.
///
/// Returns the input unchanged when it does not parse; a raw timestamp on
/// screen beats an error for a cosmetic concern.
pub fn format_timestamp(iso: &str) -> String {
    match NaiveDateTime::parse_from_str(iso, "%Y-%m-%dT%H:%M:%S%.f") {
        Ok(dt) => dt.format("%d.%m.%Y %H:%M").to_string(),
        Err(_) => iso.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buyer_total_on_round_prices() {
        assert_eq!(buyer_total(1000), 1050);
        assert_eq!(buyer_total(100), 105);
        assert_eq!(buyer_total(0), 0);
    }

    #[test]
    fn test_buyer_total_rounds_to_nearest() {
        // 999 * 1.05 = 1048.95 → 1049; 10 * 1.05 = 10.5 → 11
        assert_eq!(buyer_total(999), 1049);
        assert_eq!(buyer_total(10), 11);
        assert_eq!(buyer_total(30), 32);
    }

    #[test]
    fn test_seller_payout_truncates() {
        // 1050 * 0.95 = 997.5 → 997, matching the service
        assert_eq!(seller_payout(1050), 997);
        assert_eq!(seller_payout(105), 99);
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(1050), "1050 ₽");
        assert_eq!(format_price(0), "0 ₽");
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(
            format_timestamp("2026-08-30T10:15:00"),
            "30.08.2026 10:15"
        );
        assert_eq!(
            format_timestamp("2026-08-30T10:15:00.123456"),
            "30.08.2026 10:15"
        );
        // Unparseable input passes through untouched
        assert_eq!(format_timestamp("yesterday"), "yesterday");
    }
}
