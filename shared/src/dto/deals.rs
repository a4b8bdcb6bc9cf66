//! # Deal Data Transfer Objects
//!
//! Escrow deal lifecycle and deal chat, as observed through the deals service
//! group. A deal binds one buyer, one seller, and an amount snapshot taken
//! from the offer at creation time, and progresses
//! `pending` → `paid` → `completed`.
//!
//! The service is the only authority over transitions: the client submits an
//! action, treats the call as fallible, and re-fetches the deal list rather
//! than advancing any status locally.

use serde::{Deserialize, Serialize};

/// Deal lifecycle status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DealStatus {
    /// Created, unpaid. Funds not yet captured.
    Pending,
    /// Funds captured from the buyer and held in escrow.
    Paid,
    /// Funds released to the seller. Terminal.
    Completed,
}

/// Buyer-initiated transition on a deal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealAction {
    Pay,
    Complete,
}

impl DealStatus {
    /// Whether the deal can change state again.
    pub fn is_terminal(self) -> bool {
        matches!(self, DealStatus::Completed)
    }

    /// The single action the requesting user may attempt next, if any.
    ///
    /// Both transitions are buyer-initiated; a seller never gets an action.
    /// This is display guidance only: legality is enforced by the service and
    /// every call must still be treated as fallible.
    pub fn next_action(self, is_buyer: bool) -> Option<DealAction> {
        if !is_buyer {
            return None;
        }
        match self {
            DealStatus::Pending => Some(DealAction::Pay),
            DealStatus::Paid => Some(DealAction::Complete),
            DealStatus::Completed => None,
        }
    }

    /// Whether `action` is legal from this state, from the buyer's viewpoint.
    pub fn can_apply(self, action: DealAction) -> bool {
        matches!(
            (self, action),
            (DealStatus::Pending, DealAction::Pay) | (DealStatus::Paid, DealAction::Complete)
        )
    }

    /// Status label for display.
    pub fn label(self) -> &'static str {
        match self {
            DealStatus::Pending => "Ожидает оплаты",
            DealStatus::Paid => "Оплачено",
            DealStatus::Completed => "Завершено",
        }
    }
}

/// A deal as returned by `action=my-deals`, from the viewpoint of the
/// requesting user (`is_buyer` flips between the two participants).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deal {
    pub id: i64,
    pub title: String,
    /// Amount charged to the buyer, in minor units. Computed server-side from
    /// the offer price plus the platform fee; authoritative over any
    /// client-side display figure.
    pub amount: i64,
    pub status: DealStatus,
    #[serde(default)]
    pub created_at: Option<String>,
    pub buyer: String,
    pub seller: String,
    pub is_buyer: bool,
}

/// Envelope for `action=my-deals`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DealsResponse {
    #[serde(default)]
    pub deals: Vec<Deal>,
}

/// Request body for `action=create`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateDealRequest {
    pub offer_id: i64,
}

/// Response for `action=create`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateDealResponse {
    pub deal_id: i64,
    pub message: String,
    pub amount: i64,
}

/// Request body for `action=pay` and `action=complete`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DealActionRequest {
    pub deal_id: i64,
}

/// Response for `action=pay` and `action=complete`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DealActionResponse {
    pub message: String,
    pub status: DealStatus,
}

/// One chat message within a deal, relative to the requesting user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DealMessage {
    pub id: i64,
    pub message: String,
    #[serde(default)]
    pub created_at: Option<String>,
    pub username: String,
    pub is_own: bool,
}

/// Envelope for `action=messages`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessagesResponse {
    #[serde(default)]
    pub messages: Vec<DealMessage>,
}

/// Request body for `action=send-message`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SendMessageRequest {
    pub deal_id: i64,
    pub message: String,
}

/// Response for `action=send-message`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SendMessageResponse {
    pub message_id: i64,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&DealStatus::Pending).unwrap(),
            r#""pending""#
        );
        let parsed: DealStatus = serde_json::from_str(r#""completed""#).unwrap();
        assert_eq!(parsed, DealStatus::Completed);
    }

    #[test]
    fn buyer_walks_pending_paid_completed() {
        assert_eq!(
            DealStatus::Pending.next_action(true),
            Some(DealAction::Pay)
        );
        assert_eq!(
            DealStatus::Paid.next_action(true),
            Some(DealAction::Complete)
        );
        assert_eq!(DealStatus::Completed.next_action(true), None);
    }

    #[test]
    fn seller_never_gets_an_action() {
        assert_eq!(DealStatus::Pending.next_action(false), None);
        assert_eq!(DealStatus::Paid.next_action(false), None);
    }

    #[test]
    fn illegal_transitions_are_rejected() {
        assert!(!DealStatus::Pending.can_apply(DealAction::Complete));
        assert!(!DealStatus::Paid.can_apply(DealAction::Pay));
        assert!(!DealStatus::Completed.can_apply(DealAction::Pay));
        assert!(!DealStatus::Completed.can_apply(DealAction::Complete));
        assert!(DealStatus::Pending.can_apply(DealAction::Pay));
        assert!(DealStatus::Paid.can_apply(DealAction::Complete));
    }

    #[test]
    fn every_status_has_a_display_label() {
        assert_eq!(DealStatus::Pending.label(), "Ожидает оплаты");
        assert_eq!(DealStatus::Paid.label(), "Оплачено");
        assert_eq!(DealStatus::Completed.label(), "Завершено");
    }

    #[test]
    fn completed_is_terminal() {
        assert!(DealStatus::Completed.is_terminal());
        assert!(!DealStatus::Pending.is_terminal());
        assert!(!DealStatus::Paid.is_terminal());
    }

    #[test]
    fn deals_envelope_defaults_to_empty() {
        let parsed: DealsResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.deals.is_empty());
    }

    #[test]
    fn deal_parses_with_wire_status() {
        let json = r#"{
            "id": 42,
            "title": "Immortal account",
            "amount": 1050,
            "status": "pending",
            "created_at": "2026-08-30T10:15:00",
            "buyer": "alice",
            "seller": "bob",
            "is_buyer": true
        }"#;
        let deal: Deal = serde_json::from_str(json).unwrap();
        assert_eq!(deal.status, DealStatus::Pending);
        assert_eq!(deal.amount, 1050);
        assert!(deal.is_buyer);
    }
}
