//! Transfer pair integrity.
//!
//! A logical transfer is two ledger entries sharing one `TransferId`. The
//! legs transition independently, so a pair can end up "dangling": one leg
//! approved while the other is rejected or cancelled, or a leg whose
//! partner is missing entirely. This scan surfaces those as warnings for
//! human review; it never repairs data.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::types::{ApprovalStatus, Transaction, TransactionKind};
use kasbook_shared::types::{TransactionId, TransferId};

/// Why a transfer leg is flagged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnpairedReason {
    /// No other entry shares this leg's transfer id.
    MissingPartner,
    /// This leg is approved while its partner is terminally not approved.
    DivergedPair,
}

/// A transfer leg flagged by the integrity scan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnpairedLeg {
    /// The shared transfer id.
    pub transfer_id: TransferId,
    /// The flagged leg.
    pub transaction_id: TransactionId,
    /// The flagged leg's kind.
    pub kind: TransactionKind,
    /// The flagged leg's status.
    pub status: ApprovalStatus,
    /// Why the leg is flagged.
    pub reason: UnpairedReason,
}

/// Scans a transaction snapshot for dangling transfer legs.
///
/// Flags a leg when its partner is absent, or when it is APPROVED while the
/// partner is REJECTED or CANCELLED (the pair can no longer net to zero).
/// A pair that is still in flight (one or both legs PENDING) is not flagged.
#[must_use]
pub fn unpaired_transfer_legs(txns: &[Transaction]) -> Vec<UnpairedLeg> {
    let mut by_transfer: HashMap<TransferId, Vec<&Transaction>> = HashMap::new();
    for txn in txns {
        if let Some(transfer_id) = txn.transfer_id {
            by_transfer.entry(transfer_id).or_default().push(txn);
        }
    }

    let mut flagged = Vec::new();
    for (transfer_id, legs) in by_transfer {
        match legs.as_slice() {
            [leg] => flagged.push(UnpairedLeg {
                transfer_id,
                transaction_id: leg.id,
                kind: leg.kind,
                status: leg.status,
                reason: UnpairedReason::MissingPartner,
            }),
            [a, b] => {
                for (leg, partner) in [(a, b), (b, a)] {
                    let partner_dead = matches!(
                        partner.status,
                        ApprovalStatus::Rejected | ApprovalStatus::Cancelled
                    );
                    if leg.status == ApprovalStatus::Approved && partner_dead {
                        flagged.push(UnpairedLeg {
                            transfer_id,
                            transaction_id: leg.id,
                            kind: leg.kind,
                            status: leg.status,
                            reason: UnpairedReason::DivergedPair,
                        });
                    }
                }
            }
            // More than two legs per transfer id cannot be produced by
            // transfer creation; flag every leg for review.
            legs => {
                for leg in legs {
                    flagged.push(UnpairedLeg {
                        transfer_id,
                        transaction_id: leg.id,
                        kind: leg.kind,
                        status: leg.status,
                        reason: UnpairedReason::MissingPartner,
                    });
                }
            }
        }
    }

    flagged.sort_by_key(|leg| (leg.transfer_id, leg.transaction_id));
    flagged
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use kasbook_shared::types::{AccountId, ActorId, RegisterId};
    use rust_decimal_macros::dec;

    fn leg(transfer_id: TransferId, kind: TransactionKind, status: ApprovalStatus) -> Transaction {
        Transaction {
            id: TransactionId::new(),
            seq: 0,
            txn_date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            kind,
            amount: dec!(10_000),
            account_id: AccountId::new(),
            register_id: RegisterId::new(),
            description: "Transfer".to_string(),
            reference_no: None,
            proof_url: None,
            transfer_id: Some(transfer_id),
            status,
            checked_by: None,
            approved_by: None,
            rejected_reason: None,
            created_by: ActorId::new(),
            created_at: Utc::now(),
            checked_at: None,
            decided_at: None,
        }
    }

    #[test]
    fn test_healthy_pair_not_flagged() {
        let transfer_id = TransferId::new();
        let txns = vec![
            leg(transfer_id, TransactionKind::TransferOut, ApprovalStatus::Approved),
            leg(transfer_id, TransactionKind::TransferIn, ApprovalStatus::Approved),
        ];
        assert!(unpaired_transfer_legs(&txns).is_empty());
    }

    #[test]
    fn test_in_flight_pair_not_flagged() {
        let transfer_id = TransferId::new();
        let txns = vec![
            leg(transfer_id, TransactionKind::TransferOut, ApprovalStatus::Approved),
            leg(transfer_id, TransactionKind::TransferIn, ApprovalStatus::Pending),
        ];
        assert!(unpaired_transfer_legs(&txns).is_empty());
    }

    #[test]
    fn test_missing_partner_flagged() {
        let transfer_id = TransferId::new();
        let txns = vec![leg(
            transfer_id,
            TransactionKind::TransferOut,
            ApprovalStatus::Approved,
        )];
        let flagged = unpaired_transfer_legs(&txns);
        assert_eq!(flagged.len(), 1);
        assert_eq!(flagged[0].reason, UnpairedReason::MissingPartner);
        assert_eq!(flagged[0].transfer_id, transfer_id);
    }

    #[test]
    fn test_diverged_pair_flags_approved_leg() {
        let transfer_id = TransferId::new();
        let approved = leg(transfer_id, TransactionKind::TransferOut, ApprovalStatus::Approved);
        let rejected = leg(transfer_id, TransactionKind::TransferIn, ApprovalStatus::Rejected);
        let approved_id = approved.id;
        let flagged = unpaired_transfer_legs(&[approved, rejected]);
        assert_eq!(flagged.len(), 1);
        assert_eq!(flagged[0].reason, UnpairedReason::DivergedPair);
        assert_eq!(flagged[0].transaction_id, approved_id);
    }

    #[test]
    fn test_both_rejected_not_flagged() {
        let transfer_id = TransferId::new();
        let txns = vec![
            leg(transfer_id, TransactionKind::TransferOut, ApprovalStatus::Rejected),
            leg(transfer_id, TransactionKind::TransferIn, ApprovalStatus::Rejected),
        ];
        assert!(unpaired_transfer_legs(&txns).is_empty());
    }

    #[test]
    fn test_non_transfer_entries_ignored() {
        let txn = Transaction {
            transfer_id: None,
            ..leg(TransferId::new(), TransactionKind::Income, ApprovalStatus::Approved)
        };
        assert!(unpaired_transfer_legs(&[txn]).is_empty());
    }
}
