//! Property-based tests for the workflow state machine.

use proptest::prelude::*;

use super::service::WorkflowService;
use crate::ledger::ApprovalStatus;
use kasbook_shared::types::ActorId;

fn status_strategy() -> impl Strategy<Value = ApprovalStatus> {
    prop_oneof![
        Just(ApprovalStatus::Pending),
        Just(ApprovalStatus::Approved),
        Just(ApprovalStatus::Rejected),
        Just(ApprovalStatus::Cancelled),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Terminal states absorb: no transition ever succeeds from a
    /// non-pending status.
    #[test]
    fn prop_terminal_states_absorb(status in status_strategy()) {
        prop_assume!(status != ApprovalStatus::Pending);
        let actor = ActorId::new();

        prop_assert!(WorkflowService::check(status, None, actor).is_err());
        prop_assert!(WorkflowService::approve(status, Some(actor), actor).is_err());
        prop_assert!(WorkflowService::reject(status, actor, "reason".to_string()).is_err());
        prop_assert!(WorkflowService::cancel(status, actor).is_err());
    }

    /// Approval succeeds exactly when the entry is pending and checked.
    #[test]
    fn prop_approve_requires_pending_and_checked(
        status in status_strategy(),
        checked in any::<bool>(),
    ) {
        let checked_by = checked.then(ActorId::new);
        let result = WorkflowService::approve(status, checked_by, ActorId::new());
        let eligible = status == ApprovalStatus::Pending && checked;
        prop_assert_eq!(result.is_ok(), eligible);
        if let Ok(action) = result {
            prop_assert_eq!(action.new_status(), ApprovalStatus::Approved);
        }
    }

    /// Every successful transition lands on a status the transition table
    /// allows (check keeps PENDING, everything else is terminal).
    #[test]
    fn prop_transitions_follow_table(checked in any::<bool>()) {
        let actor = ActorId::new();
        let checked_by = checked.then(ActorId::new);

        if let Ok(action) = WorkflowService::check(ApprovalStatus::Pending, checked_by, actor) {
            prop_assert_eq!(action.new_status(), ApprovalStatus::Pending);
        }
        if let Ok(action) = WorkflowService::approve(ApprovalStatus::Pending, checked_by, actor) {
            prop_assert!(WorkflowService::is_valid_transition(
                ApprovalStatus::Pending,
                action.new_status()
            ));
        }
        let action =
            WorkflowService::reject(ApprovalStatus::Pending, actor, "r".to_string()).unwrap();
        prop_assert!(WorkflowService::is_valid_transition(
            ApprovalStatus::Pending,
            action.new_status()
        ));
        let action = WorkflowService::cancel(ApprovalStatus::Pending, actor).unwrap();
        prop_assert!(WorkflowService::is_valid_transition(
            ApprovalStatus::Pending,
            action.new_status()
        ));
    }
}
