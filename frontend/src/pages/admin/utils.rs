use crate::api::{ApprovalStatus, LeaveRequest, Timesheet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdminTab {
    #[default]
    PendingLeaves,
    ApprovedLeaves,
    PendingTimesheets,
    ApprovedTimesheets,
    Emails,
    Tasks,
}

impl AdminTab {
    pub const ALL: [AdminTab; 6] = [
        AdminTab::PendingLeaves,
        AdminTab::ApprovedLeaves,
        AdminTab::PendingTimesheets,
        AdminTab::ApprovedTimesheets,
        AdminTab::Emails,
        AdminTab::Tasks,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AdminTab::PendingLeaves => "Pending Leaves",
            AdminTab::ApprovedLeaves => "Approved Leaves",
            AdminTab::PendingTimesheets => "Pending Timesheets",
            AdminTab::ApprovedTimesheets => "Approved Timesheets",
            AdminTab::Emails => "Emails",
            AdminTab::Tasks => "Tasks",
        }
    }
}

pub fn leaves_with_status(leaves: &[LeaveRequest], status: ApprovalStatus) -> Vec<LeaveRequest> {
    leaves
        .iter()
        .filter(|leave| leave.status == status)
        .cloned()
        .collect()
}

pub fn timesheets_with_status(timesheets: &[Timesheet], status: ApprovalStatus) -> Vec<Timesheet> {
    timesheets
        .iter()
        .filter(|entry| entry.status == status)
        .cloned()
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Leave,
    Timesheet,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Approve,
    Reject,
}

impl Decision {
    pub fn status(&self) -> ApprovalStatus {
        match self {
            Decision::Approve => ApprovalStatus::Approved,
            Decision::Reject => ApprovalStatus::Rejected,
        }
    }

    pub fn verb(&self) -> &'static str {
        match self {
            Decision::Approve => "Approve",
            Decision::Reject => "Reject",
        }
    }
}

/// The record a moderator is about to act on. `summary` is a short
/// human-readable handle for the confirmation dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingAction {
    pub kind: EntityKind,
    pub id: i64,
    pub summary: String,
    pub decision: Decision,
}

/// Decision lifecycle for the confirm dialog. A second "approve" click
/// while a dialog is open or a request is in flight is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ApprovalFlow {
    #[default]
    Idle,
    Confirming(PendingAction),
    Submitting(PendingAction),
}

impl ApprovalFlow {
    /// Opens the dialog. Returns false when a flow is already underway.
    pub fn begin(&mut self, action: PendingAction) -> bool {
        if matches!(self, ApprovalFlow::Idle) {
            *self = ApprovalFlow::Confirming(action);
            true
        } else {
            false
        }
    }

    /// Moves Confirming into Submitting, handing back the action to
    /// dispatch. Any other state yields nothing.
    pub fn confirm(&mut self) -> Option<PendingAction> {
        match std::mem::take(self) {
            ApprovalFlow::Confirming(action) => {
                *self = ApprovalFlow::Submitting(action.clone());
                Some(action)
            }
            other => {
                *self = other;
                None
            }
        }
    }

    /// Cancels an open dialog. An in-flight submission cannot be cancelled.
    pub fn cancel(&mut self) {
        if matches!(self, ApprovalFlow::Confirming(_)) {
            *self = ApprovalFlow::Idle;
        }
    }

    pub fn finish(&mut self) {
        *self = ApprovalFlow::Idle;
    }

    pub fn pending(&self) -> Option<&PendingAction> {
        match self {
            ApprovalFlow::Idle => None,
            ApprovalFlow::Confirming(action) | ApprovalFlow::Submitting(action) => Some(action),
        }
    }

    pub fn is_confirming(&self) -> bool {
        matches!(self, ApprovalFlow::Confirming(_))
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, ApprovalFlow::Submitting(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leave(id: i64, status: ApprovalStatus) -> LeaveRequest {
        LeaveRequest {
            id,
            user_id: format!("emp-{}", id),
            email: format!("emp-{}@example.com", id),
            date: "2025-06-01".to_string(),
            leave_type: "annual".to_string(),
            reason: "vacation".to_string(),
            status,
            approved_by: None,
            approval_comment: None,
        }
    }

    fn action(id: i64, decision: Decision) -> PendingAction {
        PendingAction {
            kind: EntityKind::Leave,
            id,
            summary: format!("leave #{}", id),
            decision,
        }
    }

    #[test]
    fn partition_splits_pending_and_approved() {
        let leaves = vec![
            leave(1, ApprovalStatus::Pending),
            leave(2, ApprovalStatus::Approved),
            leave(3, ApprovalStatus::Pending),
            leave(4, ApprovalStatus::Rejected),
        ];
        let pending = leaves_with_status(&leaves, ApprovalStatus::Pending);
        let approved = leaves_with_status(&leaves, ApprovalStatus::Approved);
        assert_eq!(
            pending.iter().map(|l| l.id).collect::<Vec<_>>(),
            vec![1, 3]
        );
        assert_eq!(approved.iter().map(|l| l.id).collect::<Vec<_>>(), vec![2]);
        // every record lands in exactly one bucket
        let rejected = leaves_with_status(&leaves, ApprovalStatus::Rejected);
        assert_eq!(pending.len() + approved.len() + rejected.len(), leaves.len());
    }

    #[test]
    fn flow_begin_confirm_finish_round_trip() {
        let mut flow = ApprovalFlow::default();
        assert!(flow.begin(action(7, Decision::Approve)));
        assert!(flow.is_confirming());
        let dispatched = flow.confirm();
        assert_eq!(dispatched, Some(action(7, Decision::Approve)));
        assert!(flow.is_submitting());
        flow.finish();
        assert_eq!(flow, ApprovalFlow::Idle);
    }

    #[test]
    fn flow_ignores_begin_while_busy() {
        let mut flow = ApprovalFlow::default();
        assert!(flow.begin(action(1, Decision::Approve)));
        assert!(!flow.begin(action(2, Decision::Reject)));
        assert_eq!(flow.pending().map(|a| a.id), Some(1));
        flow.confirm();
        assert!(!flow.begin(action(3, Decision::Approve)));
        assert_eq!(flow.pending().map(|a| a.id), Some(1));
    }

    #[test]
    fn flow_cancel_only_closes_open_dialog() {
        let mut flow = ApprovalFlow::default();
        flow.cancel();
        assert_eq!(flow, ApprovalFlow::Idle);

        flow.begin(action(1, Decision::Reject));
        flow.cancel();
        assert_eq!(flow, ApprovalFlow::Idle);

        flow.begin(action(2, Decision::Approve));
        flow.confirm();
        flow.cancel();
        assert!(flow.is_submitting());
    }

    #[test]
    fn confirm_outside_dialog_yields_nothing() {
        let mut flow = ApprovalFlow::default();
        assert_eq!(flow.confirm(), None);
        assert_eq!(flow, ApprovalFlow::Idle);
    }

    #[test]
    fn decision_maps_to_status() {
        assert_eq!(Decision::Approve.status(), ApprovalStatus::Approved);
        assert_eq!(Decision::Reject.status(), ApprovalStatus::Rejected);
    }
}
