//! Per-action session state: `Idle -> Pending -> {Success, Failed} -> Idle`
//!
//! Requests are not cancelled or coalesced. Each one gets a ticket; only the
//! newest ticket may publish its result, so a slow response that arrives after
//! a newer request was issued is dropped.

use contracts::dashboards::d100_report_generator::ExportFormat;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportAction {
    Query,
    Export(ExportFormat),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActionPhase {
    #[default]
    Idle,
    Pending(ReportAction),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionResult {
    Success,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket {
    seq: u64,
    action: ReportAction,
}

/// What the caller should do with a finished response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Apply(ActionResult),
    Stale,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionTracker {
    phase: ActionPhase,
    issued: u64,
}

impl SessionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> ActionPhase {
        self.phase
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.phase, ActionPhase::Pending(_))
    }

    pub fn begin(&mut self, action: ReportAction) -> RequestTicket {
        self.issued += 1;
        self.phase = ActionPhase::Pending(action);
        log::debug!("{:?} request #{} pending", action, self.issued);
        RequestTicket {
            seq: self.issued,
            action,
        }
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.seq == self.issued
    }

    /// Settle a request and return to `Idle` if it is the newest one
    pub fn finish(&mut self, ticket: RequestTicket, succeeded: bool) -> Completion {
        if !self.is_current(ticket) {
            log::debug!(
                "{:?} response #{} dropped, newer request #{} issued",
                ticket.action,
                ticket.seq,
                self.issued
            );
            return Completion::Stale;
        }

        let result = if succeeded {
            ActionResult::Success
        } else {
            ActionResult::Failed
        };
        self.phase = ActionPhase::Idle;
        Completion::Apply(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifecycle_returns_to_idle() {
        let mut tracker = SessionTracker::new();
        assert_eq!(tracker.phase(), ActionPhase::Idle);

        let ticket = tracker.begin(ReportAction::Query);
        assert_eq!(tracker.phase(), ActionPhase::Pending(ReportAction::Query));
        assert!(tracker.is_pending());

        assert_eq!(
            tracker.finish(ticket, true),
            Completion::Apply(ActionResult::Success)
        );
        assert_eq!(tracker.phase(), ActionPhase::Idle);

        let ticket = tracker.begin(ReportAction::Export(ExportFormat::Pdf));
        assert_eq!(tracker.finish(ticket, false), Completion::Apply(ActionResult::Failed));
        assert_eq!(tracker.phase(), ActionPhase::Idle);
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let mut tracker = SessionTracker::new();
        let first = tracker.begin(ReportAction::Query);
        let second = tracker.begin(ReportAction::Query);

        // the newer request answers first
        assert_eq!(tracker.finish(second, true), Completion::Apply(ActionResult::Success));
        assert_eq!(tracker.finish(first, true), Completion::Stale);
        assert_eq!(tracker.phase(), ActionPhase::Idle);
    }

    #[test]
    fn test_stale_response_keeps_newer_request_pending() {
        let mut tracker = SessionTracker::new();
        let first = tracker.begin(ReportAction::Query);
        let second = tracker.begin(ReportAction::Query);

        assert_eq!(tracker.finish(first, false), Completion::Stale);
        assert!(tracker.is_pending());
        assert!(tracker.is_current(second));
        assert_eq!(tracker.phase(), ActionPhase::Pending(ReportAction::Query));
    }
}
