//! Order composition wizard
//!
//! A linear three-stage sequence over the draft store. The confirmation
//! stage owns a small nested machine for the submission itself:
//! `Idle -> Creating -> {Success | Error}`, with `Error -> Creating` on
//! retry.

use shared::models::Order;

use crate::backend::OrderBackend;
use crate::draft::DraftOrder;

/// Wizard stages, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowStage {
    Selection,
    Recap,
    Confirmation,
}

impl WorkflowStage {
    pub const ALL: [WorkflowStage; 3] = [
        WorkflowStage::Selection,
        WorkflowStage::Recap,
        WorkflowStage::Confirmation,
    ];

    fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    /// Tab title
    pub fn title(self) -> &'static str {
        match self {
            WorkflowStage::Selection => "Sélection",
            WorkflowStage::Recap => "Récapitulatif",
            WorkflowStage::Confirmation => "Confirmation",
        }
    }
}

/// Submission sub-states rendered on the confirmation stage
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionState {
    Idle,
    Creating,
    Success(Order),
    Error(String),
}

/// The wizard controller.
///
/// Forward navigation out of the selection stage is gated on a
/// non-empty draft by the calling view, not here.
#[derive(Debug)]
pub struct OrderWorkflow {
    stage: WorkflowStage,
    submission: SubmissionState,
}

impl Default for OrderWorkflow {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderWorkflow {
    pub fn new() -> Self {
        Self {
            stage: WorkflowStage::Selection,
            submission: SubmissionState::Idle,
        }
    }

    pub fn stage(&self) -> WorkflowStage {
        self.stage
    }

    pub fn submission(&self) -> &SubmissionState {
        &self.submission
    }

    pub fn can_go_next(&self) -> bool {
        self.stage.index() + 1 < WorkflowStage::ALL.len()
    }

    pub fn can_go_previous(&self) -> bool {
        self.stage.index() > 0
    }

    /// Advance one stage; no-op at the end
    pub fn next_tab(&mut self) {
        if self.can_go_next() {
            self.stage = WorkflowStage::ALL[self.stage.index() + 1];
        }
    }

    /// Retreat one stage; no-op at the start
    pub fn previous_tab(&mut self) {
        if self.can_go_previous() {
            self.stage = WorkflowStage::ALL[self.stage.index() - 1];
        }
    }

    /// Whether the confirm control is enabled: confirmation stage, and
    /// no submission already in flight.
    pub fn can_submit(&self) -> bool {
        self.stage == WorkflowStage::Confirmation
            && !matches!(self.submission, SubmissionState::Creating)
    }

    /// Run the submission from the confirmation stage. Retrying from an
    /// error re-enters `Creating`; calls outside the confirmation stage
    /// or while already creating are no-ops.
    pub async fn submit(&mut self, draft: &mut DraftOrder, backend: &impl OrderBackend) {
        if !self.can_submit() {
            return;
        }
        self.submission = SubmissionState::Creating;
        match draft.submit(backend).await {
            Some(order) => self.submission = SubmissionState::Success(order),
            None => {
                let message = draft
                    .error()
                    .unwrap_or("Une erreur est survenue")
                    .to_string();
                self.submission = SubmissionState::Error(message);
            }
        }
    }

    /// "Terminer" on the success screen: clear the draft and reset the
    /// wizard for the next order.
    pub fn finish(&mut self, draft: &mut DraftOrder) {
        draft.clear();
        self.stage = WorkflowStage::Selection;
        self.submission = SubmissionState::Idle;
    }
}
