use std::time::Duration;

use leptos::logging::log;

use crate::error::ApiError;
use crate::models::{RestaurantSummary, ReviewDraft, ReviewSubmission};

/// How long the success message stays up before the modal closes itself.
pub const SUCCESS_DISPLAY_DELAY: Duration = Duration::from_millis(800);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Editing,
    Submitting,
    Success,
}

/// What the modal reports when it closes. `submitted` is set only after a successful write.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CloseOutcome {
    pub submitted: bool,
    pub target_id: Option<String>,
}

/// Review modal state machine.
///
/// `Idle → Editing → Submitting → Success`, with a failed write falling back to `Editing`
/// (draft kept, error shown). Validation happens synchronously inside
/// [`SubmissionWorkflow::begin_submit`], so a draft without a rating never leaves `Editing`.
#[derive(Debug, Clone, Default)]
pub struct SubmissionWorkflow {
    phase: SubmissionPhase,
    restaurant: Option<RestaurantSummary>,
    draft: ReviewDraft,
    error: Option<String>,
}

impl SubmissionWorkflow {
    pub fn open(&mut self, restaurant: RestaurantSummary) {
        if self.phase == SubmissionPhase::Submitting {
            return;
        }
        *self = Self {
            phase: SubmissionPhase::Editing,
            restaurant: Some(restaurant),
            ..Self::default()
        };
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    pub fn is_open(&self) -> bool {
        self.phase != SubmissionPhase::Idle
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SubmissionPhase::Submitting
    }

    pub fn is_success(&self) -> bool {
        self.phase == SubmissionPhase::Success
    }

    pub fn restaurant(&self) -> Option<&RestaurantSummary> {
        self.restaurant.as_ref()
    }

    pub fn draft(&self) -> &ReviewDraft {
        &self.draft
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Applies `edit` to the draft while the form is editable.
    pub fn edit(&mut self, edit: impl FnOnce(&mut ReviewDraft)) {
        if self.phase == SubmissionPhase::Editing {
            edit(&mut self.draft);
        }
    }

    pub fn can_submit(&self) -> bool {
        self.phase == SubmissionPhase::Editing
    }

    /// Validates the draft and, when it passes, moves to `Submitting`.
    pub fn begin_submit(&mut self) -> Result<ReviewSubmission, ApiError> {
        let Some(restaurant) = self.restaurant.as_ref().filter(|_| self.can_submit()) else {
            return Err(ApiError::Validation("No review is being edited".to_string()));
        };
        self.error = None;

        match self.draft.to_submission(restaurant) {
            Ok(submission) => {
                self.phase = SubmissionPhase::Submitting;
                Ok(submission)
            }
            Err(err) => {
                self.error = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// Returns whether the review was accepted.
    pub fn finish_submit(&mut self, result: Result<(), ApiError>) -> bool {
        if self.phase != SubmissionPhase::Submitting {
            return false;
        }

        match result {
            Ok(()) => {
                log!(
                    "[SUBMIT] Review stored for {}",
                    self.restaurant.as_ref().map(|r| r.id.as_str()).unwrap_or_default()
                );
                self.phase = SubmissionPhase::Success;
                true
            }
            Err(err) => {
                self.phase = SubmissionPhase::Editing;
                self.error = Some(err.to_string());
                false
            }
        }
    }

    /// Discards the draft. Refused (`None`) while a submission is in flight.
    pub fn close(&mut self) -> Option<CloseOutcome> {
        if self.phase == SubmissionPhase::Submitting {
            return None;
        }

        let submitted = self.phase == SubmissionPhase::Success;
        let target_id = self.restaurant.take().map(|restaurant| restaurant.id);
        *self = Self::default();

        Some(CloseOutcome { submitted, target_id })
    }

    /// Closing once the success message has been shown. A no-op unless the workflow is still
    /// in `Success`, so a timer that outlives its dialog cannot close a newer one.
    pub fn close_after_success(&mut self) -> Option<CloseOutcome> {
        if self.phase != SubmissionPhase::Success {
            return None;
        }
        self.close()
    }
}
