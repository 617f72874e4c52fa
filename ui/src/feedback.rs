//! Testimonial form state and submission.

use std::future::Future;

use api::feedback::{self, Field, MAX_RATING};
use api::{ApiError, FeedbackSubmission, ValidationError};
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackDraft {
    pub username: String,
    pub rating: u8,
    pub title: String,
    pub description: String,
}

impl Default for FeedbackDraft {
    fn default() -> Self {
        Self {
            username: String::new(),
            rating: MAX_RATING,
            title: String::new(),
            description: String::new(),
        }
    }
}

impl FeedbackDraft {
    pub fn errors(&self) -> Vec<ValidationError> {
        feedback::check(&self.username, self.rating, &self.title, &self.description)
    }

    pub fn submission(&self) -> Result<FeedbackSubmission, ValidationError> {
        FeedbackSubmission::new(&self.username, self.rating, &self.title, &self.description)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Invalid(Vec<ValidationError>),
    Submitting,
    Submitted,
    Failed(String),
}

impl SubmitState {
    pub fn error_for(&self, field: Field) -> Option<&ValidationError> {
        match self {
            SubmitState::Invalid(errors) => errors.iter().find(|e| e.field() == field),
            _ => None,
        }
    }

    pub fn is_busy(&self) -> bool {
        matches!(self, SubmitState::Submitting)
    }
}

/// Validates `draft` and, only if it passes, hands it to `send`.
///
/// With `mask_failures` a failed POST still reports `Submitted`; the failure
/// is logged either way.
pub async fn submit_draft<F, Fut>(draft: &FeedbackDraft, mask_failures: bool, send: F) -> SubmitState
where
    F: FnOnce(FeedbackSubmission) -> Fut,
    Fut: Future<Output = Result<(), ApiError>>,
{
    let errors = draft.errors();
    if !errors.is_empty() {
        return SubmitState::Invalid(errors);
    }
    let submission = match draft.submission() {
        Ok(submission) => submission,
        Err(err) => return SubmitState::Invalid(vec![err]),
    };

    match send(submission).await {
        Ok(()) => {
            info!("feedback submitted for moderation");
            SubmitState::Submitted
        }
        Err(err) => {
            warn!(
                endpoint = ?err.endpoint(),
                kind = ?err.kind(),
                error = %err,
                masked = mask_failures,
                "feedback submission failed"
            );
            if mask_failures {
                SubmitState::Submitted
            } else {
                SubmitState::Failed(err.to_string())
            }
        }
    }
}
