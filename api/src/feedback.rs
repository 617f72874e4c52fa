//! Patient testimonial submission.
//!
//! Submissions are stored by the service in a disabled state until a member of
//! staff approves them, so the payload always carries `status: "disable"`.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

pub const MAX_NAME_CHARS: usize = 100;
pub const MAX_TITLE_CHARS: usize = 200;
pub const MAX_DESCRIPTION_CHARS: usize = 1000;
pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Title,
    Description,
    Rating,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Name => "name",
            Field::Title => "title",
            Field::Description => "description",
            Field::Rating => "rating",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    Missing { field: Field },

    #[error("{field} must be at most {max} characters (got {len})")]
    TooLong { field: Field, max: usize, len: usize },

    #[error("rating must be between 1 and 5 (got {0})")]
    Rating(u8),
}

impl ValidationError {
    pub fn field(&self) -> Field {
        match self {
            ValidationError::Missing { field } | ValidationError::TooLong { field, .. } => *field,
            ValidationError::Rating(_) => Field::Rating,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ModerationStatus {
    Disable,
}

/// A validated testimonial ready to POST.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedbackSubmission {
    username: String,
    rating: u8,
    title: String,
    description: String,
    status: ModerationStatus,
}

impl FeedbackSubmission {
    /// Trims and validates the draft fields. The first violation wins; use
    /// [`check`] to collect all of them.
    pub fn new(
        username: &str,
        rating: u8,
        title: &str,
        description: &str,
    ) -> Result<Self, ValidationError> {
        if let Some(first) = check(username, rating, title, description).into_iter().next() {
            return Err(first);
        }
        Ok(Self {
            username: username.trim().to_string(),
            rating,
            title: title.trim().to_string(),
            description: description.trim().to_string(),
            status: ModerationStatus::Disable,
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn rating(&self) -> u8 {
        self.rating
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Every rule the draft breaks, in field order.
pub fn check(username: &str, rating: u8, title: &str, description: &str) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    for (field, value, max) in [
        (Field::Name, username, MAX_NAME_CHARS),
        (Field::Title, title, MAX_TITLE_CHARS),
        (Field::Description, description, MAX_DESCRIPTION_CHARS),
    ] {
        let value = value.trim();
        let len = value.chars().count();
        if len == 0 {
            errors.push(ValidationError::Missing { field });
        } else if len > max {
            errors.push(ValidationError::TooLong { field, max, len });
        }
    }
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        errors.push(ValidationError::Rating(rating));
    }
    errors
}
