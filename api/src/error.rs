use thiserror::Error;

use crate::endpoint::Endpoint;
use crate::feedback::ValidationError;

/// Everything that can go wrong between the site and the content service.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to {endpoint} failed: {source}")]
    Transport {
        endpoint: Endpoint,
        #[source]
        source: reqwest::Error,
    },

    #[error("{endpoint} responded with HTTP {status}")]
    Status { endpoint: Endpoint, status: u16 },

    #[error("could not decode {endpoint} response: {reason}")]
    Decode { endpoint: Endpoint, reason: String },

    #[error("{endpoint} reported failure: {}", .message.as_deref().unwrap_or("no message"))]
    Rejected {
        endpoint: Endpoint,
        message: Option<String>,
    },

    #[error("{endpoint} returned no data")]
    Empty { endpoint: Endpoint },

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// Coarse classification used for diagnostics. The content loader treats all
/// three the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Connectivity, HTTP status or an undecodable body.
    Network,
    /// The service answered but flagged `success: false`.
    Envelope,
    /// Well-formed, successful, but nothing to show.
    Empty,
    /// Rejected locally before any request was made.
    Validation,
}

impl ApiError {
    pub fn kind(&self) -> FailureKind {
        match self {
            ApiError::Transport { .. } | ApiError::Status { .. } | ApiError::Decode { .. } => {
                FailureKind::Network
            }
            ApiError::Rejected { .. } => FailureKind::Envelope,
            ApiError::Empty { .. } => FailureKind::Empty,
            ApiError::Invalid(_) => FailureKind::Validation,
        }
    }

    pub fn endpoint(&self) -> Option<Endpoint> {
        match self {
            ApiError::Transport { endpoint, .. }
            | ApiError::Status { endpoint, .. }
            | ApiError::Decode { endpoint, .. }
            | ApiError::Rejected { endpoint, .. }
            | ApiError::Empty { endpoint } => Some(*endpoint),
            ApiError::Invalid(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_message_falls_back_to_placeholder() {
        let err = ApiError::Rejected {
            endpoint: Endpoint::Faqs,
            message: None,
        };
        assert_eq!(err.to_string(), "/api/faqs reported failure: no message");
        assert_eq!(err.kind(), FailureKind::Envelope);
    }

    #[test]
    fn status_counts_as_network_failure() {
        let err = ApiError::Status {
            endpoint: Endpoint::Team,
            status: 503,
        };
        assert_eq!(err.kind(), FailureKind::Network);
        assert_eq!(err.endpoint(), Some(Endpoint::Team));
    }
}
