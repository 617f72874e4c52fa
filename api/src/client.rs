use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::endpoint::Endpoint;
use crate::envelope::Envelope;
use crate::error::ApiError;
use crate::feedback::FeedbackSubmission;

/// Thin wrapper over `reqwest` bound to one content service.
///
/// One request per call; nothing is retried or cached here.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url_for(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }

    /// GETs the endpoint and decodes the envelope without judging it.
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
    ) -> Result<Envelope<T>, ApiError> {
        let url = self.url_for(endpoint);
        debug!(%url, "requesting content");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|source| ApiError::Transport { endpoint, source })?;
        decode_envelope(endpoint, response).await
    }

    /// GETs the endpoint and returns its non-empty record list.
    pub async fn fetch_list<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
    ) -> Result<Vec<T>, ApiError> {
        self.fetch(endpoint).await?.into_items(endpoint)
    }

    pub async fn submit_feedback(&self, submission: &FeedbackSubmission) -> Result<(), ApiError> {
        let endpoint = Endpoint::Feedback;
        let url = self.url_for(endpoint);
        debug!(%url, rating = submission.rating(), "submitting feedback");

        let response = self
            .http
            .post(&url)
            .json(submission)
            .send()
            .await
            .map_err(|source| ApiError::Transport { endpoint, source })?;
        let envelope: Envelope<serde_json::Value> = decode_envelope(endpoint, response).await?;
        if envelope.success {
            Ok(())
        } else {
            Err(ApiError::Rejected {
                endpoint,
                message: envelope.message,
            })
        }
    }

    /// Probes the liveness endpoint; any 2xx counts as online.
    pub async fn check_connection(&self) -> Result<(), ApiError> {
        let endpoint = Endpoint::TestConnection;
        let response = self
            .http
            .get(self.url_for(endpoint))
            .send()
            .await
            .map_err(|source| ApiError::Transport { endpoint, source })?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ApiError::Status {
                endpoint,
                status: status.as_u16(),
            })
        }
    }
}

async fn decode_envelope<T: DeserializeOwned>(
    endpoint: Endpoint,
    response: reqwest::Response,
) -> Result<Envelope<T>, ApiError> {
    let status = response.status();
    if !status.is_success() {
        warn!(%endpoint, status = status.as_u16(), "content service returned an error status");
        return Err(ApiError::Status {
            endpoint,
            status: status.as_u16(),
        });
    }
    let body = response
        .text()
        .await
        .map_err(|source| ApiError::Transport { endpoint, source })?;
    parse_envelope(endpoint, &body)
}

pub(crate) fn parse_envelope<T: DeserializeOwned>(
    endpoint: Endpoint,
    body: &str,
) -> Result<Envelope<T>, ApiError> {
    serde_json::from_str(body).map_err(|err| ApiError::Decode {
        endpoint,
        reason: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FailureKind;
    use crate::records::RawFaq;

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = ApiClient::new("https://cms.example.com/");
        assert_eq!(
            client.url_for(Endpoint::Services),
            "https://cms.example.com/api/services"
        );
    }

    #[test]
    fn malformed_body_is_a_decode_error() {
        let err = parse_envelope::<RawFaq>(Endpoint::Faqs, "<html>502</html>").unwrap_err();
        assert_eq!(err.kind(), FailureKind::Network);
        assert!(matches!(err, ApiError::Decode { .. }));
    }

    #[test]
    fn envelope_parses_from_text() {
        let env = parse_envelope::<RawFaq>(
            Endpoint::Faqs,
            r#"{"success":true,"data":[{"question":"Q","answer":"A"}]}"#,
        )
        .unwrap();
        assert_eq!(env.into_items(Endpoint::Faqs).unwrap().len(), 1);
    }
}
