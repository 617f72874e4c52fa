//! Detail pages receive their record in the `data` query parameter as
//! base64url-encoded JSON, so opening one needs no extra request.

use api::records::{RawBlog, RawService};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

use crate::content::fixtures;
use crate::content::models::{BlogDetail, ServiceDetail};

#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("payload is empty")]
    Empty,

    #[error("payload is not base64url: {0}")]
    Encoding(#[from] base64::DecodeError),

    #[error("payload is not a valid record: {0}")]
    Record(#[from] serde_json::Error),
}

pub fn encode<T: Serialize>(record: &T) -> Result<String, PayloadError> {
    let json = serde_json::to_vec(record)?;
    Ok(URL_SAFE_NO_PAD.encode(json))
}

/// Padding is tolerated since some links were produced by padded encoders.
pub fn decode<T: DeserializeOwned>(data: &str) -> Result<T, PayloadError> {
    let data = data.trim().trim_end_matches('=');
    if data.is_empty() {
        return Err(PayloadError::Empty);
    }
    let bytes = URL_SAFE_NO_PAD.decode(data)?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Encoded record for a detail link; empty when there is nothing to carry.
pub fn payload_for<T: Serialize>(record: Option<&T>) -> String {
    let Some(record) = record else {
        return String::new();
    };
    encode(record).unwrap_or_else(|err| {
        warn!(%err, "could not encode detail payload");
        String::new()
    })
}

pub fn service_detail(data: &str) -> ServiceDetail {
    match decode::<RawService>(data) {
        Ok(record) => ServiceDetail::from_record(&record),
        Err(PayloadError::Empty) => fixtures::service_detail(),
        Err(err) => {
            warn!(%err, "malformed service payload, showing placeholder");
            fixtures::service_detail()
        }
    }
}

pub fn blog_detail(data: &str) -> BlogDetail {
    match decode::<RawBlog>(data) {
        Ok(record) => BlogDetail::from_record(&record),
        Err(PayloadError::Empty) => fixtures::blog_detail(),
        Err(err) => {
            warn!(%err, "malformed blog payload, showing placeholder");
            fixtures::blog_detail()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::records::RawCardInfo;

    fn whitening() -> RawService {
        RawService {
            card_info: Some(RawCardInfo {
                title: Some("Teeth Whitening".into()),
                description: Some("Brighter smile".into()),
                image: None,
            }),
            ..Default::default()
        }
    }

    #[test]
    fn payload_is_url_safe() {
        let data = encode(&whitening()).unwrap();
        assert!(data
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
        let back: RawService = decode(&data).unwrap();
        assert_eq!(back, whitening());
    }

    #[test]
    fn padded_payload_still_decodes() {
        let padded = base64::engine::general_purpose::URL_SAFE
            .encode(serde_json::to_vec(&whitening()).unwrap());
        let back: RawService = decode(&padded).unwrap();
        assert_eq!(back, whitening());
    }

    #[test]
    fn malformed_payload_falls_back_to_placeholder() {
        assert!(matches!(decode::<RawService>("%%%"), Err(PayloadError::Encoding(_))));
        let not_json = URL_SAFE_NO_PAD.encode("not json");
        assert!(matches!(decode::<RawService>(&not_json), Err(PayloadError::Record(_))));
        assert_eq!(service_detail("%%%"), fixtures::service_detail());
        assert_eq!(blog_detail(""), fixtures::blog_detail());
    }

    #[test]
    fn payload_carries_modelled_fields_only() {
        let incoming = serde_json::json!({
            "_id": "66f1",
            "id": "66f1",
            "promo": "spring",
            "cardInfo": {"title": "Teeth Whitening"}
        });
        let record: RawService = serde_json::from_value(incoming).unwrap();
        let data = payload_for(Some(&record));
        let json = String::from_utf8(URL_SAFE_NO_PAD.decode(&data).unwrap()).unwrap();
        assert!(!json.contains("promo"));
        assert_eq!(decode::<RawService>(&data).unwrap(), record);
    }

    #[test]
    fn decoded_service_fills_detail_from_card() {
        let data = payload_for(Some(&whitening()));
        let detail = service_detail(&data);
        assert_eq!(detail.title, "Teeth Whitening");
        assert_eq!(detail.summary, "Brighter smile");
        assert_eq!(payload_for::<RawService>(None), "");
    }
}
