use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::endpoint::Endpoint;
use crate::error::ApiError;

/// Response wrapper shared by every read endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned"))]
pub struct Envelope<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default = "Option::default")]
    pub data: Option<Payload<T>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// `data` is a list for collections and a bare object for singletons
/// (clinic info). Both normalise to a `Vec`.
///
/// List entries decode one at a time; an entry that does not fit the record
/// shape is logged and skipped so the rest of the list still renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Payload<T> {
    Many(Vec<T>),
    One(T),
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Payload<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Array(entries) => {
                let total = entries.len();
                let items: Vec<T> = entries
                    .into_iter()
                    .enumerate()
                    .filter_map(|(index, entry)| match serde_json::from_value(entry) {
                        Ok(item) => Some(item),
                        Err(err) => {
                            warn!(index, %err, "skipping undecodable record");
                            None
                        }
                    })
                    .collect();
                if items.len() < total {
                    warn!(kept = items.len(), total, "dropped records from response");
                }
                Ok(Payload::Many(items))
            }
            object @ Value::Object(_) => serde_json::from_value(object)
                .map(Payload::One)
                .map_err(D::Error::custom),
            other => Err(D::Error::custom(format!(
                "expected a record or a list of records, found {other}"
            ))),
        }
    }
}

impl<T> Payload<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Payload::Many(items) => items,
            Payload::One(item) => vec![item],
        }
    }
}

impl<T> Envelope<T> {
    pub fn ok(items: Vec<T>) -> Self {
        Self {
            success: true,
            data: Some(Payload::Many(items)),
            message: None,
        }
    }

    /// Unwraps the records, folding `success: false`, missing data and an
    /// empty list into errors.
    pub fn into_items(self, endpoint: Endpoint) -> Result<Vec<T>, ApiError> {
        if !self.success {
            return Err(ApiError::Rejected {
                endpoint,
                message: self.message,
            });
        }
        let items = self.data.map(Payload::into_vec).unwrap_or_default();
        if items.is_empty() {
            return Err(ApiError::Empty { endpoint });
        }
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FailureKind;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Row {
        name: String,
    }

    fn decode(value: serde_json::Value) -> Envelope<Row> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn list_payload_unwraps() {
        let env = decode(json!({"success": true, "data": [{"name": "a"}, {"name": "b"}]}));
        let rows = env.into_items(Endpoint::Faqs).unwrap();
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn single_object_payload_becomes_one_item() {
        let env = decode(json!({"success": true, "data": {"name": "clinic"}}));
        let rows = env.into_items(Endpoint::ClinicInfo).unwrap();
        assert_eq!(rows, vec![Row { name: "clinic".into() }]);
    }

    #[test]
    fn bad_entries_are_skipped_not_fatal() {
        let env = decode(json!({
            "success": true,
            "data": [{"name": "a"}, {"name": 4}, {"title": "no name"}, {"name": "d"}]
        }));
        let rows = env.into_items(Endpoint::Faqs).unwrap();
        assert_eq!(rows, vec![Row { name: "a".into() }, Row { name: "d".into() }]);
    }

    #[test]
    fn list_of_only_bad_entries_is_empty() {
        let env = decode(json!({"success": true, "data": [{"name": false}]}));
        let err = env.into_items(Endpoint::Faqs).unwrap_err();
        assert_eq!(err.kind(), FailureKind::Empty);
    }

    #[test]
    fn scalar_data_is_a_decode_failure() {
        let env = serde_json::from_value::<Envelope<Row>>(json!({"success": true, "data": 3}));
        assert!(env.is_err());
    }

    #[test]
    fn empty_list_is_an_error() {
        let env = decode(json!({"success": true, "data": []}));
        let err = env.into_items(Endpoint::Services).unwrap_err();
        assert_eq!(err.kind(), FailureKind::Empty);
    }

    #[test]
    fn null_data_is_an_error() {
        let env = decode(json!({"success": true, "data": null}));
        assert!(env.into_items(Endpoint::Team).is_err());
    }

    #[test]
    fn unsuccessful_envelope_keeps_message() {
        let env = decode(json!({"success": false, "message": "maintenance"}));
        match env.into_items(Endpoint::Blogs) {
            Err(ApiError::Rejected { message, .. }) => {
                assert_eq!(message.as_deref(), Some("maintenance"))
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
