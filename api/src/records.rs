//! Wire records as the CMS stores them. Field names follow the service's
//! camelCase JSON; every field is optional because editors routinely leave
//! sub-fields (images especially) blank.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Record identifiers arrive either as Mongo-style strings or small integers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(u64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{n}"),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

/// Records may carry the Mongo `_id`, a plain `id`, or both (virtuals on).
/// The object id wins when both are present.
macro_rules! record_id {
    ($($record:ty),+ $(,)?) => {$(
        impl $record {
            pub fn record_id(&self) -> Option<&RecordId> {
                self.object_id.as_ref().or(self.id.as_ref())
            }
        }
    )+};
}

record_id!(RawFeature, RawTeamMember, RawFeedback, RawService, RawBlog, RawResult);

/// Ratings have been stored as integers, fractions and numeric strings.
/// Fractions round to the nearest star; anything else reads as unrated.
fn lenient_rating<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let stars = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(stars.filter(|f| f.is_finite()).map(|f| f.round() as i64))
}

/// Returns the trimmed value when it carries any text.
pub fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MediaRef {
    pub url: Option<String>,
    pub alt: Option<String>,
}

impl MediaRef {
    pub fn url(&self) -> Option<&str> {
        non_empty(&self.url)
    }
}

/// Url of an optional media reference, if it has one.
pub fn media_url(media: &Option<MediaRef>) -> Option<&str> {
    media.as_ref().and_then(MediaRef::url)
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawHeroImage {
    pub title: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
    pub image: Option<MediaRef>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawHeroVideo {
    pub title: Option<String>,
    pub description: Option<String>,
    pub video: Option<MediaRef>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawLocation {
    pub description: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawSocials {
    pub facebook: Option<String>,
    pub instagram: Option<String>,
    pub youtube: Option<String>,
    pub twitter: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawStat {
    pub label: Option<String>,
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawClinicInfo {
    pub name: Option<String>,
    pub location1: Option<RawLocation>,
    pub location2: Option<RawLocation>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub timings: Option<String>,
    pub socials: Option<RawSocials>,
    pub stats: Vec<RawStat>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawFeature {
    #[serde(rename = "_id")]
    pub object_id: Option<RecordId>,
    pub id: Option<RecordId>,
    pub feature_name: Option<String>,
    pub feature_description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawTeamMember {
    #[serde(rename = "_id")]
    pub object_id: Option<RecordId>,
    pub id: Option<RecordId>,
    pub name: Option<String>,
    pub position: Option<String>,
    pub specialty: Option<String>,
    pub image: Option<MediaRef>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawTeamPicture {
    pub image: Option<MediaRef>,
    pub caption: Option<String>,
}

/// Testimonials have been stored under two field vocabularies over time
/// (`username`/`description` from the site form, `name`/`comment` from older
/// imports); both are accepted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawFeedback {
    #[serde(rename = "_id")]
    pub object_id: Option<RecordId>,
    pub id: Option<RecordId>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub comment: Option<String>,
    pub username: Option<String>,
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient_rating")]
    pub rating: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawFaq {
    pub question: Option<String>,
    pub answer: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawPartner {
    pub partner_name: Option<String>,
    pub image: Option<MediaRef>,
}

/// Short form shown on listing cards (services and blogs share it).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawCardInfo {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<MediaRef>,
}

/// Long form rendered on the services detail page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawServiceDetail {
    pub title: Option<String>,
    pub summary: Option<String>,
    pub body: Option<String>,
    pub image: Option<MediaRef>,
    pub preparation: Vec<String>,
    pub aftercare: Vec<String>,
    pub video_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawService {
    #[serde(rename = "_id")]
    pub object_id: Option<RecordId>,
    pub id: Option<RecordId>,
    pub card_info: Option<RawCardInfo>,
    pub detail_info: Option<RawServiceDetail>,
}

/// Long form rendered on the blog detail page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawBlogDetail {
    pub title: Option<String>,
    pub author: Option<String>,
    pub published_at: Option<String>,
    pub body: Option<String>,
    pub tips: Vec<String>,
    pub image: Option<MediaRef>,
    pub video_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawBlog {
    #[serde(rename = "_id")]
    pub object_id: Option<RecordId>,
    pub id: Option<RecordId>,
    pub card_info: Option<RawCardInfo>,
    pub detail_info: Option<RawBlogDetail>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawResult {
    #[serde(rename = "_id")]
    pub object_id: Option<RecordId>,
    pub id: Option<RecordId>,
    pub before_image: Option<MediaRef>,
    pub after_image: Option<MediaRef>,
    pub treatment: Option<String>,
    pub improvement: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn blank_media_url_reads_as_missing() {
        let media = MediaRef {
            url: Some("   ".into()),
            alt: None,
        };
        assert_eq!(media.url(), None);
        assert_eq!(media_url(&None), None);
    }

    #[test]
    fn feedback_accepts_both_vocabularies() {
        let legacy: RawFeedback =
            serde_json::from_value(json!({"id": 4, "name": "Ana", "comment": "Great"})).unwrap();
        assert_eq!(legacy.id, Some(RecordId::Number(4)));
        assert_eq!(legacy.name.as_deref(), Some("Ana"));

        let current: RawFeedback = serde_json::from_value(
            json!({"_id": "65ab", "username": "Ana", "description": "Great"}),
        )
        .unwrap();
        assert_eq!(current.object_id, Some(RecordId::Text("65ab".into())));
    }

    #[test]
    fn records_with_both_id_keys_decode() {
        let member: RawTeamMember =
            serde_json::from_value(json!({"_id": "65ab", "id": "65ab", "name": "Dr. A"})).unwrap();
        assert_eq!(member.record_id(), Some(&RecordId::Text("65ab".into())));

        let service: RawService =
            serde_json::from_value(json!({"id": 7, "cardInfo": {"title": "Braces"}})).unwrap();
        assert_eq!(service.record_id(), Some(&RecordId::Number(7)));
    }

    #[test]
    fn rating_accepts_fractions_and_numeric_strings() {
        let rating = |v: serde_json::Value| {
            serde_json::from_value::<RawFeedback>(json!({ "rating": v }))
                .unwrap()
                .rating
        };
        assert_eq!(rating(json!(4)), Some(4));
        assert_eq!(rating(json!(4.5)), Some(5));
        assert_eq!(rating(json!("5")), Some(5));
        assert_eq!(rating(json!(" 3 ")), Some(3));
        assert_eq!(rating(json!("great")), None);
        assert_eq!(rating(json!(null)), None);
        assert_eq!(RawFeedback::default().rating, None);
    }

    #[test]
    fn service_record_roundtrips_through_json() {
        let raw: RawService = serde_json::from_value(json!({
            "_id": "svc-1",
            "cardInfo": {"title": "Whitening", "image": {"url": "/w.jpg"}},
            "detailInfo": {"preparation": ["Brush first"]}
        }))
        .unwrap();
        let back: RawService =
            serde_json::from_value(serde_json::to_value(&raw).unwrap()).unwrap();
        assert_eq!(raw, back);
    }
}
