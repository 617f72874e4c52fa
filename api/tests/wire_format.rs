//! Decodes payloads shaped like the live CMS responses.

use api::records::{media_url, RawClinicInfo, RawFeedback, RawService, RawTeamMember, RecordId};
use api::{Endpoint, Envelope, FailureKind};

const SERVICES: &str = r#"{
  "success": true,
  "data": [
    {
      "_id": "66f1c0",
      "cardInfo": {
        "title": "Teeth Whitening",
        "description": "Brighter smile in one visit.",
        "image": { "url": "https://cdn.example.com/whitening.jpg" }
      },
      "detailInfo": {
        "title": "Professional whitening",
        "preparation": ["Book a cleaning first"],
        "aftercare": ["Avoid coffee for 48 hours"],
        "videoUrl": "https://youtu.be/dQw4w9WgXcQ"
      }
    },
    { "_id": "66f1c1", "cardInfo": { "title": "Braces" } }
  ]
}"#;

#[test]
fn services_payload_decodes_with_partial_records() {
    let env: Envelope<RawService> = serde_json::from_str(SERVICES).unwrap();
    let items = env.into_items(Endpoint::Services).unwrap();
    assert_eq!(items.len(), 2);

    let card = items[1].card_info.as_ref().unwrap();
    assert_eq!(card.title.as_deref(), Some("Braces"));
    assert_eq!(media_url(&card.image), None);

    let detail = items[0].detail_info.as_ref().unwrap();
    assert_eq!(detail.aftercare.len(), 1);
}

#[test]
fn clinic_info_arrives_as_a_single_object() {
    let body = r#"{"success":true,"data":{"name":"Dr. Samiullah Dental Clinic",
        "location1":{"description":"123 Dental Street","url":"https://maps.example/1"},
        "phoneNumber":"(123) 456-7890","timings":"Mon-Fri 9-6\nSat 10-2"}}"#;
    let env: Envelope<RawClinicInfo> = serde_json::from_str(body).unwrap();
    let info = env.into_items(Endpoint::ClinicInfo).unwrap().remove(0);
    assert_eq!(info.phone_number.as_deref(), Some("(123) 456-7890"));
    assert!(info.location2.is_none());
}

#[test]
fn empty_team_list_is_classified_as_empty() {
    let env: Envelope<RawTeamMember> =
        serde_json::from_str(r#"{"success":true,"data":[]}"#).unwrap();
    let err = env.into_items(Endpoint::Team).unwrap_err();
    assert_eq!(err.kind(), FailureKind::Empty);
}

#[test]
fn team_records_with_virtual_ids_all_render() {
    let body = r#"{"success":true,"data":[
        {"_id":"65ab","id":"65ab","name":"Dr. A","position":"Lead Dentist"},
        {"_id":"65ac","id":"65ac","name":"Dr. B"}
    ]}"#;
    let env: Envelope<RawTeamMember> = serde_json::from_str(body).unwrap();
    let team = env.into_items(Endpoint::Team).unwrap();
    assert_eq!(team.len(), 2);
    assert_eq!(team[1].record_id(), Some(&RecordId::Text("65ac".into())));
}

#[test]
fn testimonials_survive_loose_ratings_and_a_broken_entry() {
    let body = r#"{"success":true,"data":[
        {"_id":"1","username":"Ana","rating":4.5},
        {"_id":"2","username":"Ben","rating":"5"},
        {"_id":"3","username":["not","text"]},
        {"_id":"4","name":"Cleo"}
    ]}"#;
    let env: Envelope<RawFeedback> = serde_json::from_str(body).unwrap();
    let reviews = env.into_items(Endpoint::Feedback).unwrap();
    let ratings: Vec<Option<i64>> = reviews.iter().map(|r| r.rating).collect();
    assert_eq!(ratings, vec![Some(5), Some(5), None]);
    assert_eq!(reviews[2].name.as_deref(), Some("Cleo"));
}
