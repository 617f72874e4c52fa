//! View-models the sections render, and the rules that map CMS records onto
//! them. Blank or missing fields fall back to per-field defaults so a half
//! filled record still produces a presentable card.

use api::records::{
    media_url, non_empty, RawBlog, RawClinicInfo, RawFaq, RawFeature, RawFeedback,
    RawHeroImage, RawHeroVideo, RawPartner, RawResult, RawService, RawTeamMember,
    RawTeamPicture,
};
use api::Endpoint;

use super::fixtures;
use super::SectionContent;
use crate::video;

pub const MAX_STARS: u8 = 5;
pub const DEFAULT_PORTRAIT: &str = "/dr_sami.jpg";
pub const DEFAULT_SERVICE_IMAGE: &str = "/services/whitening.jpg";
pub const DEFAULT_PARTNER_LOGO: &str = "/partners/p1.jpg";
pub const DEFAULT_BLOG_IMAGE: &str = "/blogs/b1.jpg";
pub const DEFAULT_TEAM_PHOTO: &str = "/team/group.jpg";

fn text_or(value: &Option<String>, default: &str) -> String {
    non_empty(value).unwrap_or(default).to_string()
}

fn text(value: &Option<String>) -> String {
    text_or(value, "")
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeroSlide {
    pub image_url: String,
    pub title: String,
    pub title_link: String,
    pub description: String,
}

impl SectionContent for HeroSlide {
    type Raw = RawHeroImage;
    const ENDPOINT: Endpoint = Endpoint::HeroImages;

    fn fallback() -> Vec<Self> {
        fixtures::hero_slides()
    }

    /// Missing fields borrow from the fixture slide in the same position.
    fn from_raw(index: usize, raw: RawHeroImage) -> Option<Self> {
        let defaults = fixtures::hero_slides();
        let base = &defaults[index % defaults.len()];
        Some(HeroSlide {
            image_url: media_url(&raw.image).unwrap_or(&base.image_url).to_string(),
            title: text_or(&raw.title, &base.title),
            title_link: text_or(&raw.link, &base.title_link),
            description: text_or(&raw.description, &base.description),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeroVideo {
    pub mobile_url: String,
    pub desktop_url: String,
    pub title: String,
    pub title_link: String,
    pub description: String,
    pub button_text: String,
    pub button_link: String,
}

impl SectionContent for HeroVideo {
    type Raw = RawHeroVideo;
    const ENDPOINT: Endpoint = Endpoint::HeroVideos;

    fn fallback() -> Vec<Self> {
        vec![fixtures::hero_video()]
    }

    fn from_raw(index: usize, raw: RawHeroVideo) -> Option<Self> {
        if index > 0 {
            return None;
        }
        let base = fixtures::hero_video();
        let url = media_url(&raw.video);
        Some(HeroVideo {
            mobile_url: url.unwrap_or(&base.mobile_url).to_string(),
            desktop_url: url.unwrap_or(&base.desktop_url).to_string(),
            title: text_or(&raw.title, &base.title),
            description: text_or(&raw.description, &base.description),
            ..base
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub address: String,
    pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Network {
    Facebook,
    Instagram,
    Youtube,
    Twitter,
}

impl Network {
    pub fn label(self) -> &'static str {
        match self {
            Network::Facebook => "Facebook",
            Network::Instagram => "Instagram",
            Network::Youtube => "YouTube",
            Network::Twitter => "Twitter",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SocialLink {
    pub network: Network,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClinicInfo {
    pub name: String,
    pub locations: Vec<Location>,
    pub phone: String,
    pub email: String,
    pub timings: String,
    pub socials: Vec<SocialLink>,
    pub stats: Vec<Stat>,
}

impl SectionContent for ClinicInfo {
    type Raw = RawClinicInfo;
    const ENDPOINT: Endpoint = Endpoint::ClinicInfo;

    fn fallback() -> Vec<Self> {
        vec![fixtures::clinic_info()]
    }

    fn from_raw(index: usize, raw: RawClinicInfo) -> Option<Self> {
        if index > 0 {
            return None;
        }
        let locations = [raw.location1, raw.location2]
            .into_iter()
            .flatten()
            .map(|loc| Location {
                address: text(&loc.description),
                url: text(&loc.url),
            })
            .filter(|loc| !loc.address.is_empty())
            .collect();

        let socials = raw
            .socials
            .map(|s| {
                [
                    (Network::Facebook, s.facebook),
                    (Network::Instagram, s.instagram),
                    (Network::Youtube, s.youtube),
                    (Network::Twitter, s.twitter),
                ]
                .into_iter()
                .filter_map(|(network, url)| {
                    non_empty(&url).map(|url| SocialLink {
                        network,
                        url: url.to_string(),
                    })
                })
                .collect()
            })
            .unwrap_or_default();

        let stats = raw
            .stats
            .iter()
            .filter_map(|stat| {
                Some(Stat {
                    value: non_empty(&stat.value)?.to_string(),
                    label: text(&stat.label),
                })
            })
            .collect();

        Some(ClinicInfo {
            name: text(&raw.name),
            locations,
            phone: text(&raw.phone_number),
            email: text(&raw.email),
            timings: text(&raw.timings),
            socials,
            stats,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub id: String,
    pub name: String,
    pub description: String,
}

impl SectionContent for Feature {
    type Raw = RawFeature;
    const ENDPOINT: Endpoint = Endpoint::Features;

    fn fallback() -> Vec<Self> {
        fixtures::features()
    }

    fn from_raw(index: usize, raw: RawFeature) -> Option<Self> {
        let name = non_empty(&raw.feature_name)?.to_string();
        Some(Feature {
            id: raw
                .record_id()
                .map(|id| id.to_string())
                .unwrap_or_else(|| (index + 1).to_string()),
            name,
            description: text(&raw.feature_description),
        })
    }
}

/// Why-choose-us tiles; these are static copy with no backing endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct Highlight {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub position: String,
    pub specialty: String,
    pub image: String,
}

impl SectionContent for TeamMember {
    type Raw = RawTeamMember;
    const ENDPOINT: Endpoint = Endpoint::Team;

    fn fallback() -> Vec<Self> {
        fixtures::team()
    }

    fn from_raw(index: usize, raw: RawTeamMember) -> Option<Self> {
        Some(TeamMember {
            id: raw
                .record_id()
                .map(|id| id.to_string())
                .unwrap_or_else(|| (index + 1).to_string()),
            name: text_or(&raw.name, "Team Member"),
            position: text(&raw.position),
            specialty: text(&raw.specialty),
            image: media_url(&raw.image).unwrap_or(DEFAULT_PORTRAIT).to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TeamPicture {
    pub image: String,
    pub caption: String,
}

impl SectionContent for TeamPicture {
    type Raw = RawTeamPicture;
    const ENDPOINT: Endpoint = Endpoint::TeamPictures;

    fn fallback() -> Vec<Self> {
        vec![fixtures::team_picture()]
    }

    fn from_raw(index: usize, raw: RawTeamPicture) -> Option<Self> {
        if index > 0 {
            return None;
        }
        Some(TeamPicture {
            image: media_url(&raw.image).unwrap_or(DEFAULT_TEAM_PHOTO).to_string(),
            caption: text(&raw.caption),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Testimonial {
    pub id: String,
    pub title: String,
    pub text: String,
    pub customer: String,
    pub rating: u8,
}

/// Missing ratings count as a full five; anything else lands in 1..=5.
pub fn clamp_rating(rating: Option<i64>) -> u8 {
    match rating {
        None => MAX_STARS,
        Some(r) => r.clamp(1, i64::from(MAX_STARS)) as u8,
    }
}

impl SectionContent for Testimonial {
    type Raw = RawFeedback;
    const ENDPOINT: Endpoint = Endpoint::Feedback;

    fn fallback() -> Vec<Self> {
        fixtures::testimonials()
    }

    fn from_raw(index: usize, raw: RawFeedback) -> Option<Self> {
        let id = raw
            .record_id()
            .map(|id| id.to_string())
            .unwrap_or_else(|| (index + 1).to_string());
        let body = non_empty(&raw.description)
            .or_else(|| non_empty(&raw.comment))
            .unwrap_or("Great service and professional care.");
        let customer = non_empty(&raw.username)
            .or_else(|| non_empty(&raw.name))
            .unwrap_or("CUSTOMER");
        Some(Testimonial {
            id,
            title: text_or(&raw.title, "EXCELLENT SERVICE"),
            text: body.to_string(),
            customer: customer.to_string(),
            rating: clamp_rating(raw.rating),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

impl SectionContent for Faq {
    type Raw = RawFaq;
    const ENDPOINT: Endpoint = Endpoint::Faqs;

    fn fallback() -> Vec<Self> {
        fixtures::faqs()
    }

    fn from_raw(_index: usize, raw: RawFaq) -> Option<Self> {
        Some(Faq {
            question: non_empty(&raw.question)?.to_string(),
            answer: text(&raw.answer),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Partner {
    pub id: usize,
    pub name: String,
    pub logo: String,
}

impl SectionContent for Partner {
    type Raw = RawPartner;
    const ENDPOINT: Endpoint = Endpoint::Partners;

    fn fallback() -> Vec<Self> {
        fixtures::partners()
    }

    fn from_raw(index: usize, raw: RawPartner) -> Option<Self> {
        Some(Partner {
            id: index + 1,
            name: text_or(&raw.partner_name, "Partner"),
            logo: media_url(&raw.image).unwrap_or(DEFAULT_PARTNER_LOGO).to_string(),
        })
    }
}

/// A service card. `detail` keeps the whole record so the detail page can be
/// opened without a second fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceCard {
    pub id: usize,
    pub name: String,
    pub image: String,
    pub description: String,
    pub detail: Option<RawService>,
}

impl SectionContent for ServiceCard {
    type Raw = RawService;
    const ENDPOINT: Endpoint = Endpoint::Services;

    fn fallback() -> Vec<Self> {
        fixtures::services()
    }

    fn from_raw(index: usize, raw: RawService) -> Option<Self> {
        let card = raw.card_info.clone().unwrap_or_default();
        Some(ServiceCard {
            id: index + 1,
            name: text_or(&card.title, "Dental Service"),
            image: media_url(&card.image)
                .unwrap_or(DEFAULT_SERVICE_IMAGE)
                .to_string(),
            description: text_or(&card.description, "Professional dental care service."),
            detail: Some(raw),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BlogCard {
    pub id: usize,
    pub title: String,
    pub excerpt: String,
    pub image: String,
    pub detail: Option<RawBlog>,
}

impl SectionContent for BlogCard {
    type Raw = RawBlog;
    const ENDPOINT: Endpoint = Endpoint::Blogs;

    fn fallback() -> Vec<Self> {
        fixtures::blogs()
    }

    fn from_raw(index: usize, raw: RawBlog) -> Option<Self> {
        let card = raw.card_info.clone().unwrap_or_default();
        Some(BlogCard {
            id: index + 1,
            title: text_or(&card.title, "Dental Insights"),
            excerpt: text(&card.description),
            image: media_url(&card.image).unwrap_or(DEFAULT_BLOG_IMAGE).to_string(),
            detail: Some(raw),
        })
    }
}

/// Colour band for the improvement caption under a before/after pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Moderate,
    High,
    Strong,
}

impl Tone {
    /// Reads the leading shade count ("8+ Shade Jump" → 8).
    pub fn for_improvement(improvement: &str) -> Tone {
        let shades: u32 = improvement
            .trim()
            .chars()
            .take_while(char::is_ascii_digit)
            .collect::<String>()
            .parse()
            .unwrap_or(0);
        if shades >= 10 {
            Tone::Strong
        } else if shades >= 8 {
            Tone::High
        } else {
            Tone::Moderate
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Tone::Moderate => "tone-moderate",
            Tone::High => "tone-high",
            Tone::Strong => "tone-strong",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultPair {
    pub id: String,
    pub before_image: String,
    pub after_image: String,
    pub treatment: String,
    pub improvement: String,
    pub tone: Tone,
}

impl SectionContent for ResultPair {
    type Raw = RawResult;
    const ENDPOINT: Endpoint = Endpoint::Results;

    fn fallback() -> Vec<Self> {
        fixtures::results()
    }

    fn from_raw(index: usize, raw: RawResult) -> Option<Self> {
        let defaults = fixtures::results();
        let base = &defaults[index % defaults.len()];
        let improvement = text_or(&raw.improvement, &base.improvement);
        Some(ResultPair {
            id: raw
                .record_id()
                .map(|id| id.to_string())
                .unwrap_or_else(|| (index + 1).to_string()),
            before_image: media_url(&raw.before_image)
                .unwrap_or(&base.before_image)
                .to_string(),
            after_image: media_url(&raw.after_image)
                .unwrap_or(&base.after_image)
                .to_string(),
            treatment: text_or(&raw.treatment, &base.treatment),
            tone: Tone::for_improvement(&improvement),
            improvement,
        })
    }
}

/// Long-form service page content.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceDetail {
    pub title: String,
    pub summary: String,
    pub body: String,
    pub image: String,
    pub preparation: Vec<String>,
    pub aftercare: Vec<String>,
    pub video_id: Option<String>,
}

impl ServiceDetail {
    /// Fills the detail page from a service record, topping up blank fields
    /// from the card and then from the placeholder copy.
    pub fn from_record(raw: &RawService) -> ServiceDetail {
        let base = fixtures::service_detail();
        let card = raw.card_info.clone().unwrap_or_default();
        let detail = raw.detail_info.clone().unwrap_or_default();
        let title = non_empty(&detail.title)
            .or_else(|| non_empty(&card.title))
            .unwrap_or(&base.title)
            .to_string();
        let summary = non_empty(&detail.summary)
            .or_else(|| non_empty(&card.description))
            .unwrap_or(&base.summary)
            .to_string();
        let image = media_url(&detail.image)
            .or_else(|| media_url(&card.image))
            .unwrap_or(&base.image)
            .to_string();
        ServiceDetail {
            title,
            summary,
            body: text_or(&detail.body, &base.body),
            image,
            preparation: non_empty_list(detail.preparation).unwrap_or(base.preparation),
            aftercare: non_empty_list(detail.aftercare).unwrap_or(base.aftercare),
            video_id: non_empty(&detail.video_url)
                .and_then(video::parse_video_id)
                .or(base.video_id),
        }
    }
}

/// Long-form blog post content.
#[derive(Debug, Clone, PartialEq)]
pub struct BlogDetail {
    pub title: String,
    pub author: Option<String>,
    pub published_at: Option<String>,
    pub body: String,
    pub tips: Vec<String>,
    pub image: String,
    pub video_id: Option<String>,
}

impl BlogDetail {
    pub fn from_record(raw: &RawBlog) -> BlogDetail {
        let base = fixtures::blog_detail();
        let card = raw.card_info.clone().unwrap_or_default();
        let detail = raw.detail_info.clone().unwrap_or_default();
        let title = non_empty(&detail.title)
            .or_else(|| non_empty(&card.title))
            .unwrap_or(&base.title)
            .to_string();
        let body = non_empty(&detail.body)
            .or_else(|| non_empty(&card.description))
            .unwrap_or(&base.body)
            .to_string();
        BlogDetail {
            title,
            author: non_empty(&detail.author).map(str::to_string),
            published_at: non_empty(&detail.published_at).map(str::to_string),
            body,
            tips: non_empty_list(detail.tips).unwrap_or(base.tips),
            image: media_url(&detail.image)
                .or_else(|| media_url(&card.image))
                .unwrap_or(&base.image)
                .to_string(),
            video_id: non_empty(&detail.video_url)
                .and_then(video::parse_video_id)
                .or(base.video_id),
        }
    }
}

fn non_empty_list(items: Vec<String>) -> Option<Vec<String>> {
    let items: Vec<String> = items
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();
    (!items.is_empty()).then_some(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::records::{MediaRef, RawCardInfo, RawServiceDetail, RecordId};

    #[test]
    fn team_member_without_image_gets_default_portrait() {
        let raw = RawTeamMember {
            name: Some("Dr. Lena Park".into()),
            ..Default::default()
        };
        let member = TeamMember::from_raw(0, raw).unwrap();
        assert_eq!(member.image, DEFAULT_PORTRAIT);
        assert_eq!(member.id, "1");
        assert_eq!(member.position, "");
    }

    #[test]
    fn testimonial_prefers_current_vocabulary_and_clamps_rating() {
        let raw = RawFeedback {
            object_id: Some(RecordId::Text("65ab".into())),
            id: Some(RecordId::Number(9)),
            description: Some("Loved it".into()),
            comment: Some("older text".into()),
            name: Some("Ana".into()),
            rating: Some(9),
            ..Default::default()
        };
        let t = Testimonial::from_raw(3, raw).unwrap();
        assert_eq!(t.id, "65ab");
        assert_eq!(t.text, "Loved it");
        assert_eq!(t.customer, "Ana");
        assert_eq!(t.title, "EXCELLENT SERVICE");
        assert_eq!(t.rating, 5);
    }

    #[test]
    fn testimonial_defaults_fill_an_empty_record() {
        let t = Testimonial::from_raw(1, RawFeedback::default()).unwrap();
        assert_eq!(t.id, "2");
        assert_eq!(t.text, "Great service and professional care.");
        assert_eq!(t.customer, "CUSTOMER");
        assert_eq!(t.rating, 5);
    }

    #[test]
    fn rating_clamps_into_star_range() {
        assert_eq!(clamp_rating(Some(0)), 1);
        assert_eq!(clamp_rating(Some(-3)), 1);
        assert_eq!(clamp_rating(Some(3)), 3);
        assert_eq!(clamp_rating(None), 5);
    }

    #[test]
    fn service_card_uses_index_id_and_keeps_record() {
        let raw = RawService {
            id: Some(RecordId::Text("svc".into())),
            card_info: Some(RawCardInfo {
                title: Some("Veneers".into()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let card = ServiceCard::from_raw(4, raw.clone()).unwrap();
        assert_eq!(card.id, 5);
        assert_eq!(card.name, "Veneers");
        assert_eq!(card.image, DEFAULT_SERVICE_IMAGE);
        assert_eq!(card.description, "Professional dental care service.");
        assert_eq!(card.detail, Some(raw));
    }

    #[test]
    fn features_and_faqs_without_headline_are_skipped() {
        assert!(Feature::from_raw(0, RawFeature::default()).is_none());
        assert!(Faq::from_raw(0, RawFaq::default()).is_none());
    }

    #[test]
    fn only_first_single_record_is_used() {
        assert!(HeroVideo::from_raw(1, RawHeroVideo::default()).is_none());
        assert!(TeamPicture::from_raw(1, RawTeamPicture::default()).is_none());
        let pic = TeamPicture::from_raw(0, RawTeamPicture::default()).unwrap();
        assert_eq!(pic.image, DEFAULT_TEAM_PHOTO);
    }

    #[test]
    fn hero_video_url_feeds_both_sources() {
        let raw = RawHeroVideo {
            video: Some(MediaRef {
                url: Some("/cms/tour.mp4".into()),
                alt: None,
            }),
            ..Default::default()
        };
        let v = HeroVideo::from_raw(0, raw).unwrap();
        assert_eq!(v.mobile_url, "/cms/tour.mp4");
        assert_eq!(v.desktop_url, "/cms/tour.mp4");
        assert_eq!(v.button_text, fixtures::hero_video().button_text);
    }

    #[test]
    fn clinic_info_drops_blank_locations() {
        let raw: RawClinicInfo = serde_json::from_value(serde_json::json!({
            "name": "Clinic",
            "location1": {"description": "1 Main St", "url": "https://maps.example/1"},
            "location2": {"description": ""},
            "socials": {"instagram": "https://instagram.com/clinic"}
        }))
        .unwrap();
        let info = ClinicInfo::from_raw(0, raw).unwrap();
        assert_eq!(info.locations.len(), 1);
        assert_eq!(info.phone, "");
        assert_eq!(info.socials.len(), 1);
        assert_eq!(info.socials[0].network, Network::Instagram);
    }

    #[test]
    fn improvement_tone_follows_shade_count() {
        assert_eq!(Tone::for_improvement("4+ Shade Jump"), Tone::Moderate);
        assert_eq!(Tone::for_improvement("8+ Shade Jump"), Tone::High);
        assert_eq!(Tone::for_improvement("10+ Shade Jump"), Tone::Strong);
        assert_eq!(Tone::for_improvement("Noticeable"), Tone::Moderate);
    }

    #[test]
    fn service_detail_tops_up_from_card_then_placeholder() {
        let raw = RawService {
            card_info: Some(RawCardInfo {
                title: Some("Implants".into()),
                ..Default::default()
            }),
            detail_info: Some(RawServiceDetail {
                aftercare: vec!["  ".into()],
                video_url: Some("https://youtu.be/abcdefghijk".into()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let detail = ServiceDetail::from_record(&raw);
        let base = fixtures::service_detail();
        assert_eq!(detail.title, "Implants");
        assert_eq!(detail.aftercare, base.aftercare);
        assert_eq!(detail.video_id.as_deref(), Some("abcdefghijk"));
    }
}
