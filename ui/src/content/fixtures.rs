//! Built-in content shown whenever the content service cannot supply a
//! section. Every section's fallback lives here so editors have one place to
//! keep the offline copy current.

use api::records::{MediaRef, RawBlog, RawCardInfo, RawService};

use super::models::{
    BlogCard, BlogDetail, ClinicInfo, Faq, Feature, HeroSlide, HeroVideo, Highlight, Location,
    Partner, ResultPair, ServiceCard, ServiceDetail, Stat, TeamMember, TeamPicture,
    Testimonial, Tone, DEFAULT_BLOG_IMAGE, DEFAULT_PORTRAIT, DEFAULT_SERVICE_IMAGE,
    DEFAULT_TEAM_PHOTO,
};

/// Demo video used by both detail pages when a record carries none.
pub const DEMO_VIDEO_ID: &str = "dQw4w9WgXcQ";

fn s(v: &str) -> String {
    v.to_string()
}

fn card(title: &str, description: &str, image: &str) -> RawCardInfo {
    RawCardInfo {
        title: Some(s(title)),
        description: Some(s(description)),
        image: Some(MediaRef {
            url: Some(s(image)),
            alt: Some(s(title)),
        }),
    }
}

pub fn hero_slides() -> Vec<HeroSlide> {
    [
        (
            "/hero1.jpg",
            "Advanced Dental Care",
            "#services",
            "Experience cutting-edge dental treatments with our state-of-the-art equipment and expert team.",
        ),
        (
            "/hero2.jpg",
            "Cosmetic Dentistry",
            "#cosmetic",
            "Transform your smile with our comprehensive cosmetic dentistry services and personalized treatment plans.",
        ),
        (
            "/hero3.jpg",
            "Emergency Services",
            "#emergency",
            "24/7 emergency dental care when you need it most. We're here to help with urgent dental issues.",
        ),
        (
            "/hero4.jpg",
            "Family Dentistry",
            "#family",
            "Complete dental care for the whole family, from children to seniors, in a comfortable environment.",
        ),
    ]
    .into_iter()
    .map(|(image, title, link, description)| HeroSlide {
        image_url: s(image),
        title: s(title),
        title_link: s(link),
        description: s(description),
    })
    .collect()
}

pub fn hero_video() -> HeroVideo {
    HeroVideo {
        mobile_url: s("/hero-video.mp4"),
        desktop_url: s("/hero-video-2.mp4"),
        title: s("Experience Excellence in Dental Care"),
        title_link: s("#services"),
        description: s("Watch our state-of-the-art facility and expert team in action. We combine advanced technology with compassionate care to deliver exceptional dental services."),
        button_text: s("Book Your Visit"),
        button_link: s("#contact"),
    }
}

pub fn clinic_info() -> ClinicInfo {
    ClinicInfo {
        name: s("Dr. Samiullah Dental Clinic"),
        locations: vec![Location {
            address: s("123 Dental Street, Medical District, City 12345"),
            url: String::new(),
        }],
        phone: s("(123) 456-7890"),
        email: s("info@drsamiullah.com"),
        timings: s("Mon - Fri: 9:00 AM - 6:00 PM\nSat: 9:00 AM - 2:00 PM\nSun: Emergency Only"),
        socials: Vec::new(),
        stats: vec![
            Stat {
                value: s("15+"),
                label: s("Years of Experience"),
            },
            Stat {
                value: s("5000+"),
                label: s("Happy Patients"),
            },
            Stat {
                value: s("24/7"),
                label: s("Emergency Care"),
            },
        ],
    }
}

pub fn features() -> Vec<Feature> {
    vec![
        Feature {
            id: s("1"),
            name: s("Innovative Equipment"),
            description: s("We use cutting-edge technology for diagnosis and treatment, ensuring a high standard of medical care."),
        },
        Feature {
            id: s("2"),
            name: s("Personalized Approach"),
            description: s("We Develop Customized Treatment And Care Plans, Fully Adapted To The Needs Of Each Patient."),
        },
    ]
}

pub fn highlights() -> Vec<Highlight> {
    vec![
        Highlight {
            id: 1,
            title: "FLEXIBLE PAYMENTS",
            description: "Affordable plans, EMI options, and payment flexibility",
            icon: "/features/f2.png",
        },
        Highlight {
            id: 2,
            title: "CONVENIENT",
            description: "Same-day, evening, and weekend appointments",
            icon: "/features/f3.png",
        },
        Highlight {
            id: 3,
            title: "SAFE SPACE",
            description: "Expert Hygienists and supportive staff",
            icon: "/features/f1.png",
        },
        Highlight {
            id: 4,
            title: "NO DISCOMFORT",
            description: "Treatments designed for your delight",
            icon: "/features/f4.png",
        },
    ]
}

pub fn team() -> Vec<TeamMember> {
    [
        ("Dr. Samiullah", "Chief Dental Surgeon", DEFAULT_PORTRAIT, "General & Cosmetic Dentistry"),
        ("Dr. Sarah Johnson", "Orthodontist", "/team/sarah.jpg", "Braces & Aligners"),
        ("Dr. Michael Chen", "Oral Surgeon", "/team/michael.jpg", "Dental Implants"),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (name, position, image, specialty))| TeamMember {
        id: (i + 1).to_string(),
        name: s(name),
        position: s(position),
        specialty: s(specialty),
        image: s(image),
    })
    .collect()
}

pub fn team_picture() -> TeamPicture {
    TeamPicture {
        image: s(DEFAULT_TEAM_PHOTO),
        caption: s("Our team"),
    }
}

pub fn testimonials() -> Vec<Testimonial> {
    [
        (
            "WILL COME BACK!",
            "The space is gorgeous and the staff was friendly! I'd never done professional whitening before and was pleased with the results.",
            "LYDIA HALLAY",
        ),
        (
            "DISCOMFORT-FREE",
            "The team is so nice & professional. There was no pain and the appointment flew by!",
            "KATHERINE HARRIS",
        ),
        (
            "EXCELLENT SERVICE",
            "Dr. Samiullah and his team provided outstanding care. The modern equipment and gentle approach made my treatment comfortable.",
            "MOHAMMAD ALI",
        ),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (title, text, customer))| Testimonial {
        id: (i + 1).to_string(),
        title: s(title),
        text: s(text),
        customer: s(customer),
        rating: 5,
    })
    .collect()
}

pub fn faqs() -> Vec<Faq> {
    [
        (
            "What makes Dr. Samiullah's clinic different from my dentist?",
            "Our clinic combines advanced dental technology with personalized care. We use state-of-the-art equipment, offer same-day treatments, and provide a comfortable, anxiety-free environment. Dr. Samiullah has over 15 years of experience and stays updated with the latest dental techniques.",
        ),
        (
            "What's your late/cancellation policy?",
            "Cancellations or reschedules within 24 hours of your appointment will incur the full cost of your appointment to your card on file. However, if you reschedule and complete a new appointment within 7 days, the rescheduled appointment cost will be discounted by 50%. We have a 5-minute grace period for late appointments - please be sure to fill out your forms before heading in so check-in can be a breeze.",
        ),
        (
            "What if I have crowns, veneers, or composites?",
            "We can work with all types of dental restorations. Our whitening treatments are safe for crowns and veneers, though they won't change color. For composite fillings, we can discuss replacement options if needed. Dr. Samiullah will assess your specific situation and recommend the best approach.",
        ),
        (
            "How long does the teeth whitening effect last after a session?",
            "Professional teeth whitening results typically last 6-12 months, depending on your lifestyle habits. To maintain results, avoid staining foods and drinks, quit smoking, and maintain good oral hygiene. We offer touch-up treatments and maintenance products to help prolong your results.",
        ),
        (
            "What results should I expect from teeth whitening?",
            "Most patients see 2-8 shades of improvement in just one session. Results vary based on your starting shade and tooth type. We use professional-grade whitening agents that are more effective than over-the-counter products. Dr. Samiullah will discuss realistic expectations during your consultation.",
        ),
        (
            "Does Dr. Samiullah perform SRPs?",
            "Yes, we perform Scaling and Root Planing (SRP) procedures for patients with gum disease. This deep cleaning treatment removes plaque and tartar from below the gum line and smooths root surfaces to promote healing. We use advanced techniques to ensure comfort during the procedure.",
        ),
        (
            "Do you take insurance, HSA or FSA?",
            "Yes, we accept most major dental insurance plans and work with HSA and FSA accounts. Our team will help you understand your coverage and maximize your benefits. We also offer flexible payment plans and financing options for treatments not covered by insurance.",
        ),
        (
            "Is teeth whitening safe?",
            "Professional teeth whitening is very safe when performed by a qualified dentist. We use FDA-approved whitening agents and take precautions to protect your gums and soft tissues. Some patients may experience temporary sensitivity, which usually resolves within 24-48 hours.",
        ),
        (
            "Should I get a cleaning before I get my teeth whitened?",
            "Yes, we recommend a professional cleaning before whitening to remove surface stains and ensure optimal results. Clean teeth allow the whitening gel to penetrate more effectively. We can schedule both treatments on the same day for your convenience.",
        ),
        (
            "If my teeth are sensitive after whitening, how long will it last?",
            "Tooth sensitivity after whitening is common and usually lasts 24-48 hours. We provide desensitizing treatments and recommend using sensitivity toothpaste. If sensitivity persists beyond a few days, please contact our office for evaluation.",
        ),
        (
            "What happens if I have a cavity or another type of dental issue?",
            "We'll address any dental issues before whitening to ensure your oral health. Small cavities can often be filled the same day, while larger issues may require separate appointments. Dr. Samiullah will create a comprehensive treatment plan tailored to your needs.",
        ),
    ]
    .into_iter()
    .map(|(question, answer)| Faq {
        question: s(question),
        answer: s(answer),
    })
    .collect()
}

pub fn partners() -> Vec<Partner> {
    [
        ("KTLA 5", "/partners/p1.jpg"),
        ("Angeleno", "/partners/p2.png"),
        ("WEHO Online", "/partners/p3.png"),
        ("Spa & Beauty", "/partners/p4.png"),
        ("WEHO Times", "/partners/p5.png"),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (name, logo))| Partner {
        id: i + 1,
        name: s(name),
        logo: s(logo),
    })
    .collect()
}

/// Fallback service cards carry a minimal record so their detail page still
/// opens with the right heading.
pub fn services() -> Vec<ServiceCard> {
    [
        (
            "Teeth Whitening",
            DEFAULT_SERVICE_IMAGE,
            "Professional teeth whitening treatments for a brighter, more confident smile.",
        ),
        (
            "Dental Fillings and Restoration",
            "/services/filling.jpg",
            "Advanced restorative treatments to repair and restore damaged teeth.",
        ),
        (
            "Orthodontist Braces",
            "/services/braces.jpg",
            "Modern orthodontic solutions for perfectly aligned teeth and beautiful smiles.",
        ),
        (
            "Root Canal Treatment",
            "/services/root-canal.jpg",
            "Pain-free root canal procedures to save and restore infected teeth.",
        ),
        (
            "Artificial Teeth Replacements",
            "/services/dental-implants.jpg",
            "Premium dental implants and prosthetics for complete smile restoration.",
        ),
        (
            "Gum Disease Treatment",
            "/services/gums.jpg",
            "Comprehensive periodontal care for healthy gums and optimal oral health.",
        ),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (name, image, description))| ServiceCard {
        id: i + 1,
        name: s(name),
        image: s(image),
        description: s(description),
        detail: Some(RawService {
            card_info: Some(card(name, description, image)),
            ..Default::default()
        }),
    })
    .collect()
}

pub fn blogs() -> Vec<BlogCard> {
    [
        (
            "Top Tips For A Brighter Smile",
            "Simple daily habits that noticeably whiten and protect your teeth.",
            DEFAULT_BLOG_IMAGE,
        ),
        (
            "Do You Need A Night Guard?",
            "How to tell if grinding impacts your enamel and jaw comfort.",
            "/blogs/b2.jpg",
        ),
        (
            "Gentle Root Canal Myths, Debunked",
            "Modern techniques make treatment faster and more comfortable.",
            "/blogs/b3.jpg",
        ),
        (
            "Choosing The Right Toothbrush",
            "Manual vs. electric: what actually matters for your gums?",
            "/blogs/b4.jpg",
        ),
        (
            "Foods Your Teeth Love",
            "Add these to your diet for enamel strength and freshness.",
            "/blogs/b5.jpg",
        ),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (title, excerpt, image))| BlogCard {
        id: i + 1,
        title: s(title),
        excerpt: s(excerpt),
        image: s(image),
        detail: Some(RawBlog {
            card_info: Some(card(title, excerpt, image)),
            ..Default::default()
        }),
    })
    .collect()
}

pub fn results() -> Vec<ResultPair> {
    [
        ("/before-after/1-before.png", "/before-after/1-after.png", "60-Min Whitening", "4+ Shade Jump"),
        (
            "/before-after/2-before.png",
            "/before-after/2-after.png",
            "60-Min Cleaning & Whitening",
            "8+ Shade Jump",
        ),
        ("/before-after/3-before.png", "/before-after/3-after.png", "60-Min Whitening", "4+ Shade Jump"),
        (
            "/before-after/2-before.png",
            "/before-after/2-after.png",
            "Complete Smile Makeover",
            "10+ Shade Jump",
        ),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (before, after, treatment, improvement))| ResultPair {
        id: (i + 1).to_string(),
        before_image: s(before),
        after_image: s(after),
        treatment: s(treatment),
        improvement: s(improvement),
        tone: Tone::for_improvement(improvement),
    })
    .collect()
}

/// Placeholder copy for the services page when no record was passed in.
pub fn service_detail() -> ServiceDetail {
    ServiceDetail {
        title: s("Our Services"),
        summary: s("Explore our comprehensive range of treatments, from preventive care and cosmetic enhancements to restorative solutions, tailored to your unique smile goals."),
        body: s("At your visit, we begin with a friendly consultation, followed by a thorough evaluation. We explain options clearly, focusing on comfort and outcomes. Treatments are designed to be gentle, efficient, and effective."),
        image: s(DEFAULT_SERVICE_IMAGE),
        preparation: vec![
            s("Arrive a few minutes early to complete or review forms."),
            s("Share any concerns, sensitivities, or medical updates."),
            s("Brush and floss prior to your visit for optimal evaluation."),
            s("Avoid highly pigmented foods and drinks 24 hours before whitening."),
            s("Plan 60 to 90 minutes for most cosmetic or restorative visits."),
        ],
        aftercare: vec![
            s("Use a soft-bristle brush and non-abrasive toothpaste for 48 hours."),
            s("Rinse with fluoride mouthwash daily to strengthen enamel."),
            s("Schedule recommended follow-ups to maintain results."),
        ],
        video_id: Some(s(DEMO_VIDEO_ID)),
    }
}

/// Placeholder copy for the blog page when no record was passed in.
pub fn blog_detail() -> BlogDetail {
    BlogDetail {
        title: s("Top Tips For A Brighter Smile"),
        author: None,
        published_at: None,
        body: s("A naturally brighter smile comes from consistent, gentle care. These dentist-approved tips are simple to follow and deliver real results."),
        tips: vec![
            s("Use a soft-bristle brush twice daily and replace it every 3 months."),
            s("Floss nightly to remove plaque where brushes can't reach."),
            s("Rinse with fluoride to strengthen enamel and prevent decay."),
            s("Limit dark beverages; drink through a straw and rinse with water after."),
            s("Eat crunchy fruits and veggies, natural polishers that stimulate saliva."),
            s("Schedule professional cleanings every 6 months for stain removal."),
            s("Consider in-office whitening for safe, fast, and predictable results."),
        ],
        image: s(DEFAULT_BLOG_IMAGE),
        video_id: Some(s(DEMO_VIDEO_ID)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_sets_have_expected_sizes() {
        assert_eq!(services().len(), 6);
        assert_eq!(team().len(), 3);
        assert_eq!(testimonials().len(), 3);
        assert_eq!(faqs().len(), 11);
        assert_eq!(partners().len(), 5);
        assert_eq!(blogs().len(), 5);
        assert_eq!(results().len(), 4);
        assert_eq!(hero_slides().len(), 4);
        assert_eq!(highlights().len(), 4);
    }

    #[test]
    fn fallback_ids_are_one_based_and_unique() {
        let ids: Vec<usize> = services().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
        let mut team_ids: Vec<String> = team().into_iter().map(|m| m.id).collect();
        team_ids.dedup();
        assert_eq!(team_ids.len(), 3);
    }

    #[test]
    fn fallback_service_record_maps_back_to_same_card() {
        use crate::content::SectionContent;
        for card in services() {
            let raw = card.detail.clone().unwrap();
            let mapped = ServiceCard::from_raw(card.id - 1, raw).unwrap();
            assert_eq!(mapped, card);
        }
    }
}
