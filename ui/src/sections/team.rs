use dioxus::prelude::*;

use crate::animation::{use_animations, use_reveal};
use crate::content::fixtures;
use crate::content::models::{TeamMember, TeamPicture};
use crate::content::use_section_content;
use crate::navigation::{sections, use_section_anchor};
use crate::t;

#[component]
pub fn Team() -> Element {
    let anchor = use_section_anchor(sections::TEAM);
    let reveal = use_reveal();
    let animations = use_animations();
    let members = use_section_content::<TeamMember>();
    let pictures = use_section_content::<TeamPicture>();

    let group = pictures
        .items
        .read()
        .first()
        .cloned()
        .unwrap_or_else(fixtures::team_picture);

    rsx! {
        section { id: anchor, class: "team", aria_busy: members.is_loading(),
            h2 { class: "section-title", {t!("team-title")} }
            p { class: "section-lead", {t!("team-lead")} }
            div { class: "team__grid",
                for (index, member) in members.items.read().iter().enumerate() {
                    article {
                        key: "{member.id}",
                        class: "team-card {reveal}",
                        style: "transition-delay: {animations.stagger_delay_ms(index)}ms;",
                        img { class: "team-card__photo", src: "{member.image}", alt: "{member.name}" }
                        div { class: "team-card__overlay",
                            h3 { "{member.name}" }
                            if !member.position.is_empty() {
                                p { class: "team-card__position", "{member.position}" }
                            }
                            if !member.specialty.is_empty() {
                                p { class: "team-card__specialty", "{member.specialty}" }
                            }
                        }
                    }
                }
            }
            figure { class: "team__group",
                img { src: "{group.image}", alt: "{group.caption}" }
                if !group.caption.is_empty() {
                    figcaption { "{group.caption}" }
                }
            }
        }
    }
}
