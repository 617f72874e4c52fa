use api::feedback::{Field, MAX_RATING, MIN_RATING};
use api::ValidationError;
use dioxus::prelude::*;

use crate::animation::use_reveal;
use crate::content::fixtures;
use crate::content::models::ClinicInfo;
use crate::content::use_section_content;
use crate::core::config::{use_api_client, use_site_config};
use crate::core::{format, timing};
use crate::feedback::{submit_draft, FeedbackDraft, SubmitState};
use crate::navigation::{sections, use_section_anchor};
use crate::t;

/// Localized message for a rejected form field.
pub fn validation_message(err: &ValidationError) -> String {
    match err {
        ValidationError::Missing { .. } => t!("form-error-required"),
        ValidationError::TooLong { max, .. } => {
            let limit: usize = *max;
            t!("form-error-too-long", max = limit)
        }
        ValidationError::Rating(_) => t!("form-error-rating"),
    }
}

/// Clinic details beside the testimonial form.
#[component]
pub fn Contact() -> Element {
    let anchor = use_section_anchor(sections::CONTACT);
    let reveal = use_reveal();
    let clinic = use_section_content::<ClinicInfo>();
    let info = clinic
        .items
        .read()
        .first()
        .cloned()
        .unwrap_or_else(fixtures::clinic_info);

    rsx! {
        section { id: anchor, class: "contact {reveal}",
            h2 { class: "section-title", {t!("contact-title")} }
            div { class: "contact__grid",
                ClinicDetails { info }
                FeedbackForm {}
            }
        }
    }
}

#[component]
fn ClinicDetails(info: ClinicInfo) -> Element {
    let hours = format::timing_lines(&info.timings);

    rsx! {
        div { class: "contact__details",
            h3 { {t!("contact-visit")} }
            for location in info.locations.iter() {
                p { key: "{location.address}", class: "contact__line",
                    if location.url.is_empty() {
                        "{location.address}"
                    } else {
                        a { href: "{location.url}", target: "_blank", rel: "noopener", "{location.address}" }
                    }
                }
            }
            if !info.phone.is_empty() {
                p { class: "contact__line",
                    a { href: format::tel_href(&info.phone), "{info.phone}" }
                }
            }
            if !info.email.is_empty() {
                p { class: "contact__line",
                    a { href: format::mailto_href(&info.email), "{info.email}" }
                }
            }
            h4 { {t!("contact-hours")} }
            if hours.is_empty() {
                p { class: "contact__line contact__line--muted", {t!("contact-hours-missing")} }
            } else {
                for line in hours {
                    p { key: "{line}", class: "contact__line", "{line}" }
                }
            }
        }
    }
}

#[component]
fn FeedbackForm() -> Element {
    let config = use_site_config();
    let client = use_api_client();
    let mut draft = use_signal(FeedbackDraft::default);
    let mut state = use_signal(SubmitState::default);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if state.peek().is_busy() {
            return;
        }
        let snapshot = draft.peek().clone();
        let client = client.clone();
        let mask = config.mask_feedback_failures;
        let reset_ms = config.feedback_reset_ms;
        state.set(SubmitState::Submitting);
        spawn(async move {
            let outcome = submit_draft(&snapshot, mask, move |submission| async move {
                client.submit_feedback(&submission).await
            })
            .await;
            let submitted = outcome == SubmitState::Submitted;
            state.set(outcome);
            if submitted {
                draft.set(FeedbackDraft::default());
                timing::sleep_ms(reset_ms).await;
                state.set(SubmitState::Idle);
            }
        });
    };

    let current = state();
    let field_error = |field: Field| current.error_for(field).map(validation_message);
    let name_error = field_error(Field::Name);
    let rating_error = field_error(Field::Rating);
    let title_error = field_error(Field::Title);
    let description_error = field_error(Field::Description);

    if current == SubmitState::Submitted {
        return rsx! {
            div { class: "contact__form contact__form--done",
                h3 { {t!("form-thanks-title")} }
                p { {t!("form-thanks")} }
            }
        };
    }

    rsx! {
        form { class: "contact__form", novalidate: true, onsubmit: on_submit,
            h3 { {t!("form-title")} }

            label { class: "field",
                span { {t!("form-name")} }
                input {
                    r#type: "text",
                    value: "{draft.read().username}",
                    oninput: move |evt| draft.write().username = evt.value(),
                }
                if let Some(msg) = name_error {
                    span { class: "field__error", "{msg}" }
                }
            }

            label { class: "field",
                span { {t!("form-rating")} }
                select {
                    value: "{draft.read().rating}",
                    onchange: move |evt| {
                        if let Ok(rating) = evt.value().parse::<u8>() {
                            draft.write().rating = rating;
                        }
                    },
                    for rating in (MIN_RATING..=MAX_RATING).rev() {
                        option { key: "{rating}", value: "{rating}", "{format::stars(rating)}" }
                    }
                }
                if let Some(msg) = rating_error {
                    span { class: "field__error", "{msg}" }
                }
            }

            label { class: "field",
                span { {t!("form-feedback-title")} }
                input {
                    r#type: "text",
                    value: "{draft.read().title}",
                    oninput: move |evt| draft.write().title = evt.value(),
                }
                if let Some(msg) = title_error {
                    span { class: "field__error", "{msg}" }
                }
            }

            label { class: "field",
                span { {t!("form-experience")} }
                textarea {
                    rows: 5,
                    value: "{draft.read().description}",
                    oninput: move |evt| draft.write().description = evt.value(),
                }
                if let Some(msg) = description_error {
                    span { class: "field__error", "{msg}" }
                }
            }

            if matches!(current, SubmitState::Failed(_)) {
                p { class: "contact__form-error", {t!("form-failed")} }
            }

            button {
                class: "button button--primary",
                r#type: "submit",
                disabled: current.is_busy(),
                if current.is_busy() {
                    {t!("form-sending")}
                } else {
                    {t!("form-submit")}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use api::feedback::MAX_DESCRIPTION_CHARS;

    use super::*;

    #[test]
    fn length_errors_name_the_limit() {
        crate::i18n::init();
        let err = ValidationError::TooLong {
            field: Field::Description,
            max: MAX_DESCRIPTION_CHARS,
            len: 1200,
        };
        assert!(validation_message(&err).contains("1000"));
    }

    #[test]
    fn missing_and_rating_errors_differ() {
        crate::i18n::init();
        let missing = validation_message(&ValidationError::Missing { field: Field::Name });
        let rating = validation_message(&ValidationError::Rating(0));
        assert!(!missing.is_empty());
        assert_ne!(missing, rating);
    }
}
