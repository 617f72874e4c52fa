use dioxus::prelude::*;

use crate::content::models::Faq;
use crate::content::use_section_content;
use crate::navigation::{sections, use_section_anchor};
use crate::t;

/// The second question starts expanded.
const INITIALLY_OPEN: usize = 1;

/// Splits questions into two columns, left column taking the odd one out.
pub fn split_columns<T>(items: &[T]) -> (&[T], &[T]) {
    items.split_at(items.len().div_ceil(2))
}

/// Next open index after clicking `index`; clicking the open item closes it.
pub fn toggle(open: Option<usize>, index: usize) -> Option<usize> {
    if open == Some(index) {
        None
    } else {
        Some(index)
    }
}

/// Two-column accordion with at most one answer open.
#[component]
pub fn Faqs() -> Element {
    let anchor = use_section_anchor(sections::FAQ);
    let content = use_section_content::<Faq>();
    let open = use_signal(|| Some(INITIALLY_OPEN));

    let items = content.items.read();
    let (left, right) = split_columns(items.as_slice());

    rsx! {
        section { id: anchor, class: "faqs", aria_busy: content.is_loading(),
            h2 { class: "section-title section-title--accent", {t!("faq-title")} }
            div { class: "faqs__columns",
                FaqColumn { items: left.to_vec(), offset: 0, open }
                FaqColumn { items: right.to_vec(), offset: left.len(), open }
            }
        }
    }
}

#[component]
fn FaqColumn(items: Vec<Faq>, offset: usize, open: Signal<Option<usize>>) -> Element {
    rsx! {
        div { class: "faqs__column",
            for (i, faq) in items.iter().enumerate() {
                FaqItem {
                    key: "{offset + i}",
                    index: offset + i,
                    question: faq.question.clone(),
                    answer: faq.answer.clone(),
                    open,
                }
            }
        }
    }
}

#[component]
fn FaqItem(index: usize, question: String, answer: String, open: Signal<Option<usize>>) -> Element {
    let mut open = open;
    let expanded = open() == Some(index);
    rsx! {
        div { class: if expanded { "faq faq--open" } else { "faq" },
            button {
                class: "faq__question",
                aria_expanded: expanded,
                onclick: move |_| {
                    let next = toggle(*open.peek(), index);
                    open.set(next);
                },
                span { "{question}" }
                span { class: "faq__icon", if expanded { "−" } else { "+" } }
            }
            if expanded {
                p { class: "faq__answer", "{answer}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eleven_questions_split_six_five() {
        let items: Vec<u32> = (0..11).collect();
        let (left, right) = split_columns(items.as_slice());
        assert_eq!(left.len(), 6);
        assert_eq!(right.len(), 5);
        assert_eq!(right[0], 6);
    }

    #[test]
    fn only_one_answer_open_at_a_time() {
        let open = Some(INITIALLY_OPEN);
        let open = toggle(open, 4);
        assert_eq!(open, Some(4));
        assert_eq!(toggle(open, 4), None);
    }
}
