use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use api::ApiError;
use dioxus::prelude::*;
use tracing::{debug, warn};

use super::SectionContent;
use crate::core::config::use_api_client;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Built-in copy; the request failed, came back empty, or is still pending.
    Fallback,
    Remote,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Loaded<T> {
    pub items: Vec<T>,
    pub origin: Origin,
}

impl<T: SectionContent> Loaded<T> {
    fn fallback() -> Self {
        Self {
            items: T::fallback(),
            origin: Origin::Fallback,
        }
    }
}

/// Folds a fetch outcome into what the section shows.
///
/// Any failure, and any success that maps to zero items, yields the fallback
/// set.
pub fn resolve<S: SectionContent>(outcome: Result<Vec<S::Raw>, ApiError>) -> Loaded<S> {
    let endpoint = S::ENDPOINT;
    match outcome {
        Ok(raw) => {
            let received = raw.len();
            let items: Vec<S> = raw
                .into_iter()
                .enumerate()
                .filter_map(|(index, record)| S::from_raw(index, record))
                .collect();
            if items.is_empty() {
                warn!(%endpoint, received, "no usable records, showing built-in content");
                return Loaded::fallback();
            }
            debug!(%endpoint, count = items.len(), "content loaded");
            Loaded {
                items,
                origin: Origin::Remote,
            }
        }
        Err(err) => {
            warn!(%endpoint, kind = ?err.kind(), error = %err, "content request failed, showing built-in content");
            Loaded::fallback()
        }
    }
}

#[derive(Default)]
struct HandleState {
    task: Option<Task>,
    released: bool,
}

/// Ties an in-flight request to the component that started it.
///
/// Releasing the handle cancels the task, and anything delivered afterwards
/// is dropped on the floor.
#[derive(Clone, Default)]
pub struct RequestHandle {
    inner: Rc<RefCell<HandleState>>,
}

impl RequestHandle {
    pub fn attach(&self, task: Task) {
        let mut state = self.inner.borrow_mut();
        if state.released {
            task.cancel();
        } else {
            state.task = Some(task);
        }
    }

    pub fn release(&self) {
        let mut state = self.inner.borrow_mut();
        state.released = true;
        if let Some(task) = state.task.take() {
            task.cancel();
        }
    }

    pub fn is_released(&self) -> bool {
        self.inner.borrow().released
    }

    /// Runs `apply` with `value` unless the owner has gone; reports whether it ran.
    pub fn deliver<T>(&self, value: T, apply: impl FnOnce(T)) -> bool {
        if self.is_released() {
            return false;
        }
        apply(value);
        true
    }
}

/// Clears the loading flag however the request ends, including cancellation.
pub struct LoadingGuard {
    flag: Signal<bool>,
}

impl LoadingGuard {
    pub fn new(mut flag: Signal<bool>) -> Self {
        flag.set(true);
        Self { flag }
    }
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        // The owning scope may already be gone.
        if let Ok(mut flag) = self.flag.try_write() {
            *flag = false;
        }
    }
}

/// Reactive handles a section renders from.
pub struct SectionState<T: 'static> {
    pub items: Signal<Vec<T>>,
    pub loading: Signal<bool>,
}

impl<T: 'static> SectionState<T> {
    /// Subscribes the caller; true until the request settles.
    pub fn is_loading(&self) -> bool {
        (self.loading)()
    }
}

impl<T: 'static> Clone for SectionState<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for SectionState<T> {}

/// Fetches a section's content once per mount.
///
/// Items start as the fallback set and are replaced only by a non-empty
/// successful response.
pub fn use_section_content<S: SectionContent>() -> SectionState<S> {
    let client = use_api_client();
    use_section_content_with(move || async move { client.fetch_list::<S::Raw>(S::ENDPOINT).await })
}

/// [`use_section_content`] with the request supplied by the caller.
pub fn use_section_content_with<S, F, Fut>(fetch: F) -> SectionState<S>
where
    S: SectionContent,
    F: FnOnce() -> Fut + 'static,
    Fut: Future<Output = Result<Vec<S::Raw>, ApiError>> + 'static,
{
    let mut items = use_signal(S::fallback);
    let loading = use_signal(|| true);
    let handle = use_hook(RequestHandle::default);

    use_hook({
        let handle = handle.clone();
        move || {
            let delivery = handle.clone();
            let task = spawn(async move {
                let _guard = LoadingGuard::new(loading);
                let loaded = resolve::<S>(fetch().await);
                if loaded.origin == Origin::Remote {
                    delivery.deliver(loaded.items, |fresh| items.set(fresh));
                }
            });
            handle.attach(task);
        }
    });

    use_drop(move || handle.release());

    SectionState { items, loading }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use dioxus::dioxus_core::NoOpMutations;

    use super::*;
    use crate::content::models::{Faq, ServiceCard, TeamMember, DEFAULT_PORTRAIT};
    use api::records::{RawFaq, RawService, RawTeamMember};
    use api::{Endpoint, Envelope};

    #[test]
    fn failure_yields_fallback() {
        let err = ApiError::Status {
            endpoint: Endpoint::Services,
            status: 503,
        };
        let loaded = resolve::<ServiceCard>(Err(err));
        assert_eq!(loaded.origin, Origin::Fallback);
        assert_eq!(loaded.items, ServiceCard::fallback());
    }

    #[test]
    fn empty_services_envelope_yields_six_fallback_cards() {
        let outcome = Envelope::<RawService>::ok(Vec::new()).into_items(Endpoint::Services);
        let loaded = resolve::<ServiceCard>(outcome);
        assert_eq!(loaded.origin, Origin::Fallback);
        assert_eq!(loaded.items.len(), 6);
    }

    #[test]
    fn success_replaces_fallback_one_for_one() {
        let records = vec![RawTeamMember::default(), RawTeamMember::default()];
        let loaded = resolve::<TeamMember>(Ok(records));
        assert_eq!(loaded.origin, Origin::Remote);
        assert_eq!(loaded.items.len(), 2);
        assert!(loaded.items.iter().all(|m| m.image == DEFAULT_PORTRAIT));
    }

    #[test]
    fn records_that_all_map_to_nothing_fall_back() {
        let loaded = resolve::<Faq>(Ok(vec![RawFaq::default()]));
        assert_eq!(loaded.origin, Origin::Fallback);
        assert_eq!(loaded.items.len(), 11);
    }

    thread_local! {
        static MOUNTED: Cell<Option<SectionState<Faq>>> = const { Cell::new(None) };
        static REPLY: RefCell<Option<Result<Vec<RawFaq>, ApiError>>> = const { RefCell::new(None) };
    }

    #[component]
    fn FaqHarness() -> Element {
        let state = use_section_content_with::<Faq, _, _>(|| async {
            REPLY.with(|reply| reply.borrow_mut().take()).unwrap_or(Err(ApiError::Empty {
                endpoint: Endpoint::Faqs,
            }))
        });
        MOUNTED.with(|slot| slot.set(Some(state)));
        rsx! { "{state.items.read().len()}" }
    }

    /// Mounts the harness, lets the request run, returns (loading, items).
    fn mount_with(reply: Result<Vec<RawFaq>, ApiError>) -> (bool, Vec<Faq>) {
        REPLY.with(|slot| *slot.borrow_mut() = Some(reply));
        let mut dom = VirtualDom::new(FaqHarness);
        dom.rebuild_in_place();
        let state = MOUNTED.with(Cell::get).unwrap();
        assert!(dom.in_runtime(|| *state.loading.peek()));

        dom.render_immediate(&mut NoOpMutations);
        dom.render_immediate(&mut NoOpMutations);
        dom.in_runtime(|| (*state.loading.peek(), state.items.peek().clone()))
    }

    #[test]
    fn failed_request_clears_loading_and_keeps_fallback() {
        let err = ApiError::Status {
            endpoint: Endpoint::Faqs,
            status: 500,
        };
        let (loading, items) = mount_with(Err(err));
        assert!(!loading);
        assert_eq!(items, Faq::fallback());
    }

    #[test]
    fn successful_request_clears_loading_and_replaces_items() {
        let record = RawFaq {
            question: Some("Do you take walk-ins?".into()),
            answer: Some("Mornings only.".into()),
        };
        let (loading, items) = mount_with(Ok(vec![record]));
        assert!(!loading);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].question, "Do you take walk-ins?");
    }

    #[test]
    fn released_handle_discards_late_results() {
        let handle = RequestHandle::default();
        let mut seen = Vec::new();
        assert!(handle.deliver(1, |v| seen.push(v)));
        handle.release();
        assert!(handle.is_released());
        assert!(!handle.deliver(2, |v| seen.push(v)));
        assert_eq!(seen, vec![1]);
    }
}
