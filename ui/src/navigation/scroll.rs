//! Landing scroll: wait for the target section to mount, then scroll to it
//! once.

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use dioxus::prelude::*;
use tracing::debug;

use super::pending::{landing_target, BrowserSession};
use super::registry::{use_section_registry, SectionRegistry};
use crate::core::config::use_site_config;
use crate::core::{platform, timing};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub attempts: u32,
    pub interval_ms: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            attempts: 20,
            interval_ms: 100,
        }
    }
}

pub trait ScrollSurface {
    fn has_section(&self, id: &str) -> bool;
    fn scroll_to(&self, id: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollOutcome {
    Scrolled { attempt: u32 },
    GaveUp,
}

/// Checks for `id` up to `policy.attempts` times, sleeping between checks,
/// and scrolls exactly once if it shows up.
pub async fn scroll_when_ready<S, F, Fut>(
    surface: &S,
    id: &str,
    policy: RetryPolicy,
    mut sleep: F,
) -> ScrollOutcome
where
    S: ScrollSurface + ?Sized,
    F: FnMut(u64) -> Fut,
    Fut: Future<Output = ()>,
{
    let attempts = policy.attempts.max(1);
    for attempt in 1..=attempts {
        if surface.has_section(id) {
            surface.scroll_to(id);
            return ScrollOutcome::Scrolled { attempt };
        }
        if attempt < attempts {
            sleep(policy.interval_ms).await;
        }
    }
    debug!(section = id, attempts, "section never appeared, skipping scroll");
    ScrollOutcome::GaveUp
}

/// The live page: presence from the registry, scrolling through the platform.
pub struct LiveSurface {
    pub registry: SectionRegistry,
    pub header_offset_px: f64,
}

impl ScrollSurface for LiveSurface {
    fn has_section(&self, id: &str) -> bool {
        self.registry.contains(id)
    }

    fn scroll_to(&self, id: &str) {
        platform::scroll_to_element(id, self.header_offset_px);
    }
}

/// Runs the landing scroll whenever `fragment` changes and on back/forward
/// or hash changes.
pub fn use_landing_scroll(fragment: String) {
    let registry = use_section_registry();
    let config = use_site_config();
    let offset = config.header_offset_px;
    let policy = config.scroll_retry();
    let mut pending = use_signal(|| None::<Task>);

    let mut start = move |fragment: Option<String>| {
        let Some(target) = landing_target(&BrowserSession, fragment.as_deref()) else {
            return;
        };
        if let Some(previous) = pending.write().take() {
            previous.cancel();
        }
        let task = spawn(async move {
            let surface = LiveSurface {
                registry,
                header_offset_px: offset,
            };
            scroll_when_ready(&surface, &target, policy, timing::sleep_ms).await;
        });
        pending.set(Some(task));
    };

    use_effect(use_reactive((&fragment,), move |(fragment,)| {
        let fragment = Some(fragment)
            .filter(|f| !f.is_empty())
            .or_else(platform::current_hash);
        start(fragment);
    }));

    let listener = use_hook(|| {
        Rc::new(RefCell::new(Some(platform::listen_history(move |hash| {
            start(hash);
        }))))
    });
    use_drop(move || {
        listener.borrow_mut().take();
    });
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use futures::executor::block_on;

    use super::*;
    use crate::navigation::pending::testing::MemorySlot;
    use crate::navigation::pending::{landing_target, stash, SessionSlot};

    /// Section appears after a number of checks; records every scroll.
    struct FakePage {
        appears_after: u32,
        checks: Cell<u32>,
        scrolls: RefCell<Vec<String>>,
    }

    impl FakePage {
        fn new(appears_after: u32) -> Self {
            Self {
                appears_after,
                checks: Cell::new(0),
                scrolls: RefCell::new(Vec::new()),
            }
        }
    }

    impl ScrollSurface for FakePage {
        fn has_section(&self, _id: &str) -> bool {
            self.checks.set(self.checks.get() + 1);
            self.checks.get() > self.appears_after
        }

        fn scroll_to(&self, id: &str) {
            self.scrolls.borrow_mut().push(id.to_string());
        }
    }

    #[test]
    fn pending_section_scrolls_once_after_it_mounts() {
        let slot = MemorySlot::default();
        stash(&slot, "services");

        let target = landing_target(&slot, None).unwrap();
        let page = FakePage::new(3);
        let mut sleeps = Vec::new();
        let outcome = block_on(scroll_when_ready(
            &page,
            &target,
            RetryPolicy::default(),
            |ms| {
                sleeps.push(ms);
                async {}
            },
        ));

        assert_eq!(outcome, ScrollOutcome::Scrolled { attempt: 4 });
        assert_eq!(*page.scrolls.borrow(), vec!["services".to_string()]);
        assert_eq!(sleeps, vec![100, 100, 100]);
        assert_eq!(slot.get(), None);
    }

    #[test]
    fn gives_up_silently_after_all_attempts() {
        let page = FakePage::new(u32::MAX);
        let mut sleeps = 0;
        let outcome = block_on(scroll_when_ready(
            &page,
            "faq",
            RetryPolicy::default(),
            |_| {
                sleeps += 1;
                async {}
            },
        ));
        assert_eq!(outcome, ScrollOutcome::GaveUp);
        assert_eq!(page.checks.get(), 20);
        assert_eq!(sleeps, 19);
        assert!(page.scrolls.borrow().is_empty());
    }

    #[test]
    fn present_section_scrolls_without_waiting() {
        let page = FakePage::new(0);
        let outcome = block_on(scroll_when_ready(
            &page,
            "contact",
            RetryPolicy::default(),
            |_| async { panic!("should not sleep") },
        ));
        assert_eq!(outcome, ScrollOutcome::Scrolled { attempt: 1 });
    }
}
