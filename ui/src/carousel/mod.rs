//! Slider state plus the hooks that bind it to section data, the viewport
//! and the auto-advance timer.

mod autoplay;
mod engine;

use dioxus::prelude::*;

use crate::core::platform::use_viewport;
use crate::core::timing;

pub use autoplay::AutoAdvance;
pub use engine::{
    gallery_step_px, Breakpoints, CarouselState, EdgePolicy, BLOG_BREAKPOINTS,
    GALLERY_BREAKPOINTS,
};

/// Carousel over `items`; a new item list resets it to the first position.
pub fn use_carousel<T: 'static>(
    items: Signal<Vec<T>>,
    visible: usize,
    policy: EdgePolicy,
) -> Signal<CarouselState> {
    let mut state = use_signal(|| CarouselState::new(items.peek().len(), visible, policy));
    use_effect(move || {
        let len = items.read().len();
        state.write().replace_len(len);
    });
    state
}

/// Keeps the visible count in step with the viewport width.
pub fn use_responsive_visible(mut state: Signal<CarouselState>, breakpoints: Breakpoints) {
    let viewport = use_viewport();
    use_effect(move || {
        let visible = breakpoints.visible_for(viewport.read().width);
        if state.peek().visible() != visible {
            state.write().set_visible(visible);
        }
    });
}

/// Controls for a self-advancing carousel.
#[derive(Clone, Copy, PartialEq)]
pub struct AutoAdvanceHandle {
    carousel: Signal<CarouselState>,
    auto: Signal<AutoAdvance>,
    hold_task: Signal<Option<Task>>,
}

impl AutoAdvanceHandle {
    pub fn hover_enter(&mut self) {
        self.auto.write().hover_enter();
    }

    pub fn hover_leave(&mut self) {
        self.auto.write().hover_leave();
    }

    pub fn next(&mut self) {
        if self.carousel.write().next() {
            self.hold();
        }
    }

    pub fn prev(&mut self) {
        if self.carousel.write().prev() {
            self.hold();
        }
    }

    pub fn go_to(&mut self, index: usize) {
        if self.carousel.write().go_to(index) {
            self.hold();
        }
    }

    fn hold(&mut self) {
        let token = self.auto.write().manual();
        if let Some(previous) = self.hold_task.write().take() {
            previous.cancel();
        }
        let mut auto = self.auto;
        let hold_ms = auto.peek().hold_ms();
        let task = spawn(async move {
            timing::sleep_ms(hold_ms).await;
            auto.write().release(token);
        });
        self.hold_task.set(Some(task));
    }
}

/// Advances `carousel` every `interval_ms` while nobody is interacting.
///
/// The ticker and any pending hold timer belong to the calling scope and stop
/// with it.
pub fn use_auto_advance(
    carousel: Signal<CarouselState>,
    interval_ms: u64,
    hold_ms: u64,
) -> AutoAdvanceHandle {
    let auto = use_signal(|| AutoAdvance::new(interval_ms, hold_ms));
    let hold_task = use_signal(|| None::<Task>);

    use_future(move || {
        let mut carousel = carousel;
        async move {
            loop {
                let (started, interval) = {
                    let auto = auto.peek();
                    (auto.epoch(), auto.interval_ms())
                };
                timing::sleep_ms(interval).await;
                if auto.peek().should_tick(started) {
                    carousel.write().next();
                }
            }
        }
    });

    AutoAdvanceHandle {
        carousel,
        auto,
        hold_task,
    }
}
