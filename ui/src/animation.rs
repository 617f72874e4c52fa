//! Entrance and slide motion, supplied through context so a reduced-motion
//! build or a test can swap the driver without touching the sections.

use std::ops::Deref;
use std::rc::Rc;

use dioxus::prelude::*;

pub trait AnimationDriver {
    /// Class for a section that fades in once mounted.
    fn reveal_class(&self, revealed: bool) -> &'static str;

    /// Inline style for a slider track shifted by `offset` (any CSS length).
    fn track_style(&self, offset: &str) -> String;

    /// Inline style for a cross-fading slide.
    fn fade_style(&self, active: bool) -> String;

    /// Delay before the `index`th card of a group starts its entrance.
    fn stagger_delay_ms(&self, index: usize) -> u64;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CssTransitionDriver;

impl AnimationDriver for CssTransitionDriver {
    fn reveal_class(&self, revealed: bool) -> &'static str {
        if revealed {
            "reveal reveal--in"
        } else {
            "reveal"
        }
    }

    fn track_style(&self, offset: &str) -> String {
        format!("transform: translateX(-{offset}); transition: transform 500ms ease-in-out;")
    }

    fn fade_style(&self, active: bool) -> String {
        let opacity = if active { 1 } else { 0 };
        format!("opacity: {opacity}; transition: opacity 1000ms ease-in-out;")
    }

    fn stagger_delay_ms(&self, index: usize) -> u64 {
        (index as u64).min(8) * 100
    }
}

/// Same layout, no motion.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReducedMotionDriver;

impl AnimationDriver for ReducedMotionDriver {
    fn reveal_class(&self, _revealed: bool) -> &'static str {
        "reveal reveal--in"
    }

    fn track_style(&self, offset: &str) -> String {
        format!("transform: translateX(-{offset});")
    }

    fn fade_style(&self, active: bool) -> String {
        let opacity = if active { 1 } else { 0 };
        format!("opacity: {opacity};")
    }

    fn stagger_delay_ms(&self, _index: usize) -> u64 {
        0
    }
}

/// Shared handle to the active driver.
#[derive(Clone)]
pub struct Animations(Rc<dyn AnimationDriver>);

impl Animations {
    pub fn new(driver: impl AnimationDriver + 'static) -> Self {
        Self(Rc::new(driver))
    }

    pub fn for_preference(reduced_motion: bool) -> Self {
        if reduced_motion {
            Self::new(ReducedMotionDriver)
        } else {
            Self::new(CssTransitionDriver)
        }
    }
}

impl Deref for Animations {
    type Target = dyn AnimationDriver;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

pub fn provide_animation_driver(animations: Animations) -> Animations {
    use_context_provider(|| animations)
}

pub fn use_animations() -> Animations {
    use_hook(|| {
        try_consume_context::<Animations>().unwrap_or_else(|| Animations::new(CssTransitionDriver))
    })
}

/// Reveal class for the calling section; flips to revealed after first paint.
pub fn use_reveal() -> &'static str {
    let animations = use_animations();
    let mut revealed = use_signal(|| false);
    use_effect(move || revealed.set(true));
    animations.reveal_class(revealed())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_driver_animates_track() {
        let style = CssTransitionDriver.track_style("50%");
        assert!(style.starts_with("transform: translateX(-50%);"));
        assert!(style.contains("transition"));
        assert_eq!(CssTransitionDriver.reveal_class(false), "reveal");
    }

    #[test]
    fn reduced_motion_driver_never_transitions() {
        let animations = Animations::for_preference(true);
        assert!(!animations.track_style("312px").contains("transition"));
        assert!(!animations.fade_style(true).contains("transition"));
        assert_eq!(animations.reveal_class(false), "reveal reveal--in");
        assert_eq!(animations.stagger_delay_ms(5), 0);
    }

    #[test]
    fn stagger_is_capped() {
        assert_eq!(CssTransitionDriver.stagger_delay_ms(2), 200);
        assert_eq!(CssTransitionDriver.stagger_delay_ms(40), 800);
    }
}
