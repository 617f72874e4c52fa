//! The one-shot "scroll here after you land" note carried across page loads.

use crate::core::platform;

pub const PENDING_KEY: &str = "dentalsite.pending-section";

/// A single session-scoped string value.
pub trait SessionSlot {
    fn get(&self) -> Option<String>;
    fn set(&self, value: &str);
    fn clear(&self);
}

/// Session storage on the web, an in-process map in the desktop webview.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSession;

impl SessionSlot for BrowserSession {
    fn get(&self) -> Option<String> {
        platform::session_get(PENDING_KEY)
    }

    fn set(&self, value: &str) {
        platform::session_set(PENDING_KEY, value);
    }

    fn clear(&self) {
        platform::session_remove(PENDING_KEY);
    }
}

pub fn stash(slot: &impl SessionSlot, section: &str) {
    slot.set(section);
}

/// Reads and clears the slot.
pub fn take(slot: &impl SessionSlot) -> Option<String> {
    let value = slot.get()?;
    slot.clear();
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Where to scroll after landing: the stashed section first, then the URL
/// fragment.
pub fn landing_target(slot: &impl SessionSlot, fragment: Option<&str>) -> Option<String> {
    take(slot).or_else(|| {
        fragment
            .map(|f| f.trim().trim_start_matches('#'))
            .filter(|f| !f.is_empty())
            .map(str::to_string)
    })
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;

    use super::SessionSlot;

    #[derive(Default)]
    pub struct MemorySlot(pub RefCell<Option<String>>);

    impl SessionSlot for MemorySlot {
        fn get(&self) -> Option<String> {
            self.0.borrow().clone()
        }

        fn set(&self, value: &str) {
            *self.0.borrow_mut() = Some(value.to_string());
        }

        fn clear(&self) {
            *self.0.borrow_mut() = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::MemorySlot;
    use super::*;

    #[test]
    fn stashed_section_wins_over_fragment_and_is_consumed() {
        let slot = MemorySlot::default();
        stash(&slot, "services");
        assert_eq!(landing_target(&slot, Some("faq")).as_deref(), Some("services"));
        assert_eq!(slot.get(), None);
        assert_eq!(landing_target(&slot, Some("#faq")).as_deref(), Some("faq"));
    }

    #[test]
    fn blank_values_are_ignored() {
        let slot = MemorySlot::default();
        stash(&slot, "  ");
        assert_eq!(landing_target(&slot, Some("#")), None);
        assert_eq!(slot.get(), None);
    }
}
