//! Which anchored sections are currently mounted.

use std::collections::HashMap;

use dioxus::prelude::*;

/// Mount counts per section id; the same section may briefly be mounted
/// twice while one page replaces another.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SectionSet {
    mounted: HashMap<String, usize>,
}

impl SectionSet {
    pub fn register(&mut self, id: &str) {
        *self.mounted.entry(id.to_string()).or_default() += 1;
    }

    pub fn unregister(&mut self, id: &str) {
        if let Some(count) = self.mounted.get_mut(id) {
            *count -= 1;
            if *count == 0 {
                self.mounted.remove(id);
            }
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.mounted.contains_key(id)
    }
}

#[derive(Clone, Copy, PartialEq)]
pub struct SectionRegistry {
    sections: Signal<SectionSet>,
}

impl SectionRegistry {
    /// Non-subscribing lookup, safe from async tasks and handlers.
    pub fn contains(&self, id: &str) -> bool {
        self.sections.peek().contains(id)
    }

    fn register(&mut self, id: &str) {
        self.sections.write().register(id);
    }

    fn unregister(&mut self, id: &str) {
        if let Ok(mut sections) = self.sections.try_write() {
            sections.unregister(id);
        }
    }
}

pub fn provide_section_registry() -> SectionRegistry {
    let sections = use_signal(SectionSet::default);
    use_context_provider(|| SectionRegistry { sections })
}

pub fn use_section_registry() -> SectionRegistry {
    use_hook(|| {
        try_consume_context::<SectionRegistry>().unwrap_or_else(|| SectionRegistry {
            sections: Signal::new(SectionSet::default()),
        })
    })
}

/// Marks `id` as present for as long as the calling section is mounted.
/// Returns the id to put on the section element.
pub fn use_section_anchor(id: &'static str) -> &'static str {
    let registry = use_section_registry();
    use_hook(move || {
        let mut registry = registry;
        registry.register(id);
    });
    use_drop(move || {
        let mut registry = registry;
        registry.unregister(id);
    });
    id
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlapping_mounts_keep_section_present() {
        let mut set = SectionSet::default();
        set.register("services");
        set.register("services");
        set.unregister("services");
        assert!(set.contains("services"));
        set.unregister("services");
        assert!(!set.contains("services"));
        set.unregister("services");
        assert!(!set.contains("services"));
    }
}
