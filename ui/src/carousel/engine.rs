//! Index bookkeeping for sliders. Pure state; the section decides how to
//! turn `current` into a transform.

/// What happens at the ends of the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgePolicy {
    /// Stops when the last page is fully visible.
    Clamp,
    /// Steps past either end come round to the other.
    Wrap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselState {
    current: usize,
    visible: usize,
    len: usize,
    policy: EdgePolicy,
}

impl CarouselState {
    pub fn new(len: usize, visible: usize, policy: EdgePolicy) -> Self {
        Self {
            current: 0,
            visible: visible.max(1),
            len,
            policy,
        }
    }

    pub fn clamped(len: usize, visible: usize) -> Self {
        Self::new(len, visible, EdgePolicy::Clamp)
    }

    pub fn wrapping(len: usize) -> Self {
        Self::new(len, 1, EdgePolicy::Wrap)
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn visible(&self) -> usize {
        self.visible
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn policy(&self) -> EdgePolicy {
        self.policy
    }

    /// Highest index `current` may take.
    pub fn max_index(&self) -> usize {
        match self.policy {
            EdgePolicy::Clamp => self.len.saturating_sub(self.visible),
            EdgePolicy::Wrap => self.len.saturating_sub(1),
        }
    }

    /// Number of distinct positions, one indicator dot each.
    pub fn positions(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.max_index() + 1
        }
    }

    pub fn can_prev(&self) -> bool {
        match self.policy {
            EdgePolicy::Clamp => self.current > 0,
            EdgePolicy::Wrap => self.len > 1,
        }
    }

    pub fn can_next(&self) -> bool {
        match self.policy {
            EdgePolicy::Clamp => self.current < self.max_index(),
            EdgePolicy::Wrap => self.len > 1,
        }
    }

    /// Returns whether the index moved.
    pub fn next(&mut self) -> bool {
        if !self.can_next() {
            return false;
        }
        self.current = match self.policy {
            EdgePolicy::Clamp => self.current + 1,
            EdgePolicy::Wrap => (self.current + 1) % self.len,
        };
        true
    }

    pub fn prev(&mut self) -> bool {
        if !self.can_prev() {
            return false;
        }
        self.current = match self.policy {
            EdgePolicy::Clamp => self.current - 1,
            EdgePolicy::Wrap => (self.current + self.len - 1) % self.len,
        };
        true
    }

    /// Jumps to `index`; out-of-range targets are ignored.
    pub fn go_to(&mut self, index: usize) -> bool {
        if self.is_empty() || index > self.max_index() || index == self.current {
            return false;
        }
        self.current = index;
        true
    }

    /// Adopts a new page size, pulling `current` back into range if needed.
    pub fn set_visible(&mut self, visible: usize) {
        self.visible = visible.max(1);
        self.current = self.current.min(self.max_index());
    }

    /// Fresh data starts from the beginning.
    pub fn replace_len(&mut self, len: usize) {
        self.len = len;
        self.current = 0;
    }

    pub fn reset(&mut self) {
        self.current = 0;
    }

    /// Track shift for fixed-width items.
    pub fn offset_px(&self, item_width: f64) -> f64 {
        self.current as f64 * item_width
    }

    /// Track shift for items sized as a fraction of the viewport.
    pub fn offset_percent(&self) -> f64 {
        self.current as f64 * 100.0 / self.visible as f64
    }

    pub fn is_visible(&self, index: usize) -> bool {
        index >= self.current && index < self.current + self.visible
    }
}

/// Viewport-width thresholds for the number of visible items.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoints {
    /// Ascending `(max_width_exclusive, visible)` pairs.
    steps: &'static [(f64, usize)],
    widest: usize,
}

impl Breakpoints {
    pub const fn new(steps: &'static [(f64, usize)], widest: usize) -> Self {
        Self { steps, widest }
    }

    pub fn visible_for(&self, width: f64) -> usize {
        self.steps
            .iter()
            .find(|(max, _)| width < *max)
            .map(|(_, visible)| *visible)
            .unwrap_or(self.widest)
    }
}

pub const GALLERY_BREAKPOINTS: Breakpoints = Breakpoints::new(&[(768.0, 1)], 3);
pub const BLOG_BREAKPOINTS: Breakpoints = Breakpoints::new(&[(1024.0, 2), (1280.0, 3)], 4);

const NARROW_MAX_WIDTH: f64 = 768.0;

/// One before/after card plus its gap, in pixels.
pub fn gallery_step_px(viewport_width: f64) -> f64 {
    if viewport_width < NARROW_MAX_WIDTH {
        256.0 + 16.0
    } else {
        288.0 + 24.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_stops_at_last_full_page() {
        let mut c = CarouselState::clamped(5, 3);
        assert!(!c.prev());
        assert!(c.next());
        assert!(c.next());
        assert_eq!(c.current(), 2);
        assert!(!c.next());
        assert_eq!(c.current(), 2);
        assert_eq!(c.positions(), 3);
    }

    #[test]
    fn prev_at_zero_is_noop() {
        let mut c = CarouselState::clamped(5, 3);
        assert!(!c.prev());
        assert_eq!(c.current(), 0);
    }

    #[test]
    fn wrap_cycles_both_ways() {
        let mut c = CarouselState::wrapping(3);
        let seen: Vec<usize> = (0..4)
            .map(|_| {
                c.next();
                c.current()
            })
            .collect();
        assert_eq!(seen, vec![1, 2, 0, 1]);
        c.reset();
        c.prev();
        assert_eq!(c.current(), 2);
    }

    #[test]
    fn empty_list_disables_everything() {
        let mut c = CarouselState::clamped(0, 3);
        assert!(!c.next());
        assert!(!c.prev());
        assert!(!c.go_to(0));
        assert_eq!(c.positions(), 0);

        let mut w = CarouselState::wrapping(0);
        assert!(!w.next());
        assert!(!w.can_prev());
    }

    #[test]
    fn fewer_items_than_visible_has_one_position() {
        let mut c = CarouselState::clamped(2, 4);
        assert_eq!(c.max_index(), 0);
        assert!(!c.next());
        assert_eq!(c.positions(), 1);
    }

    #[test]
    fn go_to_ignores_out_of_range() {
        let mut c = CarouselState::clamped(5, 3);
        assert!(!c.go_to(3));
        assert!(c.go_to(2));
        assert_eq!(c.current(), 2);
    }

    #[test]
    fn widening_reclamps_without_reset() {
        let mut c = CarouselState::clamped(6, 1);
        c.go_to(4);
        c.set_visible(3);
        assert_eq!(c.current(), 3);
        c.set_visible(1);
        assert_eq!(c.current(), 3);
    }

    #[test]
    fn new_data_resets_index() {
        let mut c = CarouselState::wrapping(4);
        c.go_to(3);
        c.replace_len(6);
        assert_eq!(c.current(), 0);
        assert_eq!(c.len(), 6);
    }

    #[test]
    fn offsets_track_current() {
        let mut c = CarouselState::clamped(8, 4);
        c.next();
        c.next();
        assert_eq!(c.offset_percent(), 50.0);
        assert_eq!(c.offset_px(312.0), 624.0);
        assert!(c.is_visible(5));
        assert!(!c.is_visible(6));
    }

    #[test]
    fn breakpoints_pick_visible_counts() {
        assert_eq!(GALLERY_BREAKPOINTS.visible_for(500.0), 1);
        assert_eq!(GALLERY_BREAKPOINTS.visible_for(768.0), 3);
        assert_eq!(BLOG_BREAKPOINTS.visible_for(900.0), 2);
        assert_eq!(BLOG_BREAKPOINTS.visible_for(1100.0), 3);
        assert_eq!(BLOG_BREAKPOINTS.visible_for(1440.0), 4);
        assert_eq!(gallery_step_px(375.0), 272.0);
        assert_eq!(gallery_step_px(1280.0), 312.0);
    }
}
