//! Auto-advance pause/resume rules.
//!
//! Every transition bumps `epoch`; a ticker remembers the epoch it started
//! sleeping in and only advances if nothing changed meanwhile. Holds carry
//! their own generation so a stale resume timer cannot end a newer hold.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoAdvance {
    interval_ms: u64,
    hold_ms: u64,
    hovered: bool,
    held: bool,
    hold_generation: u64,
    epoch: u64,
}

impl AutoAdvance {
    pub fn new(interval_ms: u64, hold_ms: u64) -> Self {
        Self {
            interval_ms,
            hold_ms,
            hovered: false,
            held: false,
            hold_generation: 0,
            epoch: 0,
        }
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    pub fn hold_ms(&self) -> u64 {
        self.hold_ms
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn is_running(&self) -> bool {
        !self.hovered && !self.held
    }

    pub fn hover_enter(&mut self) {
        self.hovered = true;
        self.epoch += 1;
    }

    pub fn hover_leave(&mut self) {
        self.hovered = false;
        self.epoch += 1;
    }

    /// Starts a hold after a manual step. Returns the token the matching
    /// `release` must present.
    pub fn manual(&mut self) -> u64 {
        self.held = true;
        self.hold_generation += 1;
        self.epoch += 1;
        self.hold_generation
    }

    /// Ends the hold identified by `token`; anything older is ignored.
    /// A pointer still over the slider keeps it paused.
    pub fn release(&mut self, token: u64) -> bool {
        if !self.held || token != self.hold_generation {
            return false;
        }
        self.held = false;
        self.epoch += 1;
        true
    }

    /// Whether a ticker that began waiting at `started_epoch` may advance now.
    pub fn should_tick(&self, started_epoch: u64) -> bool {
        self.is_running() && self.epoch == started_epoch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uninterrupted_ticker_advances() {
        let auto = AutoAdvance::new(2500, 1000);
        let started = auto.epoch();
        assert!(auto.should_tick(started));
    }

    #[test]
    fn hover_pauses_and_leave_restarts_cadence() {
        let mut auto = AutoAdvance::new(2500, 1000);
        let started = auto.epoch();
        auto.hover_enter();
        assert!(!auto.should_tick(started));
        auto.hover_leave();
        // The sleep that spanned the hover is discarded.
        assert!(!auto.should_tick(started));
        assert!(auto.should_tick(auto.epoch()));
    }

    #[test]
    fn stale_release_cannot_end_newer_hold() {
        let mut auto = AutoAdvance::new(2500, 1000);
        let first = auto.manual();
        let second = auto.manual();
        assert!(!auto.release(first));
        assert!(!auto.is_running());
        assert!(auto.release(second));
        assert!(auto.is_running());
    }

    #[test]
    fn release_while_hovered_stays_paused() {
        let mut auto = AutoAdvance::new(2500, 1000);
        auto.hover_enter();
        let token = auto.manual();
        assert!(auto.release(token));
        assert!(!auto.is_running());
        auto.hover_leave();
        assert!(auto.is_running());
    }

    #[test]
    fn hover_during_hold_does_not_orphan_release() {
        let mut auto = AutoAdvance::new(2500, 1000);
        let token = auto.manual();
        auto.hover_enter();
        auto.hover_leave();
        assert!(auto.release(token));
        assert!(auto.is_running());
    }
}
