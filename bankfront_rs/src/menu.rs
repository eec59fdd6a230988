use std::time::Duration;

use tracing::debug;

use crate::clock::Timestamp;
use crate::timer::{TimeoutSlot, TimerToken};
use crate::types::MenuId;

/// Which dropdown is open, plus the debounced close that may be pending.
#[derive(Debug, Clone, Default)]
pub struct MenuState {
    active: Option<MenuId>,
    close_timer: TimeoutSlot,
}

impl MenuState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<MenuId> {
        self.active
    }

    pub fn is_open(&self, id: MenuId) -> bool {
        self.active == Some(id)
    }

    pub fn close_pending(&self) -> bool {
        self.close_timer.is_pending()
    }

    pub fn close_deadline(&self) -> Option<Timestamp> {
        self.close_timer.deadline()
    }

    /// Opens `id`, cancelling any pending close.
    pub fn open(&mut self, id: MenuId) {
        if let Some(token) = self.close_timer.cancel() {
            debug!(menu = %id, generation = token.generation(), "pending menu close cancelled");
        }
        self.active = Some(id);
    }

    /// Arms the debounced close. A later `open` or another schedule supersedes it.
    pub fn schedule_close(&mut self, now: Timestamp, delay: Duration) -> TimerToken {
        let token = self.close_timer.arm(now, delay);
        debug!(generation = token.generation(), %now, "menu close scheduled");
        token
    }

    /// Closes immediately and drops any pending close.
    pub fn close_now(&mut self) {
        self.close_timer.cancel();
        self.active = None;
    }

    /// Applies the pending close if it is due. Returns `true` when the menu
    /// state changed.
    pub fn poll(&mut self, now: Timestamp) -> bool {
        let Some(token) = self.close_timer.poll(now) else {
            return false;
        };
        let was_open = self.active.take();
        debug!(generation = token.generation(), ?was_open, "menu closed by timer");
        was_open.is_some()
    }

    pub(crate) fn cancel_timer(&mut self) {
        self.close_timer.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(150);

    fn ms(value: u64) -> Timestamp {
        Timestamp::from_millis(value)
    }

    #[test]
    fn switching_menus_keeps_single_active() {
        let mut menu = MenuState::new();
        menu.open(MenuId::Personal);
        menu.open(MenuId::Business);
        assert_eq!(menu.active(), Some(MenuId::Business));
        assert!(!menu.is_open(MenuId::Personal));
    }

    #[test]
    fn close_applies_after_delay() {
        let mut menu = MenuState::new();
        menu.open(MenuId::Wealth);
        menu.schedule_close(ms(1_000), DELAY);

        assert!(!menu.poll(ms(1_149)));
        assert_eq!(menu.active(), Some(MenuId::Wealth));
        assert!(menu.poll(ms(1_150)));
        assert_eq!(menu.active(), None);
    }

    #[test]
    fn close_now_discards_pending_timer() {
        let mut menu = MenuState::new();
        menu.open(MenuId::Personal);
        menu.schedule_close(ms(0), DELAY);
        menu.close_now();
        assert!(!menu.close_pending());

        menu.open(MenuId::Business);
        assert!(!menu.poll(ms(500)));
        assert_eq!(menu.active(), Some(MenuId::Business));
    }

    #[test]
    fn timer_on_closed_menu_reports_no_change() {
        let mut menu = MenuState::new();
        menu.schedule_close(ms(0), DELAY);
        assert!(!menu.poll(ms(200)));
        assert!(!menu.close_pending());
    }
}
