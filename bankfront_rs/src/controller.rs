//! Carousel & menu interaction controller.
//!
//! One instance backs the landing page for as long as it is mounted. It owns
//! the slide index, the open dropdown, and both timers (auto-advance and the
//! debounced menu close). Time only moves when the host calls
//! [`InteractionController::tick`], so the host needs a single wakeup aimed at
//! [`InteractionController::next_deadline`].
//!
//! After [`InteractionController::teardown`] every operation is a no-op.

use std::time::Duration;

use tracing::{debug, trace};

use crate::carousel::CarouselState;
use crate::clock::Timestamp;
use crate::config::AppConfig;
use crate::error::InteractionError;
use crate::menu::MenuState;
use crate::timer::{IntervalTimer, TimerToken};
use crate::types::MenuId;

pub const DEFAULT_AUTO_ADVANCE_INTERVAL: Duration = Duration::from_millis(5_000);
pub const DEFAULT_MENU_CLOSE_DELAY: Duration = Duration::from_millis(150);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerSettings {
    pub auto_advance_interval: Duration,
    pub menu_close_delay: Duration,
    /// When `false` the carousel only moves on manual navigation.
    pub auto_advance: bool,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            auto_advance_interval: DEFAULT_AUTO_ADVANCE_INTERVAL,
            menu_close_delay: DEFAULT_MENU_CLOSE_DELAY,
            auto_advance: true,
        }
    }
}

impl From<&AppConfig> for ControllerSettings {
    fn from(config: &AppConfig) -> Self {
        Self {
            auto_advance_interval: config.carousel_interval(),
            menu_close_delay: config.menu_close_delay(),
            auto_advance: config.auto_advance(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Created,
    Mounted,
    TornDown,
}

/// What a [`InteractionController::tick`] changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    pub advanced: bool,
    pub menu_closed: bool,
}

impl TickOutcome {
    pub fn changed(self) -> bool {
        self.advanced || self.menu_closed
    }
}

#[derive(Debug, Clone)]
pub struct InteractionController {
    carousel: CarouselState,
    menu: MenuState,
    auto_advance: IntervalTimer,
    settings: ControllerSettings,
    lifecycle: Lifecycle,
}

impl InteractionController {
    pub fn new(
        slide_count: usize,
        settings: ControllerSettings,
    ) -> Result<Self, InteractionError> {
        Ok(Self {
            carousel: CarouselState::new(slide_count)?,
            menu: MenuState::new(),
            auto_advance: IntervalTimer::new(settings.auto_advance_interval),
            settings,
            lifecycle: Lifecycle::Created,
        })
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn is_torn_down(&self) -> bool {
        self.lifecycle == Lifecycle::TornDown
    }

    pub fn current_index(&self) -> usize {
        self.carousel.current_index()
    }

    pub fn slide_count(&self) -> usize {
        self.carousel.len()
    }

    /// Fraction of the slides reached so far, `(current + 1) / len`.
    pub fn progress(&self) -> f64 {
        (self.carousel.current_index() + 1) as f64 / self.carousel.len() as f64
    }

    pub fn active_menu(&self) -> Option<MenuId> {
        self.menu.active()
    }

    pub fn close_pending(&self) -> bool {
        self.menu.close_pending()
    }

    pub fn auto_advance_running(&self) -> bool {
        self.auto_advance.is_running()
    }

    /// Starts the auto-advance cadence. Mounting twice restarts the cadence.
    pub fn mount(&mut self, now: Timestamp) {
        if self.is_torn_down() {
            return;
        }
        if self.settings.auto_advance {
            self.auto_advance.start(now);
        }
        self.lifecycle = Lifecycle::Mounted;
        debug!(
            %now,
            slides = self.carousel.len(),
            auto_advance = self.settings.auto_advance,
            "interaction controller mounted"
        );
    }

    /// Cancels both timers. Nothing mutates after this.
    pub fn teardown(&mut self) {
        if self.is_torn_down() {
            return;
        }
        self.auto_advance.stop();
        self.menu.cancel_timer();
        self.lifecycle = Lifecycle::TornDown;
        debug!("interaction controller torn down");
    }

    pub fn advance(&mut self) {
        if !self.is_torn_down() {
            self.carousel.advance();
        }
    }

    pub fn retreat(&mut self) {
        if !self.is_torn_down() {
            self.carousel.retreat();
        }
    }

    pub fn go_to(&mut self, index: usize) -> Result<(), InteractionError> {
        if self.is_torn_down() {
            return Ok(());
        }
        self.carousel.go_to(index)
    }

    pub fn open_menu(&mut self, id: MenuId) {
        if !self.is_torn_down() {
            self.menu.open(id);
        }
    }

    /// Arms the debounced close. Returns `None` once torn down.
    pub fn schedule_close_menu(&mut self, now: Timestamp) -> Option<TimerToken> {
        if self.is_torn_down() {
            return None;
        }
        Some(self.menu.schedule_close(now, self.settings.menu_close_delay))
    }

    pub fn close_menu_now(&mut self) {
        if !self.is_torn_down() {
            self.menu.close_now();
        }
    }

    /// Fires every timer whose deadline is at or before `now`.
    pub fn tick(&mut self, now: Timestamp) -> TickOutcome {
        if self.is_torn_down() {
            return TickOutcome::default();
        }

        let mut outcome = TickOutcome::default();
        if self.auto_advance.poll(now) {
            self.carousel.advance();
            outcome.advanced = true;
        }
        outcome.menu_closed = self.menu.poll(now);

        if outcome.changed() {
            trace!(%now, ?outcome, "interaction tick");
        }
        outcome
    }

    /// Earliest pending deadline across both timers.
    pub fn next_deadline(&self) -> Option<Timestamp> {
        if self.is_torn_down() {
            return None;
        }
        match (self.auto_advance.next_due(), self.menu.close_deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Delay from `now` until [`InteractionController::next_deadline`], zero
    /// when it is already due. `None` means the host should not arm a wakeup.
    pub fn wakeup_delay(&self, now: Timestamp) -> Option<Duration> {
        self.next_deadline()
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}
