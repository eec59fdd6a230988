// Browser bridge for the interaction controller
// Developed by the Meridian Web Team (c)2025
//
// The controller keeps its own deadlines. This side owns one browser timeout
// aimed at the earliest of them and re-arms it after every state change.

use bankfront::clock::Timestamp;
use bankfront::controller::{ControllerSettings, InteractionController};
use bankfront::types::MenuId;
use bankfront::wakeup::Wakeup;
use leptos::prelude::*;
use tracing::{debug, warn};

/// Milliseconds from the page's monotonic clock.
pub fn now() -> Timestamp {
    let millis = web_sys::window()
        .and_then(|window| window.performance())
        .map(|performance| performance.now())
        .unwrap_or_else(js_sys::Date::now);
    Timestamp::from_millis_f64(millis)
}

/// Shared, copyable handle to the page's controller.
#[derive(Clone, Copy)]
pub struct InteractionHandle {
    controller: RwSignal<InteractionController>,
    wakeup: StoredValue<Wakeup<TimeoutHandle>>,
}

/// Creates the controller for `slide_count` slides, mounts it and ties its
/// teardown to the current reactive owner.
pub fn use_interaction(
    slide_count: usize,
    settings: ControllerSettings,
) -> Option<InteractionHandle> {
    let controller = match InteractionController::new(slide_count, settings) {
        Ok(controller) => controller,
        Err(err) => {
            warn!(error = %err, "carousel disabled");
            return None;
        }
    };

    let handle = InteractionHandle {
        controller: RwSignal::new(controller),
        wakeup: StoredValue::new(Wakeup::new()),
    };
    handle.controller.update_untracked(|c| c.mount(now()));
    handle.reschedule();

    on_cleanup(move || handle.teardown());
    Some(handle)
}

impl InteractionHandle {
    pub fn current_index(&self) -> usize {
        self.controller.with(|c| c.current_index())
    }

    pub fn slide_count(&self) -> usize {
        self.controller.with_untracked(|c| c.slide_count())
    }

    pub fn active_menu(&self) -> Option<MenuId> {
        self.controller.with(|c| c.active_menu())
    }

    /// Share of the carousel reached, for the progress bar.
    pub fn progress(&self) -> f64 {
        self.controller.with(|c| c.progress())
    }

    pub fn is_open(&self, id: MenuId) -> bool {
        self.active_menu() == Some(id)
    }

    pub fn advance(&self) {
        self.apply(|c| c.advance());
    }

    pub fn retreat(&self) {
        self.apply(|c| c.retreat());
    }

    pub fn go_to(&self, index: usize) {
        self.apply(|c| {
            if let Err(err) = c.go_to(index) {
                warn!(error = %err, "ignored slide selection");
            }
        });
    }

    pub fn open_menu(&self, id: MenuId) {
        self.apply(|c| c.open_menu(id));
    }

    pub fn schedule_close_menu(&self) {
        let at = now();
        self.apply(|c| {
            c.schedule_close_menu(at);
        });
    }

    pub fn close_menu_now(&self) {
        self.apply(|c| c.close_menu_now());
    }

    fn apply(&self, op: impl FnOnce(&mut InteractionController)) {
        if self.controller.try_update(op).is_some() {
            self.reschedule();
        }
    }

    fn on_wakeup(self) {
        self.wakeup.try_update_value(|wakeup| wakeup.fired());
        let at = now();
        let outcome = self.controller.try_update_untracked(|c| c.tick(at));
        match outcome {
            Some(outcome) => {
                if outcome.changed() {
                    self.controller.notify();
                }
                self.reschedule();
            }
            None => debug!("wakeup after controller was disposed"),
        }
    }

    fn reschedule(&self) {
        let delay = self
            .controller
            .try_with_untracked(|c| c.wakeup_delay(now()))
            .flatten();
        let handle = *self;
        self.wakeup.try_update_value(|wakeup| {
            wakeup.reschedule(
                delay,
                |timeout| timeout.clear(),
                |delay| match set_timeout_with_handle(move || handle.on_wakeup(), delay) {
                    Ok(timeout) => Some(timeout),
                    Err(err) => {
                        warn!(?err, "failed to arm interaction wakeup");
                        None
                    }
                },
            )
        });
    }

    fn teardown(&self) {
        self.wakeup
            .try_update_value(|wakeup| wakeup.clear(|timeout| timeout.clear()));
        self.controller.try_update_untracked(|c| c.teardown());
    }
}
