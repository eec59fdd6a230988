//! Host-side wakeup slot.
//!
//! The controller only reports when it next needs attention
//! ([`InteractionController::wakeup_delay`](crate::controller::InteractionController::wakeup_delay)).
//! The host turns that into a real timer. [`Wakeup`] keeps at most one such
//! timer outstanding: every reschedule cancels the previous handle first, and
//! [`Wakeup::clear`] on teardown leaves nothing behind.
//!
//! `H` is whatever the host's timer API hands back (a browser timeout handle
//! in the landing app, a plain id in tests).

use std::time::Duration;

use tracing::trace;

#[derive(Debug)]
pub struct Wakeup<H> {
    pending: Option<H>,
}

impl<H> Default for Wakeup<H> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<H> Wakeup<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    /// Cancels the outstanding handle, then arms a new one when `delay` is
    /// `Some`. `arm` returns `None` if the host could not set the timer.
    pub fn reschedule(
        &mut self,
        delay: Option<Duration>,
        cancel: impl FnOnce(H),
        arm: impl FnOnce(Duration) -> Option<H>,
    ) {
        self.clear(cancel);
        if let Some(delay) = delay {
            trace!(delay_ms = delay.as_millis() as u64, "arming wakeup");
            self.pending = arm(delay);
        }
    }

    /// Cancels the outstanding handle, if any.
    pub fn clear(&mut self, cancel: impl FnOnce(H)) {
        if let Some(handle) = self.pending.take() {
            cancel(handle);
        }
    }

    /// The host timer ran. Its handle is spent and is dropped without a cancel.
    pub fn fired(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::Timestamp;
    use crate::controller::{ControllerSettings, InteractionController};
    use crate::types::MenuId;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::collections::BTreeMap;

    /// Timer host that records every outstanding timeout by id.
    #[derive(Default)]
    struct FakeHost {
        next_id: u32,
        outstanding: BTreeMap<u32, Duration>,
        cancelled: Vec<u32>,
    }

    impl FakeHost {
        fn arm(&mut self, delay: Duration) -> Option<u32> {
            self.next_id += 1;
            self.outstanding.insert(self.next_id, delay);
            Some(self.next_id)
        }

        fn cancel(&mut self, id: u32) {
            self.outstanding.remove(&id);
            self.cancelled.push(id);
        }

        /// Removes the timer as the browser would before running its callback.
        fn fire(&mut self, id: u32) {
            self.outstanding.remove(&id);
        }
    }

    /// Same sequence the landing bridge runs after every state change.
    fn reschedule(
        wakeup: &mut Wakeup<u32>,
        host: &RefCell<FakeHost>,
        controller: &InteractionController,
        now: Timestamp,
    ) {
        wakeup.reschedule(
            controller.wakeup_delay(now),
            |id| host.borrow_mut().cancel(id),
            |delay| host.borrow_mut().arm(delay),
        );
    }

    fn only_timer(host: &RefCell<FakeHost>) -> (u32, Duration) {
        let host = host.borrow();
        assert_eq!(host.outstanding.len(), 1, "{:?}", host.outstanding);
        let (id, delay) = host.outstanding.iter().next().expect("one timer");
        (*id, *delay)
    }

    fn ms(value: u64) -> Timestamp {
        Timestamp::from_millis(value)
    }

    fn mounted(slides: usize) -> InteractionController {
        let mut controller = InteractionController::new(slides, ControllerSettings::default())
            .expect("non-empty carousel");
        controller.mount(ms(0));
        controller
    }

    #[test]
    fn reschedule_cancels_previous_handle() {
        let mut wakeup = Wakeup::new();
        let mut cancelled = Vec::new();

        wakeup.reschedule(Some(Duration::from_millis(100)), |h| cancelled.push(h), |_| Some(1));
        wakeup.reschedule(Some(Duration::from_millis(50)), |h| cancelled.push(h), |_| Some(2));

        assert_eq!(cancelled, vec![1]);
        assert!(wakeup.is_armed());
    }

    #[test]
    fn reschedule_without_deadline_leaves_nothing_armed() {
        let mut wakeup = Wakeup::new();
        let mut cancelled = Vec::new();

        wakeup.reschedule(Some(Duration::from_millis(100)), |h| cancelled.push(h), |_| Some(7));
        wakeup.reschedule(None, |h| cancelled.push(h), |_| panic!("nothing to arm"));

        assert_eq!(cancelled, vec![7]);
        assert!(!wakeup.is_armed());
    }

    #[test]
    fn fired_handle_is_not_cancelled() {
        let mut wakeup = Wakeup::new();
        wakeup.reschedule(Some(Duration::ZERO), |_: u8| {}, |_| Some(3));
        wakeup.fired();
        wakeup.clear(|_| panic!("spent handle cancelled"));
        assert!(!wakeup.is_armed());
    }

    #[test]
    fn failed_arm_is_not_tracked() {
        let mut wakeup: Wakeup<u8> = Wakeup::new();
        wakeup.reschedule(Some(Duration::from_millis(10)), |_| {}, |_| None);
        assert!(!wakeup.is_armed());
    }

    #[test]
    fn host_never_holds_more_than_one_timer() {
        let mut controller = mounted(4);
        let mut wakeup = Wakeup::new();
        let host = RefCell::new(FakeHost::default());

        reschedule(&mut wakeup, &host, &controller, ms(0));
        assert_eq!(only_timer(&host).1, Duration::from_millis(5_000));

        controller.open_menu(MenuId::Personal);
        reschedule(&mut wakeup, &host, &controller, ms(1_000));
        controller.schedule_close_menu(ms(1_000));
        reschedule(&mut wakeup, &host, &controller, ms(1_000));
        let (id, delay) = only_timer(&host);
        assert_eq!(delay, Duration::from_millis(150));

        // Menu close fires, then the wakeup is re-aimed at the carousel.
        host.borrow_mut().fire(id);
        wakeup.fired();
        assert!(controller.tick(ms(1_150)).menu_closed);
        reschedule(&mut wakeup, &host, &controller, ms(1_150));

        assert_eq!(only_timer(&host).1, Duration::from_millis(3_850));
        assert!(!host.borrow().cancelled.contains(&id));
        assert_eq!(host.borrow().cancelled.len(), 2);
    }

    #[test]
    fn teardown_clears_the_outstanding_timer() {
        let mut controller = mounted(3);
        let mut wakeup = Wakeup::new();
        let host = RefCell::new(FakeHost::default());
        reschedule(&mut wakeup, &host, &controller, ms(0));
        let (id, _) = only_timer(&host);

        wakeup.clear(|id| host.borrow_mut().cancel(id));
        controller.teardown();

        assert!(host.borrow().outstanding.is_empty());
        assert_eq!(host.borrow().cancelled, vec![id]);
        assert!(!wakeup.is_armed());
    }

    #[test]
    fn late_wakeup_after_teardown_is_inert() {
        let mut controller = mounted(3);
        let mut wakeup = Wakeup::new();
        let host = RefCell::new(FakeHost::default());
        reschedule(&mut wakeup, &host, &controller, ms(0));

        // The callback was already queued when teardown ran.
        let (id, _) = only_timer(&host);
        wakeup.clear(|_| {});
        controller.teardown();
        host.borrow_mut().fire(id);

        wakeup.fired();
        let outcome = controller.tick(ms(5_000));
        reschedule(&mut wakeup, &host, &controller, ms(5_000));

        assert!(!outcome.changed());
        assert_eq!(controller.current_index(), 0);
        assert!(host.borrow().outstanding.is_empty());
        assert!(!wakeup.is_armed());
    }
}
