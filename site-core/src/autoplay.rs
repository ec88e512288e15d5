use std::cell::RefCell;
use std::rc::Rc;

/// Something that can run a callback on a fixed period until cancelled.
///
/// The browser crate implements this over `setInterval`/`clearInterval`;
/// [`ManualScheduler`] is a fake clock for tests.
pub trait Scheduler {
    type Handle;

    fn start_interval(&mut self, period_ms: u32, tick: Box<dyn FnMut()>) -> Self::Handle;

    fn cancel(&mut self, handle: Self::Handle);
}

/// Periodic auto-advance gated on a set of flags.
///
/// The timer runs while `playing && in_view && !(pause_on_hover && hovered)`.
/// Every change to a flag or to the period tears the running interval down
/// and, if still allowed, starts a fresh one, so at most one interval is ever
/// live. Dropping the timer cancels whatever is scheduled.
pub struct AutoplayTimer<S: Scheduler> {
    scheduler: S,
    tick: Rc<dyn Fn()>,
    handle: Option<S::Handle>,
    interval_ms: u32,
    playing: bool,
    in_view: bool,
    hovered: bool,
    pause_on_hover: bool,
    disposed: bool,
}

impl<S: Scheduler> AutoplayTimer<S> {
    pub fn new(scheduler: S, interval_ms: u32, pause_on_hover: bool, tick: impl Fn() + 'static) -> Self {
        Self {
            scheduler,
            tick: Rc::new(tick),
            handle: None,
            interval_ms,
            playing: false,
            in_view: false,
            hovered: false,
            pause_on_hover,
            disposed: false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    fn should_run(&self) -> bool {
        !self.disposed
            && self.interval_ms > 0
            && self.playing
            && self.in_view
            && !(self.pause_on_hover && self.hovered)
    }

    fn reschedule(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.scheduler.cancel(handle);
        }
        if self.should_run() {
            let tick = self.tick.clone();
            let handle = self
                .scheduler
                .start_interval(self.interval_ms, Box::new(move || tick()));
            self.handle = Some(handle);
        }
    }

    /// Apply all gating inputs at once; reschedules only when something changed.
    pub fn configure(&mut self, playing: bool, in_view: bool, hovered: bool, interval_ms: u32) {
        let changed = playing != self.playing
            || in_view != self.in_view
            || hovered != self.hovered
            || interval_ms != self.interval_ms;
        self.playing = playing;
        self.in_view = in_view;
        self.hovered = hovered;
        self.interval_ms = interval_ms;
        if changed {
            self.reschedule();
        }
    }

    pub fn set_playing(&mut self, playing: bool) {
        self.configure(playing, self.in_view, self.hovered, self.interval_ms);
    }

    pub fn set_in_view(&mut self, in_view: bool) {
        self.configure(self.playing, in_view, self.hovered, self.interval_ms);
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.configure(self.playing, self.in_view, hovered, self.interval_ms);
    }

    pub fn set_interval(&mut self, interval_ms: u32) {
        self.configure(self.playing, self.in_view, self.hovered, interval_ms);
    }

    /// Start the current period over, e.g. after manual navigation.
    pub fn restart(&mut self) {
        if self.handle.is_some() {
            self.reschedule();
        }
    }

    /// Cancel the interval and refuse to schedule again.
    pub fn dispose(&mut self) {
        self.disposed = true;
        self.reschedule();
    }
}

impl<S: Scheduler> Drop for AutoplayTimer<S> {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.scheduler.cancel(handle);
        }
    }
}

// ── Fake clock ──────────────────────────────────────────────────────────────

struct ManualTimer {
    id: u64,
    period_ms: u64,
    due_ms: u64,
    tick: Rc<RefCell<Box<dyn FnMut()>>>,
}

#[derive(Default)]
struct ManualClock {
    now_ms: u64,
    next_id: u64,
    timers: Vec<ManualTimer>,
}

/// Deterministic [`Scheduler`] driven by [`ManualScheduler::advance`].
///
/// Clones share the same clock, so a test can keep one handle while the
/// timer under test owns another.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: Rc<RefCell<ManualClock>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.clock.borrow().now_ms
    }

    pub fn live_timers(&self) -> usize {
        self.clock.borrow().timers.len()
    }

    /// Move time forward, firing every interval that falls due on the way.
    pub fn advance(&self, ms: u64) {
        let target = self.clock.borrow().now_ms + ms;
        loop {
            let tick = {
                let mut clock = self.clock.borrow_mut();
                let next = clock
                    .timers
                    .iter_mut()
                    .filter(|t| t.due_ms <= target)
                    .min_by_key(|t| (t.due_ms, t.id));
                let Some(timer) = next else { break };
                let due = timer.due_ms;
                timer.due_ms += timer.period_ms;
                let tick = timer.tick.clone();
                clock.now_ms = due;
                tick
            };
            (tick.borrow_mut())();
        }
        self.clock.borrow_mut().now_ms = target;
    }
}

impl Scheduler for ManualScheduler {
    type Handle = u64;

    fn start_interval(&mut self, period_ms: u32, tick: Box<dyn FnMut()>) -> u64 {
        let mut clock = self.clock.borrow_mut();
        let id = clock.next_id;
        clock.next_id += 1;
        let period_ms = u64::from(period_ms.max(1));
        let due_ms = clock.now_ms + period_ms;
        clock.timers.push(ManualTimer {
            id,
            period_ms,
            due_ms,
            tick: Rc::new(RefCell::new(tick)),
        });
        id
    }

    fn cancel(&mut self, handle: u64) {
        self.clock.borrow_mut().timers.retain(|t| t.id != handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::SlideIndex;
    use std::cell::Cell;

    fn carousel_timer(
        clock: &ManualScheduler,
        total: usize,
        interval_ms: u32,
    ) -> (AutoplayTimer<ManualScheduler>, Rc<Cell<SlideIndex>>) {
        let index = Rc::new(Cell::new(SlideIndex::new(total, true)));
        let index_tick = index.clone();
        let timer = AutoplayTimer::new(clock.clone(), interval_ms, false, move || {
            let mut idx = index_tick.get();
            idx.next();
            index_tick.set(idx);
        });
        (timer, index)
    }

    #[test]
    fn test_three_seconds_advance_three_slides() {
        let clock = ManualScheduler::new();
        let (mut timer, index) = carousel_timer(&clock, 10, 1000);
        timer.configure(true, true, false, 1000);

        clock.advance(3000);
        assert_eq!(index.get().current(), 3);
        assert_eq!(clock.live_timers(), 1);
    }

    #[test]
    fn test_repeated_reconfiguration_keeps_one_interval() {
        let clock = ManualScheduler::new();
        let (mut timer, index) = carousel_timer(&clock, 10, 1000);
        for _ in 0..5 {
            timer.configure(true, true, false, 1000);
            timer.set_playing(false);
            timer.set_playing(true);
        }
        assert_eq!(clock.live_timers(), 1);

        clock.advance(3000);
        assert_eq!(index.get().current(), 3);
    }

    #[test]
    fn test_not_in_view_does_not_schedule() {
        let clock = ManualScheduler::new();
        let (mut timer, index) = carousel_timer(&clock, 5, 1000);
        timer.configure(true, false, false, 1000);
        clock.advance(5000);
        assert_eq!(index.get().current(), 0);
        assert!(!timer.is_running());

        timer.set_in_view(true);
        clock.advance(1000);
        assert_eq!(index.get().current(), 1);
    }

    #[test]
    fn test_hover_pauses_only_when_configured() {
        let clock = ManualScheduler::new();
        let index = Rc::new(Cell::new(0usize));
        let i2 = index.clone();
        let mut timer = AutoplayTimer::new(clock.clone(), 4000, true, move || i2.set(i2.get() + 1));
        timer.configure(true, true, true, 4000);
        clock.advance(8000);
        assert_eq!(index.get(), 0);

        timer.set_hovered(false);
        clock.advance(8000);
        assert_eq!(index.get(), 2);
    }

    #[test]
    fn test_interval_change_reschedules_from_now() {
        let clock = ManualScheduler::new();
        let (mut timer, index) = carousel_timer(&clock, 10, 1000);
        timer.configure(true, true, false, 1000);
        clock.advance(500);
        timer.set_interval(2000);
        clock.advance(1500);
        assert_eq!(index.get().current(), 0);
        clock.advance(500);
        assert_eq!(index.get().current(), 1);
        assert_eq!(clock.live_timers(), 1);
    }

    #[test]
    fn test_restart_rearms_period() {
        let clock = ManualScheduler::new();
        let (mut timer, index) = carousel_timer(&clock, 10, 1000);
        timer.configure(true, true, false, 1000);
        clock.advance(900);
        timer.restart();
        clock.advance(900);
        assert_eq!(index.get().current(), 0);
        clock.advance(100);
        assert_eq!(index.get().current(), 1);
    }

    #[test]
    fn test_dispose_and_drop_cancel() {
        let clock = ManualScheduler::new();
        let (mut timer, _index) = carousel_timer(&clock, 3, 1000);
        timer.configure(true, true, false, 1000);
        timer.dispose();
        assert_eq!(clock.live_timers(), 0);
        timer.set_playing(false);
        timer.set_playing(true);
        assert_eq!(clock.live_timers(), 0);

        let (mut other, _index) = carousel_timer(&clock, 3, 1000);
        other.configure(true, true, false, 1000);
        assert_eq!(clock.live_timers(), 1);
        drop(other);
        assert_eq!(clock.live_timers(), 0);
    }
}
