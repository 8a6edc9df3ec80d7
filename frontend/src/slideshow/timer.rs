use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use wasm_bindgen_futures::spawn_local;

/// Callback run on every timer tick.
pub type Tick = Box<dyn FnMut()>;

/// Repeating timers as the slideshow sees them.
///
/// `cancel` must take effect before it returns: once a handle is cancelled
/// its callback never runs again.
#[cfg_attr(test, mockall::automock(type Handle = u64;))]
pub trait TimerService {
    type Handle;

    fn start_repeating(&self, period_ms: u32, callback: Tick) -> Self::Handle;

    fn cancel(&self, handle: Self::Handle);
}

/// Browser timers backed by `setInterval`.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTimers;

impl TimerService for GlooTimers {
    type Handle = Interval;

    fn start_repeating(&self, period_ms: u32, callback: Tick) -> Interval {
        let callback = Rc::new(RefCell::new(callback));
        // The tick runs as a microtask so the callback may cancel (drop) the
        // very interval that fired it.
        Interval::new(period_ms, move || {
            let callback = callback.clone();
            spawn_local(async move {
                (callback.borrow_mut())();
            });
        })
    }

    fn cancel(&self, handle: Interval) {
        drop(handle);
    }
}

#[cfg(test)]
pub mod testing {
    use std::cell::RefCell;
    use std::collections::BTreeMap;
    use std::rc::Rc;

    use super::{Tick, TimerService};

    type Callback = Rc<RefCell<Tick>>;

    struct Scheduled {
        period: u64,
        due: u64,
        callback: Callback,
    }

    #[derive(Default)]
    struct ClockState {
        now: u64,
        next_id: u64,
        timers: BTreeMap<u64, Scheduled>,
    }

    /// Virtual time for driving timers deterministically in tests.
    #[derive(Clone, Default)]
    pub struct ManualClock {
        state: Rc<RefCell<ClockState>>,
    }

    impl ManualClock {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn now(&self) -> u64 {
            self.state.borrow().now
        }

        pub fn active_timers(&self) -> usize {
            self.state.borrow().timers.len()
        }

        /// Moves time forward, firing every tick that falls due on the way in
        /// chronological order.
        pub fn advance(&self, ms: u64) {
            let target = self.now() + ms;
            loop {
                let next = {
                    let mut state = self.state.borrow_mut();
                    let due = state
                        .timers
                        .iter()
                        .filter(|(_, t)| t.due <= target)
                        .min_by_key(|(id, t)| (t.due, **id))
                        .map(|(id, _)| *id);
                    match due {
                        Some(id) => {
                            let timer = state.timers.get_mut(&id).expect("timer just found");
                            let fired_at = timer.due;
                            timer.due += timer.period;
                            let callback = timer.callback.clone();
                            state.now = fired_at;
                            Some(callback)
                        }
                        None => None,
                    }
                };
                match next {
                    Some(callback) => (callback.borrow_mut())(),
                    None => break,
                }
            }
            self.state.borrow_mut().now = target;
        }
    }

    impl TimerService for ManualClock {
        type Handle = u64;

        fn start_repeating(&self, period_ms: u32, callback: Tick) -> u64 {
            let mut state = self.state.borrow_mut();
            let id = state.next_id;
            state.next_id += 1;
            let period = u64::from(period_ms.max(1));
            let due = state.now + period;
            state.timers.insert(
                id,
                Scheduled {
                    period,
                    due,
                    callback: Rc::new(RefCell::new(callback)),
                },
            );
            id
        }

        fn cancel(&self, handle: u64) {
            self.state.borrow_mut().timers.remove(&handle);
        }
    }

    mod tests {
        use std::cell::Cell;

        use super::*;

        #[test]
        fn fires_once_per_period() {
            let clock = ManualClock::new();
            let ticks = Rc::new(Cell::new(0));
            let counter = ticks.clone();
            clock.start_repeating(100, Box::new(move || counter.set(counter.get() + 1)));

            clock.advance(99);
            assert_eq!(ticks.get(), 0);
            clock.advance(1);
            assert_eq!(ticks.get(), 1);
            clock.advance(250);
            assert_eq!(ticks.get(), 3);
            assert_eq!(clock.now(), 350);
        }

        #[test]
        fn cancelled_timer_never_fires() {
            let clock = ManualClock::new();
            let ticks = Rc::new(Cell::new(0));
            let counter = ticks.clone();
            let handle = clock.start_repeating(100, Box::new(move || counter.set(counter.get() + 1)));

            clock.cancel(handle);
            clock.advance(1_000);
            assert_eq!(ticks.get(), 0);
            assert_eq!(clock.active_timers(), 0);
        }
    }
}
