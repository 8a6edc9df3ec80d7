use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::debug;

use super::timer::TimerService;
use crate::error::FeatureError;

/// Anything the slideshow can switch on and off: a slide or its indicator.
pub trait Activatable {
    fn set_active(&self, active: bool);
}

struct State<E, T: TimerService> {
    slides: Vec<E>,
    indicators: Vec<E>,
    timer: T,
    period_ms: u32,
    /// 1-based ordinal of the visible slide.
    current: usize,
    ticker: Option<T::Handle>,
}

impl<E, T: TimerService> State<E, T> {
    fn stop(&mut self) {
        if let Some(handle) = self.ticker.take() {
            self.timer.cancel(handle);
        }
    }
}

impl<E, T: TimerService> Drop for State<E, T> {
    fn drop(&mut self) {
        self.stop();
    }
}

impl<E: Activatable, T: TimerService> State<E, T> {
    fn render(&mut self, position: i64) {
        let len = self.slides.len();
        if len == 0 {
            return;
        }

        // Single-step wrap only: N + 2 lands on 1, not 2.
        let position = if position > len as i64 {
            1
        } else if position < 1 {
            len
        } else {
            position as usize
        };
        self.current = position;

        for element in self.slides.iter().chain(self.indicators.iter()) {
            element.set_active(false);
        }
        self.slides[position - 1].set_active(true);
        self.indicators[position - 1].set_active(true);
    }
}

/// Rotating announcement slideshow.
///
/// Owns the current position and the auto-advance timer. Cloning yields
/// another handle to the same slideshow, so event callbacks can each hold
/// one. All methods take `&self`.
pub struct SlideshowController<E, T: TimerService> {
    state: Rc<RefCell<State<E, T>>>,
}

impl<E, T: TimerService> Clone for SlideshowController<E, T> {
    fn clone(&self) -> Self {
        Self { state: self.state.clone() }
    }
}

impl<E, T> SlideshowController<E, T>
where
    E: Activatable + 'static,
    T: TimerService + 'static,
{
    /// Takes ownership of the captured slides and indicators. They must pair
    /// up one to one.
    pub fn new(slides: Vec<E>, indicators: Vec<E>, timer: T, period_ms: u32) -> Result<Self, FeatureError> {
        if slides.len() != indicators.len() {
            return Err(FeatureError::CountMismatch {
                slides: slides.len(),
                indicators: indicators.len(),
            });
        }

        Ok(Self {
            state: Rc::new(RefCell::new(State {
                slides,
                indicators,
                timer,
                period_ms,
                current: 1,
                ticker: None,
            })),
        })
    }

    /// Shows the first slide and starts rotating. An empty slideshow is left
    /// untouched and reported back as `EmptyCollection`.
    pub fn initialize(&self) -> Result<(), FeatureError> {
        {
            let mut state = self.state.borrow_mut();
            if state.slides.is_empty() {
                return Err(FeatureError::EmptyCollection);
            }
            state.current = 1;
            state.render(1);
        }
        self.restart_timer();
        Ok(())
    }

    /// Displays `position`, wrapping one step past either end.
    pub fn render(&self, position: i64) {
        self.state.borrow_mut().render(position);
    }

    pub fn advance(&self, delta: i64) {
        {
            let mut state = self.state.borrow_mut();
            let target = (state.current as i64).saturating_add(delta);
            state.render(target);
            debug!("slideshow advanced by {} to {}", delta, state.current);
        }
        self.restart_timer();
    }

    pub fn jump_to(&self, position: i64) {
        {
            let mut state = self.state.borrow_mut();
            state.render(position);
            debug!("slideshow jumped to {}", state.current);
        }
        self.restart_timer();
    }

    pub fn pause(&self) {
        self.state.borrow_mut().stop();
    }

    /// Starts a fresh full period; the phase before a pause is not kept.
    pub fn resume(&self) {
        self.restart_timer();
    }

    pub fn current_position(&self) -> usize {
        self.state.borrow().current
    }

    pub fn len(&self) -> usize {
        self.state.borrow().slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_playing(&self) -> bool {
        self.state.borrow().ticker.is_some()
    }

    fn restart_timer(&self) {
        let weak: Weak<RefCell<State<E, T>>> = Rc::downgrade(&self.state);
        let mut state = self.state.borrow_mut();
        state.stop();
        if state.slides.is_empty() {
            return;
        }

        let tick = Box::new(move || {
            if let Some(state) = weak.upgrade() {
                SlideshowController { state }.advance(1);
            }
        });
        let period_ms = state.period_ms;
        let handle = state.timer.start_repeating(period_ms, tick);
        state.ticker = Some(handle);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use mockall::predicate::eq;

    use super::*;
    use crate::slideshow::timer::testing::ManualClock;
    use crate::slideshow::timer::MockTimerService;

    const PERIOD: u32 = 3_000;

    #[derive(Clone, Default)]
    struct Flag(Rc<Cell<bool>>);

    impl Activatable for Flag {
        fn set_active(&self, active: bool) {
            self.0.set(active);
        }
    }

    struct Fixture {
        slides: Vec<Flag>,
        indicators: Vec<Flag>,
        clock: ManualClock,
        slideshow: SlideshowController<Flag, ManualClock>,
    }

    impl Fixture {
        fn new(count: usize) -> Self {
            let slides: Vec<Flag> = (0..count).map(|_| Flag::default()).collect();
            let indicators: Vec<Flag> = (0..count).map(|_| Flag::default()).collect();
            let clock = ManualClock::new();
            let slideshow =
                SlideshowController::new(slides.clone(), indicators.clone(), clock.clone(), PERIOD)
                    .expect("counts match");
            Self { slides, indicators, clock, slideshow }
        }

        fn active(flags: &[Flag]) -> Vec<usize> {
            flags
                .iter()
                .enumerate()
                .filter(|(_, f)| f.0.get())
                .map(|(i, _)| i + 1)
                .collect()
        }

        fn active_slides(&self) -> Vec<usize> {
            Self::active(&self.slides)
        }

        fn active_indicators(&self) -> Vec<usize> {
            Self::active(&self.indicators)
        }
    }

    #[test]
    fn initialize_shows_first_slide_and_starts_timer() {
        let f = Fixture::new(3);
        f.slideshow.initialize().expect("has slides");

        assert_eq!(f.slideshow.current_position(), 1);
        assert_eq!(f.active_slides(), vec![1]);
        assert_eq!(f.active_indicators(), vec![1]);
        assert!(f.slideshow.is_playing());
        assert_eq!(f.clock.active_timers(), 1);
    }

    #[test]
    fn render_wraps_a_single_step_past_either_end() {
        let f = Fixture::new(4);

        f.slideshow.render(5);
        assert_eq!(f.slideshow.current_position(), 1);

        f.slideshow.render(0);
        assert_eq!(f.slideshow.current_position(), 4);

        // Not modular: anything beyond the end lands on the first slide.
        f.slideshow.render(6);
        assert_eq!(f.slideshow.current_position(), 1);

        f.slideshow.render(-7);
        assert_eq!(f.slideshow.current_position(), 4);
    }

    #[test]
    fn render_keeps_position_in_range_for_any_request() {
        for count in 1..=5usize {
            let f = Fixture::new(count);
            for requested in -10..=10i64 {
                f.slideshow.render(requested);
                let position = f.slideshow.current_position();
                assert!((1..=count).contains(&position), "{} of {}", position, count);
            }
        }
    }

    #[test]
    fn exactly_one_slide_and_indicator_are_active() {
        let f = Fixture::new(5);
        for requested in [3, 1, 6, 0, 2, 2] {
            f.slideshow.render(requested);
            let position = f.slideshow.current_position();
            assert_eq!(f.active_slides(), vec![position]);
            assert_eq!(f.active_indicators(), vec![position]);
        }
    }

    #[test]
    fn advance_matches_rendering_the_next_position() {
        let f = Fixture::new(3);
        let g = Fixture::new(3);
        for start in 1..=3 {
            f.slideshow.render(start);
            g.slideshow.render(start);

            f.slideshow.advance(1);
            g.slideshow.render(start + 1);
            assert_eq!(f.slideshow.current_position(), g.slideshow.current_position());
        }
    }

    #[test]
    fn previous_from_first_wraps_to_last() {
        let f = Fixture::new(3);
        f.slideshow.initialize().expect("has slides");
        f.slideshow.advance(-1);
        assert_eq!(f.slideshow.current_position(), 3);
        assert_eq!(f.active_slides(), vec![3]);
    }

    #[test]
    fn extreme_deltas_wrap_without_overflow() {
        let f = Fixture::new(3);
        f.slideshow.initialize().expect("has slides");
        f.slideshow.jump_to(3);

        f.slideshow.advance(i64::MAX);
        assert_eq!(f.slideshow.current_position(), 1);

        f.slideshow.advance(i64::MIN);
        assert_eq!(f.slideshow.current_position(), 3);
        assert_eq!(f.active_slides(), vec![3]);
    }

    #[test]
    fn manual_navigation_restarts_the_period() {
        let f = Fixture::new(4);
        f.slideshow.initialize().expect("has slides");

        f.clock.advance(2_000);
        f.slideshow.advance(1);
        assert_eq!(f.slideshow.current_position(), 2);

        // The old timer would have fired 1000ms from here.
        f.clock.advance(2_999);
        assert_eq!(f.slideshow.current_position(), 2);
        f.clock.advance(1);
        assert_eq!(f.slideshow.current_position(), 3);
        assert_eq!(f.clock.active_timers(), 1);
    }

    #[test]
    fn jump_restarts_the_period() {
        let f = Fixture::new(4);
        f.slideshow.initialize().expect("has slides");

        f.clock.advance(2_500);
        f.slideshow.jump_to(4);
        f.clock.advance(2_999);
        assert_eq!(f.slideshow.current_position(), 4);
        f.clock.advance(1);
        assert_eq!(f.slideshow.current_position(), 1);
    }

    #[test]
    fn tick_behaves_like_next() {
        let ticked = Fixture::new(3);
        let clicked = Fixture::new(3);
        ticked.slideshow.initialize().expect("has slides");
        clicked.slideshow.initialize().expect("has slides");

        for _ in 0..4 {
            ticked.clock.advance(u64::from(PERIOD));
            clicked.slideshow.advance(1);
            assert_eq!(ticked.slideshow.current_position(), clicked.slideshow.current_position());
            assert_eq!(ticked.active_slides(), clicked.active_slides());
        }
    }

    #[test]
    fn pause_stops_rotation_and_resume_starts_a_full_period() {
        let f = Fixture::new(3);
        f.slideshow.initialize().expect("has slides");

        f.clock.advance(2_900);
        f.slideshow.pause();
        f.slideshow.pause();
        assert!(!f.slideshow.is_playing());
        assert_eq!(f.clock.active_timers(), 0);

        f.clock.advance(10_000);
        assert_eq!(f.slideshow.current_position(), 1);

        f.slideshow.resume();
        assert_eq!(f.clock.active_timers(), 1);
        f.clock.advance(2_999);
        assert_eq!(f.slideshow.current_position(), 1);
        f.clock.advance(1);
        assert_eq!(f.slideshow.current_position(), 2);
    }

    #[test]
    fn resume_while_playing_keeps_a_single_timer() {
        let f = Fixture::new(3);
        f.slideshow.initialize().expect("has slides");
        f.slideshow.resume();
        f.slideshow.resume();
        assert_eq!(f.clock.active_timers(), 1);
    }

    #[test]
    fn pause_leaves_the_visible_slide_alone() {
        let f = Fixture::new(3);
        f.slideshow.initialize().expect("has slides");
        f.slideshow.jump_to(2);
        f.slideshow.pause();
        assert_eq!(f.slideshow.current_position(), 2);
        assert_eq!(f.active_slides(), vec![2]);
    }

    #[test]
    fn empty_slideshow_is_inert() {
        let f = Fixture::new(0);
        assert!(f.slideshow.is_empty());
        assert_eq!(f.slideshow.initialize(), Err(FeatureError::EmptyCollection));

        f.slideshow.render(1);
        f.slideshow.render(-3);
        f.slideshow.advance(1);
        f.slideshow.jump_to(2);
        f.slideshow.resume();
        assert!(!f.slideshow.is_playing());
        assert_eq!(f.clock.active_timers(), 0);
        assert!(f.active_slides().is_empty());
        assert!(f.active_indicators().is_empty());
    }

    #[test]
    fn mismatched_indicators_are_rejected() {
        let slides = vec![Flag::default(), Flag::default(), Flag::default()];
        let indicators = vec![Flag::default(), Flag::default()];
        let result = SlideshowController::new(slides, indicators, ManualClock::new(), PERIOD);
        assert!(matches!(
            result,
            Err(FeatureError::CountMismatch { slides: 3, indicators: 2 })
        ));
    }

    #[test]
    fn dropping_the_slideshow_cancels_its_timer() {
        let f = Fixture::new(3);
        f.slideshow.initialize().expect("has slides");
        let clock = f.clock.clone();
        drop(f);
        assert_eq!(clock.active_timers(), 0);
    }

    #[test]
    fn three_slide_walkthrough() {
        let f = Fixture::new(3);
        f.slideshow.initialize().expect("has slides");
        assert_eq!(f.active_slides(), vec![1]);
        assert_eq!(f.active_indicators(), vec![1]);
        assert!(f.slideshow.is_playing());

        f.clock.advance(u64::from(PERIOD));
        assert_eq!(f.active_slides(), vec![2]);

        f.slideshow.jump_to(3);
        assert_eq!(f.active_slides(), vec![3]);
        f.clock.advance(u64::from(PERIOD) - 1);
        assert_eq!(f.active_slides(), vec![3]);

        f.slideshow.advance(1);
        assert_eq!(f.active_slides(), vec![1]);
        assert_eq!(f.active_indicators(), vec![1]);
    }

    #[test]
    fn timer_service_sees_one_start_per_restart_and_one_cancel_per_pause() {
        let mut timer = MockTimerService::new();
        let mut seq = mockall::Sequence::new();
        timer
            .expect_start_repeating()
            .with(eq(PERIOD), mockall::predicate::always())
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| 1);
        timer
            .expect_cancel()
            .with(eq(1))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        timer
            .expect_start_repeating()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| 2);
        timer
            .expect_cancel()
            .with(eq(2))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());

        let slides = vec![Flag::default(), Flag::default()];
        let indicators = vec![Flag::default(), Flag::default()];
        let slideshow = SlideshowController::new(slides, indicators, timer, PERIOD).expect("counts match");

        slideshow.initialize().expect("has slides");
        slideshow.pause();
        slideshow.pause();
        slideshow.resume();
        slideshow.pause();
    }
}
