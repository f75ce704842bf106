use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::debug;
use yew::Callback;

use super::scheduler::Scheduler;
use super::state::{CycleState, Highlight};
use crate::viewport::trigger::VisibilityEvent;

struct Inner<S: Scheduler> {
    state: CycleState,
    scheduler: S,
    pending: Option<S::Handle>,
    /// Bumped on every arm; a fire carrying an older epoch is stale.
    epoch: u64,
    disposed: bool,
    on_change: Callback<Highlight>,
}

/// Drives a `CycleState` off visibility edges and its own timer, pushing every change to `on_change`.
pub struct HighlightCycler<S: Scheduler + 'static> {
    inner: Rc<RefCell<Inner<S>>>,
}

impl<S: Scheduler + 'static> HighlightCycler<S> {
    pub fn new(scheduler: S, state: CycleState, on_change: Callback<Highlight>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                state,
                scheduler,
                pending: None,
                epoch: 0,
                disposed: false,
                on_change,
            })),
        }
    }

    pub fn handle(&self, event: VisibilityEvent) {
        if event.is_visible() {
            self.on_becomes_visible();
        } else {
            self.on_becomes_invisible();
        }
    }

    /// Starts a run at step 0. No-op while already running.
    pub fn on_becomes_visible(&self) {
        let published = {
            let mut inner = self.inner.borrow_mut();
            if inner.disposed || !inner.state.activate() {
                return;
            }
            debug!("highlight cycle started ({} steps)", inner.state.step_count());
            let highlight = inner.state.advance();
            Self::arm(&self.inner, &mut inner);
            let on_change = inner.on_change.clone();
            highlight.map(|highlight| (highlight, on_change))
        };
        if let Some((highlight, on_change)) = published {
            on_change.emit(highlight);
        }
    }

    /// Cancels the pending phase and clears the highlight. No-op while paused.
    pub fn on_becomes_invisible(&self) {
        let on_change = {
            let mut inner = self.inner.borrow_mut();
            inner.pending = None;
            if inner.disposed || !inner.state.deactivate() {
                return;
            }
            debug!("highlight cycle paused");
            inner.on_change.clone()
        };
        on_change.emit(Highlight::Nothing);
    }

    /// Permanently stops the cycle. Nothing is published afterwards.
    pub fn dispose(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.pending = None;
        inner.disposed = true;
        inner.state.deactivate();
    }

    #[cfg(test)]
    pub fn highlight(&self) -> Highlight {
        self.inner.borrow().state.highlight()
    }

    #[cfg(test)]
    pub fn is_active(&self) -> bool {
        self.inner.borrow().state.is_active()
    }

    fn arm(this: &Rc<RefCell<Inner<S>>>, inner: &mut Inner<S>) {
        inner.epoch += 1;
        let epoch = inner.epoch;
        let weak = Rc::downgrade(this);
        let delay = inner.state.step_duration_ms();
        // Replacing the handle drops, and so cancels, whatever was still pending
        inner.pending = Some(inner.scheduler.schedule(delay, Box::new(move || Self::advance(&weak, epoch))));
    }

    fn advance(weak: &Weak<RefCell<Inner<S>>>, epoch: u64) {
        let Some(this) = weak.upgrade() else {
            return;
        };
        let published = {
            let mut inner = this.borrow_mut();
            if inner.disposed || inner.epoch != epoch || !inner.state.is_active() {
                return;
            }
            let highlight = inner.state.advance();
            Self::arm(&this, &mut inner);
            let on_change = inner.on_change.clone();
            highlight.map(|highlight| (highlight, on_change))
        };
        if let Some((highlight, on_change)) = published {
            debug!("highlight phase: {:?}", highlight);
            on_change.emit(highlight);
        }
    }
}

impl<S: Scheduler + 'static> Drop for HighlightCycler<S> {
    fn drop(&mut self) {
        self.dispose();
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroUsize;

    use super::super::scheduler::ManualScheduler;
    use super::*;

    type Published = Rc<RefCell<Vec<(u64, Highlight)>>>;

    fn cycler(steps: usize, clock: &ManualScheduler) -> (HighlightCycler<ManualScheduler>, Published) {
        let published: Published = Rc::default();
        let on_change = {
            let published = published.clone();
            let clock = clock.clone();
            Callback::from(move |highlight: Highlight| published.borrow_mut().push((clock.now(), highlight)))
        };
        let state = CycleState::new(NonZeroUsize::new(steps).unwrap()).with_step_duration(5_000);
        (HighlightCycler::new(clock.clone(), state, on_change), published)
    }

    fn phases(published: &Published) -> Vec<Highlight> {
        published.borrow().iter().map(|(_, highlight)| *highlight).collect()
    }

    #[test]
    fn eight_steps_then_all_then_restart() {
        let clock = ManualScheduler::new();
        let (cycler, published) = cycler(8, &clock);

        cycler.on_becomes_visible();
        clock.advance_to(45_000);

        let mut expected: Vec<(u64, Highlight)> = (0..8).map(|i| (i as u64 * 5_000, Highlight::Step(i))).collect();
        expected.push((40_000, Highlight::All));
        expected.push((45_000, Highlight::Step(0)));
        assert_eq!(*published.borrow(), expected);
    }

    #[test]
    fn second_visible_event_neither_reschedules_nor_resets() {
        let clock = ManualScheduler::new();
        let (cycler, published) = cycler(8, &clock);

        cycler.on_becomes_visible();
        clock.advance_to(10_000);
        cycler.handle(VisibilityEvent::EnterBack);
        cycler.on_becomes_visible();

        assert_eq!(clock.pending(), 1);
        assert_eq!(phases(&published), vec![Highlight::Step(0), Highlight::Step(1), Highlight::Step(2)]);

        clock.advance_to(15_000);
        assert_eq!(published.borrow().last(), Some(&(15_000, Highlight::Step(3))));
    }

    #[test]
    fn pause_between_phases_clears_and_goes_quiet() {
        let clock = ManualScheduler::new();
        let (cycler, published) = cycler(8, &clock);

        cycler.on_becomes_visible();
        clock.advance_to(12_500);
        cycler.handle(VisibilityEvent::Leave);

        assert_eq!(published.borrow().last(), Some(&(12_500, Highlight::Nothing)));
        assert_eq!(clock.pending(), 0);
        assert!(!cycler.is_active());

        let count = published.borrow().len();
        clock.advance_to(120_000);
        assert_eq!(published.borrow().len(), count);
    }

    #[test]
    fn reactivation_restarts_from_first_step() {
        let clock = ManualScheduler::new();
        let (cycler, published) = cycler(8, &clock);

        cycler.on_becomes_visible();
        clock.advance_to(15_000);
        assert_eq!(cycler.highlight(), Highlight::Step(3));

        cycler.on_becomes_invisible();
        clock.advance_to(30_000);
        cycler.handle(VisibilityEvent::EnterBack);

        assert_eq!(published.borrow().last(), Some(&(30_000, Highlight::Step(0))));
        clock.advance_to(35_000);
        assert_eq!(published.borrow().last(), Some(&(35_000, Highlight::Step(1))));
    }

    #[test]
    fn pausing_while_paused_publishes_nothing() {
        let clock = ManualScheduler::new();
        let (cycler, published) = cycler(3, &clock);

        cycler.on_becomes_invisible();
        cycler.handle(VisibilityEvent::LeaveBack);
        assert!(published.borrow().is_empty());
    }

    #[test]
    fn nothing_published_after_dispose() {
        let clock = ManualScheduler::new();
        let (cycler, published) = cycler(8, &clock);

        cycler.on_becomes_visible();
        clock.advance_to(7_000);
        cycler.dispose();
        assert_eq!(clock.pending(), 0);

        cycler.on_becomes_visible();
        cycler.on_becomes_invisible();
        clock.advance_to(100_000);
        assert_eq!(phases(&published), vec![Highlight::Step(0), Highlight::Step(1)]);
    }

    #[test]
    fn dropping_the_cycler_cancels_its_timer() {
        let clock = ManualScheduler::new();
        let (cycler, published) = cycler(8, &clock);

        cycler.on_becomes_visible();
        drop(cycler);
        assert_eq!(clock.pending(), 0);
        clock.advance_to(50_000);
        assert_eq!(published.borrow().len(), 1);
    }

    #[test]
    fn single_step_alternates_with_all() {
        let clock = ManualScheduler::new();
        let (cycler, published) = cycler(1, &clock);

        cycler.on_becomes_visible();
        clock.advance_to(25_000);

        assert_eq!(
            phases(&published),
            vec![
                Highlight::Step(0),
                Highlight::All,
                Highlight::Step(0),
                Highlight::All,
                Highlight::Step(0),
                Highlight::All,
            ]
        );
    }

    #[test]
    fn uncancelled_timer_after_pause_is_ignored() {
        let clock = ManualScheduler::leaky();
        let (cycler, published) = cycler(8, &clock);

        cycler.on_becomes_visible();
        cycler.on_becomes_invisible();
        clock.advance_to(5_000);

        assert_eq!(phases(&published), vec![Highlight::Step(0), Highlight::Nothing]);
    }

    #[test]
    fn stale_timer_does_not_double_advance_a_new_run() {
        let clock = ManualScheduler::leaky();
        let (cycler, published) = cycler(8, &clock);

        cycler.on_becomes_visible();
        clock.advance_to(2_000);
        cycler.on_becomes_invisible();
        cycler.on_becomes_visible();

        // The first run's timer still fires at 5s; only the new run's timer at 7s may advance
        clock.advance_to(6_000);
        assert_eq!(published.borrow().last(), Some(&(2_000, Highlight::Step(0))));
        clock.advance_to(7_000);
        assert_eq!(published.borrow().last(), Some(&(7_000, Highlight::Step(1))));
    }

    #[test]
    fn rapid_toggling_leaves_a_single_timer() {
        let clock = ManualScheduler::new();
        let (cycler, published) = cycler(1, &clock);

        for _ in 0..5 {
            cycler.on_becomes_visible();
            cycler.on_becomes_invisible();
        }
        cycler.on_becomes_visible();
        assert_eq!(clock.pending(), 1);

        clock.advance_to(15_000);
        let tail: Vec<_> = published.borrow().iter().rev().take(4).rev().copied().collect();
        assert_eq!(
            tail,
            vec![
                (0, Highlight::Step(0)),
                (5_000, Highlight::All),
                (10_000, Highlight::Step(0)),
                (15_000, Highlight::All),
            ]
        );
    }

    #[test]
    fn leaked_timer_after_dispose_is_ignored() {
        let clock = ManualScheduler::leaky();
        let (cycler, published) = cycler(8, &clock);

        cycler.on_becomes_visible();
        cycler.dispose();
        clock.advance_to(20_000);
        assert_eq!(phases(&published), vec![Highlight::Step(0)]);
    }
}
