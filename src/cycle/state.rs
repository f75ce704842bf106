use std::num::NonZeroUsize;

use crate::config::STEP_DURATION_MS;

/// What the step grid should show right now.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Highlight {
    /// Paused or not started.
    #[default]
    Nothing,
    Step(usize),
    All,
}

impl Highlight {
    pub fn highlighted_index(self) -> Option<usize> {
        match self {
            Highlight::Step(index) => Some(index),
            _ => None,
        }
    }

    pub fn highlight_all(self) -> bool {
        self == Highlight::All
    }

    pub fn is_highlighted(self, index: usize) -> bool {
        self.highlight_all() || self.highlighted_index() == Some(index)
    }
}

/// Phase bookkeeping for the auto-highlight loop: step 0..N-1, then all, then again.
#[derive(Clone, Debug)]
pub struct CycleState {
    step_count: NonZeroUsize,
    current_step: usize,
    highlight: Highlight,
    active: bool,
    step_duration_ms: u32,
}

impl CycleState {
    pub fn new(step_count: NonZeroUsize) -> Self {
        Self {
            step_count,
            current_step: 0,
            highlight: Highlight::Nothing,
            active: false,
            step_duration_ms: STEP_DURATION_MS,
        }
    }

    pub fn with_step_duration(mut self, step_duration_ms: u32) -> Self {
        self.step_duration_ms = step_duration_ms;
        self
    }

    /// Starts a fresh run from step 0. Returns false if already running.
    pub fn activate(&mut self) -> bool {
        if self.active {
            return false;
        }
        self.active = true;
        self.current_step = 0;
        true
    }

    /// Returns false if there was nothing to pause.
    pub fn deactivate(&mut self) -> bool {
        if !self.active {
            return false;
        }
        self.active = false;
        self.highlight = Highlight::Nothing;
        true
    }

    /// Moves to the next phase. `None` when paused.
    pub fn advance(&mut self) -> Option<Highlight> {
        if !self.active {
            return None;
        }

        if self.current_step < self.step_count.get() {
            self.highlight = Highlight::Step(self.current_step);
            self.current_step += 1;
        } else {
            self.highlight = Highlight::All;
            self.current_step = 0;
        }
        Some(self.highlight)
    }

    #[cfg(test)]
    pub fn highlight(&self) -> Highlight {
        self.highlight
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    #[cfg(test)]
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn step_count(&self) -> usize {
        self.step_count.get()
    }

    pub fn step_duration_ms(&self) -> u32 {
        self.step_duration_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(steps: usize) -> CycleState {
        CycleState::new(NonZeroUsize::new(steps).unwrap())
    }

    #[test]
    fn highlight_flags() {
        assert_eq!(Highlight::Step(3).highlighted_index(), Some(3));
        assert!(!Highlight::Step(3).highlight_all());
        assert_eq!(Highlight::All.highlighted_index(), None);
        assert!(Highlight::All.highlight_all());
        assert_eq!(Highlight::Nothing.highlighted_index(), None);
        assert!(!Highlight::Nothing.highlight_all());
    }

    #[test]
    fn card_is_highlighted_when_picked_or_all() {
        assert!(Highlight::Step(2).is_highlighted(2));
        assert!(!Highlight::Step(2).is_highlighted(1));
        assert!((0..8).all(|i| Highlight::All.is_highlighted(i)));
        assert!((0..8).all(|i| !Highlight::Nothing.is_highlighted(i)));
    }

    #[test]
    fn advance_walks_steps_then_all() {
        let mut cycle = state(3);
        assert!(cycle.activate());
        let phases: Vec<_> = (0..9).filter_map(|_| cycle.advance()).collect();
        assert_eq!(
            phases,
            vec![
                Highlight::Step(0),
                Highlight::Step(1),
                Highlight::Step(2),
                Highlight::All,
                Highlight::Step(0),
                Highlight::Step(1),
                Highlight::Step(2),
                Highlight::All,
                Highlight::Step(0),
            ]
        );
    }

    #[test]
    fn paused_state_publishes_nothing() {
        let mut cycle = state(4);
        assert_eq!(cycle.advance(), None);
        cycle.activate();
        cycle.advance();
        cycle.advance();
        assert!(cycle.deactivate());
        assert_eq!(cycle.highlight(), Highlight::Nothing);
        assert!(!cycle.is_active());
        assert_eq!(cycle.advance(), None);
        assert!(!cycle.deactivate());
    }

    #[test]
    fn activation_is_idempotent_and_restarts_at_zero() {
        let mut cycle = state(5);
        assert!(cycle.activate());
        cycle.advance();
        cycle.advance();
        assert!(!cycle.activate());
        assert_eq!(cycle.current_step(), 2);

        cycle.deactivate();
        assert!(cycle.activate());
        assert_eq!(cycle.current_step(), 0);
        assert_eq!(cycle.advance(), Some(Highlight::Step(0)));
    }

    #[test]
    fn defaults_to_five_second_phases() {
        let cycle = state(8);
        assert_eq!(cycle.step_duration_ms(), 5_000);
        assert_eq!(cycle.step_count(), 8);
        assert_eq!(cycle.with_step_duration(250).step_duration_ms(), 250);
    }
}
