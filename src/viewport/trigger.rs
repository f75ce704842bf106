/// Edge-triggered viewport transitions for one section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VisibilityEvent {
    /// Scrolled down into view.
    Enter,
    /// Scrolled back up into view.
    EnterBack,
    /// Left through the top of the viewport (scrolling down).
    Leave,
    /// Left through the bottom of the viewport (scrolling up).
    LeaveBack,
}

impl VisibilityEvent {
    pub fn is_visible(self) -> bool {
        matches!(self, VisibilityEvent::Enter | VisibilityEvent::EnterBack)
    }
}

/// "Fire when the top of the section reaches `start_percent`% of the viewport height."
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewportTrigger {
    pub start_percent: u8,
}

impl ViewportTrigger {
    pub const fn top_at(start_percent: u8) -> Self {
        let start_percent = if start_percent > 100 { 100 } else { start_percent };
        Self { start_percent }
    }

    /// Observer root margin that shrinks the viewport bottom up to the start line.
    pub fn root_margin(&self) -> String {
        format!("0px 0px -{}% 0px", 100 - self.start_percent)
    }
}

/// Turns raw intersection notifications into direction-aware edges.
#[derive(Debug, Default)]
pub struct VisibilityTracker {
    intersecting: Option<bool>,
}

impl VisibilityTracker {
    pub fn observe(&mut self, is_intersecting: bool, top: f64) -> Option<VisibilityEvent> {
        let previous = self.intersecting.replace(is_intersecting);
        match (previous, is_intersecting) {
            (Some(was), now) if was == now => None,
            // The first notification only counts if the section starts out visible
            (None, false) => None,
            (_, true) if top >= 0.0 => Some(VisibilityEvent::Enter),
            (_, true) => Some(VisibilityEvent::EnterBack),
            (_, false) if top < 0.0 => Some(VisibilityEvent::Leave),
            (_, false) => Some(VisibilityEvent::LeaveBack),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_margin_cuts_viewport_at_start_line() {
        assert_eq!(ViewportTrigger::top_at(80).root_margin(), "0px 0px -20% 0px");
        assert_eq!(ViewportTrigger::top_at(85).root_margin(), "0px 0px -15% 0px");
        assert_eq!(ViewportTrigger::top_at(100).root_margin(), "0px 0px -0% 0px");
        assert_eq!(ViewportTrigger::top_at(150).start_percent, 100);
    }

    #[test]
    fn scrolling_down_through_a_section() {
        let mut tracker = VisibilityTracker::default();
        assert_eq!(tracker.observe(false, 900.0), None);
        assert_eq!(tracker.observe(true, 600.0), Some(VisibilityEvent::Enter));
        assert_eq!(tracker.observe(false, -1200.0), Some(VisibilityEvent::Leave));
    }

    #[test]
    fn scrolling_back_up_through_a_section() {
        let mut tracker = VisibilityTracker::default();
        tracker.observe(true, 300.0);
        tracker.observe(false, -1200.0);
        assert_eq!(tracker.observe(true, -400.0), Some(VisibilityEvent::EnterBack));
        assert_eq!(tracker.observe(false, 700.0), Some(VisibilityEvent::LeaveBack));
    }

    #[test]
    fn repeated_notifications_are_not_edges() {
        let mut tracker = VisibilityTracker::default();
        assert_eq!(tracker.observe(true, 10.0), Some(VisibilityEvent::Enter));
        assert_eq!(tracker.observe(true, -10.0), None);
        assert_eq!(tracker.observe(false, 800.0), Some(VisibilityEvent::LeaveBack));
        assert_eq!(tracker.observe(false, 900.0), None);
    }

    #[test]
    fn section_visible_on_load_enters_back_when_already_scrolled_past_its_top() {
        let mut tracker = VisibilityTracker::default();
        assert_eq!(tracker.observe(true, -50.0), Some(VisibilityEvent::EnterBack));
    }

    #[test]
    fn only_enter_events_are_visible() {
        assert!(VisibilityEvent::Enter.is_visible());
        assert!(VisibilityEvent::EnterBack.is_visible());
        assert!(!VisibilityEvent::Leave.is_visible());
        assert!(!VisibilityEvent::LeaveBack.is_visible());
    }
}
