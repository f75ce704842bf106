use log::Level;

use crate::viewport::trigger::ViewportTrigger;

/// How long each highlight phase stays on screen.
pub const STEP_DURATION_MS: u32 = 5_000;

pub const CYCLE_TRIGGER: ViewportTrigger = ViewportTrigger::top_at(80);
pub const HEADER_REVEAL_TRIGGER: ViewportTrigger = ViewportTrigger::top_at(90);
pub const GRID_REVEAL_TRIGGER: ViewportTrigger = ViewportTrigger::top_at(85);

/// Background drifts down by at most this share of its height over a full page scroll.
pub const PARALLAX_MAX_PERCENT: f64 = 20.0;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Chatty phase logs while developing
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
