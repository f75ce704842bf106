use std::num::NonZeroUsize;
use std::rc::Rc;

use yew::prelude::*;

use super::cycler::HighlightCycler;
use super::scheduler::BrowserScheduler;
use super::state::{CycleState, Highlight};
use crate::config;
use crate::viewport::observer::SectionObserver;
use crate::viewport::trigger::VisibilityEvent;

/// Auto-highlight for a grid of `step_count` cards inside `section`.
/// Runs only while the section is on screen and restarts at step 0 on every return.
#[hook]
pub fn use_highlight_cycle(section: NodeRef, step_count: usize) -> Highlight {
    let highlight = use_state(Highlight::default);

    {
        let setter = highlight.setter();
        use_effect_with_deps(
            move |step_count| {
                let cycler = NonZeroUsize::new(*step_count).map(|steps| {
                    let state = CycleState::new(steps).with_step_duration(config::STEP_DURATION_MS);
                    Rc::new(HighlightCycler::new(
                        BrowserScheduler,
                        state,
                        Callback::from(move |highlight: Highlight| setter.set(highlight)),
                    ))
                });

                let observer = cycler.as_ref().and_then(|cycler| {
                    let on_event = {
                        let cycler = Rc::downgrade(cycler);
                        Callback::from(move |event: VisibilityEvent| {
                            if let Some(cycler) = cycler.upgrade() {
                                cycler.handle(event);
                            }
                        })
                    };
                    match SectionObserver::attach(section.cast::<web_sys::Element>(), config::CYCLE_TRIGGER, on_event) {
                        Ok(observer) => Some(observer),
                        Err(err) => {
                            // Without viewport signals the cycle just runs
                            gloo_console::error!("highlight cycle not tied to scroll:", err.to_string());
                            cycler.on_becomes_visible();
                            None
                        }
                    }
                });

                move || {
                    drop(observer);
                    if let Some(cycler) = cycler {
                        cycler.dispose();
                    }
                }
            },
            step_count,
        );
    }

    *highlight
}
