use std::cell::Cell;
use std::rc::Rc;

use yew::prelude::*;

use super::observer::SectionObserver;
use super::trigger::{ViewportTrigger, VisibilityEvent};

/// Next reveal state for an edge: play on enter, reverse only when scrolled back above the start line.
pub fn reveal_after(shown: bool, event: VisibilityEvent) -> bool {
    match event {
        VisibilityEvent::Enter | VisibilityEvent::EnterBack => true,
        VisibilityEvent::LeaveBack => false,
        VisibilityEvent::Leave => shown,
    }
}

/// Scroll-triggered fade-in. Returns whether `target` should currently be shown.
#[hook]
pub fn use_reveal(target: NodeRef, trigger: ViewportTrigger) -> bool {
    let shown = use_state(|| false);

    {
        let shown = shown.clone();
        use_effect_with_deps(
            move |_| {
                let on_event = {
                    let shown = shown.clone();
                    // The handle's value is frozen at mount, so the live flag is kept here
                    let current = Rc::new(Cell::new(false));
                    Callback::from(move |event: VisibilityEvent| {
                        let next = reveal_after(current.get(), event);
                        current.set(next);
                        shown.set(next);
                    })
                };

                let observer = match SectionObserver::attach(target.cast::<web_sys::Element>(), trigger, on_event) {
                    Ok(observer) => Some(observer),
                    Err(err) => {
                        gloo_console::error!("reveal disabled:", err.to_string());
                        shown.set(true);
                        None
                    }
                };

                move || drop(observer)
            },
            (),
        );
    }

    *shown
}
