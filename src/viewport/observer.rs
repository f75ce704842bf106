use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::Callback;

use super::trigger::{ViewportTrigger, VisibilityEvent, VisibilityTracker};

#[derive(Debug, Error)]
pub enum ObserverError {
    #[error("section element is not mounted")]
    NotMounted,
    #[error("IntersectionObserver unavailable: {0}")]
    Unsupported(String),
}

/// Watches one element and reports its viewport edges. Disconnects on drop.
pub struct SectionObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl SectionObserver {
    pub fn attach(
        element: Option<Element>,
        trigger: ViewportTrigger,
        on_event: Callback<VisibilityEvent>,
    ) -> Result<Self, ObserverError> {
        let element = element.ok_or(ObserverError::NotMounted)?;

        let mut tracker = VisibilityTracker::default();
        let callback = Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let top = entry.bounding_client_rect().top();
                if let Some(event) = tracker.observe(entry.is_intersecting(), top) {
                    on_event.emit(event);
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_root_margin(&trigger.root_margin());
        init.set_threshold(&JsValue::from_f64(0.0));

        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|err| ObserverError::Unsupported(format!("{:?}", err)))?;
        observer.observe(&element);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for SectionObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
