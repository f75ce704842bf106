use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Math;
use yew::prelude::*;

use crate::config::PARALLAX_MAX_PERCENT;

/// Static placement lives in CSS; the motion on top of it is random.
const BLOBS: [&str; 4] = ["blob blob--violet", "blob blob--blue", "blob blob--deep", "blob blob--indigo"];

/// One drift leg. Each leg eases from wherever the blob is toward these targets.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Drift {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub rotation: f64,
    pub duration_ms: u32,
}

fn lerp(min: f64, max: f64, t: f64) -> f64 {
    min + (max - min) * t.clamp(0.0, 1.0)
}

impl Drift {
    /// Maps five unit samples onto the drift ranges.
    pub fn from_unit(samples: [f64; 5]) -> Self {
        Self {
            x: lerp(-400.0, 400.0, samples[0]),
            y: lerp(-200.0, 200.0, samples[1]),
            scale: lerp(0.8, 1.5, samples[2]),
            rotation: lerp(-45.0, 45.0, samples[3]),
            duration_ms: lerp(10_000.0, 15_000.0, samples[4]).round() as u32,
        }
    }

    pub fn random() -> Self {
        Self::from_unit([Math::random(), Math::random(), Math::random(), Math::random(), Math::random()])
    }

    pub fn style(&self) -> String {
        format!(
            "transform: translate({:.1}px, {:.1}px) scale({:.3}) rotate({:.1}deg); transition-duration: {}ms;",
            self.x, self.y, self.scale, self.rotation, self.duration_ms
        )
    }
}

/// Parallax offset in percent of the container height for the current scroll position.
pub fn parallax_offset(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_y / scrollable).clamp(0.0, 1.0) * PARALLAX_MAX_PERCENT
}

#[derive(Properties, PartialEq)]
struct BlobProps {
    variant: &'static str,
}

#[function_component(DriftingBlob)]
fn drifting_blob(props: &BlobProps) -> Html {
    // Starts at rest so the first leg animates instead of jumping
    let drift = use_state(|| Drift::from_unit([0.5, 0.5, 0.2857, 0.5, 0.0]));
    let first_leg = use_mut_ref(|| true);

    {
        let setter = drift.setter();
        use_effect_with_deps(
            move |drift| {
                let delay = if first_leg.replace(false) { 50 } else { drift.duration_ms };
                let timeout = Timeout::new(delay, move || setter.set(Drift::random()));
                move || drop(timeout)
            },
            *drift,
        );
    }

    html! {
        <div class={props.variant} style={drift.style()}></div>
    }
}

#[function_component(BackgroundBlobs)]
pub fn background_blobs() -> Html {
    let offset = use_state(|| 0.0_f64);

    {
        let offset = offset.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let scroll_callback = {
                    let window = window.clone();
                    Closure::wrap(Box::new(move || {
                        let Some(window) = window.as_ref() else { return };
                        let Some(root) = window.document().and_then(|d| d.document_element()) else {
                            return;
                        };
                        let scroll_y = window.scroll_y().unwrap_or(0.0);
                        let viewport = window.inner_height().ok().and_then(|h| h.as_f64()).unwrap_or(0.0);
                        offset.set(parallax_offset(scroll_y, f64::from(root.scroll_height()), viewport));
                    }) as Box<dyn FnMut()>)
                };

                if let Some(window) = window.as_ref() {
                    if let Err(err) = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref()) {
                        gloo_console::error!("parallax scroll listener not attached:", err);
                    }
                }

                move || {
                    if let Some(window) = window.as_ref() {
                        if let Err(err) =
                            window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                        {
                            gloo_console::error!("parallax scroll listener not removed:", err);
                        }
                    }
                }
            },
            (),
        );
    }

    html! {
        <div class="blob-field" aria-hidden="true" style={format!("transform: translateY({:.2}%) scale(1.1);", *offset)}>
            <style>
                {r#"
                    .blob-field {
                        position: fixed;
                        inset: 0;
                        z-index: 0;
                        overflow: hidden;
                        pointer-events: none;
                        transition: transform 0.5s linear;
                    }
                    .blob {
                        position: absolute;
                        border-radius: 9999px;
                        mix-blend-mode: screen;
                        transition-property: transform;
                        transition-timing-function: ease-in-out;
                    }
                    .blob--violet {
                        top: 25%;
                        left: 25%;
                        width: 500px;
                        height: 500px;
                        background: rgba(147, 51, 234, 0.2);
                        filter: blur(100px);
                    }
                    .blob--blue {
                        top: 75%;
                        right: 25%;
                        width: 400px;
                        height: 400px;
                        background: rgba(37, 99, 235, 0.1);
                        filter: blur(80px);
                    }
                    .blob--deep {
                        bottom: 0;
                        left: 33%;
                        width: 600px;
                        height: 600px;
                        background: rgba(88, 28, 135, 0.2);
                        filter: blur(120px);
                    }
                    .blob--indigo {
                        top: -80px;
                        right: 0;
                        width: 300px;
                        height: 300px;
                        background: rgba(79, 70, 229, 0.2);
                        filter: blur(90px);
                    }
                "#}
            </style>
            { for BLOBS.iter().map(|variant| html! { <DriftingBlob variant={*variant} /> }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drift_targets_stay_in_range() {
        let low = Drift::from_unit([0.0; 5]);
        assert_eq!((low.x, low.y, low.scale, low.rotation, low.duration_ms), (-400.0, -200.0, 0.8, -45.0, 10_000));

        let high = Drift::from_unit([1.0; 5]);
        assert_eq!((high.x, high.y, high.scale, high.rotation, high.duration_ms), (400.0, 200.0, 1.5, 45.0, 15_000));

        let wild = Drift::from_unit([7.0, -3.0, 0.5, 0.5, 0.5]);
        assert_eq!(wild.x, 400.0);
        assert_eq!(wild.y, -200.0);
        assert_eq!(wild.duration_ms, 12_500);
    }

    #[test]
    fn resting_drift_is_identity() {
        let rest = Drift::from_unit([0.5, 0.5, 0.2857, 0.5, 0.0]);
        assert_eq!(rest.x, 0.0);
        assert_eq!(rest.y, 0.0);
        assert!((rest.scale - 1.0).abs() < 0.001);
        assert_eq!(rest.rotation, 0.0);
    }

    #[test]
    fn parallax_tracks_scroll_progress() {
        assert_eq!(parallax_offset(0.0, 5_000.0, 1_000.0), 0.0);
        assert_eq!(parallax_offset(2_000.0, 5_000.0, 1_000.0), 10.0);
        assert_eq!(parallax_offset(4_000.0, 5_000.0, 1_000.0), 20.0);
        assert_eq!(parallax_offset(9_000.0, 5_000.0, 1_000.0), 20.0);
        assert_eq!(parallax_offset(-50.0, 5_000.0, 1_000.0), 0.0);
    }

    #[test]
    fn short_pages_have_no_parallax() {
        assert_eq!(parallax_offset(100.0, 800.0, 1_000.0), 0.0);
    }
}
