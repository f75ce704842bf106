use yew::prelude::*;

use crate::components::hero::Hero;
use crate::components::signals::SignalsSection;
use crate::components::work::WorkSection;

#[function_component(Home)]
pub fn home() -> Html {
    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                if window.location().hash().map(|h| h.is_empty()).unwrap_or(true) {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
            }
            || ()
        },
        (),
    );

    html! {
        <>
            <Hero />
            <SignalsSection />
            <WorkSection />
        </>
    }
}
