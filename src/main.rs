use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod cycle {
    pub mod cycler;
    pub mod hook;
    pub mod scheduler;
    pub mod state;
}
mod viewport {
    pub mod observer;
    pub mod reveal;
    pub mod trigger;
}
mod components {
    pub mod background_blobs;
    pub mod hero;
    pub mod shell;
    pub mod signals;
    pub mod work;
}
mod pages {
    pub mod home;
    pub mod lean_canvas;
}

use components::shell::PageShell;
use pages::{home::Home, lean_canvas::LeanCanvas};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/lean-canvas")]
    LeanCanvas,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::LeanCanvas => {
            info!("Rendering Lean Canvas page");
            html! { <LeanCanvas /> }
        },
        Route::NotFound => {
            info!("Rendering Not Found page");
            html! {
                <section class="not-found">
                    <span class="eyebrow">{"404 / LOST IN ORBIT"}</span>
                    <h2 class="section-title">{"NOTHING "}<span class="accent">{"HERE"}</span></h2>
                    <Link<Route> to={Route::Home} classes="hero__cta">{"Back to Home"}</Link<Route>>
                    <style>
                        {".not-found { min-height: 100vh; display: flex; flex-direction: column; justify-content: center; gap: 2rem; padding: 0 1.5rem; } .not-found .hero__cta { align-self: flex-start; padding: 0.9rem 1.6rem; border: 1px solid var(--accent); color: var(--foreground); text-decoration: none; }"}
                    </style>
                </section>
            }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <PageShell>
                <Switch<Route> render={switch} />
            </PageShell>
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
