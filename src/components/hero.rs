use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <header id="hero" class="hero">
            <style>
                {r#"
                    .hero {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        justify-content: center;
                        padding: 0 1.5rem;
                    }
                    @media (min-width: 768px) {
                        .hero { padding: 0 7rem; }
                    }
                    .hero__eyebrow {
                        font-size: 10px;
                        letter-spacing: 0.3em;
                        text-transform: uppercase;
                        color: var(--accent);
                        animation: heroRise 0.9s ease-out both;
                    }
                    .hero__title {
                        margin: 1rem 0 0;
                        font-family: var(--font-display);
                        font-size: clamp(5rem, 18vw, 14rem);
                        line-height: 0.85;
                        letter-spacing: -0.01em;
                        animation: heroRise 1s 0.1s ease-out both;
                    }
                    .hero__tagline {
                        margin-top: 1.5rem;
                        font-family: var(--font-display);
                        font-size: clamp(1.5rem, 3vw, 2.5rem);
                        color: var(--muted);
                        animation: heroRise 1s 0.25s ease-out both;
                    }
                    .hero__tagline span { color: var(--accent); }
                    .hero__copy {
                        max-width: 36rem;
                        margin-top: 1.5rem;
                        font-size: 0.8rem;
                        line-height: 1.7;
                        color: var(--muted);
                        animation: heroRise 1s 0.4s ease-out both;
                    }
                    .hero__actions {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1rem;
                        margin-top: 2.5rem;
                        animation: heroRise 1s 0.55s ease-out both;
                    }
                    .hero__cta {
                        padding: 0.9rem 1.6rem;
                        border: 1px solid var(--accent);
                        color: var(--foreground);
                        font-size: 0.7rem;
                        letter-spacing: 0.2em;
                        text-transform: uppercase;
                        text-decoration: none;
                        transition: background 0.3s ease, color 0.3s ease;
                    }
                    .hero__cta:hover {
                        background: var(--accent);
                        color: var(--background);
                    }
                    .hero__cta--ghost { border-color: var(--border); }
                    @keyframes heroRise {
                        from { opacity: 0; transform: translateY(30px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                "#}
            </style>
            <span class="hero__eyebrow">{"00 / THE DIGITAL CAMPUS"}</span>
            <h1 class="hero__title">{"UNIVERSE"}</h1>
            <p class="hero__tagline">
                {"The Operating System for the "}<span>{"Modern Digital Campus"}</span>
            </p>
            <p class="hero__copy">
                {"A closed-loop digital ecosystem integrating Academic Management, Community Engagement, Welfare, and Commerce."}
            </p>
            <div class="hero__actions">
                <a href="#signals" class="hero__cta">{"See the problem"}</a>
                <Link<Route> to={Route::LeanCanvas} classes="hero__cta hero__cta--ghost">
                    {"Lean canvas"}
                </Link<Route>>
            </div>
        </header>
    }
}
