use stylist::css;
use stylist::yew::Global;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::background_blobs::BackgroundBlobs;
use crate::Route;

/// Shared tokens and the scroll-reveal classes every section uses.
const THEME: &str = r#"
    :root {
        --background: #0a0a0a;
        --foreground: #ededed;
        --card: #111111;
        --muted: #8a8a8a;
        --muted-faint: rgba(138, 138, 138, 0.4);
        --border: rgba(255, 255, 255, 0.12);
        --accent: #b48cff;
        --accent-soft: rgba(180, 140, 255, 0.2);
        --accent-wash: rgba(180, 140, 255, 0.05);
        --accent-border: rgba(180, 140, 255, 0.6);
        --font-display: "Bebas Neue", Impact, sans-serif;
    }
    .noise-overlay {
        position: fixed;
        inset: 0;
        z-index: 1;
        pointer-events: none;
        opacity: 0.05;
        background-image: url("data:image/svg+xml;utf8,<svg xmlns='http://www.w3.org/2000/svg' width='160' height='160'><filter id='n'><feTurbulence type='fractalNoise' baseFrequency='0.9' numOctaves='3'/></filter><rect width='100%' height='100%' filter='url(%23n)'/></svg>");
    }
    .page {
        position: relative;
        z-index: 2;
    }
    .eyebrow {
        font-size: 10px;
        letter-spacing: 0.3em;
        text-transform: uppercase;
        color: var(--accent);
    }
    .section-title {
        margin: 1rem 0 0;
        font-family: var(--font-display);
        font-size: clamp(3rem, 7vw, 4.5rem);
        font-weight: 400;
        letter-spacing: -0.01em;
    }
    .accent { color: var(--accent); }
    .section-header { margin-bottom: 4rem; }
    .reveal-left {
        opacity: 0;
        transform: translateX(-60px);
        transition: opacity 1s cubic-bezier(0.22, 1, 0.36, 1), transform 1s cubic-bezier(0.22, 1, 0.36, 1);
    }
    .reveal-up {
        opacity: 0;
        transform: translateY(50px);
        transition: opacity 0.8s cubic-bezier(0.22, 1, 0.36, 1), transform 0.8s cubic-bezier(0.22, 1, 0.36, 1);
    }
    .stagger > * {
        opacity: 0;
        transform: translateY(60px);
    }
    .reveal-left.is-shown,
    .reveal-up.is-shown,
    .stagger.is-shown > * {
        opacity: 1;
        transform: none;
    }
    .side-nav {
        position: fixed;
        top: 0;
        left: 0;
        bottom: 0;
        z-index: 40;
        display: none;
        width: 5rem;
        flex-direction: column;
        align-items: center;
        justify-content: center;
        gap: 2rem;
        border-right: 1px solid var(--border);
    }
    @media (min-width: 768px) {
        .side-nav { display: flex; }
    }
    .side-nav a {
        writing-mode: vertical-rl;
        transform: rotate(180deg);
        font-size: 10px;
        letter-spacing: 0.3em;
        text-transform: uppercase;
        text-decoration: none;
        color: var(--muted);
        transition: color 0.2s ease;
    }
    .side-nav a:hover { color: var(--accent); }
"#;

#[function_component(SideNav)]
fn side_nav() -> Html {
    html! {
        <nav class="side-nav">
            <a href="/#hero">{"Index"}</a>
            <a href="/#signals">{"Signals"}</a>
            <a href="/#work">{"Journey"}</a>
            <Link<Route> to={Route::LeanCanvas}>{"Canvas"}</Link<Route>>
        </nav>
    }
}

#[derive(Properties, PartialEq)]
pub struct ShellProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(PageShell)]
pub fn page_shell(props: &ShellProps) -> Html {
    html! {
        <>
            <Global css={css!(r#"
                html, body {
                    margin: 0;
                    padding: 0;
                    background-color: #0a0a0a;
                    color: #ededed;
                    font-family: "Geist Mono", ui-monospace, monospace;
                    overflow-x: hidden;
                    scroll-behavior: smooth;
                }
            "#)} />
            <style>{THEME}</style>
            <BackgroundBlobs />
            <div class="noise-overlay" aria-hidden="true"></div>
            <SideNav />
            <main class="page">
                { for props.children.iter() }
            </main>
        </>
    }
}
