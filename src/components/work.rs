use yew::prelude::*;

use crate::config::{GRID_REVEAL_TRIGGER, HEADER_REVEAL_TRIGGER};
use crate::cycle::hook::use_highlight_cycle;
use crate::viewport::reveal::use_reveal;

/// Grid footprint of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Span {
    Single,
    Wide,
    Tall,
    Large,
}

impl Span {
    fn class(self) -> &'static str {
        match self {
            Span::Single => "span-single",
            Span::Wide => "span-wide",
            Span::Tall => "span-tall",
            Span::Large => "span-large",
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct Experiment {
    pub title: &'static str,
    pub medium: &'static str,
    pub description: &'static str,
    pub span: Span,
}

pub static EXPERIMENTS: [Experiment; 8] = [
    Experiment {
        title: "DASHBOARD COMMAND",
        medium: "09:00 AM",
        description: "Start the day. Check attendance, upcoming classes, and pending tasks in one unified view.",
        span: Span::Large,
    },
    Experiment {
        title: "ATTENDANCE CHECK",
        medium: "10:30 AM",
        description: "Thinking of skipping? Bunk Manager calculates your safe margin instantly.",
        span: Span::Single,
    },
    Experiment {
        title: "WEEKEND PLANS",
        medium: "01:00 PM",
        description: "Coordinate a trip with friends. Polls, budget splitting, and permissions sorted.",
        span: Span::Tall,
    },
    Experiment {
        title: "BUY & SELL",
        medium: "04:00 PM",
        description: "Night Market. Sell your old drafter or find a cycle from a verified senior.",
        span: Span::Single,
    },
    Experiment {
        title: "SOCIAL SYNC",
        medium: "06:00 PM",
        description: "Club Hub. Discover the Hackathon tonight and register with one tap.",
        span: Span::Wide,
    },
    Experiment {
        title: "SKILL BUILD",
        medium: "09:00 PM",
        description: "Join a project. Commit code. Your activity automatically verifies your skills.",
        span: Span::Single,
    },
    Experiment {
        title: "CV AUTO-UPDATE",
        medium: "11:00 PM",
        description: "Your profile updates itself based on what you built and achieved today.",
        span: Span::Single,
    },
    Experiment {
        title: "ALUMNI CONNECT",
        medium: "ANYTIME",
        description: "Stuck? Reach out to an alum who took the same path.",
        span: Span::Single,
    },
];

/// Hover and the auto-cycle are independent; either one lights a card.
pub fn card_is_active(hovered: bool, highlighted: bool) -> bool {
    hovered || highlighted
}

#[function_component(WorkSection)]
pub fn work_section() -> Html {
    let section_ref = use_node_ref();
    let header_ref = use_node_ref();
    let grid_ref = use_node_ref();

    let highlight = use_highlight_cycle(section_ref.clone(), EXPERIMENTS.len());
    let header_shown = use_reveal(header_ref.clone(), HEADER_REVEAL_TRIGGER);
    let grid_shown = use_reveal(grid_ref.clone(), GRID_REVEAL_TRIGGER);

    html! {
        <section id="work" ref={section_ref} class="work">
            <style>
                {r#"
                    .work {
                        position: relative;
                        padding: 8rem 1.5rem;
                    }
                    @media (min-width: 768px) {
                        .work { padding: 8rem 3rem 8rem 7rem; }
                    }
                    .work__header {
                        display: flex;
                        align-items: flex-end;
                        justify-content: space-between;
                        margin-bottom: 4rem;
                    }
                    .work__aside {
                        display: none;
                        max-width: 20rem;
                        font-size: 0.75rem;
                        line-height: 1.7;
                        text-align: right;
                        color: var(--muted);
                    }
                    @media (min-width: 768px) {
                        .work__aside { display: block; }
                    }
                    .work__grid {
                        display: grid;
                        grid-template-columns: repeat(2, 1fr);
                        grid-auto-rows: 180px;
                        gap: 1rem;
                    }
                    @media (min-width: 768px) {
                        .work__grid {
                            grid-template-columns: repeat(4, 1fr);
                            grid-auto-rows: 200px;
                            gap: 1.5rem;
                        }
                    }
                    .span-wide { grid-column: span 2; }
                    .span-tall { grid-row: span 2; }
                    .span-large { grid-column: span 2; grid-row: span 2; }
                    .work-card {
                        position: relative;
                        display: flex;
                        flex-direction: column;
                        justify-content: space-between;
                        padding: 1.25rem;
                        overflow: hidden;
                        cursor: pointer;
                        border: 1px solid var(--border);
                        transition: border-color 0.5s ease, opacity 0.8s ease-out, transform 0.8s ease-out;
                    }
                    .work-card.active { border-color: var(--accent-border); }
                    .work-card__wash {
                        position: absolute;
                        inset: 0;
                        background: var(--accent-wash);
                        opacity: 0;
                        transition: opacity 0.5s ease;
                    }
                    .work-card.active .work-card__wash { opacity: 1; }
                    .work-card__content { position: relative; z-index: 1; }
                    .work-card__medium {
                        font-size: 10px;
                        letter-spacing: 0.15em;
                        text-transform: uppercase;
                        color: var(--muted);
                    }
                    .work-card h3 {
                        margin: 0.75rem 0 0;
                        font-family: var(--font-display);
                        font-size: clamp(1.5rem, 2.5vw, 2.25rem);
                        font-weight: 400;
                        transition: color 0.3s ease;
                    }
                    .work-card.active h3 { color: var(--accent); }
                    .work-card__description {
                        max-width: 280px;
                        font-size: 0.75rem;
                        line-height: 1.7;
                        color: var(--muted);
                        opacity: 0;
                        transform: translateY(0.5rem);
                        transition: opacity 0.5s ease, transform 0.5s ease;
                    }
                    .work-card.active .work-card__description {
                        opacity: 1;
                        transform: translateY(0);
                    }
                    .work-card__index {
                        position: absolute;
                        right: 1rem;
                        bottom: 1rem;
                        font-size: 10px;
                        color: var(--muted-faint);
                        transition: color 0.3s ease;
                    }
                    .work-card.active .work-card__index { color: var(--accent); }
                    .work-card__corner {
                        position: absolute;
                        top: 0;
                        right: 0;
                        width: 3rem;
                        height: 3rem;
                        border-top: 1px solid var(--accent);
                        border-right: 1px solid var(--accent);
                        opacity: 0;
                        transition: opacity 0.5s ease;
                    }
                    .work-card.active .work-card__corner { opacity: 1; }
                "#}
            </style>
            <div ref={header_ref} class={classes!("work__header", "reveal-left", header_shown.then(|| "is-shown"))}>
                <div>
                    <span class="eyebrow">{"03 / USER JOURNEY"}</span>
                    <h2 class="section-title">
                        {"A SEAMLESS "}<span class="accent">{"CAMPUS LIFE"}</span>
                    </h2>
                </div>
                <p class="work__aside">{"after 12 hours of intense thoughtprocess"}</p>
            </div>

            <div ref={grid_ref} class={classes!("work__grid", "stagger", grid_shown.then(|| "is-shown"))}>
                {
                    EXPERIMENTS.iter().enumerate().map(|(index, experiment)| html! {
                        <WorkCard
                            key={index}
                            index={index}
                            experiment={experiment}
                            highlighted={highlight.is_highlighted(index)}
                        />
                    }).collect::<Html>()
                }
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct WorkCardProps {
    index: usize,
    experiment: &'static Experiment,
    #[prop_or_default]
    highlighted: bool,
}

#[function_component(WorkCard)]
fn work_card(props: &WorkCardProps) -> Html {
    let is_hovered = use_state(|| false);
    let active = card_is_active(*is_hovered, props.highlighted);

    let onmouseenter = {
        let is_hovered = is_hovered.clone();
        Callback::from(move |_: MouseEvent| is_hovered.set(true))
    };
    let onmouseleave = {
        let is_hovered = is_hovered.clone();
        Callback::from(move |_: MouseEvent| is_hovered.set(false))
    };

    let experiment = props.experiment;

    html! {
        <article
            class={classes!("work-card", experiment.span.class(), active.then(|| "active"))}
            style={format!("transition-delay: 0s, {0:.1}s, {0:.1}s;", props.index as f64 * 0.1)}
            onmouseenter={onmouseenter}
            onmouseleave={onmouseleave}
        >
            <div class="work-card__wash"></div>
            <div class="work-card__content">
                <span class="work-card__medium">{experiment.medium}</span>
                <h3>{experiment.title}</h3>
            </div>
            <div class="work-card__content">
                <p class="work-card__description">{experiment.description}</p>
            </div>
            <span class="work-card__index">{format!("{:02}", props.index + 1)}</span>
            <div class="work-card__corner"></div>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cycle::state::Highlight;

    #[test]
    fn hover_or_cycle_lights_a_card() {
        assert!(card_is_active(true, false));
        assert!(card_is_active(false, true));
        assert!(card_is_active(true, true));
        assert!(!card_is_active(false, false));
    }

    #[test]
    fn hovered_card_stays_lit_while_cycle_is_elsewhere() {
        let highlight = Highlight::Step(2);
        let lit: Vec<usize> = (0..EXPERIMENTS.len())
            .filter(|&i| card_is_active(i == 5, highlight.is_highlighted(i)))
            .collect();
        assert_eq!(lit, vec![2, 5]);
    }

    #[test]
    fn journey_has_eight_steps_in_order() {
        assert_eq!(EXPERIMENTS.len(), 8);
        assert_eq!(EXPERIMENTS[0].span, Span::Large);
        assert_eq!(EXPERIMENTS[7].medium, "ANYTIME");
    }
}
