use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::{GRID_REVEAL_TRIGGER, HEADER_REVEAL_TRIGGER};
use crate::viewport::reveal::use_reveal;
use crate::Route;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Point {
    Bullet(&'static str),
    /// Run-in label such as "Key Numbers:" that introduces the points after it.
    Heading(&'static str),
    /// Bullet nested under the preceding heading.
    Sub(&'static str),
}

#[derive(Debug, PartialEq)]
pub struct CanvasItem {
    pub title: Option<&'static str>,
    pub points: &'static [Point],
}

/// Grid placement on wide screens (5 columns, 3 rows).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    Normal,
    Tall,
    Wide2,
    Wide3,
}

#[derive(Debug, PartialEq)]
pub struct CanvasSection {
    pub id: &'static str,
    pub title: &'static str,
    /// Shorter heading for the grid card.
    pub card_title: &'static str,
    pub cell: Cell,
    /// Lay the points out in two columns.
    pub two_column: bool,
    pub items: &'static [CanvasItem],
}

use Point::{Bullet, Heading, Sub};

pub static LEAN_CANVAS: [CanvasSection; 9] = [
    CanvasSection {
        id: "problem",
        title: "Problem",
        card_title: "Problem",
        cell: Cell::Tall,
        two_column: false,
        items: &[
            CanvasItem {
                title: Some("Top 3 Problems:"),
                points: &[
                    Bullet("Students watch hours of tutorials but freeze when building independently"),
                    Bullet("Most learners collect courses instead of skills, mistaking progress for productivity"),
                    Bullet("Anyone can write 'proficient in X,' but very few can actually prove it"),
                ],
            },
            CanvasItem {
                title: Some("Existing Alternatives:"),
                points: &[
                    Bullet("Online courses (Udemy, Coursera)"),
                    Bullet("Tutorial videos (YouTube, freeCodeCamp)"),
                    Bullet("Bootcamps"),
                    Bullet("University degrees"),
                ],
            },
        ],
    },
    CanvasSection {
        id: "solution",
        title: "Solution",
        card_title: "Solution",
        cell: Cell::Normal,
        two_column: false,
        items: &[CanvasItem {
            title: Some("Top 3 Features:"),
            points: &[
                Bullet("Project-based learning with real-world projects"),
                Bullet("Mentor-guided development and code reviews"),
                Bullet("Verified portfolio generation from actual contributions"),
            ],
        }],
    },
    CanvasSection {
        id: "uvp",
        title: "Unique Value Proposition",
        card_title: "Unique Value Prop",
        cell: Cell::Tall,
        two_column: false,
        items: &[CanvasItem {
            title: None,
            points: &[
                Bullet("Build Skills. Build Projects. Build Proof."),
                Bullet("Learn by doing, not just watching"),
                Bullet("Verified skills through real project contributions"),
                Heading("Why this matters:"),
                Bullet("Portfolio > Resume"),
                Bullet("Code doesn't lie"),
                Bullet("Emotional benefit: Confidence through proof"),
            ],
        }],
    },
    CanvasSection {
        id: "unfair-advantage",
        title: "Unfair Advantage",
        card_title: "Unfair Advantage",
        cell: Cell::Normal,
        two_column: false,
        items: &[CanvasItem {
            title: None,
            points: &[
                Bullet("Two-sided network: Students + Mentors + Recruiters"),
                Bullet("GitHub-based verification system"),
                Bullet("Real project portfolio generation"),
                Bullet("Direct path from learning to hiring"),
            ],
        }],
    },
    CanvasSection {
        id: "customer-segments",
        title: "Customer Segments",
        card_title: "Customer Segments",
        cell: Cell::Tall,
        two_column: false,
        items: &[
            CanvasItem {
                title: Some("Target Customers:"),
                points: &[
                    Bullet("Computer science students"),
                    Bullet("Career switchers"),
                    Bullet("Self-taught developers"),
                    Bullet("Recent graduates"),
                ],
            },
            CanvasItem {
                title: Some("Early Adopters:"),
                points: &[
                    Bullet("Students at MUJ (Manipal University Jaipur)"),
                    Bullet("TechStar SWJ'26 participants"),
                    Bullet("Active GitHub users"),
                    Bullet("People already building side projects"),
                ],
            },
        ],
    },
    CanvasSection {
        id: "key-metrics",
        title: "Key Metrics",
        card_title: "Key Metrics",
        cell: Cell::Normal,
        two_column: false,
        items: &[CanvasItem {
            title: None,
            points: &[
                Bullet("Projects completed per student"),
                Bullet("Code contributions per project"),
                Bullet("Mentor review response time"),
                Bullet("Student retention rate"),
                Bullet("Portfolio views by recruiters"),
                Bullet("Job placement rate"),
            ],
        }],
    },
    CanvasSection {
        id: "channels",
        title: "Channels",
        card_title: "Channels",
        cell: Cell::Normal,
        two_column: false,
        items: &[CanvasItem {
            title: Some("Path to Customers:"),
            points: &[
                Bullet("University partnerships (starting with MUJ)"),
                Bullet("TechStar program integration"),
                Bullet("Word of mouth from early adopters"),
                Bullet("GitHub community engagement"),
                Bullet("Tech community events and hackathons"),
            ],
        }],
    },
    CanvasSection {
        id: "cost-structure",
        title: "Cost Structure",
        card_title: "Cost Structure",
        cell: Cell::Wide2,
        two_column: true,
        items: &[CanvasItem {
            title: None,
            points: &[
                Bullet("Platform development and maintenance"),
                Bullet("Mentor compensation"),
                Bullet("Payment processing fees"),
                Bullet("Customer support"),
                Bullet("Marketing and partnerships"),
            ],
        }],
    },
    CanvasSection {
        id: "revenue-streams",
        title: "Revenue Streams",
        card_title: "Revenue Streams",
        cell: Cell::Wide3,
        two_column: true,
        items: &[CanvasItem {
            title: None,
            points: &[
                Bullet("Project-based commission from enrollment fees"),
                Bullet("Pro subscription (AI-powered features)"),
                Bullet("Paid mentorship support"),
                Bullet("Micro-revenue streams (certifications, premium tools)"),
                Heading("Key Numbers:"),
                Sub("Revenue per project enrollment"),
                Sub("Gross margin per subscription"),
                Sub("Lifetime value of active learners"),
            ],
        }],
    },
];

pub fn find_section(id: &str) -> Option<&'static CanvasSection> {
    LEAN_CANVAS.iter().find(|section| section.id == id)
}

pub fn closes_modal(key: &str) -> bool {
    key == "Escape"
}

/// Compact rendering inside a grid card.
fn card_point(point: Point) -> Html {
    match point {
        Heading(text) => html! { <li class="point point--heading">{text}</li> },
        Sub(text) => html! { <li class="point point--sub">{format!("• {}", text)}</li> },
        Bullet(text) => html! { <li class="point">{format!("• {}", text)}</li> },
    }
}

/// Full rendering in the detail modal; sub-points read as plain bullets there.
fn modal_point(point: Point) -> Html {
    match point {
        Heading(text) => html! { <li><span class="modal__heading">{text}</span></li> },
        Bullet(text) | Sub(text) => html! {
            <li class="modal__bullet">
                <span class="modal__dot">{"•"}</span>
                <span>{text}</span>
            </li>
        },
    }
}

#[derive(Properties, PartialEq)]
struct CardProps {
    section: &'static CanvasSection,
    on_open: Callback<&'static str>,
}

#[function_component(CanvasCard)]
fn canvas_card(props: &CardProps) -> Html {
    let section = props.section;
    let cell = match section.cell {
        Cell::Normal => None,
        Cell::Tall => Some("cell--tall"),
        Cell::Wide2 => Some("cell--wide2"),
        Cell::Wide3 => Some("cell--wide3"),
    };
    let last = section.items.len().saturating_sub(1);

    html! {
        <div class={classes!("lean-card", cell)}>
            <div class="lean-card__head">
                <h3>{section.card_title}</h3>
            </div>
            <div class="lean-card__body">
                {
                    section.items.iter().enumerate().map(|(idx, item)| {
                        let onclick = {
                            let on_open = props.on_open.clone();
                            let id = section.id;
                            Callback::from(move |_: MouseEvent| on_open.emit(id))
                        };
                        html! {
                            <div class="lean-item" onclick={onclick}>
                                {
                                    if let Some(title) = item.title {
                                        html! { <h4>{title}</h4> }
                                    } else {
                                        html! {}
                                    }
                                }
                                <ul class={classes!("points", section.two_column.then(|| "points--columns"))}>
                                    { for item.points.iter().map(|point| card_point(*point)) }
                                </ul>
                                {
                                    if idx < last {
                                        html! { <div class="lean-item__divider"></div> }
                                    } else {
                                        html! {}
                                    }
                                }
                            </div>
                        }
                    }).collect::<Html>()
                }
            </div>
        </div>
    }
}

#[function_component(LeanCanvas)]
pub fn lean_canvas() -> Html {
    let expanded = use_state(|| None::<&'static str>);
    let header_ref = use_node_ref();
    let grid_ref = use_node_ref();
    let header_shown = use_reveal(header_ref.clone(), HEADER_REVEAL_TRIGGER);
    let grid_shown = use_reveal(grid_ref.clone(), GRID_REVEAL_TRIGGER);

    // Escape closes the modal; the listener only exists while one is open
    {
        let is_open = expanded.is_some();
        let expanded = expanded.clone();
        use_effect_with_deps(
            move |is_open| {
                let listener = is_open.then(|| {
                    let expanded = expanded.clone();
                    Closure::wrap(Box::new(move |e: KeyboardEvent| {
                        if closes_modal(&e.key()) {
                            expanded.set(None);
                        }
                    }) as Box<dyn FnMut(KeyboardEvent)>)
                });
                let window = web_sys::window();

                if let (Some(window), Some(listener)) = (window.as_ref(), listener.as_ref()) {
                    if let Err(err) = window.add_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref()) {
                        gloo_console::error!("escape listener not attached:", err);
                    }
                }

                move || {
                    if let (Some(window), Some(listener)) = (window.as_ref(), listener.as_ref()) {
                        if let Err(err) = window.remove_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref()) {
                            gloo_console::error!("escape listener not removed:", err);
                        }
                    }
                }
            },
            is_open,
        );
    }

    let on_open = {
        let expanded = expanded.clone();
        Callback::from(move |id: &'static str| expanded.set(Some(id)))
    };

    let on_close = {
        let expanded = expanded.clone();
        Callback::from(move |_: MouseEvent| expanded.set(None))
    };

    let stop_propagation = Callback::from(|e: MouseEvent| e.stop_propagation());

    let modal = match (*expanded).and_then(find_section) {
        Some(section) => html! {
            <div class="modal-backdrop" onclick={on_close.clone()}>
                <div class="modal" onclick={stop_propagation}>
                    <button class="modal__close" onclick={on_close} aria-label="Close">{"✕"}</button>
                    <h2>{section.title}</h2>
                    <div class="modal__items">
                        {
                            section.items.iter().map(|item| html! {
                                <div class="modal__item">
                                    {
                                        if let Some(title) = item.title {
                                            html! { <h3>{title}</h3> }
                                        } else {
                                            html! {}
                                        }
                                    }
                                    <ul>
                                        { for item.points.iter().map(|point| modal_point(*point)) }
                                    </ul>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </div>
        },
        None => html! {},
    };

    html! {
        <section class="lean-canvas">
            <style>
                {r#"
                    .lean-canvas {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        box-sizing: border-box;
                        padding: 1rem;
                    }
                    @media (min-width: 768px) {
                        .lean-canvas {
                            height: 100vh;
                            margin-left: 5rem;
                            padding: 1.5rem;
                            overflow: hidden;
                        }
                    }
                    .lean-canvas__header {
                        flex-shrink: 0;
                        margin-bottom: 1rem;
                        text-align: center;
                        transform: translateY(-20px);
                    }
                    .lean-canvas__back {
                        display: inline-block;
                        margin-bottom: 0.5rem;
                        font-size: 10px;
                        letter-spacing: 0.2em;
                        text-transform: uppercase;
                        text-decoration: none;
                        color: var(--muted);
                        transition: color 0.2s ease;
                    }
                    .lean-canvas__back:hover { color: var(--accent); }
                    .lean-canvas h1 {
                        margin: 0;
                        font-family: var(--font-display);
                        font-size: 2.25rem;
                        font-weight: 400;
                        color: rgba(255, 255, 255, 0.9);
                    }
                    .lean-grid {
                        flex: 1;
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 0.75rem;
                        padding: 0.5rem;
                        overflow-y: auto;
                    }
                    @media (min-width: 768px) {
                        .lean-grid {
                            grid-template-columns: repeat(5, 1fr);
                            gap: 1rem;
                        }
                        .cell--tall { grid-row: span 2; }
                        .cell--wide2 { grid-column: span 2; }
                        .cell--wide3 { grid-column: span 3; }
                    }
                    .lean-card {
                        display: flex;
                        flex-direction: column;
                        overflow: hidden;
                        border: 1px solid rgba(255, 255, 255, 0.05);
                        border-radius: 0.5rem;
                        background: rgba(17, 17, 17, 0.2);
                        backdrop-filter: blur(4px);
                        transition: border-color 0.3s ease, background 0.3s ease, opacity 0.8s ease-out, transform 0.8s ease-out;
                    }
                    .lean-card:hover {
                        border-color: rgba(180, 140, 255, 0.3);
                        background: rgba(17, 17, 17, 0.3);
                    }
                    .lean-card__head {
                        padding: 0.75rem;
                        border-bottom: 1px solid rgba(255, 255, 255, 0.05);
                        background: rgba(255, 255, 255, 0.05);
                    }
                    .lean-card__head h3 {
                        margin: 0;
                        font-family: var(--font-display);
                        font-size: 1.25rem;
                        font-weight: 400;
                        letter-spacing: 0.03em;
                        transition: color 0.2s ease;
                    }
                    .lean-card:hover .lean-card__head h3 { color: var(--accent); }
                    .lean-card__body {
                        flex: 1;
                        padding: 0.75rem;
                        overflow: auto;
                    }
                    .lean-item { cursor: pointer; }
                    .lean-item h4 {
                        margin: 0 0 0.4rem;
                        font-size: 10px;
                        font-weight: 700;
                        letter-spacing: 0.08em;
                        text-transform: uppercase;
                        color: rgba(180, 140, 255, 0.8);
                    }
                    .lean-item__divider {
                        height: 1px;
                        margin: 0.75rem 0;
                        background: rgba(255, 255, 255, 0.05);
                    }
                    .points {
                        margin: 0;
                        padding: 0;
                        list-style: none;
                    }
                    @media (min-width: 768px) {
                        .points--columns {
                            display: grid;
                            grid-template-columns: repeat(2, 1fr);
                            column-gap: 1rem;
                        }
                    }
                    .point {
                        margin-bottom: 0.4rem;
                        font-size: 10px;
                        line-height: 1.3;
                        color: var(--muted);
                        transition: color 0.2s ease;
                    }
                    .lean-item:hover .point { color: var(--foreground); }
                    .point--heading {
                        grid-column: 1 / -1;
                        margin: 0.5rem 0 0.25rem;
                        font-weight: 700;
                        color: rgba(180, 140, 255, 0.9);
                    }
                    .point--sub {
                        padding-left: 0.5rem;
                        border-left: 1px solid rgba(255, 255, 255, 0.1);
                    }
                    .modal-backdrop {
                        position: fixed;
                        inset: 0;
                        z-index: 50;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 1rem;
                        background: rgba(10, 10, 10, 0.9);
                        backdrop-filter: blur(12px);
                    }
                    .modal {
                        position: relative;
                        width: 100%;
                        max-width: 56rem;
                        max-height: 90vh;
                        overflow: auto;
                        box-sizing: border-box;
                        padding: 3rem;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        border-radius: 0.75rem;
                        background: rgba(17, 17, 17, 0.5);
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
                    }
                    .modal h2 {
                        margin: 0 0 1.5rem;
                        padding-right: 3rem;
                        font-family: var(--font-display);
                        font-size: 3rem;
                        font-weight: 400;
                    }
                    .modal__close {
                        position: absolute;
                        top: 1rem;
                        right: 1rem;
                        padding: 0.5rem 0.75rem;
                        border: none;
                        border-radius: 9999px;
                        background: transparent;
                        color: var(--foreground);
                        font-size: 1.25rem;
                        cursor: pointer;
                        transition: background 0.2s ease;
                    }
                    .modal__close:hover { background: rgba(255, 255, 255, 0.1); }
                    .modal__item {
                        margin-bottom: 1.5rem;
                        padding: 2rem;
                        border: 1px solid rgba(255, 255, 255, 0.05);
                        border-radius: 0.5rem;
                        background: rgba(255, 255, 255, 0.05);
                    }
                    .modal__item h3 {
                        margin: 0 0 1rem;
                        font-size: 1.1rem;
                        color: var(--accent);
                    }
                    .modal__item ul {
                        margin: 0;
                        padding: 0;
                        list-style: none;
                    }
                    .modal__item li {
                        margin-bottom: 0.9rem;
                        font-size: 0.95rem;
                        line-height: 1.6;
                        color: rgba(237, 237, 237, 0.8);
                    }
                    .modal__bullet { display: flex; gap: 0.5rem; }
                    .modal__dot { color: rgba(180, 140, 255, 0.7); user-select: none; }
                    .modal__heading {
                        display: block;
                        margin-bottom: 0.5rem;
                        font-weight: 600;
                        color: var(--foreground);
                    }
                "#}
            </style>
            { modal }

            <div ref={header_ref} class={classes!("lean-canvas__header", "reveal-up", header_shown.then(|| "is-shown"))}>
                <Link<Route> to={Route::Home} classes="lean-canvas__back">
                    {"← Back to Home"}
                </Link<Route>>
                <h1><span class="accent">{"LEAN"}</span>{" CANVAS"}</h1>
            </div>

            <div ref={grid_ref} class={classes!("lean-grid", "stagger", grid_shown.then(|| "is-shown"))}>
                {
                    LEAN_CANVAS.iter().map(|section| html! {
                        <CanvasCard key={section.id} section={section} on_open={on_open.clone()} />
                    }).collect::<Html>()
                }
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_card_opens_its_own_section() {
        for section in LEAN_CANVAS.iter() {
            assert_eq!(find_section(section.id).map(|s| s.title), Some(section.title));
        }
        assert!(find_section("team").is_none());
    }

    #[test]
    fn canvas_follows_the_nine_block_order() {
        let ids: Vec<&str> = LEAN_CANVAS.iter().map(|s| s.id).collect();
        assert_eq!(
            ids,
            vec![
                "problem",
                "solution",
                "uvp",
                "unfair-advantage",
                "customer-segments",
                "key-metrics",
                "channels",
                "cost-structure",
                "revenue-streams",
            ]
        );
    }

    #[test]
    fn revenue_key_numbers_are_nested() {
        let revenue = find_section("revenue-streams").unwrap();
        let points = revenue.items[0].points;
        let heading = points.iter().position(|p| *p == Heading("Key Numbers:")).unwrap();
        assert!(points[heading + 1..].iter().all(|p| matches!(p, Sub(_))));
        assert!(points[..heading].iter().all(|p| matches!(p, Bullet(_))));
    }

    #[test]
    fn uvp_keeps_its_why_heading() {
        let uvp = find_section("uvp").unwrap();
        assert_eq!(uvp.title, "Unique Value Proposition");
        assert_eq!(uvp.card_title, "Unique Value Prop");
        assert!(uvp.items[0].points.contains(&Heading("Why this matters:")));
    }

    #[test]
    fn only_escape_closes_the_modal() {
        assert!(closes_modal("Escape"));
        assert!(!closes_modal("Esc"));
        assert!(!closes_modal("Enter"));
        assert!(!closes_modal("escape"));
    }

    #[test]
    fn grid_fills_five_columns_by_three_rows() {
        // Tall cards cover two rows, the bottom row is a 2 + 3 split
        let area: usize = LEAN_CANVAS
            .iter()
            .map(|s| match s.cell {
                Cell::Normal => 1,
                Cell::Tall => 2,
                Cell::Wide2 => 2,
                Cell::Wide3 => 3,
            })
            .sum();
        assert_eq!(area, 15);
    }
}
