use web_sys::HtmlElement;
use yew::prelude::*;

use crate::config::{GRID_REVEAL_TRIGGER, HEADER_REVEAL_TRIGGER};
use crate::viewport::reveal::use_reveal;

#[derive(Debug, PartialEq)]
pub struct Signal {
    pub title: &'static str,
    pub note: &'static str,
}

pub static SIGNALS: [Signal; 8] = [
    Signal {
        title: "Fragmented Academics",
        note: "Clunky legacy ERPs, scattered notes, and no real-time attendance tracking make academic life a shuffle.",
    },
    Signal {
        title: "Communication Chaos",
        note: "WhatsApp spam and endless groups lead to information overload and missed critical deadlines.",
    },
    Signal {
        title: "Unsafe Commerce",
        note: "Buying and selling on Instagram or OLX is risky, unverified, and lacks campus-specific trust.",
    },
    Signal {
        title: "Alumni Disconnect",
        note: "No structured way to connect with seniors or alumni for mentorship, creating a guidance void.",
    },
    Signal {
        title: "Mental Health Isolation",
        note: "Lack of anonymous support systems or easy grievance redressal leaves students feeling unheard.",
    },
    Signal {
        title: "Event Discovery FOMO",
        note: "Fragmented event promotions mean students often miss out on club activities and workshops.",
    },
    Signal {
        title: "Skill Gap Reality",
        note: "Students learn theory but lack the platform to build and showcase real-world projects.",
    },
    Signal {
        title: "Bureaucratic Friction",
        note: "Manual paperwork for simple approvals, gate passes, and leaves wastes valuable time.",
    },
];

const ROW_LEN: usize = 4;

/// One marquee row: the slice twice over, each card paired with its catalogue index.
pub fn marquee_row(signals: &[Signal], offset: usize) -> Vec<(usize, &Signal)> {
    signals
        .iter()
        .enumerate()
        .chain(signals.iter().enumerate())
        .map(|(i, signal)| (offset + i, signal))
        .collect()
}

pub fn issue_number(index: usize) -> String {
    format!("No. {:02}", index + 1)
}

#[function_component(SignalsSection)]
pub fn signals_section() -> Html {
    let section_ref = use_node_ref();
    let header_ref = use_node_ref();
    let cards_ref = use_node_ref();
    let cursor_ref = use_node_ref();
    let is_hovering = use_state(|| false);

    let header_shown = use_reveal(header_ref.clone(), HEADER_REVEAL_TRIGGER);
    let cards_shown = use_reveal(cards_ref.clone(), GRID_REVEAL_TRIGGER);

    let onmousemove = {
        let section_ref = section_ref.clone();
        let cursor_ref = cursor_ref.clone();
        Callback::from(move |e: MouseEvent| {
            let (Some(section), Some(cursor)) = (section_ref.cast::<HtmlElement>(), cursor_ref.cast::<HtmlElement>()) else {
                return;
            };
            let rect = section.get_bounding_client_rect();
            let x = f64::from(e.client_x()) - rect.left();
            let y = f64::from(e.client_y()) - rect.top();
            let transform = format!("translate({:.0}px, {:.0}px) translate(-50%, -50%)", x, y);
            if let Err(err) = cursor.style().set_property("transform", &transform) {
                gloo_console::error!("cursor follower not moved:", err);
            }
        })
    };

    let onmouseenter = {
        let is_hovering = is_hovering.clone();
        Callback::from(move |_: MouseEvent| is_hovering.set(true))
    };
    let onmouseleave = {
        let is_hovering = is_hovering.clone();
        Callback::from(move |_: MouseEvent| is_hovering.set(false))
    };

    let (first, second) = SIGNALS.split_at(ROW_LEN);

    html! {
        <section id="signals" ref={section_ref} class="signals" onmousemove={onmousemove} onmouseenter={onmouseenter} onmouseleave={onmouseleave}>
            <style>
                {r#"
                    .signals {
                        position: relative;
                        min-height: 100vh;
                        padding: 8rem 1.5rem;
                        overflow: hidden;
                    }
                    @media (min-width: 768px) {
                        .signals { padding: 8rem 7rem; }
                    }
                    .signals__cursor {
                        position: absolute;
                        top: 0;
                        left: 0;
                        z-index: 50;
                        width: 3rem;
                        height: 3rem;
                        border: 2px solid var(--accent);
                        border-radius: 9999px;
                        background: var(--accent-soft);
                        filter: blur(4px);
                        pointer-events: none;
                        opacity: 0;
                        transition: opacity 0.3s ease, transform 0.5s cubic-bezier(0.22, 1, 0.36, 1);
                    }
                    .signals__cursor.hovering { opacity: 1; }
                    .marquee {
                        position: relative;
                        width: 100%;
                        overflow: hidden;
                    }
                    .marquee + .marquee { margin-top: 3rem; }
                    .marquee__track {
                        display: flex;
                        width: max-content;
                    }
                    .marquee__track:hover { animation-play-state: paused; }
                    .marquee__track--right { animation: marqueeRight 40s linear infinite; }
                    .marquee__track--left { animation: marqueeLeft 60s linear infinite; }
                    @keyframes marqueeLeft {
                        from { transform: translateX(0); }
                        to { transform: translateX(-50%); }
                    }
                    @keyframes marqueeRight {
                        from { transform: translateX(-50%); }
                        to { transform: translateX(0); }
                    }
                    .signal-card {
                        position: relative;
                        flex-shrink: 0;
                        width: 20rem;
                        height: 400px;
                        margin: 0 1rem;
                        transition: transform 0.5s ease-out;
                    }
                    .signal-card:hover { transform: translateY(-0.5rem); }
                    .signal-card__body {
                        position: relative;
                        height: 100%;
                        display: flex;
                        flex-direction: column;
                        box-sizing: border-box;
                        padding: 2rem;
                        background: var(--card);
                        border: 1px solid var(--border);
                    }
                    .signal-card__number {
                        margin-bottom: 2rem;
                        font-size: 10px;
                        letter-spacing: 0.3em;
                        text-transform: uppercase;
                        color: var(--muted);
                    }
                    .signal-card h3 {
                        margin: 0 0 1rem;
                        font-family: var(--font-display);
                        font-size: 2.25rem;
                        font-weight: 400;
                        transition: color 0.3s ease;
                    }
                    .signal-card:hover h3 { color: var(--accent); }
                    .signal-card__rule {
                        width: 3rem;
                        height: 1px;
                        margin-bottom: 1.5rem;
                        background: var(--accent);
                        opacity: 0.6;
                        transition: width 0.5s ease;
                    }
                    .signal-card:hover .signal-card__rule { width: 100%; }
                    .signal-card p {
                        flex: 1;
                        font-size: 0.75rem;
                        line-height: 1.7;
                        color: var(--muted);
                    }
                    .signal-card__fold {
                        position: absolute;
                        right: 0;
                        bottom: 0;
                        width: 1.5rem;
                        height: 1.5rem;
                        background: linear-gradient(135deg, transparent 50%, var(--background) 50%);
                    }
                "#}
            </style>
            <div ref={cursor_ref} class={classes!("signals__cursor", (*is_hovering).then(|| "hovering"))}></div>

            <div ref={header_ref} class={classes!("section-header", "reveal-left", header_shown.then(|| "is-shown"))}>
                <span class="eyebrow">{"01 / SIGNAL DETECTION"}</span>
                <h2 class="section-title">
                    {"THE PROBLEM OF "}<span class="accent">{"FRAGMENTATION"}</span>
                </h2>
            </div>

            <div ref={cards_ref} class={classes!("reveal-up", cards_shown.then(|| "is-shown"))}>
                <div class="marquee">
                    <div class="marquee__track marquee__track--right">
                        { for marquee_row(first, 0).into_iter().map(|(index, signal)| html! { <SignalCard index={index} signal={signal} /> }) }
                    </div>
                </div>
                <div class="marquee">
                    <div class="marquee__track marquee__track--left">
                        { for marquee_row(second, ROW_LEN).into_iter().map(|(index, signal)| html! { <SignalCard index={index} signal={signal} /> }) }
                    </div>
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct SignalCardProps {
    index: usize,
    signal: &'static Signal,
}

#[function_component(SignalCard)]
fn signal_card(props: &SignalCardProps) -> Html {
    html! {
        <article class="signal-card">
            <div class="signal-card__body">
                <span class="signal-card__number">{issue_number(props.index)}</span>
                <h3>{props.signal.title}</h3>
                <div class="signal-card__rule"></div>
                <p>{props.signal.note}</p>
                <div class="signal-card__fold"></div>
            </div>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_repeat_for_a_seamless_loop() {
        let (first, second) = SIGNALS.split_at(ROW_LEN);

        let row: Vec<usize> = marquee_row(first, 0).into_iter().map(|(i, _)| i).collect();
        assert_eq!(row, vec![0, 1, 2, 3, 0, 1, 2, 3]);

        let row = marquee_row(second, ROW_LEN);
        let numbers: Vec<String> = row.iter().map(|(i, _)| issue_number(*i)).collect();
        assert_eq!(numbers[0], "No. 05");
        assert_eq!(numbers[7], "No. 08");
        assert_eq!(row[4].1.title, "Mental Health Isolation");
    }

    #[test]
    fn every_signal_has_copy() {
        assert!(SIGNALS.iter().all(|s| !s.title.is_empty() && !s.note.is_empty()));
    }
}
