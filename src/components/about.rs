use yew::prelude::*;

use crate::components::section_heading::SectionHeading;

const PHILOSOPHY: [&str; 3] = [
    "Making self‑discovery fun",
    "Connect with like‑minded people",
    "Make service a lifestyle",
];

const PROMISES: [&str; 3] = [
    "Action > talk. We ship weekly micro‑missions.",
    "No spam. No pressure. No forced donations.",
    "Learn by doing. Reflect. Level up your character.",
];

#[derive(Properties, PartialEq)]
pub struct PillProps {
    pub children: Children,
}

#[function_component(Pill)]
pub fn pill(props: &PillProps) -> Html {
    html! {
        <span class="pill">
            <span class="check">{"✓"}</span>
            { for props.children.iter() }
        </span>
    }
}

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id="about" class="page-section">
            <div class="section-inner narrow">
                <SectionHeading
                    kicker="What we stand for"
                    title={html! { <span>{"Service‑first, not donations‑first"}</span> }}
                    sub="Money helps—but consistent action transforms. We show up, learn by serving, and build character together."
                />

                <div class="about-grid">
                    <div class="glass-card">
                        <div class="card-label emerald">{"Core philosophy"}</div>
                        <div class="pill-row">
                            { for PHILOSOPHY.iter().map(|p| html! { <Pill>{*p}</Pill> }) }
                        </div>
                        <p class="card-text">
                            {"We keep it simple: do small, consistent acts of service; reflect together; grow together."}
                        </p>
                    </div>

                    <div class="glass-card">
                        <div class="card-label indigo">{"Our promises"}</div>
                        <ul class="promise-list">
                            { for PROMISES.iter().map(|p| html! {
                                <li><span class="check">{"✓"}</span>{*p}</li>
                            }) }
                        </ul>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .about-grid {
                    display: grid;
                    gap: 1rem;
                    margin-top: 2.5rem;
                    grid-template-columns: repeat(2, minmax(0, 1fr));
                }
                .card-label {
                    margin-bottom: 0.75rem;
                    font-size: 0.875rem;
                    font-weight: 600;
                }
                .card-label.emerald { color: #6ee7b7; }
                .card-label.indigo { color: #a5b4fc; }
                .pill-row {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                }
                .pill {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.25rem 0.75rem;
                    border: 1px solid rgba(255, 255, 255, 0.15);
                    border-radius: 9999px;
                    background: rgba(255, 255, 255, 0.05);
                    font-size: 0.875rem;
                    color: rgba(255, 255, 255, 0.8);
                }
                .check {
                    color: #5eead4;
                }
                .card-text {
                    margin-top: 1rem;
                    color: rgba(255, 255, 255, 0.7);
                }
                .promise-list {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                    color: rgba(255, 255, 255, 0.8);
                }
                .promise-list li {
                    display: flex;
                    align-items: flex-start;
                    gap: 0.75rem;
                    margin-bottom: 0.75rem;
                }
                @media (max-width: 640px) {
                    .about-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
