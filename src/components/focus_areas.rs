use std::rc::Rc;

use yew::prelude::*;

use crate::components::how_it_works::reveal_delay;
use crate::components::section_heading::SectionHeading;
use crate::content::SiteContent;

#[derive(Properties, PartialEq)]
pub struct FocusAreasProps {
    pub content: Rc<SiteContent>,
}

#[function_component(FocusAreas)]
pub fn focus_areas(props: &FocusAreasProps) -> Html {
    html! {
        <section id="focus" class="page-section">
            <div class="section-inner">
                <SectionHeading
                    kicker="Where we begin"
                    title={html! { {"Focus Areas"} }}
                    sub="Start small, stay consistent. Pick one area to begin and grow your impact with the tribe."
                />
                <div class="focus-grid">
                    {
                        props.content.focus_areas.iter().enumerate().map(|(idx, area)| {
                            let border = format!(
                                "background: linear-gradient(135deg, {}, {});",
                                area.gradient[0], area.gradient[1]
                            );
                            let accent = format!(
                                "background: linear-gradient(90deg, {}, {});",
                                area.accent[0], area.accent[1]
                            );
                            html! {
                                <div key={area.key.clone()} class="reveal focus-card-wrap" style={reveal_delay(idx)}>
                                    <div class="focus-card-border" style={border}>
                                        <div class="focus-card">
                                            <div class="focus-badge" style={accent}>{area.title.clone()}</div>
                                            <div class="card-title-row">
                                                <span class="card-icon">{area.icon.clone()}</span>
                                                <h3>{area.title.clone()}</h3>
                                            </div>
                                            <p class="card-desc">{area.blurb.clone()}</p>
                                            <div class="focus-footer">{"Start a micro‑mission this week →"}</div>
                                        </div>
                                    </div>
                                </div>
                            }
                        }).collect::<Html>()
                    }
                </div>
            </div>
            <style>
                {r#"
                .focus-grid {
                    display: grid;
                    grid-auto-rows: 1fr;
                    gap: 1.5rem;
                    margin-top: 2.5rem;
                    grid-template-columns: repeat(4, minmax(0, 1fr));
                }
                .focus-card-border {
                    height: 100%;
                    padding: 1px;
                    border-radius: 1.5rem;
                }
                .focus-card {
                    display: flex;
                    flex-direction: column;
                    height: 100%;
                    min-height: 240px;
                    padding: 1.25rem;
                    border-radius: calc(1.5rem - 1px);
                    background: rgba(2, 6, 23, 0.7);
                    backdrop-filter: blur(24px);
                }
                .focus-badge {
                    width: fit-content;
                    padding: 0.25rem 0.75rem;
                    border-radius: 9999px;
                    color: #0f172a;
                    font-size: 0.75rem;
                    font-weight: 700;
                    letter-spacing: 0.05em;
                    text-transform: uppercase;
                }
                .focus-footer {
                    margin-top: auto;
                    padding-top: 1rem;
                    font-size: 0.75rem;
                    color: rgba(255, 255, 255, 0.5);
                }
                @media (max-width: 1024px) {
                    .focus-grid {
                        grid-template-columns: repeat(2, minmax(0, 1fr));
                    }
                }
                @media (max-width: 640px) {
                    .focus-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
