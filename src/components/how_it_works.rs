use std::rc::Rc;

use yew::prelude::*;

use crate::components::section_heading::SectionHeading;
use crate::content::SiteContent;

#[derive(Properties, PartialEq)]
pub struct HowItWorksProps {
    pub content: Rc<SiteContent>,
}

#[function_component(HowItWorks)]
pub fn how_it_works(props: &HowItWorksProps) -> Html {
    html! {
        <section id="how" class="page-section">
            <div class="section-inner">
                <SectionHeading
                    kicker="How the tribe works"
                    title={html! { {"Simple, consistent, human"} }}
                    sub="Designed for busy students and professionals—zero fluff, maximum momentum."
                />

                <div class="steps-grid">
                    {
                        props.content.steps.iter().enumerate().map(|(i, step)| {
                            let badge = format!(
                                "background: linear-gradient(90deg, {}, {});",
                                step.badge_from, step.badge_to
                            );
                            html! {
                                <div key={step.title.clone()} class="reveal" style={reveal_delay(i)}>
                                    <div class="glass-card step-card">
                                        <div class="step-badge" style={badge}>{format!("Step {}", i + 1)}</div>
                                        <div class="card-title-row">
                                            <span class="card-icon">{step.icon.clone()}</span>
                                            <h3>{step.title.clone()}</h3>
                                        </div>
                                        <p class="card-desc">{step.desc.clone()}</p>
                                    </div>
                                </div>
                            }
                        }).collect::<Html>()
                    }
                </div>

                <div class="steps-connector" aria-hidden="true"></div>
            </div>
            <style>
                {r#"
                .steps-grid {
                    display: grid;
                    gap: 1.5rem;
                    max-width: 64rem;
                    margin: 2.5rem auto 0;
                    grid-template-columns: repeat(3, minmax(0, 1fr));
                }
                .step-card {
                    padding: 1.25rem;
                }
                .step-badge {
                    display: inline-flex;
                    padding: 0.25rem 0.75rem;
                    border-radius: 9999px;
                    color: #0f172a;
                    font-size: 0.75rem;
                    font-weight: 700;
                    letter-spacing: 0.05em;
                    text-transform: uppercase;
                }
                .steps-connector {
                    height: 2px;
                    margin-top: 2rem;
                    background: linear-gradient(90deg, transparent, rgba(255, 255, 255, 0.2), transparent);
                }
                @media (max-width: 640px) {
                    .steps-grid {
                        grid-template-columns: 1fr;
                    }
                    .steps-connector {
                        display: none;
                    }
                }
                "#}
            </style>
        </section>
    }
}

/// Inline style staggering the reveal animation of the `index`th card.
pub fn reveal_delay(index: usize) -> String {
    format!("animation-delay: {:.2}s;", index as f64 * 0.06)
}

#[cfg(test)]
mod tests {
    use super::reveal_delay;

    #[test]
    fn reveal_delay_staggers_cards() {
        assert_eq!(reveal_delay(0), "animation-delay: 0.00s;");
        assert_eq!(reveal_delay(3), "animation-delay: 0.18s;");
    }
}
