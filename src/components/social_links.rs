use std::rc::Rc;

use yew::prelude::*;

use crate::components::section_heading::SectionHeading;
use crate::content::SiteContent;

#[derive(Properties, PartialEq)]
pub struct SocialLinksProps {
    pub content: Rc<SiteContent>,
}

#[function_component(SocialLinks)]
pub fn social_links(props: &SocialLinksProps) -> Html {
    html! {
        <section id="social" class="page-section">
            <div class="section-inner narrow">
                <SectionHeading
                    kicker="Find your people"
                    title={html! { {"Follow & connect"} }}
                    sub="Jump into our socials—DMs open. Join events, micro‑missions, and weekly check‑ins."
                />
                <div class="social-grid">
                    {
                        props.content.social_links.iter().map(|link| html! {
                            <a
                                key={link.key.clone()}
                                href={link.href.clone()}
                                target="_blank"
                                rel="noreferrer"
                                class="social-link"
                            >
                                <span class="social-icon">{link.icon.clone()}</span>
                                <div class="social-label">{link.label.clone()}</div>
                            </a>
                        }).collect::<Html>()
                    }
                </div>
            </div>
            <style>
                {r#"
                .social-grid {
                    display: grid;
                    gap: 1rem;
                    max-width: 48rem;
                    margin: 2rem auto 0;
                    grid-template-columns: repeat(4, minmax(0, 1fr));
                }
                .social-link {
                    padding: 1rem;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 1rem;
                    background: rgba(255, 255, 255, 0.05);
                    color: rgba(255, 255, 255, 0.8);
                    text-align: center;
                    text-decoration: none;
                    backdrop-filter: blur(24px);
                    transition: background 0.2s ease;
                }
                .social-link:hover {
                    background: rgba(255, 255, 255, 0.1);
                }
                .social-icon {
                    font-size: 1.5rem;
                }
                .social-label {
                    margin-top: 0.5rem;
                    font-size: 0.875rem;
                    font-weight: 500;
                }
                .social-link:hover .social-label {
                    color: #ffffff;
                }
                @media (max-width: 640px) {
                    .social-grid {
                        grid-template-columns: repeat(2, minmax(0, 1fr));
                    }
                }
                "#}
            </style>
        </section>
    }
}
