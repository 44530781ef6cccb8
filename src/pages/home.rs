use std::rc::Rc;

use yew::prelude::*;

use crate::components::{
    about::About, focus_areas::FocusAreas, footer::Footer, hero::Hero,
    how_it_works::HowItWorks, join_form::JoinForm, nav::NavBar, social_links::SocialLinks,
};
use crate::content::SiteContent;

#[function_component(Home)]
pub fn home() -> Html {
    let content = use_context::<Rc<SiteContent>>();
    let Some(content) = content else {
        log::error!("site content missing from context");
        return html! {};
    };

    html! {
        <div class="landing-page">
            <NavBar />
            <Hero />
            <About />
            <HowItWorks content={content.clone()} />
            <FocusAreas content={content.clone()} />
            <JoinForm content={content.clone()} />
            <SocialLinks content={content} />
            <Footer />
            <style>
                {r#"
                .landing-page {
                    min-height: 100vh;
                    background: linear-gradient(180deg, #020617, #020617, #000000);
                    color: #ffffff;
                    overflow-x: hidden;
                }
                .page-section {
                    position: relative;
                    padding: 5rem 0;
                }
                .section-inner {
                    max-width: 72rem;
                    margin: 0 auto;
                    padding: 0 1rem;
                }
                .section-inner.narrow {
                    max-width: 64rem;
                }
                .glass-card {
                    padding: 1.5rem;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 1.5rem;
                    background: rgba(255, 255, 255, 0.05);
                    backdrop-filter: blur(24px);
                }
                .card-title-row {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    margin-top: 1rem;
                }
                .card-title-row h3 {
                    margin: 0;
                    font-size: 1.125rem;
                    font-weight: 600;
                }
                .card-icon {
                    font-size: 1.25rem;
                }
                .card-desc {
                    margin-top: 0.5rem;
                    font-size: 0.875rem;
                    color: rgba(255, 255, 255, 0.7);
                }
                .reveal {
                    opacity: 0;
                    animation: reveal 0.5s ease forwards;
                }
                @keyframes reveal {
                    from {
                        opacity: 0;
                        transform: translateY(16px);
                    }
                    to {
                        opacity: 1;
                        transform: translateY(0);
                    }
                }
                @media (max-width: 640px) {
                    .page-section {
                        padding: 4rem 0;
                    }
                }
                "#}
            </style>
        </div>
    }
}
