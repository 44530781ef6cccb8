use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SectionHeadingProps {
    #[prop_or_default]
    pub kicker: Option<AttrValue>,
    pub title: Html,
    #[prop_or_default]
    pub sub: Option<AttrValue>,
}

#[function_component(SectionHeading)]
pub fn section_heading(props: &SectionHeadingProps) -> Html {
    html! {
        <div class="section-heading">
            {
                if let Some(kicker) = &props.kicker {
                    html! { <p class="kicker">{kicker.clone()}</p> }
                } else {
                    html! {}
                }
            }
            <h2>{props.title.clone()}</h2>
            {
                if let Some(sub) = &props.sub {
                    html! { <p class="section-sub">{sub.clone()}</p> }
                } else {
                    html! {}
                }
            }
            <style>
                {r#"
                .section-heading {
                    max-width: 48rem;
                    margin: 0 auto;
                    text-align: center;
                }
                .kicker {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    margin-bottom: 0.75rem;
                    padding: 0.25rem 0.75rem;
                    border-radius: 9999px;
                    background: rgba(255, 255, 255, 0.05);
                    box-shadow: inset 0 0 0 1px rgba(255, 255, 255, 0.1);
                    color: rgba(255, 255, 255, 0.7);
                    font-size: 0.75rem;
                    font-weight: 600;
                    letter-spacing: 0.05em;
                    text-transform: uppercase;
                }
                .section-heading h2 {
                    font-size: 2.25rem;
                    font-weight: 700;
                    line-height: 1.2;
                    color: #ffffff;
                }
                .section-sub {
                    margin-top: 0.75rem;
                    color: rgba(255, 255, 255, 0.7);
                }
                @media (max-width: 640px) {
                    .section-heading h2 {
                        font-size: 1.875rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
