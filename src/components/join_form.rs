use std::rc::Rc;

use log::{error, info, warn};
use wasm_bindgen::JsValue;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::section_heading::SectionHeading;
use crate::config;
use crate::content::SiteContent;
use crate::form::{FormAction, FormState};

#[derive(Properties, PartialEq)]
pub struct JoinFormProps {
    pub content: Rc<SiteContent>,
}

#[derive(Properties, PartialEq)]
struct FieldProps {
    label: AttrValue,
    placeholder: AttrValue,
    value: AttrValue,
    #[prop_or(AttrValue::Static("text"))]
    input_type: AttrValue,
    on_change: Callback<String>,
}

#[function_component(Field)]
fn field(props: &FieldProps) -> Html {
    let oninput = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(input.value());
        })
    };

    html! {
        <div class="field">
            <label>{props.label.clone()}</label>
            <input
                type={props.input_type.clone()}
                placeholder={props.placeholder.clone()}
                value={props.value.clone()}
                {oninput}
            />
        </div>
    }
}

fn open_link(href: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    window.location().set_href(href)
}

#[function_component(JoinForm)]
pub fn join_form(props: &JoinFormProps) -> Html {
    let form = use_reducer(FormState::default);
    let ready = form.readiness().is_ready();

    let dispatch = |make: fn(String) -> FormAction| {
        let form = form.clone();
        Callback::from(move |value: String| form.dispatch(make(value)))
    };

    let on_continue = {
        let form = form.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            // Built from the state as of this click, never reused across edits.
            let Some(href) = form.continue_target(config::ORG_WHATSAPP) else {
                warn!("join form incomplete, ignoring continue");
                return;
            };
            info!("opening WhatsApp chat");
            if let Err(e) = open_link(&href) {
                error!("failed to open WhatsApp link: {:?}", e);
            }
        })
    };

    html! {
        <section id="join" class="page-section">
            <div class="section-inner narrow">
                <SectionHeading
                    kicker="Start today"
                    title={html! { {"Join as Early Volunteer"} }}
                    sub="Share the basics. We don't store anything here—this just composes a WhatsApp message to us."
                />

                <div class="glass-card join-card">
                    <div class="field-grid">
                        <Field
                            label="Name*"
                            placeholder="Your full name"
                            value={form.name.clone()}
                            on_change={dispatch(FormAction::SetName)}
                        />
                        <Field
                            label="City"
                            placeholder="Where are you based?"
                            value={form.city.clone()}
                            on_change={dispatch(FormAction::SetCity)}
                        />
                        <Field
                            label="Phone*"
                            placeholder="Your number"
                            input_type="tel"
                            value={form.phone.clone()}
                            on_change={dispatch(FormAction::SetPhone)}
                        />
                        <Field
                            label="Why do you want to join?"
                            placeholder="A line about your motivation"
                            value={form.why.clone()}
                            on_change={dispatch(FormAction::SetWhy)}
                        />
                    </div>

                    <div class="focus-picker">
                        <div class="picker-label">{"Pick areas you care about"}</div>
                        <div class="tag-row">
                            {
                                props.content.focus_areas.iter().map(|area| {
                                    let selected = form.has_focus(&area.title);
                                    let onclick = {
                                        let form = form.clone();
                                        let title = area.title.clone();
                                        Callback::from(move |_: MouseEvent| {
                                            form.dispatch(FormAction::ToggleFocus(title.clone()))
                                        })
                                    };
                                    html! {
                                        <button
                                            key={area.key.clone()}
                                            type="button"
                                            class={classes!("focus-tag", selected.then(|| "selected"))}
                                            {onclick}
                                        >
                                            {area.title.clone()}
                                        </button>
                                    }
                                }).collect::<Html>()
                            }
                        </div>
                    </div>

                    <div class="join-footer">
                        <p class="join-note">
                            {"We only use this to start a WhatsApp chat. No databases. No spam."}
                        </p>
                        <a
                            href={form.continue_target(config::ORG_WHATSAPP)}
                            aria-disabled={(!ready).to_string()}
                            class={classes!("join-cta", (!ready).then(|| "disabled"))}
                            onclick={on_continue}
                        >
                            {
                                if ready {
                                    html! { <>{"Continue on WhatsApp"}<span class="arrow">{"→"}</span></> }
                                } else {
                                    html! { {"Fill name & phone to continue"} }
                                }
                            }
                        </a>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .join-card {
                    margin-top: 2rem;
                }
                .field-grid {
                    display: grid;
                    gap: 1rem;
                    grid-template-columns: repeat(2, minmax(0, 1fr));
                }
                .field label {
                    display: block;
                    margin-bottom: 0.5rem;
                    font-size: 0.875rem;
                    color: rgba(255, 255, 255, 0.7);
                }
                .field input {
                    width: 100%;
                    box-sizing: border-box;
                    padding: 0.5rem 0.75rem;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 0.75rem;
                    background: rgba(15, 23, 42, 0.6);
                    color: #ffffff;
                    outline: none;
                }
                .field input::placeholder {
                    color: rgba(255, 255, 255, 0.4);
                }
                .field input:focus {
                    border-color: rgba(255, 255, 255, 0.2);
                }
                .focus-picker {
                    margin-top: 1.25rem;
                }
                .picker-label {
                    margin-bottom: 0.5rem;
                    font-size: 0.875rem;
                    color: rgba(255, 255, 255, 0.7);
                }
                .tag-row {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                }
                .focus-tag {
                    padding: 0.25rem 0.75rem;
                    border: 1px solid rgba(255, 255, 255, 0.15);
                    border-radius: 9999px;
                    background: rgba(255, 255, 255, 0.05);
                    color: rgba(255, 255, 255, 0.8);
                    font-size: 0.875rem;
                    cursor: pointer;
                    transition: background 0.2s ease;
                }
                .focus-tag:hover {
                    background: rgba(255, 255, 255, 0.1);
                }
                .focus-tag.selected {
                    border-color: #ffffff;
                    background: #ffffff;
                    color: #0f172a;
                }
                .join-footer {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 0.75rem;
                    margin-top: 1.5rem;
                }
                .join-note {
                    font-size: 0.75rem;
                    color: rgba(255, 255, 255, 0.6);
                }
                .join-cta {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.75rem 1.25rem;
                    border-radius: 9999px;
                    background: #ffffff;
                    color: #0f172a;
                    font-weight: 600;
                    text-decoration: none;
                    cursor: pointer;
                }
                .join-cta:hover {
                    background: rgba(255, 255, 255, 0.9);
                }
                .join-cta.disabled {
                    border: 1px solid rgba(255, 255, 255, 0.15);
                    background: rgba(255, 255, 255, 0.05);
                    color: rgba(255, 255, 255, 0.5);
                    cursor: not-allowed;
                }
                @media (max-width: 640px) {
                    .field-grid {
                        grid-template-columns: 1fr;
                    }
                    .join-footer {
                        flex-direction: column;
                    }
                }
                "#}
            </style>
        </section>
    }
}
