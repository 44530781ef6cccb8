use yew::prelude::*;
use gloo_timers::callback::Timeout;

#[function_component(Hero)]
pub fn hero() -> Html {
    let visible = use_state(|| false);

    // Fade in once after mount
    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(50, move || visible.set(true));
                move || drop(timeout)
            },
            (),
        );
    }

    html! {
        <section id="home" class="hero">
            <div class="hero-blobs" aria-hidden="true">
                <div class="blob blob-main"></div>
                <div class="blob blob-side"></div>
            </div>

            <div class={classes!("hero-content", (*visible).then(|| "visible"))}>
                <div class="hero-kicker">{"Service‑first • Community‑powered"}</div>
                <h1>
                    {"Make "}
                    <span class="hero-highlight">{"social service"}</span>
                    {" your "}
                    <em>{"lifestyle."}</em>
                </h1>
                <p class="hero-lead">
                    {"We’re a community for people who believe in "}
                    <strong>{"making self‑discovery fun"}</strong>
                    {", connecting with "}
                    <strong>{"like‑minded doers"}</strong>
                    {", and living by a "}
                    <strong>{"service‑first"}</strong>
                    {" philosophy."}
                </p>
                <div class="hero-cta-group">
                    <a href="#join" class="hero-cta">
                        {"Join as Early Volunteer"}<span class="arrow">{"→"}</span>
                    </a>
                    <a href="#focus" class="hero-secondary">{"Explore Focus Areas"}</a>
                </div>
                <p class="hero-disclaimer">
                    {"No spam. No fundraising blasts. Just real work, real people, real impact."}
                </p>
            </div>

            <style>
                {r#"
                .hero {
                    position: relative;
                    overflow: hidden;
                }
                .hero-blobs {
                    position: absolute;
                    inset: 0;
                    z-index: -1;
                    pointer-events: none;
                }
                .blob {
                    position: absolute;
                    border-radius: 9999px;
                    opacity: 0.2;
                    filter: blur(64px);
                }
                .blob-main {
                    left: 50%;
                    top: -10%;
                    width: 44rem;
                    height: 44rem;
                    transform: translateX(-50%);
                    background: linear-gradient(90deg, #6366f1, #2dd4bf, #34d399);
                }
                .blob-side {
                    left: -10%;
                    bottom: -20%;
                    width: 30rem;
                    height: 30rem;
                    background: linear-gradient(135deg, #d946ef, #c084fc);
                }
                .hero-content {
                    max-width: 64rem;
                    margin: 0 auto;
                    padding: 6rem 1rem;
                    text-align: center;
                    opacity: 0;
                    transform: translateY(20px);
                    transition: opacity 0.8s ease, transform 0.8s ease;
                }
                .hero-content.visible {
                    opacity: 1;
                    transform: translateY(0);
                }
                .hero-kicker {
                    display: inline-flex;
                    padding: 0.25rem 0.75rem;
                    border-radius: 9999px;
                    background: rgba(255, 255, 255, 0.05);
                    color: rgba(255, 255, 255, 0.7);
                    font-size: 0.75rem;
                    font-weight: 600;
                    letter-spacing: 0.05em;
                    text-transform: uppercase;
                }
                .hero h1 {
                    max-width: 48rem;
                    margin: 1rem auto 0;
                    font-size: 3rem;
                    font-weight: 900;
                    line-height: 1.05;
                }
                .hero-highlight {
                    background: linear-gradient(90deg, #5eead4, #818cf8, #6ee7b7);
                    -webkit-background-clip: text;
                    background-clip: text;
                    color: transparent;
                }
                .hero h1 em {
                    font-style: normal;
                    text-decoration: underline;
                    text-decoration-color: rgba(52, 211, 153, 0.6);
                    text-underline-offset: 10px;
                }
                .hero-lead {
                    max-width: 42rem;
                    margin: 1.25rem auto 0;
                    font-size: 1.125rem;
                    color: rgba(255, 255, 255, 0.75);
                }
                .hero-cta-group {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 0.75rem;
                    margin-top: 2rem;
                }
                .hero-cta {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.75rem 1.25rem;
                    border-radius: 9999px;
                    background: rgba(255, 255, 255, 0.9);
                    color: #0f172a;
                    font-weight: 600;
                    text-decoration: none;
                }
                .hero-cta:hover .arrow {
                    transform: translateX(2px);
                }
                .hero-secondary {
                    padding: 0.75rem 1.25rem;
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    border-radius: 9999px;
                    color: rgba(255, 255, 255, 0.9);
                    font-weight: 600;
                    text-decoration: none;
                }
                .hero-disclaimer {
                    margin-top: 1rem;
                    font-size: 0.75rem;
                    color: rgba(255, 255, 255, 0.6);
                }
                @media (max-width: 640px) {
                    .hero h1 {
                        font-size: 2.25rem;
                    }
                    .hero-content {
                        padding: 5rem 1rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}
