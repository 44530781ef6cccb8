use yew::prelude::*;
use yew_hooks::prelude::*;
use web_sys::MouseEvent;

use crate::config;

const NAV_LINKS: [(&str, &str); 5] = [
    ("#about", "About"),
    ("#how", "How it works"),
    ("#focus", "Focus Areas"),
    ("#join", "Join"),
    ("#social", "Social"),
];

#[function_component(NavBar)]
pub fn nav_bar() -> Html {
    let menu_open = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();
    let is_scrolled = scroll_y > config::NAV_SCROLL_THRESHOLD;

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // Anchor clicks keep their default so the browser still jumps to the section.
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-links mobile-menu-open"
    } else {
        "nav-links"
    };

    html! {
        <div class={classes!("top-nav", is_scrolled.then(|| "scrolled"))}>
            <div class="nav-content">
                <a href="#home" class="nav-logo">
                    <div class="logo-mark"><div></div></div>
                    <span>
                        {"The "}<span class="gradient-text">{"Impact"}</span>{" Tribe"}
                    </span>
                </a>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <nav class={menu_class}>
                    {
                        NAV_LINKS.iter().map(|(href, label)| html! {
                            <a class="nav-link" href={*href} onclick={close_menu.clone()}>{*label}</a>
                        }).collect::<Html>()
                    }
                    <a class="nav-cta" href="#join" onclick={close_menu.clone()}>
                        {"Become an Early Volunteer"}
                    </a>
                </nav>
            </div>
            <style>
                {r#"
                .top-nav {
                    position: sticky;
                    top: 0;
                    z-index: 50;
                    width: 100%;
                    backdrop-filter: blur(8px);
                    background: rgba(2, 6, 23, 0.4);
                    transition: background 0.3s ease, box-shadow 0.3s ease;
                }
                .top-nav.scrolled {
                    background: rgba(2, 6, 23, 0.85);
                    box-shadow: 0 1px 0 rgba(255, 255, 255, 0.08);
                }
                .nav-content {
                    max-width: 80rem;
                    margin: 0 auto;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    padding: 1rem;
                }
                .nav-logo {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    color: #ffffff;
                    font-weight: 600;
                    text-decoration: none;
                }
                .logo-mark {
                    width: 2rem;
                    height: 2rem;
                    padding: 2px;
                    border-radius: 1rem;
                    background: linear-gradient(135deg, #2dd4bf, #6366f1);
                }
                .logo-mark div {
                    width: 100%;
                    height: 100%;
                    border-radius: 1rem;
                    background: #020617;
                }
                .gradient-text {
                    background: linear-gradient(90deg, #818cf8, #5eead4, #34d399);
                    -webkit-background-clip: text;
                    background-clip: text;
                    color: transparent;
                }
                .nav-links {
                    display: flex;
                    align-items: center;
                    gap: 1.5rem;
                    font-size: 0.875rem;
                }
                .nav-link {
                    color: rgba(255, 255, 255, 0.8);
                    text-decoration: none;
                }
                .nav-link:hover {
                    color: #ffffff;
                }
                .nav-cta {
                    padding: 0.5rem 1rem;
                    border-radius: 9999px;
                    background: rgba(255, 255, 255, 0.1);
                    color: #ffffff;
                    font-weight: 500;
                    text-decoration: none;
                }
                .nav-cta:hover {
                    background: rgba(255, 255, 255, 0.2);
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 4px;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .burger-menu span {
                    display: block;
                    width: 22px;
                    height: 2px;
                    background: #ffffff;
                }
                @media (max-width: 768px) {
                    .burger-menu {
                        display: flex;
                    }
                    .nav-links {
                        display: none;
                    }
                    .nav-links.mobile-menu-open {
                        display: flex;
                        flex-direction: column;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        padding: 1rem;
                        background: rgba(2, 6, 23, 0.95);
                    }
                }
                "#}
            </style>
        </div>
    }
}
