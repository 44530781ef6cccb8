use chrono::Datelike;
use yew::prelude::*;

const FOOTER_LINKS: [(&str, &str); 5] = [
    ("#about", "About"),
    ("#how", "How it works"),
    ("#focus", "Focus"),
    ("#join", "Join"),
    ("#social", "Social"),
];

pub fn copyright_line(year: i32) -> String {
    format!("© {} Impact Tribe. Built with love, service, and good design.", year)
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-inner">
                <div class="footer-row">
                    <a href="#home" class="footer-brand">{"The Impact Tribe"}</a>
                    <div class="footer-links">
                        {
                            FOOTER_LINKS.iter().map(|(href, label)| html! {
                                <a href={*href}>{*label}</a>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
                <p class="copyright">{copyright_line(year)}</p>
            </div>
            <style>
                {r#"
                .site-footer {
                    margin-top: 2.5rem;
                    padding: 2.5rem 0;
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                }
                .footer-inner {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1rem;
                }
                .footer-row {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1.5rem;
                }
                .footer-brand {
                    color: rgba(255, 255, 255, 0.8);
                    font-weight: 600;
                    text-decoration: none;
                }
                .footer-links {
                    display: flex;
                    gap: 1rem;
                    font-size: 0.875rem;
                }
                .footer-links a {
                    color: rgba(255, 255, 255, 0.6);
                    text-decoration: none;
                }
                .footer-links a:hover {
                    color: #ffffff;
                }
                .copyright {
                    margin-top: 1rem;
                    text-align: center;
                    font-size: 0.75rem;
                    color: rgba(255, 255, 255, 0.5);
                }
                @media (max-width: 640px) {
                    .footer-row {
                        flex-direction: column;
                    }
                }
                "#}
            </style>
        </footer>
    }
}
