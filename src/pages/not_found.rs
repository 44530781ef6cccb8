use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h1>{"Page not found"}</h1>
            <p>{"This page wandered off on a micro‑mission."}</p>
            <Link<Route> to={Route::Home} classes="not-found-link">
                {"Back to the tribe"}
            </Link<Route>>
            <style>
                {r#"
                .not-found {
                    min-height: 70vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                    text-align: center;
                }
                .not-found-link {
                    padding: 0.75rem 1.25rem;
                    border-radius: 9999px;
                    background: rgba(255, 255, 255, 0.9);
                    color: #0f172a;
                    font-weight: 600;
                    text-decoration: none;
                }
                "#}
            </style>
        </div>
    }
}
