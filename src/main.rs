use std::rc::Rc;

use yew::prelude::*;
use yew_router::prelude::*;
use log::{error, info};

mod config;
mod content;
mod form;
mod link;
mod message;
mod pages {
    pub mod home;
    pub mod not_found;
}
mod components {
    pub mod about;
    pub mod focus_areas;
    pub mod footer;
    pub mod hero;
    pub mod how_it_works;
    pub mod join_form;
    pub mod nav;
    pub mod section_heading;
    pub mod social_links;
}

use content::SiteContent;
use pages::{home::Home, not_found::NotFound};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub content: Rc<SiteContent>,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    html! {
        <ContextProvider<Rc<SiteContent>> context={props.content.clone()}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<Rc<SiteContent>>>
    }
}

#[derive(Properties, PartialEq)]
struct ContentErrorProps {
    message: AttrValue,
}

#[function_component]
fn ContentErrorPage(props: &ContentErrorProps) -> Html {
    html! {
        <div style="min-height: 100vh; display: flex; align-items: center; justify-content: center; padding: 2rem; color: #fff; background: #020617;">
            <div>
                <h1>{"The Impact Tribe"}</h1>
                <p>{"Something went wrong while loading this page. Please try again later."}</p>
                <pre style="opacity: 0.5;">{props.message.clone()}</pre>
            </div>
        </div>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    match SiteContent::load() {
        Ok(content) => {
            info!(
                "Loaded {} focus areas, {} steps",
                content.focus_areas.len(),
                content.steps.len()
            );
            yew::Renderer::<App>::with_props(AppProps {
                content: Rc::new(content),
            })
            .render();
        }
        Err(e) => {
            error!("invalid site content: {}", e);
            gloo_console::error!(format!("invalid site content: {}", e));
            yew::Renderer::<ContentErrorPage>::with_props(ContentErrorProps {
                message: e.to_string().into(),
            })
            .render();
        }
    }
}
