use log::{info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod contact;
mod content;
mod theme;

mod components {
    pub mod nav;
    pub mod notification;
    pub mod reveal;
    pub mod section;
}

mod sections {
    pub mod case_studies;
    pub mod footer;
    pub mod hero;
    pub mod integrations;
    pub mod process;
    pub mod services;
    pub mod testimonials;
}

mod pages {
    pub mod home;
    pub mod not_found;
}

use components::notification::ToastProvider;
use pages::{home::Home, not_found::NotFound};
use theme::{Theme, ThemeProvider};

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

#[function_component]
fn App() -> Html {
    html! {
        <ThemeProvider theme={Theme::site_default()}>
            <ToastProvider>
                <BrowserRouter>
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </ToastProvider>
        </ThemeProvider>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
