use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod hooks;
mod scroll_spy;
mod viewport;
mod components {
    pub mod fallback_image;
    pub mod footer;
    pub mod nav_bar;
    pub mod rich_text;
}
mod sections {
    pub mod about;
    pub mod education;
    pub mod experience;
    pub mod expertise;
    pub mod hero;
    pub mod projects;
}
mod pages {
    pub mod portfolio;
}

use pages::portfolio::Portfolio;

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
            info!("Rendering Portfolio page");
            html! { <Portfolio /> }
        }
        Route::NotFound => {
            info!("Unknown path, redirecting to Portfolio page");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(err) = console_log::init_with_level(config::log_level()) {
        gloo_console::warn!(format!("Logging unavailable: {}", err));
    }

    info!("Starting portfolio");
    yew::Renderer::<App>::new().render();
}
