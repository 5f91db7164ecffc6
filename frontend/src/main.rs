use components::{experience_details::ExperienceDetails, featured_list::FeaturedList, not_found::NotFound};
use gloo_console::info;
use yew::prelude::*;
use yew_router::{BrowserRouter, Routable, Switch};

mod api;
mod components;
mod config;
mod navigation;

#[derive(Clone, Debug, PartialEq, Routable)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/experiencedetails/:id")]
    ExperienceDetails { id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <FeaturedList /> },
        Route::ExperienceDetails { id } => html! { <ExperienceDetails id={id} /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <main class="container">
                <Switch<Route> render={switch} />
            </main>
        </BrowserRouter>
    }
}

fn main() {
    info!(format!("Using backend at '{}'", config::API_BASE_URL));
    yew::Renderer::<App>::new().render();
}
