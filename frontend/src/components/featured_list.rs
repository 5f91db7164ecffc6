use gloo_console::error;
use travel_memory_lib::experience::{featured, Experience};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::{api, components::featured_card::{FeaturedCard, FeaturedCardProps}};

#[derive(Clone, PartialEq)]
pub enum ListState {
    Loading,
    Loaded(Vec<Experience>),
    Failed(String),
}

#[derive(PartialEq, Properties, Clone)]
pub struct FeaturedGridProps {
    pub experiences: Vec<Experience>,
}

#[function_component]
pub fn FeaturedGrid(props: &FeaturedGridProps) -> Html {
    let cards: Vec<FeaturedCardProps> = featured(&props.experiences)
        .map(|experience| experience.card_data().into())
        .collect();

    if cards.is_empty() {
        return html! {
            <p class="featured-empty">{"No featured experiences yet"}</p>
        };
    }

    html! {
        <div class="featured-list">
            { for cards.into_iter().map(|card| html! { <FeaturedCard ..card /> }) }
        </div>
    }
}

/// Home view: loads all experiences and shows the featured ones as cards.
#[function_component]
pub fn FeaturedList() -> Html {
    let state = use_state(|| ListState::Loading);

    {
        let state = state.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match api::get_experiences().await {
                    Ok(experiences) => state.set(ListState::Loaded(experiences)),
                    Err(e) => {
                        error!(format!("Failed to load experiences: {e}"));
                        state.set(ListState::Failed(e.to_string()));
                    }
                }
            });
        });
    }

    match &*state {
        ListState::Loading => html! { <p class="loading">{"Loading experiences..."}</p> },
        ListState::Loaded(experiences) => html! { <FeaturedGrid experiences={experiences.clone()} /> },
        ListState::Failed(reason) => html! {
            <p class="error">{format!("Could not load experiences: {reason}")}</p>
        },
    }
}
