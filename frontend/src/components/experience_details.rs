use std::{cell::Cell, rc::Rc};

use gloo_console::{error, info};
use travel_memory_lib::experience::Experience;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::{
    api::{self, ApiError},
    components::not_found::NotFound,
};

#[derive(Clone, PartialEq)]
pub enum DetailsState {
    Loading,
    Loaded(Experience),
    NotFound,
    Failed(String),
}

impl From<Result<Experience, ApiError>> for DetailsState {
    fn from(result: Result<Experience, ApiError>) -> Self {
        match result {
            Ok(experience) => Self::Loaded(experience),
            Err(ApiError::NotFound) => Self::NotFound,
            Err(e) => Self::Failed(e.to_string()),
        }
    }
}

#[derive(PartialEq, Properties, Clone)]
pub struct DetailsViewProps {
    pub state: DetailsState,
}

#[function_component]
pub fn DetailsView(props: &DetailsViewProps) -> Html {
    match &props.state {
        DetailsState::Loading => html! { <p class="loading">{"Loading experience..."}</p> },
        DetailsState::NotFound => html! { <NotFound /> },
        DetailsState::Failed(reason) => html! {
            <p class="error">{format!("Could not load experience: {reason}")}</p>
        },
        DetailsState::Loaded(experience) => html! {
            <div class="experience-details">
                <h1>{experience.trip_name.clone()}</h1>
                <h4 class="text-body-secondary">{experience.trip_type.clone()}</h4>
                <p class="lead">{experience.short_description.clone()}</p>
                <p>{experience.experience.clone()}</p>
                <ul class="list-unstyled">
                    <li>{format!("Hotels: {}", experience.name_of_hotels)}</li>
                    <li>{format!("Places visited: {}", experience.places_visited)}</li>
                    <li>{format!("Dates: {} - {}", experience.start_date_of_journey, experience.end_date_of_journey)}</li>
                    <li>{format!("Total cost: {:.2}", experience.total_cost)}</li>
                </ul>
            </div>
        },
    }
}

/// Set once the id a load was started for is no longer displayed.
#[derive(Clone, Default)]
struct Superseded(Rc<Cell<bool>>);

impl Superseded {
    fn mark(&self) {
        self.0.set(true);
    }

    fn is_marked(&self) -> bool {
        self.0.get()
    }
}

// Applies a finished load unless a newer id took over the view meanwhile
fn deliver(superseded: &Superseded, result: Result<Experience, ApiError>, set: impl FnOnce(DetailsState)) -> bool {
    if superseded.is_marked() {
        return false;
    }
    set(result.into());
    true
}

#[derive(PartialEq, Properties, Clone)]
pub struct ExperienceDetailsProps {
    pub id: AttrValue,
}

/// Details view behind `/experiencedetails/:id`.
#[function_component]
pub fn ExperienceDetails(props: &ExperienceDetailsProps) -> Html {
    let state = use_state(|| DetailsState::Loading);

    {
        let state = state.clone();
        use_effect_with(props.id.clone(), move |id| {
            let id = id.clone();
            let superseded = Superseded::default();
            state.set(DetailsState::Loading);
            let task_superseded = superseded.clone();
            spawn_local(async move {
                let result = api::get_experience(&id).await;
                match &result {
                    Ok(_) => info!(format!("Loaded experience {id}")),
                    Err(ApiError::NotFound) => info!(format!("Experience {id} not found")),
                    Err(e) => error!(format!("Failed to load experience {id}: {e}")),
                }
                if !deliver(&task_superseded, result, |next| state.set(next)) {
                    info!(format!("Dropped stale result for experience {id}"));
                }
            });
            move || superseded.mark()
        });
    }

    html! { <DetailsView state={(*state).clone()} /> }
}
