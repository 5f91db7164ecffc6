use gloo_console::{error, info};
use travel_memory_lib::experience::{experience_path, ExperienceId};
use yew::Callback;
use yew_router::{navigator::Navigator, Routable};

use crate::Route;

/// Something that can switch the active view given a path.
pub trait Navigate {
    fn navigate(&self, path: &str);
}

/// Route a path resolves to, and whether it only got there by falling back to `NotFound`.
fn resolve(path: &str) -> (Route, bool) {
    let route = Route::recognize(path).unwrap_or(Route::NotFound);
    let fell_back = route == Route::NotFound && path.trim_end_matches('/') != Route::NotFound.to_path();
    (route, fell_back)
}

impl Navigate for Navigator {
    fn navigate(&self, path: &str) {
        let (route, fell_back) = resolve(path);
        if fell_back {
            error!(format!("No route for {path}"));
        } else {
            info!(format!("Navigating to {path}"));
        }
        self.push(&route);
    }
}

impl Navigate for Callback<String> {
    fn navigate(&self, path: &str) {
        self.emit(path.to_owned());
    }
}

/// Sends the details path of `id` to the navigator, once.
pub fn visit_details(navigator: &impl Navigate, id: Option<&ExperienceId>) {
    navigator.navigate(&experience_path(id));
}
