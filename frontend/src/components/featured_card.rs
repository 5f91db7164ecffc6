use gloo_console::error;
use travel_memory_lib::{card::CardData, experience::ExperienceId};
use yew::prelude::*;
use yew_router::{hooks::use_navigator, navigator::Navigator};

use crate::navigation::visit_details;

#[derive(PartialEq, Properties, Clone)]
pub struct FeaturedCardProps {
    #[prop_or_default]
    pub id: Option<ExperienceId>,
    #[prop_or_default]
    pub title: AttrValue,
    #[prop_or_default]
    pub trip_type: AttrValue,
    #[prop_or_default]
    pub description: AttrValue,
    /// Overrides the router as navigation target when set.
    #[prop_or_default]
    pub on_navigate: Option<Callback<String>>,
}

impl From<CardData> for FeaturedCardProps {
    fn from(card: CardData) -> Self {
        Self {
            id: card.id,
            title: card.title.into(),
            trip_type: card.trip_type.into(),
            description: card.description.into(),
            on_navigate: None,
        }
    }
}

/// Whole body of the "More Details" click handler. `on_navigate` wins over the router.
/// Returns false when there was nothing to navigate with; the caller logs that.
fn more_details(id: Option<&ExperienceId>, on_navigate: Option<&Callback<String>>, navigator: Option<&Navigator>) -> bool {
    match (on_navigate, navigator) {
        (Some(on_navigate), _) => visit_details(on_navigate, id),
        (None, Some(navigator)) => visit_details(navigator, id),
        (None, None) => return false,
    }
    true
}

/// Card summarizing a featured experience, with a button leading to its details.
#[function_component]
pub fn FeaturedCard(props: &FeaturedCardProps) -> Html {
    let navigator = use_navigator();

    let onclick = {
        let id = props.id.clone();
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| {
            if !more_details(id.as_ref(), on_navigate.as_ref(), navigator.as_ref()) {
                error!("FeaturedCard used outside a router without on_navigate");
            }
        })
    };

    html! {
        <div class="card">
            <div class="card-header">{"Featured"}</div>
            <div class="card-body">
                <h5 class="card-title">{props.title.clone()}</h5>
                <h6 class="card-subtitle mb-2 text-body-secondary">{props.trip_type.clone()}</h6>
                <p class="card-text">{props.description.clone()}</p>
                <button type="button" class="btn btn-success" {onclick}>{"More Details"}</button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{components::test_util::render, navigation::tests::RecordingNavigator};

    fn paris() -> FeaturedCardProps {
        CardData::new(42i64, "Paris Getaway", "Leisure", "A weekend in Paris.").into()
    }

    fn blank_adventure() -> FeaturedCardProps {
        CardData::new("abc-1", "", "Adventure", "").into()
    }

    fn count(html: &str, needle: &str) -> usize {
        html.matches(needle).count()
    }

    #[tokio::test]
    async fn renders_every_region_once() {
        let html = render::<FeaturedCard>(paris).await;

        assert_eq!(count(&html, r#"<div class="card-header">Featured</div>"#), 1);
        assert_eq!(count(&html, r#"<h5 class="card-title">Paris Getaway</h5>"#), 1);
        assert_eq!(count(&html, r#"<h6 class="card-subtitle mb-2 text-body-secondary">Leisure</h6>"#), 1);
        assert_eq!(count(&html, r#"<p class="card-text">A weekend in Paris.</p>"#), 1);
        assert_eq!(count(&html, "<button"), 1);
        assert_eq!(count(&html, ">More Details</button>"), 1);
    }

    #[tokio::test]
    async fn empty_text_keeps_nodes() {
        let html = render::<FeaturedCard>(blank_adventure).await;

        assert_eq!(count(&html, r#"<h5 class="card-title"></h5>"#), 1);
        assert_eq!(count(&html, r#"<p class="card-text"></p>"#), 1);
        assert!(html.contains(">Adventure</h6>"));
        assert!(html.contains(">More Details</button>"));
    }

    #[tokio::test]
    async fn renders_without_id() {
        let html = render::<FeaturedCard>(|| FeaturedCardProps::from(CardData::default())).await;
        assert_eq!(count(&html, ">Featured</div>"), 1);
        assert_eq!(count(&html, ">More Details</button>"), 1);
    }

    #[tokio::test]
    async fn markup_is_escaped() {
        let html = render::<FeaturedCard>(|| CardData::new(1i64, "<b>Rome</b>", "City", "").into()).await;
        assert!(html.contains("&lt;b&gt;Rome&lt;/b&gt;"));
        assert!(!html.contains("<b>Rome"));
    }

    #[tokio::test]
    async fn rendering_is_idempotent() {
        let first = render::<FeaturedCard>(paris).await;
        let second = render::<FeaturedCard>(paris).await;
        assert_eq!(first, second);
    }

    #[test]
    fn click_navigates_once_to_numeric_id() {
        let nav = RecordingNavigator::default();
        let props = paris();

        assert!(more_details(props.id.as_ref(), Some(&nav.callback()), None));
        assert_eq!(nav.recorded(), vec!["/experiencedetails/42"]);
    }

    #[test]
    fn click_navigates_to_text_id() {
        let nav = RecordingNavigator::default();
        let props = blank_adventure();

        assert!(more_details(props.id.as_ref(), Some(&nav.callback()), None));
        assert_eq!(nav.recorded(), vec!["/experiencedetails/abc-1"]);
    }

    #[test]
    fn click_without_id_goes_to_undefined() {
        let nav = RecordingNavigator::default();

        assert!(more_details(None, Some(&nav.callback()), None));
        assert_eq!(nav.recorded(), vec!["/experiencedetails/undefined"]);
    }

    #[test]
    fn click_without_navigator_is_dropped() {
        assert!(!more_details(Some(&ExperienceId::from(42i64)), None, None));
    }
}
