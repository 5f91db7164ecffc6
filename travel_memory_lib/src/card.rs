use crate::experience::ExperienceId;

/// Display data of a featured card, independent of any UI framework.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CardData {
    pub id: Option<ExperienceId>,
    pub title: String,
    pub trip_type: String,
    pub description: String,
}

impl CardData {
    pub fn new(id: impl Into<ExperienceId>, title: &str, trip_type: &str, description: &str) -> Self {
        Self {
            id: Some(id.into()),
            title: title.to_owned(),
            trip_type: trip_type.to_owned(),
            description: description.to_owned(),
        }
    }
}
