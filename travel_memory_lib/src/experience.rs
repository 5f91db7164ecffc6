use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::card::CardData;

pub const EXPERIENCE_DETAILS_PREFIX: &str = "/experiencedetails/";

/// Segment used when a card has no id. Kept verbatim so the details view
/// can report the experience as missing.
pub const UNDEFINED_SEGMENT: &str = "undefined";

/// Opaque experience identifier. Written into paths exactly as received.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExperienceId(String);

impl ExperienceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for ExperienceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ExperienceId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ExperienceId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<i64> for ExperienceId {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

impl From<u64> for ExperienceId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl Serialize for ExperienceId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ExperienceId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Document ids arrive as strings, but older records used plain integers
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Signed(i64),
            Unsigned(u64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => Self(s),
            RawId::Signed(n) => Self::from(n),
            RawId::Unsigned(n) => Self::from(n),
        })
    }
}

/// Path of the details view for an experience.
/// A missing id is not guarded against: it produces `/experiencedetails/undefined`.
pub fn experience_path(id: Option<&ExperienceId>) -> String {
    match id {
        Some(id) => format!("{EXPERIENCE_DETAILS_PREFIX}{id}"),
        None => format!("{EXPERIENCE_DETAILS_PREFIX}{UNDEFINED_SEGMENT}"),
    }
}

/// A travel experience as served by the backend's `/trip` endpoints.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Experience {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ExperienceId>,
    pub trip_name: String,
    pub trip_type: String,
    pub short_description: String,
    pub experience: String,
    pub name_of_hotels: String,
    pub places_visited: String,
    pub total_cost: f64,
    pub start_date_of_journey: String,
    pub end_date_of_journey: String,
    pub image: String,
    pub featured: bool,
}

impl Experience {
    pub fn new(id: impl Into<ExperienceId>, trip_name: String, trip_type: String, short_description: String) -> Self {
        Self {
            id: Some(id.into()),
            trip_name,
            trip_type,
            short_description,
            ..Default::default()
        }
    }

    pub fn card_data(&self) -> CardData {
        CardData {
            id: self.id.clone(),
            title: self.trip_name.clone(),
            trip_type: self.trip_type.clone(),
            description: self.short_description.clone(),
        }
    }
}

// Keeps the backend's ordering
pub fn featured(experiences: &[Experience]) -> impl Iterator<Item = &Experience> {
    experiences.iter().filter(|e| e.featured)
}
