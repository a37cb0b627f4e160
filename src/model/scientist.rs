use serde::{Deserialize, Deserializer, Serialize};

use crate::model::planet::PlanetDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ScientistDto {
    pub id: i32,
    pub name: String,
    pub field_of_study: String,
    pub avatar: String,
}

/// A scientist along with the missions they have been assigned
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ScientistDetailDto {
    pub id: i32,
    pub name: String,
    pub field_of_study: String,
    pub avatar: String,
    pub missions: Vec<ScientistMissionDto>,
}

/// A mission as seen from its scientist, embedding only the planet visited
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ScientistMissionDto {
    pub id: i32,
    pub name: String,
    pub scientist_id: i32,
    pub planet_id: i32,
    pub planet: PlanetDto,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateScientistDto {
    pub name: String,
    pub field_of_study: String,
    pub avatar: String,
}

/// Partial update of a scientist, only fields which are present are applied
///
/// An absent field is `None`, a field sent as `null` is `Some(None)`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateScientistDto {
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<String>)]
    pub name: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<String>)]
    pub field_of_study: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<String>)]
    pub avatar: Option<Option<String>>,
}

/// Marks a field as present, keeping an explicit `null` as `Some(None)`
fn present<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

impl UpdateScientistDto {
    /// Returns true if the update would not change any field
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.field_of_study.is_none() && self.avatar.is_none()
    }
}
