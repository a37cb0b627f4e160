//! Database model type aliases.
//!
//! This module provides type aliases for SeaORM entity models used throughout the server along
//! with their conversions into the DTOs returned by the API. Conversions only copy a record's own
//! columns; nested records are attached by the service building the response.

use crate::model::{planet::PlanetDto, scientist::ScientistDto};

/// Type alias for scientist database model.
///
/// # Fields (from `entity::scientist::Model`)
/// - `id` - Primary key
/// - `name` - Scientist name (unique)
/// - `field_of_study` - Field the scientist works in
/// - `avatar` - URL of the scientist's avatar image
/// - `created_at` - Timestamp when the record was created
/// - `updated_at` - Timestamp of the last record update
pub type ScientistModel = entity::scientist::Model;

/// Type alias for planet database model.
///
/// # Fields (from `entity::planet::Model`)
/// - `id` - Primary key
/// - `name` - Planet name (unique)
/// - `distance_from_earth` - Human readable distance from Earth
/// - `nearest_star` - Name of the nearest star
/// - `image` - URL of an image of the planet
/// - `created_at` - Timestamp when the record was created
/// - `updated_at` - Timestamp of the last record update
pub type PlanetModel = entity::planet::Model;

/// Type alias for mission database model.
///
/// Join record between a scientist and the planet they visit. Each scientist may be
/// referenced by at most one mission.
///
/// # Fields (from `entity::mission::Model`)
/// - `id` - Primary key
/// - `name` - Mission name (unique)
/// - `scientist_id` - Foreign key to the scientist on the mission (unique)
/// - `planet_id` - Foreign key to the planet visited
/// - `created_at` - Timestamp when the record was created
/// - `updated_at` - Timestamp of the last record update
pub type MissionModel = entity::mission::Model;

impl From<ScientistModel> for ScientistDto {
    fn from(scientist: ScientistModel) -> Self {
        Self {
            id: scientist.id,
            name: scientist.name,
            field_of_study: scientist.field_of_study,
            avatar: scientist.avatar,
        }
    }
}

impl From<PlanetModel> for PlanetDto {
    fn from(planet: PlanetModel) -> Self {
        Self {
            id: planet.id,
            name: planet.name,
            distance_from_earth: planet.distance_from_earth,
            nearest_star: planet.nearest_star,
            image: planet.image,
        }
    }
}
