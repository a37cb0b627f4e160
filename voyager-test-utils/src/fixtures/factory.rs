//! Factory functions for generating mock database models.
//!
//! Provides pure functions for creating models with standard test values. These are in-memory
//! model instances that don't require database interaction, suitable for unit tests.

use chrono::Utc;

use crate::model::{PlanetModel, ScientistModel};

/// Create a mock scientist database model for testing.
///
/// # Arguments
/// - `id` - The record ID
/// - `name` - The scientist's name
pub fn mock_scientist_model(id: i32, name: &str) -> ScientistModel {
    let now = Utc::now().naive_utc();
    ScientistModel {
        id,
        name: name.to_string(),
        field_of_study: "Astrophysics".to_string(),
        avatar: "https://example.com/avatars/scientist.png".to_string(),
        created_at: now,
        updated_at: now,
    }
}

/// Create a mock planet database model for testing.
///
/// # Arguments
/// - `id` - The record ID
/// - `name` - The planet's name
pub fn mock_planet_model(id: i32, name: &str) -> PlanetModel {
    let now = Utc::now().naive_utc();
    PlanetModel {
        id,
        name: name.to_string(),
        distance_from_earth: "225 million km".to_string(),
        nearest_star: "Sun".to_string(),
        image: "https://example.com/planets/planet.jpg".to_string(),
        created_at: now,
        updated_at: now,
    }
}
