//! Helpers shared by the integration tests.

use axum::{body::to_bytes, response::Response};
use serde::de::DeserializeOwned;
use voyager::model::{api::ErrorDto, planet::PlanetDto};

/// Reads a response body & deserializes it from JSON
pub async fn body_json<T: DeserializeOwned>(resp: Response) -> T {
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");

    serde_json::from_slice(&bytes).expect("Failed to deserialize response body")
}

/// Reads an error response & returns its messages
pub async fn error_messages(resp: Response) -> Vec<String> {
    body_json::<ErrorDto>(resp).await.errors
}

/// Planet details as returned by the API for a mock planet
pub fn planet_dto(planet: &entity::planet::Model) -> PlanetDto {
    PlanetDto::from(planet.clone())
}
