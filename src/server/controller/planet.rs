use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, planet::PlanetDto},
    server::{error::Error, model::app::AppState, service::planet::PlanetService},
};

pub static PLANET_TAG: &str = "planet";

/// List all planets
///
/// # Responses
/// - 200 (OK): Every planet ordered by ID
#[utoipa::path(
    get,
    path = "/planets",
    tag = PLANET_TAG,
    responses(
        (status = 200, description = "All planets", body = Vec<PlanetDto>),
        (status = 422, description = "Request could not be processed", body = ErrorDto)
    ),
)]
pub async fn get_planets(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let planet_service = PlanetService::new(&state.db);

    let planets = planet_service.get_planets().await?;

    Ok((StatusCode::OK, Json(planets)))
}
