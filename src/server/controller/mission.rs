use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        mission::{CreateMissionDto, MissionDto},
    },
    server::{error::Error, model::app::AppState, service::mission::MissionService},
};

pub static MISSION_TAG: &str = "mission";

/// Send a scientist on a mission to a planet
///
/// # Responses
/// - 201 (Created): The mission along with its scientist & planet
/// - 422 (Unprocessable Entity): Missing field, blank or duplicate name, unknown scientist or
///   planet, or the scientist is already on a mission
#[utoipa::path(
    post,
    path = "/missions",
    tag = MISSION_TAG,
    request_body = CreateMissionDto,
    responses(
        (status = 201, description = "Mission created", body = MissionDto),
        (status = 422, description = "Invalid mission", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_mission(
    State(state): State<AppState>,
    payload: Result<Json<CreateMissionDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(mission) = payload?;
    let mission_service = MissionService::new(&state.db);

    let mission = mission_service.create_mission(mission).await?;

    Ok((StatusCode::CREATED, Json(mission)))
}
