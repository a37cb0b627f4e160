use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        scientist::{CreateScientistDto, ScientistDetailDto, ScientistDto, UpdateScientistDto},
    },
    server::{
        error::{not_found::NotFoundError, Error},
        model::app::AppState,
        service::scientist::ScientistService,
    },
};

pub static SCIENTIST_TAG: &str = "scientist";

/// List all scientists
///
/// # Responses
/// - 200 (OK): Every scientist ordered by ID, without missions
#[utoipa::path(
    get,
    path = "/scientists",
    tag = SCIENTIST_TAG,
    responses(
        (status = 200, description = "All scientists", body = Vec<ScientistDto>),
        (status = 422, description = "Request could not be processed", body = ErrorDto)
    ),
)]
pub async fn get_scientists(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let scientist_service = ScientistService::new(&state.db);

    let scientists = scientist_service.get_scientists().await?;

    Ok((StatusCode::OK, Json(scientists)))
}

/// Create a new scientist
///
/// # Responses
/// - 201 (Created): The created scientist
/// - 422 (Unprocessable Entity): Missing or mistyped field, blank name, or name already in use
#[utoipa::path(
    post,
    path = "/scientists",
    tag = SCIENTIST_TAG,
    request_body = CreateScientistDto,
    responses(
        (status = 201, description = "Scientist created", body = ScientistDto),
        (status = 422, description = "Invalid scientist", body = ErrorDto)
    ),
)]
pub async fn create_scientist(
    State(state): State<AppState>,
    payload: Result<Json<CreateScientistDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(scientist) = payload?;
    let scientist_service = ScientistService::new(&state.db);

    let scientist = scientist_service.create_scientist(scientist).await?;

    Ok((StatusCode::CREATED, Json(scientist)))
}

/// Get a scientist along with their missions
///
/// # Responses
/// - 200 (OK): The scientist, each mission embedding the planet visited
/// - 404 (Not Found): No scientist with the provided ID
#[utoipa::path(
    get,
    path = "/scientists/{id}",
    tag = SCIENTIST_TAG,
    params(("id" = i32, Path, description = "ID of the scientist")),
    responses(
        (status = 200, description = "Scientist with missions", body = ScientistDetailDto),
        (status = 404, description = "Scientist not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_scientist(
    State(state): State<AppState>,
    Path(scientist_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let scientist_service = ScientistService::new(&state.db);

    let scientist = scientist_service
        .get_scientist(scientist_id)
        .await?
        .ok_or(NotFoundError::Scientist(scientist_id))?;

    Ok((StatusCode::OK, Json(scientist)))
}

/// Update the fields of a scientist present in the request body
///
/// The scientist is looked up before the body is inspected, so an unknown ID is always 404.
///
/// # Responses
/// - 200 (OK): The scientist after the update
/// - 404 (Not Found): No scientist with the provided ID
/// - 422 (Unprocessable Entity): Unknown or null field, blank name, or name already in use
#[utoipa::path(
    patch,
    path = "/scientists/{id}",
    tag = SCIENTIST_TAG,
    params(("id" = i32, Path, description = "ID of the scientist")),
    request_body = UpdateScientistDto,
    responses(
        (status = 200, description = "Scientist updated", body = ScientistDto),
        (status = 404, description = "Scientist not found", body = ErrorDto),
        (status = 422, description = "Invalid update", body = ErrorDto)
    ),
)]
pub async fn update_scientist(
    State(state): State<AppState>,
    Path(scientist_id): Path<i32>,
    payload: Result<Json<UpdateScientistDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let scientist_service = ScientistService::new(&state.db);

    if !scientist_service.scientist_exists(scientist_id).await? {
        return Err(NotFoundError::Scientist(scientist_id).into());
    }
    let Json(changes) = payload?;

    let scientist = scientist_service
        .update_scientist(scientist_id, changes)
        .await?
        .ok_or(NotFoundError::Scientist(scientist_id))?;

    Ok((StatusCode::OK, Json(scientist)))
}

/// Delete a scientist along with their missions
///
/// # Responses
/// - 200 (OK): The scientist was deleted
/// - 404 (Not Found): No scientist with the provided ID
#[utoipa::path(
    delete,
    path = "/scientists/{id}",
    tag = SCIENTIST_TAG,
    params(("id" = i32, Path, description = "ID of the scientist")),
    responses(
        (status = 200, description = "Scientist deleted", body = MessageDto),
        (status = 404, description = "Scientist not found", body = ErrorDto),
        (status = 422, description = "Request could not be processed", body = ErrorDto)
    ),
)]
pub async fn delete_scientist(
    State(state): State<AppState>,
    Path(scientist_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let scientist_service = ScientistService::new(&state.db);

    if !scientist_service.delete_scientist(scientist_id).await? {
        return Err(NotFoundError::Scientist(scientist_id).into());
    }

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "scientist deleted".to_string(),
        }),
    ))
}
