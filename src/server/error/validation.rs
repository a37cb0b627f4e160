use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, SqlErr};

use crate::{
    model::{api::ErrorDto, scientist::UpdateScientistDto},
    server::error::Error,
};

/// Request validation failures, reported to the client as 422 with the error's message.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ValidationError {
    /// The body could not be deserialized: malformed JSON, missing or unknown fields,
    /// or a missing `Content-Type: application/json` header.
    #[error("{0}")]
    InvalidBody(String),
    #[error("name must not be empty")]
    BlankName,
    #[error("{0} must not be null")]
    NullField(&'static str),
    #[error("name must be unique")]
    DuplicateName,
    #[error("scientist can only go on a mission once")]
    ScientistAlreadyOnMission,
    #[error("scientist_id and planet_id must reference an existing scientist and planet")]
    UnknownScientistOrPlanet,
}

impl ValidationError {
    /// Rejects names which are empty or only whitespace
    pub fn check_name(name: &str) -> Result<(), ValidationError> {
        if name.trim().is_empty() {
            return Err(Self::BlankName);
        }

        Ok(())
    }

    /// Rejects fields sent as `null` & blank names in a partial scientist update
    pub fn check_update(changes: &UpdateScientistDto) -> Result<(), ValidationError> {
        let fields = [
            ("name", &changes.name),
            ("field_of_study", &changes.field_of_study),
            ("avatar", &changes.avatar),
        ];
        for (field, value) in fields {
            if matches!(value, Some(None)) {
                return Err(Self::NullField(field));
            }
        }

        if let Some(Some(name)) = &changes.name {
            Self::check_name(name)?;
        }

        Ok(())
    }
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        tracing::debug!("Validation error: {}", self);

        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorDto {
                errors: vec![self.to_string()],
            }),
        )
            .into_response()
    }
}

/// Maps a unique name constraint violation to [`ValidationError::DuplicateName`]
///
/// Any other database error is passed through unchanged.
pub fn map_unique_name(err: DbErr) -> Error {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => ValidationError::DuplicateName.into(),
        _ => Error::DbErr(err),
    }
}

/// Maps constraint violations raised when inserting a mission to the matching
/// [`ValidationError`]
///
/// The unique index on `missions.scientist_id` is told apart from the unique name by the
/// column named in the violation message. Any other database error is passed through unchanged.
pub fn map_mission_constraint(err: DbErr) -> Error {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(message)) if message.contains("scientist_id") => {
            ValidationError::ScientistAlreadyOnMission.into()
        }
        Some(SqlErr::UniqueConstraintViolation(_)) => ValidationError::DuplicateName.into(),
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
            ValidationError::UnknownScientistOrPlanet.into()
        }
        _ => Error::DbErr(err),
    }
}
