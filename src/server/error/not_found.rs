use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum NotFoundError {
    #[error("Scientist ID {0} not found in database")]
    Scientist(i32),
}

impl IntoResponse for NotFoundError {
    fn into_response(self) -> Response {
        let message = match self {
            Self::Scientist(scientist_id) => {
                tracing::debug!(scientist_id = %scientist_id, "{}", self);

                "scientist not found"
            }
        };

        (
            StatusCode::NOT_FOUND,
            Json(ErrorDto {
                errors: vec![message.to_string()],
            }),
        )
            .into_response()
    }
}
