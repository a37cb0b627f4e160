use serde::{Deserialize, Serialize};

/// The response when an error occurs with an API request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorDto {
    /// The error messages, in the order they were encountered
    pub errors: Vec<String>,
}

/// The response for operations which have no record to return
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct MessageDto {
    pub message: String,
}
