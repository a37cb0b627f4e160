//! HTTP controller endpoints for the Voyager web API.
//!
//! Axum handlers for scientists, planets and missions. Controllers extract the request,
//! delegate to a service, and map the result to a status code & JSON body. Every handler is
//! annotated with `utoipa::path` so it appears in the generated OpenAPI document.

pub mod mission;
pub mod planet;
pub mod scientist;
