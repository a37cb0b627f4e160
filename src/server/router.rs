//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// Handlers sharing a path are registered together so utoipa documents them as one path item.
///
/// # Registered Endpoints
/// - `GET /scientists` - List scientists
/// - `POST /scientists` - Create a scientist
/// - `GET /scientists/{id}` - Get a scientist with their missions
/// - `PATCH /scientists/{id}` - Update a scientist
/// - `DELETE /scientists/{id}` - Delete a scientist & their missions
/// - `GET /planets` - List planets
/// - `POST /missions` - Create a mission
///
/// The OpenAPI specification is available at `/api/docs/openapi.json`, Swagger UI at `/api/docs`.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState::from(db));
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Voyager", description = "Voyager API"), tags(
        (name = controller::scientist::SCIENTIST_TAG, description = "Scientist API routes"),
        (name = controller::planet::PLANET_TAG, description = "Planet API routes"),
        (name = controller::mission::MISSION_TAG, description = "Mission API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            controller::scientist::get_scientists,
            controller::scientist::create_scientist
        ))
        .routes(routes!(
            controller::scientist::get_scientist,
            controller::scientist::update_scientist,
            controller::scientist::delete_scientist
        ))
        .routes(routes!(controller::planet::get_planets))
        .routes(routes!(controller::mission::create_mission))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
