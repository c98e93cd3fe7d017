//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every API endpoint is registered here together with its OpenAPI specification, and
//! Swagger UI is served at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /api/auth/viewer` - Current viewer
/// - `GET /api/auth/logout` - Clear the session
/// - `GET /api/agents` - All agents
/// - `GET /api/arsenal` / `POST /api/arsenal` - List or add equipment
/// - `PATCH /api/arsenal/{id}` / `DELETE /api/arsenal/{id}` - Rename or delete equipment
/// - `GET /api/events/today` - Today's event board
/// - `POST /api/events` - Create an event
/// - `GET /api/events/{id}` / `PUT /api/events/{id}` - Read or update an event
/// - `POST /api/events/{id}/archive` - Archive an event
///
/// The OpenAPI specification is available at `/api/docs/openapi.json`.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Mission Control", description = "Mission Control API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Session API routes"),
        (name = controller::agent::AGENT_TAG, description = "Agent API routes"),
        (name = controller::arsenal::ARSENAL_TAG, description = "Equipment registry API routes"),
        (name = controller::event::EVENT_TAG, description = "Event board API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::get_viewer))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::agent::get_agents))
        .routes(routes!(
            controller::arsenal::get_arsenal,
            controller::arsenal::create_arsenal
        ))
        .routes(routes!(
            controller::arsenal::rename_arsenal,
            controller::arsenal::delete_arsenal
        ))
        .routes(routes!(controller::event::get_board))
        .routes(routes!(controller::event::create_event))
        .routes(routes!(
            controller::event::get_event,
            controller::event::update_event
        ))
        .routes(routes!(controller::event::archive_event))
        .split_for_parts();

    let routes = routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api));

    routes
}
