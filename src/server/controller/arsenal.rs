use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        arsenal::{ArsenalItemDto, ArsenalKind, CreateArsenalDto, RenameArsenalDto},
    },
    server::{
        controller::util::get_viewer::get_viewer_from_session,
        error::{arsenal::ArsenalError, Error},
        model::app::AppState,
        service::arsenal::ArsenalService,
    },
};

pub static ARSENAL_TAG: &str = "arsenal";

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ArsenalQuery {
    /// Equipment category: `camera`, `laptop` or `printer`
    #[serde(rename = "type")]
    pub kind: String,
}

/// List the equipment of one category
#[utoipa::path(
    get,
    path = "/api/arsenal",
    tag = ARSENAL_TAG,
    params(ArsenalQuery),
    responses(
        (status = 200, description = "Success when listing equipment", body = Vec<ArsenalItemDto>),
        (status = 400, description = "Unknown equipment type", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_arsenal(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<ArsenalQuery>,
) -> Result<impl IntoResponse, Error> {
    get_viewer_from_session(&state, &session).await?;

    let kind = query
        .kind
        .parse::<ArsenalKind>()
        .map_err(|_| ArsenalError::UnknownKind(query.kind.clone()))?;

    let items = ArsenalService::new(&state.db).fetch(kind).await?;

    Ok((StatusCode::OK, Json(items)))
}

/// Add equipment to the registry
#[utoipa::path(
    post,
    path = "/api/arsenal",
    tag = ARSENAL_TAG,
    request_body = CreateArsenalDto,
    responses(
        (status = 201, description = "Equipment created", body = ArsenalItemDto),
        (status = 400, description = "Empty equipment name", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_arsenal(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateArsenalDto>,
) -> Result<impl IntoResponse, Error> {
    get_viewer_from_session(&state, &session).await?;

    let item = ArsenalService::new(&state.db)
        .create(&payload.name, payload.kind)
        .await?;

    Ok((StatusCode::CREATED, Json(item)))
}

/// Rename a piece of equipment
#[utoipa::path(
    patch,
    path = "/api/arsenal/{id}",
    tag = ARSENAL_TAG,
    params(("id" = i32, Path, description = "Equipment ID")),
    request_body = RenameArsenalDto,
    responses(
        (status = 200, description = "Equipment renamed", body = ArsenalItemDto),
        (status = 400, description = "Empty equipment name", body = ErrorDto),
        (status = 404, description = "User or equipment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn rename_arsenal(
    State(state): State<AppState>,
    session: Session,
    Path(item_id): Path<i32>,
    Json(payload): Json<RenameArsenalDto>,
) -> Result<impl IntoResponse, Error> {
    get_viewer_from_session(&state, &session).await?;

    let item = ArsenalService::new(&state.db)
        .rename(item_id, &payload.name)
        .await?;

    Ok((StatusCode::OK, Json(item)))
}

/// Delete a piece of equipment
///
/// Events listing the equipment keep the reference and show it as unknown.
#[utoipa::path(
    delete,
    path = "/api/arsenal/{id}",
    tag = ARSENAL_TAG,
    params(("id" = i32, Path, description = "Equipment ID")),
    responses(
        (status = 204, description = "Equipment deleted"),
        (status = 404, description = "User or equipment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_arsenal(
    State(state): State<AppState>,
    session: Session,
    Path(item_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    get_viewer_from_session(&state, &session).await?;

    ArsenalService::new(&state.db).delete(item_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
