use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use service::review_service;

use crate::errors::JsonApiError;
use crate::routes::ServerState;

#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
pub struct SetVisibilityInput {
    pub is_public: bool,
}

/// Moderation view: every review including hidden ones, newest first.
#[utoipa::path(get, path = "/admin/reviews", tag = "admin", responses((status = 200, description = "OK")))]
pub async fn list(
    State(state): State<ServerState>,
) -> Result<Json<Vec<models::review::Model>>, JsonApiError> {
    let rows = review_service::list_all(&state.db).await?;
    Ok(Json(rows))
}

/// The moderation gate: flip `is_public` on a review.
#[utoipa::path(
    put, path = "/admin/reviews/{id}/visibility", tag = "admin",
    params(("id" = Uuid, Path, description = "Review ID")),
    request_body = SetVisibilityInput,
    responses(
        (status = 200, description = "Updated"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn set_visibility(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(input): Json<SetVisibilityInput>,
) -> Result<Json<models::review::Model>, JsonApiError> {
    let updated = review_service::set_visibility(&state.db, id, input.is_public).await?;
    info!(id = %updated.id, is_public = updated.is_public, "moderated review");
    Ok(Json(updated))
}

pub async fn delete(State(state): State<ServerState>, Path(id): Path<Uuid>) -> StatusCode {
    match review_service::delete(&state.db, id).await {
        Ok(true) => StatusCode::NO_CONTENT,
        Ok(false) => StatusCode::NOT_FOUND,
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
