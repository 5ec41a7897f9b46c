use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use service::gallery_service;

use crate::errors::JsonApiError;
use crate::routes::ServerState;

#[derive(Debug, Deserialize, Serialize)]
pub struct CreateGalleryImageInput {
    pub title: String,
    pub image: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct UpdateGalleryImageInput {
    pub title: Option<String>,
    pub image: Option<String>,
}

pub async fn list(
    State(state): State<ServerState>,
) -> Result<Json<Vec<models::gallery_image::Model>>, JsonApiError> {
    let images = gallery_service::list_images(&state.db).await?;
    Ok(Json(images))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<CreateGalleryImageInput>,
) -> Result<Json<models::gallery_image::Model>, JsonApiError> {
    let created = gallery_service::create_image(&state.db, &input.title, &input.image).await?;
    info!(id = %created.id, title = %created.title, "created gallery image");
    Ok(Json(created))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(input): Json<UpdateGalleryImageInput>,
) -> Result<Json<models::gallery_image::Model>, JsonApiError> {
    let updated =
        gallery_service::update_image(&state.db, id, input.title.as_deref(), input.image.as_deref())
            .await?;
    Ok(Json(updated))
}

pub async fn delete(State(state): State<ServerState>, Path(id): Path<Uuid>) -> StatusCode {
    match gallery_service::delete_image(&state.db, id).await {
        Ok(true) => StatusCode::NO_CONTENT,
        Ok(false) => StatusCode::NOT_FOUND,
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
