use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use service::dto::MasterOut;
use service::master_service;

use crate::errors::JsonApiError;
use crate::routes::ServerState;

#[derive(Debug, Deserialize, Serialize)]
pub struct CreateMasterInput {
    pub name: String,
    #[serde(default)]
    pub photo: String,
    #[serde(default)]
    pub specialty: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct UpdateMasterInput {
    pub name: Option<String>,
    pub photo: Option<String>,
    pub specialty: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct CreateSocialInput {
    pub href: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub sort_order: i32,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct UpdateSocialInput {
    pub href: Option<String>,
    pub icon: Option<String>,
    pub color: Option<String>,
    pub sort_order: Option<i32>,
}

pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<MasterOut>>, JsonApiError> {
    let masters = master_service::list_masters_with_socials(&state.db).await?;
    Ok(Json(masters))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<CreateMasterInput>,
) -> Result<Json<models::master::Model>, JsonApiError> {
    let created = master_service::create_master(
        &state.db,
        &input.name,
        &input.photo,
        &input.specialty,
        &input.description,
    )
    .await?;
    info!(id = %created.id, name = %created.name, "created master");
    Ok(Json(created))
}

pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MasterOut>, StatusCode> {
    let Some(master) = master_service::get_master(&state.db, id)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
    else {
        return Err(StatusCode::NOT_FOUND);
    };
    let socials = master_service::list_socials(&state.db, id)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
    Ok(Json(MasterOut::from_parts(master, socials)))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(input): Json<UpdateMasterInput>,
) -> Result<Json<models::master::Model>, JsonApiError> {
    let updated = master_service::update_master(
        &state.db,
        id,
        input.name.as_deref(),
        input.photo.as_deref(),
        input.specialty.as_deref(),
        input.description.as_deref(),
    )
    .await?;
    info!(id = %updated.id, "updated master");
    Ok(Json(updated))
}

pub async fn delete(State(state): State<ServerState>, Path(id): Path<Uuid>) -> StatusCode {
    match master_service::delete_master(&state.db, id).await {
        Ok(true) => StatusCode::NO_CONTENT,
        Ok(false) => StatusCode::NOT_FOUND,
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub async fn list_socials(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<models::social::Model>>, JsonApiError> {
    let links = master_service::list_socials(&state.db, id).await?;
    Ok(Json(links))
}

pub async fn create_social(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(input): Json<CreateSocialInput>,
) -> Result<Json<models::social::Model>, JsonApiError> {
    let created = master_service::create_social(
        &state.db,
        id,
        &input.href,
        &input.icon,
        &input.color,
        input.sort_order,
    )
    .await?;
    info!(id = %created.id, master_id = %id, "created social link");
    Ok(Json(created))
}

pub async fn update_social(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(input): Json<UpdateSocialInput>,
) -> Result<Json<models::social::Model>, JsonApiError> {
    let updated = master_service::update_social(
        &state.db,
        id,
        input.href.as_deref(),
        input.icon.as_deref(),
        input.color.as_deref(),
        input.sort_order,
    )
    .await?;
    Ok(Json(updated))
}

pub async fn delete_social(State(state): State<ServerState>, Path(id): Path<Uuid>) -> StatusCode {
    match master_service::delete_social(&state.db, id).await {
        Ok(true) => StatusCode::NO_CONTENT,
        Ok(false) => StatusCode::NOT_FOUND,
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
