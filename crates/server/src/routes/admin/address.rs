use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use service::address_service;

use crate::errors::JsonApiError;
use crate::routes::ServerState;

#[derive(Debug, Deserialize, Serialize)]
pub struct CreateAddressInput {
    pub name: String,
    pub address: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub opening_hours: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct UpdateAddressInput {
    pub name: Option<String>,
    pub address: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub opening_hours: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

pub async fn list(
    State(state): State<ServerState>,
) -> Result<Json<Vec<models::address::Model>>, JsonApiError> {
    let rows = address_service::list_addresses(&state.db).await?;
    Ok(Json(rows))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<CreateAddressInput>,
) -> Result<Json<models::address::Model>, JsonApiError> {
    let created = address_service::create_address(
        &state.db,
        &input.name,
        &input.address,
        &input.email,
        &input.phone,
        &input.opening_hours,
        input.latitude,
        input.longitude,
    )
    .await?;
    info!(id = %created.id, name = %created.name, "created address");
    Ok(Json(created))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(input): Json<UpdateAddressInput>,
) -> Result<Json<models::address::Model>, JsonApiError> {
    let updated = address_service::update_address(
        &state.db,
        id,
        input.name.as_deref(),
        input.address.as_deref(),
        input.email.as_deref(),
        input.phone.as_deref(),
        input.opening_hours.as_deref(),
        input.latitude,
        input.longitude,
    )
    .await?;
    Ok(Json(updated))
}

pub async fn delete(State(state): State<ServerState>, Path(id): Path<Uuid>) -> StatusCode {
    match address_service::delete_address(&state.db, id).await {
        Ok(true) => StatusCode::NO_CONTENT,
        Ok(false) => StatusCode::NOT_FOUND,
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
