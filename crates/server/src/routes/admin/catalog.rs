use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use models::price_item::PriceOwner;
use service::catalog_service;
use service::dto::{PriceList, ServiceOut, SubsectionOut};

use crate::errors::JsonApiError;
use crate::routes::ServerState;

#[derive(Debug, Deserialize, Serialize)]
pub struct CreateServiceInput {
    pub name: String,
    pub description: Option<String>,
    pub title_image: Option<String>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct UpdateServiceInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub title_image: Option<String>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct CreateSubsectionInput {
    pub name: String,
    pub description: Option<String>,
    pub title_image: Option<String>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct UpdateSubsectionInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub title_image: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
pub struct CreatePriceItemInput {
    pub operation_name: String,
    #[schema(value_type = String)]
    pub price: Decimal,
    pub duration_minutes: Option<i32>,
    #[schema(value_type = Object)]
    pub owner: PriceOwner,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct UpdatePriceItemInput {
    pub operation_name: Option<String>,
    pub price: Option<Decimal>,
    /// Absent = leave unchanged, explicit `null` = clear back to no duration.
    #[serde(default, deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<Option<i32>>,
    pub owner: Option<PriceOwner>,
}

fn double_option<'de, D>(de: D) -> Result<Option<Option<i32>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<i32>::deserialize(de).map(Some)
}

/// Full catalog with derived price lists, same shape the landing page sees.
#[utoipa::path(get, path = "/admin/services", tag = "admin", responses((status = 200, description = "OK", body = Vec<ServiceOut>)))]
pub async fn list_services(
    State(state): State<ServerState>,
) -> Result<Json<Vec<ServiceOut>>, JsonApiError> {
    let services = catalog_service::list_services_with_prices(&state.db).await?;
    Ok(Json(services))
}

pub async fn create_service(
    State(state): State<ServerState>,
    Json(input): Json<CreateServiceInput>,
) -> Result<Json<models::service::Model>, JsonApiError> {
    let created = catalog_service::create_service(
        &state.db,
        &input.name,
        input.description.as_deref(),
        input.title_image.as_deref(),
    )
    .await?;
    info!(id = %created.id, name = %created.name, "created service");
    Ok(Json(created))
}

pub async fn get_service(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<models::service::Model>, StatusCode> {
    let found = catalog_service::get_service(&state.db, id)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
    found.map(Json).ok_or(StatusCode::NOT_FOUND)
}

pub async fn update_service(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(input): Json<UpdateServiceInput>,
) -> Result<Json<models::service::Model>, JsonApiError> {
    let updated = catalog_service::update_service(
        &state.db,
        id,
        input.name.as_deref(),
        input.description.as_deref(),
        input.title_image.as_deref(),
    )
    .await?;
    Ok(Json(updated))
}

pub async fn delete_service(State(state): State<ServerState>, Path(id): Path<Uuid>) -> StatusCode {
    match catalog_service::delete_service(&state.db, id).await {
        Ok(true) => StatusCode::NO_CONTENT,
        Ok(false) => StatusCode::NOT_FOUND,
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub async fn list_subsections(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<models::service_subsection::Model>>, JsonApiError> {
    let subs = catalog_service::list_subsections(&state.db, id).await?;
    Ok(Json(subs))
}

pub async fn create_subsection(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(input): Json<CreateSubsectionInput>,
) -> Result<Json<models::service_subsection::Model>, JsonApiError> {
    let created = catalog_service::create_subsection(
        &state.db,
        id,
        &input.name,
        input.description.as_deref(),
        input.title_image.as_deref(),
    )
    .await?;
    info!(id = %created.id, service_id = %id, name = %created.name, "created subsection");
    Ok(Json(created))
}

/// Derived price list of a service: flat when it has no subsections, grouped
/// by subsection name otherwise.
#[utoipa::path(
    get, path = "/admin/services/{id}/price-list", tag = "admin",
    params(("id" = Uuid, Path, description = "Service ID")),
    responses(
        (status = 200, description = "OK", body = PriceList),
        (status = 404, description = "Not Found")
    )
)]
pub async fn price_list(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PriceList>, JsonApiError> {
    let list = catalog_service::price_list_for_service(&state.db, id).await?;
    Ok(Json(list))
}

pub async fn update_subsection(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(input): Json<UpdateSubsectionInput>,
) -> Result<Json<models::service_subsection::Model>, JsonApiError> {
    let updated = catalog_service::update_subsection(
        &state.db,
        id,
        input.name.as_deref(),
        input.description.as_deref(),
        input.title_image.as_deref(),
    )
    .await?;
    Ok(Json(updated))
}

pub async fn delete_subsection(State(state): State<ServerState>, Path(id): Path<Uuid>) -> StatusCode {
    match catalog_service::delete_subsection(&state.db, id).await {
        Ok(true) => StatusCode::NO_CONTENT,
        Ok(false) => StatusCode::NOT_FOUND,
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Add a price item to a service or a subsection. Owner exclusivity and
/// name uniqueness are enforced at persistence time, so a violation comes
/// back as a 400 regardless of which route wrote the row.
#[utoipa::path(
    post, path = "/admin/price-items", tag = "admin",
    request_body = CreatePriceItemInput,
    responses(
        (status = 200, description = "Created"),
        (status = 400, description = "Validation Error")
    )
)]
pub async fn create_price_item(
    State(state): State<ServerState>,
    Json(input): Json<CreatePriceItemInput>,
) -> Result<Json<models::price_item::Model>, JsonApiError> {
    let created = catalog_service::create_price_item(
        &state.db,
        &input.operation_name,
        input.price,
        input.duration_minutes,
        input.owner,
    )
    .await?;
    info!(id = %created.id, operation_name = %created.operation_name, "created price item");
    Ok(Json(created))
}

pub async fn update_price_item(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(input): Json<UpdatePriceItemInput>,
) -> Result<Json<models::price_item::Model>, JsonApiError> {
    let updated = catalog_service::update_price_item(
        &state.db,
        id,
        input.operation_name.as_deref(),
        input.price,
        input.duration_minutes,
        input.owner,
    )
    .await?;
    Ok(Json(updated))
}

pub async fn delete_price_item(State(state): State<ServerState>, Path(id): Path<Uuid>) -> StatusCode {
    match catalog_service::delete_price_item(&state.db, id).await {
        Ok(true) => StatusCode::NO_CONTENT,
        Ok(false) => StatusCode::NOT_FOUND,
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_duration_means_unchanged() {
        let input: UpdatePriceItemInput = serde_json::from_str(r#"{"price": "100.00"}"#).unwrap();
        assert_eq!(input.duration_minutes, None);
    }

    #[test]
    fn null_duration_clears_the_field() {
        let input: UpdatePriceItemInput =
            serde_json::from_str(r#"{"duration_minutes": null}"#).unwrap();
        assert_eq!(input.duration_minutes, Some(None));
    }

    #[test]
    fn numeric_duration_sets_the_field() {
        let input: UpdatePriceItemInput =
            serde_json::from_str(r#"{"duration_minutes": 45}"#).unwrap();
        assert_eq!(input.duration_minutes, Some(Some(45)));
    }
}
