use axum::{extract::State, Json};

use common::types::Health;
use service::context;
use service::dto::PageContext;

use crate::errors::JsonApiError;
use crate::routes::ServerState;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK")))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Everything the landing page needs in one read: masters, gallery, public
/// reviews, the catalog with derived price lists, and the contact record.
#[utoipa::path(
    get, path = "/api/context", tag = "pages",
    responses(
        (status = 200, description = "Landing page context", body = PageContext),
        (status = 500, description = "Aggregation Failed")
    )
)]
pub async fn landing_context(State(state): State<ServerState>) -> Result<Json<PageContext>, JsonApiError> {
    let ctx = context::get_common_context(&state.db).await?;
    Ok(Json(ctx))
}
