use axum::{
    routing::{get, post, put},
    Router,
};
use sea_orm::DatabaseConnection;
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod admin;
pub mod pages;
pub mod reviews;

#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
}

/// Build the full application router: static frontend, public API, admin CRUD
/// and swagger.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let static_dir = ServeDir::new("frontend").fallback(ServeFile::new("frontend/index.html"));

    // Public routes
    let public = Router::new()
        .route("/health", get(pages::health))
        .route_service("/reviews", ServeFile::new("frontend/reviews.html"))
        .route("/reviews/create", post(reviews::create_review))
        .route("/api/context", get(pages::landing_context))
        .route("/api/flash", get(reviews::pop_flash));

    // Admin CRUD routes
    let admin_routes = Router::new()
        .route("/admin/masters", get(admin::masters::list).post(admin::masters::create))
        .route(
            "/admin/masters/:id",
            get(admin::masters::get).put(admin::masters::update).delete(admin::masters::delete),
        )
        .route(
            "/admin/masters/:id/socials",
            get(admin::masters::list_socials).post(admin::masters::create_social),
        )
        .route(
            "/admin/socials/:id",
            put(admin::masters::update_social).delete(admin::masters::delete_social),
        )
        .route("/admin/gallery", get(admin::gallery::list).post(admin::gallery::create))
        .route(
            "/admin/gallery/:id",
            put(admin::gallery::update).delete(admin::gallery::delete),
        )
        .route("/admin/address", get(admin::address::list).post(admin::address::create))
        .route(
            "/admin/address/:id",
            put(admin::address::update).delete(admin::address::delete),
        )
        .route("/admin/reviews", get(admin::reviews::list))
        .route("/admin/reviews/:id", axum::routing::delete(admin::reviews::delete))
        .route("/admin/reviews/:id/visibility", put(admin::reviews::set_visibility))
        .route("/admin/services", get(admin::catalog::list_services).post(admin::catalog::create_service))
        .route(
            "/admin/services/:id",
            get(admin::catalog::get_service)
                .put(admin::catalog::update_service)
                .delete(admin::catalog::delete_service),
        )
        .route(
            "/admin/services/:id/subsections",
            get(admin::catalog::list_subsections).post(admin::catalog::create_subsection),
        )
        .route("/admin/services/:id/price-list", get(admin::catalog::price_list))
        .route(
            "/admin/subsections/:id",
            put(admin::catalog::update_subsection).delete(admin::catalog::delete_subsection),
        )
        .route("/admin/price-items", post(admin::catalog::create_price_item))
        .route(
            "/admin/price-items/:id",
            put(admin::catalog::update_price_item).delete(admin::catalog::delete_price_item),
        );

    // Compose
    public
        .merge(admin_routes)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", crate::openapi::ApiDoc::openapi()))
        .fallback_service(static_dir)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
