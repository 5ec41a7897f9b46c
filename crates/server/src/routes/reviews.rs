//! Public review submission with dual response mode.
//!
//! AJAX callers (the `X-Requested-With: XMLHttpRequest` marker) get JSON;
//! browser form posts get a redirect back to the reviews page plus a
//! one-time flash cookie that `/api/flash` pops on next render.

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Redirect, Response};
use axum::{Form, Json};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::error;

use service::review_service::{self, INVALID_SUBMISSION_MSG};

use crate::routes::ServerState;

pub const FLASH_COOKIE: &str = "flash";
const SUCCESS_MSG: &str = "Thanks! Review submitted.";

#[derive(Debug, Deserialize)]
pub struct ReviewForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub review: String,
    #[serde(default)]
    pub rating: Option<String>,
}

fn is_ajax(headers: &HeaderMap) -> bool {
    headers
        .get("x-requested-with")
        .and_then(|v| v.to_str().ok())
        .map(|v| v.eq_ignore_ascii_case("XMLHttpRequest"))
        .unwrap_or(false)
}

fn flash(jar: CookieJar, level: &str, message: &str) -> CookieJar {
    let mut cookie = Cookie::new(FLASH_COOKIE, format!("{level}:{message}"));
    cookie.set_path("/");
    jar.add(cookie)
}

#[utoipa::path(
    post, path = "/reviews/create", tag = "reviews",
    request_body = crate::openapi::ReviewFormDoc,
    responses(
        (status = 200, description = "Created (AJAX mode)"),
        (status = 303, description = "Redirect back to the reviews page (browser mode)"),
        (status = 400, description = "Invalid submission (AJAX mode)")
    )
)]
pub async fn create_review(
    State(state): State<ServerState>,
    headers: HeaderMap,
    jar: CookieJar,
    Form(form): Form<ReviewForm>,
) -> Response {
    let ajax = is_ajax(&headers);
    match review_service::submit(&state.db, &form.name, &form.email, &form.review, form.rating.as_deref()).await
    {
        Ok(rev) => {
            if ajax {
                Json(json!({
                    "success": true,
                    "review": {
                        "id": rev.id,
                        "name": rev.name,
                        "review": rev.review,
                        "rating": rev.rating,
                        "created_at": rev.created_at,
                    }
                }))
                .into_response()
            } else {
                let jar = flash(jar, "success", SUCCESS_MSG);
                (jar, Redirect::to("/reviews")).into_response()
            }
        }
        Err(e) if e.is_validation() => {
            if ajax {
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({"success": false, "error": INVALID_SUBMISSION_MSG})),
                )
                    .into_response()
            } else {
                let jar = flash(jar, "error", INVALID_SUBMISSION_MSG);
                (jar, Redirect::to("/reviews")).into_response()
            }
        }
        Err(e) => {
            error!(err = %e, "review submission failed");
            if ajax {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({"success": false, "error": "Internal error"})),
                )
                    .into_response()
            } else {
                let jar = flash(jar, "error", "Internal error");
                (jar, Redirect::to("/reviews")).into_response()
            }
        }
    }
}

/// One-time notice for the browser flow: return and clear the flash cookie.
pub async fn pop_flash(jar: CookieJar) -> (CookieJar, Json<Value>) {
    let stored = jar.get(FLASH_COOKIE).map(|c| c.value().to_string());
    match stored {
        Some(v) => {
            let (level, message) = v.split_once(':').unwrap_or(("info", v.as_str()));
            let payload = json!({"level": level, "message": message});
            let mut cookie = Cookie::from(FLASH_COOKIE);
            cookie.set_path("/");
            (jar.remove(cookie), Json(payload))
        }
        None => (jar, Json(Value::Null)),
    }
}
