use std::net::SocketAddr;

use axum::Router;
use migration::MigratorTrait;
use reqwest::StatusCode as HttpStatusCode;
use rust_decimal::Decimal;
use serde_json::json;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use uuid::Uuid;

use server::routes::{self, ServerState};

fn cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

struct TestApp {
    base_url: String,
}

async fn start_server() -> anyhow::Result<TestApp> {
    // Ensure models prefer env over config file
    std::env::set_var("CONFIG_PATH", "/nonexistent-config-for-tests.toml");

    // Use DATABASE_URL from environment; if not present, skip tests gracefully
    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("DATABASE_URL missing; skip e2e tests. Provide .env.test or env var.");
        return Err(anyhow::anyhow!("missing DATABASE_URL"));
    }

    let db = models::db::connect().await?;
    if let Err(e) = migration::Migrator::up(&db, None).await {
        eprintln!("migrations notice: {}", e);
    }

    let state = ServerState { db };
    let app: Router = routes::build_router(state, cors());
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("server error: {}", e);
        }
    });

    Ok(TestApp { base_url })
}

fn client() -> reqwest::Client {
    reqwest::Client::builder().cookie_store(true).build().expect("reqwest client")
}

/// Browser-mode assertions need the redirect itself, not its target.
fn no_redirect_client() -> reqwest::Client {
    reqwest::Client::builder()
        .cookie_store(true)
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .expect("reqwest client")
}

#[tokio::test]
async fn e2e_public_health() -> anyhow::Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }
    let app = match start_server().await {
        Ok(a) => a,
        Err(_) => return Ok(()),
    };
    let res = client().get(format!("{}/health", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn e2e_review_ajax_submission_returns_json() -> anyhow::Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }
    let app = match start_server().await {
        Ok(a) => a,
        Err(_) => return Ok(()),
    };
    let c = client();

    let res = c
        .post(format!("{}/reviews/create", app.base_url))
        .header("X-Requested-With", "XMLHttpRequest")
        .form(&[
            ("name", "Anna"),
            ("email", ""),
            ("review", "Lovely salon, will come back"),
            ("rating", "5"),
        ])
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["success"], true);
    assert_eq!(body["review"]["name"], "Anna");
    assert_eq!(body["review"]["rating"], 5);
    Ok(())
}

#[tokio::test]
async fn e2e_review_ajax_invalid_submission_is_400() -> anyhow::Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }
    let app = match start_server().await {
        Ok(a) => a,
        Err(_) => return Ok(()),
    };
    let c = client();

    // Missing name and out-of-range rating
    let res = c
        .post(format!("{}/reviews/create", app.base_url))
        .header("X-Requested-With", "XMLHttpRequest")
        .form(&[("name", ""), ("review", "text"), ("rating", "9")])
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["success"], false);
    Ok(())
}

#[tokio::test]
async fn e2e_review_browser_submission_redirects_with_flash() -> anyhow::Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }
    let app = match start_server().await {
        Ok(a) => a,
        Err(_) => return Ok(()),
    };
    let c = no_redirect_client();

    let res = c
        .post(format!("{}/reviews/create", app.base_url))
        .form(&[
            ("name", "Olga"),
            ("review", "Great haircut"),
            ("rating", "4"),
        ])
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::SEE_OTHER);
    assert_eq!(res.headers().get("location").and_then(|v| v.to_str().ok()), Some("/reviews"));

    // The flash cookie is one-shot: present once, gone after.
    let res = c.get(format!("{}/api/flash", app.base_url)).send().await?;
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["level"], "success");

    let res = c.get(format!("{}/api/flash", app.base_url)).send().await?;
    let body = res.json::<serde_json::Value>().await?;
    assert!(body.is_null());
    Ok(())
}

#[tokio::test]
async fn e2e_new_reviews_are_hidden_until_moderated() -> anyhow::Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }
    let app = match start_server().await {
        Ok(a) => a,
        Err(_) => return Ok(()),
    };
    let c = client();

    let marker = format!("moderation-probe-{}", Uuid::new_v4());
    let res = c
        .post(format!("{}/reviews/create", app.base_url))
        .header("X-Requested-With", "XMLHttpRequest")
        .form(&[("name", "Probe"), ("review", marker.as_str()), ("rating", "3")])
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let created = res.json::<serde_json::Value>().await?;
    let id = created["review"]["id"].as_str().unwrap().to_string();

    // Not in the public context yet
    let ctx = c
        .get(format!("{}/api/context", app.base_url))
        .send()
        .await?
        .json::<serde_json::Value>()
        .await?;
    let visible = ctx["reviews"].as_array().unwrap();
    assert!(visible.iter().all(|r| r["review"] != marker.as_str()));

    // Approve it, then it shows up
    let res = c
        .put(format!("{}/admin/reviews/{}/visibility", app.base_url, id))
        .json(&json!({"is_public": true}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);

    let ctx = c
        .get(format!("{}/api/context", app.base_url))
        .send()
        .await?
        .json::<serde_json::Value>()
        .await?;
    let visible = ctx["reviews"].as_array().unwrap();
    assert!(visible.iter().any(|r| r["review"] == marker.as_str()));
    Ok(())
}

#[tokio::test]
async fn e2e_context_has_all_sections() -> anyhow::Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }
    let app = match start_server().await {
        Ok(a) => a,
        Err(_) => return Ok(()),
    };
    let res = client().get(format!("{}/api/context", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    for key in ["masters", "images", "reviews", "services"] {
        assert!(body[key].is_array(), "missing context key {key}");
    }
    assert!(body.as_object().unwrap().contains_key("address"));
    Ok(())
}

#[tokio::test]
async fn e2e_catalog_round_trip_and_duplicate_rejection() -> anyhow::Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }
    let app = match start_server().await {
        Ok(a) => a,
        Err(_) => return Ok(()),
    };
    let c = client();

    let name = format!("Service {}", Uuid::new_v4());
    let res = c
        .post(format!("{}/admin/services", app.base_url))
        .json(&json!({"name": name}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let svc = res.json::<serde_json::Value>().await?;
    let svc_id = svc["id"].as_str().unwrap().to_string();

    // Flat price list while the service has no subsections
    let res = c
        .post(format!("{}/admin/price-items", app.base_url))
        .json(&json!({
            "operation_name": "Manicure",
            "price": Decimal::new(150000, 2),
            "duration_minutes": 45,
            "owner": {"service": svc_id}
        }))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);

    // Same name in the same scope, different case: rejected
    let res = c
        .post(format!("{}/admin/price-items", app.base_url))
        .json(&json!({
            "operation_name": "MANICURE",
            "price": Decimal::new(200000, 2),
            "owner": {"service": svc_id}
        }))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);

    let res = c
        .get(format!("{}/admin/services/{}/price-list", app.base_url, svc_id))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let list = res.json::<serde_json::Value>().await?;
    let flat = list.as_array().expect("flat list for service without subsections");
    assert_eq!(flat.len(), 1);
    assert_eq!(flat[0]["operation_name"], "Manicure");

    // Adding a subsection flips the list to grouped form
    let res = c
        .post(format!("{}/admin/services/{}/subsections", app.base_url, svc_id))
        .json(&json!({"name": "Spa"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let sub = res.json::<serde_json::Value>().await?;
    let sub_id = sub["id"].as_str().unwrap().to_string();

    let res = c
        .post(format!("{}/admin/price-items", app.base_url))
        .json(&json!({
            "operation_name": "Hot stones",
            "price": Decimal::new(300000, 2),
            "owner": {"subsection": sub_id}
        }))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);

    let list = c
        .get(format!("{}/admin/services/{}/price-list", app.base_url, svc_id))
        .send()
        .await?
        .json::<serde_json::Value>()
        .await?;
    let groups = list.as_object().expect("grouped list once subsections exist");
    assert!(groups.contains_key("Spa"));

    // Cascade cleanup
    let res = c.delete(format!("{}/admin/services/{}", app.base_url, svc_id)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NO_CONTENT);
    Ok(())
}
