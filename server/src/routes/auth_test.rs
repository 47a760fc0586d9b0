use axum::Router;
use axum::body::Body;
use axum::http::{Request, header};
use tower::ServiceExt;

use super::*;
use crate::config::ServerConfig;

// =============================================================================
// helpers under test
// =============================================================================

#[test]
fn client_ip_takes_first_forwarded_address() {
    let mut headers = HeaderMap::new();
    headers.insert("x-forwarded-for", "203.0.113.7, 10.0.0.1".parse().unwrap());
    assert_eq!(client_ip(&headers).as_deref(), Some("203.0.113.7"));
}

#[test]
fn client_ip_absent_without_header() {
    assert_eq!(client_ip(&HeaderMap::new()), None);
    let mut headers = HeaderMap::new();
    headers.insert("x-forwarded-for", " ".parse().unwrap());
    assert_eq!(client_ip(&headers), None);
}

#[test]
fn user_errors_map_to_statuses() {
    assert_eq!(user_error_to_status(&UserError::UsernameTaken), StatusCode::CONFLICT);
    assert_eq!(user_error_to_status(&UserError::Invalid("x")), StatusCode::BAD_REQUEST);
    assert_eq!(user_error_to_status(&UserError::NotFound), StatusCode::NOT_FOUND);
    assert_eq!(
        user_error_to_status(&UserError::Hash("boom".to_owned())),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

// =============================================================================
// router-level flows
// =============================================================================

fn app() -> (AppState, Router) {
    let state = AppState::new(ServerConfig::default());
    (state.clone(), crate::routes::api_routes(state))
}

fn json_post(uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn with_cookie(mut req: Request<Body>, cookie: &str) -> Request<Body> {
    req.headers_mut().insert(header::COOKIE, cookie.parse().unwrap());
    req
}

/// `session_token=<value>` from the response's `Set-Cookie`.
fn session_cookie_of(resp: &Response) -> String {
    resp.headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find(|v| v.starts_with("session_token="))
        .and_then(|v| v.split(';').next())
        .unwrap()
        .to_owned()
}

async fn body_json(resp: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn registration(username: &str) -> serde_json::Value {
    serde_json::json!({
        "username": username,
        "password": "hunter22",
        "email": format!("{username}@example.com"),
        "name": "Sam Lee",
    })
}

#[tokio::test]
async fn current_user_without_cookie_is_unauthorized() {
    let (_, app) = app();
    let resp = app
        .oneshot(Request::get("/api/user").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn current_user_with_unknown_token_is_unauthorized() {
    let (_, app) = app();
    let req = with_cookie(Request::get("/api/user").body(Body::empty()).unwrap(), "session_token=deadbeef");
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn register_creates_standard_user_and_session() {
    let (state, app) = app();
    let mut body = registration("sam");
    body["role"] = serde_json::json!("admin");
    let resp = app.clone().oneshot(json_post("/api/register", &body)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let cookie = session_cookie_of(&resp);
    let set_cookie = resp.headers().get(header::SET_COOKIE).unwrap().to_str().unwrap().to_owned();
    assert!(set_cookie.contains("HttpOnly"), "{set_cookie}");
    assert!(set_cookie.contains("SameSite=Lax"), "{set_cookie}");

    let user = body_json(resp).await;
    assert_eq!(user["username"], "sam");
    assert_eq!(user["role"], "user");
    assert!(user.get("password").is_none());
    assert!(user.get("password_hash").is_none());

    let req = with_cookie(Request::get("/api/user").body(Body::empty()).unwrap(), &cookie);
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["username"], "sam");

    let actions: Vec<_> = state.security_log.list().await.into_iter().map(|e| e.action).collect();
    assert_eq!(actions, ["register"]);
}

#[tokio::test]
async fn register_duplicate_username_conflicts() {
    let (_, app) = app();
    let first = app.clone().oneshot(json_post("/api/register", &registration("sam"))).await.unwrap();
    assert_eq!(first.status(), StatusCode::CREATED);
    let second = app.oneshot(json_post("/api/register", &registration("sam"))).await.unwrap();
    assert_eq!(second.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn register_invalid_body_is_bad_request() {
    let (_, app) = app();
    let missing_fields = app
        .clone()
        .oneshot(json_post("/api/register", &serde_json::json!({ "username": "sam" })))
        .await
        .unwrap();
    assert_eq!(missing_fields.status(), StatusCode::BAD_REQUEST);

    let mut short_password = registration("sam");
    short_password["password"] = serde_json::json!("123");
    let resp = app.oneshot(json_post("/api/register", &short_password)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn login_with_wrong_password_is_unauthorized_and_logged() {
    let (state, app) = app();
    app.clone().oneshot(json_post("/api/register", &registration("sam"))).await.unwrap();

    let mut req = json_post("/api/login", &serde_json::json!({ "username": "sam", "password": "nope" }));
    req.headers_mut().insert("x-forwarded-for", "198.51.100.4".parse().unwrap());
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert!(resp.headers().get(header::SET_COOKIE).is_none());

    let latest = state.security_log.list().await.remove(0);
    assert_eq!(latest.action, "login_failed");
    assert_eq!(latest.user_id, None);
    assert_eq!(latest.details.as_deref(), Some("username=sam"));
    assert_eq!(latest.ip_address.as_deref(), Some("198.51.100.4"));
}

#[tokio::test]
async fn login_success_sets_cookie_and_returns_user() {
    let (state, app) = app();
    app.clone().oneshot(json_post("/api/register", &registration("sam"))).await.unwrap();

    let creds = serde_json::json!({ "username": "sam", "password": "hunter22" });
    let resp = app.oneshot(json_post("/api/login", &creds)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let cookie = session_cookie_of(&resp);
    assert!(cookie.len() > "session_token=".len());
    assert_eq!(body_json(resp).await["name"], "Sam Lee");
    assert_eq!(state.security_log.list().await[0].action, "login");
}

#[tokio::test]
async fn logout_revokes_session_and_clears_cookie() {
    let (state, app) = app();
    let resp = app.clone().oneshot(json_post("/api/register", &registration("sam"))).await.unwrap();
    let cookie = session_cookie_of(&resp);

    let req = with_cookie(Request::post("/api/logout").body(Body::empty()).unwrap(), &cookie);
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert_eq!(session_cookie_of(&resp), "session_token=");

    let req = with_cookie(Request::get("/api/user").body(Body::empty()).unwrap(), &cookie);
    assert_eq!(app.oneshot(req).await.unwrap().status(), StatusCode::UNAUTHORIZED);
    assert_eq!(state.security_log.list().await[0].action, "logout");
}

#[tokio::test]
async fn logout_without_session_is_still_no_content() {
    let (state, app) = app();
    let resp = app
        .oneshot(Request::post("/api/logout").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(state.security_log.list().await.is_empty());
}
