pub mod auth;
pub mod middleware;
pub mod rest;
pub mod state;

pub use middleware::require_session;
pub use rest::create_reading_handler;

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use auth::{login_handler, logout_handler, session_handler, signup_handler};
use state::AppState;

/// Builds the API routes. CORS and the Swagger UI are layered on by the binary.
pub fn api_router(app_state: Arc<AppState>) -> Router {
    // Public routes (no session required)
    let public_routes = Router::new()
        .route("/auth/signup", post(signup_handler))
        .route("/auth/login", post(login_handler))
        .route("/auth/logout", post(logout_handler));

    // Protected routes (session required)
    let protected_routes = Router::new()
        .route("/auth/session", get(session_handler))
        .route("/readings", post(create_reading_handler))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            require_session,
        ));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .with_state(app_state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::web::auth::AccountResponse;
    use crate::web::rest::ReadingResponse;
    use astrology_core::MemorySessionStore;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use axum::response::Response;
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn app() -> Router {
        let config = Config::from_lookup(|key| match key {
            "AUTH_LATENCY_MS" | "READING_LATENCY_MS" => Some("0".to_string()),
            "RNG_SEED" => Some("7".to_string()),
            _ => None,
        })
        .unwrap();
        let state = AppState::build(&config, Arc::new(MemorySessionStore::new()))
            .await
            .unwrap();
        api_router(Arc::new(state))
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> Response {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };
        app.clone().oneshot(builder.body(body).unwrap()).await.unwrap()
    }

    async fn read_json<T: serde::de::DeserializeOwned>(response: Response) -> T {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn reading_body() -> Value {
        json!({
            "name": "Aria",
            "birthDate": "1990-07-15",
            "birthTime": "06:30",
            "birthLocation": "Lisbon",
            "question": "What's next?"
        })
    }

    #[tokio::test]
    async fn signup_read_and_run_out() {
        let app = app().await;

        let response = send(
            &app,
            "POST",
            "/auth/signup",
            Some(json!({"email": "aria@example.com", "password": "pw", "name": "Aria"})),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let account: AccountResponse = read_json(response).await;
        assert_eq!(account.requests_remaining, 3);

        for expected in [2, 1, 0] {
            let response = send(&app, "POST", "/readings", Some(reading_body())).await;
            assert_eq!(response.status(), StatusCode::OK);
            let body: ReadingResponse = read_json(response).await;
            assert_eq!(body.reading.zodiac_sign, "Cancer");
            assert_eq!(body.reading.life_path_number, 5);
            assert_eq!(body.reading.cardinal_number, 5);
            assert_eq!(body.account.requests_remaining, expected);
        }

        let response = send(&app, "POST", "/readings", Some(reading_body())).await;
        assert_eq!(response.status(), StatusCode::PAYMENT_REQUIRED);
    }

    #[tokio::test]
    async fn duplicate_signup_conflicts() {
        let app = app().await;
        let response = send(
            &app,
            "POST",
            "/auth/signup",
            Some(json!({"email": "demo@example.com", "password": "x", "name": "Other"})),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn login_session_and_logout() {
        let app = app().await;

        let response = send(&app, "GET", "/auth/session", None).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let response = send(
            &app,
            "POST",
            "/auth/login",
            Some(json!({"email": "demo@example.com", "password": "wrong"})),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let response = send(
            &app,
            "POST",
            "/auth/login",
            Some(json!({"email": "demo@example.com", "password": "password123"})),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let response = send(&app, "GET", "/auth/session", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        let account: AccountResponse = read_json(response).await;
        assert_eq!(account.name, "Demo User");

        let response = send(&app, "POST", "/auth/logout", None).await;
        assert_eq!(response.status(), StatusCode::OK);

        let response = send(&app, "POST", "/readings", Some(reading_body())).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn bad_birth_date_is_rejected_without_using_a_reading() {
        let app = app().await;
        send(
            &app,
            "POST",
            "/auth/login",
            Some(json!({"email": "demo@example.com", "password": "password123"})),
        )
        .await;

        let mut body = reading_body();
        body["birthDate"] = json!("1990-13-45");
        let response = send(&app, "POST", "/readings", Some(body)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = send(&app, "GET", "/auth/session", None).await;
        let account: AccountResponse = read_json(response).await;
        assert_eq!(account.requests_remaining, 3);
    }
}
