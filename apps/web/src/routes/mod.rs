pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::collage::handlers as collage;
use crate::errors::AppError;
use crate::form::handlers as form;
use crate::pages::index;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/", get(index::handle_index))
        // Form events
        .route("/api/v1/form/edit", post(form::handle_edit))
        // Submission
        .route("/submit", get(collage::handle_submit))
        .route("/embed", get(collage::handle_embed))
        .fallback(not_found)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::Config;

    fn app() -> Router {
        let config = Config::from_lookup(|key| match key {
            "PUBLIC_URL" => Some("https://collage.example".to_string()),
            _ => None,
        })
        .unwrap();
        build_router(AppState::new(config))
    }

    async fn send(request: Request<Body>) -> Response {
        app().oneshot(request).await.unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = send(get("/health")).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let response = send(get("/nope")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(json_body(response).await["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_index_prefills_username_from_cookie() {
        let request = Request::builder()
            .uri("/")
            .header(header::COOKIE, "username=night%20owl")
            .body(Body::empty())
            .unwrap();
        let response = send(request).await;
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.contains(r#"name="username" value="night owl""#));
    }

    #[tokio::test]
    async fn test_form_edit_resolves_height() {
        let body = json!({
            "state": {
                "mode": "album",
                "grid": { "rows": 5, "columns": 10 },
                "resolution": { "width": 0, "height": 0 },
                "aspect_lock": true
            },
            "edit": { "field": "width", "value": "1000" }
        });
        let response = send(post_json("/api/v1/form/edit", body)).await;
        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        assert_eq!(json["state"]["resolution"]["height"], 500);
        assert_eq!(json["recomputed"]["field"], "height");
        assert_eq!(json["ignored"], false);
        assert_eq!(json["limits"]["grid_max"], 15);
    }

    #[tokio::test]
    async fn test_form_edit_mode_switch_reports_new_max() {
        let body = json!({
            "state": { "grid": { "rows": 9, "columns": 12 } },
            "edit": { "field": "mode", "value": "track" }
        });
        let json = json_body(send(post_json("/api/v1/form/edit", body)).await).await;
        assert_eq!(json["state"]["grid"]["rows"], 5);
        assert_eq!(json["state"]["grid"]["columns"], 5);
        assert_eq!(json["limits"]["grid_max"], 5);
    }

    #[tokio::test]
    async fn test_form_edit_unknown_mode_is_ignored() {
        let body = json!({
            "state": { "grid": { "rows": 9, "columns": 12 } },
            "edit": { "field": "mode", "value": "genre" }
        });
        let response = send(post_json("/api/v1/form/edit", body)).await;
        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        assert_eq!(json["ignored"], true);
        assert_eq!(json["state"]["mode"], "album");
        assert_eq!(json["state"]["grid"]["rows"], 9);
        assert_eq!(json["limits"]["grid_max"], 15);
    }

    #[tokio::test]
    async fn test_submit_redirects_and_sets_cookie() {
        let response = send(get(
            "/submit?username=alice&method=artist&rows=12&columns=4&width=&aspectlock=on&submit=",
        ))
        .await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers()[header::LOCATION],
            "/collage?username=alice&method=artist&rows=10&columns=4"
        );
        assert_eq!(
            response.headers()[header::SET_COOKIE],
            "username=alice; Path=/; Max-Age=31536000; SameSite=Lax"
        );
    }

    #[tokio::test]
    async fn test_submit_without_username_is_bad_request() {
        let response = send(get("/submit?rows=3&columns=3")).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = json_body(response).await;
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(json["error"]["message"], "username is required");
    }

    #[tokio::test]
    async fn test_embed_returns_snippet() {
        let response = send(get("/embed?username=alice&rows=2&embed=true")).await;
        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        assert_eq!(json["url"], "https://collage.example/collage?username=alice&rows=2");
        assert_eq!(
            json["snippet"],
            r#"<img class="songstitch-collage" src="https://collage.example/collage?username=alice&amp;rows=2">"#
        );
    }
}
