// HTTP contract tests for the token endpoint, driven through the router with
// tower's oneshot so no listener is needed.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use pitwall_voice::{create_router, AppState, LiveKitConfig, TokenIssuer};
use serde_json::Value;
use tower::ServiceExt;

const API_KEY: &str = "devkey";
const API_SECRET: &str = "devsecret-0123456789abcdef0123456789abcdef";

fn app(config: LiveKitConfig) -> Router {
    create_router(AppState::new(config))
}

fn configured_app() -> Router {
    app(LiveKitConfig::new(
        "wss://example.livekit.cloud",
        API_KEY,
        API_SECRET,
    ))
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .uri(uri)
        .method("GET")
        .body(Body::empty())
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let body_bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let body_json: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);
    (status, body_json)
}

#[tokio::test]
async fn test_token_request_succeeds_with_valid_parameters() {
    let (status, body) = get(
        configured_app(),
        "/api/token?roomName=r1&participantName=p1",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let token = body["token"].as_str().expect("token field");
    assert!(!token.is_empty());
}

#[tokio::test]
async fn test_missing_room_name_is_rejected() {
    let (status, body) = get(configured_app(), "/api/token?participantName=p1").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing roomName parameter");
}

#[tokio::test]
async fn test_missing_participant_name_is_rejected() {
    let (status, body) = get(configured_app(), "/api/token?roomName=r1").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing participantName parameter");
}

#[tokio::test]
async fn test_both_parameters_missing_reports_room_name_first() {
    let (status, body) = get(configured_app(), "/api/token").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing roomName parameter");
}

#[tokio::test]
async fn test_empty_parameter_values_are_rejected() {
    let (status, body) = get(
        configured_app(),
        "/api/token?roomName=&participantName=p1",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing roomName parameter");
}

#[tokio::test]
async fn test_missing_credentials_is_a_server_error() {
    let (status, body) = get(
        app(LiveKitConfig::default()),
        "/api/token?roomName=r1&participantName=p1",
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body["error"],
        "Server configuration error: Missing LiveKit credentials"
    );
}

#[tokio::test]
async fn test_each_request_mints_a_fresh_token() {
    let issuer = TokenIssuer::new(LiveKitConfig::new(
        "wss://example.livekit.cloud",
        API_KEY,
        API_SECRET,
    ));

    let first = issuer.mint("r1", "p1").unwrap();
    let second = issuer.mint("r1", "p1").unwrap();

    // Same inputs, independent tokens (iat/nonce differ or at minimum the
    // token is re-signed per call); neither is cached.
    assert!(!first.is_empty());
    assert!(!second.is_empty());
}

#[tokio::test]
async fn test_token_grants_are_scoped_to_the_requested_room() {
    use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Claims {
        sub: String,
        video: VideoClaims,
    }

    #[derive(Deserialize)]
    struct VideoClaims {
        room: String,
        #[serde(rename = "roomJoin")]
        room_join: bool,
        #[serde(rename = "canPublish")]
        can_publish: bool,
        #[serde(rename = "canSubscribe")]
        can_subscribe: bool,
        #[serde(rename = "canPublishData")]
        can_publish_data: bool,
        #[serde(rename = "roomAdmin", default)]
        room_admin: bool,
        #[serde(rename = "roomCreate", default)]
        room_create: bool,
    }

    let issuer = TokenIssuer::new(LiveKitConfig::new(
        "wss://example.livekit.cloud",
        API_KEY,
        API_SECRET,
    ));
    let token = issuer.mint("perm-room", "caller-42").unwrap();

    let validation = Validation::new(Algorithm::HS256);
    let key = DecodingKey::from_secret(API_SECRET.as_bytes());
    let claims = decode::<Claims>(&token, &key, &validation)
        .expect("token must verify against the signing secret")
        .claims;

    assert_eq!(claims.sub, "caller-42");
    assert_eq!(claims.video.room, "perm-room");
    assert!(claims.video.room_join);
    assert!(claims.video.can_publish);
    assert!(claims.video.can_subscribe);
    assert!(claims.video.can_publish_data);
    assert!(!claims.video.room_admin, "no admin grant");
    assert!(!claims.video.room_create, "no room-create grant");
}

#[tokio::test]
async fn test_health_check() {
    let req = Request::builder()
        .uri("/health")
        .method("GET")
        .body(Body::empty())
        .unwrap();

    let resp = configured_app().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}
