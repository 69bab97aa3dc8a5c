#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{HeaderValue, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use ideabox_api::auth::jwt::{generate_access_token, JwtConfig};
use ideabox_api::auth::password::hash_password;
use ideabox_api::config::ServerConfig;
use ideabox_api::router::build_app_router;
use ideabox_api::state::AppState;
use ideabox_core::llm_model::LlmModel;
use ideabox_db::models::idea::{CreateIdea, Idea};
use ideabox_db::models::user::{CreateUser, User};
use ideabox_db::repositories::{IdeaRepo, UserRepo};
use ideabox_llm::{LlmConfig, LlmProvider, ProviderCredentials, ProviderError, RequirementGenerator};
use sqlx::PgPool;
use tower::ServiceExt;

pub const TEST_PASSWORD: &str = "test_password_123";

/// Build a test `ServerConfig` with safe defaults and no provider keys.
pub fn test_config() -> ServerConfig {
    let unconfigured = |url: &str| ProviderCredentials::new(None, url);
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec![HeaderValue::from_static("http://localhost:3000")],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "ideabox-integration-test-secret".to_string(),
            access_token_expiry_mins: 60,
        },
        llm: LlmConfig {
            openai: unconfigured("http://127.0.0.1:9"),
            google: unconfigured("http://127.0.0.1:9"),
            claude: unconfigured("http://127.0.0.1:9"),
            request_timeout_secs: 5,
        },
    }
}

/// Build the full application router around `generator`, with the same
/// middleware stack as production.
pub fn build_test_app_with(pool: PgPool, generator: RequirementGenerator) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        generator: Arc::new(generator),
    };
    build_app_router(state, &config)
}

/// Build the app with a generator that has no adapters registered.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with(pool, RequirementGenerator::new())
}

// ---------------------------------------------------------------------------
// Stub provider
// ---------------------------------------------------------------------------

/// What a [`StubProvider`] does when called.
#[derive(Debug, Clone)]
pub enum StubReply {
    Text(&'static str),
    HttpError(u16),
}

/// In-process `LlmProvider` that counts its calls.
pub struct StubProvider {
    model: LlmModel,
    configured: bool,
    reply: StubReply,
    calls: AtomicUsize,
}

impl StubProvider {
    pub fn new(model: LlmModel, configured: bool, reply: StubReply) -> Arc<Self> {
        Arc::new(Self {
            model,
            configured,
            reply,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn replying(model: LlmModel, text: &'static str) -> Arc<Self> {
        Self::new(model, true, StubReply::Text(text))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LlmProvider for StubProvider {
    fn model(&self) -> LlmModel {
        self.model
    }

    fn is_configured(&self) -> bool {
        self.configured
    }

    async fn generate(&self, _prompt: &str, _system: &str) -> Result<String, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.reply {
            StubReply::Text(text) => Ok(text.to_string()),
            StubReply::HttpError(status) => Err(ProviderError::Api {
                status: *status,
                body: "stubbed upstream failure".into(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Insert a user directly and return it.
pub async fn create_user(pool: &PgPool, username: &str) -> User {
    let input = CreateUser {
        email: format!("{username}@test.com"),
        username: username.to_string(),
        password_hash: hash_password(TEST_PASSWORD).expect("hashing should succeed"),
    };
    UserRepo::create(pool, &input)
        .await
        .expect("user creation should succeed")
}

/// A bearer token for `user_id`, signed with the test secret.
pub fn token_for(user_id: i64) -> String {
    generate_access_token(user_id, &test_config().jwt).expect("token generation should succeed")
}

/// Insert an idea owned by `owner_id`.
pub async fn create_idea(pool: &PgPool, owner_id: i64, title: &str) -> Idea {
    let input = CreateIdea {
        title: title.to_string(),
        content: format!("{title} in more detail"),
    };
    IdeaRepo::create(pool, owner_id, &input)
        .await
        .expect("idea creation should succeed")
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.expect("request should complete")
}

fn request(method: &str, uri: &str, token: Option<&str>, body: Option<serde_json::Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, request("GET", uri, None, None)).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, request("GET", uri, Some(token), None)).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, request("POST", uri, None, Some(body))).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, request("POST", uri, Some(token), Some(body))).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, request("PUT", uri, Some(token), Some(body))).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, request("DELETE", uri, Some(token), None)).await
}

/// Read the full response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be JSON")
}
