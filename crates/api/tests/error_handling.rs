//! Tests for `AppError` → HTTP response mapping.
//!
//! These call `IntoResponse` directly; no server or database is involved.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use ideabox_api::error::AppError;
use ideabox_core::error::CoreError;
use ideabox_core::llm_model::LlmModel;
use ideabox_llm::{GenerationError, ProviderError};

/// Convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

// ---------------------------------------------------------------------------
// Core errors
// ---------------------------------------------------------------------------

#[tokio::test]
async fn not_found_error_returns_404() {
    let (status, json) = error_to_response(AppError::Core(CoreError::NotFound {
        entity: "Idea",
        id: 42,
    }))
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Idea with id 42 not found");
}

#[tokio::test]
async fn forbidden_error_returns_403() {
    let (status, json) = error_to_response(AppError::Core(CoreError::Forbidden(
        "Not enough permissions to access this idea".into(),
    )))
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["code"], "FORBIDDEN");
}

#[tokio::test]
async fn validation_error_returns_400() {
    let (status, json) =
        error_to_response(AppError::Core(CoreError::Validation("bad title".into()))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "bad title");
}

#[tokio::test]
async fn internal_error_hides_details() {
    let (status, json) =
        error_to_response(AppError::InternalError("secret stack trace".into())).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
}

#[tokio::test]
async fn row_not_found_returns_404() {
    let (status, json) = error_to_response(AppError::Database(sqlx::Error::RowNotFound)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
}

// ---------------------------------------------------------------------------
// Generation errors
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unsupported_model_returns_400() {
    let (status, json) = error_to_response(AppError::Generation(
        GenerationError::UnsupportedModel("llama".into()),
    ))
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "UNSUPPORTED_MODEL");
    assert_eq!(json["error"], "Unsupported LLM model: llama");
}

#[tokio::test]
async fn provider_unavailable_returns_503() {
    let (status, json) = error_to_response(AppError::Generation(
        GenerationError::ProviderUnavailable(LlmModel::Claude),
    ))
    .await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["code"], "PROVIDER_UNAVAILABLE");
    assert_eq!(json["error"], "claude API key is not configured");
}

#[tokio::test]
async fn provider_error_returns_502_without_upstream_body() {
    let (status, json) = error_to_response(AppError::Generation(GenerationError::Provider {
        model: LlmModel::OpenAi,
        source: ProviderError::Api {
            status: 401,
            body: "{\"error\":\"invalid key sk-abc\"}".into(),
        },
    }))
    .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(json["code"], "PROVIDER_ERROR");
    assert_eq!(json["error"], "Failed to generate requirement with openai");
}
