//! Messaging Routes
//!
//! HTTP handlers that delegate to MessageService for the pipeline logic.
//! The authenticated actor arrives through request extensions, inserted
//! by the auth middleware.

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Extension, Json, Router,
};
use uuid::Uuid;

use fieldnote::{Actor, MessagingError};

use crate::models::{CreateMessageRequest, ListMessagesParams, MessageResponse};
use crate::AppState;

/// Map pipeline failures onto HTTP statuses
fn error_response(error: MessagingError) -> (axum::http::StatusCode, String) {
    use axum::http::StatusCode;

    let status = match &error {
        MessagingError::Validation(_) | MessagingError::UnknownTargetType(_) => {
            StatusCode::BAD_REQUEST
        }
        MessagingError::TargetNotFound { .. } => StatusCode::NOT_FOUND,
        MessagingError::PermissionDenied(_) => StatusCode::FORBIDDEN,
        MessagingError::NotCreated => StatusCode::SERVICE_UNAVAILABLE,
        MessagingError::Repository(_) | MessagingError::ExternalService(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    (status, error.to_string())
}

/// Create a message on a target
#[utoipa::path(
    post,
    path = "/fieldnote/messaging",
    request_body = CreateMessageRequest,
    responses(
        (status = 200, description = "Message created", body = MessageResponse),
        (status = 400, description = "Blank message or unknown target type"),
        (status = 401, description = "Missing or invalid API token"),
        (status = 403, description = "Actor may not message this target"),
        (status = 404, description = "Target not found"),
        (status = 503, description = "Message not created"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Messaging"
)]
pub async fn create_message(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Json(payload): Json<CreateMessageRequest>,
) -> Result<Json<MessageResponse>, (axum::http::StatusCode, String)> {
    let created = state
        .message_service
        .create(
            &actor,
            &payload.message,
            &payload.target_type,
            payload.target_id,
        )
        .await
        .map_err(error_response)?;

    Ok(Json(MessageResponse::from_domain(created)))
}

/// List messages for a target, newest first
#[utoipa::path(
    get,
    path = "/fieldnote/messaging",
    params(ListMessagesParams),
    responses(
        (status = 200, description = "Messages attached to the target", body = Vec<MessageResponse>),
        (status = 400, description = "Unknown target type"),
        (status = 401, description = "Missing or invalid API token"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Messaging"
)]
pub async fn list_messages(
    State(state): State<AppState>,
    Query(params): Query<ListMessagesParams>,
) -> Result<Json<Vec<MessageResponse>>, (axum::http::StatusCode, String)> {
    let messages = state
        .message_service
        .list(&params.target_type, params.target_id, params.limit)
        .await
        .map_err(error_response)?;

    let responses: Vec<MessageResponse> = messages
        .into_iter()
        .map(MessageResponse::from_domain)
        .collect();

    Ok(Json(responses))
}

/// Get a single message by id
#[utoipa::path(
    get,
    path = "/fieldnote/messaging/{id}",
    params(
        ("id" = Uuid, Path, description = "Message ID")
    ),
    responses(
        (status = 200, description = "Message found", body = MessageResponse),
        (status = 401, description = "Missing or invalid API token"),
        (status = 404, description = "Message not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Messaging"
)]
pub async fn get_message(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, (axum::http::StatusCode, String)> {
    let activity = state
        .message_service
        .get(id)
        .await
        .map_err(error_response)?
        .ok_or((
            axum::http::StatusCode::NOT_FOUND,
            "Message not found".to_string(),
        ))?;

    Ok(Json(MessageResponse::from_domain(activity)))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/fieldnote/messaging", get(list_messages).post(create_message))
        .route("/fieldnote/messaging/:id", get(get_message))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::adapters::ActivityDispatcher;
    use crate::application::MessageService;
    use crate::test_support::{FakeTargets, MemoryLog, MemoryTokens, OwnerOnly};
    use crate::auth;
    use fieldnote::{Target, TargetRegistry, TargetType};

    const AMINA_TOKEN: &str = "amina-key";
    const GUEST_TOKEN: &str = "guest-key";

    fn fixture(log_wired: bool) -> (Router, Arc<MemoryLog>) {
        let log = Arc::new(MemoryLog::default());

        let registry = TargetRegistry::new()
            .register(Arc::new(FakeTargets::new(
                TargetType::Project,
                vec![Target::new(TargetType::Project, 42, "water points", 7)],
            )))
            .register(Arc::new(FakeTargets::new(
                TargetType::Form,
                vec![Target::new(TargetType::Form, 3, "household survey", 7)],
            )));

        let mut dispatcher = ActivityDispatcher::new();
        if log_wired {
            dispatcher = dispatcher.with_log(log.clone());
        }

        let service = MessageService::new(
            registry,
            Arc::new(OwnerOnly),
            Arc::new(dispatcher),
            log.clone(),
        );

        let tokens = MemoryTokens::default()
            .with_token(AMINA_TOKEN, Actor::new(7, "amina"))
            .with_token(GUEST_TOKEN, Actor::new(8, "guest"));

        let state = AppState {
            message_service: Arc::new(service),
            tokens: Arc::new(tokens),
        };

        let app = Router::new()
            .merge(router())
            .layer(axum::middleware::from_fn_with_state(
                state.clone(),
                auth::auth_middleware,
            ))
            .with_state(state);

        (app, log)
    }

    fn post_json(token: Option<&str>, body: Value) -> Request<Body> {
        let mut builder = Request::builder()
            .method("POST")
            .uri("/fieldnote/messaging")
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Token {token}"));
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }

    fn get_uri(token: &str, uri: &str) -> Request<Body> {
        Request::builder()
            .method("GET")
            .uri(uri)
            .header(header::AUTHORIZATION, format!("Token {token}"))
            .body(Body::empty())
            .unwrap()
    }

    async fn response_parts(app: Router, request: Request<Body>) -> (StatusCode, String) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    fn valid_payload() -> Value {
        json!({"message": "Please review", "target_id": 42, "target_type": "project"})
    }

    #[tokio::test]
    async fn test_create_requires_token() {
        let (app, log) = fixture(true);

        let (status, _) = response_parts(app, post_json(None, valid_payload())).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(log.appended().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_token_is_rejected() {
        let (app, log) = fixture(true);

        let (status, _) = response_parts(app, post_json(Some("no-such-key"), valid_payload())).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(log.appended().is_empty());
    }

    #[tokio::test]
    async fn test_create_returns_created_message() {
        let (app, log) = fixture(true);

        let (status, body) =
            response_parts(app, post_json(Some(AMINA_TOKEN), valid_payload())).await;

        assert_eq!(status, StatusCode::OK);
        let message: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(message["message"], "Please review");
        assert_eq!(message["target_type"], "project");
        assert_eq!(message["target_id"], 42);
        assert_eq!(message["actor"], "amina");
        assert_eq!(log.appended().len(), 1);
    }

    #[tokio::test]
    async fn test_blank_message_is_bad_request() {
        let (app, log) = fixture(true);

        let (status, body) = response_parts(
            app,
            post_json(
                Some(AMINA_TOKEN),
                json!({"message": "  ", "target_id": 42, "target_type": "project"}),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("blank"));
        assert!(log.appended().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_target_type_is_bad_request() {
        let (app, log) = fixture(true);

        let (status, body) = response_parts(
            app,
            post_json(
                Some(AMINA_TOKEN),
                json!({"message": "hi", "target_id": 1, "target_type": "submission"}),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("Unknown target type"));
        assert!(log.appended().is_empty());
    }

    #[tokio::test]
    async fn test_missing_target_is_not_found() {
        let (app, log) = fixture(true);

        let (status, body) = response_parts(
            app,
            post_json(
                Some(AMINA_TOKEN),
                json!({"message": "hi", "target_id": 999, "target_type": "project"}),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("not found"));
        assert!(log.appended().is_empty());
    }

    #[tokio::test]
    async fn test_denied_actor_gets_forbidden() {
        let (app, log) = fixture(true);

        let (status, body) =
            response_parts(app, post_json(Some(GUEST_TOKEN), valid_payload())).await;

        assert_eq!(status, StatusCode::FORBIDDEN);
        assert!(body.contains("do not have permission"));
        assert!(log.appended().is_empty());
    }

    #[tokio::test]
    async fn test_unwired_store_is_service_unavailable() {
        let (app, log) = fixture(false);

        let (status, body) =
            response_parts(app, post_json(Some(AMINA_TOKEN), valid_payload())).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert!(body.contains("Please retry"));
        assert!(log.appended().is_empty());
    }

    #[tokio::test]
    async fn test_malformed_target_id_is_client_error() {
        let (app, log) = fixture(true);

        let (status, _) = response_parts(
            app,
            post_json(
                Some(AMINA_TOKEN),
                json!({"message": "hi", "target_id": "abc", "target_type": "project"}),
            ),
        )
        .await;

        assert!(status.is_client_error());
        assert!(log.appended().is_empty());
    }

    #[tokio::test]
    async fn test_list_returns_messages_newest_first() {
        let (app, _log) = fixture(true);

        for text in ["first", "second"] {
            let (status, _) = response_parts(
                app.clone(),
                post_json(
                    Some(AMINA_TOKEN),
                    json!({"message": text, "target_id": 42, "target_type": "project"}),
                ),
            )
            .await;
            assert_eq!(status, StatusCode::OK);
        }

        let (status, body) = response_parts(
            app,
            get_uri(
                AMINA_TOKEN,
                "/fieldnote/messaging?target_type=project&target_id=42",
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let messages: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(messages.as_array().unwrap().len(), 2);
        assert_eq!(messages[0]["message"], "second");
        assert_eq!(messages[1]["message"], "first");
    }

    #[tokio::test]
    async fn test_list_unknown_type_is_bad_request() {
        let (app, _log) = fixture(true);

        let (status, _) = response_parts(
            app,
            get_uri(
                AMINA_TOKEN,
                "/fieldnote/messaging?target_type=submission&target_id=1",
            ),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_get_message_by_id() {
        let (app, _log) = fixture(true);

        let (status, body) =
            response_parts(app.clone(), post_json(Some(AMINA_TOKEN), valid_payload())).await;
        assert_eq!(status, StatusCode::OK);
        let created: Value = serde_json::from_str(&body).unwrap();
        let id = created["id"].as_str().unwrap().to_string();

        let (status, body) = response_parts(
            app.clone(),
            get_uri(AMINA_TOKEN, &format!("/fieldnote/messaging/{id}")),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let found: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(found["id"].as_str().unwrap(), id);

        let (status, _) = response_parts(
            app,
            get_uri(
                AMINA_TOKEN,
                &format!("/fieldnote/messaging/{}", Uuid::new_v4()),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
