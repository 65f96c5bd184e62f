//! HTTP handlers for session endpoints.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::handlers::session::{
    CreateSessionCommand, CreateSessionHandler, DeleteSessionCommand, DeleteSessionHandler,
    GetSessionHandler, GetSessionQuery, ListSessionsHandler, ListSessionsQuery,
    UpdateSessionCommand, UpdateSessionHandler,
};
use crate::domain::foundation::{ErrorCode, SessionId};
use crate::domain::session::SessionError;
use crate::ports::SessionRepository;

use super::dto::{
    CreatedResponse, ErrorResponse, ListSessionsParams, SessionRequest, SessionResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct SessionHandlers {
    create_handler: Arc<CreateSessionHandler>,
    get_handler: Arc<GetSessionHandler>,
    list_handler: Arc<ListSessionsHandler>,
    update_handler: Arc<UpdateSessionHandler>,
    delete_handler: Arc<DeleteSessionHandler>,
}

impl SessionHandlers {
    /// Wires every session handler to the same repository.
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self {
            create_handler: Arc::new(CreateSessionHandler::new(repository.clone())),
            get_handler: Arc::new(GetSessionHandler::new(repository.clone())),
            list_handler: Arc::new(ListSessionsHandler::new(repository.clone())),
            update_handler: Arc::new(UpdateSessionHandler::new(repository.clone())),
            delete_handler: Arc::new(DeleteSessionHandler::new(repository)),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /sessions - Create a new session
pub async fn create_session(
    State(handlers): State<SessionHandlers>,
    payload: Result<Json<SessionRequest>, JsonRejection>,
) -> Response {
    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return malformed_body(rejection),
    };

    let cmd = CreateSessionCommand { draft: req.into() };

    match handlers.create_handler.handle(cmd).await {
        Ok(id) => (StatusCode::CREATED, Json(CreatedResponse { id })).into_response(),
        Err(e) => handle_session_error(e),
    }
}

/// GET /sessions/:id - Get session details
pub async fn get_session(
    State(handlers): State<SessionHandlers>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers.get_handler.handle(GetSessionQuery { session_id }).await {
        Ok(session) => {
            let response: SessionResponse = session.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_session_error(e),
    }
}

/// GET /sessions - List sessions one page at a time
pub async fn list_sessions(
    State(handlers): State<SessionHandlers>,
    params: Result<Query<ListSessionsParams>, QueryRejection>,
) -> Response {
    let params = match params {
        Ok(Query(params)) => params,
        Err(rejection) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request(rejection.body_text())),
            )
                .into_response()
        }
    };

    let query = ListSessionsQuery {
        offset: params.offset,
        limit: params.limit,
    };

    match handlers.list_handler.handle(query).await {
        Ok(sessions) => {
            let response: Vec<SessionResponse> = sessions.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_session_error(e),
    }
}

/// PUT /sessions/:id - Replace a session
pub async fn update_session(
    State(handlers): State<SessionHandlers>,
    Path(session_id): Path<String>,
    payload: Result<Json<SessionRequest>, JsonRejection>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return malformed_body(rejection),
    };

    let cmd = UpdateSessionCommand {
        session_id,
        draft: req.into(),
    };

    match handlers.update_handler.handle(cmd).await {
        Ok(()) => StatusCode::OK.into_response(),
        Err(e) => handle_session_error(e),
    }
}

/// DELETE /sessions/:id - Remove a session
pub async fn delete_session(
    State(handlers): State<SessionHandlers>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers
        .delete_handler
        .handle(DeleteSessionCommand { session_id })
        .await
    {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => handle_session_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Request helpers
// ════════════════════════════════════════════════════════════════════════════

fn parse_session_id(raw: &str) -> Result<SessionId, Response> {
    raw.parse::<SessionId>().map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Invalid session ID")),
        )
            .into_response()
    })
}

fn malformed_body(rejection: JsonRejection) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::bad_request(rejection.body_text())),
    )
        .into_response()
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_session_error(error: SessionError) -> Response {
    let code = error.code();
    let body = match &error {
        SessionError::ValidationFailed(violations) => {
            ErrorResponse::new(code, error.message()).with_violations(violations)
        }
        SessionError::Infrastructure(cause) => {
            tracing::error!(error = %cause, "Session store failure");
            ErrorResponse::internal("Internal server error")
        }
        SessionError::NotFound(_) | SessionError::NotFoundFor { .. } => {
            ErrorResponse::new(code, error.message())
        }
    };

    (status_for(code), Json(body)).into_response()
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::ValidationFailed => StatusCode::BAD_REQUEST,
        ErrorCode::SessionNotFound => StatusCode::NOT_FOUND,
        ErrorCode::DatabaseError | ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ValidationError;
    use crate::domain::session::SessionAction;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn lookup_not_found_maps_to_404_naming_the_id() {
        let response = handle_session_error(SessionError::not_found(SessionId::new(42)));

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["code"], "SESSION_NOT_FOUND");
        assert_eq!(body["message"], "Session not found for ID: 42");
    }

    #[tokio::test]
    async fn write_not_found_maps_to_404_naming_the_action() {
        let response = handle_session_error(SessionError::not_found_for(
            SessionId::new(42),
            SessionAction::Update,
        ));

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["message"], "Session not found for update");
    }

    #[tokio::test]
    async fn validation_failed_maps_to_400_with_details() {
        let error = SessionError::validation(vec![ValidationError::empty_field("title")]);
        let response = handle_session_error(error);

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["code"], "VALIDATION_FAILED");
        assert_eq!(body["details"][0]["field"], "title");
    }

    #[tokio::test]
    async fn infrastructure_maps_to_500_without_leaking_cause() {
        let error = SessionError::infrastructure("Failed to fetch session: connection refused");
        let response = handle_session_error(error);

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["code"], "INTERNAL_ERROR");
        assert_eq!(body["message"], "Internal server error");
        assert!(!body.to_string().contains("connection refused"));
    }

    #[test]
    fn parse_session_id_accepts_integers() {
        assert_eq!(parse_session_id("17").unwrap(), SessionId::new(17));
    }

    #[test]
    fn parse_session_id_rejects_non_integers() {
        for raw in ["abc", "1.5", "", "9999999999999999999999"] {
            let response = parse_session_id(raw).unwrap_err();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "accepted {:?}", raw);
        }
    }
}
