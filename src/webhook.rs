use std::{future::Future, sync::Arc};

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use teloxide::types::Update;
use tokio::{net::TcpListener, sync::mpsc::UnboundedSender};

pub const LIVENESS_REPLY: &str = "Bot is running";
pub const ACCEPTED_REPLY: &str = "ok";
pub const REJECTION_REPLY: &str = "only POST requests are accepted";

/// What the HTTP layer needs: the secret path segment and the dispatcher queue.
#[derive(Clone)]
pub struct WebhookState {
    secret: Arc<str>,
    strict_methods: bool,
    updates: UnboundedSender<Update>,
}

impl WebhookState {
    pub fn new(secret: &str, strict_methods: bool, updates: UnboundedSender<Update>) -> Self {
        Self {
            secret: Arc::from(secret),
            strict_methods,
            updates,
        }
    }
}

pub fn router(state: WebhookState) -> Router {
    Router::new()
        .route("/", get(liveness))
        .route("/:secret", post(receive_update).fallback(reject_method))
        .with_state(state)
}

/// Serves until `shutdown` resolves and open requests finish. The state's
/// queue sender is dropped on return, so the dispatcher drains what is left
/// and stops.
pub async fn serve<F>(listener: TcpListener, state: WebhookState, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
}

async fn liveness() -> &'static str {
    LIVENESS_REPLY
}

async fn receive_update(
    State(state): State<WebhookState>,
    Path(secret): Path<String>,
    body: Bytes,
) -> Response {
    if secret != *state.secret {
        return StatusCode::NOT_FOUND.into_response();
    }

    let update: Update = match serde_json::from_slice(&body) {
        Ok(update) => update,
        Err(err) => {
            log::warn!("Rejected malformed update: {}", err);
            return StatusCode::BAD_REQUEST.into_response();
        }
    };

    if state.updates.send(update).is_err() {
        log::error!("Dispatcher is gone, dropping update");
        return StatusCode::SERVICE_UNAVAILABLE.into_response();
    }
    ACCEPTED_REPLY.into_response()
}

async fn reject_method(State(state): State<WebhookState>, Path(secret): Path<String>) -> Response {
    if secret != *state.secret {
        return StatusCode::NOT_FOUND.into_response();
    }
    if state.strict_methods {
        (StatusCode::METHOD_NOT_ALLOWED, REJECTION_REPLY).into_response()
    } else {
        REJECTION_REPLY.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Method, Request};
    use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver};
    use tower::ServiceExt;

    const TOKEN: &str = "123456:secret";

    const UPDATE: &str = r#"{
        "update_id": 7,
        "message": {
            "message_id": 1,
            "date": 1714550400,
            "chat": { "id": 42, "type": "private", "first_name": "Abebe" },
            "from": { "id": 42, "is_bot": false, "first_name": "Abebe" },
            "text": "/start"
        }
    }"#;

    fn app(strict: bool) -> (Router, UnboundedReceiver<Update>) {
        let (tx, rx) = unbounded_channel();
        (router(WebhookState::new(TOKEN, strict, tx)), rx)
    }

    async fn call(app: Router, method: Method, uri: &str, body: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn liveness_check() {
        let (app, _rx) = app(false);
        assert_eq!(
            call(app, Method::GET, "/", "").await,
            (StatusCode::OK, LIVENESS_REPLY.to_string())
        );
    }

    #[tokio::test]
    async fn post_enqueues_update() {
        let (app, mut rx) = app(false);
        let uri = format!("/{TOKEN}");

        assert_eq!(
            call(app, Method::POST, &uri, UPDATE).await,
            (StatusCode::OK, ACCEPTED_REPLY.to_string())
        );
        assert_eq!(rx.try_recv().unwrap().id, 7);
    }

    #[tokio::test]
    async fn wrong_secret_is_not_found() {
        let (app, mut rx) = app(false);
        let (status, _) = call(app, Method::POST, "/guess", UPDATE).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn malformed_body_is_rejected() {
        let (app, mut rx) = app(false);
        let (status, _) = call(app, Method::POST, &format!("/{TOKEN}"), "{not json").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn non_post_gets_rejection_text_with_ok_status() {
        let (app, _rx) = app(false);
        assert_eq!(
            call(app, Method::GET, &format!("/{TOKEN}"), "").await,
            (StatusCode::OK, REJECTION_REPLY.to_string())
        );
    }

    #[tokio::test]
    async fn strict_mode_rejects_non_post_with_405() {
        let (app, _rx) = app(true);
        assert_eq!(
            call(app, Method::GET, &format!("/{TOKEN}"), "").await,
            (StatusCode::METHOD_NOT_ALLOWED, REJECTION_REPLY.to_string())
        );
    }

    #[tokio::test]
    async fn shutdown_keeps_queued_updates_and_closes_queue() {
        let (tx, mut rx) = unbounded_channel();
        tx.send(serde_json::from_str(UPDATE).unwrap()).unwrap();
        let state = WebhookState::new(TOKEN, false, tx);

        let listener = TcpListener::bind(("127.0.0.1", 0)).await.unwrap();
        let (stop_tx, stop_rx) = tokio::sync::oneshot::channel::<()>();
        let server = tokio::spawn(serve(listener, state, async move {
            let _ = stop_rx.await;
        }));

        stop_tx.send(()).unwrap();
        server.await.unwrap().unwrap();

        assert_eq!(rx.recv().await.unwrap().id, 7);
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn closed_queue_is_unavailable() {
        let (app, rx) = app(false);
        drop(rx);
        let (status, _) = call(app, Method::POST, &format!("/{TOKEN}"), UPDATE).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    }
}
