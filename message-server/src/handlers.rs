//! Request handlers: each one calls exactly one store operation.

use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Json;
use storage::Message;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::routes::{resolve_get, GetRoute};
use crate::server::AppState;

/// `POST /**`: stores the message; the path is ignored and the new id is not returned.
pub async fn post_message(
    State(state): State<AppState>,
    Json(message): Json<Message>,
) -> Result<StatusCode, ApiError> {
    let id = state.store.save(&message).await?;
    info!(id, author = message.author(), "Accepted message");
    Ok(StatusCode::ACCEPTED)
}

/// `GET /{id}` or `GET /**`, dispatched through the route table.
pub async fn get_messages(State(state): State<AppState>, uri: Uri) -> Result<Response, ApiError> {
    match resolve_get(uri.path())? {
        GetRoute::ById(id) => match state.store.find_by_id(id).await? {
            Some(message) => Ok((StatusCode::OK, Json(message)).into_response()),
            None => {
                debug!(id, "Message not found");
                Ok(StatusCode::NOT_FOUND.into_response())
            }
        },
        GetRoute::All => {
            let messages = state.store.find_all().await?;
            Ok((StatusCode::OK, Json(messages)).into_response())
        }
    }
}
