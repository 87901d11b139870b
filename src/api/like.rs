use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};

use crate::{
    error::ApiError,
    models::like_model::{StatusResponse, ToggleRequest, ToggleResponse},
    SharedState,
};

fn require_fields(payload: ToggleRequest) -> Result<(String, String), ApiError> {
    match (payload.post_id, payload.user_id) {
        (Some(post_id), Some(user_id)) => Ok((post_id, user_id)),
        _ => Err(ApiError::BadRequest(
            "postId and userId are required".to_string(),
        )),
    }
}

/// Flips the like state for a `(postId, userId)` pair. Existence check and
/// write are two separate store operations; concurrent toggles for the
/// same pair can race and leave duplicate relations.
async fn toggle_like(
    State(state): State<SharedState>,
    Json(payload): Json<ToggleRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let (post_id, user_id) = require_fields(payload)?;

    let liked = if state.db.find_like(&post_id, &user_id).await?.is_some() {
        state.db.delete_like(&post_id, &user_id).await?;
        false
    } else {
        state.db.insert_like(&post_id, &user_id).await?;
        true
    };

    Ok(Json(ToggleResponse { liked }))
}

async fn like_status(
    State(state): State<SharedState>,
    Path((post_id, user_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, ApiError> {
    let like_count = state.db.count_likes(&post_id).await?;
    let liked = state.db.find_like(&post_id, &user_id).await?.is_some();

    Ok(Json(StatusResponse { like_count, liked }))
}

pub fn like_router() -> Router<SharedState> {
    Router::new()
        .route("/likes/toggle", post(toggle_like))
        .route("/likes/status/{post_id}/{user_id}", get(like_status))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(post_id: Option<&str>, user_id: Option<&str>) -> ToggleRequest {
        ToggleRequest {
            post_id: post_id.map(str::to_string),
            user_id: user_id.map(str::to_string),
        }
    }

    #[test]
    fn both_fields_present_passes_through() {
        let (post_id, user_id) = require_fields(request(Some("p1"), Some("u1"))).unwrap();
        assert_eq!(post_id, "p1");
        assert_eq!(user_id, "u1");
    }

    #[test]
    fn missing_user_id_is_a_bad_request() {
        let err = require_fields(request(Some("p1"), None)).unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(_)));
    }

    #[test]
    fn missing_post_id_is_a_bad_request() {
        let err = require_fields(request(None, Some("u1"))).unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(_)));
    }

    #[test]
    fn missing_both_is_a_bad_request() {
        let err = require_fields(request(None, None)).unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(_)));
    }
}
