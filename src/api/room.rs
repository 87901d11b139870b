use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post, put},
    Router,
};
use mongodb::bson::{oid::ObjectId, Document};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::{
    error::ApiError,
    models::room_model::{Room, RoomResponse},
    SharedState,
};

/// Malformed ids surface as a generic store failure, not a 400.
fn parse_object_id(id: &str) -> Result<ObjectId, ApiError> {
    ObjectId::parse_str(id).map_err(|err| {
        tracing::error!("invalid object id {id:?}: {err}");
        ApiError::Internal("Something went wrong".to_string())
    })
}

/// Top-level merge patch: each key in the patch replaces the stored value
/// wholesale, nested objects included. No deep merge.
fn to_patch_document(patch: &Value) -> Result<Document, ApiError> {
    mongodb::bson::to_document(patch).map_err(|err| {
        tracing::error!("invalid update payload: {err}");
        ApiError::Internal("Something went wrong".to_string())
    })
}

async fn create_room(
    State(state): State<SharedState>,
    Json(payload): Json<Room>,
) -> Result<impl IntoResponse, ApiError> {
    let result = state.db.create_room(payload).await?;

    let inserted_id = result
        .inserted_id
        .as_object_id()
        .map(|oid| oid.to_hex())
        .unwrap_or_default();

    Ok((
        StatusCode::CREATED,
        Json(json!({ "acknowledged": true, "insertedId": inserted_id })),
    ))
}

async fn all_rooms(State(state): State<SharedState>) -> Result<impl IntoResponse, ApiError> {
    let rooms = state.db.all_rooms().await?;
    let rooms: Vec<RoomResponse> = rooms.into_iter().map(RoomResponse::from).collect();
    Ok(Json(rooms))
}

async fn home_rooms(State(state): State<SharedState>) -> Result<impl IntoResponse, ApiError> {
    let rooms = state.db.home_rooms().await?;
    let rooms: Vec<RoomResponse> = rooms.into_iter().map(RoomResponse::from).collect();
    Ok(Json(rooms))
}

#[derive(Debug, Deserialize)]
struct MyRoomQuery {
    email: Option<String>,
}

async fn my_rooms(
    State(state): State<SharedState>,
    Query(query): Query<MyRoomQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let rooms = state.db.rooms_by_email(query.email.as_deref()).await?;
    let rooms: Vec<RoomResponse> = rooms.into_iter().map(RoomResponse::from).collect();
    Ok(Json(rooms))
}

async fn get_room(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let oid = parse_object_id(&id)?;

    let room = state
        .db
        .room_by_id(oid)
        .await?
        .ok_or_else(|| ApiError::NotFound("Room not found".to_string()))?;

    Ok(Json(RoomResponse::from(room)))
}

async fn update_room(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, ApiError> {
    let oid = parse_object_id(&id)?;
    let patch = to_patch_document(&payload)?;

    let result = state.db.update_room(oid, patch).await?;

    // A no-op patch and a missing document both land here, undistinguished.
    if result.modified_count == 0 {
        return Err(ApiError::NotFound(
            "Room not found or nothing changed".to_string(),
        ));
    }

    Ok(Json(
        json!({ "success": true, "message": "Room updated successfully" }),
    ))
}

async fn delete_room(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let oid = parse_object_id(&id)?;

    let result = state.db.delete_room(oid).await?;

    if result.deleted_count == 0 {
        return Err(ApiError::NotFound("Room not found".to_string()));
    }

    Ok(Json(
        json!({ "success": true, "message": "Room deleted successfully" }),
    ))
}

pub fn room_router() -> Router<SharedState> {
    Router::new()
        .route("/room", post(create_room))
        .route("/all-room", get(all_rooms))
        .route("/home-room", get(home_rooms))
        .route("/my-room", get(my_rooms))
        .route("/room/{id}", get(get_room))
        .route("/post/{id}", put(update_room).delete(delete_room))
}
