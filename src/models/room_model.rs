use mongodb::bson::{oid::ObjectId, Bson, Document};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A room posting as stored in the `rooms` collection. Only `_id` and the
/// owner `email` are named fields; everything else the client sends rides
/// along in `extra` untouched.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Room {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub _id: Option<ObjectId>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(flatten)]
    pub extra: Document,
}

/// Wire shape for a room: `_id` rendered as its hex string, extras as
/// plain JSON instead of extended-JSON wrappers.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RoomResponse {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl From<Room> for RoomResponse {
    fn from(room: Room) -> Self {
        RoomResponse {
            id: room._id.map(|oid| oid.to_hex()).unwrap_or_default(),
            email: room.email,
            extra: room
                .extra
                .into_iter()
                .map(|(key, value)| (key, Bson::into_relaxed_extjson(value)))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn client_payload_keeps_unknown_fields() {
        let room: Room = serde_json::from_value(json!({
            "email": "a@x.com",
            "title": "Room A",
            "rent": 450
        }))
        .unwrap();

        assert!(room._id.is_none());
        assert_eq!(room.email.as_deref(), Some("a@x.com"));
        assert_eq!(room.extra.get_str("title").unwrap(), "Room A");
        assert_eq!(room.extra.get_i64("rent").unwrap(), 450);
    }

    #[test]
    fn response_renders_hex_id_and_plain_extras() {
        let oid = ObjectId::new();
        let room: Room = serde_json::from_value(json!({
            "email": "a@x.com",
            "title": "Room A",
            "rent": 450
        }))
        .unwrap();

        let response = RoomResponse::from(Room {
            _id: Some(oid),
            ..room
        });

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["_id"], json!(oid.to_hex()));
        assert_eq!(value["email"], json!("a@x.com"));
        assert_eq!(value["title"], json!("Room A"));
        assert_eq!(value["rent"], json!(450));
    }

    #[test]
    fn storage_form_serializes_under_underscore_id() {
        let oid = ObjectId::new();
        let room = Room {
            _id: Some(oid),
            email: None,
            extra: Document::new(),
        };

        let doc = mongodb::bson::to_document(&room).unwrap();
        assert_eq!(doc.get_object_id("_id").unwrap(), oid);
        assert!(!doc.contains_key("email"));
    }
}
