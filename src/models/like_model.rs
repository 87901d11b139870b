use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A like relation: its mere existence in the `likes` collection means
/// `userId` currently likes `postId`. Never updated in place, only
/// inserted and deleted by the toggle.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Like {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub _id: Option<ObjectId>,

    #[serde(rename = "postId")]
    pub post_id: String,

    #[serde(rename = "userId")]
    pub user_id: String,
}

/// Toggle body. Both fields are required, but deserialization stays
/// permissive so the handler can answer 400 itself instead of letting
/// the extractor reject the request.
#[derive(Debug, Deserialize)]
pub struct ToggleRequest {
    #[serde(rename = "postId")]
    pub post_id: Option<String>,

    #[serde(rename = "userId")]
    pub user_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ToggleResponse {
    pub liked: bool,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    #[serde(rename = "likeCount")]
    pub like_count: u64,
    pub liked: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn like_uses_camel_case_field_names() {
        let like = Like {
            _id: None,
            post_id: "p1".to_string(),
            user_id: "u1".to_string(),
        };

        let doc = mongodb::bson::to_document(&like).unwrap();
        assert_eq!(doc.get_str("postId").unwrap(), "p1");
        assert_eq!(doc.get_str("userId").unwrap(), "u1");
        assert!(!doc.contains_key("_id"));
    }

    #[test]
    fn toggle_request_tolerates_missing_fields() {
        let req: ToggleRequest = serde_json::from_value(json!({ "postId": "p1" })).unwrap();
        assert_eq!(req.post_id.as_deref(), Some("p1"));
        assert!(req.user_id.is_none());
    }

    #[test]
    fn status_response_uses_like_count_key() {
        let value = serde_json::to_value(StatusResponse {
            like_count: 3,
            liked: true,
        })
        .unwrap();

        assert_eq!(value, json!({ "likeCount": 3, "liked": true }));
    }
}
