//! Data Transfer Objects - request and response types for the API.
//!
//! Author fields are camelCase on the wire for compatibility with
//! existing clients; post creation keeps the `author_id` spelling for
//! the same reason. Request fields are all optional so the server can
//! distinguish "absent" from "set to empty" and report the first
//! missing required field itself. Unknown body fields deserialize into
//! nothing and are thereby silently ignored.

use serde::{Deserialize, Serialize};

/// Request to create an author.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAuthorRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub user_name: Option<String>,
}

/// Request to update an author. The body id must match the path id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAuthorRequest {
    pub id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub user_name: Option<String>,
}

/// Request to create a blogpost.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author_id: Option<String>,
}

/// Request to update a blogpost. There is intentionally no author
/// field: the reference is not client-updatable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    pub id: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
}

/// An author's public representation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorView {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub user_name: String,
}

/// A blogpost's public representation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostView {
    pub id: String,
    pub title: String,
    pub content: String,
    /// The author's display name, not their id.
    pub author: String,
    /// Epoch milliseconds as a decimal string, not an ISO date.
    pub created: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorListResponse {
    pub authors: Vec<AuthorView>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostListResponse {
    pub blogposts: Vec<PostView>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn author_fields_are_camel_case_on_the_wire() {
        let view = AuthorView {
            id: "1".into(),
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            user_name: "ada".into(),
        };
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["firstName"], "Ada");
        assert_eq!(json["lastName"], "Lovelace");
        assert_eq!(json["userName"], "ada");
    }

    #[test]
    fn update_requests_drop_unknown_fields() {
        let body = r#"{"id":"1","title":"X","author":"evil-id","extra":42}"#;
        let req: UpdatePostRequest = serde_json::from_str(body).unwrap();
        assert_eq!(req.title.as_deref(), Some("X"));
        assert!(req.content.is_none());
    }

    #[test]
    fn absent_and_empty_fields_are_distinct() {
        let req: CreateAuthorRequest =
            serde_json::from_str(r#"{"firstName":""}"#).unwrap();
        assert_eq!(req.first_name.as_deref(), Some(""));
        assert!(req.last_name.is_none());
    }

    #[test]
    fn post_view_round_trips() {
        let view = PostView {
            id: "p1".into(),
            title: "Hi".into(),
            content: "World".into(),
            author: "Ada Lovelace".into(),
            created: "1532218553723".into(),
        };
        let json = serde_json::to_string(&view).unwrap();
        let back: PostView = serde_json::from_str(&json).unwrap();
        assert_eq!(back.title, view.title);
        assert_eq!(back.content, view.content);
        assert_eq!(back.created.parse::<i64>().unwrap(), 1532218553723);
    }
}
