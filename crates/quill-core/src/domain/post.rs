use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Author;
use crate::error::DomainError;

/// A comment embedded in a post. Comments have no identity of their own
/// and disappear with their parent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub content: String,
}

/// BlogPost entity. `author_id` references exactly one author; the
/// reference is validated at creation time but not enforced afterwards,
/// so a dangling id is possible only if the cascade delete is bypassed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author_id: Uuid,
    pub comments: Vec<Comment>,
    pub created: DateTime<Utc>,
}

impl BlogPost {
    /// Create a new post with a generated id and the current time.
    pub fn new(title: String, content: String, author_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            content,
            author_id,
            comments: Vec::new(),
            created: Utc::now(),
        }
    }

    /// Comments are ordered and append-only.
    pub fn add_comment(&mut self, content: String) {
        self.comments.push(Comment { content });
    }
}

/// Creation payload with the required fields checked. The author
/// reference is still an unresolved wire string here; turning the draft
/// into a `BlogPost` requires the resolved author record.
#[derive(Debug, Clone)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    pub author_ref: String,
}

impl PostDraft {
    /// Required fields are checked in wire order, first miss wins.
    pub fn new(
        title: Option<String>,
        content: Option<String>,
        author_ref: Option<String>,
    ) -> Result<Self, DomainError> {
        let title = title.ok_or(DomainError::MissingField { field: "title" })?;
        let content = content.ok_or(DomainError::MissingField { field: "content" })?;
        let author_ref = author_ref.ok_or(DomainError::MissingField { field: "author_id" })?;
        Ok(Self {
            title,
            content,
            author_ref,
        })
    }

    /// Bind the draft to its resolved author.
    pub fn into_post(self, author: &Author) -> BlogPost {
        BlogPost::new(self.title, self.content, author.id)
    }
}

/// A post joined with its live author record. The derived display name
/// only exists on this type, so an unresolved post can never reach
/// serialization.
#[derive(Debug, Clone)]
pub struct ResolvedPost {
    post: BlogPost,
    author: Author,
}

impl ResolvedPost {
    /// The author must be the record the post references.
    pub fn new(post: BlogPost, author: Author) -> Result<Self, DomainError> {
        if post.author_id != author.id {
            return Err(DomainError::Internal(format!(
                "author {} is not the author of post {}",
                author.id, post.id
            )));
        }
        Ok(Self { post, author })
    }

    pub fn post(&self) -> &BlogPost {
        &self.post
    }

    pub fn author(&self) -> &Author {
        &self.author
    }

    /// Derived display name, computable only after resolution.
    pub fn full_name(&self) -> String {
        self.author.full_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ada() -> Author {
        Author::new("Ada".into(), "Lovelace".into(), "ada".into())
    }

    #[test]
    fn draft_checks_required_fields_in_order() {
        let err = PostDraft::new(None, None, None).unwrap_err();
        assert_eq!(err.to_string(), "Missing `title` in request body");

        let err = PostDraft::new(Some("Hi".into()), None, Some("x".into())).unwrap_err();
        assert_eq!(err.to_string(), "Missing `content` in request body");

        let err = PostDraft::new(Some("Hi".into()), Some("World".into()), None).unwrap_err();
        assert_eq!(err.to_string(), "Missing `author_id` in request body");
    }

    #[test]
    fn draft_binds_to_the_resolved_author() {
        let author = ada();
        let draft =
            PostDraft::new(Some("Hi".into()), Some("World".into()), Some("ignored".into()))
                .unwrap();
        let post = draft.into_post(&author);
        assert_eq!(post.author_id, author.id);
        assert!(post.comments.is_empty());
    }

    #[test]
    fn resolution_rejects_a_mismatched_author() {
        let author = ada();
        let other = Author::new("Mary".into(), "Shelley".into(), "mary".into());
        let post = BlogPost::new("Hi".into(), "World".into(), author.id);
        assert!(ResolvedPost::new(post, other).is_err());
    }

    #[test]
    fn resolved_post_exposes_the_display_name() {
        let author = ada();
        let post = BlogPost::new("Hi".into(), "World".into(), author.id);
        let resolved = ResolvedPost::new(post, author).unwrap();
        assert_eq!(resolved.full_name(), "Ada Lovelace");
    }

    #[test]
    fn comments_append_in_order() {
        let author = ada();
        let mut post = BlogPost::new("Hi".into(), "World".into(), author.id);
        post.add_comment("first".into());
        post.add_comment("second".into());
        let contents: Vec<&str> = post.comments.iter().map(|c| c.content.as_str()).collect();
        assert_eq!(contents, ["first", "second"]);
    }
}
