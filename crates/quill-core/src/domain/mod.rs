//! Domain entities - the core content objects.

mod author;

mod post;

pub use author::Author;
pub use post::{BlogPost, Comment, PostDraft, ResolvedPost};
