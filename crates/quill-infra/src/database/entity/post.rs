//! BlogPost entity for SeaORM.
//!
//! Comments are embedded documents, stored as a JSONB column rather than
//! a table of their own - they have no identity outside their post.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "blog_posts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub author_id: Uuid,
    #[sea_orm(column_type = "JsonBinary")]
    pub comments: Json,
    pub created: DateTimeWithTimeZone,
}

// The author reference is a plain column, not a schema-level foreign
// key; consistency comes from the application cascade. The relation
// below only serves joins.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::author::Entity",
        from = "Column::AuthorId",
        to = "super::author::Column::Id"
    )]
    Author,
}

impl Related<super::author::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Author.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for quill_core::domain::BlogPost {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            content: model.content,
            author_id: model.author_id,
            comments: serde_json::from_value(model.comments).unwrap_or_default(),
            created: model.created.into(),
        }
    }
}

impl From<quill_core::domain::BlogPost> for ActiveModel {
    fn from(post: quill_core::domain::BlogPost) -> Self {
        let comments =
            serde_json::to_value(&post.comments).unwrap_or_else(|_| Json::Array(Vec::new()));
        Self {
            id: Set(post.id),
            title: Set(post.title),
            content: Set(post.content),
            author_id: Set(post.author_id),
            comments: Set(comments),
            created: Set(post.created.into()),
        }
    }
}
