//! Published-post queries for the public blog.
//!
//! Drafts never leave this module: every query filters on
//! `status = published`.

use roomie_error::StorageResult;
use roomie_models::{
    entities::prelude::{Author, AuthorModel, BlogPost, BlogPostColumn, BlogPostModel},
    enums::common::PostStatus,
};
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};

pub struct BlogPostRepository;

impl BlogPostRepository {
    /// Published posts with their authors, newest first.
    pub async fn find_published<C>(
        db: &C,
    ) -> StorageResult<Vec<(BlogPostModel, Option<AuthorModel>)>>
    where
        C: ConnectionTrait,
    {
        Ok(BlogPost::find()
            .find_also_related(Author)
            .filter(BlogPostColumn::Status.eq(PostStatus::Published))
            .order_by_desc(BlogPostColumn::PublishedAt)
            .order_by_desc(BlogPostColumn::Id)
            .all(db)
            .await?)
    }

    pub async fn find_published_by_slug<C>(
        slug: &str,
        db: &C,
    ) -> StorageResult<Option<(BlogPostModel, Option<AuthorModel>)>>
    where
        C: ConnectionTrait,
    {
        Ok(BlogPost::find()
            .find_also_related(Author)
            .filter(BlogPostColumn::Slug.eq(slug))
            .filter(BlogPostColumn::Status.eq(PostStatus::Published))
            .one(db)
            .await?)
    }
}
