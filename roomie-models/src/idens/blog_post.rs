use super::author::Author;
use crate::initializer::{InitContext, TableInitializer};
use roomie_macros::UnseedableInitializer;
use sea_orm::{DatabaseBackend, DeriveIden};
use sea_orm_migration::{prelude::*, schema::pk_auto};

#[derive(DeriveIden, UnseedableInitializer)]
#[unseedable(meta(
    order = super::INIT_BLOG_POST_ORDER,
    create_table = create_blog_post_table,
    create_indexes = create_blog_post_indexes
))]
pub enum BlogPost {
    Table,
    Id,
    Slug,
    TitleEn,
    TitleUk,
    TitleRu,
    TitlePl,
    ContentEn,
    ContentUk,
    ContentRu,
    ContentPl,
    SeoTitleEn,
    SeoTitleUk,
    SeoTitleRu,
    SeoTitlePl,
    SeoDescriptionEn,
    SeoDescriptionUk,
    SeoDescriptionRu,
    SeoDescriptionPl,
    Status,
    AuthorId,
    PublishedAt,
    CreatedAt,
    UpdatedAt,
}

fn create_blog_post_table(_backend: DatabaseBackend) -> TableCreateStatement {
    let mut table = Table::create();
    table
        .table(BlogPost::Table)
        .if_not_exists()
        .col(pk_auto(BlogPost::Id))
        .col(
            ColumnDef::new(BlogPost::Slug)
                .string_len(255)
                .not_null()
                .unique_key()
                .comment("URL slug"),
        )
        .col(ColumnDef::new(BlogPost::TitleEn).string_len(255).not_null())
        .col(ColumnDef::new(BlogPost::ContentEn).text().not_null());

    for col in [BlogPost::TitleUk, BlogPost::TitleRu, BlogPost::TitlePl] {
        table.col(ColumnDef::new(col).string_len(255).null());
    }
    for col in [BlogPost::ContentUk, BlogPost::ContentRu, BlogPost::ContentPl] {
        table.col(ColumnDef::new(col).text().null());
    }
    for col in [
        BlogPost::SeoTitleEn,
        BlogPost::SeoTitleUk,
        BlogPost::SeoTitleRu,
        BlogPost::SeoTitlePl,
        BlogPost::SeoDescriptionEn,
        BlogPost::SeoDescriptionUk,
        BlogPost::SeoDescriptionRu,
        BlogPost::SeoDescriptionPl,
    ] {
        table.col(ColumnDef::new(col).string_len(512).null());
    }

    table
        .col(
            ColumnDef::new(BlogPost::Status)
                .string_len(16)
                .not_null()
                .default("draft")
                .comment("draft | published"),
        )
        .col(ColumnDef::new(BlogPost::AuthorId).integer().not_null())
        .col(ColumnDef::new(BlogPost::PublishedAt).timestamp_with_time_zone())
        .col(
            ColumnDef::new(BlogPost::CreatedAt)
                .timestamp_with_time_zone()
                .default(Expr::current_timestamp()),
        )
        .col(
            ColumnDef::new(BlogPost::UpdatedAt)
                .timestamp_with_time_zone()
                .default(Expr::current_timestamp()),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_blog_post_author_id")
                .from(BlogPost::Table, BlogPost::AuthorId)
                .to(Author::Table, Author::Id)
                .on_delete(ForeignKeyAction::Restrict),
        )
        .to_owned()
}

fn create_blog_post_indexes(_backend: DatabaseBackend) -> Option<Vec<IndexCreateStatement>> {
    Some(vec![Index::create()
        .if_not_exists()
        .name("idx_blog_post_status_published_at")
        .table(BlogPost::Table)
        .col(BlogPost::Status)
        .col(BlogPost::PublishedAt)
        .to_owned()])
}
