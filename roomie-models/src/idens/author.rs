use crate::initializer::{InitContext, TableInitializer};
use roomie_macros::UnseedableInitializer;
use sea_orm::{DatabaseBackend, DeriveIden};
use sea_orm_migration::{prelude::*, schema::pk_auto};

#[derive(DeriveIden, UnseedableInitializer)]
#[unseedable(meta(
    order = super::INIT_AUTHOR_ORDER,
    create_table = create_author_table
))]
pub enum Author {
    Table,
    Id,
    Name,
    Email,
    CreatedAt,
}

fn create_author_table(_backend: DatabaseBackend) -> TableCreateStatement {
    Table::create()
        .table(Author::Table)
        .if_not_exists()
        .col(pk_auto(Author::Id))
        .col(
            ColumnDef::new(Author::Name)
                .string_len(200)
                .not_null()
                .comment("Display name"),
        )
        .col(
            ColumnDef::new(Author::Email)
                .string_len(255)
                .not_null()
                .unique_key()
                .comment("Contact email"),
        )
        .col(
            ColumnDef::new(Author::CreatedAt)
                .timestamp_with_time_zone()
                .not_null()
                .default(Expr::current_timestamp())
                .comment("Created at"),
        )
        .to_owned()
}
