use crate::initializer::{InitContext, TableInitializer};
use roomie_macros::UnseedableInitializer;
use sea_orm::{DatabaseBackend, DeriveIden};
use sea_orm_migration::{prelude::*, schema::pk_auto};

#[derive(DeriveIden, UnseedableInitializer)]
#[unseedable(meta(
    order = super::INIT_CONSENT_ORDER,
    create_table = create_cookie_consent_table,
    create_indexes = create_cookie_consent_indexes
))]
pub enum CookieConsent {
    Table,
    Id,
    ConsentedAt,
    Language,
    Categories,
    IpHash,
    UserAgent,
}

fn create_cookie_consent_table(_backend: DatabaseBackend) -> TableCreateStatement {
    Table::create()
        .table(CookieConsent::Table)
        .if_not_exists()
        .col(pk_auto(CookieConsent::Id))
        .col(
            ColumnDef::new(CookieConsent::ConsentedAt)
                .timestamp_with_time_zone()
                .not_null()
                .default(Expr::current_timestamp())
                .comment("Consent time"),
        )
        .col(
            ColumnDef::new(CookieConsent::Language)
                .string_len(16)
                .not_null()
                .comment("Banner language"),
        )
        .col(
            ColumnDef::new(CookieConsent::Categories)
                .json()
                .not_null()
                .comment("Category opt-ins"),
        )
        .col(
            ColumnDef::new(CookieConsent::IpHash)
                .string_len(64)
                .comment("Salted SHA-256 of the client IP"),
        )
        .col(
            ColumnDef::new(CookieConsent::UserAgent)
                .text()
                .comment("Client user agent"),
        )
        .to_owned()
}

fn create_cookie_consent_indexes(_backend: DatabaseBackend) -> Option<Vec<IndexCreateStatement>> {
    Some(vec![Index::create()
        .if_not_exists()
        .name("idx_cookie_consent_consented_at")
        .table(CookieConsent::Table)
        .col(CookieConsent::ConsentedAt)
        .to_owned()])
}
