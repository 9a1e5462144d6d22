//! `SeaORM` Entity for recorded cookie-banner choices.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cookie_consent")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub consented_at: DateTimeUtc,
    pub language: String,
    /// Category opt-ins exactly as the banner sent them
    #[sea_orm(column_type = "Json")]
    pub categories: Json,
    /// Salted SHA-256 of the client IP; the raw address is never stored
    pub ip_hash: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub user_agent: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
