//! Key/value site settings, seeded with the feature flags the site reads.

use crate::{
    constants::BLOG_ENABLED_SETTING,
    domain::prelude::NewSiteSetting,
    initializer::{
        DataSeederTrait, InitContext, SeedableInitializerTrait, SeedableTrait, TableInitializer,
    },
};
use roomie_macros::SeedableInitializer;
use sea_orm::{DatabaseBackend, DeriveIden};
use sea_orm_migration::prelude::*;

#[derive(DeriveIden, SeedableInitializer)]
#[seedable(meta(
    model = NewSiteSetting,
    order = super::INIT_SYSTEM_ORDER,
    create_table = create_site_setting_table,
    seed_data = get_site_setting_seed_data
))]
pub enum SiteSetting {
    Table,
    Key,
    Value,
    UpdatedAt,
}

fn create_site_setting_table(_backend: DatabaseBackend) -> TableCreateStatement {
    Table::create()
        .table(SiteSetting::Table)
        .if_not_exists()
        .col(
            ColumnDef::new(SiteSetting::Key)
                .string_len(128)
                .not_null()
                .primary_key()
                .comment("Setting key"),
        )
        .col(
            ColumnDef::new(SiteSetting::Value)
                .text()
                .not_null()
                .comment("Setting value"),
        )
        .col(
            ColumnDef::new(SiteSetting::UpdatedAt)
                .timestamp_with_time_zone()
                .default(Expr::current_timestamp())
                .comment("Updated at"),
        )
        .to_owned()
}

async fn get_site_setting_seed_data(
    _: &mut InitContext,
) -> Result<Option<Vec<NewSiteSetting>>, DbErr> {
    // the blog stays hidden until an editor flips the flag
    Ok(Some(vec![NewSiteSetting {
        key: BLOG_ENABLED_SETTING.into(),
        value: "false".into(),
    }]))
}
