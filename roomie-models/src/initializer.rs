use crate::idens;
use async_trait::async_trait;
use sea_orm::{
    sea_query::{IndexCreateStatement, TableCreateStatement, TableDropStatement},
    ActiveModelTrait, DatabaseBackend, DatabaseTransaction, DbErr, EntityTrait,
};
use std::{any::Any, collections::HashMap};

/// One table of the site schema: DDL plus optional seed rows.
#[async_trait]
pub trait TableInitializer: Send + Sync {
    fn order(&self) -> i32;

    fn name(&self) -> &str;

    fn has_update_col(&self) -> bool;

    fn to_create_table_stmt(&self, backend: DatabaseBackend) -> TableCreateStatement;

    fn to_drop_table_stmt(&self, backend: DatabaseBackend) -> TableDropStatement;

    fn to_create_indexes_stmt(&self, backend: DatabaseBackend)
        -> Option<Vec<IndexCreateStatement>>;

    async fn seeding_data(
        &self,
        transaction: &DatabaseTransaction,
        ctx: &mut InitContext,
    ) -> Result<(), DbErr>;
}

/// Trait for types that can be seeded into the database
pub trait SeedableTrait: Send + Sync + 'static {
    type ActiveModel: ActiveModelTrait<Entity = Self::Entity>;
    type Entity: EntityTrait;

    fn get_active_model(&self) -> Self::ActiveModel;
}

#[async_trait]
pub trait DataSeederTrait<T: SeedableTrait + Clone> {
    async fn get_seed_data(&self, ctx: &mut InitContext) -> Result<Option<Vec<T>>, DbErr>;
}

#[async_trait]
pub trait SeedableInitializerTrait<T: SeedableTrait + Clone>:
    TableInitializer + DataSeederTrait<T>
{
    async fn seed_data(
        &self,
        transaction: &DatabaseTransaction,
        ctx: &mut InitContext,
    ) -> Result<(), DbErr> {
        if let Some(seed_data) = self.get_seed_data(ctx).await? {
            // an empty insert_many is an error in sea-orm
            if seed_data.is_empty() {
                return Ok(());
            }

            let active_models: Vec<T::ActiveModel> =
                seed_data.iter().map(|d| d.get_active_model()).collect();

            T::Entity::insert_many(active_models)
                .exec(transaction)
                .await?;

            ctx.set(self.name(), seed_data);
        }
        Ok(())
    }
}

/// All tables, sorted so that referenced tables are created first.
pub fn initializers() -> Vec<Box<dyn TableInitializer>> {
    let mut initializers: Vec<Box<dyn TableInitializer>> = vec![
        Box::new(idens::site_setting::SiteSetting::Table),
        Box::new(idens::blog_post::BlogPost::Table),
        Box::new(idens::author::Author::Table),
        Box::new(idens::lead_submission::LeadSubmission::Table),
        Box::new(idens::cookie_consent::CookieConsent::Table),
    ];

    initializers.sort_by_key(|init| init.order());
    initializers
}

/// Rows seeded so far, keyed by table name, so later seeders can refer to them.
#[derive(Default)]
pub struct InitContext {
    data: HashMap<String, Vec<Box<dyn Any + Send + Sync>>>,
}

impl InitContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set<T: 'static + Send + Sync>(&mut self, key: &str, values: Vec<T>) {
        let boxed_values: Vec<Box<dyn Any + Send + Sync>> = values
            .into_iter()
            .map(|v| Box::new(v) as Box<dyn Any + Send + Sync>)
            .collect();
        self.data.insert(key.into(), boxed_values);
    }

    /// Rows stored under `key`, or `None` when the key is absent or holds another type.
    pub fn get<T: 'static>(&self, key: &str) -> Option<Vec<&T>> {
        self.data
            .get(key)?
            .iter()
            .map(|value| value.downcast_ref::<T>())
            .collect()
    }
}
