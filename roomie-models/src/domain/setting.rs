use crate::{
    entities::site_setting::{ActiveModel, Entity as SiteSettingEntity, Model as SiteSettingModel},
    initializer::SeedableTrait,
};
use sea_orm::{DeriveIntoActiveModel, IntoActiveModel};
use serde::Serialize;

/// Public view of a single setting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettingInfo {
    pub key: String,
    pub value: String,
}

impl From<SiteSettingModel> for SettingInfo {
    fn from(model: SiteSettingModel) -> Self {
        Self {
            key: model.key,
            value: model.value,
        }
    }
}

/// Seed row for the settings table.
#[derive(Clone, Debug, Default, PartialEq, DeriveIntoActiveModel)]
pub struct NewSiteSetting {
    pub key: String,
    pub value: String,
}

impl SeedableTrait for NewSiteSetting {
    type ActiveModel = ActiveModel;
    type Entity = SiteSettingEntity;

    #[inline]
    fn get_active_model(&self) -> Self::ActiveModel {
        self.clone().into_active_model()
    }
}
