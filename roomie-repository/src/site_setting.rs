use roomie_error::StorageResult;
use roomie_models::entities::prelude::{SiteSetting, SiteSettingModel};
use sea_orm::{ConnectionTrait, EntityTrait};

/// Read-only access to site settings; editors change them out of band.
pub struct SiteSettingRepository;

impl SiteSettingRepository {
    pub async fn find_by_key<C>(key: &str, db: &C) -> StorageResult<Option<SiteSettingModel>>
    where
        C: ConnectionTrait,
    {
        Ok(SiteSetting::find_by_id(key.to_owned()).one(db).await?)
    }

    /// `true` only when the setting exists and holds `"true"` (case-insensitive).
    pub async fn is_enabled<C>(key: &str, db: &C) -> StorageResult<bool>
    where
        C: ConnectionTrait,
    {
        Ok(Self::find_by_key(key, db)
            .await?
            .is_some_and(|s| s.value.trim().eq_ignore_ascii_case("true")))
    }
}
