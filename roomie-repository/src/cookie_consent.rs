use roomie_error::StorageResult;
use roomie_models::{
    domain::prelude::NewCookieConsentRecord,
    entities::prelude::{CookieConsent, CookieConsentModel},
};
use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, IntoActiveModel};
use tracing::instrument;

pub struct CookieConsentRepository;

impl CookieConsentRepository {
    #[instrument(name = "cookie-consent-create", skip_all)]
    pub async fn create<C>(
        consent: NewCookieConsentRecord,
        db: &C,
    ) -> StorageResult<CookieConsentModel>
    where
        C: ConnectionTrait,
    {
        Ok(consent.into_active_model().insert(db).await?)
    }

    pub async fn find_by_id<C>(id: i32, db: &C) -> StorageResult<Option<CookieConsentModel>>
    where
        C: ConnectionTrait,
    {
        Ok(CookieConsent::find_by_id(id).one(db).await?)
    }
}
