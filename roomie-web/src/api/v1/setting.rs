use actix_web::web;
use roomie_common::AppContext;
use roomie_error::{web::WebError, WebResult};
use roomie_models::domain::prelude::SettingInfo;
use roomie_repository::SiteSettingRepository;
use tracing::error;

pub(super) const ROUTER_PREFIX: &str = "/settings";

/// Configure site setting routes
///
/// # Routes
/// - GET `/{key}`: Read one public setting
pub(crate) fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/{key}", web::get().to(get_setting));
}

async fn get_setting(
    ctx: web::Data<AppContext>,
    key: web::Path<String>,
) -> WebResult<web::Json<SettingInfo>> {
    let db = ctx.db()?;
    SiteSettingRepository::find_by_key(&key, &db)
        .await
        .inspect_err(|e| error!(error = %e, "Failed to read site setting"))?
        .map(|setting| web::Json(SettingInfo::from(setting)))
        .ok_or_else(|| WebError::NotFound(format!("setting {key}")))
}
