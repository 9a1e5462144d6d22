use crate::middleware::ClientMeta;
use actix_web::web;
use actix_web_validator::Json;
use roomie_common::AppContext;
use roomie_error::WebResult;
use roomie_models::domain::prelude::NewCookieConsent;
use roomie_repository::CookieConsentRepository;
use roomie_utils::hash::hash_ip;
use serde_json::{json, Value};
use tracing::{error, instrument};

pub(super) const ROUTER_PREFIX: &str = "/cookie-consents";

/// Configure cookie consent routes
///
/// # Routes
/// - POST ``: Record one consent decision
pub(crate) fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::post().to(create_consent));
}

/// Record a consent banner decision. The raw client IP is never stored.
#[instrument(name = "create-cookie-consent", skip_all)]
async fn create_consent(
    ctx: web::Data<AppContext>,
    client: ClientMeta,
    consent: Json<NewCookieConsent>,
) -> WebResult<web::Json<Value>> {
    let salt = &ctx.settings().consent.ip_salt;
    let ip_hash = client.ip.as_deref().map(|ip| hash_ip(salt, ip));
    let record = consent.into_inner().into_record(ip_hash, client.user_agent);

    let db = ctx.db()?;
    CookieConsentRepository::create(record, &db)
        .await
        .inspect_err(|e| error!(error = %e, "Failed to store cookie consent"))?;

    Ok(web::Json(json!({ "success": true })))
}
