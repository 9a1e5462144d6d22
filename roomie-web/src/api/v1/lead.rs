//! Lead intake endpoints.
//!
//! Every form shares one handler, [`create_lead`], instantiated per schema.
//! The schema type decides the lead type and which fields are required.

use actix_web::web;
use actix_web_validator::Json;
use roomie_common::AppContext;
use roomie_error::WebResult;
use roomie_models::{
    domain::prelude::{
        LeadForm, NewConsultationLead, NewContactLead, NewDemoLead, NewIntegrationLead,
        NewRoiLead,
    },
    entities::prelude::LeadSubmissionModel,
};
use roomie_repository::LeadRepository;
use serde::de::DeserializeOwned;
use tracing::{error, info, instrument};

pub(super) const ROUTER_PREFIX: &str = "/leads";

/// Configure lead routes
///
/// # Routes
/// - POST `/contact`
/// - POST `/demo-request`
/// - POST `/roi`
/// - POST `/consultation`
/// - POST `/integration`
pub(crate) fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/contact", web::post().to(create_lead::<NewContactLead>))
        .route("/demo-request", web::post().to(create_lead::<NewDemoLead>))
        .route("/roi", web::post().to(create_lead::<NewRoiLead>))
        .route(
            "/consultation",
            web::post().to(create_lead::<NewConsultationLead>),
        )
        .route(
            "/integration",
            web::post().to(create_lead::<NewIntegrationLead>),
        );
}

/// Store a validated lead and hand it to the webhook without waiting.
#[instrument(name = "create-lead", skip_all, fields(lead_type = %T::LEAD_TYPE))]
async fn create_lead<T>(
    ctx: web::Data<AppContext>,
    form: Json<T>,
) -> WebResult<web::Json<LeadSubmissionModel>>
where
    T: LeadForm + DeserializeOwned,
{
    let db = ctx.db()?;
    let lead = LeadRepository::create(form.into_inner().into_new_lead(), &db)
        .await
        .inspect_err(|e| error!(error = %e, "Failed to store lead"))?;
    info!(id = lead.id, "Lead stored");

    // detached; delivery failures are logged by the notifier
    let _ = ctx.webhook().notify(&lead);

    Ok(web::Json(lead))
}
