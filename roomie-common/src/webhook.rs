//! Outbound lead notifications.
//!
//! Deliveries are detached tasks: the lead is already stored when they start,
//! and their outcome is only logged.

use reqwest::Client;
use roomie_error::{webhook::WebhookError, RMResult};
use roomie_models::{
    entities::prelude::LeadSubmissionModel, enums::common::LeadType, settings::Webhook,
};
use serde::Serialize;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

pub const LEAD_CREATED_EVENT: &str = "lead.created";

#[derive(Debug, Serialize)]
struct LeadEvent<'a> {
    event: &'static str,
    lead: &'a LeadSubmissionModel,
}

#[derive(Debug, Clone)]
pub struct WebhookNotifier {
    client: Client,
    url: Option<String>,
    lead_types: Vec<LeadType>,
}

impl WebhookNotifier {
    pub fn new(config: &Webhook) -> RMResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(WebhookError::from)?;

        let url = config
            .url
            .as_deref()
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .map(str::to_owned);

        Ok(Self {
            client,
            url,
            lead_types: config.lead_types.clone(),
        })
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.url.is_some()
    }

    /// Whether a lead of this type would be sent.
    #[inline]
    pub fn notifies(&self, lead_type: LeadType) -> bool {
        self.is_enabled() && self.lead_types.contains(&lead_type)
    }

    /// Schedule delivery in the background.
    ///
    /// Returns the task handle when a delivery was scheduled; callers are free
    /// to drop it.
    pub fn notify(&self, lead: &LeadSubmissionModel) -> Option<JoinHandle<()>> {
        if !self.notifies(lead.lead_type) {
            return None;
        }

        let notifier = self.clone();
        let lead = lead.clone();
        Some(tokio::spawn(async move {
            if let Err(e) = notifier.deliver(&lead).await {
                warn!(lead_id = lead.id, lead_type = %lead.lead_type, error = %e, "Lead webhook failed");
            }
        }))
    }

    /// POST one `lead.created` event and wait for the answer.
    pub async fn deliver(&self, lead: &LeadSubmissionModel) -> Result<(), WebhookError> {
        let url = self.url.as_deref().ok_or(WebhookError::Disabled)?;

        let response = self
            .client
            .post(url)
            .json(&LeadEvent {
                event: LEAD_CREATED_EVENT,
                lead,
            })
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            debug!(lead_id = lead.id, status = %status, "Lead webhook delivered");
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(WebhookError::Status {
                status: status.as_u16(),
                body: body.chars().take(200).collect(),
            })
        }
    }
}
