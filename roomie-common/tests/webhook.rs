use actix_web::{web, App, HttpResponse, HttpServer};
use chrono::Utc;
use roomie_common::webhook::WebhookNotifier;
use roomie_error::webhook::WebhookError;
use roomie_models::{
    entities::prelude::LeadSubmissionModel, enums::common::LeadType, settings::Webhook,
};
use serde_json::Value;
use std::{
    net::SocketAddr,
    sync::{Arc, Mutex},
};

type Received = Arc<Mutex<Vec<Value>>>;

/// Start a local receiver that records bodies and answers with `status`.
fn receiver(status: u16) -> (SocketAddr, Received) {
    let received: Received = Arc::default();
    let data = web::Data::new(Arc::clone(&received));

    let server = HttpServer::new(move || {
        App::new().app_data(data.clone()).route(
            "/hook",
            web::post().to(move |body: web::Json<Value>, seen: web::Data<Received>| async move {
                seen.lock().unwrap().push(body.into_inner());
                HttpResponse::build(actix_web::http::StatusCode::from_u16(status).unwrap())
                    .finish()
            }),
        )
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .unwrap();
    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());
    (addr, received)
}

fn notifier(url: Option<String>) -> WebhookNotifier {
    WebhookNotifier::new(&Webhook {
        url,
        timeout_ms: 2_000,
        lead_types: vec![LeadType::Contact, LeadType::Demo, LeadType::Consultation],
    })
    .unwrap()
}

fn lead(lead_type: LeadType) -> LeadSubmissionModel {
    LeadSubmissionModel {
        id: 7,
        lead_type,
        name: "Olena".into(),
        email: Some("olena@hotel.ua".into()),
        phone: None,
        role: None,
        property: Some("Hotel Dnipro".into()),
        property_size: None,
        comment: None,
        data_processing: true,
        marketing: false,
        language: "uk".into(),
        utm_source: None,
        utm_medium: None,
        utm_campaign: None,
        utm_term: None,
        utm_content: None,
        referrer: None,
        mailchimp_status: "pending".into(),
        created_at: Utc::now(),
    }
}

#[actix_web::test]
async fn delivers_lead_created_event() {
    let (addr, received) = receiver(200);
    let notifier = notifier(Some(format!("http://{addr}/hook")));

    notifier.deliver(&lead(LeadType::Contact)).await.unwrap();

    let bodies = received.lock().unwrap().clone();
    assert_eq!(bodies.len(), 1);
    assert_eq!(bodies[0]["event"], "lead.created");
    assert_eq!(bodies[0]["lead"]["id"], 7);
    assert_eq!(bodies[0]["lead"]["type"], "contact");
    assert_eq!(bodies[0]["lead"]["propertySize"], Value::Null);
    assert_eq!(bodies[0]["lead"]["mailchimpStatus"], "pending");
}

#[actix_web::test]
async fn reports_non_success_status() {
    let (addr, _) = receiver(502);
    let notifier = notifier(Some(format!("http://{addr}/hook")));

    let err = notifier.deliver(&lead(LeadType::Demo)).await.unwrap_err();
    assert!(matches!(err, WebhookError::Status { status: 502, .. }));
}

#[actix_web::test]
async fn notify_runs_in_background_for_listed_types() {
    let (addr, received) = receiver(200);
    let notifier = notifier(Some(format!("http://{addr}/hook")));

    assert!(notifier.notify(&lead(LeadType::Roi)).is_none());
    let handle = notifier.notify(&lead(LeadType::Consultation)).unwrap();
    handle.await.unwrap();

    let bodies = received.lock().unwrap().clone();
    assert_eq!(bodies.len(), 1);
    assert_eq!(bodies[0]["lead"]["type"], "consultation");
}

#[actix_web::test]
async fn unreachable_webhook_is_contained() {
    // nothing listens on port 9 locally
    let notifier = notifier(Some("http://127.0.0.1:9/hook".into()));
    let handle = notifier.notify(&lead(LeadType::Contact)).unwrap();
    // the task logs and finishes instead of panicking
    handle.await.unwrap();
}

#[actix_web::test]
async fn disabled_without_url() {
    let notifier = notifier(Some("   ".into()));
    assert!(!notifier.is_enabled());
    assert!(notifier.notify(&lead(LeadType::Contact)).is_none());
    assert!(matches!(
        notifier.deliver(&lead(LeadType::Contact)).await,
        Err(WebhookError::Disabled)
    ));
}

#[test]
fn default_lead_types_are_contact_demo_and_consultation() {
    let notifier = WebhookNotifier::new(&Webhook {
        url: Some("http://127.0.0.1:9/hook".into()),
        ..Default::default()
    })
    .unwrap();

    assert!(notifier.notifies(LeadType::Contact));
    assert!(notifier.notifies(LeadType::Demo));
    assert!(notifier.notifies(LeadType::Consultation));
    assert!(!notifier.notifies(LeadType::Roi));
    assert!(!notifier.notifies(LeadType::Integration));
}
