#![allow(dead_code)]

use actix_web::{http::StatusCode, web, App, HttpResponse, HttpServer};
use roomie_common::AppContext;
use roomie_models::{
    settings::{Db, Inner, Settings},
    DbManager,
};
use roomie_storage::SiteDbManager;
use serde_json::{json, Value};
use std::{
    net::SocketAddr,
    sync::{Arc, Mutex},
    time::Duration,
};

pub type Received = Arc<Mutex<Vec<Value>>>;

/// Fresh in-memory database plus whatever `customize` changes in the config.
pub async fn context(customize: impl FnOnce(&mut Inner)) -> Arc<AppContext> {
    let mut inner = Inner {
        db: Db {
            url: "sqlite::memory:".into(),
            max_connections: 1,
            ..Default::default()
        },
        ..Default::default()
    };
    customize(&mut inner);

    let settings = Settings::from_inner(inner);
    let db_manager = SiteDbManager::init(&settings).await.unwrap();
    Arc::new(AppContext::new(settings, db_manager).unwrap())
}

/// Local webhook endpoint that records bodies and answers with `status`.
pub fn webhook_receiver(status: u16) -> (String, Received) {
    let received: Received = Arc::default();
    let data = web::Data::new(Arc::clone(&received));

    let server = HttpServer::new(move || {
        App::new().app_data(data.clone()).route(
            "/hook",
            web::post().to(move |body: web::Json<Value>, seen: web::Data<Received>| async move {
                seen.lock().unwrap().push(body.into_inner());
                HttpResponse::build(StatusCode::from_u16(status).unwrap()).finish()
            }),
        )
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .unwrap();
    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());
    (format!("http://{addr}/hook"), received)
}

/// Poll until `received` holds at least `count` bodies or a second passes.
pub async fn wait_for(received: &Received, count: usize) -> Vec<Value> {
    for _ in 0..50 {
        if received.lock().unwrap().len() >= count {
            break;
        }
        actix_web::rt::time::sleep(Duration::from_millis(20)).await;
    }
    received.lock().unwrap().clone()
}

/// Chat-completions stand-in. Non-2xx `status` fails every request; otherwise
/// `content` is returned whole, or one SSE event per character when streaming.
pub fn fake_llm(status: u16, content: Option<&'static str>) -> String {
    let server = HttpServer::new(move || {
        App::new().route(
            "/v1/chat/completions",
            web::post().to(move |body: web::Json<Value>| async move {
                let code = StatusCode::from_u16(status).unwrap();
                if !code.is_success() {
                    return HttpResponse::build(code).body("upstream exploded");
                }
                if body["stream"] == json!(true) {
                    let mut sse: String = content
                        .unwrap_or_default()
                        .chars()
                        .map(|ch| {
                            let event = json!({ "choices": [{ "delta": { "content": ch.to_string() } }] });
                            format!("data: {event}\n\n")
                        })
                        .collect();
                    sse.push_str("data: [DONE]\n\n");
                    HttpResponse::Ok().content_type("text/event-stream").body(sse)
                } else {
                    HttpResponse::Ok().json(json!({
                        "choices": [{ "message": { "role": "assistant", "content": content } }]
                    }))
                }
            }),
        )
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .unwrap();
    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());
    format!("http://{addr}/v1")
}

/// Streaming-only stand-in that answers every request with the raw `sse` body.
pub fn raw_sse_llm(sse: &'static str) -> String {
    let server = HttpServer::new(move || {
        App::new().route(
            "/v1/chat/completions",
            web::post().to(move || async move {
                HttpResponse::Ok().content_type("text/event-stream").body(sse)
            }),
        )
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .unwrap();
    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());
    format!("http://{addr}/v1")
}
