mod common;

use actix_web::{http::StatusCode, test, App};
use common::{context, fake_llm, raw_sse_llm};
use roomie_common::AppContext;
use serde_json::{json, Value};
use std::sync::Arc;

async fn llm_context(base_url: String, api_key: Option<&str>) -> Arc<AppContext> {
    let api_key = api_key.map(str::to_owned);
    context(move |inner| {
        inner.llm.base_url = base_url;
        inner.llm.api_key = api_key;
    })
    .await
}

#[actix_web::test]
async fn openai_returns_the_completion_text() {
    let ctx = llm_context(fake_llm(200, Some("Roomie can help.")), Some("sk-test")).await;
    let app = test::init_service(App::new().configure(roomie_web::configure(ctx))).await;

    let req = test::TestRequest::post()
        .uri("/api/openai")
        .set_json(json!({ "prompt": "What does Roomie do?" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "text": "Roomie can help." }));
}

#[actix_web::test]
async fn openai_falls_back_when_content_is_missing() {
    let ctx = llm_context(fake_llm(200, None), Some("sk-test")).await;
    let app = test::init_service(App::new().configure(roomie_web::configure(ctx))).await;

    let req = test::TestRequest::post()
        .uri("/api/openai")
        .set_json(json!({ "prompt": "Hello" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["text"], "Sorry, I could not generate a response.");
}

#[actix_web::test]
async fn openai_failures_are_generic_500s() {
    for (base_url, api_key) in [
        (fake_llm(502, None), Some("sk-test")),
        (fake_llm(200, Some("unused")), None),
    ] {
        let ctx = llm_context(base_url, api_key).await;
        let app = test::init_service(App::new().configure(roomie_web::configure(ctx))).await;

        let req = test::TestRequest::post()
            .uri("/api/openai")
            .set_json(json!({ "prompt": "Hello" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "error": "Failed to generate response" }));
    }
}

#[actix_web::test]
async fn openai_rejects_blank_prompts() {
    let ctx = llm_context(fake_llm(200, Some("unused")), Some("sk-test")).await;
    let app = test::init_service(App::new().configure(roomie_web::configure(ctx))).await;

    let req = test::TestRequest::post()
        .uri("/api/openai")
        .set_json(json!({ "prompt": "   " }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["details"][0]["field"], "prompt");
}

#[actix_web::test]
async fn chat_streams_plain_text() {
    let ctx = llm_context(fake_llm(200, Some("Hi from Roomie")), Some("sk-test")).await;
    let app = test::init_service(App::new().configure(roomie_web::configure(ctx))).await;

    let req = test::TestRequest::post()
        .uri("/api/chat")
        .set_json(json!({
            "messages": [
                { "role": "user", "content": "Hello" },
                { "role": "assistant", "content": "Hi!" },
                { "role": "user", "content": "Who are you?" }
            ]
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok()),
        Some("text/plain; charset=utf-8")
    );
    assert_eq!(test::read_body(resp).await, "Hi from Roomie");
}

#[actix_web::test]
async fn chat_upstream_failure_before_streaming_is_a_500() {
    let ctx = llm_context(fake_llm(500, None), Some("sk-test")).await;
    let app = test::init_service(App::new().configure(roomie_web::configure(ctx))).await;

    let req = test::TestRequest::post()
        .uri("/api/chat")
        .set_json(json!({ "messages": [{ "role": "user", "content": "Hello" }] }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "error": "Failed to process chat" }));
}

#[actix_web::test]
async fn chat_rejects_unknown_roles_and_empty_history() {
    let ctx = llm_context(fake_llm(200, Some("unused")), Some("sk-test")).await;
    let app = test::init_service(App::new().configure(roomie_web::configure(ctx))).await;

    for payload in [
        json!({ "messages": [] }),
        json!({ "messages": [{ "role": "tool", "content": "x" }] }),
    ] {
        let req = test::TestRequest::post()
            .uri("/api/chat")
            .set_json(payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}

#[actix_web::test]
async fn chat_body_ends_at_a_broken_frame() {
    let upstream = raw_sse_llm(concat!(
        "data: {\"choices\":[{\"delta\":{\"content\":\"Hello\"}}]}\n\n",
        "data: {broken\n\n",
        "data: {\"choices\":[{\"delta\":{\"content\":\" lost\"}}]}\n\n",
        "data: [DONE]\n\n",
    ));
    let ctx = llm_context(upstream, Some("sk-test")).await;
    let app = test::init_service(App::new().configure(roomie_web::configure(ctx))).await;

    let req = test::TestRequest::post()
        .uri("/api/chat")
        .set_json(json!({ "messages": [{ "role": "user", "content": "Hello" }] }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(test::read_body(resp).await, "Hello");
}
