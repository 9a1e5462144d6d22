//! Site assistant endpoints backed by the upstream chat-completion API.

use actix_web::{web, HttpResponse};
use actix_web_validator::Json;
use futures::{future, StreamExt};
use roomie_common::AppContext;
use roomie_error::{web::WebError, WebResult};
use roomie_models::{
    constants::LLM_FALLBACK_TEXT,
    domain::prelude::{ChatRequest, PromptRequest, PromptResponse},
};
use tracing::{error, instrument, warn};

/// Configure LLM routes
///
/// # Routes
/// - POST `/openai`: One-shot completion
/// - POST `/chat`: Streamed conversation as plain text
pub(crate) fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/openai", web::post().to(complete))
        .route("/chat", web::post().to(chat));
}

#[instrument(name = "api-openai", skip_all)]
async fn complete(
    ctx: web::Data<AppContext>,
    request: Json<PromptRequest>,
) -> WebResult<web::Json<PromptResponse>> {
    let text = ctx
        .llm()
        .complete(&request.prompt)
        .await
        .map_err(|e| {
            error!(error = %e, "LLM completion failed");
            WebError::Upstream("Failed to generate response", e)
        })?
        .unwrap_or_else(|| LLM_FALLBACK_TEXT.to_string());

    Ok(web::Json(PromptResponse { text }))
}

/// Relay content deltas as they arrive. Once the status line is sent, an
/// upstream failure can only end the body early.
#[instrument(name = "api-chat", skip_all)]
async fn chat(ctx: web::Data<AppContext>, request: Json<ChatRequest>) -> WebResult<HttpResponse> {
    let deltas = ctx
        .llm()
        .stream(request.into_inner().messages)
        .await
        .map_err(|e| {
            error!(error = %e, "LLM chat request failed");
            WebError::Upstream("Failed to process chat", e)
        })?;

    let body = deltas.filter_map(|delta| {
        future::ready(match delta {
            Ok(text) => Some(Ok::<_, actix_web::Error>(web::Bytes::from(text))),
            Err(e) => {
                warn!(error = %e, "LLM chat stream ended early");
                None
            }
        })
    });

    Ok(HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .streaming(body))
}
