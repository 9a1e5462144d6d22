//! Client for an OpenAI-compatible chat-completions endpoint.

pub mod sse;

use bytes::Bytes;
use futures::{stream, Stream, StreamExt};
use reqwest::{Client, Response};
use roomie_error::{llm::LlmError, LlmResult};
use roomie_models::{
    domain::prelude::{ChatMessage, ChatRole},
    settings::Llm,
};
use serde::{Deserialize, Serialize};
use sse::SseDecoder;
use std::time::Duration;
use tracing::{debug, instrument};

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    message: Option<CompletionMessage>,
}

#[derive(Debug, Deserialize)]
struct CompletionMessage {
    content: Option<String>,
}

#[derive(Debug, Clone)]
pub struct LlmClient {
    client: Client,
    config: Llm,
}

impl LlmClient {
    pub fn new(config: &Llm) -> LlmResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;
        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Conversation as sent upstream: the system prompt first, then `messages`.
    fn conversation(&self, messages: Vec<ChatMessage>) -> Vec<ChatMessage> {
        let mut conversation = Vec::with_capacity(messages.len() + 1);
        conversation.push(ChatMessage::new(
            ChatRole::System,
            self.config.system_prompt.as_str(),
        ));
        conversation.extend(messages);
        conversation
    }

    async fn send(&self, messages: Vec<ChatMessage>, stream: bool) -> LlmResult<Response> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .ok_or(LlmError::MissingApiKey)?;

        let body = ChatCompletionRequest {
            model: &self.config.model,
            messages: self.conversation(messages),
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
            stream,
        };

        let response = self
            .client
            .post(self.config.completions_url())
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Upstream {
                status: status.as_u16(),
                body: body.chars().take(500).collect(),
            });
        }
        Ok(response)
    }

    /// One-shot completion of a single user prompt.
    ///
    /// `Ok(None)` means the upstream answered but carried no text.
    #[instrument(name = "llm-complete", skip_all)]
    pub async fn complete(&self, prompt: &str) -> LlmResult<Option<String>> {
        let response = self
            .send(vec![ChatMessage::new(ChatRole::User, prompt)], false)
            .await?;
        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| LlmError::Decode(e.to_string()))?;

        let text = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content);
        debug!(has_text = text.is_some(), "Completion received");
        Ok(text)
    }

    /// Streamed completion of a conversation.
    ///
    /// The outer result fails if the request is rejected before any data
    /// arrives; afterwards each item is a content delta or the error that
    /// ended the stream.
    #[instrument(name = "llm-stream", skip_all, fields(messages = messages.len()))]
    pub async fn stream(
        &self,
        messages: Vec<ChatMessage>,
    ) -> LlmResult<impl Stream<Item = LlmResult<String>> + Send + 'static> {
        let response = self.send(messages, true).await?;
        Ok(decode_stream(response.bytes_stream()))
    }
}

/// Turn an upstream byte stream into content deltas.
pub fn decode_stream<S>(bytes: S) -> impl Stream<Item = LlmResult<String>> + Send + 'static
where
    S: Stream<Item = reqwest::Result<Bytes>> + Send + 'static,
{
    let mut decoder = SseDecoder::new();
    let mut finished = false;

    bytes
        .map(Some)
        .chain(stream::once(async { None }))
        .flat_map(move |chunk| {
            let items = match chunk {
                _ if finished => Vec::new(),
                Some(Ok(bytes)) => decoder.push(&bytes),
                Some(Err(e)) => {
                    finished = true;
                    vec![Err(LlmError::Http(e))]
                }
                None => decoder.finish(),
            };
            stream::iter(items)
        })
        // anything after the first error is noise from a broken stream
        .scan(false, |failed, item| {
            if *failed {
                return futures::future::ready(None);
            }
            *failed = item.is_err();
            futures::future::ready(Some(item))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(api_key: Option<&str>) -> LlmClient {
        LlmClient::new(&Llm {
            api_key: api_key.map(str::to_owned),
            system_prompt: "Be brief.".into(),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn system_prompt_is_prepended() {
        let conversation = client(Some("k")).conversation(vec![
            ChatMessage::new(ChatRole::User, "Hi"),
            ChatMessage::new(ChatRole::Assistant, "Hello"),
        ]);
        assert_eq!(conversation.len(), 3);
        assert_eq!(conversation[0], ChatMessage::new(ChatRole::System, "Be brief."));
        assert_eq!(conversation[2].role, ChatRole::Assistant);
    }

    #[tokio::test]
    async fn missing_api_key_fails_before_any_request() {
        let result = client(None).complete("Hi").await;
        assert!(matches!(result, Err(LlmError::MissingApiKey)));

        let result = client(Some("  ")).stream(vec![]).await;
        assert!(matches!(result, Err(LlmError::MissingApiKey)));
    }

    #[tokio::test]
    async fn decode_stream_handles_chunk_boundaries() {
        let body = "data: {\"choices\":[{\"delta\":{\"content\":\"Hel\"}}]}\n\ndata: {\"choices\":[{\"delta\":{\"content\":\"lo\"}}]}\n\ndata: [DONE]\n\n";
        let (a, b) = body.split_at(30);
        let chunks = vec![
            Ok(Bytes::from(a.to_owned())),
            Ok(Bytes::from(b.to_owned())),
        ];
        let deltas: Vec<String> = decode_stream(stream::iter(chunks))
            .map(|d| d.unwrap())
            .collect()
            .await;
        assert_eq!(deltas, vec!["Hel", "lo"]);
    }

    #[tokio::test]
    async fn decode_stream_stops_at_the_first_error() {
        let chunks = vec![
            Ok(Bytes::from_static(
                b"data: {\"choices\":[{\"delta\":{\"content\":\"A\"}}]}\n\n",
            )),
            Ok(Bytes::from_static(b"data: {not json\n\n")),
            Ok(Bytes::from_static(
                b"data: {\"choices\":[{\"delta\":{\"content\":\"B\"}}]}\n\ndata: [DONE]\n\n",
            )),
        ];
        let items: Vec<LlmResult<String>> = decode_stream(stream::iter(chunks)).collect().await;

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].as_ref().unwrap(), "A");
        assert!(matches!(items[1], Err(LlmError::Decode(_))));
    }
}
