//! Incremental decoder for the chat-completion event stream.
//!
//! The upstream sends `data: {json}` lines separated by blank lines and ends
//! with `data: [DONE]`. Network chunks can cut anywhere, including inside a
//! multi-byte character, so input is buffered as bytes until a full line is
//! available.

use roomie_error::{llm::LlmError, LlmResult};
use serde::Deserialize;

const DONE_MARKER: &str = "[DONE]";

#[derive(Debug, Deserialize)]
struct ChunkPayload {
    #[serde(default)]
    choices: Vec<ChunkChoice>,
}

#[derive(Debug, Deserialize)]
struct ChunkChoice {
    #[serde(default)]
    delta: Delta,
}

#[derive(Debug, Default, Deserialize)]
struct Delta {
    content: Option<String>,
}

#[derive(Debug, Default)]
pub struct SseDecoder {
    buffer: Vec<u8>,
    done: bool,
}

impl SseDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` once `[DONE]` has been seen; later input is ignored.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Feed one network chunk and collect the content deltas it completes.
    pub fn push(&mut self, chunk: &[u8]) -> Vec<LlmResult<String>> {
        if self.done {
            return Vec::new();
        }
        self.buffer.extend_from_slice(chunk);

        let mut deltas = Vec::new();
        while let Some(pos) = self.buffer.iter().position(|b| *b == b'\n') {
            let line: Vec<u8> = self.buffer.drain(..=pos).collect();
            if let Some(delta) = self.decode_line(&line[..line.len() - 1]) {
                deltas.push(delta);
            }
            if self.done {
                self.buffer.clear();
                break;
            }
        }
        deltas
    }

    /// Flush a trailing line the upstream did not terminate.
    pub fn finish(&mut self) -> Vec<LlmResult<String>> {
        let line = std::mem::take(&mut self.buffer);
        if self.done || line.is_empty() {
            return Vec::new();
        }
        self.decode_line(&line).into_iter().collect()
    }

    fn decode_line(&mut self, line: &[u8]) -> Option<LlmResult<String>> {
        let line = match std::str::from_utf8(line) {
            Ok(line) => line.trim_end_matches('\r'),
            Err(e) => return Some(Err(LlmError::Decode(e.to_string()))),
        };

        // blank separators, `:` keep-alives and `event:`/`id:` fields carry no text
        let data = line.strip_prefix("data:")?.trim_start();
        if data == DONE_MARKER {
            self.done = true;
            return None;
        }
        if data.is_empty() {
            return None;
        }

        match serde_json::from_str::<ChunkPayload>(data) {
            Ok(payload) => payload
                .choices
                .into_iter()
                .next()
                .and_then(|choice| choice.delta.content)
                .filter(|content| !content.is_empty())
                .map(Ok),
            Err(e) => Some(Err(LlmError::Decode(e.to_string()))),
        }
    }
}
