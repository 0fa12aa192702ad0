//! Ollama chat API client.
//!
//! Thin blocking HTTP wrapper for `/api/chat`. Response decoding lives in
//! `parse_response` so it can be tested without a server.

use serde::{Deserialize, Serialize};

use erdraft_parser::{GenerateError, TextGenerator};

use crate::config::GeneratorConfig;

const CONNECT_TIMEOUT_SECS: u64 = 10;

/// [`TextGenerator`] that talks to an Ollama server.
pub struct OllamaGenerator {
    http: reqwest::blocking::Client,
    endpoint: String,
    model: String,
}

impl OllamaGenerator {
    /// Build a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::Unavailable`] if the HTTP client cannot be
    /// constructed.
    pub fn new(config: &GeneratorConfig) -> Result<Self, GenerateError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(config.timeout())
            .connect_timeout(std::time::Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(|e| GenerateError::Unavailable(e.to_string()))?;

        Ok(Self {
            http,
            endpoint: format!("{}/api/chat", config.base_url().trim_end_matches('/')),
            model: config.model().to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl TextGenerator for OllamaGenerator {
    fn generate(&self, preamble: &str, text: &str) -> Result<String, GenerateError> {
        let body = ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: preamble,
                },
                ChatMessage {
                    role: "user",
                    content: text,
                },
            ],
            stream: false,
        };

        let response = self
            .http
            .post(&self.endpoint)
            .json(&body)
            .send()
            .map_err(|e| GenerateError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .map_err(|e| GenerateError::Request(e.to_string()))?;

        if !(200..300).contains(&status) {
            return Err(GenerateError::Response { status, body: text });
        }

        parse_response(&text)
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    stream: bool,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: String,
}

fn parse_response(json: &str) -> Result<String, GenerateError> {
    let response: ChatResponse =
        serde_json::from_str(json).map_err(|e| GenerateError::Decode(e.to_string()))?;
    Ok(response.message.content)
}
