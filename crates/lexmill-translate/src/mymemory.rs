//! MyMemoryTranslator: word lookups against the MyMemory translation API.
//!
//! One GET per word: `/get?q={word}&langpair={src}|{dst}`. The agent
//! carries a global timeout so a hung connection cannot stall the batch;
//! the stage's retry bound is useless against a socket that never answers.

use std::time::Duration;

use serde::Deserialize;

use crate::translator::Translator;

const DEFAULT_BASE_URL: &str = "https://api.mymemory.translated.net";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// ─── API Types ────────────────────────────────────────────────────

#[derive(Deserialize)]
struct ApiResponse {
    #[serde(rename = "responseData")]
    response_data: ResponseData,
    /// Numeric on success, sometimes a string on quota errors.
    #[serde(rename = "responseStatus")]
    response_status: serde_json::Value,
    #[serde(rename = "responseDetails", default)]
    response_details: Option<String>,
}

#[derive(Deserialize)]
struct ResponseData {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

// ─── MyMemoryTranslator ───────────────────────────────────────────

pub struct MyMemoryTranslator {
    agent: ureq::Agent,
    base_url: String,
    source: String,
    target: String,
}

impl MyMemoryTranslator {
    /// Backend translating from `source` to `target` (ISO 639-1 codes,
    /// e.g. "en" → "uk").
    pub fn new(source: &str, target: &str) -> Self {
        let config = ureq::Agent::config_builder()
            .timeout_global(Some(REQUEST_TIMEOUT))
            .build();
        Self {
            agent: config.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            source: source.to_string(),
            target: target.to_string(),
        }
    }

    /// Point the backend at a different endpoint (tests, self-hosted
    /// proxies).
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn language_pair(&self) -> String {
        format!("{}|{}", self.source, self.target)
    }
}

impl Translator for MyMemoryTranslator {
    fn translate(&self, word: &str) -> Result<String, String> {
        let url = format!("{}/get", self.base_url);
        let mut resp = self
            .agent
            .get(&url)
            .query("q", word)
            .query("langpair", &self.language_pair())
            .call()
            .map_err(|e| format!("MyMemory API error: {}", e))?;

        let api: ApiResponse = resp
            .body_mut()
            .read_json()
            .map_err(|e| format!("Bad response from MyMemory: {}", e))?;

        let status = match &api.response_status {
            serde_json::Value::Number(n) => n.as_u64().unwrap_or(0),
            serde_json::Value::String(s) => s.parse().unwrap_or(0),
            _ => 0,
        };
        if status != 200 {
            return Err(format!(
                "MyMemory status {} for '{}': {}",
                status,
                word,
                api.response_details.unwrap_or_default()
            ));
        }

        let text = api.response_data.translated_text.trim().to_string();
        if text.is_empty() {
            return Err(format!("Empty translation for '{}'", word));
        }
        Ok(text)
    }

    fn name(&self) -> &str {
        "mymemory"
    }
}
