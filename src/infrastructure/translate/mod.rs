//! Google Translate client - unofficial `translate_a/single` endpoint

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Client;
use serde_json::Value;

use crate::application::errors::TranslationError;
use crate::domain::traits::Translator;

/// Translation endpoint
pub const API_BASE: &str = "https://translate.googleapis.com/translate_a/single";

/// The endpoint is undocumented and turns away clients that do not look
/// like a desktop browser.
const BROWSER_HEADERS: &[(&str, &str)] = &[
    ("user-agent", "Mozilla/5.0 RUC/0.1 (Linux; en)"),
    ("accept-language", "en-US,en;q=0.8,gl;q=0.6,es;q=0.4,pt;q=0.2"),
    ("accept", "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8"),
    ("accept-encoding", "gzip, deflate, sdch, br"),
    ("dnt", "1"),
    ("upgrade-insecure-requests", "1"),
];

/// Google Translate provider
pub struct GoogleTranslator {
    client: Client,
    endpoint: String,
}

impl GoogleTranslator {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            endpoint: API_BASE.to_string(),
        }
    }

    /// Point the client at another endpoint (a local mock server in tests)
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Full request URL. Language codes go in verbatim, only the text is encoded.
    pub fn request_url(&self, text: &str, source_lang: &str, target_lang: &str) -> String {
        format!(
            "{}?client=gtx&sl={}&tl={}&dt=t&q={}",
            self.endpoint,
            source_lang,
            target_lang,
            urlencoding::encode(text)
        )
    }

    fn headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        for &(name, value) in BROWSER_HEADERS {
            headers.insert(HeaderName::from_static(name), HeaderValue::from_static(value));
        }
        headers
    }
}

impl Default for GoogleTranslator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Translator for GoogleTranslator {
    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<String, TranslationError> {
        let url = self.request_url(text, source_lang, target_lang);
        tracing::debug!("Requesting translation {} -> {} ({} chars)", source_lang, target_lang, text.chars().count());

        let response = self.client
            .get(&url)
            .headers(Self::headers())
            .send()
            .await
            .map_err(|e| TranslationError::NetworkFailure(e.to_string()))?;

        if !response.status().is_success() {
            return Err(TranslationError::UpstreamError {
                status: response.status().as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| TranslationError::NetworkFailure(e.to_string()))?;

        decode_response(&body)
    }
}

/// One translated sentence: `[translated, original, ...]`
type Segment = Vec<Value>;

/// Decode the endpoint's nested-list body into plain text.
///
/// The body is a JSON array whose first element is the list of segments (or
/// `null` when there is nothing to translate). Each segment's first element
/// is its translated text; a `null` there is an absent entry and contributes
/// nothing. Segment texts are joined in response order with no separator.
pub fn decode_response(body: &str) -> Result<String, TranslationError> {
    let root: Vec<Value> = serde_json::from_str(body)
        .map_err(|e| TranslationError::DecodeFailure(e.to_string()))?;

    let segments: Option<Vec<Segment>> = match root.into_iter().next() {
        Some(first) => serde_json::from_value(first)
            .map_err(|e| TranslationError::DecodeFailure(format!("segment list: {}", e)))?,
        None => return Err(TranslationError::DecodeFailure("empty response".to_string())),
    };

    let mut result = String::new();
    for (idx, segment) in segments.unwrap_or_default().iter().enumerate() {
        match segment.first() {
            Some(Value::String(text)) => result.push_str(text),
            Some(Value::Null) | None => {}
            Some(other) => {
                return Err(TranslationError::DecodeFailure(format!(
                    "segment {} has non-text translation: {}",
                    idx, other
                )))
            }
        }
    }

    Ok(result)
}
