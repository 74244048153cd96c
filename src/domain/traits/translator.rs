use async_trait::async_trait;
use crate::application::errors::TranslationError;

/// Translation backend
///
/// Language codes are passed through untouched; validating them is the
/// backend's concern.
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<String, TranslationError>;
}
