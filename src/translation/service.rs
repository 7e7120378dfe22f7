/*!
 * Provider-backed translation service.
 *
 * `TranslationService` owns one configured provider client and turns a text
 * fragment into its translation. The `TextTranslator` trait is the
 * substitution seam: the pipeline and the controller only ever see the
 * trait, so tests can swap in stub translators without any HTTP.
 */

use anyhow::{anyhow, Result};
use async_trait::async_trait;

use crate::app_config::{Config, TranslationConfig, TranslationProvider};
use crate::providers::anthropic::{Anthropic, AnthropicRequest};
use crate::providers::ollama::{Ollama, GenerationRequest};
use crate::providers::openai::{OpenAI, OpenAIRequest};

/// A thing that can translate one piece of text.
///
/// The call either returns the raw translated text or fails; degradation to
/// the original text is the caller's concern, not the translator's.
#[async_trait]
pub trait TextTranslator: Send + Sync {
    /// Translate one text fragment into the configured target language
    async fn translate_text(&self, text: &str) -> Result<String>;
}

/// Translation provider implementation variants
enum ProviderClient {
    /// Ollama LLM service
    Ollama(Ollama),
    /// OpenAI API service
    OpenAI(OpenAI),
    /// Anthropic API service
    Anthropic(Anthropic),
}

/// Main translation service for document publishing
pub struct TranslationService {
    /// Provider implementation
    provider: ProviderClient,

    /// Configuration for the translation service
    config: TranslationConfig,

    /// English name of the source language, used in prompts
    source_language: String,

    /// English name of the target language, used in prompts
    target_language: String,
}

impl TranslationService {
    /// Create a translation service from the application configuration.
    ///
    /// Language codes are resolved to English names here so prompt building
    /// never fails later.
    pub fn from_config(config: &Config) -> Result<Self> {
        let source_language = crate::language_utils::get_language_name(&config.source_language)?;
        let target_language = crate::language_utils::get_language_name(&config.target_language)?;
        Self::new(config.translation.clone(), source_language, target_language)
    }

    /// Create a translation service with explicit language names
    pub fn new(
        config: TranslationConfig,
        source_language: impl Into<String>,
        target_language: impl Into<String>,
    ) -> Result<Self> {
        let timeout_secs = config.get_timeout_secs();
        let provider = match config.provider {
            TranslationProvider::Ollama => {
                ProviderClient::Ollama(Ollama::new(config.get_endpoint(), timeout_secs))
            }
            TranslationProvider::OpenAI => ProviderClient::OpenAI(OpenAI::new(
                config.get_api_key(),
                config.get_endpoint(),
                timeout_secs,
            )),
            TranslationProvider::Anthropic => ProviderClient::Anthropic(Anthropic::new(
                config.get_api_key(),
                config.get_endpoint(),
                timeout_secs,
            )),
        };

        Ok(Self {
            provider,
            config,
            source_language: source_language.into(),
            target_language: target_language.into(),
        })
    }

    /// Build the system prompt from the configured template
    fn system_prompt(&self) -> String {
        self.config
            .common
            .system_prompt
            .replace("{source_language}", &self.source_language)
            .replace("{target_language}", &self.target_language)
    }

    /// Test the connection to the translation provider
    pub async fn test_connection(&self) -> Result<()> {
        match &self.provider {
            ProviderClient::Ollama(client) => {
                client
                    .version()
                    .await
                    .map_err(|e| anyhow!("Failed to connect to Ollama: {}", e))?;
            }
            // The hosted APIs have no cheap health endpoint, run a tiny translation
            ProviderClient::OpenAI(_) | ProviderClient::Anthropic(_) => {
                self.translate_text("Hello").await?;
            }
        }
        Ok(())
    }
}

/// Completion budget for Anthropic requests; generous for prose fragments
const MAX_COMPLETION_TOKENS: u32 = 4096;

#[async_trait]
impl TextTranslator for TranslationService {
    async fn translate_text(&self, text: &str) -> Result<String> {
        if text.trim().is_empty() {
            return Ok(String::new());
        }

        let system_prompt = self.system_prompt();
        let model = self.config.get_model();
        let temperature = self.config.common.temperature;

        match &self.provider {
            ProviderClient::Ollama(client) => {
                let request = GenerationRequest::new(model, text)
                    .system(&system_prompt)
                    .temperature(temperature);
                let response = client.generate(request).await?;
                Ok(response.response)
            }
            ProviderClient::OpenAI(client) => {
                let request = OpenAIRequest::new(model)
                    .add_message("system", &system_prompt)
                    .add_message("user", text)
                    .temperature(temperature);
                let response = client.complete(request).await?;
                let translated = OpenAI::extract_text(&response);
                if translated.is_empty() {
                    return Err(anyhow!("OpenAI returned an empty response"));
                }
                Ok(translated)
            }
            ProviderClient::Anthropic(client) => {
                let request = AnthropicRequest::new(&model, MAX_COMPLETION_TOKENS)
                    .system(&system_prompt)
                    .add_message("user", text)
                    .temperature(temperature);
                let response = client.complete(request).await?;
                Ok(Anthropic::extract_text(&response))
            }
        }
    }
}
